// services/farm-dash/src/ui/farms.rs

use ratatui::{prelude::*, widgets::*};

use farmkit::listing::farm_status_counts;

use super::{colors, panel, tone_color};
use crate::state::DashboardState;

pub fn draw(frame: &mut Frame, area: Rect, state: &DashboardState) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(6)])
        .split(area);

    draw_filters(frame, rows[0], state);
    draw_table(frame, rows[1], state);
}

fn draw_filters(frame: &mut Frame, area: Rect, state: &DashboardState) {
    let query = &state.farms.query;
    let mut spans = vec![
        Span::styled("Ara: ", Style::default().fg(colors::SILVER)),
        Span::styled(
            if query.search.is_empty() { "-".to_string() } else { query.search.clone() },
            Style::default().fg(colors::WHITE).bold(),
        ),
        Span::raw("  |  "),
        Span::styled("Durum: ", Style::default().fg(colors::SILVER)),
        Span::styled(
            query.status.map_or("Tümü", |s| s.label()),
            Style::default().fg(colors::WHITE).bold(),
        ),
        Span::raw("  |  "),
        Span::styled("Sırala: ", Style::default().fg(colors::SILVER)),
        Span::styled(query.sort.label(), Style::default().fg(colors::WHITE).bold()),
        Span::raw("  |  "),
    ];

    for (status, count) in farm_status_counts(state.farm_list()) {
        spans.push(Span::styled(
            format!("{} {}  ", status.label(), count),
            Style::default().fg(tone_color(status.tone())),
        ));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)).block(panel("FİLTRELER")), area);
}

fn draw_table(frame: &mut Frame, area: Rect, state: &DashboardState) {
    let farms = state.visible_farms();

    if farms.is_empty() {
        let empty = Paragraph::new(Line::from(Span::styled(
            "Aramanızla eşleşen çiftlik bulunamadı",
            Style::default().fg(colors::SILVER),
        )))
        .alignment(Alignment::Center)
        .block(panel("ÇİFTLİKLER"));
        frame.render_widget(empty, area);
        return;
    }

    let rows: Vec<Row> = farms
        .iter()
        .map(|farm| {
            Row::new(vec![
                Cell::from(Span::styled(
                    farm.status.label(),
                    Style::default().fg(tone_color(farm.status.tone())).bold(),
                )),
                Cell::from(Span::styled(farm.name.as_str(), Style::default().fg(colors::WHITE))),
                Cell::from(Span::styled(farm.species.as_str(), Style::default().fg(colors::SEAFOAM).italic())),
                Cell::from(format!("{:.1} ha", farm.area)),
                Cell::from(farm.location.ocean.as_str()),
                Cell::from(farm.established_date.format("%d.%m.%Y").to_string()),
            ])
            .style(Style::default().fg(colors::SILVER))
        })
        .collect();

    let table = Table::new(
        rows,
        [
            Constraint::Length(9),
            Constraint::Min(24),
            Constraint::Length(22),
            Constraint::Length(8),
            Constraint::Length(18),
            Constraint::Length(11),
        ],
    )
    .header(
        Row::new(vec!["DURUM", "ÇİFTLİK", "TÜR", "ALAN", "OKYANUS", "KURULUŞ"])
            .style(Style::default().fg(colors::SAND).bold())
            .bottom_margin(1),
    )
    .block(panel(&format!("ÇİFTLİKLER ({})", farms.len())))
    .row_highlight_style(Style::default().bg(colors::DEEP_TEAL).fg(colors::WHITE))
    .highlight_symbol("▶ ");

    let mut table_state = TableState::default().with_selected(Some(state.farms.selected));
    frame.render_stateful_widget(table, area, &mut table_state);
}
