// services/farm-dash/src/ui/reports.rs

use ratatui::{prelude::*, widgets::*};

use farmkit::reports::ReportStatus;

use super::{colors, panel};
use crate::state::DashboardState;

pub fn draw(frame: &mut Frame, area: Rect, state: &DashboardState) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Length(3), Constraint::Min(6)])
        .split(area);

    draw_totals(frame, rows[0], state);
    draw_filters(frame, rows[1], state);
    draw_table(frame, rows[2], state);
}

fn status_color(status: ReportStatus) -> Color {
    match status {
        ReportStatus::Taslak => colors::SILVER,
        ReportStatus::Bekleyen => colors::WARNING,
        ReportStatus::Tamamlandi => colors::SUCCESS,
        ReportStatus::Arsivlendi => colors::SAND,
    }
}

fn draw_totals(frame: &mut Frame, area: Rect, state: &DashboardState) {
    let shelf = &state.reports.shelf;
    let mut spans = vec![
        Span::styled("Toplam ", Style::default().fg(colors::SILVER)),
        Span::styled(shelf.len().to_string(), Style::default().fg(colors::WHITE).bold()),
        Span::raw("  |  "),
    ];
    for status in ReportStatus::ALL {
        spans.push(Span::styled(
            format!("{} {}  ", status.label(), shelf.count(status)),
            Style::default().fg(status_color(status)),
        ));
    }
    spans.push(Span::raw("|  "));
    spans.push(Span::styled("İndirme ", Style::default().fg(colors::SILVER)));
    spans.push(Span::styled(
        shelf.total_downloads().to_string(),
        Style::default().fg(colors::TEAL).bold(),
    ));

    frame.render_widget(Paragraph::new(Line::from(spans)).block(panel("ÖZET")), area);
}

fn draw_filters(frame: &mut Frame, area: Rect, state: &DashboardState) {
    let query = &state.reports.query;
    let field = |name: &'static str, value: String| {
        vec![
            Span::styled(name, Style::default().fg(colors::SILVER)),
            Span::styled(value, Style::default().fg(colors::WHITE).bold()),
            Span::raw("  |  "),
        ]
    };

    let mut spans = Vec::new();
    spans.extend(field(
        "Ara: ",
        if query.search.is_empty() { "-".to_string() } else { query.search.clone() },
    ));
    spans.extend(field("Tür: ", query.kind.map_or("Tümü", |k| k.label()).to_string()));
    spans.extend(field("Kategori: ", query.category.map_or("Tümü", |c| c.label()).to_string()));
    spans.extend(field("Durum: ", query.status.map_or("Tümü", |s| s.label()).to_string()));
    spans.push(Span::styled("Sırala: ", Style::default().fg(colors::SILVER)));
    spans.push(Span::styled(query.sort.label(), Style::default().fg(colors::WHITE).bold()));

    frame.render_widget(Paragraph::new(Line::from(spans)).block(panel("FİLTRELER")), area);
}

fn draw_table(frame: &mut Frame, area: Rect, state: &DashboardState) {
    let reports = state.visible_reports();

    if reports.is_empty() {
        let empty = Paragraph::new(Line::from(Span::styled(
            "Filtrelerle eşleşen rapor yok",
            Style::default().fg(colors::SILVER),
        )))
        .alignment(Alignment::Center)
        .block(panel("RAPORLAR"));
        frame.render_widget(empty, area);
        return;
    }

    let rows: Vec<Row> = reports
        .iter()
        .map(|report| {
            Row::new(vec![
                Cell::from(report.kind.icon()),
                Cell::from(Span::styled(report.title.as_str(), Style::default().fg(colors::WHITE))),
                Cell::from(report.kind.label()),
                Cell::from(report.category.label()),
                Cell::from(Span::styled(
                    report.status.label(),
                    Style::default().fg(status_color(report.status)).bold(),
                )),
                Cell::from(report.generated_date.format("%d.%m.%Y").to_string()),
                Cell::from(report.size.as_str()),
                Cell::from(report.download_count.to_string()),
                Cell::from(report.farms.len().to_string()),
            ])
            .style(Style::default().fg(colors::SILVER))
        })
        .collect();

    let table = Table::new(
        rows,
        [
            Constraint::Length(3),
            Constraint::Min(26),
            Constraint::Length(11),
            Constraint::Length(9),
            Constraint::Length(11),
            Constraint::Length(11),
            Constraint::Length(8),
            Constraint::Length(8),
            Constraint::Length(8),
        ],
    )
    .header(
        Row::new(vec!["", "RAPOR", "TÜR", "KATEGORİ", "DURUM", "TARİH", "BOYUT", "İNDİRME", "ÇİFTLİK"])
            .style(Style::default().fg(colors::SAND).bold())
            .bottom_margin(1),
    )
    .block(panel(format!("RAPORLAR ({})", reports.len())))
    .row_highlight_style(Style::default().bg(colors::DEEP_TEAL).fg(colors::WHITE))
    .highlight_symbol("▶ ");

    let mut table_state = TableState::default().with_selected(Some(state.reports.selected));
    frame.render_stateful_widget(table, area, &mut table_state);
}
