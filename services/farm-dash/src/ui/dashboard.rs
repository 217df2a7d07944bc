// services/farm-dash/src/ui/dashboard.rs
//
// Overview page: headline counters, hourly activity, farm health, activity log

use ratatui::{prelude::*, widgets::*};

use super::{colors, panel, stat_box, tone_color};
use crate::state::DashboardState;

pub fn draw(frame: &mut Frame, area: Rect, state: &DashboardState) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5),  // Stats
            Constraint::Length(10), // Hourly activity
            Constraint::Min(8),     // Farms + Activity
        ])
        .split(area);

    draw_stats(frame, rows[0], state);
    draw_hourly_activity(frame, rows[1], state);

    let bottom = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(rows[2]);

    draw_farm_health(frame, bottom[0], state);
    draw_activity_log(frame, bottom[1], state);
}

fn draw_stats(frame: &mut Frame, area: Rect, state: &DashboardState) {
    let summary = &state.summary;
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 4); 4])
        .split(area);

    stat_box(
        frame,
        chunks[0],
        "TOPLAM ÇİFTLİK",
        &summary.total_farms.to_string(),
        &format!("{:.1} ha toplam alan", summary.total_area),
        colors::WHITE,
    );
    stat_box(
        frame,
        chunks[1],
        "SAĞLIKLI",
        &format!("{}", summary.healthy_farms),
        &format!("%{} sağlıklı", summary.healthy_percent),
        colors::SUCCESS,
    );
    stat_box(
        frame,
        chunks[2],
        "UYARI / KRİTİK",
        &summary.alert_farms.to_string(),
        "dikkat gerektiriyor",
        if summary.alert_farms > 0 { colors::WARNING } else { colors::SILVER },
    );
    stat_box(
        frame,
        chunks[3],
        "ORT. SICAKLIK",
        &format!("{:.1} °C", summary.average_temperature),
        "tüm çiftlikler",
        colors::SAND,
    );
}

fn draw_hourly_activity(frame: &mut Frame, area: Rect, state: &DashboardState) {
    let bars: Vec<Bar> = state
        .hourly_activity
        .iter()
        .enumerate()
        .map(|(hour, value)| {
            Bar::default()
                .value(value.round().max(0.0) as u64)
                .label(Line::from(format!("{:02}", hour)))
                .text_value(String::new())
        })
        .collect();

    let chart = BarChart::default()
        .block(panel("SAATLİK AKTİVİTE"))
        .data(BarGroup::default().bars(&bars))
        .bar_width(3)
        .bar_gap(1)
        .bar_style(Style::default().fg(colors::TEAL))
        .label_style(Style::default().fg(colors::SILVER));

    frame.render_widget(chart, area);
}

fn draw_farm_health(frame: &mut Frame, area: Rect, state: &DashboardState) {
    let rows: Vec<Row> = state
        .farm_list()
        .iter()
        .map(|farm| {
            let color = tone_color(farm.status.tone());
            Row::new(vec![
                Cell::from(Span::styled(farm.status.label(), Style::default().fg(color).bold())),
                Cell::from(Span::styled(farm.name.as_str(), Style::default().fg(colors::WHITE))),
                Cell::from(Span::styled(
                    format!("{:.1} °C", farm.sensors.temperature.value),
                    Style::default().fg(colors::SILVER),
                )),
                Cell::from(Span::styled(
                    format!("pH {:.1}", farm.sensors.ph.value),
                    Style::default().fg(colors::SILVER),
                )),
            ])
        })
        .collect();

    let table = Table::new(
        rows,
        [
            Constraint::Length(9),
            Constraint::Min(20),
            Constraint::Length(9),
            Constraint::Length(7),
        ],
    )
    .header(
        Row::new(vec!["DURUM", "ÇİFTLİK", "SICAKLIK", "PH"])
            .style(Style::default().fg(colors::SAND).bold())
            .bottom_margin(1),
    )
    .block(panel("ÇİFTLİK DURUMU"))
    .row_highlight_style(Style::default().bg(colors::DEEP_TEAL).fg(colors::WHITE))
    .highlight_symbol("▶ ");

    let mut table_state = TableState::default().with_selected(Some(state.dashboard_selected));
    frame.render_stateful_widget(table, area, &mut table_state);
}

fn draw_activity_log(frame: &mut Frame, area: Rect, state: &DashboardState) {
    let logs: Vec<Line> = state
        .activity_log
        .iter()
        .rev()
        .take(20)
        .map(|entry| {
            let (prefix, color) = match entry.level.as_str() {
                "ERROR" => ("[ERR]", colors::ERROR),
                "WARN" => ("[WRN]", colors::WARNING),
                "INFO" => ("[INF]", colors::SUCCESS),
                _ => ("[---]", colors::SILVER),
            };

            Line::from(vec![
                Span::styled(
                    format!("{} ", entry.timestamp.format("%H:%M:%S")),
                    Style::default().fg(colors::SILVER).add_modifier(Modifier::DIM),
                ),
                Span::styled(format!("{} ", prefix), Style::default().fg(color)),
                Span::styled(entry.message.as_str(), Style::default().fg(colors::WHITE)),
            ])
        })
        .collect();

    let paragraph = Paragraph::new(logs)
        .block(panel("ETKİNLİK GÜNLÜĞÜ"))
        .wrap(Wrap { trim: true });

    frame.render_widget(paragraph, area);
}
