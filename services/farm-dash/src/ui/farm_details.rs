// services/farm-dash/src/ui/farm_details.rs
//
// Single farm: identity, live sensors, history chart, images, AI suggestions

use ratatui::{prelude::*, widgets::*};

use farmkit::types::{Farm, SuggestionStatus};

use super::{chart_points, colors, panel, stat_box, tone_color, value_bounds};
use crate::state::DashboardState;

pub fn draw(frame: &mut Frame, area: Rect, state: &DashboardState, farm: &Farm) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5), // Key metrics
            Constraint::Min(10),   // Info + sensors + chart
            Constraint::Length(8), // Images + suggestions
        ])
        .split(area);

    draw_key_metrics(frame, rows[0], state);

    let middle = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(30),
            Constraint::Percentage(25),
            Constraint::Percentage(45),
        ])
        .split(rows[1]);

    draw_info(frame, middle[0], farm);
    draw_sensors(frame, middle[1], state, farm);

    let charts = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(middle[2]);

    draw_history(frame, charts[0], state);
    draw_growth_trend(frame, charts[1], state);

    let bottom = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(rows[2]);

    draw_images(frame, bottom[0], state, farm);
    draw_suggestions(frame, bottom[1], farm);
}

fn draw_key_metrics(frame: &mut Frame, area: Rect, state: &DashboardState) {
    let Some(metrics) = &state.details.key_metrics else {
        return;
    };

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 5); 5])
        .split(area);

    stat_box(frame, chunks[0], "ORT. BÜYÜME", &format!("{:.1}%", metrics.average_growth), "günlük", colors::SEAFOAM);
    stat_box(frame, chunks[1], "VERİMLİLİK", &format!("{:.1}%", metrics.efficiency), "işletme", colors::WHITE);
    stat_box(frame, chunks[2], "SAĞLIK ENDEKSİ", &format!("{:.1}/10", metrics.health_index), "genel", colors::SUCCESS);
    stat_box(
        frame,
        chunks[3],
        "TAHMİNİ HASAT",
        &format!("{:.1} ton", metrics.estimated_harvest),
        "bu dönem",
        colors::SAND,
    );
    stat_box(frame, chunks[4], "SU KALİTESİ", &format!("{:.1}", metrics.water_quality), "endeks", colors::TEAL);
}

fn draw_info(frame: &mut Frame, area: Rect, farm: &Farm) {
    let label = |text: &'static str| Span::styled(text, Style::default().fg(colors::SILVER));
    let value = |text: String| Span::styled(text, Style::default().fg(colors::WHITE));

    let lines = vec![
        Line::from(vec![
            label("Durum: "),
            Span::styled(
                farm.status.label(),
                Style::default().fg(tone_color(farm.status.tone())).bold(),
            ),
        ]),
        Line::from(vec![label("Tür: "), value(farm.species.clone())]),
        Line::from(vec![label("Alan: "), value(format!("{:.1} hektar", farm.area))]),
        Line::from(vec![label("Derinlik: "), value(farm.depth.clone())]),
        Line::from(vec![
            label("Kuruluş: "),
            value(farm.established_date.format("%d.%m.%Y").to_string()),
        ]),
        Line::from(vec![label("Okyanus: "), value(farm.location.ocean.clone())]),
        Line::from(vec![
            label("Konum: "),
            value(format!(
                "{:.4}, {:.4}",
                farm.location.coordinates.lat, farm.location.coordinates.lng
            )),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            farm.location.address.as_str(),
            Style::default().fg(colors::SILVER).add_modifier(Modifier::DIM),
        )),
    ];

    frame.render_widget(
        Paragraph::new(lines)
            .wrap(Wrap { trim: true })
            .block(panel("ÇİFTLİK BİLGİLERİ")),
        area,
    );
}

fn draw_sensors(frame: &mut Frame, area: Rect, state: &DashboardState, farm: &Farm) {
    let mut lines: Vec<Line> = farm
        .sensors
        .iter()
        .map(|(channel, reading)| {
            let selected = channel == state.details.channel;
            let marker = if selected { "▶ " } else { "  " };
            Line::from(vec![
                Span::styled(marker, Style::default().fg(colors::SAND)),
                Span::styled(format!("{:<18}", channel.label()), Style::default().fg(colors::SILVER)),
                Span::styled(
                    format!("{:>6.1} {}", reading.value, channel.unit()),
                    Style::default().fg(tone_color(reading.status.tone())).bold(),
                ),
                Span::raw(" "),
                Span::raw(reading.status.icon()),
            ])
        })
        .collect();

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        format!("Son güncelleme {}", farm.sensors.ph.last_update.format("%d.%m %H:%M")),
        Style::default().fg(colors::SILVER).add_modifier(Modifier::DIM),
    )));

    frame.render_widget(Paragraph::new(lines).block(panel("SENSÖRLER")), area);
}

fn draw_history(frame: &mut Frame, area: Rect, state: &DashboardState) {
    let channel = state.details.channel;
    let history = &state.details.history;
    let points = chart_points(history.iter().map(|r| r.get(channel)));
    let [lo, hi] = value_bounds(&points);

    let x_labels: Vec<Span> = match (history.first(), history.last()) {
        (Some(first), Some(last)) => vec![
            Span::raw(first.timestamp.format("%d.%m %H:%M").to_string()),
            Span::raw(last.timestamp.format("%d.%m %H:%M").to_string()),
        ],
        _ => Vec::new(),
    };

    let dataset = Dataset::default()
        .name(channel.label())
        .marker(symbols::Marker::Braille)
        .graph_type(GraphType::Line)
        .style(Style::default().fg(colors::TEAL))
        .data(&points);

    let chart = Chart::new(vec![dataset])
        .block(panel(format!("{} GEÇMİŞİ ({} ölçüm)", channel.label().to_uppercase(), history.len())))
        .x_axis(
            Axis::default()
                .style(Style::default().fg(colors::SILVER))
                .bounds([0.0, points.len().saturating_sub(1).max(1) as f64])
                .labels(x_labels),
        )
        .y_axis(
            Axis::default()
                .style(Style::default().fg(colors::SILVER))
                .bounds([lo, hi])
                .labels(vec![Span::raw(format!("{:.1}", lo)), Span::raw(format!("{:.1}", hi))]),
        );

    frame.render_widget(chart, area);
}

fn draw_growth_trend(frame: &mut Frame, area: Rect, state: &DashboardState) {
    let bars: Vec<Bar> = state
        .details
        .trend
        .iter()
        .map(|point| {
            // Bar heights are in hundredths
            Bar::default()
                .value((point.value.max(0.0) * 100.0).round() as u64)
                .label(Line::from(point.label.clone()))
                .text_value(format!("{:.1}", point.value))
        })
        .collect();

    let chart = BarChart::default()
        .block(panel("7 GÜNLÜK BÜYÜME (%)"))
        .data(BarGroup::default().bars(&bars))
        .bar_width(5)
        .bar_gap(1)
        .bar_style(Style::default().fg(colors::SEAFOAM))
        .value_style(Style::default().fg(colors::BG_DARK).bg(colors::SEAFOAM))
        .label_style(Style::default().fg(colors::SILVER));

    frame.render_widget(chart, area);
}

/// Images are never fetched; each slot shows its placeholder.
fn draw_images(frame: &mut Frame, area: Rect, state: &DashboardState, farm: &Farm) {
    let mut lines = Vec::new();
    for image in state.details.captures.iter().chain(&farm.images) {
        lines.push(Line::from(vec![
            Span::styled("🖼  ", Style::default().fg(colors::SILVER)),
            Span::styled(image.description.as_str(), Style::default().fg(colors::WHITE)),
            Span::styled(
                format!("  {}", image.timestamp.format("%d.%m.%Y")),
                Style::default().fg(colors::SILVER),
            ),
        ]));
        lines.push(Line::from(Span::styled(
            format!("   {}", image.url),
            Style::default().fg(colors::SILVER).add_modifier(Modifier::DIM),
        )));
    }
    if lines.is_empty() {
        lines.push(Line::from(Span::styled(
            "Henüz görüntü yok",
            Style::default().fg(colors::SILVER),
        )));
    }

    frame.render_widget(
        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .block(panel(format!(
                "GÖRÜNTÜLER ({})",
                farm.images.len() + state.details.captures.len()
            ))),
        area,
    );
}

fn draw_suggestions(frame: &mut Frame, area: Rect, farm: &Farm) {
    let mut lines = Vec::new();
    for action in &farm.actions {
        let (badge, color) = match action.status {
            SuggestionStatus::Pending => ("BEKLİYOR", colors::WARNING),
            SuggestionStatus::Completed => ("TAMAMLANDI", colors::SUCCESS),
            SuggestionStatus::Dismissed => ("REDDEDİLDİ", colors::SILVER),
        };
        let confidence = action
            .confidence
            .map(|c| format!("  güven %{}", c))
            .unwrap_or_default();

        lines.push(Line::from(vec![
            Span::styled(format!("[{}] ", badge), Style::default().fg(color).bold()),
            Span::styled(action.description.as_str(), Style::default().fg(colors::WHITE)),
            Span::styled(confidence, Style::default().fg(colors::SILVER)),
        ]));
        lines.push(Line::from(Span::styled(
            format!("   🤖 {}", action.ai_suggestion),
            Style::default().fg(colors::SEAFOAM),
        )));
    }

    frame.render_widget(
        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .block(panel("YAPAY ZEKA ÖNERİLERİ")),
        area,
    );
}
