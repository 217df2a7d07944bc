// services/farm-dash/src/ui/analytics.rs
//
// KPIs, metric trend chart, 90-day history, per-farm performance and predictions

use ratatui::{prelude::*, widgets::*};

use farmkit::types::{AnalyticsSnapshot, Impact, TrendDirection, TrendStatus};

use super::{chart_points, colors, format_number, panel, tone_color};
use crate::state::DashboardState;

pub fn draw(frame: &mut Frame, area: Rect, state: &DashboardState) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(50), // KPIs + trend
            Constraint::Length(5),      // History
            Constraint::Min(8),         // Performance + predictions
        ])
        .split(area);

    let top = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(44), Constraint::Min(30)])
        .split(rows[0]);

    draw_kpis(frame, top[0], state);
    draw_trend(frame, top[1], state);
    draw_history(frame, rows[1], state);

    let bottom = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(rows[2]);

    draw_performance(frame, bottom[0], state);
    draw_predictions(frame, bottom[1], state);
}

fn draw_kpis(frame: &mut Frame, area: Rect, state: &DashboardState) {
    let rows: Vec<Row> = state
        .analytics
        .kpis
        .rows()
        .into_iter()
        .map(|(name, kpi)| {
            let unit = kpi.unit.as_deref().unwrap_or("");
            // Falling costs and energy are good news
            let good = match name {
                "Enerji Kullanımı" | "Bakım Maliyetleri" => kpi.trend == TrendDirection::Down,
                _ => kpi.trend == TrendDirection::Up,
            };
            let change_color = if good { colors::SUCCESS } else { colors::ERROR };

            Row::new(vec![
                Cell::from(Span::styled(name, Style::default().fg(colors::SILVER))),
                Cell::from(Span::styled(
                    format!("{} {}", format_number(kpi.current), unit),
                    Style::default().fg(colors::WHITE).bold(),
                )),
                Cell::from(Span::styled(
                    format!("{} {:+.1}%", kpi.trend.arrow(), kpi.change),
                    Style::default().fg(change_color),
                )),
            ])
        })
        .collect();

    let table = Table::new(
        rows,
        [Constraint::Length(18), Constraint::Length(11), Constraint::Length(10)],
    )
    .block(panel("ANAHTAR GÖSTERGELER"));

    frame.render_widget(table, area);
}

fn draw_trend(frame: &mut Frame, area: Rect, state: &DashboardState) {
    let analytics = &state.analytics;
    let metric = analytics.metric;
    let model = metric.model();

    let points = chart_points(analytics.trend.iter().map(|p| p.value));
    let baseline: Vec<(f64, f64)> = points.iter().map(|(x, _)| (*x, model.baseline())).collect();

    let datasets = vec![
        Dataset::default()
            .name(metric.name())
            .marker(symbols::Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(colors::TEAL))
            .data(&points),
        Dataset::default()
            .name("Referans")
            .marker(symbols::Marker::Dot)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(colors::SILVER))
            .data(&baseline),
    ];

    let lo = (model.baseline() - model.amplitude()).max(0.0);
    let hi = model.baseline() + model.amplitude();

    let x_labels: Vec<Span> = analytics
        .trend
        .iter()
        .filter(|p| !p.label.is_empty())
        .step_by(label_stride(analytics.trend.len()))
        .map(|p| Span::raw(p.label.clone()))
        .collect();

    let alerts = analytics
        .trend
        .iter()
        .filter(|p| p.status != Some(TrendStatus::Normal))
        .count();

    let title = format!(
        "{} ({}) · {} · {} sınır dışı",
        metric.name(),
        metric.unit(),
        analytics.range.name(),
        alerts
    );

    let chart = Chart::new(datasets)
        .block(panel(title))
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
                .labels(vec![
                    Span::raw(format!("{:.1}", lo)),
                    Span::raw(format!("{:.1}", model.baseline())),
                    Span::raw(format!("{:.1}", hi)),
                ]),
        );

    frame.render_widget(chart, area);
}

fn label_stride(points: usize) -> usize {
    match points {
        0..=8 => 1,
        9..=24 => 4,
        25..=30 => 5,
        _ => 1,
    }
}

fn draw_history(frame: &mut Frame, area: Rect, state: &DashboardState) {
    let history = &state.analytics.history;
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 3); 3])
        .split(area);

    let series: [(&str, fn(&AnalyticsSnapshot) -> f64, Color); 3] = [
        ("VERİMLİLİK", |s| s.productivity, colors::TEAL),
        ("BÜYÜME", |s| s.growth * 10.0, colors::SEAFOAM),
        ("GELİR", |s| s.revenue / 1_000.0, colors::SAND),
    ];

    for (chunk, (name, value, color)) in chunks.iter().zip(series) {
        let data: Vec<u64> = history.iter().map(|s| value(s).max(0.0).round() as u64).collect();
        let latest = history.last().map(value).unwrap_or_default();
        let title = format!("{} · {} GÜN · son {}", name, history.len(), format_number(latest));

        let sparkline = Sparkline::default()
            .block(panel(title))
            .data(&data)
            .style(Style::default().fg(color));
        frame.render_widget(sparkline, *chunk);
    }
}

fn draw_performance(frame: &mut Frame, area: Rect, state: &DashboardState) {
    let rows: Vec<Row> = state
        .analytics
        .performance
        .iter()
        .map(|p| {
            let trend_color = match p.trend {
                TrendDirection::Up => colors::SUCCESS,
                TrendDirection::Down => colors::ERROR,
            };
            Row::new(vec![
                Cell::from(Span::styled(p.farm_name.as_str(), Style::default().fg(colors::WHITE))),
                Cell::from(Span::styled(
                    p.status.label(),
                    Style::default().fg(tone_color(p.status.tone())),
                )),
                Cell::from(format!("{:.1}", p.performance)),
                Cell::from(format!("{:.1}%", p.efficiency)),
                Cell::from(format!("{:.2}", p.growth_rate)),
                Cell::from(Span::styled(
                    format!("{} {:.1}%", p.trend.arrow(), p.change),
                    Style::default().fg(trend_color),
                )),
            ])
            .style(Style::default().fg(colors::SILVER))
        })
        .collect();

    let table = Table::new(
        rows,
        [
            Constraint::Min(20),
            Constraint::Length(9),
            Constraint::Length(7),
            Constraint::Length(8),
            Constraint::Length(7),
            Constraint::Length(9),
        ],
    )
    .header(
        Row::new(vec!["ÇİFTLİK", "DURUM", "PERF.", "VERİM", "BÜYÜME", "DEĞİŞİM"])
            .style(Style::default().fg(colors::SAND).bold())
            .bottom_margin(1),
    )
    .block(panel("ÇİFTLİK PERFORMANSI"));

    frame.render_widget(table, area);
}

fn draw_predictions(frame: &mut Frame, area: Rect, state: &DashboardState) {
    let mut lines = Vec::new();
    for prediction in &state.analytics.predictions {
        let color = match prediction.impact {
            Impact::Positive => colors::SUCCESS,
            Impact::Warning => colors::WARNING,
            Impact::Neutral => colors::SILVER,
        };
        lines.push(Line::from(vec![
            Span::raw(format!("{} ", prediction.icon)),
            Span::styled(prediction.title.as_str(), Style::default().fg(color).bold()),
            Span::styled(
                format!("  %{} · {}", prediction.confidence, prediction.timeframe),
                Style::default().fg(colors::SILVER),
            ),
        ]));
        lines.push(Line::from(Span::styled(
            format!("   {}", prediction.description),
            Style::default().fg(colors::WHITE),
        )));
    }

    frame.render_widget(
        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .block(panel("YAPAY ZEKA TAHMİNLERİ")),
        area,
    );
}
