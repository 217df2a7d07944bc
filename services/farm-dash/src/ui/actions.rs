// services/farm-dash/src/ui/actions.rs
//
// Task board: status counters, filters and the task table

use ratatui::{prelude::*, widgets::*};

use farmkit::actions::{ActionStatus, Priority};

use super::{colors, panel};
use crate::state::DashboardState;

pub fn draw(frame: &mut Frame, area: Rect, state: &DashboardState) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Counters
            Constraint::Length(3), // Filters
            Constraint::Min(6),    // Table
        ])
        .split(area);

    draw_counters(frame, rows[0], state);
    draw_filters(frame, rows[1], state);
    draw_table(frame, rows[2], state);
}

fn status_color(status: ActionStatus) -> Color {
    match status {
        ActionStatus::Bekleyen => colors::SAND,
        ActionStatus::DevamEden => colors::TEAL,
        ActionStatus::Tamamlandi => colors::SUCCESS,
        ActionStatus::Gecikti => colors::ERROR,
    }
}

fn priority_color(priority: Priority) -> Color {
    match priority {
        Priority::Acil => colors::ERROR,
        Priority::Yuksek => colors::WARNING,
        Priority::Orta => colors::SAND,
        Priority::Dusuk => colors::SILVER,
    }
}

fn draw_counters(frame: &mut Frame, area: Rect, state: &DashboardState) {
    let board = &state.actions.board;
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 5); 5])
        .split(area);

    let total = Paragraph::new(Line::from(vec![
        Span::styled("Toplam ", Style::default().fg(colors::SILVER)),
        Span::styled(board.len().to_string(), Style::default().fg(colors::WHITE).bold()),
    ]))
    .alignment(Alignment::Center)
    .block(panel(""));
    frame.render_widget(total, chunks[0]);

    for (chunk, status) in chunks[1..].iter().zip(ActionStatus::ALL) {
        let counter = Paragraph::new(Line::from(vec![
            Span::styled(format!("{} ", status.label()), Style::default().fg(colors::SILVER)),
            Span::styled(
                board.count(status).to_string(),
                Style::default().fg(status_color(status)).bold(),
            ),
        ]))
        .alignment(Alignment::Center)
        .block(panel(""));
        frame.render_widget(counter, *chunk);
    }
}

fn draw_filters(frame: &mut Frame, area: Rect, state: &DashboardState) {
    let query = &state.actions.query;
    let spans = vec![
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
    ];

    frame.render_widget(Paragraph::new(Line::from(spans)).block(panel("FİLTRELER")), area);
}

fn progress_bar(progress: u8, width: usize) -> String {
    let filled = (progress.min(100) as usize * width) / 100;
    format!("{}{} {:>3}%", "█".repeat(filled), "░".repeat(width - filled), progress)
}

fn draw_table(frame: &mut Frame, area: Rect, state: &DashboardState) {
    let actions = state.visible_actions();

    if actions.is_empty() {
        let empty = Paragraph::new(Line::from(Span::styled(
            "Filtrelerle eşleşen görev yok",
            Style::default().fg(colors::SILVER),
        )))
        .alignment(Alignment::Center)
        .block(panel("GÖREVLER"));
        frame.render_widget(empty, area);
        return;
    }

    let rows: Vec<Row> = actions
        .iter()
        .map(|action| {
            Row::new(vec![
                Cell::from(action.kind.icon()),
                Cell::from(Span::styled(action.title.as_str(), Style::default().fg(colors::WHITE))),
                Cell::from(Span::styled(
                    action.priority.label(),
                    Style::default().fg(priority_color(action.priority)).bold(),
                )),
                Cell::from(Span::styled(
                    action.status.label(),
                    Style::default().fg(status_color(action.status)),
                )),
                Cell::from(Span::styled(
                    progress_bar(action.progress, 10),
                    Style::default().fg(status_color(action.status)),
                )),
                Cell::from(action.farm.as_str()),
                Cell::from(action.assigned_to.as_str()),
                Cell::from(action.due_date.format("%d.%m.%Y").to_string()),
            ])
            .style(Style::default().fg(colors::SILVER))
        })
        .collect();

    let table = Table::new(
        rows,
        [
            Constraint::Length(3),
            Constraint::Min(24),
            Constraint::Length(7),
            Constraint::Length(13),
            Constraint::Length(16),
            Constraint::Length(20),
            Constraint::Length(14),
            Constraint::Length(11),
        ],
    )
    .header(
        Row::new(vec!["", "GÖREV", "ÖNCELİK", "DURUM", "İLERLEME", "ÇİFTLİK", "SORUMLU", "BİTİŞ"])
            .style(Style::default().fg(colors::SAND).bold())
            .bottom_margin(1),
    )
    .block(panel(format!("GÖREVLER ({})", actions.len())))
    .row_highlight_style(Style::default().bg(colors::DEEP_TEAL).fg(colors::WHITE))
    .highlight_symbol("▶ ");

    let mut table_state = TableState::default().with_selected(Some(state.actions.selected));
    frame.render_stateful_widget(table, area, &mut table_state);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn progress_bar_fills_proportionally() {
        assert_eq!(progress_bar(0, 10), "░░░░░░░░░░   0%");
        assert_eq!(progress_bar(50, 10), "█████░░░░░  50%");
        assert_eq!(progress_bar(100, 10), "██████████ 100%");
    }
}
