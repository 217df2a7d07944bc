// services/farm-dash/src/ui/login.rs
//
// Splash while the session starts, and the sign-in prompt

use chrono::Local;
use ratatui::{prelude::*, widgets::*};

use super::{centered_rect, colors};
use crate::state::DashboardState;

const SPINNER: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

fn brand_block() -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(colors::TEAL))
        .style(Style::default().bg(colors::BG_PANEL))
}

fn brand_lines() -> Vec<Line<'static>> {
    vec![
        Line::from(Span::styled(
            "🌊 DENİZ YOSUNU ÇİFTLİK İZLEME",
            Style::default().fg(colors::TEAL).bold(),
        )),
        Line::from(Span::styled(
            "Yapay zeka destekli akuakültür paneli",
            Style::default().fg(colors::SEAFOAM).italic(),
        )),
        Line::from(""),
    ]
}

pub fn draw_loading(frame: &mut Frame, area: Rect, _state: &DashboardState) {
    let frame_idx = (Local::now().timestamp_subsec_millis() / 100) as usize % SPINNER.len();

    let mut lines = brand_lines();
    lines.push(Line::from(vec![
        Span::styled(SPINNER[frame_idx], Style::default().fg(colors::SAND)),
        Span::styled(" Yükleniyor...", Style::default().fg(colors::WHITE)),
    ]));

    let popup = centered_rect(50, 7, area);
    frame.render_widget(Clear, popup);
    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(brand_block()),
        popup,
    );
}

pub fn draw_login(frame: &mut Frame, area: Rect, state: &DashboardState) {
    let mut lines = brand_lines();
    lines.push(Line::from(vec![
        Span::styled("Kullanıcı: ", Style::default().fg(colors::SILVER)),
        Span::styled(state.user.name.as_str(), Style::default().fg(colors::WHITE).bold()),
    ]));
    lines.push(Line::from(Span::styled(
        state.user.email.as_str(),
        Style::default().fg(colors::SILVER).add_modifier(Modifier::DIM),
    )));
    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::styled(" ENTER ", Style::default().fg(colors::BG_DARK).bg(colors::TEAL).bold()),
        Span::styled(" Giriş yap   ", Style::default().fg(colors::WHITE)),
        Span::styled(" Q ", Style::default().fg(colors::BG_DARK).bg(colors::SILVER).bold()),
        Span::styled(" Çıkış", Style::default().fg(colors::WHITE)),
    ]));

    let popup = centered_rect(50, 10, area);
    frame.render_widget(Clear, popup);
    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(brand_block().title(Span::styled(
                " GİRİŞ ",
                Style::default().fg(colors::WHITE).bg(colors::DEEP_TEAL).bold(),
            ))),
        popup,
    );
}
