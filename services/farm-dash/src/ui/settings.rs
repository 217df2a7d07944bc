// services/farm-dash/src/ui/settings.rs
//
// Settings sections. Nothing here is persisted.

use ratatui::{prelude::*, widgets::*};

use farmkit::settings::{NotificationChannel, SettingsTab};

use super::{colors, panel};
use crate::state::DashboardState;

pub fn draw(frame: &mut Frame, area: Rect, state: &DashboardState) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(6)])
        .split(area);

    let selected = SettingsTab::ALL
        .iter()
        .position(|t| *t == state.settings.tab)
        .unwrap_or(0);

    let tabs = Tabs::new(SettingsTab::ALL.iter().map(|t| t.label()))
        .block(panel("AYARLAR"))
        .select(selected)
        .style(Style::default().fg(colors::SILVER))
        .highlight_style(Style::default().fg(colors::WHITE).bg(colors::DEEP_TEAL).bold())
        .divider("│");
    frame.render_widget(tabs, rows[0]);

    let body = match state.settings.tab {
        SettingsTab::Profil => profile_section(state),
        SettingsTab::Bildirimler => notifications_section(state),
        SettingsTab::Guvenlik => security_section(),
        SettingsTab::Tercihler => preferences_section(state),
        SettingsTab::Api => api_section(),
    };

    frame.render_widget(
        Paragraph::new(body)
            .wrap(Wrap { trim: false })
            .block(panel(state.settings.tab.label().to_uppercase())),
        rows[1],
    );
}

fn field(name: &'static str, value: impl Into<String>) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{:<16}", name), Style::default().fg(colors::SILVER)),
        Span::styled(value.into(), Style::default().fg(colors::WHITE)),
    ])
}

fn profile_section(state: &DashboardState) -> Vec<Line<'static>> {
    let user = &state.user;
    vec![
        field("Ad Soyad", user.name.clone()),
        field("E-posta", user.email.clone()),
        field("Telefon", user.phone.clone()),
        field("Rol", user.role.clone()),
        field("Kuruluş", user.organization.clone()),
    ]
}

fn notifications_section(state: &DashboardState) -> Vec<Line<'static>> {
    let prefs = &state.settings.notifications;
    let mut lines: Vec<Line> = NotificationChannel::ALL
        .iter()
        .enumerate()
        .map(|(i, channel)| {
            let cursor = if i == state.settings_cursor { "▶ " } else { "  " };
            let (mark, color) = if prefs.enabled(*channel) {
                ("[✓] Açık  ", colors::SUCCESS)
            } else {
                ("[ ] Kapalı", colors::SILVER)
            };
            Line::from(vec![
                Span::styled(cursor, Style::default().fg(colors::SAND)),
                Span::styled(mark, Style::default().fg(color).bold()),
                Span::raw("  "),
                Span::styled(channel.label(), Style::default().fg(colors::WHITE)),
            ])
        })
        .collect();

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "↑/↓ seç, ENTER değiştir",
        Style::default().fg(colors::SILVER).add_modifier(Modifier::DIM),
    )));
    lines
}

fn security_section() -> Vec<Line<'static>> {
    vec![
        field("Parola", "••••••••"),
        field("İki adımlı doğr.", "Kapalı"),
        field("Son giriş", "Bu oturum"),
        Line::from(""),
        Line::from(Span::styled(
            "Parola değişikliği bu sürümde desteklenmiyor",
            Style::default().fg(colors::SILVER).add_modifier(Modifier::DIM),
        )),
    ]
}

fn preferences_section(state: &DashboardState) -> Vec<Line<'static>> {
    let prefs = &state.settings.preferences;
    vec![
        field("Tema", prefs.theme.label()),
        field("Dil", prefs.language.clone()),
        field("Saat dilimi", prefs.timezone.clone()),
        Line::from(""),
        Line::from(Span::styled(
            "T tema değiştir",
            Style::default().fg(colors::SILVER).add_modifier(Modifier::DIM),
        )),
    ]
}

fn api_section() -> Vec<Line<'static>> {
    vec![
        field("API anahtarı", "sk-••••••••••••"),
        field("Uç nokta", "/api/v1"),
        field("Kota", "1000 istek/gün"),
    ]
}
