// services/farm-dash/src/ui/profile.rs
//
// Account card, usage counters and the profile image slot

use ratatui::{prelude::*, widgets::*};

use farmkit::profile_image::{ALLOWED_TYPES, MAX_IMAGE_BYTES};

use super::{colors, format_number, panel, stat_box};
use crate::state::DashboardState;

pub fn draw(frame: &mut Frame, area: Rect, state: &DashboardState) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(5), Constraint::Min(8)])
        .split(area);

    draw_stats(frame, rows[0], state);

    let bottom = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(rows[1]);

    draw_account(frame, bottom[0], state);
    draw_avatar(frame, bottom[1], state);
}

fn draw_stats(frame: &mut Frame, area: Rect, state: &DashboardState) {
    let stats = &state.user.stats;
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 4); 4])
        .split(area);

    stat_box(frame, chunks[0], "ÇİFTLİKLER", &stats.farms_managed.to_string(), "yönetilen", colors::TEAL);
    stat_box(
        frame,
        chunks[1],
        "GÖREVLER",
        &format_number(stats.actions_completed as f64),
        "tamamlanan",
        colors::SUCCESS,
    );
    stat_box(
        frame,
        chunks[2],
        "VERİ NOKTASI",
        &format_number(stats.data_points_collected as f64),
        "toplanan",
        colors::SEAFOAM,
    );
    stat_box(frame, chunks[3], "DEPOLAMA", &stats.storage_used, "kullanılan", colors::SAND);
}

fn draw_account(frame: &mut Frame, area: Rect, state: &DashboardState) {
    let user = &state.user;
    let row = |name: &'static str, value: String| {
        Line::from(vec![
            Span::styled(format!("{:<14}", name), Style::default().fg(colors::SILVER)),
            Span::styled(value, Style::default().fg(colors::WHITE)),
        ])
    };

    let lines = vec![
        Line::from(Span::styled(user.name.as_str(), Style::default().fg(colors::WHITE).bold())),
        Line::from(Span::styled(user.role.as_str(), Style::default().fg(colors::SEAFOAM).italic())),
        Line::from(""),
        row("E-posta", user.email.clone()),
        row("Telefon", user.phone.clone()),
        row("Kuruluş", user.organization.clone()),
        row("Üyelik", user.member_since.format("%d.%m.%Y").to_string()),
    ];

    frame.render_widget(
        Paragraph::new(lines)
            .wrap(Wrap { trim: true })
            .block(panel("HESAP")),
        area,
    );
}

fn draw_avatar(frame: &mut Frame, area: Rect, state: &DashboardState) {
    let image = &state.profile_image;

    let status = if image.is_uploading() {
        Span::styled("⏳ Yükleniyor...", Style::default().fg(colors::WARNING).bold())
    } else if image.is_default() {
        Span::styled("Varsayılan resim", Style::default().fg(colors::SILVER))
    } else {
        Span::styled("✓ Özel resim", Style::default().fg(colors::SUCCESS).bold())
    };

    let lines = vec![
        Line::from(status),
        Line::from(Span::styled(
            image.current(),
            Style::default().fg(colors::SILVER).add_modifier(Modifier::DIM),
        )),
        Line::from(""),
        Line::from(Span::styled(
            format!(
                "İzin verilen: {}  |  En fazla {} MB",
                ALLOWED_TYPES.join(", "),
                MAX_IMAGE_BYTES / (1024 * 1024)
            ),
            Style::default().fg(colors::SILVER),
        )),
    ];

    frame.render_widget(
        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .block(panel("PROFİL RESMİ")),
        area,
    );
}
