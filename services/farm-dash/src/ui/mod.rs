// services/farm-dash/src/ui/mod.rs
//
// Shell layout: sidebar, header, content page, footer, alert popup

use ratatui::{prelude::*, widgets::*};

use farmkit::router::{Page, Session, Tab};
use farmkit::types::StatusTone;

use crate::state::{DashboardState, InputMode};

mod actions;
mod analytics;
mod dashboard;
mod farm_details;
mod farms;
mod login;
mod profile;
mod reports;
mod settings;

// Color palette: Deep sea, Teal, Seafoam, Sand
pub mod colors {
    use ratatui::style::Color;

    pub const TEAL: Color = Color::Rgb(42, 161, 152);
    pub const DEEP_TEAL: Color = Color::Rgb(0, 95, 95);
    pub const SEAFOAM: Color = Color::Rgb(147, 224, 200);
    pub const WHITE: Color = Color::Rgb(253, 246, 227);
    pub const SILVER: Color = Color::Rgb(147, 161, 161);
    pub const SAND: Color = Color::Rgb(238, 203, 120);
    pub const BG_DARK: Color = Color::Rgb(0, 22, 34);
    pub const BG_PANEL: Color = Color::Rgb(7, 36, 48);
    pub const SUCCESS: Color = Color::Rgb(133, 153, 0);
    pub const WARNING: Color = Color::Rgb(255, 193, 37);
    pub const ERROR: Color = Color::Rgb(220, 50, 47);
}

pub fn draw(frame: &mut Frame, state: &DashboardState) {
    let area = frame.area();

    // Background
    frame.render_widget(
        Block::default().style(Style::default().bg(colors::BG_DARK)),
        area,
    );

    match state.router.session() {
        Session::Loading => login::draw_loading(frame, area, state),
        Session::SignedOut => login::draw_login(frame, area, state),
        Session::SignedIn => draw_shell(frame, area, state),
    }

    if let Some(alert) = &state.alert {
        draw_alert(frame, area, &alert.title, &alert.message);
    }
}

fn draw_shell(frame: &mut Frame, area: Rect, state: &DashboardState) {
    // Narrow terminals hide the sidebar unless the drawer is open
    let show_sidebar = area.width >= state.compact_width || state.router.drawer_open();
    let sidebar_width = if show_sidebar { 26 } else { 0 };

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(sidebar_width), Constraint::Min(40)])
        .split(area);

    if show_sidebar {
        draw_sidebar(frame, columns[0], state);
    }

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Page
            Constraint::Length(3), // Footer
        ])
        .split(columns[1]);

    draw_header(frame, rows[0], state);

    let farms = state.farm_list();
    match state.router.resolve(farms) {
        Page::Dashboard => dashboard::draw(frame, rows[1], state),
        Page::Farms => farms::draw(frame, rows[1], state),
        Page::FarmDetails(farm) => farm_details::draw(frame, rows[1], state, farm),
        Page::Analytics => analytics::draw(frame, rows[1], state),
        Page::Actions => actions::draw(frame, rows[1], state),
        Page::Reports => reports::draw(frame, rows[1], state),
        Page::Settings => settings::draw(frame, rows[1], state),
        Page::Profile => profile::draw(frame, rows[1], state),
    }

    draw_footer(frame, rows[2], state);
}

fn draw_sidebar(frame: &mut Frame, area: Rect, state: &DashboardState) {
    let block = Block::default()
        .title(Span::styled(
            " 🌿 ALG ÇİFTLİĞİ ",
            Style::default().fg(colors::SEAFOAM).bold(),
        ))
        .borders(Borders::RIGHT)
        .border_style(Style::default().fg(colors::DEEP_TEAL))
        .style(Style::default().bg(colors::BG_PANEL));

    let active = match state.router.active() {
        Tab::FarmDetails => Tab::Farms,
        tab => tab,
    };

    let mut lines = vec![Line::from("")];
    for tab in Tab::SIDEBAR {
        let hotkey = tab.hotkey().map(|c| c.to_string()).unwrap_or_default();
        let style = if tab == active {
            Style::default().fg(colors::BG_DARK).bg(colors::TEAL).bold()
        } else {
            Style::default().fg(colors::WHITE)
        };
        let mut spans = vec![
            Span::styled(format!(" {} ", hotkey), Style::default().fg(colors::SILVER)),
            Span::styled(format!("{} {:<14}", tab.icon(), tab.title()), style),
        ];
        if let Some(badge) = tab.badge() {
            spans.push(Span::styled(
                format!(" {} ", badge),
                Style::default().fg(colors::BG_DARK).bg(colors::SAND),
            ));
        }
        lines.push(Line::from(spans));
        lines.push(Line::from(""));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        format!(" {}", state.user.name),
        Style::default().fg(colors::WHITE).bold(),
    )));
    lines.push(Line::from(Span::styled(
        format!(" {}", state.user.role),
        Style::default().fg(colors::SILVER),
    )));

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn draw_header(frame: &mut Frame, area: Rect, state: &DashboardState) {
    let farms = state.farm_list();
    let tab = state.router.active();
    let title = state.router.title(farms);
    let subtitle = match state.router.resolve(farms) {
        Page::Farms => Tab::Farms.subtitle(),
        _ => tab.subtitle(),
    };

    let mut spans = vec![
        Span::styled(
            format!(" {} ", title),
            Style::default().fg(colors::WHITE).bg(colors::DEEP_TEAL).bold(),
        ),
        Span::raw("  "),
        Span::styled(subtitle, Style::default().fg(colors::SILVER)),
    ];
    if state.summary.alert_farms > 0 {
        spans.push(Span::raw("  "));
        spans.push(Span::styled(
            format!("[{} UYARI]", state.summary.alert_farms),
            Style::default().fg(colors::WARNING).bold(),
        ));
    }
    if state.profile_image.is_uploading() {
        spans.push(Span::raw("  "));
        spans.push(Span::styled("[YÜKLENİYOR]", Style::default().fg(colors::SAND).bold()));
    }

    let header = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Style::default().fg(colors::DEEP_TEAL))
            .style(Style::default().bg(colors::BG_DARK)),
    );

    frame.render_widget(header, area);
}

fn key_hint<'a>(key: &'a str, label: &'a str, bg: Color) -> [Span<'a>; 3] {
    [
        Span::styled(format!(" [{}] ", key), Style::default().fg(colors::BG_DARK).bg(bg)),
        Span::styled(format!(" {} ", label), Style::default().fg(colors::SILVER)),
        Span::raw(" "),
    ]
}

fn draw_footer(frame: &mut Frame, area: Rect, state: &DashboardState) {
    let line = match state.input_mode {
        InputMode::Search => Line::from(vec![
            Span::styled(" ARA: ", Style::default().fg(colors::BG_DARK).bg(colors::SAND)),
            Span::styled(format!(" {}▏", state.input), Style::default().fg(colors::WHITE)),
            Span::styled("  [ENTER] tamam  [ESC] temizle", Style::default().fg(colors::SILVER)),
        ]),
        InputMode::ImagePath => Line::from(vec![
            Span::styled(" DOSYA: ", Style::default().fg(colors::BG_DARK).bg(colors::SAND)),
            Span::styled(format!(" {}▏", state.input), Style::default().fg(colors::WHITE)),
            Span::styled("  [ENTER] yükle  [ESC] iptal", Style::default().fg(colors::SILVER)),
        ]),
        InputMode::Normal => {
            let mut spans = Vec::new();
            spans.extend(key_hint("Q", "Çıkış", colors::ERROR));
            spans.extend(key_hint("1-7/TAB", "Sekme", colors::TEAL));
            spans.extend(key_hint("M", "Menü", colors::SILVER));
            for (key, label) in page_hints(state) {
                spans.extend(key_hint(key, label, colors::SAND));
            }
            Line::from(spans)
        }
    };

    let footer = Paragraph::new(line).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::TOP)
            .border_style(Style::default().fg(colors::DEEP_TEAL))
            .style(Style::default().bg(colors::BG_DARK)),
    );

    frame.render_widget(footer, area);
}

fn page_hints(state: &DashboardState) -> &'static [(&'static str, &'static str)] {
    match state.router.resolve(state.farm_list()) {
        Page::Dashboard => &[("ENTER", "Detay"), ("R", "Yenile")],
        Page::Farms => &[("ENTER", "Detay"), ("/", "Ara"), ("F", "Durum"), ("S", "Sırala")],
        Page::FarmDetails(_) => &[("ESC", "Geri"), ("←/→", "Sensör"), ("I", "Görüntü Al"), ("R", "Yenile")],
        Page::Analytics => &[("←/→", "Metrik"), ("T", "Aralık"), ("R", "Yenile")],
        Page::Actions => &[("ENTER", "İlerlet"), ("N", "Yeni"), ("/", "Ara"), ("F", "Durum"), ("S", "Sırala")],
        Page::Reports => &[("N", "Oluştur"), ("K", "Tür"), ("C", "Kategori"), ("F", "Durum"), ("S", "Sırala")],
        Page::Settings => &[("←/→", "Bölüm"), ("ENTER", "Değiştir"), ("W", "Kaydet")],
        Page::Profile => &[("U", "Resim Yükle"), ("X", "Resmi Kaldır"), ("O", "Çıkış Yap")],
    }
}

fn draw_alert(frame: &mut Frame, area: Rect, title: &str, message: &str) {
    let popup = centered_rect(50, 7, area);
    let block = Block::default()
        .title(Span::styled(
            format!(" {} ", title),
            Style::default().fg(colors::WHITE).bg(colors::ERROR).bold(),
        ))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(colors::ERROR))
        .style(Style::default().bg(colors::BG_PANEL));

    let text = vec![
        Line::from(""),
        Line::from(Span::styled(message, Style::default().fg(colors::WHITE))),
        Line::from(""),
        Line::from(Span::styled(
            "Devam etmek için bir tuşa basın",
            Style::default().fg(colors::SILVER).add_modifier(Modifier::DIM),
        )),
    ];

    frame.render_widget(Clear, popup);
    frame.render_widget(
        Paragraph::new(text)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .block(block),
        popup,
    );
}

/// Fixed-height rectangle, `percent_x` wide, centered in `area`.
pub fn centered_rect(percent_x: u16, height: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Fill(1),
            Constraint::Length(height),
            Constraint::Fill(1),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}

pub fn panel(title: impl std::fmt::Display) -> Block<'static> {
    Block::default()
        .title(Span::styled(
            format!(" {} ", title),
            Style::default().fg(colors::WHITE).bold(),
        ))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors::SILVER))
        .border_type(BorderType::Rounded)
        .style(Style::default().bg(colors::BG_PANEL))
}

pub fn tone_color(tone: StatusTone) -> Color {
    match tone {
        StatusTone::Positive => colors::SUCCESS,
        StatusTone::Caution => colors::WARNING,
        StatusTone::Alert => colors::ERROR,
        StatusTone::Neutral => colors::SILVER,
    }
}

pub fn stat_box(frame: &mut Frame, area: Rect, label: &str, value: &str, note: &str, value_color: Color) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors::SILVER))
        .border_type(BorderType::Rounded)
        .style(Style::default().bg(colors::BG_PANEL));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let text = vec![
        Line::from(Span::styled(
            label,
            Style::default().fg(colors::SILVER).add_modifier(Modifier::DIM),
        )),
        Line::from(Span::styled(value, Style::default().fg(value_color).bold())),
        Line::from(Span::styled(note, Style::default().fg(colors::SILVER))),
    ];

    frame.render_widget(Paragraph::new(text).alignment(Alignment::Center), inner);
}

pub fn format_number(n: f64) -> String {
    let abs = n.abs();
    if abs >= 1_000_000.0 {
        format!("{:.2}M", n / 1_000_000.0)
    } else if abs >= 1_000.0 {
        format!("{:.1}K", n / 1_000.0)
    } else {
        format!("{:.1}", n)
    }
}

/// `(x, y)` pairs for a chart dataset.
pub fn chart_points(values: impl IntoIterator<Item = f64>) -> Vec<(f64, f64)> {
    values
        .into_iter()
        .enumerate()
        .map(|(i, v)| (i as f64, v))
        .collect()
}

/// Padded `[min, max]` bounds for a chart axis.
pub fn value_bounds(points: &[(f64, f64)]) -> [f64; 2] {
    let (min, max) = points
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), (_, y)| (lo.min(*y), hi.max(*y)));
    if !min.is_finite() || !max.is_finite() {
        return [0.0, 1.0];
    }
    let pad = ((max - min) * 0.1).max(0.1);
    [min - pad, max + pad]
}

#[cfg(test)]
mod tests {
    use super::*;
    use farmkit::{DashboardConfig, MockDataGenerator};
    use ratatui::backend::TestBackend;

    use crate::events::AppEvent;

    fn render(state: &DashboardState, width: u16, height: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal.draw(|frame| draw(frame, state)).unwrap();
        let buffer = terminal.backend().buffer().clone();
        buffer.content().iter().map(|cell| cell.symbol()).collect()
    }

    fn signed_in() -> DashboardState {
        let mut state = DashboardState::new(&DashboardConfig::default(), MockDataGenerator::from_seed(Some(5)));
        state.on_event(AppEvent::LoadingFinished);
        state
    }

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(184_300.0), "184.3K");
        assert_eq!(format_number(1_500_000.0), "1.50M");
        assert_eq!(format_number(-5.3), "-5.3");
    }

    #[test]
    fn test_value_bounds() {
        assert_eq!(value_bounds(&[]), [0.0, 1.0]);
        let [lo, hi] = value_bounds(&chart_points([1.0, 3.0]));
        assert!(lo < 1.0 && hi > 3.0);
    }

    #[test]
    fn test_every_page_renders() {
        let mut state = signed_in();
        for tab in Tab::SIDEBAR {
            state.select_tab(tab);
            let screen = render(&state, 140, 45);
            assert!(screen.contains(tab.title()), "{:?} header missing", tab);
        }

        state.select_farm("farm_003");
        let screen = render(&state, 140, 45);
        assert!(screen.contains("Deniz"));
    }

    #[test]
    fn test_loading_and_narrow_layouts_render() {
        let state = DashboardState::new(&DashboardConfig::default(), MockDataGenerator::from_seed(Some(5)));
        render(&state, 60, 20);

        let state = signed_in();
        render(&state, 80, 30);
    }
}
