// services/farm-dash/src/state.rs
//
// Dashboard state management and key handling

use chrono::{DateTime, Local};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tracing::{info, warn};

use farmkit::actions::{ActionBoard, ActionStatus};
use farmkit::catalog::{self, find_farm};
use farmkit::listing::{cycle_filter, ActionQuery, FarmQuery, ListQuery, ReportQuery};
use farmkit::metrics::{Metric, TimeRange};
use farmkit::profile_image::{ImageFile, ProfileImage};
use farmkit::reports::{ReportCategory, ReportKind, ReportShelf, ReportStatus};
use farmkit::router::{Page, Session, Tab, ViewRouter};
use farmkit::settings::{NotificationChannel, Settings, SettingsTab};
use farmkit::types::{
    AnalyticsKpis, AnalyticsSnapshot, DashboardSummary, Farm, FarmImage, FarmKeyMetrics,
    FarmPerformance, FarmStatus, Prediction, SensorChannel, SensorReading, TrendPoint, User,
};
use farmkit::{DashboardConfig, MockDataGenerator};

use crate::events::AppEvent;

const MAX_LOG_ENTRIES: usize = 100;
const ANALYTICS_HISTORY_DAYS: u32 = 90;

#[derive(Debug, Clone)]
pub struct LogEntry {
    pub timestamp: DateTime<Local>,
    pub level: String, // INFO, WARN, ERROR
    pub message: String,
}

/// Modal popup, dismissed by any key.
#[derive(Debug, Clone, PartialEq)]
pub struct Alert {
    pub title: String,
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Normal,
    Search,
    ImagePath,
}

/// Side effects the draw loop performs on behalf of the state.
#[derive(Debug, PartialEq)]
pub enum Command {
    None,
    Quit,
    Upload(ImageFile),
}

#[derive(Debug, Clone, Default)]
pub struct FarmsPage {
    pub query: FarmQuery,
    pub selected: usize,
}

#[derive(Debug, Clone, Default)]
pub struct ActionsPage {
    pub board: ActionBoard,
    pub query: ActionQuery,
    pub selected: usize,
}

#[derive(Debug, Clone, Default)]
pub struct ReportsPage {
    pub shelf: ReportShelf,
    pub query: ReportQuery,
    pub selected: usize,
}

#[derive(Debug, Clone)]
pub struct AnalyticsPage {
    pub metric: Metric,
    pub range: TimeRange,
    pub trend: Vec<TrendPoint>,
    pub performance: Vec<FarmPerformance>,
    pub kpis: AnalyticsKpis,
    pub predictions: Vec<Prediction>,
    pub history: Vec<AnalyticsSnapshot>,
}

#[derive(Debug, Clone)]
pub struct FarmDetailsPage {
    pub farm_id: Option<String>,
    pub channel: SensorChannel,
    pub history: Vec<SensorReading>,
    pub key_metrics: Option<FarmKeyMetrics>,
    /// 7-day growth trend shown beside the sensor history.
    pub trend: Vec<TrendPoint>,
    /// Captures taken this session, newest first.
    pub captures: Vec<FarmImage>,
}

pub struct DashboardState {
    pub router: ViewRouter,
    pub generator: MockDataGenerator,
    pub user: User,
    pub summary: DashboardSummary,
    pub hourly_activity: Vec<f64>,
    pub dashboard_selected: usize,

    pub farms: FarmsPage,
    pub actions: ActionsPage,
    pub reports: ReportsPage,
    pub analytics: AnalyticsPage,
    pub details: FarmDetailsPage,
    pub settings: Settings,
    pub settings_cursor: usize,
    pub profile_image: ProfileImage,

    pub input_mode: InputMode,
    pub input: String,
    pub alert: Option<Alert>,

    // Activity log
    pub activity_log: Vec<LogEntry>,

    pub history_days: u32,
    pub compact_width: u16,
    pub auto_login: bool,
    pub tick_count: u64,
}

impl DashboardState {
    pub fn new(config: &DashboardConfig, mut generator: MockDataGenerator) -> Self {
        let metric = config.ui.default_metric.parse().unwrap_or_default();
        let range = config.ui.default_range.parse().unwrap_or_default();

        let analytics = AnalyticsPage {
            metric,
            range,
            trend: generator.analytics_trends(metric, range),
            performance: generator.farm_performance(),
            kpis: generator.analytics_kpis(),
            predictions: generator.predictions(),
            history: generator.historical_analytics(ANALYTICS_HISTORY_DAYS),
        };
        let hourly_activity = generator.hourly_activity();
        let summary = generator.dashboard_summary();

        let mut state = Self {
            router: ViewRouter::new(),
            generator,
            user: catalog::user(),
            summary,
            hourly_activity,
            dashboard_selected: 0,
            farms: FarmsPage::default(),
            actions: ActionsPage {
                board: ActionBoard::new(catalog::actions()),
                ..Default::default()
            },
            reports: ReportsPage {
                shelf: ReportShelf::new(catalog::reports()),
                ..Default::default()
            },
            analytics,
            details: FarmDetailsPage {
                farm_id: None,
                channel: SensorChannel::Ph,
                history: Vec::new(),
                key_metrics: None,
                trend: Vec::new(),
                captures: Vec::new(),
            },
            settings: Settings::default(),
            settings_cursor: 0,
            profile_image: ProfileImage::default(),
            input_mode: InputMode::Normal,
            input: String::new(),
            alert: None,
            activity_log: Vec::new(),
            history_days: config.simulation.history_days,
            compact_width: config.ui.compact_width,
            auto_login: config.simulation.auto_login,
            tick_count: 0,
        };
        state.add_log("INFO", "Farm dashboard started");
        state
    }

    pub fn farm_list(&self) -> &[Farm] {
        self.generator.farms()
    }

    pub fn add_log(&mut self, level: &str, message: &str) {
        self.activity_log.push(LogEntry {
            timestamp: Local::now(),
            level: level.to_string(),
            message: message.to_string(),
        });

        if self.activity_log.len() > MAX_LOG_ENTRIES {
            self.activity_log.remove(0);
        }
    }

    fn show_alert(&mut self, title: &str, message: &str) {
        self.alert = Some(Alert {
            title: title.to_string(),
            message: message.to_string(),
        });
    }

    // ---- background events ----

    pub fn on_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::LoadingFinished => {
                self.router.complete_loading(self.auto_login);
                if self.router.session() == Session::SignedIn {
                    self.add_log("INFO", &format!("Signed in as {}", self.user.name));
                }
            }
            AppEvent::UploadFinished(outcome) => {
                match self.profile_image.finish_upload(outcome) {
                    Ok(()) => {
                        let url = self.profile_image.current().to_string();
                        self.user.avatar = url.clone();
                        self.add_log("INFO", &format!("Profile image updated: {}", url));
                    }
                    Err(e) => {
                        self.add_log("ERROR", &format!("Profile image upload failed: {}", e));
                        self.show_alert("Yükleme Hatası", &e.to_string());
                    }
                }
            }
        }
    }

    // ---- navigation ----

    pub fn select_tab(&mut self, tab: Tab) {
        self.router.select_tab(tab);
        self.input_mode = InputMode::Normal;
    }

    pub fn select_farm(&mut self, farm_id: &str) {
        self.router.select_farm(farm_id);
        self.load_farm_details();
    }

    /// Regenerates history and headline numbers for the selected farm.
    pub fn load_farm_details(&mut self) {
        let Some(farm_id) = self.router.selected_farm().map(str::to_string) else {
            return;
        };
        let Some(farm) = find_farm(self.generator.farms(), &farm_id).cloned() else {
            warn!("farm {} not found, showing farms list", farm_id);
            self.details.farm_id = None;
            self.details.history.clear();
            self.details.key_metrics = None;
            self.details.trend.clear();
            self.details.captures.clear();
            return;
        };

        if self.details.farm_id.as_deref() != Some(farm.id.as_str()) {
            self.details.captures.clear();
        }
        self.details.history = self.generator.sensor_history(&farm.id, self.history_days);
        self.details.key_metrics = Some(self.generator.farm_key_metrics(&farm));
        self.details.trend = self.generator.simple_trend(Metric::Growth, TimeRange::Days7);
        self.details.farm_id = Some(farm.id.clone());
        info!("loaded {} readings for {}", self.details.history.len(), farm.id);
    }

    pub fn refresh_trend(&mut self) {
        self.analytics.trend = self
            .generator
            .analytics_trends(self.analytics.metric, self.analytics.range);
    }

    fn next_sidebar_tab(&self, forward: bool) -> Tab {
        let tabs = Tab::SIDEBAR;
        let current = match self.router.active() {
            Tab::FarmDetails => Tab::Farms,
            tab => tab,
        };
        let idx = tabs.iter().position(|t| *t == current).unwrap_or(0);
        let next = if forward {
            (idx + 1) % tabs.len()
        } else {
            (idx + tabs.len() - 1) % tabs.len()
        };
        tabs[next]
    }

    // ---- key handling ----

    pub fn handle_key(&mut self, key: KeyEvent) -> Command {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return Command::Quit;
        }

        if self.alert.is_some() {
            self.alert = None;
            return Command::None;
        }

        match self.router.session() {
            Session::Loading => match key.code {
                KeyCode::Char('q') => Command::Quit,
                _ => Command::None,
            },
            Session::SignedOut => match key.code {
                KeyCode::Char('q') | KeyCode::Esc => Command::Quit,
                KeyCode::Enter => {
                    self.router.login();
                    self.add_log("INFO", &format!("Signed in as {}", self.user.name));
                    Command::None
                }
                _ => Command::None,
            },
            Session::SignedIn => match self.input_mode {
                InputMode::Normal => self.handle_normal_key(key),
                InputMode::Search => {
                    self.handle_search_key(key);
                    Command::None
                }
                InputMode::ImagePath => self.handle_image_path_key(key),
            },
        }
    }

    fn handle_normal_key(&mut self, key: KeyEvent) -> Command {
        match key.code {
            KeyCode::Char('q') => return Command::Quit,
            KeyCode::Char(c @ '1'..='9') => {
                if let Some(tab) = Tab::from_hotkey(c) {
                    self.select_tab(tab);
                }
                return Command::None;
            }
            KeyCode::Tab => {
                let tab = self.next_sidebar_tab(true);
                self.select_tab(tab);
                return Command::None;
            }
            KeyCode::BackTab => {
                let tab = self.next_sidebar_tab(false);
                self.select_tab(tab);
                return Command::None;
            }
            KeyCode::Char('m') => {
                self.router.toggle_drawer();
                return Command::None;
            }
            KeyCode::Esc if self.router.drawer_open() => {
                self.router.close_drawer();
                return Command::None;
            }
            _ => {}
        }

        let page = match self.router.resolve(self.generator.farms()) {
            Page::Dashboard => Tab::Dashboard,
            Page::Farms => Tab::Farms,
            Page::FarmDetails(_) => Tab::FarmDetails,
            Page::Analytics => Tab::Analytics,
            Page::Actions => Tab::Actions,
            Page::Reports => Tab::Reports,
            Page::Settings => Tab::Settings,
            Page::Profile => Tab::Profile,
        };

        match page {
            Tab::Dashboard => self.handle_dashboard_key(key),
            Tab::Farms => self.handle_farms_key(key),
            Tab::FarmDetails => self.handle_details_key(key),
            Tab::Analytics => self.handle_analytics_key(key),
            Tab::Actions => self.handle_actions_key(key),
            Tab::Reports => self.handle_reports_key(key),
            Tab::Settings => self.handle_settings_key(key),
            Tab::Profile => return self.handle_profile_key(key),
        }
        Command::None
    }

    fn handle_dashboard_key(&mut self, key: KeyEvent) {
        let farms = self.generator.farms().len();
        match key.code {
            KeyCode::Up => self.dashboard_selected = self.dashboard_selected.saturating_sub(1),
            KeyCode::Down if self.dashboard_selected + 1 < farms => self.dashboard_selected += 1,
            KeyCode::Enter => {
                let farm_id = self
                    .generator
                    .farms()
                    .get(self.dashboard_selected)
                    .map(|f| f.id.clone());
                if let Some(farm_id) = farm_id {
                    self.select_farm(&farm_id);
                }
            }
            KeyCode::Char('r') => {
                self.hourly_activity = self.generator.hourly_activity();
                self.add_log("INFO", "Dashboard activity refreshed");
            }
            _ => {}
        }
    }

    pub fn visible_farms(&self) -> Vec<&Farm> {
        self.farms.query.apply(self.generator.farms())
    }

    fn handle_farms_key(&mut self, key: KeyEvent) {
        let visible = self.visible_farms().len();
        match key.code {
            KeyCode::Up => self.farms.selected = self.farms.selected.saturating_sub(1),
            KeyCode::Down if self.farms.selected + 1 < visible => self.farms.selected += 1,
            KeyCode::Enter => {
                let farm_id = self
                    .visible_farms()
                    .get(self.farms.selected)
                    .map(|f| f.id.clone());
                if let Some(farm_id) = farm_id {
                    self.select_farm(&farm_id);
                }
            }
            KeyCode::Char('/') => self.begin_search(),
            KeyCode::Char('f') => {
                self.farms.query.status = cycle_filter(&FarmStatus::ALL, self.farms.query.status);
                self.farms.selected = 0;
            }
            KeyCode::Char('s') => self.farms.query.sort = self.farms.query.sort.next(),
            _ => {}
        }
    }

    fn handle_details_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc | KeyCode::Backspace | KeyCode::Char('b') => self.select_tab(Tab::Farms),
            KeyCode::Left => self.details.channel = cycle_channel(self.details.channel, false),
            KeyCode::Right => self.details.channel = cycle_channel(self.details.channel, true),
            KeyCode::Char('r') => self.load_farm_details(),
            KeyCode::Char('i') => self.capture_farm_image(),
            _ => {}
        }
    }

    fn capture_farm_image(&mut self) {
        let Some(farm) = self
            .details
            .farm_id
            .as_deref()
            .and_then(|id| find_farm(self.generator.farms(), id))
            .cloned()
        else {
            return;
        };
        let image = self.generator.capture_image(&farm);
        self.add_log("INFO", &format!("Captured {} for {}", image.id, farm.name));
        self.details.captures.insert(0, image);
    }

    fn handle_analytics_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Left | KeyCode::Right | KeyCode::Char('g') => {
                self.analytics.metric = self.analytics.metric.next();
                self.refresh_trend();
            }
            KeyCode::Char('t') => {
                self.analytics.range = self.analytics.range.next();
                self.refresh_trend();
            }
            KeyCode::Char('r') => {
                self.refresh_trend();
                self.analytics.performance = self.generator.farm_performance();
                self.analytics.history = self.generator.historical_analytics(ANALYTICS_HISTORY_DAYS);
                self.add_log("INFO", "Analytics refreshed");
            }
            _ => {}
        }
    }

    pub fn visible_actions(&self) -> Vec<&farmkit::actions::Action> {
        self.actions.query.apply(self.actions.board.actions())
    }

    fn handle_actions_key(&mut self, key: KeyEvent) {
        let visible = self.visible_actions().len();
        match key.code {
            KeyCode::Up => self.actions.selected = self.actions.selected.saturating_sub(1),
            KeyCode::Down if self.actions.selected + 1 < visible => self.actions.selected += 1,
            KeyCode::Enter | KeyCode::Char('p') => {
                let id = self
                    .visible_actions()
                    .get(self.actions.selected)
                    .map(|a| a.id.clone());
                if let Some(id) = id {
                    if let Some(progress) = self.actions.board.advance_progress(&id) {
                        self.add_log("INFO", &format!("Action {} at {}%", id, progress));
                    }
                }
            }
            KeyCode::Char('n') => {
                let farm = self
                    .generator
                    .farms()
                    .first()
                    .map(|f| f.name.clone())
                    .unwrap_or_default();
                let assignee = self.user.name.clone();
                let id = self
                    .actions
                    .board
                    .create_action(self.generator.clock(), &farm, &assignee)
                    .id
                    .clone();
                self.actions.selected = 0;
                self.add_log("INFO", &format!("New action {} created", id));
            }
            KeyCode::Char('/') => self.begin_search(),
            KeyCode::Char('f') => {
                self.actions.query.status = cycle_filter(&ActionStatus::ALL, self.actions.query.status);
                self.actions.selected = 0;
            }
            KeyCode::Char('s') => self.actions.query.sort = self.actions.query.sort.next(),
            _ => {}
        }
    }

    pub fn visible_reports(&self) -> Vec<&farmkit::reports::Report> {
        self.reports.query.apply(self.reports.shelf.reports())
    }

    fn handle_reports_key(&mut self, key: KeyEvent) {
        let visible = self.visible_reports().len();
        let page = &mut self.reports;
        match key.code {
            KeyCode::Up => page.selected = page.selected.saturating_sub(1),
            KeyCode::Down if page.selected + 1 < visible => page.selected += 1,
            KeyCode::Char('k') => {
                page.query.kind = cycle_filter(&ReportKind::ALL, page.query.kind);
                page.selected = 0;
            }
            KeyCode::Char('c') => {
                page.query.category = cycle_filter(&ReportCategory::ALL, page.query.category);
                page.selected = 0;
            }
            KeyCode::Char('f') => {
                page.query.status = cycle_filter(&ReportStatus::ALL, page.query.status);
                page.selected = 0;
            }
            KeyCode::Char('s') => page.query.sort = page.query.sort.next(),
            KeyCode::Char('/') => self.begin_search(),
            KeyCode::Char('n') => {
                let id = self.reports.shelf.generate_new(self.generator.clock()).id.clone();
                self.reports.selected = 0;
                self.add_log("INFO", &format!("Report {} queued", id));
            }
            KeyCode::Enter => {
                let title = self
                    .visible_reports()
                    .get(self.reports.selected)
                    .map(|r| r.title.clone());
                if let Some(title) = title {
                    self.add_log("INFO", &format!("Download requested: {}", title));
                }
            }
            _ => {}
        }
    }

    fn handle_settings_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Left => {
                self.settings.tab = self.settings.tab.prev();
                self.settings_cursor = 0;
            }
            KeyCode::Right => {
                self.settings.tab = self.settings.tab.next();
                self.settings_cursor = 0;
            }
            KeyCode::Up => self.settings_cursor = self.settings_cursor.saturating_sub(1),
            KeyCode::Down if self.settings.tab == SettingsTab::Bildirimler => {
                self.settings_cursor = (self.settings_cursor + 1).min(NotificationChannel::ALL.len() - 1);
            }
            KeyCode::Enter | KeyCode::Char(' ') if self.settings.tab == SettingsTab::Bildirimler => {
                let channel = NotificationChannel::ALL[self.settings_cursor];
                let enabled = self.settings.notifications.toggle(channel);
                let state = if enabled { "on" } else { "off" };
                self.add_log("INFO", &format!("{} {}", channel.label(), state));
            }
            KeyCode::Char('t') if self.settings.tab == SettingsTab::Tercihler => {
                self.settings.preferences.theme = self.settings.preferences.theme.toggled();
            }
            KeyCode::Char('w') => self.add_log("INFO", "Settings saved for this session"),
            _ => {}
        }
    }

    fn handle_profile_key(&mut self, key: KeyEvent) -> Command {
        match key.code {
            KeyCode::Char('u') if !self.profile_image.is_uploading() => {
                self.input.clear();
                self.input_mode = InputMode::ImagePath;
            }
            KeyCode::Char('x') => {
                self.profile_image.remove();
                self.user.avatar = self.profile_image.current().to_string();
                self.add_log("INFO", "Profile image removed");
            }
            KeyCode::Char('o') => {
                self.router.logout();
                self.add_log("INFO", "Signed out");
            }
            _ => {}
        }
        Command::None
    }

    // ---- text input ----

    fn begin_search(&mut self) {
        self.input = self.active_search().to_string();
        self.input_mode = InputMode::Search;
    }

    fn active_search(&self) -> &str {
        match self.router.active() {
            Tab::Farms => &self.farms.query.search,
            Tab::Actions => &self.actions.query.search,
            Tab::Reports => &self.reports.query.search,
            _ => "",
        }
    }

    fn set_active_search(&mut self, value: String) {
        match self.router.active() {
            Tab::Farms => {
                self.farms.query.search = value;
                self.farms.selected = 0;
            }
            Tab::Actions => {
                self.actions.query.search = value;
                self.actions.selected = 0;
            }
            Tab::Reports => {
                self.reports.query.search = value;
                self.reports.selected = 0;
            }
            _ => {}
        }
    }

    fn handle_search_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => {
                self.input.clear();
                self.set_active_search(String::new());
                self.input_mode = InputMode::Normal;
            }
            KeyCode::Enter => self.input_mode = InputMode::Normal,
            KeyCode::Backspace => {
                self.input.pop();
                self.set_active_search(self.input.clone());
            }
            KeyCode::Char(c) => {
                self.input.push(c);
                self.set_active_search(self.input.clone());
            }
            _ => {}
        }
    }

    fn handle_image_path_key(&mut self, key: KeyEvent) -> Command {
        match key.code {
            KeyCode::Esc => {
                self.input.clear();
                self.input_mode = InputMode::Normal;
            }
            KeyCode::Backspace => {
                self.input.pop();
            }
            KeyCode::Char(c) => self.input.push(c),
            KeyCode::Enter => {
                self.input_mode = InputMode::Normal;
                let path = std::mem::take(&mut self.input);
                return self.start_upload(path.trim());
            }
            _ => {}
        }
        Command::None
    }

    /// Validates the picked file; only an accepted file leaves the state
    /// as an upload command.
    pub fn start_upload(&mut self, path: &str) -> Command {
        let file = match ImageFile::from_path(path) {
            Ok(file) => file,
            Err(e) => {
                self.add_log("ERROR", &format!("Cannot read {}: {}", path, e));
                self.show_alert("Dosya Okunamadı", &e.to_string());
                return Command::None;
            }
        };
        self.start_upload_file(file)
    }

    pub fn start_upload_file(&mut self, file: ImageFile) -> Command {
        match self.profile_image.begin_upload(&file) {
            Ok(()) => {
                self.add_log("INFO", &format!("Uploading {} ({} bytes)", file.name, file.size));
                Command::Upload(file)
            }
            Err(e) => {
                self.add_log("WARN", &format!("Rejected {}: {}", file.name, e));
                self.show_alert("Geçersiz Dosya", &e.to_string());
                Command::None
            }
        }
    }
}

fn cycle_channel(current: SensorChannel, forward: bool) -> SensorChannel {
    let all = SensorChannel::ALL;
    let idx = all.iter().position(|c| *c == current).unwrap_or(0);
    if forward {
        all[(idx + 1) % all.len()]
    } else {
        all[(idx + all.len() - 1) % all.len()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use farmkit::catalog::DEFAULT_AVATAR;

    fn signed_in() -> DashboardState {
        let config = DashboardConfig::default();
        let mut state = DashboardState::new(&config, MockDataGenerator::from_seed(Some(1)));
        state.on_event(AppEvent::LoadingFinished);
        state
    }

    fn press(state: &mut DashboardState, code: KeyCode) -> Command {
        state.handle_key(KeyEvent::from(code))
    }

    fn type_text(state: &mut DashboardState, text: &str) {
        for c in text.chars() {
            press(state, KeyCode::Char(c));
        }
    }

    #[test]
    fn test_loading_then_signed_in() {
        let config = DashboardConfig::default();
        let mut state = DashboardState::new(&config, MockDataGenerator::from_seed(Some(1)));
        assert_eq!(state.router.session(), Session::Loading);
        assert_eq!(press(&mut state, KeyCode::Char('2')), Command::None);
        assert_eq!(state.router.active(), Tab::Dashboard);

        state.on_event(AppEvent::LoadingFinished);
        assert_eq!(state.router.session(), Session::SignedIn);
    }

    #[test]
    fn test_manual_login_when_auto_login_disabled() {
        let mut config = DashboardConfig::default();
        config.simulation.auto_login = false;
        let mut state = DashboardState::new(&config, MockDataGenerator::from_seed(Some(1)));

        state.on_event(AppEvent::LoadingFinished);
        assert_eq!(state.router.session(), Session::SignedOut);

        press(&mut state, KeyCode::Enter);
        assert_eq!(state.router.session(), Session::SignedIn);
    }

    #[test]
    fn test_hotkeys_and_farm_selection() {
        let mut state = signed_in();

        press(&mut state, KeyCode::Char('2'));
        assert_eq!(state.router.active(), Tab::Farms);

        press(&mut state, KeyCode::Enter);
        assert_eq!(state.router.active(), Tab::FarmDetails);
        let selected = state.router.selected_farm().unwrap().to_string();
        assert_eq!(state.details.farm_id.as_deref(), Some(selected.as_str()));
        assert_eq!(state.details.history.len(), 7 * 24 + 1);

        press(&mut state, KeyCode::Esc);
        assert_eq!(state.router.active(), Tab::Farms);
        assert_eq!(state.router.selected_farm(), None);
    }

    #[test]
    fn test_critical_filter_and_search() {
        let mut state = signed_in();
        state.select_tab(Tab::Farms);

        for _ in 0..3 {
            press(&mut state, KeyCode::Char('f'));
        }
        assert_eq!(state.farms.query.status, Some(FarmStatus::Critical));
        let visible: Vec<String> = state.visible_farms().iter().map(|f| f.id.clone()).collect();
        assert_eq!(visible, vec!["farm_003".to_string()]);

        press(&mut state, KeyCode::Char('f'));
        press(&mut state, KeyCode::Char('/'));
        type_text(&mut state, "ALARIA");
        press(&mut state, KeyCode::Enter);
        assert_eq!(state.input_mode, InputMode::Normal);
        assert_eq!(state.visible_farms().len(), 1);

        press(&mut state, KeyCode::Char('/'));
        press(&mut state, KeyCode::Esc);
        assert_eq!(state.visible_farms().len(), 5);
    }

    #[test]
    fn test_new_action_then_pending_filter() {
        let mut state = signed_in();
        state.select_tab(Tab::Actions);

        press(&mut state, KeyCode::Char('n'));
        press(&mut state, KeyCode::Char('f'));
        assert_eq!(state.actions.query.status, Some(ActionStatus::Bekleyen));

        let visible = state.visible_actions();
        assert!(visible.iter().any(|a| a.id == "6"));
        assert!(visible.iter().all(|a| a.status == ActionStatus::Bekleyen));
    }

    #[test]
    fn test_generate_report() {
        let mut state = signed_in();
        state.select_tab(Tab::Reports);

        press(&mut state, KeyCode::Char('n'));
        assert_eq!(state.reports.shelf.len(), 6);
        assert_eq!(state.visible_reports()[0].title, "Yeni Özel Rapor");
    }

    #[test]
    fn test_analytics_cycles_metric_and_range() {
        let mut state = signed_in();
        state.select_tab(Tab::Analytics);
        assert_eq!(state.analytics.trend.len(), 7);

        press(&mut state, KeyCode::Char('t'));
        assert_eq!(state.analytics.range, TimeRange::Days30);
        assert_eq!(state.analytics.trend.len(), 30);

        press(&mut state, KeyCode::Right);
        assert_eq!(state.analytics.metric, Metric::Ph);
    }

    #[test]
    fn test_invalid_image_shows_alert_and_keeps_avatar() {
        let mut state = signed_in();
        state.select_tab(Tab::Profile);

        let command = state.start_upload_file(ImageFile::new("doc.pdf", "application/pdf", 100));

        assert_eq!(command, Command::None);
        assert!(state.alert.is_some());
        assert_eq!(state.profile_image.current(), DEFAULT_AVATAR);
        assert!(!state.profile_image.is_uploading());

        // any key dismisses the alert
        press(&mut state, KeyCode::Char('z'));
        assert!(state.alert.is_none());
    }

    #[test]
    fn test_upload_round_trip_through_events() {
        let mut state = signed_in();
        let file = ImageFile::new("me.png", "image/png", 2048);

        let command = state.start_upload_file(file.clone());
        assert_eq!(command, Command::Upload(file));
        assert!(state.profile_image.is_uploading());

        state.on_event(AppEvent::UploadFinished(Ok("/images/profiles/user-1.png".to_string())));
        assert_eq!(state.user.avatar, "/images/profiles/user-1.png");
        assert!(!state.profile_image.is_uploading());
    }

    #[test]
    fn test_notification_toggle() {
        let mut state = signed_in();
        state.select_tab(Tab::Settings);

        press(&mut state, KeyCode::Right);
        assert_eq!(state.settings.tab, SettingsTab::Bildirimler);
        press(&mut state, KeyCode::Down);
        press(&mut state, KeyCode::Enter);
        assert!(state.settings.notifications.push);
    }

    #[test]
    fn test_activity_log_is_bounded() {
        let mut state = signed_in();
        for i in 0..150 {
            state.add_log("INFO", &format!("entry {}", i));
        }
        assert_eq!(state.activity_log.len(), MAX_LOG_ENTRIES);
        assert_eq!(state.activity_log.last().unwrap().message, "entry 149");
    }

    #[test]
    fn test_dashboard_farm_opens_details() {
        let mut state = signed_in();
        assert_eq!(state.router.active(), Tab::Dashboard);

        press(&mut state, KeyCode::Down);
        press(&mut state, KeyCode::Enter);

        let expected = state.farm_list()[1].id.clone();
        assert_eq!(state.router.active(), Tab::FarmDetails);
        assert_eq!(state.router.selected_farm(), Some(expected.as_str()));
        assert_eq!(state.details.farm_id.as_deref(), Some(expected.as_str()));
    }

    #[test]
    fn test_dashboard_cursor_stays_on_list() {
        let mut state = signed_in();
        press(&mut state, KeyCode::Up);
        assert_eq!(state.dashboard_selected, 0);

        for _ in 0..10 {
            press(&mut state, KeyCode::Down);
        }
        assert_eq!(state.dashboard_selected, state.farm_list().len() - 1);
    }

    #[test]
    fn test_details_carry_weekly_growth_trend() {
        let mut state = signed_in();
        state.select_farm("farm_001");

        let labels: Vec<&str> = state.details.trend.iter().map(|p| p.label.as_str()).collect();
        assert_eq!(labels, vec!["Paz", "Pzt", "Sal", "Çar", "Per", "Cum", "Cmt"]);
    }

    #[test]
    fn test_capture_adds_image_for_selected_farm_only() {
        let mut state = signed_in();
        state.select_farm("farm_003");

        press(&mut state, KeyCode::Char('i'));
        assert_eq!(state.details.captures.len(), 1);
        assert!(state.details.captures[0].id.starts_with("img_farm_003_"));

        // Live refresh of the same farm keeps captures
        state.load_farm_details();
        assert_eq!(state.details.captures.len(), 1);

        state.select_farm("farm_001");
        assert!(state.details.captures.is_empty());
    }

    #[test]
    fn test_analytics_history_covers_ninety_days() {
        let mut state = signed_in();
        assert_eq!(state.analytics.history.len(), 91);

        state.select_tab(Tab::Analytics);
        press(&mut state, KeyCode::Char('r'));
        assert_eq!(state.analytics.history.len(), 91);
    }
}
