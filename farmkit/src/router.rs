// farmkit/src/router.rs
//
// Session and tab state machine for the dashboard shell
//
// The router never fails: a farm-details tab without a resolvable farm is
// rendered as the farms list

use tracing::{debug, info};

use crate::catalog::find_farm;
use crate::types::Farm;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Session {
    /// Splash screen while the fixed login delay runs.
    Loading,
    SignedOut,
    SignedIn,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Tab {
    #[default]
    Dashboard,
    Farms,
    FarmDetails,
    Analytics,
    Actions,
    Reports,
    Settings,
    Profile,
}

impl Tab {
    pub const ALL: [Tab; 8] = [
        Tab::Dashboard,
        Tab::Farms,
        Tab::FarmDetails,
        Tab::Analytics,
        Tab::Actions,
        Tab::Reports,
        Tab::Settings,
        Tab::Profile,
    ];

    /// Tabs reachable from the sidebar. Farm details is only entered by
    /// selecting a farm.
    pub const SIDEBAR: [Tab; 7] = [
        Tab::Dashboard,
        Tab::Farms,
        Tab::Analytics,
        Tab::Actions,
        Tab::Reports,
        Tab::Settings,
        Tab::Profile,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            Tab::Dashboard => "dashboard",
            Tab::Farms => "farms",
            Tab::FarmDetails => "farm-details",
            Tab::Analytics => "analytics",
            Tab::Actions => "actions",
            Tab::Reports => "reports",
            Tab::Settings => "settings",
            Tab::Profile => "profile",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Tab::Dashboard => "Gösterge Paneli",
            Tab::Farms => "Çiftlikler",
            Tab::FarmDetails => "Çiftlik Detayları",
            Tab::Analytics => "Analitik",
            Tab::Actions => "İşlemler",
            Tab::Reports => "Raporlar",
            Tab::Settings => "Ayarlar",
            Tab::Profile => "Profil",
        }
    }

    pub fn subtitle(&self) -> &'static str {
        match self {
            Tab::Dashboard => "Deniz yosunu çiftliklerinize genel bakış",
            Tab::Farms => "Tüm çiftliklerinizi yönetin ve izleyin",
            Tab::FarmDetails => "Sensör verileri ve çiftlik geçmişi",
            Tab::Analytics => "Performans metrikleri ve tahminler",
            Tab::Actions => "Görevleri planlayın ve takip edin",
            Tab::Reports => "Raporları oluşturun ve indirin",
            Tab::Settings => "Hesap ve uygulama tercihleri",
            Tab::Profile => "Kişisel bilgileriniz",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Tab::Dashboard => "🏠",
            Tab::Farms => "🌊",
            Tab::FarmDetails => "🔎",
            Tab::Analytics => "📈",
            Tab::Actions => "✅",
            Tab::Reports => "📄",
            Tab::Settings => "⚙️",
            Tab::Profile => "👤",
        }
    }

    /// Static sidebar badge, if the tab carries one.
    pub fn badge(&self) -> Option<&'static str> {
        match self {
            Tab::Farms => Some("5"),
            Tab::Actions => Some("3"),
            _ => None,
        }
    }

    /// Sidebar hotkey; `None` for tabs that are not in the sidebar.
    pub fn hotkey(&self) -> Option<char> {
        Tab::SIDEBAR
            .iter()
            .position(|t| t == self)
            .and_then(|i| char::from_digit(i as u32 + 1, 10))
    }

    pub fn from_hotkey(c: char) -> Option<Tab> {
        let idx = c.to_digit(10)?.checked_sub(1)? as usize;
        Tab::SIDEBAR.get(idx).copied()
    }
}

/// What the content area actually shows after fallback resolution.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Page<'a> {
    Dashboard,
    Farms,
    FarmDetails(&'a Farm),
    Analytics,
    Actions,
    Reports,
    Settings,
    Profile,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewRouter {
    session: Session,
    active: Tab,
    selected_farm: Option<String>,
    drawer_open: bool,
}

impl Default for ViewRouter {
    fn default() -> Self {
        Self::new()
    }
}

impl ViewRouter {
    pub fn new() -> Self {
        Self {
            session: Session::Loading,
            active: Tab::Dashboard,
            selected_farm: None,
            drawer_open: false,
        }
    }

    pub fn session(&self) -> Session {
        self.session
    }

    pub fn active(&self) -> Tab {
        self.active
    }

    pub fn selected_farm(&self) -> Option<&str> {
        self.selected_farm.as_deref()
    }

    pub fn drawer_open(&self) -> bool {
        self.drawer_open
    }

    /// Ends the splash screen. Signs in directly unless `auto_login` is off.
    pub fn complete_loading(&mut self, auto_login: bool) {
        if self.session != Session::Loading {
            return;
        }
        self.session = if auto_login {
            Session::SignedIn
        } else {
            Session::SignedOut
        };
        info!("session ready: {:?}", self.session);
    }

    pub fn login(&mut self) {
        if self.session == Session::SignedOut {
            self.session = Session::SignedIn;
            info!("signed in");
        }
    }

    pub fn logout(&mut self) {
        *self = Self {
            session: Session::SignedOut,
            ..Self::new()
        };
        info!("signed out");
    }

    pub fn select_tab(&mut self, tab: Tab) {
        self.active = tab;
        self.drawer_open = false;
        if tab != Tab::FarmDetails {
            self.selected_farm = None;
        }
        debug!("tab -> {}", tab.key());
    }

    pub fn select_farm(&mut self, farm_id: &str) {
        self.selected_farm = Some(farm_id.to_string());
        self.active = Tab::FarmDetails;
        self.drawer_open = false;
        debug!("farm selected: {}", farm_id);
    }

    /// Leaves farm details for the farms list.
    pub fn back(&mut self) {
        self.select_tab(Tab::Farms);
    }

    pub fn open_drawer(&mut self) {
        self.drawer_open = true;
    }

    pub fn close_drawer(&mut self) {
        self.drawer_open = false;
    }

    pub fn toggle_drawer(&mut self) {
        self.drawer_open = !self.drawer_open;
    }

    /// Page to render for the active tab. Farm details without a known
    /// selection falls back to the farms list.
    pub fn resolve<'a>(&self, farms: &'a [Farm]) -> Page<'a> {
        match self.active {
            Tab::Dashboard => Page::Dashboard,
            Tab::Farms => Page::Farms,
            Tab::FarmDetails => match self.selected_farm.as_deref().and_then(|id| find_farm(farms, id)) {
                Some(farm) => Page::FarmDetails(farm),
                None => {
                    debug!("farm details without a known farm, showing farms list");
                    Page::Farms
                }
            },
            Tab::Analytics => Page::Analytics,
            Tab::Actions => Page::Actions,
            Tab::Reports => Page::Reports,
            Tab::Settings => Page::Settings,
            Tab::Profile => Page::Profile,
        }
    }

    /// Header title for what is actually on screen.
    pub fn title<'a>(&self, farms: &'a [Farm]) -> &'a str {
        match self.resolve(farms) {
            Page::FarmDetails(farm) => &farm.name,
            Page::Farms => Tab::Farms.title(),
            _ => self.active.title(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog;

    fn signed_in() -> ViewRouter {
        let mut router = ViewRouter::new();
        router.complete_loading(true);
        router
    }

    #[test]
    fn test_loading_leads_to_session() {
        let mut router = ViewRouter::new();
        assert_eq!(router.session(), Session::Loading);
        router.complete_loading(true);
        assert_eq!(router.session(), Session::SignedIn);

        let mut manual = ViewRouter::new();
        manual.complete_loading(false);
        assert_eq!(manual.session(), Session::SignedOut);
        manual.login();
        assert_eq!(manual.session(), Session::SignedIn);
    }

    #[test]
    fn test_select_farm_opens_details() {
        let farms = catalog::farms();
        let mut router = signed_in();

        router.select_farm("farm_002");
        assert_eq!(router.active(), Tab::FarmDetails);
        assert_eq!(router.selected_farm(), Some("farm_002"));
        match router.resolve(&farms) {
            Page::FarmDetails(farm) => assert_eq!(farm.id, "farm_002"),
            other => panic!("unexpected page {:?}", other),
        }
        assert_eq!(router.title(&farms), "Yeşil Dalga Tesisi");
    }

    #[test]
    fn test_other_tabs_clear_selection() {
        for tab in Tab::ALL {
            let mut router = signed_in();
            router.select_farm("farm_001");
            router.open_drawer();

            router.select_tab(tab);

            assert!(!router.drawer_open());
            if tab == Tab::FarmDetails {
                assert_eq!(router.selected_farm(), Some("farm_001"));
            } else {
                assert_eq!(router.selected_farm(), None);
            }
        }
    }

    #[test]
    fn test_unknown_or_missing_farm_falls_back() {
        let farms = catalog::farms();
        let mut router = signed_in();

        router.select_farm("farm_999");
        assert_eq!(router.resolve(&farms), Page::Farms);

        router.select_tab(Tab::FarmDetails);
        router.back();
        router.select_tab(Tab::FarmDetails);
        assert_eq!(router.resolve(&farms), Page::Farms);
        assert_eq!(router.title(&farms), "Çiftlikler");
    }

    #[test]
    fn test_back_returns_to_farms() {
        let mut router = signed_in();
        router.select_farm("farm_003");
        router.back();

        assert_eq!(router.active(), Tab::Farms);
        assert_eq!(router.selected_farm(), None);
    }

    #[test]
    fn test_hotkeys() {
        assert_eq!(Tab::from_hotkey('1'), Some(Tab::Dashboard));
        assert_eq!(Tab::from_hotkey('7'), Some(Tab::Profile));
        assert_eq!(Tab::from_hotkey('0'), None);
        assert_eq!(Tab::from_hotkey('8'), None);
        assert_eq!(Tab::Reports.hotkey(), Some('5'));
        assert_eq!(Tab::FarmDetails.hotkey(), None);
    }

    #[test]
    fn test_logout_resets() {
        let mut router = signed_in();
        router.select_farm("farm_001");
        router.logout();

        assert_eq!(router.session(), Session::SignedOut);
        assert_eq!(router.active(), Tab::Dashboard);
        assert_eq!(router.selected_farm(), None);
    }
}
