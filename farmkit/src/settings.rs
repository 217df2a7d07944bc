// farmkit/src/settings.rs
//
// Account and application preferences. Nothing is saved; changes last
// for the session

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SettingsTab {
    #[default]
    Profil,
    Bildirimler,
    Guvenlik,
    Tercihler,
    Api,
}

impl SettingsTab {
    pub const ALL: [SettingsTab; 5] = [
        SettingsTab::Profil,
        SettingsTab::Bildirimler,
        SettingsTab::Guvenlik,
        SettingsTab::Tercihler,
        SettingsTab::Api,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            SettingsTab::Profil => "Profil",
            SettingsTab::Bildirimler => "Bildirimler",
            SettingsTab::Guvenlik => "Güvenlik",
            SettingsTab::Tercihler => "Tercihler",
            SettingsTab::Api => "API",
        }
    }

    pub fn next(&self) -> Self {
        let idx = Self::ALL.iter().position(|t| t == self).unwrap_or(0);
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }

    pub fn prev(&self) -> Self {
        let idx = Self::ALL.iter().position(|t| t == self).unwrap_or(0);
        Self::ALL[(idx + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationChannel {
    Email,
    Push,
    Sms,
    Alerts,
    Reports,
}

impl NotificationChannel {
    pub const ALL: [NotificationChannel; 5] = [
        NotificationChannel::Email,
        NotificationChannel::Push,
        NotificationChannel::Sms,
        NotificationChannel::Alerts,
        NotificationChannel::Reports,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            NotificationChannel::Email => "E-posta Bildirimleri",
            NotificationChannel::Push => "Anlık Bildirimler",
            NotificationChannel::Sms => "SMS Bildirimleri",
            NotificationChannel::Alerts => "Kritik Uyarılar",
            NotificationChannel::Reports => "Haftalık Raporlar",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationPrefs {
    pub email: bool,
    pub push: bool,
    pub sms: bool,
    pub alerts: bool,
    pub reports: bool,
}

impl Default for NotificationPrefs {
    fn default() -> Self {
        Self {
            email: true,
            push: false,
            sms: true,
            alerts: true,
            reports: false,
        }
    }
}

impl NotificationPrefs {
    fn slot(&mut self, channel: NotificationChannel) -> &mut bool {
        match channel {
            NotificationChannel::Email => &mut self.email,
            NotificationChannel::Push => &mut self.push,
            NotificationChannel::Sms => &mut self.sms,
            NotificationChannel::Alerts => &mut self.alerts,
            NotificationChannel::Reports => &mut self.reports,
        }
    }

    pub fn enabled(&self, channel: NotificationChannel) -> bool {
        match channel {
            NotificationChannel::Email => self.email,
            NotificationChannel::Push => self.push,
            NotificationChannel::Sms => self.sms,
            NotificationChannel::Alerts => self.alerts,
            NotificationChannel::Reports => self.reports,
        }
    }

    /// Flips one channel and returns its new state.
    pub fn toggle(&mut self, channel: NotificationChannel) -> bool {
        let slot = self.slot(channel);
        *slot = !*slot;
        *slot
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Acik,
    Koyu,
}

impl Theme {
    pub fn label(&self) -> &'static str {
        match self {
            Theme::Acik => "Açık",
            Theme::Koyu => "Koyu",
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            Theme::Acik => Theme::Koyu,
            Theme::Koyu => Theme::Acik,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preferences {
    pub theme: Theme,
    pub language: String,
    pub timezone: String,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            theme: Theme::Acik,
            language: "tr".to_string(),
            timezone: "UTC+3".to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Settings {
    pub tab: SettingsTab,
    pub notifications: NotificationPrefs,
    pub preferences: Preferences,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notification_defaults() {
        let prefs = NotificationPrefs::default();
        let enabled: Vec<bool> = NotificationChannel::ALL.iter().map(|c| prefs.enabled(*c)).collect();
        assert_eq!(enabled, vec![true, false, true, true, false]);
    }

    #[test]
    fn test_toggle_flips_only_one_channel() {
        let mut prefs = NotificationPrefs::default();
        assert!(prefs.toggle(NotificationChannel::Push));
        assert!(prefs.push);
        assert!(prefs.email);
        assert!(!prefs.toggle(NotificationChannel::Push));
    }

    #[test]
    fn test_tab_cycle_and_defaults() {
        assert_eq!(SettingsTab::Api.next(), SettingsTab::Profil);
        assert_eq!(SettingsTab::Profil.prev(), SettingsTab::Api);

        let settings = Settings::default();
        assert_eq!(settings.preferences.theme, Theme::Acik);
        assert_eq!(settings.preferences.language, "tr");
        assert_eq!(settings.preferences.timezone, "UTC+3");
        assert_eq!(Theme::Acik.toggled(), Theme::Koyu);
    }
}
