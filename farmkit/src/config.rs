use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Fixed seed for the mock data generator; random when absent.
    pub seed: Option<u64>,
    pub history_days: u32,
    pub login_delay_ms: u64,
    pub upload_delay_ms: u64,
    /// When false the loading delay ends on the login page instead of signing in.
    pub auto_login: bool,
}

impl SimulationConfig {
    pub fn login_delay(&self) -> Duration {
        Duration::from_millis(self.login_delay_ms)
    }

    pub fn upload_delay(&self) -> Duration {
        Duration::from_millis(self.upload_delay_ms)
    }
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            seed: None,
            history_days: 7,
            login_delay_ms: 2_000,
            upload_delay_ms: 1_000,
            auto_login: true,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    pub refresh_ms: u64,
    /// How often chart series are regenerated, in ticks.
    pub chart_refresh_ticks: u64,
    pub default_metric: String,
    pub default_range: String,
    /// Terminals narrower than this hide the sidebar unless it is toggled open.
    pub compact_width: u16,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            refresh_ms: 250,
            chart_refresh_ticks: 20,
            default_metric: "sicaklik".to_string(),
            default_range: "7g".to_string(),
            compact_width: 110,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    pub log_level: String,
    pub log_file: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            log_file: "farm-dash.log".to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    pub simulation: SimulationConfig,
    pub ui: UiConfig,
    pub observability: ObservabilityConfig,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_simulated_latencies() {
        let config = DashboardConfig::default();

        assert_eq!(config.simulation.login_delay(), Duration::from_secs(2));
        assert_eq!(config.simulation.upload_delay(), Duration::from_secs(1));
        assert!(config.simulation.auto_login);
        assert_eq!(config.ui.default_range, "7g");
    }

    #[test]
    fn test_partial_document_fills_defaults() {
        let config: DashboardConfig =
            serde_json::from_str(r#"{"simulation": {"seed": 42}}"#).unwrap();

        assert_eq!(config.simulation.seed, Some(42));
        assert_eq!(config.simulation.history_days, 7);
        assert_eq!(config.observability.log_level, "info");
    }
}
