// services/farm-dash/src/config.rs
//
// Layered configuration: YAML file, then FARM_DASH__* environment overrides

use anyhow::{Context, Result};
use config::{Config, Environment, File};
use farmkit::{DashboardConfig, FarmError, Metric, TimeRange};

/// Longest sensor history the details page will generate.
const MAX_HISTORY_DAYS: u32 = 365;

pub fn load_config(path: &str) -> Result<DashboardConfig> {
    let config = Config::builder()
        .add_source(File::with_name(path).required(false))
        .add_source(
            Environment::with_prefix("FARM_DASH")
                .prefix_separator("__")
                .separator("__")
                .try_parsing(true),
        )
        .build()
        .with_context(|| format!("reading configuration from {}", path))?;

    let config: DashboardConfig = config.try_deserialize()?;
    validate(&config)?;
    Ok(config)
}

/// Rejects values the dashboard cannot start with.
fn validate(config: &DashboardConfig) -> Result<()> {
    config.ui.default_metric.parse::<Metric>()?;
    config.ui.default_range.parse::<TimeRange>()?;
    if config.ui.refresh_ms == 0 {
        return Err(invalid("ui.refresh_ms must be greater than zero"));
    }
    if config.ui.chart_refresh_ticks == 0 {
        return Err(invalid("ui.chart_refresh_ticks must be greater than zero"));
    }
    if config.simulation.history_days > MAX_HISTORY_DAYS {
        return Err(invalid(&format!(
            "simulation.history_days must be at most {} (got {})",
            MAX_HISTORY_DAYS, config.simulation.history_days
        )));
    }
    Ok(())
}

fn invalid(message: &str) -> anyhow::Error {
    FarmError::ConfigError(message.to_string()).into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_uses_defaults() {
        let config = load_config("config/does-not-exist").unwrap();
        assert_eq!(config.simulation.login_delay_ms, 2_000);
        assert_eq!(config.ui.default_metric, "sicaklik");
    }

    #[test]
    fn test_validate_rejects_unknown_metric() {
        let mut config = DashboardConfig::default();
        config.ui.default_metric = "rüzgar".to_string();
        assert!(validate(&config).is_err());

        config.ui.default_metric = "ph".to_string();
        config.ui.refresh_ms = 0;
        assert!(validate(&config).is_err());
    }

    #[test]
    fn test_validate_caps_history_days() {
        let mut config = DashboardConfig::default();
        config.simulation.history_days = MAX_HISTORY_DAYS;
        assert!(validate(&config).is_ok());

        config.simulation.history_days = 1_000_000;
        let err = validate(&config).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<FarmError>(),
            Some(FarmError::ConfigError(msg)) if msg.contains("history_days")
        ));
    }
}
