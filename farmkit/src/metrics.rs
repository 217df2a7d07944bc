// farmkit/src/metrics.rs
//
// Chartable metrics and time ranges
//
// Each Metric owns a named TrendModel strategy: baseline, chart amplitude
// and the periodic shape of its series. The generator adds uniform noise of
// half-width `jitter` on top of `wave`

use serde::{Deserialize, Serialize};
use std::f64::consts::PI;
use std::fmt;
use std::str::FromStr;

use crate::errors::FarmError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TimeRange {
    #[serde(rename = "24s")]
    Hours24,
    #[serde(rename = "7g")]
    Days7,
    #[serde(rename = "30g")]
    Days30,
    #[serde(rename = "90g")]
    Days90,
}

const WEEKDAYS: [&str; 7] = ["Paz", "Pzt", "Sal", "Çar", "Per", "Cum", "Cmt"];

impl TimeRange {
    pub const ALL: [TimeRange; 4] = [
        TimeRange::Hours24,
        TimeRange::Days7,
        TimeRange::Days30,
        TimeRange::Days90,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            TimeRange::Hours24 => "24s",
            TimeRange::Days7 => "7g",
            TimeRange::Days30 => "30g",
            TimeRange::Days90 => "90g",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            TimeRange::Hours24 => "24 Saat",
            TimeRange::Days7 => "7 Gün",
            TimeRange::Days30 => "30 Gün",
            TimeRange::Days90 => "90 Gün",
        }
    }

    pub fn bucket_count(&self) -> usize {
        match self {
            TimeRange::Hours24 => 24,
            TimeRange::Days7 => 7,
            TimeRange::Days30 => 30,
            TimeRange::Days90 => 90,
        }
    }

    /// Axis label for bucket `i`. The 90-day range only labels every 15th day.
    pub fn label(&self, i: usize) -> String {
        match self {
            TimeRange::Hours24 => format!("{:02}:00", i),
            TimeRange::Days7 => WEEKDAYS[i % WEEKDAYS.len()].to_string(),
            TimeRange::Days30 => (i + 1).to_string(),
            TimeRange::Days90 if i % 15 == 0 => format!("{}. Gün", i + 1),
            TimeRange::Days90 => String::new(),
        }
    }

    pub fn next(&self) -> Self {
        let idx = Self::ALL.iter().position(|r| r == self).unwrap_or(0);
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }
}

impl Default for TimeRange {
    fn default() -> Self {
        TimeRange::Days7
    }
}

impl FromStr for TimeRange {
    type Err = FarmError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TimeRange::ALL
            .into_iter()
            .find(|r| r.key() == s)
            .ok_or_else(|| FarmError::UnknownTimeRange(s.to_string()))
    }
}

impl fmt::Display for TimeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Shape of a synthetic metric series. `t` is the bucket position in `[0, 1)`.
pub trait TrendModel: Send + Sync {
    fn baseline(&self) -> f64;
    /// Expected swing around the baseline, used for chart scaling.
    fn amplitude(&self) -> f64;
    fn wave(&self, t: f64, range: TimeRange) -> f64;
    fn jitter(&self, range: TimeRange) -> f64;
}

/// Daily sinusoid over 24 hours, seasonal drift with noise otherwise.
pub struct DailyCycle;

impl TrendModel for DailyCycle {
    fn baseline(&self) -> f64 {
        22.0
    }

    fn amplitude(&self) -> f64 {
        8.0
    }

    fn wave(&self, t: f64, range: TimeRange) -> f64 {
        match range {
            TimeRange::Hours24 => (t * 2.0 * PI - PI / 2.0).sin() * 3.0,
            _ => (t * 2.0 * PI).sin() * 2.0,
        }
    }

    fn jitter(&self, range: TimeRange) -> f64 {
        match range {
            TimeRange::Hours24 => 0.0,
            _ => 0.75,
        }
    }
}

/// Buffered chemistry: small double-frequency oscillation.
pub struct Stable;

impl TrendModel for Stable {
    fn baseline(&self) -> f64 {
        7.2
    }

    fn amplitude(&self) -> f64 {
        1.6
    }

    fn wave(&self, t: f64, _range: TimeRange) -> f64 {
        (t * 4.0 * PI).sin() * 0.3
    }

    fn jitter(&self, _range: TimeRange) -> f64 {
        0.1
    }
}

/// Mirrors the temperature cycle: warm water holds less oxygen.
pub struct InverseTemperature;

impl TrendModel for InverseTemperature {
    fn baseline(&self) -> f64 {
        7.5
    }

    fn amplitude(&self) -> f64 {
        3.5
    }

    fn wave(&self, t: f64, range: TimeRange) -> f64 {
        match range {
            TimeRange::Hours24 => -(t * 2.0 * PI - PI / 2.0).sin() * 1.5,
            _ => -(t * 2.0 * PI).sin(),
        }
    }

    fn jitter(&self, range: TimeRange) -> f64 {
        match range {
            TimeRange::Hours24 => 0.0,
            _ => 0.4,
        }
    }
}

/// One and a half weather fronts across the window.
pub struct WeatherCycle;

impl TrendModel for WeatherCycle {
    fn baseline(&self) -> f64 {
        3.2
    }

    fn amplitude(&self) -> f64 {
        1.8
    }

    fn wave(&self, t: f64, _range: TimeRange) -> f64 {
        (t * 3.0 * PI).sin() * 0.5
    }

    fn jitter(&self, _range: TimeRange) -> f64 {
        0.15
    }
}

/// Logistic-like ramp (arctangent) with a seasonal ripple.
pub struct LogisticGrowth;

impl TrendModel for LogisticGrowth {
    fn baseline(&self) -> f64 {
        2.1
    }

    fn amplitude(&self) -> f64 {
        2.8
    }

    fn wave(&self, t: f64, _range: TimeRange) -> f64 {
        ((t - 0.5) * 6.0).atan() * 0.8 + (t * 2.0 * PI).sin() * 0.3
    }

    fn jitter(&self, _range: TimeRange) -> f64 {
        0.1
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Metric {
    #[serde(rename = "sicaklik")]
    Temperature,
    #[serde(rename = "ph")]
    Ph,
    #[serde(rename = "cozunmusOksijen")]
    DissolvedOxygen,
    #[serde(rename = "tuzluluk")]
    Salinity,
    #[serde(rename = "buyume")]
    Growth,
}

impl Metric {
    pub const ALL: [Metric; 5] = [
        Metric::Temperature,
        Metric::Ph,
        Metric::DissolvedOxygen,
        Metric::Salinity,
        Metric::Growth,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            Metric::Temperature => "sicaklik",
            Metric::Ph => "ph",
            Metric::DissolvedOxygen => "cozunmusOksijen",
            Metric::Salinity => "tuzluluk",
            Metric::Growth => "buyume",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Metric::Temperature => "Sıcaklık",
            Metric::Ph => "pH Seviyesi",
            Metric::DissolvedOxygen => "Çözünmüş Oksijen",
            Metric::Salinity => "Tuzluluk",
            Metric::Growth => "Büyüme Oranı",
        }
    }

    pub fn unit(&self) -> &'static str {
        match self {
            Metric::Temperature => "°C",
            Metric::Ph => "",
            Metric::DissolvedOxygen => "mg/L",
            Metric::Salinity => "‰",
            Metric::Growth => "%",
        }
    }

    pub fn model(&self) -> &'static dyn TrendModel {
        match self {
            Metric::Temperature => &DailyCycle,
            Metric::Ph => &Stable,
            Metric::DissolvedOxygen => &InverseTemperature,
            Metric::Salinity => &WeatherCycle,
            Metric::Growth => &LogisticGrowth,
        }
    }

    pub fn next(&self) -> Self {
        let idx = Self::ALL.iter().position(|m| m == self).unwrap_or(0);
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }
}

impl Default for Metric {
    fn default() -> Self {
        Metric::Temperature
    }
}

impl FromStr for Metric {
    type Err = FarmError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Metric::ALL
            .into_iter()
            .find(|m| m.key() == s)
            .ok_or_else(|| FarmError::UnknownMetric(s.to_string()))
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bucket_counts() {
        let counts: Vec<usize> = TimeRange::ALL.iter().map(|r| r.bucket_count()).collect();
        assert_eq!(counts, vec![24, 7, 30, 90]);
    }

    #[test]
    fn test_labels() {
        assert_eq!(TimeRange::Hours24.label(5), "05:00");
        assert_eq!(TimeRange::Days7.label(3), "Çar");
        assert_eq!(TimeRange::Days30.label(0), "1");
        assert_eq!(TimeRange::Days90.label(15), "16. Gün");
        assert_eq!(TimeRange::Days90.label(16), "");
    }

    #[test]
    fn test_parse_keys() {
        assert_eq!("cozunmusOksijen".parse::<Metric>().unwrap(), Metric::DissolvedOxygen);
        assert_eq!("90g".parse::<TimeRange>().unwrap(), TimeRange::Days90);
        assert_eq!(
            "rüzgar".parse::<Metric>(),
            Err(FarmError::UnknownMetric("rüzgar".to_string()))
        );
        assert!("1y".parse::<TimeRange>().is_err());
    }

    #[test]
    fn test_daily_cycle_troughs_at_midnight() {
        let model = Metric::Temperature.model();
        assert!((model.wave(0.0, TimeRange::Hours24) + 3.0).abs() < 1e-9);
        assert!((model.wave(0.5, TimeRange::Hours24) - 3.0).abs() < 1e-9);
        assert_eq!(model.jitter(TimeRange::Hours24), 0.0);
    }

    #[test]
    fn test_oxygen_mirrors_temperature() {
        let temp = Metric::Temperature.model();
        let oxygen = Metric::DissolvedOxygen.model();
        for i in 0..24 {
            let t = i as f64 / 24.0;
            let ratio = oxygen.wave(t, TimeRange::Hours24) / 1.5 + temp.wave(t, TimeRange::Hours24) / 3.0;
            assert!(ratio.abs() < 1e-9);
        }
    }

    #[test]
    fn test_cycling_wraps() {
        assert_eq!(Metric::Growth.next(), Metric::Temperature);
        assert_eq!(TimeRange::Days90.next(), TimeRange::Hours24);
    }
}
