use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FarmStatus {
    Healthy,
    Warning,
    Critical,
}

impl FarmStatus {
    pub const ALL: [FarmStatus; 3] = [FarmStatus::Healthy, FarmStatus::Warning, FarmStatus::Critical];

    pub fn as_str(&self) -> &'static str {
        match self {
            FarmStatus::Healthy => "healthy",
            FarmStatus::Warning => "warning",
            FarmStatus::Critical => "critical",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            FarmStatus::Healthy => "Sağlıklı",
            FarmStatus::Warning => "Uyarı",
            FarmStatus::Critical => "Kritik",
        }
    }

    pub fn tone(&self) -> StatusTone {
        match self {
            FarmStatus::Healthy => StatusTone::Positive,
            FarmStatus::Warning => StatusTone::Caution,
            FarmStatus::Critical => StatusTone::Alert,
        }
    }

    pub fn is_alert(&self) -> bool {
        matches!(self, FarmStatus::Warning | FarmStatus::Critical)
    }
}

/// Qualitative reading attached to a single sensor value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SensorStatus {
    Optimal,
    Excellent,
    Good,
    Warning,
    Critical,
}

impl SensorStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            SensorStatus::Optimal => "optimal",
            SensorStatus::Excellent => "excellent",
            SensorStatus::Good => "good",
            SensorStatus::Warning => "warning",
            SensorStatus::Critical => "critical",
        }
    }

    pub fn tone(&self) -> StatusTone {
        match self {
            SensorStatus::Optimal | SensorStatus::Excellent | SensorStatus::Good => {
                StatusTone::Positive
            }
            SensorStatus::Warning => StatusTone::Caution,
            SensorStatus::Critical => StatusTone::Alert,
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            SensorStatus::Optimal | SensorStatus::Excellent => "✅",
            SensorStatus::Good => "🟢",
            SensorStatus::Warning => "⚠️",
            SensorStatus::Critical => "🔴",
        }
    }
}

/// Colour family a status renders in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusTone {
    Positive,
    Caution,
    Alert,
    Neutral,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SensorChannel {
    Ph,
    Temperature,
    DissolvedOxygen,
    Salinity,
    Length,
    Growth,
}

impl SensorChannel {
    pub const ALL: [SensorChannel; 6] = [
        SensorChannel::Ph,
        SensorChannel::Temperature,
        SensorChannel::DissolvedOxygen,
        SensorChannel::Salinity,
        SensorChannel::Length,
        SensorChannel::Growth,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            SensorChannel::Ph => "pH",
            SensorChannel::Temperature => "Sıcaklık",
            SensorChannel::DissolvedOxygen => "Çözünmüş Oksijen",
            SensorChannel::Salinity => "Tuzluluk",
            SensorChannel::Length => "Uzunluk",
            SensorChannel::Growth => "Büyüme",
        }
    }

    pub fn unit(&self) -> &'static str {
        match self {
            SensorChannel::Ph => "",
            SensorChannel::Temperature => "°C",
            SensorChannel::DissolvedOxygen => "mg/L",
            SensorChannel::Salinity => "‰",
            SensorChannel::Length => "cm",
            SensorChannel::Growth => "%",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SensorValue {
    pub value: f64,
    pub status: SensorStatus,
    pub last_update: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SensorPanel {
    pub ph: SensorValue,
    pub temperature: SensorValue,
    pub dissolved_oxygen: SensorValue,
    pub salinity: SensorValue,
    pub length: SensorValue,
    pub growth: SensorValue,
}

impl SensorPanel {
    pub fn get(&self, channel: SensorChannel) -> &SensorValue {
        match channel {
            SensorChannel::Ph => &self.ph,
            SensorChannel::Temperature => &self.temperature,
            SensorChannel::DissolvedOxygen => &self.dissolved_oxygen,
            SensorChannel::Salinity => &self.salinity,
            SensorChannel::Length => &self.length,
            SensorChannel::Growth => &self.growth,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (SensorChannel, &SensorValue)> {
        SensorChannel::ALL.into_iter().map(move |c| (c, self.get(c)))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub address: String,
    pub coordinates: Coordinates,
    pub ocean: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FarmImage {
    pub id: String,
    pub url: String,
    pub timestamp: DateTime<Utc>,
    pub description: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SuggestionStatus {
    Pending,
    Completed,
    Dismissed,
}

/// AI-suggested action attached to a farm record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SuggestedAction {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub status: SuggestionStatus,
    pub description: String,
    pub ai_suggestion: String,
    pub timestamp: DateTime<Utc>,
    pub confidence: Option<u8>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Farm {
    pub id: String,
    pub name: String,
    pub location: Location,
    pub species: String,
    pub established_date: NaiveDate,
    pub area: f64,
    pub depth: String,
    pub status: FarmStatus,
    pub sensors: SensorPanel,
    pub images: Vec<FarmImage>,
    pub actions: Vec<SuggestedAction>,
}

/// Hourly snapshot of all six channels for one farm.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SensorReading {
    pub farm_id: String,
    pub timestamp: DateTime<Utc>,
    pub ph: f64,
    pub temperature: f64,
    pub dissolved_oxygen: f64,
    pub salinity: f64,
    pub length: f64,
    pub growth: f64,
}

impl SensorReading {
    pub fn get(&self, channel: SensorChannel) -> f64 {
        match channel {
            SensorChannel::Ph => self.ph,
            SensorChannel::Temperature => self.temperature,
            SensorChannel::DissolvedOxygen => self.dissolved_oxygen,
            SensorChannel::Salinity => self.salinity,
            SensorChannel::Length => self.length,
            SensorChannel::Growth => self.growth,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrendStatus {
    High,
    Low,
    Normal,
}

impl TrendStatus {
    /// Classifies a value against ±10% of its baseline.
    pub fn classify(value: f64, baseline: f64) -> Self {
        if value > baseline * 1.1 {
            TrendStatus::High
        } else if value < baseline * 0.9 {
            TrendStatus::Low
        } else {
            TrendStatus::Normal
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendPoint {
    #[serde(rename = "time")]
    pub label: String,
    pub value: f64,
    pub farm: Option<String>,
    pub status: Option<TrendStatus>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserStats {
    pub farms_managed: u32,
    pub actions_completed: u32,
    pub data_points_collected: u64,
    pub storage_used: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub avatar: String,
    pub role: String,
    pub organization: String,
    pub phone: String,
    pub member_since: NaiveDate,
    pub stats: UserStats,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrendDirection {
    Up,
    Down,
}

impl TrendDirection {
    pub fn arrow(&self) -> &'static str {
        match self {
            TrendDirection::Up => "▲",
            TrendDirection::Down => "▼",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Kpi {
    pub current: f64,
    pub previous: f64,
    pub change: f64,
    pub trend: TrendDirection,
    pub unit: Option<String>,
    pub status: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsKpis {
    pub general_growth: Kpi,
    pub water_quality: Kpi,
    pub energy_usage: Kpi,
    pub revenue: Kpi,
    pub productivity: Kpi,
    pub maintenance_costs: Kpi,
}

impl AnalyticsKpis {
    /// Named rows in display order.
    pub fn rows(&self) -> [(&'static str, &Kpi); 6] {
        [
            ("Genel Büyüme", &self.general_growth),
            ("Su Kalitesi", &self.water_quality),
            ("Enerji Kullanımı", &self.energy_usage),
            ("Gelir", &self.revenue),
            ("Verimlilik", &self.productivity),
            ("Bakım Maliyetleri", &self.maintenance_costs),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FarmPerformance {
    pub farm_id: String,
    pub farm_name: String,
    pub performance: f64,
    pub efficiency: f64,
    pub growth_rate: f64,
    pub energy_efficiency: f64,
    pub water_quality: f64,
    pub trend: TrendDirection,
    pub change: f64,
    pub status: FarmStatus,
    pub last_update: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PredictionKind {
    Growth,
    Harvest,
    Weather,
    Maintenance,
    Market,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Impact {
    Positive,
    Warning,
    Neutral,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
    #[serde(rename = "type")]
    pub kind: PredictionKind,
    pub title: String,
    pub description: String,
    pub confidence: u8,
    pub timeframe: String,
    pub impact: Impact,
    pub icon: String,
}

/// One day of the long-term analytics history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsSnapshot {
    pub timestamp: DateTime<Utc>,
    pub ph: f64,
    pub temperature: f64,
    pub dissolved_oxygen: f64,
    pub salinity: f64,
    pub growth: f64,
    pub productivity: f64,
    pub energy_usage: f64,
    pub revenue: f64,
    pub water_quality: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FarmKeyMetrics {
    pub average_growth: f64,
    pub efficiency: f64,
    pub health_index: f64,
    pub estimated_harvest: f64,
    pub water_quality: f64,
    pub energy_efficiency: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    pub total_farms: usize,
    pub healthy_farms: usize,
    pub alert_farms: usize,
    pub average_temperature: f64,
    pub total_area: f64,
    pub healthy_percent: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trend_status_bounds_are_exclusive() {
        assert_eq!(TrendStatus::classify(11.0, 10.0), TrendStatus::Normal);
        assert_eq!(TrendStatus::classify(11.01, 10.0), TrendStatus::High);
        assert_eq!(TrendStatus::classify(9.0, 10.0), TrendStatus::Normal);
        assert_eq!(TrendStatus::classify(8.99, 10.0), TrendStatus::Low);
    }

    #[test]
    fn test_status_wire_names() {
        assert_eq!(serde_json::to_string(&FarmStatus::Critical).unwrap(), "\"critical\"");
        assert_eq!(
            serde_json::to_string(&SensorChannel::DissolvedOxygen).unwrap(),
            "\"dissolvedOxygen\""
        );
        assert_eq!(FarmStatus::Warning.as_str(), "warning");
    }

    #[test]
    fn test_sensor_tones() {
        assert_eq!(SensorStatus::Good.tone(), StatusTone::Positive);
        assert_eq!(SensorStatus::Warning.tone(), StatusTone::Caution);
        assert_eq!(SensorStatus::Critical.tone(), StatusTone::Alert);
        assert!(FarmStatus::Critical.is_alert());
        assert!(!FarmStatus::Healthy.is_alert());
    }
}
