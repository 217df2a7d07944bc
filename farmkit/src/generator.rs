// farmkit/src/generator.rs
//
// Mock data generator
//
// Every series the dashboard draws comes from here. The random source and
// the clock are injected so a seeded generator with a FixedClock reproduces
// the same output; nothing is cached between calls

use chrono::Duration;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::f64::consts::PI;
use tracing::debug;

use crate::catalog::{self, ImageKind};
use crate::clock::{Clock, SystemClock};
use crate::metrics::{Metric, TimeRange};
use crate::types::{
    AnalyticsKpis, AnalyticsSnapshot, DashboardSummary, Farm, FarmImage, FarmKeyMetrics,
    FarmPerformance, FarmStatus, Kpi, Prediction, SensorReading, TrendDirection, TrendPoint, TrendStatus,
};

/// Per-channel multipliers applied to the shared ±0.1 hourly variance.
const HISTORY_SCALE: [f64; 6] = [1.0, 2.0, 1.0, 0.5, 5.0, 0.3];

fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

pub struct MockDataGenerator<R = StdRng, C = SystemClock> {
    rng: R,
    clock: C,
    farms: Vec<Farm>,
}

impl MockDataGenerator<StdRng, SystemClock> {
    /// Wall-clock generator; seeded when `seed` is given, entropy otherwise.
    pub fn from_seed(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self::new(rng, SystemClock)
    }
}

impl<R: Rng, C: Clock> MockDataGenerator<R, C> {
    pub fn new(rng: R, clock: C) -> Self {
        Self::with_farms(rng, clock, catalog::farms())
    }

    pub fn with_farms(rng: R, clock: C, farms: Vec<Farm>) -> Self {
        Self { rng, clock, farms }
    }

    pub fn farms(&self) -> &[Farm] {
        &self.farms
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    fn noise(&mut self, half_width: f64) -> f64 {
        if half_width > 0.0 {
            self.rng.gen_range(-half_width..half_width)
        } else {
            0.0
        }
    }

    fn unit(&mut self) -> f64 {
        self.rng.gen::<f64>()
    }

    /// Hourly readings for the last `days` days, oldest first, ending now.
    /// Unknown farms yield an empty history.
    pub fn sensor_history(&mut self, farm_id: &str, days: u32) -> Vec<SensorReading> {
        let Some(farm) = self.farms.iter().find(|f| f.id == farm_id) else {
            debug!("no sensor history for unknown farm {}", farm_id);
            return Vec::new();
        };
        let sensors = farm.sensors.clone();
        let farm_id = farm.id.clone();

        let now = self.clock.now();
        let hours = i64::from(days) * 24;
        let mut history = Vec::with_capacity(hours as usize + 1);

        for i in (0..=hours).rev() {
            let mut variance = [0.0; 6];
            for (slot, scale) in variance.iter_mut().zip(HISTORY_SCALE) {
                *slot = (self.unit() - 0.5) * 0.2 * scale;
            }

            history.push(SensorReading {
                farm_id: farm_id.clone(),
                timestamp: now - Duration::hours(i),
                ph: sensors.ph.value + variance[0],
                temperature: sensors.temperature.value + variance[1],
                dissolved_oxygen: sensors.dissolved_oxygen.value + variance[2],
                salinity: sensors.salinity.value + variance[3],
                length: sensors.length.value + variance[4],
                growth: sensors.growth.value + variance[5],
            });
        }

        history
    }

    /// Chart series for `metric` over `range`, one point per bucket.
    pub fn analytics_trends(&mut self, metric: Metric, range: TimeRange) -> Vec<TrendPoint> {
        let model = metric.model();
        let count = range.bucket_count();
        let baseline = model.baseline();

        (0..count)
            .map(|i| {
                let t = i as f64 / count as f64;
                let wave = model.wave(t, range) + self.noise(model.jitter(range));
                let value = round_to((baseline + wave).max(0.0), 2);

                TrendPoint {
                    label: range.label(i),
                    value,
                    farm: self.farm_name(i),
                    status: Some(TrendStatus::classify(value, baseline)),
                }
            })
            .collect()
    }

    /// Plain fallback series: gentle sine plus ±1 noise, always `normal`.
    pub fn simple_trend(&mut self, metric: Metric, range: TimeRange) -> Vec<TrendPoint> {
        let baseline = metric.model().baseline();

        (0..range.bucket_count())
            .map(|i| {
                let label = match range {
                    TimeRange::Days90 if i % 15 != 0 => (i + 1).to_string(),
                    _ => range.label(i),
                };
                let value = baseline + (i as f64 * 0.5).sin() * 2.0 + self.noise(1.0);

                TrendPoint {
                    label,
                    value: round_to(value, 2),
                    farm: None,
                    status: Some(TrendStatus::Normal),
                }
            })
            .collect()
    }

    fn farm_name(&self, i: usize) -> Option<String> {
        if self.farms.is_empty() {
            None
        } else {
            Some(self.farms[i % self.farms.len()].name.clone())
        }
    }

    pub fn analytics_kpis(&self) -> AnalyticsKpis {
        analytics_kpis()
    }

    /// Per-farm scorecard; later farms in the catalog get a higher base score.
    pub fn farm_performance(&mut self) -> Vec<FarmPerformance> {
        let farms = self.farms.clone();

        farms
            .iter()
            .enumerate()
            .map(|(index, farm)| {
                let base = 65.0 + index as f64 * 8.0 + self.unit() * 15.0;
                let trend = if self.unit() > 0.7 {
                    TrendDirection::Down
                } else {
                    TrendDirection::Up
                };
                let change = self.unit() * 12.0 + 2.0;

                FarmPerformance {
                    farm_id: farm.id.clone(),
                    farm_name: farm.name.clone(),
                    performance: round_to(base, 1),
                    efficiency: round_to(base * 0.9 + self.unit() * 10.0, 1),
                    growth_rate: round_to(farm.sensors.growth.value + self.unit() * 0.5, 2),
                    energy_efficiency: round_to(85.0 + self.unit() * 20.0, 1),
                    water_quality: round_to(88.0 + self.unit() * 12.0, 1),
                    trend,
                    change: round_to(change, 1),
                    status: farm.status,
                    last_update: farm.sensors.growth.last_update,
                }
            })
            .collect()
    }

    pub fn predictions(&self) -> Vec<Prediction> {
        catalog::predictions()
    }

    /// Daily history for the last `days` days plus today, oldest first.
    pub fn historical_analytics(&mut self, days: u32) -> Vec<AnalyticsSnapshot> {
        let now = self.clock.now();

        (0..=days)
            .rev()
            .map(|i| {
                let day = f64::from(i);
                let seasonal = ((365.0 - day) / 365.0 * 2.0 * PI).sin() * 0.3 + 1.0;
                let weekly = (day / 7.0 * 2.0 * PI).sin() * 0.1 + 1.0;
                let random = self.unit() * 0.2 + 0.9;
                let combined = seasonal * weekly * random;

                AnalyticsSnapshot {
                    timestamp: now - Duration::days(i64::from(i)),
                    ph: 7.2 + (self.unit() - 0.5) * 0.6,
                    temperature: 20.0 + (day / 30.0 * 2.0 * PI).sin() * 4.0 + (self.unit() - 0.5) * 2.0,
                    dissolved_oxygen: 8.0 + (self.unit() - 0.5) * 2.0,
                    salinity: 3.2 + (self.unit() - 0.5) * 0.8,
                    growth: 2.1 * combined + (self.unit() - 0.5) * 0.5,
                    productivity: 75.0 + combined * 15.0 + (self.unit() - 0.5) * 10.0,
                    energy_usage: 1200.0 + self.unit() * 300.0,
                    revenue: 150_000.0 + combined * 50_000.0 + self.unit() * 20_000.0,
                    water_quality: 90.0 + self.unit() * 10.0,
                }
            })
            .collect()
    }

    /// Headline numbers for the farm detail page.
    pub fn farm_key_metrics(&mut self, farm: &Farm) -> FarmKeyMetrics {
        let (efficiency, health_index) = match farm.status {
            FarmStatus::Healthy => (94.2, 8.7),
            FarmStatus::Warning => (78.5, 6.8),
            FarmStatus::Critical => (62.3, 4.2),
        };
        let sensors = &farm.sensors;

        FarmKeyMetrics {
            average_growth: sensors.growth.value,
            efficiency,
            health_index,
            estimated_harvest: farm.area * (sensors.growth.value / 2.1) * 1.8,
            water_quality: (sensors.ph.value + sensors.dissolved_oxygen.value + sensors.salinity.value)
                / 3.0
                * 10.0,
            energy_efficiency: 85.0 + self.unit() * 10.0,
        }
    }

    /// 24 bar heights for the dashboard activity strip.
    pub fn hourly_activity(&mut self) -> Vec<f64> {
        (0..24)
            .map(|i| (f64::from(i) * 0.3).sin() * 20.0 + 40.0 + self.unit() * 10.0)
            .collect()
    }

    pub fn image_url(&mut self, kind: ImageKind) -> &'static str {
        let urls = catalog::image_urls(kind);
        urls[self.rng.gen_range(0..urls.len())]
    }

    /// Fabricated camera capture for `farm`, picked from the pool matching its status.
    pub fn capture_image(&mut self, farm: &Farm) -> FarmImage {
        let timestamp = self.clock.now();
        let url = self.image_url(ImageKind::for_status(farm.status));

        FarmImage {
            id: format!("img_{}_{}", farm.id, timestamp.timestamp_millis()),
            url: url.to_string(),
            timestamp,
            description: format!("Yeni çekim - {}", farm.status.label()),
        }
    }

    pub fn dashboard_summary(&self) -> DashboardSummary {
        dashboard_summary(&self.farms)
    }
}

fn kpi(current: f64, previous: f64, change: f64, trend: TrendDirection, unit: Option<&str>) -> Kpi {
    Kpi {
        current,
        previous,
        change,
        trend,
        unit: unit.map(str::to_string),
        status: None,
    }
}

/// Business KPIs. These are fixed figures, not derived from farm data.
pub fn analytics_kpis() -> AnalyticsKpis {
    use TrendDirection::{Down, Up};

    AnalyticsKpis {
        general_growth: kpi(12.8, 11.1, 15.2, Up, None),
        water_quality: Kpi {
            status: Some("optimal".to_string()),
            ..kpi(94.2, 91.8, 2.6, Up, None)
        },
        energy_usage: kpi(1247.0, 1317.0, -5.3, Down, Some("kWh")),
        revenue: kpi(184_350.0, 169_420.0, 8.7, Up, Some("₺")),
        productivity: kpi(87.3, 82.1, 6.3, Up, Some("%")),
        maintenance_costs: kpi(12_400.0, 15_300.0, -19.0, Down, Some("₺")),
    }
}

pub fn dashboard_summary(farms: &[Farm]) -> DashboardSummary {
    let total_farms = farms.len();
    let healthy_farms = farms.iter().filter(|f| f.status == FarmStatus::Healthy).count();
    let alert_farms = farms.iter().filter(|f| f.status.is_alert()).count();
    let (average_temperature, healthy_percent) = if total_farms == 0 {
        (0.0, 0)
    } else {
        let temperature_sum: f64 = farms.iter().map(|f| f.sensors.temperature.value).sum();
        (
            temperature_sum / total_farms as f64,
            (healthy_farms as f64 / total_farms as f64 * 100.0).round() as u32,
        )
    };

    DashboardSummary {
        total_farms,
        healthy_farms,
        alert_farms,
        average_temperature,
        total_area: farms.iter().map(|f| f.area).sum(),
        healthy_percent,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use chrono::{TimeZone, Utc};

    fn generator(seed: u64) -> MockDataGenerator<StdRng, FixedClock> {
        let now = Utc.with_ymd_and_hms(2025, 7, 3, 18, 0, 0).unwrap();
        MockDataGenerator::new(StdRng::seed_from_u64(seed), FixedClock::new(now))
    }

    #[test]
    fn test_sensor_history_shape_for_every_farm() {
        let mut mock = generator(7);
        let now = mock.clock().now();
        let ids: Vec<String> = mock.farms().iter().map(|f| f.id.clone()).collect();

        for id in ids {
            for days in [0u32, 1, 3, 7] {
                let history = mock.sensor_history(&id, days);
                assert_eq!(history.len(), days as usize * 24 + 1);
                assert!(history.windows(2).all(|w| w[0].timestamp < w[1].timestamp));
                assert_eq!(history.last().unwrap().timestamp, now);
                assert!(history.iter().all(|r| r.farm_id == id));
            }
        }
    }

    #[test]
    fn test_sensor_history_unknown_farm_is_empty() {
        let mut mock = generator(7);
        assert!(mock.sensor_history("farm_404", 7).is_empty());
    }

    #[test]
    fn test_one_day_history_for_first_farm() {
        let mut mock = generator(11);
        let history = mock.sensor_history("farm_001", 1);

        assert_eq!(history.len(), 25);
        for reading in &history {
            assert!((reading.ph - 6.8).abs() <= 0.1 + 1e-12, "ph {}", reading.ph);
            assert!((reading.temperature - 18.5).abs() <= 0.2 + 1e-12);
            assert!((reading.length - 80.0).abs() <= 0.5 + 1e-12);
        }
    }

    #[test]
    fn test_trends_for_every_metric_and_range() {
        let mut mock = generator(3);

        for metric in Metric::ALL {
            let baseline = metric.model().baseline();
            for range in TimeRange::ALL {
                let points = mock.analytics_trends(metric, range);
                assert_eq!(points.len(), range.bucket_count());
                for point in &points {
                    assert!(point.value >= 0.0);
                    let expected = if point.value > baseline * 1.1 {
                        TrendStatus::High
                    } else if point.value < baseline * 0.9 {
                        TrendStatus::Low
                    } else {
                        TrendStatus::Normal
                    };
                    assert_eq!(point.status, Some(expected));
                    assert!(point.farm.is_some());
                }
            }
        }
    }

    #[test]
    fn test_hourly_temperature_is_deterministic_cycle() {
        let mut a = generator(1);
        let mut b = generator(99);

        let first = a.analytics_trends(Metric::Temperature, TimeRange::Hours24);
        let second = b.analytics_trends(Metric::Temperature, TimeRange::Hours24);

        assert_eq!(first, second);
        assert_eq!(first[0].label, "00:00");
        assert_eq!(first[0].value, 19.0);
        assert_eq!(first[12].value, 25.0);
        assert_eq!(first[12].status, Some(TrendStatus::High));
    }

    #[test]
    fn test_same_seed_same_series() {
        let mut a = generator(42);
        let mut b = generator(42);

        assert_eq!(
            a.analytics_trends(Metric::Growth, TimeRange::Days30),
            b.analytics_trends(Metric::Growth, TimeRange::Days30)
        );
        assert_eq!(a.sensor_history("farm_002", 1), b.sensor_history("farm_002", 1));
    }

    #[test]
    fn test_empty_catalog_still_produces_points() {
        let now = Utc.with_ymd_and_hms(2025, 7, 3, 18, 0, 0).unwrap();
        let mut mock = MockDataGenerator::with_farms(StdRng::seed_from_u64(5), FixedClock::new(now), vec![]);

        let points = mock.analytics_trends(Metric::Ph, TimeRange::Days7);
        assert_eq!(points.len(), 7);
        assert!(points.iter().all(|p| p.farm.is_none()));
        assert!(mock.farm_performance().is_empty());
        assert_eq!(mock.dashboard_summary().healthy_percent, 0);
    }

    #[test]
    fn test_simple_trend_labels_every_day() {
        let mut mock = generator(8);
        let points = mock.simple_trend(Metric::Growth, TimeRange::Days90);

        assert_eq!(points.len(), 90);
        assert_eq!(points[0].label, "1. Gün");
        assert_eq!(points[1].label, "2");
        assert!(points.iter().all(|p| p.status == Some(TrendStatus::Normal)));
    }

    #[test]
    fn test_kpis_are_constant() {
        let kpis = analytics_kpis();
        assert_eq!(kpis.revenue.current, 184_350.0);
        assert_eq!(kpis.maintenance_costs.trend, TrendDirection::Down);
        assert_eq!(kpis.water_quality.status.as_deref(), Some("optimal"));
        assert_eq!(kpis, generator(1).analytics_kpis());
    }

    #[test]
    fn test_farm_performance_bounds() {
        let mut mock = generator(21);
        let rows = mock.farm_performance();

        assert_eq!(rows.len(), 5);
        for (index, row) in rows.iter().enumerate() {
            let floor = 65.0 + index as f64 * 8.0;
            assert!(row.performance >= floor && row.performance <= floor + 15.0);
            assert!(row.change >= 2.0 && row.change <= 14.0);
            assert!(row.energy_efficiency >= 85.0 && row.energy_efficiency <= 105.0);
        }
    }

    #[test]
    fn test_historical_analytics_window() {
        let mut mock = generator(4);
        let now = mock.clock().now();
        let days = mock.historical_analytics(90);

        assert_eq!(days.len(), 91);
        assert_eq!(days.last().unwrap().timestamp, now);
        assert_eq!(days[0].timestamp, now - Duration::days(90));
        assert!(days.iter().all(|d| d.water_quality >= 90.0 && d.water_quality < 100.0));
    }

    #[test]
    fn test_key_metrics_follow_status() {
        let mut mock = generator(2);
        let farm = catalog::farms().into_iter().find(|f| f.id == "farm_003").unwrap();

        let metrics = mock.farm_key_metrics(&farm);
        assert_eq!(metrics.efficiency, 62.3);
        assert_eq!(metrics.health_index, 4.2);
        assert!(metrics.estimated_harvest < 0.0);
    }

    #[test]
    fn test_dashboard_summary() {
        let summary = generator(1).dashboard_summary();

        assert_eq!(summary.total_farms, 5);
        assert_eq!(summary.healthy_farms, 3);
        assert_eq!(summary.alert_farms, 2);
        assert_eq!(summary.healthy_percent, 60);
        assert!((summary.total_area - 14.5).abs() < 1e-9);
        assert!((summary.average_temperature - 20.76).abs() < 1e-9);
    }

    #[test]
    fn test_image_url_comes_from_kind() {
        let mut mock = generator(6);
        for _ in 0..10 {
            let url = mock.image_url(ImageKind::Critical);
            assert!(catalog::image_urls(ImageKind::Critical).contains(&url));
        }
    }

    #[test]
    fn test_capture_image_matches_farm_status() {
        let mut mock = generator(4);
        let farm = catalog::farms().into_iter().find(|f| f.id == "farm_003").unwrap();

        let image = mock.capture_image(&farm);

        assert!(catalog::image_urls(ImageKind::Critical).contains(&image.url.as_str()));
        assert_eq!(image.id, "img_farm_003_1751565600000");
        assert_eq!(image.timestamp, mock.clock().now());
        assert!(image.description.contains("Kritik"));
    }
}
