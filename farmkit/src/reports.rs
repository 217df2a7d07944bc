// farmkit/src/reports.rs
//
// Generated report records (performance, finance, environment, compliance,
// maintenance)

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::clock::Clock;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportKind {
    Performans,
    Finansal,
    Cevre,
    Uyumluluk,
    Bakim,
}

impl ReportKind {
    pub const ALL: [ReportKind; 5] = [
        ReportKind::Performans,
        ReportKind::Finansal,
        ReportKind::Cevre,
        ReportKind::Uyumluluk,
        ReportKind::Bakim,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ReportKind::Performans => "Performans",
            ReportKind::Finansal => "Finansal",
            ReportKind::Cevre => "Çevresel",
            ReportKind::Uyumluluk => "Uyumluluk",
            ReportKind::Bakim => "Bakım",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            ReportKind::Performans => "📊",
            ReportKind::Finansal => "💰",
            ReportKind::Cevre => "🌱",
            ReportKind::Uyumluluk => "✅",
            ReportKind::Bakim => "🔧",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportCategory {
    Gunluk,
    Haftalik,
    Aylik,
    Ucaylik,
    Yillik,
}

impl ReportCategory {
    pub const ALL: [ReportCategory; 5] = [
        ReportCategory::Gunluk,
        ReportCategory::Haftalik,
        ReportCategory::Aylik,
        ReportCategory::Ucaylik,
        ReportCategory::Yillik,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ReportCategory::Gunluk => "Günlük",
            ReportCategory::Haftalik => "Haftalık",
            ReportCategory::Aylik => "Aylık",
            ReportCategory::Ucaylik => "Üç Aylık",
            ReportCategory::Yillik => "Yıllık",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportStatus {
    Taslak,
    Bekleyen,
    Tamamlandi,
    Arsivlendi,
}

impl ReportStatus {
    pub const ALL: [ReportStatus; 4] = [
        ReportStatus::Taslak,
        ReportStatus::Bekleyen,
        ReportStatus::Tamamlandi,
        ReportStatus::Arsivlendi,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ReportStatus::Taslak => "Taslak",
            ReportStatus::Bekleyen => "Bekleyen",
            ReportStatus::Tamamlandi => "Tamamlandı",
            ReportStatus::Arsivlendi => "Arşivlendi",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    pub id: String,
    pub title: String,
    pub description: String,
    #[serde(rename = "type")]
    pub kind: ReportKind,
    pub category: ReportCategory,
    pub status: ReportStatus,
    pub generated_date: NaiveDate,
    pub period: String,
    pub size: String,
    pub download_count: u32,
    pub farms: Vec<String>,
}

#[derive(Debug, Clone, Default)]
pub struct ReportShelf {
    reports: Vec<Report>,
}

impl ReportShelf {
    pub fn new(reports: Vec<Report>) -> Self {
        Self { reports }
    }

    pub fn reports(&self) -> &[Report] {
        &self.reports
    }

    pub fn len(&self) -> usize {
        self.reports.len()
    }

    pub fn is_empty(&self) -> bool {
        self.reports.is_empty()
    }

    pub fn count(&self, status: ReportStatus) -> usize {
        self.reports.iter().filter(|r| r.status == status).count()
    }

    pub fn total_downloads(&self) -> u32 {
        self.reports.iter().map(|r| r.download_count).sum()
    }

    /// Appends a locally fabricated report at the top of the shelf.
    pub fn generate_new<C: Clock>(&mut self, clock: &C) -> &Report {
        let report = Report {
            id: (self.reports.len() + 1).to_string(),
            title: "Yeni Özel Rapor".to_string(),
            description: "Mevcut verilere dayalı olarak oluşturuldu".to_string(),
            kind: ReportKind::Performans,
            category: ReportCategory::Aylik,
            status: ReportStatus::Bekleyen,
            generated_date: clock.now().date_naive(),
            period: "Mevcut Dönem".to_string(),
            size: "0 MB".to_string(),
            download_count: 0,
            farms: vec!["Tüm Çiftlikler".to_string()],
        };
        info!("generated report {} ({})", report.id, report.generated_date);
        self.reports.insert(0, report);
        &self.reports[0]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog;
    use crate::clock::FixedClock;
    use chrono::{TimeZone, Utc};

    #[test]
    fn test_generate_new_report() {
        let clock = FixedClock::new(Utc.with_ymd_and_hms(2025, 7, 3, 18, 0, 0).unwrap());
        let mut shelf = ReportShelf::new(catalog::reports());

        let report = shelf.generate_new(&clock).clone();

        assert_eq!(report.id, "6");
        assert_eq!(report.status, ReportStatus::Bekleyen);
        assert_eq!(report.generated_date, NaiveDate::from_ymd_opt(2025, 7, 3).unwrap());
        assert_eq!(shelf.reports()[0].id, "6");
        assert_eq!(shelf.len(), 6);
    }

    #[test]
    fn test_totals() {
        let shelf = ReportShelf::new(catalog::reports());

        assert_eq!(shelf.total_downloads(), 38);
        assert_eq!(shelf.count(ReportStatus::Tamamlandi), 3);
    }
}
