// farmkit/src/catalog.rs
//
// Hand-authored records the dashboard runs on. Farm status is kept
// consistent with sensor statuses by hand; nothing here enforces it

use chrono::{DateTime, NaiveDate, TimeZone, Utc};

use crate::actions::{Action, ActionKind, ActionStatus, Priority};
use crate::reports::{Report, ReportCategory, ReportKind, ReportStatus};
use crate::types::{
    Coordinates, Farm, FarmImage, FarmStatus, Impact, Location, Prediction, PredictionKind,
    SensorPanel, SensorStatus, SensorValue, SuggestedAction, SuggestionStatus, User, UserStats,
};

pub const DEFAULT_AVATAR: &str = "/images/profiles/default-avatar.png";

fn at(y: i32, mo: u32, d: u32, h: u32, mi: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, mo, d, h, mi, 0)
        .single()
        .unwrap_or_default()
}

fn date(y: i32, mo: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, mo, d).unwrap_or_default()
}

fn panel(values: [(f64, SensorStatus); 6], updated: DateTime<Utc>) -> SensorPanel {
    let [ph, temperature, dissolved_oxygen, salinity, length, growth] =
        values.map(|(value, status)| SensorValue {
            value,
            status,
            last_update: updated,
        });
    SensorPanel {
        ph,
        temperature,
        dissolved_oxygen,
        salinity,
        length,
        growth,
    }
}

fn image(id: &str, url: &str, timestamp: DateTime<Utc>, description: &str) -> FarmImage {
    FarmImage {
        id: id.to_string(),
        url: url.to_string(),
        timestamp,
        description: description.to_string(),
    }
}

fn suggestion(
    id: &str,
    kind: &str,
    status: SuggestionStatus,
    description: &str,
    ai_suggestion: &str,
    timestamp: DateTime<Utc>,
    confidence: u8,
) -> SuggestedAction {
    SuggestedAction {
        id: id.to_string(),
        kind: kind.to_string(),
        status,
        description: description.to_string(),
        ai_suggestion: ai_suggestion.to_string(),
        timestamp,
        confidence: Some(confidence),
    }
}

fn location(address: &str, lat: f64, lng: f64, ocean: &str) -> Location {
    Location {
        address: address.to_string(),
        coordinates: Coordinates { lat, lng },
        ocean: ocean.to_string(),
    }
}

pub fn farms() -> Vec<Farm> {
    use SensorStatus::*;

    vec![
        Farm {
            id: "farm_001".to_string(),
            name: "Okyanus Çiftliği Alpha".to_string(),
            location: location(
                "Kuzey Atlantik Okyanusu, Newfoundland'ın 200 deniz mili doğusu",
                47.7511,
                -52.6758,
                "Atlantik Okyanusu",
            ),
            species: "Saccharina latissima".to_string(),
            established_date: date(2024, 7, 2),
            area: 2.5,
            depth: "15-25 metre".to_string(),
            status: FarmStatus::Healthy,
            sensors: panel(
                [(6.8, Optimal), (18.5, Optimal), (8.2, Good), (2.3, Optimal), (80.0, Good), (2.1, Good)],
                at(2025, 7, 3, 18, 0),
            ),
            images: vec![
                image(
                    "img_001",
                    "https://images.unsplash.com/photo-1559827260-dc66d52bef19?w=400&h=300&fit=crop&crop=water",
                    at(2025, 6, 9, 18, 0),
                    "Büyüme izleme - üstel faz",
                ),
                image(
                    "img_002",
                    "https://images.unsplash.com/photo-1576013551627-0cc20b96c2a7?w=400&h=300&fit=crop&crop=center",
                    at(2025, 6, 8, 16, 30),
                    "Su kalitesi değerlendirmesi",
                ),
            ],
            actions: vec![suggestion(
                "action_001",
                "alg_restorasyon_ayarlaması",
                SuggestionStatus::Pending,
                "Alg hattını 80cm aşağı indir",
                "Çözünmüş oksijen seviyelerini yakından izleyin. Su dolaşımını artırmayı düşünün.",
                at(2025, 7, 3, 10, 0),
                94,
            )],
        },
        Farm {
            id: "farm_002".to_string(),
            name: "Yeşil Dalga Tesisi".to_string(),
            location: location(
                "Kuzey Pasifik Okyanusu, Kaliforniya'nın 150 deniz mili batısı",
                36.7783,
                -119.4179,
                "Pasifik Okyanusu",
            ),
            species: "Kappaphycus alvarezii".to_string(),
            established_date: date(2024, 6, 15),
            area: 3.2,
            depth: "10-20 metre".to_string(),
            status: FarmStatus::Warning,
            sensors: panel(
                [(7.8, Warning), (22.1, Warning), (6.1, Warning), (2.8, Good), (65.0, Warning), (1.2, Warning)],
                at(2025, 7, 3, 17, 55),
            ),
            images: vec![image(
                "img_003",
                "https://images.unsplash.com/photo-1586348943529-beaae6c28db9?w=400&h=300&fit=crop&crop=water",
                at(2025, 6, 9, 14, 20),
                "Sıcaklık stresi göstergeleri görünür",
            )],
            actions: vec![suggestion(
                "action_002",
                "ph_tampon_ekleme",
                SuggestionStatus::Pending,
                "pH tampon çözeltisi ekle",
                "pH seviyeleri kritik eşiğe yaklaşıyor. Acil eylem önerilir.",
                at(2025, 7, 3, 9, 30),
                87,
            )],
        },
        Farm {
            id: "farm_003".to_string(),
            name: "Deniz Araştırma Merkezi".to_string(),
            location: location(
                "Grönland Denizi, İzlanda'nın 100 deniz mili kuzeydoğusu",
                67.1428,
                -21.9426,
                "Arktik Okyanus",
            ),
            species: "Alaria esculenta".to_string(),
            established_date: date(2024, 5, 20),
            area: 1.8,
            depth: "5-15 metre".to_string(),
            status: FarmStatus::Critical,
            sensors: panel(
                [(6.2, Critical), (12.1, Critical), (4.2, Critical), (1.9, Critical), (45.0, Critical), (-0.5, Critical)],
                at(2025, 7, 3, 16, 0),
            ),
            images: vec![image(
                "img_004",
                "https://images.unsplash.com/photo-1581833971358-2c8b550f87b3?w=400&h=300&fit=crop&crop=water",
                at(2025, 6, 9, 12, 0),
                "Ciddi çevresel stres - acil müdahale gerekli",
            )],
            actions: vec![suggestion(
                "action_003",
                "acil_durdurma",
                SuggestionStatus::Pending,
                "Acil müdahale gerekli",
                "Kritik koşullar tespit edildi. Acil durum müdahale protokolü aktivasyonu.",
                at(2025, 7, 3, 8, 0),
                98,
            )],
        },
        Farm {
            id: "farm_004".to_string(),
            name: "Kıyı Alg Laboratuvarı".to_string(),
            location: location(
                "Hint Okyanusu, Sri Lanka'nın 80 deniz mili güneyi",
                5.9197,
                80.7718,
                "Hint Okyanusu",
            ),
            species: "Eucheuma denticulatum".to_string(),
            established_date: date(2024, 8, 10),
            area: 4.1,
            depth: "8-18 metre".to_string(),
            status: FarmStatus::Healthy,
            sensors: panel(
                [(7.2, Optimal), (26.8, Optimal), (7.8, Good), (3.1, Optimal), (95.0, Excellent), (3.2, Excellent)],
                at(2025, 7, 3, 17, 50),
            ),
            images: vec![image(
                "img_005",
                "https://images.unsplash.com/photo-1502780402662-acc01917aa01?w=400&h=300&fit=crop&crop=nature",
                at(2025, 6, 9, 11, 30),
                "Mükemmel büyüme koşulları - hasat için hazır",
            )],
            actions: vec![suggestion(
                "action_004",
                "hasat_döngüsü",
                SuggestionStatus::Completed,
                "2.1 ton deniz yosunu hasat edildi",
                "Optimal hasat koşulları sağlandı.",
                at(2025, 7, 2, 14, 45),
                96,
            )],
        },
        Farm {
            id: "farm_005".to_string(),
            name: "Akdeniz Su Ürünleri İstasyonu".to_string(),
            location: location("Akdeniz, Kıbrıs'ın 60 deniz mili güneyi", 34.9215, 33.6314, "Akdeniz"),
            species: "Gracilaria gracilis".to_string(),
            established_date: date(2024, 4, 15),
            area: 2.9,
            depth: "12-22 metre".to_string(),
            status: FarmStatus::Healthy,
            sensors: panel(
                [(7.5, Optimal), (24.3, Optimal), (8.8, Excellent), (3.8, Optimal), (88.0, Good), (2.8, Good)],
                at(2025, 7, 3, 17, 45),
            ),
            images: vec![image(
                "img_006",
                "https://images.unsplash.com/photo-1502836249271-526ed8d87eb0?w=400&h=300&fit=crop&crop=water",
                at(2025, 6, 9, 9, 15),
                "Optimal Akdeniz koşullarında istikrarlı büyüme",
            )],
            actions: vec![suggestion(
                "action_005",
                "ph_ayarlaması",
                SuggestionStatus::Completed,
                "pH seviyeleri optimal aralığa ayarlandı",
                "Bakım başarıyla tamamlandı.",
                at(2025, 7, 3, 18, 0),
                91,
            )],
        },
    ]
}

pub fn user() -> User {
    User {
        id: "user_001".to_string(),
        name: "Dr. Ahmet Yılmaz".to_string(),
        email: "ahmet.yilmaz@ornek.com".to_string(),
        avatar: DEFAULT_AVATAR.to_string(),
        role: "Kıdemli Deniz Biyoloğu".to_string(),
        organization: "Deniz Biyolojisi Enstitüsü".to_string(),
        phone: "+90-555-0123".to_string(),
        member_since: date(2024, 1, 15),
        stats: UserStats {
            farms_managed: 5,
            actions_completed: 1247,
            data_points_collected: 45123,
            storage_used: "2.3GB / 10GB".to_string(),
        },
    }
}

#[allow(clippy::too_many_arguments)]
fn action(
    id: &str,
    title: &str,
    description: &str,
    kind: ActionKind,
    priority: Priority,
    status: ActionStatus,
    farm: &str,
    assigned_to: &str,
    due_date: NaiveDate,
    estimated_duration: &str,
    progress: u8,
) -> Action {
    Action {
        id: id.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        kind,
        priority,
        status,
        farm: farm.to_string(),
        assigned_to: assigned_to.to_string(),
        due_date,
        estimated_duration: estimated_duration.to_string(),
        progress,
    }
}

pub fn actions() -> Vec<Action> {
    vec![
        action(
            "1",
            "pH Seviye Ayarlaması",
            "Tank A-1'deki pH seviyelerini optimal aralığa ayarlayın (7.5-8.5)",
            ActionKind::Tedavi,
            Priority::Yuksek,
            ActionStatus::Bekleyen,
            "Okyanus Çiftliği Alpha",
            "Dr. Ayşe Yılmaz",
            date(2024, 1, 15),
            "2 saat",
            0,
        ),
        action(
            "2",
            "Haftalık Biyokütle Hasadı",
            "Yetiştirme tanklarından 1-5 olgun algleri hasat edin",
            ActionKind::Hasat,
            Priority::Orta,
            ActionStatus::DevamEden,
            "Yeşil Dalga Tesisi",
            "Mehmet Kaya",
            date(2024, 1, 16),
            "4 saat",
            65,
        ),
        action(
            "3",
            "Besin Besleme Programı",
            "Büyüme ortamına nitrojen ve fosfor takviyeleri ekleyin",
            ActionKind::Besleme,
            Priority::Orta,
            ActionStatus::Tamamlandi,
            "Kıyı Alg Laboratuvarı",
            "Zeynep Özkan",
            date(2024, 1, 14),
            "1 saat",
            100,
        ),
        action(
            "4",
            "Ekipman Bakımı",
            "Tüm tanklardaki oksijen sensörlerini servis edin ve kalibre edin",
            ActionKind::Bakim,
            Priority::Acil,
            ActionStatus::Gecikti,
            "Deniz Araştırma Merkezi",
            "Ali Demir",
            date(2024, 1, 12),
            "3 saat",
            0,
        ),
        action(
            "5",
            "Büyüme Hızı İzleme",
            "Deneysel tanklardan numune alın ve büyüme hızlarını ölçün",
            ActionKind::Izleme,
            Priority::Dusuk,
            ActionStatus::Bekleyen,
            "Okyanus Çiftliği Alpha",
            "Fatma Şahin",
            date(2024, 1, 18),
            "1.5 saat",
            0,
        ),
    ]
}

#[allow(clippy::too_many_arguments)]
fn report(
    id: &str,
    title: &str,
    description: &str,
    kind: ReportKind,
    category: ReportCategory,
    status: ReportStatus,
    generated_date: NaiveDate,
    period: &str,
    size: &str,
    download_count: u32,
    farms: &[&str],
) -> Report {
    Report {
        id: id.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        kind,
        category,
        status,
        generated_date,
        period: period.to_string(),
        size: size.to_string(),
        download_count,
        farms: farms.iter().map(|f| f.to_string()).collect(),
    }
}

pub fn reports() -> Vec<Report> {
    vec![
        report(
            "1",
            "Aylık Performans Genel Bakışı",
            "Aralık 2023 için tüm çiftlik performans metriklerinin kapsamlı analizi",
            ReportKind::Performans,
            ReportCategory::Aylik,
            ReportStatus::Tamamlandi,
            date(2024, 1, 1),
            "Aralık 2023",
            "2.4 MB",
            15,
            &["Okyanus Çiftliği Alpha", "Yeşil Dalga Tesisi", "Kıyı Alg Laboratuvarı"],
        ),
        report(
            "2",
            "Haftalık Çevresel Etki Raporu",
            "Karbon ayak izi ve çevresel etki değerlendirmesi",
            ReportKind::Cevre,
            ReportCategory::Haftalik,
            ReportStatus::Tamamlandi,
            date(2024, 1, 8),
            "Hafta 1, 2024",
            "1.8 MB",
            8,
            &["Deniz Araştırma Merkezi", "Okyanus Çiftliği Alpha"],
        ),
        report(
            "3",
            "Finansal Özet 4. Çeyrek 2023",
            "4. çeyrek için gelir, maliyet ve karlılık analizi",
            ReportKind::Finansal,
            ReportCategory::Ucaylik,
            ReportStatus::Bekleyen,
            date(2024, 1, 10),
            "4. Çeyrek 2023",
            "3.1 MB",
            0,
            &["Tüm Çiftlikler"],
        ),
        report(
            "4",
            "Uyumluluk Denetim Raporu",
            "Düzenleyici uyumluluk ve sertifikasyon durumu",
            ReportKind::Uyumluluk,
            ReportCategory::Yillik,
            ReportStatus::Taslak,
            date(2024, 1, 12),
            "2023",
            "5.2 MB",
            3,
            &["Tüm Çiftlikler"],
        ),
        report(
            "5",
            "Ekipman Bakım Kaydı",
            "Detaylı bakım kayıtları ve ekipman durumu",
            ReportKind::Bakim,
            ReportCategory::Aylik,
            ReportStatus::Tamamlandi,
            date(2024, 1, 5),
            "Aralık 2023",
            "1.2 MB",
            12,
            &["Yeşil Dalga Tesisi", "Deniz Araştırma Merkezi"],
        ),
    ]
}

pub fn predictions() -> Vec<Prediction> {
    let prediction = |kind, title: &str, description: &str, confidence, timeframe: &str, impact, icon: &str| {
        Prediction {
            kind,
            title: title.to_string(),
            description: description.to_string(),
            confidence,
            timeframe: timeframe.to_string(),
            impact,
            icon: icon.to_string(),
        }
    };

    vec![
        prediction(
            PredictionKind::Growth,
            "Büyüme Tahmini",
            "Mevcut trendlere dayalı olarak önümüzdeki 30 günde %18 büyüme artışı bekleniyor.",
            87,
            "30 gün",
            Impact::Positive,
            "🔮",
        ),
        prediction(
            PredictionKind::Harvest,
            "Hasat Tahmini",
            "Gelecek hafta optimal hasat penceresi öngörülüyor. Tahmini verim: 2.3 ton.",
            92,
            "7 gün",
            Impact::Positive,
            "🌱",
        ),
        prediction(
            PredictionKind::Weather,
            "Hava Durumu Uyarısı",
            "Fırtına sistemi yaklaşıyor. Çiftlik C için koruyucu önlemler düşünün.",
            78,
            "3 gün",
            Impact::Warning,
            "⚠️",
        ),
        prediction(
            PredictionKind::Maintenance,
            "Bakım Önerisi",
            "pH sensörleri kalibrasyonu önerilir. Doğruluk oranında %5 sapma tespit edildi.",
            83,
            "14 gün",
            Impact::Neutral,
            "🔧",
        ),
        prediction(
            PredictionKind::Market,
            "Pazar Fırsatı",
            "Organik alg ürünlerine olan talep %25 artış gösteriyor. Fiyat artışı bekleniyor.",
            71,
            "60 gün",
            Impact::Positive,
            "📈",
        ),
    ]
}

/// Picture families the dashboard can pick a stock photo from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageKind {
    Healthy,
    Warning,
    Critical,
    Growth,
    Analysis,
}

impl ImageKind {
    /// Photo family matching a farm's current condition.
    pub fn for_status(status: FarmStatus) -> Self {
        match status {
            FarmStatus::Healthy => ImageKind::Healthy,
            FarmStatus::Warning => ImageKind::Warning,
            FarmStatus::Critical => ImageKind::Critical,
        }
    }
}

pub fn image_urls(kind: ImageKind) -> &'static [&'static str] {
    match kind {
        ImageKind::Healthy => &[
            "https://images.unsplash.com/photo-1559827260-dc66d52bef19?w=400&h=300&fit=crop&crop=water",
            "https://images.unsplash.com/photo-1583212292454-1fe6229603b7?w=400&h=300&fit=crop&crop=nature",
            "https://images.unsplash.com/photo-1544551763-46a013bb70d5?w=400&h=300&fit=crop&crop=water",
        ],
        ImageKind::Warning => &[
            "https://images.unsplash.com/photo-1586348943529-beaae6c28db9?w=400&h=300&fit=crop&crop=water",
            "https://images.unsplash.com/photo-1569163139394-de44cb800a4d?w=400&h=300&fit=crop&crop=nature",
        ],
        ImageKind::Critical => &[
            "https://images.unsplash.com/photo-1581833971358-2c8b550f87b3?w=400&h=300&fit=crop&crop=water",
            "https://images.unsplash.com/photo-1578662996442-48f60103fc96?w=400&h=300&fit=crop&crop=nature",
        ],
        ImageKind::Growth => &[
            "https://images.unsplash.com/photo-1502780402662-acc01917aa01?w=400&h=300&fit=crop&crop=nature",
            "https://images.unsplash.com/photo-1502836249271-526ed8d87eb0?w=400&h=300&fit=crop&crop=water",
        ],
        ImageKind::Analysis => &[
            "https://images.unsplash.com/photo-1576013551627-0cc20b96c2a7?w=400&h=300&fit=crop&crop=center",
            "https://images.unsplash.com/photo-1507003211169-0a1dd7228f2d?w=400&h=300&fit=crop&crop=water",
        ],
    }
}

pub fn find_farm<'a>(farms: &'a [Farm], id: &str) -> Option<&'a Farm> {
    farms.iter().find(|f| f.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::SensorChannel;

    #[test]
    fn test_catalog_shape() {
        let farms = farms();
        assert_eq!(farms.len(), 5);
        assert_eq!(actions().len(), 5);
        assert_eq!(reports().len(), 5);
        assert_eq!(predictions().len(), 5);
        assert_eq!(user().stats.farms_managed as usize, farms.len());
    }

    #[test]
    fn test_farm_status_tracks_sensor_status() {
        for farm in farms() {
            let worst = farm.sensors.iter().map(|(_, s)| s.status).fold(
                SensorStatus::Optimal,
                |acc, s| match (acc, s) {
                    (SensorStatus::Critical, _) | (_, SensorStatus::Critical) => SensorStatus::Critical,
                    (SensorStatus::Warning, _) | (_, SensorStatus::Warning) => SensorStatus::Warning,
                    _ => acc,
                },
            );
            let expected = match worst {
                SensorStatus::Critical => FarmStatus::Critical,
                SensorStatus::Warning => FarmStatus::Warning,
                _ => FarmStatus::Healthy,
            };
            assert_eq!(farm.status, expected, "{}", farm.id);
        }
    }

    #[test]
    fn test_find_farm() {
        let farms = farms();
        let farm = find_farm(&farms, "farm_001").unwrap();
        assert_eq!(farm.sensors.get(SensorChannel::Ph).value, 6.8);
        assert!(find_farm(&farms, "farm_999").is_none());
    }
}
