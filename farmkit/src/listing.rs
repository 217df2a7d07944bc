// farmkit/src/listing.rs
//
// ListQuery - Strategy Pattern for page-level search, filter and sort
// One query type per list page; all searches are case-insensitive
//

use std::cmp::Ordering;

use crate::actions::{Action, ActionStatus};
use crate::reports::{Report, ReportCategory, ReportKind, ReportStatus};
use crate::types::{Farm, FarmStatus};

/// Filter + ordering strategy over a list of records
pub trait ListQuery<T> {
    fn matches(&self, item: &T) -> bool;
    fn compare(&self, a: &T, b: &T) -> Ordering;

    /// Filtered, sorted view of `items`. The sort is stable.
    fn apply<'a>(&self, items: &'a [T]) -> Vec<&'a T> {
        let mut view: Vec<&T> = items.iter().filter(|item| self.matches(item)).collect();
        view.sort_by(|a, b| self.compare(a, b));
        view
    }
}

fn contains_folded(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(needle)
}

fn fold(search: &str) -> String {
    search.trim().to_lowercase()
}

/// Sort key following the Turkish alphabet: case-insensitive, with
/// ç ğ ı ö ş ü placed right after their base letter.
fn collation_key(text: &str) -> Vec<(char, u8)> {
    text.chars()
        .map(|c| match c {
            'Ç' | 'ç' => ('c', 1),
            'Ğ' | 'ğ' => ('g', 1),
            'I' | 'ı' => ('h', 1),
            'İ' | 'i' => ('i', 0),
            'Ö' | 'ö' => ('o', 1),
            'Ş' | 'ş' => ('s', 1),
            'Ü' | 'ü' => ('u', 1),
            c => (c.to_lowercase().next().unwrap_or(c), 0),
        })
        .collect()
}

fn compare_text(a: &str, b: &str) -> Ordering {
    collation_key(a).cmp(&collation_key(b))
}

// ---- Farms ----

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FarmSort {
    #[default]
    Name,
    Area,
    Status,
    Established,
}

impl FarmSort {
    pub const ALL: [FarmSort; 4] = [FarmSort::Name, FarmSort::Area, FarmSort::Status, FarmSort::Established];

    pub fn label(&self) -> &'static str {
        match self {
            FarmSort::Name => "İsim",
            FarmSort::Area => "Alan",
            FarmSort::Status => "Durum",
            FarmSort::Established => "Kuruluş Tarihi",
        }
    }

    pub fn next(&self) -> Self {
        cycle(&Self::ALL, self)
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct FarmQuery {
    pub search: String,
    pub status: Option<FarmStatus>,
    pub sort: FarmSort,
}

impl ListQuery<Farm> for FarmQuery {
    fn matches(&self, farm: &Farm) -> bool {
        let needle = fold(&self.search);
        let text_hit = needle.is_empty()
            || contains_folded(&farm.name, &needle)
            || contains_folded(&farm.location.address, &needle)
            || contains_folded(&farm.species, &needle);

        text_hit && self.status.map_or(true, |status| farm.status == status)
    }

    fn compare(&self, a: &Farm, b: &Farm) -> Ordering {
        match self.sort {
            FarmSort::Name => compare_text(&a.name, &b.name),
            FarmSort::Area => b.area.total_cmp(&a.area),
            FarmSort::Status => a.status.as_str().cmp(b.status.as_str()),
            FarmSort::Established => b.established_date.cmp(&a.established_date),
        }
    }
}

/// Number of farms per status, in [`FarmStatus::ALL`] order.
pub fn farm_status_counts(farms: &[Farm]) -> [(FarmStatus, usize); 3] {
    FarmStatus::ALL.map(|status| (status, farms.iter().filter(|f| f.status == status).count()))
}

// ---- Actions ----

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActionSort {
    #[default]
    DueDate,
    Priority,
    Title,
}

impl ActionSort {
    pub const ALL: [ActionSort; 3] = [ActionSort::DueDate, ActionSort::Priority, ActionSort::Title];

    pub fn label(&self) -> &'static str {
        match self {
            ActionSort::DueDate => "Bitiş Tarihi",
            ActionSort::Priority => "Öncelik",
            ActionSort::Title => "Başlık",
        }
    }

    pub fn next(&self) -> Self {
        cycle(&Self::ALL, self)
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ActionQuery {
    pub search: String,
    pub status: Option<ActionStatus>,
    pub sort: ActionSort,
}

impl ListQuery<Action> for ActionQuery {
    fn matches(&self, action: &Action) -> bool {
        let needle = fold(&self.search);
        let text_hit = needle.is_empty()
            || contains_folded(&action.title, &needle)
            || contains_folded(&action.description, &needle)
            || contains_folded(&action.farm, &needle);

        text_hit && self.status.map_or(true, |status| action.status == status)
    }

    fn compare(&self, a: &Action, b: &Action) -> Ordering {
        match self.sort {
            ActionSort::DueDate => a.due_date.cmp(&b.due_date),
            ActionSort::Priority => a.priority.cmp(&b.priority),
            ActionSort::Title => compare_text(&a.title, &b.title),
        }
    }
}

// ---- Reports ----

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReportSort {
    #[default]
    Date,
    Title,
    Downloads,
}

impl ReportSort {
    pub const ALL: [ReportSort; 3] = [ReportSort::Date, ReportSort::Title, ReportSort::Downloads];

    pub fn label(&self) -> &'static str {
        match self {
            ReportSort::Date => "Tarih",
            ReportSort::Title => "Başlık",
            ReportSort::Downloads => "İndirme",
        }
    }

    pub fn next(&self) -> Self {
        cycle(&Self::ALL, self)
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReportQuery {
    pub search: String,
    pub kind: Option<ReportKind>,
    pub category: Option<ReportCategory>,
    pub status: Option<ReportStatus>,
    pub sort: ReportSort,
}

impl ListQuery<Report> for ReportQuery {
    fn matches(&self, report: &Report) -> bool {
        let needle = fold(&self.search);
        let text_hit = needle.is_empty()
            || contains_folded(&report.title, &needle)
            || contains_folded(&report.description, &needle);

        text_hit
            && self.kind.map_or(true, |kind| report.kind == kind)
            && self.category.map_or(true, |category| report.category == category)
            && self.status.map_or(true, |status| report.status == status)
    }

    fn compare(&self, a: &Report, b: &Report) -> Ordering {
        match self.sort {
            ReportSort::Date => b.generated_date.cmp(&a.generated_date),
            ReportSort::Title => compare_text(&a.title, &b.title),
            ReportSort::Downloads => b.download_count.cmp(&a.download_count),
        }
    }
}

/// Steps an optional filter through `None -> all[0] -> ... -> None`.
pub fn cycle_filter<T: Copy + PartialEq>(all: &[T], current: Option<T>) -> Option<T> {
    match current {
        None => all.first().copied(),
        Some(value) => {
            let idx = all.iter().position(|v| *v == value)?;
            all.get(idx + 1).copied()
        }
    }
}

fn cycle<T: Copy + PartialEq>(all: &[T], current: &T) -> T {
    let idx = all.iter().position(|v| v == current).unwrap_or(0);
    all[(idx + 1) % all.len()]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::ActionBoard;
    use crate::catalog;
    use crate::clock::FixedClock;
    use crate::reports::ReportShelf;
    use chrono::{TimeZone, Utc};

    fn clock() -> FixedClock {
        FixedClock::new(Utc.with_ymd_and_hms(2025, 7, 3, 18, 0, 0).unwrap())
    }

    #[test]
    fn test_critical_filter_returns_research_center() {
        let farms = catalog::farms();
        let query = FarmQuery {
            status: Some(FarmStatus::Critical),
            ..Default::default()
        };

        let view = query.apply(&farms);
        assert_eq!(view.len(), 1);
        assert_eq!(view[0].id, "farm_003");
        assert_eq!(view[0].name, "Deniz Araştırma Merkezi");
    }

    #[test]
    fn test_farm_search_is_case_insensitive() {
        let farms = catalog::farms();

        let by_species = FarmQuery {
            search: "SACCHARINA".to_string(),
            ..Default::default()
        };
        assert_eq!(by_species.apply(&farms).len(), 1);

        let by_address = FarmQuery {
            search: "kıbrıs".to_string(),
            ..Default::default()
        };
        let view = by_address.apply(&farms);
        assert_eq!(view.len(), 1);
        assert_eq!(view[0].id, "farm_005");
    }

    #[test]
    fn test_farm_sorts() {
        let farms = catalog::farms();
        let ids = |sort| -> Vec<String> {
            FarmQuery { sort, ..Default::default() }
                .apply(&farms)
                .iter()
                .map(|f| f.id.clone())
                .collect()
        };

        assert_eq!(ids(FarmSort::Area)[0], "farm_004");
        assert_eq!(ids(FarmSort::Established)[0], "farm_004");
        assert_eq!(ids(FarmSort::Established)[4], "farm_005");
        assert_eq!(ids(FarmSort::Status)[0], "farm_003");
        assert_eq!(ids(FarmSort::Status)[4], "farm_002");
    }

    #[test]
    fn test_status_counts() {
        let counts = farm_status_counts(&catalog::farms());
        assert_eq!(
            counts,
            [(FarmStatus::Healthy, 3), (FarmStatus::Warning, 1), (FarmStatus::Critical, 1)]
        );
    }

    #[test]
    fn test_new_action_shows_under_pending_filter() {
        let mut board = ActionBoard::new(catalog::actions());
        let created_id = board.create_action(&clock(), "Yeşil Dalga Tesisi", "Mehmet Kaya").id.clone();

        let pending = ActionQuery {
            status: Some(ActionStatus::Bekleyen),
            ..Default::default()
        };
        let view = pending.apply(board.actions());
        assert!(view.iter().any(|a| a.id == created_id));
        assert!(view.iter().all(|a| a.status == ActionStatus::Bekleyen));

        let done = ActionQuery {
            status: Some(ActionStatus::Tamamlandi),
            ..Default::default()
        };
        assert!(!done.apply(board.actions()).iter().any(|a| a.id == created_id));
    }

    #[test]
    fn test_action_priority_order() {
        let actions = catalog::actions();
        let query = ActionQuery {
            sort: ActionSort::Priority,
            ..Default::default()
        };

        let view = query.apply(&actions);
        assert_eq!(view[0].id, "4");
        assert_eq!(view[4].id, "5");
    }

    #[test]
    fn test_action_search_covers_farm_name() {
        let actions = catalog::actions();
        let query = ActionQuery {
            search: "okyanus".to_string(),
            ..Default::default()
        };

        let ids: Vec<&str> = query.apply(&actions).iter().map(|a| a.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "5"]);
    }

    #[test]
    fn test_new_report_and_filters() {
        let mut shelf = ReportShelf::new(catalog::reports());
        shelf.generate_new(&clock());

        let pending = ReportQuery {
            status: Some(ReportStatus::Bekleyen),
            ..Default::default()
        };
        let view = pending.apply(shelf.reports());
        assert_eq!(view.len(), 2);
        // newest first
        assert_eq!(view[0].id, "6");

        let monthly_performance = ReportQuery {
            kind: Some(ReportKind::Performans),
            category: Some(ReportCategory::Aylik),
            status: Some(ReportStatus::Tamamlandi),
            ..Default::default()
        };
        let view = monthly_performance.apply(shelf.reports());
        assert_eq!(view.len(), 1);
        assert_eq!(view[0].id, "1");
    }

    #[test]
    fn test_report_sort_by_downloads() {
        let reports = catalog::reports();
        let query = ReportQuery {
            sort: ReportSort::Downloads,
            ..Default::default()
        };

        let counts: Vec<u32> = query.apply(&reports).iter().map(|r| r.download_count).collect();
        assert_eq!(counts, vec![15, 12, 8, 3, 0]);
    }

    #[test]
    fn test_cycle_filter_wraps_through_none() {
        let mut current = None;
        let mut seen = Vec::new();
        for _ in 0..4 {
            current = cycle_filter(&FarmStatus::ALL, current);
            seen.push(current);
        }
        assert_eq!(
            seen,
            vec![
                Some(FarmStatus::Healthy),
                Some(FarmStatus::Warning),
                Some(FarmStatus::Critical),
                None
            ]
        );
    }

    #[test]
    fn test_title_sort_follows_turkish_alphabet() {
        let mut titles = vec!["Zeytin", "Çiftlik", "deniz", "Cam", "Işık", "İzmir", "Hasat", "Öz", "Oda"];
        titles.sort_by(|a, b| compare_text(a, b));
        assert_eq!(
            titles,
            vec!["Cam", "Çiftlik", "deniz", "Hasat", "Işık", "İzmir", "Oda", "Öz", "Zeytin"]
        );
    }
}
