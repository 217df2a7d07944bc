// farmkit/src/actions.rs
//
// Operational task board: maintenance, harvest, feeding, monitoring and
// treatment jobs. Mutations live only as long as the board does

use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::{debug, info};

use crate::clock::Clock;
use crate::errors::FarmError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActionKind {
    Bakim,
    Hasat,
    Besleme,
    Izleme,
    Tedavi,
}

impl ActionKind {
    pub fn icon(&self) -> &'static str {
        match self {
            ActionKind::Bakim => "🔧",
            ActionKind::Hasat => "🌾",
            ActionKind::Besleme => "🥗",
            ActionKind::Izleme => "📊",
            ActionKind::Tedavi => "💊",
        }
    }
}

/// Declaration order is urgency order: `Acil` sorts first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Acil,
    Yuksek,
    Orta,
    Dusuk,
}

impl Priority {
    pub fn label(&self) -> &'static str {
        match self {
            Priority::Acil => "Acil",
            Priority::Yuksek => "Yüksek",
            Priority::Orta => "Orta",
            Priority::Dusuk => "Düşük",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ActionStatus {
    #[serde(rename = "bekleyen")]
    Bekleyen,
    #[serde(rename = "devam-eden")]
    DevamEden,
    #[serde(rename = "tamamlandi")]
    Tamamlandi,
    #[serde(rename = "gecikti")]
    Gecikti,
}

impl ActionStatus {
    pub const ALL: [ActionStatus; 4] = [
        ActionStatus::Bekleyen,
        ActionStatus::DevamEden,
        ActionStatus::Tamamlandi,
        ActionStatus::Gecikti,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ActionStatus::Bekleyen => "bekleyen",
            ActionStatus::DevamEden => "devam-eden",
            ActionStatus::Tamamlandi => "tamamlandi",
            ActionStatus::Gecikti => "gecikti",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ActionStatus::Bekleyen => "Bekleyen",
            ActionStatus::DevamEden => "Devam Ediyor",
            ActionStatus::Tamamlandi => "Tamamlandı",
            ActionStatus::Gecikti => "Gecikti",
        }
    }

    /// Status implied by a progress percentage.
    pub fn from_progress(progress: u8) -> Self {
        match progress {
            100.. => ActionStatus::Tamamlandi,
            1..=99 => ActionStatus::DevamEden,
            0 => ActionStatus::Bekleyen,
        }
    }
}

impl FromStr for ActionStatus {
    type Err = FarmError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ActionStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| FarmError::Unknown(format!("action status '{}'", s)))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Action {
    pub id: String,
    pub title: String,
    pub description: String,
    #[serde(rename = "type")]
    pub kind: ActionKind,
    pub priority: Priority,
    pub status: ActionStatus,
    pub farm: String,
    pub assigned_to: String,
    pub due_date: NaiveDate,
    pub estimated_duration: String,
    pub progress: u8,
}

pub const PROGRESS_STEP: u8 = 25;

#[derive(Debug, Clone, Default)]
pub struct ActionBoard {
    actions: Vec<Action>,
}

impl ActionBoard {
    pub fn new(actions: Vec<Action>) -> Self {
        Self { actions }
    }

    pub fn actions(&self) -> &[Action] {
        &self.actions
    }

    pub fn len(&self) -> usize {
        self.actions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    pub fn count(&self, status: ActionStatus) -> usize {
        self.actions.iter().filter(|a| a.status == status).count()
    }

    /// Moves an action one step forward and re-derives its status.
    /// Returns the new progress, or `None` for an unknown id.
    pub fn advance_progress(&mut self, id: &str) -> Option<u8> {
        let action = self.actions.iter_mut().find(|a| a.id == id)?;
        let progress = action.progress.saturating_add(PROGRESS_STEP).min(100);
        action.progress = progress;
        action.status = ActionStatus::from_progress(progress);
        debug!("action {} progress -> {}% ({})", id, progress, action.status.as_str());
        Some(progress)
    }

    /// Fabricates a new pending task and puts it at the top of the board.
    pub fn create_action<C: Clock>(&mut self, clock: &C, farm: &str, assignee: &str) -> &Action {
        let today = clock.now().date_naive();
        let action = Action {
            id: (self.actions.len() + 1).to_string(),
            title: "Yeni İşlem".to_string(),
            description: "Panelden oluşturulan yeni görev".to_string(),
            kind: ActionKind::Izleme,
            priority: Priority::Orta,
            status: ActionStatus::Bekleyen,
            farm: farm.to_string(),
            assigned_to: assignee.to_string(),
            due_date: today + Duration::days(7),
            estimated_duration: "1 saat".to_string(),
            progress: 0,
        };
        info!("created action {} for {}", action.id, action.farm);
        self.actions.insert(0, action);
        &self.actions[0]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog;
    use crate::clock::FixedClock;
    use chrono::{TimeZone, Utc};

    #[test]
    fn test_progress_drives_status() {
        let mut board = ActionBoard::new(catalog::actions());

        assert_eq!(board.advance_progress("1"), Some(25));
        let action = board.actions().iter().find(|a| a.id == "1").unwrap();
        assert_eq!(action.status, ActionStatus::DevamEden);

        for _ in 0..5 {
            board.advance_progress("1");
        }
        let action = board.actions().iter().find(|a| a.id == "1").unwrap();
        assert_eq!(action.progress, 100);
        assert_eq!(action.status, ActionStatus::Tamamlandi);
    }

    #[test]
    fn test_advance_unknown_action() {
        let mut board = ActionBoard::new(catalog::actions());
        assert_eq!(board.advance_progress("missing"), None);
    }

    #[test]
    fn test_create_action_is_prepended_and_pending() {
        let clock = FixedClock::new(Utc.with_ymd_and_hms(2025, 7, 3, 18, 0, 0).unwrap());
        let mut board = ActionBoard::new(catalog::actions());
        let before = board.count(ActionStatus::Bekleyen);

        let created = board.create_action(&clock, "Okyanus Çiftliği Alpha", "Dr. Ahmet Yılmaz").clone();

        assert_eq!(created.id, "6");
        assert_eq!(created.due_date, NaiveDate::from_ymd_opt(2025, 7, 10).unwrap());
        assert_eq!(board.actions()[0], created);
        assert_eq!(board.count(ActionStatus::Bekleyen), before + 1);
    }

    #[test]
    fn test_status_from_key() {
        assert_eq!("devam-eden".parse::<ActionStatus>().unwrap(), ActionStatus::DevamEden);
        assert!("done".parse::<ActionStatus>().is_err());
    }
}
