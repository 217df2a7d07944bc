// services/farm-dash/src/mock.rs
//
// Live feed: re-rolls the mock series every few ticks so charts move

use tracing::debug;

use crate::state::DashboardState;

pub struct LiveFeed {
    tick_count: u64,
    refresh_every: u64,
}

impl LiveFeed {
    pub fn new(refresh_every: u64) -> Self {
        Self {
            tick_count: 0,
            refresh_every: refresh_every.max(1),
        }
    }

    /// Advances one tick; returns true when series were regenerated.
    pub fn update(&mut self, state: &mut DashboardState) -> bool {
        self.tick_count += 1;
        state.tick_count = self.tick_count;

        if self.tick_count % self.refresh_every != 0 {
            return false;
        }

        state.hourly_activity = state.generator.hourly_activity();
        state.refresh_trend();
        if state.details.farm_id.is_some() {
            state.load_farm_details();
        }
        debug!("live feed refreshed at tick {}", self.tick_count);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use farmkit::{DashboardConfig, MockDataGenerator};

    #[test]
    fn test_refreshes_on_interval() {
        let config = DashboardConfig::default();
        let mut state = DashboardState::new(&config, MockDataGenerator::from_seed(Some(9)));
        let mut feed = LiveFeed::new(3);

        let refreshed: Vec<bool> = (0..6).map(|_| feed.update(&mut state)).collect();

        assert_eq!(refreshed, vec![false, false, true, false, false, true]);
        assert_eq!(state.tick_count, 6);
        assert_eq!(state.hourly_activity.len(), 24);
    }

    #[test]
    fn test_zero_interval_is_clamped() {
        let config = DashboardConfig::default();
        let mut state = DashboardState::new(&config, MockDataGenerator::from_seed(Some(9)));
        let mut feed = LiveFeed::new(0);

        assert!(feed.update(&mut state));
    }
}
