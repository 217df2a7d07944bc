pub mod actions;
pub mod catalog;
pub mod clock;
pub mod config;
pub mod errors;
pub mod generator;
pub mod listing;
pub mod metrics;
pub mod profile_image;
pub mod reports;
pub mod router;
pub mod settings;
pub mod types;

pub use clock::{Clock, FixedClock, SystemClock};
pub use config::DashboardConfig;
pub use errors::{FarmError, Result};
pub use generator::MockDataGenerator;
pub use metrics::{Metric, TimeRange};
