//! Hydralog Core Library
//!
//! Hydration state, aggregation and persistence shared by Hydralog front
//! ends. The store owns the state and writes it through a storage
//! collaborator; aggregation is pure and recomputed on demand.

pub mod error;
pub mod models;
pub mod progress;
pub mod recommend;
pub mod state;
pub mod storage;
pub mod store;
pub mod units;

pub use error::{StorageError, StoreError};
pub use models::{
    ActivityLevel, DailyRecord, IntakeEntry, MeasurementUnit, ProfileUpdate, TimeFrame,
    UserProfile, WeightUnit,
};
pub use progress::{
    current_day_progress, progress, DayProgress, MonthSummary, Progress, ProgressData,
};
pub use recommend::{recommended_for, recommended_intake};
pub use state::{HydrationData, HydrationState, DEFAULT_REMINDER_INTERVAL_MIN, DEFAULT_TARGET_ML};
pub use storage::{FileStorage, MemoryStorage, StateStorage};
pub use store::HydrationStore;

pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!version().is_empty());
    }
}
