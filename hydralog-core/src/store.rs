//! The hydration log store: single owner of the application state.

use chrono::{DateTime, Local, NaiveDate, Utc};

use crate::error::StoreError;
use crate::models::{MeasurementUnit, ProfileUpdate, TimeFrame};
use crate::state::HydrationState;
use crate::storage::StateStorage;

/// Owns the [`HydrationState`] and snapshots it to storage after every
/// change.
///
/// Mutations validate first and leave the state untouched on error. A
/// failed snapshot write keeps the in-memory state authoritative: the
/// failure is logged as a warning and never propagated, so a full disk or a
/// read-only data directory degrades to a session-only tracker instead of
/// an unusable one.
///
/// All operations take the reference time explicitly; the store never
/// consults the system clock.
pub struct HydrationStore<S: StateStorage> {
    state: HydrationState,
    storage: S,
}

impl<S: StateStorage> HydrationStore<S> {
    /// Loads the persisted snapshot, or starts from defaults.
    ///
    /// A missing or unreadable snapshot becomes a fresh default state. A
    /// snapshot that parses but has no record for `today` gets one
    /// synthesized at the configured default goal. The resulting state is
    /// persisted before the store accepts any other operation.
    pub fn load_or_initialize(storage: S, today: NaiveDate) -> Self {
        let mut state = match storage.load() {
            Ok(Some(snapshot)) => match serde_json::from_str::<HydrationState>(&snapshot) {
                Ok(state) => state,
                Err(e) => {
                    tracing::warn!("Discarding malformed saved state: {}", e);
                    HydrationState::default()
                }
            },
            Ok(None) => HydrationState::default(),
            Err(e) => {
                tracing::warn!("Could not read saved state, starting fresh: {}", e);
                HydrationState::default()
            }
        };
        state.ensure_day(today);

        let store = Self { state, storage };
        store.persist();
        store
    }

    /// Read access for aggregation and display.
    pub fn state(&self) -> &HydrationState {
        &self.state
    }

    /// Logs a drink against the calendar day of `at`.
    pub fn add_intake(&mut self, amount_ml: i32, at: DateTime<Local>) -> Result<(), StoreError> {
        if amount_ml <= 0 {
            return Err(StoreError::InvalidAmount(amount_ml));
        }

        let date = at.date_naive();
        self.state
            .ensure_day(date)
            .log(at.with_timezone(&Utc), amount_ml as u32);
        self.persist();
        Ok(())
    }

    /// Changes the default goal and today's goal.
    ///
    /// Past days keep the goal that was in force when they were recorded.
    pub fn set_target_amount(&mut self, amount_ml: i32, today: NaiveDate) -> Result<(), StoreError> {
        if amount_ml <= 0 {
            return Err(StoreError::InvalidAmount(amount_ml));
        }

        let amount = amount_ml as u32;
        self.state.target_amount = amount;
        self.state.ensure_day(today).target = amount;
        self.persist();
        Ok(())
    }

    /// Sets the reminder cadence in minutes. Range limits are a front-end
    /// concern.
    pub fn set_reminder_interval(&mut self, minutes: u32) {
        self.state.reminder_interval = minutes;
        self.persist();
    }

    pub fn toggle_reminders(&mut self, enabled: bool) {
        self.state.reminders_enabled = enabled;
        self.persist();
    }

    pub fn set_measurement_unit(&mut self, unit: MeasurementUnit) {
        self.state.measurement_unit = unit;
        self.persist();
    }

    /// Remembers which aggregation view the user last selected.
    pub fn set_time_frame(&mut self, frame: TimeFrame) {
        self.state.time_frame = frame;
        self.persist();
    }

    /// Merges a partial profile update.
    pub fn update_user_profile(&mut self, update: ProfileUpdate) {
        self.state.user_profile.apply(update);
        self.persist();
    }

    fn persist(&self) {
        if let Err(e) = self.try_persist() {
            tracing::warn!("State not saved, changes may not survive a restart: {}", e);
        }
    }

    fn try_persist(&self) -> Result<(), crate::error::StorageError> {
        let snapshot = serde_json::to_string(&self.state)?;
        self.storage.save(&snapshot)
    }
}
