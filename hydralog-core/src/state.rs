//! The whole-application state, persisted as a single document.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::{DailyRecord, MeasurementUnit, TimeFrame, UserProfile};

/// Default daily goal in milliliters.
pub const DEFAULT_TARGET_ML: u32 = 2500;

/// Default reminder cadence in minutes.
pub const DEFAULT_REMINDER_INTERVAL_MIN: u32 = 60;

/// Everything the application knows: the daily log, the current goal,
/// reminder settings, display unit and user profile.
///
/// Serialized as one camelCase JSON document. There is no schema version;
/// every field falls back to its default when absent, so partial or older
/// snapshots still load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HydrationState {
    /// Aggregation granularity last selected for viewing
    pub time_frame: TimeFrame,
    /// The daily log
    pub hydration_data: HydrationData,
    /// Current default goal in milliliters, applied to new days
    pub target_amount: u32,
    /// Reminder cadence in minutes
    pub reminder_interval: u32,
    pub reminders_enabled: bool,
    /// Display unit; storage stays milliliters either way
    pub measurement_unit: MeasurementUnit,
    pub user_profile: UserProfile,
}

/// Container for the per-day records.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HydrationData {
    pub daily: Vec<DailyRecord>,
}

impl Default for HydrationState {
    fn default() -> Self {
        Self {
            time_frame: TimeFrame::default(),
            hydration_data: HydrationData::default(),
            target_amount: DEFAULT_TARGET_ML,
            reminder_interval: DEFAULT_REMINDER_INTERVAL_MIN,
            reminders_enabled: false,
            measurement_unit: MeasurementUnit::default(),
            user_profile: UserProfile::default(),
        }
    }
}

impl HydrationState {
    /// Fresh state with an empty record for `today` already in place.
    pub fn initial(today: NaiveDate) -> Self {
        let mut state = Self::default();
        state.ensure_day(today);
        state
    }

    /// All daily records, in insertion order.
    pub fn days(&self) -> &[DailyRecord] {
        &self.hydration_data.daily
    }

    /// The record for `date`, if one exists.
    pub fn record_for(&self, date: NaiveDate) -> Option<&DailyRecord> {
        self.hydration_data.daily.iter().find(|d| d.date == date)
    }

    /// The record for `date`, created at the current default goal when
    /// absent. Dates stay unique within the log.
    pub fn ensure_day(&mut self, date: NaiveDate) -> &mut DailyRecord {
        let days = &mut self.hydration_data.daily;
        match days.iter().position(|d| d.date == date) {
            Some(idx) => &mut days[idx],
            None => {
                days.push(DailyRecord::new(date, self.target_amount));
                let last = days.len() - 1;
                &mut days[last]
            }
        }
    }
}
