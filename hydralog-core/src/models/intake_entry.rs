use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single logged drink.
///
/// Amounts are always milliliters; ounces exist only at the display
/// boundary. Entries are immutable once created and are never edited or
/// removed individually.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntakeEntry {
    /// When the drink was logged
    pub time: DateTime<Utc>,
    /// Amount in milliliters
    pub amount: u32,
}

impl IntakeEntry {
    pub fn new(time: DateTime<Utc>, amount: u32) -> Self {
        Self { time, amount }
    }
}

impl fmt::Display for IntakeEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ml at {}", self.amount, self.time.to_rfc3339())
    }
}
