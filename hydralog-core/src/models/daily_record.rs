use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::intake_entry::IntakeEntry;

/// One calendar day of the hydration log.
///
/// `target` is the goal that was in force for this day. Changing the
/// default goal later never rewrites past records, so historical
/// percent-of-goal figures keep their meaning. The running total is always
/// computed from `entries`, never stored alongside them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyRecord {
    /// Calendar date, unique within the log
    pub date: NaiveDate,
    /// Goal in force for this day, in milliliters
    pub target: u32,
    /// Logged drinks, in insertion order (= chronological order)
    #[serde(default)]
    pub entries: Vec<IntakeEntry>,
}

impl DailyRecord {
    pub fn new(date: NaiveDate, target: u32) -> Self {
        Self {
            date,
            target,
            entries: Vec::new(),
        }
    }

    /// Total intake for the day, in milliliters.
    pub fn current(&self) -> u32 {
        self.entries.iter().map(|e| e.amount).sum()
    }

    /// Appends a drink to the day.
    pub fn log(&mut self, time: DateTime<Utc>, amount: u32) {
        self.entries.push(IntakeEntry::new(time, amount));
    }
}

impl fmt::Display for DailyRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} / {} ml ({} entries)",
            self.date,
            self.current(),
            self.target,
            self.entries.len()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    #[test]
    fn test_daily_record_new() {
        let record = DailyRecord::new(date("2026-03-05"), 2500);

        assert_eq!(record.date, date("2026-03-05"));
        assert_eq!(record.target, 2500);
        assert!(record.entries.is_empty());
        assert_eq!(record.current(), 0);
    }

    #[test]
    fn test_current_is_sum_of_entries() {
        let mut record = DailyRecord::new(date("2026-03-05"), 2500);
        let time = Utc.with_ymd_and_hms(2026, 3, 5, 8, 0, 0).unwrap();

        record.log(time, 300);
        record.log(time, 500);
        record.log(time, 200);

        assert_eq!(record.current(), 1000);
        assert_eq!(record.entries.len(), 3);
    }

    #[test]
    fn test_entries_keep_insertion_order() {
        let mut record = DailyRecord::new(date("2026-03-05"), 2500);
        let t1 = Utc.with_ymd_and_hms(2026, 3, 5, 8, 0, 0).unwrap();
        let t2 = Utc.with_ymd_and_hms(2026, 3, 5, 12, 30, 0).unwrap();

        record.log(t1, 300);
        record.log(t2, 500);

        assert_eq!(record.entries[0].time, t1);
        assert_eq!(record.entries[1].time, t2);
    }

    #[test]
    fn test_daily_record_display() {
        let mut record = DailyRecord::new(date("2026-03-05"), 2000);
        let time = Utc.with_ymd_and_hms(2026, 3, 5, 8, 0, 0).unwrap();
        record.log(time, 500);

        let output = format!("{}", record);
        assert!(output.contains("2026-03-05"));
        assert!(output.contains("500 / 2000 ml"));
    }

    #[test]
    fn test_daily_record_json_roundtrip() {
        let mut record = DailyRecord::new(date("2026-03-05"), 2500);
        record.log(Utc.with_ymd_and_hms(2026, 3, 5, 8, 0, 0).unwrap(), 300);

        let json = serde_json::to_string(&record).unwrap();
        let parsed: DailyRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, record);
    }

    #[test]
    fn test_stored_total_from_foreign_writer_is_ignored() {
        // A snapshot writer that caches a running total alongside the
        // entries must not be able to make the two disagree.
        let json = r#"{"date":"2026-03-05","target":2500,"current":9999,
                       "entries":[{"time":"2026-03-05T08:00:00Z","amount":300}]}"#;
        let parsed: DailyRecord = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.current(), 300);
    }

    #[test]
    fn test_missing_entries_defaults_to_empty() {
        let json = r#"{"date":"2026-03-05","target":2500}"#;
        let parsed: DailyRecord = serde_json::from_str(json).unwrap();
        assert!(parsed.entries.is_empty());
        assert_eq!(parsed.current(), 0);
    }
}
