//! Pure aggregation over a [`HydrationState`] snapshot.
//!
//! Nothing in here mutates or caches; statistics are recomputed from the
//! raw records on every call. The reference date is always an explicit
//! parameter so the functions stay testable without clock mocking.

use std::collections::BTreeMap;

use chrono::{Datelike, Days, NaiveDate};
use serde::Serialize;

use crate::models::{DailyRecord, TimeFrame};
use crate::state::HydrationState;

/// Display-ready statistics for one time frame.
#[derive(Debug, Clone, Serialize)]
pub struct Progress {
    /// The records behind the figures, for charting or listing
    pub data: ProgressData,
    /// Mean of the day totals in the window (the total itself for daily)
    pub average: f64,
    /// Mean of the day goals in the window
    pub target: f64,
    /// Share of target reached, capped at 100
    pub percentage: f64,
}

/// The records a [`Progress`] was computed from.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum ProgressData {
    Days(Vec<DailyRecord>),
    Months(Vec<MonthSummary>),
}

/// Per-month figures for the annual view.
#[derive(Debug, Clone, Serialize)]
pub struct MonthSummary {
    /// English month abbreviation, e.g. "Mar"
    pub month: String,
    pub average: f64,
    pub target: f64,
}

/// Today's progress in the flattened shape the daily view renders.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct DayProgress {
    pub current: u32,
    pub target: u32,
    pub percentage: f64,
}

/// Share of `target` reached by `amount`, capped at 100.
///
/// A zero target reads as 0 rather than dividing by zero; it is a
/// degenerate but valid configuration.
pub fn percentage_of(amount: f64, target: f64) -> f64 {
    if target <= 0.0 {
        0.0
    } else {
        (amount / target * 100.0).min(100.0)
    }
}

/// Statistics for the requested time frame, relative to `reference`.
pub fn progress(state: &HydrationState, frame: TimeFrame, reference: NaiveDate) -> Progress {
    match frame {
        TimeFrame::Daily => daily(state, reference),
        TimeFrame::Weekly => weekly(state, reference),
        TimeFrame::Monthly => monthly(state, reference),
        TimeFrame::Annual => annual(state, reference),
    }
}

/// Today's totals in the flattened `{current, target, percentage}` shape.
pub fn current_day_progress(state: &HydrationState, today: NaiveDate) -> DayProgress {
    match state.record_for(today) {
        Some(day) => DayProgress {
            current: day.current(),
            target: day.target,
            percentage: percentage_of(day.current() as f64, day.target as f64),
        },
        None => DayProgress {
            current: 0,
            target: state.target_amount,
            percentage: 0.0,
        },
    }
}

fn daily(state: &HydrationState, reference: NaiveDate) -> Progress {
    let day = state
        .record_for(reference)
        .cloned()
        .unwrap_or_else(|| DailyRecord::new(reference, state.target_amount));

    let average = day.current() as f64;
    let target = day.target as f64;
    Progress {
        data: ProgressData::Days(vec![day]),
        average,
        target,
        percentage: percentage_of(average, target),
    }
}

fn weekly(state: &HydrationState, reference: NaiveDate) -> Progress {
    // Trailing seven days ending at the reference date inclusive.
    let start = reference
        .checked_sub_days(Days::new(6))
        .unwrap_or(NaiveDate::MIN);

    let days = sorted_days(state, |d| d.date >= start && d.date <= reference);
    days_progress(state, days)
}

fn monthly(state: &HydrationState, reference: NaiveDate) -> Progress {
    let days = sorted_days(state, |d| {
        d.date.year() == reference.year() && d.date.month() == reference.month()
    });
    days_progress(state, days)
}

fn annual(state: &HydrationState, reference: NaiveDate) -> Progress {
    let days = sorted_days(state, |d| d.date.year() == reference.year());

    // Bucket by month number; the map keeps the summaries in calendar
    // order. Months without records are absent, not zero-filled.
    let mut buckets: BTreeMap<u32, (f64, f64, u32)> = BTreeMap::new();
    for day in &days {
        let bucket = buckets.entry(day.date.month()).or_insert((0.0, 0.0, 0));
        bucket.0 += day.current() as f64;
        bucket.1 += day.target as f64;
        bucket.2 += 1;
    }

    let months: Vec<MonthSummary> = buckets
        .into_iter()
        .map(|(month, (total, target_total, count))| MonthSummary {
            month: month_abbrev(month).to_string(),
            average: total / count as f64,
            target: target_total / count as f64,
        })
        .collect();

    let (average, target) = if months.is_empty() {
        (0.0, state.target_amount as f64)
    } else {
        let count = months.len() as f64;
        (
            months.iter().map(|m| m.average).sum::<f64>() / count,
            months.iter().map(|m| m.target).sum::<f64>() / count,
        )
    };

    Progress {
        data: ProgressData::Months(months),
        average,
        target,
        percentage: percentage_of(average, target),
    }
}

fn sorted_days(state: &HydrationState, keep: impl Fn(&DailyRecord) -> bool) -> Vec<DailyRecord> {
    let mut days: Vec<DailyRecord> = state.days().iter().filter(|d| keep(d)).cloned().collect();
    days.sort_by_key(|d| d.date);
    days
}

fn days_progress(state: &HydrationState, days: Vec<DailyRecord>) -> Progress {
    let (average, target) = if days.is_empty() {
        (0.0, state.target_amount as f64)
    } else {
        let count = days.len() as f64;
        (
            days.iter().map(|d| d.current() as f64).sum::<f64>() / count,
            days.iter().map(|d| d.target as f64).sum::<f64>() / count,
        )
    };

    Progress {
        data: ProgressData::Days(days),
        average,
        target,
        percentage: percentage_of(average, target),
    }
}

fn month_abbrev(month: u32) -> &'static str {
    match month {
        1 => "Jan",
        2 => "Feb",
        3 => "Mar",
        4 => "Apr",
        5 => "May",
        6 => "Jun",
        7 => "Jul",
        8 => "Aug",
        9 => "Sep",
        10 => "Oct",
        11 => "Nov",
        12 => "Dec",
        _ => "",
    }
}
