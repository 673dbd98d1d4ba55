//! Unit conversion and display formatting.
//!
//! Pure helpers; nothing here touches state. Conversions are lossy by one
//! decimal place in the ounce direction, which is fine for display.

use chrono::{DateTime, Local, NaiveDate};

use crate::models::MeasurementUnit;

/// Milliliters per US fluid ounce.
pub const ML_PER_OZ: f64 = 29.5735;

/// Converts milliliters to ounces, rounded to one decimal place.
pub fn ml_to_oz(ml: u32) -> f64 {
    (ml as f64 / ML_PER_OZ * 10.0).round() / 10.0
}

/// Converts ounces to whole milliliters.
pub fn oz_to_ml(oz: f64) -> u32 {
    (oz * ML_PER_OZ).round() as u32
}

/// Renders a stored milliliter amount in the display unit.
pub fn format_amount(amount_ml: u32, unit: MeasurementUnit) -> String {
    match unit {
        MeasurementUnit::Ml => format!("{} ml", amount_ml),
        MeasurementUnit::Oz => format!("{} oz", ml_to_oz(amount_ml)),
    }
}

/// The five quick-add amounts, as stored milliliters for the display unit.
pub fn preset_amounts(unit: MeasurementUnit) -> [u32; 5] {
    match unit {
        MeasurementUnit::Ml => [200, 300, 500, 750, 1000],
        MeasurementUnit::Oz => [8.0, 12.0, 16.0, 20.0, 32.0].map(oz_to_ml),
    }
}

/// Rounds and caps a percentage for display, e.g. "87%".
pub fn format_percentage(percentage: f64) -> String {
    format!("{}%", (percentage.round() as i64).min(100))
}

/// "Today" for today, otherwise e.g. "Mar 5".
pub fn format_date(date: NaiveDate, today: NaiveDate) -> String {
    if date == today {
        "Today".to_string()
    } else {
        date.format("%b %-d").to_string()
    }
}

/// Clock time in the local timezone, e.g. "9:15 AM".
pub fn format_time(time: DateTime<Local>) -> String {
    time.format("%-I:%M %p").to_string()
}
