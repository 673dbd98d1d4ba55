use chrono::Local;
use clap::Args;

use hydralog_core::progress::current_day_progress;
use hydralog_core::units::{format_amount, format_percentage, preset_amounts, ML_PER_OZ};
use hydralog_core::{HydrationStore, MeasurementUnit, StateStorage};

#[derive(Args)]
pub struct LogCommand {
    /// Amount to log, in the active display unit
    #[arg(allow_negative_numbers = true)]
    amount: Option<f64>,

    /// Interpret the amount as milliliters
    #[arg(long, conflicts_with = "oz")]
    ml: bool,

    /// Interpret the amount as ounces
    #[arg(long)]
    oz: bool,

    /// List the quick-add preset amounts
    #[arg(long)]
    presets: bool,
}

impl LogCommand {
    pub fn run<S: StateStorage>(
        &self,
        store: &mut HydrationStore<S>,
    ) -> Result<(), Box<dyn std::error::Error>> {
        let unit = store.state().measurement_unit;

        if self.presets {
            print_presets(unit);
            return Ok(());
        }

        let amount = self
            .amount
            .ok_or("Provide an amount to log, or --presets to list quick-add values")?;

        let entered_unit = if self.ml {
            MeasurementUnit::Ml
        } else if self.oz {
            MeasurementUnit::Oz
        } else {
            unit
        };

        // Canonical storage is milliliters; the sign survives conversion so
        // the store can reject non-positive amounts itself.
        let amount_ml = match entered_unit {
            MeasurementUnit::Ml => amount.round() as i32,
            MeasurementUnit::Oz => (amount * ML_PER_OZ).round() as i32,
        };

        let now = Local::now();
        store.add_intake(amount_ml, now)?;

        let today = current_day_progress(store.state(), now.date_naive());
        println!("Logged {}.", format_amount(amount_ml as u32, unit));
        println!(
            "Today: {} of {} ({})",
            format_amount(today.current, unit),
            format_amount(today.target, unit),
            format_percentage(today.percentage)
        );

        Ok(())
    }
}

fn print_presets(unit: MeasurementUnit) {
    println!("Quick-add presets:");
    for amount in preset_amounts(unit) {
        println!("  {}", format_amount(amount, unit));
    }
}
