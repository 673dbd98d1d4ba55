use chrono::Local;
use clap::Args;

use hydralog_core::progress::current_day_progress;
use hydralog_core::units::{format_amount, format_percentage, format_time};
use hydralog_core::{HydrationStore, StateStorage};

#[derive(Args)]
pub struct StatusCommand {}

impl StatusCommand {
    pub fn run<S: StateStorage>(
        &self,
        store: &HydrationStore<S>,
    ) -> Result<(), Box<dyn std::error::Error>> {
        let state = store.state();
        let unit = state.measurement_unit;
        let today = Local::now().date_naive();
        let progress = current_day_progress(state, today);

        println!(
            "Today: {} of {} ({})",
            format_amount(progress.current, unit),
            format_amount(progress.target, unit),
            format_percentage(progress.percentage)
        );

        match state.record_for(today) {
            Some(day) if !day.entries.is_empty() => {
                println!();
                for entry in &day.entries {
                    println!(
                        "  {:>8}  {}",
                        format_time(entry.time.with_timezone(&Local)),
                        format_amount(entry.amount, unit)
                    );
                }
            }
            _ => println!("No drinks logged yet today."),
        }

        Ok(())
    }
}
