use chrono::{Local, NaiveDate};
use clap::{Args, ValueEnum};

use hydralog_core::progress::{percentage_of, progress, Progress, ProgressData};
use hydralog_core::units::{format_amount, format_date, format_percentage};
use hydralog_core::{HydrationState, HydrationStore, StateStorage, TimeFrame};

#[derive(Clone, ValueEnum, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Args)]
pub struct StatsCommand {
    /// Time frame (daily, weekly, monthly, annual); defaults to the last
    /// one used and remembers the choice
    #[arg(long)]
    frame: Option<String>,

    /// Output format
    #[arg(long, value_enum, default_value = "text")]
    format: OutputFormat,
}

impl StatsCommand {
    pub fn run<S: StateStorage>(
        &self,
        store: &mut HydrationStore<S>,
    ) -> Result<(), Box<dyn std::error::Error>> {
        let frame = match &self.frame {
            Some(s) => {
                let frame: TimeFrame = s.parse()?;
                store.set_time_frame(frame);
                frame
            }
            None => store.state().time_frame,
        };

        let reference = Local::now().date_naive();
        let stats = progress(store.state(), frame, reference);

        match self.format {
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&stats)?),
            OutputFormat::Text => print_stats(store.state(), frame, &stats, reference),
        }

        Ok(())
    }
}

fn print_stats(state: &HydrationState, frame: TimeFrame, stats: &Progress, today: NaiveDate) {
    let unit = state.measurement_unit;

    println!("Progress ({})", frame);
    println!("{}", "=".repeat(30));

    match &stats.data {
        ProgressData::Days(days) => {
            if days.is_empty() {
                println!("No records in this window.");
            }
            for day in days {
                println!(
                    "  {:<8} {:>9} / {} ({})",
                    format_date(day.date, today),
                    format_amount(day.current(), unit),
                    format_amount(day.target, unit),
                    format_percentage(percentage_of(day.current() as f64, day.target as f64))
                );
            }
        }
        ProgressData::Months(months) => {
            if months.is_empty() {
                println!("No records this year.");
            }
            for month in months {
                println!(
                    "  {:<8} {:>9} / {} ({})",
                    month.month,
                    format_amount(month.average.round() as u32, unit),
                    format_amount(month.target.round() as u32, unit),
                    format_percentage(percentage_of(month.average, month.target))
                );
            }
        }
    }

    println!();
    println!(
        "Average: {}   Goal: {}   Progress: {}",
        format_amount(stats.average.round() as u32, unit),
        format_amount(stats.target.round() as u32, unit),
        format_percentage(stats.percentage)
    );
}
