use chrono::Local;
use clap::{Args, Subcommand};

use hydralog_core::recommend::recommended_for;
use hydralog_core::units::format_amount;
use hydralog_core::{HydrationStore, StateStorage};

#[derive(Args)]
pub struct GoalCommand {
    #[command(subcommand)]
    pub command: GoalSubcommand,
}

#[derive(Subcommand)]
pub enum GoalSubcommand {
    /// Show the current daily goal
    Show,

    /// Set the daily goal in milliliters
    Set {
        #[arg(allow_negative_numbers = true)]
        amount_ml: i32,
    },

    /// Compute a recommended goal from the stored profile
    Recommend {
        /// Also set it as the daily goal
        #[arg(long)]
        apply: bool,
    },
}

impl GoalCommand {
    pub fn run<S: StateStorage>(
        &self,
        store: &mut HydrationStore<S>,
    ) -> Result<(), Box<dyn std::error::Error>> {
        let unit = store.state().measurement_unit;

        match &self.command {
            GoalSubcommand::Show => {
                println!(
                    "Daily goal: {}",
                    format_amount(store.state().target_amount, unit)
                );
            }

            GoalSubcommand::Set { amount_ml } => {
                store.set_target_amount(*amount_ml, Local::now().date_naive())?;
                println!(
                    "Daily goal set to {}.",
                    format_amount(store.state().target_amount, unit)
                );
                println!("Past days keep the goal they were recorded with.");
            }

            GoalSubcommand::Recommend { apply } => {
                let profile = &store.state().user_profile;
                let recommended = recommended_for(profile);

                println!("Profile: {}", profile);
                println!("Recommended intake: {}", format_amount(recommended, unit));

                if *apply {
                    store.set_target_amount(recommended as i32, Local::now().date_naive())?;
                    println!("Daily goal set to {}.", format_amount(recommended, unit));
                } else {
                    println!("Run 'hydra goal recommend --apply' to make it your goal.");
                }
            }
        }

        Ok(())
    }
}
