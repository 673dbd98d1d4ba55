use clap::{Args, Subcommand};

use hydralog_core::recommend::recommended_for;
use hydralog_core::units::format_amount;
use hydralog_core::{
    ActivityLevel, HydrationStore, ProfileUpdate, StateStorage, WeightUnit,
};

#[derive(Args)]
pub struct ProfileCommand {
    #[command(subcommand)]
    pub command: ProfileSubcommand,
}

#[derive(Subcommand)]
pub enum ProfileSubcommand {
    /// Show the stored profile and the goal it suggests
    Show,

    /// Update profile fields
    Set {
        /// Body weight, in the profile's weight unit
        #[arg(long)]
        weight: Option<f64>,

        /// Weight unit (kg, lb)
        #[arg(long = "weight-unit")]
        weight_unit: Option<String>,

        /// Activity level (low, moderate, high)
        #[arg(long)]
        activity: Option<String>,
    },
}

impl ProfileCommand {
    pub fn run<S: StateStorage>(
        &self,
        store: &mut HydrationStore<S>,
    ) -> Result<(), Box<dyn std::error::Error>> {
        match &self.command {
            ProfileSubcommand::Show => {
                print_profile(store);
            }

            ProfileSubcommand::Set {
                weight,
                weight_unit,
                activity,
            } => {
                if weight.is_none() && weight_unit.is_none() && activity.is_none() {
                    return Err(
                        "Provide at least one of --weight, --weight-unit, --activity".into()
                    );
                }

                let update = ProfileUpdate {
                    weight: *weight,
                    weight_unit: weight_unit
                        .as_deref()
                        .map(str::parse::<WeightUnit>)
                        .transpose()?,
                    activity_level: activity
                        .as_deref()
                        .map(str::parse::<ActivityLevel>)
                        .transpose()?,
                };

                store.update_user_profile(update);
                print_profile(store);
            }
        }

        Ok(())
    }
}

fn print_profile<S: StateStorage>(store: &HydrationStore<S>) {
    let state = store.state();
    let profile = &state.user_profile;

    println!("Profile: {}", profile);
    println!(
        "Recommended intake: {}",
        format_amount(recommended_for(profile), state.measurement_unit)
    );
}
