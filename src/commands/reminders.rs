use clap::{Args, Subcommand};

use hydralog_core::{HydrationStore, StateStorage};

#[derive(Args)]
pub struct RemindersCommand {
    #[command(subcommand)]
    pub command: RemindersSubcommand,
}

#[derive(Subcommand)]
pub enum RemindersSubcommand {
    /// Show reminder settings
    Show,

    /// Enable reminders
    On,

    /// Disable reminders
    Off,

    /// Set the reminder cadence in minutes (15-120)
    Interval {
        #[arg(value_parser = clap::value_parser!(u32).range(15..=120))]
        minutes: u32,
    },
}

impl RemindersCommand {
    pub fn run<S: StateStorage>(
        &self,
        store: &mut HydrationStore<S>,
    ) -> Result<(), Box<dyn std::error::Error>> {
        match &self.command {
            RemindersSubcommand::Show => {}

            RemindersSubcommand::On => {
                store.toggle_reminders(true);
                println!("Reminders enabled.");
            }

            RemindersSubcommand::Off => {
                store.toggle_reminders(false);
                println!("Reminders disabled.");
            }

            RemindersSubcommand::Interval { minutes } => {
                store.set_reminder_interval(*minutes);
                println!("Reminder interval set to {} minutes.", minutes);
            }
        }

        let state = store.state();
        println!(
            "Reminders: {}, every {} minutes",
            if state.reminders_enabled { "on" } else { "off" },
            state.reminder_interval
        );

        Ok(())
    }
}
