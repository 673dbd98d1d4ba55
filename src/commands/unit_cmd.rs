use clap::Args;

use hydralog_core::{HydrationStore, MeasurementUnit, StateStorage};

#[derive(Args)]
pub struct UnitCommand {
    /// Display unit (ml, oz); prints the current one when omitted
    unit: Option<String>,
}

impl UnitCommand {
    pub fn run<S: StateStorage>(
        &self,
        store: &mut HydrationStore<S>,
    ) -> Result<(), Box<dyn std::error::Error>> {
        match &self.unit {
            Some(s) => {
                let unit: MeasurementUnit = s.parse()?;
                store.set_measurement_unit(unit);
                println!("Display unit set to {}. Amounts are stored in ml.", unit);
            }
            None => {
                println!("Display unit: {}", store.state().measurement_unit);
            }
        }

        Ok(())
    }
}
