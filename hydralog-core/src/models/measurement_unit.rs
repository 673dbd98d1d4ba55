use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Display unit for amounts. Storage and arithmetic are always milliliters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MeasurementUnit {
    #[default]
    Ml,
    Oz,
}

impl fmt::Display for MeasurementUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MeasurementUnit::Ml => write!(f, "ml"),
            MeasurementUnit::Oz => write!(f, "oz"),
        }
    }
}

impl FromStr for MeasurementUnit {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "ml" => Ok(MeasurementUnit::Ml),
            "oz" => Ok(MeasurementUnit::Oz),
            _ => Err(format!(
                "Invalid measurement unit '{}'. Valid options: ml, oz",
                s
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_measurement_unit_display() {
        assert_eq!(format!("{}", MeasurementUnit::Ml), "ml");
        assert_eq!(format!("{}", MeasurementUnit::Oz), "oz");
    }

    #[test]
    fn test_measurement_unit_from_str() {
        assert_eq!(
            MeasurementUnit::from_str("ml").unwrap(),
            MeasurementUnit::Ml
        );
        assert_eq!(
            MeasurementUnit::from_str("OZ").unwrap(),
            MeasurementUnit::Oz
        );
        assert!(MeasurementUnit::from_str("liters").is_err());
    }

    #[test]
    fn test_measurement_unit_json_roundtrip() {
        let json = serde_json::to_string(&MeasurementUnit::Oz).unwrap();
        assert_eq!(json, "\"oz\"");

        let parsed: MeasurementUnit = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, MeasurementUnit::Oz);
    }
}
