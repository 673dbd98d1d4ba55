use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Unit the user enters their body weight in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeightUnit {
    Kg,
    Lb,
}

impl fmt::Display for WeightUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WeightUnit::Kg => write!(f, "kg"),
            WeightUnit::Lb => write!(f, "lb"),
        }
    }
}

impl FromStr for WeightUnit {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "kg" => Ok(WeightUnit::Kg),
            "lb" => Ok(WeightUnit::Lb),
            _ => Err(format!(
                "Invalid weight unit '{}'. Valid options: kg, lb",
                s
            )),
        }
    }
}

/// How active the user is, scaling the recommended intake.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityLevel {
    Low,
    Moderate,
    High,
}

impl ActivityLevel {
    /// Multiplier applied on top of the per-kilogram base amount.
    pub fn multiplier(&self) -> f64 {
        match self {
            ActivityLevel::Low => 0.9,
            ActivityLevel::Moderate => 1.0,
            ActivityLevel::High => 1.2,
        }
    }
}

impl fmt::Display for ActivityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ActivityLevel::Low => write!(f, "low"),
            ActivityLevel::Moderate => write!(f, "moderate"),
            ActivityLevel::High => write!(f, "high"),
        }
    }
}

impl FromStr for ActivityLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "low" => Ok(ActivityLevel::Low),
            "moderate" => Ok(ActivityLevel::Moderate),
            "high" => Ok(ActivityLevel::High),
            _ => Err(format!(
                "Invalid activity level '{}'. Valid options: low, moderate, high",
                s
            )),
        }
    }
}

/// Body profile used to compute a recommended daily intake.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserProfile {
    pub weight: f64,
    pub weight_unit: WeightUnit,
    pub activity_level: ActivityLevel,
}

impl Default for UserProfile {
    fn default() -> Self {
        Self {
            weight: 70.0,
            weight_unit: WeightUnit::Kg,
            activity_level: ActivityLevel::Moderate,
        }
    }
}

impl UserProfile {
    /// Merges a partial update; `None` fields keep their current value.
    pub fn apply(&mut self, update: ProfileUpdate) {
        if let Some(weight) = update.weight {
            self.weight = weight;
        }
        if let Some(unit) = update.weight_unit {
            self.weight_unit = unit;
        }
        if let Some(level) = update.activity_level {
            self.activity_level = level;
        }
    }
}

impl fmt::Display for UserProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {}, {} activity",
            self.weight, self.weight_unit, self.activity_level
        )
    }
}

/// A partial profile change.
#[derive(Debug, Clone, Default)]
pub struct ProfileUpdate {
    pub weight: Option<f64>,
    pub weight_unit: Option<WeightUnit>,
    pub activity_level: Option<ActivityLevel>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_profile() {
        let profile = UserProfile::default();
        assert_eq!(profile.weight, 70.0);
        assert_eq!(profile.weight_unit, WeightUnit::Kg);
        assert_eq!(profile.activity_level, ActivityLevel::Moderate);
    }

    #[test]
    fn test_apply_partial_update() {
        let mut profile = UserProfile::default();
        profile.apply(ProfileUpdate {
            weight: Some(82.5),
            ..Default::default()
        });

        assert_eq!(profile.weight, 82.5);
        assert_eq!(profile.weight_unit, WeightUnit::Kg);
        assert_eq!(profile.activity_level, ActivityLevel::Moderate);
    }

    #[test]
    fn test_apply_full_update() {
        let mut profile = UserProfile::default();
        profile.apply(ProfileUpdate {
            weight: Some(180.0),
            weight_unit: Some(WeightUnit::Lb),
            activity_level: Some(ActivityLevel::High),
        });

        assert_eq!(profile.weight, 180.0);
        assert_eq!(profile.weight_unit, WeightUnit::Lb);
        assert_eq!(profile.activity_level, ActivityLevel::High);
    }

    #[test]
    fn test_activity_multipliers() {
        assert_eq!(ActivityLevel::Low.multiplier(), 0.9);
        assert_eq!(ActivityLevel::Moderate.multiplier(), 1.0);
        assert_eq!(ActivityLevel::High.multiplier(), 1.2);
    }

    #[test]
    fn test_enum_from_str() {
        assert_eq!(WeightUnit::from_str("KG").unwrap(), WeightUnit::Kg);
        assert_eq!(WeightUnit::from_str("lb").unwrap(), WeightUnit::Lb);
        assert!(WeightUnit::from_str("stone").is_err());

        assert_eq!(
            ActivityLevel::from_str("Moderate").unwrap(),
            ActivityLevel::Moderate
        );
        assert!(ActivityLevel::from_str("extreme").is_err());
    }

    #[test]
    fn test_profile_json_field_names() {
        let profile = UserProfile::default();
        let json = serde_json::to_value(&profile).unwrap();

        assert_eq!(json["weight"], 70.0);
        assert_eq!(json["weightUnit"], "kg");
        assert_eq!(json["activityLevel"], "moderate");
    }
}
