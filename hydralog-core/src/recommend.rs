//! Recommended daily intake from the user profile.

use crate::models::{ActivityLevel, UserProfile, WeightUnit};

/// Kilograms per pound.
pub const KG_PER_LB: f64 = 0.453592;

/// Milliliters of water per kilogram of body weight.
const ML_PER_KG: f64 = 35.0;

/// Suggested daily target in milliliters: 35 ml per kilogram of body
/// weight, scaled by activity level, rounded to the nearest 100 ml.
pub fn recommended_intake(
    weight: f64,
    weight_unit: WeightUnit,
    activity_level: ActivityLevel,
) -> u32 {
    let weight_kg = match weight_unit {
        WeightUnit::Kg => weight,
        WeightUnit::Lb => weight * KG_PER_LB,
    };

    let base = weight_kg * ML_PER_KG;
    let scaled = base * activity_level.multiplier();
    ((scaled / 100.0).round() * 100.0) as u32
}

/// [`recommended_intake`] over a stored profile.
pub fn recommended_for(profile: &UserProfile) -> u32 {
    recommended_intake(profile.weight, profile.weight_unit, profile.activity_level)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_moderate_activity_70kg() {
        // 70 * 35 = 2450, rounds up to 2500.
        assert_eq!(
            recommended_intake(70.0, WeightUnit::Kg, ActivityLevel::Moderate),
            2500
        );
    }

    #[test]
    fn test_low_activity_scales_down() {
        // 70 * 35 * 0.9 = 2205, rounds to 2200.
        assert_eq!(
            recommended_intake(70.0, WeightUnit::Kg, ActivityLevel::Low),
            2200
        );
    }

    #[test]
    fn test_high_activity_scales_up() {
        // 80 * 35 * 1.2 = 3360, rounds to 3400.
        assert_eq!(
            recommended_intake(80.0, WeightUnit::Kg, ActivityLevel::High),
            3400
        );
    }

    #[test]
    fn test_pounds_are_converted() {
        // 150 lb = 68.04 kg, * 35 = 2381, rounds to 2400.
        assert_eq!(
            recommended_intake(150.0, WeightUnit::Lb, ActivityLevel::Moderate),
            2400
        );
    }

    #[test]
    fn test_recommended_for_default_profile() {
        let profile = UserProfile::default();
        assert_eq!(recommended_for(&profile), 2500);
    }
}
