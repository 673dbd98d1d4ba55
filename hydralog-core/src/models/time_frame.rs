use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Aggregation granularity selected for viewing.
///
/// Purely a view selection; it decides which aggregation path runs and
/// nothing else.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeFrame {
    #[default]
    Daily,
    Weekly,
    Monthly,
    Annual,
}

impl fmt::Display for TimeFrame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TimeFrame::Daily => write!(f, "daily"),
            TimeFrame::Weekly => write!(f, "weekly"),
            TimeFrame::Monthly => write!(f, "monthly"),
            TimeFrame::Annual => write!(f, "annual"),
        }
    }
}

impl FromStr for TimeFrame {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "daily" => Ok(TimeFrame::Daily),
            "weekly" => Ok(TimeFrame::Weekly),
            "monthly" => Ok(TimeFrame::Monthly),
            "annual" => Ok(TimeFrame::Annual),
            _ => Err(format!(
                "Invalid time frame '{}'. Valid options: daily, weekly, monthly, annual",
                s
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_time_frame_display() {
        assert_eq!(format!("{}", TimeFrame::Daily), "daily");
        assert_eq!(format!("{}", TimeFrame::Weekly), "weekly");
        assert_eq!(format!("{}", TimeFrame::Monthly), "monthly");
        assert_eq!(format!("{}", TimeFrame::Annual), "annual");
    }

    #[test]
    fn test_time_frame_from_str() {
        assert_eq!(TimeFrame::from_str("daily").unwrap(), TimeFrame::Daily);
        assert_eq!(TimeFrame::from_str("WEEKLY").unwrap(), TimeFrame::Weekly);
        assert_eq!(TimeFrame::from_str("Monthly").unwrap(), TimeFrame::Monthly);
        assert_eq!(TimeFrame::from_str("annual").unwrap(), TimeFrame::Annual);
    }

    #[test]
    fn test_time_frame_from_str_invalid() {
        assert!(TimeFrame::from_str("hourly").is_err());
        assert!(TimeFrame::from_str("").is_err());
    }

    #[test]
    fn test_time_frame_json_roundtrip() {
        let json = serde_json::to_string(&TimeFrame::Weekly).unwrap();
        assert_eq!(json, "\"weekly\"");

        let parsed: TimeFrame = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, TimeFrame::Weekly);
    }
}
