//! Priority levels for officer queue ordering.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// The discrete priority assigned to a complaint.
///
/// Variants are declared in ascending order so the derived `Ord` gives
/// `Low < Medium < High < Critical`, matching queue ranking.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum PriorityLevel {
    /// Cosmetic or minor issues; resolved in routine order.
    Low,
    /// Standard issues with no immediate hazard.
    Medium,
    /// Severe issues needing prompt attention.
    High,
    /// Life-safety hazards; always at the head of the queue.
    Critical,
}

impl PriorityLevel {
    /// Returns the level as its wire-format string.
    pub fn as_str(self) -> &'static str {
        match self {
            PriorityLevel::Low => "low",
            PriorityLevel::Medium => "medium",
            PriorityLevel::High => "high",
            PriorityLevel::Critical => "critical",
        }
    }
}

impl FromStr for PriorityLevel {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "low" => Ok(PriorityLevel::Low),
            "medium" => Ok(PriorityLevel::Medium),
            "high" => Ok(PriorityLevel::High),
            "critical" => Ok(PriorityLevel::Critical),
            _ => Err(crate::Error::UnknownPriority(s.to_string())),
        }
    }
}

impl std::fmt::Display for PriorityLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ordering() {
        assert!(PriorityLevel::Low < PriorityLevel::Medium);
        assert!(PriorityLevel::Medium < PriorityLevel::High);
        assert!(PriorityLevel::High < PriorityLevel::Critical);
    }

    #[test]
    fn test_serde_round_trip() {
        let json = serde_json::to_string(&PriorityLevel::Critical).unwrap();
        assert_eq!(json, "\"critical\"");
        let back: PriorityLevel = serde_json::from_str(&json).unwrap();
        assert_eq!(back, PriorityLevel::Critical);
    }

    #[test]
    fn test_parse() {
        assert_eq!("high".parse::<PriorityLevel>().unwrap(), PriorityLevel::High);
        assert!("urgent".parse::<PriorityLevel>().is_err());
    }
}
