//! Complaint category labels.
//!
//! Categories form a closed enumeration: every complaint is assigned exactly
//! one label, with `Other` as the catch-all when nothing else fits.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// The closed set of complaint categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CategoryLabel {
    /// Potholes, broken pavement, traffic signals, footpaths.
    Roads,
    /// Supply interruptions, pipeline leaks, contamination.
    Water,
    /// Garbage, sewage, drains, public toilets.
    Sanitation,
    /// Crime, street lighting, unsafe areas.
    Safety,
    /// Outages, damaged wires, transformers.
    Electricity,
    /// Buses, metro, stations, schedules.
    PublicTransport,
    /// Trees, parks, pollution, stray animals.
    Environment,
    /// Anything that fits no other category.
    Other,
}

impl CategoryLabel {
    /// All categories, in declaration order.
    pub const ALL: [CategoryLabel; 8] = [
        CategoryLabel::Roads,
        CategoryLabel::Water,
        CategoryLabel::Sanitation,
        CategoryLabel::Safety,
        CategoryLabel::Electricity,
        CategoryLabel::PublicTransport,
        CategoryLabel::Environment,
        CategoryLabel::Other,
    ];

    /// Returns the label as its wire-format string.
    pub fn as_str(self) -> &'static str {
        match self {
            CategoryLabel::Roads => "roads",
            CategoryLabel::Water => "water",
            CategoryLabel::Sanitation => "sanitation",
            CategoryLabel::Safety => "safety",
            CategoryLabel::Electricity => "electricity",
            CategoryLabel::PublicTransport => "public_transport",
            CategoryLabel::Environment => "environment",
            CategoryLabel::Other => "other",
        }
    }

    /// Public-risk rank used to break keyword-fallback ties.
    ///
    /// Lower rank wins: safety-related ambiguity resolves toward the category
    /// with higher public-risk weight, never arbitrarily.
    pub fn risk_rank(self) -> u8 {
        match self {
            CategoryLabel::Safety => 0,
            CategoryLabel::Water => 1,
            CategoryLabel::Electricity => 2,
            CategoryLabel::Roads => 3,
            CategoryLabel::Sanitation => 4,
            CategoryLabel::PublicTransport => 5,
            CategoryLabel::Environment => 6,
            CategoryLabel::Other => 7,
        }
    }

    /// Parses a label leniently: unknown names map to `Other`.
    ///
    /// Used when reading category names out of a model artifact that may have
    /// been trained against a stale enumeration.
    pub fn parse_lenient(s: &str) -> Self {
        s.parse().unwrap_or(CategoryLabel::Other)
    }
}

impl FromStr for CategoryLabel {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "roads" => Ok(CategoryLabel::Roads),
            "water" => Ok(CategoryLabel::Water),
            "sanitation" => Ok(CategoryLabel::Sanitation),
            "safety" => Ok(CategoryLabel::Safety),
            "electricity" => Ok(CategoryLabel::Electricity),
            "public_transport" => Ok(CategoryLabel::PublicTransport),
            "environment" => Ok(CategoryLabel::Environment),
            "other" => Ok(CategoryLabel::Other),
            _ => Err(crate::Error::UnknownCategory(s.to_string())),
        }
    }
}

impl std::fmt::Display for CategoryLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
