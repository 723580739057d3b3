//! Engine configuration: feature weights, thresholds, and keyword lists.
//!
//! Everything that tunes the triage pipeline lives here as explicit data.
//! The defaults are curated for city-complaint text; operators can override
//! any subset from a YAML file, with missing fields falling back to the
//! defaults. Nothing in the pipeline hard-codes a weight or a keyword.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;
use thiserror::Error;
use triage_proto::CategoryLabel;

/// Errors raised while loading or validating configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config YAML: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Weights for the four severity signals. Must sum to 1.0.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FeatureWeights {
    pub urgency: f64,
    pub category: f64,
    pub time_sensitivity: f64,
    pub impact: f64,
}

impl Default for FeatureWeights {
    fn default() -> Self {
        Self {
            urgency: 0.40,
            category: 0.25,
            time_sensitivity: 0.20,
            impact: 0.15,
        }
    }
}

impl FeatureWeights {
    /// Sum of all four weights.
    pub fn sum(&self) -> f64 {
        self.urgency + self.category + self.time_sensitivity + self.impact
    }
}

/// Score thresholds mapping severity to priority bands.
///
/// Comparison is strict: a score exactly equal to a threshold falls into the
/// lower band.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PriorityThresholds {
    pub critical: f64,
    pub high: f64,
    pub medium: f64,
}

impl Default for PriorityThresholds {
    fn default() -> Self {
        Self {
            critical: 0.8,
            high: 0.6,
            medium: 0.4,
        }
    }
}

/// Urgency keyword tiers, from life-safety language down to cosmetic.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UrgencyKeywords {
    /// Any match forces the urgency sub-score to 1.0 and promotes priority
    /// to critical regardless of the numeric score.
    pub critical: Vec<String>,
    pub high: Vec<String>,
    pub medium: Vec<String>,
    pub low: Vec<String>,
}

impl Default for UrgencyKeywords {
    fn default() -> Self {
        Self {
            critical: strings(&[
                "emergency",
                "danger",
                "dangerous",
                "life threatening",
                "fire",
                "accident",
                "flood",
                "collapsed",
                "explosion",
                "gas leak",
                "electrocution",
                "drowning",
                "death",
                "injured",
            ]),
            high: strings(&[
                "severe",
                "major",
                "broken",
                "blocked",
                "overflow",
                "leakage",
                "exposure",
                "hazard",
                "risk",
                "unsafe",
            ]),
            medium: strings(&[
                "damaged",
                "poor",
                "problem",
                "issue",
                "concern",
                "inconvenience",
                "delay",
                "irregular",
            ]),
            low: strings(&[
                "minor",
                "small",
                "slight",
                "cosmetic",
                "suggestion",
                "improvement",
                "eventually",
            ]),
        }
    }
}

/// Temporal-language keywords for the time-sensitivity signal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimeKeywords {
    /// Language demanding action now.
    pub immediacy: Vec<String>,
    /// Language indicating the problem has persisted.
    pub duration: Vec<String>,
}

impl Default for TimeKeywords {
    fn default() -> Self {
        Self {
            immediacy: strings(&["urgent", "urgently", "immediately", "right now", "asap", "today"]),
            duration: strings(&[
                "last week",
                "last month",
                "several days",
                "several weeks",
                "several months",
                "many days",
                "many weeks",
                "many months",
                "every day",
                "weeks now",
                "months now",
                "still unresolved",
            ]),
        }
    }
}

/// Complete engine configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TriageConfig {
    /// Severity signal weights.
    pub weights: FeatureWeights,
    /// Severity-to-priority thresholds.
    pub thresholds: PriorityThresholds,
    /// Model confidence below which the keyword fallback decides the
    /// category.
    pub confidence_threshold: f64,
    /// Words dropped during normalization.
    pub stopwords: Vec<String>,
    /// Per-category keyword lists for the classifier fallback.
    pub category_keywords: HashMap<CategoryLabel, Vec<String>>,
    /// Tiered urgency keywords.
    pub urgency_keywords: UrgencyKeywords,
    /// Temporal keywords.
    pub time_keywords: TimeKeywords,
    /// Breadth-of-impact keywords.
    pub impact_keywords: Vec<String>,
    /// Intrinsic per-category base severity, each in [0, 1].
    pub category_base: HashMap<CategoryLabel, f64>,
}

impl Default for TriageConfig {
    fn default() -> Self {
        let mut category_keywords = HashMap::new();
        category_keywords.insert(
            CategoryLabel::Roads,
            strings(&[
                "road", "pothole", "street", "highway", "pavement", "sidewalk", "traffic",
                "signal", "footpath", "crossing", "bridge", "asphalt",
            ]),
        );
        category_keywords.insert(
            CategoryLabel::Water,
            strings(&[
                "water", "pipeline", "tap", "supply", "drinking", "tank", "borewell", "well",
                "pump", "contaminated", "dirty water",
            ]),
        );
        category_keywords.insert(
            CategoryLabel::Sanitation,
            strings(&[
                "garbage", "waste", "sewage", "drain", "toilet", "trash", "cleaning", "dustbin",
                "sweeping", "stench", "smell", "hygiene",
            ]),
        );
        category_keywords.insert(
            CategoryLabel::Safety,
            strings(&[
                "crime", "theft", "robbery", "harassment", "police", "security", "unsafe",
                "dark", "lighting", "cctv", "patrol", "violence",
            ]),
        );
        category_keywords.insert(
            CategoryLabel::Electricity,
            strings(&[
                "power", "electric", "electricity", "outage", "blackout", "transformer", "wire",
                "cable", "meter", "voltage", "short circuit", "pole",
            ]),
        );
        category_keywords.insert(
            CategoryLabel::PublicTransport,
            strings(&[
                "bus", "metro", "train", "transport", "station", "schedule", "route", "ticket",
                "fare", "overcrowded",
            ]),
        );
        category_keywords.insert(
            CategoryLabel::Environment,
            strings(&[
                "tree", "park", "pollution", "noise", "air quality", "garden", "plant",
                "animal", "stray", "mosquito", "pest",
            ]),
        );

        let mut category_base = HashMap::new();
        category_base.insert(CategoryLabel::Safety, 0.9);
        category_base.insert(CategoryLabel::Water, 0.8);
        category_base.insert(CategoryLabel::Electricity, 0.7);
        category_base.insert(CategoryLabel::Roads, 0.6);
        category_base.insert(CategoryLabel::Sanitation, 0.5);
        category_base.insert(CategoryLabel::PublicTransport, 0.4);
        category_base.insert(CategoryLabel::Environment, 0.35);
        category_base.insert(CategoryLabel::Other, 0.2);

        Self {
            weights: FeatureWeights::default(),
            thresholds: PriorityThresholds::default(),
            confidence_threshold: 0.35,
            stopwords: strings(&[
                "a", "an", "the", "is", "are", "was", "were", "be", "been", "being", "am",
                "it", "its", "this", "that", "these", "those", "there", "here", "of", "to",
                "in", "on", "at", "by", "for", "with", "from", "and", "or", "but", "not",
                "no", "has", "have", "had", "do", "does", "did", "will", "would", "can",
                "could", "should", "i", "we", "you", "he", "she", "they", "them", "us",
                "my", "our", "your", "please", "kindly",
            ]),
            category_keywords,
            urgency_keywords: UrgencyKeywords::default(),
            time_keywords: TimeKeywords::default(),
            impact_keywords: strings(&[
                "entire street", "entire area", "whole neighborhood", "many people",
                "everyone", "children", "elderly", "disabled", "families", "hospital",
                "school", "residents", "public",
            ]),
            category_base,
        }
    }
}

impl TriageConfig {
    /// Loads configuration from a YAML file, filling missing fields from the
    /// defaults, and validates the result.
    pub fn from_yaml_file(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_yaml(&raw)
    }

    /// Parses configuration from a YAML string.
    pub fn from_yaml(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks internal consistency of weights, thresholds, and tables.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let sum = self.weights.sum();
        if (sum - 1.0).abs() > 1e-6 {
            return Err(ConfigError::Invalid(format!(
                "feature weights must sum to 1.0, got {sum}"
            )));
        }
        let t = &self.thresholds;
        if !(t.critical > t.high && t.high > t.medium && t.medium > 0.0 && t.critical < 1.0) {
            return Err(ConfigError::Invalid(format!(
                "priority thresholds must satisfy 0 < medium < high < critical < 1, \
                 got medium={}, high={}, critical={}",
                t.medium, t.high, t.critical
            )));
        }
        if !(0.0..=1.0).contains(&self.confidence_threshold) {
            return Err(ConfigError::Invalid(format!(
                "confidence threshold must be in [0, 1], got {}",
                self.confidence_threshold
            )));
        }
        for (category, base) in &self.category_base {
            if !(0.0..=1.0).contains(base) {
                return Err(ConfigError::Invalid(format!(
                    "base severity for {category} must be in [0, 1], got {base}"
                )));
            }
        }
        Ok(())
    }

    /// Base severity for a category, defaulting to the `Other` floor when a
    /// category is missing from the table.
    pub fn base_severity(&self, category: CategoryLabel) -> f64 {
        self.category_base
            .get(&category)
            .or_else(|| self.category_base.get(&CategoryLabel::Other))
            .copied()
            .unwrap_or(0.2)
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        TriageConfig::default().validate().expect("defaults must validate");
    }

    #[test]
    fn test_default_weights_match_contract() {
        let w = FeatureWeights::default();
        assert_eq!(w.urgency, 0.40);
        assert_eq!(w.category, 0.25);
        assert_eq!(w.time_sensitivity, 0.20);
        assert_eq!(w.impact, 0.15);
        assert!((w.sum() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_partial_yaml_fills_defaults() {
        let config = TriageConfig::from_yaml("confidence_threshold: 0.5\n").unwrap();
        assert_eq!(config.confidence_threshold, 0.5);
        // Everything else keeps the defaults
        assert_eq!(config.thresholds, PriorityThresholds::default());
        assert!(!config.stopwords.is_empty());
        assert_eq!(config.category_keywords.len(), 7);
    }

    #[test]
    fn test_yaml_category_keys_are_snake_case() {
        let yaml = r"
category_base:
  public_transport: 0.45
  other: 0.1
";
        let config = TriageConfig::from_yaml(yaml).unwrap();
        assert_eq!(config.base_severity(CategoryLabel::PublicTransport), 0.45);
        assert_eq!(config.base_severity(CategoryLabel::Other), 0.1);
    }

    #[test]
    fn test_bad_weights_rejected() {
        let yaml = r"
weights:
  urgency: 0.9
  category: 0.9
  time_sensitivity: 0.1
  impact: 0.1
";
        assert!(matches!(
            TriageConfig::from_yaml(yaml),
            Err(ConfigError::Invalid(_))
        ));
    }

    #[test]
    fn test_non_ascending_thresholds_rejected() {
        let yaml = r"
thresholds:
  critical: 0.5
  high: 0.6
  medium: 0.4
";
        assert!(matches!(
            TriageConfig::from_yaml(yaml),
            Err(ConfigError::Invalid(_))
        ));
    }

    #[test]
    fn test_base_severity_missing_category_falls_back() {
        let mut config = TriageConfig::default();
        config.category_base.remove(&CategoryLabel::Environment);
        assert_eq!(
            config.base_severity(CategoryLabel::Environment),
            config.base_severity(CategoryLabel::Other)
        );
    }

    #[test]
    fn test_safety_outranks_other_in_base_table() {
        let config = TriageConfig::default();
        assert!(
            config.base_severity(CategoryLabel::Safety)
                > config.base_severity(CategoryLabel::Other)
        );
        assert!(
            config.base_severity(CategoryLabel::Water)
                > config.base_severity(CategoryLabel::Other)
        );
    }
}
