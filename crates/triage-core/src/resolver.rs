//! Priority resolution from the numeric severity score.

use crate::config::{PriorityThresholds, TriageConfig};
use crate::normalizer::NormalizedText;
use triage_proto::PriorityLevel;

/// Maps severity scores to discrete priority levels.
///
/// Thresholds are strict: a score exactly on a boundary falls into the lower
/// band. A critical urgency keyword promotes straight to `Critical`
/// regardless of the numeric score - life-threatening language must never be
/// under-prioritized by a purely numeric model.
pub struct PriorityResolver {
    thresholds: PriorityThresholds,
    critical_keywords: Vec<String>,
}

impl PriorityResolver {
    /// Builds a resolver from the engine configuration.
    pub fn new(config: &TriageConfig) -> Self {
        Self {
            thresholds: config.thresholds,
            critical_keywords: config.urgency_keywords.critical.clone(),
        }
    }

    /// Resolves a priority level. Total function: every score and token set
    /// maps to exactly one level.
    pub fn resolve(&self, score: f64, text: &NormalizedText) -> PriorityLevel {
        if self
            .critical_keywords
            .iter()
            .any(|kw| text.contains_keyword(kw))
        {
            return PriorityLevel::Critical;
        }
        self.resolve_score(score)
    }

    /// Resolves from the score alone, without the keyword override.
    pub fn resolve_score(&self, score: f64) -> PriorityLevel {
        if score > self.thresholds.critical {
            PriorityLevel::Critical
        } else if score > self.thresholds.high {
            PriorityLevel::High
        } else if score > self.thresholds.medium {
            PriorityLevel::Medium
        } else {
            PriorityLevel::Low
        }
    }
}
