//! Severity scoring: four weighted signals combined into one score.
//!
//! This is intentionally a transparent, rule-based scorer rather than a
//! second trained model. Severity decides resolution order, so every score
//! must be explainable to officers and citizens; the weights are
//! configuration, tunable without retraining. The breakdown of sub-scores is
//! returned alongside the total for exactly that reason.

use crate::config::{FeatureWeights, TimeKeywords, TriageConfig, UrgencyKeywords};
use crate::normalizer::NormalizedText;
use serde::Serialize;
use std::collections::HashMap;
use triage_proto::CategoryLabel;

/// Per-match weights for the urgency tiers.
const TIER_CRITICAL: f64 = 1.0;
const TIER_HIGH: f64 = 0.7;
const TIER_MEDIUM: f64 = 0.4;
const TIER_LOW: f64 = 0.1;

/// Baseline urgency for non-empty text with no urgency language.
const URGENCY_BASELINE: f64 = 0.3;

/// The four sub-scores and their weighted combination.
///
/// All values are in [0, 1]; `total` is rounded to 3 decimals.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SeverityBreakdown {
    pub urgency: f64,
    pub category_weight: f64,
    pub time_sensitivity: f64,
    pub impact: f64,
    pub total: f64,
}

/// Rule-based severity scorer.
pub struct SeverityScorer {
    weights: FeatureWeights,
    urgency_keywords: UrgencyKeywords,
    time_keywords: TimeKeywords,
    impact_keywords: Vec<String>,
    category_base: HashMap<CategoryLabel, f64>,
}

impl SeverityScorer {
    /// Builds a scorer from the engine configuration.
    pub fn new(config: &TriageConfig) -> Self {
        Self {
            weights: config.weights,
            urgency_keywords: config.urgency_keywords.clone(),
            time_keywords: config.time_keywords.clone(),
            impact_keywords: config.impact_keywords.clone(),
            category_base: config.category_base.clone(),
        }
    }

    /// Scores normalized text against its assigned category.
    ///
    /// Empty text floors at the category-weight signal alone: the other
    /// three sub-scores are 0.
    pub fn score(&self, text: &NormalizedText, category: CategoryLabel) -> SeverityBreakdown {
        let urgency = self.urgency_score(text);
        let category_weight = self.base_severity(category);
        let time_sensitivity = self.time_score(text);
        let impact = self.impact_score(text);

        let combined = self.weights.urgency * urgency
            + self.weights.category * category_weight
            + self.weights.time_sensitivity * time_sensitivity
            + self.weights.impact * impact;

        // The sub-scores are each in [0, 1] and the weights sum to 1, so the
        // clamp is a safety net for the invariant, not expected behavior.
        let total = round3(combined.clamp(0.0, 1.0));

        SeverityBreakdown {
            urgency,
            category_weight,
            time_sensitivity,
            impact,
            total,
        }
    }

    /// True when any critical urgency keyword is present.
    pub fn has_critical_keyword(&self, text: &NormalizedText) -> bool {
        !text.is_empty()
            && self
                .urgency_keywords
                .critical
                .iter()
                .any(|kw| text.contains_keyword(kw))
    }

    fn urgency_score(&self, text: &NormalizedText) -> f64 {
        if text.is_empty() {
            return 0.0;
        }
        if self.has_critical_keyword(text) {
            return 1.0;
        }

        let high = text.count_hits(&self.urgency_keywords.high);
        let medium = text.count_hits(&self.urgency_keywords.medium);
        let low = text.count_hits(&self.urgency_keywords.low);
        let total = high + medium + low;
        if total == 0 {
            return URGENCY_BASELINE;
        }

        let weighted =
            high as f64 * TIER_HIGH + medium as f64 * TIER_MEDIUM + low as f64 * TIER_LOW;
        (weighted / total as f64).min(1.0)
    }

    fn time_score(&self, text: &NormalizedText) -> f64 {
        if text.is_empty() {
            return 0.0;
        }
        let immediate = text.count_hits(&self.time_keywords.immediacy) > 0;
        let persistent = text.count_hits(&self.time_keywords.duration) > 0;
        match (immediate, persistent) {
            (true, true) => 1.0,
            (true, false) => 0.9,
            (false, true) => 0.6,
            (false, false) => 0.2,
        }
    }

    fn impact_score(&self, text: &NormalizedText) -> f64 {
        if text.is_empty() {
            return 0.0;
        }
        let hits = text.count_hits(&self.impact_keywords);
        (hits as f64 * 0.25).min(1.0)
    }

    fn base_severity(&self, category: CategoryLabel) -> f64 {
        self.category_base
            .get(&category)
            .or_else(|| self.category_base.get(&CategoryLabel::Other))
            .copied()
            .unwrap_or(0.2)
    }
}

fn round3(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}
