//! Classification outcomes and the final triage result.

use crate::{CategoryLabel, PriorityLevel};
use serde::{Deserialize, Serialize};

/// How a category was decided.
///
/// The classifier has two paths: a trained statistical model and a
/// deterministic keyword fallback. The outcome records which path produced
/// the label so decisions stay auditable.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "source", rename_all = "snake_case")]
pub enum ClassificationOutcome {
    /// The trained model produced a confident prediction.
    ModelPrediction {
        category: CategoryLabel,
        /// Normalized probability of the chosen category (0.0 to 1.0).
        confidence: f64,
    },
    /// The curated keyword lists decided the category.
    KeywordFallback {
        category: CategoryLabel,
        /// Number of keyword hits for the winning category.
        hits: usize,
    },
}

impl ClassificationOutcome {
    /// The chosen category, regardless of which path produced it.
    pub fn category(&self) -> CategoryLabel {
        match self {
            ClassificationOutcome::ModelPrediction { category, .. }
            | ClassificationOutcome::KeywordFallback { category, .. } => *category,
        }
    }

    /// Model confidence, or 0.0 for the fallback path.
    pub fn confidence(&self) -> f64 {
        match self {
            ClassificationOutcome::ModelPrediction { confidence, .. } => *confidence,
            ClassificationOutcome::KeywordFallback { .. } => 0.0,
        }
    }
}

/// The result of triaging one complaint.
///
/// Owned by the caller once returned; the engine holds no reference to it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TriageResult {
    /// The assigned category.
    pub category: CategoryLabel,
    /// Severity in [0, 1], rounded to 3 decimals.
    pub severity_score: f64,
    /// The discrete priority for queue ordering.
    pub priority: PriorityLevel,
    /// Which classification path decided the category.
    pub outcome: ClassificationOutcome,
}
