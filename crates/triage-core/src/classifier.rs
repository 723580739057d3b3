//! Category classification: trained model first, keyword fallback second.
//!
//! Pure statistical classification is brittle on short, informally-written
//! complaint text. The classifier therefore runs two paths: the TF-IDF
//! model when it is loaded and confident, and a deterministic, auditable
//! keyword scan otherwise. Ties in the keyword scan break toward the
//! category with higher public-risk weight, never arbitrarily.

use crate::artifact::ModelArtifact;
use crate::config::TriageConfig;
use crate::normalizer::NormalizedText;
use tracing::debug;
use triage_proto::{CategoryLabel, ClassificationOutcome};

/// Two-path category classifier.
pub struct CategoryClassifier {
    artifact: Option<ModelArtifact>,
    category_keywords: Vec<(CategoryLabel, Vec<String>)>,
    confidence_threshold: f64,
}

impl CategoryClassifier {
    /// Builds a classifier from config and an optional model artifact.
    pub fn new(config: &TriageConfig, artifact: Option<ModelArtifact>) -> Self {
        // Fixed scan order so equal hit counts resolve by public-risk rank.
        let mut category_keywords: Vec<(CategoryLabel, Vec<String>)> = config
            .category_keywords
            .iter()
            .map(|(category, keywords)| (*category, keywords.clone()))
            .collect();
        category_keywords.sort_by_key(|(category, _)| category.risk_rank());

        Self {
            artifact,
            category_keywords,
            confidence_threshold: config.confidence_threshold,
        }
    }

    /// True when a model artifact is loaded.
    pub fn has_model(&self) -> bool {
        self.artifact.is_some()
    }

    /// Classifies normalized text into exactly one category.
    pub fn classify(&self, text: &NormalizedText) -> ClassificationOutcome {
        if let Some(artifact) = &self.artifact {
            if let Some((category, confidence)) = artifact.predict(text) {
                if confidence >= self.confidence_threshold {
                    return ClassificationOutcome::ModelPrediction {
                        category,
                        confidence,
                    };
                }
                debug!(
                    "model confidence {:.3} below threshold {:.3}, using keyword fallback",
                    confidence, self.confidence_threshold
                );
            }
        }
        self.keyword_fallback(text)
    }

    /// Deterministic keyword-scan path.
    ///
    /// The category with the most keyword hits wins; ties break by
    /// public-risk rank. No hits at all yields `Other` with zero hits.
    fn keyword_fallback(&self, text: &NormalizedText) -> ClassificationOutcome {
        let mut best = (CategoryLabel::Other, 0usize);
        for (category, keywords) in &self.category_keywords {
            let hits = text.count_hits(keywords);
            // Strict > keeps the earlier (higher-risk) category on ties.
            if hits > best.1 {
                best = (*category, hits);
            }
        }
        ClassificationOutcome::KeywordFallback {
            category: best.0,
            hits: best.1,
        }
    }
}
