//! The triage orchestrator: the engine's public entry point.
//!
//! Sequences normalize → classify → score → resolve over one complaint and
//! returns the classification bundle. The engine is stateless per call; the
//! only shared state is the immutable config and model artifact injected at
//! construction, so any number of calls may run concurrently.

use crate::artifact::ModelArtifact;
use crate::classifier::CategoryClassifier;
use crate::config::{ConfigError, TriageConfig};
use crate::normalizer::TextNormalizer;
use crate::resolver::PriorityResolver;
use crate::scorer::{SeverityBreakdown, SeverityScorer};
use serde::Serialize;
use tracing::{debug, info, warn};
use triage_proto::TriageResult;

/// A triage result together with its severity breakdown, for audit output.
#[derive(Debug, Clone, Serialize)]
pub struct TriageReport {
    pub result: TriageResult,
    pub breakdown: SeverityBreakdown,
    /// Number of normalized tokens the decision was based on.
    pub token_count: usize,
}

/// The complaint triage engine.
///
/// Construct once at startup with an explicitly-injected artifact handle and
/// configuration; there is no hidden global model state. The classifier
/// artifact is best-effort: without it the engine runs entirely on the
/// keyword-fallback path.
pub struct TriageEngine {
    normalizer: TextNormalizer,
    classifier: CategoryClassifier,
    scorer: SeverityScorer,
    resolver: PriorityResolver,
}

impl TriageEngine {
    /// Builds an engine from validated configuration and an optional model
    /// artifact.
    ///
    /// The artifact is shape-checked here regardless of how it was obtained:
    /// a malformed bundle degrades the engine to keyword-only mode, it never
    /// becomes a crash during triage.
    pub fn new(config: TriageConfig, artifact: Option<ModelArtifact>) -> Result<Self, ConfigError> {
        config.validate()?;
        let artifact = artifact.and_then(|a| match a.validate() {
            Ok(()) => Some(a),
            Err(err) => {
                warn!("ignoring malformed model artifact, running keyword-only: {err}");
                None
            }
        });
        if artifact.is_none() {
            info!("triage engine starting without model artifact (keyword-only mode)");
        }
        Ok(Self {
            normalizer: TextNormalizer::new(&config.stopwords),
            classifier: CategoryClassifier::new(&config, artifact),
            scorer: SeverityScorer::new(&config),
            resolver: PriorityResolver::new(&config),
        })
    }

    /// Builds an engine with default configuration and no model artifact.
    pub fn with_defaults() -> Self {
        // The default config always validates; see config tests.
        match Self::new(TriageConfig::default(), None) {
            Ok(engine) => engine,
            Err(_) => unreachable!("default config is valid"),
        }
    }

    /// True when the trained model path is available.
    pub fn has_model(&self) -> bool {
        self.classifier.has_model()
    }

    /// Triages one complaint.
    ///
    /// Never fails for well-formed input: empty text yields `other` at the
    /// category-weight floor score.
    pub fn triage(&self, title: &str, description: &str) -> TriageResult {
        self.triage_report(title, description).result
    }

    /// Triages one complaint and returns the full audit report.
    pub fn triage_report(&self, title: &str, description: &str) -> TriageReport {
        let text = self.normalizer.normalize(title, description);
        let outcome = self.classifier.classify(&text);
        let category = outcome.category();
        let breakdown = self.scorer.score(&text, category);
        let priority = self.resolver.resolve(breakdown.total, &text);

        debug!(
            "triaged complaint: category={} score={} priority={} tokens={}",
            category,
            breakdown.total,
            priority,
            text.tokens().len()
        );

        TriageReport {
            result: TriageResult {
                category,
                severity_score: breakdown.total,
                priority,
                outcome,
            },
            breakdown,
            token_count: text.tokens().len(),
        }
    }
}
