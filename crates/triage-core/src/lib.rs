//! # triage-core
//!
//! Core pipeline for the civic-complaint triage engine.
//!
//! This crate provides:
//! - Text normalization for the classifier and keyword scanners
//! - Two-path category classification (trained model + keyword fallback)
//! - Transparent, rule-based severity scoring
//! - Priority resolution with critical-keyword override
//! - The orchestrating [`TriageEngine`] entry point
//! - Routing tables and escalation rules for the surrounding service
//!
//! The pipeline is strictly linear: raw text → normalized tokens → category
//! → severity score → priority. Every stage is a pure function of its inputs
//! plus the immutable, pre-loaded configuration and model artifact.

pub mod artifact;
pub mod audit_log;
pub mod classifier;
pub mod config;
pub mod engine;
pub mod normalizer;
pub mod resolver;
pub mod routing;
pub mod scorer;

pub use artifact::{ArtifactError, ModelArtifact, SUPPORTED_VERSION};
pub use audit_log::DecisionLog;
pub use classifier::CategoryClassifier;
pub use config::{
    ConfigError, FeatureWeights, PriorityThresholds, TimeKeywords, TriageConfig, UrgencyKeywords,
};
pub use engine::{TriageEngine, TriageReport};
pub use normalizer::{NormalizedText, TextNormalizer};
pub use resolver::PriorityResolver;
pub use routing::{
    QueueKey, department_for, escalation_level, escalation_threshold_hours, queue_cmp,
};
pub use scorer::{SeverityBreakdown, SeverityScorer};
