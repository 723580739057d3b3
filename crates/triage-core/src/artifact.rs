//! Trained model artifact: vocabulary, IDF table, and linear weights.
//!
//! The bundle is produced by an offline training process and loaded read-only
//! at startup. The classifier treats it as a best-effort enhancement: a
//! missing or corrupt bundle degrades the engine to the keyword fallback,
//! it never blocks triage.

use crate::normalizer::NormalizedText;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;
use thiserror::Error;
use tracing::warn;
use triage_proto::CategoryLabel;

/// Artifact bundle version this build understands.
pub const SUPPORTED_VERSION: u32 = 1;

/// Errors raised while loading an artifact bundle.
#[derive(Debug, Error)]
pub enum ArtifactError {
    #[error("failed to read model artifact: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse model artifact: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("unsupported artifact version {0} (supported: {SUPPORTED_VERSION})")]
    Version(u32),

    #[error("malformed artifact: {0}")]
    Shape(String),
}

/// A versioned, immutable TF-IDF + logistic one-vs-rest model bundle.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelArtifact {
    /// Bundle format version.
    pub version: u32,
    /// Category names, one per weight row. Names outside the closed
    /// enumeration are tolerated and resolve to `other` at prediction time.
    pub categories: Vec<String>,
    /// Term → column index in the weight matrix.
    pub vocabulary: HashMap<String, usize>,
    /// Inverse document frequency per column.
    pub idf: Vec<f64>,
    /// One weight row per category, each `vocabulary.len()` wide.
    pub weights: Vec<Vec<f64>>,
    /// One bias term per category.
    pub bias: Vec<f64>,
}

impl ModelArtifact {
    /// Loads and validates an artifact bundle from a JSON file.
    pub fn load(path: &Path) -> Result<Self, ArtifactError> {
        let raw = std::fs::read_to_string(path)?;
        let artifact: Self = serde_json::from_str(&raw)?;
        artifact.validate()?;
        Ok(artifact)
    }

    /// Loads an artifact if a path was given, degrading to `None` with a
    /// warning on any failure.
    pub fn load_optional(path: Option<&Path>) -> Option<Self> {
        let path = path?;
        match Self::load(path) {
            Ok(artifact) => Some(artifact),
            Err(err) => {
                warn!(
                    "model artifact unavailable, running keyword-only: {} ({})",
                    path.display(),
                    err
                );
                None
            }
        }
    }

    /// Checks the bundle shape: version, matrix dimensions, column indices.
    pub fn validate(&self) -> Result<(), ArtifactError> {
        if self.version != SUPPORTED_VERSION {
            return Err(ArtifactError::Version(self.version));
        }
        let vocab_len = self.vocabulary.len();
        if self.idf.len() != vocab_len {
            return Err(ArtifactError::Shape(format!(
                "idf length {} does not match vocabulary size {vocab_len}",
                self.idf.len()
            )));
        }
        if self.weights.len() != self.categories.len() {
            return Err(ArtifactError::Shape(format!(
                "{} weight rows for {} categories",
                self.weights.len(),
                self.categories.len()
            )));
        }
        if self.bias.len() != self.categories.len() {
            return Err(ArtifactError::Shape(format!(
                "{} bias terms for {} categories",
                self.bias.len(),
                self.categories.len()
            )));
        }
        for (i, row) in self.weights.iter().enumerate() {
            if row.len() != vocab_len {
                return Err(ArtifactError::Shape(format!(
                    "weight row {i} has {} columns, expected {vocab_len}",
                    row.len()
                )));
            }
        }
        for (term, &col) in &self.vocabulary {
            if col >= vocab_len {
                return Err(ArtifactError::Shape(format!(
                    "vocabulary term {term:?} maps to column {col}, out of range"
                )));
            }
        }
        Ok(())
    }

    /// Predicts a category and its normalized probability.
    ///
    /// Returns `None` when no token appears in the vocabulary; the caller
    /// falls back to keyword classification.
    pub fn predict(&self, text: &NormalizedText) -> Option<(CategoryLabel, f64)> {
        let features = self.vectorize(text)?;

        let mut probabilities = Vec::with_capacity(self.categories.len());
        for (row, &bias) in self.weights.iter().zip(&self.bias) {
            let z: f64 = features.iter().map(|&(col, x)| row[col] * x).sum::<f64>() + bias;
            probabilities.push(sigmoid(z));
        }

        let total: f64 = probabilities.iter().sum();
        if total <= 0.0 {
            return None;
        }

        let (best, &best_p) = probabilities
            .iter()
            .enumerate()
            .max_by(|a, b| a.1.total_cmp(b.1))?;

        let category = CategoryLabel::parse_lenient(&self.categories[best]);
        Some((category, best_p / total))
    }

    /// Sparse TF-IDF vector over the in-vocabulary tokens.
    fn vectorize(&self, text: &NormalizedText) -> Option<Vec<(usize, f64)>> {
        let mut counts: HashMap<usize, usize> = HashMap::new();
        let mut in_vocab = 0usize;
        for token in text.tokens() {
            if let Some(&col) = self.vocabulary.get(token) {
                *counts.entry(col).or_insert(0) += 1;
                in_vocab += 1;
            }
        }
        if in_vocab == 0 {
            return None;
        }

        let mut features: Vec<(usize, f64)> = counts
            .into_iter()
            .map(|(col, count)| {
                let tf = count as f64 / in_vocab as f64;
                (col, tf * self.idf[col])
            })
            .collect();
        features.sort_unstable_by_key(|&(col, _)| col);
        Some(features)
    }
}

fn sigmoid(z: f64) -> f64 {
    1.0 / (1.0 + (-z).exp())
}
