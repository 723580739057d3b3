//! # triage-proto
//!
//! Shared types and error definitions for the civic-complaint triage engine.
//!
//! This crate provides the foundational types used across all triage crates,
//! including:
//! - `CategoryLabel` for the closed set of complaint categories
//! - `PriorityLevel` for officer queue ranking
//! - `ClassificationOutcome` and `TriageResult` for engine output
//! - Common error types

mod category;
mod error;
mod outcome;
mod priority;

pub use category::CategoryLabel;
pub use error::{Error, Result};
pub use outcome::{ClassificationOutcome, TriageResult};
pub use priority::PriorityLevel;
