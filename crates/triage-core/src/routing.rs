//! Routing helpers for the surrounding complaint service.
//!
//! The engine owns none of the persistence or queueing, but the routing
//! tables and ordering rules that consume its output live here so callers
//! share one definition: category → department, queue ordering, and the
//! time-based escalation ladder.

use chrono::{DateTime, Utc};
use std::cmp::Ordering;
use triage_proto::{CategoryLabel, PriorityLevel};

/// The department responsible for a category.
pub fn department_for(category: CategoryLabel) -> &'static str {
    match category {
        CategoryLabel::Roads => "Public Works Department",
        CategoryLabel::Water => "Water Supply Department",
        CategoryLabel::Sanitation => "Sanitation Department",
        CategoryLabel::Safety => "Public Safety Department",
        CategoryLabel::Electricity => "Electricity Department",
        CategoryLabel::PublicTransport => "Transport Department",
        CategoryLabel::Environment => "Environment Department",
        CategoryLabel::Other => "General Administration",
    }
}

/// Ordering key for an officer queue entry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QueueKey {
    pub priority: PriorityLevel,
    pub severity_score: f64,
    pub submitted_at: DateTime<Utc>,
}

/// Compares two queue entries into officer working order.
///
/// Higher priority first, then higher severity score, then older submission.
/// Use with `sort_by`: the first element after sorting is worked first.
pub fn queue_cmp(a: &QueueKey, b: &QueueKey) -> Ordering {
    b.priority
        .cmp(&a.priority)
        .then_with(|| b.severity_score.total_cmp(&a.severity_score))
        .then_with(|| a.submitted_at.cmp(&b.submitted_at))
}

/// Hours a complaint may sit unresolved before first escalation.
pub fn escalation_threshold_hours(priority: PriorityLevel) -> u32 {
    match priority {
        PriorityLevel::Critical => 4,
        PriorityLevel::High => 24,
        PriorityLevel::Medium => 72,
        PriorityLevel::Low => 168,
    }
}

/// Computes the new escalation level for a pending complaint.
///
/// Level 0 → 1 once the threshold passes, level 1 → 2 at twice the
/// threshold. Returns the current level unchanged otherwise.
pub fn escalation_level(
    priority: PriorityLevel,
    hours_pending: f64,
    current_level: u32,
) -> u32 {
    let threshold = f64::from(escalation_threshold_hours(priority));
    match current_level {
        0 if hours_pending > threshold => 1,
        1 if hours_pending > threshold * 2.0 => 2,
        level => level,
    }
}
