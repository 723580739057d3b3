//! Append-only audit trail of triage decisions.

use chrono::Utc;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use triage_proto::{ClassificationOutcome, TriageResult};

/// Logs triage decisions to `TriageLog.md` as a markdown table.
///
/// Writes are best-effort: the audit trail must never fail the triage path.
pub struct DecisionLog {
    path: PathBuf,
}

impl DecisionLog {
    /// Creates a new DecisionLog rooted at the given directory.
    pub fn new(root: &Path) -> Self {
        Self {
            path: root.join("TriageLog.md"),
        }
    }

    /// Records one decision.
    pub fn record(&self, title: &str, result: &TriageResult) {
        let timestamp = Utc::now().to_rfc3339();
        let source = match result.outcome {
            ClassificationOutcome::ModelPrediction { confidence, .. } => {
                format!("model ({confidence:.3})")
            }
            ClassificationOutcome::KeywordFallback { hits, .. } => {
                format!("keywords ({hits} hits)")
            }
        };
        let entry = format!(
            "| {} | {} | {} | {:.3} | {} | {} |",
            timestamp,
            sanitize(title),
            result.category,
            result.severity_score,
            result.priority,
            source
        );

        if !self.path.exists() {
            let _ = fs::write(
                &self.path,
                "# Triage Decision Log\n\n\
                 | Timestamp | Title | Category | Severity | Priority | Source |\n\
                 | --- | --- | --- | --- | --- | --- |\n",
            );
        }

        if let Ok(mut file) = fs::OpenOptions::new().append(true).open(&self.path) {
            let _ = writeln!(file, "{entry}");
        }
    }
}

/// Keeps complaint titles from breaking the table layout.
fn sanitize(title: &str) -> String {
    let cleaned: String = title
        .chars()
        .map(|c| if c == '|' || c == '\n' { ' ' } else { c })
        .collect();
    if cleaned.len() > 60 {
        let mut end = 60;
        while !cleaned.is_char_boundary(end) {
            end -= 1;
        }
        format!("{}…", &cleaned[..end])
    } else {
        cleaned
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use triage_proto::{CategoryLabel, PriorityLevel};

    fn sample_result() -> TriageResult {
        TriageResult {
            category: CategoryLabel::Roads,
            severity_score: 0.55,
            priority: PriorityLevel::Medium,
            outcome: ClassificationOutcome::KeywordFallback {
                category: CategoryLabel::Roads,
                hits: 2,
            },
        }
    }

    #[test]
    fn test_record_creates_table_and_appends() {
        let dir = tempfile::tempdir().unwrap();
        let log = DecisionLog::new(dir.path());

        log.record("Pothole on Main Road", &sample_result());
        log.record("Another pothole", &sample_result());

        let content = fs::read_to_string(dir.path().join("TriageLog.md")).unwrap();
        assert!(content.starts_with("# Triage Decision Log"));
        assert_eq!(content.matches("| roads |").count(), 2);
        assert!(content.contains("keywords (2 hits)"));
    }

    #[test]
    fn test_sanitize_strips_pipes_and_truncates() {
        let long = "x".repeat(100);
        assert!(sanitize(&long).chars().count() <= 61);
        assert!(!sanitize("a|b\nc").contains('|'));
    }
}
