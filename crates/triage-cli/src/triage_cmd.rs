//! The `triage` subcommand: run one complaint through the pipeline.

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use triage_core::{DecisionLog, ModelArtifact, TriageConfig, TriageEngine};

#[derive(Parser, Debug)]
pub struct TriageArgs {
    /// Complaint title
    #[arg(short, long, default_value = "")]
    pub title: String,

    /// Complaint description
    #[arg(short, long, default_value = "")]
    pub description: String,

    /// Path to a model artifact bundle (optional; keyword-only without it)
    #[arg(long, value_name = "FILE")]
    pub model: Option<PathBuf>,

    /// Path to a YAML config file (optional; curated defaults without it)
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Emit the full report as JSON instead of the human summary
    #[arg(long)]
    pub json: bool,

    /// Append the decision to TriageLog.md in this directory
    #[arg(long, value_name = "DIR")]
    pub log_dir: Option<PathBuf>,
}

pub fn execute(args: TriageArgs) -> Result<()> {
    let config = match &args.config {
        Some(path) => TriageConfig::from_yaml_file(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => TriageConfig::default(),
    };

    let artifact = ModelArtifact::load_optional(args.model.as_deref());
    let engine = TriageEngine::new(config, artifact).context("building triage engine")?;
    let report = engine.triage_report(&args.title, &args.description);

    if let Some(dir) = &args.log_dir {
        DecisionLog::new(dir).record(&args.title, &report.result);
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        let result = &report.result;
        println!("category:  {}", result.category);
        println!("severity:  {:.3}", result.severity_score);
        println!("priority:  {}", result.priority);
        println!(
            "routed to: {}",
            triage_core::department_for(result.category)
        );
        println!(
            "signals:   urgency={:.2} category={:.2} time={:.2} impact={:.2}",
            report.breakdown.urgency,
            report.breakdown.category_weight,
            report.breakdown.time_sensitivity,
            report.breakdown.impact
        );
    }

    Ok(())
}
