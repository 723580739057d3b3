//! The `validate` subcommand: shape-check configs and artifact bundles.

use anyhow::{Context, Result, bail};
use clap::Parser;
use std::path::PathBuf;
use tracing::info;
use triage_core::{ModelArtifact, TriageConfig};

#[derive(Parser, Debug)]
pub struct ValidateArgs {
    /// Path to a model artifact bundle
    #[arg(long, value_name = "FILE")]
    pub model: Option<PathBuf>,

    /// Path to a YAML config file
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Suppress all output except errors
    #[arg(short, long)]
    pub quiet: bool,
}

pub fn execute(args: ValidateArgs) -> Result<()> {
    if args.model.is_none() && args.config.is_none() {
        bail!("nothing to validate: pass --model and/or --config");
    }

    if let Some(path) = &args.config {
        let config = TriageConfig::from_yaml_file(path)
            .with_context(|| format!("config {} failed validation", path.display()))?;
        info!("config ok: {} stopwords, confidence threshold {}",
            config.stopwords.len(), config.confidence_threshold);
        if !args.quiet {
            println!("config ok: {}", path.display());
        }
    }

    if let Some(path) = &args.model {
        let artifact = ModelArtifact::load(path)
            .with_context(|| format!("model artifact {} failed validation", path.display()))?;
        if !args.quiet {
            println!(
                "model ok: {} (v{}, {} categories, {} terms)",
                path.display(),
                artifact.version,
                artifact.categories.len(),
                artifact.vocabulary.len()
            );
        }
    }

    Ok(())
}
