//! Offline lead analysis.
//!
//! Reads a lead JSON document from the path given as the first argument (or
//! from stdin when no path is given), runs the qualification pipeline with the
//! multipliers from the environment and prints the analysis as pretty JSON.
//! `--sample` analyzes the built-in sample lead instead.

use anyhow::Context;
use sherlock_lead_api::config::Config;
use sherlock_lead_api::models::LeadInput;
use sherlock_lead_api::pipeline;
use std::io::Read;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "sherlock_lead_api=info".into()),
        )
        .init();

    let config = Config::from_env()?;

    let lead = match std::env::args().nth(1).as_deref() {
        Some("--sample") => LeadInput::sample(),
        Some(path) => {
            let raw = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read lead file {}", path))?;
            serde_json::from_str(&raw).with_context(|| format!("Invalid lead JSON in {}", path))?
        }
        None => {
            let mut raw = String::new();
            std::io::stdin()
                .read_to_string(&mut raw)
                .context("Failed to read lead from stdin")?;
            serde_json::from_str(&raw).context("Invalid lead JSON on stdin")?
        }
    };

    let errors = lead.validation_errors();
    if !errors.is_empty() {
        anyhow::bail!("Invalid lead: {}", errors.join("; "));
    }

    let analysis = pipeline::analyze(&lead, &config.analysis);
    tracing::info!(
        "{}: tier={}, score={:.1}",
        lead.company,
        analysis.scoring.tier,
        analysis.scoring.total
    );

    println!("{}", serde_json::to_string_pretty(&analysis)?);

    Ok(())
}
