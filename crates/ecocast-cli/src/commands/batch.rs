use anyhow::Context;
use ecocast_core::config::EcocastConfig;
use ecocast_core::models::{CascadeResult, PredictionRequest};
use serde::Serialize;
use tracing::info;

use super::{format_result, load_bundle, print_json};
use crate::cli::{BatchArgs, OutputFormat};

/// One line of batch output. Failures are reported in place.
#[derive(Debug, Serialize)]
#[serde(untagged)]
enum BatchEntry {
    Ok { result: CascadeResult },
    Err { error: String },
}

pub fn execute(config: &EcocastConfig, args: &BatchArgs, format: OutputFormat) -> anyhow::Result<()> {
    let content = std::fs::read_to_string(&args.input)
        .with_context(|| format!("reading {}", args.input.display()))?;
    let requests: Vec<PredictionRequest> = serde_json::from_str(&content)
        .with_context(|| format!("parsing {}", args.input.display()))?;

    let bundle = load_bundle(config)?;
    let entries: Vec<BatchEntry> = bundle
        .engine()
        .predict_batch(&requests)
        .into_iter()
        .map(|outcome| match outcome {
            Ok(result) => BatchEntry::Ok { result },
            Err(e) => BatchEntry::Err {
                error: e.to_string(),
            },
        })
        .collect();

    let failed = entries
        .iter()
        .filter(|e| matches!(e, BatchEntry::Err { .. }))
        .count();
    info!(total = entries.len(), failed, "batch complete");

    match format {
        OutputFormat::Json => print_json(&entries),
        OutputFormat::Text => {
            for (i, entry) in entries.iter().enumerate() {
                match entry {
                    BatchEntry::Ok { result } => println!("[{i}] {}", format_result(result)),
                    BatchEntry::Err { error } => println!("[{i}] error: {error}"),
                }
            }
            Ok(())
        }
    }
}
