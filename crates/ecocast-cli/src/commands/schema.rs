use ecocast_core::config::EcocastConfig;
use ecocast_core::models::{FeatureSchema, Stage};
use ecocast_features::FeatureBuilder;
use serde::Serialize;

use super::{load_bundle, print_json};
use crate::cli::{OutputFormat, SchemaArgs};

#[derive(Debug, Serialize)]
struct StageSchema<'a> {
    stage: Stage,
    features: &'a [String],
    #[serde(skip_serializing_if = "Option::is_none")]
    fingerprint: Option<&'a str>,
}

pub fn execute(config: &EcocastConfig, args: &SchemaArgs, format: OutputFormat) -> anyhow::Result<()> {
    if args.canonical {
        let builder = FeatureBuilder::canonical();
        let schemas = Stage::ALL.map(|stage| builder.schema(stage).clone());
        let entries: Vec<StageSchema<'_>> = schemas
            .iter()
            .map(|schema| entry(schema, None))
            .collect();
        return render(&entries, format);
    }

    let bundle = load_bundle(config)?;
    let entries: Vec<StageSchema<'_>> = Stage::ALL
        .iter()
        .map(|&stage| {
            let predictor = bundle.predictor(stage);
            entry(predictor.schema(), predictor.fingerprint())
        })
        .collect();
    render(&entries, format)
}

fn entry<'a>(schema: &'a FeatureSchema, fingerprint: Option<&'a str>) -> StageSchema<'a> {
    StageSchema {
        stage: schema.stage,
        features: schema.names(),
        fingerprint,
    }
}

fn render(entries: &[StageSchema<'_>], format: OutputFormat) -> anyhow::Result<()> {
    match format {
        OutputFormat::Json => print_json(&entries),
        OutputFormat::Text => {
            for entry in entries {
                println!("{} ({} features)", entry.stage, entry.features.len());
                if let Some(fingerprint) = entry.fingerprint {
                    println!("  blake3 {fingerprint}");
                }
                for (i, name) in entry.features.iter().enumerate() {
                    println!("  {i:>3} {name}");
                }
            }
            Ok(())
        }
    }
}
