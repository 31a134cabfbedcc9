use ecocast_core::config::EcocastConfig;

use super::{format_result, load_bundle, print_json};
use crate::cli::{OutputFormat, RequestArgs};

pub fn execute(config: &EcocastConfig, args: &RequestArgs, format: OutputFormat) -> anyhow::Result<()> {
    let bundle = load_bundle(config)?;
    let result = bundle.engine().predict_cascade(&args.to_request())?;
    match format {
        OutputFormat::Json => print_json(&result),
        OutputFormat::Text => {
            println!("{}", format_result(&result));
            Ok(())
        }
    }
}
