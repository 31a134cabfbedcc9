use ecocast_core::config::EcocastConfig;

use super::{format_result, load_bundle, print_json};
use crate::cli::{ExplainArgs, OutputFormat};

pub fn execute(config: &EcocastConfig, args: &ExplainArgs, format: OutputFormat) -> anyhow::Result<()> {
    let bundle = load_bundle(config)?;
    let explanation = bundle.engine().explain_cascade(&args.request.to_request())?;

    match format {
        OutputFormat::Json => print_json(&explanation),
        OutputFormat::Text => {
            println!("{}", format_result(&explanation.result));
            for stage in &explanation.stages {
                let space = if stage.log_space { " (log space)" } else { "" };
                println!(
                    "\n{}: base {:.4}, raw {:.4}{space}",
                    stage.stage, stage.base_value, stage.raw_prediction
                );
                for (name, contribution) in stage.top_contributors(args.top) {
                    println!("  {name:<28} {contribution:+.4}");
                }
            }
            Ok(())
        }
    }
}
