pub mod batch;
pub mod explain;
pub mod predict;
pub mod schema;

use std::path::Path;

use anyhow::Context;
use ecocast_cascade::CascadeBundle;
use ecocast_core::config::EcocastConfig;
use ecocast_core::models::CascadeResult;
use serde::Serialize;

pub fn load_config(path: Option<&Path>) -> anyhow::Result<EcocastConfig> {
    match path {
        Some(path) => EcocastConfig::load(path)
            .with_context(|| format!("loading configuration from {}", path.display())),
        None => Ok(EcocastConfig::default()),
    }
}

pub fn load_bundle(config: &EcocastConfig) -> anyhow::Result<CascadeBundle> {
    CascadeBundle::load(config).context("loading model artifacts")
}

pub fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Text rendering rounds to two decimals; JSON output is never rounded.
pub fn format_result(result: &CascadeResult) -> String {
    format!(
        "{} / {}: energy {:.2} kWh, water {:.2} liters, CO₂ {:.2} kg",
        result.campus_name, result.sector, result.energy_kwh, result.water_liters, result.co2_kg
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_output_rounds_to_two_decimals() {
        let result = CascadeResult {
            energy_kwh: 63.0,
            water_liters: 72.697_054,
            co2_kg: 14.8,
            campus_name: "Chiquinquirá".into(),
            sector: "Laboratorios".into(),
        };
        assert_eq!(
            format_result(&result),
            "Chiquinquirá / Laboratorios: energy 63.00 kWh, water 72.70 liters, CO₂ 14.80 kg"
        );
    }

    #[test]
    fn no_config_path_uses_defaults() {
        assert_eq!(load_config(None).unwrap(), EcocastConfig::default());
    }
}
