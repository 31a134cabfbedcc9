//! Command-line definitions (clap derive).

use std::path::PathBuf;

use chrono::NaiveDateTime;
use clap::{Args, Parser, Subcommand, ValueEnum};
use ecocast_core::models::PredictionRequest;

/// Energy, water and CO₂ consumption forecasts for campus facilities.
#[derive(Parser, Debug)]
#[command(name = "ecocast", version, about)]
pub struct Cli {
    /// TOML configuration file; built-in defaults when omitted
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, global = true, value_enum, default_value_t = OutputFormat::Json)]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Json,
    Text,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the cascade for one request
    Predict(RequestArgs),

    /// Run the cascade for every request in a JSON array file
    Batch(BatchArgs),

    /// Run the cascade and attribute each stage's output to its features
    Explain(ExplainArgs),

    /// Print the feature schema of each stage
    Schema(SchemaArgs),
}

/// One prediction request, from explicit hour/day or a timestamp.
#[derive(Args, Debug)]
pub struct RequestArgs {
    /// Campus id: 1 Chiquinquirá, 2 Tunja, 3 Duitama, 4 Sogamoso
    #[arg(long)]
    pub campus: u8,

    /// Sector name, e.g. Laboratorios
    #[arg(long)]
    pub sector: String,

    /// Hour of day (0-23)
    #[arg(long, required_unless_present = "at", conflicts_with = "at")]
    pub hour: Option<u32>,

    /// Day of week, 0 = Monday
    #[arg(long, required_unless_present = "at", conflicts_with = "at")]
    pub day: Option<u32>,

    /// Local timestamp (e.g. 2024-03-12T10:00:00) instead of --hour/--day
    #[arg(long)]
    pub at: Option<NaiveDateTime>,

    /// Outdoor temperature in °C
    #[arg(long)]
    pub temperature: f64,

    /// Occupancy percentage
    #[arg(long)]
    pub occupancy: f64,

    #[arg(long)]
    pub holiday: bool,

    #[arg(long)]
    pub midterm: bool,

    #[arg(long = "final")]
    pub finals: bool,
}

impl RequestArgs {
    pub fn to_request(&self) -> PredictionRequest {
        let request = match self.at {
            Some(at) => PredictionRequest::at(
                self.campus,
                self.sector.clone(),
                at,
                self.temperature,
                self.occupancy,
            ),
            None => PredictionRequest::new(
                self.campus,
                self.sector.clone(),
                self.hour.unwrap_or_default(),
                self.day.unwrap_or_default(),
                self.temperature,
                self.occupancy,
            ),
        };
        request
            .with_holiday(self.holiday)
            .with_midterm(self.midterm)
            .with_final(self.finals)
    }
}

#[derive(Args, Debug)]
pub struct BatchArgs {
    /// JSON file holding an array of requests
    pub input: PathBuf,
}

#[derive(Args, Debug)]
pub struct ExplainArgs {
    #[command(flatten)]
    pub request: RequestArgs,

    /// Contributors listed per stage in text output
    #[arg(long, default_value_t = 5)]
    pub top: usize,
}

#[derive(Args, Debug)]
pub struct SchemaArgs {
    /// Print the full built-in catalog instead of loading the model artifacts
    #[arg(long)]
    pub canonical: bool,
}
