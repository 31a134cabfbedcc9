use std::sync::{Arc, Mutex};

use ecocast_cascade::tracing_setup::spans::names;
use ecocast_cascade::CascadeBundle;
use ecocast_core::config::EcocastConfig;
use ecocast_core::models::PredictionRequest;
use serde::Deserialize;
use test_fixtures::{load_fixture, model_artifact, reference_stats_artifact};
use tracing::span::{Attributes, Id};
use tracing::Subscriber;
use tracing_subscriber::layer::{Context, SubscriberExt};
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::{Layer, Registry};

type SpanLog = Arc<Mutex<Vec<(String, Option<String>)>>>;

/// Records every new span together with its parent's name.
struct ParentLog(SpanLog);

impl<S> Layer<S> for ParentLog
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    fn on_new_span(&self, _attrs: &Attributes<'_>, id: &Id, ctx: Context<'_, S>) {
        if let Some(span) = ctx.span(id) {
            let parent = span.parent().map(|p| p.name().to_string());
            self.0.lock().unwrap().push((span.name().to_string(), parent));
        }
    }
}

#[derive(Deserialize)]
struct BatchScenario {
    requests: Vec<PredictionRequest>,
}

// Single test in this binary: it installs the process-wide subscriber so
// spans opened on rayon workers are observed too.
#[test]
fn batch_cascades_are_parented_under_the_batch_span() {
    let log = SpanLog::default();
    let subscriber = Registry::default().with(ParentLog(Arc::clone(&log)));
    tracing::subscriber::set_global_default(subscriber).unwrap();

    let mut config = EcocastConfig::default();
    config.artifacts.energy_model = model_artifact("energy").display().to_string();
    config.artifacts.water_model = model_artifact("water").display().to_string();
    config.artifacts.co2_model = model_artifact("co2").display().to_string();
    config.artifacts.reference_stats = reference_stats_artifact().display().to_string();
    let bundle = CascadeBundle::load(&config).unwrap();

    let scenario: BatchScenario = load_fixture("scenarios/batch_mixed.json");
    bundle.engine().predict_batch(&scenario.requests);

    let spans = log.lock().unwrap();
    let cascades: Vec<_> = spans.iter().filter(|(name, _)| name.as_str() == names::CASCADE).collect();
    assert_eq!(cascades.len(), scenario.requests.len());
    for (_, parent) in cascades {
        assert_eq!(parent.as_deref(), Some(names::BATCH));
    }
}
