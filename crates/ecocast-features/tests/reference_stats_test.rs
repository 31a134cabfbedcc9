use ecocast_core::models::{Campus, Sector};
use ecocast_core::traits::IReferenceStats;
use ecocast_features::ReferenceStats;
use test_fixtures::{fixture_path, reference_stats_artifact};

#[test]
fn fixture_table_covers_every_pair() {
    let stats = ReferenceStats::load(reference_stats_artifact()).unwrap();
    assert_eq!(stats.len(), Sector::ALL.len() * Campus::ALL.len());
    for sector in Sector::ALL {
        for campus in Campus::ALL {
            assert!(stats.contains(sector, campus), "{sector} @ {campus}");
        }
    }
}

#[test]
fn lookup_combines_sector_and_campus_rows() {
    let stats = ReferenceStats::load(reference_stats_artifact()).unwrap();
    let agg = stats.lookup(Sector::Laboratorios, Campus::Chiquinquira).unwrap();
    assert_eq!(agg.water_sector_mean, 650.0);
    assert_eq!(agg.water_sector_std, 170.0);
    assert_eq!(agg.co2_sector_mean, 11.8);
    assert_eq!(agg.water_campus_mean, 390.0);
}

#[test]
fn missing_file_is_reported_with_path() {
    let err = ReferenceStats::load(fixture_path("artifacts/missing_stats.json")).unwrap_err();
    assert!(err.to_string().contains("missing_stats.json"));
}

#[test]
fn empty_store_rejects_every_lookup() {
    let stats = ReferenceStats::default();
    assert!(stats.is_empty());
    let err = stats.lookup(Sector::Oficinas, Campus::Sogamoso).unwrap_err();
    assert!(err.is_configuration());
}

#[test]
fn loads_from_temp_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("stats.json");
    std::fs::write(
        &path,
        r#"{
            "sectors": {"Salones": {"water_mean": 300.0, "water_std": 80.0, "co2_mean": 7.0}},
            "campuses": {"3": {"water_mean": 410.0}}
        }"#,
    )
    .unwrap();
    let stats = ReferenceStats::load(&path).unwrap();
    assert_eq!(stats.len(), 1);
    assert!(stats.contains(Sector::Salones, Campus::Duitama));
}

#[test]
fn load_emits_record_under_active_subscriber() {
    let subscriber = tracing_subscriber::fmt()
        .with_writer(std::io::sink)
        .with_max_level(tracing::Level::INFO)
        .finish();
    let stats = tracing::subscriber::with_default(subscriber, || {
        ReferenceStats::load(reference_stats_artifact())
    })
    .unwrap();
    assert!(!stats.is_empty());
}
