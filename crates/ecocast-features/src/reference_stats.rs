//! Reference Statistics Store: historical aggregates keyed by (sector, campus).
//!
//! Loaded once at startup and never mutated afterwards. The on-disk format
//! mirrors how the aggregates were computed during training: per-sector
//! water mean/std and CO₂ mean, plus a per-campus water mean. The store
//! expands those into one entry per (sector, campus) pair.

use std::collections::{BTreeMap, HashMap};
use std::path::Path;

use ecocast_core::errors::{ArtifactError, ConfigurationError, EcocastResult};
use ecocast_core::models::{Campus, HistoricalAggregates, Sector};
use ecocast_core::traits::IReferenceStats;
use serde::{Deserialize, Serialize};
use tracing::info;

/// Per-sector aggregates as stored on disk.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SectorStats {
    pub water_mean: f64,
    pub water_std: f64,
    pub co2_mean: f64,
}

/// Per-campus aggregates as stored on disk.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CampusStats {
    pub water_mean: f64,
}

/// JSON layout of `reference_stats.json`. Campus keys are numeric ids.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReferenceStatsFile {
    pub sectors: BTreeMap<String, SectorStats>,
    pub campuses: BTreeMap<String, CampusStats>,
}

/// Immutable (sector, campus) → aggregates table.
#[derive(Debug, Clone, Default)]
pub struct ReferenceStats {
    table: HashMap<(Sector, Campus), HistoricalAggregates>,
}

impl ReferenceStats {
    /// Build from explicit entries. Later duplicates replace earlier ones.
    pub fn from_entries(
        entries: impl IntoIterator<Item = ((Sector, Campus), HistoricalAggregates)>,
    ) -> Self {
        Self {
            table: entries.into_iter().collect(),
        }
    }

    /// Expand the per-sector and per-campus aggregates into the pair table.
    ///
    /// # Errors
    /// `UnknownSector` / `UnknownCampus` for keys outside the static tables.
    pub fn from_file(file: &ReferenceStatsFile) -> EcocastResult<Self> {
        let mut sectors = Vec::with_capacity(file.sectors.len());
        for (name, stats) in &file.sectors {
            let sector: Sector = name.parse()?;
            sectors.push((sector, *stats));
        }

        let mut campuses = Vec::with_capacity(file.campuses.len());
        for (key, stats) in &file.campuses {
            let id: u8 = key.parse().map_err(|_| ConfigurationError::InvalidConfig {
                reason: format!("campus key '{key}' is not a numeric id"),
            })?;
            campuses.push((Campus::from_id(id)?, *stats));
        }

        let mut table = HashMap::with_capacity(sectors.len() * campuses.len());
        for &(sector, s) in &sectors {
            for &(campus, c) in &campuses {
                table.insert(
                    (sector, campus),
                    HistoricalAggregates {
                        water_sector_mean: s.water_mean,
                        water_sector_std: s.water_std,
                        water_campus_mean: c.water_mean,
                        co2_sector_mean: s.co2_mean,
                    },
                );
            }
        }
        Ok(Self { table })
    }

    /// Read `reference_stats.json` from disk.
    pub fn load(path: impl AsRef<Path>) -> EcocastResult<Self> {
        let path = path.as_ref();
        let shown = path.display().to_string();
        let content = std::fs::read_to_string(path).map_err(|e| ArtifactError::Io {
            path: shown.clone(),
            reason: e.to_string(),
        })?;
        let file: ReferenceStatsFile =
            serde_json::from_str(&content).map_err(|e| ArtifactError::Parse {
                path: shown.clone(),
                reason: e.to_string(),
            })?;
        let stats = Self::from_file(&file)?;
        info!(path = %shown, entries = stats.len(), "reference statistics loaded");
        Ok(stats)
    }

    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    pub fn contains(&self, sector: Sector, campus: Campus) -> bool {
        self.table.contains_key(&(sector, campus))
    }
}

impl IReferenceStats for ReferenceStats {
    fn lookup(&self, sector: Sector, campus: Campus) -> EcocastResult<HistoricalAggregates> {
        self.table.get(&(sector, campus)).copied().ok_or_else(|| {
            ConfigurationError::MissingReferenceStats {
                sector: sector.label().to_string(),
                campus: campus.id(),
            }
            .into()
        })
    }
}
