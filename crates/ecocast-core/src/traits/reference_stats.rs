use crate::errors::EcocastResult;
use crate::models::{Campus, HistoricalAggregates, Sector};

/// Read-only historical aggregates keyed by (sector, campus).
pub trait IReferenceStats: Send + Sync {
    /// Fails with `MissingReferenceStats` when the pair has no entry.
    fn lookup(&self, sector: Sector, campus: Campus) -> EcocastResult<HistoricalAggregates>;
}
