//! Span definitions for a cascade run and its stages.

/// Create a span covering one full cascade run.
#[macro_export]
macro_rules! cascade_span {
    ($campus_id:expr, $sector:expr) => {
        tracing::info_span!("ecocast.cascade", campus_id = $campus_id, sector = %$sector)
    };
}

/// Create a span for one stage inside a cascade.
#[macro_export]
macro_rules! stage_span {
    ($stage:expr) => {
        tracing::debug_span!("ecocast.stage", stage = %$stage)
    };
}

/// Create a span covering a batch of cascades.
#[macro_export]
macro_rules! batch_span {
    ($size:expr) => {
        tracing::info_span!("ecocast.batch", size = $size)
    };
}

/// Span names as constants for programmatic use.
pub mod names {
    pub const CASCADE: &str = "ecocast.cascade";
    pub const STAGE: &str = "ecocast.stage";
    pub const BATCH: &str = "ecocast.batch";
}
