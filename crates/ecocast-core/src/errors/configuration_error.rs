use crate::models::Stage;

/// Deployment/config faults: the feature code and the loaded artifacts disagree,
/// or the request names something the static tables do not know.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigurationError {
    #[error("unknown sector: {name}")]
    UnknownSector { name: String },

    #[error("unknown campus id: {id}")]
    UnknownCampus { id: u8 },

    #[error("no reference statistics for sector {sector} at campus {campus}")]
    MissingReferenceStats { sector: String, campus: u8 },

    #[error("{stage} schema cannot be populated: feature '{feature}': {reason}")]
    SchemaMismatch {
        stage: Stage,
        feature: String,
        reason: String,
    },

    #[error("{stage} stage requires upstream {needed} prediction")]
    MissingUpstream { stage: Stage, needed: Stage },

    #[error("invalid config: {reason}")]
    InvalidConfig { reason: String },
}
