pub mod campus;
pub mod cascade_result;
pub mod feature_vector;
pub mod historical;
pub mod prediction;
pub mod request;
pub mod sector;
pub mod stage;

pub use campus::Campus;
pub use cascade_result::CascadeResult;
pub use feature_vector::{FeatureSchema, FeatureVector};
pub use historical::{Attribution, HistoricalAggregates};
pub use prediction::StagePrediction;
pub use request::PredictionRequest;
pub use sector::Sector;
pub use stage::Stage;
