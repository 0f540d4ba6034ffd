pub mod feature_vector;
pub mod form_payload;
pub mod form_snapshot;
pub mod prediction_result;

pub use feature_vector::FeatureVector;
pub use form_payload::{FieldValue, FormPayload};
pub use form_snapshot::FormSnapshot;
pub use prediction_result::PredictionResult;
