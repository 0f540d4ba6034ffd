use super::{ConfigError, FuelcastErrorCode, PredictError, SubmitError};

/// Umbrella error for the whole workspace.
#[derive(Debug, thiserror::Error)]
pub enum FuelcastError {
    #[error(transparent)]
    Submit(#[from] SubmitError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Predict(#[from] PredictError),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

pub type FuelcastResult<T> = Result<T, FuelcastError>;

impl FuelcastErrorCode for FuelcastError {
    fn error_code(&self) -> &'static str {
        match self {
            FuelcastError::Submit(e) => e.error_code(),
            FuelcastError::Config(e) => e.error_code(),
            FuelcastError::Predict(e) => e.error_code(),
            FuelcastError::Io(_) => "IO_ERROR",
        }
    }
}
