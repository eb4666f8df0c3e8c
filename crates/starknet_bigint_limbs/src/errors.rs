use num_bigint::{BigInt, ParseBigIntError};
use tracing::level_filters::ParseLevelFilterError;

pub type LimbsResult<T> = Result<T, LimbsError>;

#[derive(Debug, thiserror::Error)]
pub enum LimbsError {
    #[error("Cannot split a negative value into limbs, got {0}.")]
    NegativeValue(BigInt),
    #[error("Invalid limb base: {0}.")]
    InvalidBase(BigInt),
    #[error("Modulus must be greater than 1, got {0}.")]
    InvalidModulus(BigInt),
    #[error("Limb sequences must have the same length; got {left} and {right}.")]
    LimbCountMismatch { left: usize, right: usize },
    #[error("Number of limbs must be in [1, {max}], got {n_limbs}.")]
    InvalidLimbCount { n_limbs: usize, max: usize },
    #[error(transparent)]
    ParseBigInt(#[from] ParseBigIntError),
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    ConfigValidation(#[from] validator::ValidationErrors),
    #[error(transparent)]
    ParseLogLevel(#[from] ParseLevelFilterError),
    #[error(transparent)]
    TracingReload(#[from] tracing_subscriber::reload::Error),
}
