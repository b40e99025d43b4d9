use thiserror::Error;

pub type ScaleResult<T> = std::result::Result<T, ScaleError>;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ScaleError {
    #[error("scale inputs must be finite: base={base}, ratio={ratio}")]
    NonFiniteInput { base: f64, ratio: f64 },
    #[error("base size must be positive, got {0}")]
    NonPositiveBase(f64),
    #[error("scale ratio must be greater than 1, got {0}")]
    RatioNotAboveOne(f64),
    #[error("unknown scale ratio: {0}")]
    UnknownRatio(String),
    #[error("unknown tier: {0}")]
    UnknownTier(String),
}
