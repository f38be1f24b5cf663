use thiserror::Error;

/// Rejected tuning parameters. Defaults never produce one of these.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParamsError {
    #[error("smoothing factor must lie in (0, 1), got {0}")]
    Smoothing(f32),
    #[error("snap epsilon must be positive, got {0}")]
    SnapEpsilon(f32),
    #[error("{name} must be finite, got {value}")]
    NotFinite { name: &'static str, value: f32 },
    #[error("{name} must be positive and finite, got {value}")]
    NonPositive { name: &'static str, value: f32 },
}

pub(crate) fn require_positive(name: &'static str, value: f32) -> Result<f32, ParamsError> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(ParamsError::NonPositive { name, value })
    }
}
