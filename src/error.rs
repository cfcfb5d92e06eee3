use std::io;

/// Invalid scale configuration supplied by the host.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ScaleConfigError {
    #[error("scale must be finite and greater than zero, got {0}")]
    InvalidScale(f64),
    #[error("scale width must be finite and greater than zero, got {0}")]
    InvalidScaleWidth(f64),
    #[error("start left must be finite and non-negative, got {0}")]
    InvalidStartLeft(f64),
}

/// Failure loading or saving ruler settings.
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("settings io error: {0}")]
    Io(#[from] io::Error),
    #[error("settings json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid scale configuration: {0}")]
    Scale(#[from] ScaleConfigError),
}
