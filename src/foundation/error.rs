/// Convenience result type used across the compositor.
pub type MosaicResult<T> = Result<T, MosaicError>;

/// Top-level error taxonomy used by compositing APIs.
///
/// Every variant is fatal for the composition run: there are no partial mosaics.
#[derive(thiserror::Error, Debug)]
pub enum MosaicError {
    /// No source images were supplied.
    #[error("empty input: at least one source image is required")]
    EmptyInput,

    /// A placement or combined transform is singular.
    #[error("transform not invertible: {0}")]
    TransformNotInvertible(String),

    /// Source images disagree on channel count or width.
    #[error("dimension mismatch: {0}")]
    DimensionMismatch(String),

    /// The requested panorama mode cannot be realized for this input.
    #[error("unsupported mode: {0}")]
    UnsupportedMode(String),

    /// Invalid caller-provided data or options.
    #[error("validation error: {0}")]
    Validation(String),

    /// Errors when serializing or deserializing options and reports.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl MosaicError {
    /// Build a [`MosaicError::TransformNotInvertible`] value.
    pub fn not_invertible(msg: impl Into<String>) -> Self {
        Self::TransformNotInvertible(msg.into())
    }

    /// Build a [`MosaicError::DimensionMismatch`] value.
    pub fn dimension_mismatch(msg: impl Into<String>) -> Self {
        Self::DimensionMismatch(msg.into())
    }

    /// Build a [`MosaicError::UnsupportedMode`] value.
    pub fn unsupported_mode(msg: impl Into<String>) -> Self {
        Self::UnsupportedMode(msg.into())
    }

    /// Build a [`MosaicError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`MosaicError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
