use crate::layer::LayerId;

/// Convenience result type used across layerbox.
pub type LayerboxResult<T> = Result<T, LayerboxError>;

/// Top-level error taxonomy used by canvas and backend APIs.
///
/// Geometry never fails; only handle lookups, settings parsing and the external
/// draw/decode boundaries produce errors.
#[derive(thiserror::Error, Debug)]
pub enum LayerboxError {
    /// A layer handle does not refer to a live layer of this canvas.
    #[error("layer not found: {0:?}")]
    LayerNotFound(LayerId),

    /// Invalid user-provided configuration or arguments.
    #[error("validation error: {0}")]
    Validation(String),

    /// A draw surface rejected a blit.
    #[error("render error: {0}")]
    Render(String),

    /// Errors when serializing or deserializing settings.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl LayerboxError {
    /// Build a [`LayerboxError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`LayerboxError::Render`] value.
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    /// Build a [`LayerboxError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
