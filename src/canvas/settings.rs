use crate::{
    canvas::size_policy::SizeMode,
    foundation::{
        core::IntSize,
        error::{LayerboxError, LayerboxResult},
    },
};

/// Initial configuration of a [`LayeredCanvas`](crate::LayeredCanvas).
///
/// Every field has a default, so partial JSON such as `{"scale": 3}` is valid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CanvasSettings {
    /// Display multiplier; canvas coordinates times `scale` give display coordinates.
    pub scale: u32,
    /// Size cap in canvas units; `0` on an axis leaves it uncapped.
    pub max_size: IntSize,
    /// Whether the canvas may shrink when its leaders shrink.
    pub size_mode: SizeMode,
    /// When false the canvas keeps whatever size it has and ignores its layers.
    pub auto_size: bool,
}

impl Default for CanvasSettings {
    fn default() -> Self {
        Self {
            scale: 1,
            max_size: IntSize::ZERO,
            size_mode: SizeMode::GrowAndShrink,
            auto_size: true,
        }
    }
}

impl CanvasSettings {
    /// Same settings with a different display scale.
    pub fn with_scale(mut self, scale: u32) -> Self {
        self.scale = scale;
        self
    }

    /// Same settings with a size cap.
    pub fn with_max_size(mut self, max_size: IntSize) -> Self {
        self.max_size = max_size;
        self
    }

    /// Same settings with a different grow/shrink policy.
    pub fn with_size_mode(mut self, size_mode: SizeMode) -> Self {
        self.size_mode = size_mode;
        self
    }

    /// Same settings with auto-sizing switched on or off.
    pub fn with_auto_size(mut self, auto_size: bool) -> Self {
        self.auto_size = auto_size;
        self
    }

    /// Parse settings from JSON and validate them.
    pub fn from_json(s: &str) -> LayerboxResult<Self> {
        let settings: Self =
            serde_json::from_str(s).map_err(|e| LayerboxError::serde(e.to_string()))?;
        settings.validate()?;
        Ok(settings)
    }

    /// Reject values the canvas cannot honour.
    pub fn validate(&self) -> LayerboxResult<()> {
        if self.scale == 0 {
            return Err(LayerboxError::validation("canvas scale must be >= 1"));
        }
        if self.max_size.width < 0 || self.max_size.height < 0 {
            return Err(LayerboxError::validation(
                "canvas max_size must not be negative",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/canvas/settings.rs"]
mod tests;
