use crate::foundation::core::IntSize;

/// Whether an auto-sizing canvas may shrink.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum SizeMode {
    /// Follow the leaders in both directions.
    #[default]
    GrowAndShrink,
    /// Never drop below the size already in effect.
    GrowOnly,
}

impl SizeMode {
    /// `true` for [`SizeMode::GrowAndShrink`].
    pub fn shrink_allowed(self) -> bool {
        matches!(self, Self::GrowAndShrink)
    }
}

/// Everything the size computation depends on.
#[derive(Clone, Copy, Debug)]
pub(crate) struct SizeInputs {
    /// Leader extents (width leader's total width, height leader's total height).
    pub(crate) leader: IntSize,
    /// Per-axis cap; 0 leaves that axis uncapped.
    pub(crate) max_size: IntSize,
    pub(crate) locked: bool,
    pub(crate) mode: SizeMode,
    /// Canvas size currently in effect, in canvas units.
    pub(crate) previous: IntSize,
}

/// Authoritative canvas size in canvas units.
///
/// A locked canvas keeps `previous`. Otherwise each axis takes the leader
/// extent, clipped to its cap when one is set, and in grow-only mode never
/// drops below `previous`.
///
/// Grow-only compares canvas units against canvas units. Clamping against the
/// previous display size instead would feed `size * scale` back in as a
/// canvas size and inflate the canvas on every recompute above scale 1.
pub(crate) fn resolve_canvas_size(inputs: SizeInputs) -> IntSize {
    if inputs.locked {
        return inputs.previous;
    }
    let shrink = inputs.mode.shrink_allowed();
    IntSize::new(
        resolve_axis(
            inputs.leader.width,
            inputs.max_size.width,
            inputs.previous.width,
            shrink,
        ),
        resolve_axis(
            inputs.leader.height,
            inputs.max_size.height,
            inputs.previous.height,
            shrink,
        ),
    )
}

fn resolve_axis(leader: i32, cap: i32, previous: i32, shrink: bool) -> i32 {
    let mut candidate = if cap != 0 { leader.min(cap) } else { leader };
    if !shrink && candidate < previous {
        candidate = previous;
    }
    candidate.max(0)
}

#[cfg(test)]
#[path = "../../tests/unit/canvas/size_policy.rs"]
mod tests;
