//! The auto-sizing canvas: layer stack, size leadership and size policy.

mod layered;
mod leader;
mod settings;
mod size_policy;

pub use layered::{LayeredCanvas, SizeChange};
pub use settings::CanvasSettings;
pub use size_policy::SizeMode;
