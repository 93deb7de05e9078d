//! Layerbox composes an ordered stack of positioned raster images into one
//! canvas that sizes itself to its content and displays at an integer scale.
//!
//! # Model
//!
//! - **Canvas space**: unscaled integer coordinates in which layer locations
//!   and image sizes live.
//! - **Display space**: canvas space multiplied by the canvas
//!   [scale](LayeredCanvas::scale); the coordinates of the host's surface.
//!
//! A [`Layer`] is *shown* when its visibility flag is set and it holds a
//! non-empty image. For each axis the canvas tracks a *leader*: the shown
//! layer reaching furthest along that axis. The leaders, an optional size cap,
//! a lock flag and a grow/shrink [`SizeMode`] decide the canvas size.
//!
//! # Painting
//!
//! Hosts hand [`LayeredCanvas::paint`] a dirty rectangle in display space and
//! a [`DrawSurface`]. The canvas converts the rectangle to canvas space and
//! issues one nearest-neighbour blit per shown layer that overlaps it, bottom
//! to top. [`CpuSurface`] and [`RasterImage`] are a ready-made backend;
//! [`LayeredCanvas::flatten`] uses them to produce a single image.
//!
//! Everything is single-threaded and synchronous: each mutator updates
//! leaders, recomputes the size and notifies the
//! [size listener](LayeredCanvas::on_size_changed) before returning.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod assets;
mod canvas;
mod foundation;
mod layer;
mod render;

/// Rectangle transforms between canvas space and display space.
pub mod geometry;

pub use assets::raster::{LayerImage, RasterImage};
pub use canvas::{CanvasSettings, LayeredCanvas, SizeChange, SizeMode};
pub use foundation::core::{IntPoint, IntRect, IntSize};
pub use foundation::error::{LayerboxError, LayerboxResult};
pub use layer::{Axis, Layer, LayerId};
pub use render::composite::PaintStats;
pub use render::cpu::CpuSurface;
pub use render::surface::{DrawSurface, Interpolation, PixelOffset, Sampling};

#[cfg(test)]
#[path = "../tests/unit/support.rs"]
pub(crate) mod test_support;
