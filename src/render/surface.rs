use crate::foundation::{core::IntRect, error::LayerboxResult};

/// How source pixels are picked when a blit scales.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Interpolation {
    /// Each destination pixel copies exactly one source pixel.
    #[default]
    NearestNeighbor,
}

/// Where within a destination pixel the source is sampled.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum PixelOffset {
    /// Sample at the pixel centre, so upscaled pixels land without seams.
    #[default]
    Half,
    /// Sample at the pixel's top-left corner.
    None,
}

/// Sampling mode a surface should use for subsequent blits.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Sampling {
    /// Resampling filter.
    pub interpolation: Interpolation,
    /// Sample position within a pixel.
    pub pixel_offset: PixelOffset,
}

impl Sampling {
    /// Nearest-neighbour with half-pixel offset; what the compositor paints with.
    pub const PIXEL_EXACT: Self = Self {
        interpolation: Interpolation::NearestNeighbor,
        pixel_offset: PixelOffset::Half,
    };
}

/// Host-supplied drawing target.
///
/// The compositor decides *what* to copy where; the surface owns pixel
/// formats, blending and clipping to its own bounds.
pub trait DrawSurface<I: ?Sized> {
    /// Select the sampling mode for subsequent [`draw_image`](Self::draw_image) calls.
    fn set_sampling(&mut self, sampling: Sampling);

    /// Blit `src` (in the image's local pixel coordinates) onto `dest`
    /// (in display space), scaling as needed.
    fn draw_image(&mut self, image: &I, dest: IntRect, src: IntRect) -> LayerboxResult<()>;
}
