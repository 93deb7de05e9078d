use crate::{
    assets::raster::LayerImage,
    foundation::core::{IntPoint, IntRect, IntSize},
};

/// One of the two independent canvas axes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
    /// Horizontal axis; extents are `location.x + size.width`.
    Width,
    /// Vertical axis; extents are `location.y + size.height`.
    Height,
}

impl Axis {
    /// Both axes, width first.
    pub const BOTH: [Self; 2] = [Self::Width, Self::Height];
}

/// One stacked image positioned in canvas space.
///
/// Visibility is derived: a layer is [shown](Self::is_shown) only when its
/// visibility flag is set *and* it holds an image with a non-empty extent.
/// Nothing caches that answer, so it cannot drift from the image and flag.
///
/// Mutation goes through the owning canvas (`LayeredCanvas::set_layer_*`) so
/// size leadership stays in sync; a free-standing `Layer` is read-only apart
/// from construction.
#[derive(Clone, Debug)]
pub struct Layer<I> {
    image: Option<I>,
    location: IntPoint,
    visible: bool,
}

impl<I: LayerImage> Layer<I> {
    /// New visible layer showing `image` (if any) at `location`.
    pub fn new(image: Option<I>, location: IntPoint) -> Self {
        Self {
            image,
            location,
            visible: true,
        }
    }

    /// Visible layer at the origin with no image; never shown until it gets one.
    pub fn empty() -> Self {
        Self::new(None, IntPoint::ZERO)
    }

    /// Same layer with the visibility flag set to `visible`.
    pub fn with_visible(mut self, visible: bool) -> Self {
        self.visible = visible;
        self
    }

    /// Current image, if any.
    pub fn image(&self) -> Option<&I> {
        self.image.as_ref()
    }

    /// Top-left corner in canvas space. May be negative.
    pub fn location(&self) -> IntPoint {
        self.location
    }

    /// The caller's visibility intent, regardless of image.
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Image extent, or `(0, 0)` without an image.
    pub fn size(&self) -> IntSize {
        self.image.as_ref().map_or(IntSize::ZERO, LayerImage::size)
    }

    /// Derived visibility: flag set and a non-empty image.
    pub fn is_shown(&self) -> bool {
        self.visible && !self.size().is_empty()
    }

    /// Where the image lands in canvas space.
    pub fn draw_rect(&self) -> IntRect {
        IntRect::from_origin_size(self.location, self.size())
    }

    /// `location.x + size.width`.
    pub fn total_width(&self) -> i32 {
        self.location.x.saturating_add(self.size().width)
    }

    /// `location.y + size.height`.
    pub fn total_height(&self) -> i32 {
        self.location.y.saturating_add(self.size().height)
    }

    /// Total extent along `axis`.
    pub fn extent(&self, axis: Axis) -> i32 {
        match axis {
            Axis::Width => self.total_width(),
            Axis::Height => self.total_height(),
        }
    }

    /// Swap in a new image and hand back the previous one.
    pub(crate) fn replace_image(&mut self, image: Option<I>) -> Option<I> {
        std::mem::replace(&mut self.image, image)
    }

    pub(crate) fn set_location(&mut self, location: IntPoint) -> bool {
        if self.location == location {
            return false;
        }
        self.location = location;
        true
    }

    pub(crate) fn set_visible(&mut self, visible: bool) -> bool {
        if self.visible == visible {
            return false;
        }
        self.visible = visible;
        true
    }
}

#[cfg(test)]
#[path = "../../tests/unit/layer/model.rs"]
mod tests;
