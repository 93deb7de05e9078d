//! Integer 2D primitives shared by every layerbox module.
//!
//! Canvas space and display space both use these types; which space a value
//! lives in is a property of where it came from, not of the type.

/// Integer 2D point.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct IntPoint {
    /// Horizontal coordinate.
    pub x: i32,
    /// Vertical coordinate.
    pub y: i32,
}

impl IntPoint {
    /// The origin `(0, 0)`.
    pub const ZERO: Self = Self { x: 0, y: 0 };

    /// Build a point from its coordinates.
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Integer 2D extent.
///
/// `0` on an axis of a size cap means "uncapped" for that axis.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct IntSize {
    /// Horizontal extent.
    pub width: i32,
    /// Vertical extent.
    pub height: i32,
}

impl IntSize {
    /// The empty size `(0, 0)`.
    pub const ZERO: Self = Self {
        width: 0,
        height: 0,
    };

    /// Build a size from its extents.
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    /// `true` when either axis is zero or negative.
    pub const fn is_empty(self) -> bool {
        self.width <= 0 || self.height <= 0
    }

    /// Component-wise multiplication by an integer factor, saturating on overflow.
    pub fn scaled(self, factor: u32) -> Self {
        let factor = i32::try_from(factor).unwrap_or(i32::MAX);
        Self {
            width: self.width.saturating_mul(factor),
            height: self.height.saturating_mul(factor),
        }
    }
}

/// Integer axis-aligned rectangle stored as origin plus extent.
///
/// Width and height may be zero or negative; such a rectangle is empty
/// (see [`IntRect::is_empty`]) rather than invalid.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct IntRect {
    /// Left edge.
    pub x: i32,
    /// Top edge.
    pub y: i32,
    /// Horizontal extent.
    pub width: i32,
    /// Vertical extent.
    pub height: i32,
}

impl IntRect {
    /// Build a rectangle from origin and extent components.
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Build a rectangle from an origin point and a size.
    pub const fn from_origin_size(origin: IntPoint, size: IntSize) -> Self {
        Self::new(origin.x, origin.y, size.width, size.height)
    }

    /// Rectangle at the origin covering `size`.
    pub const fn from_size(size: IntSize) -> Self {
        Self::from_origin_size(IntPoint::ZERO, size)
    }

    /// Top-left corner.
    pub const fn origin(self) -> IntPoint {
        IntPoint::new(self.x, self.y)
    }

    /// Extent as a size.
    pub const fn size(self) -> IntSize {
        IntSize::new(self.width, self.height)
    }

    /// Exclusive right edge.
    pub const fn right(self) -> i32 {
        self.x.saturating_add(self.width)
    }

    /// Exclusive bottom edge.
    pub const fn bottom(self) -> i32 {
        self.y.saturating_add(self.height)
    }

    /// `true` when width or height is zero or negative.
    pub const fn is_empty(self) -> bool {
        self.width <= 0 || self.height <= 0
    }

    /// `true` when `other` lies entirely inside `self`.
    ///
    /// Empty rectangles are contained by everything.
    pub fn contains_rect(self, other: Self) -> bool {
        other.is_empty()
            || (other.x >= self.x
                && other.y >= self.y
                && other.right() <= self.right()
                && other.bottom() <= self.bottom())
    }

    /// Smallest integer rectangle covering a floating-point host rectangle.
    ///
    /// Edges round outward, so a damage rectangle with fractional edges never
    /// loses its partially covered pixels.
    pub fn from_kurbo_expand(rect: kurbo::Rect) -> Self {
        let r = rect.abs().expand();
        let x0 = r.x0 as i32;
        let y0 = r.y0 as i32;
        let x1 = r.x1 as i32;
        let y1 = r.y1 as i32;
        Self::new(x0, y0, x1.saturating_sub(x0), y1.saturating_sub(y0))
    }

    /// Convert to a floating-point `kurbo` rectangle.
    pub fn to_kurbo(self) -> kurbo::Rect {
        kurbo::Rect::new(
            f64::from(self.x),
            f64::from(self.y),
            f64::from(self.right()),
            f64::from(self.bottom()),
        )
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
