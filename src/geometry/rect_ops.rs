//! All arithmetic saturates at the `i32` bounds.

use crate::foundation::core::{IntPoint, IntRect};

/// Translate `r` by `+p`.
pub fn positive_offset(r: IntRect, p: IntPoint) -> IntRect {
    IntRect::new(
        r.x.saturating_add(p.x),
        r.y.saturating_add(p.y),
        r.width,
        r.height,
    )
}

/// Translate `r` by `-p`.
pub fn negative_offset(r: IntRect, p: IntPoint) -> IntRect {
    IntRect::new(
        r.x.saturating_sub(p.x),
        r.y.saturating_sub(p.y),
        r.width,
        r.height,
    )
}

/// Multiply every component of `r` by `n` (canvas space to display space).
pub fn scale_up(r: IntRect, n: i32) -> IntRect {
    IntRect::new(
        r.x.saturating_mul(n),
        r.y.saturating_mul(n),
        r.width.saturating_mul(n),
        r.height.saturating_mul(n),
    )
}

/// Divide `r` by `n` (display space to canvas space), expanding the extent.
///
/// The origin divides with truncation toward zero. Each extent becomes
/// `ceil(extent / n) + n`: one whole scale unit wider than the exact ceiling,
/// so the result always covers every source pixel the display rectangle
/// partially touches.
// TODO: for non-negative origins `+ 1` already guarantees coverage; review the
// `+ n` pad against seams at non-unit scale before tightening it.
pub fn scale_down_expand(r: IntRect, n: i32) -> IntRect {
    IntRect::new(
        r.x / n,
        r.y / n,
        ceil_div(r.width, n).saturating_add(n),
        ceil_div(r.height, n).saturating_add(n),
    )
}

/// Standard rectangle intersection.
///
/// Non-overlapping inputs produce a rectangle with zero or negative extent;
/// test the result with [`IntRect::is_empty`].
pub fn intersect(a: IntRect, b: IntRect) -> IntRect {
    let x0 = a.x.max(b.x);
    let y0 = a.y.max(b.y);
    let x1 = a.right().min(b.right());
    let y1 = a.bottom().min(b.bottom());
    IntRect::new(x0, y0, x1.saturating_sub(x0), y1.saturating_sub(y0))
}

/// Integer division rounding toward positive infinity (`n > 0`).
pub fn ceil_div(v: i32, n: i32) -> i32 {
    let q = v.saturating_div(n);
    if v % n > 0 { q.saturating_add(1) } else { q }
}

#[cfg(test)]
#[path = "../../tests/unit/geometry/rect_ops.rs"]
mod tests;
