use crate::{
    assets::raster::LayerImage,
    foundation::{core::IntRect, error::LayerboxResult},
    geometry::{intersect, negative_offset, positive_offset, scale_down_expand, scale_up},
    layer::Layer,
    render::surface::{DrawSurface, Sampling},
};

/// Counters from one paint pass.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PaintStats {
    /// Shown layers visited.
    pub layers_shown: usize,
    /// Blits issued to the surface.
    pub blits: usize,
    /// Shown layers skipped because they miss the dirty rectangle.
    pub skipped: usize,
}

/// One planned blit: image-local source and display-space destination.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Blit {
    pub(crate) src: IntRect,
    pub(crate) dest: IntRect,
}

/// Blit needed to repaint `layer` inside `clip` (canvas space), if any.
pub(crate) fn plan_blit<I: LayerImage>(
    layer: &Layer<I>,
    clip: IntRect,
    scale: i32,
) -> Option<Blit> {
    let src = negative_offset(intersect(layer.draw_rect(), clip), layer.location());
    if src.is_empty() {
        return None;
    }
    let dest = scale_up(positive_offset(src, layer.location()), scale);
    Some(Blit { src, dest })
}

/// Repaint `dirty` (display space) from `layers`, bottom to top.
///
/// Only shown layers that overlap the de-scaled dirty rectangle reach the
/// surface, each with exactly the overlapping part of its image.
pub(crate) fn paint_layers<'a, I, S>(
    layers: impl IntoIterator<Item = &'a Layer<I>>,
    scale: u32,
    dirty: IntRect,
    surface: &mut S,
) -> LayerboxResult<PaintStats>
where
    I: LayerImage + 'a,
    S: DrawSurface<I> + ?Sized,
{
    let scale = i32::try_from(scale.max(1)).unwrap_or(i32::MAX);
    let clip = scale_down_expand(dirty, scale);

    surface.set_sampling(Sampling::PIXEL_EXACT);

    let mut stats = PaintStats::default();
    for layer in layers {
        if !layer.is_shown() {
            continue;
        }
        stats.layers_shown += 1;
        let Some(blit) = plan_blit(layer, clip, scale) else {
            stats.skipped += 1;
            continue;
        };
        let Some(image) = layer.image() else {
            continue;
        };
        surface.draw_image(image, blit.dest, blit.src)?;
        stats.blits += 1;
    }
    tracing::trace!(?dirty, ?clip, ?stats, "painted layers");
    Ok(stats)
}

#[cfg(test)]
#[path = "../../tests/unit/render/composite.rs"]
mod tests;
