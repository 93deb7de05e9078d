use crate::{
    assets::raster::{LayerImage, RasterImage},
    canvas::{
        leader::LeaderTracker,
        settings::CanvasSettings,
        size_policy::{SizeInputs, SizeMode, resolve_canvas_size},
    },
    foundation::{
        core::{IntPoint, IntRect, IntSize},
        error::{LayerboxError, LayerboxResult},
    },
    layer::{Axis, Layer, LayerId, LayerStack},
    render::{
        composite::{PaintStats, paint_layers},
        cpu::CpuSurface,
        surface::DrawSurface,
    },
};

/// Canvas size reported to the host after a recomputation changed it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SizeChange {
    /// New size in canvas units.
    pub canvas: IntSize,
    /// New size in display pixels (`canvas * scale`); what the host should allocate.
    pub display: IntSize,
}

type SizeListener = Box<dyn FnMut(SizeChange)>;

/// An ordered stack of positioned images composed into one auto-sizing canvas.
///
/// Index 0 of the stack paints first (bottom-most). Every mutator finishes the
/// whole dependent chain before returning: leaders are updated, the canvas
/// size is recomputed, and the size listener is told if the size moved.
pub struct LayeredCanvas<I = RasterImage> {
    layers: LayerStack<I>,
    leaders: LeaderTracker,
    scale: u32,
    max_size: IntSize,
    size_locked: bool,
    size_mode: SizeMode,
    auto_size: bool,
    current_size: IntSize,
    display_size: IntSize,
    listener: Option<SizeListener>,
}

impl<I> std::fmt::Debug for LayeredCanvas<I> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LayeredCanvas")
            .field("layer_count", &self.layers.len())
            .field("leaders", &self.leaders)
            .field("scale", &self.scale)
            .field("max_size", &self.max_size)
            .field("size_locked", &self.size_locked)
            .field("size_mode", &self.size_mode)
            .field("auto_size", &self.auto_size)
            .field("current_size", &self.current_size)
            .field("has_listener", &self.listener.is_some())
            .finish()
    }
}

impl<I: LayerImage> Default for LayeredCanvas<I> {
    fn default() -> Self {
        Self::new()
    }
}

impl<I: LayerImage> LayeredCanvas<I> {
    /// Empty canvas with default settings.
    pub fn new() -> Self {
        Self::from_parts(CanvasSettings::default())
    }

    /// Empty canvas configured by validated `settings`.
    pub fn with_settings(settings: CanvasSettings) -> LayerboxResult<Self> {
        settings.validate()?;
        Ok(Self::from_parts(settings))
    }

    fn from_parts(settings: CanvasSettings) -> Self {
        Self {
            layers: LayerStack::default(),
            leaders: LeaderTracker::default(),
            scale: settings.scale.max(1),
            max_size: settings.max_size,
            size_locked: false,
            size_mode: settings.size_mode,
            auto_size: settings.auto_size,
            current_size: IntSize::ZERO,
            display_size: IntSize::ZERO,
            listener: None,
        }
    }

    /// Register the host callback fired after each size-changing recomputation.
    ///
    /// Replaces any previous listener.
    pub fn on_size_changed(&mut self, listener: impl FnMut(SizeChange) + 'static) {
        self.listener = Some(Box::new(listener));
    }

    // -- Layer stack --

    /// Number of layers in the stack, shown or not.
    pub fn layer_count(&self) -> usize {
        self.layers.len()
    }

    /// Layer behind `id`, if it is still in the stack.
    pub fn layer(&self, id: LayerId) -> Option<&Layer<I>> {
        self.layers.get(id)
    }

    /// Handle of the layer at stack position `index` (0 is bottom-most).
    pub fn layer_at(&self, index: usize) -> Option<LayerId> {
        self.layers.id_at(index)
    }

    /// Handles in paint order, bottom to top.
    pub fn layer_ids(&self) -> &[LayerId] {
        self.layers.ids()
    }

    /// Layers in paint order, bottom to top.
    pub fn layers(&self) -> impl Iterator<Item = (LayerId, &Layer<I>)> + '_ {
        self.layers.iter()
    }

    /// Put `layer` on top of the stack.
    pub fn add_layer(&mut self, layer: Layer<I>) -> LayerId {
        let id = self.layers.push(layer);
        if !self.size_locked {
            self.leaders.layer_added(id, &self.layers);
        }
        self.update_canvas_size();
        id
    }

    /// Put a visible layer showing `image` at `location` on top of the stack.
    pub fn add_image(&mut self, image: I, location: IntPoint) -> LayerId {
        self.add_layer(Layer::new(Some(image), location))
    }

    /// Put an empty layer on top of the stack, ready to receive an image.
    pub fn create_layer(&mut self) -> LayerId {
        self.add_layer(Layer::empty())
    }

    /// Append `count` empty layers and return their handles.
    pub fn add_layers(&mut self, count: usize) -> Vec<LayerId> {
        (0..count).map(|_| self.create_layer()).collect()
    }

    /// Take a layer out of the stack.
    ///
    /// Returns [`LayerboxError::LayerNotFound`] for a handle that is not (or no
    /// longer) part of this canvas; the canvas is left untouched in that case.
    pub fn remove_layer(&mut self, id: LayerId) -> LayerboxResult<Layer<I>> {
        let layer = self
            .layers
            .remove(id)
            .ok_or(LayerboxError::LayerNotFound(id))?;
        if !self.size_locked {
            self.leaders.layer_removed(id, &self.layers);
        }
        self.update_canvas_size();
        Ok(layer)
    }

    /// Take the layer at stack position `index` out of the stack.
    pub fn remove_layer_at(&mut self, index: usize) -> LayerboxResult<Layer<I>> {
        let id = self.layers.id_at(index).ok_or_else(|| {
            LayerboxError::validation(format!(
                "layer index {index} out of range for {} layers",
                self.layers.len()
            ))
        })?;
        self.remove_layer(id)
    }

    // -- Layer mutation --

    /// Replace a layer's image; the previous image is released.
    ///
    /// Returns `Ok(false)` only when both old and new image are absent.
    pub fn set_layer_image(&mut self, id: LayerId, image: Option<I>) -> LayerboxResult<bool> {
        let layer = self.layers.get(id).ok_or(LayerboxError::LayerNotFound(id))?;
        if layer.image().is_none() && image.is_none() {
            return Ok(false);
        }
        let previous = self.mutate_layer(id, |layer| layer.replace_image(image));
        drop(previous);
        Ok(true)
    }

    /// Move a layer; `Ok(false)` when it already sits at `location`.
    pub fn set_layer_location(&mut self, id: LayerId, location: IntPoint) -> LayerboxResult<bool> {
        let layer = self.layers.get(id).ok_or(LayerboxError::LayerNotFound(id))?;
        if layer.location() == location {
            return Ok(false);
        }
        self.mutate_layer(id, |layer| layer.set_location(location));
        Ok(true)
    }

    /// Set a layer's visibility flag; `Ok(false)` when it already matches.
    pub fn set_layer_visible(&mut self, id: LayerId, visible: bool) -> LayerboxResult<bool> {
        let layer = self.layers.get(id).ok_or(LayerboxError::LayerNotFound(id))?;
        if layer.is_visible() == visible {
            return Ok(false);
        }
        self.mutate_layer(id, |layer| layer.set_visible(visible));
        Ok(true)
    }

    /// Two-phase mutation: leaders see the layer before and after `f`, then
    /// the canvas size is recomputed. `id` must be live.
    fn mutate_layer<R>(&mut self, id: LayerId, f: impl FnOnce(&mut Layer<I>) -> R) -> Option<R> {
        let track = !self.size_locked;
        let pending = match self.layers.get(id) {
            Some(layer) if track => Some(self.leaders.layer_will_change(id, layer)),
            Some(_) => None,
            None => return None,
        };
        let out = self.layers.get_mut(id).map(f);
        if let Some(pending) = pending {
            self.leaders.layer_changed(id, pending, &self.layers);
        }
        self.update_canvas_size();
        out
    }

    // -- Scale --

    /// Display multiplier.
    pub fn scale(&self) -> u32 {
        self.scale
    }

    /// Change the display multiplier. `0` is ignored.
    pub fn set_scale(&mut self, scale: u32) {
        if scale == 0 || scale == self.scale {
            return;
        }
        self.scale = scale;
        self.update_canvas_size();
    }

    // -- Leaders --

    /// Layer whose extent currently decides the canvas size on `axis`.
    ///
    /// While the size is locked tracking is suspended; a leader that was
    /// removed or hidden in the meantime reads as `None`.
    pub fn leader(&self, axis: Axis) -> Option<LayerId> {
        self.leaders
            .leader(axis)
            .filter(|&id| self.layers.get(id).is_some_and(Layer::is_shown))
    }

    /// Total width of the width leader, or 0 without one.
    pub fn leader_width(&self) -> i32 {
        self.leaders.extent(Axis::Width, &self.layers)
    }

    /// Total height of the height leader, or 0 without one.
    pub fn leader_height(&self) -> i32 {
        self.leaders.extent(Axis::Height, &self.layers)
    }

    // -- Size policy --

    /// Authoritative canvas size in canvas units.
    pub fn current_size(&self) -> IntSize {
        self.current_size
    }

    /// Canvas size in display pixels.
    pub fn display_size(&self) -> IntSize {
        self.display_size
    }

    /// Size cap in canvas units; `0` on an axis means uncapped.
    pub fn max_size(&self) -> IntSize {
        self.max_size
    }

    /// Cap both axes. Pass `0` to leave an axis uncapped.
    pub fn set_max_size(&mut self, width: i32, height: i32) {
        self.max_size = IntSize::new(width.max(0), height.max(0));
        self.update_canvas_size();
    }

    /// Cap the width only.
    pub fn set_max_width(&mut self, width: i32) {
        self.set_max_size(width, self.max_size.height);
    }

    /// Cap the height only.
    pub fn set_max_height(&mut self, height: i32) {
        self.set_max_size(self.max_size.width, height);
    }

    /// Whether leader tracking is suspended and the size frozen.
    pub fn is_size_locked(&self) -> bool {
        self.size_locked
    }

    /// Freeze or release the canvas size without touching the cap.
    ///
    /// Releasing rescans every layer, since changes made while locked were
    /// not tracked.
    pub fn set_size_locked(&mut self, locked: bool) {
        if self.size_locked == locked {
            return;
        }
        self.size_locked = locked;
        tracing::debug!(locked, size = ?self.current_size, "canvas size lock changed");
        if !locked {
            self.leaders.rescan(&self.layers);
        }
        self.update_canvas_size();
    }

    /// Freeze the canvas at its current size; scale changes still apply.
    pub fn lock_size(&mut self) {
        self.max_size = self.current_size;
        self.set_size_locked(true);
    }

    /// Drop the cap and resume auto-sizing from a full rescan.
    pub fn unlock_size(&mut self) {
        self.max_size = IntSize::ZERO;
        self.size_locked = false;
        tracing::debug!("canvas size unlocked");
        self.leaders.rescan(&self.layers);
        self.update_canvas_size();
    }

    /// Grow/shrink policy.
    pub fn size_mode(&self) -> SizeMode {
        self.size_mode
    }

    /// Change the grow/shrink policy and recompute.
    pub fn set_size_mode(&mut self, mode: SizeMode) {
        if self.size_mode == mode {
            return;
        }
        self.size_mode = mode;
        self.update_canvas_size();
    }

    /// Whether the canvas follows its layers at all.
    pub fn auto_size(&self) -> bool {
        self.auto_size
    }

    /// Switch auto-sizing; turning it on recomputes immediately.
    pub fn set_auto_size(&mut self, auto_size: bool) {
        if self.auto_size == auto_size {
            return;
        }
        self.auto_size = auto_size;
        self.update_canvas_size();
    }

    fn update_canvas_size(&mut self) {
        if !self.auto_size {
            return;
        }
        let canvas = resolve_canvas_size(SizeInputs {
            leader: IntSize::new(self.leader_width(), self.leader_height()),
            max_size: self.max_size,
            locked: self.size_locked,
            mode: self.size_mode,
            previous: self.current_size,
        });
        let display = canvas.scaled(self.scale);
        if canvas == self.current_size && display == self.display_size {
            return;
        }
        self.current_size = canvas;
        self.display_size = display;
        tracing::debug!(canvas = ?canvas, display_size = ?self.display_size, "canvas size changed");
        if let Some(listener) = self.listener.as_mut() {
            listener(SizeChange { canvas, display });
        }
    }

    // -- Painting --

    /// Map a display-space point to canvas space (truncating division).
    pub fn point_to_image(&self, point: IntPoint) -> IntPoint {
        let scale = i32::try_from(self.scale).unwrap_or(i32::MAX);
        IntPoint::new(point.x / scale, point.y / scale)
    }

    /// Redraw the display-space `dirty` rectangle onto `surface`.
    #[tracing::instrument(skip(self, surface))]
    pub fn paint<S>(&self, surface: &mut S, dirty: IntRect) -> LayerboxResult<PaintStats>
    where
        S: DrawSurface<I> + ?Sized,
    {
        paint_layers(self.layers.iter().map(|(_, l)| l), self.scale, dirty, surface)
    }

    /// Compose every layer at canvas resolution (scale 1) onto `surface`.
    pub fn flatten_into<S>(&self, surface: &mut S) -> LayerboxResult<PaintStats>
    where
        S: DrawSurface<I> + ?Sized,
    {
        paint_layers(
            self.layers.iter().map(|(_, l)| l),
            1,
            IntRect::from_size(self.current_size),
            surface,
        )
    }
}

impl LayeredCanvas<RasterImage> {
    /// Compose the canvas into one image of exactly [`current_size`](Self::current_size).
    #[tracing::instrument(skip(self))]
    pub fn flatten(&self) -> LayerboxResult<RasterImage> {
        let size = self.current_size;
        let mut surface = CpuSurface::new(
            u32::try_from(size.width).unwrap_or(0),
            u32::try_from(size.height).unwrap_or(0),
        )?;
        self.flatten_into(&mut surface)?;
        Ok(surface.into_image())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/canvas/layered.rs"]
mod tests;
