//! Incremental tracking of the shown layer with the largest extent per axis.
//!
//! Growth is cheap: a layer that appears or moves while shown is compared
//! against the current leader alone. Only losing a layer that might be the
//! leader (hide, removal, or the leader itself changing geometry) pays for a
//! full scan of the stack.

use crate::{
    assets::raster::LayerImage,
    layer::{Axis, Layer, LayerId, LayerStack},
};

/// State captured just before a layer mutation.
#[derive(Clone, Copy, Debug)]
pub(crate) struct PendingChange {
    was_shown: bool,
    invalidated: [bool; 2],
}

/// Width and height leaders; each is `None` or a handle into the stack.
///
/// The tracker never owns layers. A leader whose handle has gone stale or
/// whose layer is no longer shown reads as extent 0.
#[derive(Clone, Copy, Debug, Default)]
pub(crate) struct LeaderTracker {
    leaders: [Option<LayerId>; 2],
}

fn slot(axis: Axis) -> usize {
    match axis {
        Axis::Width => 0,
        Axis::Height => 1,
    }
}

impl LeaderTracker {
    pub(crate) fn leader(&self, axis: Axis) -> Option<LayerId> {
        self.leaders[slot(axis)]
    }

    /// Extent of the current leader on `axis`, or 0 when there is none.
    pub(crate) fn extent<I: LayerImage>(&self, axis: Axis, stack: &LayerStack<I>) -> i32 {
        self.leader(axis)
            .and_then(|id| stack.get(id))
            .filter(|layer| layer.is_shown())
            .map_or(0, |layer| layer.extent(axis))
    }

    /// Forget both leaders and rescan the whole stack.
    pub(crate) fn rescan<I: LayerImage>(&mut self, stack: &LayerStack<I>) {
        for axis in Axis::BOTH {
            self.rescan_axis(axis, stack);
        }
    }

    fn rescan_axis<I: LayerImage>(&mut self, axis: Axis, stack: &LayerStack<I>) {
        let mut best: Option<(LayerId, i32)> = None;
        for (id, layer) in stack.iter() {
            if !layer.is_shown() {
                continue;
            }
            let extent = layer.extent(axis);
            // Strictly greater: on ties the lowest stack position keeps the lead.
            if extent > best.map_or(0, |(_, e)| e) {
                best = Some((id, extent));
            }
        }
        self.leaders[slot(axis)] = best.map(|(id, _)| id);
        tracing::trace!(?axis, leader = ?self.leaders[slot(axis)], "leader rescan");
    }

    /// Compare a single shown layer against the current leaders.
    pub(crate) fn offer<I: LayerImage>(
        &mut self,
        id: LayerId,
        layer: &Layer<I>,
        stack: &LayerStack<I>,
    ) {
        if !layer.is_shown() {
            return;
        }
        for axis in Axis::BOTH {
            self.offer_axis(axis, id, layer, stack);
        }
    }

    fn offer_axis<I: LayerImage>(
        &mut self,
        axis: Axis,
        id: LayerId,
        layer: &Layer<I>,
        stack: &LayerStack<I>,
    ) {
        if layer.extent(axis) > self.extent(axis, stack) {
            self.leaders[slot(axis)] = Some(id);
            tracing::trace!(?axis, leader = ?id, extent = layer.extent(axis), "new leader");
        }
    }

    /// A layer was appended to the stack.
    pub(crate) fn layer_added<I: LayerImage>(&mut self, id: LayerId, stack: &LayerStack<I>) {
        if let Some(layer) = stack.get(id) {
            self.offer(id, layer, stack);
        }
    }

    /// A layer left the stack; rescan every axis it was leading.
    pub(crate) fn layer_removed<I: LayerImage>(&mut self, id: LayerId, stack: &LayerStack<I>) {
        for axis in Axis::BOTH {
            if self.leader(axis) == Some(id) {
                self.rescan_axis(axis, stack);
            }
        }
    }

    /// "About to change": called with the layer's prior state still in place.
    ///
    /// Any axis the layer currently leads is invalidated, since its new
    /// extent may be smaller than some other layer's.
    pub(crate) fn layer_will_change<I: LayerImage>(
        &mut self,
        id: LayerId,
        layer: &Layer<I>,
    ) -> PendingChange {
        let was_shown = layer.is_shown();
        let mut invalidated = [false; 2];
        if was_shown {
            for axis in Axis::BOTH {
                if self.leader(axis) == Some(id) {
                    self.leaders[slot(axis)] = None;
                    invalidated[slot(axis)] = true;
                }
            }
        }
        PendingChange {
            was_shown,
            invalidated,
        }
    }

    /// "Changed": called once the new state is in effect.
    pub(crate) fn layer_changed<I: LayerImage>(
        &mut self,
        id: LayerId,
        pending: PendingChange,
        stack: &LayerStack<I>,
    ) {
        let Some(layer) = stack.get(id) else {
            return;
        };
        let is_shown = layer.is_shown();
        match (pending.was_shown, is_shown) {
            // Hidden layers are inert.
            (false, false) => {}
            (true, false) => self.rescan(stack),
            (false, true) => self.offer(id, layer, stack),
            (true, true) => {
                for axis in Axis::BOTH {
                    if pending.invalidated[slot(axis)] {
                        self.rescan_axis(axis, stack);
                    } else {
                        self.offer_axis(axis, id, layer, stack);
                    }
                }
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/canvas/leader.rs"]
mod tests;
