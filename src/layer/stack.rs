use super::{id::LayerId, model::Layer};

struct Slot<I> {
    generation: u32,
    layer: Option<Layer<I>>,
}

/// Slot storage plus paint order for the canvas's layers.
///
/// Slots are recycled through a free list; paint order is a separate list of
/// handles so removal keeps every other layer's relative order.
pub(crate) struct LayerStack<I> {
    slots: Vec<Slot<I>>,
    free_list: Vec<u32>,
    order: Vec<LayerId>,
}

impl<I> Default for LayerStack<I> {
    fn default() -> Self {
        Self {
            slots: Vec::new(),
            free_list: Vec::new(),
            order: Vec::new(),
        }
    }
}

impl<I> LayerStack<I> {
    /// Append `layer` on top of the stack.
    pub(crate) fn push(&mut self, layer: Layer<I>) -> LayerId {
        let id = if let Some(idx) = self.free_list.pop() {
            let slot = &mut self.slots[idx as usize];
            slot.layer = Some(layer);
            LayerId::new(idx, slot.generation)
        } else {
            let idx = u32::try_from(self.slots.len()).unwrap_or(u32::MAX);
            self.slots.push(Slot {
                generation: 0,
                layer: Some(layer),
            });
            LayerId::new(idx, 0)
        };
        self.order.push(id);
        id
    }

    /// Take the layer out of the stack, invalidating its handle.
    pub(crate) fn remove(&mut self, id: LayerId) -> Option<Layer<I>> {
        let slot = self.slots.get_mut(id.idx as usize)?;
        if slot.generation != id.generation {
            return None;
        }
        let layer = slot.layer.take()?;
        slot.generation = slot.generation.wrapping_add(1);
        self.free_list.push(id.idx);
        self.order.retain(|&other| other != id);
        Some(layer)
    }

    pub(crate) fn get(&self, id: LayerId) -> Option<&Layer<I>> {
        let slot = self.slots.get(id.idx as usize)?;
        if slot.generation != id.generation {
            return None;
        }
        slot.layer.as_ref()
    }

    pub(crate) fn get_mut(&mut self, id: LayerId) -> Option<&mut Layer<I>> {
        let slot = self.slots.get_mut(id.idx as usize)?;
        if slot.generation != id.generation {
            return None;
        }
        slot.layer.as_mut()
    }

    pub(crate) fn len(&self) -> usize {
        self.order.len()
    }

    /// Handle at stack position `index` (0 is bottom-most).
    pub(crate) fn id_at(&self, index: usize) -> Option<LayerId> {
        self.order.get(index).copied()
    }

    pub(crate) fn ids(&self) -> &[LayerId] {
        &self.order
    }

    /// Layers in paint order, bottom to top.
    pub(crate) fn iter(&self) -> impl Iterator<Item = (LayerId, &Layer<I>)> + '_ {
        self.order
            .iter()
            .filter_map(|&id| self.get(id).map(|layer| (id, layer)))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/layer/stack.rs"]
mod tests;
