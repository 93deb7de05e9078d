use std::fmt;

/// Handle to a layer owned by a [`LayeredCanvas`](crate::LayeredCanvas).
///
/// Holds a slot index plus a generation counter; the generation is bumped when
/// the layer is removed, so stale handles fail lookups instead of reaching a
/// different layer that reused the slot.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct LayerId {
    pub(crate) idx: u32,
    pub(crate) generation: u32,
}

impl LayerId {
    pub(crate) const fn new(idx: u32, generation: u32) -> Self {
        Self { idx, generation }
    }

    /// Raw slot index (diagnostics only; not the stack position).
    pub const fn index(self) -> u32 {
        self.idx
    }

    /// Generation counter of the slot when this handle was issued.
    pub const fn generation(self) -> u32 {
        self.generation
    }
}

impl fmt::Debug for LayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LayerId({}@gen{})", self.idx, self.generation)
    }
}
