//! Stacked layers and their stable handles.
//!
//! A [`Layer`] knows its image and where it sits in canvas space; it knows
//! nothing about its siblings. The canvas owns all layers in a stack whose
//! order is paint order and hands out generational [`LayerId`] handles, so a
//! handle to a removed layer can never alias a later one.

mod id;
mod model;
mod stack;

pub use id::LayerId;
pub use model::{Axis, Layer};
pub(crate) use stack::LayerStack;
