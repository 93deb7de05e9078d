//! Shared fixtures for unit tests.

use std::{cell::Cell, rc::Rc};

use crate::assets::raster::LayerImage;

/// Size-only image; the compositor never needs its pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct TestImage {
    pub(crate) w: u32,
    pub(crate) h: u32,
}

pub(crate) fn img(w: u32, h: u32) -> Option<TestImage> {
    Some(TestImage { w, h })
}

impl LayerImage for TestImage {
    fn width(&self) -> u32 {
        self.w
    }

    fn height(&self) -> u32 {
        self.h
    }
}

/// Image that counts how many instances have been released.
#[derive(Debug)]
pub(crate) struct CountedImage {
    pub(crate) w: u32,
    pub(crate) h: u32,
    pub(crate) released: Rc<Cell<usize>>,
}

impl LayerImage for CountedImage {
    fn width(&self) -> u32 {
        self.w
    }

    fn height(&self) -> u32 {
        self.h
    }
}

impl Drop for CountedImage {
    fn drop(&mut self) {
        self.released.set(self.released.get() + 1);
    }
}

/// splitmix64 step; deterministic operation streams for oracle tests.
pub(crate) fn mix64(mut z: u64) -> u64 {
    z = z.wrapping_add(0x9E37_79B9_7F4A_7C15);
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}
