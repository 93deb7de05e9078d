use std::sync::Arc;

use anyhow::Context;

use crate::foundation::{
    core::IntSize,
    error::{LayerboxError, LayerboxResult},
};

/// Opaque raster resource a layer can display.
///
/// The compositor only needs the pixel extent; pixels are read by whichever
/// [`DrawSurface`](crate::DrawSurface) knows the concrete type. Releasing the
/// resource is tied to `Drop`: a layer drops its previous image when the image
/// is replaced and drops its current image when the layer is removed.
pub trait LayerImage {
    /// Width in pixels.
    fn width(&self) -> u32;

    /// Height in pixels.
    fn height(&self) -> u32;

    /// Pixel extent as a canvas-space size.
    fn size(&self) -> IntSize {
        IntSize::new(
            i32::try_from(self.width()).unwrap_or(i32::MAX),
            i32::try_from(self.height()).unwrap_or(i32::MAX),
        )
    }
}

impl<T: LayerImage + ?Sized> LayerImage for Arc<T> {
    fn width(&self) -> u32 {
        (**self).width()
    }

    fn height(&self) -> u32 {
        (**self).height()
    }
}

/// Raster image in premultiplied RGBA8 form.
///
/// Pixel storage is shared, so cloning is cheap and several layers may show
/// the same pixels.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RasterImage {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Pixel bytes in row-major premultiplied RGBA8.
    pub rgba8_premul: Arc<Vec<u8>>,
}

impl RasterImage {
    /// Wrap premultiplied RGBA8 bytes.
    pub fn from_premul_bytes(width: u32, height: u32, bytes: Vec<u8>) -> LayerboxResult<Self> {
        let expected = (width as usize)
            .checked_mul(height as usize)
            .and_then(|v| v.checked_mul(4))
            .ok_or_else(|| LayerboxError::validation("raster image size overflow"))?;
        if bytes.len() != expected {
            return Err(LayerboxError::validation(format!(
                "raster image expects {expected} bytes for {width}x{height}, got {}",
                bytes.len()
            )));
        }
        Ok(Self {
            width,
            height,
            rgba8_premul: Arc::new(bytes),
        })
    }

    /// Fully transparent image.
    pub fn transparent(width: u32, height: u32) -> Self {
        Self::solid(width, height, [0, 0, 0, 0])
    }

    /// Image filled with one straight-alpha RGBA8 colour.
    pub fn solid(width: u32, height: u32, rgba: [u8; 4]) -> Self {
        let px = premul_px(rgba);
        let len = (width as usize) * (height as usize);
        let mut bytes = Vec::with_capacity(len * 4);
        for _ in 0..len {
            bytes.extend_from_slice(&px);
        }
        Self {
            width,
            height,
            rgba8_premul: Arc::new(bytes),
        }
    }

    /// Convert a straight-alpha `image` buffer to premultiplied form.
    pub fn from_rgba8(rgba: image::RgbaImage) -> Self {
        let (width, height) = rgba.dimensions();
        let mut bytes = rgba.into_raw();
        premultiply_rgba8_in_place(&mut bytes);
        Self {
            width,
            height,
            rgba8_premul: Arc::new(bytes),
        }
    }

    /// Decode encoded image bytes (any format enabled on the `image` crate).
    pub fn decode(bytes: &[u8]) -> LayerboxResult<Self> {
        let dyn_img = image::load_from_memory(bytes).context("decode image from memory")?;
        Ok(Self::from_rgba8(dyn_img.to_rgba8()))
    }

    /// Premultiplied pixel at `(x, y)`, or `None` outside the image.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let idx = ((y as usize) * (self.width as usize) + (x as usize)) * 4;
        let p = &self.rgba8_premul[idx..idx + 4];
        Some([p[0], p[1], p[2], p[3]])
    }

    /// Convert back to a straight-alpha `image` buffer (for saving or display).
    pub fn to_rgba8(&self) -> LayerboxResult<image::RgbaImage> {
        let mut bytes = self.rgba8_premul.as_ref().clone();
        unpremultiply_rgba8_in_place(&mut bytes);
        image::RgbaImage::from_raw(self.width, self.height, bytes)
            .ok_or_else(|| LayerboxError::validation("raster buffer does not match dimensions"))
    }
}

impl LayerImage for RasterImage {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }
}

pub(crate) fn premul_px(rgba: [u8; 4]) -> [u8; 4] {
    let a = u16::from(rgba[3]);
    let mul = |c: u8| ((u16::from(c) * a + 127) / 255) as u8;
    [mul(rgba[0]), mul(rgba[1]), mul(rgba[2]), rgba[3]]
}

fn premultiply_rgba8_in_place(rgba: &mut [u8]) {
    for px in rgba.chunks_exact_mut(4) {
        let out = premul_px([px[0], px[1], px[2], px[3]]);
        px.copy_from_slice(&out);
    }
}

fn unpremultiply_rgba8_in_place(rgba: &mut [u8]) {
    for px in rgba.chunks_exact_mut(4) {
        let a = u16::from(px[3]);
        if a == 0 {
            px[0] = 0;
            px[1] = 0;
            px[2] = 0;
            continue;
        }
        for c in &mut px[..3] {
            *c = ((u16::from(*c) * 255 + a / 2) / a).min(255) as u8;
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/assets/raster.rs"]
mod tests;
