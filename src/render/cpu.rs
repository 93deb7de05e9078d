use crate::{
    assets::raster::{RasterImage, premul_px},
    foundation::{
        core::IntRect,
        error::{LayerboxError, LayerboxResult},
    },
    render::surface::{DrawSurface, PixelOffset, Sampling},
};

/// In-memory premultiplied RGBA8 draw target.
///
/// Blits are clipped to the surface bounds and composited source-over.
#[derive(Clone, Debug)]
pub struct CpuSurface {
    width: u32,
    height: u32,
    data: Vec<u8>,
    sampling: Sampling,
}

impl CpuSurface {
    /// Transparent surface of the given size.
    ///
    /// Fails when the pixel buffer length does not fit in `usize`.
    pub fn new(width: u32, height: u32) -> LayerboxResult<Self> {
        let len = (width as usize)
            .checked_mul(height as usize)
            .and_then(|v| v.checked_mul(4))
            .ok_or_else(|| {
                LayerboxError::render(format!("surface size overflow for {width}x{height}"))
            })?;
        Ok(Self {
            width,
            height,
            data: vec![0; len],
            sampling: Sampling::default(),
        })
    }

    /// Width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Sampling mode the next blit will use.
    pub fn sampling(&self) -> Sampling {
        self.sampling
    }

    /// Fill the whole surface with a straight-alpha colour.
    pub fn clear(&mut self, rgba: [u8; 4]) {
        let px = premul_px(rgba);
        for d in self.data.chunks_exact_mut(4) {
            d.copy_from_slice(&px);
        }
    }

    /// Premultiplied pixel at `(x, y)`, or `None` outside the surface.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let idx = ((y as usize) * (self.width as usize) + (x as usize)) * 4;
        let p = &self.data[idx..idx + 4];
        Some([p[0], p[1], p[2], p[3]])
    }

    /// Hand the pixels over as an image.
    pub fn into_image(self) -> RasterImage {
        RasterImage {
            width: self.width,
            height: self.height,
            rgba8_premul: std::sync::Arc::new(self.data),
        }
    }
}

impl DrawSurface<RasterImage> for CpuSurface {
    fn set_sampling(&mut self, sampling: Sampling) {
        self.sampling = sampling;
    }

    fn draw_image(
        &mut self,
        image: &RasterImage,
        dest: IntRect,
        src: IntRect,
    ) -> LayerboxResult<()> {
        let expected = (image.width as usize) * (image.height as usize) * 4;
        if image.rgba8_premul.len() != expected {
            return Err(LayerboxError::render(format!(
                "image buffer holds {} bytes, {}x{} needs {expected}",
                image.rgba8_premul.len(),
                image.width,
                image.height
            )));
        }
        if dest.is_empty() || src.is_empty() {
            return Ok(());
        }

        let surface_w = i64::from(self.width);
        let surface_h = i64::from(self.height);
        let image_w = i64::from(image.width);
        let image_h = i64::from(image.height);
        let offset = self.sampling.pixel_offset;

        let y0 = i64::from(dest.y).max(0);
        let y1 = i64::from(dest.bottom()).min(surface_h);
        let x0 = i64::from(dest.x).max(0);
        let x1 = i64::from(dest.right()).min(surface_w);

        for dy in y0..y1 {
            let sy = i64::from(src.y)
                + sample(dy - i64::from(dest.y), src.height, dest.height, offset);
            if sy < 0 || sy >= image_h {
                continue;
            }
            for dx in x0..x1 {
                let sx = i64::from(src.x)
                    + sample(dx - i64::from(dest.x), src.width, dest.width, offset);
                if sx < 0 || sx >= image_w {
                    continue;
                }
                let si = ((sy * image_w + sx) * 4) as usize;
                let di = ((dy * surface_w + dx) * 4) as usize;
                let s = &image.rgba8_premul[si..si + 4];
                let d = &mut self.data[di..di + 4];
                let out = over([d[0], d[1], d[2], d[3]], [s[0], s[1], s[2], s[3]]);
                d.copy_from_slice(&out);
            }
        }
        Ok(())
    }
}

/// Source offset for destination offset `t` when `src_len` pixels stretch over `dest_len`.
fn sample(t: i64, src_len: i32, dest_len: i32, offset: PixelOffset) -> i64 {
    let s = i64::from(src_len);
    let d = i64::from(dest_len);
    match offset {
        PixelOffset::Half => ((2 * t + 1) * s) / (2 * d),
        PixelOffset::None => (t * s) / d,
    }
}

/// Premultiplied source-over.
fn over(dst: [u8; 4], src: [u8; 4]) -> [u8; 4] {
    if src[3] == 0 {
        return dst;
    }
    let inv = 255u16 - u16::from(src[3]);
    std::array::from_fn(|i| src[i].saturating_add(mul_div255(u16::from(dst[i]), inv)))
}

fn mul_div255(x: u16, y: u16) -> u8 {
    (((u32::from(x) * u32::from(y)) + 127) / 255) as u8
}

#[cfg(test)]
#[path = "../../tests/unit/render/cpu.rs"]
mod tests;
