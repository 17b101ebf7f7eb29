//! Raster surfaces the renderer paints onto.

use image::{Rgba, RgbaImage};
use pixel_wind_core::Rgb;

/// How a rectangle is filled.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Paint {
    /// A flat color with its own alpha in `[0, 1]`.
    Solid(Rgb, f64),
    /// A two-stop gradient running from `y0` (top color) to `y1` (bottom color).
    VerticalGradient { y0: f64, y1: f64, top: Rgb, bottom: Rgb },
}

impl Paint {
    /// Opaque flat color.
    pub const fn solid(color: Rgb) -> Self {
        Paint::Solid(color, 1.0)
    }

    /// Color and alpha at a given vertical position.
    fn sample(&self, y: f64) -> (Rgb, f64) {
        match *self {
            Paint::Solid(color, alpha) => (color, alpha),
            Paint::VerticalGradient { y0, y1, top, bottom } => {
                let span = y1 - y0;
                let t = if span.abs() > f64::EPSILON {
                    (y - y0) / span
                } else {
                    0.0
                };
                (top.lerp(bottom, t), 1.0)
            }
        }
    }
}

/// A drawing target with canvas-like semantics.
pub trait Surface {
    fn width(&self) -> u32;

    fn height(&self) -> u32;

    /// Reallocate to new dimensions; contents are cleared.
    fn resize(&mut self, width: u32, height: u32);

    /// Reset every pixel to transparent black.
    fn clear(&mut self);

    /// Alpha multiplied into every following fill until changed.
    fn set_global_alpha(&mut self, alpha: f64);

    /// Fill an axis-aligned rectangle in logical pixel coordinates.
    fn fill_rect(&mut self, x: f64, y: f64, w: f64, h: f64, paint: &Paint);
}

/// In-memory RGBA8 surface.
///
/// A pixel is covered by a rectangle when its center lies inside it, and
/// fills blend source-over onto what is already there.
#[derive(Debug, Clone, PartialEq)]
pub struct PixelSurface {
    width: u32,
    height: u32,
    pixels: Vec<[u8; 4]>,
    global_alpha: f64,
}

impl PixelSurface {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![[0; 4]; width as usize * height as usize],
            global_alpha: 1.0,
        }
    }

    /// RGBA value at a pixel, `None` outside the surface.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.pixels.get(self.offset(x, y)).copied()
    }

    /// Opaque color at a pixel, ignoring alpha.
    pub fn rgb(&self, x: u32, y: u32) -> Option<Rgb> {
        self.pixel(x, y).map(|[r, g, b, _]| Rgb::new(r, g, b))
    }

    pub fn to_rgba_image(&self) -> RgbaImage {
        RgbaImage::from_fn(self.width, self.height, |x, y| {
            Rgba(self.pixels[self.offset(x, y)])
        })
    }

    fn offset(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }

    /// Pixel indices whose centers fall inside `[start, start + len)`.
    fn covered(start: f64, len: f64, limit: u32) -> std::ops::Range<u32> {
        if !(start.is_finite() && len.is_finite()) || len <= 0.0 {
            return 0..0;
        }
        let lo = (start - 0.5).ceil().clamp(0.0, limit as f64) as u32;
        let hi = (start + len - 0.5).ceil().clamp(0.0, limit as f64) as u32;
        lo..hi.max(lo)
    }
}

impl Surface for PixelSurface {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn resize(&mut self, width: u32, height: u32) {
        *self = Self::new(width, height);
    }

    fn clear(&mut self) {
        self.pixels.fill([0; 4]);
    }

    fn set_global_alpha(&mut self, alpha: f64) {
        self.global_alpha = alpha.clamp(0.0, 1.0);
    }

    fn fill_rect(&mut self, x: f64, y: f64, w: f64, h: f64, paint: &Paint) {
        let cols = Self::covered(x, w, self.width);
        for py in Self::covered(y, h, self.height) {
            let (color, alpha) = paint.sample(py as f64 + 0.5);
            let alpha = (alpha * self.global_alpha).clamp(0.0, 1.0);
            if alpha <= 0.0 {
                continue;
            }
            for px in cols.clone() {
                let offset = self.offset(px, py);
                self.pixels[offset] = blend(self.pixels[offset], color, alpha);
            }
        }
    }
}

/// Source-over compositing of a straight-alpha color onto a straight-alpha pixel.
fn blend(dst: [u8; 4], src: Rgb, src_alpha: f64) -> [u8; 4] {
    let dst_alpha = dst[3] as f64 / 255.0;
    let out_alpha = src_alpha + dst_alpha * (1.0 - src_alpha);
    if out_alpha <= 0.0 {
        return [0; 4];
    }
    let channel = |s: u8, d: u8| -> u8 {
        let value = (s as f64 * src_alpha + d as f64 * dst_alpha * (1.0 - src_alpha)) / out_alpha;
        value.round().clamp(0.0, 255.0) as u8
    };
    [
        channel(src.r, dst[0]),
        channel(src.g, dst[1]),
        channel(src.b, dst[2]),
        (out_alpha * 255.0).round() as u8,
    ]
}
