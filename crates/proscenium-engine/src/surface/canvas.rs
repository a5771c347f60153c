use std::path::Path;

use anyhow::{Context, Result};
use image::imageops::{self, FilterType};
use image::{Rgba, RgbaImage};

use crate::coords::Rect;

use super::Surface;

const TRANSPARENT: Rgba<u8> = Rgba([0, 0, 0, 0]);

/// Software surface backed by an RGBA pixel buffer.
///
/// Blits use source-over alpha compositing. Destination origins are rounded
/// to the nearest pixel.
#[derive(Debug, Clone)]
pub struct Canvas {
    pixels: RgbaImage,
}

impl Canvas {
    /// Creates a fully transparent canvas.
    pub fn new(width: u32, height: u32) -> Self {
        Self { pixels: RgbaImage::from_pixel(width, height, TRANSPARENT) }
    }

    /// Canvas the size of the logical stage (480×360).
    pub fn stage() -> Self {
        Self::new(480, 360)
    }

    #[inline]
    pub fn pixels(&self) -> &RgbaImage {
        &self.pixels
    }

    #[inline]
    pub fn into_image(self) -> RgbaImage {
        self.pixels
    }

    /// Writes the current contents to `path`; the format follows the extension.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        self.pixels
            .save(path)
            .with_context(|| format!("failed to write canvas to {}", path.display()))
    }
}

impl Surface for Canvas {
    fn width(&self) -> u32 {
        self.pixels.width()
    }

    fn height(&self) -> u32 {
        self.pixels.height()
    }

    fn clear_rect(&mut self, rect: Rect) {
        let Some(r) = rect.intersect(self.bounds()) else {
            return;
        };

        let x0 = r.origin.x.floor() as u32;
        let y0 = r.origin.y.floor() as u32;
        let x1 = (r.max().x.ceil() as u32).min(self.width());
        let y1 = (r.max().y.ceil() as u32).min(self.height());

        for y in y0..y1 {
            for x in x0..x1 {
                self.pixels.put_pixel(x, y, TRANSPARENT);
            }
        }
    }

    fn draw_image(&mut self, image: &RgbaImage, dest: Rect) {
        if dest.is_empty() || !dest.is_finite() {
            return;
        }

        let x = dest.origin.x.round() as i64;
        let y = dest.origin.y.round() as i64;
        let w = dest.size.x.round() as u32;
        let h = dest.size.y.round() as u32;

        if (w, h) == image.dimensions() {
            imageops::overlay(&mut self.pixels, image, x, y);
        } else {
            let scaled = imageops::resize(image, w, h, FilterType::Nearest);
            imageops::overlay(&mut self.pixels, &scaled, x, y);
        }
    }
}
