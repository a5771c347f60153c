//! Costumes: image frames a sprite can display.

use std::cell::OnceCell;
use std::path::Path;
use std::rc::Rc;

use anyhow::{anyhow, bail, Context, Result};
use image::imageops::{self, FilterType};
use image::{Rgba, RgbaImage};
use resvg::{tiny_skia, usvg};

/// Shared handle to a costume image that may still be loading.
///
/// The image is set at most once. Clones share the same slot, so a loader
/// can keep a handle and resolve it after the costume is already on stage.
#[derive(Debug, Clone, Default)]
pub struct ImageHandle(Rc<OnceCell<RgbaImage>>);

impl ImageHandle {
    /// Handle with no image yet.
    pub fn pending() -> Self {
        Self::default()
    }

    /// Handle that is already loaded.
    pub fn ready(image: RgbaImage) -> Self {
        let handle = Self::pending();
        let _ = handle.0.set(image);
        handle
    }

    /// Completes the load. Returns the image back if the handle was already resolved.
    pub fn resolve(&self, image: RgbaImage) -> Result<(), RgbaImage> {
        self.0.set(image)
    }

    #[inline]
    pub fn get(&self) -> Option<&RgbaImage> {
        self.0.get()
    }

    #[inline]
    pub fn is_loaded(&self) -> bool {
        self.0.get().is_some()
    }
}

/// An image plus the horizontal offset that centers it on the stage.
#[derive(Debug, Clone, Default)]
pub struct Costume {
    image: ImageHandle,
    x_offset: f32,
}

impl Costume {
    pub fn new(image: RgbaImage) -> Self {
        Self::from_handle(ImageHandle::ready(image))
    }

    /// Costume whose image arrives later through [`ImageHandle::resolve`].
    pub fn pending() -> Self {
        Self::from_handle(ImageHandle::pending())
    }

    pub fn from_handle(image: ImageHandle) -> Self {
        Self { image, x_offset: 0.0 }
    }

    /// Decodes the image file at `path` at its native size.
    ///
    /// `.svg` files are rasterized; everything else goes through `image`.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        Self::open_with_resolution(path, 1)
    }

    /// Decodes the image file at `path`, shrinking it by `resolution`.
    ///
    /// Costume art is often authored at 2× so it stays sharp when scaled up;
    /// `resolution = 2` brings it back to stage size.
    pub fn open_with_resolution(path: impl AsRef<Path>, resolution: u32) -> Result<Self> {
        let path = path.as_ref();
        if resolution == 0 {
            bail!("costume resolution for {} must be at least 1", path.display());
        }

        let is_svg = path.extension().is_some_and(|ext| ext.eq_ignore_ascii_case("svg"));
        let image = if is_svg {
            let data = std::fs::read(path)
                .with_context(|| format!("failed to read costume image {}", path.display()))?;
            rasterize_svg(&data, resolution)
                .with_context(|| format!("failed to rasterize costume image {}", path.display()))?
        } else {
            let decoded = image::open(path)
                .with_context(|| format!("failed to decode costume image {}", path.display()))?
                .into_rgba8();
            downscale(decoded, resolution)
        };

        log::debug!("loaded costume {} ({}x{})", path.display(), image.width(), image.height());
        Ok(Self::new(image))
    }

    /// Rasterizes SVG source, shrunk by `resolution`.
    pub fn from_svg_data(data: &[u8], resolution: u32) -> Result<Self> {
        if resolution == 0 {
            bail!("costume resolution must be at least 1");
        }
        Ok(Self::new(rasterize_svg(data, resolution)?))
    }

    pub fn with_x_offset(mut self, x_offset: f32) -> Self {
        self.x_offset = x_offset;
        self
    }

    #[inline]
    pub fn x_offset(&self) -> f32 {
        self.x_offset
    }

    #[inline]
    pub fn image(&self) -> &ImageHandle {
        &self.image
    }

    /// Image width, or `None` while the image is loading.
    pub fn width(&self) -> Option<u32> {
        self.image.get().map(RgbaImage::width)
    }

    /// Image height, or `None` while the image is loading.
    pub fn height(&self) -> Option<u32> {
        self.image.get().map(RgbaImage::height)
    }
}

fn downscale(image: RgbaImage, resolution: u32) -> RgbaImage {
    if resolution <= 1 {
        return image;
    }
    let width = (image.width() / resolution).max(1);
    let height = (image.height() / resolution).max(1);
    imageops::resize(&image, width, height, FilterType::Nearest)
}

fn rasterize_svg(data: &[u8], resolution: u32) -> Result<RgbaImage> {
    let tree = usvg::Tree::from_data(data, &usvg::Options::default())
        .map_err(|e| anyhow!("invalid SVG: {e}"))?;

    let scale = 1.0 / resolution as f32;
    let size = tree.size();
    let width = ((size.width() * scale).round() as u32).max(1);
    let height = ((size.height() * scale).round() as u32).max(1);

    let mut pixmap = tiny_skia::Pixmap::new(width, height)
        .with_context(|| format!("cannot allocate {width}x{height} SVG raster"))?;
    resvg::render(&tree, tiny_skia::Transform::from_scale(scale, scale), &mut pixmap.as_mut());

    // tiny-skia stores premultiplied alpha; RgbaImage is straight alpha.
    let mut image = RgbaImage::new(width, height);
    for (dst, src) in image.pixels_mut().zip(pixmap.pixels()) {
        let c = src.demultiply();
        *dst = Rgba([c.red(), c.green(), c.blue(), c.alpha()]);
    }
    Ok(image)
}
