//! Drawing surfaces.
//!
//! A [`Surface`] is the 2D target sprites are blitted onto. The engine only
//! needs four operations from it, so any backend (a software canvas, a GPU
//! texture, a browser canvas behind FFI) can implement it.
//!
//! - [`Canvas`]: software surface backed by an `image::RgbaImage`
//! - [`Document`]: registry resolving surfaces by element id

mod canvas;
mod document;

pub use canvas::Canvas;
pub use document::Document;

use image::RgbaImage;

use crate::coords::Rect;

/// Drawing-surface contract consumed by the game loop and sprites.
pub trait Surface {
    /// Surface width in pixels.
    fn width(&self) -> u32;

    /// Surface height in pixels.
    fn height(&self) -> u32;

    /// Resets every pixel inside `rect` to transparent.
    ///
    /// Parts of `rect` outside the surface are ignored.
    fn clear_rect(&mut self, rect: Rect);

    /// Draws `image` into `dest`.
    ///
    /// The image is stretched when `dest` differs from its native size.
    fn draw_image(&mut self, image: &RgbaImage, dest: Rect);

    /// Full-surface bounds.
    fn bounds(&self) -> Rect {
        Rect::from_surface_size(self.width(), self.height())
    }
}
