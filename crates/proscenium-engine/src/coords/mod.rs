//! Coordinate and geometry types shared by sprites and surfaces.
//!
//! Two spaces are in play:
//! - Surface space: pixels, origin top-left, +X right, +Y down.
//! - Stage space: the fixed 480×360 logical area sprites live in, origin at
//!   the stage center, +X right, +Y up.
//!
//! [`stage::draw_origin`] converts a sprite position into surface space.

mod rect;
mod vec2;

pub mod stage;

pub use rect::Rect;
pub use vec2::Vec2;
