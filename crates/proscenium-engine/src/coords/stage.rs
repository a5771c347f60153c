//! The fixed logical stage sprites are positioned in.
//!
//! Sprite coordinates are a displacement from the stage center with +Y up.
//! A costume's `x_offset` shifts the image so it is centered horizontally.
//! There is no vertical costume offset.

use super::Vec2;

/// Logical stage width in pixels.
pub const STAGE_WIDTH: f32 = 480.0;

/// Logical stage height in pixels.
pub const STAGE_HEIGHT: f32 = 360.0;

/// Returns the surface-space top-left corner at which a costume is drawn.
///
/// ```text
/// draw_x = x + (480 - x_offset) / 2
/// draw_y = 360 / 2 - y
/// ```
#[inline]
pub fn draw_origin(position: Vec2, x_offset: f32) -> Vec2 {
    Vec2::new(
        position.x + (STAGE_WIDTH - x_offset) / 2.0,
        STAGE_HEIGHT / 2.0 - position.y,
    )
}
