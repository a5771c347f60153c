//! Proscenium engine crate.
//!
//! A small 2D sprite scaffold over a drawing surface:
//! - [`costume::Costume`]: an image frame plus a horizontal centering offset
//! - [`sprite::Sprite`]: a stage position and a list of costumes
//! - [`game::Game`]: owns a surface and drives actors at a fixed tick rate
//!
//! ```rust,no_run
//! use proscenium_engine::prelude::*;
//!
//! let mut game = Game::with_surface(Canvas::stage(), GameConfig::default())?;
//! game.add(Sprite::at(0.0, 0.0).with_costume(Costume::open("cat.png")?));
//! game.start()?;
//! Runtime::run(&mut game, RuntimeConfig::default())?;
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod coords;
pub mod core;
pub mod costume;
pub mod error;
pub mod game;
pub mod logging;
pub mod runtime;
pub mod sprite;
pub mod surface;
pub mod time;

#[cfg(test)]
mod testutils;

/// The types most hosts need.
pub mod prelude {
    pub use crate::coords::{Rect, Vec2};
    pub use crate::core::{Actor, TickCtx};
    pub use crate::costume::{Costume, ImageHandle};
    pub use crate::error::{GameError, RenderError};
    pub use crate::game::{Game, GameConfig, GameState, HostCapabilities, GAME_FIRST_CYCLE};
    pub use crate::runtime::{Runtime, RuntimeConfig};
    pub use crate::sprite::Sprite;
    pub use crate::surface::{Canvas, Document, Surface};
}
