//! Contracts between the game loop and the things it drives.
//!
//! The loop only knows about [`Actor`]s. A [`Sprite`](crate::sprite::Sprite)
//! is an actor with a no-op update; game logic composes a sprite into its own
//! actor type and overrides `update`.

mod actor;
mod ctx;

pub use actor::Actor;
pub use ctx::TickCtx;
