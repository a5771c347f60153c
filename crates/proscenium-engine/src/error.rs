use std::fmt;

use crate::game::GameState;

/// A sprite could not be rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderError {
    /// The sprite has no costumes.
    NoCostumes,
    /// The active costume index does not name a costume.
    CostumeOutOfRange { index: usize, len: usize },
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderError::NoCostumes => write!(f, "sprite has no costumes"),
            RenderError::CostumeOutOfRange { index, len } => {
                write!(f, "active costume {index} out of range for {len} costume(s)")
            }
        }
    }
}

impl std::error::Error for RenderError {}

/// Errors raised by [`Game`](crate::game::Game).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// No surface is registered under the requested id.
    SurfaceNotFound(String),
    /// The configured tick rate is zero.
    InvalidTickRate,
    /// `op` is not allowed while the game is in `state`.
    InvalidState { op: &'static str, state: GameState },
    /// A child failed to render.
    Render(RenderError),
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::SurfaceNotFound(id) => write!(f, "no drawing surface with id {id:?}"),
            GameError::InvalidTickRate => write!(f, "tick rate must be at least 1 Hz"),
            GameError::InvalidState { op, state } => {
                write!(f, "cannot {op} a game that is {state:?}")
            }
            GameError::Render(err) => write!(f, "render failed: {err}"),
        }
    }
}

impl std::error::Error for GameError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GameError::Render(err) => Some(err),
            _ => None,
        }
    }
}

impl From<RenderError> for GameError {
    fn from(err: RenderError) -> Self {
        GameError::Render(err)
    }
}
