//! Time subsystem.
//!
//! - [`Interval`]: fixed-period tick accounting, the game loop's timer
//! - [`FrameClock`]: clamped wall-clock deltas fed into an `Interval` by a host loop

mod frame_clock;
mod interval;

pub use frame_clock::{FrameClock, FrameTime};
pub use interval::{Interval, DEFAULT_MAX_CATCH_UP};
