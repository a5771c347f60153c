//! Blocking host loop for games that do not live inside another event loop.

use std::thread;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};

use crate::game::Game;
use crate::surface::Surface;
use crate::time::FrameClock;

/// Limits for [`Runtime::run`]. With no limits the loop runs until the game stops.
#[derive(Debug, Clone, Default)]
pub struct RuntimeConfig {
    /// Stop the game once this many ticks have run in total.
    pub max_ticks: Option<u64>,
    /// Stop the game once this much wall-clock time has passed.
    pub max_duration: Option<Duration>,
}

/// What a [`Runtime::run`] call did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    /// Timer-driven ticks run by this call.
    pub ticks: u64,
    pub elapsed: Duration,
}

/// Entry point for the blocking loop.
pub struct Runtime;

impl Runtime {
    /// Drives a started game with wall-clock time until it stops or a limit is hit.
    ///
    /// Returns immediately if the game is not running (for instance while it
    /// still waits for a user gesture).
    pub fn run<S: Surface>(game: &mut Game<S>, config: RuntimeConfig) -> Result<RunSummary> {
        let started = Instant::now();
        let mut clock = FrameClock::default();
        let mut ticks = 0u64;

        if !game.is_running() {
            log::warn!("runtime started on a game that is {:?}", game.state());
        }
        clock.reset();

        while game.is_running() {
            if let Some(wait) = game.until_next_tick() {
                thread::sleep(wait);
            }

            let frame = clock.tick();
            let ran = game
                .advance(frame.dt)
                .with_context(|| format!("game tick failed after {} ticks", game.ticks()))?;
            ticks += u64::from(ran);

            let tick_limit = config.max_ticks.is_some_and(|max| game.ticks() >= max);
            let time_limit = config.max_duration.is_some_and(|max| started.elapsed() >= max);
            if tick_limit || time_limit {
                log::info!("runtime limit reached after {} ticks", game.ticks());
                game.stop();
            }
        }

        Ok(RunSummary { ticks, elapsed: started.elapsed() })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{GameConfig, GameState};
    use crate::surface::Canvas;

    #[test]
    fn stops_at_tick_limit() {
        let mut game = Game::with_surface(Canvas::new(8, 8), GameConfig::default().tick_rate(1000)).unwrap();
        game.start().unwrap();

        let summary = Runtime::run(&mut game, RuntimeConfig { max_ticks: Some(5), ..Default::default() }).unwrap();

        assert_eq!(game.state(), GameState::Stopped);
        assert!(game.ticks() >= 5);
        assert_eq!(summary.ticks, game.ticks() - 1);
    }

    #[test]
    fn stops_at_duration_limit() {
        let mut game = Game::with_surface(Canvas::new(8, 8), GameConfig::default()).unwrap();
        game.start().unwrap();

        let config = RuntimeConfig { max_duration: Some(Duration::from_millis(30)), ..Default::default() };
        let summary = Runtime::run(&mut game, config).unwrap();

        assert!(summary.elapsed >= Duration::from_millis(30));
        assert!(!game.is_running());
    }

    #[test]
    fn returns_immediately_when_not_running() {
        let mut game = Game::with_surface(Canvas::new(8, 8), GameConfig::default()).unwrap();
        let summary = Runtime::run(&mut game, RuntimeConfig::default()).unwrap();
        assert_eq!(summary.ticks, 0);
        assert_eq!(game.state(), GameState::Created);
    }
}
