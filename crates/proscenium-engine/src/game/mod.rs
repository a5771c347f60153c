//! The game loop: a surface, a fixed-rate timer and an ordered list of actors.
//!
//! Lifecycle:
//!
//! ```text
//! Created ──start──────────────────────────────────► Running ──stop──► Stopped
//!    │                                                  ▲
//!    └──start (overlay)──► WaitingForUserGesture ──user_gesture
//! ```
//!
//! Nothing returns to `Created`; a stopped game is not restarted.
//!
//! The timer is host-driven: the host (or [`Runtime`](crate::runtime::Runtime))
//! calls [`Game::advance`] with elapsed time and the game runs one
//! update+render pass per elapsed period.

mod audio;
mod config;
mod data;
mod overlay;

pub use audio::{AudioAssets, ASSETS_DIR};
pub use config::{GameConfig, HostCapabilities};
pub use data::{DataValue, GameData, GAME_FIRST_CYCLE};
pub use overlay::{GestureOverlay, DEFAULT_OVERLAY_MESSAGE};

use std::fmt;
use std::path::Path;
use std::time::Duration;

use crate::core::{Actor, TickCtx};
use crate::error::GameError;
use crate::surface::{Document, Surface};
use crate::time::Interval;

/// Loop state. See the module docs for the transitions.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum GameState {
    Created,
    WaitingForUserGesture,
    Running,
    Stopped,
}

/// Owns a surface and drives its actors at a fixed tick rate.
pub struct Game<S: Surface> {
    surface: S,
    tick_rate_hz: u32,
    max_catch_up: u32,
    /// `Some` iff `state == Running`.
    timer: Option<Interval>,
    children: Vec<Box<dyn Actor>>,
    data: GameData,
    audio: AudioAssets,
    overlay: Option<GestureOverlay>,
    state: GameState,
    ticks: u64,
    /// Set while `arm` runs the synchronous first pass.
    arming: bool,
}

impl<S: Surface> Game<S> {
    /// Claims the surface registered under `surface_id` in `document`.
    pub fn new(document: &mut Document<S>, surface_id: &str, config: GameConfig) -> Result<Self, GameError> {
        let surface = document
            .take(surface_id)
            .ok_or_else(|| GameError::SurfaceNotFound(surface_id.to_string()))?;
        Self::with_surface(surface, config)
    }

    pub fn with_surface(surface: S, config: GameConfig) -> Result<Self, GameError> {
        if config.tick_rate_hz == 0 {
            return Err(GameError::InvalidTickRate);
        }

        let mut data = GameData::new();
        data.set_bool(GAME_FIRST_CYCLE, true);

        let overlay = config
            .capabilities
            .requires_user_gesture
            .then(GestureOverlay::default);

        log::debug!(
            "game created: {}x{} surface, {} Hz, gesture gate {}",
            surface.width(),
            surface.height(),
            config.tick_rate_hz,
            overlay.is_some()
        );

        Ok(Self {
            surface,
            tick_rate_hz: config.tick_rate_hz,
            max_catch_up: config.max_catch_up,
            timer: None,
            children: Vec::new(),
            data,
            audio: AudioAssets::new(),
            overlay,
            state: GameState::Created,
            ticks: 0,
            arming: false,
        })
    }

    // ── accessors ─────────────────────────────────────────────────────────

    #[inline]
    pub fn surface(&self) -> &S {
        &self.surface
    }

    #[inline]
    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    #[inline]
    pub fn state(&self) -> GameState {
        self.state
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.state == GameState::Running
    }

    #[inline]
    pub fn tick_rate_hz(&self) -> u32 {
        self.tick_rate_hz
    }

    /// Number of update passes run so far.
    #[inline]
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    #[inline]
    pub fn data(&self) -> &GameData {
        &self.data
    }

    #[inline]
    pub fn data_mut(&mut self) -> &mut GameData {
        &mut self.data
    }

    #[inline]
    pub fn audio(&self) -> &AudioAssets {
        &self.audio
    }

    /// The autoplay overlay, until the user dismisses it.
    #[inline]
    pub fn overlay(&self) -> Option<&GestureOverlay> {
        self.overlay.as_ref()
    }

    // ── children ──────────────────────────────────────────────────────────

    /// Appends an actor. Insertion order is update and render order.
    pub fn add(&mut self, actor: impl Actor + 'static) {
        self.children.push(Box::new(actor));
    }

    /// Removes the child at `index`, keeping the order of the rest.
    pub fn remove(&mut self, index: usize) -> Option<Box<dyn Actor>> {
        (index < self.children.len()).then(|| self.children.remove(index))
    }

    #[inline]
    pub fn child_count(&self) -> usize {
        self.children.len()
    }

    /// Records `name` → `assets/<relative_path>`. No I/O.
    pub fn add_audio_asset(&mut self, name: impl Into<String>, relative_path: impl AsRef<Path>) {
        self.audio.insert(name, relative_path);
    }

    // ── per-tick passes ───────────────────────────────────────────────────

    /// Updates every child once, in insertion order.
    ///
    /// A stop requested by a child takes effect when the pass ends. Requests
    /// are honored only while the loop is running or starting.
    pub fn update(&mut self) {
        let mut ctx = TickCtx::new(&mut self.data, self.ticks);
        for child in &mut self.children {
            child.update(&mut ctx);
        }
        let stop = ctx.stop_requested();

        self.ticks += 1;
        if !stop {
            return;
        }
        if self.is_running() || self.arming {
            log::debug!("stop requested during tick {}", self.ticks - 1);
            self.stop();
        } else {
            log::debug!("ignoring stop request while {:?}", self.state);
        }
    }

    /// Clears the whole surface, then renders every child once, in insertion order.
    pub fn render(&mut self) -> Result<(), GameError> {
        let bounds = self.surface.bounds();
        self.surface.clear_rect(bounds);

        for child in &self.children {
            child.render(&mut self.surface)?;
        }
        Ok(())
    }

    /// One update pass followed by one render pass.
    pub fn tick(&mut self) -> Result<(), GameError> {
        self.update();
        self.render()
    }

    // ── loop control ──────────────────────────────────────────────────────

    /// Starts the loop, or shows the overlay and waits for [`user_gesture`](Self::user_gesture).
    pub fn start(&mut self) -> Result<(), GameError> {
        if self.state != GameState::Created {
            return Err(GameError::InvalidState { op: "start", state: self.state });
        }

        match self.overlay.as_mut() {
            Some(overlay) => {
                overlay.show();
                self.state = GameState::WaitingForUserGesture;
                log::debug!("waiting for user gesture before starting");
                Ok(())
            }
            None => self.arm(),
        }
    }

    /// The one-shot interaction that dismisses the overlay and starts the loop.
    ///
    /// Ignored unless the game is waiting for it.
    pub fn user_gesture(&mut self) -> Result<(), GameError> {
        if self.state != GameState::WaitingForUserGesture {
            log::warn!("ignoring user gesture while {:?}", self.state);
            return Ok(());
        }

        self.arm()?;
        self.overlay = None;
        Ok(())
    }

    /// Runs the first pass synchronously, then arms the periodic timer.
    ///
    /// If the first pass fails the game stays in the state it was armed from.
    fn arm(&mut self) -> Result<(), GameError> {
        let prior = self.state;

        self.arming = true;
        let first = self.tick();
        self.arming = false;

        if let Err(err) = first {
            if self.state != GameState::Stopped {
                self.state = prior;
            }
            return Err(err);
        }
        self.data.set_bool(GAME_FIRST_CYCLE, false);

        if self.state == GameState::Stopped {
            return Ok(());
        }

        let interval = Interval::from_hz(self.tick_rate_hz)
            .ok_or(GameError::InvalidTickRate)?
            .with_max_catch_up(self.max_catch_up);
        log::debug!("game loop running every {:?}", interval.period());
        self.timer = Some(interval);
        self.state = GameState::Running;
        Ok(())
    }

    /// Cancels the timer. Children and data are kept; calling it again is a no-op.
    pub fn stop(&mut self) {
        if self.timer.take().is_some() {
            log::debug!("game loop stopped after {} ticks", self.ticks);
        }
        self.overlay = None;
        self.state = GameState::Stopped;
    }

    /// Feeds `elapsed` host time into the timer and runs one tick per due period.
    ///
    /// Returns the number of ticks run. Does nothing unless the game is running.
    pub fn advance(&mut self, elapsed: Duration) -> Result<u32, GameError> {
        let due = match self.timer.as_mut() {
            Some(timer) => timer.advance(elapsed),
            None => return Ok(0),
        };

        let mut ran = 0;
        for _ in 0..due {
            if !self.is_running() {
                break;
            }
            self.tick()?;
            ran += 1;
        }
        Ok(ran)
    }

    /// Time until the next tick is due, or `None` when not running.
    pub fn until_next_tick(&self) -> Option<Duration> {
        self.timer.as_ref().map(Interval::until_next)
    }
}

impl<S: Surface + fmt::Debug> fmt::Debug for Game<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Game")
            .field("surface", &self.surface)
            .field("tick_rate_hz", &self.tick_rate_hz)
            .field("state", &self.state)
            .field("children", &self.children.len())
            .field("ticks", &self.ticks)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::Rect;
    use crate::testutils::{Event, Journal, Tracer, RecordingSurface};

    fn game(journal: &Journal, config: GameConfig) -> Game<RecordingSurface> {
        Game::with_surface(RecordingSurface::with_journal(480, 360, journal.clone()), config).unwrap()
    }

    fn clear() -> Event {
        Event::Clear { rect: Rect::new(0.0, 0.0, 480.0, 360.0) }
    }

    fn period() -> Duration {
        Interval::from_hz(60).unwrap().period()
    }

    // ── construction ──────────────────────────────────────────────────────

    #[test]
    fn new_resolves_surface_by_id() {
        let mut doc = Document::new();
        doc.insert("stage", RecordingSurface::new(480, 360));

        let game = Game::new(&mut doc, "stage", GameConfig::default()).unwrap();
        assert_eq!(game.tick_rate_hz(), 60);
        assert_eq!(game.state(), GameState::Created);
        assert_eq!(game.data().get_bool(GAME_FIRST_CYCLE), Some(true));
        assert!(game.audio().is_empty());
        assert!(game.overlay().is_none());
    }

    #[test]
    fn new_fails_for_unknown_surface() {
        let mut doc: Document<RecordingSurface> = Document::new();
        let err = Game::new(&mut doc, "missing", GameConfig::default()).unwrap_err();
        assert_eq!(err, GameError::SurfaceNotFound("missing".to_string()));
    }

    #[test]
    fn zero_tick_rate_is_rejected() {
        let err = Game::with_surface(RecordingSurface::new(1, 1), GameConfig::default().tick_rate(0))
            .unwrap_err();
        assert_eq!(err, GameError::InvalidTickRate);
    }

    // ── update / render ordering ──────────────────────────────────────────

    #[test]
    fn update_runs_children_once_in_insertion_order() {
        let journal = Journal::default();
        let mut g = game(&journal, GameConfig::default());
        for name in ["a", "b", "c"] {
            g.add(Tracer::new(name, &journal));
        }

        g.update();

        assert_eq!(
            *journal.borrow(),
            vec![Event::Update("a"), Event::Update("b"), Event::Update("c")]
        );
    }

    #[test]
    fn render_clears_once_then_renders_in_order() {
        let journal = Journal::default();
        let mut g = game(&journal, GameConfig::default());
        g.add(Tracer::new("a", &journal));
        g.add(Tracer::new("b", &journal));

        g.render().unwrap();

        assert_eq!(*journal.borrow(), vec![clear(), Event::Render("a"), Event::Render("b")]);
    }

    #[test]
    fn render_error_propagates() {
        let journal = Journal::default();
        let mut g = game(&journal, GameConfig::default());
        let mut bad = Tracer::new("bad", &journal);
        bad.fail_render = true;
        g.add(bad);
        g.add(Tracer::new("after", &journal));

        assert!(matches!(g.render(), Err(GameError::Render(_))));
        assert_eq!(*journal.borrow(), vec![clear()]);
    }

    #[test]
    fn remove_keeps_remaining_order() {
        let journal = Journal::default();
        let mut g = game(&journal, GameConfig::default());
        for name in ["a", "b", "c"] {
            g.add(Tracer::new(name, &journal));
        }

        assert!(g.remove(1).is_some());
        assert!(g.remove(5).is_none());
        g.update();

        assert_eq!(*journal.borrow(), vec![Event::Update("a"), Event::Update("c")]);
    }

    // ── start / stop ──────────────────────────────────────────────────────

    #[test]
    fn start_runs_one_pass_before_timer() {
        let journal = Journal::default();
        let mut g = game(&journal, GameConfig::default());
        g.add(Tracer::new("a", &journal));

        g.start().unwrap();

        assert_eq!(g.state(), GameState::Running);
        assert_eq!(
            *journal.borrow(),
            vec![Event::Update("a"), clear(), Event::Render("a")]
        );
        assert_eq!(g.data().get_bool(GAME_FIRST_CYCLE), Some(false));

        assert_eq!(g.advance(period() / 2).unwrap(), 0);
        assert_eq!(g.ticks(), 1);
        assert_eq!(g.advance(period()).unwrap(), 1);
        assert_eq!(g.ticks(), 2);
        assert_eq!(journal.borrow().len(), 6);
    }

    #[test]
    fn first_cycle_flag_flips_once() {
        let journal = Journal::default();
        let mut g = game(&journal, GameConfig::default());
        g.start().unwrap();
        g.data_mut().set_bool(GAME_FIRST_CYCLE, true);

        g.advance(period() * 3).unwrap();
        assert_eq!(g.data().get_bool(GAME_FIRST_CYCLE), Some(true));
    }

    #[test]
    fn long_suspend_runs_bounded_catch_up() {
        let journal = Journal::default();
        let mut g = game(&journal, GameConfig::default().max_catch_up(2));
        g.start().unwrap();

        assert_eq!(g.advance(Duration::from_secs(3600)).unwrap(), 2);
        assert_eq!(g.advance(Duration::MAX).unwrap(), 2);
        assert_eq!(g.ticks(), 5);
        assert!(g.is_running());
    }

    #[test]
    fn advance_before_start_runs_nothing() {
        let journal = Journal::default();
        let mut g = game(&journal, GameConfig::default());
        g.add(Tracer::new("a", &journal));

        assert_eq!(g.advance(Duration::from_secs(1)).unwrap(), 0);
        assert!(journal.borrow().is_empty());
        assert_eq!(g.until_next_tick(), None);
    }

    #[test]
    fn stop_halts_ticks_and_is_idempotent() {
        let journal = Journal::default();
        let mut g = game(&journal, GameConfig::default());
        g.add(Tracer::new("a", &journal));
        g.start().unwrap();

        g.stop();
        g.stop();

        assert_eq!(g.state(), GameState::Stopped);
        assert_eq!(g.advance(period() * 10).unwrap(), 0);
        assert_eq!(g.ticks(), 1);
        assert_eq!(g.child_count(), 1);
    }

    #[test]
    fn restart_is_rejected() {
        let journal = Journal::default();
        let mut g = game(&journal, GameConfig::default());
        g.start().unwrap();
        assert_eq!(
            g.start(),
            Err(GameError::InvalidState { op: "start", state: GameState::Running })
        );

        g.stop();
        assert_eq!(
            g.start(),
            Err(GameError::InvalidState { op: "start", state: GameState::Stopped })
        );
    }

    #[test]
    fn actor_can_request_stop() {
        let journal = Journal::default();
        let mut g = game(&journal, GameConfig::default());
        let mut tracer = Tracer::new("a", &journal);
        tracer.stop_on_tick = Some(2);
        g.add(tracer);
        g.start().unwrap();

        let ran = g.advance(period() * 5).unwrap();

        assert_eq!(ran, 2);
        assert_eq!(g.ticks(), 3);
        assert_eq!(g.state(), GameState::Stopped);
        assert_eq!(journal.borrow().last(), Some(&Event::Render("a")));
    }

    #[test]
    fn stop_request_before_start_is_ignored() {
        let journal = Journal::default();
        let mut g = game(&journal, GameConfig::default());
        let mut tracer = Tracer::new("a", &journal);
        tracer.stop_on_tick = Some(0);
        g.add(tracer);

        g.update();
        assert_eq!(g.state(), GameState::Created);

        g.start().unwrap();
        assert_eq!(g.state(), GameState::Running);
    }

    #[test]
    fn stop_during_first_pass_never_arms_timer() {
        let journal = Journal::default();
        let mut g = game(&journal, GameConfig::default());
        let mut tracer = Tracer::new("a", &journal);
        tracer.stop_on_tick = Some(0);
        g.add(tracer);

        g.start().unwrap();

        assert_eq!(g.state(), GameState::Stopped);
        assert_eq!(g.until_next_tick(), None);
        assert_eq!(g.data().get_bool(GAME_FIRST_CYCLE), Some(false));
    }

    // ── user-gesture gate ─────────────────────────────────────────────────

    #[test]
    fn overlay_defers_start_until_gesture() {
        let journal = Journal::default();
        let mut g = game(&journal, GameConfig::default().requires_user_gesture(true));
        g.add(Tracer::new("a", &journal));
        assert!(!g.overlay().unwrap().is_visible());

        g.start().unwrap();
        assert_eq!(g.state(), GameState::WaitingForUserGesture);
        assert!(g.overlay().unwrap().is_visible());
        assert_eq!(g.advance(period() * 4).unwrap(), 0);
        assert!(journal.borrow().is_empty());

        g.user_gesture().unwrap();
        assert_eq!(g.state(), GameState::Running);
        assert!(g.overlay().is_none());
        assert_eq!(g.ticks(), 1);
        assert_eq!(g.data().get_bool(GAME_FIRST_CYCLE), Some(false));
    }

    #[test]
    fn failed_first_pass_after_gesture_keeps_gate() {
        let journal = Journal::default();
        let mut g = game(&journal, GameConfig::default().requires_user_gesture(true));
        let mut bad = Tracer::new("bad", &journal);
        bad.fail_render = true;
        g.add(bad);

        g.start().unwrap();
        assert!(g.user_gesture().is_err());
        assert_eq!(g.state(), GameState::WaitingForUserGesture);
        assert!(g.overlay().is_some_and(GestureOverlay::is_visible));
        assert_eq!(g.until_next_tick(), None);

        assert!(g.remove(0).is_some());
        assert_eq!(
            g.start(),
            Err(GameError::InvalidState { op: "start", state: GameState::WaitingForUserGesture })
        );
        assert_eq!(g.advance(period() * 3).unwrap(), 0);

        g.user_gesture().unwrap();
        assert_eq!(g.state(), GameState::Running);
        assert!(g.overlay().is_none());
    }

    #[test]
    fn gesture_outside_waiting_state_is_ignored() {
        let journal = Journal::default();
        let mut g = game(&journal, GameConfig::default().requires_user_gesture(true));

        g.user_gesture().unwrap();
        assert_eq!(g.state(), GameState::Created);
        assert_eq!(g.ticks(), 0);
    }

    #[test]
    fn failed_first_render_leaves_game_unstarted() {
        let journal = Journal::default();
        let mut g = game(&journal, GameConfig::default());
        let mut bad = Tracer::new("bad", &journal);
        bad.fail_render = true;
        g.add(bad);

        assert!(g.start().is_err());
        assert_eq!(g.state(), GameState::Created);
        assert_eq!(g.data().get_bool(GAME_FIRST_CYCLE), Some(true));
        assert_eq!(g.until_next_tick(), None);
    }

    #[test]
    fn shared_sprite_can_be_moved_between_ticks() {
        use std::cell::RefCell;
        use std::rc::Rc;

        use crate::costume::Costume;
        use crate::sprite::Sprite;

        let journal = Journal::default();
        let mut g = game(&journal, GameConfig::default());
        let sprite = Rc::new(RefCell::new(
            Sprite::new().with_costume(Costume::new(image::RgbaImage::new(10, 10))),
        ));
        g.add(sprite.clone());

        g.render().unwrap();
        sprite.borrow_mut().x = 20.0;
        g.render().unwrap();

        let draws: Vec<Event> = journal
            .borrow()
            .iter()
            .filter(|e| matches!(e, Event::Draw { .. }))
            .cloned()
            .collect();
        assert_eq!(
            draws,
            vec![
                Event::Draw { dest: Rect::new(240.0, 180.0, 10.0, 10.0) },
                Event::Draw { dest: Rect::new(260.0, 180.0, 10.0, 10.0) },
            ]
        );
    }

    // ── audio ─────────────────────────────────────────────────────────────

    #[test]
    fn add_audio_asset_records_prefixed_path() {
        let journal = Journal::default();
        let mut g = game(&journal, GameConfig::default());
        g.add_audio_asset("jump", "jump.wav");
        assert_eq!(g.audio().get("jump"), Some(Path::new("assets/jump.wav")));
    }
}
