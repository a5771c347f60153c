use crate::time::DEFAULT_MAX_CATCH_UP;

/// Capabilities of the host environment, supplied at construction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HostCapabilities {
    /// The host blocks media playback until the user interacts with the page.
    ///
    /// When set, [`Game::start`](super::Game::start) shows a
    /// [`GestureOverlay`](super::GestureOverlay) and waits for
    /// [`Game::user_gesture`](super::Game::user_gesture).
    pub requires_user_gesture: bool,
}

/// Game construction options.
#[derive(Debug, Clone)]
pub struct GameConfig {
    /// Update+render passes per second.
    pub tick_rate_hz: u32,
    /// Most ticks one [`Game::advance`](super::Game::advance) call may run;
    /// older backlog is dropped.
    pub max_catch_up: u32,
    pub capabilities: HostCapabilities,
}

impl GameConfig {
    pub fn tick_rate(mut self, hz: u32) -> Self {
        self.tick_rate_hz = hz;
        self
    }

    pub fn max_catch_up(mut self, ticks: u32) -> Self {
        self.max_catch_up = ticks;
        self
    }

    pub fn requires_user_gesture(mut self, yes: bool) -> Self {
        self.capabilities.requires_user_gesture = yes;
        self
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            tick_rate_hz: 60,
            max_catch_up: DEFAULT_MAX_CATCH_UP,
            capabilities: HostCapabilities::default(),
        }
    }
}
