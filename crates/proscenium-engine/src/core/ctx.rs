use crate::game::GameData;

/// Per-tick context passed to [`Actor::update`](super::Actor::update).
pub struct TickCtx<'a> {
    /// Game-wide flags and values.
    pub data: &'a mut GameData,
    /// Index of the current update pass, starting at 0.
    pub tick: u64,
    stop_requested: bool,
}

impl<'a> TickCtx<'a> {
    pub(crate) fn new(data: &'a mut GameData, tick: u64) -> Self {
        Self { data, tick, stop_requested: false }
    }

    /// Asks the game to stop once the current tick finishes.
    pub fn request_stop(&mut self) {
        self.stop_requested = true;
    }

    #[inline]
    pub fn stop_requested(&self) -> bool {
        self.stop_requested
    }
}
