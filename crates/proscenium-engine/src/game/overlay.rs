/// Default overlay text shown while waiting for the first user gesture.
pub const DEFAULT_OVERLAY_MESSAGE: &str = "Press to enable audio";

/// Blocking prompt shown by hosts that gate playback on a user gesture.
///
/// The game only tracks the overlay's state; hosts draw it however they like.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GestureOverlay {
    pub message: String,
    visible: bool,
}

impl GestureOverlay {
    pub fn new(message: impl Into<String>) -> Self {
        Self { message: message.into(), visible: false }
    }

    #[inline]
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub(crate) fn show(&mut self) {
        self.visible = true;
    }
}

impl Default for GestureOverlay {
    fn default() -> Self {
        Self::new(DEFAULT_OVERLAY_MESSAGE)
    }
}
