use std::time::Duration;

/// Fixed-period repeating timer driven by elapsed host time.
///
/// Accumulates time passed to [`advance`](Self::advance) and reports how many
/// whole periods became due. The remainder carries over, so the average rate
/// matches the period regardless of how the host slices time.
///
/// At most `max_catch_up` periods are reported per call. Any larger backlog
/// (a suspended host, a huge `elapsed`) is dropped rather than replayed.
#[derive(Debug, Clone)]
pub struct Interval {
    period: Duration,
    pending: Duration,
    fired: u64,
    max_catch_up: u32,
}

/// Default cap on periods reported by a single [`Interval::advance`].
pub const DEFAULT_MAX_CATCH_UP: u32 = 5;

impl Interval {
    /// # Panics
    /// Panics if `period` is zero.
    pub fn new(period: Duration) -> Self {
        assert!(!period.is_zero(), "Interval period must be non-zero");
        Self { period, pending: Duration::ZERO, fired: 0, max_catch_up: DEFAULT_MAX_CATCH_UP }
    }

    /// Sets the per-call catch-up cap. Clamped to at least 1.
    pub fn with_max_catch_up(mut self, max: u32) -> Self {
        self.max_catch_up = max.max(1);
        self
    }

    /// Interval firing `hz` times per second. Returns `None` for `hz == 0`.
    pub fn from_hz(hz: u32) -> Option<Self> {
        (hz > 0).then(|| Self::new(Duration::from_secs_f64(1.0 / f64::from(hz))))
    }

    #[inline]
    pub fn period(&self) -> Duration {
        self.period
    }

    /// Total number of periods reported due so far.
    #[inline]
    pub fn fired(&self) -> u64 {
        self.fired
    }

    /// Adds `elapsed` and returns how many periods are now due.
    pub fn advance(&mut self, elapsed: Duration) -> u32 {
        self.pending = self.pending.saturating_add(elapsed);

        let period_ns = self.period.as_nanos();
        let due = self.pending.as_nanos() / period_ns;

        let due = if due > u128::from(self.max_catch_up) {
            let remainder = (self.pending.as_nanos() % period_ns) as u64;
            log::trace!("dropping {} overdue periods", due - u128::from(self.max_catch_up));
            self.pending = Duration::from_nanos(remainder);
            self.max_catch_up
        } else {
            let due = due as u32;
            self.pending -= self.period * due;
            due
        };

        self.fired += u64::from(due);
        due
    }

    /// Time remaining until the next period is due.
    #[inline]
    pub fn until_next(&self) -> Duration {
        self.period.saturating_sub(self.pending)
    }
}
