use std::time::{Duration, Instant};

/// Wall-clock sample taken by [`FrameClock::tick`].
#[derive(Debug, Copy, Clone)]
pub struct FrameTime {
    /// Clamped time elapsed since the previous sample.
    pub dt: Duration,

    /// Monotonic timestamp of the sample.
    pub now: Instant,

    /// Number of samples taken before this one.
    pub frame_index: u64,
}

/// Measures elapsed time between host loop iterations.
///
/// Deltas are clamped so a debugger pause or a long stall does not turn into
/// hundreds of catch-up ticks.
#[derive(Debug, Clone)]
pub struct FrameClock {
    last: Instant,
    frame_index: u64,
    dt_min: Duration,
    dt_max: Duration,
}

impl FrameClock {
    /// Clamps deltas to `[100µs, 250ms]`.
    pub fn new() -> Self {
        Self::with_clamps(Duration::from_micros(100), Duration::from_millis(250))
    }

    pub fn with_clamps(dt_min: Duration, dt_max: Duration) -> Self {
        debug_assert!(dt_min <= dt_max);
        Self {
            last: Instant::now(),
            frame_index: 0,
            dt_min,
            dt_max,
        }
    }

    /// Resets the baseline so time spent before a loop starts is not counted.
    pub fn reset(&mut self) {
        self.last = Instant::now();
    }

    /// Samples the clock.
    pub fn tick(&mut self) -> FrameTime {
        let now = Instant::now();
        let dt = now
            .saturating_duration_since(self.last)
            .clamp(self.dt_min, self.dt_max);
        self.last = now;

        let ft = FrameTime { dt, now, frame_index: self.frame_index };
        self.frame_index = self.frame_index.wrapping_add(1);
        ft
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}
