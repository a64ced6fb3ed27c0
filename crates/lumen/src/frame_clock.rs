//! # Frame Clock
//!
//! Turns raw frame deltas into the elapsed time the hero scene animates
//! against, and keeps running statistics for the preview summary.
//!
//! ```text
//! host frame ──► advance(delta) ──► FrameTick { frame, delta_time, elapsed }
//!                      │
//!                      └──► FrameStatsAccumulator::record(delta)
//! ```

use std::time::Duration;

/// Target frame time for 60 FPS.
pub const TARGET_FRAME_TIME: Duration = Duration::from_micros(16_666);

/// Maximum frame time before a warning is logged.
pub const MAX_FRAME_TIME: Duration = Duration::from_millis(33);

/// Upper bound on the delta fed to animations, in seconds.
///
/// A tab that was backgrounded for a minute should not fast-forward the
/// reveal animations by a minute.
pub const MAX_DELTA_SECONDS: f32 = 0.1;

/// Timing handed to per-frame work.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FrameTick {
    /// Zero-based frame number.
    pub frame: u64,
    /// Clamped seconds since the previous frame.
    pub delta_time: f32,
    /// Seconds since the clock started, accumulated from clamped deltas.
    pub elapsed: f32,
}

/// Accumulates frame deltas into elapsed scene time.
#[derive(Clone, Debug, Default)]
pub struct FrameClock {
    frame_count: u64,
    elapsed: f32,
    stats: FrameStatsAccumulator,
}

impl FrameClock {
    /// Creates a clock at frame zero.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Advances by one frame that took `delta` of wall time.
    pub fn advance(&mut self, delta: Duration) -> FrameTick {
        let delta_time = delta.as_secs_f32().min(MAX_DELTA_SECONDS);
        self.elapsed += delta_time;

        let tick = FrameTick {
            frame: self.frame_count,
            delta_time,
            elapsed: self.elapsed,
        };

        self.stats.record(delta);
        if delta > MAX_FRAME_TIME {
            tracing::warn!(
                frame = self.frame_count,
                frame_ms = delta.as_secs_f64() * 1000.0,
                target_ms = TARGET_FRAME_TIME.as_secs_f64() * 1000.0,
                "frame exceeded budget"
            );
        }

        self.frame_count += 1;
        tick
    }

    /// Frames advanced so far.
    #[inline]
    #[must_use]
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    /// Scene time in seconds.
    #[inline]
    #[must_use]
    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    /// Accumulated statistics.
    #[must_use]
    pub fn stats(&self) -> &FrameStatsAccumulator {
        &self.stats
    }
}

/// Accumulator for frame statistics.
#[derive(Clone, Debug)]
pub struct FrameStatsAccumulator {
    /// Total frames recorded.
    pub frames_recorded: u64,
    /// Sum of frame times.
    pub total_us_sum: u64,
    /// Shortest frame.
    pub min_frame_us: u64,
    /// Longest frame.
    pub max_frame_us: u64,
    /// Frames longer than [`TARGET_FRAME_TIME`].
    pub frames_over_budget: u64,
}

impl FrameStatsAccumulator {
    /// Creates an empty accumulator.
    #[must_use]
    pub fn new() -> Self {
        Self {
            frames_recorded: 0,
            total_us_sum: 0,
            min_frame_us: u64::MAX,
            max_frame_us: 0,
            frames_over_budget: 0,
        }
    }

    /// Records one frame time.
    pub fn record(&mut self, frame_time: Duration) {
        let us = u64::try_from(frame_time.as_micros()).unwrap_or(u64::MAX);
        self.frames_recorded += 1;
        self.total_us_sum = self.total_us_sum.saturating_add(us);
        self.min_frame_us = self.min_frame_us.min(us);
        self.max_frame_us = self.max_frame_us.max(us);

        if frame_time > TARGET_FRAME_TIME {
            self.frames_over_budget += 1;
        }
    }

    /// Average frame time in milliseconds.
    #[must_use]
    pub fn avg_frame_ms(&self) -> f64 {
        if self.frames_recorded == 0 {
            return 0.0;
        }
        (self.total_us_sum as f64 / self.frames_recorded as f64) / 1000.0
    }

    /// Average frames per second.
    #[must_use]
    pub fn avg_fps(&self) -> f64 {
        let avg_ms = self.avg_frame_ms();
        if avg_ms <= 0.0 {
            return 0.0;
        }
        1000.0 / avg_ms
    }

    /// Fraction of frames over budget.
    #[must_use]
    pub fn over_budget_ratio(&self) -> f64 {
        if self.frames_recorded == 0 {
            return 0.0;
        }
        self.frames_over_budget as f64 / self.frames_recorded as f64
    }
}

impl Default for FrameStatsAccumulator {
    fn default() -> Self {
        Self::new()
    }
}
