//! Reveal animations.
//!
//! Sections fade and slide in once their visibility signal flips; counters
//! tick up to their value in fixed steps.

use serde::{Deserialize, Serialize};

/// Easing function type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Easing {
    /// Linear interpolation.
    Linear,
    /// Exponential ease-out: fast start, gentle landing.
    #[default]
    ExponentialOut,
    /// Instant (no animation).
    Instant,
}

impl Easing {
    /// Applies the easing function to a t value (0-1).
    #[must_use]
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);

        match self {
            Self::Linear => t,
            Self::ExponentialOut => {
                if t >= 1.0 {
                    1.0
                } else {
                    1.0 - 2.0_f32.powf(-10.0 * t)
                }
            }
            Self::Instant => 1.0,
        }
    }
}

/// A single animated value.
#[derive(Debug, Clone)]
pub struct Animation {
    current: f32,
    target: f32,
    start: f32,
    /// Progress through the current transition, 0-1.
    progress: f32,
    /// Seconds per transition.
    duration: f32,
    /// Seconds to wait before a transition starts moving.
    delay: f32,
    waited: f32,
    easing: Easing,
}

impl Animation {
    /// Default transition duration in seconds.
    pub const DEFAULT_DURATION: f32 = 0.6;

    /// Creates an animation resting at `value`.
    #[must_use]
    pub fn new(value: f32, easing: Easing) -> Self {
        Self {
            current: value,
            target: value,
            start: value,
            progress: 1.0,
            duration: Self::DEFAULT_DURATION,
            delay: 0.0,
            waited: 0.0,
            easing,
        }
    }

    /// Sets the transition duration.
    #[must_use]
    pub fn with_duration(mut self, duration: f32) -> Self {
        self.duration = duration;
        self
    }

    /// Sets a delay applied before each transition.
    #[must_use]
    pub fn with_delay(mut self, delay: f32) -> Self {
        self.delay = delay.max(0.0);
        self
    }

    /// Current value.
    #[must_use]
    pub fn value(&self) -> f32 {
        self.current
    }

    /// Returns true if the animation is at rest.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.progress >= 1.0
    }

    /// Starts a transition from the current value toward `target`.
    pub fn set_target(&mut self, target: f32) {
        if (target - self.target).abs() > 0.0001 {
            self.start = self.current;
            self.target = target;
            self.progress = 0.0;
            self.waited = 0.0;
        }
    }

    /// Advances by `dt` seconds.
    pub fn update(&mut self, dt: f32) {
        if self.progress >= 1.0 {
            return;
        }

        let mut dt = dt.max(0.0);
        if self.waited < self.delay {
            let wait = (self.delay - self.waited).min(dt);
            self.waited += wait;
            dt -= wait;
            if self.waited < self.delay {
                return;
            }
        }

        if self.duration > 0.0 {
            self.progress += dt / self.duration;
        } else {
            self.progress = 1.0;
        }
        self.progress = self.progress.min(1.0);

        let eased = self.easing.apply(self.progress);
        self.current = self.start + (self.target - self.start) * eased;

        if self.progress >= 1.0 {
            self.current = self.target;
        }
    }
}

impl Default for Animation {
    fn default() -> Self {
        Self::new(0.0, Easing::ExponentialOut)
    }
}

/// Integer counter that climbs to its value in fixed steps once started.
///
/// Every `duration / steps` seconds the running total grows by
/// `value / steps`; the displayed number is its floor, and the counter snaps
/// to `value` on the step that reaches it.
#[derive(Debug, Clone)]
pub struct CountUp {
    value: u32,
    duration: f32,
    steps: u32,
    elapsed: f32,
    running: bool,
    display: u32,
}

impl CountUp {
    /// Default run time in seconds.
    pub const DEFAULT_DURATION: f32 = 2.0;
    /// Default number of increments.
    pub const DEFAULT_STEPS: u32 = 60;

    /// Creates a stopped counter showing zero.
    #[must_use]
    pub fn new(value: u32) -> Self {
        Self {
            value,
            duration: Self::DEFAULT_DURATION,
            steps: Self::DEFAULT_STEPS,
            elapsed: 0.0,
            running: false,
            display: 0,
        }
    }

    /// Sets run time and step count. Zero steps finishes on first update.
    #[must_use]
    pub fn with_timing(mut self, duration: f32, steps: u32) -> Self {
        self.duration = duration.max(0.0);
        self.steps = steps;
        self
    }

    /// Starts counting. Idempotent.
    pub fn start(&mut self) {
        self.running = true;
    }

    /// Whether the final value is showing.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.display == self.value
    }

    /// Number currently shown.
    #[must_use]
    pub fn display(&self) -> u32 {
        self.display
    }

    /// Advances by `dt` seconds.
    pub fn update(&mut self, dt: f32) {
        if !self.running || self.is_finished() {
            return;
        }
        self.elapsed += dt.max(0.0);

        if self.steps == 0 || self.duration <= 0.0 {
            self.display = self.value;
            return;
        }

        let interval = self.duration / self.steps as f32;
        let ticks = (self.elapsed / interval).floor();
        let running_total = ticks * (self.value as f32 / self.steps as f32);
        self.display = if running_total >= self.value as f32 {
            self.value
        } else {
            running_total.floor() as u32
        };
    }
}
