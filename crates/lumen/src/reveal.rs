//! # Section Reveal
//!
//! A page section that fades and slides into place when its visibility
//! trigger fires, optionally with a count-up statistic.
//!
//! ```text
//! ViewportObserver ──► VisibilityTrigger.sync() ──► visible?
//!                                                     │
//!                      ┌──────────────────────────────┤
//!                      ▼                              ▼
//!           opacity 0 → 1, offset → 0        CountUp::start (once)
//! ```

use serde::{Deserialize, Serialize};

use lumen_ui::{
    Animation, CountUp, Easing, RegionId, SharedCapability, VisibilityConfig, VisibilityTrigger,
};

/// Timing and trigger settings shared by every section.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RevealConfig {
    /// Trigger settings for each section.
    pub trigger: VisibilityConfig,
    /// Fade and slide duration in seconds.
    pub duration: f32,
    /// Fade and slide curve.
    pub easing: Easing,
    /// Extra delay per position for sections that enter together, so they
    /// arrive one after another.
    pub stagger: f32,
    /// Distance in pixels a hidden section sits below its resting place.
    pub slide_distance: f32,
    /// Seconds a counter takes to reach its value.
    pub counter_duration: f32,
    /// Increments a counter takes to reach its value.
    pub counter_steps: u32,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            trigger: VisibilityConfig::once(),
            duration: Animation::DEFAULT_DURATION,
            easing: Easing::ExponentialOut,
            stagger: 0.1,
            slide_distance: 50.0,
            counter_duration: CountUp::DEFAULT_DURATION,
            counter_steps: CountUp::DEFAULT_STEPS,
        }
    }
}

/// One revealable section.
#[derive(Debug)]
pub struct SectionReveal {
    name: String,
    trigger: VisibilityTrigger,
    opacity: Animation,
    offset: Animation,
    slide_distance: f32,
    counter: Option<CountUp>,
}

impl SectionReveal {
    /// Creates a hidden, unmounted section.
    #[must_use]
    pub fn new(name: impl Into<String>, capability: SharedCapability, config: &RevealConfig) -> Self {
        let slide_distance = config.slide_distance.max(0.0);
        Self {
            name: name.into(),
            trigger: VisibilityTrigger::new(capability, config.trigger),
            opacity: Animation::new(0.0, config.easing).with_duration(config.duration),
            offset: Animation::new(slide_distance, config.easing).with_duration(config.duration),
            slide_distance,
            counter: None,
        }
    }

    /// Attaches a counter that climbs to `value` on first reveal.
    #[must_use]
    pub fn with_counter(mut self, value: u32, config: &RevealConfig) -> Self {
        self.counter =
            Some(CountUp::new(value).with_timing(config.counter_duration, config.counter_steps));
        self
    }

    /// Holds the fade and slide for `delay` seconds after each visibility
    /// change. The counter is not delayed.
    #[must_use]
    pub fn with_delay(mut self, delay: f32) -> Self {
        self.opacity = self.opacity.with_delay(delay);
        self.offset = self.offset.with_delay(delay);
        self
    }

    /// Starts observing `region`. Returns false when nothing could be
    /// observed, in which case the section stays hidden.
    pub fn mount(&mut self, region: RegionId) -> bool {
        self.trigger.mount(region)
    }

    /// Stops observing. The section keeps whatever it last showed.
    pub fn unmount(&mut self) {
        self.trigger.unmount();
    }

    /// Applies pending visibility changes and advances animations by `dt`
    /// seconds.
    pub fn update(&mut self, dt: f32) {
        if self.trigger.sync() {
            tracing::debug!(
                section = %self.name,
                visible = self.trigger.is_visible(),
                "section visibility changed"
            );
        }

        if self.trigger.is_visible() {
            self.opacity.set_target(1.0);
            self.offset.set_target(0.0);
            if let Some(counter) = &mut self.counter {
                counter.start();
            }
        } else {
            self.opacity.set_target(0.0);
            self.offset.set_target(self.slide_distance);
        }

        self.opacity.update(dt);
        self.offset.update(dt);
        if let Some(counter) = &mut self.counter {
            counter.update(dt);
        }
    }

    /// Section name, for logs.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Current visibility signal.
    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.trigger.is_visible()
    }

    /// Current opacity, 0-1.
    #[must_use]
    pub fn opacity(&self) -> f32 {
        self.opacity.value()
    }

    /// Current downward offset in pixels.
    #[must_use]
    pub fn offset(&self) -> f32 {
        self.offset.value()
    }

    /// Number shown by the counter, if the section has one.
    #[must_use]
    pub fn counter_display(&self) -> Option<u32> {
        self.counter.as_ref().map(CountUp::display)
    }

    /// Whether the section is fully in place.
    #[must_use]
    pub fn is_settled(&self) -> bool {
        self.opacity.is_complete()
            && self.offset.is_complete()
            && self.counter.as_ref().map_or(true, CountUp::is_finished)
    }
}
