//! # Visibility Trigger
//!
//! Turns intersection reports for one region into a boolean "is visible"
//! signal.
//!
//! ## States
//!
//! ```text
//!            intersecting              intersecting (trigger_once)
//!   Pending ─────────────> Visible     Pending ─────────────────────> Latched
//!      ^                      │
//!      └──────────────────────┘
//!          not intersecting
//! ```
//!
//! - **Pending**: not visible (initial state, and the state with no target).
//! - **Visible**: currently visible, continuous mode.
//! - **Latched**: became visible in single-fire mode. Terminal; the
//!   observation is released as soon as it is reached.
//!
//! ## Lifecycle
//!
//! A trigger holds at most one observation. Mounting a new target, changing
//! the configuration, unmounting and dropping all release the previous
//! observation first, so observers are never leaked.

use serde::{Deserialize, Serialize};

use crate::margin::RootMargin;
use crate::observer::{
    IntersectionEntry, ObservationId, ObserverOptions, RegionId, SharedCapability, DEFAULT_THRESHOLD,
};

/// Settings for a [`VisibilityTrigger`].
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct VisibilityConfig {
    /// Visible fraction of the region required, in `[0, 1]`.
    pub threshold: f32,
    /// Containing region; `None` means the viewport.
    pub root: Option<RegionId>,
    /// Offsets applied to the root before testing.
    pub root_margin: RootMargin,
    /// Latch the signal on first sight.
    pub trigger_once: bool,
}

impl VisibilityConfig {
    /// Continuous tracking with default threshold.
    #[must_use]
    pub fn continuous() -> Self {
        Self::default()
    }

    /// Single-fire with default threshold.
    #[must_use]
    pub fn once() -> Self {
        Self {
            trigger_once: true,
            ..Self::default()
        }
    }

    /// Sets the threshold.
    #[must_use]
    pub fn with_threshold(mut self, threshold: f32) -> Self {
        self.threshold = threshold;
        self
    }

    /// Sets the root margin.
    #[must_use]
    pub fn with_root_margin(mut self, root_margin: RootMargin) -> Self {
        self.root_margin = root_margin;
        self
    }

    /// Tests against a containing region instead of the viewport.
    #[must_use]
    pub fn with_root(mut self, root: RegionId) -> Self {
        self.root = Some(root);
        self
    }

    /// Options passed to the capability.
    #[must_use]
    pub fn observer_options(&self) -> ObserverOptions {
        ObserverOptions {
            threshold: self.threshold,
            root: self.root,
            root_margin: self.root_margin,
        }
    }
}

impl Default for VisibilityConfig {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            root: None,
            root_margin: RootMargin::ZERO,
            trigger_once: false,
        }
    }
}

/// Trigger state machine.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TriggerState {
    /// Not visible.
    #[default]
    Pending,
    /// Visible, tracking continuously.
    Visible,
    /// Seen once in single-fire mode; stays visible.
    Latched,
}

impl TriggerState {
    /// Whether this state reads as visible.
    #[must_use]
    pub const fn is_visible(self) -> bool {
        matches!(self, Self::Visible | Self::Latched)
    }

    /// Next state after an intersection report.
    #[must_use]
    pub const fn on_report(self, intersecting: bool, trigger_once: bool) -> Self {
        match (self, intersecting, trigger_once) {
            (Self::Latched, _, _) => Self::Latched,
            (_, true, true) => Self::Latched,
            (_, true, false) => Self::Visible,
            (_, false, _) => Self::Pending,
        }
    }
}

/// Live visibility signal for one mounted region.
pub struct VisibilityTrigger {
    capability: SharedCapability,
    config: VisibilityConfig,
    state: TriggerState,
    target: Option<RegionId>,
    observation: Option<ObservationId>,
}

impl VisibilityTrigger {
    /// Creates an unmounted trigger. The signal starts false.
    #[must_use]
    pub fn new(capability: SharedCapability, config: VisibilityConfig) -> Self {
        Self {
            capability,
            config,
            state: TriggerState::Pending,
            target: None,
            observation: None,
        }
    }

    /// The visibility signal.
    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.state.is_visible()
    }

    /// Current state.
    #[must_use]
    pub fn state(&self) -> TriggerState {
        self.state
    }

    /// Mounted region, if any.
    #[must_use]
    pub fn target(&self) -> Option<RegionId> {
        self.target
    }

    /// Whether an observation is currently registered and still live on
    /// the host side.
    #[must_use]
    pub fn is_observing(&self) -> bool {
        self.observation
            .is_some_and(|observation| self.capability.lock().is_active(observation))
    }

    /// Mounts `target`, replacing any previous one.
    ///
    /// Returns whether an observation was registered. `false` means the
    /// capability is unavailable, the region is unknown, or the trigger is
    /// already latched; the signal simply keeps its value.
    pub fn mount(&mut self, target: RegionId) -> bool {
        self.release();
        self.target = Some(target);
        self.connect()
    }

    /// Unmounts the current target and releases its observation.
    pub fn unmount(&mut self) {
        self.release();
        self.target = None;
    }

    /// Applies a new configuration, re-registering if it changed.
    pub fn reconfigure(&mut self, config: VisibilityConfig) {
        if config == self.config {
            return;
        }
        self.release();
        self.config = config;
        if self.state == TriggerState::Latched && !config.trigger_once {
            // Continuous tracking resumes from "visible".
            self.state = TriggerState::Visible;
        }
        if self.target.is_some() {
            self.connect();
        }
    }

    /// Drains queued reports and applies them in order.
    ///
    /// Returns true if the signal changed.
    pub fn sync(&mut self) -> bool {
        let Some(observation) = self.observation else {
            return false;
        };
        let records = self.capability.lock().take_records(observation);

        let before = self.is_visible();
        for entry in &records {
            self.apply(entry);
        }
        before != self.is_visible()
    }

    /// Applies one report. Reports for other regions are ignored.
    pub fn apply(&mut self, entry: &IntersectionEntry) {
        if self.target != Some(entry.target) {
            return;
        }

        let next = self.state.on_report(entry.is_intersecting, self.config.trigger_once);
        if next != self.state {
            tracing::trace!(
                region = entry.target.raw(),
                from = ?self.state,
                to = ?next,
                ratio = entry.intersection_ratio,
                "visibility changed"
            );
        }
        self.state = next;

        if self.state == TriggerState::Latched {
            self.release();
        }
    }

    fn connect(&mut self) -> bool {
        let Some(target) = self.target else {
            return false;
        };
        if self.state == TriggerState::Latched {
            return false;
        }

        let options = self.config.observer_options();
        let mut capability = self.capability.lock();
        self.observation = capability.observe(target, &options);
        if self.observation.is_none() && !capability.is_supported() {
            tracing::debug!(
                region = target.raw(),
                "intersection capability unavailable, region stays hidden"
            );
        }
        self.observation.is_some()
    }

    fn release(&mut self) {
        if let Some(observation) = self.observation.take() {
            self.capability.lock().unobserve(observation);
        }
    }
}

impl Drop for VisibilityTrigger {
    fn drop(&mut self) {
        self.release();
    }
}

impl std::fmt::Debug for VisibilityTrigger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VisibilityTrigger")
            .field("config", &self.config)
            .field("state", &self.state)
            .field("target", &self.target)
            .field("observation", &self.observation)
            .finish_non_exhaustive()
    }
}
