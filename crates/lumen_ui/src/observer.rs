//! # Intersection Capability
//!
//! The host-side feature that reports when a region enters or leaves the
//! visible area. Two flavours exist:
//!
//! - [`ViewportObserver`]: tracks a scrolling viewport and region bounds and
//!   queues an [`IntersectionEntry`] whenever an observed region crosses its
//!   threshold.
//! - [`UnsupportedCapability`]: the host has no such feature. Nothing can be
//!   observed and every caller stays at its default.
//!
//! ## Delivery
//!
//! Layout changes only queue entries. Callers drain their own queue with
//! [`IntersectionCapability::take_records`] on their UI tick, so nothing runs
//! re-entrantly while the host is mutating layout.
//!
//! ## Intersecting
//!
//! A target intersects when its bounds overlap the root (the viewport unless
//! a containing region is given) grown by the root margin, AND the visible
//! fraction of the target is at least the threshold. A zero-area target
//! counts as fully visible while its origin lies inside the root.
//!
//! A root region is looked up on every re-test, so moving or resizing it
//! re-evaluates the targets it contains. Once the root region is removed,
//! its targets read as not intersecting.

use std::collections::BTreeMap;
use std::sync::Arc;

use parking_lot::Mutex;
use serde::{Deserialize, Serialize};

use crate::layout::Rect;
use crate::margin::RootMargin;

/// Default visible fraction required to count as intersecting.
pub const DEFAULT_THRESHOLD: f32 = 0.1;

/// Slack when comparing a ratio against the threshold.
const RATIO_EPSILON: f32 = 1e-6;

/// Handle to a region the host has laid out.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RegionId(u32);

impl RegionId {
    /// Creates a region handle from a raw id.
    #[must_use]
    pub const fn new(raw: u32) -> Self {
        Self(raw)
    }

    /// Returns the raw id.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

/// Handle to one registered observation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObservationId(u64);

/// How an observation tests its target.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ObserverOptions {
    /// Visible fraction of the target, in `[0, 1]`.
    pub threshold: f32,
    /// Containing region; `None` means the viewport.
    pub root: Option<RegionId>,
    /// Offsets applied to the root.
    pub root_margin: RootMargin,
}

impl ObserverOptions {
    /// Threshold clamped to `[0, 1]`, NaN replaced by the default.
    #[must_use]
    pub fn effective_threshold(&self) -> f32 {
        if self.threshold.is_nan() {
            DEFAULT_THRESHOLD
        } else {
            self.threshold.clamp(0.0, 1.0)
        }
    }
}

impl Default for ObserverOptions {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            root: None,
            root_margin: RootMargin::ZERO,
        }
    }
}

/// One intersection report.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct IntersectionEntry {
    /// The observed region.
    pub target: RegionId,
    /// Whether the target counts as visible.
    pub is_intersecting: bool,
    /// Visible fraction of the target, in `[0, 1]`.
    pub intersection_ratio: f32,
    /// Target bounds at report time.
    pub bounds: Rect,
    /// Root bounds (after margin) at report time.
    pub root_bounds: Rect,
}

impl IntersectionEntry {
    /// Measures `bounds` against `root` under `options`.
    #[must_use]
    pub fn measure(target: RegionId, bounds: Rect, root: Rect, options: &ObserverOptions) -> Self {
        let root_bounds = options.root_margin.apply(&root);
        let area = bounds.area();

        let (overlaps, ratio) = if area > 0.0 {
            match bounds.intersection(&root_bounds) {
                Some(visible) => (true, (visible.area() / area).clamp(0.0, 1.0)),
                None => (false, 0.0),
            }
        } else if root_bounds.contains_inclusive(bounds.x, bounds.y) {
            (true, 1.0)
        } else {
            (false, 0.0)
        };

        Self {
            target,
            is_intersecting: overlaps && ratio + RATIO_EPSILON >= options.effective_threshold(),
            intersection_ratio: ratio,
            bounds,
            root_bounds,
        }
    }

    /// Report for a target whose root region no longer exists.
    #[must_use]
    pub fn rootless(target: RegionId, bounds: Rect) -> Self {
        Self {
            target,
            is_intersecting: false,
            intersection_ratio: 0.0,
            bounds,
            root_bounds: Rect::ZERO,
        }
    }
}

/// A host feature that reports region visibility.
pub trait IntersectionCapability {
    /// Starts observing `target`. Returns `None` when the target cannot be
    /// observed (unknown region or no capability); that is not an error.
    ///
    /// A supported capability queues an initial entry for the new
    /// observation.
    fn observe(&mut self, target: RegionId, options: &ObserverOptions) -> Option<ObservationId>;

    /// Stops an observation and discards its queued entries. Unknown ids are
    /// ignored.
    fn unobserve(&mut self, observation: ObservationId);

    /// Drains entries queued for `observation`, oldest first.
    fn take_records(&mut self, observation: ObservationId) -> Vec<IntersectionEntry>;

    /// Number of live observations.
    fn active_observations(&self) -> usize;

    /// Whether `observation` is still live. The host may end an observation
    /// on its own, for example when the target region is removed.
    fn is_active(&self, observation: ObservationId) -> bool;

    /// Whether this capability can observe anything at all.
    fn is_supported(&self) -> bool {
        true
    }
}

/// Capability handle shared between the host and every trigger.
pub type SharedCapability = Arc<Mutex<dyn IntersectionCapability + Send>>;

/// Wraps a capability for sharing.
#[must_use]
pub fn shared<C: IntersectionCapability + Send + 'static>(capability: C) -> Arc<Mutex<C>> {
    Arc::new(Mutex::new(capability))
}

/// A host without intersection support.
#[derive(Clone, Copy, Debug, Default)]
pub struct UnsupportedCapability;

impl IntersectionCapability for UnsupportedCapability {
    fn observe(&mut self, _target: RegionId, _options: &ObserverOptions) -> Option<ObservationId> {
        None
    }

    fn unobserve(&mut self, _observation: ObservationId) {}

    fn take_records(&mut self, _observation: ObservationId) -> Vec<IntersectionEntry> {
        Vec::new()
    }

    fn active_observations(&self) -> usize {
        0
    }

    fn is_active(&self, _observation: ObservationId) -> bool {
        false
    }

    fn is_supported(&self) -> bool {
        false
    }
}

#[derive(Debug)]
struct Observation {
    target: RegionId,
    options: ObserverOptions,
    last_intersecting: bool,
    queue: Vec<IntersectionEntry>,
}

/// A scrolling viewport over a laid-out document.
#[derive(Debug)]
pub struct ViewportObserver {
    /// Visible area in document coordinates.
    viewport: Rect,
    regions: BTreeMap<RegionId, Rect>,
    observations: BTreeMap<ObservationId, Observation>,
    next_region: u32,
    next_observation: u64,
}

impl ViewportObserver {
    /// Creates a viewport of the given size scrolled to the top.
    #[must_use]
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            viewport: Rect::new(0.0, 0.0, width, height),
            regions: BTreeMap::new(),
            observations: BTreeMap::new(),
            next_region: 0,
            next_observation: 0,
        }
    }

    /// Current viewport in document coordinates.
    #[must_use]
    pub fn viewport(&self) -> Rect {
        self.viewport
    }

    /// Lays out a new region and returns its handle.
    pub fn add_region(&mut self, bounds: Rect) -> RegionId {
        let id = RegionId(self.next_region);
        self.next_region += 1;
        self.regions.insert(id, bounds);
        id
    }

    /// Moves or resizes a region. Targets rooted in it are re-tested too.
    pub fn set_region_bounds(&mut self, region: RegionId, bounds: Rect) {
        if let Some(slot) = self.regions.get_mut(&region) {
            *slot = bounds;
            self.refresh();
        }
    }

    /// Removes a region and every observation targeting it. Observations
    /// using it as their root stay registered but stop intersecting.
    pub fn remove_region(&mut self, region: RegionId) {
        if self.regions.remove(&region).is_some() {
            let before = self.observations.len();
            self.observations.retain(|_, obs| obs.target != region);
            tracing::debug!(
                region = region.raw(),
                dropped = before - self.observations.len(),
                "region removed"
            );
            self.refresh();
        }
    }

    /// Scrolls so the viewport's top-left sits at `(x, y)`.
    pub fn scroll_to(&mut self, x: f32, y: f32) {
        self.viewport.x = x;
        self.viewport.y = y;
        self.refresh();
    }

    /// Resizes the viewport, keeping its scroll offset.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.viewport.width = width;
        self.viewport.height = height;
        self.refresh();
    }

    /// Re-tests every observation and queues entries for those that changed.
    fn refresh(&mut self) {
        for observation in self.observations.values_mut() {
            let Some(entry) = measure(
                &self.regions,
                self.viewport,
                observation.target,
                &observation.options,
            ) else {
                continue;
            };
            if entry.is_intersecting != observation.last_intersecting {
                observation.last_intersecting = entry.is_intersecting;
                observation.queue.push(entry);
            }
        }
    }
}

/// Measures `target` against its root. `None` when the target is not laid
/// out.
fn measure(
    regions: &BTreeMap<RegionId, Rect>,
    viewport: Rect,
    target: RegionId,
    options: &ObserverOptions,
) -> Option<IntersectionEntry> {
    let bounds = *regions.get(&target)?;
    let entry = match options.root {
        None => IntersectionEntry::measure(target, bounds, viewport, options),
        Some(root) => match regions.get(&root) {
            Some(root_bounds) => IntersectionEntry::measure(target, bounds, *root_bounds, options),
            None => IntersectionEntry::rootless(target, bounds),
        },
    };
    Some(entry)
}

impl IntersectionCapability for ViewportObserver {
    fn observe(&mut self, target: RegionId, options: &ObserverOptions) -> Option<ObservationId> {
        let entry = measure(&self.regions, self.viewport, target, options)?;

        let id = ObservationId(self.next_observation);
        self.next_observation += 1;
        self.observations.insert(
            id,
            Observation {
                target,
                options: *options,
                last_intersecting: entry.is_intersecting,
                queue: vec![entry],
            },
        );

        tracing::debug!(
            region = target.raw(),
            observation = id.0,
            intersecting = entry.is_intersecting,
            "observing region"
        );
        Some(id)
    }

    fn unobserve(&mut self, observation: ObservationId) {
        if self.observations.remove(&observation).is_some() {
            tracing::debug!(observation = observation.0, "observation released");
        }
    }

    fn take_records(&mut self, observation: ObservationId) -> Vec<IntersectionEntry> {
        self.observations
            .get_mut(&observation)
            .map(|obs| std::mem::take(&mut obs.queue))
            .unwrap_or_default()
    }

    fn active_observations(&self) -> usize {
        self.observations.len()
    }

    fn is_active(&self, observation: ObservationId) -> bool {
        self.observations.contains_key(&observation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page() -> (ViewportObserver, RegionId) {
        let mut viewport = ViewportObserver::new(1000.0, 800.0);
        // Section starting two screens down.
        let region = viewport.add_region(Rect::new(0.0, 1600.0, 1000.0, 400.0));
        (viewport, region)
    }

    #[test]
    fn test_initial_entry_is_queued() {
        let (mut viewport, region) = page();
        let id = viewport.observe(region, &ObserverOptions::default()).unwrap();

        let records = viewport.take_records(id);
        assert_eq!(records.len(), 1);
        assert!(!records[0].is_intersecting);
        assert!(viewport.take_records(id).is_empty());
    }

    #[test]
    fn test_threshold_crossing_queues_entries() {
        let (mut viewport, region) = page();
        let id = viewport.observe(region, &ObserverOptions::default()).unwrap();
        viewport.take_records(id);

        // 20px of a 400px region visible: 5%, below the 10% threshold.
        viewport.scroll_to(0.0, 820.0);
        assert!(viewport.take_records(id).is_empty());

        // 100px visible: 25%.
        viewport.scroll_to(0.0, 900.0);
        let records = viewport.take_records(id);
        assert_eq!(records.len(), 1);
        assert!(records[0].is_intersecting);
        assert!((records[0].intersection_ratio - 0.25).abs() < 1e-6);

        // Further scrolling within the region is not a change.
        viewport.scroll_to(0.0, 1400.0);
        assert!(viewport.take_records(id).is_empty());

        viewport.scroll_to(0.0, 0.0);
        let records = viewport.take_records(id);
        assert_eq!(records.len(), 1);
        assert!(!records[0].is_intersecting);
    }

    #[test]
    fn test_root_margin_extends_viewport() {
        let (mut viewport, region) = page();
        let options = ObserverOptions {
            threshold: 0.0,
            root_margin: RootMargin::parse("0px 0px 900px 0px").unwrap(),
            ..ObserverOptions::default()
        };
        let id = viewport.observe(region, &options).unwrap();
        let records = viewport.take_records(id);
        // Viewport bottom at 800 + 900 margin reaches into the region at 1600.
        assert!(records[0].is_intersecting);
    }

    #[test]
    fn test_explicit_root() {
        let (mut viewport, region) = page();
        let container = viewport.add_region(Rect::new(0.0, 1500.0, 1000.0, 1000.0));
        let options = ObserverOptions {
            root: Some(container),
            ..ObserverOptions::default()
        };
        let id = viewport.observe(region, &options).unwrap();
        assert!(viewport.take_records(id)[0].is_intersecting);

        // Scrolling the viewport does not move a root region.
        viewport.scroll_to(0.0, 5000.0);
        assert!(viewport.take_records(id).is_empty());

        // Moving the root away does.
        viewport.set_region_bounds(container, Rect::new(0.0, 3000.0, 1000.0, 1000.0));
        let records = viewport.take_records(id);
        assert_eq!(records.len(), 1);
        assert!(!records[0].is_intersecting);
    }

    #[test]
    fn test_removed_root_stops_intersecting() {
        let (mut viewport, region) = page();
        let container = viewport.add_region(Rect::new(0.0, 1500.0, 1000.0, 1000.0));
        let options = ObserverOptions {
            root: Some(container),
            ..ObserverOptions::default()
        };
        let id = viewport.observe(region, &options).unwrap();
        viewport.take_records(id);

        viewport.remove_region(container);
        assert!(viewport.is_active(id));
        let records = viewport.take_records(id);
        assert_eq!(records.len(), 1);
        assert!(!records[0].is_intersecting);
        assert_eq!(records[0].root_bounds, Rect::ZERO);
    }

    #[test]
    fn test_unknown_region_is_not_observed() {
        let mut viewport = ViewportObserver::new(100.0, 100.0);
        assert!(viewport
            .observe(RegionId::new(42), &ObserverOptions::default())
            .is_none());
        assert_eq!(viewport.active_observations(), 0);
    }

    #[test]
    fn test_unobserve_discards_queue() {
        let (mut viewport, region) = page();
        let id = viewport.observe(region, &ObserverOptions::default()).unwrap();
        viewport.unobserve(id);
        assert_eq!(viewport.active_observations(), 0);
        viewport.scroll_to(0.0, 1600.0);
        assert!(viewport.take_records(id).is_empty());
    }

    #[test]
    fn test_remove_region_drops_observations() {
        let (mut viewport, region) = page();
        viewport.observe(region, &ObserverOptions::default()).unwrap();
        viewport.observe(region, &ObserverOptions::default()).unwrap();
        assert_eq!(viewport.active_observations(), 2);
        viewport.remove_region(region);
        assert_eq!(viewport.active_observations(), 0);
    }

    #[test]
    fn test_is_active_tracks_host_removal() {
        let (mut viewport, region) = page();
        let id = viewport.observe(region, &ObserverOptions::default()).unwrap();
        assert!(viewport.is_active(id));
        viewport.remove_region(region);
        assert!(!viewport.is_active(id));
        assert!(!UnsupportedCapability.is_active(id));
    }

    #[test]
    fn test_zero_area_target() {
        let mut viewport = ViewportObserver::new(100.0, 100.0);
        let inside = viewport.add_region(Rect::new(10.0, 10.0, 0.0, 0.0));
        let outside = viewport.add_region(Rect::new(10.0, 500.0, 0.0, 0.0));
        let options = ObserverOptions {
            threshold: 1.0,
            ..ObserverOptions::default()
        };
        let a = viewport.observe(inside, &options).unwrap();
        let b = viewport.observe(outside, &options).unwrap();
        assert!(viewport.take_records(a)[0].is_intersecting);
        assert!(!viewport.take_records(b)[0].is_intersecting);
    }

    #[test]
    fn test_full_threshold_when_fully_visible() {
        let mut viewport = ViewportObserver::new(1000.0, 800.0);
        let region = viewport.add_region(Rect::new(13.7, 101.3, 333.3, 77.7));
        let options = ObserverOptions {
            threshold: 1.0,
            ..ObserverOptions::default()
        };
        let id = viewport.observe(region, &options).unwrap();
        assert!(viewport.take_records(id)[0].is_intersecting);
    }

    #[test]
    fn test_threshold_sanitised() {
        let nan = ObserverOptions {
            threshold: f32::NAN,
            ..ObserverOptions::default()
        };
        assert_eq!(nan.effective_threshold(), DEFAULT_THRESHOLD);
        let big = ObserverOptions {
            threshold: 7.0,
            ..ObserverOptions::default()
        };
        assert_eq!(big.effective_threshold(), 1.0);
    }

    #[test]
    fn test_unsupported_observes_nothing() {
        let mut none = UnsupportedCapability;
        assert!(!none.is_supported());
        assert!(none.observe(RegionId::new(0), &ObserverOptions::default()).is_none());
        assert_eq!(none.active_observations(), 0);
    }
}
