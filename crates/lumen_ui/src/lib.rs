//! # LUMEN UI
//!
//! Scroll-driven reveal for page sections.
//!
//! ## Architecture
//!
//! ```text
//! ┌────────────────────────────────────────────────────────────────┐
//! │                        REVEAL PIPELINE                         │
//! ├────────────────────────────────────────────────────────────────┤
//! │  Layout change → Capability → Queued entries → Trigger.sync()  │
//! │       ↓              ↓               ↓               ↓         │
//! │  scroll/resize   root + margin   per observation  state machine│
//! └────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Nothing in this crate fails at runtime. A host without intersection
//! support hands triggers an [`UnsupportedCapability`] and every section
//! simply stays hidden.

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![warn(clippy::pedantic)]

pub mod animation;
pub mod error;
pub mod layout;
pub mod margin;
pub mod observer;
pub mod pointer;
pub mod visibility;

pub use animation::{Animation, CountUp, Easing};
pub use error::{UiError, UiResult};
pub use layout::{Insets, Rect};
pub use margin::{Length, RootMargin};
pub use observer::{
    shared, IntersectionCapability, IntersectionEntry, ObservationId, ObserverOptions, RegionId,
    SharedCapability, UnsupportedCapability, ViewportObserver,
};
pub use pointer::{PointerPosition, PointerTracker};
pub use visibility::{TriggerState, VisibilityConfig, VisibilityTrigger};
