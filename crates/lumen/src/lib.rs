//! # LUMEN
//!
//! The portfolio page's moving parts, wired together.
//!
//! ## Frame Orchestration
//!
//! ```text
//! Frame N:
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │ 1. CLOCK                                                            │
//! │    └─ FrameClock::advance(delta) → clamped delta, elapsed           │
//! │                                                                     │
//! │ 2. INPUT                                                            │
//! │    ├─ PointerTracker::on_move → normalised pointer                  │
//! │    └─ ViewportObserver::scroll_to → queued intersection entries     │
//! │                                                                     │
//! │ 3. HERO SCENE                                                       │
//! │    ├─ Particles drift by sin(elapsed + i) · amplitude               │
//! │    └─ Graph and star rotations from elapsed + pointer               │
//! │                                                                     │
//! │ 4. SECTIONS                                                         │
//! │    ├─ VisibilityTrigger::sync → visible / latched                   │
//! │    └─ Fade, slide, count-up                                         │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![warn(clippy::pedantic)]

pub mod config;
pub mod error;
pub mod frame_clock;
pub mod reveal;
pub mod scene;

pub use config::{LumenConfig, PreviewConfig};
pub use error::{LumenError, LumenResult};
pub use frame_clock::{FrameClock, FrameStatsAccumulator, FrameTick};
pub use reveal::{RevealConfig, SectionReveal};
pub use scene::{HeroScene, SceneFrame};

pub use lumen_procedural as procedural;
pub use lumen_shared as shared;
pub use lumen_ui as ui;
