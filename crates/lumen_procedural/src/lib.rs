//! # LUMEN Procedural Generation
//!
//! Decorative geometry for the hero scene.
//!
//! ## Design Principles
//!
//! 1. **Injected randomness**: every generator takes `&mut impl Rng`
//! 2. **Reproducible**: same seed, same geometry
//! 3. **Immutable output**: graphs are rebuilt whole, never patched
//! 4. **Infallible**: bad numbers degrade to empty or clamped output
//!
//! ## Core Components
//!
//! - `NodeGraph`: nodes on a spherical shell, thinned proximity edges
//! - `ParticleCloud`: shell points that bob per animation tick
//! - `StarField`: coloured background cube
//! - `Generation`: all three from one seed
//!
//! ## Example
//!
//! ```rust
//! use lumen_procedural::{GenerationSeed, GraphConfig, NodeGraph};
//!
//! let mut rng = GenerationSeed::new(42).rng();
//! let graph = NodeGraph::generate(&GraphConfig::default(), &mut rng);
//!
//! assert_eq!(graph.node_count(), 50);
//! assert!(graph.edges().iter().all(|e| e.length < 1.5));
//! ```

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![warn(clippy::pedantic)]

pub mod config;
pub mod error;
pub mod generator;
pub mod graph;
pub mod orientation;
pub mod particles;
pub mod sampling;
pub mod seed;
pub mod starfield;

pub use config::{GeneratorConfig, GraphConfig, ParticleConfig, ShellRange, StarFieldConfig};
pub use error::{ConfigError, ConfigResult};
pub use generator::Generation;
pub use graph::{GraphEdge, NodeGraph};
pub use orientation::group_orientation;
pub use particles::ParticleCloud;
pub use seed::GenerationSeed;
pub use starfield::{Star, StarField};
