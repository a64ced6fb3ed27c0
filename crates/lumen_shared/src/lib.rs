//! # LUMEN Shared
//!
//! Math types used by every LUMEN crate.
//!
//! This crate must NEVER depend on layout, randomness or rendering crates.

#![deny(missing_docs)]
#![deny(unsafe_code)]

pub mod math;

pub use math::{lerp, Euler, Rgb, Vec3};
