//! # Generator Configuration
//!
//! Every knob has a default matching the hero scene, so an empty TOML file
//! (or no file at all) yields the stock look. Unknown keys are rejected so a
//! typo does not silently fall back to a default.
//!
//! ```toml
//! seed = 42
//!
//! [graph]
//! node_count = 80
//! edge_distance = 1.2
//!
//! [particles]
//! radius = { min = 1.0, max = 5.0 }
//! ```

use std::path::Path;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, ConfigResult};

/// Radius bounds of a spherical shell.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ShellRange {
    /// Inner radius.
    pub min: f32,
    /// Outer radius.
    pub max: f32,
}

impl ShellRange {
    /// Creates a new range.
    #[must_use]
    pub const fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    /// Returns a usable range: non-finite bounds become zero, negative radii
    /// are clamped to zero and inverted bounds are swapped.
    #[must_use]
    pub fn normalized(self) -> Self {
        let clean = |v: f32| if v.is_finite() { v.max(0.0) } else { 0.0 };
        let (a, b) = (clean(self.min), clean(self.max));
        if a <= b {
            Self::new(a, b)
        } else {
            Self::new(b, a)
        }
    }

    /// Draws a radius uniformly from `[min, max)`.
    pub fn sample<R: Rng + ?Sized>(self, rng: &mut R) -> f32 {
        let range = self.normalized();
        range.min + rng.gen::<f32>() * (range.max - range.min)
    }

    /// Returns true if `radius` lies within the range, widened by `tolerance`.
    #[must_use]
    pub fn contains(self, radius: f32, tolerance: f32) -> bool {
        let range = self.normalized();
        radius >= range.min - tolerance && radius <= range.max + tolerance
    }
}

/// Node graph parameters.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GraphConfig {
    /// Number of nodes.
    pub node_count: usize,
    /// Shell the nodes are placed on.
    pub node_radius: ShellRange,
    /// Pairs closer than this may be connected.
    pub edge_distance: f32,
    /// Chance that an in-range pair is connected.
    pub edge_probability: f32,
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            node_count: 50,
            node_radius: ShellRange::new(2.0, 3.5),
            edge_distance: 1.5,
            edge_probability: 0.5,
        }
    }
}

/// Particle cloud parameters.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ParticleConfig {
    /// Number of particles.
    pub count: usize,
    /// Shell the particles are scattered through.
    pub radius: ShellRange,
    /// Vertical nudge per frame, scaled by the oscillation.
    pub drift_amplitude: f32,
}

impl Default for ParticleConfig {
    fn default() -> Self {
        Self {
            count: 200,
            radius: ShellRange::new(1.5, 4.0),
            drift_amplitude: 0.002,
        }
    }
}

/// Background star field parameters.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StarFieldConfig {
    /// Number of stars.
    pub count: usize,
    /// Edge length of the cube the stars fill, centred on the origin.
    pub extent: f32,
}

impl Default for StarFieldConfig {
    fn default() -> Self {
        Self {
            count: 500,
            extent: 30.0,
        }
    }
}

/// Full generator configuration.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GeneratorConfig {
    /// Fixed seed. `None` draws a fresh seed per generation.
    pub seed: Option<u64>,
    /// Node graph.
    pub graph: GraphConfig,
    /// Particle cloud.
    pub particles: ParticleConfig,
    /// Star field.
    pub stars: StarFieldConfig,
}

impl GeneratorConfig {
    /// Parses and validates a config from TOML text.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Parse` for malformed TOML or unknown keys and
    /// `ConfigError::Invalid` for unusable values.
    pub fn from_toml_str(text: &str) -> ConfigResult<Self> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates a config file.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Io` if the file cannot be read, otherwise as
    /// [`GeneratorConfig::from_toml_str`].
    pub fn from_file(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    /// Checks values a config file could plausibly get wrong.
    ///
    /// The generators themselves tolerate any input; this only catches
    /// mistakes that would silently produce an empty or degenerate scene.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Invalid` describing the first bad value.
    pub fn validate(&self) -> ConfigResult<()> {
        let finite = [
            ("graph.node_radius.min", self.graph.node_radius.min),
            ("graph.node_radius.max", self.graph.node_radius.max),
            ("graph.edge_distance", self.graph.edge_distance),
            ("graph.edge_probability", self.graph.edge_probability),
            ("particles.radius.min", self.particles.radius.min),
            ("particles.radius.max", self.particles.radius.max),
            ("particles.drift_amplitude", self.particles.drift_amplitude),
            ("stars.extent", self.stars.extent),
        ];
        for (name, value) in finite {
            if !value.is_finite() {
                return Err(ConfigError::Invalid(format!("{name} must be finite, got {value}")));
            }
        }

        if !(0.0..=1.0).contains(&self.graph.edge_probability) {
            return Err(ConfigError::Invalid(format!(
                "graph.edge_probability must be within [0, 1], got {}",
                self.graph.edge_probability
            )));
        }

        for (name, range) in [
            ("graph.node_radius", self.graph.node_radius),
            ("particles.radius", self.particles.radius),
        ] {
            if range.min < 0.0 || range.min > range.max {
                return Err(ConfigError::Invalid(format!(
                    "{name} must satisfy 0 <= min <= max, got [{}, {}]",
                    range.min, range.max
                )));
            }
        }

        Ok(())
    }
}

/// Clamps a probability into `[0, 1]`, mapping NaN to `fallback`.
#[inline]
#[must_use]
pub(crate) fn unit_interval(value: f32, fallback: f32) -> f32 {
    if value.is_nan() {
        fallback
    } else {
        value.clamp(0.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_toml_uses_defaults() {
        let config = GeneratorConfig::from_toml_str("").unwrap();
        assert_eq!(config, GeneratorConfig::default());
        assert_eq!(config.graph.node_count, 50);
        assert_eq!(config.particles.count, 200);
        assert_eq!(config.stars.count, 500);
    }

    #[test]
    fn test_partial_toml_overrides() {
        let config = GeneratorConfig::from_toml_str(
            r#"
            seed = 9

            [graph]
            node_count = 12
            node_radius = { min = 1.0, max = 2.0 }

            [particles]
            drift_amplitude = 0.01
            "#,
        )
        .unwrap();

        assert_eq!(config.seed, Some(9));
        assert_eq!(config.graph.node_count, 12);
        assert_eq!(config.graph.node_radius, ShellRange::new(1.0, 2.0));
        assert_eq!(config.graph.edge_distance, 1.5);
        assert_eq!(config.particles.drift_amplitude, 0.01);
        assert_eq!(config.particles.count, 200);
    }

    #[test]
    fn test_unknown_key_rejected() {
        let err = GeneratorConfig::from_toml_str("[graph]\nnode_cout = 3\n").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)), "{err}");
    }

    #[test]
    fn test_bad_probability_rejected() {
        let err = GeneratorConfig::from_toml_str("[graph]\nedge_probability = 1.5\n").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)), "{err}");
    }

    #[test]
    fn test_inverted_shell_rejected_by_validate_but_normalized_for_sampling() {
        let err = GeneratorConfig::from_toml_str("[particles]\nradius = { min = 4.0, max = 1.0 }\n")
            .unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));

        let range = ShellRange::new(4.0, -1.0).normalized();
        assert_eq!(range, ShellRange::new(0.0, 4.0));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = GeneratorConfig::from_file("/definitely/not/here.toml").unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }

    #[test]
    fn test_unit_interval() {
        assert_eq!(unit_interval(f32::NAN, 0.5), 0.5);
        assert_eq!(unit_interval(-2.0, 0.5), 0.0);
        assert_eq!(unit_interval(3.0, 0.5), 1.0);
    }
}
