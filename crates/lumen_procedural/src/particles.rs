//! # Particle Cloud
//!
//! Points scattered through a spherical shell that bob vertically while the
//! scene runs.
//!
//! ## Frame update
//!
//! Each tick adds `sin(elapsed + index) * amplitude` to every particle's y.
//! The update accumulates: positions depend on the whole call history, not
//! just the latest `elapsed`. Calling [`ParticleCloud::advance`] twice with
//! the same time moves each particle twice.

use lumen_shared::Vec3;
use rand::Rng;

use crate::config::ParticleConfig;
use crate::sampling;

/// A cloud of drifting points.
#[derive(Clone, Debug, Default)]
pub struct ParticleCloud {
    positions: Vec<Vec3>,
    amplitude: f32,
}

impl ParticleCloud {
    /// Generates a cloud from `config`, drawing from `rng`.
    ///
    /// Radius is drawn uniformly, so the cloud is denser toward the inner
    /// radius than a volume-uniform shell would be.
    pub fn generate<R: Rng + ?Sized>(config: &ParticleConfig, rng: &mut R) -> Self {
        let positions = sampling::shell_points(rng, config.radius, config.count);
        let amplitude = if config.drift_amplitude.is_finite() {
            config.drift_amplitude
        } else {
            0.0
        };

        tracing::debug!(particles = positions.len(), amplitude, "generated particle cloud");

        Self {
            positions,
            amplitude,
        }
    }

    /// Current positions.
    #[must_use]
    pub fn positions(&self) -> &[Vec3] {
        &self.positions
    }

    /// Positions as a flat `x, y, z, x, y, z, ...` buffer.
    #[must_use]
    pub fn as_flat(&self) -> &[f32] {
        bytemuck::cast_slice(&self.positions)
    }

    /// Number of particles.
    #[must_use]
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// Returns true if the cloud has no particles.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Vertical drift amplitude.
    #[must_use]
    pub fn amplitude(&self) -> f32 {
        self.amplitude
    }

    /// Applies one animation tick at `elapsed` seconds.
    pub fn advance(&mut self, elapsed: f32) {
        for (index, position) in self.positions.iter_mut().enumerate() {
            position.y += (elapsed + index as f32).sin() * self.amplitude;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ShellRange;
    use crate::seed::GenerationSeed;

    #[test]
    fn test_default_cloud_shape() {
        let mut rng = GenerationSeed::new(2).rng();
        let config = ParticleConfig::default();
        let cloud = ParticleCloud::generate(&config, &mut rng);

        assert_eq!(cloud.len(), 200);
        assert_eq!(cloud.as_flat().len(), 600);
        for p in cloud.positions() {
            assert!(config.radius.contains(p.length(), 1e-4));
        }
    }

    #[test]
    fn test_advance_only_moves_y() {
        let mut rng = GenerationSeed::new(2).rng();
        let mut cloud = ParticleCloud::generate(&ParticleConfig::default(), &mut rng);
        let before = cloud.positions().to_vec();

        cloud.advance(0.5);

        for (index, (old, new)) in before.iter().zip(cloud.positions()).enumerate() {
            assert_eq!(old.x, new.x);
            assert_eq!(old.z, new.z);
            let expected = old.y + (0.5 + index as f32).sin() * 0.002;
            assert!((new.y - expected).abs() < 1e-6);
        }
    }

    #[test]
    fn test_zero_amplitude_is_static() {
        let mut rng = GenerationSeed::new(4).rng();
        let config = ParticleConfig {
            count: 10,
            radius: ShellRange::new(1.0, 2.0),
            drift_amplitude: 0.0,
        };
        let mut cloud = ParticleCloud::generate(&config, &mut rng);
        let before = cloud.positions().to_vec();
        cloud.advance(3.0);
        assert_eq!(before, cloud.positions());
    }
}
