//! Background star field.
//!
//! Stars fill a cube centred on the origin. Each star gets a colour somewhere
//! between the cyan and purple accents; the whole field turns slowly.

use lumen_shared::{Euler, Rgb, Vec3};
use rand::Rng;

use crate::config::StarFieldConfig;

/// Colour at `t = 0`.
const STAR_FROM: Rgb = Rgb::new(0.0, 0.83, 1.0);
/// Colour at `t = 1`.
const STAR_TO: Rgb = Rgb::new(0.66, 0.33, 0.97);

/// Spin about Y, radians per second.
const SPIN_Y: f32 = 0.02;
/// Spin about X, radians per second.
const SPIN_X: f32 = 0.01;

/// A single background star.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Star {
    /// Position.
    pub position: Vec3,
    /// Vertex colour.
    pub color: Rgb,
}

/// A generated star field.
#[derive(Clone, Debug, Default)]
pub struct StarField {
    stars: Vec<Star>,
    extent: f32,
}

impl StarField {
    /// Generates a star field from `config`, drawing from `rng`.
    pub fn generate<R: Rng + ?Sized>(config: &StarFieldConfig, rng: &mut R) -> Self {
        let extent = if config.extent.is_finite() {
            config.extent.abs()
        } else {
            0.0
        };

        let stars = (0..config.count)
            .map(|_| {
                let position = Vec3::new(
                    (rng.gen::<f32>() - 0.5) * extent,
                    (rng.gen::<f32>() - 0.5) * extent,
                    (rng.gen::<f32>() - 0.5) * extent,
                );
                let color = STAR_FROM.lerp(STAR_TO, rng.gen::<f32>());
                Star { position, color }
            })
            .collect::<Vec<_>>();

        tracing::debug!(stars = stars.len(), extent, "generated star field");

        Self { stars, extent }
    }

    /// The stars.
    #[must_use]
    pub fn stars(&self) -> &[Star] {
        &self.stars
    }

    /// Interleaved `position, colour` buffer, six floats per star.
    #[must_use]
    pub fn as_flat(&self) -> &[f32] {
        bytemuck::cast_slice(&self.stars)
    }

    /// Cube edge length.
    #[must_use]
    pub fn extent(&self) -> f32 {
        self.extent
    }

    /// Field rotation at `elapsed` seconds.
    #[must_use]
    pub fn rotation_at(elapsed: f32) -> Euler {
        Euler::new(elapsed * SPIN_X, elapsed * SPIN_Y, 0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed::GenerationSeed;

    #[test]
    fn test_stars_inside_cube_with_blended_colours() {
        let mut rng = GenerationSeed::new(13).rng();
        let field = StarField::generate(&StarFieldConfig::default(), &mut rng);
        assert_eq!(field.stars().len(), 500);
        assert_eq!(field.as_flat().len(), 500 * 6);

        for star in field.stars() {
            for c in star.position.to_array() {
                assert!((-15.0..15.0).contains(&c), "outside cube: {c}");
            }
            assert!((0.0..=0.66).contains(&star.color.r));
            assert!((0.33..=0.83).contains(&star.color.g));
            assert!((0.97..=1.0).contains(&star.color.b));
        }
    }

    #[test]
    fn test_rotation_rates() {
        let r = StarField::rotation_at(10.0);
        assert!((r.y - 0.2).abs() < 1e-6);
        assert!((r.x - 0.1).abs() < 1e-6);
        assert_eq!(r.z, 0.0);
    }
}
