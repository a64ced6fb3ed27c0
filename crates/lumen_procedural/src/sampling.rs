//! Spherical sampling.
//!
//! Directions are uniform over the sphere: azimuth is uniform in `[0, 2pi)`
//! and the polar angle is `acos(2u - 1)`. Drawing the polar angle uniformly
//! instead would bunch points at the poles.

use std::f32::consts::TAU;

use lumen_shared::Vec3;
use rand::Rng;

use crate::config::ShellRange;

/// Samples a point uniformly on the surface of a sphere of `radius`.
pub fn on_sphere<R: Rng + ?Sized>(rng: &mut R, radius: f32) -> Vec3 {
    let theta = rng.gen::<f32>() * TAU;
    let u = rng.gen::<f32>();
    let phi = (2.0 * u - 1.0).clamp(-1.0, 1.0).acos();
    Vec3::from_spherical(radius, theta, phi)
}

/// Samples a point on a sphere whose radius is drawn uniformly from `range`.
///
/// The radius is drawn first, then the direction.
pub fn in_shell<R: Rng + ?Sized>(rng: &mut R, range: ShellRange) -> Vec3 {
    let radius = range.sample(rng);
    on_sphere(rng, radius)
}

/// Samples `count` shell points into a fresh vector.
pub fn shell_points<R: Rng + ?Sized>(rng: &mut R, range: ShellRange, count: usize) -> Vec<Vec3> {
    (0..count).map(|_| in_shell(rng, range)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed::GenerationSeed;

    #[test]
    fn test_shell_points_within_bounds() {
        let mut rng = GenerationSeed::new(3).rng();
        let range = ShellRange::new(2.0, 3.5);
        let points = shell_points(&mut rng, range, 1000);
        assert_eq!(points.len(), 1000);
        for p in points {
            assert!(range.contains(p.length(), 1e-4), "out of shell: {}", p.length());
        }
    }

    #[test]
    fn test_polar_distribution_not_clustered() {
        // Uniform on the sphere means z is uniform in [-r, r]; uniform polar
        // angle would overfill the |z| > 0.9r caps.
        let mut rng = GenerationSeed::new(11).rng();
        let samples = 20_000;
        let caps = (0..samples)
            .map(|_| on_sphere(&mut rng, 1.0))
            .filter(|p| p.z.abs() > 0.9)
            .count();
        let fraction = caps as f32 / samples as f32;
        assert!((fraction - 0.1).abs() < 0.02, "cap fraction {fraction}");
    }

    #[test]
    fn test_degenerate_shell_is_a_sphere() {
        let mut rng = GenerationSeed::new(5).rng();
        let p = in_shell(&mut rng, ShellRange::new(1.0, 1.0));
        assert!((p.length() - 1.0).abs() < 1e-5);
    }
}
