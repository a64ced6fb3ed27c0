//! Group orientation for the node graph.
//!
//! Nodes and edges never move relative to each other. The consumer spins the
//! whole group: a slow turn about Y, a gentle nod about X, and a tilt toward
//! the pointer.

use lumen_shared::Euler;

/// Turn about Y, radians per second.
pub const SPIN_RATE: f32 = 0.1;
/// Angular frequency of the X nod.
pub const NOD_RATE: f32 = 0.05;
/// Amplitude of the X nod, radians.
pub const NOD_AMPLITUDE: f32 = 0.1;
/// Radians of tilt per unit of normalised pointer offset.
pub const POINTER_INFLUENCE: f32 = 0.3;

/// Orientation of the node graph at `elapsed` seconds.
///
/// `pointer` is the normalised pointer position, each axis in `[-1, 1]`
/// with y pointing up.
#[must_use]
pub fn group_orientation(elapsed: f32, pointer: (f32, f32)) -> Euler {
    let (px, py) = pointer;
    Euler::new(
        (elapsed * NOD_RATE).sin() * NOD_AMPLITUDE + py * POINTER_INFLUENCE,
        elapsed * SPIN_RATE + px * POINTER_INFLUENCE,
        0.0,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rest_orientation() {
        assert_eq!(group_orientation(0.0, (0.0, 0.0)), Euler::IDENTITY);
    }

    #[test]
    fn test_pointer_tilts_group() {
        let centred = group_orientation(4.0, (0.0, 0.0));
        let tilted = group_orientation(4.0, (1.0, -1.0));
        assert!((tilted.y - centred.y - 0.3).abs() < 1e-6);
        assert!((tilted.x - centred.x + 0.3).abs() < 1e-6);
    }
}
