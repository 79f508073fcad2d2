use nalgebra::Vector2;

use crate::dynamics::state::G;

/// Uniform gravity acceleration (x downrange, y up).
/// Flat ground, no altitude dependence.
pub fn gravity_accel() -> Vector2<f64> {
    Vector2::new(0.0, -G)
}
