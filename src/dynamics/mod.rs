pub mod state;

use crate::physics::gravity;
use state::{Deriv, State};

// ---------------------------------------------------------------------------
// Equations of motion (2D point mass)
// ---------------------------------------------------------------------------

/// Compute state derivatives for a given state.
///
/// Gravity is the only force: no drag, no thrust. The horizontal
/// acceleration is therefore zero and `vx` never changes.
pub fn derivatives(state: &State) -> Deriv {
    Deriv {
        dpos: state.vel,
        dvel: gravity::gravity_accel(),
    }
}
