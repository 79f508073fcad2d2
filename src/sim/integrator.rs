use crate::dynamics;
use crate::dynamics::state::State;

// ---------------------------------------------------------------------------
// Explicit (forward) Euler integrator
// ---------------------------------------------------------------------------

/// Single Euler step: advance state by dt using derivatives evaluated at the
/// start of the step. Returns the new state; `state` is left untouched.
pub fn euler_step(state: &State, dt: f64) -> State {
    let d = dynamics::derivatives(state);
    state.apply(&d, dt)
}
