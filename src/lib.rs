//! Two-dimensional projectile motion under constant gravity, integrated with a
//! fixed-step explicit Euler method and streamed to a `trajectory.dat` file.

pub mod cli;
pub mod dynamics;
pub mod error;
pub mod io;
pub mod physics;
pub mod sim;

pub use error::SimError;

pub mod types {
    pub use crate::dynamics::state::{Deriv, Sample, SimulationParameters, State, G};
}
