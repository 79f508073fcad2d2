pub mod integrator;
pub mod runner;

pub use integrator::euler_step;
pub use runner::{simulate, simulate_to_file, simulate_with, Trajectory};
