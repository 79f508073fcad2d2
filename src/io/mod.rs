pub mod dat;
pub mod summary;

pub use dat::{TrajectoryWriter, DEFAULT_OUTPUT};
pub use summary::FlightSummary;
