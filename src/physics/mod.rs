pub mod gravity;

pub use gravity::gravity_accel;
