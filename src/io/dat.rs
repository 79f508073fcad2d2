use std::io::{self, Write};

use crate::dynamics::state::Sample;

/// Default file name for the trajectory artifact.
pub const DEFAULT_OUTPUT: &str = "trajectory.dat";

/// Header line of the `.dat` format.
pub const HEADER: &str = "# t   x   y   vx   vy";

/// Streaming writer for the whitespace-separated trajectory format.
///
/// Columns: t, x, y, vx, vy, each with six decimal places.
/// Rows are written as they are produced; nothing is buffered beyond what
/// the wrapped writer does itself.
pub struct TrajectoryWriter<W: Write> {
    inner: W,
}

impl<W: Write> TrajectoryWriter<W> {
    pub fn new(inner: W) -> Self {
        Self { inner }
    }

    pub fn write_header(&mut self) -> io::Result<()> {
        writeln!(self.inner, "{HEADER}")
    }

    pub fn write_sample(&mut self, s: &Sample) -> io::Result<()> {
        writeln!(
            self.inner,
            "{:.6} {:.6} {:.6} {:.6} {:.6}",
            s.time, s.x, s.y, s.vx, s.vy
        )
    }

    pub fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }
}
