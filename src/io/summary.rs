use std::io::{self, Write};
use std::path::Path;

use crate::dynamics::state::{Sample, SimulationParameters};

/// Summary statistics accumulated while a trajectory streams past.
#[derive(Debug, Clone, Default)]
pub struct FlightSummary {
    samples: usize,
    apogee: Option<Sample>,
    prev: Option<Sample>,
    last: Option<Sample>,
}

impl FlightSummary {
    pub fn record(&mut self, s: &Sample) {
        self.samples += 1;
        if self.apogee.map_or(true, |a| s.y > a.y) {
            self.apogee = Some(*s);
        }
        self.prev = self.last.replace(*s);
    }

    /// Number of emitted samples, launch point included.
    pub fn samples(&self) -> usize {
        self.samples
    }

    /// Number of Euler steps taken.
    pub fn steps(&self) -> usize {
        self.samples.saturating_sub(1)
    }

    pub fn last(&self) -> Option<&Sample> {
        self.last.as_ref()
    }

    /// Downrange position of the last sample. This is the first point below
    /// launch height, not an interpolated crossing.
    pub fn landing_x(&self) -> f64 {
        self.last.map_or(0.0, |s| s.x)
    }

    pub fn flight_time(&self) -> f64 {
        self.last.map_or(0.0, |s| s.time)
    }

    /// Highest sample as (height, time).
    pub fn apogee(&self) -> (f64, f64) {
        self.apogee.map_or((0.0, 0.0), |s| (s.y, s.time))
    }

    /// Downrange position where the segment between the last two samples
    /// crosses y = 0. `None` unless that segment actually crosses it.
    pub fn interpolated_range(&self) -> Option<f64> {
        let (a, b) = (self.prev?, self.last?);
        if a.y < 0.0 || b.y >= 0.0 {
            return None;
        }
        let frac = a.y / (a.y - b.y);
        Some(a.x + (b.x - a.x) * frac)
    }
}

// ---------------------------------------------------------------------------
// Status stream
// ---------------------------------------------------------------------------

/// Echo the run parameters.
pub fn write_params<W: Write>(writer: &mut W, params: &SimulationParameters) -> io::Result<()> {
    writeln!(writer, "Simulating projectile motion with params:")?;
    writeln!(
        writer,
        "(vinit,theta0,dt)=({:7.2},{:7.2},{:7.2})",
        params.initial_speed, params.initial_angle_deg, params.time_step
    )
}

/// Report the landing estimate, followed by the extra flight figures.
pub fn write_summary<W: Write>(
    writer: &mut W,
    summary: &FlightSummary,
    output: &Path,
) -> io::Result<()> {
    writeln!(writer, "Projectile landed at x ≈ {:.3} meters", summary.landing_x())?;

    let (apogee, apogee_time) = summary.apogee();
    match summary.interpolated_range() {
        Some(range) => write!(writer, "  interpolated y=0 crossing at x ≈ {range:.3} m,")?,
        None => write!(writer, "  no y=0 crossing,")?,
    }
    writeln!(
        writer,
        " apogee {:.3} m at t={:.3} s, flight time {:.3} s ({} steps)",
        apogee,
        apogee_time,
        summary.flight_time(),
        summary.steps()
    )?;
    writeln!(writer, "  trajectory written to {}", output.display())
}
