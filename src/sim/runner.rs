use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::iter::FusedIterator;
use std::path::Path;

use super::integrator::euler_step;
use crate::dynamics::state::{Sample, SimulationParameters, State};
use crate::error::SimError;
use crate::io::dat::TrajectoryWriter;
use crate::io::summary::FlightSummary;

// ---------------------------------------------------------------------------
// Lazy trajectory
// ---------------------------------------------------------------------------

/// Lazy, finite sequence of trajectory samples.
///
/// Yields the launch sample first, then one sample per Euler step while the
/// state before the step is at or above launch height. The first sample
/// below launch height is yielded and ends the sequence (overshoot, no
/// interpolation).
#[derive(Debug)]
pub struct Trajectory {
    state: State,
    dt: f64,
    started: bool,
}

impl Trajectory {
    fn new(params: &SimulationParameters) -> Self {
        Self {
            state: State::launch(params),
            dt: params.time_step,
            started: false,
        }
    }
}

impl Iterator for Trajectory {
    type Item = Sample;

    fn next(&mut self) -> Option<Sample> {
        if !self.started {
            self.started = true;
            return Some(Sample::from(&self.state));
        }
        if !self.state.is_airborne() {
            return None;
        }
        self.state = euler_step(&self.state, self.dt);
        Some(Sample::from(&self.state))
    }
}

impl FusedIterator for Trajectory {}

// ---------------------------------------------------------------------------
// Runs
// ---------------------------------------------------------------------------

/// Validate parameters and return the lazy trajectory.
pub fn simulate(params: &SimulationParameters) -> Result<Trajectory, SimError> {
    params.validate()?;
    Ok(Trajectory::new(params))
}

/// Stream a full run into `writer`, one sample per line, and return the
/// flight summary. Nothing is written if validation fails.
pub fn simulate_with<W: Write>(
    params: &SimulationParameters,
    writer: W,
) -> Result<FlightSummary, SimError> {
    let trajectory = simulate(params)?;
    let mut sink = TrajectoryWriter::new(writer);
    Ok(stream(trajectory, &mut sink)?)
}

/// Stream a full run into a file at `path`. The file is only created once
/// the parameters have been validated.
pub fn simulate_to_file(
    params: &SimulationParameters,
    path: impl AsRef<Path>,
) -> Result<FlightSummary, SimError> {
    let path = path.as_ref();
    let trajectory = simulate(params)?;
    let file = File::create(path).map_err(SimError::output(path))?;
    let mut sink = TrajectoryWriter::new(BufWriter::new(file));
    stream(trajectory, &mut sink).map_err(SimError::output(path))
}

fn stream<W: Write>(
    trajectory: Trajectory,
    sink: &mut TrajectoryWriter<W>,
) -> io::Result<FlightSummary> {
    let mut summary = FlightSummary::default();
    sink.write_header()?;
    for sample in trajectory {
        sink.write_sample(&sample)?;
        summary.record(&sample);
    }
    sink.flush()?;
    Ok(summary)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
