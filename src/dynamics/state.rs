use nalgebra::Vector2;

use crate::error::SimError;

// ---------------------------------------------------------------------------
// Physical constants
// ---------------------------------------------------------------------------

pub const G: f64 = 9.8; // gravitational acceleration, m/s^2

// ---------------------------------------------------------------------------
// Simulation parameters
// ---------------------------------------------------------------------------

/// Launch conditions and integration step for a single run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimulationParameters {
    pub initial_speed: f64,     // m/s
    pub initial_angle_deg: f64, // deg above horizontal
    pub time_step: f64,         // s
}

impl Default for SimulationParameters {
    fn default() -> Self {
        Self {
            initial_speed: 10.0,
            initial_angle_deg: 45.0,
            time_step: 0.01, // 100 Hz
        }
    }
}

impl SimulationParameters {
    pub fn new(initial_speed: f64, initial_angle_deg: f64, time_step: f64) -> Self {
        Self { initial_speed, initial_angle_deg, time_step }
    }

    /// Reject parameters the Euler loop cannot terminate on or would turn
    /// into NaN samples.
    pub fn validate(&self) -> Result<(), SimError> {
        finite("initial_speed", self.initial_speed)?;
        finite("initial_angle_deg", self.initial_angle_deg)?;
        finite("time_step", self.time_step)?;
        if self.time_step <= 0.0 {
            return Err(SimError::InvalidParameter {
                name: "time_step",
                value: self.time_step,
                reason: "must be greater than zero",
            });
        }

        let dt = self.time_step;
        let v = self.launch_velocity();
        if !(v * dt).iter().all(|c| c.is_finite()) {
            return Err(SimError::InvalidParameter {
                name: "initial_speed",
                value: self.initial_speed,
                reason: "position step overflows at this time step",
            });
        }
        if !(G * dt).is_finite() {
            return Err(SimError::InvalidParameter {
                name: "time_step",
                value: dt,
                reason: "velocity step overflows",
            });
        }
        // A climbing projectile whose vy cannot absorb g*dt never comes down.
        if v.y >= 0.0 && v.y - G * dt == v.y {
            return Err(SimError::InvalidParameter {
                name: "time_step",
                value: dt,
                reason: "too small for gravity to change the vertical speed",
            });
        }
        let climb = v.y.max(0.0);
        if !(climb / (2.0 * G) * climb + climb * dt).is_finite() {
            return Err(SimError::InvalidParameter {
                name: "initial_speed",
                value: self.initial_speed,
                reason: "apex height overflows",
            });
        }
        Ok(())
    }

    /// Launch angle in radians.
    pub fn launch_angle(&self) -> f64 {
        self.initial_angle_deg * std::f64::consts::PI / 180.0
    }

    /// Initial velocity vector (vx, vy).
    pub fn launch_velocity(&self) -> Vector2<f64> {
        let theta = self.launch_angle();
        Vector2::new(
            self.initial_speed * theta.cos(),
            self.initial_speed * theta.sin(),
        )
    }
}

fn finite(name: &'static str, value: f64) -> Result<(), SimError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(SimError::InvalidParameter { name, value, reason: "must be a finite number" })
    }
}

// ---------------------------------------------------------------------------
// Simulation state
// ---------------------------------------------------------------------------

/// Projectile state at a single point in time.
/// Frame: x downrange, y up, origin at the launch point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct State {
    pub time: f64,         // s
    pub pos: Vector2<f64>, // m
    pub vel: Vector2<f64>, // m/s
}

impl State {
    /// State at t = 0 for the given launch conditions.
    pub fn launch(params: &SimulationParameters) -> Self {
        State {
            time: 0.0,
            pos: Vector2::zeros(),
            vel: params.launch_velocity(),
        }
    }

    /// New state advanced by a derivative scaled by dt. Every component is
    /// computed from `self`, never from a partially updated state.
    pub fn apply(&self, d: &Deriv, dt: f64) -> State {
        State {
            time: self.time + dt,
            pos: self.pos + d.dpos * dt,
            vel: self.vel + d.dvel * dt,
        }
    }

    /// At or above launch height.
    pub fn is_airborne(&self) -> bool {
        self.pos.y >= 0.0
    }
}

// ---------------------------------------------------------------------------
// State derivative (dp/dt, dv/dt)
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Deriv {
    pub dpos: Vector2<f64>, // velocity
    pub dvel: Vector2<f64>, // acceleration
}

// ---------------------------------------------------------------------------
// Emitted sample
// ---------------------------------------------------------------------------

/// One row of the trajectory: (t, x, y, vx, vy).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    pub time: f64,
    pub x: f64,
    pub y: f64,
    pub vx: f64,
    pub vy: f64,
}

impl From<&State> for Sample {
    fn from(s: &State) -> Self {
        Sample {
            time: s.time,
            x: s.pos.x,
            y: s.pos.y,
            vx: s.vel.x,
            vy: s.vel.y,
        }
    }
}
