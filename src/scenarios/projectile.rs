use nalgebra::SVector;

use crate::error::SimError;
use crate::forces::ConstantAccel;
use crate::integrator::integrate_euler;
use crate::state::{SimConfig, State, Trajectory};

// ---------------------------------------------------------------------------
// 1-D projectile kinematics under constant acceleration
// ---------------------------------------------------------------------------

/// Integrate straight-line motion under a constant acceleration with the
/// semi-implicit Euler scheme.
pub fn run(x0: f64, v0: f64, accel: f64, config: &SimConfig) -> Result<Trajectory<1>, SimError> {
    let initial = State::new(SVector::<f64, 1>::new(x0), SVector::<f64, 1>::new(v0));
    let law = ConstantAccel(SVector::<f64, 1>::new(accel));
    integrate_euler(&initial, &law, config)
}

/// Closed-form position, x0 + v0*t + a*t^2/2.
pub fn analytic_position(x0: f64, v0: f64, accel: f64, t: f64) -> f64 {
    x0 + v0 * t + 0.5 * accel * t * t
}

/// Closed-form velocity, v0 + a*t.
pub fn analytic_velocity(v0: f64, accel: f64, t: f64) -> f64 {
    v0 + accel * t
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
