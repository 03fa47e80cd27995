use nalgebra::Vector3;

use crate::error::SimError;
use crate::forces::Lorentz;
use crate::integrator::integrate_leapfrog;
use crate::state::{SimConfig, State, Trajectory};

// ---------------------------------------------------------------------------
// Charged-particle motion in uniform E and B fields
// ---------------------------------------------------------------------------

/// Uniform field configuration, natural units with q/m = 1. The constant-E,
/// constant-B and crossed-field exercises are all this struct with
/// different values.
#[derive(Debug, Clone, Copy)]
pub struct FieldSetup {
    pub e: Vector3<f64>,
    pub b: Vector3<f64>,
}

impl FieldSetup {
    pub fn law(&self) -> Lorentz {
        Lorentz { e: self.e, b: self.b }
    }
}

/// Integrate one particle through the fields with the leapfrog scheme.
pub fn run(
    initial: &State<3>,
    fields: &FieldSetup,
    config: &SimConfig,
) -> Result<Trajectory<3>, SimError> {
    integrate_leapfrog(initial, &fields.law(), config)
}

/// Cyclotron angular frequency, omega = |B| for q/m = 1.
pub fn gyrofrequency(b: Vector3<f64>) -> f64 {
    b.norm()
}

/// Gyration radius for a given perpendicular speed.
pub fn gyroradius(v_perp: f64, b: Vector3<f64>) -> f64 {
    v_perp / b.norm()
}

/// E x B drift velocity of the guiding center.
pub fn exb_drift(e: Vector3<f64>, b: Vector3<f64>) -> Vector3<f64> {
    e.cross(&b) / b.norm_squared()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
