use nalgebra::Vector2;
use rayon::prelude::*;

use crate::error::SimError;
use crate::forces::Coulomb;
use crate::integrator::integrate_leapfrog;
use crate::state::{SimConfig, State, Trajectory};

// ---------------------------------------------------------------------------
// Planar Coulomb scattering off a fixed charge at the origin
// ---------------------------------------------------------------------------

/// One scattering run: a particle enters the simulation box travelling in
/// +x with a perpendicular offset (the impact parameter) and is integrated
/// until it leaves the box or the step budget runs out.
#[derive(Debug, Clone, Copy)]
pub struct ScatteringConfig {
    pub sign: f64,               // +1 repulsive, -1 attractive
    pub impact_parameter: f64,   // perpendicular offset of the incoming path
    pub speed: f64,              // incoming speed, natural units
    pub box_half_width: f64,     // simulation box half-width L
    pub dt: f64,
    pub max_steps: usize,
}

impl Default for ScatteringConfig {
    fn default() -> Self {
        Self {
            sign: 1.0,
            impact_parameter: 1.0,
            speed: 1.0,
            box_half_width: 5.0,
            dt: 0.01,
            max_steps: 50_000,
        }
    }
}

/// Integrate one scattering trajectory with the leapfrog scheme. The
/// particle starts on the -x face of the box at height b.
pub fn run(cfg: &ScatteringConfig) -> Result<Trajectory<2>, SimError> {
    let initial = State::new(
        Vector2::new(-cfg.box_half_width, cfg.impact_parameter),
        Vector2::new(cfg.speed, 0.0),
    );
    let law = Coulomb { sign: cfg.sign };
    let sim = SimConfig {
        dt: cfg.dt,
        max_steps: cfg.max_steps,
        bound: Some(cfg.box_half_width),
    };
    integrate_leapfrog(&initial, &law, &sim)
}

/// Deflection of the outgoing velocity from the incoming +x direction, in
/// radians. Positive means deflected toward +y.
pub fn deflection_angle(traj: &Trajectory<2>) -> f64 {
    let v = traj.last().vel;
    v.y.atan2(v.x)
}

/// Total mechanical energy in natural units: v^2/2 + sign/r.
pub fn mechanical_energy(sign: f64, state: &State<2>) -> f64 {
    0.5 * state.vel.norm_squared() + sign / state.pos.norm()
}

/// Run a batch of impact parameters in parallel. Each run is an
/// independent pure computation, so the sweep is a flat parallel map.
pub fn sweep(
    base: &ScatteringConfig,
    impact_parameters: &[f64],
) -> Result<Vec<(f64, f64)>, SimError> {
    impact_parameters
        .par_iter()
        .map(|&b| {
            let cfg = ScatteringConfig {
                impact_parameter: b,
                ..*base
            };
            let traj = run(&cfg)?;
            Ok((b, deflection_angle(&traj)))
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
