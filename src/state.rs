use nalgebra::SVector;

use crate::error::SimError;

// ---------------------------------------------------------------------------
// Kinematic state
// ---------------------------------------------------------------------------

/// Position and velocity of a single particle at one instant.
///
/// `D` is the spatial dimensionality: 1 for straight-line kinematics,
/// 2 for planar scattering, 3 for motion in E and B fields. A force law
/// for the wrong dimensionality fails to type-check, so there is no
/// runtime dimension validation to do.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct State<const D: usize> {
    pub time: f64,               // s (natural-unit time)
    pub pos: SVector<f64, D>,
    pub vel: SVector<f64, D>,
}

impl<const D: usize> State<D> {
    /// State at t = 0.
    pub fn new(pos: SVector<f64, D>, vel: SVector<f64, D>) -> Self {
        Self { time: 0.0, pos, vel }
    }

    pub fn speed(&self) -> f64 {
        self.vel.norm()
    }

    /// True if every component is finite (no NaN/Inf).
    pub fn is_finite(&self) -> bool {
        self.pos.iter().chain(self.vel.iter()).all(|c| c.is_finite())
    }

    /// True if every position coordinate satisfies |x_i| <= half_width.
    pub fn in_box(&self, half_width: f64) -> bool {
        self.pos.iter().all(|c| c.abs() <= half_width)
    }
}

// ---------------------------------------------------------------------------
// Trajectory
// ---------------------------------------------------------------------------

/// Why an integration run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    /// The step budget was exhausted.
    StepBudget,
    /// The next step would have left the bounding box; it was not committed.
    LeftBounds,
    /// The force law returned a non-finite acceleration (e.g. evaluated at
    /// the force center). The trajectory ends at the last valid state.
    NonFiniteAccel,
}

/// Time-ordered sequence of states, entry n at t = n * dt.
///
/// Append-only while the integrator runs, read-only afterwards. The stop
/// reason travels with the data so a singular force evaluation cannot be
/// confused with a clean finish.
#[derive(Debug, Clone)]
#[must_use]
pub struct Trajectory<const D: usize> {
    pub states: Vec<State<D>>,
    pub end: StopReason,
}

impl<const D: usize> Trajectory<D> {
    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    /// Final committed state. Trajectories always hold at least the
    /// initial state, so this never panics for integrator output.
    pub fn last(&self) -> &State<D> {
        &self.states[self.states.len() - 1]
    }

    pub fn iter(&self) -> std::slice::Iter<'_, State<D>> {
        self.states.iter()
    }
}

// ---------------------------------------------------------------------------
// Simulation configuration
// ---------------------------------------------------------------------------

/// Fixed-step integration parameters.
///
/// `bound` is the half-width of a symmetric axis-aligned box centered on
/// the origin; `None` disables the bound check entirely.
#[derive(Debug, Clone, Copy)]
pub struct SimConfig {
    pub dt: f64,                 // integration timestep
    pub max_steps: usize,        // hard cap on committed steps
    pub bound: Option<f64>,      // box half-width, if any
}

impl SimConfig {
    pub fn validate(&self) -> Result<(), SimError> {
        if !(self.dt > 0.0) {
            return Err(SimError::NonPositiveDt(self.dt));
        }
        if self.max_steps == 0 {
            return Err(SimError::ZeroStepBudget);
        }
        if let Some(l) = self.bound {
            if !(l > 0.0) {
                return Err(SimError::NonPositiveBound(l));
            }
        }
        Ok(())
    }
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            dt: 0.01,
            max_steps: 20_000,
            bound: None,
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
