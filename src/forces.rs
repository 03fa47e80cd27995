use nalgebra::{SVector, Vector2, Vector3};

use crate::state::State;

// ---------------------------------------------------------------------------
// Force-law contract
// ---------------------------------------------------------------------------

/// A pure acceleration law: (state, t) -> acceleration.
///
/// Laws are stateless values; the same law evaluated at the same state and
/// time always yields the same vector. Closures of the matching signature
/// work directly via the blanket impl.
pub trait ForceLaw<const D: usize> {
    fn accel(&self, state: &State<D>, t: f64) -> SVector<f64, D>;
}

impl<const D: usize, F> ForceLaw<D> for F
where
    F: Fn(&State<D>, f64) -> SVector<f64, D>,
{
    fn accel(&self, state: &State<D>, t: f64) -> SVector<f64, D> {
        self(state, t)
    }
}

// ---------------------------------------------------------------------------
// Constant acceleration (projectile kinematics)
// ---------------------------------------------------------------------------

/// State-independent acceleration, e.g. uniform gravity.
#[derive(Debug, Clone, Copy)]
pub struct ConstantAccel<const D: usize>(pub SVector<f64, D>);

impl<const D: usize> ForceLaw<D> for ConstantAccel<D> {
    fn accel(&self, _state: &State<D>, _t: f64) -> SVector<f64, D> {
        self.0
    }
}

// ---------------------------------------------------------------------------
// Coulomb inverse-square force (planar, fixed center at origin)
// ---------------------------------------------------------------------------

/// a = sign * r / |r|^3 in natural units.
///
/// Charge magnitudes are normalized away; only the relative sign of the
/// two charges matters. Evaluating at the origin divides zero by zero and
/// yields NaN, which the integrator detects and reports as a singularity.
#[derive(Debug, Clone, Copy)]
pub struct Coulomb {
    pub sign: f64,               // +1 repulsive, -1 attractive
}

impl Coulomb {
    pub fn repulsive() -> Self {
        Self { sign: 1.0 }
    }

    pub fn attractive() -> Self {
        Self { sign: -1.0 }
    }

    /// sign = sgn(q * Q): like charges repel, unlike attract.
    pub fn from_charges(q: f64, big_q: f64) -> Self {
        Self {
            sign: (q * big_q).signum(),
        }
    }
}

impl ForceLaw<2> for Coulomb {
    fn accel(&self, state: &State<2>, _t: f64) -> Vector2<f64> {
        let r = state.pos.norm();
        self.sign * state.pos / (r * r * r)
    }
}

// ---------------------------------------------------------------------------
// Lorentz force (uniform fields, natural units with q/m = 1)
// ---------------------------------------------------------------------------

/// a = E + v x B for constant field vectors. Linear in the state and never
/// singular.
#[derive(Debug, Clone, Copy)]
pub struct Lorentz {
    pub e: Vector3<f64>,
    pub b: Vector3<f64>,
}

impl ForceLaw<3> for Lorentz {
    fn accel(&self, state: &State<3>, _t: f64) -> Vector3<f64> {
        self.e + state.vel.cross(&self.b)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
