use nalgebra::SVector;

use crate::error::SimError;
use crate::forces::ForceLaw;
use crate::state::{SimConfig, State, StopReason, Trajectory};

// ---------------------------------------------------------------------------
// Fixed-step trajectory integration
// ---------------------------------------------------------------------------
//
// Two variants, matching the two regimes in the exercises:
//
//   Variant A (semi-implicit Euler) — kinematics under accelerations with
//   no position dependence. The velocity is kicked first and the position
//   advanced with the *updated* velocity; this ordering is what makes the
//   scheme symplectic and must not be swapped for naive explicit Euler.
//
//   Variant B (leapfrog / velocity-Verlet) — central and field forces.
//   Velocities live on the half-step grid; second-order and
//   time-reversible, so bound Coulomb orbits do not gain secular energy
//   the way an Euler orbit does.

fn finite<const D: usize>(v: &SVector<f64, D>) -> bool {
    v.iter().all(|c| c.is_finite())
}

/// Validate the run configuration. Returns `Some(LeftBounds)` when the
/// initial state already sits outside the box, in which case the caller
/// hands back a length-1 trajectory rather than an error.
fn check_start<const D: usize>(
    initial: &State<D>,
    config: &SimConfig,
) -> Result<Option<StopReason>, SimError> {
    config.validate()?;
    if !initial.is_finite() {
        return Err(SimError::NonFiniteInitialState);
    }
    if let Some(l) = config.bound {
        if !initial.in_box(l) {
            return Ok(Some(StopReason::LeftBounds));
        }
    }
    Ok(None)
}

fn trajectory_buffer<const D: usize>(initial: &State<D>, config: &SimConfig) -> Vec<State<D>> {
    let capacity = (config.max_steps + 1).min(200_000);
    let mut states = Vec::with_capacity(capacity);
    states.push(*initial);
    states
}

/// Variant A: semi-implicit Euler.
///
/// Per step: `v <- v + a(state, t) * dt`, then `x <- x + v_new * dt`.
/// Times are computed as `t0 + n * dt` rather than accumulated, so entry n
/// of the trajectory carries exactly the grid time.
pub fn integrate_euler<const D: usize, F: ForceLaw<D>>(
    initial: &State<D>,
    force: &F,
    config: &SimConfig,
) -> Result<Trajectory<D>, SimError> {
    if let Some(end) = check_start(initial, config)? {
        return Ok(Trajectory { states: vec![*initial], end });
    }

    let dt = config.dt;
    let t0 = initial.time;
    let mut states = trajectory_buffer(initial, config);
    let mut state = *initial;
    let mut end = StopReason::StepBudget;

    for n in 1..=config.max_steps {
        let a = force.accel(&state, state.time);
        if !finite(&a) {
            end = StopReason::NonFiniteAccel;
            break;
        }

        let vel = state.vel + a * dt;
        let next = State {
            time: t0 + n as f64 * dt,
            pos: state.pos + vel * dt,
            vel,
        };

        // Bound check before committing: the exiting step is discarded.
        if let Some(l) = config.bound {
            if !next.in_box(l) {
                end = StopReason::LeftBounds;
                break;
            }
        }

        states.push(next);
        state = next;
    }

    Ok(Trajectory { states, end })
}

/// Variant B: leapfrog / velocity-Verlet with staggered velocities.
///
/// The velocity is first kicked onto the half-step grid with the initial
/// acceleration; each step then drifts the position a full step,
/// re-evaluates the acceleration at the new position, and kicks the
/// half-step velocity a full step. Entry 0 of the trajectory is the
/// unmodified initial state; later entries carry half-step velocities.
pub fn integrate_leapfrog<const D: usize, F: ForceLaw<D>>(
    initial: &State<D>,
    force: &F,
    config: &SimConfig,
) -> Result<Trajectory<D>, SimError> {
    if let Some(end) = check_start(initial, config)? {
        return Ok(Trajectory { states: vec![*initial], end });
    }

    let a0 = force.accel(initial, initial.time);
    if !finite(&a0) {
        return Ok(Trajectory {
            states: vec![*initial],
            end: StopReason::NonFiniteAccel,
        });
    }

    let dt = config.dt;
    let t0 = initial.time;
    let mut states = trajectory_buffer(initial, config);
    let mut state = *initial;
    state.vel += 0.5 * dt * a0; // kick onto the half-step grid
    let mut end = StopReason::StepBudget;

    for n in 1..=config.max_steps {
        let t = t0 + n as f64 * dt;
        let probe = State {
            time: t,
            pos: state.pos + state.vel * dt,
            vel: state.vel,
        };

        // Bound check before the force evaluation: an exiting position is
        // never committed and never fed back into the force law.
        if let Some(l) = config.bound {
            if !probe.in_box(l) {
                end = StopReason::LeftBounds;
                break;
            }
        }

        let a = force.accel(&probe, t);
        if !finite(&a) {
            end = StopReason::NonFiniteAccel;
            break;
        }

        let next = State {
            time: t,
            pos: probe.pos,
            vel: state.vel + a * dt,
        };
        states.push(next);
        state = next;
    }

    Ok(Trajectory { states, end })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forces::{ConstantAccel, Coulomb};
    use approx::assert_abs_diff_eq;
    use nalgebra::Vector2;

    type V1 = SVector<f64, 1>;

    #[test]
    fn euler_velocity_matches_closed_form() {
        // v[n] = v0 + n*a*dt holds term for term when a is constant.
        let initial = State::new(V1::new(0.0), V1::new(98.0));
        let law = ConstantAccel(V1::new(-9.8));
        let config = SimConfig {
            dt: 1.0,
            max_steps: 20,
            bound: None,
        };
        let traj = integrate_euler(&initial, &law, &config).unwrap();

        assert_eq!(traj.len(), 21);
        for (n, s) in traj.iter().enumerate() {
            assert_abs_diff_eq!(s.time, n as f64, epsilon = 1e-12);
            assert_abs_diff_eq!(s.vel.x, 98.0 - 9.8 * n as f64, epsilon = 1e-9);
        }
    }

    #[test]
    fn euler_position_converges_first_order() {
        // Fixed duration, shrinking dt: the endpoint error against
        // x0 + v0*t + a*t^2/2 must fall monotonically.
        let initial = State::new(V1::new(0.0), V1::new(98.0));
        let law = ConstantAccel(V1::new(-9.8));
        let total = 2.0;
        let exact = 98.0 * total + 0.5 * (-9.8) * total * total;

        let mut errors = Vec::new();
        for dt in [1.0, 0.1, 0.01, 0.001] {
            let config = SimConfig {
                dt,
                max_steps: (total / dt).round() as usize,
                bound: None,
            };
            let traj = integrate_euler(&initial, &law, &config).unwrap();
            errors.push((traj.last().pos.x - exact).abs());
        }
        for pair in errors.windows(2) {
            assert!(pair[1] < pair[0], "error must shrink with dt: {:?}", errors);
        }
    }

    #[test]
    fn bound_stops_before_the_exiting_step() {
        let initial = State::new(Vector2::new(0.0, 0.0), Vector2::new(1.0, 0.3));
        let law = ConstantAccel(Vector2::zeros());
        let config = SimConfig {
            dt: 0.7,
            max_steps: 100,
            bound: Some(5.0),
        };
        let traj = integrate_euler(&initial, &law, &config).unwrap();

        assert_eq!(traj.end, StopReason::LeftBounds);
        let last = traj.last();
        assert!(last.in_box(5.0));
        // The step that was discarded would have exited.
        let skipped = last.pos + last.vel * config.dt;
        assert!(skipped.iter().any(|c| c.abs() > 5.0));
    }

    #[test]
    fn initial_state_outside_box_yields_length_one() {
        let initial = State::new(Vector2::new(9.0, 0.0), Vector2::new(-1.0, 0.0));
        let law = ConstantAccel(Vector2::zeros());
        let config = SimConfig {
            dt: 0.1,
            max_steps: 50,
            bound: Some(5.0),
        };
        let traj = integrate_euler(&initial, &law, &config).unwrap();
        assert_eq!(traj.len(), 1);
        assert_eq!(traj.end, StopReason::LeftBounds);
    }

    #[test]
    fn coulomb_at_force_center_halts_cleanly() {
        let initial = State::new(Vector2::zeros(), Vector2::new(1.0, 0.0));
        let law = Coulomb::repulsive();
        let config = SimConfig {
            dt: 0.01,
            max_steps: 100,
            bound: None,
        };
        let traj = integrate_leapfrog(&initial, &law, &config).unwrap();
        assert_eq!(traj.len(), 1);
        assert_eq!(traj.end, StopReason::NonFiniteAccel);
        assert!(traj.last().is_finite());
    }

    #[test]
    fn non_positive_dt_is_rejected() {
        let initial = State::new(V1::new(0.0), V1::new(1.0));
        let law = ConstantAccel(V1::new(0.0));
        let config = SimConfig {
            dt: -0.5,
            max_steps: 10,
            bound: None,
        };
        let err = integrate_euler(&initial, &law, &config).unwrap_err();
        assert_eq!(err, SimError::NonPositiveDt(-0.5));
    }

    #[test]
    fn non_finite_initial_state_is_rejected() {
        let initial = State::new(V1::new(f64::INFINITY), V1::new(0.0));
        let law = ConstantAccel(V1::new(0.0));
        let config = SimConfig::default();
        let err = integrate_leapfrog(&initial, &law, &config).unwrap_err();
        assert_eq!(err, SimError::NonFiniteInitialState);
    }

    #[test]
    fn step_budget_bounds_trajectory_length() {
        let initial = State::new(V1::new(0.0), V1::new(1.0));
        let law = ConstantAccel(V1::new(0.0));
        let config = SimConfig {
            dt: 0.1,
            max_steps: 7,
            bound: None,
        };
        let traj = integrate_leapfrog(&initial, &law, &config).unwrap();
        assert_eq!(traj.len(), 8);
        assert_eq!(traj.end, StopReason::StepBudget);
    }
}
