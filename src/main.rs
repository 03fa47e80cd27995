use anyhow::Result;
use nalgebra::Vector3;

use scatter_sim::fields;
use scatter_sim::scenarios::{lorentz, projectile, scattering};
use scatter_sim::types::{SimConfig, State};

fn main() -> Result<()> {
    println!();
    println!("====================================================================");
    println!("  CHARGED-PARTICLE TRAJECTORY SIMULATION");
    println!("====================================================================");

    // -----------------------------------------------------------------------
    // 1. Projectile: constant acceleration, semi-implicit Euler
    // -----------------------------------------------------------------------
    let config = SimConfig {
        dt: 0.001,
        max_steps: 20_000,
        bound: None,
    };
    let traj = projectile::run(0.0, 98.0, -9.8, &config)?;
    let apex = traj
        .iter()
        .max_by(|a, b| a.pos.x.partial_cmp(&b.pos.x).unwrap())
        .expect("trajectory is never empty");

    println!();
    println!("  Projectile  (x0 = 0, v0 = 98, a = -9.8)");
    println!("  ──────────────────────────────────────────────────────────────────");
    println!(
        "  Apex:        {:>9.1}  at t = {:.2}   (analytic {:>9.1} at t = 10.00)",
        apex.pos.x,
        apex.time,
        projectile::analytic_position(0.0, 98.0, -9.8, 10.0)
    );
    println!(
        "  Steps:       {:>9}   dt = {}",
        traj.len() - 1,
        config.dt
    );

    // -----------------------------------------------------------------------
    // 2. Coulomb scattering: impact-parameter sweep, leapfrog
    // -----------------------------------------------------------------------
    let base = scattering::ScatteringConfig::default();
    let impact_parameters = [0.25, 0.5, 1.0, 2.0, 4.0];
    let sweep = scattering::sweep(&base, &impact_parameters)?;

    println!();
    println!(
        "  Coulomb scattering  (repulsive, v0 = {}, box L = {})",
        base.speed, base.box_half_width
    );
    println!("  ──────────────────────────────────────────────────────────────────");
    println!("  {:>8}  {:>12}", "b", "deflection");
    for (b, angle) in &sweep {
        println!("  {:>8.2}  {:>11.2}°", b, angle.to_degrees());
    }

    // -----------------------------------------------------------------------
    // 3. Lorentz force: crossed uniform fields, leapfrog
    // -----------------------------------------------------------------------
    let setup = lorentz::FieldSetup {
        e: Vector3::new(1.0, 0.0, 0.0),
        b: Vector3::new(0.0, 0.0, 2.0),
    };
    let initial = State::new(Vector3::zeros(), Vector3::new(1.0, 0.0, 0.0));
    let config = SimConfig {
        dt: 0.001,
        max_steps: 20_000,
        bound: None,
    };
    let traj = lorentz::run(&initial, &setup, &config)?;
    let last = traj.last();
    let drift = lorentz::exb_drift(setup.e, setup.b);
    let mean_vel = (last.pos - initial.pos) / last.time;

    println!();
    println!("  Lorentz force  (E = {:?}, B = {:?})", setup.e.as_slice(), setup.b.as_slice());
    println!("  ──────────────────────────────────────────────────────────────────");
    println!(
        "  Gyrofrequency:    {:>7.3}   gyroperiod: {:.3}",
        lorentz::gyrofrequency(setup.b),
        std::f64::consts::TAU / lorentz::gyrofrequency(setup.b)
    );
    println!(
        "  E x B drift:      ({:>6.3}, {:>6.3}, {:>6.3})",
        drift.x, drift.y, drift.z
    );
    println!(
        "  Mean velocity:    ({:>6.3}, {:>6.3}, {:>6.3})   over t = {:.1}",
        mean_vel.x, mean_vel.y, mean_vel.z, last.time
    );

    // -----------------------------------------------------------------------
    // 4. Field check: point-charge field is curl-free and matches -grad(phi)
    // -----------------------------------------------------------------------
    let field = |p: Vector3<f64>| {
        let r = p.norm();
        p / (r * r * r)
    };
    let potential = |p: Vector3<f64>| 1.0 / p.norm();
    let worst_curl = fields::max_curl_norm(&field, 1.95, 8, 1e-4);
    let worst_grad = fields::max_gradient_mismatch(&field, &potential, 1.95, 8, 1e-4);

    println!();
    println!("  Vector-calculus check  (E = r/|r|^3, phi = 1/|r|)");
    println!("  ──────────────────────────────────────────────────────────────────");
    println!("  max |curl E| on grid:        {worst_curl:.3e}");
    println!("  max |E + grad phi| on grid:  {worst_grad:.3e}");
    println!();
    println!("====================================================================");
    println!();

    Ok(())
}
