use nalgebra::Vector3;

// ---------------------------------------------------------------------------
// Numerical vector-calculus checks on sampled fields
// ---------------------------------------------------------------------------
//
// Companion exercise to the trajectory work: verify on a grid that an
// electrostatic field is curl-free and consistent with its scalar
// potential (E = -grad phi). Everything here is central differences over
// caller-supplied closures; there is no field solver.

/// Central-difference curl of a vector field at a point.
pub fn curl<F>(field: &F, p: Vector3<f64>, h: f64) -> Vector3<f64>
where
    F: Fn(Vector3<f64>) -> Vector3<f64>,
{
    let dx = Vector3::new(h, 0.0, 0.0);
    let dy = Vector3::new(0.0, h, 0.0);
    let dz = Vector3::new(0.0, 0.0, h);

    let d_dx = (field(p + dx) - field(p - dx)) / (2.0 * h);
    let d_dy = (field(p + dy) - field(p - dy)) / (2.0 * h);
    let d_dz = (field(p + dz) - field(p - dz)) / (2.0 * h);

    Vector3::new(
        d_dy.z - d_dz.y,
        d_dz.x - d_dx.z,
        d_dx.y - d_dy.x,
    )
}

/// Central-difference gradient of a scalar potential at a point.
pub fn gradient<P>(potential: &P, p: Vector3<f64>, h: f64) -> Vector3<f64>
where
    P: Fn(Vector3<f64>) -> f64,
{
    let dx = Vector3::new(h, 0.0, 0.0);
    let dy = Vector3::new(0.0, h, 0.0);
    let dz = Vector3::new(0.0, 0.0, h);

    Vector3::new(
        (potential(p + dx) - potential(p - dx)) / (2.0 * h),
        (potential(p + dy) - potential(p - dy)) / (2.0 * h),
        (potential(p + dz) - potential(p - dz)) / (2.0 * h),
    )
}

/// Uniform cubic grid over [-half_extent, half_extent]^3.
fn grid_points(half_extent: f64, samples_per_axis: usize) -> Vec<Vector3<f64>> {
    let n = samples_per_axis.max(2);
    let step = 2.0 * half_extent / (n - 1) as f64;
    let mut points = Vec::with_capacity(n * n * n);
    for i in 0..n {
        for j in 0..n {
            for k in 0..n {
                points.push(Vector3::new(
                    -half_extent + i as f64 * step,
                    -half_extent + j as f64 * step,
                    -half_extent + k as f64 * step,
                ));
            }
        }
    }
    points
}

/// Largest curl magnitude over the grid. Non-finite samples (stencils
/// straddling a field singularity) are skipped.
pub fn max_curl_norm<F>(field: &F, half_extent: f64, samples_per_axis: usize, h: f64) -> f64
where
    F: Fn(Vector3<f64>) -> Vector3<f64>,
{
    grid_points(half_extent, samples_per_axis)
        .into_iter()
        .map(|p| curl(field, p, h).norm())
        .filter(|c| c.is_finite())
        .fold(0.0, f64::max)
}

/// Largest |E + grad phi| over the grid, i.e. the worst violation of
/// E = -grad phi. Non-finite samples are skipped.
pub fn max_gradient_mismatch<F, P>(
    field: &F,
    potential: &P,
    half_extent: f64,
    samples_per_axis: usize,
    h: f64,
) -> f64
where
    F: Fn(Vector3<f64>) -> Vector3<f64>,
    P: Fn(Vector3<f64>) -> f64,
{
    grid_points(half_extent, samples_per_axis)
        .into_iter()
        .map(|p| (field(p) + gradient(potential, p, h)).norm())
        .filter(|m| m.is_finite())
        .fold(0.0, f64::max)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
