use std::io::{self, Write};

use crate::state::Trajectory;

/// Write a trajectory as CSV for external plotting.
///
/// Columns: time, pos_0..pos_{D-1}, vel_0..vel_{D-1}. Plotting itself is
/// out of scope; any renderer can consume the plain numeric columns.
pub fn write_trajectory<W: Write, const D: usize>(
    writer: &mut W,
    trajectory: &Trajectory<D>,
) -> io::Result<()> {
    write!(writer, "time")?;
    for i in 0..D {
        write!(writer, ",pos_{i}")?;
    }
    for i in 0..D {
        write!(writer, ",vel_{i}")?;
    }
    writeln!(writer)?;

    for s in trajectory.iter() {
        write!(writer, "{:.6}", s.time)?;
        for c in s.pos.iter() {
            write!(writer, ",{c:.9}")?;
        }
        for c in s.vel.iter() {
            write!(writer, ",{c:.9}")?;
        }
        writeln!(writer)?;
    }

    Ok(())
}

/// Write a trajectory to a CSV file at the given path.
pub fn write_trajectory_file<const D: usize>(
    path: &str,
    trajectory: &Trajectory<D>,
) -> io::Result<()> {
    let mut file = std::fs::File::create(path)?;
    write_trajectory(&mut file, trajectory)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{State, StopReason};
    use nalgebra::Vector2;

    #[test]
    fn csv_output_has_header_and_rows() {
        let traj = Trajectory {
            states: vec![
                State::new(Vector2::new(-5.0, 1.0), Vector2::new(1.0, 0.0)),
                State {
                    time: 0.01,
                    pos: Vector2::new(-4.99, 1.0),
                    vel: Vector2::new(1.0, 0.001),
                },
            ],
            end: StopReason::StepBudget,
        };

        let mut buf = Vec::new();
        write_trajectory(&mut buf, &traj).unwrap();
        let output = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = output.lines().collect();

        assert_eq!(lines[0], "time,pos_0,pos_1,vel_0,vel_1");
        assert_eq!(lines.len(), 3); // header + 2 data rows
        assert!(lines[1].starts_with("0.000000,-5.000000000,"));
    }
}
