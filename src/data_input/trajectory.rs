// src/data_input/trajectory.rs

use std::f64::consts::PI;
use std::ops::Range;

use ndarray::Array1;

use crate::constants::{SHIP_TOUCHDOWN_BACKWARD_M, SHIP_TOUCHDOWN_HEIGHT_M};

/// Which body a trajectory belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrajectoryKind {
    Vehicle,
    /// Positions are moved from the logged reference point to the touchdown zone on deck.
    Ship,
}

/// Column-wise trajectory samples.
#[derive(Debug, Clone, PartialEq)]
pub struct Trajectory {
    pub x: Array1<f64>,       // Position along x (m).
    pub y: Array1<f64>,       // Position along y (m).
    pub z: Array1<f64>,       // Altitude (m), positive up. Logged values point down.
    pub heading: Array1<f64>, // Heading (rad).
    pub t: Array1<f64>,       // Normalized time fraction i / len.
}

impl Trajectory {
    /// Builds a trajectory from logged columns, inverting the altitude and, for the ship,
    /// projecting the reference point onto the touchdown zone.
    pub fn from_logged(
        x: Array1<f64>,
        y: Array1<f64>,
        z_logged: Array1<f64>,
        heading: Array1<f64>,
        kind: TrajectoryKind,
    ) -> Self {
        let mut x = x;
        let mut y = y;
        let mut z = -z_logged;

        if kind == TrajectoryKind::Ship {
            let backwards = heading.mapv(|h| PI + h);
            x = x + backwards.mapv(f64::cos) * SHIP_TOUCHDOWN_BACKWARD_M;
            y = y + backwards.mapv(f64::sin) * SHIP_TOUCHDOWN_BACKWARD_M;
            z += SHIP_TOUCHDOWN_HEIGHT_M;
        }

        let len = z.len();
        let t = Array1::from_iter((0..len).map(|i| i as f64 / len as f64));

        Trajectory { x, y, z, heading, t }
    }

    pub fn len(&self) -> usize {
        self.x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    /// Sample positions in `range`, clamped to the trajectory length.
    pub fn points(&self, range: Range<usize>) -> Vec<(f64, f64, f64)> {
        let end = range.end.min(self.len());
        let start = range.start.min(end);
        (start..end)
            .map(|i| (self.x[i], self.y[i], self.z[i]))
            .collect()
    }

    /// Positions of the first `len` samples (all samples if `len` exceeds the trajectory).
    pub fn prefix(&self, len: usize) -> Vec<(f64, f64, f64)> {
        self.points(0..len)
    }

    /// The same path shifted up by `dz` meters.
    pub fn raised(&self, dz: f64) -> Trajectory {
        Trajectory {
            z: &self.z + dz,
            ..self.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use ndarray::array;

    #[test]
    fn test_vehicle_inverts_altitude() {
        let traj = Trajectory::from_logged(
            array![1.0, 2.0],
            array![3.0, 4.0],
            array![-10.0, -12.5],
            array![0.0, 0.1],
            TrajectoryKind::Vehicle,
        );
        assert_eq!(traj.x, array![1.0, 2.0]);
        assert_eq!(traj.y, array![3.0, 4.0]);
        assert_eq!(traj.z, array![10.0, 12.5]);
        assert_eq!(traj.t, array![0.0, 0.5]);
    }

    #[test]
    fn test_ship_touchdown_projection() {
        // Heading 0: touchdown lies 60 m behind along -x, 5 m up.
        let traj = Trajectory::from_logged(
            array![100.0, 0.0],
            array![50.0, 0.0],
            array![0.0, 2.0],
            array![0.0, PI / 2.0],
            TrajectoryKind::Ship,
        );
        assert_abs_diff_eq!(traj.x[0], 40.0, epsilon = 1e-9);
        assert_abs_diff_eq!(traj.y[0], 50.0, epsilon = 1e-9);
        assert_abs_diff_eq!(traj.z[0], 5.0, epsilon = 1e-9);
        // Heading 90 deg: touchdown lies behind along -y.
        assert_abs_diff_eq!(traj.x[1], 0.0, epsilon = 1e-9);
        assert_abs_diff_eq!(traj.y[1], -60.0, epsilon = 1e-9);
        assert_abs_diff_eq!(traj.z[1], 3.0, epsilon = 1e-9);
    }

    #[test]
    fn test_points_are_clamped() {
        let traj = Trajectory::from_logged(
            array![0.0, 1.0, 2.0],
            array![0.0, 0.0, 0.0],
            array![0.0, 0.0, 0.0],
            array![0.0, 0.0, 0.0],
            TrajectoryKind::Vehicle,
        );
        assert_eq!(traj.points(1..10).len(), 2);
        assert!(traj.points(5..10).is_empty());
        assert_eq!(traj.prefix(2), vec![(0.0, 0.0, 0.0), (1.0, 0.0, 0.0)]);
        assert_eq!(traj.raised(20.0).z, array![20.0, 20.0, 20.0]);
    }
}

// src/data_input/trajectory.rs
