// src/data_analysis/best_position.rs

use crate::behavior::Behavior;
use crate::constants::METERS_ABOVE_SHIP;
use crate::data_input::trajectory::Trajectory;

/// Computes where the UAS should hold position relative to the moving ship.
///
/// For every ship sample the touchdown point is offset horizontally by the behavior's standoff
/// distance, in the direction `angle + heading`, and raised by [`METERS_ABOVE_SHIP`].
/// Heading and time columns are carried over from the ship.
pub fn compute_best_position(behavior: Behavior, ship: &Trajectory) -> Trajectory {
    let geometry = behavior.geometry();
    let angle = geometry.angle_deg.to_radians();
    let direction = ship.heading.mapv(|h| angle + h);

    Trajectory {
        x: &ship.x + &(direction.mapv(f64::cos) * geometry.standoff_m),
        y: &ship.y + &(direction.mapv(f64::sin) * geometry.standoff_m),
        z: &ship.z + METERS_ABOVE_SHIP,
        heading: ship.heading.clone(),
        t: ship.t.clone(),
    }
}


// src/data_analysis/best_position.rs
