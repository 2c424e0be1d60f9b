// src/plot_functions/plot_segmented_trajectory.rs

use tracing::info;

use crate::behavior::Behavior;
use crate::constants::{
    COLOR_ABOVE_SHIP, COLOR_BEST_POSITION, COLOR_SHIP, LINE_WIDTH_PLOT, METERS_ABOVE_SHIP,
    REFERENCE_PATH_ALPHA,
};
use crate::data_analysis::best_position::compute_best_position;
use crate::data_analysis::segments::partition_segments;
use crate::data_input::trajectory::Trajectory;
use crate::display::SceneSink;
use crate::error::Result;
use crate::plot_framework::{LineStyle, Plot3dConfig, PlotSeries3d};
use crate::plot_functions::segment_color;

/// Legend labels of the maneuver phases, in flight order.
pub const PHASE_LABELS: [&str; 4] = [
    "Move to position",
    "Stay in position",
    "Move to touchdown",
    "Descend",
];

fn phase_label(index: usize) -> String {
    PHASE_LABELS
        .get(index)
        .map(|label| label.to_string())
        .unwrap_or_else(|| format!("Segment {}", index + 1))
}

/// Builds the static segmentation chart: one path per UAS segment, then the ship path, the best
/// position and the point above the touchdown zone.
pub fn build_segmented_scene(
    title: &str,
    behavior: Behavior,
    boundaries: &[usize],
    skipped_entries: usize,
    uas: &Trajectory,
    ship: &Trajectory,
) -> Plot3dConfig {
    let mut series: Vec<PlotSeries3d> = partition_segments(boundaries, skipped_entries, uas.len())
        .into_iter()
        .enumerate()
        .map(|(index, range)| PlotSeries3d {
            data: uas.points(range),
            label: phase_label(index),
            color: segment_color(index),
            alpha: 1.0,
            stroke_width: LINE_WIDTH_PLOT,
            line_style: LineStyle::Solid,
        })
        .collect();

    let best_position = compute_best_position(behavior, ship);
    series.push(PlotSeries3d {
        data: ship.points(0..ship.len()),
        label: "Ship".to_string(),
        color: *COLOR_SHIP,
        alpha: 1.0,
        stroke_width: LINE_WIDTH_PLOT,
        line_style: LineStyle::Solid,
    });
    series.push(PlotSeries3d {
        data: best_position.points(0..best_position.len()),
        label: "Maneuver: at position".to_string(),
        color: *COLOR_BEST_POSITION,
        alpha: REFERENCE_PATH_ALPHA,
        stroke_width: LINE_WIDTH_PLOT,
        line_style: LineStyle::Dashed,
    });
    let above_ship = ship.raised(METERS_ABOVE_SHIP);
    series.push(PlotSeries3d {
        data: above_ship.points(0..above_ship.len()),
        label: "Maneuver: above ship".to_string(),
        color: *COLOR_ABOVE_SHIP,
        alpha: REFERENCE_PATH_ALPHA,
        stroke_width: LINE_WIDTH_PLOT,
        line_style: LineStyle::Dashed,
    });

    Plot3dConfig {
        title: format!("{title} ({behavior})"),
        series,
        bounds: None,
    }
}

/// Draws the segmented landing and hands it to `sink`.
pub fn plot_segmented_trajectory(
    sink: &mut dyn SceneSink,
    title: &str,
    behavior: Behavior,
    boundaries: &[usize],
    skipped_entries: usize,
    uas: &Trajectory,
    ship: &Trajectory,
) -> Result<()> {
    let scene = build_segmented_scene(title, behavior, boundaries, skipped_entries, uas, ship);
    info!(
        "Drawing {} UAS segment(s) against {} ship samples",
        boundaries.len() + 1,
        ship.len()
    );
    sink.show(0, &scene)?;
    sink.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data_input::trajectory::TrajectoryKind;
    use ndarray::Array1;

    fn line(len: usize) -> Trajectory {
        let x = Array1::from_iter((0..len).map(|i| i as f64));
        let zeros = Array1::zeros(len);
        Trajectory::from_logged(x, zeros.clone(), zeros.clone(), zeros, TrajectoryKind::Vehicle)
    }

    #[test]
    fn test_scene_series_layout() {
        let uas = line(30);
        let ship = line(30);
        let scene =
            build_segmented_scene("Lateral_01", Behavior::Lateral, &[10, 20], 0, &uas, &ship);

        let labels: Vec<&str> = scene.series.iter().map(|s| s.label.as_str()).collect();
        assert_eq!(
            labels,
            vec![
                "Move to position",
                "Stay in position",
                "Move to touchdown",
                "Ship",
                "Maneuver: at position",
                "Maneuver: above ship",
            ]
        );
        assert_eq!(scene.series[0].data.len(), 10);
        assert_eq!(scene.series[1].data.len(), 9);
        assert_eq!(scene.series[2].data.len(), 9);
        assert_eq!(scene.series[4].line_style, LineStyle::Dashed);
        assert_eq!(scene.series[5].data[0].2, 20.0);
        assert_eq!(scene.title, "Lateral_01 (Lateral)");
    }

    #[test]
    fn test_extra_segments_are_numbered() {
        let uas = line(100);
        let ship = line(100);
        let scene =
            build_segmented_scene("run", Behavior::Straight, &[10, 20, 30, 40], 1, &uas, &ship);
        assert_eq!(scene.series[4].label, "Segment 5");
        assert_ne!(scene.series[0].color, scene.series[1].color);
    }
}

// src/plot_functions/plot_segmented_trajectory.rs
