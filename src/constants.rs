// src/constants.rs

use plotters::style::colors::full_palette::{BLUEGREY, GREY, ORANGE};
use plotters::style::RGBColor;

// Plot dimensions.
pub const PLOT_WIDTH: u32 = 1600;
pub const PLOT_HEIGHT: u32 = 1200;

// Font sizes.
pub const FONT_SIZE_MAIN_TITLE: i32 = 28;
pub const FONT_SIZE_AXIS_LABEL: i32 = 14;
pub const FONT_SIZE_LEGEND: i32 = 16;

// Stroke widths for lines
pub const LINE_WIDTH_PLOT: u32 = 2;
pub const LINE_WIDTH_LEGEND: u32 = 3;

// Reference paths (best position, above ship) are drawn dashed and faded.
pub const REFERENCE_PATH_ALPHA: f64 = 0.4;
pub const DASH_SAMPLES: usize = 6; // Samples per dash and per gap

// 3D projection of the trajectory chart.
pub const PROJECTION_YAW: f64 = 0.7;
pub const PROJECTION_PITCH: f64 = 0.35;
pub const PROJECTION_SCALE: f64 = 0.85;

// --- Plot Color Assignments ---
pub const COLOR_SHIP: &RGBColor = &BLUEGREY;
pub const COLOR_BEST_POSITION: &RGBColor = &ORANGE;
pub const COLOR_ABOVE_SHIP: &RGBColor = &GREY;

// --- Input layout ---
pub const UAS_CSV_FILE: &str = "SIMOUT_UAS.csv";
pub const SHIP_CSV_FILE: &str = "SIMOUT_Ship.csv";
pub const COLUMN_X: &str = "xg";
pub const COLUMN_Y: &str = "yg";
pub const COLUMN_Z: &str = "zg";
pub const COLUMN_HEADING: &str = "psi";

// Touchdown zone of the ship relative to its logged reference point.
// The deck sits at the stern, 60 m behind the reference along the heading and 5 m above it.
pub const SHIP_TOUCHDOWN_BACKWARD_M: f64 = 60.0;
pub const SHIP_TOUCHDOWN_HEIGHT_M: f64 = 5.0;

// Height of the best position (and the "above ship" reference) over the touchdown point.
pub const METERS_ABOVE_SHIP: f64 = 20.0;

// Outputs used when no save location is given and the interactive viewer is not compiled in.
pub const DEFAULT_PLOT_FILE: &str = "shipdeck_plot.png";
pub const DEFAULT_LIVE_FILE: &str = "shipdeck_live.png";

// Segmentation log grammar.
pub const HEADER_SEGMENTATION: &str = "Get segmentation after";
pub const PREFIX_SEGMENT_LINE: &str = "lower:";
pub const PREFIX_GREEDY_LINE: &str = "Is greedy:";

// Name of the visualizer binary invoked by `segment-calls`.
pub const VISUALIZER_BIN: &str = "shipdeck-viz";

// src/constants.rs
