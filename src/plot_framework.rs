// src/plot_framework.rs

use std::ops::Range;
use std::path::{Path, PathBuf};

use ndarray::Array1;
use ndarray_stats::QuantileExt;
use plotters::backend::{BitMapBackend, DrawingBackend};
use plotters::chart::{ChartBuilder, SeriesLabelPosition};
use plotters::coord::Shift;
use plotters::drawing::{DrawingArea, IntoDrawingArea};
use plotters::element::{PathElement, Text};
use plotters::series::LineSeries;
use plotters::style::colors::{BLACK, WHITE};
use plotters::style::{Color, IntoFont, RGBColor, ShapeStyle};
use tracing::info;

use crate::constants::{
    DASH_SAMPLES, FONT_SIZE_AXIS_LABEL, FONT_SIZE_LEGEND, FONT_SIZE_MAIN_TITLE, LINE_WIDTH_LEGEND,
    PLOT_HEIGHT, PLOT_WIDTH, PROJECTION_PITCH, PROJECTION_SCALE, PROJECTION_YAW,
};
use crate::error::{Error, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineStyle {
    Solid,
    Dashed,
}

/// One 3D path of the trajectory chart. Points are `(x, y, z)` with z pointing up.
#[derive(Debug, Clone)]
pub struct PlotSeries3d {
    pub data: Vec<(f64, f64, f64)>,
    pub label: String,
    pub color: RGBColor,
    pub alpha: f64,
    pub stroke_width: u32,
    pub line_style: LineStyle,
}

impl PlotSeries3d {
    fn shape_style(&self) -> ShapeStyle {
        self.color.mix(self.alpha).stroke_width(self.stroke_width)
    }
}

#[derive(Debug, Clone)]
pub struct Plot3dConfig {
    pub title: String,
    pub series: Vec<PlotSeries3d>,
    /// Fixed x, y, z ranges. Derived from the series when `None`.
    pub bounds: Option<[Range<f64>; 3]>,
}

/// Calculate plot range with padding.
/// Adds 15% padding, or a fixed padding for very small ranges.
pub fn calculate_range(min_val: f64, max_val: f64) -> (f64, f64) {
    let (min, max) = if min_val <= max_val {
        (min_val, max_val)
    } else {
        (max_val, min_val)
    };
    let range = (max - min).abs();
    let padding = if range < 1e-6 { 0.5 } else { range * 0.15 };
    (min - padding, max + padding)
}

/// Padded x, y and z ranges covering every point of every series.
/// Returns `None` when there is nothing finite to draw.
pub fn series_bounds(series: &[PlotSeries3d]) -> Option<[Range<f64>; 3]> {
    let points = series
        .iter()
        .flat_map(|s| s.data.iter())
        .filter(|(x, y, z)| x.is_finite() && y.is_finite() && z.is_finite());

    let mut axes: [Vec<f64>; 3] = Default::default();
    for &(x, y, z) in points {
        axes[0].push(x);
        axes[1].push(y);
        axes[2].push(z);
    }

    let mut ranges: [Range<f64>; 3] = [0.0..0.0, 0.0..0.0, 0.0..0.0];
    for (axis, values) in axes.into_iter().enumerate() {
        let values = Array1::from(values);
        let (Ok(min_val), Ok(max_val)) = (values.min(), values.max()) else {
            return None;
        };
        let (lo, hi) = calculate_range(*min_val, *max_val);
        ranges[axis] = lo..hi;
    }
    Some(ranges)
}

/// Splits a path into the pieces drawn for its line style.
/// Dashed paths alternate `DASH_SAMPLES` drawn samples with the same number skipped.
fn drawn_pieces(series: &PlotSeries3d) -> Vec<&[(f64, f64, f64)]> {
    match series.line_style {
        LineStyle::Solid => vec![&series.data[..]],
        LineStyle::Dashed => series
            .data
            .chunks(DASH_SAMPLES)
            .step_by(2)
            .filter(|piece| piece.len() > 1)
            .collect(),
    }
}

/// Draws all series of `config` into `area` as a projected 3D chart.
pub fn draw_trajectory_chart<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    config: &Plot3dConfig,
) -> Result<()> {
    area.fill(&WHITE).map_err(Error::plot)?;

    let bounds = config
        .bounds
        .clone()
        .or_else(|| series_bounds(&config.series));
    let Some([x_range, y_range, z_range]) = bounds else {
        area.draw(&Text::new(
            format!("{}: Data Unavailable", config.title),
            (20, 20),
            ("sans-serif", FONT_SIZE_MAIN_TITLE).into_font().color(&BLACK),
        ))
        .map_err(Error::plot)?;
        return Ok(());
    };

    // Plotters draws its second axis vertically, so altitude goes there.
    let mut chart = ChartBuilder::on(area)
        .caption(&config.title, ("sans-serif", FONT_SIZE_MAIN_TITLE))
        .margin(20)
        .build_cartesian_3d(x_range, z_range, y_range)
        .map_err(Error::plot)?;

    chart.with_projection(|mut pb| {
        pb.yaw = PROJECTION_YAW;
        pb.pitch = PROJECTION_PITCH;
        pb.scale = PROJECTION_SCALE;
        pb.into_matrix()
    });

    chart
        .configure_axes()
        .light_grid_style(BLACK.mix(0.15))
        .max_light_lines(3)
        .label_style(("sans-serif", FONT_SIZE_AXIS_LABEL))
        .x_formatter(&|x| format!("x {x:.0} m"))
        .y_formatter(&|z| format!("z {z:.0} m"))
        .z_formatter(&|y| format!("y {y:.0} m"))
        .draw()
        .map_err(Error::plot)?;

    let mut legend_series_count = 0;
    for s in &config.series {
        let style = s.shape_style();
        let mut legend_done = s.label.is_empty();
        for piece in drawn_pieces(s) {
            let drawn = chart
                .draw_series(LineSeries::new(
                    piece.iter().map(|&(x, y, z)| (x, z, y)),
                    style,
                ))
                .map_err(Error::plot)?;
            if !legend_done {
                drawn.label(s.label.as_str()).legend(move |(x, y)| {
                    PathElement::new(
                        vec![(x, y), (x + 20, y)],
                        style.color.stroke_width(LINE_WIDTH_LEGEND),
                    )
                });
                legend_done = true;
                legend_series_count += 1;
            }
        }
    }

    if legend_series_count > 0 {
        chart
            .configure_series_labels()
            .position(SeriesLabelPosition::UpperRight)
            .background_style(WHITE.mix(0.8))
            .border_style(BLACK)
            .label_font(("sans-serif", FONT_SIZE_LEGEND))
            .draw()
            .map_err(Error::plot)?;
    }

    Ok(())
}

/// Renders the chart into a PNG file.
pub fn save_trajectory_chart(output_file: &Path, config: &Plot3dConfig) -> Result<()> {
    let root_area = BitMapBackend::new(output_file, (PLOT_WIDTH, PLOT_HEIGHT)).into_drawing_area();
    draw_trajectory_chart(&root_area, config)?;
    root_area.present().map_err(Error::plot)?;
    info!("  3D plot saved as '{}'.", output_file.display());
    Ok(())
}

/// Appends `.png` unless the path already names a bitmap format.
pub fn png_path(path: &Path) -> PathBuf {
    let is_bitmap = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| matches!(ext.to_ascii_lowercase().as_str(), "png" | "jpg" | "jpeg" | "bmp"))
        .unwrap_or(false);
    if is_bitmap {
        path.to_path_buf()
    } else {
        let mut with_png = path.as_os_str().to_owned();
        with_png.push(".png");
        PathBuf::from(with_png)
    }
}


// src/plot_framework.rs
