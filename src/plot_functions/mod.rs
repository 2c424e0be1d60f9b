// src/plot_functions/mod.rs

pub mod plot_live_replay;
pub mod plot_segmented_trajectory;

use plotters::style::RGBColor;

/// Colour of the `index`-th UAS segment.
pub(crate) fn segment_color(index: usize) -> RGBColor {
    let palette = colorous::CATEGORY10;
    let color = palette[index % palette.len()];
    RGBColor(color.r, color.g, color.b)
}

// src/plot_functions/mod.rs
