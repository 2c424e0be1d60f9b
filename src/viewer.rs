// src/viewer.rs

//! Interactive display through the rerun viewer.
//!
//! Enable with the `viewer` feature flag.

use rerun::{RecordingStream, RecordingStreamBuilder};
use tracing::info;

use crate::display::SceneSink;
use crate::error::{Error, Result};
use crate::plot_framework::{LineStyle, Plot3dConfig};

/// Streams trajectory charts to a spawned rerun viewer.
pub struct RerunViewer {
    rec: RecordingStream,
}

impl RerunViewer {
    /// Spawns the viewer process and connects to it.
    pub fn spawn(app_id: &str) -> Result<Self> {
        let rec = RecordingStreamBuilder::new(app_id)
            .spawn()
            .map_err(|e| Error::Viewer(e.to_string()))?;

        rec.log_static("world", &rerun::ViewCoordinates::RIGHT_HAND_Z_UP())
            .map_err(|e| Error::Viewer(e.to_string()))?;

        info!("Spawned rerun viewer '{}'", app_id);
        Ok(Self { rec })
    }
}

fn entity_path(label: &str, index: usize) -> String {
    let slug: String = label
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c.to_ascii_lowercase() } else { '_' })
        .collect();
    if slug.is_empty() {
        format!("world/series_{index}")
    } else {
        format!("world/{slug}")
    }
}

impl SceneSink for RerunViewer {
    fn show(&mut self, frame: usize, config: &Plot3dConfig) -> Result<()> {
        self.rec.set_time_sequence("frame", frame as i64);

        for (index, series) in config.series.iter().enumerate() {
            let points: Vec<[f32; 3]> = series
                .data
                .iter()
                .map(|&(x, y, z)| [x as f32, y as f32, z as f32])
                .collect();
            let alpha = (series.alpha.clamp(0.0, 1.0) * 255.0) as u8;
            // Dashes are not drawn by the viewer; faded reference paths keep their transparency.
            let alpha = match series.line_style {
                LineStyle::Solid => alpha,
                LineStyle::Dashed => alpha.min(160),
            };
            let color = [series.color.0, series.color.1, series.color.2, alpha];

            self.rec
                .log(
                    entity_path(&series.label, index),
                    &rerun::LineStrips3D::new([points])
                        .with_colors([color])
                        .with_labels([series.label.as_str()]),
                )
                .map_err(|e| Error::Viewer(e.to_string()))?;
        }
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.rec
            .flush_blocking()
            .map_err(|e| Error::Viewer(e.to_string()))
    }
}


// src/viewer.rs
