// src/display.rs

//! Destinations for rendered trajectory charts.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::Result;
use crate::plot_framework::{png_path, save_trajectory_chart, Plot3dConfig};

/// Receives charts to show, either once (static plot) or frame by frame (live replay).
pub trait SceneSink {
    /// Shows `config` as frame `frame` of the current recording.
    fn show(&mut self, frame: usize, config: &Plot3dConfig) -> Result<()>;

    /// Called once after the last frame.
    fn finish(&mut self) -> Result<()> {
        Ok(())
    }
}

/// Writes every frame to the same PNG file, so an auto-reloading image viewer follows along.
pub struct PngSink {
    output_file: PathBuf,
}

impl PngSink {
    pub fn new(output_file: &Path) -> Self {
        PngSink {
            output_file: png_path(output_file),
        }
    }

    pub fn output_file(&self) -> &Path {
        &self.output_file
    }
}

impl SceneSink for PngSink {
    fn show(&mut self, frame: usize, config: &Plot3dConfig) -> Result<()> {
        debug!("Rendering frame {} to '{}'", frame, self.output_file.display());
        save_trajectory_chart(&self.output_file, config)
    }
}

/// Sink used when no save location is given.
///
/// Opens the rerun viewer when built with the `viewer` feature. Otherwise the chart is written to
/// `fallback_file` inside the trajectory directory.
pub fn interactive_sink(app_id: &str, fallback_file: &Path) -> Result<Box<dyn SceneSink>> {
    #[cfg(feature = "viewer")]
    {
        let _ = fallback_file;
        let viewer = crate::viewer::RerunViewer::spawn(app_id)?;
        Ok(Box::new(viewer))
    }

    #[cfg(not(feature = "viewer"))]
    {
        tracing::warn!(
            "{} was built without the `viewer` feature; writing to '{}' instead of opening a window",
            app_id,
            fallback_file.display()
        );
        Ok(Box::new(PngSink::new(fallback_file)))
    }
}

// src/display.rs
