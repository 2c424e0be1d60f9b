// src/error.rs

//! Error types shared by the log extractor and the visualizer.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while reading logs, loading trajectories, or rendering.
#[derive(Debug, Error)]
pub enum Error {
    /// Reading or writing a file failed.
    #[error("I/O error on '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The CSV reader rejected the input.
    #[error("CSV error in '{path}': {source}")]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// Required trajectory columns are absent from the CSV header.
    #[error("Missing essential columns in '{path}': {columns}")]
    MissingColumns { path: PathBuf, columns: String },

    /// A trajectory cell could not be read as a number.
    #[error("Invalid number '{value}' in column '{column}' (row {row})")]
    InvalidNumber {
        column: String,
        row: usize,
        value: String,
    },

    /// The CSV has a header but no data rows.
    #[error("Trajectory '{0}' contains no samples")]
    EmptyTrajectory(PathBuf),

    /// A `lower:` line inside a segmentation block does not follow the grammar.
    #[error("Something is off, expected 'lower: <n> upper: <m>' but line {line_number} was: {line}")]
    MalformedSegmentLine { line_number: usize, line: String },

    /// A CLI argument needed by the selected action was not provided.
    #[error("{0}")]
    MissingArgument(&'static str),

    /// Drawing the chart failed.
    #[error("Plot error: {0}")]
    Plot(String),

    /// The rerun viewer could not be started or fed.
    #[cfg(feature = "viewer")]
    #[error("Viewer error: {0}")]
    Viewer(String),
}

impl Error {
    /// Wraps an I/O error with the path it occurred on.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Wraps a CSV error with the path it occurred on.
    pub fn csv(path: impl Into<PathBuf>, source: csv::Error) -> Self {
        Self::Csv {
            path: path.into(),
            source,
        }
    }

    /// Converts any plotters drawing error.
    pub fn plot(err: impl std::fmt::Display) -> Self {
        Self::Plot(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

// src/error.rs
