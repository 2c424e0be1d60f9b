// src/lib.rs - Library interface shared by shipdeck-viz and segment-calls

pub mod behavior;
pub mod cli;
pub mod constants;
pub mod data_analysis;
pub mod data_input;
pub mod display;
pub mod error;
pub mod plot_framework;
pub mod plot_functions;
pub mod segmentation;
#[cfg(feature = "viewer")]
pub mod viewer;

pub use error::{Error, Result};

// Build-time version override (e.g. from CI), falling back to the package version.
pub fn crate_version() -> &'static str {
    option_env!("SHIPDECK_VERSION").unwrap_or(env!("CARGO_PKG_VERSION"))
}

// src/lib.rs
