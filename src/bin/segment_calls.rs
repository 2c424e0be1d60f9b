// src/bin/segment_calls.rs

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

use shipdeck_replay::cli::SegmentCallsArgs;
use shipdeck_replay::constants::VISUALIZER_BIN;
use shipdeck_replay::segmentation::command_builder::build_calls;
use shipdeck_replay::segmentation::log_parser::{parse_segmentation_log, ExtractMode};

fn main() -> anyhow::Result<()> {
    let args = SegmentCallsArgs::parse();

    let default_level = if args.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    let mode = if args.best_only {
        ExtractMode::BestOnly
    } else {
        ExtractMode::AllRuns
    };
    let log = parse_segmentation_log(&args.logfile, mode).with_context(|| {
        format!("Failed to extract segmentation from '{}'", args.logfile.display())
    })?;

    let visualizer = args.visualizer.unwrap_or_else(default_visualizer);
    let calls = build_calls(&log, &visualizer);
    if calls.is_empty() {
        warn!("No segmentation runs found in '{}'", args.logfile.display());
    }

    for call in &calls {
        println!("{call}");
        if args.dry_run {
            continue;
        }
        let status = call
            .to_command()
            .status()
            .with_context(|| format!("Failed to start '{}'", call.program.display()))?;
        if status.success() {
            debug!("'{}' finished", call);
        } else {
            warn!("'{}' exited with {}", call, status);
        }
    }

    info!("Emitted {} visualizer call(s).", calls.len());
    Ok(())
}

/// The visualizer installed next to this executable, or whatever `PATH` resolves.
fn default_visualizer() -> PathBuf {
    let file_name = format!("{VISUALIZER_BIN}{}", std::env::consts::EXE_SUFFIX);
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(|dir| dir.join(&file_name)))
        .filter(|candidate| candidate.exists())
        .unwrap_or_else(|| PathBuf::from(VISUALIZER_BIN))
}

// src/bin/segment_calls.rs
