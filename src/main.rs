// src/main.rs

use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use shipdeck_replay::cli::{VisualizerArgs, VisualizerCommand};
use shipdeck_replay::constants::{DEFAULT_LIVE_FILE, DEFAULT_PLOT_FILE};
use shipdeck_replay::data_input::csv_loader::load_landing_pair;
use shipdeck_replay::display::{interactive_sink, PngSink, SceneSink};
use shipdeck_replay::plot_functions::plot_live_replay::{plot_live_replay, LiveReplay};
use shipdeck_replay::plot_functions::plot_segmented_trajectory::plot_segmented_trajectory;

fn main() -> anyhow::Result<()> {
    let args = VisualizerArgs::parse();

    let default_level = if args.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .init();

    let command = match args.into_command() {
        Ok(command) => command,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };

    match command {
        VisualizerCommand::Plot {
            directory,
            behavior,
            boundaries,
            skipped_entries,
            save_plot,
        } => {
            info!(
                "Plot ---> Logfile: {}, behavior: {}, segments: {:?}, skipped_entries: {}, save plot: {}",
                directory.display(),
                behavior,
                boundaries,
                skipped_entries,
                save_plot
                    .as_deref()
                    .map(|p| p.display().to_string())
                    .unwrap_or_else(|| "None".to_string())
            );

            let (uas, ship) = load_landing_pair(&directory).with_context(|| {
                format!("Failed to load trajectories from '{}'", directory.display())
            })?;

            let mut sink: Box<dyn SceneSink> = match &save_plot {
                Some(path) => Box::new(PngSink::new(path)),
                None => {
                    interactive_sink("shipdeck-viz plot", &directory.join(DEFAULT_PLOT_FILE))?
                }
            };
            let title = plot_title(&directory);
            plot_segmented_trajectory(
                sink.as_mut(),
                &title,
                behavior,
                &boundaries,
                skipped_entries,
                &uas,
                &ship,
            )
            .context("Failed to draw the segmented trajectory")?;
        }
        VisualizerCommand::Live {
            directory,
            behavior,
            timing,
        } => {
            info!(
                "Live ---> Logfile: {}, behavior: {}, sample time: {}, frequency logs: {}, speed up: {}",
                directory.display(),
                behavior,
                timing.sample_time,
                timing.log_frequency,
                timing.speed_up
            );

            let (uas, ship) = load_landing_pair(&directory).with_context(|| {
                format!("Failed to load trajectories from '{}'", directory.display())
            })?;

            // Ctrl+C ends the replay between frames instead of killing the process.
            let stop_flag = Arc::new(AtomicBool::new(false));
            let stop_flag_handler = stop_flag.clone();
            ctrlc::set_handler(move || {
                stop_flag_handler.store(true, Ordering::SeqCst);
            })
            .context("Failed to install the Ctrl+C handler")?;

            let mut sink =
                interactive_sink("shipdeck-viz live", &directory.join(DEFAULT_LIVE_FILE))?;
            let replay = LiveReplay::new(behavior, &uas, &ship);
            let frames = plot_live_replay(sink.as_mut(), &replay, &timing, &stop_flag);
            info!("Live replay finished after {} frame(s).", frames);
        }
    }

    Ok(())
}

/// Chart title: the name of the trajectory directory.
fn plot_title(directory: &Path) -> String {
    let resolved = directory.canonicalize().unwrap_or_else(|_| directory.to_path_buf());
    resolved
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| "Landing".to_string())
}

// src/main.rs
