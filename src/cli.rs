// src/cli.rs

//! Command-line surfaces of the two binaries.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::behavior::Behavior;
use crate::data_analysis::replay::ReplayTiming;
use crate::error::{Error, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Action {
    /// Replay the landing frame by frame.
    Live,
    /// Draw the segmented landing once.
    Plot,
}

/// Plots or replays a UAS landing on a ship deck.
#[derive(Parser, Debug)]
#[command(name = "shipdeck-viz", version = crate::crate_version(), about)]
pub struct VisualizerArgs {
    /// What to show.
    #[arg(value_enum)]
    pub action: Action,

    /// Directory holding SIMOUT_UAS.csv and SIMOUT_Ship.csv.
    #[arg(short = 'l', long = "logfile")]
    pub logfile: Option<PathBuf>,

    /// Ground truth landing maneuver.
    #[arg(short = 'b', long = "behavior", value_enum)]
    pub behavior: Option<Behavior>,

    /// Segment boundaries in sample units.
    #[arg(short = 's', long = "segment", num_args = 0..)]
    pub segment: Option<Vec<usize>>,

    /// Entries skipped by the segmentation, i.e. the stride of a sample unit.
    #[arg(short = 'e', long = "skippedentries")]
    pub skipped_entries: Option<usize>,

    /// Save the plot here instead of opening a viewer.
    #[arg(short = 'p', long = "saveplot")]
    pub save_plot: Option<PathBuf>,

    /// Log frequency, sample time and speed up of the live replay.
    #[arg(
        short = 'f',
        long = "frequency",
        num_args = 3,
        value_names = ["LOG_FREQUENCY", "SAMPLE_TIME", "SPEED_UP"],
        allow_negative_numbers = true
    )]
    pub frequency: Option<Vec<f64>>,

    /// Debug logging.
    #[arg(short, long)]
    pub verbose: bool,
}

/// Validated request of the visualizer.
#[derive(Debug, Clone, PartialEq)]
pub enum VisualizerCommand {
    Plot {
        directory: PathBuf,
        behavior: Behavior,
        boundaries: Vec<usize>,
        skipped_entries: usize,
        save_plot: Option<PathBuf>,
    },
    Live {
        directory: PathBuf,
        behavior: Behavior,
        timing: ReplayTiming,
    },
}

impl VisualizerArgs {
    /// Checks that the arguments the chosen action needs are present.
    pub fn into_command(self) -> Result<VisualizerCommand> {
        let directory = self
            .logfile
            .ok_or(Error::MissingArgument("Expected a logfile!"))?;
        let behavior = self
            .behavior
            .ok_or(Error::MissingArgument("Expected to provide ground truth behavior!"))?;

        match self.action {
            Action::Plot => {
                let boundaries = self
                    .segment
                    .ok_or(Error::MissingArgument("Expected segment information!"))?;
                let skipped_entries = self
                    .skipped_entries
                    .ok_or(Error::MissingArgument("Expected number of skipped entries!"))?;
                Ok(VisualizerCommand::Plot {
                    directory,
                    behavior,
                    boundaries,
                    skipped_entries,
                    save_plot: self.save_plot,
                })
            }
            Action::Live => {
                let missing_frequency =
                    Error::MissingArgument("Expected to provide frequencies for live replay!");
                let Some(&[log_frequency, sample_time, speed_up]) = self.frequency.as_deref()
                else {
                    return Err(missing_frequency);
                };
                Ok(VisualizerCommand::Live {
                    directory,
                    behavior,
                    timing: ReplayTiming {
                        log_frequency,
                        sample_time,
                        speed_up,
                    },
                })
            }
        }
    }
}

/// Prints the visualizer invocations for every segmentation run in a log and runs them.
#[derive(Parser, Debug)]
#[command(name = "segment-calls", version = crate::crate_version(), about)]
pub struct SegmentCallsArgs {
    /// Segmentation log to read.
    pub logfile: PathBuf,

    /// Only emit the first (best) segmentation run.
    #[arg(long)]
    pub best_only: bool,

    /// Print the invocations without running them.
    #[arg(long)]
    pub dry_run: bool,

    /// Visualizer executable. Defaults to the one installed next to this binary.
    #[arg(long)]
    pub visualizer: Option<PathBuf>,

    /// Debug logging.
    #[arg(short, long)]
    pub verbose: bool,
}


// src/cli.rs
