// src/segmentation/command_builder.rs

use std::fmt;
use std::path::{Path, PathBuf};
use std::process::Command;

use crate::segmentation::log_parser::SegmentationLog;

/// One invocation of the visualizer that plots a segmentation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisualizerCall {
    pub program: PathBuf,
    pub args: Vec<String>,
}

impl VisualizerCall {
    /// Builds the process to spawn. Arguments are passed verbatim, no shell involved.
    pub fn to_command(&self) -> Command {
        let mut command = Command::new(&self.program);
        command.args(&self.args);
        command
    }

    /// Full argument vector including the program name, as `clap` expects it.
    pub fn argv(&self) -> Vec<String> {
        std::iter::once(self.program.to_string_lossy().into_owned())
            .chain(self.args.iter().cloned())
            .collect()
    }
}

impl fmt::Display for VisualizerCall {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rendered: Vec<String> = self.argv().iter().map(|a| shell_quote(a)).collect();
        f.write_str(&rendered.join(" "))
    }
}

fn shell_quote(arg: &str) -> String {
    if !arg.is_empty()
        && arg
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || "-_./:=+,".contains(c))
    {
        arg.to_string()
    } else {
        format!("'{}'", arg.replace('\'', r"'\''"))
    }
}

/// Output path of the plot for run `run_index`: the log path without its 4-character extension,
/// suffixed `_best` for the first run and `_a<N>` for the alternatives.
pub fn output_location(log_path: &Path, run_index: usize) -> String {
    let full = log_path.to_string_lossy();
    let char_count = full.chars().count();
    let stem: String = full.chars().take(char_count.saturating_sub(4)).collect();
    if run_index == 0 {
        format!("{stem}_best")
    } else {
        format!("{stem}_a{run_index}")
    }
}

/// Directory holding the trajectory CSVs that belong to a log.
pub fn trajectory_directory(log_path: &Path) -> PathBuf {
    match log_path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir.to_path_buf(),
        _ => PathBuf::from("."),
    }
}

/// Turns every segmentation run of a log into a `plot` invocation of the visualizer.
pub fn build_calls(log: &SegmentationLog, program: &Path) -> Vec<VisualizerCall> {
    let directory = trajectory_directory(&log.path);
    let behavior = log
        .behavior
        .map(|b| b.keyword().to_string())
        .unwrap_or_else(|| "None".to_string());

    log.runs
        .iter()
        .enumerate()
        .map(|(run_index, run)| {
            let mut args = vec![
                "-l".to_string(),
                directory.to_string_lossy().into_owned(),
                "-b".to_string(),
                behavior.clone(),
                "-s".to_string(),
            ];
            args.extend(run.boundaries().iter().map(|b| b.to_string()));
            args.extend([
                "-p".to_string(),
                output_location(&log.path, run_index),
                "-e".to_string(),
                log.skipped_entries.to_string(),
                "plot".to_string(),
            ]);
            VisualizerCall {
                program: program.to_path_buf(),
                args,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::behavior::Behavior;
    use crate::segmentation::{Segment, SegmentationRun};

    fn sample_log() -> SegmentationLog {
        SegmentationLog {
            path: PathBuf::from("logs/Lateral_01.txt"),
            behavior: Some(Behavior::Lateral),
            skipped_entries: 3,
            runs: vec![
                SegmentationRun {
                    segments: vec![
                        Segment { lower: 0, upper: 10 },
                        Segment { lower: 11, upper: 25 },
                    ],
                },
                SegmentationRun {
                    segments: vec![
                        Segment { lower: 0, upper: 8 },
                        Segment { lower: 9, upper: 14 },
                        Segment { lower: 15, upper: 25 },
                    ],
                },
            ],
        }
    }

    #[test]
    fn test_output_location() {
        let path = Path::new("logs/Lateral_01.txt");
        assert_eq!(output_location(path, 0), "logs/Lateral_01_best");
        assert_eq!(output_location(path, 1), "logs/Lateral_01_a1");
        assert_eq!(output_location(path, 12), "logs/Lateral_01_a12");
        assert_eq!(output_location(Path::new("abc"), 0), "_best");
    }

    #[test]
    fn test_trajectory_directory() {
        assert_eq!(
            trajectory_directory(Path::new("logs/run/Lateral.txt")),
            PathBuf::from("logs/run")
        );
        assert_eq!(trajectory_directory(Path::new("Lateral.txt")), PathBuf::from("."));
    }

    #[test]
    fn test_build_calls() {
        let calls = build_calls(&sample_log(), Path::new("shipdeck-viz"));
        assert_eq!(calls.len(), 2);
        assert_eq!(
            calls[0].args,
            vec![
                "-l", "logs", "-b", "Lateral", "-s", "10", "-p", "logs/Lateral_01_best", "-e",
                "3", "plot"
            ]
        );
        assert_eq!(
            calls[1].args,
            vec![
                "-l", "logs", "-b", "Lateral", "-s", "8", "14", "-p", "logs/Lateral_01_a1", "-e",
                "3", "plot"
            ]
        );
    }

    #[test]
    fn test_build_calls_unknown_behavior() {
        let mut log = sample_log();
        log.behavior = None;
        let calls = build_calls(&log, Path::new("shipdeck-viz"));
        assert_eq!(calls[0].args[3], "None");
    }

    #[test]
    fn test_display_quotes_arguments() {
        let call = VisualizerCall {
            program: PathBuf::from("shipdeck-viz"),
            args: vec!["-l".to_string(), "my logs".to_string(), "plot".to_string()],
        };
        assert_eq!(call.to_string(), "shipdeck-viz -l 'my logs' plot");
    }
}

// src/segmentation/command_builder.rs
