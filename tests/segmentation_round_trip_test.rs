// tests/segmentation_round_trip_test.rs

use std::fs;
use std::path::{Path, PathBuf};

use clap::Parser;
use shipdeck_replay::behavior::Behavior;
use shipdeck_replay::cli::{VisualizerArgs, VisualizerCommand};
use shipdeck_replay::segmentation::command_builder::build_calls;
use shipdeck_replay::segmentation::log_parser::{parse_segmentation_log, ExtractMode};
use tempfile::TempDir;

const LOG_BODY: &str = "\
tbt-segmentation -f trajectories/run -s
SETTING:
Is greedy: (3) with delta 0.12
Get segmentation after 1 seconds.
Best segmentation with robustness 0.5 is:
lower:          0   upper:         10   value:   0.5  segment: MoveToPosition
lower:         11   upper:         25   value:   0.7  segment: Descend

Alternatives:
Segmentation with robustness of 0.4 is:
lower:          0   upper:          6   value:   0.4  segment: MoveToPosition
lower:          7   upper:         13   value:   0.4  segment: StayInPosition
lower:         14   upper:         19   value:   0.4  segment: MoveToTouchdown
lower:         20   upper:         25   value:   0.6  segment: Descend
";

fn write_log(dir: &Path, name: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, LOG_BODY).unwrap();
    path
}

fn parse_call(argv: Vec<String>) -> VisualizerCommand {
    VisualizerArgs::try_parse_from(argv)
        .unwrap()
        .into_command()
        .unwrap()
}

#[test]
fn test_extracted_calls_parse_back() {
    let dir = TempDir::new().unwrap();
    let log_path = write_log(dir.path(), "Lateral_run.txt");

    let log = parse_segmentation_log(&log_path, ExtractMode::AllRuns).unwrap();
    assert_eq!(log.behavior, Some(Behavior::Lateral));
    assert_eq!(log.skipped_entries, 3);

    let calls = build_calls(&log, Path::new("shipdeck-viz"));
    assert_eq!(calls.len(), 2);

    let expected = [vec![10], vec![6, 13, 19]];
    for (call, expected_boundaries) in calls.iter().zip(expected) {
        match parse_call(call.argv()) {
            VisualizerCommand::Plot {
                directory,
                behavior,
                boundaries,
                skipped_entries,
                save_plot,
            } => {
                assert_eq!(directory, dir.path());
                assert_eq!(behavior, Behavior::Lateral);
                assert_eq!(boundaries, expected_boundaries);
                assert_eq!(skipped_entries, 3);
                assert!(save_plot.is_some());
            }
            other => panic!("expected a plot command, got {other:?}"),
        }
    }

    let best = dir.path().join("Lateral_run_best");
    assert!(calls[0].args.contains(&best.to_string_lossy().into_owned()));
    let alternative = dir.path().join("Lateral_run_a1");
    assert!(calls[1].args.contains(&alternative.to_string_lossy().into_owned()));
}

#[test]
fn test_best_only_emits_one_call() {
    let dir = TempDir::new().unwrap();
    let log_path = write_log(dir.path(), "45Deg_run.txt");

    let log = parse_segmentation_log(&log_path, ExtractMode::BestOnly).unwrap();
    assert_eq!(log.behavior, Some(Behavior::Deg45));

    let calls = build_calls(&log, Path::new("shipdeck-viz"));
    assert_eq!(calls.len(), 1);
    assert!(calls[0].args.windows(2).any(|w| w[0] == "-b" && w[1] == "45Deg"));
}

#[test]
fn test_unknown_behavior_is_rejected_by_visualizer() {
    let dir = TempDir::new().unwrap();
    let log_path = write_log(dir.path(), "run_without_keyword.txt");

    let log = parse_segmentation_log(&log_path, ExtractMode::AllRuns).unwrap();
    assert_eq!(log.behavior, None);
    let message = log.behavior_diagnostic().unwrap();
    assert!(message.contains("expected one of the behaviors"));
    assert!(message.contains("run_without_keyword.txt"));

    let calls = build_calls(&log, Path::new("shipdeck-viz"));
    assert_eq!(calls.len(), 2);
    assert!(calls[0].args.windows(2).any(|w| w[0] == "-b" && w[1] == "None"));
    assert!(VisualizerArgs::try_parse_from(calls[0].argv()).is_err());
}

#[test]
fn test_missing_log_file() {
    let dir = TempDir::new().unwrap();
    let result = parse_segmentation_log(&dir.path().join("Lateral.txt"), ExtractMode::AllRuns);
    assert!(matches!(result, Err(shipdeck_replay::Error::Io { .. })));
}

// tests/segmentation_round_trip_test.rs
