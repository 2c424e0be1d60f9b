// src/segmentation/log_parser.rs

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use regex::Regex;
use tracing::{debug, error, info};

use crate::behavior::Behavior;
use crate::constants::{HEADER_SEGMENTATION, PREFIX_GREEDY_LINE, PREFIX_SEGMENT_LINE};
use crate::error::{Error, Result};
use crate::segmentation::{Segment, SegmentationRun};

/// How many segmentation blocks to collect from one log.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExtractMode {
    /// The best segmentation followed by every alternative segmentation.
    #[default]
    AllRuns,
    /// Stop at the end of the first block.
    BestOnly,
}

/// Segment boundaries and skipped-entries count found in a log body.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SegmentationScan {
    pub skipped_entries: usize,
    pub runs: Vec<SegmentationRun>,
}

/// Everything `segment-calls` needs to know about one segmentation log.
#[derive(Debug, Clone, PartialEq)]
pub struct SegmentationLog {
    pub path: PathBuf,
    pub behavior: Option<Behavior>,
    pub skipped_entries: usize,
    pub runs: Vec<SegmentationRun>,
}

impl SegmentationLog {
    /// Error reported when no behavior keyword was found in the log filename.
    pub fn behavior_diagnostic(&self) -> Option<String> {
        match self.behavior {
            Some(_) => None,
            None => Some(format!(
                "Unexpected logfile, expected one of the behaviors in the filename but wasn't: {}",
                self.path.display()
            )),
        }
    }
}

fn segment_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^lower:\s+(\d+)\s+upper:\s+(\d+)").unwrap())
}

fn greedy_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    // Greedy prefix: the last parenthesized number on the line wins.
    PATTERN.get_or_init(|| Regex::new(r".*\((\d+)\)").unwrap())
}

/// Parses a `lower: N upper: M ...` line. Returns `None` when the line does not follow the grammar.
pub fn parse_segment_line(line: &str) -> Option<Segment> {
    let caps = segment_pattern().captures(line)?;
    let lower = caps.get(1)?.as_str().parse().ok()?;
    let upper = caps.get(2)?.as_str().parse().ok()?;
    Some(Segment { lower, upper })
}

/// Reads the skipped-entries count from an `Is greedy: (N) ...` line.
pub fn parse_skipped_entries(line: &str) -> Option<usize> {
    greedy_pattern()
        .captures(line)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse().ok())
}

/// Scans a segmentation log body.
///
/// The first line of the input is the producer's banner and is ignored. Until the
/// `Get segmentation after` header is met, `Is greedy:` lines update the skipped-entries count.
/// The line right after the header is a caption and is skipped too. From then on every run of
/// consecutive `lower:` lines forms one [`SegmentationRun`]; any other line closes the block.
pub fn scan_segmentation<R: BufRead>(reader: R, mode: ExtractMode) -> Result<SegmentationScan> {
    let mut scan = SegmentationScan::default();
    let mut current: Vec<Segment> = Vec::new();
    let mut skip_next = true;
    let mut reading_results = false;

    for (index, line_result) in reader.lines().enumerate() {
        let line = line_result.map_err(|e| Error::io("<segmentation log>", e))?;
        let line_number = index + 1;

        if skip_next {
            skip_next = false;
            continue;
        }

        if reading_results {
            if line.starts_with(PREFIX_SEGMENT_LINE) {
                let segment =
                    parse_segment_line(&line).ok_or_else(|| Error::MalformedSegmentLine {
                        line_number,
                        line: line.clone(),
                    })?;
                current.push(segment);
            } else if !current.is_empty() {
                debug!(
                    "Closed segmentation block with {} segments at line {}",
                    current.len(),
                    line_number
                );
                scan.runs.push(SegmentationRun {
                    segments: std::mem::take(&mut current),
                });
                if mode == ExtractMode::BestOnly {
                    return Ok(scan);
                }
            }
        } else {
            if line.trim().starts_with(PREFIX_GREEDY_LINE) {
                if let Some(skipped) = parse_skipped_entries(&line) {
                    scan.skipped_entries = skipped;
                }
            }
            if line.starts_with(HEADER_SEGMENTATION) {
                reading_results = true;
                skip_next = true;
            }
        }
    }

    // Log ended right after a segment line.
    if !current.is_empty() {
        scan.runs.push(SegmentationRun { segments: current });
    }

    Ok(scan)
}

/// Reads a segmentation log from disk and infers its behavior from the filename.
///
/// An unrecognized filename is reported but does not stop the extraction.
pub fn parse_segmentation_log(path: &Path, mode: ExtractMode) -> Result<SegmentationLog> {
    let file = File::open(path).map_err(|e| Error::io(path, e))?;
    let scan = scan_segmentation(BufReader::new(file), mode)?;

    let log = SegmentationLog {
        path: path.to_path_buf(),
        behavior: Behavior::from_filename(path),
        skipped_entries: scan.skipped_entries,
        runs: scan.runs,
    };
    if let Some(message) = log.behavior_diagnostic() {
        error!("{}", message);
    }

    info!(
        "Found {} segmentation run(s) in '{}' (skipped entries: {})",
        log.runs.len(),
        path.display(),
        log.skipped_entries
    );

    Ok(log)
}


// src/segmentation/log_parser.rs
