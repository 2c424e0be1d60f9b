// src/segmentation/mod.rs

pub mod command_builder;
pub mod log_parser;

/// Sample-index range of one maneuver phase, as printed by the segmentation tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment {
    pub lower: usize,
    pub upper: usize,
}

/// Segments of one contiguous block of the log, in encounter order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SegmentationRun {
    pub segments: Vec<Segment>,
}

impl SegmentationRun {
    /// Upper bounds that start a new segment, i.e. every upper bound except the last one,
    /// which only closes the trajectory.
    pub fn boundaries(&self) -> Vec<usize> {
        let keep = self.segments.len().saturating_sub(1);
        self.segments[..keep].iter().map(|s| s.upper).collect()
    }
}

// src/segmentation/mod.rs
