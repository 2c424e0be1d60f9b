// src/data_analysis/segments.rs

use std::ops::Range;

/// Maps segment boundaries (in subsampled indices) onto raw trajectory sample ranges.
///
/// A skipped-entries value of 0 means no subsampling and acts as a stride of 1. Segment `k` covers
/// `[start * stride, boundary_k * stride)` where `start` is one past the previous boundary. The
/// final segment runs from the unscaled `start` to the end of the trajectory, so with a stride
/// above 1 it overlaps the segments before it. Ranges are clamped to `len`, so boundaries beyond
/// the data yield empty ranges rather than out-of-range slices.
pub fn partition_segments(
    boundaries: &[usize],
    skipped_entries: usize,
    len: usize,
) -> Vec<Range<usize>> {
    let stride = skipped_entries.max(1);
    let clamp = |range: Range<usize>| {
        let end = range.end.min(len);
        range.start.min(end)..end
    };

    let mut ranges = Vec::with_capacity(boundaries.len() + 1);
    let mut segment_start = 0usize;
    for &boundary in boundaries {
        ranges.push(clamp(segment_start.saturating_mul(stride)..boundary.saturating_mul(stride)));
        segment_start = boundary.saturating_add(1);
    }
    // Tail start is left in subsampled units.
    ranges.push(clamp(segment_start..len));
    ranges
}


// src/data_analysis/segments.rs
