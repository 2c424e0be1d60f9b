// src/data_analysis/replay.rs

use std::time::Duration;

use tracing::warn;

/// Timing of a live replay, as given on the command line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReplayTiming {
    pub log_frequency: f64,
    pub sample_time: f64,
    pub speed_up: f64,
}

impl ReplayTiming {
    /// Wall-clock pause between frames. Invalid sample times do not pause.
    pub fn frame_pause(&self) -> Duration {
        Duration::try_from_secs_f64(self.sample_time).unwrap_or(Duration::ZERO)
    }
}

/// Number of samples the replay advances per frame:
/// `floor((sample_time / log_frequency) * speed_up)`, at least 1.
pub fn replay_step(log_frequency: f64, sample_time: f64, speed_up: f64) -> usize {
    let raw = (sample_time / log_frequency) * speed_up;
    if raw.is_finite() && raw >= 1.0 {
        raw as usize
    } else {
        warn!(
            "Replay step {:.3} from log frequency {}, sample time {}, speed up {} is below one sample; advancing one sample per frame",
            raw, log_frequency, sample_time, speed_up
        );
        1
    }
}

/// Prefix lengths drawn by successive live-replay frames.
///
/// Each frame shows `min(current, vehicle_len)` samples. The replay ends after the frame in which
/// `current` first exceeds `ship_len`; otherwise `current` grows by `step`.
#[derive(Debug, Clone)]
pub struct ReplaySchedule {
    step: usize,
    vehicle_len: usize,
    ship_len: usize,
    current: usize,
    finished: bool,
}

impl ReplaySchedule {
    pub fn new(step: usize, vehicle_len: usize, ship_len: usize) -> Self {
        ReplaySchedule {
            step: step.max(1),
            vehicle_len,
            ship_len,
            current: 0,
            finished: false,
        }
    }

    pub fn step(&self) -> usize {
        self.step
    }
}

impl Iterator for ReplaySchedule {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        if self.finished {
            return None;
        }
        let prefix = self.current.min(self.vehicle_len);
        if self.current > self.ship_len {
            self.finished = true;
        } else {
            self.current = self.current.saturating_add(self.step);
        }
        Some(prefix)
    }
}


// src/data_analysis/replay.rs
