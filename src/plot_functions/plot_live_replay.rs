// src/plot_functions/plot_live_replay.rs

use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;

use tracing::{error, info, warn};

use crate::behavior::Behavior;
use crate::constants::{
    COLOR_ABOVE_SHIP, COLOR_BEST_POSITION, COLOR_SHIP, LINE_WIDTH_PLOT, METERS_ABOVE_SHIP,
    REFERENCE_PATH_ALPHA,
};
use crate::data_analysis::best_position::compute_best_position;
use crate::data_analysis::replay::{replay_step, ReplaySchedule, ReplayTiming};
use crate::data_input::trajectory::Trajectory;
use crate::display::SceneSink;
use crate::error::Result;
use crate::plot_framework::{series_bounds, LineStyle, Plot3dConfig, PlotSeries3d};
use crate::plot_functions::segment_color;

/// The four paths of a replay, precomputed once.
pub struct LiveReplay<'a> {
    behavior: Behavior,
    uas: &'a Trajectory,
    ship: &'a Trajectory,
    best_position: Trajectory,
    above_ship: Trajectory,
    bounds: Option<[std::ops::Range<f64>; 3]>,
}

impl<'a> LiveReplay<'a> {
    pub fn new(behavior: Behavior, uas: &'a Trajectory, ship: &'a Trajectory) -> Self {
        let best_position = compute_best_position(behavior, ship);
        let above_ship = ship.raised(METERS_ABOVE_SHIP);
        let mut replay = LiveReplay {
            behavior,
            uas,
            ship,
            best_position,
            above_ship,
            bounds: None,
        };
        // Axes stay fixed over the whole replay.
        let full = replay.frame(usize::MAX);
        replay.bounds = series_bounds(&full.series);
        replay
    }

    /// Chart showing the first `prefix` samples of every path.
    pub fn frame(&self, prefix: usize) -> Plot3dConfig {
        let path = |data: Vec<(f64, f64, f64)>, label: &str, color, alpha, line_style| {
            PlotSeries3d {
                data,
                label: label.to_string(),
                color,
                alpha,
                stroke_width: LINE_WIDTH_PLOT,
                line_style,
            }
        };
        Plot3dConfig {
            title: format!("Live replay ({})", self.behavior),
            series: vec![
                path(self.uas.prefix(prefix), "UAS", segment_color(0), 1.0, LineStyle::Solid),
                path(self.ship.prefix(prefix), "Ship", *COLOR_SHIP, 1.0, LineStyle::Solid),
                path(
                    self.best_position.prefix(prefix),
                    "Maneuver: at position",
                    *COLOR_BEST_POSITION,
                    1.0,
                    LineStyle::Solid,
                ),
                path(
                    self.above_ship.prefix(prefix),
                    "Maneuver: above ship",
                    *COLOR_ABOVE_SHIP,
                    REFERENCE_PATH_ALPHA,
                    LineStyle::Dashed,
                ),
            ],
            bounds: self.bounds.clone(),
        }
    }

    /// Frame schedule for the given timing.
    pub fn schedule(&self, timing: &ReplayTiming) -> ReplaySchedule {
        let step = replay_step(timing.log_frequency, timing.sample_time, timing.speed_up);
        ReplaySchedule::new(step, self.uas.len(), self.ship.len())
    }
}

/// Replays the landing into `sink`, one frame per schedule step, pausing `sample_time` between
/// frames, until the ship data is exhausted or `stop` is raised (Ctrl-C in the binary).
///
/// An interrupt or a failing frame stops the replay; it is reported and not propagated.
/// Returns the number of frames shown.
pub fn plot_live_replay(
    sink: &mut dyn SceneSink,
    replay: &LiveReplay,
    timing: &ReplayTiming,
    stop: &AtomicBool,
) -> usize {
    let schedule = replay.schedule(timing);
    info!(
        "Replaying with {} samples per frame (log frequency {}, sample time {}, speed up {})",
        schedule.step(),
        timing.log_frequency,
        timing.sample_time,
        timing.speed_up
    );

    let pause = timing.frame_pause();
    let mut frames_shown = 0;
    for (frame, prefix) in schedule.enumerate() {
        if stop.load(Ordering::SeqCst) {
            warn!("Replay interrupted after {} frame(s)", frames_shown);
            error!("Stopped the program.");
            finish_quietly(sink);
            return frames_shown;
        }
        if let Err(e) = sink.show(frame, &replay.frame(prefix)) {
            error!("{}", e);
            error!("Stopped the program.");
            return frames_shown;
        }
        frames_shown += 1;
        thread::sleep(pause);
    }

    finish_quietly(sink);
    frames_shown
}

fn finish_quietly(sink: &mut dyn SceneSink) {
    if let Err(e) = sink.finish() {
        error!("{}", e);
        error!("Stopped the program.");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data_input::trajectory::TrajectoryKind;
    use crate::error::Error;
    use ndarray::Array1;
    use std::sync::Arc;

    fn line(len: usize) -> Trajectory {
        let x = Array1::from_iter((0..len).map(|i| i as f64));
        let zeros = Array1::zeros(len);
        Trajectory::from_logged(x, zeros.clone(), zeros.clone(), zeros, TrajectoryKind::Vehicle)
    }

    /// Records the UAS prefix length of every frame.
    #[derive(Default)]
    struct RecordingSink {
        prefixes: Vec<usize>,
        fail_at: Option<usize>,
        interrupt_at: Option<(usize, Arc<AtomicBool>)>,
        finished: bool,
    }

    impl SceneSink for RecordingSink {
        fn show(&mut self, frame: usize, config: &Plot3dConfig) -> Result<()> {
            if self.fail_at == Some(frame) {
                return Err(Error::Plot("backend gone".to_string()));
            }
            if let Some((at, flag)) = &self.interrupt_at {
                if *at == frame {
                    flag.store(true, Ordering::SeqCst);
                }
            }
            self.prefixes.push(config.series[0].data.len());
            Ok(())
        }

        fn finish(&mut self) -> Result<()> {
            self.finished = true;
            Ok(())
        }
    }

    fn instant(log_frequency: f64, sample_time: f64, speed_up: f64) -> ReplayTiming {
        ReplayTiming {
            log_frequency,
            sample_time,
            speed_up,
        }
    }

    #[test]
    fn test_replay_runs_until_ship_exhausted() {
        let uas = line(8);
        let ship = line(12);
        let replay = LiveReplay::new(Behavior::Lateral, &uas, &ship);
        let mut sink = RecordingSink::default();
        // step = (0.0 / 1.0) * 1.0 -> clamped to one sample; sample time 0 means no pause
        let shown = plot_live_replay(
            &mut sink,
            &replay,
            &instant(1.0, 0.0, 1.0),
            &AtomicBool::new(false),
        );
        assert_eq!(shown, 14);
        assert!(sink.finished);
        assert_eq!(sink.prefixes.len(), 14);
        assert!(sink.prefixes.iter().all(|&p| p <= 8));
        assert_eq!(*sink.prefixes.last().unwrap(), 8);
    }

    #[test]
    fn test_replay_stops_on_error() {
        let uas = line(10);
        let ship = line(10);
        let replay = LiveReplay::new(Behavior::Straight, &uas, &ship);
        let mut sink = RecordingSink {
            fail_at: Some(2),
            ..Default::default()
        };
        let shown = plot_live_replay(
            &mut sink,
            &replay,
            &instant(1.0, 0.0, 1.0),
            &AtomicBool::new(false),
        );
        assert_eq!(shown, 2);
    }

    #[test]
    fn test_replay_stops_on_interrupt() {
        let uas = line(50);
        let ship = line(50);
        let replay = LiveReplay::new(Behavior::Oblique, &uas, &ship);
        let stop = Arc::new(AtomicBool::new(false));
        let mut sink = RecordingSink {
            interrupt_at: Some((3, Arc::clone(&stop))),
            ..Default::default()
        };
        let shown = plot_live_replay(&mut sink, &replay, &instant(1.0, 0.0, 1.0), &stop);
        // Frame 3 is drawn, the flag is seen before frame 4.
        assert_eq!(shown, 4);
        assert_eq!(sink.prefixes, vec![0, 1, 2, 3]);
        assert!(sink.finished);
    }

    #[test]
    fn test_replay_raised_before_start_shows_nothing() {
        let uas = line(5);
        let ship = line(5);
        let replay = LiveReplay::new(Behavior::Lateral, &uas, &ship);
        let mut sink = RecordingSink::default();
        let shown = plot_live_replay(
            &mut sink,
            &replay,
            &instant(1.0, 0.0, 1.0),
            &AtomicBool::new(true),
        );
        assert_eq!(shown, 0);
        assert!(sink.prefixes.is_empty());
    }

    #[test]
    fn test_frames_share_bounds() {
        let uas = line(20);
        let ship = line(20);
        let replay = LiveReplay::new(Behavior::Deg45, &uas, &ship);
        let first = replay.frame(0);
        let last = replay.frame(20);
        assert!(first.bounds.is_some());
        assert_eq!(first.bounds, last.bounds);
        assert!(first.series.iter().all(|s| s.data.is_empty()));
        assert_eq!(last.series[1].data.len(), 20);
    }
}

// src/plot_functions/plot_live_replay.rs
