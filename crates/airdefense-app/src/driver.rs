//! Frame loop: steps the engine until the simulated duration has elapsed.
//!
//! The engine is purely computational; any wall-clock pacing happens here.
//! Real-time mode sleeps until the next frame is due and resets its schedule
//! if it falls too far behind rather than trying to catch up.

use std::thread;
use std::time::{Duration, Instant};

use log::{info, warn};

use airdefense_sim::core::state::StepReport;
use airdefense_sim::GuidanceEngine;

/// How the loop is run.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DriverOptions {
    /// Sleep so one simulated second takes one wall-clock second.
    pub realtime: bool,
    /// End early once every threat has been neutralized.
    pub stop_when_clear: bool,
}

/// What a finished run looked like.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RunSummary {
    pub frames: u64,
    pub simulated_time: f64,
    pub hits: usize,
    pub remaining: usize,
}

/// Step `engine` until its frame budget is spent, calling `on_frame` after each step.
pub fn run(
    engine: &mut GuidanceEngine,
    options: DriverOptions,
    mut on_frame: impl FnMut(&StepReport),
) -> RunSummary {
    // A step too long to express as a `Duration` runs unpaced.
    let frame_duration = if options.realtime {
        let duration = Duration::try_from_secs_f64(engine.config().dt).ok();
        if duration.is_none() {
            warn!("dt={}s is too long to pace, running unpaced", engine.config().dt);
        }
        duration
    } else {
        None
    };
    let mut next_frame_time = Instant::now();
    let mut frames = 0;
    let mut hits = 0;

    info!(
        "running {} threats for {} frames",
        engine.pairs().len(),
        engine.frame_budget().saturating_sub(engine.clock().frame)
    );

    while !engine.is_finished() {
        let report = engine.advance();
        frames += 1;
        hits += report.new_hits.len();
        on_frame(&report);

        if options.stop_when_clear && engine.all_neutralized() {
            info!("all threats neutralized at t={:.2}s", report.time);
            break;
        }

        if let Some(frame_duration) = frame_duration {
            let now = Instant::now();
            match next_frame_time.checked_add(frame_duration) {
                Some(due) if due > now => {
                    next_frame_time = due;
                    thread::sleep(due - now);
                }
                Some(due) if now - due <= frame_duration.saturating_mul(2) => {
                    next_frame_time = due;
                }
                _ => next_frame_time = now,
            }
        }
    }

    RunSummary {
        frames,
        simulated_time: engine.clock().time(),
        hits,
        remaining: engine.active_count(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use airdefense_sim::core::config::GuidanceConfig;
    use glam::DVec2;

    fn engine(duration: f64) -> GuidanceEngine {
        GuidanceEngine::new(GuidanceConfig {
            total_simulated_time: duration,
            ..Default::default()
        })
        .unwrap()
    }

    #[test]
    fn test_runs_full_budget() {
        let mut engine = engine(1.0);
        engine.create_threat(DVec2::new(0.0, 300.0), DVec2::ZERO);
        let mut seen = 0;
        let summary = run(&mut engine, DriverOptions::default(), |_| seen += 1);
        assert_eq!(summary.frames, 100);
        assert_eq!(seen, 100);
        assert_eq!(summary.hits, 0);
        assert_eq!(summary.remaining, 1);
    }

    #[test]
    fn test_stop_when_clear() {
        let mut engine = engine(20.0);
        engine.create_threat(DVec2::new(0.0, 3.0), DVec2::ZERO);
        let options = DriverOptions {
            stop_when_clear: true,
            ..Default::default()
        };
        let summary = run(&mut engine, options, |_| {});
        assert_eq!(summary.frames, 1);
        assert_eq!(summary.hits, 1);
        assert_eq!(summary.remaining, 0);
    }

    #[test]
    fn test_realtime_paces_frames() {
        let mut engine = engine(0.05);
        let start = Instant::now();
        let summary = run(
            &mut engine,
            DriverOptions {
                realtime: true,
                ..Default::default()
            },
            |_| {},
        );
        assert_eq!(summary.frames, 5);
        assert!(start.elapsed() >= Duration::from_millis(40));
    }

    #[test]
    fn test_huge_dt_does_not_panic() {
        for realtime in [false, true] {
            let mut engine = GuidanceEngine::new(GuidanceConfig {
                dt: 1e20,
                total_simulated_time: 1e21,
                ..Default::default()
            })
            .unwrap();
            engine.create_threat(DVec2::new(0.0, 300.0), DVec2::ZERO);
            let options = DriverOptions {
                realtime,
                ..Default::default()
            };
            let summary = run(&mut engine, options, |_| {});
            assert_eq!(summary.frames, 10);
            assert_eq!(summary.simulated_time, 10.0 * 1e20);
        }
    }
}
