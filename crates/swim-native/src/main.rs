use std::time::Instant;

use anyhow::Context;
use fish_swim::{FishSetup, FrameContext, ScriptedSteering};
use glam::{Vec2, Vec3};
use rand::prelude::*;
use swim_core::{KeyframeCurve, SteeringSource, SwimCurve};

const FRAME_DT: f32 = 1.0 / 60.0;
const DEFAULT_SECONDS: f32 = 20.0;
const DEFAULT_SEED: u64 = 42;
const REPORT_EVERY_SEC: f32 = 1.0;

/// Random steering that picks a new held axis every so often.
struct WanderSteering {
    rng: StdRng,
    axis: Vec2,
    hold_ticks: u32,
}

impl WanderSteering {
    fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            axis: Vec2::ZERO,
            hold_ticks: 0,
        }
    }
}

impl SteeringSource for WanderSteering {
    fn sample(&mut self) -> Vec2 {
        if self.hold_ticks == 0 {
            // mostly forward, with the occasional coast or back-up
            let thrust = match self.rng.gen_range(0..10) {
                0 => -1.0,
                1 => 0.0,
                _ => self.rng.gen_range(0.4..=1.0),
            };
            let turn = self.rng.gen_range(-1.0..=1.0_f32);
            self.axis = Vec2::new(turn, thrust);
            self.hold_ticks = self.rng.gen_range(30..180);
        }
        self.hold_ticks -= 1;
        self.axis
    }
}

/// Scripted opening, then wandering.
struct DemoSteering {
    script: ScriptedSteering,
    wander: WanderSteering,
}

impl SteeringSource for DemoSteering {
    fn sample(&mut self) -> Vec2 {
        if self.script.elapsed() < self.script.total_duration() {
            self.script.sample()
        } else {
            self.wander.sample()
        }
    }
}

fn parse_args() -> anyhow::Result<(f32, u64)> {
    let mut args = std::env::args().skip(1);
    let seconds = match args.next() {
        Some(s) => s
            .parse::<f32>()
            .with_context(|| format!("invalid duration in seconds: {s:?}"))?,
        None => DEFAULT_SECONDS,
    };
    let seed = match args.next() {
        Some(s) => s
            .parse::<u64>()
            .with_context(|| format!("invalid seed: {s:?}"))?,
        None => DEFAULT_SEED,
    };
    Ok((seconds, seed))
}

fn main() -> anyhow::Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let (seconds, seed) = parse_args()?;

    let script = ScriptedSteering::new(
        vec![
            (2.0, Vec2::ZERO), // idle sway
            (3.0, Vec2::new(0.0, 1.0)), // straight ahead
            (2.0, Vec2::new(1.0, 1.0)), // hard right
            (1.5, Vec2::new(-0.5, 0.6)), // ease back left
            (1.0, Vec2::new(0.0, -1.0)), // back up
        ],
        FRAME_DT,
    );
    let input = DemoSteering {
        script,
        wander: WanderSteering::new(seed),
    };
    let curve: Box<dyn SwimCurve> = Box::new(KeyframeCurve::default_stroke());
    let mut ctx = FrameContext::spawn(FishSetup::default(), Some(curve), input)?;

    let total_frames = (seconds / FRAME_DT).ceil().max(0.0) as u64;
    let report_every = (REPORT_EVERY_SEC / FRAME_DT).round().max(1.0) as u64;
    let wall = Instant::now();
    let mut top_speed = 0.0_f32;

    for frame in 1..=total_frames {
        let Some(report) = ctx.frame(FRAME_DT) else {
            continue;
        };
        top_speed = top_speed.max(report.velocity.length());
        if frame % report_every == 0 {
            let steering = ctx.creature.steering();
            log::info!(
                "t={:5.1}s pos=({:7.1},{:7.1},{:5.1}) speed={:5.1} yaw={:6.1} rate={:5.2} fwd={:5.2} turn={:5.2} tail=({:6.1},{:6.1})",
                frame as f32 * FRAME_DT,
                report.location.x,
                report.location.y,
                report.location.z,
                report.velocity.length(),
                ctx.mover.rotation().yaw,
                report.tick.play_rate,
                steering.forward,
                steering.turn,
                report.tick.spine.end.x,
                report.tick.spine.end.y,
            );
        }
    }

    let start = ctx.creature.start_location().unwrap_or(Vec3::ZERO);
    let end = ctx.mover.location();
    log::info!(
        "ran {} frames ({:.1}s simulated) in {:?}; top speed {:.1}, {:.1} units from start",
        ctx.frames(),
        total_frames as f32 * FRAME_DT,
        wall.elapsed(),
        top_speed,
        start.distance(end)
    );
    Ok(())
}
