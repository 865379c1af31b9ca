// End-to-end frame tests: swim core, mover and camera wired together.

use fish_swim::{FishSetup, FrameContext, KeyAxes, ScriptedSteering};
use glam::{Vec2, Vec3};
use swim_core::{constants as swim, normalize_axis, KeyframeCurve, SwimCurve};

const DT: f32 = 1.0 / 60.0;

fn stroke() -> Option<Box<dyn SwimCurve>> {
    Some(Box::new(KeyframeCurve::default_stroke()))
}

fn spawn_with_keys(keys: KeyAxes) -> FrameContext<KeyAxes> {
    match FrameContext::spawn(FishSetup::default(), stroke(), keys) {
        Ok(ctx) => ctx,
        Err(err) => panic!("spawn failed: {err:#}"),
    }
}

fn run<S: swim_core::SteeringSource>(ctx: &mut FrameContext<S>, frames: usize) {
    for _ in 0..frames {
        assert!(ctx.frame(DT).is_some());
    }
}

#[test]
fn spawn_without_curve_fails() {
    let Err(err) = FrameContext::spawn(FishSetup::default(), None, KeyAxes::default()) else {
        panic!("spawn should fail without a curve");
    };
    let msg = format!("{err:#}");
    assert!(msg.contains("building swim creature"), "{msg}");
    assert!(msg.contains("no swim curve"), "{msg}");
}

#[test]
fn idle_fish_stays_put() {
    let mut ctx = spawn_with_keys(KeyAxes::default());
    run(&mut ctx, 120);
    assert_eq!(ctx.mover.location(), Vec3::ZERO);
    assert_eq!(ctx.mover.velocity(), Vec3::ZERO);
    assert_eq!(ctx.mover.rotation().yaw, 0.0);
}

#[test]
fn forward_keys_swim_along_heading() {
    let keys = KeyAxes {
        forward: true,
        ..Default::default()
    };
    let mut ctx = spawn_with_keys(keys);
    run(&mut ctx, 120);
    let loc = ctx.mover.location();
    assert!(loc.x > 10.0, "location {loc:?}");
    assert!(loc.y.abs() < 1e-3);
    assert!(loc.z.abs() < 1e-3);
    assert!(ctx.creature.steering().forward > 0.99);
}

#[test]
fn right_turn_bends_the_path() {
    let keys = KeyAxes {
        forward: true,
        right: true,
        ..Default::default()
    };
    let mut ctx = spawn_with_keys(keys);
    run(&mut ctx, 30);
    assert!(ctx.mover.rotation().yaw > 0.0);
    assert!(ctx.mover.location().y > 0.0);
}

#[test]
fn mover_yaw_tracks_yaw_deltas() {
    let keys = KeyAxes {
        forward: true,
        left: true,
        ..Default::default()
    };
    let mut ctx = spawn_with_keys(keys);
    let mut total = 0.0;
    for _ in 0..60 {
        let report = ctx.frame(DT).expect("not paused");
        total += report.tick.yaw_delta.yaw;
    }
    assert!(total < 0.0);
    let diff = normalize_axis(ctx.mover.rotation().yaw - total);
    assert!(diff.abs() < 0.05, "mover yaw {} vs {total}", ctx.mover.rotation().yaw);
}

#[test]
fn tail_trails_behind_when_swimming_straight() {
    let keys = KeyAxes {
        forward: true,
        ..Default::default()
    };
    let mut ctx = spawn_with_keys(keys);
    run(&mut ctx, 60);
    let spine = ctx.creature.spine();
    assert!(spine.end.x < 0.0, "tail end {:?}", spine.end);
    assert!(spine.end.length() <= swim::TAIL_REACH + 1e-3);
}

#[test]
fn play_rate_stays_in_bounds() {
    let script = ScriptedSteering::new(
        vec![
            (1.0, Vec2::ZERO),
            (2.0, Vec2::new(0.0, 1.0)),
            (2.0, Vec2::new(1.0, 1.0)),
            (1.0, Vec2::new(-1.0, -1.0)),
        ],
        DT,
    );
    let mut ctx = match FrameContext::spawn(FishSetup::default(), stroke(), script) {
        Ok(ctx) => ctx,
        Err(err) => panic!("spawn failed: {err:#}"),
    };
    for _ in 0..(7.0 / DT) as usize {
        let report = ctx.frame(DT).expect("not paused");
        assert!(report.tick.play_rate >= swim::SWIM_RATE_MIN);
        assert!(report.tick.play_rate <= swim::SWIM_RATE_MAX);
    }
}

#[test]
fn paused_frames_do_nothing() {
    let keys = KeyAxes {
        forward: true,
        ..Default::default()
    };
    let mut ctx = spawn_with_keys(keys);
    run(&mut ctx, 10);
    let before = ctx.mover.location();
    ctx.paused = true;
    assert!(ctx.frame(DT).is_none());
    assert_eq!(ctx.mover.location(), before);
    assert_eq!(ctx.frames(), 10);
}

#[test]
fn travelled_distance_appears_after_capture() {
    let keys = KeyAxes {
        forward: true,
        ..Default::default()
    };
    let mut ctx = spawn_with_keys(keys);
    let first = ctx.frame(DT).expect("not paused");
    assert!(first.travelled.is_none());
    run(&mut ctx, 70);
    let report = ctx.frame(DT).expect("not paused");
    let travelled = report.travelled.expect("start captured after one second");
    assert!(travelled > 0.0);
}

#[test]
fn respawn_resets_fish() {
    let keys = KeyAxes {
        forward: true,
        right: true,
        ..Default::default()
    };
    let mut ctx = spawn_with_keys(keys);
    run(&mut ctx, 90);
    ctx.respawn(Vec3::new(10.0, 20.0, 0.0), 90.0);
    assert_eq!(ctx.mover.location(), Vec3::new(10.0, 20.0, 0.0));
    assert_eq!(ctx.mover.velocity(), Vec3::ZERO);
    assert_eq!(ctx.mover.rotation().yaw, 90.0);
    assert!(ctx.creature.start_location().is_none());
    assert_eq!(ctx.creature.steering().turn, 0.0);
    assert_eq!(ctx.creature.play_rate(), swim::SWIM_RATE_MAX);
}

#[test]
fn camera_follows_the_fish() {
    let keys = KeyAxes {
        forward: true,
        ..Default::default()
    };
    let mut ctx = spawn_with_keys(keys);
    run(&mut ctx, 300);
    let fish = ctx.mover.location();
    let pivot = ctx.camera.pivot();
    assert!(pivot.x > 0.0 && pivot.x <= fish.x + 1e-3);
    assert!(ctx.camera.camera().eye.x < pivot.x);
}
