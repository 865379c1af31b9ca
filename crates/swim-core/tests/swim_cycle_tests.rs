// Tests for the swim clock, its playback rate law and the swim yaw it feeds
// into the pose.

use swim_core::{swim_play_rate, KeyframeCurve, SteeringState, SwimCycle, SwimParams};

#[test]
fn rest_state_runs_at_max_rate() {
    let params = SwimParams::default();
    // 8 from the speed remap plus 5 from the turn remap, clamped to 12
    assert_eq!(swim_play_rate(0.0, 0.0, &params), 12.0);
    assert_eq!(SwimCycle::new(&params).play_rate(), 12.0);
}

#[test]
fn extreme_inputs_stay_within_rate_bounds() {
    let params = SwimParams::default();
    assert_eq!(swim_play_rate(10_000.0, 1_000.0, &params), 2.0);
    assert_eq!(swim_play_rate(-10_000.0, 0.0, &params), 12.0);
    assert_eq!(swim_play_rate(-10_000.0, -1_000.0, &params), 4.0);
    for speed in (-20..=20).map(|i| i as f32 * 500.0) {
        for turn in (-12..=12).map(|i| i as f32 * 0.75) {
            let rate = swim_play_rate(speed, turn, &params);
            assert!(
                (2.0..=12.0).contains(&rate),
                "rate {rate} out of bounds for speed={speed} turn={turn}"
            );
        }
    }
}

#[test]
fn rate_follows_both_remaps() {
    let params = SwimParams::default();
    // half speed: 4, half turn: 0.5
    let rate = swim_play_rate(225.0, 3.0, &params);
    assert!((rate - 4.5).abs() < 1e-5, "got {rate}");
    // turn direction does not matter
    assert_eq!(
        swim_play_rate(100.0, -2.0, &params),
        swim_play_rate(100.0, 2.0, &params)
    );
    // faster forward swimming slows the cycle
    assert!(swim_play_rate(300.0, 0.0, &params) < swim_play_rate(150.0, 0.0, &params));
}

#[test]
fn phase_advances_by_rate_and_wraps_at_loop_length() {
    let params = SwimParams::default();
    let curve = KeyframeCurve::default_stroke();
    let steering = SteeringState::default();
    let mut cycle = SwimCycle::new(&params);

    cycle.advance(0.1, &curve, 0.0, &steering, &params);
    assert!((cycle.phase() - 1.2).abs() < 1e-5);
    cycle.advance(0.25, &curve, 0.0, &steering, &params);
    assert!((cycle.phase() - 4.2_f32.rem_euclid(4.0)).abs() < 1e-4);
    assert!(cycle.phase() >= 0.0 && cycle.phase() < 4.0);
}

#[test]
fn new_rate_applies_on_the_next_advance() {
    let params = SwimParams::default();
    let curve = KeyframeCurve::default_stroke();
    let steering = SteeringState::default();
    let mut cycle = SwimCycle::new(&params);

    // fast swimming: the first advance still uses the spawn rate of 12
    cycle.advance(0.1, &curve, 450.0, &steering, &params);
    assert!((cycle.phase() - 1.2).abs() < 1e-5);
    assert_eq!(cycle.play_rate(), 5.0);
    // the second one runs at the recomputed rate of 5
    cycle.advance(0.1, &curve, 450.0, &steering, &params);
    assert!((cycle.phase() - 1.7).abs() < 1e-4);
}

#[test]
fn swim_yaw_scales_with_forward_sample_and_rate() {
    let params = SwimParams::default();
    let curve = |_: f32| 0.5_f32;
    let steering = SteeringState {
        forward: 0.8,
        turn: 0.0,
    };
    let mut cycle = SwimCycle::new(&params);
    cycle.advance(0.016, &curve, 0.0, &steering, &params);
    // forward * sample * rate * 1.7
    let expected = 0.8 * 0.5 * (12.0 * 1.7);
    assert!((cycle.yaw_contribution() - expected).abs() < 1e-4);
    assert_eq!(cycle.curve_sample(), 0.5);
}

#[test]
fn idle_cycle_keeps_looping_with_bounded_sway() {
    let params = SwimParams::default();
    let curve = KeyframeCurve::default_stroke();
    let steering = SteeringState::default();
    let mut cycle = SwimCycle::new(&params);

    let mut wraps = 0;
    let mut prev_phase = cycle.phase();
    let mut saw_nonzero_sample = false;
    for _ in 0..200 {
        cycle.advance(0.05, &curve, 0.0, &steering, &params);
        if cycle.phase() < prev_phase {
            wraps += 1;
        }
        prev_phase = cycle.phase();
        assert!((0.0..4.0).contains(&cycle.phase()));
        assert!(cycle.curve_sample().abs() <= 1.0);
        saw_nonzero_sample |= cycle.curve_sample().abs() > 0.1;
        // no forward intent means the sway does not reach the pose
        assert_eq!(cycle.yaw_contribution(), 0.0);
    }
    // 200 ticks * 0.05 s * 12 = 120 time units = 30 loops
    assert!(wraps >= 29, "only {wraps} wraps");
    assert!(saw_nonzero_sample);
}

#[test]
fn sway_is_bounded_at_full_forward() {
    let params = SwimParams::default();
    let curve = KeyframeCurve::default_stroke();
    let steering = SteeringState {
        forward: 1.0,
        turn: 0.0,
    };
    let mut cycle = SwimCycle::new(&params);
    let limit = 1.0 * 1.0 * 12.0 * 1.7;
    let mut peak = 0.0_f32;
    for i in 0..400 {
        let speed = (i as f32 * 3.0) % 600.0;
        cycle.advance(0.016, &curve, speed, &steering, &params);
        peak = peak.max(cycle.yaw_contribution().abs());
        assert!(cycle.yaw_contribution().abs() <= limit + 1e-4);
    }
    assert!(peak > 0.0);
}
