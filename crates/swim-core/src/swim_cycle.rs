//! Looping swim clock with a motion-dependent playback rate.
//!
//! The clock advances by `dt * play_rate`, wraps at the loop length, samples
//! the swim curve at the new phase and only then recomputes the rate. The new
//! rate therefore takes effect on the following tick.

use crate::constants::{SWIM_SPEED_DOMAIN, SWIM_SPEED_RATE, SWIM_TURN_DOMAIN, SWIM_TURN_RATE};
use crate::curve::SwimCurve;
use crate::interp::remap_clamped;
use crate::params::SwimParams;
use crate::steering::SteeringState;

/// Playback rate for a given body-frame forward speed and smoothed turn.
///
/// Fast straight swimming slows the cycle down, hard turns slow it further,
/// and the result always stays within `[rate_min, rate_max]`.
pub fn swim_play_rate(forward_speed: f32, turn: f32, params: &SwimParams) -> f32 {
    let from_speed = remap_clamped(forward_speed, SWIM_SPEED_DOMAIN, SWIM_SPEED_RATE);
    let from_turn = remap_clamped(turn.abs(), SWIM_TURN_DOMAIN, SWIM_TURN_RATE);
    (from_speed + from_turn).clamp(params.rate_min, params.rate_max)
}

#[derive(Clone, Debug, PartialEq)]
pub struct SwimCycle {
    phase: f32,
    play_rate: f32,
    yaw_contribution: f32,
    curve_sample: f32,
}

impl SwimCycle {
    /// A cycle at phase zero, already running at the rate a motionless fish
    /// would get.
    pub fn new(params: &SwimParams) -> Self {
        Self {
            phase: 0.0,
            play_rate: swim_play_rate(0.0, 0.0, params),
            yaw_contribution: 0.0,
            curve_sample: 0.0,
        }
    }

    /// Advance the clock and refresh the rate and swim yaw.
    ///
    /// `forward_speed` is the world velocity's forward component in the body
    /// frame.
    pub fn advance<C: SwimCurve + ?Sized>(
        &mut self,
        dt: f32,
        curve: &C,
        forward_speed: f32,
        steering: &SteeringState,
        params: &SwimParams,
    ) {
        self.phase = (self.phase + dt * self.play_rate).rem_euclid(params.loop_length);
        let sample = curve.sample(self.phase);
        self.on_sample(sample, forward_speed, steering, params);
    }

    fn on_sample(
        &mut self,
        sample: f32,
        forward_speed: f32,
        steering: &SteeringState,
        params: &SwimParams,
    ) {
        let rate = swim_play_rate(forward_speed, steering.turn, params);
        self.curve_sample = sample;
        self.yaw_contribution = steering.forward * sample * (rate * params.yaw_rate_gain);
        self.play_rate = rate;
    }

    pub fn phase(&self) -> f32 {
        self.phase
    }

    pub fn play_rate(&self) -> f32 {
        self.play_rate
    }

    /// Swim yaw in degrees fed into pose composition.
    pub fn yaw_contribution(&self) -> f32 {
        self.yaw_contribution
    }

    pub fn curve_sample(&self) -> f32 {
        self.curve_sample
    }
}
