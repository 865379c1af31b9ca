//! Smoothed steering intent derived from the raw 2D steering axis.
//!
//! Raw samples are `Vec2` with `x` on the turn axis (right positive) and `y` on
//! the thrust axis (forward positive).

use glam::{Vec2, Vec3};

use crate::interp::approach;
use crate::params::SwimParams;

/// Anything the creature can pull a fresh steering sample from once per tick.
pub trait SteeringSource {
    fn sample(&mut self) -> Vec2;
}

impl SteeringSource for Vec2 {
    fn sample(&mut self) -> Vec2 {
        *self
    }
}

/// Adapts a closure into a [`SteeringSource`].
pub struct FnSteering<F>(pub F);

impl<F: FnMut() -> Vec2> SteeringSource for FnSteering<F> {
    fn sample(&mut self) -> Vec2 {
        (self.0)()
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SteeringState {
    pub forward: f32,
    pub turn: f32,
}

impl SteeringState {
    /// Ease forward thrust toward `raw.y` and turn rate toward the amplified
    /// `raw.x`.
    pub fn update(&mut self, raw: Vec2, dt: f32, params: &SwimParams) {
        self.forward = approach(self.forward, raw.y, dt, params.forward_interp_speed);
        self.turn = approach(
            self.turn,
            raw.x * params.turn_input_gain,
            dt,
            params.turn_interp_speed,
        );
    }
}

/// Movement request handed to the movement integrator.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MovementCommand {
    pub direction: Vec3,
    pub scale: f32,
}

impl MovementCommand {
    /// Build the command for this tick, or `None` when the steering axis is at
    /// rest (no movement input is issued then).
    ///
    /// Backing up (`raw.y < 0`) only gets `reverse_thrust_scale` of the thrust.
    pub fn from_steering(
        direction: Vec3,
        steering: &SteeringState,
        raw: Vec2,
        params: &SwimParams,
    ) -> Option<Self> {
        if raw == Vec2::ZERO {
            return None;
        }
        let authority = if raw.y < 0.0 {
            params.reverse_thrust_scale
        } else {
            1.0
        };
        Some(Self {
            direction,
            scale: authority * steering.forward,
        })
    }

    #[inline]
    pub fn vector(&self) -> Vec3 {
        self.direction * self.scale
    }
}
