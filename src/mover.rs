//! Kinematic movement integrator standing in for the host's character mover.
//!
//! Movement commands accumulate as input for the next step; the step turns
//! them into acceleration, bends the current velocity toward the input
//! direction with friction, caps speed, and brakes gently when no input
//! arrived.

use glam::Vec3;
use swim_core::{BodyState, MovementCommand, Rotator};

use crate::constants::*;

#[derive(Clone, Debug, PartialEq)]
pub struct MoverParams {
    pub max_acceleration: f32,
    pub max_speed: f32,
    pub friction: f32,
    pub braking_deceleration: f32,
    pub braking_friction_factor: f32,
}

impl Default for MoverParams {
    fn default() -> Self {
        Self {
            max_acceleration: MOVER_MAX_ACCELERATION,
            max_speed: MOVER_MAX_SPEED,
            friction: MOVER_FRICTION,
            braking_deceleration: MOVER_BRAKING_DECELERATION,
            braking_friction_factor: MOVER_BRAKING_FRICTION_FACTOR,
        }
    }
}

#[derive(Clone, Debug)]
pub struct KinematicMover {
    pub params: MoverParams,
    location: Vec3,
    rotation: Rotator,
    velocity: Vec3,
    pending_input: Vec3,
}

impl KinematicMover {
    pub fn new(params: MoverParams, location: Vec3, rotation: Rotator) -> Self {
        Self {
            params,
            location,
            rotation,
            velocity: Vec3::ZERO,
            pending_input: Vec3::ZERO,
        }
    }

    pub fn body_state(&self) -> BodyState {
        BodyState {
            rotation: self.rotation,
            velocity: self.velocity,
            location: self.location,
        }
    }

    pub fn add_movement_input(&mut self, cmd: &MovementCommand) {
        self.pending_input += cmd.vector();
    }

    pub fn add_local_rotation(&mut self, delta: Rotator) {
        self.rotation = self.rotation.add_local(delta).normalized();
    }

    /// Consume pending input and integrate one step.
    pub fn step(&mut self, dt: f32) {
        let input = self.pending_input.clamp_length_max(1.0);
        self.pending_input = Vec3::ZERO;
        if dt <= 0.0 {
            return;
        }

        let accel = input * self.params.max_acceleration;
        if accel == Vec3::ZERO {
            self.brake(dt);
        } else {
            let speed = self.velocity.length();
            let dir = accel.normalize();
            let turn = (dt * self.params.friction).min(1.0);
            self.velocity -= (self.velocity - dir * speed) * turn;
            self.velocity += accel * dt;
            self.velocity = self.velocity.clamp_length_max(self.params.max_speed);
        }
        self.location += self.velocity * dt;
    }

    fn brake(&mut self, dt: f32) {
        if self.velocity == Vec3::ZERO {
            return;
        }
        let before = self.velocity;
        let friction = self.params.friction * self.params.braking_friction_factor;
        let reverse = -before.normalize() * self.params.braking_deceleration;
        self.velocity += (-friction * before + reverse) * dt;
        // never brake into reverse
        if self.velocity.dot(before) <= 0.0 || self.velocity.length() < MOVER_STOP_SPEED {
            self.velocity = Vec3::ZERO;
        }
    }

    pub fn location(&self) -> Vec3 {
        self.location
    }

    pub fn rotation(&self) -> Rotator {
        self.rotation
    }

    pub fn velocity(&self) -> Vec3 {
        self.velocity
    }

    pub fn speed(&self) -> f32 {
        self.velocity.length()
    }

    pub fn teleport(&mut self, location: Vec3, rotation: Rotator) {
        self.location = location;
        self.rotation = rotation;
        self.velocity = Vec3::ZERO;
        self.pending_input = Vec3::ZERO;
    }
}
