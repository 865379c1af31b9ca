//! Per-tick orchestration of steering, swim cycle and pose.

use glam::{Vec2, Vec3};

use crate::curve::SwimCurve;
use crate::error::SwimError;
use crate::interp::approach;
use crate::params::SwimParams;
use crate::pose::{PoseState, SpineGeometry};
use crate::rotator::Rotator;
use crate::steering::{MovementCommand, SteeringSource, SteeringState};
use crate::swim_cycle::SwimCycle;

/// Body state read from the movement collaborator at the start of a tick.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct BodyState {
    pub rotation: Rotator,
    pub velocity: Vec3,
    pub location: Vec3,
}

/// Everything a tick hands back to the host.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TickOutput {
    /// Local yaw increment for the body transform.
    pub yaw_delta: Rotator,
    /// Absolute local rotation for the center of mass.
    pub com_rotation: Rotator,
    pub spine: SpineGeometry,
    /// `None` when the steering axis was at rest this tick.
    pub movement: Option<MovementCommand>,
    pub play_rate: f32,
}

pub struct SwimCreature {
    params: SwimParams,
    curve: Box<dyn SwimCurve>,
    steering: SteeringState,
    pose: PoseState,
    swim: SwimCycle,
    spine: SpineGeometry,
    last_raw: Vec2,
    movement: Option<MovementCommand>,
    elapsed: f32,
    start_location: Option<Vec3>,
}

impl SwimCreature {
    pub fn new(curve: impl SwimCurve + 'static, params: SwimParams) -> Result<Self, SwimError> {
        Self::with_curve(Some(Box::new(curve)), params)
    }

    /// Build from a curve that may not have been resolved.
    pub fn with_curve(
        curve: Option<Box<dyn SwimCurve>>,
        params: SwimParams,
    ) -> Result<Self, SwimError> {
        let curve = curve.ok_or(SwimError::MissingCurve)?;
        params.validate()?;
        let swim = SwimCycle::new(&params);
        log::debug!(
            "[swim] spawned: loop={:.2} rate={:.2}",
            params.loop_length,
            swim.play_rate()
        );
        Ok(Self {
            params,
            curve,
            steering: SteeringState::default(),
            pose: PoseState::default(),
            swim,
            spine: SpineGeometry::default(),
            last_raw: Vec2::ZERO,
            movement: None,
            elapsed: 0.0,
            start_location: None,
        })
    }

    /// Run one tick.
    ///
    /// Order: swim clock, body yaw, pose, fresh steering sample, steering and
    /// move direction. Pose therefore always uses the steering of the previous
    /// tick.
    pub fn update<S: SteeringSource + ?Sized>(
        &mut self,
        dt: f32,
        body: &BodyState,
        input: &mut S,
    ) -> TickOutput {
        self.tick_start_capture(dt, body.location);

        let forward_speed = self
            .pose
            .com_world_quat(body.rotation)
            .inverse()
            .mul_vec3(body.velocity)
            .x;
        self.swim.advance(
            dt,
            self.curve.as_ref(),
            forward_speed,
            &self.steering,
            &self.params,
        );

        let yaw_delta = Rotator::from_yaw(self.steering.turn * dt * self.params.turn_yaw_deg_per_sec);
        let facing = body.rotation.add_local(yaw_delta);

        self.spine = self.pose.compose(
            facing,
            body.velocity,
            self.swim.yaw_contribution(),
            &self.steering,
            dt,
            &self.params,
        );

        let raw = input.sample();
        self.steering.update(raw, dt, &self.params);
        self.pose.move_rate = approach(
            self.pose.move_rate,
            facing.vector(),
            dt,
            self.params.move_direction_interp_speed,
        );
        self.last_raw = raw;
        self.movement =
            MovementCommand::from_steering(self.pose.move_rate, &self.steering, raw, &self.params);

        log::trace!(
            "[swim] phase={:.3} rate={:.2} yaw={:.2} fwd={:.3} turn={:.3}",
            self.swim.phase(),
            self.swim.play_rate(),
            self.swim.yaw_contribution(),
            self.steering.forward,
            self.steering.turn
        );

        TickOutput {
            yaw_delta,
            com_rotation: self.pose.com_rotation,
            spine: self.spine,
            movement: self.movement,
            play_rate: self.swim.play_rate(),
        }
    }

    fn tick_start_capture(&mut self, dt: f32, location: Vec3) {
        if self.start_location.is_some() {
            return;
        }
        self.elapsed += dt;
        if self.elapsed >= self.params.start_capture_delay_sec {
            log::debug!(
                "[swim] start location captured at ({:.1},{:.1},{:.1})",
                location.x,
                location.y,
                location.z
            );
            self.start_location = Some(location);
        }
    }

    /// Back to the zero state of a fresh spawn.
    pub fn reset(&mut self) {
        self.steering = SteeringState::default();
        self.pose = PoseState::default();
        self.swim = SwimCycle::new(&self.params);
        self.spine = SpineGeometry::default();
        self.last_raw = Vec2::ZERO;
        self.movement = None;
        self.elapsed = 0.0;
        self.start_location = None;
        log::debug!("[swim] reset");
    }

    pub fn params(&self) -> &SwimParams {
        &self.params
    }

    pub fn steering(&self) -> &SteeringState {
        &self.steering
    }

    pub fn pose(&self) -> &PoseState {
        &self.pose
    }

    pub fn spine(&self) -> &SpineGeometry {
        &self.spine
    }

    pub fn swim_cycle(&self) -> &SwimCycle {
        &self.swim
    }

    pub fn play_rate(&self) -> f32 {
        self.swim.play_rate()
    }

    pub fn last_raw_steering(&self) -> Vec2 {
        self.last_raw
    }

    pub fn movement_command(&self) -> Option<MovementCommand> {
        self.movement
    }

    pub fn start_location(&self) -> Option<Vec3> {
        self.start_location
    }
}
