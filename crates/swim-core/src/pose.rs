//! Body pose: spine curve, center-of-mass orientation and roll.

use glam::{Quat, Vec3};

use crate::constants::*;
use crate::interp::approach;
use crate::params::SwimParams;
use crate::rotator::Rotator;
use crate::steering::SteeringState;

/// Pose state carried from tick to tick.
///
/// `end_location` and `end_tangent` live in the spine's local space and chase
/// targets recomputed every tick. `com_rotation` is the center of mass
/// orientation relative to the body.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PoseState {
    pub end_location: Vec3,
    pub end_tangent: Vec3,
    pub com_rotation: Rotator,
    pub body_roll: f32,
    pub move_rate: Vec3,
}

/// Spine curve handed to the geometry collaborator.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SpineGeometry {
    pub start: Vec3,
    pub start_tangent: Vec3,
    pub end: Vec3,
    pub end_tangent: Vec3,
    pub start_roll: f32,
}

/// GPU layout of [`SpineGeometry`]; each vec3 is padded to 16 bytes and the
/// start roll rides in the first padding slot.
#[repr(C)]
#[derive(Copy, Clone, Debug, Default, bytemuck::Pod, bytemuck::Zeroable)]
pub struct SpineUniform {
    pub start: [f32; 4],
    pub start_tangent: [f32; 4],
    pub end: [f32; 4],
    pub end_tangent: [f32; 4],
}

impl SpineGeometry {
    pub fn to_uniform(&self) -> SpineUniform {
        SpineUniform {
            start: self.start.extend(self.start_roll).to_array(),
            start_tangent: self.start_tangent.extend(0.0).to_array(),
            end: self.end.extend(0.0).to_array(),
            end_tangent: self.end_tangent.extend(0.0).to_array(),
        }
    }

    /// Cubic Hermite point along the spine, `t` in `[0, 1]`.
    pub fn point_at(&self, t: f32) -> Vec3 {
        let t2 = t * t;
        let t3 = t2 * t;
        let h00 = 2.0 * t3 - 3.0 * t2 + 1.0;
        let h10 = t3 - 2.0 * t2 + t;
        let h01 = -2.0 * t3 + 3.0 * t2;
        let h11 = t3 - t2;
        self.start * h00 + self.start_tangent * h10 + self.end * h01 + self.end_tangent * h11
    }
}

impl PoseState {
    /// World rotation of the center of mass for a given body rotation.
    pub fn com_world_quat(&self, body: Rotator) -> Quat {
        body.to_quat() * self.com_rotation.to_quat()
    }

    /// One pose step.
    ///
    /// `body` is the body rotation after this tick's yaw increment. The center
    /// of mass forward vector is read before `com_rotation` is replaced, so the
    /// spine follows the orientation of the previous tick.
    pub fn compose(
        &mut self,
        body: Rotator,
        velocity: Vec3,
        swim_yaw: f32,
        steering: &SteeringState,
        dt: f32,
        params: &SwimParams,
    ) -> SpineGeometry {
        let forward = self.com_world_quat(body) * Vec3::X;

        let tail_target = Rotator::from_yaw(swim_yaw * TAIL_SWAY_MULTIPLIER).rotate_vector(forward)
            * -params.tail_reach;
        self.end_location = approach(self.end_location, tail_target, dt, params.tail_interp_speed);

        let tangent_target =
            Rotator::from_direction(self.end_location - forward * -TANGENT_LEAD).vector();
        self.end_tangent = approach(
            self.end_tangent,
            tangent_target,
            dt,
            params.tangent_interp_speed,
        );

        let spine = SpineGeometry {
            start: Vec3::ZERO,
            start_tangent: forward * SPINE_START_TANGENT_SCALE,
            end: self.end_location,
            end_tangent: self.end_tangent * SPINE_END_TANGENT_SCALE,
            start_roll: steering.turn * SPINE_START_ROLL_PER_TURN,
        };
        self.body_roll = spine.start_roll;

        let target_pitch =
            (velocity.z * PITCH_PER_VERTICAL_SPEED).clamp(-PITCH_LIMIT_DEG, PITCH_LIMIT_DEG);
        // roll snaps to its target every tick
        self.com_rotation = Rotator::new(
            approach(
                self.com_rotation.pitch,
                target_pitch,
                dt,
                params.pitch_interp_speed,
            ),
            steering.turn * YAW_PER_TURN + swim_yaw,
            steering.turn * ROLL_PER_TURN,
        );

        spine
    }
}
