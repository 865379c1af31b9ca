//! Follow camera on a lagging spring arm.
//!
//! The arm pivot eases toward the fish with the location lag speed and the arm
//! rotation eases toward the fish's heading with the rotation lag speed, so
//! turns swing the view around slowly while the fish stays framed.

use glam::{Mat4, Vec3};
use swim_core::{approach, normalize_axis, Rotator};

use crate::constants::*;

/// Simple right-handed camera description with perspective projection.
#[derive(Clone, Debug)]
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub aspect: f32,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Camera {
    /// Compute the clip-space projection matrix.
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, self.aspect, self.znear, self.zfar)
    }
    /// Compute the view matrix that transforms world to view space.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }
    pub fn view_proj(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct CameraParams {
    pub arm_length: f32,
    pub lag_speed: f32,
    pub rotation_lag_speed: f32,
    pub arm_pitch_deg: f32,
}

impl Default for CameraParams {
    fn default() -> Self {
        Self {
            arm_length: CAMERA_ARM_LENGTH,
            lag_speed: CAMERA_LAG_SPEED,
            rotation_lag_speed: CAMERA_ROTATION_LAG_SPEED,
            arm_pitch_deg: CAMERA_ARM_PITCH_DEG,
        }
    }
}

#[derive(Clone, Debug)]
pub struct FollowCamera {
    pub params: CameraParams,
    pivot: Vec3,
    arm_rotation: Rotator,
    camera: Camera,
}

impl FollowCamera {
    pub fn new(params: CameraParams, location: Vec3, heading: Rotator, aspect: f32) -> Self {
        let arm_rotation = Rotator::new(params.arm_pitch_deg, heading.yaw, 0.0);
        let mut cam = Self {
            params,
            pivot: location,
            arm_rotation,
            camera: Camera {
                eye: location,
                target: location,
                up: Vec3::Z,
                aspect,
                fovy_radians: CAMERA_FOVY_DEG.to_radians(),
                znear: CAMERA_ZNEAR,
                zfar: CAMERA_ZFAR,
            },
        };
        cam.place();
        cam
    }

    pub fn update(&mut self, location: Vec3, heading: Rotator, dt: f32) {
        self.pivot = approach(self.pivot, location, dt, self.params.lag_speed);
        // ease along the shortest way round
        let yaw_delta = normalize_axis(heading.yaw - self.arm_rotation.yaw);
        let yaw = approach(0.0, yaw_delta, dt, self.params.rotation_lag_speed);
        self.arm_rotation = Rotator::new(
            self.params.arm_pitch_deg,
            normalize_axis(self.arm_rotation.yaw + yaw),
            0.0,
        );
        self.place();
    }

    fn place(&mut self) {
        self.camera.target = self.pivot;
        self.camera.eye = self.pivot - self.arm_rotation.vector() * self.params.arm_length;
    }

    pub fn set_aspect(&mut self, aspect: f32) {
        self.camera.aspect = aspect;
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn pivot(&self) -> Vec3 {
        self.pivot
    }

    pub fn arm_yaw(&self) -> f32 {
        self.arm_rotation.yaw
    }
}
