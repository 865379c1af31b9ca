//! Euler rotations in degrees.
//!
//! Convention: Z is up and X is forward. Yaw turns about +Z, positive pitch
//! lifts the nose toward +Z, roll turns about the forward axis.

use glam::{Quat, Vec3};

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rotator {
    pub pitch: f32,
    pub yaw: f32,
    pub roll: f32,
}

impl Rotator {
    pub const ZERO: Rotator = Rotator {
        pitch: 0.0,
        yaw: 0.0,
        roll: 0.0,
    };

    pub const fn new(pitch: f32, yaw: f32, roll: f32) -> Self {
        Self { pitch, yaw, roll }
    }

    pub const fn from_yaw(yaw: f32) -> Self {
        Self::new(0.0, yaw, 0.0)
    }

    /// Rotation whose forward axis points along `dir`, with zero roll.
    ///
    /// A zero-length `dir` yields [`Rotator::ZERO`].
    pub fn from_direction(dir: Vec3) -> Self {
        let Some(d) = dir.try_normalize() else {
            return Self::ZERO;
        };
        let yaw = d.y.atan2(d.x).to_degrees();
        let pitch = d.z.clamp(-1.0, 1.0).asin().to_degrees();
        Self::new(pitch, yaw, 0.0)
    }

    pub fn from_quat(q: Quat) -> Self {
        let forward = q * Vec3::X;
        let base = Self::from_direction(forward);
        // Roll is whatever is left once yaw and pitch are undone.
        let residual = base.to_quat().inverse() * q;
        let up = residual * Vec3::Z;
        let roll = (-up.y).atan2(up.z).to_degrees();
        Self::new(base.pitch, base.yaw, roll)
    }

    pub fn to_quat(self) -> Quat {
        Quat::from_rotation_z(self.yaw.to_radians())
            * Quat::from_rotation_y(-self.pitch.to_radians())
            * Quat::from_rotation_x(self.roll.to_radians())
    }

    /// Unit forward vector of this rotation.
    pub fn vector(self) -> Vec3 {
        let (sp, cp) = self.pitch.to_radians().sin_cos();
        let (sy, cy) = self.yaw.to_radians().sin_cos();
        Vec3::new(cp * cy, cp * sy, sp)
    }

    pub fn rotate_vector(self, v: Vec3) -> Vec3 {
        self.to_quat() * v
    }

    /// Express a world-space vector in this rotation's local frame.
    pub fn unrotate_vector(self, v: Vec3) -> Vec3 {
        self.to_quat().inverse() * v
    }

    /// Apply `delta` in this rotation's local frame.
    pub fn add_local(self, delta: Rotator) -> Self {
        Self::from_quat(self.to_quat() * delta.to_quat())
    }

    /// Same orientation with every axis wrapped into (-180, 180].
    pub fn normalized(self) -> Self {
        Self::new(
            normalize_axis(self.pitch),
            normalize_axis(self.yaw),
            normalize_axis(self.roll),
        )
    }
}

/// Wrap an angle in degrees into (-180, 180].
pub fn normalize_axis(deg: f32) -> f32 {
    let mut a = deg.rem_euclid(360.0);
    if a > 180.0 {
        a -= 360.0;
    }
    a
}
