//! Exponential "ease toward target" interpolation.
//!
//! Every smoothed quantity in the swim model moves toward its target by a
//! fraction `clamp(dt * speed, 0, 1)` of the remaining distance, so it starts
//! fast, eases out, and can never overshoot, even on a long frame.

use std::ops::{Add, Mul, Sub};

use glam::{Vec2, Vec3};

use crate::constants::{SCALAR_SNAP_EPSILON, VECTOR_SNAP_EPSILON};

/// Values that can be eased toward a target.
///
/// `SNAP_EPSILON` is compared against [`Approach::distance_squared`]; once the
/// remaining distance is below it the value lands exactly on the target.
pub trait Approach: Copy + Add<Output = Self> + Sub<Output = Self> + Mul<f32, Output = Self> {
    const SNAP_EPSILON: f32;

    fn distance_squared(self) -> f32;
}

impl Approach for f32 {
    const SNAP_EPSILON: f32 = SCALAR_SNAP_EPSILON;

    #[inline]
    fn distance_squared(self) -> f32 {
        self * self
    }
}

impl Approach for Vec2 {
    const SNAP_EPSILON: f32 = VECTOR_SNAP_EPSILON;

    #[inline]
    fn distance_squared(self) -> f32 {
        self.length_squared()
    }
}

impl Approach for Vec3 {
    const SNAP_EPSILON: f32 = VECTOR_SNAP_EPSILON;

    #[inline]
    fn distance_squared(self) -> f32 {
        self.length_squared()
    }
}

/// Move `current` toward `target`.
///
/// - `speed <= 0` jumps straight to `target`.
/// - A remaining distance under the snap epsilon also lands on `target`.
/// - Otherwise the step is `distance * clamp(dt * speed, 0, 1)`.
#[inline]
pub fn approach<T: Approach>(current: T, target: T, dt: f32, speed: f32) -> T {
    if speed <= 0.0 {
        return target;
    }
    let dist = target - current;
    if dist.distance_squared() < T::SNAP_EPSILON {
        return target;
    }
    current + dist * (dt * speed).clamp(0.0, 1.0)
}

/// Linearly map `value` from `domain` onto `range`, clamping `value` to the
/// domain first.
#[inline]
pub fn remap_clamped(value: f32, domain: [f32; 2], range: [f32; 2]) -> f32 {
    let lo = domain[0].min(domain[1]);
    let hi = domain[0].max(domain[1]);
    let span = domain[1] - domain[0];
    if span == 0.0 {
        return range[0];
    }
    let t = (value.clamp(lo, hi) - domain[0]) / span;
    range[0] + (range[1] - range[0]) * t
}
