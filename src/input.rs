use glam::Vec2;
use swim_core::SteeringSource;

use crate::constants::STEER_AXIS_LIMIT;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SteerKey {
    Forward,
    Back,
    Left,
    Right,
}

#[inline]
pub fn steer_key_for(key: &str) -> Option<SteerKey> {
    match key {
        "w" | "W" | "ArrowUp" => Some(SteerKey::Forward),
        "s" | "S" | "ArrowDown" => Some(SteerKey::Back),
        "a" | "A" | "ArrowLeft" => Some(SteerKey::Left),
        "d" | "D" | "ArrowRight" => Some(SteerKey::Right),
        _ => None,
    }
}

/// Held steering keys folded into a 2D axis (`x` turn, `y` thrust).
#[derive(Default, Clone, Copy, Debug)]
pub struct KeyAxes {
    pub forward: bool,
    pub back: bool,
    pub left: bool,
    pub right: bool,
}

impl KeyAxes {
    /// Returns `true` if the key is a steering key.
    pub fn set(&mut self, key: &str, down: bool) -> bool {
        let Some(k) = steer_key_for(key) else {
            return false;
        };
        match k {
            SteerKey::Forward => self.forward = down,
            SteerKey::Back => self.back = down,
            SteerKey::Left => self.left = down,
            SteerKey::Right => self.right = down,
        }
        true
    }

    pub fn axis(&self) -> Vec2 {
        let x = (self.right as i32 - self.left as i32) as f32;
        let y = (self.forward as i32 - self.back as i32) as f32;
        clamp_axis(Vec2::new(x, y))
    }
}

impl SteeringSource for KeyAxes {
    fn sample(&mut self) -> Vec2 {
        self.axis()
    }
}

#[inline]
pub fn clamp_axis(v: Vec2) -> Vec2 {
    v.clamp(Vec2::splat(-STEER_AXIS_LIMIT), Vec2::splat(STEER_AXIS_LIMIT))
}

/// Piecewise-constant steering played back at a fixed tick length.
///
/// Holds the last segment's axis once the script runs out.
#[derive(Clone, Debug)]
pub struct ScriptedSteering {
    segments: Vec<(f32, Vec2)>,
    tick_dt: f32,
    elapsed: f32,
}

impl ScriptedSteering {
    pub fn new(segments: Vec<(f32, Vec2)>, tick_dt: f32) -> Self {
        Self {
            segments,
            tick_dt,
            elapsed: 0.0,
        }
    }

    pub fn axis_at(&self, t: f32) -> Vec2 {
        let mut start = 0.0;
        for &(duration, axis) in &self.segments {
            if t < start + duration {
                return axis;
            }
            start += duration;
        }
        self.segments.last().map_or(Vec2::ZERO, |&(_, axis)| axis)
    }

    pub fn total_duration(&self) -> f32 {
        self.segments.iter().map(|&(d, _)| d).sum()
    }

    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }
}

impl SteeringSource for ScriptedSteering {
    fn sample(&mut self) -> Vec2 {
        let axis = self.axis_at(self.elapsed);
        self.elapsed += self.tick_dt;
        axis
    }
}
