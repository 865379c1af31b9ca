use anyhow::Context;
use glam::Vec3;
use swim_core::{SteeringSource, SwimCreature, SwimCurve, SwimParams, TickOutput};

use crate::camera::{CameraParams, FollowCamera};
use crate::mover::{KinematicMover, MoverParams};

/// Spawn-time settings for one fish.
#[derive(Clone, Debug, Default)]
pub struct FishSetup {
    pub swim: SwimParams,
    pub mover: MoverParams,
    pub camera: CameraParams,
    pub location: Vec3,
    pub yaw: f32,
    pub aspect: f32,
}

/// What one frame produced, for logging and inspection.
#[derive(Clone, Copy, Debug)]
pub struct FrameReport {
    pub tick: TickOutput,
    pub location: Vec3,
    pub velocity: Vec3,
    pub travelled: Option<f32>,
}

/// One fish wired to its host collaborators.
pub struct FrameContext<S: SteeringSource> {
    pub creature: SwimCreature,
    pub mover: KinematicMover,
    pub camera: FollowCamera,
    pub input: S,
    pub paused: bool,
    frames: u64,
}

impl<S: SteeringSource> FrameContext<S> {
    pub fn spawn(
        setup: FishSetup,
        curve: Option<Box<dyn SwimCurve>>,
        input: S,
    ) -> anyhow::Result<Self> {
        let creature = SwimCreature::with_curve(curve, setup.swim)
            .context("building swim creature")?;
        let rotation = swim_core::Rotator::from_yaw(setup.yaw);
        let mover = KinematicMover::new(setup.mover, setup.location, rotation);
        let aspect = if setup.aspect > 0.0 { setup.aspect } else { 16.0 / 9.0 };
        let camera = FollowCamera::new(setup.camera, setup.location, rotation, aspect);
        log::info!(
            "[fish] spawned at ({:.1},{:.1},{:.1}) yaw={:.1}",
            setup.location.x,
            setup.location.y,
            setup.location.z,
            setup.yaw
        );
        Ok(Self {
            creature,
            mover,
            camera,
            input,
            paused: false,
            frames: 0,
        })
    }

    /// Advance one frame: swim core first, then the mover consumes the yaw
    /// delta and movement command, then the camera catches up.
    pub fn frame(&mut self, dt: f32) -> Option<FrameReport> {
        if self.paused {
            return None;
        }
        let body = self.mover.body_state();
        let tick = self.creature.update(dt, &body, &mut self.input);

        self.mover.add_local_rotation(tick.yaw_delta);
        if let Some(cmd) = &tick.movement {
            self.mover.add_movement_input(cmd);
        }
        self.mover.step(dt);
        self.camera
            .update(self.mover.location(), self.mover.rotation(), dt);
        self.frames += 1;

        let location = self.mover.location();
        Some(FrameReport {
            tick,
            location,
            velocity: self.mover.velocity(),
            travelled: self
                .creature
                .start_location()
                .map(|start| start.distance(location)),
        })
    }

    /// Put the fish back at `location` in its spawn state.
    pub fn respawn(&mut self, location: Vec3, yaw: f32) {
        let rotation = swim_core::Rotator::from_yaw(yaw);
        self.mover.teleport(location, rotation);
        self.creature.reset();
        log::info!(
            "[fish] respawned at ({:.1},{:.1},{:.1})",
            location.x,
            location.y,
            location.z
        );
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }
}
