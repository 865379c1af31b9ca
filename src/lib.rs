//! Host integration for the swim core.
//!
//! The core only sees black-box collaborators through plain values; this
//! crate provides working stand-ins for them (a kinematic mover, a lagging
//! follow camera, keyboard and scripted steering) and the frame loop that
//! wires them together.

pub mod camera;
pub mod constants;
pub mod frame;
pub mod input;
pub mod mover;

pub use camera::*;
pub use frame::*;
pub use input::*;
pub use mover::*;
pub use swim_core;
