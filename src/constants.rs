/// Host-side tuning for the collaborators around the swim core.
///
/// These mirror the stock fish character: a soft, slow-braking mover and a
/// lagging spring-arm camera.
// Movement integrator
pub const MOVER_MAX_ACCELERATION: f32 = 300.0; // units/s^2 at full input
pub const MOVER_MAX_SPEED: f32 = 500.0; // units/s
pub const MOVER_FRICTION: f32 = 1.0; // turns velocity toward the input direction
pub const MOVER_BRAKING_DECELERATION: f32 = 5.0; // units/s^2 with no input
pub const MOVER_BRAKING_FRICTION_FACTOR: f32 = 2.0; // friction multiplier while braking
pub const MOVER_STOP_SPEED: f32 = 0.1; // below this, braking settles to rest

// Spring-arm follow camera
pub const CAMERA_ARM_LENGTH: f32 = 300.0;
pub const CAMERA_LAG_SPEED: f32 = 4.0;
pub const CAMERA_ROTATION_LAG_SPEED: f32 = 0.7;
pub const CAMERA_ARM_PITCH_DEG: f32 = -15.0; // looking slightly down at the fish
pub const CAMERA_FOVY_DEG: f32 = 45.0;
pub const CAMERA_ZNEAR: f32 = 1.0;
pub const CAMERA_ZFAR: f32 = 20_000.0;

// Steering keys
pub const STEER_AXIS_LIMIT: f32 = 1.0; // raw axes are clamped to [-1, 1]
