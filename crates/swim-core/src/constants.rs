// Swim locomotion tuning constants.

// Interpolator snap thresholds (squared distance)
pub const SCALAR_SNAP_EPSILON: f32 = 1.0e-8;
pub const VECTOR_SNAP_EPSILON: f32 = 1.0e-4;

// Steering smoothing
pub const FORWARD_INTERP_SPEED: f32 = 5.0;
pub const MOVE_DIRECTION_INTERP_SPEED: f32 = 15.0;
pub const TURN_INTERP_SPEED: f32 = 2.0;
pub const TURN_INPUT_GAIN: f32 = 6.0; // raw turn axis is amplified before smoothing
pub const REVERSE_THRUST_SCALE: f32 = 0.25; // movement authority while backing up

// Body yaw
pub const TURN_YAW_DEG_PER_SEC: f32 = 60.0; // per unit of smoothed turn

// Swim cycle timeline
pub const SWIM_LOOP_LENGTH: f32 = 4.0;
pub const SWIM_RATE_MIN: f32 = 2.0;
pub const SWIM_RATE_MAX: f32 = 12.0;
pub const SWIM_SPEED_DOMAIN: [f32; 2] = [0.0, 450.0]; // forward speed in body frame
pub const SWIM_SPEED_RATE: [f32; 2] = [8.0, 0.0]; // slower cycle as the fish speeds up
pub const SWIM_TURN_DOMAIN: [f32; 2] = [0.0, TURN_INPUT_GAIN];
pub const SWIM_TURN_RATE: [f32; 2] = [5.0, -4.0];
pub const SWIM_YAW_RATE_GAIN: f32 = 1.7;

// Spine geometry
pub const TAIL_REACH: f32 = 150.0; // distance of the tail target behind the body
pub const TAIL_SWAY_MULTIPLIER: f32 = 2.0; // tail target yaw per degree of swim yaw
pub const TAIL_INTERP_SPEED: f32 = 4.0;
pub const TANGENT_LEAD: f32 = 80.0; // look-ahead point for the tail tangent
pub const TANGENT_INTERP_SPEED: f32 = 10.0;
pub const SPINE_START_TANGENT_SCALE: f32 = -150.0;
pub const SPINE_END_TANGENT_SCALE: f32 = 200.0;
pub const SPINE_START_ROLL_PER_TURN: f32 = -0.16;

// Center of mass orientation
pub const PITCH_PER_VERTICAL_SPEED: f32 = 0.25;
pub const PITCH_LIMIT_DEG: f32 = 80.0;
pub const PITCH_INTERP_SPEED: f32 = 15.0;
pub const YAW_PER_TURN: f32 = 5.0;
pub const ROLL_PER_TURN: f32 = 7.0;

// Start location is captured once, this long after spawn
pub const START_CAPTURE_DELAY_SEC: f32 = 1.0;
