use crate::constants::*;
use crate::error::SwimError;

/// Tunable swim parameters. `Default` gives the stock fish feel.
#[derive(Clone, Debug, PartialEq)]
pub struct SwimParams {
    pub forward_interp_speed: f32,
    pub move_direction_interp_speed: f32,
    pub turn_interp_speed: f32,
    pub turn_input_gain: f32,
    pub reverse_thrust_scale: f32,
    pub turn_yaw_deg_per_sec: f32,
    pub loop_length: f32,
    pub rate_min: f32,
    pub rate_max: f32,
    pub yaw_rate_gain: f32,
    pub tail_reach: f32,
    pub tail_interp_speed: f32,
    pub tangent_interp_speed: f32,
    pub pitch_interp_speed: f32,
    pub start_capture_delay_sec: f32,
}

impl Default for SwimParams {
    fn default() -> Self {
        Self {
            forward_interp_speed: FORWARD_INTERP_SPEED,
            move_direction_interp_speed: MOVE_DIRECTION_INTERP_SPEED,
            turn_interp_speed: TURN_INTERP_SPEED,
            turn_input_gain: TURN_INPUT_GAIN,
            reverse_thrust_scale: REVERSE_THRUST_SCALE,
            turn_yaw_deg_per_sec: TURN_YAW_DEG_PER_SEC,
            loop_length: SWIM_LOOP_LENGTH,
            rate_min: SWIM_RATE_MIN,
            rate_max: SWIM_RATE_MAX,
            yaw_rate_gain: SWIM_YAW_RATE_GAIN,
            tail_reach: TAIL_REACH,
            tail_interp_speed: TAIL_INTERP_SPEED,
            tangent_interp_speed: TANGENT_INTERP_SPEED,
            pitch_interp_speed: PITCH_INTERP_SPEED,
            start_capture_delay_sec: START_CAPTURE_DELAY_SEC,
        }
    }
}

impl SwimParams {
    /// Reject values that would make the swim model degenerate.
    ///
    /// Non-positive interpolation speeds are valid and mean "no smoothing".
    pub fn validate(&self) -> Result<(), SwimError> {
        let fields = [
            ("forward_interp_speed", self.forward_interp_speed),
            ("move_direction_interp_speed", self.move_direction_interp_speed),
            ("turn_interp_speed", self.turn_interp_speed),
            ("turn_input_gain", self.turn_input_gain),
            ("reverse_thrust_scale", self.reverse_thrust_scale),
            ("turn_yaw_deg_per_sec", self.turn_yaw_deg_per_sec),
            ("loop_length", self.loop_length),
            ("rate_min", self.rate_min),
            ("rate_max", self.rate_max),
            ("yaw_rate_gain", self.yaw_rate_gain),
            ("tail_reach", self.tail_reach),
            ("tail_interp_speed", self.tail_interp_speed),
            ("tangent_interp_speed", self.tangent_interp_speed),
            ("pitch_interp_speed", self.pitch_interp_speed),
            ("start_capture_delay_sec", self.start_capture_delay_sec),
        ];
        for (name, value) in fields {
            if !value.is_finite() {
                return Err(SwimError::NonFiniteParam { name, value });
            }
        }
        if self.loop_length <= 0.0 {
            return Err(SwimError::InvalidLoopLength(self.loop_length));
        }
        if self.rate_min > self.rate_max {
            return Err(SwimError::InvertedRateBounds {
                min: self.rate_min,
                max: self.rate_max,
            });
        }
        Ok(())
    }
}
