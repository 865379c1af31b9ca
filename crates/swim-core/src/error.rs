use thiserror::Error;

/// Configuration problems detected when a swimmer is built.
///
/// Ticking never fails; everything that can go wrong is caught up front.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum SwimError {
    #[error("no swim curve was supplied")]
    MissingCurve,
    #[error("swim curve has no keys")]
    EmptyCurve,
    #[error("swim curve key {index} is not finite")]
    NonFiniteKey { index: usize },
    #[error("swim curve keys are not sorted by time at key {index}")]
    UnsortedKeys { index: usize },
    #[error("parameter `{name}` must be finite, got {value}")]
    NonFiniteParam { name: &'static str, value: f32 },
    #[error("swim loop length must be positive, got {0}")]
    InvalidLoopLength(f32),
    #[error("swim rate bounds are inverted: min {min} > max {max}")]
    InvertedRateBounds { min: f32, max: f32 },
}
