//! One-dimensional curves sampled by the swim cycle.

use crate::constants::SWIM_LOOP_LENGTH;
use crate::error::SwimError;

/// A curve the swim timeline samples at its current phase.
pub trait SwimCurve {
    fn sample(&self, phase: f32) -> f32;
}

impl<F> SwimCurve for F
where
    F: Fn(f32) -> f32,
{
    fn sample(&self, phase: f32) -> f32 {
        self(phase)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CurveKey {
    pub time: f32,
    pub value: f32,
}

/// Piecewise-linear curve through sorted keys, held constant past either end.
#[derive(Clone, Debug, PartialEq)]
pub struct KeyframeCurve {
    keys: Vec<CurveKey>,
}

impl KeyframeCurve {
    pub fn new(keys: Vec<CurveKey>) -> Result<Self, SwimError> {
        if keys.is_empty() {
            return Err(SwimError::EmptyCurve);
        }
        for (index, k) in keys.iter().enumerate() {
            if !k.time.is_finite() || !k.value.is_finite() {
                return Err(SwimError::NonFiniteKey { index });
            }
            if index > 0 && k.time < keys[index - 1].time {
                return Err(SwimError::UnsortedKeys { index });
            }
        }
        Ok(Self { keys })
    }

    pub fn from_pairs(pairs: &[(f32, f32)]) -> Result<Self, SwimError> {
        Self::new(
            pairs
                .iter()
                .map(|&(time, value)| CurveKey { time, value })
                .collect(),
        )
    }

    /// One full side-to-side stroke over the swim loop: 0, 1, 0, -1, 0.
    pub fn default_stroke() -> Self {
        let q = SWIM_LOOP_LENGTH / 4.0;
        Self {
            keys: [0.0, 1.0, 0.0, -1.0, 0.0]
                .iter()
                .enumerate()
                .map(|(i, &value)| CurveKey {
                    time: q * i as f32,
                    value,
                })
                .collect(),
        }
    }

    pub fn keys(&self) -> &[CurveKey] {
        &self.keys
    }

    pub fn value_range(&self) -> (f32, f32) {
        self.keys
            .iter()
            .fold((f32::MAX, f32::MIN), |(lo, hi), k| (lo.min(k.value), hi.max(k.value)))
    }
}

impl SwimCurve for KeyframeCurve {
    fn sample(&self, phase: f32) -> f32 {
        let keys = &self.keys;
        let first = keys[0];
        let last = keys[keys.len() - 1];
        if phase.is_nan() {
            return f32::NAN;
        }
        if phase <= first.time {
            return first.value;
        }
        if phase >= last.time {
            return last.value;
        }
        // first key with time > phase; always in 1..len here
        let hi = keys.partition_point(|k| k.time <= phase);
        let a = keys[hi - 1];
        let b = keys[hi];
        let span = b.time - a.time;
        if span <= 0.0 {
            return b.value;
        }
        a.value + (b.value - a.value) * ((phase - a.time) / span)
    }
}
