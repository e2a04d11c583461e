use crate::foundation::error::{AnimusError, AnimusResult};

/// Fractional elapsed time within an animation's own duration, nominally in `[0, 1]`.
pub type Progress = f64;

/// Absolute length of an animation in abstract time units (seconds by convention).
pub type Duration = f64;

/// Slack allowed around the `[0, 1]` endpoints before a sample is rejected.
///
/// Sequencing and repetition rescale progress with a division, which can land a
/// hair outside the unit interval.
pub const PROGRESS_EPSILON: f64 = 1e-9;

/// Validate a public sampling coordinate and clamp endpoint noise into `[0, 1]`.
pub fn checked_progress(t: Progress) -> AnimusResult<Progress> {
    if t.is_nan() {
        return Err(AnimusError::undefined_sample("progress is NaN"));
    }
    if !(-PROGRESS_EPSILON..=1.0 + PROGRESS_EPSILON).contains(&t) {
        return Err(AnimusError::undefined_sample(format!(
            "progress {t} is outside [0, 1]"
        )));
    }
    Ok(t.clamp(0.0, 1.0))
}

/// Validate a runnable duration: finite and strictly positive.
pub fn checked_duration(duration: Duration) -> AnimusResult<Duration> {
    if !duration.is_finite() || duration <= 0.0 {
        return Err(AnimusError::invalid_duration(duration));
    }
    Ok(duration)
}

/// 0-based index of a frame captured by a headless render.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct FrameIndex(pub u64);

/// Capture rate of a headless render, as the rational `num / den` frames per second.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Fps {
    /// Frames per `den` seconds.
    pub num: u32,
    /// Seconds spanned by `num` frames.
    pub den: u32,
}

impl Fps {
    /// Build a capture rate; both parts must be non-zero.
    pub fn new(num: u32, den: u32) -> AnimusResult<Self> {
        match (num, den) {
            (_, 0) => Err(AnimusError::validation("fps denominator is zero")),
            (0, _) => Err(AnimusError::validation("fps numerator is zero")),
            _ => Ok(Self { num, den }),
        }
    }

    /// Frames per second.
    pub fn as_f64(self) -> f64 {
        f64::from(self.num) / f64::from(self.den)
    }

    /// Whole frame intervals that fit in `duration`. Partial trailing frames are dropped.
    pub fn whole_frames(self, duration: Duration) -> u64 {
        let frames = (duration * f64::from(self.num) / f64::from(self.den)).floor();
        if frames.is_nan() || frames <= 0.0 {
            return 0;
        }
        frames as u64
    }
}

impl Default for Fps {
    fn default() -> Self {
        Self { num: 60, den: 1 }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
