/// Convenience result type used across animus.
pub type AnimusResult<T> = Result<T, AnimusError>;

/// Top-level error taxonomy used by the animation calculus and its drivers.
#[derive(thiserror::Error, Debug)]
pub enum AnimusError {
    /// A runnable animation (or a hold/delay segment) was given a non-positive or
    /// non-finite duration.
    #[error("invalid duration: {0} (must be finite and > 0)")]
    InvalidDuration(f64),

    /// Sampling an animation that carries no value, or sampling outside `[0, 1]`.
    #[error("undefined sample: {0}")]
    UndefinedSample(String),

    /// Invalid user-provided configuration.
    #[error("validation error: {0}")]
    Validation(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl AnimusError {
    /// Build a [`AnimusError::InvalidDuration`] value.
    pub fn invalid_duration(duration: f64) -> Self {
        Self::InvalidDuration(duration)
    }

    /// Build a [`AnimusError::UndefinedSample`] value.
    pub fn undefined_sample(msg: impl Into<String>) -> Self {
        Self::UndefinedSample(msg.into())
    }

    /// Build a [`AnimusError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
