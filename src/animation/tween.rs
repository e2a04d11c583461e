use crate::{
    algebra::average::{Average, AverageScalar, FloatAverage},
    animation::anim::Animation,
    foundation::core::Duration,
    foundation::error::AnimusResult,
};

/// Interpolation contract for tweenable value types.
pub trait Lerp: Sized {
    /// Interpolate from `a` to `b` with normalized factor `t` in `[0, 1]`.
    fn lerp(a: &Self, b: &Self, t: f64) -> Self;
}

impl Lerp for f64 {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        a + (b - a) * t
    }
}

impl Lerp for f32 {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        (*a as f64 + ((*b as f64 - *a as f64) * t)) as f32
    }
}

impl<A: Lerp, B: Lerp> Lerp for (A, B) {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        (A::lerp(&a.0, &b.0, t), B::lerp(&a.1, &b.1, t))
    }
}

/// Interpolate from `from` to `to` over `duration`.
pub fn tween<T>(from: T, to: T, duration: Duration) -> AnimusResult<Animation<T>>
where
    T: Lerp + Send + Sync + 'static,
{
    Animation::runnable(duration, move |t| T::lerp(&from, &to, t))
}

/// Linear numeric animation carried as a single-sample [`FloatAverage`], so that
/// overlapping animations of the same property blend instead of overwriting each other.
pub fn linear(
    from: f64,
    to: f64,
    duration: Duration,
) -> AnimusResult<Animation<FloatAverage<f64>>> {
    Ok(tween(from, to, duration)?.map(FloatAverage::new))
}

impl<T> Animation<FloatAverage<T>>
where
    T: AverageScalar + Send + Sync + 'static,
{
    /// Write the averaged sample into an external property through `set` on every
    /// sample.
    pub fn bind<F>(&self, set: F) -> Animation<()>
    where
        F: Fn(T) + Send + Sync + 'static,
    {
        self.effect(move |sample| match sample.avg() {
            Some(v) => set(v),
            None => tracing::warn!("skipping bind of an empty average sample"),
        })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/tween.rs"]
mod tests;
