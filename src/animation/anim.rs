//! The animation calculus.
//!
//! An [`Animation`] is a finite-duration, pure function from normalized progress to a
//! value. Animations are immutable: every combinator returns a new animation that shares
//! the sampling closures of its operands.
//!
//! Composition forms a semiring:
//!
//! - [`Animation::sequence`] (`*`) plays one animation after the other, with
//!   [`Animation::Trivial`] as identity and [`Animation::Cancelled`] as annihilator.
//! - [`Animation::parallel`] (`+`) runs both over the longer duration and merges the
//!   instantaneous values with [`Semigroup::merge`]; [`Animation::Cancelled`] is the
//!   identity.

use crate::{
    algebra::semigroup::{Semigroup, Semiring},
    animation::ease::Ease,
    foundation::core::{Duration, PROGRESS_EPSILON, Progress, checked_duration, checked_progress},
    foundation::error::{AnimusError, AnimusResult},
};
use std::fmt;
use std::ops::{Add, Mul};
use std::sync::Arc;

type SampleFn<A> = Arc<dyn Fn(Progress) -> A + Send + Sync>;

/// Payload of a runnable animation: a strictly positive duration and its sampler.
///
/// Only constructible through [`Animation::runnable`] and the combinators, so the
/// duration invariant always holds.
pub struct Runnable<A> {
    duration: Duration,
    value: SampleFn<A>,
}

impl<A> Runnable<A> {
    /// Length of the animation, always `> 0`. Infinite if sequencing overflowed.
    pub fn duration(&self) -> Duration {
        self.duration
    }

    fn at(&self, t: Progress) -> A {
        (self.value)(t)
    }
}

impl<A> Clone for Runnable<A> {
    fn clone(&self) -> Self {
        Self {
            duration: self.duration,
            value: Arc::clone(&self.value),
        }
    }
}

/// A time-varying value with a finite duration.
pub enum Animation<A> {
    /// No animation at all. Identity for [`Animation::parallel`], annihilator for
    /// [`Animation::sequence`].
    Cancelled,
    /// An animation of zero duration that does nothing. Identity for
    /// [`Animation::sequence`].
    Trivial,
    /// A real animation with positive duration.
    Runnable(Runnable<A>),
}

impl<A> Clone for Animation<A> {
    fn clone(&self) -> Self {
        match self {
            Self::Cancelled => Self::Cancelled,
            Self::Trivial => Self::Trivial,
            Self::Runnable(r) => Self::Runnable(r.clone()),
        }
    }
}

impl<A> fmt::Debug for Animation<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Cancelled => f.write_str("Cancelled"),
            Self::Trivial => f.write_str("Trivial"),
            Self::Runnable(r) => f
                .debug_struct("Runnable")
                .field("duration", &r.duration)
                .finish_non_exhaustive(),
        }
    }
}

impl<A> Animation<A> {
    /// Length of the animation. `0` for [`Animation::Cancelled`] and [`Animation::Trivial`].
    pub fn duration(&self) -> Duration {
        match self {
            Self::Cancelled | Self::Trivial => 0.0,
            Self::Runnable(r) => r.duration,
        }
    }

    /// Return `true` for [`Animation::Cancelled`].
    pub fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled)
    }

    /// Return `true` for [`Animation::Trivial`].
    pub fn is_trivial(&self) -> bool {
        matches!(self, Self::Trivial)
    }

    /// Return `true` for [`Animation::Runnable`].
    pub fn is_runnable(&self) -> bool {
        matches!(self, Self::Runnable(_))
    }

    /// Sample the animation at `t` in `[0, 1]`.
    ///
    /// Fails with [`AnimusError::UndefinedSample`] for [`Animation::Cancelled`] and
    /// [`Animation::Trivial`], which carry no value, for progress outside `[0, 1]`, and for
    /// a sequence whose summed duration overflowed to infinity.
    pub fn value(&self, t: Progress) -> AnimusResult<A> {
        match self {
            Self::Cancelled => Err(AnimusError::undefined_sample(
                "cancelled animation has no value",
            )),
            Self::Trivial => Err(AnimusError::undefined_sample(
                "trivial animation has no value",
            )),
            Self::Runnable(r) if !r.duration.is_finite() => {
                Err(AnimusError::undefined_sample(format!(
                    "duration {} is not finite",
                    r.duration
                )))
            }
            Self::Runnable(r) => Ok(r.at(checked_progress(t)?)),
        }
    }

    /// Value at progress `0`.
    pub fn start_value(&self) -> AnimusResult<A> {
        self.value(0.0)
    }

    /// Value at progress `1`.
    pub fn end_value(&self) -> AnimusResult<A> {
        self.value(1.0)
    }
}

impl<A: 'static> Animation<A> {
    /// Build a runnable animation from a sampler over `[0, 1]`.
    pub fn runnable<F>(duration: Duration, value: F) -> AnimusResult<Self>
    where
        F: Fn(Progress) -> A + Send + Sync + 'static,
    {
        let duration = checked_duration(duration)?;
        Ok(Self::from_parts(duration, Arc::new(value)))
    }

    // Callers guarantee `duration > 0`.
    fn from_parts(duration: Duration, value: SampleFn<A>) -> Self {
        debug_assert!(duration > 0.0);
        Self::Runnable(Runnable { duration, value })
    }

    /// Play `self`, then `next`. Alias: `*`.
    ///
    /// The result lasts `self.duration() + next.duration()`. Global progress up to
    /// `self`'s share of the total samples `self`; the rest samples `next`. A total that
    /// overflows to infinity makes every [`Animation::value`] call fail.
    pub fn sequence(&self, next: &Self) -> Self {
        match (self, next) {
            (Self::Cancelled, _) | (_, Self::Cancelled) => Self::Cancelled,
            (Self::Trivial, x) | (x, Self::Trivial) => x.clone(),
            (Self::Runnable(first), Self::Runnable(second)) => {
                let total = first.duration + second.duration;
                let ratio = first.duration / total;
                let (first, second) = (first.clone(), second.clone());
                Self::from_parts(
                    total,
                    Arc::new(move |t| {
                        if t <= ratio {
                            first.at(t / ratio)
                        } else {
                            second.at((t - ratio) / (1.0 - ratio))
                        }
                    }),
                )
            }
        }
    }

    /// Transform every sampled value with `f`. Duration and state are preserved.
    pub fn map<B, F>(&self, f: F) -> Animation<B>
    where
        B: 'static,
        F: Fn(A) -> B + Send + Sync + 'static,
    {
        match self {
            Self::Cancelled => Animation::Cancelled,
            Self::Trivial => Animation::Trivial,
            Self::Runnable(r) => {
                let r = r.clone();
                Animation::from_parts(r.duration, Arc::new(move |t| f(r.at(t))))
            }
        }
    }

    /// Reparameterize progress through `f` before sampling (e.g. an easing curve).
    ///
    /// `f` must map `[0, 1]` into the domain the underlying animation accepts.
    pub fn transform_time<F>(&self, f: F) -> Self
    where
        F: Fn(Progress) -> Progress + Send + Sync + 'static,
    {
        match self {
            Self::Cancelled => Self::Cancelled,
            Self::Trivial => Self::Trivial,
            Self::Runnable(r) => {
                let r = r.clone();
                Self::from_parts(r.duration, Arc::new(move |t| r.at(f(t))))
            }
        }
    }

    /// Apply an easing curve to progress.
    pub fn eased(&self, ease: Ease) -> Self {
        self.transform_time(move |t| ease.apply(t))
    }

    /// Play the animation backwards.
    pub fn reversed(&self) -> Self {
        self.transform_time(|t| 1.0 - t)
    }

    /// Play the animation `count` times back to back.
    ///
    /// The duration is multiplied by `count`. Each cycle boundary samples the inner
    /// animation at its end, so the last frame of every cycle is the end value.
    /// `count == 0` yields [`Animation::Trivial`]. Fails with
    /// [`AnimusError::InvalidDuration`] if the stretched duration is not finite.
    pub fn repeating(&self, count: u32) -> AnimusResult<Self> {
        match self {
            Self::Cancelled => Ok(Self::Cancelled),
            Self::Trivial => Ok(Self::Trivial),
            Self::Runnable(_) if count == 0 => Ok(Self::Trivial),
            Self::Runnable(r) => {
                let cycles = f64::from(count);
                let duration = checked_duration(r.duration * cycles)?;
                let r = r.clone();
                Ok(Self::from_parts(
                    duration,
                    Arc::new(move |t| r.at(cycle_progress(t, cycles))),
                ))
            }
        }
    }

    /// Play forward, then backward once.
    pub fn looped(&self) -> Self {
        self.sequence(&self.reversed())
    }

    /// Turn a value-producing animation into an effectful one.
    ///
    /// `f` receives every freshly sampled value. This is the only sanctioned way for an
    /// animation to touch external state.
    pub fn effect<F>(&self, f: F) -> Animation<()>
    where
        F: Fn(A) + Send + Sync + 'static,
    {
        self.map(f)
    }

    /// Chain a continuation built from this animation's end value.
    ///
    /// Cancelled stays cancelled. A trivial animation has no end value, so it fails with
    /// [`AnimusError::UndefinedSample`].
    pub fn and_then<F>(&self, f: F) -> AnimusResult<Self>
    where
        F: FnOnce(A) -> Self,
    {
        match self {
            Self::Cancelled => Ok(Self::Cancelled),
            Self::Trivial => Err(AnimusError::undefined_sample(
                "trivial animation has no end value to continue from",
            )),
            Self::Runnable(r) => Ok(self.sequence(&f(r.at(1.0)))),
        }
    }
}

impl<A> Animation<A>
where
    A: Clone + Send + Sync + 'static,
{
    /// Hold the start value for `by`, then play the animation.
    ///
    /// A zero delay returns the animation unchanged. A negative delay, or one that pushes
    /// the total duration past the finite range, is an [`AnimusError::InvalidDuration`].
    pub fn delayed(&self, by: Duration) -> AnimusResult<Self> {
        if !by.is_finite() || by < 0.0 {
            return Err(AnimusError::invalid_duration(by));
        }
        match self {
            Self::Runnable(r) if by > 0.0 => {
                checked_duration(by + r.duration)?;
                Ok(constant(r.at(0.0), by)?.sequence(self))
            }
            _ => Ok(self.clone()),
        }
    }
}

impl<A: Semigroup + 'static> Animation<A> {
    /// Run `self` and `other` at once. Alias: `+`.
    ///
    /// The result lasts as long as the longer operand. The shorter one holds its end
    /// value once it finishes, and the two samples are merged with
    /// [`Semigroup::merge`].
    ///
    /// Identity states combine as follows: a single runnable operand is returned
    /// unchanged; two cancelled operands stay cancelled; any other mix of cancelled and
    /// trivial is trivial.
    pub fn parallel(&self, other: &Self) -> Self {
        match (self, other) {
            (Self::Runnable(a), Self::Runnable(b)) => {
                let total = a.duration.max(b.duration);
                let (a, b) = (a.clone(), b.clone());
                Self::from_parts(
                    total,
                    Arc::new(move |t| {
                        let va = a.at(held(t, total, a.duration));
                        let vb = b.at(held(t, total, b.duration));
                        va.merge(&vb)
                    }),
                )
            }
            (Self::Runnable(r), _) | (_, Self::Runnable(r)) => Self::Runnable(r.clone()),
            (Self::Cancelled, Self::Cancelled) => Self::Cancelled,
            _ => Self::Trivial,
        }
    }
}

/// Map global progress over `total` onto the progress of an operand lasting `own`,
/// holding at `1` once the operand has finished.
fn held(t: Progress, total: Duration, own: Duration) -> Progress {
    (t * total / own).min(1.0)
}

/// Inner progress of a repeated animation. Integral cycle positions other than the
/// very start map to `1`.
fn cycle_progress(t: Progress, cycles: f64) -> Progress {
    let scaled = t * cycles;
    let nearest = scaled.round();
    if (scaled - nearest).abs() <= PROGRESS_EPSILON {
        return if nearest <= 0.0 { 0.0 } else { 1.0 };
    }
    scaled.rem_euclid(1.0)
}

/// An animation that holds `value` for `duration`.
pub fn constant<A>(value: A, duration: Duration) -> AnimusResult<Animation<A>>
where
    A: Clone + Send + Sync + 'static,
{
    Animation::runnable(duration, move |_| value.clone())
}

/// Applicative application: sample `f` and `a` together and apply one to the other.
///
/// The result lasts as long as the longer operand; the shorter one holds its end value.
/// Cancelled on either side cancels; otherwise trivial on either side is trivial.
pub fn ap<A, B, F>(f: &Animation<F>, a: &Animation<A>) -> Animation<B>
where
    A: 'static,
    B: 'static,
    F: Fn(A) -> B + 'static,
{
    match (f, a) {
        (Animation::Cancelled, _) | (_, Animation::Cancelled) => Animation::Cancelled,
        (Animation::Trivial, _) | (_, Animation::Trivial) => Animation::Trivial,
        (Animation::Runnable(f), Animation::Runnable(a)) => {
            let total = f.duration.max(a.duration);
            let (f, a) = (f.clone(), a.clone());
            Animation::from_parts(
                total,
                Arc::new(move |t| {
                    let g = f.at(held(t, total, f.duration));
                    g(a.at(held(t, total, a.duration)))
                }),
            )
        }
    }
}

/// Combine two differently typed animations running at once through `f`.
pub fn lift2<A, B, C, F>(f: F, a: &Animation<A>, b: &Animation<B>) -> Animation<C>
where
    A: Clone + Send + Sync + 'static,
    B: 'static,
    C: 'static,
    F: Fn(A, B) -> C + Send + Sync + 'static,
{
    let f = Arc::new(f);
    let partial = a.map(move |x: A| {
        let f = Arc::clone(&f);
        move |y: B| f(x.clone(), y)
    });
    ap(&partial, b)
}

/// Run two differently typed animations at once, keeping both samples addressable.
pub fn zip<A, B>(a: &Animation<A>, b: &Animation<B>) -> Animation<(A, B)>
where
    A: Clone + Send + Sync + 'static,
    B: 'static,
{
    lift2(|x, y| (x, y), a, b)
}

impl<A: 'static> Mul for Animation<A> {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        self.sequence(&rhs)
    }
}

impl<A: 'static> Mul for &Animation<A> {
    type Output = Animation<A>;

    fn mul(self, rhs: Self) -> Animation<A> {
        self.sequence(rhs)
    }
}

impl<A: Semigroup + 'static> Add for Animation<A> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        self.parallel(&rhs)
    }
}

impl<A: Semigroup + 'static> Add for &Animation<A> {
    type Output = Animation<A>;

    fn add(self, rhs: Self) -> Animation<A> {
        self.parallel(rhs)
    }
}

impl<A: Semigroup + 'static> Semiring for Animation<A> {
    fn zero() -> Self {
        Self::Cancelled
    }

    fn one() -> Self {
        Self::Trivial
    }

    fn plus(&self, other: &Self) -> Self {
        self.parallel(other)
    }

    fn times(&self, other: &Self) -> Self {
        self.sequence(other)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/anim.rs"]
mod tests;
