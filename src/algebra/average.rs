use crate::algebra::semigroup::{Monoid, Semigroup};
use std::ops::{Add, Div};

/// A [`Monoid`] that aggregates repeated samples and reduces them to a mean.
///
/// Law: for any single-sample value `v`, `v.merge(&v).avg() == v.avg()`.
pub trait Average: Monoid {
    /// The reduced representation of the aggregate.
    type Output;

    /// Mean of every sample merged so far, or `None` for the empty aggregate.
    fn avg(&self) -> Option<Self::Output>;
}

/// Floating-point scalar usable inside a [`FloatAverage`].
pub trait AverageScalar: Copy + PartialEq + Add<Output = Self> + Div<Output = Self> {
    /// Additive zero.
    const ZERO: Self;
    /// Convert a sample count into the scalar domain.
    fn from_count(count: u64) -> Self;
}

impl AverageScalar for f64 {
    const ZERO: Self = 0.0;

    fn from_count(count: u64) -> Self {
        count as f64
    }
}

impl AverageScalar for f32 {
    const ZERO: Self = 0.0;

    fn from_count(count: u64) -> Self {
        count as f32
    }
}

/// Running `(sum, count)` average of floating-point samples.
///
/// Merging adds sums and counts. The empty aggregate has `count == 0` and a zero sum,
/// so it never contributes to the arithmetic and cannot be reduced to a number.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct FloatAverage<T> {
    sum: T,
    count: u64,
}

impl<T: AverageScalar> FloatAverage<T> {
    /// A single-sample aggregate.
    pub fn new(value: T) -> Self {
        Self {
            sum: value,
            count: 1,
        }
    }

    /// Sum of all merged samples.
    pub fn sum(&self) -> T {
        self.sum
    }

    /// Number of merged samples.
    pub fn count(&self) -> u64 {
        self.count
    }

    /// Return `true` for the identity aggregate.
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }
}

impl<T: AverageScalar> From<T> for FloatAverage<T> {
    fn from(value: T) -> Self {
        Self::new(value)
    }
}

impl<T: AverageScalar> Semigroup for FloatAverage<T> {
    fn merge(&self, other: &Self) -> Self {
        match (self.count, other.count) {
            (0, _) => *other,
            (_, 0) => *self,
            _ => Self {
                sum: self.sum + other.sum,
                count: self.count + other.count,
            },
        }
    }
}

impl<T: AverageScalar> Monoid for FloatAverage<T> {
    fn empty() -> Self {
        Self {
            sum: T::ZERO,
            count: 0,
        }
    }
}

impl<T: AverageScalar> Average for FloatAverage<T> {
    type Output = T;

    fn avg(&self) -> Option<T> {
        if self.count == 0 {
            return None;
        }
        Some(self.sum / T::from_count(self.count))
    }
}

/// Two independently averaged values merged componentwise.
pub type Tuple2<A, B> = (A, B);

impl<A: Average, B: Average> Average for (A, B) {
    type Output = (A::Output, B::Output);

    fn avg(&self) -> Option<Self::Output> {
        Some((self.0.avg()?, self.1.avg()?))
    }
}

impl Average for () {
    type Output = ();

    fn avg(&self) -> Option<()> {
        Some(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/algebra/average.rs"]
mod tests;
