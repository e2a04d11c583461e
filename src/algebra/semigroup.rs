//! Capability contracts for combinable values.
//!
//! A [`Semigroup`] is a type with an associative, side-effect-free `merge`. Parallel
//! animation composition needs nothing more: when two animations overlap, their
//! instantaneous values are merged. A [`Monoid`] adds an identity element, which makes
//! folding over possibly-empty collections total. A [`Semiring`] has two monoidal
//! operations, `plus` and `times`, where `times` distributes over `plus`; animations
//! (parallel / sequence) and the free scene tree both form one.

/// Associative binary combination.
///
/// Law: `a.merge(&b).merge(&c) == a.merge(&b.merge(&c))`.
pub trait Semigroup {
    /// Combine `self` with `other` without mutating either.
    fn merge(&self, other: &Self) -> Self;
}

/// A [`Semigroup`] with an identity element.
///
/// Law: `Self::empty().merge(&a) == a == a.merge(&Self::empty())`.
pub trait Monoid: Semigroup {
    /// The identity element for [`Semigroup::merge`].
    fn empty() -> Self;

    /// Merge every item of `items` into one value, starting from [`Monoid::empty`].
    fn concat<'a, I>(items: I) -> Self
    where
        Self: Sized + 'a,
        I: IntoIterator<Item = &'a Self>,
    {
        items
            .into_iter()
            .fold(Self::empty(), |acc, item| acc.merge(item))
    }
}

/// Two monoidal operations where `times` distributes over `plus`.
///
/// Laws:
/// - `zero` is the identity of `plus` and annihilates `times`.
/// - `one` is the identity of `times`.
/// - `a.times(b.plus(c)) == a.times(b).plus(a.times(c))`.
pub trait Semiring: Sized {
    /// Additive identity.
    fn zero() -> Self;
    /// Multiplicative identity.
    fn one() -> Self;
    /// Additive combination.
    fn plus(&self, other: &Self) -> Self;
    /// Multiplicative combination.
    fn times(&self, other: &Self) -> Self;
}

impl Semigroup for () {
    fn merge(&self, _other: &Self) -> Self {}
}

impl Monoid for () {
    fn empty() -> Self {}
}

impl<A: Semigroup, B: Semigroup> Semigroup for (A, B) {
    fn merge(&self, other: &Self) -> Self {
        (self.0.merge(&other.0), self.1.merge(&other.1))
    }
}

impl<A: Monoid, B: Monoid> Monoid for (A, B) {
    fn empty() -> Self {
        (A::empty(), B::empty())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/algebra/semigroup.rs"]
mod tests;
