use crate::algebra::semigroup::Semiring;
use std::ops::{Add, Mul};

/// Free semiring over leaf payloads `A`.
///
/// A tree that records how fragments were combined (`Times` for sequence, `Plus` for
/// parallel) without committing to an interpretation. [`FreeSemiring::interpret`]
/// collapses it into any [`Semiring`]; [`FreeSemiring::forget`] drops the structure and
/// keeps the leaves.
#[derive(Clone, Debug, PartialEq)]
pub enum FreeSemiring<A> {
    /// Multiplicative identity.
    One,
    /// Additive identity.
    Zero,
    /// A leaf payload.
    Single(A),
    /// Sequential combination.
    Times(Box<FreeSemiring<A>>, Box<FreeSemiring<A>>),
    /// Parallel combination.
    Plus(Box<FreeSemiring<A>>, Box<FreeSemiring<A>>),
}

impl<A> FreeSemiring<A> {
    /// Leaf constructor.
    pub fn single(a: A) -> Self {
        Self::Single(a)
    }

    /// Multiplicative identity.
    pub fn one() -> Self {
        Self::One
    }

    /// Additive identity.
    pub fn zero() -> Self {
        Self::Zero
    }

    /// `left` followed by `right`.
    pub fn times(left: Self, right: Self) -> Self {
        Self::Times(Box::new(left), Box::new(right))
    }

    /// `left` alongside `right`.
    pub fn plus(left: Self, right: Self) -> Self {
        Self::Plus(Box::new(left), Box::new(right))
    }

    /// Transform every leaf, keeping the tree shape.
    pub fn map<B, F>(&self, f: F) -> FreeSemiring<B>
    where
        F: Fn(&A) -> B,
    {
        self.map_with(&f)
    }

    fn map_with<B>(&self, f: &dyn Fn(&A) -> B) -> FreeSemiring<B> {
        match self {
            Self::One => FreeSemiring::One,
            Self::Zero => FreeSemiring::Zero,
            Self::Single(a) => FreeSemiring::Single(f(a)),
            Self::Times(l, r) => FreeSemiring::times(l.map_with(f), r.map_with(f)),
            Self::Plus(l, r) => FreeSemiring::plus(l.map_with(f), r.map_with(f)),
        }
    }

    /// Leaves in pre-order: the left subtree entirely before the right one, for both
    /// `Times` and `Plus`.
    pub fn forget(&self) -> Vec<&A> {
        let mut out = Vec::new();
        self.collect_leaves(&mut out);
        out
    }

    fn collect_leaves<'a>(&'a self, out: &mut Vec<&'a A>) {
        match self {
            Self::One | Self::Zero => {}
            Self::Single(a) => out.push(a),
            Self::Times(l, r) | Self::Plus(l, r) => {
                l.collect_leaves(out);
                r.collect_leaves(out);
            }
        }
    }

    /// Number of leaves.
    pub fn len(&self) -> usize {
        match self {
            Self::One | Self::Zero => 0,
            Self::Single(_) => 1,
            Self::Times(l, r) | Self::Plus(l, r) => l.len() + r.len(),
        }
    }

    /// Return `true` when the tree holds no leaves.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<A: Semiring + Clone> FreeSemiring<A> {
    /// Collapse the tree: `Times` becomes [`Semiring::times`], `Plus` becomes
    /// [`Semiring::plus`], and the identities map to their counterparts.
    pub fn interpret(&self) -> A {
        match self {
            Self::One => A::one(),
            Self::Zero => A::zero(),
            Self::Single(a) => a.clone(),
            Self::Times(l, r) => l.interpret().times(&r.interpret()),
            Self::Plus(l, r) => l.interpret().plus(&r.interpret()),
        }
    }
}

impl<A: Clone> Semiring for FreeSemiring<A> {
    fn zero() -> Self {
        Self::Zero
    }

    fn one() -> Self {
        Self::One
    }

    fn plus(&self, other: &Self) -> Self {
        Self::Plus(Box::new(self.clone()), Box::new(other.clone()))
    }

    fn times(&self, other: &Self) -> Self {
        Self::Times(Box::new(self.clone()), Box::new(other.clone()))
    }
}

impl<A> Mul for FreeSemiring<A> {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        Self::Times(Box::new(self), Box::new(rhs))
    }
}

impl<A> Add for FreeSemiring<A> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::Plus(Box::new(self), Box::new(rhs))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/composition/free.rs"]
mod tests;
