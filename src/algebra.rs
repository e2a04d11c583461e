pub mod average;
pub mod semigroup;
