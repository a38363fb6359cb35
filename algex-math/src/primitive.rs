//! Functions to construct [`Integer`]s and [`Rational`]s from various types, and to query the
//! handful of rational values the kernel treats specially.

use rug::{Integer, Rational};

/// Creates an [`Integer`] with the given value.
pub fn int<T>(n: T) -> Integer
where
    Integer: From<T>,
{
    Integer::from(n)
}

/// Creates a [`Rational`] equal to `num / den`, reduced to lowest terms with a positive
/// denominator.
///
/// # Panics
///
/// Panics if `den` is zero.
pub fn rat(num: i64, den: i64) -> Rational {
    Rational::from((num, den))
}

/// Returns true if the rational is exactly zero.
pub fn is_zero(r: &Rational) -> bool {
    *r.numer() == 0
}

/// Returns true if the rational is exactly one.
pub fn is_one(r: &Rational) -> bool {
    *r.numer() == 1 && *r.denom() == 1
}

/// Returns true if the rational is exactly negative one.
pub fn is_minus_one(r: &Rational) -> bool {
    *r.numer() == -1 && *r.denom() == 1
}

/// Returns true if the rational has no fractional part.
pub fn is_integer(r: &Rational) -> bool {
    *r.denom() == 1
}
