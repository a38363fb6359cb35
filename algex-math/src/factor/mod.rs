//! Factors, the multiplicative atoms every expression is built from.
//!
//! A [`Factor`] is either an exact rational number or a symbol raised to a non-zero integer
//! power. A product of factors is just a slice of them, in any order. [`simplify`] condenses such
//! a product into its **canonical form**:
//!
//! - index 0 holds the product of every number in the input (the coefficient),
//! - the remaining entries are the distinct symbols of the input, sorted by name, each raised to
//!   the sum of its powers, with symbols whose powers cancel out removed entirely.
//!
//! A product containing the number zero is zero, which is signalled by an **empty** canonical
//! form. [`prod`] renders an empty product as `0` accordingly.
//!
//! ```
//! use algex_math::factor::{prod, simplify, Factor};
//!
//! let product = simplify(&[
//!     Factor::symbol("x"),
//!     Factor::symbol_pow("y", -2),
//!     Factor::rational(1, 3),
//!     Factor::symbol("a"),
//!     Factor::symbol_pow("y", 2),
//! ]);
//! assert_eq!(prod(&product), "1/3*a*x");
//! ```

mod replace;

pub use replace::replace;

use crate::primitive::{is_integer, is_minus_one, is_one, is_zero, rat};
use rug::Rational;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::{collections::BTreeMap, fmt};

/// The string a malformed factor renders as.
pub const ERROR_TOKEN: &str = "<ERROR>";

/// A single multiplicative atom.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Factor {
    /// An exact rational number, such as `3` or `-2/3`.
    Number(Rational),

    /// A symbol raised to an integer power, such as `x` or `y^-2`.
    ///
    /// The constructors never produce a power of zero, or an empty name. A symbol with an empty
    /// name is malformed and renders as [`ERROR_TOKEN`].
    Symbol {
        /// The name of the symbol.
        name: String,

        /// The power the symbol is raised to.
        pow: i64,
    },
}

impl Factor {
    /// Creates a number factor equal to `num / den`, reduced to lowest terms.
    ///
    /// # Panics
    ///
    /// Panics if `den` is zero.
    pub fn rational(num: i64, den: i64) -> Self {
        Self::Number(rat(num, den))
    }

    /// Creates a number factor holding a copy of the given rational.
    pub fn number(r: &Rational) -> Self {
        Self::Number(r.clone())
    }

    /// The number one.
    pub fn one() -> Self {
        Self::rational(1, 1)
    }

    /// The number zero.
    pub fn zero() -> Self {
        Self::rational(0, 1)
    }

    /// Creates the symbol `name`, raised to the power of one.
    pub fn symbol(name: impl Into<String>) -> Self {
        Self::Symbol { name: name.into(), pow: 1 }
    }

    /// Creates the symbol `name`, raised to the power `pow`.
    ///
    /// `x^0 = 1`, so a power of zero returns the number one instead of a symbol.
    pub fn symbol_pow(name: impl Into<String>, pow: i64) -> Self {
        if pow == 0 {
            return Self::one();
        }
        Self::Symbol { name: name.into(), pow }
    }

    /// Returns true if the factor is a number.
    pub fn is_number(&self) -> bool {
        matches!(self, Self::Number(_))
    }

    /// If the factor is a number, returns a reference to it.
    pub fn as_number(&self) -> Option<&Rational> {
        match self {
            Self::Number(n) => Some(n),
            _ => None,
        }
    }

    /// If the factor is a symbol, returns its name and power.
    pub fn as_symbol(&self) -> Option<(&str, i64)> {
        match self {
            Self::Symbol { name, pow } => Some((name.as_str(), *pow)),
            _ => None,
        }
    }

    /// Returns true if the factor is the number one.
    pub fn is_one(&self) -> bool {
        self.as_number().map(is_one).unwrap_or(false)
    }
}

impl From<Rational> for Factor {
    fn from(r: Rational) -> Self {
        Self::Number(r)
    }
}

impl fmt::Display for Factor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) if is_integer(n) => write!(f, "{}", n.numer()),
            Self::Number(n) => write!(f, "{}/{}", n.numer(), n.denom()),
            Self::Symbol { name, .. } if name.is_empty() => write!(f, "{}", ERROR_TOKEN),
            Self::Symbol { name, pow: 1 } => write!(f, "{}", name),
            Self::Symbol { name, pow } => write!(f, "{}^{}", name, pow),
        }
    }
}

/// Condenses a product of factors, in any order, into its canonical form.
///
/// The result starts with the product of all number factors, followed by the symbols sorted by
/// name with their powers summed. Symbols whose powers sum to zero are dropped. If the input is
/// empty or contains the number zero, the product is zero and an empty [`Vec`] is returned.
pub fn simplify(factors: &[Factor]) -> Vec<Factor> {
    match condense(factors) {
        Some((coeff, mut symbols)) => {
            symbols.insert(0, Factor::Number(coeff));
            symbols
        },
        None => Vec::new(),
    }
}

/// Multiplies out the numbers of a product and sums the powers of its symbols, returning the
/// coefficient and the sorted, non-cancelled symbols, or [`None`] if the product is zero.
fn condense(factors: &[Factor]) -> Option<(Rational, Vec<Factor>)> {
    if factors.is_empty() {
        return None;
    }

    let mut coeff = rat(1, 1);
    let mut powers = BTreeMap::<&str, i64>::new();
    for factor in factors {
        match factor {
            Factor::Number(n) => {
                if is_zero(n) {
                    return None;
                }
                coeff *= n;
            },
            Factor::Symbol { name, pow } => *powers.entry(name).or_insert(0) += pow,
        }
    }

    let symbols = powers.into_iter()
        .filter(|(_, pow)| *pow != 0)
        .map(|(name, pow)| Factor::Symbol { name: name.to_string(), pow })
        .collect();
    Some((coeff, symbols))
}

/// Renders a product of factors as `a*b*c`. The factors are not simplified first.
///
/// A leading number of `1` is omitted, and a leading `-1` is replaced by a `-` prefix, unless the
/// number is the only factor. An empty product renders as `0`, since an empty canonical form
/// denotes zero.
pub fn prod(factors: &[Factor]) -> String {
    if factors.is_empty() {
        return "0".to_string();
    }

    let mut prefix = "";
    let mut parts = Vec::with_capacity(factors.len());
    for (i, factor) in factors.iter().enumerate() {
        if let (0, Factor::Number(n)) = (i, factor) {
            if factors.len() != 1 {
                if is_one(n) {
                    continue;
                }
                if is_minus_one(n) {
                    prefix = "-";
                    continue;
                }
            }
        }
        parts.push(factor.to_string());
    }

    format!("{}{}", prefix, parts.join("*"))
}

/// Simplifies a product of factors and splits it into its coefficient, its symbolic factors, and
/// the rendering of the symbolic factors (the **signature** of the product).
///
/// Returns [`None`] if the product is zero.
pub fn segment(factors: &[Factor]) -> Option<(Rational, Vec<Factor>, String)> {
    let (coeff, symbols) = condense(factors)?;
    let signature = prod(&symbols);
    Some((coeff, symbols, signature))
}
