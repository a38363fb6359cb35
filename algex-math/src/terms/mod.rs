//! Sums of products of factors, or **expressions**.
//!
//! An [`Expr`] is a polynomial (with integer, possibly negative, powers) in any number of
//! symbols, with exact rational coefficients. Internally, it maps the **signature** of each
//! monomial (the rendering of its symbolic factors, see [`factor::segment`]) to a [`Term`], which
//! holds the monomial's coefficient and its canonical symbolic factors.
//!
//! Every operation in this module returns a fresh expression in canonical form:
//!
//! - no two terms share a signature (like terms are always combined),
//! - no term has a zero coefficient (such terms are removed as soon as they appear),
//! - the expression with no terms is zero, and renders as `0`.
//!
//! Because the canonical form is unique, two expressions are equal if and only if they render to
//! the same string, and the derived [`PartialEq`] agrees with that.
//!
//! ```
//! use algex_math::factor::Factor;
//! use algex_math::terms::Expr;
//!
//! let a = Expr::new([
//!     vec![Factor::symbol_pow("a", 3)],
//!     vec![Factor::symbol_pow("b", 4)],
//! ]);
//! assert_eq!((&a * &a).to_string(), "2*a^3*b^4+a^6+b^8");
//! assert_eq!((&a - &a).to_string(), "0");
//! ```
//!
//! # Substitution
//!
//! [`Expr::substitute`] replaces every occurrence of a monomial pattern with another expression,
//! repeating until the pattern no longer occurs. See the [`substitute`](mod@substitute) module.

pub mod error;
pub mod step;
pub mod substitute;

pub use substitute::DEFAULT_MAX_PASSES;

use crate::{
    factor::{self, prod, Factor},
    primitive::{int, is_integer, is_zero, rat},
};
use rug::Rational;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::{
    collections::{hash_map::Entry, HashMap},
    fmt,
    iter::{Product, Sum},
    ops::{Add, Mul, Neg, Sub},
};

/// A monomial: a coefficient multiplied by a canonical product of symbols.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Term {
    /// The numeric coefficient. Never zero.
    coeff: Rational,

    /// The symbols, sorted by name, each with a non-zero power.
    factors: Vec<Factor>,
}

impl Term {
    /// The numeric coefficient of the term.
    pub fn coeff(&self) -> &Rational {
        &self.coeff
    }

    /// The symbolic factors of the term, sorted by name.
    pub fn factors(&self) -> &[Factor] {
        &self.factors
    }

    /// Returns the term as a single product of factors, coefficient first.
    pub fn to_factors(&self) -> Vec<Factor> {
        let mut factors = Vec::with_capacity(self.factors.len() + 1);
        factors.push(Factor::number(&self.coeff));
        factors.extend(self.factors.iter().cloned());
        factors
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", prod(&self.to_factors()))
    }
}

/// A sum of [`Term`]s, kept in canonical form.
///
/// For more information about this type, see the [module-level documentation](self).
///
/// With the `serde` feature, an expression is serialized as its list of terms, sorted by
/// signature. Deserialized terms are canonicalized again, so a payload with zero coefficients,
/// unsorted factors or repeated signatures still produces a canonical expression.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "Vec<Term>", into = "Vec<Term>"))]
pub struct Expr {
    /// The terms of the expression, keyed by signature.
    terms: HashMap<String, Term>,
}

impl Expr {
    /// Creates an expression from a list of monomials, each given as a product of factors in any
    /// order.
    ///
    /// Monomials with the same symbolic factors are combined, and monomials that are zero
    /// contribute nothing.
    pub fn new<I, M>(monomials: I) -> Self
    where
        I: IntoIterator<Item = M>,
        M: AsRef<[Factor]>,
    {
        let mut expr = Self::zero();
        for monomial in monomials {
            expr.insert_factors(monomial.as_ref());
        }
        expr
    }

    /// The zero expression, which has no terms.
    pub fn zero() -> Self {
        Self::default()
    }

    /// The expression `1`.
    pub fn one() -> Self {
        Self::from(Factor::one())
    }

    /// Returns true if this is the zero expression.
    pub fn is_zero(&self) -> bool {
        self.terms.is_empty()
    }

    /// The number of terms in the expression.
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    /// Returns true if the expression has no terms, i.e. is zero.
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Returns the terms of the expression paired with their signatures, sorted by signature.
    ///
    /// This is the order in which terms are rendered.
    pub fn terms(&self) -> Vec<(&str, &Term)> {
        let mut terms = self.terms.iter()
            .map(|(signature, term)| (signature.as_str(), term))
            .collect::<Vec<_>>();
        terms.sort_unstable_by(|(a, _), (b, _)| a.cmp(b));
        terms
    }

    /// Returns the coefficient of the term with the given signature, if there is one.
    pub fn coeff(&self, signature: &str) -> Option<&Rational> {
        self.terms.get(signature).map(Term::coeff)
    }

    /// Merges a coefficient and its symbolic factors into the expression, under the given
    /// signature.
    fn insert(&mut self, coeff: Rational, factors: Vec<Factor>, signature: String) {
        match self.terms.entry(signature) {
            Entry::Vacant(entry) => {
                if !is_zero(&coeff) {
                    entry.insert(Term { coeff, factors });
                }
            },
            Entry::Occupied(mut entry) => {
                entry.get_mut().coeff += coeff;
                if is_zero(&entry.get().coeff) {
                    entry.remove();
                }
            },
        }
    }

    /// Canonicalizes a product of factors and merges it into the expression.
    fn insert_factors(&mut self, factors: &[Factor]) {
        if let Some((coeff, symbols, signature)) = factor::segment(factors) {
            self.insert(coeff, symbols, signature);
        }
    }

    /// Merges every term of `other` into the expression, negating them first if `negate` is set.
    fn merge(&mut self, other: &Expr, negate: bool) {
        for (signature, term) in &other.terms {
            let coeff = if negate { -term.coeff.clone() } else { term.coeff.clone() };
            self.insert(coeff, term.factors.clone(), signature.clone());
        }
    }

    /// Reduces the integer coefficients of the expression modulo `divisor`.
    ///
    /// Every term with an integer coefficient has its coefficient replaced by the remainder of
    /// dividing it by `divisor`. The remainder takes the sign of the coefficient, so `-7 mod 2`
    /// is `-1`. Terms that are exact multiples of `divisor` vanish. Terms with fractional
    /// coefficients are kept as they are.
    ///
    /// If `divisor` is not a non-zero integer, the expression is returned unchanged.
    ///
    /// ```
    /// use algex_math::factor::Factor;
    /// use algex_math::terms::Expr;
    ///
    /// let expr = Expr::new([
    ///     vec![Factor::rational(7, 1), Factor::symbol("x")],
    ///     vec![Factor::rational(4, 1), Factor::symbol("y")],
    ///     vec![Factor::rational(3, 1)],
    /// ]);
    /// assert_eq!(expr.mod_eliminate(&Factor::rational(2, 1)).to_string(), "1+x");
    /// ```
    pub fn mod_eliminate(&self, divisor: &Factor) -> Expr {
        let Some(modulus) = divisor.as_number()
            .filter(|n| is_integer(n) && !is_zero(n))
            .map(Rational::numer)
        else {
            return self.clone();
        };

        let mut result = Expr::zero();
        for (signature, term) in &self.terms {
            if !is_integer(&term.coeff) {
                result.insert(term.coeff.clone(), term.factors.clone(), signature.clone());
                continue;
            }

            let rem = int(term.coeff.numer() % modulus);
            if rem != 0 {
                result.insert(Rational::from(rem), term.factors.clone(), signature.clone());
            }
        }
        result
    }
}

impl From<Factor> for Expr {
    fn from(factor: Factor) -> Self {
        Self::new([[factor]])
    }
}

impl From<Rational> for Expr {
    fn from(r: Rational) -> Self {
        Self::from(Factor::Number(r))
    }
}

/// Rebuilds an expression from its terms, combining and canonicalizing them.
impl From<Vec<Term>> for Expr {
    fn from(terms: Vec<Term>) -> Self {
        Self::new(terms.iter().map(Term::to_factors))
    }
}

/// Returns the terms of the expression, sorted by signature.
impl From<Expr> for Vec<Term> {
    fn from(expr: Expr) -> Self {
        expr.terms().into_iter().map(|(_, term)| term.clone()).collect()
    }
}

/// Renders the expression in canonical form.
///
/// Terms are ordered by signature, and joined with `+`, or with nothing at all if the term
/// already starts with a `-`. The zero expression renders as `0`.
impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.terms.is_empty() {
            return write!(f, "0");
        }

        for (i, (_, term)) in self.terms().into_iter().enumerate() {
            let rendered = term.to_string();
            if i != 0 && !rendered.starts_with('-') {
                write!(f, "+")?;
            }
            write!(f, "{}", rendered)?;
        }
        Ok(())
    }
}

/// Adds together any number of expressions. With no arguments the result is zero, and with one
/// argument it is a copy of that argument.
pub fn add(exprs: &[&Expr]) -> Expr {
    exprs.iter().copied().sum()
}

/// Subtracts `b` from `a`.
pub fn sub(a: &Expr, b: &Expr) -> Expr {
    let mut result = a.clone();
    result.merge(b, true);
    result
}

/// Multiplies together any number of expressions, from left to right. With no arguments the
/// result is one, and with one argument it is a copy of that argument.
pub fn mul(exprs: &[&Expr]) -> Expr {
    exprs.iter().copied().product()
}

/// Multiplies two expressions by distributing every term of `lhs` over every term of `rhs`.
fn mul_pair(lhs: &Expr, rhs: &Expr) -> Expr {
    let mut product = Expr::zero();
    for a in lhs.terms.values() {
        for b in rhs.terms.values() {
            let mut factors = a.to_factors();
            factors.extend(b.to_factors());
            product.insert_factors(&factors);
        }
    }
    product
}

impl<'a> Sum<&'a Expr> for Expr {
    fn sum<I: Iterator<Item = &'a Expr>>(iter: I) -> Self {
        iter.fold(Expr::zero(), |mut acc, expr| {
            acc.merge(expr, false);
            acc
        })
    }
}

impl Sum for Expr {
    fn sum<I: Iterator<Item = Expr>>(iter: I) -> Self {
        iter.fold(Expr::zero(), |mut acc, expr| {
            acc.merge(&expr, false);
            acc
        })
    }
}

impl<'a> Product<&'a Expr> for Expr {
    fn product<I: Iterator<Item = &'a Expr>>(mut iter: I) -> Self {
        match iter.next() {
            Some(first) => iter.fold(first.clone(), |acc, expr| mul_pair(&acc, expr)),
            None => Expr::one(),
        }
    }
}

impl Add for &Expr {
    type Output = Expr;

    fn add(self, rhs: Self) -> Self::Output {
        add(&[self, rhs])
    }
}

impl Add for Expr {
    type Output = Expr;

    fn add(mut self, rhs: Self) -> Self::Output {
        self.merge(&rhs, false);
        self
    }
}

impl Sub for &Expr {
    type Output = Expr;

    fn sub(self, rhs: Self) -> Self::Output {
        sub(self, rhs)
    }
}

impl Sub for Expr {
    type Output = Expr;

    fn sub(mut self, rhs: Self) -> Self::Output {
        self.merge(&rhs, true);
        self
    }
}

impl Mul for &Expr {
    type Output = Expr;

    fn mul(self, rhs: Self) -> Self::Output {
        mul_pair(self, rhs)
    }
}

impl Mul for Expr {
    type Output = Expr;

    fn mul(self, rhs: Self) -> Self::Output {
        mul_pair(&self, &rhs)
    }
}

/// Multiplies every coefficient of the expression by `-1`.
impl Neg for &Expr {
    type Output = Expr;

    fn neg(self) -> Self::Output {
        sub(&Expr::zero(), self)
    }
}

impl Neg for Expr {
    type Output = Expr;

    fn neg(mut self) -> Self::Output {
        for term in self.terms.values_mut() {
            term.coeff *= rat(-1, 1);
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    fn d(num: i64, den: i64) -> Factor {
        Factor::rational(num, den)
    }

    fn s(name: &str) -> Factor {
        Factor::symbol(name)
    }

    fn sp(name: &str, pow: i64) -> Factor {
        Factor::symbol_pow(name, pow)
    }

    /// A handful of expressions with overlapping terms, for checking algebraic laws.
    fn samples() -> Vec<Expr> {
        vec![
            Expr::zero(),
            Expr::one(),
            Expr::new([vec![d(-3, 1)], vec![d(2, 1), s("a")], vec![d(-4, 1), sp("b", -1)]]),
            Expr::new([vec![sp("a", 3)], vec![sp("b", 4)]]),
            Expr::new([vec![d(1, 2), s("a"), s("b")], vec![d(-1, 1), sp("a", -1)]]),
            Expr::new([vec![s("x"), d(2, 3)], vec![d(5, 1)], vec![sp("b", -1), d(7, 1)]]),
        ]
    }

    #[test]
    fn new_expr() {
        let cases: Vec<(Vec<Vec<Factor>>, &str)> = vec![
            (vec![vec![d(-3, 1)], vec![d(2, 1), s("a")], vec![d(-4, 1), sp("b", -1)]], "-3+2*a-4*b^-1"),
            (vec![vec![d(-3, 1)], vec![d(2, 1)], vec![d(2, 1), s("a")], vec![d(-4, 1), s("a")]], "-1-2*a"),
            (vec![vec![d(-3, 1)], vec![d(3, 1)]], "0"),
            (
                vec![
                    vec![d(-3, 1), s("a"), s("b")],
                    vec![d(2, 1), sp("a", 2)],
                    vec![d(2, 1), s("b"), s("a")],
                    vec![d(1, 1), s("b"), s("a")],
                ],
                "2*a^2",
            ),
            (vec![vec![s("x"), d(0, 1)], vec![s("y")]], "y"),
            (vec![], "0"),
        ];

        for (monomials, expected) in cases {
            assert_eq!(Expr::new(monomials).to_string(), expected);
        }
    }

    #[test]
    fn terms_sorted_by_signature() {
        let expr = Expr::new([vec![s("b")], vec![d(4, 1)], vec![s("a"), s("b")], vec![d(-1, 2), s("a")]]);
        let signatures = expr.terms().into_iter().map(|(sig, _)| sig).collect::<Vec<_>>();
        assert_eq!(signatures, vec!["0", "a", "a*b", "b"]);
        assert_eq!(expr.coeff("a"), Some(&rat(-1, 2)));
        assert_eq!(expr.coeff("c"), None);
        assert_eq!(expr.to_string(), "4-1/2*a+a*b+b");
    }

    #[test]
    fn add_identity() {
        assert_eq!(add(&[]).to_string(), "0");
        for e in samples() {
            assert_eq!(add(&[&e]), e);
            assert_eq!(sub(&e, &e).to_string(), "0");
        }
    }

    #[test]
    fn add_commutative() {
        let samples = samples();
        for a in &samples {
            for b in &samples {
                assert_eq!((a + b).to_string(), (b + a).to_string());
            }
        }
    }

    #[test]
    fn mul_commutative_associative() {
        let samples = samples();
        for a in &samples {
            for b in &samples {
                assert_eq!((a * b).to_string(), (b * a).to_string());
                for c in &samples {
                    assert_eq!(mul(&[&mul(&[a, b]), c]).to_string(), mul(&[a, &mul(&[b, c])]).to_string());
                }
            }
        }
    }

    #[test]
    fn sub_round_trip() {
        for e in samples() {
            assert_eq!(sub(&add(&[&e, &e]), &e).to_string(), e.to_string());
        }
    }

    #[test]
    fn mul_square() {
        let a = Expr::new([vec![sp("a", 3)], vec![sp("b", 4)]]);
        assert_eq!(mul(&[&a, &a]).to_string(), "2*a^3*b^4+a^6+b^8");
    }

    #[test]
    fn mul_cancels() {
        // (x + y)(x - y) = x^2 - y^2
        let p = Expr::new([vec![s("x")], vec![s("y")]]);
        let q = Expr::new([vec![s("x")], vec![d(-1, 1), s("y")]]);
        assert_eq!((&p * &q).to_string(), "x^2-y^2");

        // x * x^-1 = 1
        let x = Expr::from(s("x"));
        let inv = Expr::from(sp("x", -1));
        assert_eq!((x * inv).to_string(), "1");
    }

    #[test]
    fn mul_identities() {
        let e = &samples()[2];
        assert_eq!(mul(&[]).to_string(), "1");
        assert_eq!(mul(&[e]), *e);
        assert_eq!(e * &Expr::one(), *e);
        assert!((e * &Expr::zero()).is_zero());
    }

    #[test]
    fn negation() {
        let e = Expr::new([vec![d(-3, 1)], vec![d(2, 1), s("a")], vec![d(-4, 1), sp("b", -1)]]);
        assert_eq!((-&e).to_string(), "3-2*a+4*b^-1");
        assert_eq!(-(-e.clone()), e);
    }

    #[test]
    fn inputs_unchanged() {
        let a = Expr::new([vec![s("x")], vec![d(1, 1)]]);
        let b = Expr::new([vec![s("x")], vec![d(-1, 1)]]);
        let _ = add(&[&a, &b]);
        let _ = sub(&a, &b);
        let _ = mul(&[&a, &b]);
        assert_eq!(a.to_string(), "1+x");
        assert_eq!(b.to_string(), "-1+x");
    }

    #[test]
    fn mod_eliminate_integers() {
        let e = Expr::new([
            vec![d(7, 1), s("x")],
            vec![d(4, 1), s("y")],
            vec![d(1, 2), s("z")],
            vec![d(3, 1)],
            vec![d(-7, 1), s("w")],
        ]);
        assert_eq!(e.mod_eliminate(&d(2, 1)).to_string(), "1-w+x+1/2*z");
        assert_eq!(e.mod_eliminate(&d(-2, 1)).to_string(), "1-w+x+1/2*z");
        assert_eq!(e.mod_eliminate(&d(1, 1)).to_string(), "1/2*z");
    }

    #[test]
    fn terms_round_trip() {
        let e = Expr::new([vec![d(-3, 1)], vec![d(2, 1), s("a")], vec![d(-4, 1), sp("b", -1)]]);
        let terms = Vec::<Term>::from(e.clone());
        assert_eq!(terms.iter().map(Term::to_string).collect::<Vec<_>>(), vec!["-3", "2*a", "-4*b^-1"]);
        assert_eq!(Expr::from(terms), e);
    }

    #[test]
    fn terms_recanonicalized() {
        // unsorted factors, a zero coefficient and a repeated signature
        let terms = vec![
            Term { coeff: rat(2, 1), factors: vec![s("b"), s("a")] },
            Term { coeff: rat(0, 1), factors: vec![s("x")] },
            Term { coeff: rat(-1, 1), factors: vec![s("a"), s("b")] },
            Term { coeff: rat(3, 1), factors: vec![s("y"), sp("y", -1)] },
        ];
        let e = Expr::from(terms);
        assert_eq!(e.to_string(), "3+a*b");
        assert_eq!(e.terms().into_iter().map(|(sig, _)| sig).collect::<Vec<_>>(), vec!["0", "a*b"]);
    }

    #[test]
    fn mod_eliminate_no_op() {
        let e = Expr::new([vec![d(7, 1), s("x")], vec![d(4, 1)]]);
        assert_eq!(e.mod_eliminate(&d(1, 2)), e);
        assert_eq!(e.mod_eliminate(&s("x")), e);
        assert_eq!(e.mod_eliminate(&Factor::zero()), e);
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use pretty_assertions::assert_eq;
    use super::*;

    #[test]
    fn json_round_trip() {
        let e = Expr::new([
            vec![Factor::rational(-2, 3), Factor::symbol_pow("x", -1)],
            vec![Factor::rational(-8, 27), Factor::symbol_pow("x", -3)],
        ]);
        let json = serde_json::to_string(&e).unwrap();
        let back = serde_json::from_str::<Expr>(&json).unwrap();
        assert_eq!(back, e);
        assert_eq!(back.to_string(), "-2/3*x^-1-8/27*x^-3");
    }

    #[test]
    fn json_zero_terms_dropped() {
        let json = serde_json::to_string(&vec![
            Term { coeff: rat(0, 1), factors: vec![Factor::symbol("x")] },
        ]).unwrap();
        let e = serde_json::from_str::<Expr>(&json).unwrap();
        assert!(e.is_zero());
        assert_eq!(e.to_string(), "0");
    }
}
