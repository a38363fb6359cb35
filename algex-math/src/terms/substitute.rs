//! Substituting an expression for a monomial pattern.
//!
//! Substitution works one **pass** at a time. In each pass, every term of the expression is
//! checked for the pattern (see [`factor::replace`] for what counts as an occurrence). A term
//! that does not contain the pattern is kept as-is. A term that does has **one** copy of the
//! pattern taken out, and is multiplied by each term of the replacement in turn, producing one new
//! term per replacement term. If the replacement is zero, the term simply vanishes.
//!
//! Taking out a single copy per pass is what makes polynomial replacements distribute correctly:
//! substituting `a + b` for `y` in `y^2` gives `a*y + b*y` after the first pass, and
//! `a^2 + 2*a*b + b^2` after the second.
//!
//! Passes repeat until one of them finds nothing to rewrite. A replacement that contains its own
//! pattern (such as `x + 1` for `x`) never settles, so the number of rewriting passes is capped.
//! When the cap is exceeded, a [`SubstitutionLimit`] error is returned instead of looping
//! forever.
//!
//! ```
//! use algex_math::factor::Factor;
//! use algex_math::terms::Expr;
//!
//! let expr = Expr::new([[Factor::symbol("a"), Factor::symbol("y")]]);
//! let replacement = Expr::new([
//!     vec![Factor::symbol("a")],
//!     vec![Factor::rational(-1, 1), Factor::symbol_pow("b", 2), Factor::symbol_pow("a", -1)],
//! ]);
//!
//! let result = expr.substitute(&[Factor::symbol("y")], &replacement).unwrap();
//! assert_eq!(result.to_string(), "a^2-b^2");
//! ```

use algex_error::Error;
use crate::{
    factor::{self, Factor},
    step::StepCollector,
};
use super::{error::SubstitutionLimit, step::Step, Expr};

/// The number of rewriting passes [`Expr::substitute`] allows before giving up.
pub const DEFAULT_MAX_PASSES: usize = 1024;

/// Runs a single substitution pass over `expr`, returning the new expression and the number of
/// terms that were rewritten.
fn substitute_pass(
    expr: &Expr,
    pattern: &[Factor],
    replacement: &Expr,
    step_collector: &mut dyn StepCollector<Step>,
) -> (Expr, usize) {
    let mut result = Expr::zero();
    let mut rewrites = 0;

    for (signature, term) in expr.terms() {
        let factors = term.to_factors();

        // replacing with zero only succeeds once, so this is a containment test
        let (found, _) = factor::replace(&factors, pattern, &[Factor::zero()], 1);
        if found == 0 {
            result.insert(term.coeff().clone(), term.factors().to_vec(), signature.to_string());
            continue;
        }

        rewrites += 1;
        if replacement.is_zero() {
            step_collector.push(Step::Vanish { signature: signature.to_string() });
            continue;
        }

        for (_, sub) in replacement.terms() {
            let (_, rewritten) = factor::replace(&factors, pattern, &sub.to_factors(), 1);
            result.insert_factors(&rewritten);
        }
        step_collector.push(Step::Rewrite {
            signature: signature.to_string(),
            terms: replacement.len(),
        });
    }

    (result, rewrites)
}

/// Base implementation of the substitution algorithm.
fn inner_substitute(
    expr: &Expr,
    pattern: &[Factor],
    replacement: &Expr,
    max_passes: usize,
    step_collector: &mut dyn StepCollector<Step>,
) -> Result<Expr, Error> {
    let mut expr = expr.clone();
    let mut passes = 0;

    loop {
        let (next, rewrites) = substitute_pass(&expr, pattern, replacement, step_collector);
        tracing::debug!(pass = passes, rewrites, terms = next.len(), "substitution pass");

        if rewrites == 0 {
            return Ok(next);
        }

        passes += 1;
        if passes > max_passes {
            tracing::warn!(max_passes, "substitution did not settle");
            return Err(Error::unspanned(SubstitutionLimit { max_passes }));
        }

        expr = next;
    }
}

impl Expr {
    /// Returns true if any term of the expression contains the monomial `pattern`.
    pub fn contains_pattern(&self, pattern: &[Factor]) -> bool {
        self.terms.values().any(|term| {
            factor::replace(&term.to_factors(), pattern, &[Factor::zero()], 1).0 > 0
        })
    }

    /// Substitutes `replacement` for every occurrence of the monomial `pattern`, allowing up to
    /// [`DEFAULT_MAX_PASSES`] rewriting passes.
    ///
    /// For more information, see the [module-level documentation](self).
    pub fn substitute(&self, pattern: &[Factor], replacement: &Expr) -> Result<Expr, Error> {
        inner_substitute(self, pattern, replacement, DEFAULT_MAX_PASSES, &mut ())
    }

    /// Substitutes `replacement` for every occurrence of the monomial `pattern`, allowing up to
    /// `max_passes` rewriting passes, and reporting each rewritten term to `step_collector`.
    pub fn substitute_with(
        &self,
        pattern: &[Factor],
        replacement: &Expr,
        max_passes: usize,
        step_collector: &mut dyn StepCollector<Step>,
    ) -> Result<Expr, Error> {
        inner_substitute(self, pattern, replacement, max_passes, step_collector)
    }

    /// Substitutes `replacement` for every occurrence of the monomial `pattern`, like
    /// [`Expr::substitute`]. The steps taken are also collected and returned.
    pub fn substitute_with_steps(
        &self,
        pattern: &[Factor],
        replacement: &Expr,
    ) -> Result<(Expr, Vec<Step>), Error> {
        let mut steps = Vec::new();
        let expr = inner_substitute(self, pattern, replacement, DEFAULT_MAX_PASSES, &mut steps)?;
        Ok((expr, steps))
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

    #[test]
    fn substitute_difference_of_squares() {
        let expr = Expr::new([[s("a"), s("y")]]);
        let replacement = Expr::new([vec![s("a")], vec![d(-1, 1), sp("b", 2), sp("a", -1)]]);
        let result = expr.substitute(&[s("y")], &replacement).unwrap();
        assert_eq!(result.to_string(), "a^2-b^2");
    }

    #[test]
    fn substitute_binomial_square() {
        let expr = Expr::new([[sp("y", 2)]]);
        let replacement = Expr::new([[s("a")], [s("b")]]);
        let (result, steps) = expr.substitute_with_steps(&[s("y")], &replacement).unwrap();
        assert_eq!(result.to_string(), "2*a*b+a^2+b^2");
        assert_eq!(steps, vec![
            Step::Rewrite { signature: "y^2".to_string(), terms: 2 },
            Step::Rewrite { signature: "a*y".to_string(), terms: 2 },
            Step::Rewrite { signature: "b*y".to_string(), terms: 2 },
        ]);
    }

    #[test]
    fn substitute_untouched_terms() {
        let expr = Expr::new([vec![d(3, 1), s("x")], vec![d(-1, 2)], vec![sp("y", -1)]]);
        let result = expr.substitute(&[s("y")], &Expr::from(s("z"))).unwrap();
        assert_eq!(result, expr);
        assert!(!expr.contains_pattern(&[s("y")]));
        assert!(expr.contains_pattern(&[sp("y", -1)]));
    }

    #[test]
    fn substitute_zero() {
        let expr = Expr::new([vec![s("x"), s("y")], vec![s("z")]]);
        let (result, steps) = expr.substitute_with_steps(&[s("y")], &Expr::zero()).unwrap();
        assert_eq!(result.to_string(), "z");
        assert_eq!(steps, vec![Step::Vanish { signature: "x*y".to_string() }]);
    }

    #[test]
    fn substitute_pattern_coefficient() {
        // 4xy = 2x * (2y)
        let expr = Expr::new([[d(4, 1), s("x"), s("y")]]);
        let result = expr.substitute(&[d(2, 1), s("y")], &Expr::from(s("z"))).unwrap();
        assert_eq!(result.to_string(), "2*x*z");
    }

    #[test]
    fn substitute_partial_power() {
        // y^3 contains y^2 once; the leftover y does not contain y^2
        let expr = Expr::new([[sp("y", 3)]]);
        let result = expr.substitute(&[sp("y", 2)], &Expr::from(s("a"))).unwrap();
        assert_eq!(result.to_string(), "a*y");
    }

    #[test]
    fn substitute_combines_terms() {
        // s^2 + c^2 with s^2 = 1 - c^2
        let expr = Expr::new([[sp("s", 2)], [sp("c", 2)]]);
        let replacement = Expr::new([vec![d(1, 1)], vec![d(-1, 1), sp("c", 2)]]);
        let result = expr.substitute(&[sp("s", 2)], &replacement).unwrap();
        assert_eq!(result.to_string(), "1");
    }

    #[test]
    fn substitute_multi_symbol_pattern() {
        // x^2 y^3 with xy = t
        let expr = Expr::new([vec![d(5, 1), sp("x", 2), sp("y", 3)], vec![s("x")]]);
        let result = expr.substitute(&[s("x"), s("y")], &Expr::from(s("t"))).unwrap();
        assert_eq!(result.to_string(), "5*t^2*y+x");
    }

    #[test]
    fn substitute_does_not_settle() {
        let expr = Expr::new([[s("x")]]);
        let replacement = Expr::new([vec![s("x")], vec![d(1, 1)]]);
        let err = expr
            .substitute_with(&[s("x")], &replacement, 8, &mut ())
            .unwrap_err();
        assert_eq!(err.downcast_ref::<SubstitutionLimit>(), Some(&SubstitutionLimit { max_passes: 8 }));
        assert_eq!(err.to_string(), "substitution did not settle after 8 rewriting passes");
    }

    #[test]
    fn substitute_pass_limit_is_exact() {
        // y^2 with y = a + b needs exactly two rewriting passes
        let expr = Expr::new([[sp("y", 2)]]);
        let replacement = Expr::new([[s("a")], [s("b")]]);
        assert!(expr.substitute_with(&[s("y")], &replacement, 1, &mut ()).is_err());
        assert!(expr.substitute_with(&[s("y")], &replacement, 2, &mut ()).is_ok());
    }

    #[test]
    fn substitute_leaves_input() {
        let expr = Expr::new([[s("a"), s("y")]]);
        let replacement = Expr::from(s("b"));
        let _ = expr.substitute(&[s("y")], &replacement).unwrap();
        assert_eq!(expr.to_string(), "a*y");
        assert_eq!(replacement.to_string(), "b");
    }
}
