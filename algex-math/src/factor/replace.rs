//! Rewriting copies of a monomial pattern inside a product of factors.

use super::{segment, simplify, Factor};

/// Removes one copy of the symbolic `pattern` from the canonical product `factors`, returning the
/// remaining factors, or [`None`] if the pattern does not fully occur.
///
/// Both slices must be sorted by symbol name, as produced by [`simplify`]. A pattern symbol only
/// matches a symbol of the same name whose power has the same sign, and only if removing the
/// pattern's power does not flip the sign of what is left over. For example, `x^3` contains
/// `x^2` (leaving `x`), but `x^-1` does not contain `x`, and `x^2` does not contain `x^3`.
fn remove_one(factors: &[Factor], pattern: &[Factor]) -> Option<Vec<Factor>> {
    let mut rest = Vec::with_capacity(factors.len());
    let mut remaining = factors.iter();

    for target in pattern {
        let Some((target_name, target_pow)) = target.as_symbol() else {
            continue;
        };

        loop {
            match remaining.next()? {
                Factor::Symbol { name, pow } if name == target_name => {
                    if pow.signum() != target_pow.signum() {
                        return None;
                    }

                    let left = pow - target_pow;
                    if left != 0 {
                        if left.signum() != target_pow.signum() {
                            return None;
                        }
                        rest.push(Factor::Symbol { name: name.clone(), pow: left });
                    }
                    break;
                },
                other => rest.push(other.clone()),
            }
        }
    }

    rest.extend(remaining.cloned());
    Some(rest)
}

/// Counts how many whole copies of the symbolic `pattern` the canonical product `factors` holds.
fn copies(factors: &[Factor], pattern: &[Factor]) -> usize {
    pattern.iter()
        .filter_map(Factor::as_symbol)
        .map(|(target_name, target_pow)| {
            factors.iter()
                .filter_map(Factor::as_symbol)
                .find(|(name, _)| *name == target_name)
                .filter(|(_, pow)| pow.signum() == target_pow.signum())
                .map(|(_, pow)| (pow / target_pow) as usize)
                .unwrap_or(0)
        })
        .min()
        .unwrap_or(0)
}

/// Replaces up to `multiplicity` copies of the monomial `pattern` found in the product `a` with
/// the product `replacement`. Pass [`usize::MAX`] to replace every copy.
///
/// Only the copies already present in `a` are replaced. If `replacement` itself contains the
/// pattern, the copies it brings in are left alone, so replacing `x` with `x*y` in `x^2` gives
/// `x^2*y^2` rather than looping forever.
///
/// Returns the number of copies replaced, along with the resulting product in canonical form.
///
/// The numeric coefficient of the pattern is divided out on every replacement: if `a = 6xy` and
/// the pattern is `2y`, then `a = 3x * (2y)`, and replacing `2y` with `z` gives `3xz`. A pattern
/// with no symbols, or a pattern equal to zero, never matches.
///
/// If the replacement is zero, the product collapses to zero after the first replacement, and no
/// further copies can be found. Replacing with zero and a multiplicity of `1` therefore tests
/// whether the pattern occurs at all.
///
/// ```
/// use algex_math::factor::{prod, replace, Factor};
///
/// let a = [Factor::rational(2, 1), Factor::symbol("x"), Factor::symbol_pow("y", 2)];
/// let (count, result) = replace(&a, &[Factor::symbol("y")], &[Factor::symbol("z")], usize::MAX);
/// assert_eq!(count, 2);
/// assert_eq!(prod(&result), "2*x*z^2");
/// ```
pub fn replace(
    a: &[Factor],
    pattern: &[Factor],
    replacement: &[Factor],
    multiplicity: usize,
) -> (usize, Vec<Factor>) {
    let mut current = simplify(a);
    let Some((pattern_coeff, pattern_symbols, _)) = segment(pattern) else {
        return (0, current);
    };
    if pattern_symbols.is_empty() {
        return (0, current);
    }

    // `segment` returns `None` for zero, so the coefficient is invertible
    let inverse = pattern_coeff.recip();

    let limit = multiplicity.min(copies(&current, &pattern_symbols));
    let mut count = 0;
    while count < limit {
        let Some(mut rest) = remove_one(&current, &pattern_symbols) else {
            break;
        };

        rest.extend(replacement.iter().cloned());
        rest.push(Factor::Number(inverse.clone()));
        current = simplify(&rest);
        count += 1;
    }

    (count, current)
}
