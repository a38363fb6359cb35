//! Matrices for anticlockwise rotations around the coordinate axes.
//!
//! The rotation angle is never evaluated. Instead, its cosine and sine are represented by the
//! symbols `c<angle>` and `s<angle>`, so that `rz("t")` holds the symbols `ct` and `st`.
//!
//! ```
//! use algex_math::rotation::{pythagorean, rz};
//!
//! let r = rz("t");
//! assert_eq!(r.to_string(), "[[ct, -st, 0], [st, ct, 0], [0, 0, 1]]");
//!
//! // a rotation followed by its inverse is the identity, once `st^2 = 1 - ct^2` is applied
//! let (pattern, replacement) = pythagorean("t");
//! let product = r.transpose().multiply(&r).unwrap();
//! let product = product.substitute(&pattern, &replacement).unwrap();
//! assert_eq!(product.to_string(), "[[1, 0, 0], [0, 1, 0], [0, 0, 1]]");
//! ```

use crate::{factor::Factor, matrix::Matrix, terms::Expr};
use std::fmt;

/// One of the three coordinate axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::X => write!(f, "x"),
            Self::Y => write!(f, "y"),
            Self::Z => write!(f, "z"),
        }
    }
}

/// The cosine and sine symbols of an angle, and their negation.
struct Trig {
    c: Expr,
    s: Expr,
    minus_s: Expr,
}

impl Trig {
    fn new(angle: &str) -> Self {
        let s = Factor::symbol(format!("s{}", angle));
        Self {
            c: Expr::from(Factor::symbol(format!("c{}", angle))),
            minus_s: Expr::new([[Factor::rational(-1, 1), s.clone()]]),
            s: Expr::from(s),
        }
    }
}

/// Returns the matrix rotating anticlockwise by `angle` around the X axis.
pub fn rx(angle: &str) -> Matrix {
    let Trig { c, s, minus_s } = Trig::new(angle);
    Matrix::from_entries(3, 3, [
        (0, 0, Expr::one()),
        (1, 1, c.clone()),
        (1, 2, minus_s),
        (2, 1, s),
        (2, 2, c),
    ])
}

/// Returns the matrix rotating anticlockwise by `angle` around the Y axis.
pub fn ry(angle: &str) -> Matrix {
    let Trig { c, s, minus_s } = Trig::new(angle);
    Matrix::from_entries(3, 3, [
        (0, 0, c.clone()),
        (0, 2, s),
        (1, 1, Expr::one()),
        (2, 0, minus_s),
        (2, 2, c),
    ])
}

/// Returns the matrix rotating anticlockwise by `angle` around the Z axis.
pub fn rz(angle: &str) -> Matrix {
    let Trig { c, s, minus_s } = Trig::new(angle);
    Matrix::from_entries(3, 3, [
        (0, 0, c.clone()),
        (0, 1, minus_s),
        (1, 0, s),
        (1, 1, c),
        (2, 2, Expr::one()),
    ])
}

/// Returns the matrix rotating anticlockwise by `angle` around the given axis.
pub fn rotation(axis: Axis, angle: &str) -> Matrix {
    match axis {
        Axis::X => rx(angle),
        Axis::Y => ry(angle),
        Axis::Z => rz(angle),
    }
}

/// Returns the identity `s<angle>^2 = 1 - c<angle>^2`, as a pattern and replacement suitable for
/// [`Expr::substitute`] and [`Matrix::substitute`].
pub fn pythagorean(angle: &str) -> (Vec<Factor>, Expr) {
    let pattern = vec![Factor::symbol_pow(format!("s{}", angle), 2)];
    let replacement = Expr::new([
        vec![Factor::one()],
        vec![Factor::rational(-1, 1), Factor::symbol_pow(format!("c{}", angle), 2)],
    ]);
    (pattern, replacement)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    fn identity3() -> Matrix {
        Matrix::identity(3).unwrap()
    }

    #[test]
    fn generators() {
        assert_eq!(rx("a").to_string(), "[[1, 0, 0], [0, ca, -sa], [0, sa, ca]]");
        assert_eq!(ry("b").to_string(), "[[cb, 0, sb], [0, 1, 0], [-sb, 0, cb]]");
        assert_eq!(rz("t").to_string(), "[[ct, -st, 0], [st, ct, 0], [0, 0, 1]]");
    }

    #[test]
    fn off_axis_cells_unset() {
        let r = rx("a");
        assert_eq!(r.get(0, 1).unwrap(), None);
        assert_eq!(r.get(2, 0).unwrap(), None);
        assert_eq!((r.rows(), r.cols()), (3, 3));
    }

    #[test]
    fn dispatch() {
        assert_eq!(rotation(Axis::X, "q"), rx("q"));
        assert_eq!(rotation(Axis::Y, "q"), ry("q"));
        assert_eq!(rotation(Axis::Z, "q"), rz("q"));
        assert_eq!(Axis::Y.to_string(), "y");
    }

    #[test]
    fn orthogonal() {
        for axis in [Axis::X, Axis::Y, Axis::Z] {
            let r = rotation(axis, "t");
            let (pattern, replacement) = pythagorean("t");
            let product = r.transpose().multiply(&r).unwrap();
            assert_eq!(product.substitute(&pattern, &replacement).unwrap(), identity3());

            let product = r.multiply(&r.transpose()).unwrap();
            assert_eq!(product.substitute(&pattern, &replacement).unwrap(), identity3());
        }
    }

    #[test]
    fn composed_rotation() {
        let r = rz("a").multiply(&rx("b")).unwrap();
        assert_eq!(
            r.to_string(),
            "[[ca, -cb*sa, sa*sb], [sa, ca*cb, -ca*sb], [0, sb, cb]]",
        );
    }

    #[test]
    fn double_angle() {
        // rotating twice by the same angle squares the cosine and sine
        let r = rz("t").multiply(&rz("t")).unwrap();
        assert_eq!(r.get(0, 0).unwrap().map(Expr::to_string).as_deref(), Some("ct^2-st^2"));
        assert_eq!(r.get(1, 0).unwrap().map(Expr::to_string).as_deref(), Some("2*ct*st"));
    }
}
