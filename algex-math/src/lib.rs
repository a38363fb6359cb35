//! An exact algebra kernel for polynomials in any number of symbols.
//!
//! The kernel is layered:
//!
//! - [`factor`]: rational numbers and symbol powers, and the rules for condensing a product of
//!   them into canonical form.
//! - [`terms`]: sums of monomials ([`terms::Expr`]) with addition, subtraction, multiplication,
//!   integer-multiple elimination and pattern substitution.
//! - [`matrix`]: matrices of expressions, built on the arithmetic of [`terms`].
//! - [`rotation`]: symbolic rotation matrices around the coordinate axes.
//!
//! Every operation takes its inputs by reference and returns a fresh value in canonical form, so
//! the rendering of an expression doubles as an equality check.
//!
//! ```
//! use algex_math::factor::Factor;
//! use algex_math::terms::Expr;
//!
//! let x = Expr::from(Factor::symbol("x"));
//! let one = Expr::one();
//! let square = (&x + &one) * (&x + &one);
//! assert_eq!(square.to_string(), "1+2*x+x^2");
//! ```
//!
//! # Feature flags
//!
//! - `serde`: Derives `Serialize` and `Deserialize` for the kernel's data types.

pub mod factor;
pub mod matrix;
pub mod primitive;
pub mod rotation;
pub mod step;
pub mod terms;
