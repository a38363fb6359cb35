/// Possible substitution steps.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    /// The term with the given signature contained the pattern, and was rewritten into one term
    /// per term of the replacement.
    ///
    /// `a*y` with `y = a - b^2/a` becomes `a^2 - b^2`
    Rewrite {
        /// The signature of the rewritten term.
        signature: String,

        /// The number of terms the replacement distributed it into.
        terms: usize,
    },

    /// The term with the given signature contained the pattern, and vanished because the
    /// replacement is zero.
    ///
    /// `x*y` with `y = 0` becomes `0`
    Vanish {
        /// The signature of the removed term.
        signature: String,
    },
}
