use algex_attrs::ErrorKind;
use algex_error::ErrorKind;

/// A substitution kept finding the pattern after the maximum number of rewriting passes.
///
/// This happens when the replacement reintroduces the pattern, such as substituting `x + 1` for
/// `x`.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("substitution did not settle after {} rewriting passes", max_passes),
    help = "check that the replacement does not contain the pattern it replaces",
)]
pub struct SubstitutionLimit {
    /// The number of passes that were allowed.
    pub max_passes: usize,
}
