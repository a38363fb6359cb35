use algex_attrs::ErrorKind;
use algex_error::{Error, ErrorKind, EXPR};
use ariadne::{Fmt, Source};
use std::io;

/// An argument starting with `--` is not a known option.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("unknown option `{}`", name),
    labels = ["this option"],
    help = format!("the available options are {} and {}", "--pythagorean".fg(EXPR), "--transpose".fg(EXPR)),
)]
pub struct UnknownOption {
    pub name: String,
}

/// A rotation names an axis other than `x`, `y` or `z`.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("`{}` is not an axis", name),
    labels = ["this axis"],
    help = format!("rotate around one of {}, {} or {}", "x".fg(EXPR), "y".fg(EXPR), "z".fg(EXPR)),
)]
pub struct UnknownAxis {
    pub name: String,
}

/// A rotation is missing its angle.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "missing rotation angle",
    labels = ["this rotation"],
    help = format!("write rotations as {}, for example {}", "<axis>:<angle>".fg(EXPR), "z:t".fg(EXPR)),
)]
pub struct MissingAngle;

/// No rotations were given.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "no rotations given",
    help = format!("usage: algex-rs [--pythagorean] [--transpose] {}...", "<axis>:<angle>".fg(EXPR)),
)]
pub struct NoRotations;

/// Report the given error to stderr.
///
/// The `ariadne` crate's [`Report`] only prints help text next to source code, so an error with no
/// spans is printed by hand instead.
///
/// [`Report`]: https://docs.rs/ariadne/latest/ariadne/struct.Report.html
pub fn report_to_stderr(err: &Error, input: &str) -> io::Result<()> {
    if !err.spans.is_empty() {
        return err.build_report("input").eprint(("input", Source::from(input)));
    }

    eprintln!("{}: {}", "Error".fg(ariadne::Color::Red), err.kind.message());
    if let Some(help) = err.kind.help() {
        eprintln!("{}: {}", "Help".fg(EXPR), help);
    }
    Ok(())
}
