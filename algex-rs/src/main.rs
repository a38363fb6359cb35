mod error;

use algex_error::Error;
use algex_math::{matrix::Matrix, rotation::{pythagorean, rotation, Axis}};
use error::{MissingAngle, NoRotations, UnknownAxis, UnknownOption};
use std::{ops::Range, process::ExitCode};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// What to compute, as given on the command line.
#[derive(Debug, Default, PartialEq)]
struct Options {
    /// Apply `s^2 = 1 - c^2` for every angle after composing.
    pythagorean: bool,

    /// Print the transpose (the inverse rotation) instead.
    transpose: bool,

    /// The rotations to compose, from left to right.
    rotations: Vec<(Axis, String)>,
}

/// Parses the command line arguments.
///
/// Spans in the returned errors refer to the arguments joined by single spaces, and are counted
/// in characters, as `ariadne` expects.
fn parse_args(args: &[String]) -> Result<Options, Error> {
    let mut options = Options::default();
    let mut offset = 0;

    for arg in args {
        let span = offset..offset + arg.chars().count();
        offset = span.end + 1;

        if arg.starts_with("--") {
            match arg.as_str() {
                "--pythagorean" => options.pythagorean = true,
                "--transpose" => options.transpose = true,
                _ => return Err(Error::new(vec![span], UnknownOption { name: arg.clone() })),
            }
            continue;
        }

        options.rotations.push(parse_rotation(arg, span)?);
    }

    if options.rotations.is_empty() {
        return Err(Error::unspanned(NoRotations));
    }
    Ok(options)
}

/// Parses a single `<axis>:<angle>` argument located at `span`.
fn parse_rotation(arg: &str, span: Range<usize>) -> Result<(Axis, String), Error> {
    let Some((axis, angle)) = arg.split_once(':') else {
        return Err(Error::new(vec![span], MissingAngle));
    };
    if angle.is_empty() {
        return Err(Error::new(vec![span], MissingAngle));
    }

    let axis = match axis {
        "x" => Axis::X,
        "y" => Axis::Y,
        "z" => Axis::Z,
        _ => {
            let axis_span = span.start..span.start + axis.chars().count();
            return Err(Error::new(vec![axis_span], UnknownAxis { name: axis.to_string() }));
        },
    };
    Ok((axis, angle.to_string()))
}

/// Multiplies the requested rotations together and applies the requested rewrites.
fn compose(options: &Options) -> Result<Matrix, Error> {
    let mut result = Matrix::identity(3)?;
    for (axis, angle) in &options.rotations {
        tracing::debug!(%axis, %angle, "composing rotation");
        result = result.multiply(&rotation(*axis, angle))?;
    }

    if options.transpose {
        result = result.transpose();
    }

    if options.pythagorean {
        let mut seen = Vec::new();
        for (_, angle) in &options.rotations {
            if seen.contains(&angle) {
                continue;
            }
            seen.push(angle);

            let (pattern, replacement) = pythagorean(angle);
            result = result.substitute(&pattern, &replacement)?;
        }
    }

    Ok(result)
}

fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let args = std::env::args().skip(1).collect::<Vec<_>>();
    let input = args.join(" ");

    match parse_args(&args).and_then(|options| compose(&options)) {
        Ok(matrix) => {
            println!("{}", matrix);
            ExitCode::SUCCESS
        },
        Err(err) => {
            if let Err(io_err) = error::report_to_stderr(&err, &input) {
                eprintln!("{}", io_err);
            }
            ExitCode::FAILURE
        },
    }
}
