//! Contains the common [`ErrorKind`] trait used by all errors to display user-facing error
//! messages.
//!
//! Most errors raised by the algebra kernel have no source code to point at (a matrix index is
//! out of bounds, a substitution never settles, etc.), so an [`Error`] may carry zero spans. The
//! report for such an error consists of the message and help text only. Front ends that do have
//! source text, such as the command line, attach spans and get labelled reports.

use ariadne::{Color, Label, Report, ReportKind};
use std::{any::Any, fmt::{self, Debug, Display}, ops::Range};

/// The color to use to highlight expressions.
pub const EXPR: Color = Color::Rgb(52, 235, 152);

/// Represents any kind of error that can occur during some operation.
///
/// This trait is usually derived with `algex_attrs::ErrorKind`.
pub trait ErrorKind: Debug + Send {
    /// Returns `self` as [`Any`], so that callers can recover the concrete error kind.
    fn as_any(&self) -> &dyn Any;

    /// The message displayed at the top of the error.
    fn message(&self) -> String;

    /// The label texts, one per span of the error, in order.
    fn labels(&self) -> Vec<String>;

    /// Optional help text describing how to fix the error.
    fn help(&self) -> Option<String>;

    /// Builds the report for this error.
    ///
    /// Labels are paired with `spans` by position. A label without a matching span is dropped,
    /// and an empty label text produces an unlabelled highlight.
    fn build_report<'a>(
        &self,
        src_id: &'a str,
        spans: &[Range<usize>],
    ) -> Report<(&'a str, Range<usize>)> {
        let offset = spans.first().map(|span| span.start).unwrap_or(0);
        let mut builder = Report::build(ReportKind::Error, src_id, offset)
            .with_message(self.message())
            .with_labels(
                self.labels()
                    .into_iter()
                    .zip(spans)
                    .map(|(label_str, span)| {
                        let mut label = Label::new((src_id, span.clone()))
                            .with_color(EXPR);

                        if !label_str.is_empty() {
                            label = label.with_message(label_str);
                        }

                        label
                    })
                    .collect::<Vec<_>>()
            );

        if let Some(help) = self.help() {
            builder.set_help(help);
        }
        builder.finish()
    }
}

/// An error, optionally associated with regions of source code that can be highlighted.
#[derive(Debug)]
pub struct Error {
    /// The regions of the source code that this error originated from. Empty for errors that
    /// were not caused by any particular piece of source code.
    pub spans: Vec<Range<usize>>,

    /// The kind of error that occurred.
    pub kind: Box<dyn ErrorKind>,
}

impl Error {
    /// Creates a new error with the given spans and kind.
    pub fn new(spans: Vec<Range<usize>>, kind: impl ErrorKind + 'static) -> Self {
        Self { spans, kind: Box::new(kind) }
    }

    /// Creates a new error with no associated source code.
    pub fn unspanned(kind: impl ErrorKind + 'static) -> Self {
        Self::new(Vec::new(), kind)
    }

    /// Returns the error kind as a `K`, if it is one.
    pub fn downcast_ref<K: ErrorKind + 'static>(&self) -> Option<&K> {
        self.kind.as_any().downcast_ref::<K>()
    }

    /// Build a report from this error kind.
    pub fn build_report<'a>(&self, src_id: &'a str) -> Report<(&'a str, Range<usize>)> {
        self.kind.build_report(src_id, &self.spans)
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind.message())
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
mod tests {
    use algex_attrs::ErrorKind;
    use ariadne::Source;
    use super::*;

    #[derive(Debug, Clone, ErrorKind, PartialEq)]
    #[error(
        message = format!("`{}` is not an axis", name),
        labels = ["this axis"],
        help = "use one of `x`, `y` or `z`",
    )]
    struct UnknownAxis {
        name: String,
    }

    #[derive(Debug, Clone, ErrorKind, PartialEq)]
    #[error(message = "nothing to do")]
    struct Nothing;

    /// Renders the report of the given error to a string without ANSI escapes.
    fn render(err: &Error, src: &str) -> String {
        let mut buf = Vec::new();
        err.build_report("input")
            .write(("input", Source::from(src)), &mut buf)
            .unwrap();
        String::from_utf8(strip_ansi_escapes::strip(buf)).unwrap()
    }

    #[test]
    fn derived_fields() {
        let kind = UnknownAxis { name: "w".to_string() };
        assert_eq!(kind.message(), "`w` is not an axis");
        assert_eq!(kind.labels(), vec!["this axis".to_string()]);
        assert_eq!(kind.help().as_deref(), Some("use one of `x`, `y` or `z`"));

        assert_eq!(Nothing.message(), "nothing to do");
        assert!(Nothing.labels().is_empty());
        assert_eq!(Nothing.help(), None);
    }

    #[test]
    fn display_and_downcast() {
        let err = Error::unspanned(UnknownAxis { name: "q".to_string() });
        assert_eq!(err.to_string(), "`q` is not an axis");
        assert_eq!(
            err.downcast_ref::<UnknownAxis>(),
            Some(&UnknownAxis { name: "q".to_string() }),
        );
        assert!(err.downcast_ref::<Nothing>().is_none());
    }

    #[test]
    fn spanned_report() {
        let src = "x:a w:b";
        let err = Error::new(vec![4..5], UnknownAxis { name: "w".to_string() });
        let out = render(&err, src);
        assert!(out.contains("`w` is not an axis"));
        assert!(out.contains("this axis"));
        assert!(out.contains("use one of `x`, `y` or `z`"));
    }

    #[test]
    fn unspanned_report() {
        let err = Error::unspanned(UnknownAxis { name: "w".to_string() });
        let out = render(&err, "");
        assert!(out.contains("`w` is not an axis"));
        assert!(!out.contains("this axis"));
    }
}
