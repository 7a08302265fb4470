//! Fancy diagnostics support using `ariadne`.
//!
//! Decode warnings and errors carry 1-based line numbers rather than
//! byte spans; [`SimpleSource`] maps a line number back to its byte
//! range in the original text so ariadne can render the offending line
//! with row/column information.
//!
//! # Usage Example
//!
//! ```rust
//! use osu_rs::{diagnostics::emit_decode_warnings, osu::decode_beatmap};
//!
//! let source = "osu file format v14\n[HitObjects]\n256,192,1000,64,0\n";
//! let output = decode_beatmap(source).expect("decode");
//!
//! // Render every warning against the source text
//! emit_decode_warnings("map.osu", source, &output.warnings);
//! ```

use std::ops::Range;

use ariadne::{Color, Label, Report, ReportKind, Source};

use crate::osu::{DecodeError, DecodeWarning};

/// Simple source container that holds the filename and source text and
/// resolves line numbers to byte ranges.
pub struct SimpleSource<'a> {
    /// Name of the source file.
    name: &'a str,
    /// Source text content.
    text: &'a str,
}

impl<'a> SimpleSource<'a> {
    /// Creates a new source container instance.
    #[must_use]
    pub const fn new(name: &'a str, text: &'a str) -> Self {
        Self { name, text }
    }

    /// The source text content.
    #[must_use]
    pub const fn text(&self) -> &'a str {
        self.text
    }

    /// The source file name.
    #[must_use]
    pub const fn name(&self) -> &'a str {
        self.name
    }

    /// Byte range of the 1-based `line` in the source text, without its
    /// terminator. Out-of-range line numbers yield an empty range at
    /// the end of the text.
    #[must_use]
    pub fn line_span(&self, line: usize) -> Range<usize> {
        let mut start = 0;
        for (number, text) in self.text.split_inclusive('\n').enumerate() {
            let content = text.trim_end_matches(['\n', '\r']);
            if number + 1 == line {
                return start..start + content.len();
            }
            start += text.len();
        }
        self.text.len()..self.text.len()
    }
}

/// Trait for converting line-positioned problems to [`ariadne::Report`].
pub trait ToAriadne {
    /// Converts the problem to an ariadne report over `src`.
    fn to_report<'a>(&self, src: &SimpleSource<'a>)
    -> Report<'a, (String, std::ops::Range<usize>)>;
}

impl ToAriadne for DecodeWarning {
    fn to_report<'a>(
        &self,
        src: &SimpleSource<'a>,
    ) -> Report<'a, (String, std::ops::Range<usize>)> {
        let span = src.line_span(self.line());
        let filename = src.name().to_string();
        Report::build(ReportKind::Warning, (filename.clone(), span.clone()))
            .with_message("decode: ".to_string() + &self.to_string())
            .with_label(Label::new((filename, span)).with_color(Color::Yellow))
            .finish()
    }
}

impl ToAriadne for DecodeError {
    fn to_report<'a>(
        &self,
        src: &SimpleSource<'a>,
    ) -> Report<'a, (String, std::ops::Range<usize>)> {
        let span = match self {
            Self::Malformed { line, .. } => src.line_span(*line),
            Self::Source(_) => 0..0,
        };
        let filename = src.name().to_string();
        Report::build(ReportKind::Error, (filename.clone(), span.clone()))
            .with_message("decode: ".to_string() + &self.to_string())
            .with_label(Label::new((filename, span)).with_color(Color::Red))
            .finish()
    }
}

/// Convenience method: batch render a [`DecodeWarning`] list against
/// the source text it came from.
pub fn emit_decode_warnings<'a>(
    name: &'a str,
    source: &'a str,
    warnings: impl IntoIterator<Item = &'a DecodeWarning>,
) {
    let simple = SimpleSource::new(name, source);
    let ariadne_source = Source::from(source);
    for warning in warnings {
        let report = warning.to_report(&simple);
        let _ = report.print((name.to_string(), ariadne_source.clone()));
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn line_span_points_at_the_line() {
        let source = SimpleSource::new("map.osu", "first\nsecond\r\nthird");
        assert_eq!(source.line_span(1), 0..5);
        assert_eq!(source.line_span(2), 6..12);
        assert_eq!(source.line_span(3), 14..19);
        assert_eq!(source.line_span(9), 19..19);
    }

    #[test]
    fn warning_report_builds() {
        let source = "osu file format v14\n[HitObjects]\n256,192,1000,64,0\n";
        let simple = SimpleSource::new("map.osu", source);
        let warning = DecodeWarning::UnknownObjectType { value: 64, line: 3 };
        // only exercised for panics; ariadne output is not asserted on
        let _report = warning.to_report(&simple);
    }
}
