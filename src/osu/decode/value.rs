//! Typed field parsers shared by the section decoders.

use std::num::{ParseFloatError, ParseIntError};

use thiserror::Error;

/// A typed parse failure on a line that already passed section
/// validation. Always fatal; the decoder wraps it with line number and
/// section context.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldError {
    /// An integer field did not parse.
    #[error("invalid integer field: {0}")]
    Int(#[from] ParseIntError),
    /// A float field did not parse.
    #[error("invalid float field: {0}")]
    Float(#[from] ParseFloatError),
    /// A positional field required by the line's shape was absent.
    #[error("missing field: {0}")]
    Missing(&'static str),
    /// A named enum field carried an unknown name.
    #[error("unknown {what}: {value}")]
    UnknownVariant {
        /// What kind of value was expected.
        what: &'static str,
        /// The unparseable name.
        value: String,
    },
}

pub(crate) type Result<T> = core::result::Result<T, FieldError>;

pub(crate) fn parse_int(value: &str) -> Result<i32> {
    Ok(value.trim().parse()?)
}

/// Parses the integer at the head of the token, stopping at the first
/// non-digit character. Hit object fields need this leniency: the
/// bounded comma split fuses trailing fields into the final token, so
/// a numeric field there may carry residue after its digits.
pub(crate) fn parse_int_prefix(value: &str) -> Result<i32> {
    let value = value.trim();
    let bytes = value.as_bytes();
    let mut end = usize::from(matches!(bytes.first(), Some(b'-' | b'+')));
    while bytes.get(end).is_some_and(u8::is_ascii_digit) {
        end += 1;
    }
    Ok(value[..end].parse()?)
}

pub(crate) fn parse_float(value: &str) -> Result<f32> {
    Ok(value.trim().parse()?)
}

pub(crate) fn parse_double(value: &str) -> Result<f64> {
    Ok(value.trim().parse()?)
}

/// Boolean fields accept `1` or case-insensitive `true`, nothing else.
pub(crate) fn parse_bool(value: &str) -> bool {
    let value = value.trim();
    value == "1" || value.eq_ignore_ascii_case("true")
}

/// Splits a key/value line on its first `:`. The value side is
/// trimmed, the key side is not (keys are matched verbatim).
pub(crate) fn split_key_value(line: &str) -> (&str, &str) {
    let (key, value) = line.split_once(':').unwrap_or((line, ""));
    (key, value.trim())
}
