//! The decoder module of osu! beatmap (`.osu`) files.
//!
//! Raw [`str`] == [`decode_beatmap`] ==> [`Beatmap`] (in [`DecodeOutput`])
//!
//! The decoder streams the input lines once. Each non-blank, non-comment
//! line is classified against the section grammar, validated for the
//! current section's minimal shape and handed to that section's field
//! decoder. Lines that fail validation are foreign content and are
//! dropped silently; lines that validate but fail a typed field parse
//! abort the decode with a [`DecodeError::Malformed`] carrying the line
//! number and section.
//!
//! Storyboard script lines found in the `[Events]` section are not
//! interpreted here. They are accumulated verbatim and attached to
//! [`EventsSection::storyboard_lines`] for an external storyboard
//! decoder.

pub mod decode;
pub mod math;
pub mod model;
pub mod prelude;
pub mod section;
pub mod split;
pub mod types;

use std::{
    fs::File,
    io::{self, BufRead, BufReader},
    path::Path,
};

use thiserror::Error;

pub use self::decode::FieldError;
use self::decode::BeatmapDecoder;
pub use self::model::{Beatmap, EventsSection};
use self::{model::HitObjectShape, section::Section, types::Ruleset};

/// A fatal error that aborts the whole decode. No partial result is
/// produced.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum DecodeError {
    /// The beatmap source could not be resolved or read at all.
    #[error("failed to read beatmap source: {0}")]
    Source(#[from] io::Error),
    /// A line passed section validation but a typed field parse failed.
    #[error("malformed line {line} in [{section}]: {source}")]
    Malformed {
        /// The line number of the offending line, starting with 1.
        line: usize,
        /// The section the line was decoded under.
        section: Section,
        /// The failed field parse.
        source: FieldError,
    },
}

/// A non-fatal finding recorded during the decode.
///
/// Warnings never change which lines decode successfully; they surface
/// content the reference format drops on the floor.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, Hash, Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DecodeWarning {
    /// No hit object variant is defined for the shape under the active
    /// ruleset (e.g. a spinner under the mania ruleset). The line is
    /// dropped; no placeholder enters the object list.
    #[error("no {shape} variant under the {ruleset} ruleset at line {line}")]
    UnsupportedObject {
        /// The base shape decoded from the type code.
        shape: HitObjectShape,
        /// The active ruleset of the beatmap.
        ruleset: Ruleset,
        /// The line number, starting with 1.
        line: usize,
    },
    /// The type code carried no recognized base shape.
    #[error("object type code {value:#x} has no base shape at line {line}")]
    UnknownObjectType {
        /// The raw type code after mask extraction.
        value: i32,
        /// The line number, starting with 1.
        line: usize,
    },
    /// The `Mode` key carried an id outside the four known rulesets.
    /// The stored mode id keeps the raw value; hit objects fall back to
    /// the standard ruleset.
    #[error("unknown ruleset id {id} at line {line}")]
    UnknownRuleset {
        /// The raw mode id.
        id: i32,
        /// The line number, starting with 1.
        line: usize,
    },
}

impl DecodeWarning {
    /// The 1-based source line the warning points at.
    #[must_use]
    pub const fn line(&self) -> usize {
        match self {
            Self::UnsupportedObject { line, .. }
            | Self::UnknownObjectType { line, .. }
            | Self::UnknownRuleset { line, .. } => *line,
        }
    }
}

/// Output of decoding a beatmap source.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[must_use]
pub struct DecodeOutput {
    /// The decoded beatmap.
    pub beatmap: Beatmap,
    /// Warnings that occurred during decoding.
    pub warnings: Vec<DecodeWarning>,
}

/// Decodes a beatmap from its source text.
///
/// # Example
///
/// ```
/// use osu_rs::osu::{DecodeOutput, decode_beatmap};
///
/// let source = "osu file format v14\n[Metadata]\nTitle:Example\n";
/// let DecodeOutput { beatmap, warnings } = decode_beatmap(source).expect("decode");
/// assert_eq!(beatmap.version, 14);
/// assert_eq!(beatmap.metadata.title, "Example");
/// assert!(warnings.is_empty());
/// ```
///
/// # Errors
///
/// Returns [`DecodeError::Malformed`] when a validated line fails a
/// typed field parse.
pub fn decode_beatmap(source: &str) -> Result<DecodeOutput, DecodeError> {
    BeatmapDecoder::new().run(source.lines())
}

/// Decodes a beatmap from a sequence of already-split text lines.
///
/// # Errors
///
/// Returns [`DecodeError::Malformed`] when a validated line fails a
/// typed field parse.
pub fn decode_beatmap_lines<I>(lines: I) -> Result<DecodeOutput, DecodeError>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    BeatmapDecoder::new().run(lines)
}

/// Decodes a beatmap from a buffered reader.
///
/// # Errors
///
/// Returns [`DecodeError::Source`] when reading fails, otherwise as
/// [`decode_beatmap`].
pub fn decode_beatmap_reader(reader: impl BufRead) -> Result<DecodeOutput, DecodeError> {
    let lines = reader.lines().collect::<Result<Vec<_>, _>>()?;
    decode_beatmap_lines(lines)
}

/// Decodes a beatmap from a file path.
///
/// # Errors
///
/// Returns [`DecodeError::Source`] when the path does not resolve to a
/// readable file, otherwise as [`decode_beatmap`].
pub fn decode_beatmap_file(path: impl AsRef<Path>) -> Result<DecodeOutput, DecodeError> {
    decode_beatmap_reader(BufReader::new(File::open(path)?))
}
