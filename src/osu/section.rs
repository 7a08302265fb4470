//! Section classification and per-section line validation.

use std::fmt;

/// The literal marker that opens every `.osu` file, followed by the
/// integer format version.
pub const VERSION_MARKER: &str = "osu file format v";

/// One named block of the `.osu` grammar.
///
/// `Fonts`, `CatchTheBeat` and `Mania` are recognized so their content
/// does not bleed into neighboring sections, but no field decoder
/// exists for them.
#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Section {
    /// The version line before any section header.
    Format,
    /// The `[General]` key/value section.
    General,
    /// The `[Editor]` key/value section.
    Editor,
    /// The `[Metadata]` key/value section.
    Metadata,
    /// The `[Difficulty]` key/value section.
    Difficulty,
    /// The `[Events]` tabular section, including storyboard script lines.
    Events,
    /// The `[TimingPoints]` tabular section.
    TimingPoints,
    /// The `[Colours]` section, key/value with comma-separated values.
    Colours,
    /// The `[HitObjects]` tabular section.
    HitObjects,
    /// The `[Fonts]` section (recognized, not decoded).
    Fonts,
    /// The `[CatchTheBeat]` section (recognized, not decoded).
    CatchTheBeat,
    /// The `[Mania]` section (recognized, not decoded).
    Mania,
}

const SECTION_NAMES: [(Section, &str); 11] = [
    (Section::General, "General"),
    (Section::Editor, "Editor"),
    (Section::Metadata, "Metadata"),
    (Section::Difficulty, "Difficulty"),
    (Section::Events, "Events"),
    (Section::TimingPoints, "TimingPoints"),
    (Section::Colours, "Colours"),
    (Section::HitObjects, "HitObjects"),
    (Section::Fonts, "Fonts"),
    (Section::CatchTheBeat, "CatchTheBeat"),
    (Section::Mania, "Mania"),
];

impl Section {
    /// Classifies a line as a section header.
    ///
    /// Strips surrounding bracket characters and matches the remainder
    /// case-insensitively against the known section names. Returns
    /// `None` when the line is not a header; it is then content of the
    /// current section.
    #[must_use]
    pub fn classify(line: &str) -> Option<Self> {
        let name = line.trim_matches(|c| c == '[' || c == ']');
        SECTION_NAMES
            .iter()
            .find(|(_, known)| name.eq_ignore_ascii_case(known))
            .map(|&(section, _)| section)
    }

    /// Checks a content line against this section's minimal shape.
    ///
    /// Lines failing this guard are foreign content (stray text, keys
    /// of another grammar revision) and are dropped without error.
    #[must_use]
    pub fn validates(self, line: &str) -> bool {
        match self {
            Self::Format => contains_ignore_ascii_case(line, VERSION_MARKER),
            Self::General | Self::Editor | Self::Metadata | Self::Difficulty | Self::Fonts
            | Self::Mania => line.contains(':'),
            Self::Events | Self::TimingPoints | Self::HitObjects => line.contains(','),
            Self::Colours | Self::CatchTheBeat => line.contains(',') && line.contains(':'),
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Format => "Format",
            Self::General => "General",
            Self::Editor => "Editor",
            Self::Metadata => "Metadata",
            Self::Difficulty => "Difficulty",
            Self::Events => "Events",
            Self::TimingPoints => "TimingPoints",
            Self::Colours => "Colours",
            Self::HitObjects => "HitObjects",
            Self::Fonts => "Fonts",
            Self::CatchTheBeat => "CatchTheBeat",
            Self::Mania => "Mania",
        })
    }
}

/// Byte position of `needle` in `haystack`, ignoring ASCII case.
pub(crate) fn find_ignore_ascii_case(haystack: &str, needle: &str) -> Option<usize> {
    if needle.is_empty() || haystack.len() < needle.len() {
        return None;
    }
    haystack
        .as_bytes()
        .windows(needle.len())
        .position(|window| window.eq_ignore_ascii_case(needle.as_bytes()))
}

fn contains_ignore_ascii_case(haystack: &str, needle: &str) -> bool {
    find_ignore_ascii_case(haystack, needle).is_some()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn classifies_headers_case_insensitively() {
        assert_eq!(Section::classify("[General]"), Some(Section::General));
        assert_eq!(Section::classify("[hitobjects]"), Some(Section::HitObjects));
        assert_eq!(Section::classify("[TIMINGPOINTS]"), Some(Section::TimingPoints));
        assert_eq!(Section::classify("[Unknown]"), None);
        assert_eq!(Section::classify("256,192,1000,1,0"), None);
    }

    #[test]
    fn validates_key_value_sections() {
        assert!(Section::General.validates("AudioFilename: audio.mp3"));
        assert!(!Section::General.validates("stray content"));
        assert!(Section::Colours.validates("Combo1 : 255,128,0"));
        assert!(!Section::Colours.validates("Combo1 : no commas"));
    }

    #[test]
    fn validates_tabular_sections() {
        assert!(Section::TimingPoints.validates("0,500,4,2,0,100,1,0"));
        assert!(!Section::TimingPoints.validates("not a timing point"));
        assert!(Section::HitObjects.validates("256,192,1000,1,0"));
    }

    #[test]
    fn validates_format_marker() {
        assert!(Section::Format.validates("osu file format v14"));
        assert!(Section::Format.validates("OSU FILE FORMAT V3"));
        assert!(!Section::Format.validates("file format 14"));
    }

    #[test]
    fn section_names_display() {
        assert_eq!(Section::TimingPoints.to_string(), "TimingPoints");
        assert_eq!(Section::Format.to_string(), "Format");
    }
}
