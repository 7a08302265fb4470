//! The decode loop: section cursor, line routing and the post-pass.
//!
//! All decode state lives in a per-call [`BeatmapDecoder`] value, so
//! concurrent decodes of different inputs never share anything.

mod events;
mod hit_objects;
mod key_value;
mod timing_points;
mod value;

pub use self::value::FieldError;
use super::{
    DecodeError, DecodeOutput, DecodeWarning,
    model::{Beatmap, HitObjectKind},
    section::{Section, VERSION_MARKER, find_ignore_ascii_case},
};

/// One in-progress decode: the result aggregate, the current-section
/// cursor, the storyboard side-channel and the warning list.
pub(crate) struct BeatmapDecoder {
    beatmap: Beatmap,
    section: Section,
    storyboard_lines: Vec<String>,
    warnings: Vec<DecodeWarning>,
}

impl BeatmapDecoder {
    pub(crate) fn new() -> Self {
        Self {
            beatmap: Beatmap::default(),
            section: Section::Format,
            storyboard_lines: Vec::new(),
            warnings: Vec::new(),
        }
    }

    /// Streams the input lines once and finishes the aggregate.
    pub(crate) fn run<I>(mut self, lines: I) -> Result<DecodeOutput, DecodeError>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        for (index, line) in lines.into_iter().enumerate() {
            let line = line.as_ref();
            if line.trim().is_empty() || line.starts_with("//") {
                continue;
            }
            if let Some(section) = Section::classify(line) {
                self.section = section;
                continue;
            }
            if !self.section.validates(line) {
                continue;
            }
            self.decode_line(line, index + 1)?;
        }
        Ok(self.finish())
    }

    fn decode_line(&mut self, line: &str, number: usize) -> Result<(), DecodeError> {
        let section = self.section;
        match section {
            Section::Format => self.decode_version(line),
            Section::General => {
                key_value::decode_general(&mut self.beatmap.general, &mut self.warnings, line, number)
            }
            Section::Editor => key_value::decode_editor(&mut self.beatmap.editor, line),
            Section::Metadata => key_value::decode_metadata(&mut self.beatmap.metadata, line),
            Section::Difficulty => key_value::decode_difficulty(&mut self.beatmap.difficulty, line),
            Section::Colours => key_value::decode_colours(&mut self.beatmap.colours, line),
            Section::Events => {
                events::decode_events(&mut self.beatmap.events, &mut self.storyboard_lines, line)
            }
            Section::TimingPoints => {
                timing_points::decode_timing_point(&mut self.beatmap.timing_points, line)
            }
            Section::HitObjects => {
                hit_objects::decode_hit_object(&mut self.beatmap, &mut self.warnings, line, number)
            }
            // recognized sections without a field decoder
            Section::Fonts | Section::CatchTheBeat | Section::Mania => Ok(()),
        }
        .map_err(|source| DecodeError::Malformed {
            line: number,
            section,
            source,
        })
    }

    fn decode_version(&mut self, line: &str) -> Result<(), FieldError> {
        // validation guaranteed the marker is present
        let at = find_ignore_ascii_case(line, VERSION_MARKER)
            .ok_or(FieldError::Missing("format version marker"))?;
        let rest = line
            .get(at + VERSION_MARKER.len()..)
            .ok_or(FieldError::Missing("format version number"))?;
        self.beatmap.version = value::parse_int(rest)?;
        Ok(())
    }

    /// Attaches the storyboard hand-off and computes the derived
    /// summary fields from the completed object list.
    fn finish(mut self) -> DecodeOutput {
        self.beatmap.events.storyboard_lines = self.storyboard_lines;

        let general = &mut self.beatmap.general;
        general.circles_count = 0;
        general.sliders_count = 0;
        general.spinners_count = 0;
        for object in &self.beatmap.hit_objects {
            match object.kind {
                HitObjectKind::Circle => general.circles_count += 1,
                HitObjectKind::Slider(_) => general.sliders_count += 1,
                HitObjectKind::Spinner => general.spinners_count += 1,
                HitObjectKind::Hold => {}
            }
        }
        general.length = self
            .beatmap
            .hit_objects
            .last()
            .map_or(0, |object| object.end_time);

        DecodeOutput {
            beatmap: self.beatmap,
            warnings: self.warnings,
        }
    }
}
