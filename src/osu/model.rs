//! Data holders of a decoded beatmap.
//!
//! Everything here is created during one decode pass and never mutated
//! afterwards; the aggregate is returned by value to the caller and
//! shares no state with other decodes.

pub mod colours;
pub mod difficulty;
pub mod editor;
pub mod events;
pub mod general;
pub mod hit_object;
pub mod metadata;
pub mod timing_point;

pub use self::{
    colours::ColoursSection,
    difficulty::DifficultySection,
    editor::EditorSection,
    events::{BreakEvent, EventsSection},
    general::GeneralSection,
    hit_object::{
        Extras, HitObject, HitObjectKind, HitObjectShape, SliderPath, UnsupportedCombination,
    },
    metadata::MetadataSection,
    timing_point::TimingPoint,
};

/// A decoded beatmap: one chart of metadata, timing and ordered hit
/// objects for one difficulty.
#[derive(Debug, Default, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Beatmap {
    /// The `.osu` format version from the first line.
    pub version: i32,
    /// The `[General]` section.
    pub general: GeneralSection,
    /// The `[Editor]` section.
    pub editor: EditorSection,
    /// The `[Metadata]` section.
    pub metadata: MetadataSection,
    /// The `[Difficulty]` section.
    pub difficulty: DifficultySection,
    /// The `[Events]` section.
    pub events: EventsSection,
    /// The `[Colours]` section.
    pub colours: ColoursSection,
    /// Timing points in source order (not time-sorted).
    pub timing_points: Vec<TimingPoint>,
    /// Hit objects in source order.
    pub hit_objects: Vec<HitObject>,
}
