//! Prelude module for the beatmap decoder.
//!
//! This module re-exports all public types for convenient access. You
//! can use `use osu_rs::osu::prelude::*;` to import everything at once.

#[cfg(feature = "diagnostics")]
pub use crate::diagnostics::{SimpleSource, ToAriadne, emit_decode_warnings};

pub use super::{
    DecodeError, DecodeOutput, DecodeWarning,
    decode::FieldError,
    decode_beatmap, decode_beatmap_file, decode_beatmap_lines, decode_beatmap_reader,
    math::slider_end_time,
    model::{
        Beatmap, BreakEvent, ColoursSection, DifficultySection, EditorSection, EventsSection,
        Extras, GeneralSection, HitObject, HitObjectKind, HitObjectShape, MetadataSection,
        SliderPath, TimingPoint, UnsupportedCombination,
    },
    section::Section,
    split::split_bounded,
    types::{
        Colour, CurveType, Effects, EventType, HitSound, Position, Ruleset, SampleSet,
        TimeSignature,
    },
};
