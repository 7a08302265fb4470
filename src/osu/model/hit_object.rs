//! Hit objects.
//!
//! One raw object line encodes a base shape; the active ruleset decides
//! the concrete variant. Instead of a variant per (shape, ruleset) pair
//! the model is a shape-tagged sum type: only the slider family carries
//! a ruleset-divergent payload, and pairings with no defined variant
//! are rejected at construction.

use std::fmt;

use thiserror::Error;

use crate::osu::types::{CurveType, HitSound, Position, Ruleset, SampleSet};

/// The base shape packed into a raw type code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum HitObjectShape {
    /// A single tap object.
    Circle,
    /// A path object with repeats and a pixel length.
    Slider,
    /// A duration object without a path.
    Spinner,
    /// A mania hold note.
    Hold,
}

impl fmt::Display for HitObjectShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Circle => "circle",
            Self::Slider => "slider",
            Self::Spinner => "spinner",
            Self::Hold => "hold",
        })
    }
}

/// The optional trailing sample override group of a hit object line.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Extras {
    /// Override of the normal sample bank.
    pub sample_set: SampleSet,
    /// Override of the addition sample bank.
    pub addition_set: SampleSet,
    /// Custom sample index; 0 selects the default samples.
    pub custom_index: i32,
    /// Volume override; 0 leaves the timing point volume in effect.
    pub volume: i32,
    /// Custom sample filename; empty when absent.
    pub sample_filename: String,
}

/// The geometry payload of a slider-family object.
#[derive(Debug, Default, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SliderPath {
    /// The curve family of the path.
    pub curve_type: CurveType,
    /// Control points including the object position as the head.
    pub control_points: Vec<Position>,
    /// How many times the path is traversed.
    pub repeats: i32,
    /// Visual length of one traversal in osu!pixels.
    pub pixel_length: f64,
    /// Per-edge hit sounds, when the line carries them.
    pub edge_hit_sounds: Option<Vec<HitSound>>,
    /// Per-edge (normal, addition) sample bank pairs, when present.
    pub edge_additions: Option<Vec<(SampleSet, SampleSet)>>,
}

/// The variant payload of a hit object.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum HitObjectKind {
    /// A tap object; also taiko hits, fruits and mania notes.
    Circle,
    /// A path object; sliders, taiko drumrolls and juice streams.
    Slider(SliderPath),
    /// A duration object; spinners and banana rain.
    Spinner,
    /// A mania hold note. Also what the slider shape maps onto under
    /// the mania ruleset.
    Hold,
}

/// Error of a shape/ruleset pairing with no defined variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[error("no {shape} variant under the {ruleset} ruleset")]
pub struct UnsupportedCombination {
    /// The base shape of the line.
    pub shape: HitObjectShape,
    /// The active ruleset.
    pub ruleset: Ruleset,
}

impl HitObjectKind {
    /// Resolves the variant for `shape` under `ruleset`.
    ///
    /// The mania ruleset maps the slider shape onto its hold note and
    /// drops the path payload. Spinners have no mania variant and the
    /// hold shape exists only under mania; those pairings are errors so
    /// that no placeholder object can enter the result.
    pub fn from_shape(
        shape: HitObjectShape,
        ruleset: Ruleset,
        path: Option<SliderPath>,
    ) -> Result<Self, UnsupportedCombination> {
        match (shape, ruleset) {
            (HitObjectShape::Circle, _) => Ok(Self::Circle),
            (HitObjectShape::Slider | HitObjectShape::Hold, Ruleset::Mania) => Ok(Self::Hold),
            (HitObjectShape::Slider, _) => Ok(Self::Slider(path.unwrap_or_default())),
            (HitObjectShape::Spinner, Ruleset::Mania) | (HitObjectShape::Hold, _) => {
                Err(UnsupportedCombination { shape, ruleset })
            }
            (HitObjectShape::Spinner, _) => Ok(Self::Spinner),
        }
    }
}

/// One interactive timed element of the map.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HitObject {
    /// Playfield position.
    pub position: Position,
    /// Start time in milliseconds.
    pub start_time: i32,
    /// End time in milliseconds; equals `start_time` for objects
    /// without a duration.
    pub end_time: i32,
    /// The hit-sound bitmask of the object.
    pub hit_sound: HitSound,
    /// Trailing sample overrides; default when the line carries none.
    pub extras: Extras,
    /// Whether the object starts a new combo.
    pub new_combo: bool,
    /// How many combo colours the new combo skips.
    pub combo_skip: u8,
    /// The ruleset the object was decoded under.
    pub ruleset: Ruleset,
    /// The variant payload.
    pub kind: HitObjectKind,
}

impl HitObject {
    /// Duration of the object in milliseconds; 0 for circle-family
    /// objects.
    #[must_use]
    pub const fn duration(&self) -> i32 {
        self.end_time - self.start_time
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn mania_maps_slider_shape_onto_hold() {
        let kind = HitObjectKind::from_shape(HitObjectShape::Slider, Ruleset::Mania, None)
            .expect("mania slider maps to hold");
        assert_eq!(kind, HitObjectKind::Hold);
    }

    #[test]
    fn mania_spinner_is_unsupported() {
        let err = HitObjectKind::from_shape(HitObjectShape::Spinner, Ruleset::Mania, None)
            .expect_err("mania has no spinner variant");
        assert_eq!(
            err,
            UnsupportedCombination {
                shape: HitObjectShape::Spinner,
                ruleset: Ruleset::Mania,
            }
        );
    }

    #[test]
    fn hold_outside_mania_is_unsupported() {
        assert!(HitObjectKind::from_shape(HitObjectShape::Hold, Ruleset::Standard, None).is_err());
        assert!(HitObjectKind::from_shape(HitObjectShape::Hold, Ruleset::Mania, None).is_ok());
    }
}
