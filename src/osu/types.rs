//! Definitions of field value types shared across sections.

use std::fmt;

use bitflags::bitflags;

/// One of the four game modes a beatmap can target. The active ruleset
/// decides which hit object variants the `[HitObjects]` decoder builds.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Ruleset {
    /// osu!standard, circles and curved-path sliders.
    #[default]
    Standard,
    /// osu!taiko, drum hits and drumrolls.
    Taiko,
    /// osu!catch, fruits and juice streams.
    Fruits,
    /// osu!mania, column notes and hold notes.
    Mania,
}

impl Ruleset {
    /// Resolves the numeric mode id of the `Mode` key.
    #[must_use]
    pub const fn from_id(id: i32) -> Option<Self> {
        match id {
            0 => Some(Self::Standard),
            1 => Some(Self::Taiko),
            2 => Some(Self::Fruits),
            3 => Some(Self::Mania),
            _ => None,
        }
    }
}

impl fmt::Display for Ruleset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Standard => "standard",
            Self::Taiko => "taiko",
            Self::Fruits => "fruits",
            Self::Mania => "mania",
        })
    }
}

/// A sample bank selector. Encoded numerically in tabular sections and
/// by name in the `[General]` section.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SampleSet {
    /// No override; the active timing point decides.
    #[default]
    None,
    /// The normal bank.
    Normal,
    /// The soft bank.
    Soft,
    /// The drum bank.
    Drum,
}

impl SampleSet {
    /// Resolves the numeric encoding used by timing points and extras.
    /// Ids outside the known banks fall back to [`SampleSet::None`].
    #[must_use]
    pub const fn from_id(id: i32) -> Self {
        match id {
            1 => Self::Normal,
            2 => Self::Soft,
            3 => Self::Drum,
            _ => Self::None,
        }
    }

    /// Resolves the name encoding used by the `[General]` section.
    /// Numeric tokens resolve through [`SampleSet::from_id`].
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "None" => Some(Self::None),
            "Normal" => Some(Self::Normal),
            "Soft" => Some(Self::Soft),
            "Drum" => Some(Self::Drum),
            numeric => numeric.trim().parse().ok().map(Self::from_id),
        }
    }
}

/// A time signature as beats per measure. Arbitrary numerators occur in
/// the wild, so this is a transparent numeric wrapper with the common
/// signatures as constants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TimeSignature(pub i32);

impl TimeSignature {
    /// 3/4 time.
    pub const SIMPLE_TRIPLE: Self = Self(3);
    /// 4/4 time.
    pub const SIMPLE_QUADRUPLE: Self = Self(4);
}

impl Default for TimeSignature {
    fn default() -> Self {
        Self::SIMPLE_QUADRUPLE
    }
}

bitflags! {
    /// The hit-sound bitmask attached to hit objects and slider edges.
    #[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct HitSound: u32 {
        /// The normal hit sample.
        const NORMAL = 1;
        /// The whistle sample.
        const WHISTLE = 2;
        /// The finish sample.
        const FINISH = 4;
        /// The clap sample.
        const CLAP = 8;
    }
}

bitflags! {
    /// The effects bitmask of a timing point.
    #[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct Effects: u32 {
        /// Kiai time is active.
        const KIAI = 1;
        /// The first barline of the measure is omitted (taiko/mania).
        const OMIT_FIRST_BARLINE = 8;
    }
}

/// The curve family of a slider path, selected by the first character
/// of the path token.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CurveType {
    /// Catmull-Rom spline (`C`).
    Catmull,
    /// Bezier curve (`B`).
    Bezier,
    /// Straight segments (`L`).
    Linear,
    /// Circular arc through three points (`P`); also the fallback for
    /// unrecognized characters.
    #[default]
    PerfectCurve,
}

impl CurveType {
    /// Resolves the curve selector character of a slider path token.
    #[must_use]
    pub const fn from_char(c: char) -> Self {
        match c {
            'C' => Self::Catmull,
            'B' => Self::Bezier,
            'L' => Self::Linear,
            _ => Self::PerfectCurve,
        }
    }
}

/// The vocabulary of the `[Events]` section. Event lines carry either
/// the name or the numeric id in their first token.
#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EventType {
    /// The background image of the map.
    Background,
    /// A background video.
    Video,
    /// A gameplay break period.
    Break,
    /// A background colour transform (not decoded).
    Colour,
    /// A storyboard sprite declaration line.
    Sprite,
    /// A storyboard sound sample line.
    Sample,
    /// A storyboard animation declaration line.
    Animation,
    /// A storyboard command continuation line (indented by space or
    /// underscore).
    StoryboardCommand,
}

impl EventType {
    /// Resolves the first token of an event line, accepting the event
    /// name or its numeric id. Unknown tokens yield `None` and the line
    /// is ignored.
    #[must_use]
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "Background" => Some(Self::Background),
            "Video" => Some(Self::Video),
            "Break" => Some(Self::Break),
            "Colour" => Some(Self::Colour),
            "Sprite" => Some(Self::Sprite),
            "Sample" => Some(Self::Sample),
            "Animation" => Some(Self::Animation),
            "StoryboardCommand" => Some(Self::StoryboardCommand),
            numeric => match numeric.trim().parse::<i32>() {
                Ok(0) => Some(Self::Background),
                Ok(1) => Some(Self::Video),
                Ok(2) => Some(Self::Break),
                Ok(3) => Some(Self::Colour),
                Ok(4) => Some(Self::Sprite),
                Ok(5) => Some(Self::Sample),
                Ok(6) => Some(Self::Animation),
                Ok(7) => Some(Self::StoryboardCommand),
                _ => None,
            },
        }
    }
}

/// A 2D playfield coordinate.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    /// X coordinate in osu!pixels.
    pub x: f32,
    /// Y coordinate in osu!pixels.
    pub y: f32,
}

impl Position {
    /// Creates a new position.
    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

impl From<(f32, f32)> for Position {
    fn from((x, y): (f32, f32)) -> Self {
        Self { x, y }
    }
}

/// An RGBA colour from the `[Colours]` section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Colour {
    /// Red channel.
    pub red: u8,
    /// Green channel.
    pub green: u8,
    /// Blue channel.
    pub blue: u8,
    /// Alpha channel; 255 when the source omits it.
    pub alpha: u8,
}

impl Colour {
    /// Creates an opaque colour.
    #[must_use]
    pub const fn rgb(red: u8, green: u8, blue: u8) -> Self {
        Self {
            red,
            green,
            blue,
            alpha: 255,
        }
    }
}
