//! The `[General]` section.

use crate::osu::types::{Ruleset, SampleSet};

/// Global settings of the map, plus the summary counts derived after
/// the object list is complete.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GeneralSection {
    /// The audio file of the map, relative to the map directory.
    pub audio_filename: String,
    /// Milliseconds of silence before the audio starts.
    pub audio_lead_in: i32,
    /// Song-select preview offset in milliseconds; -1 when unset.
    pub preview_time: i32,
    /// Whether the countdown plays before the first object.
    pub countdown: bool,
    /// The default sample bank.
    pub sample_set: SampleSet,
    /// Stack leniency of overlapping standard objects.
    pub stack_leniency: f64,
    /// The active ruleset of the map.
    pub mode: Ruleset,
    /// The raw `Mode` id, kept verbatim even when unknown.
    pub mode_id: i32,
    /// Whether breaks letterbox the playfield.
    pub letterbox_in_breaks: bool,
    /// Legacy flag drawing the storyboard under combo fire.
    pub story_fire_in_front: bool,
    /// Mania special style (N+1 layout).
    pub special_style: bool,
    /// Whether the storyboard targets widescreen.
    pub widescreen_storyboard: bool,
    /// Whether the map shows an epilepsy warning.
    pub epilepsy_warning: bool,
    /// Whether the storyboard may use skin sprites.
    pub use_skin_sprites: bool,
    /// Number of circle-family objects, derived after decode.
    pub circles_count: i32,
    /// Number of slider-family objects, derived after decode.
    pub sliders_count: i32,
    /// Number of spinner-family objects, derived after decode.
    pub spinners_count: i32,
    /// End time of the last hit object in milliseconds; 0 when empty.
    pub length: i32,
}

impl Default for GeneralSection {
    fn default() -> Self {
        Self {
            audio_filename: String::new(),
            audio_lead_in: 0,
            preview_time: -1,
            countdown: false,
            sample_set: SampleSet::None,
            stack_leniency: 0.7,
            mode: Ruleset::Standard,
            mode_id: 0,
            letterbox_in_breaks: false,
            story_fire_in_front: false,
            special_style: false,
            widescreen_storyboard: false,
            epilepsy_warning: false,
            use_skin_sprites: false,
            circles_count: 0,
            sliders_count: 0,
            spinners_count: 0,
            length: 0,
        }
    }
}
