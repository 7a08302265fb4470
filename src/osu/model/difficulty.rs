//! The `[Difficulty]` section.

/// Difficulty settings of the map.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DifficultySection {
    /// Health drain rate (HP).
    pub hp_drain_rate: f32,
    /// Circle size (CS); column count under the mania ruleset.
    pub circle_size: f32,
    /// Overall difficulty (OD).
    pub overall_difficulty: f32,
    /// Approach rate (AR).
    pub approach_rate: f32,
    /// Base slider velocity in hundreds of osu!pixels per beat.
    pub slider_multiplier: f64,
    /// Slider ticks per beat.
    pub slider_tick_rate: f64,
}

impl Default for DifficultySection {
    fn default() -> Self {
        Self {
            hp_drain_rate: 0.0,
            circle_size: 0.0,
            overall_difficulty: 0.0,
            approach_rate: 0.0,
            slider_multiplier: 1.4,
            slider_tick_rate: 1.0,
        }
    }
}
