//! The `[Colours]` section.

use crate::osu::types::Colour;

/// Combo colours and slider colour overrides.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ColoursSection {
    /// Combo colours in source order (`Combo1`, `Combo2`, ...).
    pub combo_colours: Vec<Colour>,
    /// Override of the slider track colour, when present.
    pub slider_track_override: Option<Colour>,
    /// Override of the slider border colour, when present.
    pub slider_border: Option<Colour>,
}
