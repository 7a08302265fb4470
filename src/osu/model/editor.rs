//! The `[Editor]` section.

/// Editor-only state saved with the map.
#[derive(Debug, Default, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EditorSection {
    /// Bookmarked timestamps in milliseconds.
    pub bookmarks: Vec<i32>,
    /// Distance snap multiplier.
    pub distance_spacing: f64,
    /// Beat snap divisor.
    pub beat_divisor: i32,
    /// Grid size in osu!pixels.
    pub grid_size: i32,
    /// Timeline zoom factor.
    pub timeline_zoom: f32,
}
