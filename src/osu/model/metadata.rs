//! The `[Metadata]` section.

/// Descriptive metadata of the map.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MetadataSection {
    /// Romanised song title.
    pub title: String,
    /// Song title in its original script.
    pub title_unicode: String,
    /// Romanised artist name.
    pub artist: String,
    /// Artist name in its original script.
    pub artist_unicode: String,
    /// The mapper.
    pub creator: String,
    /// The difficulty name of this chart.
    pub version: String,
    /// Where the song comes from.
    pub source: String,
    /// Search tags, split on commas and spaces.
    pub tags: Vec<String>,
    /// Online id of this difficulty.
    pub beatmap_id: i32,
    /// Online id of the map set.
    pub beatmap_set_id: i32,
}
