//! The `[Events]` section.

/// A gameplay break period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BreakEvent {
    /// Start of the break in milliseconds.
    pub start_time: i32,
    /// End of the break in milliseconds.
    pub end_time: i32,
}

impl BreakEvent {
    /// Creates a new break event.
    #[must_use]
    pub const fn new(start_time: i32, end_time: i32) -> Self {
        Self {
            start_time,
            end_time,
        }
    }
}

/// Background, video and break events, plus the raw storyboard script.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EventsSection {
    /// The background image filename, quotes stripped.
    pub background_image: String,
    /// The background video filename, quotes stripped.
    pub video: String,
    /// Start offset of the background video in milliseconds.
    pub video_offset: i32,
    /// Break periods in source order.
    pub breaks: Vec<BreakEvent>,
    /// Storyboard script lines, verbatim and in source order, for an
    /// external storyboard decoder. This crate does not interpret them.
    pub storyboard_lines: Vec<String>,
}
