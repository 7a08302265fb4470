//! Timing points.

use crate::osu::types::{Effects, SampleSet, TimeSignature};

/// A timestamped tempo and sample marker.
///
/// Timing points are kept in source order; the decoder does not sort
/// them by time. A negative [`beat_length`](Self::beat_length) encodes
/// a velocity change relative to the preceding tempo point.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TimingPoint {
    /// Offset of the point in milliseconds.
    pub offset: f64,
    /// Milliseconds per beat; negative for velocity-only points.
    pub beat_length: f64,
    /// Beats per measure.
    pub time_signature: TimeSignature,
    /// The sample bank active from this point.
    pub sample_set: SampleSet,
    /// Custom sample index; 0 selects the default samples.
    pub custom_sample_set: i32,
    /// Sample volume, nominally 0 to 100.
    pub volume: i32,
    /// Whether the point inherits its tempo (the raw format stores the
    /// inverse bit).
    pub inherited: bool,
    /// Effect flags active from this point.
    pub effects: Effects,
}

impl Default for TimingPoint {
    fn default() -> Self {
        Self {
            offset: 0.0,
            beat_length: 0.0,
            time_signature: TimeSignature::default(),
            sample_set: SampleSet::None,
            custom_sample_set: 0,
            volume: 100,
            inherited: true,
            effects: Effects::empty(),
        }
    }
}
