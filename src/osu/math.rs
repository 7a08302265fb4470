//! Timing math for slider duration derivation.

use super::model::{DifficultySection, TimingPoint};

/// Beat length assumed when a map carries no tempo point at all.
const DEFAULT_BEAT_LENGTH: f64 = 500.0;

/// The active tempo (positive) beat length at `time`: the last tempo
/// point at or before it, else the first tempo point of the map, else
/// the default. Velocity-only points are recognized by their negative
/// beat length rather than the stored inherited flag, because older
/// format revisions omit the flag entirely.
fn beat_length_at(timing_points: &[TimingPoint], time: f64) -> f64 {
    let mut tempo_points = timing_points.iter().filter(|point| point.beat_length > 0.0);
    let first = tempo_points.next();
    let active = tempo_points
        .filter(|point| point.offset <= time)
        .next_back();
    active
        .or(first)
        .map_or(DEFAULT_BEAT_LENGTH, |point| point.beat_length)
}

/// The slider velocity factor implied at `time`: `-beat_length / 100`
/// of the last velocity-only point at or before it, or 1 when none
/// applies.
fn velocity_factor_at(timing_points: &[TimingPoint], time: f64) -> f64 {
    timing_points
        .iter()
        .filter(|point| point.beat_length < 0.0 && point.offset <= time)
        .next_back()
        .map_or(1.0, |point| -point.beat_length / 100.0)
}

/// Derives the end time of a slider from its repeat count, pixel length
/// and the timing context at its start time. Ruleset-independent.
///
/// One traversal takes `pixel_length / (100 * slider_multiplier)` beats
/// scaled by the velocity factor in effect. Degenerate timing input is
/// clamped so the result never precedes the start time.
#[must_use]
pub fn slider_end_time(
    difficulty: &DifficultySection,
    timing_points: &[TimingPoint],
    start_time: i32,
    repeats: i32,
    pixel_length: f64,
) -> i32 {
    let time = f64::from(start_time);
    let beat_length = beat_length_at(timing_points, time);
    let velocity_factor = velocity_factor_at(timing_points, time);
    let beats = pixel_length / (100.0 * difficulty.slider_multiplier);
    let duration = beats * beat_length * velocity_factor * f64::from(repeats);
    // a zero multiplier or absurd length derives an infinite duration;
    // the cast saturates and the add must not overflow past it
    start_time.saturating_add(duration.max(0.0) as i32)
}
