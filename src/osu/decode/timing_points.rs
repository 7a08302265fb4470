//! Field decoder of the `[TimingPoints]` section.

use super::value::{self, Result};
use crate::osu::{
    model::TimingPoint,
    split::split_bounded,
    types::{Effects, SampleSet, TimeSignature},
};

/// Decodes one timing point line.
///
/// Only the offset and beat length are mandatory; the remaining fields
/// keep their defaults when the line ends early. The offset may be
/// written fractionally in the wild and is truncated toward zero.
pub(crate) fn decode_timing_point(timing_points: &mut Vec<TimingPoint>, line: &str) -> Result<()> {
    let tokens = split_bounded::<8>(line, ',');
    let mut point = TimingPoint {
        offset: f64::from(value::parse_float(tokens[0])? as i32),
        beat_length: value::parse_double(tokens.get(1).copied().unwrap_or_default())?,
        ..TimingPoint::default()
    };
    if let Some(token) = tokens.get(2) {
        point.time_signature = TimeSignature(value::parse_int(token)?);
    }
    if let Some(token) = tokens.get(3) {
        point.sample_set = SampleSet::from_id(value::parse_int(token)?);
    }
    if let Some(token) = tokens.get(4) {
        point.custom_sample_set = value::parse_int(token)?;
    }
    if let Some(token) = tokens.get(5) {
        point.volume = value::parse_int(token)?;
    }
    // the raw bit stores "uninherited", so the stored flag is inverted
    if let Some(token) = tokens.get(6) {
        point.inherited = !value::parse_bool(token);
    }
    if let Some(token) = tokens.get(7) {
        point.effects = Effects::from_bits_retain(value::parse_int(token)? as u32);
    }
    timing_points.push(point);
    Ok(())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn decode(line: &str) -> TimingPoint {
        let mut points = Vec::new();
        decode_timing_point(&mut points, line).expect("timing point");
        points.pop().expect("one point")
    }

    #[test]
    fn full_tempo_point() {
        assert_eq!(
            decode("0,500,4,2,0,100,1,0"),
            TimingPoint {
                offset: 0.0,
                beat_length: 500.0,
                time_signature: TimeSignature::SIMPLE_QUADRUPLE,
                sample_set: SampleSet::Soft,
                custom_sample_set: 0,
                volume: 100,
                inherited: false,
                effects: Effects::empty(),
            }
        );
    }

    #[test]
    fn short_line_keeps_defaults() {
        assert_eq!(
            decode("1000,-50"),
            TimingPoint {
                offset: 1000.0,
                beat_length: -50.0,
                ..TimingPoint::default()
            }
        );
    }

    #[test]
    fn fractional_offset_truncates_toward_zero() {
        assert_eq!(decode("1234.7,500").offset, 1234.0);
        assert_eq!(decode("-3.9,500").offset, -3.0);
    }

    #[test]
    fn kiai_flag_survives_unknown_bits() {
        let point = decode("0,500,4,1,0,70,1,9");
        assert!(point.effects.contains(Effects::KIAI));
        assert!(point.effects.contains(Effects::OMIT_FIRST_BARLINE));
    }

    #[test]
    fn missing_beat_length_is_rejected() {
        let mut points = Vec::new();
        assert!(decode_timing_point(&mut points, "1000").is_err());
        assert!(points.is_empty());
    }
}
