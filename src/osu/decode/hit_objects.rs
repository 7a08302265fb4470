//! Field decoder of the `[HitObjects]` section.
//!
//! An object line is `x,y,time,type,hitSound,...`. The type code packs
//! the base shape with the new-combo bit and the combo skip count; the
//! trailing fields depend on the shape, optionally followed by a
//! `:`-separated extras group.

use super::value::{self, FieldError, Result};
use crate::osu::{
    DecodeWarning, math,
    model::{Beatmap, Extras, HitObject, HitObjectKind, HitObjectShape, SliderPath},
    split::split_bounded,
    types::{CurveType, HitSound, Position, SampleSet},
};

const NEW_COMBO_BIT: i32 = 0x4;
const COMBO_SKIP_MASK: i32 = 0x70;

/// The combo bits of a raw type code, and the shape code left after
/// clearing them. An unrecognized shape code yields `None`.
struct TypeCode {
    shape: Option<HitObjectShape>,
    new_combo: bool,
    combo_skip: u8,
}

fn decompose_type_code(raw: i32) -> TypeCode {
    let combo_skip = ((raw & COMBO_SKIP_MASK) >> 4) as u8;
    let raw = raw & !COMBO_SKIP_MASK;
    let new_combo = raw & NEW_COMBO_BIT != 0;
    let raw = raw & !NEW_COMBO_BIT;
    let shape = match raw {
        1 => Some(HitObjectShape::Circle),
        2 => Some(HitObjectShape::Slider),
        8 => Some(HitObjectShape::Spinner),
        128 => Some(HitObjectShape::Hold),
        _ => None,
    };
    TypeCode {
        shape,
        new_combo,
        combo_skip,
    }
}

pub(crate) fn decode_hit_object(
    beatmap: &mut Beatmap,
    warnings: &mut Vec<DecodeWarning>,
    line: &str,
    number: usize,
) -> Result<()> {
    let tokens = split_bounded::<10>(line, ',');
    let position = Position::new(
        value::parse_float(tokens[0])?,
        value::parse_float(positional(&tokens, 1, "y coordinate")?)?,
    );
    let start_time = value::parse_int_prefix(positional(&tokens, 2, "start time")?)?;
    let raw_code = value::parse_int_prefix(positional(&tokens, 3, "type code")?)?;
    let code = decompose_type_code(raw_code);
    let Some(shape) = code.shape else {
        warnings.push(DecodeWarning::UnknownObjectType {
            value: raw_code,
            line: number,
        });
        return Ok(());
    };
    let hit_sound = HitSound::from_bits_retain(
        value::parse_int_prefix(positional(&tokens, 4, "hit sound")?)? as u32,
    );
    let extras = match tokens.last() {
        Some(token) if token.contains(':') => decode_extras(token, shape)?,
        _ => Extras::default(),
    };

    let ruleset = beatmap.general.mode;
    let (end_time, path) = match shape {
        HitObjectShape::Circle => (start_time, None),
        HitObjectShape::Slider => {
            let path = decode_slider_path(&tokens, position)?;
            let end_time = math::slider_end_time(
                &beatmap.difficulty,
                &beatmap.timing_points,
                start_time,
                path.repeats,
                path.pixel_length,
            );
            (end_time, Some(path))
        }
        HitObjectShape::Spinner => {
            let token = positional(&tokens, 5, "spinner end time")?;
            (value::parse_int_prefix(token)?, None)
        }
        HitObjectShape::Hold => {
            let token = positional(&tokens, 5, "hold end time")?;
            let end = token.split_once(':').map_or(token, |(end, _)| end);
            (value::parse_int_prefix(end)?, None)
        }
    };

    match HitObjectKind::from_shape(shape, ruleset, path) {
        Ok(kind) => beatmap.hit_objects.push(HitObject {
            position,
            start_time,
            end_time,
            hit_sound,
            extras,
            new_combo: code.new_combo,
            combo_skip: code.combo_skip,
            ruleset,
            kind,
        }),
        Err(unsupported) => warnings.push(DecodeWarning::UnsupportedObject {
            shape: unsupported.shape,
            ruleset: unsupported.ruleset,
            line: number,
        }),
    }
    Ok(())
}

/// Decodes the slider fields: the path token at index 5, the repeat
/// count and pixel length after it, and the optional per-edge sound
/// fields. Path segments that are not an `x:y` pair are skipped.
fn decode_slider_path(tokens: &[&str], position: Position) -> Result<SliderPath> {
    let path_token = positional(tokens, 5, "slider path")?;
    let curve_type = path_token
        .chars()
        .next()
        .map_or(CurveType::default(), CurveType::from_char);
    let mut control_points = vec![position];
    // segments that are not an x:y pair carry no coordinate (the curve
    // selector, repeated anchors in degenerate paths)
    for segment in path_token.split('|') {
        let mut parts = segment.split(':');
        if let (Some(x), Some(y), None) = (parts.next(), parts.next(), parts.next()) {
            control_points.push(Position::new(
                value::parse_int(x)? as f32,
                value::parse_int(y)? as f32,
            ));
        }
    }
    let repeats = value::parse_int_prefix(positional(tokens, 6, "slider repeats")?)?;
    let pixel_length = value::parse_double(positional(tokens, 7, "slider pixel length")?)?;
    let edge_hit_sounds = match tokens.get(8) {
        Some(token) if !token.is_empty() => Some(
            token
                .split('|')
                .map(|sound| {
                    Ok(HitSound::from_bits_retain(
                        value::parse_int_prefix(sound)? as u32
                    ))
                })
                .collect::<Result<Vec<HitSound>>>()?,
        ),
        _ => None,
    };
    let edge_additions = match tokens.get(9) {
        Some(token) if !token.is_empty() => Some(
            token
                .split('|')
                .map(|pair| {
                    let (normal, addition) = pair
                        .split_once(':')
                        .ok_or(FieldError::Missing("edge addition set"))?;
                    Ok((
                        SampleSet::from_id(value::parse_int_prefix(normal)?),
                        SampleSet::from_id(value::parse_int_prefix(addition)?),
                    ))
                })
                .collect::<Result<Vec<(SampleSet, SampleSet)>>>()?,
        ),
        _ => None,
    };
    Ok(SliderPath {
        curve_type,
        control_points,
        repeats,
        pixel_length,
        edge_hit_sounds,
        edge_additions,
    })
}

/// Decodes the trailing extras group. Hold lines prepend their end time
/// to the group, so that leading sub-token is skipped for them.
fn decode_extras(token: &str, shape: HitObjectShape) -> Result<Extras> {
    let fields = split_bounded::<10>(token, ':');
    let fields = match shape {
        HitObjectShape::Hold => fields.get(1..).unwrap_or_default(),
        _ => &fields,
    };
    let mut extras = Extras {
        sample_set: SampleSet::from_id(value::parse_int_prefix(
            positional(fields, 0, "extras sample set")?,
        )?),
        addition_set: SampleSet::from_id(value::parse_int_prefix(
            positional(fields, 1, "extras addition set")?,
        )?),
        ..Extras::default()
    };
    if let Some(field) = fields.get(2) {
        extras.custom_index = value::parse_int_prefix(field)?;
    }
    if let Some(field) = fields.get(3) {
        extras.volume = value::parse_int_prefix(field)?;
    }
    if let Some(field) = fields.get(4) {
        extras.sample_filename = (*field).to_owned();
    }
    Ok(extras)
}

fn positional<'a>(tokens: &[&'a str], index: usize, what: &'static str) -> Result<&'a str> {
    tokens.get(index).copied().ok_or(FieldError::Missing(what))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::osu::types::Ruleset;

    fn decode(beatmap: &mut Beatmap, line: &str) -> Vec<DecodeWarning> {
        let mut warnings = Vec::new();
        decode_hit_object(beatmap, &mut warnings, line, 1).expect("hit object line");
        warnings
    }

    #[test]
    fn type_code_combo_bits() {
        let code = decompose_type_code(0x05);
        assert_eq!(code.shape, Some(HitObjectShape::Circle));
        assert!(code.new_combo);
        assert_eq!(code.combo_skip, 0);

        let code = decompose_type_code(0x15);
        assert_eq!(code.shape, Some(HitObjectShape::Circle));
        assert!(code.new_combo);
        assert_eq!(code.combo_skip, 1);

        let code = decompose_type_code(0x84);
        assert_eq!(code.shape, Some(HitObjectShape::Hold));
        assert!(code.new_combo);

        assert!(decompose_type_code(0x40).shape.is_none());
    }

    #[test]
    fn circle_with_default_extras() {
        let mut beatmap = Beatmap::default();
        let warnings = decode(&mut beatmap, "256,192,1000,1,0,0:0:0:0:");
        assert!(warnings.is_empty());
        let object = &beatmap.hit_objects[0];
        assert_eq!(object.position, Position::new(256.0, 192.0));
        assert_eq!(object.start_time, 1000);
        assert_eq!(object.end_time, 1000);
        assert_eq!(object.extras, Extras::default());
        assert_eq!(object.kind, HitObjectKind::Circle);
    }

    #[test]
    fn linear_slider_path() {
        let mut beatmap = Beatmap::default();
        beatmap.difficulty.slider_multiplier = 1.0;
        let warnings = decode(&mut beatmap, "100,100,500,2,0,L|150:100,1,100,0:0,0:0:0:0:");
        assert!(warnings.is_empty());
        let object = &beatmap.hit_objects[0];
        let HitObjectKind::Slider(path) = &object.kind else {
            panic!("expected a slider, got {:?}", object.kind);
        };
        assert_eq!(path.curve_type, CurveType::Linear);
        assert_eq!(
            path.control_points,
            vec![Position::new(100.0, 100.0), Position::new(150.0, 100.0)]
        );
        assert_eq!(path.repeats, 1);
        assert_eq!(path.pixel_length, 100.0);
        assert!(object.end_time > object.start_time);
    }

    #[test]
    fn slider_edge_sounds_and_additions() {
        let mut beatmap = Beatmap::default();
        beatmap.difficulty.slider_multiplier = 1.4;
        decode(
            &mut beatmap,
            "100,100,500,2,0,B|150:100|200:150,2,200,2|0|2,1:2|0:0|3:0,0:0:0:0:",
        );
        let HitObjectKind::Slider(path) = &beatmap.hit_objects[0].kind else {
            panic!("expected a slider");
        };
        assert_eq!(path.curve_type, CurveType::Bezier);
        assert_eq!(path.control_points.len(), 3);
        assert_eq!(
            path.edge_hit_sounds.as_deref(),
            Some(&[HitSound::WHISTLE, HitSound::empty(), HitSound::WHISTLE][..])
        );
        assert_eq!(
            path.edge_additions.as_deref(),
            Some(
                &[
                    (SampleSet::Normal, SampleSet::Soft),
                    (SampleSet::None, SampleSet::None),
                    (SampleSet::Drum, SampleSet::None),
                ][..]
            )
        );
    }

    #[test]
    fn spinner_end_time() {
        let mut beatmap = Beatmap::default();
        let warnings = decode(&mut beatmap, "256,192,1000,12,0,3000,0:0:0:0:");
        assert!(warnings.is_empty());
        let object = &beatmap.hit_objects[0];
        assert_eq!(object.kind, HitObjectKind::Spinner);
        assert_eq!(object.end_time, 3000);
        assert!(object.new_combo);
    }

    #[test]
    fn mania_hold_extras_skip_end_time() {
        let mut beatmap = Beatmap::default();
        beatmap.general.mode = Ruleset::Mania;
        let warnings = decode(&mut beatmap, "64,192,1000,128,0,2500:1:2:0:40:hit.wav");
        assert!(warnings.is_empty());
        let object = &beatmap.hit_objects[0];
        assert_eq!(object.kind, HitObjectKind::Hold);
        assert_eq!(object.end_time, 2500);
        assert_eq!(
            object.extras,
            Extras {
                sample_set: SampleSet::Normal,
                addition_set: SampleSet::Soft,
                custom_index: 0,
                volume: 40,
                sample_filename: "hit.wav".to_owned(),
            }
        );
    }

    #[test]
    fn mania_spinner_warns_and_is_dropped() {
        let mut beatmap = Beatmap::default();
        beatmap.general.mode = Ruleset::Mania;
        let warnings = decode(&mut beatmap, "256,192,1000,8,0,3000,0:0:0:0:");
        assert_eq!(
            warnings,
            vec![DecodeWarning::UnsupportedObject {
                shape: HitObjectShape::Spinner,
                ruleset: Ruleset::Mania,
                line: 1,
            }]
        );
        assert!(beatmap.hit_objects.is_empty());
    }

    #[test]
    fn hold_outside_mania_warns_and_is_dropped() {
        let mut beatmap = Beatmap::default();
        let warnings = decode(&mut beatmap, "64,192,1000,128,0,2500:0:0:0:0:");
        assert_eq!(
            warnings,
            vec![DecodeWarning::UnsupportedObject {
                shape: HitObjectShape::Hold,
                ruleset: Ruleset::Standard,
                line: 1,
            }]
        );
        assert!(beatmap.hit_objects.is_empty());
    }

    #[test]
    fn unknown_shape_warns_and_is_dropped() {
        let mut beatmap = Beatmap::default();
        let warnings = decode(&mut beatmap, "256,192,1000,64,0");
        assert_eq!(
            warnings,
            vec![DecodeWarning::UnknownObjectType { value: 64, line: 1 }]
        );
        assert!(beatmap.hit_objects.is_empty());
    }

    #[test]
    fn mania_slider_becomes_hold() {
        let mut beatmap = Beatmap::default();
        beatmap.general.mode = Ruleset::Mania;
        beatmap.difficulty.slider_multiplier = 1.0;
        let warnings = decode(&mut beatmap, "64,192,1000,2,0,L|64:300,1,100");
        assert!(warnings.is_empty());
        let object = &beatmap.hit_objects[0];
        assert_eq!(object.kind, HitObjectKind::Hold);
        assert!(object.end_time > object.start_time);
    }
}
