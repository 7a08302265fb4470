//! Field decoders of the key/value sections.
//!
//! Each decoder receives one validated line, splits it once on the
//! first `:` and dispatches on the key. Unrecognized keys are ignored,
//! not errors; the grammar grew keys over format revisions and older
//! consumers must stay tolerant.

use super::value::{self, FieldError, Result};
use crate::osu::{
    DecodeWarning,
    model::{ColoursSection, DifficultySection, EditorSection, GeneralSection, MetadataSection},
    split::split_bounded,
    types::{Colour, Ruleset, SampleSet},
};

pub(crate) fn decode_general(
    general: &mut GeneralSection,
    warnings: &mut Vec<DecodeWarning>,
    line: &str,
    number: usize,
) -> Result<()> {
    let (key, value) = value::split_key_value(line);
    match key {
        "AudioFilename" => general.audio_filename = value.trim().to_owned(),
        "AudioLeadIn" => general.audio_lead_in = value::parse_int(value)?,
        "PreviewTime" => general.preview_time = value::parse_int(value)?,
        "Countdown" => general.countdown = value::parse_bool(value),
        "SampleSet" => {
            general.sample_set =
                SampleSet::from_name(value).ok_or_else(|| FieldError::UnknownVariant {
                    what: "sample set",
                    value: value.to_owned(),
                })?;
        }
        "StackLeniency" => general.stack_leniency = value::parse_double(value)?,
        "Mode" => {
            let id = value::parse_int(value)?;
            general.mode_id = id;
            general.mode = Ruleset::from_id(id).unwrap_or_else(|| {
                warnings.push(DecodeWarning::UnknownRuleset { id, line: number });
                Ruleset::Standard
            });
        }
        "LetterboxInBreaks" => general.letterbox_in_breaks = value::parse_bool(value),
        "StoryFireInFront" => general.story_fire_in_front = value::parse_bool(value),
        "SpecialStyle" => general.special_style = value::parse_bool(value),
        "WidescreenStoryboard" => general.widescreen_storyboard = value::parse_bool(value),
        "EpilepsyWarning" => general.epilepsy_warning = value::parse_bool(value),
        "UseSkinSprites" => general.use_skin_sprites = value::parse_bool(value),
        _ => {}
    }
    Ok(())
}

pub(crate) fn decode_editor(editor: &mut EditorSection, line: &str) -> Result<()> {
    let (key, value) = value::split_key_value(line);
    match key {
        "Bookmarks" => editor.bookmarks = decode_bookmarks(value)?,
        "DistanceSpacing" => editor.distance_spacing = value::parse_double(value)?,
        "BeatDivisor" => editor.beat_divisor = value::parse_int(value)?,
        "GridSize" => editor.grid_size = value::parse_int(value)?,
        "TimelineZoom" => editor.timeline_zoom = value::parse_float(value)?,
        _ => {}
    }
    Ok(())
}

/// Empty segments (double commas) become a sentinel minimum that is
/// filtered out afterwards, so surrounding entries keep their
/// positions during the parse.
fn decode_bookmarks(value: &str) -> Result<Vec<i32>> {
    const EMPTY_BOOKMARK: i32 = i32::MIN;
    let entries = value
        .split(',')
        .map(|segment| {
            if segment.is_empty() {
                Ok(EMPTY_BOOKMARK)
            } else {
                value::parse_int(segment)
            }
        })
        .collect::<Result<Vec<i32>>>()?;
    Ok(entries
        .into_iter()
        .filter(|&entry| entry > EMPTY_BOOKMARK)
        .collect())
}

pub(crate) fn decode_metadata(metadata: &mut MetadataSection, line: &str) -> Result<()> {
    let (key, value) = value::split_key_value(line);
    match key {
        "Title" => metadata.title = value.to_owned(),
        "TitleUnicode" => metadata.title_unicode = value.to_owned(),
        "Artist" => metadata.artist = value.to_owned(),
        "ArtistUnicode" => metadata.artist_unicode = value.to_owned(),
        "Creator" => metadata.creator = value.to_owned(),
        "Version" => metadata.version = value.to_owned(),
        "Source" => metadata.source = value.to_owned(),
        "Tags" => {
            metadata.tags = value
                .split([',', ' '])
                .filter(|tag| !tag.is_empty())
                .map(ToOwned::to_owned)
                .collect();
        }
        "BeatmapID" => metadata.beatmap_id = value::parse_int(value)?,
        "BeatmapSetID" => metadata.beatmap_set_id = value::parse_int(value)?,
        _ => {}
    }
    Ok(())
}

pub(crate) fn decode_difficulty(difficulty: &mut DifficultySection, line: &str) -> Result<()> {
    let (key, value) = value::split_key_value(line);
    match key {
        "HPDrainRate" => difficulty.hp_drain_rate = value::parse_float(value)?,
        "CircleSize" => difficulty.circle_size = value::parse_float(value)?,
        "OverallDifficulty" => difficulty.overall_difficulty = value::parse_float(value)?,
        "ApproachRate" => difficulty.approach_rate = value::parse_float(value)?,
        "SliderMultiplier" => difficulty.slider_multiplier = value::parse_double(value)?,
        "SliderTickRate" => difficulty.slider_tick_rate = value::parse_double(value)?,
        _ => {}
    }
    Ok(())
}

/// Unlike the other key/value sections, combo colour keys carry
/// trailing spaces in the wild, so the key side is trimmed here.
pub(crate) fn decode_colours(colours: &mut ColoursSection, line: &str) -> Result<()> {
    let (key, value) = value::split_key_value(line);
    match key.trim() {
        "SliderTrackOverride" => colours.slider_track_override = Some(decode_colour(value)?),
        "SliderBorder" => colours.slider_border = Some(decode_colour(value)?),
        _ => colours.combo_colours.push(decode_colour(value)?),
    }
    Ok(())
}

fn decode_colour(value: &str) -> Result<Colour> {
    let channels = split_bounded::<4>(value, ',');
    let mut channels = channels.iter();
    let mut next = |what| {
        channels
            .next()
            .ok_or(FieldError::Missing(what))
            .and_then(|channel| Ok(channel.trim().parse::<u8>()?))
    };
    let red = next("red channel")?;
    let green = next("green channel")?;
    let blue = next("blue channel")?;
    let alpha = match channels.next() {
        Some(channel) => channel.trim().parse::<u8>()?,
        None => 255,
    };
    Ok(Colour {
        red,
        green,
        blue,
        alpha,
    })
}
