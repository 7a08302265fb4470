//! Field decoder of the `[Events]` section.
//!
//! Only background, video and break events are decoded into fields.
//! Storyboard declarations and their indented command lines are kept
//! verbatim for an external storyboard decoder, and unrecognized event
//! kinds are dropped.

use super::value::{self, FieldError, Result};
use crate::osu::{model::{BreakEvent, EventsSection}, split::split_bounded, types::EventType};

pub(crate) fn decode_events(
    events: &mut EventsSection,
    storyboard_lines: &mut Vec<String>,
    line: &str,
) -> Result<()> {
    let tokens = split_bounded::<3>(line, ',');
    let kind = match EventType::from_token(tokens[0]) {
        Some(kind) => kind,
        // command lines continue the preceding storyboard declaration
        None if line.starts_with([' ', '_']) => EventType::StoryboardCommand,
        None => return Ok(()),
    };
    match kind {
        EventType::Background => {
            events.background_image = positional(&tokens, 2, "background filename")?
                .trim_matches('"')
                .to_owned();
        }
        EventType::Video => {
            events.video_offset = value::parse_int_prefix(positional(&tokens, 1, "video offset")?)?;
            events.video = positional(&tokens, 2, "video filename")?
                .trim_matches('"')
                .to_owned();
        }
        EventType::Break => {
            // the third slice may absorb extra fields, so the end time
            // reads its numeric prefix only
            let start_time = value::parse_int_prefix(positional(&tokens, 1, "break start")?)?;
            let end_time = value::parse_int_prefix(positional(&tokens, 2, "break end")?)?;
            events.breaks.push(BreakEvent::new(start_time, end_time));
        }
        EventType::Colour => {}
        EventType::Sprite
        | EventType::Sample
        | EventType::Animation
        | EventType::StoryboardCommand => storyboard_lines.push(line.to_owned()),
    }
    Ok(())
}

fn positional<'a>(tokens: &[&'a str], index: usize, what: &'static str) -> Result<&'a str> {
    tokens.get(index).copied().ok_or(FieldError::Missing(what))
}
