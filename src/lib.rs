//! Decoder for the osu! beatmap (`.osu`) text format.
//!
//! The `.osu` format is a line-oriented, section-structured text file
//! describing one chart: metadata, timing and an ordered list of hit
//! objects for one difficulty. This crate decodes it into a strongly
//! typed [`osu::Beatmap`] in a single pass over the input lines.
//!
//! `osu` module provides the decoder itself: a bounded zero-copy line
//! tokenizer, the section state machine and per-section field decoders,
//! and the ruleset-aware hit object construction.
//!
//! `diagnostics` module provides terminal reports for decode warnings
//! and errors via `ariadne` (behind the `diagnostics` feature).
//!
//! In detail, our policies are:
//!
//! - Support only UTF-8 (as required `&str` to input).
//! - Do not interpret the storyboard scripting sub-language; its lines
//!   are accumulated verbatim for an external decoder.
//! - Do not validate beatmap semantics (playability and so on).

#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(feature = "diagnostics")]
pub mod diagnostics;
pub mod osu;
