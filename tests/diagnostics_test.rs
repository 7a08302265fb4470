//! Test diagnostics module functionality

use osu_rs::diagnostics::{SimpleSource, ToAriadne, emit_decode_warnings};
use osu_rs::osu::{DecodeWarning, decode_beatmap};

#[test]
fn simple_source_resolves_line_spans() {
    let source_text = "osu file format v14\n[General]\nMode: 9\n";
    let source = SimpleSource::new("test.osu", source_text);

    assert_eq!(source.name(), "test.osu");
    assert_eq!(source.text(), source_text);
    assert_eq!(&source_text[source.line_span(3)], "Mode: 9");
}

#[test]
fn warnings_render_against_their_lines() {
    let source = "osu file format v14\n\
                  [General]\n\
                  Mode: 3\n\
                  [HitObjects]\n\
                  256,192,1000,8,0,3000,0:0:0:0:\n";
    let output = decode_beatmap(source).expect("decode");
    assert_eq!(output.warnings.len(), 1);

    let simple = SimpleSource::new("test.osu", source);
    for warning in &output.warnings {
        let span = simple.line_span(warning.line());
        assert_eq!(&source[span], "256,192,1000,8,0,3000,0:0:0:0:");
        let _report = warning.to_report(&simple);
    }

    // just verifies the batch renderer runs over real warnings
    emit_decode_warnings("test.osu", source, &output.warnings);
}

#[test]
fn empty_warning_list_renders_nothing() {
    let empty: Vec<DecodeWarning> = vec![];
    emit_decode_warnings("test.osu", "osu file format v14\n", &empty);
}
