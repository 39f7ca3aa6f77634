//! Tests for loading scripts and building timelines.

use phrasesync::{build, Phrase, ScriptError, Speaker, TimedPhrase, Timeline};

use crate::helpers::{fixture, load_fixture, temp_fixture};

fn timed(speaker: &str, words: &str, start_time: u64) -> TimedPhrase {
    TimedPhrase {
        speaker: speaker.to_string(),
        words: words.to_string(),
        start_time,
    }
}

// ============================================================================
// Building
// ============================================================================

#[test]
fn two_speakers_take_turns() {
    let timeline = load_fixture("conversation.json");
    assert_eq!(
        timeline.phrases(),
        &[timed("John", "Hi", 0), timed("Jane", "Hey", 1100)]
    );
    assert_eq!(timeline.end_ms(), 1600);
}

#[test]
fn exhausted_speakers_drop_out_of_later_turns() {
    let timeline = load_fixture("uneven.json");
    let order: Vec<(&str, &str, u64)> = timeline
        .phrases()
        .iter()
        .map(|p| (p.speaker.as_str(), p.words.as_str(), p.start_time))
        .collect();
    assert_eq!(
        order,
        [
            ("A", "a1", 0),
            ("B", "b1", 105),
            ("C", "c1", 310),
            ("A", "a2", 715),
            ("C", "c2", 1020),
            ("A", "a3", 1025),
        ]
    );
    assert_eq!(timeline.end_ms(), 1035);
}

#[test]
fn empty_script_gives_empty_timeline() {
    let timeline = load_fixture("empty.json");
    assert!(timeline.is_empty());
    assert_eq!(timeline.end_ms(), 0);
}

#[test]
fn speakers_without_phrases_are_skipped() {
    let speakers = vec![
        Speaker::new("Silent", vec![]),
        Speaker::new("Talker", vec![Phrase::new("one", 10), Phrase::new("two", 10)]),
    ];
    assert_eq!(
        build(&speakers, 1),
        vec![timed("Talker", "one", 0), timed("Talker", "two", 11)]
    );
}

#[test]
fn timeline_serializes_with_camel_case_start() {
    let timeline = load_fixture("conversation.json");
    let json = serde_json::to_value(timeline.phrases()).unwrap();
    assert_eq!(json[1]["startTime"], 1100);
    assert_eq!(json[1]["speaker"], "Jane");
    assert_eq!(json[1]["words"], "Hey");
}

// ============================================================================
// Loading errors
// ============================================================================

#[test]
fn negative_duration_is_rejected() {
    let err = Timeline::load(fixture("invalid.json")).unwrap_err();
    assert!(matches!(err, ScriptError::Parse(_)));
}

#[test]
fn missing_file_reports_path() {
    let err = Timeline::load(fixture("does-not-exist.json")).unwrap_err();
    assert!(matches!(err, ScriptError::Read { .. }));
    assert!(err.to_string().contains("does-not-exist.json"));
}

#[test]
fn duplicate_speaker_names_are_rejected() {
    let (_dir, path) = temp_fixture(
        "dup.json",
        r#"{"speakers":[{"name":"A","phrases":[]},{"name":"A","phrases":[]}],"pause":0}"#,
    );
    let err = Timeline::load(&path).unwrap_err();
    assert!(matches!(err, ScriptError::DuplicateSpeaker { .. }));
}

#[test]
fn zero_length_phrases_with_shared_start_are_rejected() {
    // A says two zero-length phrases with no pause; both start at 0.
    let (_dir, path) = temp_fixture(
        "zero.json",
        r#"{"speakers":[{"name":"A","phrases":[{"words":"x","time":0},{"words":"y","time":0}]}],"pause":0}"#,
    );
    let err = Timeline::load(&path).unwrap_err();
    assert!(matches!(
        err,
        ScriptError::DuplicatePhraseKey { start_ms: 0, .. }
    ));
}
