//! End-to-end playback driven by a hand-stepped clock.

use std::time::Duration;

use phrasesync::sync::{ManualClock, PlaybackSession};
use phrasesync::{SimulatedTransport, SyncUpdate, Timeline, Transport};

use crate::helpers::load_fixture;

type Session<'a> = PlaybackSession<'a, SimulatedTransport<ManualClock>, ManualClock>;

fn open(timeline: &Timeline) -> (ManualClock, Session<'_>) {
    let clock = ManualClock::new();
    let transport = SimulatedTransport::new(clock.clone(), timeline.end_ms());
    let mut session =
        PlaybackSession::new(timeline, transport, clock.clone(), Duration::from_millis(10));
    session.open().unwrap();
    (clock, session)
}

/// Tick every 10ms until playback finishes, collecting each newly
/// selected phrase's words.
fn play_through(clock: &ManualClock, session: &mut Session<'_>) -> Vec<String> {
    let mut selected = Vec::new();
    for _ in 0..1000 {
        match session.tick() {
            SyncUpdate::Selection => {
                selected.push(session.selected().unwrap().words.clone());
            }
            SyncUpdate::Finished => return selected,
            _ => {}
        }
        clock.advance_ms(10);
    }
    panic!("playback never finished");
}

#[test]
fn playing_through_selects_every_phrase_once_in_order() {
    let timeline = load_fixture("uneven.json");
    let (clock, mut session) = open(&timeline);
    session.play().unwrap();

    let selected = play_through(&clock, &mut session);
    assert_eq!(selected, ["a1", "b1", "c1", "a2", "c2", "a3"]);

    assert!(!session.is_playing());
    assert!(session.selected().is_none());
    assert_eq!(session.position_ms(), 0);
}

#[test]
fn replay_after_finish_starts_from_the_top() {
    let timeline = load_fixture("conversation.json");
    let (clock, mut session) = open(&timeline);
    session.play().unwrap();
    assert_eq!(play_through(&clock, &mut session), ["Hi", "Hey"]);

    session.play().unwrap();
    assert_eq!(session.tick(), SyncUpdate::Selection);
    assert_eq!(session.selected_index(), Some(0));
}

#[test]
fn forward_then_rewind_walks_the_boundaries() {
    let timeline = load_fixture("conversation.json");
    let (_clock, mut session) = open(&timeline);

    assert_eq!(session.forward().unwrap(), 1100);
    assert_eq!(session.tick(), SyncUpdate::Selection);
    assert_eq!(session.selected().unwrap().speaker, "Jane");

    assert_eq!(session.rewind().unwrap(), 0);
    assert_eq!(session.tick(), SyncUpdate::Selection);
    assert_eq!(session.selected().unwrap().speaker, "John");

    // Exactly on the first boundary, rewind wraps to the last.
    assert_eq!(session.rewind().unwrap(), 1100);
}

#[test]
fn slow_status_read_does_not_undo_a_tap() {
    let timeline = load_fixture("uneven.json");
    let clock = ManualClock::new();
    let mut transport = SimulatedTransport::new(clock.clone(), timeline.end_ms());
    transport.load().unwrap();
    // A second handle reads the status the way an async host would.
    let mut reader = SimulatedTransport::new(clock.clone(), timeline.end_ms());
    reader.load().unwrap();
    reader.play(Some(0)).unwrap();

    let mut session =
        PlaybackSession::new(&timeline, transport, clock.clone(), Duration::from_millis(10));
    session.open().unwrap();
    session.play().unwrap();

    let ticket = session.begin_sample().unwrap();
    let stale = reader.status();
    session.tap(3).unwrap();

    assert_eq!(session.apply_sample(ticket, stale), SyncUpdate::Skipped);
    assert_eq!(session.selected().unwrap().words, "a2");
    assert_eq!(session.position_ms(), 715);
}

#[test]
fn seek_fraction_selects_phrase_under_the_playhead() {
    let timeline = load_fixture("conversation.json");
    let (_clock, mut session) = open(&timeline);

    assert_eq!(session.seek_fraction(0.75).unwrap(), 1200);
    assert_eq!(session.tick(), SyncUpdate::Selection);
    assert_eq!(session.selected_index(), Some(1));
    assert!((session.view().progress() - 0.75).abs() < 1e-9);
}
