//! Tests for position lookup and boundary navigation.

use phrasesync::tracker;
use phrasesync::Timeline;

use crate::helpers::load_fixture;

// ============================================================================
// Current phrase
// ============================================================================

#[test]
fn current_index_switches_on_the_boundary() {
    let timeline = load_fixture("conversation.json");
    assert_eq!(timeline.current_index(0), Some(0));
    assert_eq!(timeline.current_index(1099), Some(0));
    assert_eq!(timeline.current_index(1100), Some(1));
    assert_eq!(timeline.current_index(5000), Some(1));
}

#[test]
fn current_index_on_empty_timeline_is_none() {
    assert_eq!(Timeline::default().current_index(0), None);
    assert!(Timeline::default().phrase_at(42).is_none());
}

#[test]
fn every_position_maps_to_the_last_start_not_after_it() {
    let timeline = load_fixture("uneven.json");
    let starts = timeline.start_times();
    for position in 0..=1100 {
        let index = timeline.current_index(position).unwrap();
        assert!(starts[index] <= position);
        if let Some(next) = starts.get(index + 1) {
            assert!(position < *next, "position {} index {}", position, index);
        }
    }
}

// ============================================================================
// Rewind
// ============================================================================

#[test]
fn rewind_from_a_boundary_goes_to_the_previous_one() {
    let timeline = load_fixture("conversation.json");
    assert_eq!(timeline.rewind(1100), 0);
}

#[test]
fn rewind_from_the_first_boundary_wraps_to_the_last() {
    let timeline = load_fixture("conversation.json");
    assert_eq!(timeline.rewind(0), 1100);
}

#[test]
fn rewind_inside_a_phrase_goes_to_its_start() {
    let timeline = load_fixture("uneven.json");
    // 400 is inside c1 (310..715), 1030 inside a3 (1025..)
    assert_eq!(timeline.rewind(400), 310);
    assert_eq!(timeline.rewind(1030), 1025);
}

#[test]
fn rewind_on_empty_timeline_is_zero() {
    assert_eq!(tracker::rewind(&[], 500), 0);
}

// ============================================================================
// Forward
// ============================================================================

#[test]
fn forward_goes_to_the_next_boundary() {
    let timeline = load_fixture("conversation.json");
    assert_eq!(timeline.forward(0), 1100);
    assert_eq!(timeline.forward(1099), 1100);
}

#[test]
fn forward_from_the_last_boundary_wraps_to_the_first() {
    let timeline = load_fixture("conversation.json");
    assert_eq!(timeline.forward(1100), 0);
    assert_eq!(timeline.forward(9000), 0);
}

#[test]
fn forward_on_empty_timeline_is_zero() {
    assert_eq!(tracker::forward(&[], 500), 0);
}

#[test]
fn forward_always_lands_on_a_boundary() {
    let timeline = load_fixture("uneven.json");
    for position in (0..1100).step_by(7) {
        let target = timeline.forward(position);
        assert!(timeline.start_times().contains(&target));
        assert!(target > position || target == timeline.start_times()[0]);
    }
}
