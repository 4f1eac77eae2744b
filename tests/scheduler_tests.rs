// Integration tests for the transition timeline

use dristicon::engine::scheduler::{Fired, PlaybackProgress, Timeline};
use dristicon::engine::settings::{OverlapPolicy, Settings, Speed};
use std::time::Duration;

fn ms(n: u64) -> Duration {
    Duration::from_millis(n)
}

fn timeline() -> Timeline<u32, &'static str> {
    Timeline::new("test", &Settings::default())
}

#[test]
fn test_flash_fires_once_at_deadline() {
    let mut tl = timeline();
    tl.flash(3);

    assert_eq!(tl.remaining(), Some(ms(500)));
    assert!(tl.advance(ms(499)).is_empty());
    assert_eq!(tl.remaining(), Some(ms(1)));
    assert_eq!(tl.advance(ms(1)), vec![Fired::Cleared(3)]);
    assert!(tl.advance(ms(1000)).is_empty());
    assert!(tl.is_idle());
}

#[test]
fn test_commit_keeps_target_highlighted_until_deadline() {
    let mut tl = timeline();
    tl.commit(1, "remove 1");

    assert_eq!(tl.highlight(), Some(1));
    assert_eq!(tl.pending(), Some(&"remove 1"));
    assert_eq!(tl.advance(ms(500)), vec![Fired::Committed("remove 1")]);
    assert_eq!(tl.highlight(), None);
    assert_eq!(tl.pending(), None);
}

#[test]
fn test_playback_event_sequence() {
    let mut tl = timeline();
    tl.play(vec![10, 20, 30]);

    assert_eq!(
        tl.playback(),
        Some(PlaybackProgress {
            shown: 1,
            total: 3,
            showing_result: false
        })
    );
    assert_eq!(tl.highlight(), Some(10));

    let events = tl.advance(ms(2500));
    assert_eq!(
        events,
        vec![
            Fired::Stepped(20),
            Fired::Stepped(30),
            Fired::ResultShown,
            Fired::Finished,
        ]
    );
    assert!(tl.is_idle());
}

#[test]
fn test_playback_small_and_large_steps_agree() {
    let mut coarse = timeline();
    let mut fine = timeline();
    coarse.play(vec![1, 2]);
    fine.play(vec![1, 2]);

    let all_at_once = coarse.advance(ms(2000));
    let mut one_by_one = Vec::new();
    for _ in 0..200 {
        one_by_one.extend(fine.advance(ms(10)));
    }
    assert_eq!(all_at_once, one_by_one);
}

#[test]
fn test_playback_result_phase_has_no_highlight() {
    let mut tl = timeline();
    tl.play(vec![7]);
    tl.advance(ms(500));

    assert_eq!(tl.highlight(), None);
    assert_eq!(tl.playback().map(|p| p.showing_result), Some(true));
    assert_eq!(tl.remaining(), Some(ms(1000)));
}

#[test]
fn test_cancel_reports_whether_anything_was_dropped() {
    let mut tl = timeline();
    assert!(!tl.cancel());
    tl.commit(0, "pop");
    assert!(tl.cancel());
    assert!(tl.advance(ms(1000)).is_empty());
}

#[test]
fn test_settle_only_under_settle_policy() {
    let mut cancel = timeline();
    cancel.commit(0, "pop");
    assert_eq!(cancel.settle(), None);
    assert_eq!(cancel.pending(), Some(&"pop"));

    let mut settle: Timeline<u32, &'static str> = Timeline::new(
        "test",
        &Settings {
            overlap: OverlapPolicy::Settle,
            ..Settings::default()
        },
    );
    settle.flash(1);
    assert_eq!(settle.settle(), None);
    assert_eq!(settle.highlight(), Some(1));

    settle.commit(0, "pop");
    assert_eq!(settle.settle(), Some("pop"));
    assert!(settle.is_idle());
}

#[test]
fn test_speed_fixed_at_request_time() {
    let mut tl = timeline();
    tl.set_speed(Speed::new(0.5));
    tl.flash(1);
    tl.set_speed(Speed::new(2.0));

    assert_eq!(tl.interval(), ms(250));
    assert_eq!(tl.next_deadline(), Some(ms(1000)));
    assert!(tl.advance(ms(999)).is_empty());
    assert_eq!(tl.advance(ms(1)), vec![Fired::Cleared(1)]);
}

#[test]
fn test_clock_keeps_running_while_idle() {
    let mut tl = timeline();
    tl.advance(ms(300));
    tl.flash(2);

    assert_eq!(tl.now(), ms(300));
    assert_eq!(tl.next_deadline(), Some(ms(800)));
}
