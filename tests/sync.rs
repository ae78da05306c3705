//! Tests for the two-speed canvas synchronization bridge.
mod common;
use common::{three_node_store, wired_store};
use nagare::prelude::*;
use std::time::{Duration, Instant};

#[test]
fn refresh_mirrors_the_store() {
    let store = wired_store();
    let mut bridge = CanvasSyncBridge::new();

    bridge.refresh(&store);

    assert_eq!(bridge.nodes(), store.nodes());
    assert_eq!(bridge.edges(), store.edges());
}

#[test]
fn refresh_is_cheap_when_nothing_changed() {
    let store = wired_store();
    let mut bridge = CanvasSyncBridge::new();
    bridge.refresh(&store);

    // Same revision: the buffer is left alone, including local edits.
    bridge.focus("2");
    bridge.type_input("draft", Instant::now());
    bridge.refresh(&store);

    let buffered = bridge.nodes().iter().find(|n| n.id == "2").unwrap();
    assert_eq!(buffered.input, "draft");
}

#[test]
fn typing_stays_local_until_blur() {
    let mut store = wired_store();
    let mut bridge = CanvasSyncBridge::new();
    bridge.refresh(&store);

    bridge.focus("2");
    bridge.type_input("hel", Instant::now());
    bridge.type_input("hello", Instant::now());

    // Nothing committed yet.
    assert_eq!(store.node("2").unwrap().input, "");

    bridge.blur(&mut store);
    assert_eq!(store.node("2").unwrap().input, "hello");
    assert!(bridge.focused().is_none());
}

#[test]
fn focused_input_survives_an_authoritative_refresh() {
    let mut store = wired_store();
    let mut bridge = CanvasSyncBridge::new();
    bridge.refresh(&store);

    bridge.focus("2");
    bridge.type_input("in progress", Instant::now());

    // An unrelated upstream mutation lands mid-edit.
    store.update_node_position("1", Position::new(5.0, 5.0));
    bridge.refresh(&store);

    let buffered = bridge.nodes().iter().find(|n| n.id == "2").unwrap();
    assert_eq!(buffered.input, "in progress");
    // The unrelated change still came through.
    let other = bridge.nodes().iter().find(|n| n.id == "1").unwrap();
    assert_eq!(other.position, Position::new(5.0, 5.0));
}

#[test]
fn deletion_wins_over_a_focused_edit() {
    let mut store = wired_store();
    let mut bridge = CanvasSyncBridge::new();
    bridge.refresh(&store);

    bridge.focus("2");
    bridge.type_input("doomed", Instant::now());

    store.delete_node("2");
    bridge.refresh(&store);

    assert!(bridge.focused().is_none());
    assert!(bridge.nodes().iter().all(|n| n.id != "2"));

    // The stale blur commit is absorbed as a no-op.
    let before = store.snapshot();
    bridge.blur(&mut store);
    assert_eq!(store.snapshot(), before);
}

#[test]
fn debounce_commits_after_the_quiet_period() {
    let mut store = wired_store();
    let mut bridge = CanvasSyncBridge::with_debounce(Duration::from_millis(300));
    bridge.refresh(&store);

    let t0 = Instant::now();
    bridge.focus("2");
    bridge.type_input("settled", t0);

    // Still inside the quiet period: no commit.
    bridge.poll(&mut store, t0 + Duration::from_millis(100));
    assert_eq!(store.node("2").unwrap().input, "");

    bridge.poll(&mut store, t0 + Duration::from_millis(350));
    assert_eq!(store.node("2").unwrap().input, "settled");
    // Focus is kept; only the pending value was flushed.
    assert_eq!(bridge.focused(), Some("2"));
}

#[test]
fn keystrokes_reset_the_debounce_window() {
    let mut store = wired_store();
    let mut bridge = CanvasSyncBridge::with_debounce(Duration::from_millis(300));
    bridge.refresh(&store);

    let t0 = Instant::now();
    bridge.focus("2");
    bridge.type_input("a", t0);
    bridge.type_input("ab", t0 + Duration::from_millis(250));

    // 300ms after the *first* keystroke, but only 50ms after the second.
    bridge.poll(&mut store, t0 + Duration::from_millis(300));
    assert_eq!(store.node("2").unwrap().input, "");

    bridge.poll(&mut store, t0 + Duration::from_millis(600));
    assert_eq!(store.node("2").unwrap().input, "ab");
}

#[test]
fn drag_stays_local_until_pointer_release() {
    let mut store = wired_store();
    let mut bridge = CanvasSyncBridge::new();
    bridge.refresh(&store);

    bridge.drag_start("1");
    bridge.drag_move(Position::new(10.0, 10.0));
    bridge.drag_move(Position::new(42.0, 24.0));

    assert_eq!(store.node("1").unwrap().position, Position::new(0.0, 0.0));

    bridge.drag_stop(&mut store);
    assert_eq!(store.node("1").unwrap().position, Position::new(42.0, 24.0));
    assert!(bridge.dragging().is_none());
}

#[test]
fn dragged_position_survives_an_authoritative_refresh() {
    let mut store = wired_store();
    let mut bridge = CanvasSyncBridge::new();
    bridge.refresh(&store);

    bridge.drag_start("1");
    bridge.drag_move(Position::new(77.0, 88.0));

    store.update_node_input("2", "typed elsewhere");
    bridge.refresh(&store);

    let dragged = bridge.nodes().iter().find(|n| n.id == "1").unwrap();
    assert_eq!(dragged.position, Position::new(77.0, 88.0));
}

#[test]
fn deletion_wins_over_a_drag_in_progress() {
    let mut store = wired_store();
    let mut bridge = CanvasSyncBridge::new();
    bridge.refresh(&store);

    bridge.drag_start("1");
    bridge.drag_move(Position::new(9.0, 9.0));

    store.delete_node("1");
    bridge.refresh(&store);

    assert!(bridge.dragging().is_none());

    let before = store.snapshot();
    bridge.drag_stop(&mut store);
    assert_eq!(store.snapshot(), before);
}

#[test]
fn focus_on_unknown_id_is_ignored() {
    let store = three_node_store();
    let mut bridge = CanvasSyncBridge::new();
    bridge.refresh(&store);

    bridge.focus("missing");
    assert!(bridge.focused().is_none());

    bridge.type_input("nowhere to go", Instant::now());
    assert!(bridge.nodes().iter().all(|n| n.input.is_empty()));
}
