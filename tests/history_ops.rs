use egui::{pos2, Color32};
use sketchpad::{Drawable, History, Sticker, Stroke};

fn stroke_s1() -> Drawable {
    Drawable::Stroke(Stroke::with_points(
        vec![pos2(0.0, 0.0), pos2(5.0, 5.0)],
        2.0,
        Color32::BLACK,
    ))
}

fn sticker_at(x: f32, y: f32) -> Drawable {
    Drawable::Sticker(Sticker::new("⭐", pos2(x, y)))
}

// Scenario A: stroke S1 then sticker G1.
fn scene_a() -> History {
    let mut history = History::new();
    history.commit(stroke_s1());
    history.commit(sticker_at(10.0, 10.0));
    history
}

#[test]
fn commit_appends_in_order_with_empty_redo_buffer() {
    let history = scene_a();
    assert_eq!(
        history.committed(),
        [stroke_s1(), sticker_at(10.0, 10.0)].as_slice()
    );
    assert!(history.undone().is_empty());
}

#[test]
fn undo_moves_last_commit_to_redo_buffer() {
    let mut history = scene_a();
    history.undo();
    assert_eq!(history.committed(), [stroke_s1()].as_slice());
    assert_eq!(history.undone(), [sticker_at(10.0, 10.0)].as_slice());
}

#[test]
fn redo_restores_most_recently_undone_first() {
    let mut history = scene_a();
    history.undo();
    history.redo();
    assert_eq!(
        history.committed(),
        [stroke_s1(), sticker_at(10.0, 10.0)].as_slice()
    );
    assert!(history.undone().is_empty());
}

#[test]
fn double_undo_stacks_most_recently_undone_last() {
    let mut history = scene_a();
    history.undo();
    history.undo();
    assert!(history.committed().is_empty());
    assert_eq!(
        history.undone(),
        [sticker_at(10.0, 10.0), stroke_s1()].as_slice()
    );
}

#[test]
fn commit_clears_pending_redo_history() {
    let mut history = scene_a();
    history.undo();
    history.undo();

    history.commit(sticker_at(40.0, 40.0));
    assert_eq!(history.committed(), [sticker_at(40.0, 40.0)].as_slice());
    assert!(history.undone().is_empty());
}

#[test]
fn undo_on_empty_committed_is_a_silent_noop() {
    let mut history = History::new();
    history.undo();
    assert!(history.committed().is_empty());
    assert!(history.undone().is_empty());

    // Same for redo with nothing undone.
    history.commit(stroke_s1());
    history.redo();
    assert_eq!(history.committed(), [stroke_s1()].as_slice());
}

#[test]
fn undo_redo_round_trip_restores_committed_exactly() {
    for k in 0..=5usize {
        let mut history = History::new();
        for i in 0..5 {
            history.commit(sticker_at(i as f32, i as f32));
        }
        let before = history.committed().to_vec();

        for _ in 0..k {
            history.undo();
        }
        for _ in 0..k {
            history.redo();
        }
        assert_eq!(history.committed(), before.as_slice());
        assert!(history.undone().is_empty());
    }
}

#[test]
fn clear_all_empties_both_stacks() {
    let mut history = scene_a();
    history.undo();
    history.clear_all();
    assert!(history.committed().is_empty());
    assert!(history.undone().is_empty());
    assert!(!history.can_undo());
    assert!(!history.can_redo());
}
