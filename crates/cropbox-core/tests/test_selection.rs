use cropbox_core::geometry::{Point, Rect, Size};
use cropbox_core::selection::{DragSession, Handle, SelectionEditor};
use cropbox_core::settings::SelectionSettings;
use proptest::prelude::*;

const BOUNDS: Size = Size::new(200.0, 200.0);

fn editor() -> SelectionEditor {
    SelectionEditor::new(&SelectionSettings::default())
}

/// Editor holding [10, 10, 50, 50] with no active drag.
fn editor_with_rect() -> SelectionEditor {
    let mut e = editor();
    e.press(Point::new(10.0, 10.0), BOUNDS);
    e.drag_to(Point::new(50.0, 50.0), BOUNDS);
    e.release();
    e
}

#[test]
fn test_press_drag_creates_rectangle() {
    let e = editor_with_rect();
    assert_eq!(e.rect(), Some(Rect::new(10.0, 10.0, 50.0, 50.0)));
    assert_eq!(e.drag(), None);
}

#[test]
fn test_press_starts_degenerate_rectangle() {
    let mut e = editor();
    assert!(e.press(Point::new(30.0, 40.0), BOUNDS));
    assert_eq!(e.rect(), Some(Rect::new(30.0, 40.0, 30.0, 40.0)));
    assert_eq!(
        e.drag(),
        Some(DragSession::Create {
            anchor: Point::new(30.0, 40.0)
        })
    );
}

#[test]
fn test_create_dragging_up_left_keeps_anchor() {
    let mut e = editor();
    e.press(Point::new(50.0, 50.0), BOUNDS);
    e.drag_to(Point::new(10.0, 10.0), BOUNDS);
    assert_eq!(e.rect(), Some(Rect::new(10.0, 10.0, 50.0, 50.0)));

    e.drag_to(Point::new(20.0, 70.0), BOUNDS);
    assert_eq!(e.rect(), Some(Rect::new(20.0, 50.0, 50.0, 70.0)));
}

#[test]
fn test_create_clamps_pointer_to_bounds() {
    let mut e = editor();
    e.press(Point::new(10.0, 10.0), BOUNDS);
    e.drag_to(Point::new(500.0, -20.0), BOUNDS);
    assert_eq!(e.rect(), Some(Rect::new(10.0, 0.0, 200.0, 10.0)));
}

#[test]
fn test_press_off_image_does_not_create() {
    let mut e = editor();
    assert!(!e.press(Point::new(-5.0, 10.0), BOUNDS));
    assert!(!e.has_selection());
    assert_eq!(e.drag(), None);
}

#[test]
fn test_press_outside_existing_rectangle_is_ignored() {
    let mut e = editor_with_rect();
    assert!(!e.press(Point::new(150.0, 150.0), BOUNDS));
    assert_eq!(e.drag(), None);
    assert!(!e.drag_to(Point::new(180.0, 180.0), BOUNDS));
    assert_eq!(e.rect(), Some(Rect::new(10.0, 10.0, 50.0, 50.0)));
}

#[test]
fn test_handle_boxes_follow_edge_midpoints() {
    let e = editor_with_rect();
    assert_eq!(e.handle_box(Handle::Left), Some(Rect::new(6.0, 26.0, 14.0, 34.0)));
    assert_eq!(e.handle_box(Handle::Right), Some(Rect::new(46.0, 26.0, 54.0, 34.0)));
    assert_eq!(e.handle_box(Handle::Top), Some(Rect::new(26.0, 6.0, 34.0, 14.0)));
    assert_eq!(e.handle_box(Handle::Bottom), Some(Rect::new(26.0, 46.0, 34.0, 54.0)));
    assert_eq!(editor().handle_box(Handle::Left), None);
}

#[test]
fn test_handle_hit_takes_priority_over_interior() {
    let mut e = editor_with_rect();
    // Inside the rectangle and inside the left handle box.
    e.press(Point::new(12.0, 30.0), BOUNDS);
    assert_eq!(e.drag(), Some(DragSession::Resize(Handle::Left)));
}

#[test]
fn test_interior_press_starts_move() {
    let mut e = editor_with_rect();
    e.press(Point::new(30.0, 30.0), BOUNDS);
    assert_eq!(
        e.drag(),
        Some(DragSession::Move {
            last: Point::new(30.0, 30.0)
        })
    );
}

#[test]
fn test_handle_hit_outside_rectangle() {
    let e = editor_with_rect();
    assert_eq!(e.hit_test_handle(Point::new(7.0, 30.0)), Some(Handle::Left));
    assert_eq!(e.hit_test_handle(Point::new(30.0, 53.0)), Some(Handle::Bottom));
    assert_eq!(e.hit_test_handle(Point::new(30.0, 30.0)), None);
}

#[test]
fn test_resize_left_keeps_min_span() {
    let mut e = editor_with_rect();
    e.press(Point::new(10.0, 30.0), BOUNDS);
    e.drag_to(Point::new(100.0, 30.0), BOUNDS);
    assert_eq!(e.rect(), Some(Rect::new(45.0, 10.0, 50.0, 50.0)));
}

#[test]
fn test_resize_right_clamped_to_bounds() {
    let mut e = editor_with_rect();
    e.press(Point::new(50.0, 30.0), BOUNDS);
    assert_eq!(e.drag(), Some(DragSession::Resize(Handle::Right)));
    e.drag_to(Point::new(500.0, 30.0), BOUNDS);
    assert_eq!(e.rect(), Some(Rect::new(10.0, 10.0, 200.0, 50.0)));
}

#[test]
fn test_resize_top_and_bottom() {
    let mut e = editor_with_rect();
    e.press(Point::new(30.0, 10.0), BOUNDS);
    assert_eq!(e.drag(), Some(DragSession::Resize(Handle::Top)));
    e.drag_to(Point::new(0.0, -40.0), BOUNDS);
    assert_eq!(e.rect(), Some(Rect::new(10.0, 0.0, 50.0, 50.0)));
    e.release();

    e.press(Point::new(30.0, 50.0), BOUNDS);
    assert_eq!(e.drag(), Some(DragSession::Resize(Handle::Bottom)));
    e.drag_to(Point::new(30.0, 2.0), BOUNDS);
    assert_eq!(e.rect(), Some(Rect::new(10.0, 0.0, 50.0, 5.0)));
}

#[test]
fn test_move_clamps_and_preserves_size() {
    let mut e = editor_with_rect();
    e.press(Point::new(30.0, 30.0), BOUNDS);

    e.drag_to(Point::new(-100.0, -100.0), BOUNDS);
    assert_eq!(e.rect(), Some(Rect::new(0.0, 0.0, 40.0, 40.0)));

    e.drag_to(Point::new(200.0, 200.0), BOUNDS);
    assert_eq!(e.rect(), Some(Rect::new(160.0, 160.0, 200.0, 200.0)));

    e.drag_to(Point::new(190.0, 195.0), BOUNDS);
    assert_eq!(e.rect(), Some(Rect::new(150.0, 155.0, 190.0, 195.0)));
}

#[test]
fn test_double_click_outside_cancels() {
    let mut e = editor_with_rect();
    assert!(e.double_click(Point::new(150.0, 150.0)));
    assert!(!e.has_selection());
    assert_eq!(e.handle_box(Handle::Top), None);
}

#[test]
fn test_double_click_inside_or_on_handle_keeps_selection() {
    let mut e = editor_with_rect();
    assert!(!e.double_click(Point::new(30.0, 30.0)));
    assert!(!e.double_click(Point::new(7.0, 30.0)));
    assert!(e.has_selection());
}

#[test]
fn test_double_click_without_selection_is_noop() {
    let mut e = editor();
    assert!(!e.double_click(Point::new(30.0, 30.0)));
}

#[test]
fn test_cancel() {
    let mut e = editor_with_rect();
    assert!(e.cancel());
    assert!(!e.cancel());
}

#[test]
fn test_rescale_follows_zoom() {
    let mut e = editor_with_rect();
    e.rescale(2.0, Size::new(400.0, 400.0));
    assert_eq!(e.rect(), Some(Rect::new(20.0, 20.0, 100.0, 100.0)));
}

#[test]
fn test_rescale_clamps_to_truncated_bounds() {
    let mut e = editor();
    e.select(Rect::new(0.0, 0.0, 101.0, 101.0), Size::new(101.0, 101.0));
    e.rescale(1.2, Size::new(121.0, 121.0));
    assert_eq!(e.rect(), Some(Rect::new(0.0, 0.0, 121.0, 121.0)));
}

#[test]
fn test_select_normalizes_and_clamps() {
    let mut e = editor();
    e.select(Rect::new(250.0, 40.0, -10.0, 20.0), BOUNDS);
    assert_eq!(e.rect(), Some(Rect::new(0.0, 20.0, 200.0, 40.0)));
}

fn coord() -> impl Strategy<Value = f64> {
    -30.0..230.0f64
}

fn point() -> impl Strategy<Value = Point> {
    (coord(), coord()).prop_map(|(x, y)| Point::new(x, y))
}

/// One press, a few drags, then release; optionally cancelling first.
fn gesture() -> impl Strategy<Value = (bool, Point, Vec<Point>)> {
    (prop::bool::weighted(0.05), point(), prop::collection::vec(point(), 1..6))
}

proptest! {
    #[test]
    fn test_invariants_hold_over_drag_sequences(
        gestures in prop::collection::vec(gesture(), 1..40),
    ) {
        let mut e = editor();

        for (cancel, start, drags) in gestures {
            if cancel {
                e.cancel();
            }

            e.press(start, BOUNDS);
            let resizing = matches!(e.drag(), Some(DragSession::Resize(_)));
            let moving = matches!(e.drag(), Some(DragSession::Move { .. }));
            let before = e.rect();

            for p in drags {
                e.drag_to(p, BOUNDS);
                let Some(r) = e.rect() else {
                    continue;
                };
                prop_assert!(r.is_normalized(), "not normalized: {}", r);
                prop_assert!(r.is_within(BOUNDS), "out of bounds: {}", r);

                if let (true, Some(b)) = (resizing, before) {
                    if b.width() >= 5.0 {
                        prop_assert!(r.width() >= 5.0, "span collapsed: {}", r);
                    }
                    if b.height() >= 5.0 {
                        prop_assert!(r.height() >= 5.0, "span collapsed: {}", r);
                    }
                }
                if let (true, Some(b)) = (moving, before) {
                    prop_assert!((r.width() - b.width()).abs() < 1e-9);
                    prop_assert!((r.height() - b.height()).abs() < 1e-9);
                }
            }
            e.release();
        }
    }
}
