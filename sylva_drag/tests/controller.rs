// Copyright 2026 the Sylva Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Behavior of the drag controller against a recording host.

use kurbo::{Point, Vec2};
use sylva_drag::recording::{HostCall, RecordingHost};
use sylva_drag::{Cursor, CursorRegion, DragController, DragTarget};
use sylva_view::ViewState;

fn view_with_zoom(x: f64, y: f64) -> ViewState {
    let mut view = ViewState::default();
    view.zoom = Vec2::new(x, y);
    view
}

#[test]
fn moves_without_gesture_leave_view_untouched() {
    let mut view = view_with_zoom(3.0, 0.5);
    view.minimap.visible = true;
    let before = view.clone();
    let mut host = RecordingHost::new(640.0);
    let mut drag = DragController::new();

    for (x, y) in [(0.0, 0.0), (25.0, -3.0), (1e6, 1e6), (-40.0, 12.5)] {
        drag.move_to(&mut view, &mut host, Point::new(x, y));
    }

    assert_eq!(view, before);
    assert!(host.calls().is_empty());
    assert!(!drag.end(&view, &mut host));
    assert!(host.calls().is_empty());
}

#[test]
fn moves_after_end_are_ignored() {
    let mut view = ViewState::default();
    let mut host = RecordingHost::new(640.0);
    let mut drag = DragController::new();

    drag.begin(&mut host, Point::new(0.0, 0.0), DragTarget::TreePanel);
    drag.move_to(&mut view, &mut host, Point::new(5.0, 5.0));
    drag.end(&view, &mut host);
    let settled = view.clone();

    drag.move_to(&mut view, &mut host, Point::new(50.0, 50.0));
    assert_eq!(view, settled);
}

#[test]
fn split_ratio_stays_in_range_at_every_step() {
    let mut view = ViewState::default();
    let mut host = RecordingHost::new(200.0);
    let mut drag = DragController::new();

    drag.begin(&mut host, Point::new(0.0, 0.0), DragTarget::SplitHandle);
    let path = [100.0, 400.0, -900.0, -2_000.0, -1_990.0, 5_000.0, 4_999.0];
    for x in path {
        drag.move_to(&mut view, &mut host, Point::new(x, 0.0));
        let ratio = view.split_ratio.get();
        assert!((1.0..=99.0).contains(&ratio), "ratio {ratio} out of range");
    }
    assert_eq!(view.split_ratio.get(), 98.5);
}

#[test]
fn split_drag_resizes_aligned_panel_and_retargets_surface() {
    let mut view = ViewState::default();
    let mut host = RecordingHost::new(400.0);
    let mut drag = DragController::new();

    drag.begin(&mut host, Point::new(300.0, 10.0), DragTarget::SplitHandle);
    host.clear_calls();
    drag.move_to(&mut view, &mut host, Point::new(260.0, 50.0));

    assert_eq!(view.split_ratio.get(), 70.0);
    assert_eq!(
        host.calls(),
        &[
            HostCall::SetAlignedWidth(30.0),
            HostCall::RetargetAlignedSurface,
            HostCall::RefreshInfoPanel,
        ]
    );
    assert!(drag.has_moved());
    // Split drags never pan.
    assert_eq!(view.pan_offset, Point::ZERO);
}

#[test]
fn zero_width_tree_panel_leaves_ratio_alone() {
    let mut view = ViewState::default();
    let mut host = RecordingHost::new(0.0);
    let mut drag = DragController::new();

    drag.begin(&mut host, Point::new(0.0, 0.0), DragTarget::SplitHandle);
    drag.move_to(&mut view, &mut host, Point::new(30.0, 0.0));

    assert_eq!(view.split_ratio.get(), 80.0);
}

#[test]
fn tree_pan_is_zoom_independent() {
    for zoom in [0.25, 0.5, 1.0, 2.0, 8.0, 1000.0] {
        let mut view = view_with_zoom(zoom, zoom * 2.0);
        let mut host = RecordingHost::new(800.0);
        let mut drag = DragController::new();

        drag.begin(&mut host, Point::new(50.0, 50.0), DragTarget::TreePanel);
        drag.move_to(&mut view, &mut host, Point::new(62.0, 44.0));

        let expected = Point::new(-12.0 / zoom, 6.0 / (zoom * 2.0));
        assert!(
            (view.pan_offset - expected).hypot() < 1e-12,
            "zoom {zoom}: pan {:?} != {expected:?}",
            view.pan_offset
        );
        assert_eq!(host.last_tree_translation(), Some(Vec2::new(12.0, -6.0)));
    }
}

#[test]
fn tree_translation_is_relative_to_gesture_start() {
    let mut view = view_with_zoom(4.0, 4.0);
    let mut host = RecordingHost::new(800.0);
    let mut drag = DragController::new();

    drag.begin(&mut host, Point::new(10.0, 10.0), DragTarget::TreePanel);
    drag.move_to(&mut view, &mut host, Point::new(14.0, 18.0));
    drag.move_to(&mut view, &mut host, Point::new(22.0, 26.0));

    assert_eq!(host.last_tree_translation(), Some(Vec2::new(12.0, 16.0)));
    assert_eq!(view.pan_offset, Point::new(-3.0, -4.0));
}

#[test]
fn minimap_drag_pans_inversely_and_magnified() {
    let mut view = view_with_zoom(2.0, 2.0);
    view.minimap.zoom = Vec2::new(1.0, 1.0);
    let mut host = RecordingHost::new(800.0);
    let mut drag = DragController::new();

    drag.begin(&mut host, Point::new(0.0, 0.0), DragTarget::MinimapRect);
    drag.move_to(&mut view, &mut host, Point::new(10.0, 0.0));

    assert_eq!(host.last_tree_translation(), Some(Vec2::new(-20.0, 0.0)));
    assert_eq!(view.pan_offset, Point::new(10.0, 0.0));
}

#[test]
fn minimap_overlay_updates_only_when_visible() {
    let mut view = ViewState::default();
    let mut host = RecordingHost::new(800.0);
    let mut drag = DragController::new();

    drag.begin(&mut host, Point::new(0.0, 0.0), DragTarget::TreePanel);
    drag.move_to(&mut view, &mut host, Point::new(1.0, 1.0));
    assert_eq!(host.count(|c| *c == HostCall::UpdateMinimapOverlay), 0);

    view.minimap.visible = true;
    drag.move_to(&mut view, &mut host, Point::new(2.0, 2.0));
    assert_eq!(host.count(|c| *c == HostCall::UpdateMinimapOverlay), 1);
    assert_eq!(host.count(|c| *c == HostCall::RefreshInfoPanel), 2);
}

#[test]
fn aligned_drag_clamps_origin_and_skips_translation_on_clamp() {
    let mut view = ViewState::default();
    let mut host = RecordingHost::new(800.0);
    let mut drag = DragController::new();

    drag.begin(&mut host, Point::new(100.0, 0.0), DragTarget::AlignedPanel);

    drag.move_to(&mut view, &mut host, Point::new(90.0, 7.0));
    assert_eq!(view.aligned.origin, 10.0);
    assert_eq!(host.last_aligned_translation(), Some(-10.0));

    // Would go to -20: clamps, and the layers stay where they were.
    drag.move_to(&mut view, &mut host, Point::new(120.0, 7.0));
    assert_eq!(view.aligned.origin, 0.0);
    assert_eq!(host.count(|c| matches!(c, HostCall::TranslateAligned(_))), 1);

    drag.move_to(&mut view, &mut host, Point::new(110.0, 7.0));
    assert_eq!(view.aligned.origin, 10.0);
    assert_eq!(host.last_aligned_translation(), Some(10.0));

    // Vertical movement never scrolls the aligned panel or pans the tree.
    assert_eq!(view.pan_offset, Point::ZERO);
    assert!(drag.has_moved());
}

#[test]
fn aligned_drag_uses_compound_zoom() {
    let mut view = view_with_zoom(2.0, 1.0);
    view.aligned.zoom = 4.0;
    view.aligned.origin = 100.0;
    let mut host = RecordingHost::new(800.0);
    let mut drag = DragController::new();

    drag.begin(&mut host, Point::new(0.0, 0.0), DragTarget::AlignedPanel);
    drag.move_to(&mut view, &mut host, Point::new(32.0, 0.0));

    assert_eq!(view.aligned.origin, 96.0);
}

#[test]
fn end_redraws_once_only_after_movement() {
    let mut view = ViewState::default();
    let mut host = RecordingHost::new(800.0);
    let mut drag = DragController::new();

    drag.begin(&mut host, Point::new(5.0, 5.0), DragTarget::TreePanel);
    assert!(!drag.end(&view, &mut host));
    assert_eq!(host.redraws(), 0);

    drag.begin(&mut host, Point::new(5.0, 5.0), DragTarget::TreePanel);
    drag.move_to(&mut view, &mut host, Point::new(6.0, 5.0));
    drag.move_to(&mut view, &mut host, Point::new(9.0, 5.0));
    assert!(drag.end(&view, &mut host));
    assert_eq!(host.redraws(), 1);
    assert!(!drag.has_moved());
    assert!(!drag.is_dragging());

    // A second release is a no-op.
    assert!(!drag.end(&view, &mut host));
    assert_eq!(host.redraws(), 1);
}

#[test]
fn redraw_sees_final_view() {
    let mut view = view_with_zoom(1.0, 1.0);
    let mut host = RecordingHost::new(800.0);
    let mut drag = DragController::new();

    drag.begin(&mut host, Point::new(0.0, 0.0), DragTarget::TreePanel);
    drag.move_to(&mut view, &mut host, Point::new(-7.0, 3.0));
    drag.end(&view, &mut host);

    let drawn = host.calls().iter().find_map(|c| match c {
        HostCall::RedrawTree(v) => Some(v.pan_offset),
        _ => None,
    });
    assert_eq!(drawn, Some(Point::new(7.0, -3.0)));
}

#[test]
fn cursors_follow_gesture_lifecycle() {
    let view = ViewState::default();
    let mut host = RecordingHost::new(800.0);
    let mut drag = DragController::new();

    drag.begin(&mut host, Point::ZERO, DragTarget::MinimapRect);
    assert_eq!(host.cursor(CursorRegion::Tree), Some(Cursor::Grabbing));
    assert_eq!(host.cursor(CursorRegion::VisibleRect), Some(Cursor::Grabbing));

    drag.end(&view, &mut host);
    assert_eq!(host.cursor(CursorRegion::Tree), Some(Cursor::Default));
    assert_eq!(host.cursor(CursorRegion::VisibleRect), Some(Cursor::Grab));
}

#[test]
fn new_gesture_replaces_active_one_and_keeps_pending_redraw() {
    let mut view = ViewState::default();
    let mut host = RecordingHost::new(200.0);
    let mut drag = DragController::new();

    drag.begin(&mut host, Point::new(0.0, 0.0), DragTarget::TreePanel);
    drag.move_to(&mut view, &mut host, Point::new(4.0, 0.0));

    drag.begin(&mut host, Point::new(50.0, 0.0), DragTarget::SplitHandle);
    assert_eq!(drag.target(), Some(DragTarget::SplitHandle));
    assert_eq!(drag.total_offset(Point::new(60.0, 0.0)), Some(Vec2::new(10.0, 0.0)));

    // Release without moving the new target: the earlier pan still needs drawing.
    assert!(drag.end(&view, &mut host));
    assert_eq!(host.redraws(), 1);
}

#[test]
fn cancel_drops_pending_redraw() {
    let mut view = ViewState::default();
    let mut host = RecordingHost::new(800.0);
    let mut drag = DragController::new();

    drag.begin(&mut host, Point::ZERO, DragTarget::TreePanel);
    drag.move_to(&mut view, &mut host, Point::new(3.0, 3.0));
    drag.cancel(&mut host);

    assert!(!drag.is_dragging());
    assert!(!drag.has_moved());
    assert_eq!(host.redraws(), 0);
    assert_eq!(host.cursor(CursorRegion::VisibleRect), Some(Cursor::Grab));
}
