// Copyright 2026 the Sylva Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Vec2};
use sylva_view::ViewState;
use tracing::{debug, trace};

use crate::{Cursor, CursorRegion, DragGesture, DragHost, DragTarget};

/// Converts pointer movement in pixels into view movement for `target`.
///
/// - Tree panel: the view origin moves against the pointer, divided by zoom so
///   the tree sticks to the pointer at any zoom level.
/// - Aligned panel: horizontal only, divided by the aligned zoom compounded
///   with the tree's horizontal zoom.
/// - Minimap rectangle: the view follows the pointer, scaled up from minimap
///   pixels. The split handle never asks, but gets the same answer.
#[must_use]
pub fn drag_scale(view: &ViewState, target: DragTarget) -> Vec2 {
    match target {
        DragTarget::TreePanel => Vec2::new(-1.0 / view.zoom.x, -1.0 / view.zoom.y),
        DragTarget::AlignedPanel => Vec2::new(-1.0 / (view.aligned.zoom * view.zoom.x), 0.0),
        DragTarget::MinimapRect | DragTarget::SplitHandle => {
            Vec2::new(1.0 / view.minimap.zoom.x, 1.0 / view.minimap.zoom.y)
        }
    }
}

/// Drives one drag gesture at a time against a [`ViewState`].
#[derive(Debug, Clone, Default)]
pub struct DragController {
    gesture: DragGesture,
}

impl DragController {
    /// Creates an idle controller.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The current gesture state.
    #[must_use]
    pub fn gesture(&self) -> &DragGesture {
        &self.gesture
    }

    /// Returns `true` while a gesture is active.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.gesture.is_active()
    }

    /// Target of the active gesture.
    #[must_use]
    pub fn target(&self) -> Option<DragTarget> {
        self.gesture.target
    }

    /// Whether a redraw is owed when the gesture ends.
    #[must_use]
    pub fn has_moved(&self) -> bool {
        self.gesture.has_moved
    }

    /// Offset from the gesture start to `point`, if a gesture is active.
    #[must_use]
    pub fn total_offset(&self, point: Point) -> Option<Vec2> {
        self.gesture.total_offset(point)
    }

    /// Starts dragging `target` from `point`.
    ///
    /// An active gesture is replaced without being ended.
    pub fn begin<H: DragHost + ?Sized>(&mut self, host: &mut H, point: Point, target: DragTarget) {
        if let Some(previous) = self.gesture.target {
            debug!(?previous, ?target, "drag gesture replaced");
        } else {
            debug!(?target, x = point.x, y = point.y, "drag gesture started");
        }
        host.set_cursor(CursorRegion::Tree, Cursor::Grabbing);
        host.set_cursor(CursorRegion::VisibleRect, Cursor::Grabbing);
        self.gesture.start(point, target);
    }

    /// Ends the active gesture.
    ///
    /// If anything moved, the tree is redrawn exactly once. Returns whether a
    /// redraw happened. Without an active gesture this does nothing.
    pub fn end<H: DragHost + ?Sized>(&mut self, view: &ViewState, host: &mut H) -> bool {
        let Some(target) = self.gesture.target else {
            trace!("drag end without active gesture ignored");
            return false;
        };
        reset_cursors(host);

        let redrawn = self.gesture.has_moved;
        if redrawn {
            host.redraw_tree(view);
            self.gesture.has_moved = false;
        }
        self.gesture.end();
        debug!(?target, redrawn, "drag gesture ended");
        redrawn
    }

    /// Drops the active gesture without redrawing.
    ///
    /// For hosts that lose pointer capture mid-drag. Pending movement is
    /// discarded along with the gesture.
    pub fn cancel<H: DragHost + ?Sized>(&mut self, host: &mut H) {
        let Some(target) = self.gesture.target else {
            return;
        };
        reset_cursors(host);
        self.gesture.has_moved = false;
        self.gesture.end();
        debug!(?target, "drag gesture cancelled");
    }

    /// Feeds a pointer position into the active gesture.
    ///
    /// Without an active gesture this does nothing.
    pub fn move_to<H: DragHost + ?Sized>(
        &mut self,
        view: &mut ViewState,
        host: &mut H,
        point: Point,
    ) {
        let Some(target) = self.gesture.target else {
            trace!("drag move without active gesture ignored");
            return;
        };
        let Some(movement) = self.gesture.update(point) else {
            return;
        };

        match target {
            DragTarget::SplitHandle => self.move_split(view, host, movement),
            DragTarget::AlignedPanel => self.move_aligned(view, host, point, movement),
            DragTarget::TreePanel | DragTarget::MinimapRect => {
                self.move_tree(view, host, target, point, movement);
            }
        }
    }

    fn move_split<H: DragHost + ?Sized>(
        &mut self,
        view: &mut ViewState,
        host: &mut H,
        movement: Vec2,
    ) {
        let width = host.tree_panel_width();
        if width > 0.0 {
            view.split_ratio.adjust(100.0 * movement.x / width);
        }
        host.set_aligned_width_percent(view.split_ratio.complement());
        self.gesture.has_moved = true;
        host.retarget_aligned_surface();
        host.refresh_info_panel(view);
        trace!(split_ratio = view.split_ratio.get(), "split handle dragged");
    }

    fn move_aligned<H: DragHost + ?Sized>(
        &mut self,
        view: &mut ViewState,
        host: &mut H,
        point: Point,
        movement: Vec2,
    ) {
        self.gesture.has_moved = true;
        let scale = drag_scale(view, DragTarget::AlignedPanel);
        view.aligned.origin += scale.x * movement.x;

        // Layers are only shifted while the origin is positive. The frame
        // that clamps to zero leaves them where the previous frame put them.
        if view.aligned.origin > 0.0 {
            host.translate_aligned_layers(point.x - self.gesture.start_point.x);
        } else {
            view.aligned.origin = 0.0;
        }
        trace!(origin = view.aligned.origin, "aligned panel dragged");
    }

    fn move_tree<H: DragHost + ?Sized>(
        &mut self,
        view: &mut ViewState,
        host: &mut H,
        target: DragTarget,
        point: Point,
        movement: Vec2,
    ) {
        self.gesture.has_moved = true;
        let scale = drag_scale(view, target);
        view.pan_offset.x += scale.x * movement.x;
        view.pan_offset.y += scale.y * movement.y;

        let mut offset = point - self.gesture.start_point;
        if target == DragTarget::MinimapRect {
            // The tree moves against the minimap handle, magnified by the
            // ratio between the two zooms.
            offset.x *= -view.zoom.x / view.minimap.zoom.x;
            offset.y *= -view.zoom.y / view.minimap.zoom.y;
        }
        host.translate_tree_layers(offset);
        host.refresh_info_panel(view);
        if view.minimap.visible {
            host.update_minimap_overlay(view);
        }
        trace!(
            ?target,
            pan_x = view.pan_offset.x,
            pan_y = view.pan_offset.y,
            "tree panned"
        );
    }
}

fn reset_cursors<H: DragHost + ?Sized>(host: &mut H) {
    host.set_cursor(CursorRegion::Tree, Cursor::Default);
    host.set_cursor(CursorRegion::VisibleRect, Cursor::Grab);
}
