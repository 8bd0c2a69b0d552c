// Copyright 2026 the Sylva Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Vec2;
use sylva_view::ViewState;

use crate::{Cursor, CursorRegion};

/// The application side of a drag.
///
/// The controller owns no widgets. Everything it needs to read or change
/// outside the [`ViewState`] goes through this trait.
///
/// The two `translate_*` methods are the fast path: they shift layers that
/// are already drawn so the canvas follows the pointer without recomputing
/// anything. Their offsets are always relative to where the gesture started,
/// and the redraw issued at the end of the gesture must produce the same
/// picture the translated layers showed.
pub trait DragHost {
    /// Current width of the tree panel in pixels.
    fn tree_panel_width(&self) -> f64;

    /// Changes the cursor shown over `region`.
    fn set_cursor(&mut self, region: CursorRegion, cursor: Cursor);

    /// Resizes the aligned panel to `percent` of the canvas width.
    fn set_aligned_width_percent(&mut self, percent: f64);

    /// Points the aligned sprite surface at the aligned panel again.
    ///
    /// Surfaces whose host was hidden and shown again can lose track of the
    /// region they resize with.
    fn retarget_aligned_surface(&mut self) {}

    /// Translates every drawn layer of the tree panel by `offset` pixels.
    fn translate_tree_layers(&mut self, offset: Vec2);

    /// Translates every drawn layer of the aligned panel horizontally.
    fn translate_aligned_layers(&mut self, dx: f64);

    /// Recomputes and repaints the tree for `view`.
    fn redraw_tree(&mut self, view: &ViewState);

    /// Refreshes the info panel. Fire and forget.
    fn refresh_info_panel(&mut self, view: &ViewState) {
        let _ = view;
    }

    /// Recomputes the minimap's visible-rectangle overlay. Fire and forget.
    fn update_minimap_overlay(&mut self, view: &ViewState) {
        let _ = view;
    }
}

impl<H: DragHost + ?Sized> DragHost for &mut H {
    fn tree_panel_width(&self) -> f64 {
        (**self).tree_panel_width()
    }

    fn set_cursor(&mut self, region: CursorRegion, cursor: Cursor) {
        (**self).set_cursor(region, cursor);
    }

    fn set_aligned_width_percent(&mut self, percent: f64) {
        (**self).set_aligned_width_percent(percent);
    }

    fn retarget_aligned_surface(&mut self) {
        (**self).retarget_aligned_surface();
    }

    fn translate_tree_layers(&mut self, offset: Vec2) {
        (**self).translate_tree_layers(offset);
    }

    fn translate_aligned_layers(&mut self, dx: f64) {
        (**self).translate_aligned_layers(dx);
    }

    fn redraw_tree(&mut self, view: &ViewState) {
        (**self).redraw_tree(view);
    }

    fn refresh_info_panel(&mut self, view: &ViewState) {
        (**self).refresh_info_panel(view);
    }

    fn update_minimap_overlay(&mut self, view: &ViewState) {
        (**self).update_minimap_overlay(view);
    }
}
