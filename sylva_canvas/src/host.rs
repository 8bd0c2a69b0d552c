// Copyright 2026 the Sylva Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Rect, Vec2};
use sylva_drag::{Cursor, CursorRegion};
use sylva_sprites::{HostRegion, SurfaceHosts, SurfaceKind};
use sylva_view::ViewState;

/// A row of sequence data to cover with glyph sprites.
#[derive(Clone, Debug, PartialEq)]
pub struct SequenceItem {
    /// Surface the row is drawn on.
    pub surface: SurfaceKind,
    /// Characters of the row, one cell each.
    pub seq: String,
    /// Box the row fills, in the surface's pixels.
    pub bx: Rect,
}

impl SequenceItem {
    /// A row of `seq` filling `bx` on `surface`.
    pub fn new(surface: SurfaceKind, seq: impl Into<String>, bx: Rect) -> Self {
        Self {
            surface,
            seq: seq.into(),
            bx,
        }
    }
}

/// The application around a [`Canvas`](crate::Canvas).
///
/// The host owns the panels, draws the vector tree and any chrome around it.
/// Only [`CanvasHost::surface_hosts`], [`CanvasHost::tree_region`] and
/// [`CanvasHost::draw_tree`] are required; the remaining hooks default to
/// doing nothing.
pub trait CanvasHost {
    /// Regions the sprite surfaces are created in.
    ///
    /// Only called while the canvas is being created.
    fn surface_hosts(&mut self) -> SurfaceHosts<'_>;

    /// Region of the tree panel, used to keep its surface sized to it.
    fn tree_region(&self) -> &dyn HostRegion;

    /// Region of the aligned panel, used to resize its surface after the
    /// panel was resized or shown again.
    fn aligned_region(&self) -> Option<&dyn HostRegion> {
        None
    }

    /// Current width of the tree panel in pixels.
    fn tree_panel_width(&self) -> f64 {
        self.tree_region().size().width
    }

    /// Draws the vector tree for `view` and returns the rows of sequence
    /// data to overlay with sprites.
    fn draw_tree(&mut self, view: &ViewState) -> Vec<SequenceItem>;

    /// Changes the cursor shown over `region`.
    fn set_cursor(&mut self, region: CursorRegion, cursor: Cursor) {
        let _ = (region, cursor);
    }

    /// Resizes the aligned panel to `percent` of the canvas width.
    fn set_aligned_width_percent(&mut self, percent: f64) {
        let _ = percent;
    }

    /// Translates the vector layers of the tree panel by `offset` pixels.
    fn translate_tree_layers(&mut self, offset: Vec2) {
        let _ = offset;
    }

    /// Translates the vector layers of the aligned panel horizontally.
    fn translate_aligned_layers(&mut self, dx: f64) {
        let _ = dx;
    }

    /// Refreshes the info panel.
    fn refresh_info_panel(&mut self, view: &ViewState) {
        let _ = view;
    }

    /// Recomputes the minimap's visible-rectangle overlay.
    fn update_minimap_overlay(&mut self, view: &ViewState) {
        let _ = view;
    }
}
