// Copyright 2026 the Sylva Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A [`DragHost`] that records every call instead of touching widgets.
//!
//! Intended for tests and debugging that want to assert on what the
//! controller asked the application to do.

use kurbo::Vec2;
use sylva_view::ViewState;

use crate::{Cursor, CursorRegion, DragHost};

/// One call made on a [`RecordingHost`].
#[derive(Clone, Debug, PartialEq)]
pub enum HostCall {
    /// [`DragHost::set_cursor`].
    SetCursor(CursorRegion, Cursor),
    /// [`DragHost::set_aligned_width_percent`].
    SetAlignedWidth(f64),
    /// [`DragHost::retarget_aligned_surface`].
    RetargetAlignedSurface,
    /// [`DragHost::translate_tree_layers`].
    TranslateTree(Vec2),
    /// [`DragHost::translate_aligned_layers`].
    TranslateAligned(f64),
    /// [`DragHost::redraw_tree`], with the view as it was at the time.
    RedrawTree(ViewState),
    /// [`DragHost::refresh_info_panel`].
    RefreshInfoPanel,
    /// [`DragHost::update_minimap_overlay`].
    UpdateMinimapOverlay,
}

/// Recording drag host.
#[derive(Clone, Debug)]
pub struct RecordingHost {
    /// Width reported by [`DragHost::tree_panel_width`].
    pub tree_width: f64,
    calls: Vec<HostCall>,
}

impl RecordingHost {
    /// Creates a host whose tree panel is `tree_width` pixels wide.
    #[must_use]
    pub fn new(tree_width: f64) -> Self {
        Self {
            tree_width,
            calls: Vec::new(),
        }
    }

    /// All calls in the order they were made.
    #[must_use]
    pub fn calls(&self) -> &[HostCall] {
        &self.calls
    }

    /// Forgets recorded calls.
    pub fn clear_calls(&mut self) {
        self.calls.clear();
    }

    /// Number of [`DragHost::redraw_tree`] calls.
    #[must_use]
    pub fn redraws(&self) -> usize {
        self.count(|c| matches!(c, HostCall::RedrawTree(_)))
    }

    /// The most recent tree-layer translation.
    #[must_use]
    pub fn last_tree_translation(&self) -> Option<Vec2> {
        self.calls.iter().rev().find_map(|c| match c {
            HostCall::TranslateTree(offset) => Some(*offset),
            _ => None,
        })
    }

    /// The most recent aligned-layer translation.
    #[must_use]
    pub fn last_aligned_translation(&self) -> Option<f64> {
        self.calls.iter().rev().find_map(|c| match c {
            HostCall::TranslateAligned(dx) => Some(*dx),
            _ => None,
        })
    }

    /// The cursor most recently set on `region`.
    #[must_use]
    pub fn cursor(&self, region: CursorRegion) -> Option<Cursor> {
        self.calls.iter().rev().find_map(|c| match c {
            HostCall::SetCursor(r, cursor) if *r == region => Some(*cursor),
            _ => None,
        })
    }

    /// Counts the calls matching `pred`.
    pub fn count(&self, pred: impl Fn(&HostCall) -> bool) -> usize {
        self.calls.iter().filter(|c| pred(c)).count()
    }
}

impl DragHost for RecordingHost {
    fn tree_panel_width(&self) -> f64 {
        self.tree_width
    }

    fn set_cursor(&mut self, region: CursorRegion, cursor: Cursor) {
        self.calls.push(HostCall::SetCursor(region, cursor));
    }

    fn set_aligned_width_percent(&mut self, percent: f64) {
        self.calls.push(HostCall::SetAlignedWidth(percent));
    }

    fn retarget_aligned_surface(&mut self) {
        self.calls.push(HostCall::RetargetAlignedSurface);
    }

    fn translate_tree_layers(&mut self, offset: Vec2) {
        self.calls.push(HostCall::TranslateTree(offset));
    }

    fn translate_aligned_layers(&mut self, dx: f64) {
        self.calls.push(HostCall::TranslateAligned(dx));
    }

    fn redraw_tree(&mut self, view: &ViewState) {
        self.calls.push(HostCall::RedrawTree(view.clone()));
    }

    fn refresh_info_panel(&mut self, _view: &ViewState) {
        self.calls.push(HostCall::RefreshInfoPanel);
    }

    fn update_minimap_overlay(&mut self, _view: &ViewState) {
        self.calls.push(HostCall::UpdateMinimapOverlay);
    }
}
