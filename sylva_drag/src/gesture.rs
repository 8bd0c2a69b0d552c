// Copyright 2026 the Sylva Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Gesture bookkeeping: which target is held and where the pointer has been.

use kurbo::{Point, Vec2};

use crate::DragTarget;

/// State of the drag gesture in progress, if any.
///
/// `has_moved` is left alone by [`DragGesture::start`]: when a
/// new gesture replaces one that had already moved, the pending redraw is
/// still owed and happens when the new gesture ends.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DragGesture {
    /// Target being dragged, `None` when idle.
    pub target: Option<DragTarget>,
    /// Pointer position when the gesture started.
    pub start_point: Point,
    /// Pointer position at the last update.
    pub last_point: Point,
    /// Whether anything changed since the last redraw.
    pub has_moved: bool,
}

impl DragGesture {
    /// Starts tracking `target` from `point`, replacing any active gesture.
    pub fn start(&mut self, point: Point, target: DragTarget) {
        self.target = Some(target);
        self.start_point = point;
        self.last_point = point;
    }

    /// Records a new pointer position, returning the movement since the last one.
    pub fn update(&mut self, point: Point) -> Option<Vec2> {
        self.target?;
        let delta = point - self.last_point;
        self.last_point = point;
        Some(delta)
    }

    /// Offset from the gesture start to `point`.
    pub fn total_offset(&self, point: Point) -> Option<Vec2> {
        self.target.map(|_| point - self.start_point)
    }

    /// Stops tracking. Positions are kept; `has_moved` is the caller's business.
    pub fn end(&mut self) {
        self.target = None;
    }

    /// Returns `true` while a gesture is active.
    pub fn is_active(&self) -> bool {
        self.target.is_some()
    }
}
