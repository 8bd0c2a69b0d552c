// Copyright 2026 the Sylva Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Region a drag gesture is bound to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DragTarget {
    /// The tree panel. Dragging pans the tree.
    TreePanel,
    /// The aligned (sequence) panel. Dragging scrolls it horizontally.
    AlignedPanel,
    /// The handle between the tree and aligned panels. Dragging resizes them.
    SplitHandle,
    /// The visible-rectangle handle on the minimap. Dragging pans the tree.
    MinimapRect,
}

/// Regions whose cursor the controller updates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CursorRegion {
    /// The tree panel.
    Tree,
    /// The minimap's visible-rectangle handle.
    VisibleRect,
}

/// Pointer cursor affordance.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum Cursor {
    /// Whatever the platform shows by default.
    #[default]
    Default,
    /// Open hand: the region can be dragged.
    Grab,
    /// Closed hand: a drag is in progress.
    Grabbing,
}
