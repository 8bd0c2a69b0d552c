// Copyright 2026 the Sylva Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Sylva Drag: turn pointer drags into view-state updates.
//!
//! A tree canvas has four things the user can grab:
//!
//! - the tree panel itself, which pans the tree;
//! - the aligned panel, which scrolls sequence data horizontally;
//! - the split handle between them, which resizes the panels;
//! - the visible-rectangle handle on the minimap, which pans the tree from the
//!   overview.
//!
//! [`DragController`] tracks one gesture at a time against one
//! [`DragTarget`]. It reads and writes a [`ViewState`](sylva_view::ViewState)
//! passed in by the caller, and talks to the rest of the application through
//! the [`DragHost`] trait: cursors, panel widths, cheap "fast path"
//! translations of already drawn layers while the pointer moves, and the one
//! authoritative redraw once the pointer is released.
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::{Point, Vec2};
//! use sylva_drag::{DragController, DragTarget, recording::RecordingHost};
//! use sylva_view::ViewState;
//!
//! let mut view = ViewState::default();
//! view.zoom = Vec2::new(2.0, 2.0);
//! let mut host = RecordingHost::new(800.0);
//! let mut drag = DragController::new();
//!
//! drag.begin(&mut host, Point::new(100.0, 100.0), DragTarget::TreePanel);
//! drag.move_to(&mut view, &mut host, Point::new(110.0, 96.0));
//!
//! // Dragging right by 10 pixels at zoom 2 moves the view 5 units left.
//! assert_eq!(view.pan_offset, Point::new(-5.0, 2.0));
//!
//! assert!(drag.end(&view, &mut host));
//! assert_eq!(host.redraws(), 1);
//! ```
//!
//! Moves and releases that arrive without an active gesture are ignored, so
//! hosts may forward pointer events without tracking drag state themselves.

mod controller;
mod gesture;
mod host;
pub mod recording;
mod target;

pub use controller::{DragController, drag_scale};
pub use gesture::DragGesture;
pub use host::DragHost;
pub use target::{Cursor, CursorRegion, DragTarget};
