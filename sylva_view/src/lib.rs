// Copyright 2026 the Sylva Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Sylva View: the view state shared by the drag controller and the sprite renderer.
//!
//! A tree canvas shows two panels side by side: the tree panel, which is
//! panned and zoomed independently per axis, and an optional aligned panel
//! (sequence alignments and other array data) with its own horizontal scroll
//! origin and zoom. A split handle between them sets the percentage of width
//! given to the tree. A minimap gives an overview of the whole tree.
//!
//! [`ViewState`] holds all of that as plain data. There is exactly one per
//! canvas, and it is passed explicitly (`&ViewState` / `&mut ViewState`) to
//! whatever needs it instead of living in a global.
//!
//! ```rust
//! use kurbo::{Point, Vec2};
//! use sylva_view::{Shape, ViewState};
//!
//! let mut view = ViewState::default();
//! view.zoom = Vec2::new(2.0, 4.0);
//! view.pan_offset = Point::new(10.0, 5.0);
//!
//! // Tree coordinates to pixels in the tree panel.
//! let px = view.tree_to_pixel(Point::new(12.0, 6.0));
//! assert_eq!(px, Point::new(4.0, 4.0));
//!
//! // The split ratio can never leave [1, 99].
//! view.split_ratio.adjust(500.0);
//! assert_eq!(view.split_ratio.get(), 99.0);
//! assert_eq!(view.shape, Shape::Rectangular);
//! ```
//!
//! ## Features
//!
//! - `serde`: derive `Serialize`/`Deserialize` for every type, so hosts can
//!   persist and restore a view.
//!
//! This crate is `no_std`.

#![no_std]

mod shape;
mod split;
mod state;

pub use shape::Shape;
pub use split::SplitRatio;
pub use state::{AlignedPanel, Minimap, ViewState};
