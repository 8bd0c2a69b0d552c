// Copyright 2026 the Sylva Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Sylva Canvas: an interactive tree canvas with glyph sprite overlays.
//!
//! This crate ties the Sylva pieces together around one
//! [`ViewState`](sylva_view::ViewState):
//!
//! - pointer down starts a [`DragController`](sylva_drag::DragController)
//!   gesture;
//! - pointer moves update the view state and shift drawn layers in place,
//!   vector layers through the [`CanvasHost`] and sprite surfaces through
//!   the [`SpriteRenderer`](sylva_sprites::SpriteRenderer);
//! - pointer up redraws once: the host draws the vector tree and returns the
//!   rows of sequence data it laid out, and the canvas rebuilds their glyph
//!   sprites from scratch.
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::{Point, Rect, Size};
//! use sylva_canvas::{Canvas, CanvasConfig, CanvasHost, SequenceItem};
//! use sylva_drag::DragTarget;
//! use sylva_sprites::{
//!     AtlasData, HostRegion, StaticAtlas, SurfaceHosts, SurfaceKind, region::FixedRegion,
//! };
//! use sylva_view::ViewState;
//!
//! struct Viewer {
//!     tree: FixedRegion,
//! }
//!
//! impl CanvasHost for Viewer {
//!     fn surface_hosts(&mut self) -> SurfaceHosts<'_> {
//!         SurfaceHosts { tree: &mut self.tree, aligned: None }
//!     }
//!
//!     fn tree_region(&self) -> &dyn HostRegion {
//!         &self.tree
//!     }
//!
//!     fn draw_tree(&mut self, view: &ViewState) -> Vec<SequenceItem> {
//!         let origin = view.tree_to_pixel(Point::ZERO);
//!         let bx = Rect::from_origin_size(origin, (40.0, 10.0));
//!         vec![SequenceItem::new(SurfaceKind::Tree, "ACGT", bx)]
//!     }
//! }
//!
//! # fn main() -> Result<(), sylva_canvas::CanvasError> {
//! let source = StaticAtlas::new("nt", AtlasData::grid("ACGT", Size::new(16.0, 16.0), 4));
//! let viewer = Viewer { tree: FixedRegion::visible(Size::new(800.0, 600.0)) };
//! let mut canvas = pollster::block_on(Canvas::new(CanvasConfig::default(), viewer, &source))?;
//! assert_eq!(canvas.redraw()?, 4);
//!
//! canvas.pointer_down(Point::new(100.0, 100.0), DragTarget::TreePanel);
//! canvas.pointer_move(Point::new(130.0, 100.0));
//! assert!(canvas.pointer_up()?);
//!
//! // The tree followed the pointer 30 pixels to the right, and so did its sprites.
//! assert_eq!(canvas.view().pan_offset, Point::new(-30.0, 0.0));
//! let first = canvas.renderer().draw_list(SurfaceKind::Tree)?[0].world_bounds();
//! assert_eq!(first.x0, 30.0);
//! # Ok(())
//! # }
//! ```

mod canvas;
mod config;
mod error;
mod host;
mod redraw;

pub use canvas::Canvas;
pub use config::CanvasConfig;
pub use error::CanvasError;
pub use host::{CanvasHost, SequenceItem};
