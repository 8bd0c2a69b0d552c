// Copyright 2026 the Sylva Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Sylva Sprites: draw sequence data as glyph sprites from an image atlas.
//!
//! Sequence alignments and other per-character data are drawn over the vector
//! tree as raster sprites: each character is a sub-image of one pre-baked
//! atlas page, stretched over its cell. This is much cheaper than laying out
//! text when thousands of cells are on screen.
//!
//! # Core concepts
//!
//! - [`Atlas`]: a validated glyph atlas, loaded once from an [`AtlasSource`].
//! - [`Container`] / [`Sprite`]: a tiny retained scene graph.
//! - [`Surface`]: a transparent raster layer over one panel, owning a root
//!   container and the texture slots ([`Bindings`]) of attached sprites.
//! - [`SpriteRenderer`]: owns the atlas and the surfaces, builds containers
//!   with [`SpriteRenderer::draw_sequence`] and wipes everything with
//!   [`SpriteRenderer::clear`].
//!
//! # Redraw cycle
//!
//! Every redraw clears the surfaces and rebuilds sprites for what is visible.
//! Clearing both destroys the old nodes (releasing their texture slots) and
//! removes them from the graph, so repeated redraws never accumulate
//! resources.
//!
//! ```
//! use kurbo::{Rect, Size};
//! use sylva_sprites::{
//!     AtlasData, RendererConfig, SpriteRenderer, StaticAtlas, SurfaceHosts, SurfaceKind,
//!     region::FixedRegion,
//! };
//! use sylva_view::ViewState;
//!
//! # fn main() -> Result<(), sylva_sprites::SpriteError> {
//! let source = StaticAtlas::new("nt", AtlasData::grid("ACGT", Size::new(16.0, 16.0), 4));
//! let mut tree = FixedRegion::visible(Size::new(800.0, 600.0));
//! let hosts = SurfaceHosts { tree: &mut tree, aligned: None };
//! let mut renderer =
//!     pollster::block_on(SpriteRenderer::init(RendererConfig::default(), hosts, &source))?;
//!
//! let view = ViewState::default();
//! let row = renderer.draw_sequence(&view, "ACGT", Rect::new(0.0, 0.0, 40.0, 10.0), 800.0)?;
//! renderer.attach(SurfaceKind::Tree, row)?;
//!
//! let draws = renderer.draw_list(SurfaceKind::Tree)?;
//! let xs: Vec<f64> = draws.iter().map(|d| d.world_bounds().x0).collect();
//! assert_eq!(xs, [0.0, 10.0, 20.0, 30.0]);
//!
//! assert_eq!(renderer.clear(), 4);
//! # Ok(())
//! # }
//! ```
//!
//! # Missing glyphs
//!
//! By default a character without an atlas image fails the draw with
//! [`SpriteError::AtlasMissingGlyph`]. [`MissingGlyph`] lets callers
//! substitute a placeholder or leave the cell empty instead.

mod atlas;
mod config;
mod error;
mod layout;
pub mod region;
mod renderer;
mod scene;
mod surface;

pub use atlas::{Atlas, AtlasData, AtlasPage, AtlasSource, StaticAtlas};
pub use config::{Culling, MissingGlyph, Placement, RendererConfig};
pub use error::{AtlasError, SpriteError};
pub use layout::{pad, visible_range};
pub use renderer::{SpriteRenderer, SurfaceHosts};
pub use scene::{BindingId, Bindings, Container, Node, Sprite};
pub use surface::{GlyphDraw, HostRegion, OverlayStyle, Surface, SurfaceKind};
