// Copyright 2026 the Sylva Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Affine, Point, Rect, Size, Vec2};
use tracing::{debug, trace};

use crate::scene::{Bindings, Container, Node};

/// Which panel a surface overlays.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SurfaceKind {
    /// The tree panel.
    Tree,
    /// The aligned panel.
    Aligned,
}

/// How a surface is stacked over the vector drawing of its host.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OverlayStyle {
    /// Offset from the host's top edge, in pixels.
    pub top: f64,
    /// Offset from the host's left edge, in pixels.
    pub left: f64,
    /// Stacking order relative to the host's vector layer, which sits at 0.
    pub z_index: i32,
    /// Whether the overlay receives pointer events.
    pub pointer_events: bool,
    /// Opacity of the surface background.
    pub background_alpha: f32,
}

impl Default for OverlayStyle {
    fn default() -> Self {
        Self {
            top: 0.0,
            left: 0.0,
            z_index: 1,
            pointer_events: false,
            background_alpha: 0.0,
        }
    }
}

/// A rectangular host region a surface lives in.
pub trait HostRegion {
    /// Current size in pixels.
    ///
    /// Hosts may report a zero size while hidden.
    fn size(&self) -> Size;

    /// Whether the region is shown.
    fn is_visible(&self) -> bool;

    /// Shows or hides the region.
    fn set_visible(&mut self, visible: bool);

    /// Inserts the surface of `kind` into the region with `style`.
    fn attach_overlay(&mut self, kind: SurfaceKind, style: &OverlayStyle);
}

/// One glyph to blit: atlas frame `src` into `dst` under `transform`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GlyphDraw {
    /// Character drawn.
    pub glyph: char,
    /// Frame in atlas page pixels.
    pub src: Rect,
    /// Destination rectangle before `transform`.
    pub dst: Rect,
    /// Transform from `dst` coordinates into surface pixels.
    pub transform: Affine,
}

impl GlyphDraw {
    /// Axis-aligned bounds of the glyph in surface pixels.
    #[must_use]
    pub fn world_bounds(&self) -> Rect {
        self.transform.transform_rect_bbox(self.dst)
    }
}

/// A transparent raster layer stacked over one panel.
#[derive(Debug)]
pub struct Surface {
    kind: SurfaceKind,
    size: Size,
    style: OverlayStyle,
    root: Container,
    bindings: Bindings,
}

impl Surface {
    pub(crate) fn new(kind: SurfaceKind, size: Size, style: OverlayStyle) -> Self {
        Self {
            kind,
            size,
            style,
            root: Container::new(),
            bindings: Bindings::default(),
        }
    }

    /// Panel this surface overlays.
    #[must_use]
    pub fn kind(&self) -> SurfaceKind {
        self.kind
    }

    /// Size in pixels.
    #[must_use]
    pub fn size(&self) -> Size {
        self.size
    }

    /// Overlay style the surface was attached with.
    #[must_use]
    pub fn style(&self) -> &OverlayStyle {
        &self.style
    }

    /// Root container.
    #[must_use]
    pub fn root(&self) -> &Container {
        &self.root
    }

    /// Texture slots held by attached sprites.
    #[must_use]
    pub fn bindings(&self) -> &Bindings {
        &self.bindings
    }

    /// Resizes to the current size of `host`.
    ///
    /// A zero size (a hidden host) is ignored so the surface keeps the last
    /// size it could measure.
    pub fn resize_to(&mut self, host: &dyn HostRegion) {
        let size = host.size();
        if size.width <= 0.0 || size.height <= 0.0 {
            trace!(kind = ?self.kind, "resize skipped, host has no size");
            return;
        }
        if size != self.size {
            debug!(kind = ?self.kind, width = size.width, height = size.height, "surface resized");
            self.size = size;
        }
    }

    /// Adds `container` under the root, binding its sprites. Returns its index.
    pub fn attach(&mut self, mut container: Container) -> usize {
        container.bind(&mut self.bindings);
        self.root.add_container(container)
    }

    /// Removes the child at `index`, releasing what it holds.
    pub fn detach(&mut self, index: usize) -> Option<Container> {
        let node = self.root.remove_child(index)?;
        match node {
            Node::Container(mut container) => {
                container.destroy(&mut self.bindings);
                Some(container)
            }
            Node::Sprite(_) => None,
        }
    }

    /// Shifts everything drawn on this surface by `offset`, replacing any
    /// previous shift.
    ///
    /// This is the drag fast path: the surface follows the pointer without
    /// rebuilding sprites. The next [`Surface::clear`] drops the shift, so a
    /// redraw at the new view reproduces the same picture unshifted.
    pub fn set_offset(&mut self, offset: Vec2) {
        self.root.position = offset.to_point();
    }

    /// Current fast-path shift.
    #[must_use]
    pub fn offset(&self) -> Vec2 {
        self.root.position.to_vec2()
    }

    /// Destroys every child of the root, then removes them.
    ///
    /// Both steps always run: destroying releases texture slots, removing
    /// detaches the nodes from the graph. Returns the number of sprites
    /// released.
    pub fn clear(&mut self) -> usize {
        let before = self.bindings.live();
        self.root.destroy_children(&mut self.bindings);
        drop(self.root.remove_children());
        self.root.position = Point::ZERO;
        let released = before - self.bindings.live();
        trace!(kind = ?self.kind, released, "surface cleared");
        released
    }

    /// Flattens the surface into glyph draws in surface pixels.
    #[must_use]
    pub fn draw_list(&self) -> Vec<GlyphDraw> {
        let mut draws = Vec::with_capacity(self.root.sprite_count());
        self.root.visit_sprites(Affine::IDENTITY, &mut |sprite, transform| {
            draws.push(GlyphDraw {
                glyph: sprite.glyph,
                src: sprite.frame,
                dst: sprite.rect,
                transform,
            });
        });
        draws
    }
}
