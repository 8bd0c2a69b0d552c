// Copyright 2026 the Sylva Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Rect, Size, Vec2};
use sylva_view::ViewState;
use tracing::{debug, trace, warn};

use crate::{
    Atlas, AtlasSource, Container, Culling, GlyphDraw, HostRegion, MissingGlyph, Placement,
    RendererConfig, SpriteError, Sprite, Surface, SurfaceKind, pad, visible_range,
};

/// Host regions the renderer creates surfaces in.
pub struct SurfaceHosts<'a> {
    /// Region of the tree panel.
    pub tree: &'a mut dyn HostRegion,
    /// Region of the aligned panel, if the canvas has one.
    pub aligned: Option<&'a mut dyn HostRegion>,
}

impl core::fmt::Debug for SurfaceHosts<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("SurfaceHosts")
            .field("tree", &self.tree.size())
            .field("aligned", &self.aligned.as_ref().map(|h| h.size()))
            .finish()
    }
}

/// Builds glyph sprites from sequences and keeps the surfaces they land on.
///
/// A renderer only exists once its atlas has loaded: [`SpriteRenderer::init`]
/// is the only constructor and resolves after the atlas does, so there is no
/// way to draw against a missing atlas.
#[derive(Debug)]
pub struct SpriteRenderer {
    config: RendererConfig,
    atlas: Atlas,
    tree: Surface,
    aligned: Option<Surface>,
}

impl SpriteRenderer {
    /// Creates the surfaces and loads the atlas.
    ///
    /// Each surface is sized to its host and attached to it as an overlay.
    /// A hidden aligned host is shown just long enough to be measured, then
    /// hidden again. Fails with [`SpriteError::AtlasLoadFailure`] if the
    /// atlas cannot be loaded or is invalid; nothing is retried.
    pub async fn init<S: AtlasSource>(
        config: RendererConfig,
        hosts: SurfaceHosts<'_>,
        source: &S,
    ) -> Result<Self, SpriteError> {
        let SurfaceHosts { tree, aligned } = hosts;

        let tree = create_surface(SurfaceKind::Tree, tree, &config);
        let aligned = aligned.map(|host| {
            let was_visible = host.is_visible();
            if !was_visible {
                host.set_visible(true);
            }
            let surface = create_surface(SurfaceKind::Aligned, host, &config);
            if !was_visible {
                host.set_visible(false);
            }
            surface
        });

        debug!(source = source.id(), "loading glyph atlas");
        let load_failure = |reason| SpriteError::AtlasLoadFailure {
            source_id: source.id().to_owned(),
            reason,
        };
        let data = source.load().await.map_err(|reason| {
            warn!(source = source.id(), %reason, "glyph atlas failed to load");
            load_failure(reason)
        })?;
        let atlas = Atlas::from_data(source.id(), data).map_err(|reason| {
            warn!(source = source.id(), %reason, "glyph atlas rejected");
            load_failure(reason)
        })?;
        debug!(source = source.id(), glyphs = atlas.len(), "glyph atlas loaded");

        Ok(Self {
            config,
            atlas,
            tree,
            aligned,
        })
    }

    /// The configuration the renderer was created with.
    #[must_use]
    pub fn config(&self) -> &RendererConfig {
        &self.config
    }

    /// The loaded atlas.
    #[must_use]
    pub fn atlas(&self) -> &Atlas {
        &self.atlas
    }

    /// The surface of `kind`, if it was created.
    #[must_use]
    pub fn surface(&self, kind: SurfaceKind) -> Option<&Surface> {
        match kind {
            SurfaceKind::Tree => Some(&self.tree),
            SurfaceKind::Aligned => self.aligned.as_ref(),
        }
    }

    fn surface_mut(&mut self, kind: SurfaceKind) -> Result<&mut Surface, SpriteError> {
        match kind {
            SurfaceKind::Tree => Ok(&mut self.tree),
            SurfaceKind::Aligned => self.aligned.as_mut().ok_or(SpriteError::NoSurface { kind }),
        }
    }

    fn surfaces_mut(&mut self) -> impl Iterator<Item = &mut Surface> {
        core::iter::once(&mut self.tree).chain(self.aligned.as_mut())
    }

    /// Builds one sprite per character of `seq` inside `bx`.
    ///
    /// `bx` is in the surface's pixel coordinates; each character gets a
    /// cell `bx.width() / len` wide. Under [`Culling::VisibleWindow`] only
    /// cells overlapping `[0, visible_max_width]` are built, at the same
    /// positions they would have unculled. Cells are padded vertically by
    /// the view's array padding. In circular layouts the row is rotated
    /// about its vertical midpoint to follow the tree's radial direction.
    ///
    /// The returned container holds only this call's sprites and is not
    /// attached anywhere; see [`SpriteRenderer::attach`]. An empty sequence
    /// or box yields an empty container.
    pub fn draw_sequence(
        &self,
        view: &ViewState,
        seq: &str,
        bx: Rect,
        visible_max_width: f64,
    ) -> Result<Container, SpriteError> {
        let glyphs: Vec<char> = seq.chars().collect();
        let mut container = Container::new();
        let width = bx.width();
        if glyphs.is_empty() || width.is_nan() || width <= 0.0 {
            return Ok(container);
        }

        #[allow(
            clippy::cast_precision_loss,
            reason = "sequence lengths stay far below 2^52"
        )]
        let dx = width / glyphs.len() as f64;
        let range = match self.config.culling {
            Culling::Unculled => 0..glyphs.len(),
            Culling::VisibleWindow => visible_range(bx.x0, dx, glyphs.len(), visible_max_width),
        };
        if range.is_empty() {
            return Ok(container);
        }
        let (y, dy) = pad(bx.y0, bx.height(), view.array_padding());
        let cell = Size::new(dx, dy);

        let placement = if view.shape.is_circular() {
            Placement::LocalOrigin
        } else {
            self.config.placement
        };
        #[allow(
            clippy::cast_precision_loss,
            reason = "sequence lengths stay far below 2^52"
        )]
        let first_x = bx.x0 + range.start as f64 * dx;
        let local_origin = placement == Placement::LocalOrigin;
        if local_origin {
            container.position = Point::new(first_x, y);
        }
        if view.shape.is_circular() {
            container.pivot = Point::new(0.0, dy / 2.0);
            container.position.y += dy / 2.0;
            let center = container.position.to_vec2() + view.origin_offset();
            container.rotation = center.y.atan2(center.x);
        }

        for (k, i) in range.clone().enumerate() {
            let Some((glyph, frame)) = self.resolve(glyphs[i])? else {
                continue;
            };
            #[allow(
                clippy::cast_precision_loss,
                reason = "sequence lengths stay far below 2^52"
            )]
            let rect = if local_origin {
                Rect::from_origin_size((k as f64 * dx, 0.0), cell)
            } else {
                Rect::from_origin_size((bx.x0 + i as f64 * dx, y), cell)
            };
            container.add_sprite(Sprite::new(glyph, frame, rect));
        }
        trace!(
            len = glyphs.len(),
            imin = range.start,
            imax = range.end,
            sprites = container.len(),
            "sequence sprites built"
        );
        Ok(container)
    }

    fn resolve(&self, glyph: char) -> Result<Option<(char, Rect)>, SpriteError> {
        if let Some(frame) = self.atlas.frame(glyph) {
            return Ok(Some((glyph, frame)));
        }
        match self.config.missing_glyph {
            MissingGlyph::Fail => Err(SpriteError::AtlasMissingGlyph { glyph }),
            MissingGlyph::Substitute(placeholder) => {
                let frame = self
                    .atlas
                    .frame(placeholder)
                    .ok_or(SpriteError::AtlasMissingGlyph { glyph })?;
                trace!(?glyph, ?placeholder, "missing glyph substituted");
                Ok(Some((placeholder, frame)))
            }
            MissingGlyph::Skip => {
                trace!(?glyph, "missing glyph skipped");
                Ok(None)
            }
        }
    }

    /// Attaches `container` to the surface of `kind`. Returns its index under the root.
    pub fn attach(&mut self, kind: SurfaceKind, container: Container) -> Result<usize, SpriteError> {
        Ok(self.surface_mut(kind)?.attach(container))
    }

    /// Detaches and destroys the container at `index` on the surface of `kind`.
    pub fn detach(&mut self, kind: SurfaceKind, index: usize) -> Result<Option<Container>, SpriteError> {
        Ok(self.surface_mut(kind)?.detach(index))
    }

    /// Destroys and removes everything on every surface.
    ///
    /// Returns the number of sprites released.
    pub fn clear(&mut self) -> usize {
        let released: usize = self.surfaces_mut().map(Surface::clear).sum();
        debug!(released, "sprite surfaces cleared");
        released
    }

    /// Resizes the surface of `kind` to its host's current size.
    ///
    /// Call this for the aligned surface whenever its panel is resized or
    /// shown again; a surface on a hidden host keeps its last size.
    pub fn resize_surface(
        &mut self,
        kind: SurfaceKind,
        host: &dyn HostRegion,
    ) -> Result<(), SpriteError> {
        self.surface_mut(kind)?.resize_to(host);
        Ok(())
    }

    /// Fast-path shift of everything on the surface of `kind`.
    ///
    /// See [`Surface::set_offset`].
    pub fn translate_surface(&mut self, kind: SurfaceKind, offset: Vec2) -> Result<(), SpriteError> {
        self.surface_mut(kind)?.set_offset(offset);
        Ok(())
    }

    /// Flattens the surface of `kind` into glyph draws.
    pub fn draw_list(&self, kind: SurfaceKind) -> Result<Vec<GlyphDraw>, SpriteError> {
        self.surface(kind)
            .map(Surface::draw_list)
            .ok_or(SpriteError::NoSurface { kind })
    }
}

fn create_surface(kind: SurfaceKind, host: &mut dyn HostRegion, config: &RendererConfig) -> Surface {
    let size = host.size();
    if size.width <= 0.0 || size.height <= 0.0 {
        warn!(?kind, "host region measured empty; surface starts at zero size");
    }
    host.attach_overlay(kind, &config.overlay);
    debug!(?kind, width = size.width, height = size.height, "surface created");
    Surface::new(kind, size, config.overlay)
}
