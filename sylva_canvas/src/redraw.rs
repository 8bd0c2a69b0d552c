// Copyright 2026 the Sylva Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The redraw pass and the drag-host adapter that triggers it.

use kurbo::Vec2;
use sylva_drag::{Cursor, CursorRegion, DragHost};
use sylva_sprites::{SpriteError, SpriteRenderer, SurfaceKind};
use sylva_view::ViewState;
use tracing::{debug, trace};

use crate::{CanvasError, CanvasHost};

/// Resizes the sprite surfaces to the host's current regions.
///
/// Hidden regions report no size and leave their surface as it was.
pub(crate) fn fit_surfaces<H: CanvasHost + ?Sized>(renderer: &mut SpriteRenderer, host: &H) {
    let regions = [
        (SurfaceKind::Tree, Some(host.tree_region())),
        (SurfaceKind::Aligned, host.aligned_region()),
    ];
    for (kind, region) in regions {
        let Some(region) = region else {
            continue;
        };
        if let Err(err) = renderer.resize_surface(kind, region) {
            trace!(%err, "surface resize skipped");
        }
    }
}

/// Redraws the tree for `view` and rebuilds every glyph sprite.
///
/// Surfaces are first fitted to their host regions. Every row is then built,
/// each culled to the width of the surface it lands on, and rows for the
/// aligned panel are skipped while it is hidden. Only once all rows are
/// built are both surfaces cleared and the new rows attached, so a failed
/// pass leaves the previous frame in place. Returns the number of sprites
/// attached.
pub(crate) fn redraw_pass<H: CanvasHost + ?Sized>(
    renderer: &mut SpriteRenderer,
    host: &mut H,
    view: &ViewState,
) -> Result<usize, CanvasError> {
    fit_surfaces(renderer, &*host);
    let items = host.draw_tree(view);

    let mut rows = Vec::with_capacity(items.len());
    for item in &items {
        if item.surface == SurfaceKind::Aligned && !view.aligned_visible {
            continue;
        }
        let width = renderer
            .surface(item.surface)
            .map(|surface| surface.size().width)
            .ok_or(SpriteError::NoSurface { kind: item.surface })?;
        let row = renderer.draw_sequence(view, &item.seq, item.bx, width)?;
        if !row.is_empty() {
            rows.push((item.surface, row));
        }
    }

    renderer.clear();
    let row_count = rows.len();
    let mut sprites = 0;
    for (kind, row) in rows {
        sprites += row.sprite_count();
        renderer.attach(kind, row)?;
    }
    debug!(items = items.len(), rows = row_count, sprites, "canvas redrawn");
    Ok(sprites)
}

/// Presents a renderer and a [`CanvasHost`] to the drag controller as one
/// [`DragHost`].
///
/// Fast-path translations shift both the host's vector layers and the
/// matching sprite surface. A redraw runs [`redraw_pass`] and keeps its
/// result for the caller, since the controller has no way to report it.
pub(crate) struct Wiring<'a, H: ?Sized> {
    renderer: &'a mut SpriteRenderer,
    host: &'a mut H,
    redraw: Option<Result<usize, CanvasError>>,
}

impl<'a, H: CanvasHost + ?Sized> Wiring<'a, H> {
    pub(crate) fn new(renderer: &'a mut SpriteRenderer, host: &'a mut H) -> Self {
        Self {
            renderer,
            host,
            redraw: None,
        }
    }

    /// Outcome of the redraw triggered through this adapter, if any.
    pub(crate) fn take_redraw(&mut self) -> Option<Result<usize, CanvasError>> {
        self.redraw.take()
    }

    fn shift_surface(&mut self, kind: SurfaceKind, offset: Vec2) {
        if let Err(err) = self.renderer.translate_surface(kind, offset) {
            trace!(%err, "surface shift skipped");
        }
    }
}

impl<H: CanvasHost + ?Sized> DragHost for Wiring<'_, H> {
    fn tree_panel_width(&self) -> f64 {
        self.host.tree_panel_width()
    }

    fn set_cursor(&mut self, region: CursorRegion, cursor: Cursor) {
        self.host.set_cursor(region, cursor);
    }

    fn set_aligned_width_percent(&mut self, percent: f64) {
        self.host.set_aligned_width_percent(percent);
    }

    fn retarget_aligned_surface(&mut self) {
        // A split move resizes both panels.
        fit_surfaces(&mut *self.renderer, &*self.host);
    }

    fn translate_tree_layers(&mut self, offset: Vec2) {
        self.host.translate_tree_layers(offset);
        self.shift_surface(SurfaceKind::Tree, offset);
    }

    fn translate_aligned_layers(&mut self, dx: f64) {
        self.host.translate_aligned_layers(dx);
        self.shift_surface(SurfaceKind::Aligned, Vec2::new(dx, 0.0));
    }

    fn redraw_tree(&mut self, view: &ViewState) {
        self.redraw = Some(redraw_pass(&mut *self.renderer, &mut *self.host, view));
    }

    fn refresh_info_panel(&mut self, view: &ViewState) {
        self.host.refresh_info_panel(view);
    }

    fn update_minimap_overlay(&mut self, view: &ViewState) {
        self.host.update_minimap_overlay(view);
    }
}
