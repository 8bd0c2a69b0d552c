// Copyright 2026 the Sylva Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Point;
use sylva_drag::{DragController, DragTarget};
use sylva_sprites::{AtlasSource, SpriteRenderer};
use sylva_view::ViewState;
use tracing::{debug, trace};

use crate::redraw::{Wiring, redraw_pass};
use crate::{CanvasConfig, CanvasError, CanvasHost};

/// A tree canvas: one view state, one drag controller, one sprite renderer.
///
/// Pointer events go in through [`Canvas::pointer_down`],
/// [`Canvas::pointer_move`] and [`Canvas::pointer_up`]. While the pointer
/// moves, the view state is updated and drawn layers are shifted in place;
/// on release the tree is redrawn once and the glyph sprites are rebuilt.
#[derive(Debug)]
pub struct Canvas<H> {
    view: ViewState,
    drag: DragController,
    renderer: SpriteRenderer,
    host: H,
}

impl<H: CanvasHost> Canvas<H> {
    /// Creates the sprite surfaces in `host`'s regions and loads the atlas.
    ///
    /// Resolves once the atlas has loaded. Does not draw anything; call
    /// [`Canvas::redraw`] for the first frame.
    pub async fn new<S: AtlasSource>(
        config: CanvasConfig,
        mut host: H,
        source: &S,
    ) -> Result<Self, CanvasError> {
        let CanvasConfig { renderer, view } = config;
        let renderer = SpriteRenderer::init(renderer, host.surface_hosts(), source).await?;
        debug!(atlas = renderer.atlas().id(), "canvas ready");
        Ok(Self::from_parts(view, renderer, host))
    }

    /// Assembles a canvas around an already initialized renderer.
    pub fn from_parts(view: ViewState, renderer: SpriteRenderer, host: H) -> Self {
        Self {
            view,
            drag: DragController::new(),
            renderer,
            host,
        }
    }

    /// Current view state.
    #[must_use]
    pub fn view(&self) -> &ViewState {
        &self.view
    }

    /// Mutable view state, for zooming and other changes made outside a drag.
    ///
    /// Changes show up on the next [`Canvas::redraw`].
    pub fn view_mut(&mut self) -> &mut ViewState {
        &mut self.view
    }

    /// The drag controller.
    #[must_use]
    pub fn drag(&self) -> &DragController {
        &self.drag
    }

    /// The sprite renderer.
    #[must_use]
    pub fn renderer(&self) -> &SpriteRenderer {
        &self.renderer
    }

    /// The host.
    #[must_use]
    pub fn host(&self) -> &H {
        &self.host
    }

    /// Mutable access to the host.
    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    /// Starts a drag of `target` at `point`, replacing any drag in progress.
    pub fn pointer_down(&mut self, point: Point, target: DragTarget) {
        let mut wiring = Wiring::new(&mut self.renderer, &mut self.host);
        self.drag.begin(&mut wiring, point, target);
    }

    /// Feeds a pointer position into the drag in progress, if any.
    pub fn pointer_move(&mut self, point: Point) {
        let mut wiring = Wiring::new(&mut self.renderer, &mut self.host);
        self.drag.move_to(&mut self.view, &mut wiring, point);
    }

    /// Ends the drag in progress, if any.
    ///
    /// Returns `Ok(true)` if the drag moved anything and the canvas was
    /// redrawn. A failed redraw still ends the drag.
    pub fn pointer_up(&mut self) -> Result<bool, CanvasError> {
        let mut wiring = Wiring::new(&mut self.renderer, &mut self.host);
        let redrawn = self.drag.end(&self.view, &mut wiring);
        match wiring.take_redraw() {
            Some(Err(err)) => Err(err),
            _ => Ok(redrawn),
        }
    }

    /// Drops the drag in progress without redrawing.
    ///
    /// Layers shifted during the drag stay shifted until the next redraw.
    pub fn pointer_cancel(&mut self) {
        let mut wiring = Wiring::new(&mut self.renderer, &mut self.host);
        self.drag.cancel(&mut wiring);
    }

    /// Redraws the tree and rebuilds every glyph sprite for the current view.
    ///
    /// The sprite surfaces are resized to the host's regions first, so hosts
    /// call this after the window or a panel changes size. If any row fails
    /// to build, the previous sprites stay as they were. Returns the number
    /// of sprites attached.
    pub fn redraw(&mut self) -> Result<usize, CanvasError> {
        redraw_pass(&mut self.renderer, &mut self.host, &self.view)
    }

    /// Shows or hides the aligned panel and redraws.
    ///
    /// Show the host's aligned region before calling this, so the redraw can
    /// measure it.
    pub fn set_aligned_visible(&mut self, visible: bool) -> Result<usize, CanvasError> {
        self.view.aligned_visible = visible;
        trace!(visible, "aligned panel visibility changed");
        self.redraw()
    }
}
