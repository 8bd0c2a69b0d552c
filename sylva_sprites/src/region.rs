// Copyright 2026 the Sylva Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A headless [`HostRegion`] for tests and offscreen rendering.

use kurbo::Size;

use crate::{HostRegion, OverlayStyle, SurfaceKind};

/// Host region with a fixed size that remembers what was done to it.
///
/// Like a layout engine measuring a hidden element, it reports a zero size
/// while hidden.
#[derive(Clone, Debug)]
pub struct FixedRegion {
    /// Size reported while visible.
    pub size: Size,
    visible: bool,
    visibility_changes: Vec<bool>,
    overlays: Vec<(SurfaceKind, OverlayStyle)>,
}

impl FixedRegion {
    /// A visible region of `size`.
    #[must_use]
    pub fn visible(size: Size) -> Self {
        Self {
            size,
            visible: true,
            visibility_changes: Vec::new(),
            overlays: Vec::new(),
        }
    }

    /// A hidden region that measures `size` once shown.
    #[must_use]
    pub fn hidden(size: Size) -> Self {
        Self {
            visible: false,
            ..Self::visible(size)
        }
    }

    /// Every visibility change, in order.
    #[must_use]
    pub fn visibility_changes(&self) -> &[bool] {
        &self.visibility_changes
    }

    /// Overlays attached to this region.
    #[must_use]
    pub fn overlays(&self) -> &[(SurfaceKind, OverlayStyle)] {
        &self.overlays
    }
}

impl HostRegion for FixedRegion {
    fn size(&self) -> Size {
        if self.visible { self.size } else { Size::ZERO }
    }

    fn is_visible(&self) -> bool {
        self.visible
    }

    fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
        self.visibility_changes.push(visible);
    }

    fn attach_overlay(&mut self, kind: SurfaceKind, style: &OverlayStyle) {
        self.overlays.push((kind, *style));
    }
}
