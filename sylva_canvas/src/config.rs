// Copyright 2026 the Sylva Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use sylva_sprites::RendererConfig;
use sylva_view::ViewState;

/// Canvas configuration.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CanvasConfig {
    /// Configuration of the glyph sprite renderer.
    pub renderer: RendererConfig,
    /// View the canvas starts with.
    pub view: ViewState,
}
