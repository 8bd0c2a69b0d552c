// Copyright 2026 the Sylva Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::OverlayStyle;

/// Which characters of a sequence get sprites.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Culling {
    /// Every character.
    Unculled,
    /// Only characters whose cell overlaps `[0, visible_max_width]`.
    #[default]
    VisibleWindow,
}

/// How sprite positions are expressed in the returned container.
///
/// Both placements produce the same surface pixels for every glyph.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Placement {
    /// The container sits at the origin; each sprite carries its absolute position.
    #[default]
    Absolute,
    /// The container sits at the first drawn cell; sprites are offset from it.
    ///
    /// Circular layouts always use this placement, since the row is rotated
    /// as a whole about the container's pivot.
    LocalOrigin,
}

/// What to do with a character the atlas has no image for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MissingGlyph {
    /// Fail the draw with [`SpriteError::AtlasMissingGlyph`](crate::SpriteError::AtlasMissingGlyph).
    #[default]
    Fail,
    /// Draw this placeholder instead. Fails if the placeholder is missing too.
    Substitute(char),
    /// Leave the cell empty.
    Skip,
}

/// Renderer configuration.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct RendererConfig {
    /// Culling policy for [`SpriteRenderer::draw_sequence`](crate::SpriteRenderer::draw_sequence).
    pub culling: Culling,
    /// Placement for rectangular layouts.
    pub placement: Placement,
    /// Missing glyph policy.
    pub missing_glyph: MissingGlyph,
    /// Overlay style applied to every surface.
    pub overlay: OverlayStyle,
}
