// Copyright 2026 the Sylva Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::SurfaceKind;

/// Why an atlas source could not produce a usable atlas.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum AtlasError {
    /// The resource could not be reached.
    #[error("atlas resource unreachable: {0}")]
    Unreachable(String),
    /// The resource was reached but could not be decoded.
    #[error("atlas resource is corrupt: {0}")]
    Corrupt(String),
    /// The atlas page has a zero dimension.
    #[error("atlas page is empty")]
    EmptyPage,
    /// A glyph frame is empty or extends past the page.
    #[error("frame for {glyph:?} does not fit the {width}x{height} atlas page")]
    FrameOutOfBounds {
        /// Glyph whose frame is invalid.
        glyph: char,
        /// Page width in pixels.
        width: u32,
        /// Page height in pixels.
        height: u32,
    },
}

/// Errors reported by the sprite renderer.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SpriteError {
    /// The glyph atlas could not be loaded. Fatal for the renderer.
    #[error("failed to load glyph atlas `{source_id}`")]
    AtlasLoadFailure {
        /// Identifier of the atlas source.
        source_id: String,
        /// What went wrong.
        #[source]
        reason: AtlasError,
    },
    /// A requested character has no image in the atlas.
    #[error("glyph atlas has no image for {glyph:?}")]
    AtlasMissingGlyph {
        /// The character that was looked up.
        glyph: char,
    },
    /// The renderer was initialized without the requested surface.
    #[error("no {kind:?} surface was initialized")]
    NoSurface {
        /// Surface that was asked for.
        kind: SurfaceKind,
    },
}
