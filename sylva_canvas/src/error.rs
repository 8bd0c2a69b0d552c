// Copyright 2026 the Sylva Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use sylva_sprites::SpriteError;

/// Errors reported by a [`Canvas`](crate::Canvas).
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CanvasError {
    /// The sprite renderer failed, while loading its atlas or while drawing.
    #[error(transparent)]
    Sprites(#[from] SpriteError),
}
