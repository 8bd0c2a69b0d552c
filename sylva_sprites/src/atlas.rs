// Copyright 2026 the Sylva Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Glyph atlases: one image page with a sub-rectangle per character.

use core::future::Future;

use hashbrown::HashMap;
use kurbo::{Rect, Size};
use peniko::{ImageAlphaType, ImageFormat};

use crate::AtlasError;

/// Description of the single image page an atlas is cut from.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AtlasPage {
    /// Page width in pixels.
    pub width: u32,
    /// Page height in pixels.
    pub height: u32,
    /// Pixel format of the page.
    pub format: ImageFormat,
    /// Alpha encoding of the page pixels.
    pub alpha_type: ImageAlphaType,
}

impl AtlasPage {
    /// An RGBA8 page with straight alpha.
    #[must_use]
    pub fn rgba8(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            format: ImageFormat::Rgba8,
            alpha_type: ImageAlphaType::Alpha,
        }
    }

    /// The page bounds in pixel coordinates.
    #[must_use]
    pub fn bounds(&self) -> Rect {
        Rect::new(0.0, 0.0, f64::from(self.width), f64::from(self.height))
    }
}

/// Raw atlas contents as produced by an [`AtlasSource`].
#[derive(Clone, Debug, PartialEq)]
pub struct AtlasData {
    /// The image page.
    pub page: AtlasPage,
    /// Frame of each glyph in page pixels. Later entries win on duplicates.
    pub frames: Vec<(char, Rect)>,
}

impl AtlasData {
    /// Lays `glyphs` out on a uniform grid of `cell`-sized frames, `columns` per row.
    ///
    /// Handy for generated sprite sheets and tests.
    #[must_use]
    pub fn grid(glyphs: &str, cell: Size, columns: u32) -> Self {
        let columns = columns.max(1);
        let count = u32::try_from(glyphs.chars().count()).unwrap_or(u32::MAX);
        let rows = count.div_ceil(columns).max(1);
        let frames = glyphs
            .chars()
            .zip(0_u32..)
            .map(|(glyph, i)| {
                let x = f64::from(i % columns) * cell.width;
                let y = f64::from(i / columns) * cell.height;
                (glyph, Rect::from_origin_size((x, y), cell))
            })
            .collect();
        let page = AtlasPage::rgba8(
            pixels(f64::from(columns) * cell.width),
            pixels(f64::from(rows) * cell.height),
        );
        Self { page, frames }
    }
}

fn pixels(extent: f64) -> u32 {
    #[allow(
        clippy::cast_possible_truncation,
        reason = "extent is clamped into the u32 range first"
    )]
    let px = extent.ceil().clamp(0.0, f64::from(u32::MAX)) as u32;
    px
}

/// Something an atlas can be loaded from: a URL, a file, an embedded sheet.
///
/// Loading is the only suspension point of the renderer. Sources decide
/// whether it actually waits on anything.
pub trait AtlasSource {
    /// Stable identifier of the resource, used in logs and errors.
    fn id(&self) -> &str;

    /// Loads the atlas contents.
    fn load(&self) -> impl Future<Output = Result<AtlasData, AtlasError>>;
}

/// An atlas source backed by data already in memory.
#[derive(Clone, Debug)]
pub struct StaticAtlas {
    id: String,
    data: AtlasData,
}

impl StaticAtlas {
    /// Wraps `data` under the identifier `id`.
    pub fn new(id: impl Into<String>, data: AtlasData) -> Self {
        Self {
            id: id.into(),
            data,
        }
    }
}

impl AtlasSource for StaticAtlas {
    fn id(&self) -> &str {
        &self.id
    }

    fn load(&self) -> impl Future<Output = Result<AtlasData, AtlasError>> {
        let data = self.data.clone();
        async move { Ok(data) }
    }
}

/// A validated glyph atlas.
#[derive(Clone, Debug)]
pub struct Atlas {
    id: String,
    page: AtlasPage,
    frames: HashMap<char, Rect>,
}

impl Atlas {
    /// Validates `data` and builds an atlas.
    ///
    /// Fails if the page is empty or any frame is empty or falls outside it.
    pub fn from_data(id: impl Into<String>, data: AtlasData) -> Result<Self, AtlasError> {
        let AtlasData { page, frames } = data;
        if page.width == 0 || page.height == 0 {
            return Err(AtlasError::EmptyPage);
        }
        let bounds = page.bounds();
        let mut map = HashMap::with_capacity(frames.len());
        for (glyph, frame) in frames {
            let inside = frame.x0 >= bounds.x0
                && frame.y0 >= bounds.y0
                && frame.x1 <= bounds.x1
                && frame.y1 <= bounds.y1;
            let empty = frame.x1 <= frame.x0 || frame.y1 <= frame.y0;
            if !inside || empty {
                return Err(AtlasError::FrameOutOfBounds {
                    glyph,
                    width: page.width,
                    height: page.height,
                });
            }
            map.insert(glyph, frame);
        }
        Ok(Self {
            id: id.into(),
            page,
            frames: map,
        })
    }

    /// Identifier of the source this atlas came from.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// The image page.
    #[must_use]
    pub fn page(&self) -> &AtlasPage {
        &self.page
    }

    /// Frame of `glyph` in page pixels.
    #[must_use]
    pub fn frame(&self, glyph: char) -> Option<Rect> {
        self.frames.get(&glyph).copied()
    }

    /// Returns `true` if the atlas has an image for `glyph`.
    #[must_use]
    pub fn contains(&self, glyph: char) -> bool {
        self.frames.contains_key(&glyph)
    }

    /// Number of glyphs.
    #[must_use]
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    /// Returns `true` if the atlas has no glyphs.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }
}
