// Copyright 2026 the Sylva Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Rect, Size, Vec2};

use crate::{Shape, SplitRatio};

/// Scroll state of the aligned panel.
///
/// The aligned panel only scrolls horizontally. `origin` is the leftmost
/// visible position in aligned-panel units and is never negative once a drag
/// has touched it.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AlignedPanel {
    /// Horizontal scroll offset.
    pub origin: f64,
    /// Zoom of the aligned panel, compounded with the tree's horizontal zoom.
    pub zoom: f64,
}

impl Default for AlignedPanel {
    fn default() -> Self {
        Self {
            origin: 0.0,
            zoom: 1.0,
        }
    }
}

/// Minimap overview state.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Minimap {
    /// Per-axis zoom of the overview.
    pub zoom: Vec2,
    /// Whether the minimap is shown.
    pub visible: bool,
}

impl Default for Minimap {
    fn default() -> Self {
        Self {
            zoom: Vec2::new(1.0, 1.0),
            visible: false,
        }
    }
}

/// Everything a tree canvas needs to know about what is on screen.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ViewState {
    /// Top-left corner of the visible tree region, in tree coordinates.
    pub pan_offset: Point,
    /// Horizontal and vertical zoom of the tree panel.
    pub zoom: Vec2,
    /// Aligned panel scroll state.
    pub aligned: AlignedPanel,
    /// Whether the aligned panel is shown.
    pub aligned_visible: bool,
    /// Width split between the tree panel and the aligned panel.
    pub split_ratio: SplitRatio,
    /// Minimap state.
    pub minimap: Minimap,
    /// Tree layout.
    pub shape: Shape,
    array_padding: f64,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            pan_offset: Point::ZERO,
            zoom: Vec2::new(1.0, 1.0),
            aligned: AlignedPanel::default(),
            aligned_visible: false,
            split_ratio: SplitRatio::default(),
            minimap: Minimap::default(),
            shape: Shape::default(),
            array_padding: 0.0,
        }
    }
}

impl ViewState {
    /// Fraction of a cell's height used as vertical padding around glyphs.
    #[must_use]
    pub fn array_padding(&self) -> f64 {
        self.array_padding
    }

    /// Sets the array padding, clamped into `[0, 1]`.
    ///
    /// `NaN` resets it to no padding.
    pub fn set_array_padding(&mut self, fraction: f64) {
        self.array_padding = if fraction.is_nan() {
            0.0
        } else {
            fraction.clamp(0.0, 1.0)
        };
    }

    /// Builder-style variant of [`ViewState::set_array_padding`].
    #[must_use]
    pub fn with_array_padding(mut self, fraction: f64) -> Self {
        self.set_array_padding(fraction);
        self
    }

    /// Pixel offset of the tree origin inside the tree panel.
    ///
    /// Adding this to a panel-local pixel position gives the position
    /// relative to the tree's own origin, which is the center in circular
    /// layouts.
    #[must_use]
    pub fn origin_offset(&self) -> Vec2 {
        Vec2::new(
            self.zoom.x * self.pan_offset.x,
            self.zoom.y * self.pan_offset.y,
        )
    }

    /// Converts a point in tree coordinates into tree-panel pixels.
    #[must_use]
    pub fn tree_to_pixel(&self, pt: Point) -> Point {
        Point::new(
            self.zoom.x * (pt.x - self.pan_offset.x),
            self.zoom.y * (pt.y - self.pan_offset.y),
        )
    }

    /// Converts a tree-panel pixel position into tree coordinates.
    #[must_use]
    pub fn pixel_to_tree(&self, pt: Point) -> Point {
        Point::new(
            self.pan_offset.x + pt.x / self.zoom.x,
            self.pan_offset.y + pt.y / self.zoom.y,
        )
    }

    /// Returns the tree-space rectangle visible in a panel of `panel` pixels.
    ///
    /// The minimap overlay draws this rectangle.
    #[must_use]
    pub fn visible_tree_rect(&self, panel: Size) -> Rect {
        Rect::from_origin_size(
            self.pan_offset,
            Size::new(panel.width / self.zoom.x, panel.height / self.zoom.y),
        )
    }
}
