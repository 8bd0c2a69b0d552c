// Copyright 2026 the Sylva Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Layout used to draw the tree.
///
/// The shape changes how sprites drawn on top of the tree are oriented: in
/// circular layouts every row follows the tree's radial direction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Shape {
    /// Tips laid out top to bottom, branches growing to the right.
    #[default]
    Rectangular,
    /// Tips laid out around a circle, branches growing outwards.
    Circular,
}

impl Shape {
    /// Returns `true` for [`Shape::Circular`].
    #[must_use]
    pub fn is_circular(self) -> bool {
        matches!(self, Self::Circular)
    }
}
