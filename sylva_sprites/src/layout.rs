// Copyright 2026 the Sylva Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Cell arithmetic shared by every way of laying out a sequence.

use core::ops::Range;

/// Shrinks the interval `[y0, y0 + height]` by `fraction` of its height,
/// keeping it centered. Returns the new start and height.
///
/// ```
/// use sylva_sprites::pad;
///
/// assert_eq!(pad(0.0, 10.0, 0.5), (2.5, 5.0));
/// assert_eq!(pad(4.0, 10.0, 0.0), (4.0, 10.0));
/// ```
#[must_use]
pub fn pad(y0: f64, height: f64, fraction: f64) -> (f64, f64) {
    let padded = height * (1.0 - fraction);
    (y0 + (height - padded) / 2.0, padded)
}

/// Indices of the cells of a sequence that overlap `[0, visible_max_width]`.
///
/// The sequence has `len` cells of width `cell_width`, starting at `x0`.
/// Cells that are only partially visible are included. Returns an empty
/// range when nothing is visible or the geometry is degenerate.
///
/// ```
/// use sylva_sprites::visible_range;
///
/// // Ten cells of width 10 starting at -25: cells 2..8 overlap [0, 50].
/// assert_eq!(visible_range(-25.0, 10.0, 10, 50.0), 2..8);
/// ```
#[must_use]
pub fn visible_range(x0: f64, cell_width: f64, len: usize, visible_max_width: f64) -> Range<usize> {
    if len == 0 || cell_width.is_nan() || cell_width <= 0.0 {
        return 0..0;
    }
    let first = ((0.0 - x0) / cell_width).floor();
    let last = ((visible_max_width - x0) / cell_width).ceil();
    let imin = clamp_index(first, len);
    let imax = clamp_index(last, len);
    if imin >= imax { 0..0 } else { imin..imax }
}

fn clamp_index(index: f64, len: usize) -> usize {
    if index.is_nan() || index <= 0.0 {
        return 0;
    }
    #[allow(
        clippy::cast_precision_loss,
        reason = "sequence lengths stay far below 2^52"
    )]
    let end = len as f64;
    if index >= end {
        return len;
    }
    #[allow(
        clippy::cast_possible_truncation,
        reason = "index is a whole number in (0, len)"
    )]
    let index = index as usize;
    index
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pad_keeps_the_cell_centered() {
        let (y, h) = pad(100.0, 20.0, 0.25);
        assert_eq!(h, 15.0);
        assert_eq!(y, 102.5);
        assert_eq!(y + h / 2.0, 110.0);
    }

    #[test]
    fn full_padding_collapses_to_the_middle() {
        assert_eq!(pad(0.0, 8.0, 1.0), (4.0, 0.0));
    }

    #[test]
    fn whole_sequence_visible() {
        assert_eq!(visible_range(0.0, 10.0, 4, 40.0), 0..4);
        assert_eq!(visible_range(0.0, 10.0, 4, 1_000.0), 0..4);
    }

    #[test]
    fn partially_visible_cells_are_kept() {
        // Cell 0 spans [-5, 5], cell 3 spans [25, 35] and both overlap [0, 30].
        assert_eq!(visible_range(-5.0, 10.0, 6, 30.0), 0..4);
    }

    #[test]
    fn sequence_left_of_window() {
        assert_eq!(visible_range(-100.0, 10.0, 4, 50.0), 0..0);
    }

    #[test]
    fn sequence_right_of_window() {
        assert_eq!(visible_range(60.0, 10.0, 4, 50.0), 0..0);
    }

    #[test]
    fn degenerate_geometry_is_empty() {
        assert_eq!(visible_range(0.0, 10.0, 0, 50.0), 0..0);
        assert_eq!(visible_range(0.0, 0.0, 4, 50.0), 0..0);
        assert_eq!(visible_range(0.0, f64::NAN, 4, 50.0), 0..0);
    }
}
