// Copyright 2026 the Sylva Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Percentage of the canvas width given to the tree panel.
///
/// The value always stays within [`SplitRatio::MIN`]..=[`SplitRatio::MAX`]:
/// every constructor and mutator clamps, so there is no way to observe an
/// out-of-range ratio, even halfway through a drag.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "f64", into = "f64"))]
pub struct SplitRatio(f64);

impl SplitRatio {
    /// Smallest allowed ratio.
    pub const MIN: f64 = 1.0;
    /// Largest allowed ratio.
    pub const MAX: f64 = 99.0;

    /// Creates a ratio, clamping `percent` into range.
    ///
    /// `NaN` maps to [`SplitRatio::MAX`] so a corrupt input still yields a
    /// usable split.
    #[must_use]
    pub fn new(percent: f64) -> Self {
        Self(Self::clamp(percent))
    }

    /// Returns the ratio as a percentage.
    #[must_use]
    pub fn get(self) -> f64 {
        self.0
    }

    /// Returns the percentage left over for the aligned panel.
    #[must_use]
    pub fn complement(self) -> f64 {
        100.0 - self.0
    }

    /// Sets the ratio, clamping into range.
    pub fn set(&mut self, percent: f64) {
        self.0 = Self::clamp(percent);
    }

    /// Adds `delta` percentage points and clamps into range.
    pub fn adjust(&mut self, delta: f64) {
        self.set(self.0 + delta);
    }

    fn clamp(percent: f64) -> f64 {
        if percent.is_nan() {
            Self::MAX
        } else {
            percent.clamp(Self::MIN, Self::MAX)
        }
    }
}

impl Default for SplitRatio {
    fn default() -> Self {
        Self(80.0)
    }
}

impl From<f64> for SplitRatio {
    fn from(percent: f64) -> Self {
        Self::new(percent)
    }
}

impl From<SplitRatio> for f64 {
    fn from(ratio: SplitRatio) -> Self {
        ratio.0
    }
}
