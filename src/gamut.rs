//! Checking and clipping colors against the sRGB gamut.
//!
//! Clipping clamps each linear sRGB channel on its own. It is lossy and does
//! not preserve hue or lightness the way a gamut mapping would.

use crate::{Component, Oklab, Oklch};

/// The Oklab matrices are only inverses of each other to about 1e-7, so a
/// clipped color decodes to values just outside of `[0..1]`.
const EPSILON: Component = 1.0e-6;

#[allow(clippy::manual_range_contains)]
fn in_zero_to_one(value: Component) -> bool {
    value >= -EPSILON && value <= 1.0 + EPSILON
}

impl Oklab {
    /// Returns true if the color can be displayed in sRGB without clamping.
    pub fn in_gamut(&self) -> bool {
        let rgb = self.to_linear_srgb();
        in_zero_to_one(rgb.0) && in_zero_to_one(rgb.1) && in_zero_to_one(rgb.2)
    }

    /// Return a color with each linear sRGB channel and the alpha clamped to
    /// `[0..1]`.
    /// NOTE: This is a lossy operation.
    pub fn clip(&self) -> Self {
        Self::from_linear_srgb(
            self.to_linear_srgb().map(|v| v.clamp(0.0, 1.0)),
            self.alpha.clamp(0.0, 1.0),
        )
    }
}

impl Oklch {
    /// Returns true if the color can be displayed in sRGB without clamping.
    pub fn in_gamut(&self) -> bool {
        self.to_oklab().in_gamut()
    }

    /// Return a color with each linear sRGB channel and the alpha clamped to
    /// `[0..1]`.
    /// NOTE: This is a lossy operation.
    pub fn clip(&self) -> Self {
        self.to_oklab().clip().to_oklch()
    }
}
