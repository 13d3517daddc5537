//! Interpolation between colors, e.g. for gradients.

use std::f64::consts::{PI, TAU};

use num_traits::Float;

use crate::{Component, Oklab, Oklch};

fn lerp<T: Float>(a: T, b: T, t: T) -> T {
    a + (b - a) * t
}

/// Normalize a hue in radians to `(-PI..PI]`.
fn normalize_hue(hue: Component) -> Component {
    let hue = hue.rem_euclid(TAU);
    if hue > PI {
        hue - TAU
    } else {
        hue
    }
}

/// Interpolate along the shorter arc between two hues.
fn lerp_hue(from: Component, to: Component, t: Component) -> Component {
    let mut delta = (to - from).rem_euclid(TAU);
    if delta > PI {
        delta -= TAU;
    }
    normalize_hue(from + delta * t)
}

impl Oklab {
    /// Linearly interpolate from this color to another using `t` as the
    /// progress between them.
    pub fn interpolate(&self, other: &Self, t: Component) -> Self {
        Self::new(
            lerp(self.lightness, other.lightness, t),
            lerp(self.a, other.a, t),
            lerp(self.b, other.b, t),
            lerp(self.alpha, other.alpha, t),
        )
    }
}

impl Oklch {
    /// Interpolate from this color to another using `t` as the progress
    /// between them.
    ///
    /// The hue takes the shorter way around. If only one of the colors has a
    /// hue, that hue is used throughout.
    pub fn interpolate(&self, other: &Self, t: Component) -> Self {
        let valid = |hue: Option<Component>| hue.filter(|h| !h.is_nan());

        let hue = match (valid(self.hue), valid(other.hue)) {
            (Some(from), Some(to)) => Some(lerp_hue(from, to, t)),
            (Some(hue), None) | (None, Some(hue)) => Some(hue),
            (None, None) => None,
        };

        Self::new(
            lerp(self.lightness, other.lightness, t),
            lerp(self.chroma, other.chroma, t),
            hue,
            lerp(self.alpha, other.alpha, t),
        )
    }
}
