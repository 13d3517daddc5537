//! The sRGB transfer function.
//! <https://bottosson.github.io/posts/colorwrong/#what-can-we-do%3F>

use crate::color::{Component, Components};

/// Convert a gamma encoded sRGB value to linear light.
///
/// The input is not clamped; values outside of `[0..1]` follow the same
/// curve (negative values use the linear segment).
pub fn to_linear(value: Component) -> Component {
    if value >= 0.04045 {
        ((value + 0.055) / 1.055).powf(2.4)
    } else {
        value / 12.92
    }
}

/// Convert a linear light sRGB value to gamma encoded. The inverse of
/// [`to_linear`].
pub fn to_non_linear(value: Component) -> Component {
    if value >= 0.0031308 {
        1.055 * value.powf(1.0 / 2.4) - 0.055
    } else {
        12.92 * value
    }
}

pub(crate) fn to_linear_light(from: &Components) -> Components {
    from.map(to_linear)
}

pub(crate) fn to_gamma_encoded(from: &Components) -> Components {
    from.map(to_non_linear)
}
