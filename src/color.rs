//! Component storage and [`AnyColor`], the value accepted by every
//! [`ColorModel`](crate::ColorModel).

use crate::{
    models::{Oklab, Oklch},
    rgba::{Rgba16, Rgba8, ToRgba16},
};

/// A 64-bit floating point value that all components are stored as.
pub type Component = f64;

/// Represent the three components that describe any color.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Components(pub Component, pub Component, pub Component);

impl Components {
    /// Return new components with each component mapped with the given
    /// function.
    pub fn map(&self, f: impl Fn(Component) -> Component) -> Self {
        Self(f(self.0), f(self.1), f(self.2))
    }
}

/// A color of unknown concrete representation.
///
/// The two Oklab forms are carried by value so conversions between them can
/// short-circuit. Anything else only needs to produce premultiplied 16-bit
/// RGBA.
#[derive(Clone, Copy)]
pub enum AnyColor<'a> {
    /// A color already in the Oklab color space.
    Oklab(Oklab),
    /// A color already in the Oklch form.
    Oklch(Oklch),
    /// Any other color that can produce premultiplied RGBA.
    Other(&'a dyn ToRgba16),
}

impl std::fmt::Debug for AnyColor<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Oklab(c) => f.debug_tuple("Oklab").field(c).finish(),
            Self::Oklch(c) => f.debug_tuple("Oklch").field(c).finish(),
            Self::Other(c) => f.debug_tuple("Other").field(&c.to_rgba16()).finish(),
        }
    }
}

impl ToRgba16 for AnyColor<'_> {
    fn to_rgba16(&self) -> Rgba16 {
        match self {
            Self::Oklab(c) => c.to_rgba16(),
            Self::Oklch(c) => c.to_rgba16(),
            Self::Other(c) => c.to_rgba16(),
        }
    }

    fn as_any_color(&self) -> Option<AnyColor<'_>> {
        match self {
            Self::Other(c) => c.as_any_color(),
            color => Some(*color),
        }
    }
}

impl From<Oklab> for AnyColor<'_> {
    fn from(value: Oklab) -> Self {
        Self::Oklab(value)
    }
}

impl From<&Oklab> for AnyColor<'_> {
    fn from(value: &Oklab) -> Self {
        Self::Oklab(*value)
    }
}

impl From<Oklch> for AnyColor<'_> {
    fn from(value: Oklch) -> Self {
        Self::Oklch(value)
    }
}

impl From<&Oklch> for AnyColor<'_> {
    fn from(value: &Oklch) -> Self {
        Self::Oklch(*value)
    }
}

impl<'a> From<&'a Rgba16> for AnyColor<'a> {
    fn from(value: &'a Rgba16) -> Self {
        Self::Other(value)
    }
}

impl<'a> From<&'a Rgba8> for AnyColor<'a> {
    fn from(value: &'a Rgba8) -> Self {
        Self::Other(value)
    }
}

impl<'a> From<&'a dyn ToRgba16> for AnyColor<'a> {
    fn from(value: &'a dyn ToRgba16) -> Self {
        value.as_any_color().unwrap_or(Self::Other(value))
    }
}
