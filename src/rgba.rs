//! Packed, premultiplied RGBA colors.

use crate::color::AnyColor;

/// Produce premultiplied RGBA with 16 bits per channel.
///
/// This is the only capability needed from a color to convert it into the
/// Oklab color space.
pub trait ToRgba16 {
    /// Return the premultiplied red, green, blue and alpha channels.
    fn to_rgba16(&self) -> Rgba16;

    /// Return the color as one of the Oklab forms if it already is one, so
    /// colors behind a `dyn ToRgba16` convert without going through RGBA.
    fn as_any_color(&self) -> Option<AnyColor<'_>> {
        None
    }
}

/// A premultiplied color with 16 bits per channel.
///
/// No color channel is expected to exceed `alpha`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Rgba16 {
    /// The red channel.
    pub red: u16,
    /// The green channel.
    pub green: u16,
    /// The blue channel.
    pub blue: u16,
    /// The alpha channel.
    pub alpha: u16,
}

impl Rgba16 {
    /// Create a new color from premultiplied channels.
    pub const fn new(red: u16, green: u16, blue: u16, alpha: u16) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }
}

impl ToRgba16 for Rgba16 {
    fn to_rgba16(&self) -> Rgba16 {
        *self
    }
}

impl From<Rgba16> for (u16, u16, u16, u16) {
    fn from(value: Rgba16) -> Self {
        (value.red, value.green, value.blue, value.alpha)
    }
}

impl From<Rgba16> for [u16; 4] {
    fn from(value: Rgba16) -> Self {
        [value.red, value.green, value.blue, value.alpha]
    }
}

/// A premultiplied color with 8 bits per channel.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Rgba8 {
    /// The red channel.
    pub red: u8,
    /// The green channel.
    pub green: u8,
    /// The blue channel.
    pub blue: u8,
    /// The alpha channel.
    pub alpha: u8,
}

impl Rgba8 {
    /// Create a new color from premultiplied channels.
    pub const fn new(red: u8, green: u8, blue: u8, alpha: u8) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }
}

impl ToRgba16 for Rgba8 {
    fn to_rgba16(&self) -> Rgba16 {
        // 0xff widens to 0xffff.
        let widen = |v: u8| v as u16 * 0x101;
        Rgba16::new(
            widen(self.red),
            widen(self.green),
            widen(self.blue),
            widen(self.alpha),
        )
    }
}

impl From<Rgba16> for Rgba8 {
    fn from(value: Rgba16) -> Self {
        let narrow = |v: u16| (v >> 8) as u8;
        Self::new(
            narrow(value.red),
            narrow(value.green),
            narrow(value.blue),
            narrow(value.alpha),
        )
    }
}
