//! Color models normalize a color of any representation into their own.
//!
//! Models hold no state; use the unit structs directly:
//!
//! ```rust
//! use oklab::{ColorModel, OklabModel, Rgba8, Rgba8Model};
//!
//! let red = Rgba8::new(255, 0, 0, 255);
//! let lab = OklabModel.convert(&red);
//! assert_eq!(Rgba8Model.convert(lab), red);
//! ```

use crate::{
    color::AnyColor,
    error::Error,
    models::{Oklab, Oklch},
    rgba::{Rgba16, Rgba8, ToRgba16},
};

/// A conversion from a color of any representation into the model's own.
pub trait ColorModel {
    /// The color produced by this model.
    type Color;

    /// Convert `color` into this model.
    fn convert<'a>(&self, color: impl Into<AnyColor<'a>>) -> Self::Color;
}

/// Converts any color into the Oklab color space.
#[derive(Clone, Copy, Debug, Default)]
pub struct OklabModel;

impl ColorModel for OklabModel {
    type Color = Oklab;

    fn convert<'a>(&self, color: impl Into<AnyColor<'a>>) -> Oklab {
        match color.into() {
            AnyColor::Oklab(c) => c,
            AnyColor::Oklch(c) => c.to_oklab(),
            AnyColor::Other(c) => Oklab::from_rgba16(c.to_rgba16()),
        }
    }
}

impl OklabModel {
    /// Like [`ColorModel::convert`], but fails instead of producing a
    /// degenerate color when the source is fully transparent.
    pub fn try_convert<'a>(&self, color: impl Into<AnyColor<'a>>) -> Result<Oklab, Error> {
        match color.into() {
            // Only colors that still have to be un-premultiplied can fail.
            AnyColor::Other(c) => {
                let rgba = c.to_rgba16();
                if rgba.alpha == 0 {
                    return Err(Error::FullyTransparent);
                }
                Ok(Oklab::from_rgba16(rgba))
            }
            color => Ok(self.convert(color)),
        }
    }
}

/// Converts any color into the Oklch form.
#[derive(Clone, Copy, Debug, Default)]
pub struct OklchModel;

impl ColorModel for OklchModel {
    type Color = Oklch;

    fn convert<'a>(&self, color: impl Into<AnyColor<'a>>) -> Oklch {
        match color.into() {
            AnyColor::Oklch(c) => c,
            color => OklabModel.convert(color).to_oklch(),
        }
    }
}

impl OklchModel {
    /// Like [`ColorModel::convert`], but fails instead of producing a
    /// degenerate color when the source is fully transparent.
    pub fn try_convert<'a>(&self, color: impl Into<AnyColor<'a>>) -> Result<Oklch, Error> {
        match color.into() {
            AnyColor::Oklch(c) => Ok(c),
            color => OklabModel.try_convert(color).map(|c| c.to_oklch()),
        }
    }
}

/// Converts any color into premultiplied RGBA with 16 bits per channel.
#[derive(Clone, Copy, Debug, Default)]
pub struct Rgba16Model;

impl ColorModel for Rgba16Model {
    type Color = Rgba16;

    fn convert<'a>(&self, color: impl Into<AnyColor<'a>>) -> Rgba16 {
        color.into().to_rgba16()
    }
}

/// Converts any color into premultiplied RGBA with 8 bits per channel.
#[derive(Clone, Copy, Debug, Default)]
pub struct Rgba8Model;

impl ColorModel for Rgba8Model {
    type Color = Rgba8;

    fn convert<'a>(&self, color: impl Into<AnyColor<'a>>) -> Rgba8 {
        Rgba16Model.convert(color).into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{assert_component_eq, Component};

    fn round_trip(rgb: Rgba8) {
        let via_oklab = Rgba8Model.convert(OklabModel.convert(&rgb));
        assert_eq!(via_oklab, rgb, "via oklab");

        let via_oklch = Rgba8Model.convert(OklchModel.convert(&rgb));
        assert_eq!(via_oklch, rgb, "via oklch");
    }

    #[test]
    fn precision() {
        const NUM: u32 = 17;

        let level = |i: u32| (255.0 * i as Component / (NUM - 1) as Component) as u8;

        for i in 0..NUM {
            for j in 0..NUM {
                for k in 0..NUM {
                    round_trip(Rgba8::new(level(i), level(j), level(k), 0xff));
                }
            }
        }
    }

    #[test]
    fn every_channel_level() {
        for v in 0..=u8::MAX {
            round_trip(Rgba8::new(v, 0, 0, 0xff));
            round_trip(Rgba8::new(0, v, 0, 0xff));
            round_trip(Rgba8::new(0, 0, v, 0xff));
            round_trip(Rgba8::new(v, v, v, 0xff));
        }
    }

    #[test]
    #[ignore = "slow, covers all 16.7 million opaque colors"]
    fn every_opaque_color() {
        for r in 0..=u8::MAX {
            for g in 0..=u8::MAX {
                for b in 0..=u8::MAX {
                    round_trip(Rgba8::new(r, g, b, 0xff));
                }
            }
        }
    }

    #[test]
    fn pure_red() {
        let red = Rgba8::new(255, 0, 0, 255);
        let lab = OklabModel.convert(&red);
        assert_component_eq!(lab.lightness, 0.627955);
        assert_eq!(lab.alpha, 1.0);
        assert_eq!(Rgba8Model.convert(lab), red);
    }

    #[test]
    fn black() {
        let black = Rgba8::new(0, 0, 0, 255);
        let lab = OklabModel.convert(&black);
        assert_component_eq!(lab.lightness, 0.0);
        assert_component_eq!(lab.a, 0.0);
        assert_component_eq!(lab.b, 0.0);
        assert_eq!(lab.alpha, 1.0);
        assert_eq!(Rgba8Model.convert(lab), black);

        let lch = OklchModel.convert(&black);
        assert_eq!(lch.chroma, 0.0);
        assert_eq!(lch.hue, None);
        assert_eq!(Rgba8Model.convert(lch), black);
    }

    #[test]
    fn identity_conversions_are_untouched() {
        // Values no round trip would preserve exactly.
        let lab = Oklab::new(1.7, -3.0, 0.123456789, 4.0);
        assert_eq!(OklabModel.convert(lab), lab);
        assert_eq!(OklabModel.convert(&lab), lab);

        let lch = Oklch::new(1.7, 2.0, Some(123.0), -1.0);
        assert_eq!(OklchModel.convert(lch), lch);

        let achromatic = Oklch::new(0.5, 0.25, None, 1.0);
        assert_eq!(OklchModel.convert(achromatic), achromatic);
    }

    #[test]
    fn between_oklab_and_oklch() {
        let lch = Oklch::new(0.5, 0.1, Some(1.0), 0.5);
        assert_eq!(OklabModel.convert(lch), lch.to_oklab());

        let lab = Oklab::new(0.5, 0.1, 0.2, 0.5);
        assert_eq!(OklchModel.convert(lab), lab.to_oklch());
    }

    #[test]
    fn user_defined_colors() {
        struct Gray(u16);

        impl ToRgba16 for Gray {
            fn to_rgba16(&self) -> Rgba16 {
                Rgba16::new(self.0, self.0, self.0, u16::MAX)
            }
        }

        let gray = Gray(0x8080);
        let lab = OklabModel.convert(&gray as &dyn ToRgba16);
        assert_eq!(Rgba8Model.convert(lab), Rgba8::new(0x80, 0x80, 0x80, 0xff));
    }

    #[test]
    fn oklab_forms_behind_a_trait_object_are_untouched() {
        let lab = Oklab::new(0.5, 0.1, -0.1, 0.7);
        assert_eq!(OklabModel.convert(&lab as &dyn ToRgba16), lab);
        assert_eq!(OklabModel.try_convert(&lab as &dyn ToRgba16), Ok(lab));

        let lch = Oklch::new(0.5, 0.1, Some(2.0), 0.7);
        assert_eq!(OklchModel.convert(&lch as &dyn ToRgba16), lch);
        assert_eq!(OklabModel.convert(&lch as &dyn ToRgba16), lch.to_oklab());
    }

    #[test]
    fn checked_conversion_packs_once() {
        use std::cell::Cell;

        struct Counted(Cell<u32>);

        impl ToRgba16 for Counted {
            fn to_rgba16(&self) -> Rgba16 {
                self.0.set(self.0.get() + 1);
                Rgba16::new(0x4000, 0x2000, 0, 0x8000)
            }
        }

        let color = Counted(Cell::new(0));
        let lab = OklabModel.try_convert(&color as &dyn ToRgba16).unwrap();
        assert_eq!(color.0.get(), 1);
        assert_eq!(lab, Oklab::from_rgba16(Rgba16::new(0x4000, 0x2000, 0, 0x8000)));

        let color = Counted(Cell::new(0));
        OklchModel.try_convert(&color as &dyn ToRgba16).unwrap();
        assert_eq!(color.0.get(), 1);
    }

    #[test]
    fn fully_transparent() {
        let clear = Rgba8::new(0, 0, 0, 0);

        assert!(OklabModel.convert(&clear).is_degenerate());
        assert_eq!(OklabModel.try_convert(&clear), Err(Error::FullyTransparent));
        assert_eq!(OklchModel.try_convert(&clear), Err(Error::FullyTransparent));
        assert_eq!(Rgba8Model.convert(OklabModel.convert(&clear)), clear);

        // Already in the target space, nothing to un-premultiply.
        let lab = Oklab::new(0.5, 0.0, 0.0, 0.0);
        assert_eq!(OklabModel.try_convert(lab), Ok(lab));
    }

    #[test]
    fn translucent() {
        let c = Rgba8::new(0x40, 0x20, 0x00, 0x80);
        let lab = OklabModel.try_convert(&c).unwrap();
        assert_component_eq!(lab.alpha, 0x8080 as Component / 0xffff as Component);
        assert_eq!(Rgba8Model.convert(lab), c);
    }
}
