//! Models for the Oklab color space in its rectangular (Oklab) and polar
//! (Oklch) forms.
//! <https://bottosson.github.io/posts/oklab/>

use crate::{
    color::{AnyColor, Component, Components},
    math::{transform, transform_3x3, Transform},
    models::gamma,
    rgba::{Rgba16, ToRgba16},
};

#[rustfmt::skip]
#[allow(clippy::excessive_precision)]
const LINEAR_SRGB_TO_LMS: Transform = transform_3x3(
    0.4122214708, 0.2119034982, 0.0883024619,
    0.5363325363, 0.6806995451, 0.2817188376,
    0.0514459929, 0.1073969566, 0.6299787005,
);

#[rustfmt::skip]
#[allow(clippy::excessive_precision)]
const LMS_TO_OKLAB: Transform = transform_3x3(
     0.2104542553,  1.9779984951,  0.0259040371,
     0.7936177850, -2.4285922050,  0.7827717662,
    -0.0040720468,  0.4505937099, -0.8086757660,
);

#[rustfmt::skip]
#[allow(clippy::excessive_precision)]
const OKLAB_TO_LMS: Transform = transform_3x3(
    1.0,           1.0,           1.0,
    0.3963377774, -0.1055613458, -0.0894841775,
    0.2158037573, -0.0638541728, -1.2914855480,
);

#[rustfmt::skip]
#[allow(clippy::excessive_precision)]
const LMS_TO_LINEAR_SRGB: Transform = transform_3x3(
     4.0767416621, -1.2684380046, -0.0041960863,
    -3.3077115913,  2.6097574011, -0.7034186147,
     0.2309699292, -0.3413193965,  1.7076147010,
);

oklab_macros::gen_model! {
    /// A color in the Oklab color space.
    ///
    /// No range is enforced on the components, so colors outside of the sRGB
    /// gamut can be represented. The alpha component is straight (not
    /// premultiplied).
    pub struct Oklab {
        /// The perceived lightness, nominally in `[0..1]`.
        pub lightness: Component,
        /// How green/red the color is.
        pub a: Component,
        /// How blue/yellow the color is.
        pub b: Component,
    }
}

impl Oklab {
    /// Convert linear light sRGB components into the Oklab color space.
    pub fn from_linear_srgb(rgb: Components, alpha: Component) -> Self {
        let lms = transform(&LINEAR_SRGB_TO_LMS, rgb);
        let lms = lms.map(|v| v.cbrt());
        let Components(lightness, a, b) = transform(&LMS_TO_OKLAB, lms);
        Self::new(lightness, a, b, alpha)
    }

    /// Convert this color to linear light sRGB components. The result is not
    /// clamped.
    pub fn to_linear_srgb(&self) -> Components {
        let lms = transform(&OKLAB_TO_LMS, Components(self.lightness, self.a, self.b));
        let lms = lms.map(|v| v * v * v);
        transform(&LMS_TO_LINEAR_SRGB, lms)
    }

    /// Convert premultiplied RGBA into the Oklab color space.
    ///
    /// A fully transparent color can not be un-premultiplied; the lightness,
    /// a and b components of the result are NaN and the alpha is 0. See
    /// [`Oklab::is_degenerate`].
    pub fn from_rgba16(rgba: Rgba16) -> Self {
        if rgba.alpha == 0 {
            tracing::trace!(?rgba, "un-premultiplying a fully transparent color");
        }

        let alpha = rgba.alpha as Component;
        let rgb = Components(
            rgba.red as Component / alpha,
            rgba.green as Component / alpha,
            rgba.blue as Component / alpha,
        );

        Self::from_linear_srgb(
            gamma::to_linear_light(&rgb),
            alpha / u16::MAX as Component,
        )
    }

    /// Returns true if any of the color components is NaN, which is the
    /// result of converting a fully transparent color.
    pub fn is_degenerate(&self) -> bool {
        self.lightness.is_nan() || self.a.is_nan() || self.b.is_nan()
    }

    /// Convert this color into its cylindrical polar form.
    /// <https://www.w3.org/TR/css-color-4/#lab-to-lch>
    pub fn to_oklch(&self) -> Oklch {
        if self.a == 0.0 && self.b == 0.0 {
            return Oklch::new(self.lightness, 0.0, None, self.alpha);
        }

        let hue = self.b.atan2(self.a);
        Oklch::new(
            self.lightness,
            self.a.hypot(self.b),
            (!hue.is_nan()).then_some(hue),
            self.alpha,
        )
    }
}

impl ToRgba16 for Oklab {
    fn as_any_color(&self) -> Option<AnyColor<'_>> {
        Some(AnyColor::Oklab(*self))
    }

    fn to_rgba16(&self) -> Rgba16 {
        let Components(red, green, blue) = gamma::to_gamma_encoded(&self.to_linear_srgb())
            .map(|v| v.clamp(0.0, 1.0));
        let alpha = self.alpha.clamp(0.0, 1.0);

        // Casting truncates toward zero and maps NaN to 0.
        let premultiply = |v: Component| (alpha * v * u16::MAX as Component) as u16;

        Rgba16::new(
            premultiply(red),
            premultiply(green),
            premultiply(blue),
            premultiply(1.0),
        )
    }
}

oklab_macros::gen_model! {
    /// A color in the Oklab color space in its cylindrical polar form.
    pub struct Oklch {
        /// The perceived lightness, same as [`Oklab::lightness`].
        pub lightness: Component,
        /// The distance from the neutral axis.
        pub chroma: Component,
        /// The hue angle in radians, or `None` when the color is achromatic.
        pub hue: Option<Component>,
    }
}

impl Oklch {
    /// The hue, with a missing hue reported as NaN.
    pub fn hue_or_nan(&self) -> Component {
        self.hue.unwrap_or(Component::NAN)
    }

    /// Convert this color into its rectangular orthogonal form. A missing
    /// (or NaN) hue results in an achromatic color regardless of the chroma.
    /// <https://www.w3.org/TR/css-color-4/#lch-to-lab>
    pub fn to_oklab(&self) -> Oklab {
        match self.hue.filter(|hue| !hue.is_nan()) {
            Some(hue) => Oklab::new(
                self.lightness,
                self.chroma * hue.cos(),
                self.chroma * hue.sin(),
                self.alpha,
            ),
            None => Oklab::new(self.lightness, 0.0, 0.0, self.alpha),
        }
    }
}

impl ToRgba16 for Oklch {
    fn to_rgba16(&self) -> Rgba16 {
        self.to_oklab().to_rgba16()
    }

    fn as_any_color(&self) -> Option<AnyColor<'_>> {
        Some(AnyColor::Oklch(*self))
    }
}

impl From<Oklch> for Oklab {
    fn from(value: Oklch) -> Self {
        value.to_oklab()
    }
}

impl From<Oklab> for Oklch {
    fn from(value: Oklab) -> Self {
        value.to_oklch()
    }
}
