//! oklab converts premultiplied RGBA colors to and from the perceptually
//! uniform Oklab color space and its polar form, Oklch.
//!
//! ```rust
//! use oklab::{ColorModel, OklchModel, Rgba8, Rgba8Model};
//!
//! let orange = OklchModel.convert(&Rgba8::new(255, 128, 0, 255));
//! let translucent = orange.with_alpha(0.5);
//! let rgba = Rgba8Model.convert(translucent);
//! assert_eq!(rgba.alpha, 127);
//! ```

#![deny(missing_docs)]

mod color;
mod convert;
mod error;
mod gamut;
mod interpolate;
mod math;
pub mod models;
mod rgba;

pub use color::{AnyColor, Component, Components};
pub use convert::{ColorModel, OklabModel, OklchModel, Rgba16Model, Rgba8Model};
pub use error::Error;
pub use models::gamma::{to_linear, to_non_linear};
pub use models::{Oklab, Oklch};
pub use rgba::{Rgba16, Rgba8, ToRgba16};
