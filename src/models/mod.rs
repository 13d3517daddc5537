//! Models are structs that represent a color in a specified color space or
//! form.

pub mod gamma;
mod lab;

pub use lab::*;
