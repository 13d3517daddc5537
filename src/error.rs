//! Errors reported by the checked conversions.

/// Reasons a checked conversion can not produce a meaningful color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The source color has an alpha of zero, so its color channels can not
    /// be un-premultiplied.
    #[error("fully transparent colors have no recoverable color")]
    FullyTransparent,
}
