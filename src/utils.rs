//! ## Utilities
//!

/// The value [`mamma`] always returns
pub const MAMMA: &str = "mamma";

/// A value [`mamma`] never returns
pub const PAPA: &str = "papà";

/// Return the literal string `"mamma"`.
///
/// Takes no inputs, has no side effects, and never fails.
#[must_use]
#[tracing::instrument(ret)]
pub fn mamma() -> &'static str {
    MAMMA
}
