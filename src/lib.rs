#![forbid(unsafe_code)]
#![deny(missing_docs, missing_debug_implementations)]

//! # `pyclassify`
//!
//! A single constant-valued utility and the tests
//! proving that it (and the assertions checking it)
//! behave as expected.

// Module Declarations
pub mod utils;

// Re-Exports
pub use self::utils::mamma;
