#![forbid(unsafe_code)]
#![deny(missing_docs, missing_debug_implementations)]

//! # `pyclassify`
//!
//! Print the value of [`pyclassify::mamma`] to stdout

// Standard Library Imports
use std::io::Write;

// Third-Party Imports
use tracing_subscriber::EnvFilter;

/// Run the project
fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let value = pyclassify::mamma();

    tracing::debug!(value, "resolved value");

    Ok(writeln!(std::io::stdout().lock(), "{value}")?)
}
