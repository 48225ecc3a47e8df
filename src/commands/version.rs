//! Command: print version information.
use anyhow::{Context as _, Result};
use std::io::Write;

/// Version string, preferring the one injected by `build.rs`.
#[must_use]
pub fn version() -> &'static str {
    option_env!("GITCONFIG_VERSION").unwrap_or(env!("CARGO_PKG_VERSION"))
}

/// Print the gitconfig version.
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn run(out: &mut impl Write) -> Result<()> {
    writeln!(out, "gitconfig {}", version()).context("writing version")
}
