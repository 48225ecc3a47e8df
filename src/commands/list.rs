//! Command: list every key and value.
use anyhow::{Context as _, Result};
use serde::Serialize;
use std::io::Write;

use crate::cli::ListOpts;
use crate::config::ConfigFile;

/// One row of `list --json` output.
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct Entry {
    /// Dotted key, e.g. `remote.origin.url`.
    pub key: String,
    /// Combined value (multiple values joined with `,`).
    pub value: String,
}

/// Write all entries as `key=value` lines, or as a JSON array.
///
/// # Errors
///
/// Returns an error if serialisation or writing to `out` fails.
pub fn run(config: &ConfigFile, opts: &ListOpts, out: &mut impl Write) -> Result<()> {
    let entries: Vec<Entry> = config
        .entries()
        .into_iter()
        .map(|(key, value)| Entry { key, value })
        .collect();

    if opts.json {
        serde_json::to_writer_pretty(&mut *out, &entries).context("serializing entries")?;
        writeln!(out).context("writing entries")?;
        return Ok(());
    }

    for entry in &entries {
        writeln!(out, "{}={}", entry.key, entry.value).context("writing entries")?;
    }
    Ok(())
}
