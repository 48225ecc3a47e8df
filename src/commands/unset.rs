//! Command: remove a key and save.
use anyhow::Result;

use crate::cli::UnsetOpts;
use crate::config::ConfigFile;

/// Remove `opts.key` and write the file back.
///
/// Returns `false` if the key was not set; the file is then left untouched
/// (and not created if it does not exist).
///
/// # Errors
///
/// Returns an error if the file cannot be saved.
pub fn run(config: &mut ConfigFile, opts: &UnsetOpts) -> Result<bool> {
    if config.get(&opts.key).is_empty() {
        tracing::debug!("{} was not set, nothing to save", opts.key);
        return Ok(false);
    }
    config.remove(&opts.key);
    super::save(config)?;
    Ok(true)
}
