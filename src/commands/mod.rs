//! Subcommand implementations for the `gitconfig` binary.
//!
//! Each command opens the target file through [`open`], works only through
//! the [`ConfigFile`] API, and writes its output to the supplied writer.
pub mod get;
pub mod list;
pub mod set;
pub mod unset;
pub mod version;

use anyhow::{Context as _, Result, bail};
use std::path::PathBuf;

use crate::cli::GlobalOpts;
use crate::config::ConfigFile;

/// Config file used when neither `--file` nor `--global` is given.
pub const DEFAULT_REPO_CONFIG: &str = ".git/config";

/// Resolve which config file the command operates on.
///
/// `--file` wins, then `--global` (`$HOME/.gitconfig`, falling back to
/// `USERPROFILE`), then [`DEFAULT_REPO_CONFIG`].
///
/// # Errors
///
/// Returns an error if `--global` is requested but no home directory is set.
pub fn resolve_path(global: &GlobalOpts) -> Result<PathBuf> {
    resolve_path_with(global, |name| std::env::var(name).ok())
}

fn resolve_path_with(
    global: &GlobalOpts,
    env: impl Fn(&str) -> Option<String>,
) -> Result<PathBuf> {
    if let Some(ref file) = global.file {
        return Ok(file.clone());
    }

    if global.global_file {
        let Some(home) = env("HOME").or_else(|| env("USERPROFILE")) else {
            bail!("cannot locate ~/.gitconfig: neither HOME nor USERPROFILE is set");
        };
        return Ok(PathBuf::from(home).join(".gitconfig"));
    }

    Ok(PathBuf::from(DEFAULT_REPO_CONFIG))
}

/// Resolve and load the target config file.
///
/// # Errors
///
/// Returns an error if the path cannot be resolved or the file exists but
/// cannot be read or decoded.
pub fn open(global: &GlobalOpts) -> Result<ConfigFile> {
    let path = resolve_path(global)?;
    tracing::debug!("using {} ({})", path.display(), global.encoding);
    ConfigFile::load(&path, global.encoding)
        .with_context(|| format!("loading {}", path.display()))
}

/// Save a config back to the file it was loaded from.
///
/// # Errors
///
/// Returns an error if the file cannot be written.
pub fn save(config: &ConfigFile) -> Result<()> {
    config.save().with_context(|| {
        format!(
            "saving {}",
            config
                .path()
                .map_or_else(|| "<memory>".to_string(), |p| p.display().to_string())
        )
    })
}
