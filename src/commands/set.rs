//! Command: assign a key and save.
use anyhow::Result;

use crate::cli::SetOpts;
use crate::config::ConfigFile;
use crate::config::path::DottedPath;

/// Assign `opts.value` to `opts.key` in memory.
///
/// Keys that are not `section.key` or `section.subsection.key` are ignored
/// by the store; a warning is logged so the user knows nothing changed.
pub fn apply(config: &mut ConfigFile, opts: &SetOpts) {
    if DottedPath::parse(&opts.key).is_none() {
        tracing::warn!(
            "key '{}' is not section.key or section.subsection.key; ignored",
            opts.key
        );
    }
    config.set(&opts.key, opts.value.as_deref());
}

/// Assign and write the file back.
///
/// # Errors
///
/// Returns an error if the file cannot be saved.
pub fn run(config: &mut ConfigFile, opts: &SetOpts) -> Result<()> {
    apply(config, opts);
    super::save(config)
}

#[cfg(test)]
#[allow(clippy::expect_used, clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;

    fn opts(key: &str, value: Option<&str>) -> SetOpts {
        SetOpts {
            key: key.to_string(),
            value: value.map(str::to_string),
        }
    }

    #[test]
    fn apply_sets_value() {
        let mut config = ConfigFile::new();
        apply(&mut config, &opts("core.editor", Some("vim")));
        assert_eq!(config.get("core.editor"), "vim");
    }

    #[test]
    fn apply_without_value_stores_empty() {
        let mut config = ConfigFile::parse("[core]\neditor = vim\n");
        apply(&mut config, &opts("core.editor", None));
        assert_eq!(config.get("core.editor"), "");
        assert_eq!(config.render(), "[core]\n");
    }

    #[test]
    fn apply_ignores_malformed_key() {
        let mut config = ConfigFile::new();
        apply(&mut config, &opts("editor", Some("vim")));
        assert_eq!(config.render(), "");
    }
}
