//! Command: print the value of a key.
use anyhow::{Context as _, Result};
use std::io::Write;

use crate::cli::GetOpts;
use crate::config::ConfigFile;

/// Print the value of `opts.key` followed by a newline.
///
/// Returns `false` without printing anything when the key resolves to an
/// empty value, so the caller can exit non-zero like `git config --get`.
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn run(config: &ConfigFile, opts: &GetOpts, out: &mut impl Write) -> Result<bool> {
    let value = config.get(&opts.key);
    if value.is_empty() {
        tracing::debug!("{} is not set", opts.key);
        return Ok(false);
    }
    writeln!(out, "{value}").context("writing value")?;
    Ok(true)
}

#[cfg(test)]
#[allow(clippy::expect_used, clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;

    fn opts(key: &str) -> GetOpts {
        GetOpts {
            key: key.to_string(),
        }
    }

    #[test]
    fn prints_value() {
        let config = ConfigFile::parse("[user]\nname = A U Thor\n");
        let mut out = Vec::new();
        assert!(run(&config, &opts("user.name"), &mut out).unwrap());
        assert_eq!(String::from_utf8(out).unwrap(), "A U Thor\n");
    }

    #[test]
    fn prints_joined_multi_value() {
        let config = ConfigFile::parse("[remote \"o\"]\nfetch = a\nfetch = b\n");
        let mut out = Vec::new();
        assert!(run(&config, &opts("remote.o.fetch"), &mut out).unwrap());
        assert_eq!(String::from_utf8(out).unwrap(), "a,b\n");
    }

    #[test]
    fn missing_key_prints_nothing() {
        let config = ConfigFile::new();
        let mut out = Vec::new();
        assert!(!run(&config, &opts("user.name"), &mut out).unwrap());
        assert!(out.is_empty());
    }
}
