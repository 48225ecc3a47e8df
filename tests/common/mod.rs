// Shared helpers for integration tests.
//
// Provides a temporary directory holding a single config file so each test
// can load, edit, and save without touching the real ~/.gitconfig.
//
// Used by all integration test binaries that declare `mod common;`.
#![allow(dead_code)]

use std::path::{Path, PathBuf};

use gitconfig_cli::cli::GlobalOpts;
use gitconfig_cli::config::encoding::Encoding;

/// Sample repository config with subsections, multi-values, a comment,
/// Windows paths, and one malformed line.
pub const REPO_CONFIG: &str = include_str!("../fixtures/repo_config.gitconfig");

/// Latin-1 encoded user config with CRLF line endings.
pub const LATIN1_CRLF: &[u8] = include_bytes!("../fixtures/latin1_crlf.gitconfig");

/// An isolated config file backed by a [`tempfile::TempDir`].
///
/// The directory is automatically deleted when dropped.
pub struct TempConfig {
    /// Temporary directory containing the config file.
    pub dir: tempfile::TempDir,
    path: PathBuf,
}

impl TempConfig {
    /// A temp directory where the config file does not exist yet.
    pub fn missing() -> Self {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join("config");
        Self { dir, path }
    }

    /// A temp directory with the config file holding `contents`.
    pub fn with_contents(contents: impl AsRef<[u8]>) -> Self {
        let ctx = Self::missing();
        std::fs::write(&ctx.path, contents).expect("write config file");
        ctx
    }

    /// Path to the config file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Raw file contents.
    pub fn read(&self) -> Vec<u8> {
        std::fs::read(&self.path).expect("read config file")
    }

    /// File contents as UTF-8 text.
    pub fn read_string(&self) -> String {
        String::from_utf8(self.read()).expect("config file should be UTF-8")
    }

    /// CLI options pointing `--file` at this config.
    pub fn global_opts(&self, encoding: Encoding) -> GlobalOpts {
        GlobalOpts {
            file: Some(self.path.clone()),
            global_file: false,
            encoding,
        }
    }
}
