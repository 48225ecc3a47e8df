//! Error types for reading and writing git config files.
//!
//! The library returns [`ConfigFileError`] from every fallible operation.
//! Only the I/O boundary can fail: malformed lines and badly shaped dotted
//! paths are absorbed silently by the parser and the store. Command handlers
//! in the binary convert these errors to [`anyhow::Error`] via `?`.
//!
//! # Error taxonomy
//!
//! ```text
//! ConfigFileError
//! ├── Io              — open/read/write failures, surfaced unchanged
//! ├── Decode          — bytes are not valid in the chosen encoding
//! ├── Encode          — text cannot be represented in the chosen encoding
//! ├── UnknownEncoding — unrecognised encoding label
//! └── NoBackingFile   — save() on a config that was never loaded from disk
//! ```

use thiserror::Error;

use crate::config::encoding::Encoding;

/// Errors raised at the I/O boundary of a [`ConfigFile`](crate::config::ConfigFile).
#[derive(Error, Debug)]
pub enum ConfigFileError {
    /// An I/O error occurred while reading or writing a config file.
    #[error("IO error on config file {path}: {source}")]
    Io {
        /// Path (or stream label) that could not be read or written.
        path: String,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// The input bytes are not valid in the requested encoding.
    #[error("config data is not valid {encoding} (at byte {offset})")]
    Decode {
        /// Encoding used for decoding.
        encoding: Encoding,
        /// Byte offset of the first invalid sequence.
        offset: usize,
    },

    /// A character cannot be represented in the requested encoding.
    #[error("character {character:?} cannot be written as {encoding}")]
    Encode {
        /// Encoding used for encoding.
        encoding: Encoding,
        /// First character that has no representation.
        character: char,
    },

    /// The encoding label is not one of the supported encodings.
    #[error("Unknown encoding '{0}': must be one of utf-8, latin1")]
    UnknownEncoding(String),

    /// `save()` was called on a config that has no backing file.
    #[error("config has no backing file; use save_to_path or write_to")]
    NoBackingFile,
}

impl ConfigFileError {
    /// Wrap an [`std::io::Error`] with the path it occurred on.
    pub(crate) fn io(path: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

#[cfg(test)]
#[allow(clippy::expect_used)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn io_error_display() {
        let e = ConfigFileError::io(
            "/repo/.git/config",
            io::Error::new(io::ErrorKind::PermissionDenied, "permission denied"),
        );
        assert!(e.to_string().contains("/repo/.git/config"));
        assert!(e.to_string().contains("IO error on config file"));
    }

    #[test]
    fn io_error_has_source() {
        use std::error::Error as StdError;
        let e = ConfigFileError::io(
            "config",
            io::Error::new(io::ErrorKind::NotFound, "no such file"),
        );
        assert!(e.source().is_some());
    }

    #[test]
    fn decode_error_display() {
        let e = ConfigFileError::Decode {
            encoding: Encoding::Utf8,
            offset: 7,
        };
        assert_eq!(e.to_string(), "config data is not valid utf-8 (at byte 7)");
    }

    #[test]
    fn encode_error_display() {
        let e = ConfigFileError::Encode {
            encoding: Encoding::Latin1,
            character: '€',
        };
        assert_eq!(e.to_string(), "character '€' cannot be written as latin1");
    }

    #[test]
    fn unknown_encoding_display() {
        let e = ConfigFileError::UnknownEncoding("ebcdic".to_string());
        assert_eq!(
            e.to_string(),
            "Unknown encoding 'ebcdic': must be one of utf-8, latin1"
        );
    }

    #[test]
    fn converts_to_anyhow() {
        let e = ConfigFileError::NoBackingFile;
        let _anyhow_err: anyhow::Error = e.into();
    }

    fn assert_send_sync<T: Send + Sync>() {}

    #[test]
    fn error_type_is_send_sync() {
        assert_send_sync::<ConfigFileError>();
    }
}
