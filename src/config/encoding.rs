//! Text encodings supported for config files.
use std::fmt;
use std::str::FromStr;

use crate::error::ConfigFileError;

/// Encoding used when the caller has no preference.
pub const DEFAULT_ENCODING: Encoding = Encoding::Utf8;

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Character encoding of a config file on disk.
///
/// # Examples
///
/// ```
/// use gitconfig_cli::config::encoding::Encoding;
///
/// let enc: Encoding = "ISO-8859-1".parse().unwrap();
/// assert_eq!(enc, Encoding::Latin1);
/// assert_eq!(enc.decode(b"caf\xE9").unwrap(), "café");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Encoding {
    /// UTF-8. A leading byte-order mark is skipped on read and never written.
    #[default]
    Utf8,
    /// ISO-8859-1: one byte per character, code points U+0000..=U+00FF.
    Latin1,
}

impl Encoding {
    /// Canonical label, as accepted by [`FromStr`].
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Utf8 => "utf-8",
            Self::Latin1 => "latin1",
        }
    }

    /// Decode raw file bytes into text.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigFileError::Decode`] if `bytes` is not valid UTF-8.
    /// Latin-1 decoding cannot fail.
    pub fn decode(self, bytes: &[u8]) -> Result<String, ConfigFileError> {
        match self {
            Self::Utf8 => {
                let body = bytes.strip_prefix(UTF8_BOM).unwrap_or(bytes);
                let skipped = bytes.len() - body.len();
                std::str::from_utf8(body)
                    .map(str::to_owned)
                    .map_err(|e| ConfigFileError::Decode {
                        encoding: self,
                        offset: skipped + e.valid_up_to(),
                    })
            }
            Self::Latin1 => Ok(bytes.iter().copied().map(char::from).collect()),
        }
    }

    /// Encode text into file bytes.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigFileError::Encode`] if `text` contains a character
    /// outside Latin-1 while encoding as [`Encoding::Latin1`].
    pub fn encode(self, text: &str) -> Result<Vec<u8>, ConfigFileError> {
        match self {
            Self::Utf8 => Ok(text.as_bytes().to_vec()),
            Self::Latin1 => text
                .chars()
                .map(|c| {
                    u8::try_from(u32::from(c)).map_err(|_| ConfigFileError::Encode {
                        encoding: self,
                        character: c,
                    })
                })
                .collect(),
        }
    }
}

impl fmt::Display for Encoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Encoding {
    type Err = ConfigFileError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "utf-8" | "utf8" => Ok(Self::Utf8),
            "latin1" | "latin-1" | "iso-8859-1" | "iso8859-1" => Ok(Self::Latin1),
            _ => Err(ConfigFileError::UnknownEncoding(s.to_string())),
        }
    }
}
