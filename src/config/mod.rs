//! Git config file model: load, query, edit, and save.
//!
//! [`ConfigFile`] composes the three stages of the pipeline:
//!
//! - **[`parser`]**: raw text to a [`Store`], dropping unparseable lines
//! - **[`store`]** / **[`path`]**: ordered multi-valued sections addressed by dotted paths
//! - **[`serializer`]**: the [`Store`] back to text
pub mod encoding;
pub mod parser;
pub mod path;
pub mod serializer;
pub mod store;

use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

use encoding::{DEFAULT_ENCODING, Encoding};
use path::DottedPath;
use store::Store;

use crate::error::ConfigFileError;

/// An in-memory git config file, optionally tied to a file on disk.
///
/// # Examples
///
/// ```
/// use gitconfig_cli::config::ConfigFile;
///
/// let mut config = ConfigFile::parse("[core]\n\tbare = false\n");
/// assert_eq!(config.get("core.bare"), "false");
///
/// config.set("remote.origin.url", Some("https://example.com/repo.git"));
/// assert_eq!(
///     config.render(),
///     "[core]\n\tbare=false\n[remote \"origin\"]\n\turl=https://example.com/repo.git\n"
/// );
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConfigFile {
    store: Store,
    path: Option<PathBuf>,
    encoding: Encoding,
}

impl ConfigFile {
    /// Create an empty config with no backing file.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse config text that is already decoded.
    #[must_use]
    pub fn parse(text: &str) -> Self {
        Self {
            store: parser::parse(text),
            ..Self::default()
        }
    }

    /// Read and parse a whole stream.
    ///
    /// # Errors
    ///
    /// Returns an error if the stream cannot be read or is not valid in
    /// `encoding`.
    pub fn from_reader<R: Read>(mut reader: R, encoding: Encoding) -> Result<Self, ConfigFileError> {
        let mut bytes = Vec::new();
        reader
            .read_to_end(&mut bytes)
            .map_err(|e| ConfigFileError::io("<stream>", e))?;
        let text = encoding.decode(&bytes)?;
        Ok(Self {
            store: parser::parse(&text),
            path: None,
            encoding,
        })
    }

    /// Load a config file from disk and remember it as the backing file.
    ///
    /// A missing file is not an error: the result is an empty config that
    /// [`save`](Self::save) will create.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read, or is not
    /// valid in `encoding`.
    pub fn load(path: &Path, encoding: Encoding) -> Result<Self, ConfigFileError> {
        let mut config = match fs::File::open(path) {
            Ok(file) => Self::from_reader(file, encoding).map_err(|e| match e {
                ConfigFileError::Io { source, .. } => {
                    ConfigFileError::io(path.display().to_string(), source)
                }
                other => other,
            })?,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                tracing::debug!("{} does not exist, starting empty", path.display());
                Self::new()
            }
            Err(e) => return Err(ConfigFileError::io(path.display().to_string(), e)),
        };
        config.path = Some(path.to_path_buf());
        config.encoding = encoding;
        tracing::debug!(
            "loaded {} ({} sections)",
            path.display(),
            config.store.section_names().count()
        );
        Ok(config)
    }

    /// Load with [`DEFAULT_ENCODING`].
    ///
    /// # Errors
    ///
    /// See [`load`](Self::load).
    pub fn load_default(path: &Path) -> Result<Self, ConfigFileError> {
        Self::load(path, DEFAULT_ENCODING)
    }

    /// Look up a dotted path; returns `""` when nothing is set.
    ///
    /// For `section.subsection.key` the quoted `[section "subsection"]` is
    /// consulted before a literal `[section.subsection]`. Multiple values are
    /// joined with `,`.
    #[must_use]
    pub fn get(&self, path: &str) -> String {
        let Some(dotted) = DottedPath::parse(path) else {
            return String::new();
        };
        dotted
            .resolve(&self.store)
            .and_then(|section| self.store.section(&section))
            .and_then(|bag| bag.get(dotted.key()))
            .map(std::borrow::Cow::into_owned)
            .unwrap_or_default()
    }

    /// Assign a single value, replacing every existing value of the key.
    ///
    /// `None` stores an empty string. For `section.subsection.key` an
    /// existing `[section.subsection]` is reused; otherwise the value goes
    /// into `[section "subsection"]`, which is created if needed. Paths that
    /// are not two or three segments long are ignored.
    pub fn set(&mut self, path: &str, value: Option<&str>) {
        let Some(dotted) = DottedPath::parse(path) else {
            tracing::debug!("ignoring set of malformed path '{path}'");
            return;
        };
        let section = dotted.target_section(&self.store);
        self.store
            .get_or_create_section(&section)
            .set(dotted.key(), value.unwrap_or_default());
    }

    /// Remove a key from every candidate section that holds a non-empty
    /// value for it, so `section.subsection.key` clears both the quoted and
    /// the dotted spelling. Does nothing if the key is unset or the path is
    /// malformed.
    pub fn remove(&mut self, path: &str) {
        let Some(dotted) = DottedPath::parse(path) else {
            return;
        };
        for section in dotted.lookup_sections() {
            if self.store.has_key(&section, dotted.key())
                && let Some(bag) = self.store.section_mut(&section)
            {
                tracing::trace!("removing {} from [{section}]", dotted.key());
                bag.remove(dotted.key());
            }
        }
    }

    /// Render the config as text.
    #[must_use]
    pub fn render(&self) -> String {
        serializer::render(&self.store)
    }

    /// Write the rendered config to a stream.
    ///
    /// # Errors
    ///
    /// Returns an error if the text cannot be encoded or the write fails.
    pub fn write_to<W: Write>(&self, mut writer: W, encoding: Encoding) -> Result<(), ConfigFileError> {
        let bytes = encoding.encode(&self.render())?;
        writer
            .write_all(&bytes)
            .and_then(|()| writer.flush())
            .map_err(|e| ConfigFileError::io("<stream>", e))
    }

    /// Replace the contents of `path` with the rendered config.
    ///
    /// # Errors
    ///
    /// Returns an error if the text cannot be encoded or the file cannot be
    /// created or written.
    pub fn save_to_path(&self, path: &Path, encoding: Encoding) -> Result<(), ConfigFileError> {
        // Encode first so an unencodable value leaves the file untouched.
        let bytes = encoding.encode(&self.render())?;
        fs::write(path, bytes).map_err(|e| ConfigFileError::io(path.display().to_string(), e))?;
        tracing::debug!("saved {}", path.display());
        Ok(())
    }

    /// Save to the backing file with the encoding it was loaded with.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigFileError::NoBackingFile`] if the config was not
    /// created by [`load`](Self::load), otherwise as
    /// [`save_to_path`](Self::save_to_path).
    pub fn save(&self) -> Result<(), ConfigFileError> {
        let path = self.path.as_deref().ok_or(ConfigFileError::NoBackingFile)?;
        self.save_to_path(path, self.encoding)
    }

    /// Every non-empty entry as `(dotted key, value)`, in file order.
    ///
    /// Quoted subsection headers are flattened back to dotted form, so
    /// `[remote "origin"] url` is listed as `remote.origin.url`.
    #[must_use]
    pub fn entries(&self) -> Vec<(String, String)> {
        self.store
            .sections()
            .flat_map(|(name, bag)| {
                let prefix = dotted_prefix(name);
                bag.iter()
                    .filter(|(key, value)| !key.is_empty() && !value.is_empty())
                    .map(move |(key, value)| (format!("{prefix}{key}"), value.into_owned()))
            })
            .collect()
    }

    /// The underlying section store.
    #[must_use]
    pub const fn store(&self) -> &Store {
        &self.store
    }

    /// The backing file, if the config was loaded from disk.
    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// The encoding used by [`save`](Self::save).
    #[must_use]
    pub const fn encoding(&self) -> Encoding {
        self.encoding
    }
}

/// `remote "origin"` → `remote.origin.`, `core` → `core.`, `""` → `""`.
fn dotted_prefix(section: &str) -> String {
    if section.is_empty() {
        return String::new();
    }
    match section.split_once(" \"") {
        Some((name, sub)) => format!("{name}.{}.", sub.strip_suffix('"').unwrap_or(sub)),
        None => format!("{section}."),
    }
}
