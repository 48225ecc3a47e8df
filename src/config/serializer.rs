//! Renders a [`Store`] back to config text.
use std::fmt::Write as _;

use super::store::Store;

/// Stands in for `"` while backslashes are converted.
const QUOTE_PLACEHOLDER: &str = "$QUOTE$";

/// Escape a value for writing.
///
/// `"` is swapped for a placeholder, the value is trimmed, backslashes
/// become `/` unless the value starts with a UNC `\\` prefix, and the
/// placeholder is written back as `\"`. A literal `$QUOTE$` in the value is
/// therefore also written as `\"`. The reader only undoes the quote escape,
/// so backslash conversion is one-way.
///
/// # Examples
///
/// ```
/// use gitconfig_cli::config::serializer::escape;
///
/// assert_eq!(escape(r"  C:\Program Files\KDiff3\kdiff3.exe "), "C:/Program Files/KDiff3/kdiff3.exe");
/// assert_eq!(escape(r"\\server\share"), r"\\server\share");
/// assert_eq!(escape(r#"say "hi""#), r#"say \"hi\""#);
/// ```
#[must_use]
pub fn escape(value: &str) -> String {
    let masked = value.replace('"', QUOTE_PLACEHOLDER);
    let trimmed = masked.trim();
    let slashed = if trimmed.starts_with(r"\\") {
        trimmed.to_string()
    } else {
        trimmed.replace('\\', "/")
    };
    slashed.replace(QUOTE_PLACEHOLDER, "\\\"")
}

/// Render every section in order.
///
/// The top-level section gets no header. Entries with an empty key or an
/// empty combined value are omitted. Each entry is written as
/// `\tkey=value` and every line ends with `\n`.
#[must_use]
pub fn render(store: &Store) -> String {
    let mut out = String::new();
    for (name, bag) in store.sections() {
        if !name.is_empty() {
            let _ = writeln!(out, "[{name}]");
        }
        for (key, value) in bag.iter() {
            if key.is_empty() || value.is_empty() {
                continue;
            }
            let _ = writeln!(out, "\t{key}={}", escape(&value));
        }
    }
    out
}
