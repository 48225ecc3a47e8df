//! Tokenizer for the git config dialect.
//!
//! Parsing is lenient: a line that is neither a section header nor a
//! `key=value` assignment is dropped without affecting the lines around it.
//!
//! Format:
//! ```ini
//! ; comment
//! [core]
//!     bare = false
//! [remote "origin"]
//!     url = https://example.com/repo.git
//!     fetch = +refs/heads/*:refs/remotes/origin/*
//! ```
use super::store::Store;

/// Characters that end a key besides whitespace.
const KEY_STOP_CHARS: [char; 4] = ['=', '(', ')', '*'];

/// Classification of a single non-empty line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Line<'a> {
    /// `[name]` with repeated spaces in `name` collapsed.
    SectionHeader(String),
    /// `key=value`, with the value already unescaped.
    KeyValue {
        /// Key as written (case preserved, possibly empty).
        key: &'a str,
        /// Unescaped value.
        value: String,
    },
    /// Anything else.
    Unmatched,
}

/// Classify a line, trying the section-header form before the key/value form.
///
/// # Examples
///
/// ```
/// use gitconfig_cli::config::parser::{Line, classify};
///
/// assert_eq!(
///     classify(r#"[difftool  "kdiff3"]"#),
///     Line::SectionHeader(r#"difftool "kdiff3""#.to_string())
/// );
/// assert_eq!(
///     classify("\tname = A U Thor"),
///     Line::KeyValue { key: "name", value: "A U Thor".to_string() }
/// );
/// assert_eq!(classify("no assignment here"), Line::Unmatched);
/// ```
#[must_use]
pub fn classify(line: &str) -> Line<'_> {
    if let Some(name) = parse_section_header(line) {
        return Line::SectionHeader(name);
    }
    if let Some((key, raw)) = parse_key_value(line) {
        return Line::KeyValue {
            key,
            value: unescape(raw),
        };
    }
    Line::Unmatched
}

/// Drop comment lines (first non-whitespace character `;`) and blank lines.
///
/// Only line boundaries are inspected; a `;` after other content is kept.
#[must_use]
pub fn strip_comments(text: &str) -> String {
    text.split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .filter(|line| {
            let trimmed = line.trim_start();
            !trimmed.is_empty() && !trimmed.starts_with(';')
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Undo the only escape the reader understands: `\"` becomes `"`.
///
/// Other backslash sequences (`\\`, `\n`, `\t`) are left untouched.
#[must_use]
pub fn unescape(value: &str) -> String {
    value.replace("\\\"", "\"")
}

/// Parse config text into a [`Store`].
///
/// Never fails: unparseable lines are logged at `debug` level and skipped.
/// Repeated headers for the same section accumulate into one section.
#[must_use]
pub fn parse(text: &str) -> Store {
    let mut store = Store::new();
    let mut current = String::new();

    let cleaned = strip_comments(text);
    for (line_num, line) in cleaned.split('\n').enumerate() {
        if line.is_empty() {
            continue;
        }

        match classify(line) {
            Line::SectionHeader(name) => {
                if name != current {
                    tracing::trace!("entering section [{name}]");
                    store.get_or_create_section(&name);
                    current = name;
                }
            }
            Line::KeyValue { key, value } => {
                store.get_or_create_section(&current).add(key, value);
            }
            Line::Unmatched => {
                tracing::debug!("discarding unparseable line {}: {line}", line_num + 1);
            }
        }
    }

    store
}

/// Parse `[name]`, allowing surrounding whitespace. `name` may be empty but
/// may not contain `]`.
fn parse_section_header(line: &str) -> Option<String> {
    let inner = line.trim_start().strip_prefix('[')?;
    let (name, tail) = inner.split_once(']')?;
    if !tail.trim().is_empty() {
        return None;
    }
    Some(collapse_spaces(name))
}

/// Parse `key=value`. The key runs up to whitespace or one of `=()*`;
/// whitespace on either side of `=` is skipped and the rest of the line is
/// the raw value. A key containing `(`, `)` or `*` does not match.
fn parse_key_value(line: &str) -> Option<(&str, &str)> {
    let line = line.trim_start();
    let key_end = line
        .find(|c: char| KEY_STOP_CHARS.contains(&c) || c.is_whitespace())
        .unwrap_or(line.len());
    let (key, rest) = line.split_at(key_end);
    let value = rest.trim_start().strip_prefix('=')?;
    Some((key, value.trim_start()))
}

/// git writes `[difftool  "kdiff3"]` inconsistently; normalise to one space.
fn collapse_spaces(name: &str) -> String {
    let mut out = name.to_string();
    while out.contains("  ") {
        out = out.replace("  ", " ");
    }
    out
}
