//! Dotted-path addressing (`section.key`, `section.subsection.key`).
//!
//! A three-segment path is ambiguous: `remote.origin.url` may live in
//! `[remote "origin"]` or in a literal `[remote.origin]` section. Reads and
//! removals try the quoted subsection spelling first; writes reuse an
//! existing dotted section and otherwise create the quoted spelling.
use std::fmt;

use super::store::Store;

/// A parsed external key such as `core.editor` or `remote.origin.url`.
///
/// # Examples
///
/// ```
/// use gitconfig_cli::config::path::DottedPath;
///
/// let path = DottedPath::parse("remote.origin.url").unwrap();
/// assert_eq!(path.key(), "url");
/// assert_eq!(path.lookup_sections(), ["remote \"origin\"", "remote.origin"]);
///
/// assert!(DottedPath::parse("core").is_none());
/// assert!(DottedPath::parse("a.b.c.d").is_none());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DottedPath<'a> {
    /// `section.key`
    Section {
        /// Section name.
        section: &'a str,
        /// Key within the section.
        key: &'a str,
    },
    /// `section.subsection.key`
    Subsection {
        /// Section name.
        section: &'a str,
        /// Subsection name (case-sensitive).
        subsection: &'a str,
        /// Key within the subsection.
        key: &'a str,
    },
}

impl<'a> DottedPath<'a> {
    /// Split `path` on `.`; only two- and three-segment paths are addressable.
    ///
    /// Empty segments are kept: `a..b` addresses subsection `""` of `a`.
    #[must_use]
    pub fn parse(path: &'a str) -> Option<Self> {
        let mut parts = path.split('.');
        match (parts.next(), parts.next(), parts.next(), parts.next()) {
            (Some(section), Some(key), None, None) => Some(Self::Section { section, key }),
            (Some(section), Some(subsection), Some(key), None) => Some(Self::Subsection {
                section,
                subsection,
                key,
            }),
            _ => None,
        }
    }

    /// The key segment.
    #[must_use]
    pub const fn key(&self) -> &'a str {
        match *self {
            Self::Section { key, .. } | Self::Subsection { key, .. } => key,
        }
    }

    /// Candidate section names for reads and removals, in precedence order.
    #[must_use]
    pub fn lookup_sections(&self) -> Vec<String> {
        match *self {
            Self::Section { section, .. } => vec![section.to_string()],
            Self::Subsection {
                section,
                subsection,
                ..
            } => vec![
                quoted_form(section, subsection),
                dotted_form(section, subsection),
            ],
        }
    }

    /// The section a write should land in.
    ///
    /// Prefers an already existing `section.subsection` section over the
    /// conventional `section "subsection"` spelling.
    #[must_use]
    pub fn target_section(&self, store: &Store) -> String {
        match *self {
            Self::Section { section, .. } => section.to_string(),
            Self::Subsection {
                section,
                subsection,
                ..
            } => {
                let dotted = dotted_form(section, subsection);
                if store.has_section(&dotted) {
                    dotted
                } else {
                    quoted_form(section, subsection)
                }
            }
        }
    }

    /// The first candidate section holding a non-empty value for the key.
    #[must_use]
    pub fn resolve(&self, store: &Store) -> Option<String> {
        self.lookup_sections()
            .into_iter()
            .find(|section| store.has_key(section, self.key()))
    }
}

impl fmt::Display for DottedPath<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Section { section, key } => write!(f, "{section}.{key}"),
            Self::Subsection {
                section,
                subsection,
                key,
            } => write!(f, "{section}.{subsection}.{key}"),
        }
    }
}

fn quoted_form(section: &str, subsection: &str) -> String {
    format!("{section} \"{subsection}\"")
}

fn dotted_form(section: &str, subsection: &str) -> String {
    format!("{section}.{subsection}")
}

#[cfg(test)]
#[allow(clippy::expect_used, clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;

    #[test]
    fn parse_two_segments() {
        assert_eq!(
            DottedPath::parse("core.editor"),
            Some(DottedPath::Section {
                section: "core",
                key: "editor"
            })
        );
    }

    #[test]
    fn parse_three_segments() {
        assert_eq!(
            DottedPath::parse("difftool.kdiff3.path"),
            Some(DottedPath::Subsection {
                section: "difftool",
                subsection: "kdiff3",
                key: "path"
            })
        );
    }

    #[test]
    fn parse_rejects_other_shapes() {
        assert_eq!(DottedPath::parse(""), None);
        assert_eq!(DottedPath::parse("core"), None);
        assert_eq!(DottedPath::parse("a.b.c.d"), None);
    }

    #[test]
    fn parse_keeps_empty_segments() {
        assert_eq!(
            DottedPath::parse("a..b"),
            Some(DottedPath::Subsection {
                section: "a",
                subsection: "",
                key: "b"
            })
        );
        assert_eq!(
            DottedPath::parse(".x"),
            Some(DottedPath::Section {
                section: "",
                key: "x"
            })
        );
    }

    #[test]
    fn display_restores_dotted_string() {
        let raw = "remote.origin.url";
        assert_eq!(DottedPath::parse(raw).unwrap().to_string(), raw);
    }

    #[test]
    fn target_prefers_existing_dotted_section() {
        let mut store = Store::new();
        let path = DottedPath::parse("remote.origin.url").unwrap();
        assert_eq!(path.target_section(&store), "remote \"origin\"");

        store.get_or_create_section("remote.origin");
        assert_eq!(path.target_section(&store), "remote.origin");
    }

    #[test]
    fn resolve_prefers_quoted_subsection() {
        let mut store = Store::new();
        store.get_or_create_section("remote.origin").add("url", "dotted");
        store
            .get_or_create_section("remote \"origin\"")
            .add("url", "quoted");
        let path = DottedPath::parse("remote.origin.url").unwrap();
        assert_eq!(path.resolve(&store).as_deref(), Some("remote \"origin\""));
    }

    #[test]
    fn resolve_falls_back_past_empty_value() {
        let mut store = Store::new();
        store.get_or_create_section("remote \"origin\"").add("url", "");
        store.get_or_create_section("remote.origin").add("url", "dotted");
        let path = DottedPath::parse("remote.origin.url").unwrap();
        assert_eq!(path.resolve(&store).as_deref(), Some("remote.origin"));
    }

    #[test]
    fn resolve_none_when_unset() {
        let store = Store::new();
        let path = DottedPath::parse("user.name").unwrap();
        assert_eq!(path.resolve(&store), None);
    }
}
