//! In-memory model of a config file: ordered sections of multi-valued keys.
use std::borrow::Cow;

/// An ordered multi-map from key to the values assigned to it.
///
/// Keys keep the position of their first insertion. A key assigned more than
/// once keeps every value; [`get`](Self::get) exposes them as one string
/// joined by `,`.
///
/// # Examples
///
/// ```
/// use gitconfig_cli::config::store::KeyValueBag;
///
/// let mut bag = KeyValueBag::default();
/// bag.add("fetch", "+refs/heads/*");
/// bag.add("fetch", "+refs/tags/*");
/// assert_eq!(bag.get("fetch").as_deref(), Some("+refs/heads/*,+refs/tags/*"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyValueBag {
    entries: Vec<(String, Vec<String>)>,
}

impl KeyValueBag {
    /// Append `value` to the values of `key`, creating the key if needed.
    pub fn add(&mut self, key: &str, value: impl Into<String>) {
        let value = value.into();
        match self.position(key) {
            Some(idx) => {
                if let Some((_, values)) = self.entries.get_mut(idx) {
                    values.push(value);
                }
            }
            None => self.entries.push((key.to_string(), vec![value])),
        }
    }

    /// Replace every value of `key` with `value`.
    ///
    /// An existing key keeps its position; a new key is appended.
    pub fn set(&mut self, key: &str, value: impl Into<String>) {
        let value = value.into();
        match self.position(key) {
            Some(idx) => {
                if let Some((_, values)) = self.entries.get_mut(idx) {
                    *values = vec![value];
                }
            }
            None => self.entries.push((key.to_string(), vec![value])),
        }
    }

    /// Remove `key` and all of its values. Returns `true` if it was present.
    pub fn remove(&mut self, key: &str) -> bool {
        self.position(key)
            .map(|idx| self.entries.remove(idx))
            .is_some()
    }

    /// The combined view of all values for `key`.
    ///
    /// A single value is returned unmodified (borrowed); several values are
    /// joined with `,`. Returns `None` if the key was never assigned.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<Cow<'_, str>> {
        let values = self.values(key)?;
        match values {
            [single] => Some(Cow::Borrowed(single.as_str())),
            many => Some(Cow::Owned(many.join(","))),
        }
    }

    /// The raw values of `key` in assignment order.
    #[must_use]
    pub fn values(&self, key: &str) -> Option<&[String]> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, values)| values.as_slice())
    }

    /// Whether `key` has been assigned at least once.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.position(key).is_some()
    }

    /// Keys in first-insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    /// `(key, combined value)` pairs in first-insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Cow<'_, str>)> {
        self.keys().filter_map(move |k| self.get(k).map(|v| (k, v)))
    }

    /// Number of distinct keys.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the bag holds no keys.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn position(&self, key: &str) -> Option<usize> {
        self.entries.iter().position(|(k, _)| k == key)
    }
}

/// All sections of a config file, in the order they were first seen.
///
/// The unnamed top-level section (`""`) always exists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Store {
    sections: Vec<(String, KeyValueBag)>,
}

impl Default for Store {
    fn default() -> Self {
        Self::new()
    }
}

impl Store {
    /// Create a store holding only the empty top-level section.
    #[must_use]
    pub fn new() -> Self {
        Self {
            sections: vec![(String::new(), KeyValueBag::default())],
        }
    }

    /// Look up a section by its exact (case-sensitive) name.
    #[must_use]
    pub fn section(&self, name: &str) -> Option<&KeyValueBag> {
        self.sections
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, bag)| bag)
    }

    /// Mutable lookup of a section by its exact name.
    pub fn section_mut(&mut self, name: &str) -> Option<&mut KeyValueBag> {
        self.sections
            .iter_mut()
            .find(|(n, _)| n == name)
            .map(|(_, bag)| bag)
    }

    /// Whether a section with this exact name exists.
    #[must_use]
    pub fn has_section(&self, name: &str) -> bool {
        self.section(name).is_some()
    }

    /// Whether `section` exists and `key` resolves to a non-empty value.
    #[must_use]
    pub fn has_key(&self, section: &str, key: &str) -> bool {
        self.section(section)
            .and_then(|bag| bag.get(key))
            .is_some_and(|v| !v.is_empty())
    }

    /// Return the named section, creating it empty at the end if absent.
    #[allow(clippy::indexing_slicing)]
    pub fn get_or_create_section(&mut self, name: &str) -> &mut KeyValueBag {
        let idx = match self.sections.iter().position(|(n, _)| n == name) {
            Some(idx) => idx,
            None => {
                tracing::trace!("creating section [{name}]");
                self.sections.push((name.to_string(), KeyValueBag::default()));
                self.sections.len() - 1
            }
        };
        // `idx` is in bounds: found by position() or just pushed.
        &mut self.sections[idx].1
    }

    /// `(name, bag)` pairs in first-seen order.
    pub fn sections(&self) -> impl Iterator<Item = (&str, &KeyValueBag)> {
        self.sections.iter().map(|(n, bag)| (n.as_str(), bag))
    }

    /// Section names in first-seen order.
    pub fn section_names(&self) -> impl Iterator<Item = &str> {
        self.sections.iter().map(|(n, _)| n.as_str())
    }
}

#[cfg(test)]
#[allow(clippy::expect_used, clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;

    #[test]
    fn add_keeps_every_value_in_order() {
        let mut bag = KeyValueBag::default();
        bag.add("x", "1");
        bag.add("y", "a");
        bag.add("x", "2");
        assert_eq!(bag.values("x").unwrap(), ["1", "2"]);
        assert_eq!(bag.get("x").unwrap(), "1,2");
        assert_eq!(bag.keys().collect::<Vec<_>>(), ["x", "y"]);
    }

    #[test]
    fn single_value_is_borrowed() {
        let mut bag = KeyValueBag::default();
        bag.add("x", "1");
        assert!(matches!(bag.get("x"), Some(Cow::Borrowed("1"))));
    }

    #[test]
    fn join_keeps_empty_values() {
        let mut bag = KeyValueBag::default();
        bag.add("x", "");
        bag.add("x", "");
        assert_eq!(bag.get("x").unwrap(), ",");
    }

    #[test]
    fn set_replaces_all_values_in_place() {
        let mut bag = KeyValueBag::default();
        bag.add("x", "1");
        bag.add("y", "a");
        bag.add("x", "2");
        bag.set("x", "3");
        assert_eq!(bag.values("x").unwrap(), ["3"]);
        assert_eq!(bag.keys().collect::<Vec<_>>(), ["x", "y"]);
    }

    #[test]
    fn remove_drops_key() {
        let mut bag = KeyValueBag::default();
        bag.add("x", "1");
        assert!(bag.remove("x"));
        assert!(!bag.remove("x"));
        assert!(bag.is_empty());
        assert_eq!(bag.get("x"), None);
    }

    #[test]
    fn keys_are_case_sensitive() {
        let mut bag = KeyValueBag::default();
        bag.add("Name", "a");
        assert!(bag.contains_key("Name"));
        assert!(!bag.contains_key("name"));
    }

    #[test]
    fn iter_yields_combined_values() {
        let mut bag = KeyValueBag::default();
        bag.add("a", "1");
        bag.add("a", "2");
        bag.add("b", "3");
        let pairs: Vec<(String, String)> = bag
            .iter()
            .map(|(k, v)| (k.to_string(), v.into_owned()))
            .collect();
        assert_eq!(
            pairs,
            vec![
                ("a".to_string(), "1,2".to_string()),
                ("b".to_string(), "3".to_string()),
            ]
        );
    }

    #[test]
    fn new_store_has_top_level_section() {
        let store = Store::new();
        assert!(store.has_section(""));
        assert_eq!(store.section_names().collect::<Vec<_>>(), [""]);
    }

    #[test]
    fn get_or_create_appends_once() {
        let mut store = Store::new();
        store.get_or_create_section("core").add("bare", "false");
        store.get_or_create_section("user").add("name", "A");
        store.get_or_create_section("core").add("filemode", "true");
        assert_eq!(
            store.section_names().collect::<Vec<_>>(),
            ["", "core", "user"]
        );
        assert_eq!(store.section("core").unwrap().len(), 2);
    }

    #[test]
    fn has_key_requires_non_empty_value() {
        let mut store = Store::new();
        store.get_or_create_section("core").set("editor", "");
        assert!(!store.has_key("core", "editor"));
        assert!(!store.has_key("missing", "editor"));
        store.get_or_create_section("core").set("editor", "vim");
        assert!(store.has_key("core", "editor"));
    }

    #[test]
    fn section_names_are_case_sensitive() {
        let mut store = Store::new();
        store.get_or_create_section("Core");
        assert!(store.has_section("Core"));
        assert!(!store.has_section("core"));
    }
}
