//! Groups: the `[Group Name]` sections of a file.

use crate::parser::split_locale_suffix;
use crate::{Entry, Locale, OrderedMap, Value};
use serde::Serialize;
use std::borrow::Cow;
use std::sync::Arc;

/// An ordered set of entries under one group header.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct Group {
    comment: String,
    entries: OrderedMap<String, Entry>,
    #[serde(skip)]
    default_locale: Option<Arc<Locale>>,
}

impl Group {
    /// Creates an empty group that is not attached to any document.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn with_default_locale(default_locale: Option<Arc<Locale>>) -> Self {
        Group {
            default_locale,
            ..Default::default()
        }
    }

    /// Returns the comment block written above the group header.
    #[inline]
    #[must_use]
    pub fn comment(&self) -> &str {
        &self.comment
    }

    pub fn set_comment(&mut self, comment: impl Into<String>) {
        self.comment = comment.into();
    }

    pub(crate) fn comment_mut(&mut self) -> &mut String {
        &mut self.comment
    }

    #[must_use]
    pub fn has_entry(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Returns the entry for `key`.
    ///
    /// A missing key yields a detached empty entry, so lookups can be
    /// chained without checking. Changing that entry does not touch the group.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use desktop_file::Group;
    ///
    /// let group = Group::new();
    /// assert!(group.get_entry("Name").value().is_empty());
    /// assert!(!group.has_entry("Name"));
    /// ```
    #[must_use]
    pub fn get_entry(&self, key: &str) -> Cow<'_, Entry> {
        match self.entries.get(key) {
            Some(entry) => Cow::Borrowed(entry),
            None => Cow::Owned(Entry::with_default_locale(self.default_locale.clone())),
        }
    }

    pub fn get_entry_mut(&mut self, key: &str) -> Option<&mut Entry> {
        self.entries.get_mut(key)
    }

    /// Returns the entry for `key`, appending a new empty one if absent.
    ///
    /// Localized values are added through the returned entry.
    pub fn add_entry(&mut self, key: &str) -> &mut Entry {
        let default_locale = &self.default_locale;
        self.entries
            .get_or_insert_with(key.to_string(), || {
                Entry::with_default_locale(default_locale.clone())
            })
    }

    /// Sets a value, creating the entry if needed.
    ///
    /// `key` may carry a locale suffix, `Name[de]`, in which case the value
    /// is stored as that locale's variant. An existing value is replaced.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use desktop_file::{Group, Locale, Value};
    ///
    /// let mut group = Group::new();
    /// group.insert("Name", Value::new("Files"));
    /// group.insert("Name[de]", Value::new("Dateien"));
    ///
    /// let entry = group.get_entry("Name");
    /// assert_eq!(entry.value_at_locale(&Locale::parse("de")).as_raw(), "Dateien");
    /// ```
    pub fn insert(&mut self, key: &str, value: Value) {
        let (key, locale) = split_locale_suffix(key);
        let entry = self.add_entry(key);
        match locale {
            Some(locale) => entry.add_locale(Locale::parse(locale)).value = value,
            None => entry.set_value(value),
        }
    }

    /// Removes the entry for `key`. Does nothing if it is absent.
    pub fn remove_entry(&mut self, key: &str) -> Option<Entry> {
        self.entries.remove(key)
    }

    /// Iterates the entries in the order they were added.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &Entry)> {
        self.entries.iter().map(|(key, entry)| (key.as_str(), entry))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
