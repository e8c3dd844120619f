//! The parsed file.
//!
//! A [`Document`] owns its groups in file order plus whatever comment text
//! trails the last element. Groups and entries receive a read-only handle to
//! the default locale from [`ParseOptions`] when they are created, which is
//! how [`Entry::value`](crate::Entry::value) resolves localized values
//! without pointing back at the document.

use crate::{Group, Locale, OrderedMap, ParseOptions};
use serde::Serialize;
use std::borrow::Cow;
use std::sync::Arc;

/// Name of the group every desktop entry file is expected to contain.
pub const DEFAULT_GROUP: &str = "Desktop Entry";

/// A `.desktop` file as groups of entries.
///
/// # Examples
///
/// ```rust
/// use desktop_file::{Document, Value};
///
/// let mut doc = Document::new();
/// doc.default_group().add_entry("Type").set_value(Value::new("Application"));
///
/// assert!(doc.has_group("Desktop Entry"));
/// assert_eq!(doc.to_string(), "[Desktop Entry]\nType=Application\n");
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct Document {
    groups: OrderedMap<String, Group>,
    end_comment: String,
    #[serde(skip)]
    options: ParseOptions,
    #[serde(skip)]
    default_locale: Option<Arc<Locale>>,
}

impl Document {
    /// Creates an empty document with default options.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty document whose lookups follow `options`.
    #[must_use]
    pub fn with_options(options: ParseOptions) -> Self {
        let default_locale = options.default_locale.clone().map(Arc::new);
        Document {
            options,
            default_locale,
            ..Default::default()
        }
    }

    #[must_use]
    pub fn options(&self) -> &ParseOptions {
        &self.options
    }

    /// Returns the comment text that follows the last group or entry.
    #[must_use]
    pub fn end_comment(&self) -> &str {
        &self.end_comment
    }

    pub fn set_end_comment(&mut self, comment: impl Into<String>) {
        self.end_comment = comment.into();
    }

    /// Returns the `[Desktop Entry]` group, creating it if absent.
    pub fn default_group(&mut self) -> &mut Group {
        self.add_group(DEFAULT_GROUP)
    }

    #[must_use]
    pub fn has_group(&self, name: &str) -> bool {
        self.groups.contains_key(name)
    }

    /// Returns the group called `name`.
    ///
    /// A missing group yields a detached empty group that is safe to query.
    #[must_use]
    pub fn get_group(&self, name: &str) -> Cow<'_, Group> {
        match self.groups.get(name) {
            Some(group) => Cow::Borrowed(group),
            None => Cow::Owned(Group::with_default_locale(self.default_locale.clone())),
        }
    }

    pub fn get_group_mut(&mut self, name: &str) -> Option<&mut Group> {
        self.groups.get_mut(name)
    }

    /// Returns the group called `name`, appending a new empty one if absent.
    pub fn add_group(&mut self, name: &str) -> &mut Group {
        let default_locale = &self.default_locale;
        self.groups.get_or_insert_with(name.to_string(), || {
            Group::with_default_locale(default_locale.clone())
        })
    }

    /// Removes the group called `name`. Does nothing if it is absent.
    pub fn remove_group(&mut self, name: &str) -> Option<Group> {
        self.groups.remove(name)
    }

    /// Iterates the groups in file order.
    pub fn groups(&self) -> impl Iterator<Item = (&str, &Group)> {
        self.groups.iter().map(|(name, group)| (name.as_str(), group))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}
