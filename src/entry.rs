//! Keys, their default values and their locale variants.
//!
//! An [`Entry`] is everything a group knows about one key: the value of the
//! plain `Key=` line, the comment block above it, and every `Key[locale]=`
//! variant in the order the variants were first seen.
//!
//! ## Locale resolution
//!
//! [`Entry::value_at_locale`] resolves a requested locale in three tiers:
//!
//! 1. a variant with the same language, country and modifier wins outright
//! 2. otherwise the first variant with the same language and country
//! 3. otherwise the first variant with the same language
//!
//! When no variant shares the language, the default value is returned.
//!
//! ```rust
//! use desktop_file::{Entry, Locale, Value};
//!
//! let mut entry = Entry::new();
//! entry.set_value(Value::new("Generic"));
//! entry.add_locale(Locale::parse("en_US")).value = Value::new("American");
//! entry.add_locale(Locale::parse("en")).value = Value::new("English");
//!
//! assert_eq!(entry.value_at_locale(&Locale::parse("en_US@x")).as_raw(), "American");
//! assert_eq!(entry.value_at_locale(&Locale::parse("en_GB")).as_raw(), "English");
//! assert_eq!(entry.value_at_locale(&Locale::parse("fr")).as_raw(), "Generic");
//! ```

use crate::{Locale, OrderedMap, Value};
use serde::Serialize;
use std::sync::Arc;

/// A locale-specific value of an [`Entry`].
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct LocaleValue {
    pub value: Value,
    pub comment: String,
}

static EMPTY_VALUE: Value = Value::empty();

/// A key's default value plus its locale variants.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct Entry {
    /// `None` until a plain `Key=` line (or [`Entry::set_value`]) provides one.
    value: Option<Value>,
    comment: String,
    locales: OrderedMap<Locale, LocaleValue>,
    /// Read-only view of the owning document's default locale.
    #[serde(skip)]
    default_locale: Option<Arc<Locale>>,
}

impl Entry {
    /// Creates an empty entry that is not attached to any document.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn with_default_locale(default_locale: Option<Arc<Locale>>) -> Self {
        Entry {
            default_locale,
            ..Default::default()
        }
    }

    /// Returns the value for the document's default locale.
    ///
    /// Without a configured default locale this is the plain default value.
    #[must_use]
    pub fn value(&self) -> &Value {
        match self.default_locale.as_deref() {
            Some(locale) => self.value_at_locale(locale),
            None => self.default_value(),
        }
    }

    /// Returns the value of the unlocalized `Key=` line, empty if there is none.
    #[inline]
    #[must_use]
    pub fn default_value(&self) -> &Value {
        self.value.as_ref().unwrap_or(&EMPTY_VALUE)
    }

    /// Returns `true` if the entry has an unlocalized value.
    ///
    /// An entry created only through `Key[locale]=` lines has none, and is
    /// written back without a plain `Key=` line.
    #[inline]
    #[must_use]
    pub fn has_default_value(&self) -> bool {
        self.value.is_some()
    }

    pub fn set_value(&mut self, value: Value) {
        self.value = Some(value);
    }

    pub(crate) fn default_value_mut(&mut self) -> &mut Value {
        self.value.get_or_insert_with(Value::default)
    }

    /// Returns the comment block written above the `Key=` line.
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

    /// Resolves `query` against the locale variants.
    ///
    /// Ties within a tier go to the variant inserted first.
    #[must_use]
    pub fn value_at_locale(&self, query: &Locale) -> &Value {
        let mut language_match: Option<&LocaleValue> = None;
        let mut country_match: Option<&LocaleValue> = None;

        for (locale, variant) in self.locales.iter() {
            if locale.language != query.language {
                continue;
            }
            language_match.get_or_insert(variant);
            if locale.country != query.country {
                continue;
            }
            country_match.get_or_insert(variant);
            if locale.modifier == query.modifier {
                return &variant.value;
            }
        }

        country_match
            .or(language_match)
            .map_or_else(|| self.default_value(), |variant| &variant.value)
    }

    /// Returns the variant for exactly `locale`, creating an empty one if needed.
    pub fn add_locale(&mut self, locale: Locale) -> &mut LocaleValue {
        self.locales.get_or_insert_with(locale, LocaleValue::default)
    }

    /// Returns `true` if a variant exists for exactly `locale`.
    #[must_use]
    pub fn has_locale(&self, locale: &Locale) -> bool {
        self.locales.contains_key(locale)
    }

    #[must_use]
    pub fn get_locale(&self, locale: &Locale) -> Option<&LocaleValue> {
        self.locales.get(locale)
    }

    pub(crate) fn get_locale_mut(&mut self, locale: &Locale) -> Option<&mut LocaleValue> {
        self.locales.get_mut(locale)
    }

    pub fn remove_locale(&mut self, locale: &Locale) -> Option<LocaleValue> {
        self.locales.remove(locale)
    }

    /// Iterates the variants in insertion order.
    pub fn locales(&self) -> impl Iterator<Item = (&Locale, &LocaleValue)> {
        self.locales.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Entry {
        let mut entry = Entry::new();
        entry.set_value(Value::new("Generic"));
        entry.add_locale(Locale::parse("en_US")).value = Value::new("American");
        entry.add_locale(Locale::parse("en")).value = Value::new("English");
        entry
    }

    #[test]
    fn test_exact_match() {
        let mut entry = sample();
        entry.add_locale(Locale::parse("en_US@x")).value = Value::new("Modified");
        assert_eq!(entry.value_at_locale(&Locale::parse("en_US@x")).as_raw(), "Modified");
    }

    #[test]
    fn test_country_tier_beats_language_tier() {
        let entry = sample();
        assert_eq!(entry.value_at_locale(&Locale::parse("en_US@x")).as_raw(), "American");
        assert_eq!(entry.value_at_locale(&Locale::parse("en_GB")).as_raw(), "English");
        assert_eq!(entry.value_at_locale(&Locale::parse("fr")).as_raw(), "Generic");
    }

    #[test]
    fn test_language_tier_first_wins() {
        let mut entry = Entry::new();
        entry.add_locale(Locale::parse("de_AT")).value = Value::new("Austria");
        entry.add_locale(Locale::parse("de_CH")).value = Value::new("Swiss");
        assert_eq!(entry.value_at_locale(&Locale::parse("de")).as_raw(), "Austria");
    }

    #[test]
    fn test_add_locale_is_idempotent() {
        let mut entry = Entry::new();
        entry.add_locale(Locale::parse("nl")).value = Value::new("Hallo");
        let again = entry.add_locale(Locale::parse("nl"));
        assert_eq!(again.value.as_raw(), "Hallo");
        assert_eq!(entry.locales().count(), 1);
    }

    #[test]
    fn test_has_locale_is_exact() {
        let entry = sample();
        assert!(entry.has_locale(&Locale::parse("en")));
        assert!(!entry.has_locale(&Locale::parse("en_GB")));
    }

    #[test]
    fn test_value_uses_default_locale_handle() {
        let mut entry = Entry::with_default_locale(Some(Arc::new(Locale::parse("en_CA"))));
        entry.set_value(Value::new("Generic"));
        entry.add_locale(Locale::parse("en")).value = Value::new("English");
        assert_eq!(entry.value().as_raw(), "English");
        assert_eq!(entry.default_value().as_raw(), "Generic");

        assert_eq!(sample().value().as_raw(), "Generic");
    }

    #[test]
    fn test_variant_only_entry_has_no_default() {
        let mut entry = Entry::new();
        entry.add_locale(Locale::parse("ja")).value = Value::new("名前");
        assert!(!entry.has_default_value());
        assert!(entry.default_value().is_empty());
        assert!(entry.value_at_locale(&Locale::parse("ko")).is_empty());
    }

    #[test]
    fn test_remove_locale_keeps_order() {
        let mut entry = sample();
        entry.add_locale(Locale::parse("fr")).value = Value::new("Français");
        entry.remove_locale(&Locale::parse("en"));
        let order: Vec<String> = entry.locales().map(|(l, _)| l.to_string()).collect();
        assert_eq!(order, vec!["en_US", "fr"]);
    }
}
