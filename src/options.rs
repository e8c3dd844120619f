//! Configuration options for parsing.
//!
//! This module provides:
//!
//! - [`ParseOptions`]: the settings read once at the start of a parse
//! - [`DuplicateKeys`]: the resolved policy for a key that appears twice
//!
//! ## Examples
//!
//! ```rust
//! use desktop_file::{from_str_with_options, Locale, ParseOptions};
//!
//! let text = "[Desktop Entry]\nName=Files\nName[de]=Dateien\nName=Browser\n";
//!
//! let options = ParseOptions::new()
//!     .with_default_locale(Locale::parse("de_DE"))
//!     .ignore_duplicate_keys();
//! let doc = from_str_with_options(text, options).unwrap();
//!
//! let name = doc.get_group("Desktop Entry").get_entry("Name").value().to_string();
//! assert_eq!(name, "Dateien");
//! ```

use crate::Locale;
use serde::Deserialize;

/// What to do with a key that is assigned a second time in the same group.
///
/// - **Reject**: fail with [`Error::DuplicateKey`](crate::Error::DuplicateKey)
/// - **Join**: append the new value (and comment) to the existing one
/// - **Ignore**: keep the first value, drop the new one
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum DuplicateKeys {
    #[default]
    Reject,
    Join,
    Ignore,
}

/// Settings for a parse.
///
/// Fields can be set directly, through the builder methods, or loaded from
/// any serde format.
///
/// # Examples
///
/// ```rust
/// use desktop_file::{DuplicateKeys, ParseOptions};
///
/// let options = ParseOptions::new();
/// assert_eq!(options.duplicate_keys(), DuplicateKeys::Reject);
///
/// // join wins when both flags are set
/// let options = ParseOptions::new().ignore_duplicate_keys().join_duplicate_keys();
/// assert_eq!(options.duplicate_keys(), DuplicateKeys::Join);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ParseOptions {
    /// Locale used by [`Entry::value`](crate::Entry::value). `None` returns default values.
    pub default_locale: Option<Locale>,
    pub allow_duplicate_keys_join: bool,
    pub allow_duplicate_keys_ignore: bool,
    /// Merge repeated group headers into the first occurrence.
    pub allow_duplicate_groups: bool,
}

impl ParseOptions {
    /// Creates strict options: no default locale, duplicates rejected.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_default_locale(mut self, locale: Locale) -> Self {
        self.default_locale = Some(locale);
        self
    }

    /// Sets the duplicate-key flags from a single policy.
    #[must_use]
    pub fn with_duplicate_keys(mut self, policy: DuplicateKeys) -> Self {
        self.allow_duplicate_keys_join = policy == DuplicateKeys::Join;
        self.allow_duplicate_keys_ignore = policy == DuplicateKeys::Ignore;
        self
    }

    #[must_use]
    pub fn join_duplicate_keys(mut self) -> Self {
        self.allow_duplicate_keys_join = true;
        self
    }

    #[must_use]
    pub fn ignore_duplicate_keys(mut self) -> Self {
        self.allow_duplicate_keys_ignore = true;
        self
    }

    #[must_use]
    pub fn allow_duplicate_groups(mut self) -> Self {
        self.allow_duplicate_groups = true;
        self
    }

    /// Resolves the two duplicate-key flags into one policy. Join takes precedence.
    #[must_use]
    pub const fn duplicate_keys(&self) -> DuplicateKeys {
        if self.allow_duplicate_keys_join {
            DuplicateKeys::Join
        } else if self.allow_duplicate_keys_ignore {
            DuplicateKeys::Ignore
        } else {
            DuplicateKeys::Reject
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_duplicate_keys_replaces_flags() {
        let options = ParseOptions::new()
            .join_duplicate_keys()
            .with_duplicate_keys(DuplicateKeys::Ignore);
        assert!(!options.allow_duplicate_keys_join);
        assert_eq!(options.duplicate_keys(), DuplicateKeys::Ignore);

        let options = options.with_duplicate_keys(DuplicateKeys::Reject);
        assert_eq!(options.duplicate_keys(), DuplicateKeys::Reject);
    }

    #[test]
    fn test_deserialize_from_json() {
        let json = r#"{"default_locale": "pt_BR", "allow_duplicate_groups": true}"#;
        let options: ParseOptions = serde_json::from_str(json).unwrap();

        assert_eq!(options.default_locale, Some(Locale::new("pt").with_country("BR")));
        assert!(options.allow_duplicate_groups);
        assert_eq!(options.duplicate_keys(), DuplicateKeys::Reject);
    }

    #[test]
    fn test_deserialize_empty_is_default() {
        let options: ParseOptions = serde_json::from_str("{}").unwrap();
        assert_eq!(options, ParseOptions::new());
    }
}
