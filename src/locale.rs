//! Locale identifiers attached to localized keys.
//!
//! A `.desktop` key may carry a bracketed locale suffix such as
//! `Name[de_DE@euro]=...`. The suffix has the shape
//! `language[_COUNTRY][.ENCODING][@MODIFIER]`; the encoding part is
//! recognized and discarded.
//!
//! ## Examples
//!
//! ```rust
//! use desktop_file::Locale;
//!
//! let locale = Locale::parse("sr_YU.UTF-8@Latn");
//! assert_eq!(locale.language, "sr");
//! assert_eq!(locale.country, "YU");
//! assert_eq!(locale.modifier, "LATN");
//! assert_eq!(locale.to_string(), "sr_YU@LATN");
//! ```

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// A `language[_COUNTRY][@MODIFIER]` locale.
///
/// Constructors store the canonical case: lowercase language, uppercase
/// country and modifier. Equality is exact on all three parts. Partial matching (same language,
/// different country) is the job of [`Entry::value_at_locale`](crate::Entry::value_at_locale).
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Locale {
    pub language: String,
    pub country: String,
    pub modifier: String,
}

impl Locale {
    /// Creates a locale with only a language part.
    #[must_use]
    pub fn new(language: &str) -> Self {
        Locale {
            language: language.to_lowercase(),
            ..Default::default()
        }
    }

    /// Sets the country part.
    #[must_use]
    pub fn with_country(mut self, country: &str) -> Self {
        self.country = country.to_uppercase();
        self
    }

    /// Sets the modifier part.
    #[must_use]
    pub fn with_modifier(mut self, modifier: &str) -> Self {
        self.modifier = modifier.to_uppercase();
        self
    }

    /// Parses a locale string. Never fails.
    ///
    /// Splits on the first `_` and the first `@`. Anything from a `.` onwards
    /// in the country part is an encoding and is dropped. Case is normalized,
    /// so `DE` and `de` parse to the same locale.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use desktop_file::Locale;
    ///
    /// assert_eq!(Locale::parse("fr"), Locale::new("fr"));
    /// assert_eq!(Locale::parse("EN_us"), Locale::new("en").with_country("US"));
    /// assert_eq!(Locale::parse("en_US"), Locale::new("en").with_country("US"));
    /// assert_eq!(Locale::parse("ca@valencia"), Locale::new("ca").with_modifier("valencia"));
    /// ```
    #[must_use]
    pub fn parse(s: &str) -> Self {
        let under = s.find('_');
        let at = s.find('@');

        let mut locale = match (under, at) {
            (None, None) => Locale::new(s),
            (None, Some(at)) => Locale::new(&s[..at]).with_modifier(&s[at + 1..]),
            (Some(under), None) => Locale::new(&s[..under]).with_country(&s[under + 1..]),
            (Some(under), Some(at)) if under < at => Locale::new(&s[..under])
                .with_country(&s[under + 1..at])
                .with_modifier(&s[at + 1..]),
            // `lang@mod_with_underscore`: the underscore belongs to the modifier
            (Some(_), Some(at)) => Locale::new(&s[..at]).with_modifier(&s[at + 1..]),
        };

        if let Some(dot) = locale.country.find('.') {
            locale.country.truncate(dot);
        }
        locale
    }

    /// Returns `true` if the language part is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.language.is_empty()
    }
}

impl fmt::Display for Locale {
    /// Renders the canonical form: lowercase language, uppercase country and modifier.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.language.to_lowercase())?;
        if !self.country.is_empty() {
            write!(f, "_{}", self.country.to_uppercase())?;
        }
        if !self.modifier.is_empty() {
            write!(f, "@{}", self.modifier.to_uppercase())?;
        }
        Ok(())
    }
}

impl FromStr for Locale {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Locale::parse(s))
    }
}

impl From<&str> for Locale {
    fn from(s: &str) -> Self {
        Locale::parse(s)
    }
}

impl Serialize for Locale {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Locale {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(Locale::parse(&s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_language_only() {
        let locale = Locale::parse("de");
        assert_eq!(locale.language, "de");
        assert!(locale.country.is_empty());
        assert!(locale.modifier.is_empty());
    }

    #[test]
    fn test_parse_all_parts() {
        let locale = Locale::parse("en_US@x");
        assert_eq!(locale, Locale::new("en").with_country("US").with_modifier("x"));
    }

    #[test]
    fn test_parse_drops_encoding() {
        assert_eq!(Locale::parse("de_DE.UTF-8"), Locale::new("de").with_country("DE"));
        assert_eq!(
            Locale::parse("de_DE.ISO-8859-15@euro"),
            Locale::new("de").with_country("DE").with_modifier("euro")
        );
    }

    #[test]
    fn test_render_case() {
        let locale = Locale::new("PT").with_country("br").with_modifier("Latn");
        assert_eq!(locale.to_string(), "pt_BR@LATN");
        assert_eq!(Locale::new("nl").to_string(), "nl");
    }

    #[test]
    fn test_parse_normalizes_case() {
        let locale = Locale::parse("EN_us@Latn");
        assert_eq!(locale.language, "en");
        assert_eq!(locale.country, "US");
        assert_eq!(locale.modifier, "LATN");
        assert_eq!(Locale::parse("DE"), Locale::parse("de"));
        assert_eq!(Locale::parse(&locale.to_string()), locale);
    }

    #[test]
    fn test_equality_is_exact() {
        assert_ne!(Locale::parse("en_US"), Locale::parse("en"));
        assert_ne!(Locale::parse("en_US"), Locale::parse("en_US@x"));
    }

    #[test]
    fn test_serde_string_form() {
        let locale = Locale::parse("sr@latin");
        let json = serde_json::to_string(&locale).unwrap();
        assert_eq!(json, "\"sr@LATIN\"");
        let back: Locale = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Locale::new("sr").with_modifier("LATIN"));
    }
}
