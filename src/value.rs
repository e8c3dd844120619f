//! Raw values and their typed coercions.
//!
//! A [`Value`] keeps the text exactly as it appeared after the `=` sign.
//! Nothing is interpreted at parse time; typed views are pure functions over
//! the raw string and never fail:
//!
//! | Accessor | On non-conforming text |
//! |----------|------------------------|
//! | [`Value::as_bool`] | `false` |
//! | [`Value::as_int`] | `0` |
//! | [`Value::as_float`] | `0.0` |
//! | [`Value::as_array`] | the whole value as a single element |
//!
//! The [`Display`](std::fmt::Display) form resolves the format's escape
//! sequences (`\s`, `\n`, `\t`, `\r`, `\\`).
//!
//! ## Examples
//!
//! ```rust
//! use desktop_file::Value;
//!
//! let value = Value::new("Utility;TextEditor;");
//! assert!(value.is_array());
//! assert_eq!(value.as_array(), vec![Value::new("Utility"), Value::new("TextEditor")]);
//!
//! assert_eq!(Value::new("line\\none").to_string(), "line\none");
//! assert!(Value::new("TRUE").as_bool());
//! assert_eq!(Value::new("nope").as_int(), 0);
//! ```

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// The raw text of a key's value.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Value(String);

impl Value {
    pub(crate) const fn empty() -> Self {
        Value(String::new())
    }

    /// Wraps raw, already escaped text.
    #[must_use]
    pub fn new(raw: impl Into<String>) -> Self {
        Value(raw.into())
    }

    /// Builds a value from plain text, escaping what the format requires.
    ///
    /// This is the inverse of the [`Display`](std::fmt::Display) form.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use desktop_file::Value;
    ///
    /// let value = Value::from_text(" two\nlines ");
    /// assert_eq!(value.as_raw(), "\\stwo\\nlines\\s");
    /// assert_eq!(value.to_string(), " two\nlines ");
    /// ```
    #[must_use]
    pub fn from_text(text: &str) -> Self {
        let last = text.chars().count().saturating_sub(1);
        let mut raw = String::with_capacity(text.len());
        for (i, ch) in text.chars().enumerate() {
            match ch {
                '\\' => raw.push_str("\\\\"),
                '\n' => raw.push_str("\\n"),
                '\t' => raw.push_str("\\t"),
                '\r' => raw.push_str("\\r"),
                // the parser trims spaces at either end of a value
                ' ' if i == 0 || i == last => raw.push_str("\\s"),
                _ => raw.push(ch),
            }
        }
        Value(raw)
    }

    /// Returns the raw text.
    #[inline]
    #[must_use]
    pub fn as_raw(&self) -> &str {
        &self.0
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub(crate) fn push_raw(&mut self, raw: &str) {
        self.0.push_str(raw);
    }

    /// Returns `true` if the value is `true` or `false`, ignoring case.
    #[must_use]
    pub fn is_bool(&self) -> bool {
        self.0.eq_ignore_ascii_case("true") || self.0.eq_ignore_ascii_case("false")
    }

    /// Returns `true` only for a case-insensitive `true`.
    #[must_use]
    pub fn as_bool(&self) -> bool {
        self.0.eq_ignore_ascii_case("true")
    }

    /// Returns `true` if the raw text parses as a decimal integer.
    #[must_use]
    pub fn is_int(&self) -> bool {
        self.0.parse::<i64>().is_ok()
    }

    /// Parses a decimal integer, falling back to `0`.
    #[must_use]
    pub fn as_int(&self) -> i64 {
        self.0.parse().unwrap_or(0)
    }

    /// Returns `true` if the raw text parses as a float.
    #[must_use]
    pub fn is_float(&self) -> bool {
        self.0.parse::<f64>().is_ok()
    }

    /// Parses a float, falling back to `0.0`.
    #[must_use]
    pub fn as_float(&self) -> f64 {
        self.0.parse().unwrap_or(0.0)
    }

    /// Returns `true` if the value contains at least one unescaped `;`.
    ///
    /// In other words the number of `;` characters exceeds the number of
    /// `\;` sequences.
    #[must_use]
    pub fn is_array(&self) -> bool {
        let mut escaped = 0;
        let mut total = 0;
        for token in Tokens::new(&self.0) {
            match token {
                Token::Escape(';') => {
                    escaped += 1;
                    total += 1;
                }
                Token::Char(';') => total += 1,
                _ => {}
            }
        }
        total > escaped
    }

    /// Splits the value on unescaped `;`.
    ///
    /// `\;` becomes a literal `;` inside its element. A trailing separator
    /// does not produce an empty last element. Other escape sequences are
    /// kept raw in the elements so they still render correctly.
    #[must_use]
    pub fn as_array(&self) -> Vec<Value> {
        if !self.is_array() {
            return vec![self.clone()];
        }

        let mut out = Vec::new();
        let mut current = String::new();
        for token in Tokens::new(&self.0) {
            match token {
                Token::Char(';') => out.push(Value(std::mem::take(&mut current))),
                Token::Char(ch) => current.push(ch),
                Token::Escape(';') => current.push(';'),
                Token::Escape(ch) => {
                    current.push('\\');
                    current.push(ch);
                }
                Token::Dangling => current.push('\\'),
            }
        }
        if !current.is_empty() {
            out.push(Value(current));
        }
        out
    }
}

/// One unit of raw text: a plain character or a backslash pair.
#[derive(Debug, Clone, Copy, PartialEq)]
enum Token {
    Char(char),
    Escape(char),
    /// A lone backslash at the end of the text
    Dangling,
}

/// Splits raw text into disjoint tokens so `\\;` is an escaped backslash
/// followed by a separator, never a backslash followed by `\;`.
struct Tokens<'a> {
    chars: std::str::Chars<'a>,
}

impl<'a> Tokens<'a> {
    fn new(raw: &'a str) -> Self {
        Tokens { chars: raw.chars() }
    }
}

impl Iterator for Tokens<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        match self.chars.next()? {
            '\\' => Some(match self.chars.next() {
                Some(ch) => Token::Escape(ch),
                None => Token::Dangling,
            }),
            ch => Some(Token::Char(ch)),
        }
    }
}

impl fmt::Display for Value {
    /// Writes the value with escape sequences resolved.
    ///
    /// Unknown sequences such as `\;` are written unchanged.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use fmt::Write;
        for token in Tokens::new(&self.0) {
            match token {
                Token::Char(ch) => f.write_char(ch)?,
                Token::Escape('s') => f.write_char(' ')?,
                Token::Escape('n') => f.write_char('\n')?,
                Token::Escape('t') => f.write_char('\t')?,
                Token::Escape('r') => f.write_char('\r')?,
                Token::Escape('\\') => f.write_char('\\')?,
                Token::Escape(ch) => {
                    f.write_char('\\')?;
                    f.write_char(ch)?;
                }
                Token::Dangling => f.write_char('\\')?,
            }
        }
        Ok(())
    }
}

impl From<&str> for Value {
    fn from(raw: &str) -> Self {
        Value::new(raw)
    }
}

impl From<String> for Value {
    fn from(raw: String) -> Self {
        Value(raw)
    }
}

impl Serialize for Value {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for Value {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        String::deserialize(deserializer).map(Value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bool() {
        assert!(Value::new("true").is_bool());
        assert!(Value::new("False").is_bool());
        assert!(!Value::new("yes").is_bool());
        assert!(Value::new("tRuE").as_bool());
        assert!(!Value::new("false").as_bool());
        assert!(!Value::new("1").as_bool());
    }

    #[test]
    fn test_int_and_float_agree_with_checks() {
        for raw in ["42", "-7", "+3", " 4", "4 ", "0x10", "", "9999999999999999999999"] {
            let value = Value::new(raw);
            if value.is_int() {
                assert_eq!(value.as_int(), raw.parse::<i64>().unwrap());
            } else {
                assert_eq!(value.as_int(), 0);
            }
        }

        assert!(Value::new("2.5").is_float());
        assert_eq!(Value::new("2.5").as_float(), 2.5);
        assert!(!Value::new("two").is_float());
        assert_eq!(Value::new("two").as_float(), 0.0);
    }

    #[test]
    fn test_array_detection() {
        assert!(Value::new("a;b").is_array());
        assert!(Value::new("a;").is_array());
        assert!(!Value::new("a").is_array());
        assert!(!Value::new("a\\;b").is_array());
        assert!(Value::new("a\\;b;c").is_array());
        // escaped backslash, then a real separator
        assert!(Value::new("a\\\\;b").is_array());
    }

    #[test]
    fn test_as_array() {
        assert_eq!(Value::new("a;b;c").as_array().len(), 3);
        assert_eq!(Value::new("a;b;").as_array().len(), 2);
        assert_eq!(
            Value::new("a;;b").as_array(),
            vec![Value::new("a"), Value::new(""), Value::new("b")]
        );

        let parts = Value::new("a\\;b;c").as_array();
        assert_eq!(parts, vec![Value::new("a;b"), Value::new("c")]);

        let parts = Value::new("x\\\\;y").as_array();
        assert_eq!(parts, vec![Value::new("x\\\\"), Value::new("y")]);
        assert_eq!(parts[0].to_string(), "x\\");
    }

    #[test]
    fn test_as_array_not_an_array() {
        assert_eq!(Value::new("single").as_array(), vec![Value::new("single")]);
        assert_eq!(Value::new("").as_array(), vec![Value::new("")]);
    }

    #[test]
    fn test_render_escapes() {
        assert_eq!(Value::new("a\\sb\\tc\\rd\\ne").to_string(), "a b\tc\rd\ne");
        assert_eq!(Value::new("C:\\\\temp").to_string(), "C:\\temp");
        // `\\n` is a backslash followed by `n`, not a newline
        assert_eq!(Value::new("\\\\n").to_string(), "\\n");
        assert_eq!(Value::new("a\\;b").to_string(), "a\\;b");
        assert_eq!(Value::new("end\\").to_string(), "end\\");
    }

    #[test]
    fn test_from_text_inverts_render() {
        for text in [
            "plain",
            " leading",
            "trailing ",
            " ",
            "tab\there",
            "back\\slash",
            "multi\nline\r\n",
        ] {
            assert_eq!(Value::from_text(text).to_string(), text);
        }
    }
}
