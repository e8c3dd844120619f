//! # desktop_file
//!
//! A parser and data model for freedesktop `.desktop` files.
//!
//! ## What is a `.desktop` file?
//!
//! An INI-like, line-oriented key/value format used to describe application
//! launchers:
//!
//! ```text
//! # Shown in the application menu
//! [Desktop Entry]
//! Type=Application
//! Name=Text Editor
//! Name[de]=Texteditor
//! Categories=Utility;TextEditor;
//! Terminal=false
//! ```
//!
//! ## Key Features
//!
//! - **Faithful**: groups, keys and comments keep their order and survive a round trip
//! - **Locale-aware**: `Key[lang_COUNTRY@MODIFIER]` variants with best-match lookup
//! - **Typed views**: bool, integer, float and `;`-separated list coercions that never fail
//! - **Configurable**: duplicate groups and keys can be merged, ignored or rejected
//! - **Chainable lookups**: missing groups and entries yield empty values instead of `None`
//!
//! ## Quick Start
//!
//! ```rust
//! use desktop_file::{from_str_with_options, Locale, ParseOptions};
//!
//! let text = "\
//! [Desktop Entry]
//! Type=Application
//! Name=Text Editor
//! Name[de]=Texteditor
//! Categories=Utility;TextEditor;
//! Terminal=false
//! ";
//!
//! let options = ParseOptions::new().with_default_locale(Locale::parse("de_AT"));
//! let doc = from_str_with_options(text, options).unwrap();
//! let entry = doc.get_group("Desktop Entry");
//!
//! assert_eq!(entry.get_entry("Name").value().to_string(), "Texteditor");
//! assert_eq!(entry.get_entry("Categories").value().as_array().len(), 2);
//! assert!(!entry.get_entry("Terminal").value().as_bool());
//! assert!(entry.get_entry("NoDisplay").value().is_empty());
//! ```
//!
//! ### Editing and writing back
//!
//! ```rust
//! use desktop_file::{from_str, to_string, Value};
//!
//! let mut doc = from_str("[Desktop Entry]\nName=Files\n").unwrap();
//! doc.default_group().add_entry("Exec").set_value(Value::from_text("nautilus %U"));
//! assert_eq!(to_string(&doc), "[Desktop Entry]\nName=Files\nExec=nautilus %U\n");
//! ```
//!
//! ## Data Model
//!
//! - [`Document`] owns [`Group`]s in file order, plus a trailing end comment
//! - [`Group`] owns [`Entry`]s in file order, plus the comment above its header
//! - [`Entry`] owns a default [`Value`] and [`LocaleValue`] variants keyed by [`Locale`]
//!
//! ## Errors
//!
//! Parsing stops at the first problem and reports its line number; see [`Error`].
//! Typed coercions such as [`Value::as_int`] never error.
//!
//! ## Format Notes
//!
//! See the [`format`] module for the accepted syntax.

pub mod document;
pub mod entry;
pub mod error;
pub mod format;
pub mod group;
pub mod locale;
pub mod macros;
pub mod map;
pub mod options;
pub mod parser;
pub mod ser;
pub mod value;

pub use document::{Document, DEFAULT_GROUP};
pub use entry::{Entry, LocaleValue};
pub use error::{Error, Result};
pub use group::Group;
pub use locale::Locale;
pub use map::OrderedMap;
pub use options::{DuplicateKeys, ParseOptions};
pub use parser::Parser;
pub use ser::Serializer;
pub use value::Value;

use std::io;

/// Parse a `.desktop` document from a string with default options.
///
/// # Examples
///
/// ```rust
/// use desktop_file::from_str;
///
/// let doc = from_str("[Desktop Entry]\nName=Files\n").unwrap();
/// assert!(doc.has_group("Desktop Entry"));
/// ```
///
/// # Errors
///
/// Returns an error with the 1-based line number if the text is not a valid
/// `.desktop` file.
pub fn from_str(s: &str) -> Result<Document> {
    from_str_with_options(s, ParseOptions::default())
}

/// Parse a `.desktop` document from a string with custom options.
///
/// # Examples
///
/// ```rust
/// use desktop_file::{from_str_with_options, ParseOptions};
///
/// let text = "[Desktop Entry]\nName=A\nName=B\n";
/// let doc = from_str_with_options(text, ParseOptions::new().join_duplicate_keys()).unwrap();
/// assert_eq!(doc.get_group("Desktop Entry").get_entry("Name").value().as_raw(), "AB");
/// ```
///
/// # Errors
///
/// Returns an error if the text is malformed or contains duplicates that
/// `options` does not allow.
pub fn from_str_with_options(s: &str, options: ParseOptions) -> Result<Document> {
    Parser::new(s.as_bytes(), options).parse()
}

/// Parse a `.desktop` document from bytes.
///
/// # Errors
///
/// Returns [`Error::Io`] if the bytes are not valid UTF-8, or a syntax error.
pub fn from_slice(v: &[u8]) -> Result<Document> {
    Parser::new(v, ParseOptions::default()).parse()
}

/// Parse a `.desktop` document from an I/O stream with default options.
///
/// # Examples
///
/// ```rust
/// use desktop_file::from_reader;
/// use std::io::Cursor;
///
/// let doc = from_reader(Cursor::new(b"[Desktop Entry]\nType=Link\n")).unwrap();
/// assert_eq!(doc.get_group("Desktop Entry").get_entry("Type").value().as_raw(), "Link");
/// ```
///
/// # Errors
///
/// Returns [`Error::Io`] if reading fails, or a syntax error.
pub fn from_reader<R>(reader: R) -> Result<Document>
where
    R: io::Read,
{
    from_reader_with_options(reader, ParseOptions::default())
}

/// Parse a `.desktop` document from an I/O stream with custom options.
///
/// # Errors
///
/// Returns [`Error::Io`] if reading fails, or a syntax error.
pub fn from_reader_with_options<R>(reader: R, options: ParseOptions) -> Result<Document>
where
    R: io::Read,
{
    Parser::new(io::BufReader::new(reader), options).parse()
}

/// Serialize a document to `.desktop` text.
#[must_use]
pub fn to_string(doc: &Document) -> String {
    let mut serializer = Serializer::new();
    serializer.serialize_document(doc);
    serializer.into_inner()
}

/// Serialize a document to a writer.
///
/// # Examples
///
/// ```rust
/// use desktop_file::{desktop, to_writer};
///
/// let doc = desktop!({ "Desktop Entry": { "Type": "Application" } });
/// let mut buffer = Vec::new();
/// to_writer(&mut buffer, &doc).unwrap();
/// assert_eq!(buffer, b"[Desktop Entry]\nType=Application\n");
/// ```
///
/// # Errors
///
/// Returns [`Error::Io`] if writing to the writer fails.
pub fn to_writer<W>(mut writer: W, doc: &Document) -> Result<()>
where
    W: io::Write,
{
    writer.write_all(to_string(doc).as_bytes())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
# Written by hand
[Desktop Entry]
Type=Application
Name=Text Editor
Name[de]=Texteditor
# shown in menus
Comment=Edit text files
Categories=Utility;TextEditor;

[Desktop Action new-window]
Name=New Window
Exec=editor --new-window
";

    #[test]
    fn test_round_trip_sample() {
        let doc = from_str(SAMPLE).unwrap();
        assert_eq!(to_string(&doc), SAMPLE);
        assert_eq!(from_str(&to_string(&doc)).unwrap(), doc);
    }

    #[test]
    fn test_from_reader_matches_from_str() {
        let doc = from_reader(SAMPLE.as_bytes()).unwrap();
        assert_eq!(doc, from_str(SAMPLE).unwrap());
    }

    #[test]
    fn test_from_slice_rejects_invalid_utf8() {
        assert!(matches!(from_slice(b"[A]\nK=\xc3\x28\n"), Err(Error::Io(_))));
    }

    #[test]
    fn test_to_writer() {
        let doc = from_str(SAMPLE).unwrap();
        let mut out = Vec::new();
        to_writer(&mut out, &doc).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), SAMPLE);
    }
}
