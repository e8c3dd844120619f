//! Writing documents back to `.desktop` text.
//!
//! The [`Serializer`] walks a [`Document`] in insertion order and emits:
//!
//! - each comment block verbatim, directly above its element
//! - `[Group]` headers
//! - `Key=value` lines, followed by `Key[locale]=value` for each variant
//! - the document's end comment, last
//!
//! Values are stored in their raw, escaped form, so they are written exactly
//! as read. Values built with [`Value::from_text`](crate::Value::from_text)
//! are escaped on construction.
//!
//! ## Examples
//!
//! ```rust
//! use desktop_file::{from_str, to_string};
//!
//! let text = "# Launcher\n[Desktop Entry]\nName=Files\nName[de]=Dateien\n\n# end\n";
//! let doc = from_str(text).unwrap();
//! assert_eq!(to_string(&doc), text);
//! ```

use crate::{Document, Entry, Group};
use std::fmt;

/// The `.desktop` text serializer.
pub struct Serializer {
    output: String,
}

impl Serializer {
    pub fn new() -> Self {
        Serializer {
            output: String::with_capacity(256),
        }
    }

    pub fn into_inner(self) -> String {
        self.output
    }

    pub fn serialize_document(&mut self, doc: &Document) {
        for (name, group) in doc.groups() {
            self.serialize_group(name, group);
        }
        self.output.push_str(doc.end_comment());
    }

    fn serialize_group(&mut self, name: &str, group: &Group) {
        self.write_comment(group.comment());
        self.output.push('[');
        self.output.push_str(name);
        self.output.push_str("]\n");

        for (key, entry) in group.entries() {
            self.serialize_entry(key, entry);
        }
    }

    fn serialize_entry(&mut self, key: &str, entry: &Entry) {
        self.write_comment(entry.comment());
        // an entry with neither a value nor variants still gets a `Key=` line
        if entry.has_default_value() || entry.locales().next().is_none() {
            self.write_line(key, None, entry.default_value().as_raw());
        }
        for (locale, variant) in entry.locales() {
            self.write_comment(&variant.comment);
            let locale = locale.to_string();
            self.write_line(key, Some(&locale), variant.value.as_raw());
        }
    }

    #[inline]
    fn write_comment(&mut self, comment: &str) {
        if comment.is_empty() {
            return;
        }
        self.output.push_str(comment);
        if !comment.ends_with('\n') {
            self.output.push('\n');
        }
    }

    #[inline]
    fn write_line(&mut self, key: &str, locale: Option<&str>, raw: &str) {
        self.output.push_str(key);
        if let Some(locale) = locale {
            self.output.push('[');
            self.output.push_str(locale);
            self.output.push(']');
        }
        self.output.push('=');
        self.output.push_str(raw);
        self.output.push('\n');
    }
}

impl Default for Serializer {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut serializer = Serializer::new();
        serializer.serialize_document(self);
        f.write_str(&serializer.into_inner())
    }
}
