//! `.desktop` Format Notes
//!
//! This module documents the syntax accepted by [`Parser`](crate::Parser)
//! and produced by [`Serializer`](crate::Serializer).
//!
//! # Lines
//!
//! Input is split on line feeds; a final line without one is still read.
//! Surrounding blanks (space, tab, carriage return) are trimmed before a
//! line is classified. Other whitespace, such as U+3000, is kept:
//!
//! | Line | Meaning |
//! |------|---------|
//! | empty, or starts with `#` | comment |
//! | `[Name]` | group header |
//! | contains `=` | key assignment |
//! | anything else | [`Error::MalformedLine`](crate::Error::MalformedLine) |
//!
//! ## Comments
//!
//! Comment lines are collected and attached to the next group header or key
//! assignment. Blank lines count as comment lines, so spacing between groups
//! survives a round trip:
//!
//! ```text
//! # attached to [Desktop Entry]
//! [Desktop Entry]
//! # attached to Name
//! Name=Files
//!
//! # document end comment
//! ```
//!
//! A `#` after a value is part of the value: `Name=C# Editor` has the value
//! `C# Editor`.
//!
//! ## Groups
//!
//! The text between the brackets, trimmed, is the group name. The first
//! header must come before the first assignment. `[Desktop Entry]` is the
//! conventional main group, see [`DEFAULT_GROUP`](crate::DEFAULT_GROUP).
//!
//! ## Keys
//!
//! The line is split on the first `=`, and both sides are trimmed, so
//! `Exec=env A=B app` assigns `env A=B app` to `Exec`. A key ending in
//! `[...]` is a localized key; only the last bracket pair counts:
//!
//! ```text
//! Name=Text Editor
//! Name[de]=Texteditor
//! Name[sr_YU@Latn]=Uređivač teksta
//! ```
//!
//! # Locales
//!
//! `lang_COUNTRY.ENCODING@MODIFIER`, every part but the language optional.
//! The encoding is ignored. Locales are stored and written as lowercase
//! language, uppercase country and uppercase modifier, so `Name[DE]` and
//! `Name[de]` name the same variant.
//!
//! # Values
//!
//! Values are stored raw. Typed readings:
//!
//! | Reading | Accepts | Fallback |
//! |---------|---------|----------|
//! | bool | `true` / `false`, any case | `false` |
//! | integer | optional sign, decimal digits | `0` |
//! | float | decimal or exponent notation | `0.0` |
//! | list | `;`-separated, `\;` for a literal `;` | whole value |
//!
//! ## Escapes
//!
//! | Sequence | Character |
//! |----------|-----------|
//! | `\s` | space |
//! | `\n` | newline |
//! | `\t` | tab |
//! | `\r` | carriage return |
//! | `\\` | backslash |
//!
//! A space at either end of a value must be written as `\s`, or it is
//! trimmed away. [`Value::from_text`](crate::Value::from_text) does this.
//!
//! Each backslash pair is resolved once, left to right: `\\n` is a backslash
//! followed by `n`.
//!
//! # Duplicates
//!
//! A repeated group header or a key assigned twice in the same group (with
//! the same locale) is an error unless [`ParseOptions`](crate::ParseOptions)
//! allows it:
//!
//! - repeated groups merge into the first occurrence, comments concatenated
//! - repeated keys either join (values and comments concatenated) or are
//!   ignored (first value kept, comment still attached)
