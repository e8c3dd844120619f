//! Line-based `.desktop` parsing.
//!
//! This module provides the [`Parser`], a single-pass state machine that
//! reads one line at a time and builds a [`Document`].
//!
//! ## Overview
//!
//! Each line is trimmed of blanks (space, tab, carriage return, line feed)
//! and classified as one of:
//!
//! - **Comment**: blank, or starting with `#`
//! - **Group header**: `[Group Name]`
//! - **Assignment**: `Key=Value` or `Key[locale]=Value`
//!
//! Comment lines accumulate until the next header or assignment, and become
//! that element's comment. Comments after the last element become the
//! document's end comment. Anything else is a [`Error::MalformedLine`].
//!
//! ## Usage
//!
//! Most users should use the high-level functions in the crate root:
//!
//! ```rust
//! use desktop_file::from_str;
//!
//! let doc = from_str("# launcher\n[Desktop Entry]\nName=Files\n").unwrap();
//! let group = doc.get_group("Desktop Entry");
//! assert_eq!(group.comment(), "# launcher\n");
//! assert_eq!(group.get_entry("Name").value().as_raw(), "Files");
//! ```

use crate::options::DuplicateKeys;
use crate::{Document, Error, Locale, ParseOptions, Result, Value};
use std::io::BufRead;
use tracing::{debug, trace};

/// Where the scanner is relative to the group headers.
#[derive(Debug, Clone, PartialEq)]
enum State {
    AwaitingFirstGroup,
    InGroup(String),
}

/// A classified, trimmed line.
#[derive(Debug, Clone, PartialEq)]
enum Line<'a> {
    Comment,
    Header(&'a str),
    Assignment {
        key: &'a str,
        locale: Option<&'a str>,
        value: &'a str,
    },
    Malformed,
}

impl<'a> Line<'a> {
    fn classify(line: &'a str) -> Self {
        if line.is_empty() || line.starts_with('#') {
            return Line::Comment;
        }

        if line.len() >= 2 && line.starts_with('[') && line.ends_with(']') {
            return Line::Header(line[1..line.len() - 1].trim());
        }

        let Some((key, value)) = line.split_once('=') else {
            return Line::Malformed;
        };
        let (key, locale) = split_locale_suffix(key.trim());
        Line::Assignment {
            key,
            locale,
            value: value.trim_matches(is_blank),
        }
    }
}

/// Characters stripped from line ends and around values. Each one has an
/// escape sequence, so [`Value::from_text`] can protect it.
fn is_blank(ch: char) -> bool {
    matches!(ch, ' ' | '\t' | '\r' | '\n')
}

/// Splits `Key[locale]` into `Key` and `locale`. Only the last bracket pair
/// is a locale suffix. Keys without one are returned whole.
pub(crate) fn split_locale_suffix(key: &str) -> (&str, Option<&str>) {
    match key.rfind('[') {
        Some(open) if key.ends_with(']') => {
            (key[..open].trim_end(), Some(&key[open + 1..key.len() - 1]))
        }
        _ => (key, None),
    }
}

/// The `.desktop` parser.
///
/// Consumes a buffered reader front to back, exactly once. Any error aborts
/// the parse; no partial document is returned.
pub struct Parser<R> {
    reader: R,
    line: usize,
    state: State,
    pending_comment: String,
    duplicate_keys: DuplicateKeys,
    allow_duplicate_groups: bool,
    doc: Document,
}

impl<R: BufRead> Parser<R> {
    pub fn new(reader: R, options: ParseOptions) -> Self {
        Parser {
            reader,
            line: 0,
            state: State::AwaitingFirstGroup,
            pending_comment: String::new(),
            duplicate_keys: options.duplicate_keys(),
            allow_duplicate_groups: options.allow_duplicate_groups,
            doc: Document::with_options(options),
        }
    }

    /// Runs the parse to completion.
    ///
    /// # Errors
    ///
    /// Returns the first syntax error with its 1-based line number, or
    /// [`Error::Io`] if the reader fails or yields invalid UTF-8.
    pub fn parse(mut self) -> Result<Document> {
        debug!("Parsing desktop file");

        let mut buf = String::new();
        loop {
            buf.clear();
            if self.reader.read_line(&mut buf)? == 0 {
                break;
            }
            self.line += 1;
            self.process_line(buf.trim_matches(is_blank))?;
        }

        if !self.pending_comment.is_empty() {
            self.doc.set_end_comment(std::mem::take(&mut self.pending_comment));
        }

        debug!(lines = self.line, groups = self.doc.len(), "Parsed desktop file");
        Ok(self.doc)
    }

    fn process_line(&mut self, line: &str) -> Result<()> {
        match Line::classify(line) {
            Line::Comment => {
                self.pending_comment.push_str(line);
                self.pending_comment.push('\n');
                Ok(())
            }
            Line::Header(name) => self.open_group(name),
            Line::Assignment { key, locale, value } => self.assign(key, locale, value),
            Line::Malformed => Err(Error::malformed_line(self.line, line)),
        }
    }

    fn open_group(&mut self, name: &str) -> Result<()> {
        trace!(line = self.line, group = name, "Group header");

        if self.doc.has_group(name) {
            if !self.allow_duplicate_groups {
                return Err(Error::duplicate_group(self.line, name));
            }
            debug!(line = self.line, group = name, "Merging duplicate group");
        }

        let comment = std::mem::take(&mut self.pending_comment);
        self.doc.add_group(name).comment_mut().push_str(&comment);
        self.state = State::InGroup(name.to_string());
        Ok(())
    }

    fn assign(&mut self, key: &str, locale: Option<&str>, value: &str) -> Result<()> {
        let State::InGroup(group_name) = &self.state else {
            return Err(Error::key_before_group(self.line, key));
        };

        let line = self.line;
        let policy = self.duplicate_keys;
        let comment = std::mem::take(&mut self.pending_comment);
        let entry = self.doc.add_group(group_name).add_entry(key);

        match locale {
            None => {
                if !entry.has_default_value() {
                    entry.set_value(Value::new(value));
                } else {
                    match policy {
                        DuplicateKeys::Reject => return Err(Error::duplicate_key(line, key)),
                        DuplicateKeys::Join => entry.default_value_mut().push_raw(value),
                        DuplicateKeys::Ignore => {
                            debug!(line, key, "Ignoring duplicate key");
                        }
                    }
                }
                entry.comment_mut().push_str(&comment);
            }
            Some(raw_locale) => {
                let parsed = Locale::parse(raw_locale);
                if let Some(variant) = entry.get_locale_mut(&parsed) {
                    match policy {
                        DuplicateKeys::Reject => {
                            return Err(Error::duplicate_key(
                                line,
                                &format!("{key}[{raw_locale}]"),
                            ))
                        }
                        DuplicateKeys::Join => variant.value.push_raw(value),
                        DuplicateKeys::Ignore => {
                            debug!(line, key, locale = raw_locale, "Ignoring duplicate key");
                        }
                    }
                    variant.comment.push_str(&comment);
                } else {
                    let variant = entry.add_locale(parsed);
                    variant.value = Value::new(value);
                    variant.comment = comment;
                }
            }
        }
        Ok(())
    }
}
