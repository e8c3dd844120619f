//! Error types for `.desktop` parsing.
//!
//! Every syntax error aborts the parse and carries the 1-based line number of
//! the offending line. There is no partial-document recovery: the only way to
//! tolerate repeated groups or keys is through [`ParseOptions`](crate::ParseOptions).
//!
//! ## Error Categories
//!
//! - **Malformed lines**: neither comment, blank, group header nor `key=value`
//! - **Ordering errors**: a key assignment before the first group header
//! - **Duplicates**: a repeated group or key that no tolerance policy covers
//! - **I/O Errors**: failures of the underlying reader or writer
//!
//! ## Examples
//!
//! ```rust
//! use desktop_file::{from_str, Error};
//!
//! let err = from_str("Name=Test\n[Desktop Entry]\n").unwrap_err();
//! assert!(matches!(err, Error::KeyBeforeGroup { line: 1, .. }));
//! assert_eq!(err.line(), Some(1));
//! ```

use thiserror::Error;

/// Represents all possible errors raised while reading or writing a `.desktop` file.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// IO error during reading or writing, including non UTF-8 input
    #[error("IO error: {0}")]
    Io(String),

    /// A line that is not a comment, blank, group header or key assignment
    #[error("Line {line} is not a key, comment, group header, or whitespace: {content}")]
    MalformedLine { line: usize, content: String },

    /// A key assignment found before any group header
    #[error("Line {line} has a key before a group header: {key}")]
    KeyBeforeGroup { line: usize, key: String },

    /// A group header that was already seen
    #[error("Duplicate group at line {line}: [{name}]")]
    DuplicateGroup { line: usize, name: String },

    /// A key (or key with the same locale) that was already set in its group
    #[error("Duplicate key at line {line}: {key}")]
    DuplicateKey { line: usize, key: String },
}

impl Error {
    /// Creates a malformed line error.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use desktop_file::Error;
    ///
    /// let err = Error::malformed_line(4, "garbage");
    /// assert!(err.to_string().contains("Line 4"));
    /// ```
    pub fn malformed_line(line: usize, content: &str) -> Self {
        Error::MalformedLine {
            line,
            content: content.to_string(),
        }
    }

    /// Creates an error for a key assignment that precedes every group header.
    pub fn key_before_group(line: usize, key: &str) -> Self {
        Error::KeyBeforeGroup {
            line,
            key: key.to_string(),
        }
    }

    /// Creates a duplicate group error.
    pub fn duplicate_group(line: usize, name: &str) -> Self {
        Error::DuplicateGroup {
            line,
            name: name.to_string(),
        }
    }

    /// Creates a duplicate key error.
    ///
    /// For locale variants pass the full `Key[locale]` form so the message
    /// names the exact assignment that collided.
    pub fn duplicate_key(line: usize, key: &str) -> Self {
        Error::DuplicateKey {
            line,
            key: key.to_string(),
        }
    }

    /// Creates an I/O error for stream reading/writing failures.
    pub fn io(msg: &str) -> Self {
        Error::Io(msg.to_string())
    }

    /// Returns the 1-based line number the error refers to, if any.
    #[must_use]
    pub fn line(&self) -> Option<usize> {
        match self {
            Error::Io(_) => None,
            Error::MalformedLine { line, .. }
            | Error::KeyBeforeGroup { line, .. }
            | Error::DuplicateGroup { line, .. }
            | Error::DuplicateKey { line, .. } => Some(*line),
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::io(&err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_accessor() {
        assert_eq!(Error::duplicate_group(7, "A").line(), Some(7));
        assert_eq!(Error::duplicate_key(3, "Name[de]").line(), Some(3));
        assert_eq!(Error::io("broken pipe").line(), None);
    }

    #[test]
    fn test_messages_name_the_line() {
        let err = Error::duplicate_key(3, "Name");
        assert_eq!(err.to_string(), "Duplicate key at line 3: Name");

        let err = Error::duplicate_group(2, "Desktop Entry");
        assert_eq!(err.to_string(), "Duplicate group at line 2: [Desktop Entry]");
    }

    #[test]
    fn test_from_io_error() {
        let io = std::io::Error::new(std::io::ErrorKind::UnexpectedEof, "stream closed");
        let err = Error::from(io);
        assert!(matches!(err, Error::Io(ref msg) if msg.contains("stream closed")));
    }
}
