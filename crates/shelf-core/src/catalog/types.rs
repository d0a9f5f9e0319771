//! Core data types for the catalog.

use std::fmt;

use serde::{Deserialize, Serialize};

/// One catalog entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    /// Title as entered by the user
    pub title: String,

    /// Author as entered by the user
    pub author: String,

    /// Unique key within a catalog (e.g. ISBN)
    pub isbn: String,

    /// Circulation status; a document without this field reads as available
    #[serde(default)]
    pub status: BookStatus,
}

impl Book {
    /// Create an available book.
    pub fn new(
        title: impl Into<String>,
        author: impl Into<String>,
        isbn: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            isbn: isbn.into(),
            status: BookStatus::Available,
        }
    }

    pub fn with_status(mut self, status: BookStatus) -> Self {
        self.status = status;
        self
    }

    /// Mark the book issued.
    ///
    /// Returns `false` without changing state when it is already out.
    pub fn issue(&mut self) -> bool {
        if self.status == BookStatus::Available {
            self.status = BookStatus::Issued;
            true
        } else {
            false
        }
    }

    /// Mark the book available again.
    ///
    /// Returns `false` without changing state when it was never issued.
    pub fn return_book(&mut self) -> bool {
        if self.status == BookStatus::Issued {
            self.status = BookStatus::Available;
            true
        } else {
            false
        }
    }

    pub fn is_available(&self) -> bool {
        self.status == BookStatus::Available
    }
}

impl fmt::Display for Book {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} by {} | ISBN: {} | Status: {}",
            self.title, self.author, self.isbn, self.status
        )
    }
}

/// Circulation status of a book.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BookStatus {
    #[default]
    Available,
    Issued,
}

impl fmt::Display for BookStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            BookStatus::Available => "available",
            BookStatus::Issued => "issued",
        };
        f.write_str(label)
    }
}

/// How the last load from disk went.
///
/// Lets callers tell "empty because the file was absent" apart from "empty
/// because the file could not be read or parsed".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// File existed and parsed; carries the number of books read.
    Loaded { books: usize },

    /// No file at the backing path; the catalog starts empty.
    Missing,

    /// File existed but was unreadable or malformed; the catalog was reset
    /// to empty.
    Corrupt,
}
