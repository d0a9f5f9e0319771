//! JSON file catalog backend.
//!
//! Books are held in memory and rewritten to the backing file in full on
//! every mutation. The document is a JSON array of four-field book objects,
//! indented with four spaces.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use log::{error, info, warn};
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};

use super::traits::CatalogStore;
use super::types::{Book, LoadOutcome};
use crate::error::{CatalogError, Result};
use crate::fs::write_atomic;

/// JSON-file-backed catalog store.
pub struct JsonFileCatalog {
    path: PathBuf,
    books: Vec<Book>,
    load_outcome: LoadOutcome,
}

impl JsonFileCatalog {
    /// The backing path this catalog reads from and writes to.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn render(&self) -> Result<Vec<u8>> {
        let mut buf = Vec::new();
        let formatter = PrettyFormatter::with_indent(b"    ");
        let mut serializer = Serializer::with_formatter(&mut buf, formatter);
        self.books.serialize(&mut serializer)?;
        Ok(buf)
    }
}

impl CatalogStore for JsonFileCatalog {
    fn open(path: &Path) -> Result<Self> {
        let (books, load_outcome) = match fs::read_to_string(path) {
            Ok(contents) => match serde_json::from_str::<Vec<Book>>(&contents) {
                Ok(books) => {
                    info!(
                        "event=catalog_load status=ok books={} path={}",
                        books.len(),
                        path.display()
                    );
                    let count = books.len();
                    (books, LoadOutcome::Loaded { books: count })
                }
                Err(err) => {
                    error!(
                        "event=catalog_load status=error reason=parse path={} detail={}",
                        path.display(),
                        err
                    );
                    (Vec::new(), LoadOutcome::Corrupt)
                }
            },
            Err(err) if err.kind() == ErrorKind::NotFound => {
                warn!(
                    "event=catalog_load status=missing path={}",
                    path.display()
                );
                (Vec::new(), LoadOutcome::Missing)
            }
            Err(err) => {
                error!(
                    "event=catalog_load status=error reason=io path={} detail={}",
                    path.display(),
                    err
                );
                (Vec::new(), LoadOutcome::Corrupt)
            }
        };

        Ok(Self {
            path: path.to_path_buf(),
            books,
            load_outcome,
        })
    }

    fn load_outcome(&self) -> LoadOutcome {
        self.load_outcome
    }

    fn save(&self) -> Result<()> {
        let payload = self.render()?;
        if let Err(err) = write_atomic(&self.path, &payload) {
            error!(
                "event=catalog_save status=error path={} detail={}",
                self.path.display(),
                err
            );
            return Err(CatalogError::Storage(err.to_string()));
        }
        info!(
            "event=catalog_save status=ok books={} path={}",
            self.books.len(),
            self.path.display()
        );
        Ok(())
    }

    fn add_book(&mut self, book: Book) -> Result<()> {
        if self.books.iter().any(|existing| existing.isbn == book.isbn) {
            return Err(CatalogError::DuplicateIsbn(book.isbn));
        }
        self.books.push(book);
        self.save()
    }

    fn issue(&mut self, isbn: &str) -> Result<bool> {
        let book = self
            .books
            .iter_mut()
            .find(|book| book.isbn == isbn)
            .ok_or_else(|| CatalogError::NotFound(isbn.to_string()))?;
        if !book.issue() {
            return Ok(false);
        }
        self.save()?;
        Ok(true)
    }

    fn return_book(&mut self, isbn: &str) -> Result<bool> {
        let book = self
            .books
            .iter_mut()
            .find(|book| book.isbn == isbn)
            .ok_or_else(|| CatalogError::NotFound(isbn.to_string()))?;
        if !book.return_book() {
            return Ok(false);
        }
        self.save()?;
        Ok(true)
    }

    fn find_by_isbn(&self, isbn: &str) -> Option<&Book> {
        self.books.iter().find(|book| book.isbn == isbn)
    }

    fn find_by_title(&self, needle: &str) -> Vec<&Book> {
        let needle = needle.to_lowercase();
        self.books
            .iter()
            .filter(|book| book.title.to_lowercase().contains(&needle))
            .collect()
    }

    fn list_all(&self) -> &[Book] {
        &self.books
    }
}
