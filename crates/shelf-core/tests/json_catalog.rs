use std::fs;
use std::path::PathBuf;

use tempfile::{tempdir, TempDir};

use shelf_core::{Book, BookStatus, CatalogError, CatalogStore, JsonFileCatalog, LoadOutcome};

fn catalog_path(dir: &TempDir) -> PathBuf {
    dir.path().join("catalog.json")
}

fn sample_books() -> Vec<Book> {
    vec![
        Book::new("Dune", "Frank Herbert", "111"),
        Book::new("Dune Messiah", "Frank Herbert", "222"),
        Book::new("Hyperion", "Dan Simmons", "333"),
    ]
}

#[test]
fn test_round_trip_preserves_fields_and_order() {
    let dir = tempdir().expect("create temp dir");
    let path = catalog_path(&dir);

    let mut catalog = JsonFileCatalog::open(&path).expect("open should succeed");
    for book in sample_books() {
        catalog.add_book(book).expect("add should succeed");
    }
    catalog.issue("222").expect("issue should succeed");
    drop(catalog);

    let reopened = JsonFileCatalog::open(&path).expect("reopen should succeed");
    assert_eq!(reopened.load_outcome(), LoadOutcome::Loaded { books: 3 });

    let books = reopened.list_all();
    assert_eq!(books.len(), 3);
    assert_eq!(books[0].isbn, "111");
    assert_eq!(books[1].isbn, "222");
    assert_eq!(books[2].isbn, "333");
    assert_eq!(books[0].title, "Dune");
    assert_eq!(books[0].author, "Frank Herbert");
    assert_eq!(books[0].status, BookStatus::Available);
    assert_eq!(books[1].status, BookStatus::Issued);
}

#[test]
fn test_open_missing_file_starts_empty() {
    let dir = tempdir().expect("create temp dir");
    let path = catalog_path(&dir);

    let catalog = JsonFileCatalog::open(&path).expect("open should succeed");
    assert_eq!(catalog.load_outcome(), LoadOutcome::Missing);
    assert!(catalog.list_all().is_empty());
    assert!(catalog.find_by_isbn("anything").is_none());

    // Opening alone must not create the file.
    assert!(!path.exists());
}

#[test]
fn test_open_malformed_file_starts_empty() {
    let dir = tempdir().expect("create temp dir");
    let path = catalog_path(&dir);
    fs::write(&path, "{ this is not json").expect("write garbage");

    let catalog = JsonFileCatalog::open(&path).expect("open should not raise");
    assert_eq!(catalog.load_outcome(), LoadOutcome::Corrupt);
    assert!(catalog.list_all().is_empty());
}

#[test]
fn test_open_wrong_shape_counts_as_corrupt() {
    let dir = tempdir().expect("create temp dir");
    let path = catalog_path(&dir);
    fs::write(&path, r#"{"title": "Dune"}"#).expect("write object");

    let catalog = JsonFileCatalog::open(&path).expect("open should not raise");
    assert_eq!(catalog.load_outcome(), LoadOutcome::Corrupt);
    assert!(catalog.list_all().is_empty());
}

#[test]
fn test_add_rejects_duplicate_isbn() {
    let dir = tempdir().expect("create temp dir");
    let path = catalog_path(&dir);

    let mut catalog = JsonFileCatalog::open(&path).expect("open should succeed");
    catalog
        .add_book(Book::new("Dune", "Frank Herbert", "111"))
        .expect("first add should succeed");

    let err = catalog
        .add_book(Book::new("Dune, again", "Frank Herbert", "111"))
        .expect_err("duplicate add should fail");
    assert!(matches!(err, CatalogError::DuplicateIsbn(ref isbn) if isbn == "111"));

    assert_eq!(catalog.list_all().len(), 1);
    let on_disk: Vec<Book> =
        serde_json::from_str(&fs::read_to_string(&path).expect("read catalog"))
            .expect("parse catalog");
    assert_eq!(on_disk.len(), 1);
}

#[test]
fn test_find_by_title_is_case_insensitive_substring() {
    let dir = tempdir().expect("create temp dir");
    let path = catalog_path(&dir);

    let mut catalog = JsonFileCatalog::open(&path).expect("open should succeed");
    for book in sample_books() {
        catalog.add_book(book).expect("add should succeed");
    }

    let matches = catalog.find_by_title("dune");
    assert_eq!(matches.len(), 2);
    assert_eq!(matches[0].title, "Dune");
    assert_eq!(matches[1].title, "Dune Messiah");

    let matches = catalog.find_by_title("HYPERION");
    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0].isbn, "333");

    assert!(catalog.find_by_title("neuromancer").is_empty());
}

#[test]
fn test_issue_of_unknown_isbn_is_not_found() {
    let dir = tempdir().expect("create temp dir");
    let path = catalog_path(&dir);

    let mut catalog = JsonFileCatalog::open(&path).expect("open should succeed");
    let err = catalog.issue("999").expect_err("issue should fail");
    assert!(matches!(err, CatalogError::NotFound(_)));

    let err = catalog.return_book("999").expect_err("return should fail");
    assert!(matches!(err, CatalogError::NotFound(_)));
}

#[test]
fn test_on_disk_format_is_indented_with_lowercase_status() {
    let dir = tempdir().expect("create temp dir");
    let path = catalog_path(&dir);

    let mut catalog = JsonFileCatalog::open(&path).expect("open should succeed");
    catalog
        .add_book(Book::new("Dune", "Frank Herbert", "111"))
        .expect("add should succeed");

    let raw = fs::read_to_string(&path).expect("read catalog");
    assert!(raw.starts_with("[\n    {"));
    assert!(raw.contains("        \"title\": \"Dune\""));
    assert!(raw.contains("        \"status\": \"available\""));

    catalog.issue("111").expect("issue should succeed");
    let raw = fs::read_to_string(&path).expect("read catalog");
    assert!(raw.contains("        \"status\": \"issued\""));
}

#[test]
fn test_add_issue_return_scenario() {
    let dir = tempdir().expect("create temp dir");
    let path = catalog_path(&dir);

    let mut catalog = JsonFileCatalog::open(&path).expect("open should succeed");
    catalog
        .add_book(Book::new("Dune", "Frank Herbert", "111"))
        .expect("add should succeed");

    assert_eq!(catalog.list_all().len(), 1);
    let book = catalog.find_by_isbn("111").expect("book should exist");
    assert!(book.is_available());

    assert!(catalog.issue("111").expect("issue should succeed"));
    assert!(!catalog
        .find_by_isbn("111")
        .expect("book should exist")
        .is_available());

    // Issuing an issued book is a no-op.
    assert!(!catalog.issue("111").expect("second issue should not raise"));
    assert!(!catalog
        .find_by_isbn("111")
        .expect("book should exist")
        .is_available());

    assert!(catalog.return_book("111").expect("return should succeed"));
    assert!(catalog
        .find_by_isbn("111")
        .expect("book should exist")
        .is_available());

    assert!(!catalog
        .return_book("111")
        .expect("second return should not raise"));
}
