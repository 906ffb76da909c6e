use std::fs;
use std::io::Cursor;
use tempfile::tempdir;
use lms::catalog::controller::run;
use lms::catalog::domain::{CatalogService, LoadReport};
use lms::catalog::factory::create_catalog_service;
use lms::core::controller::{AppState, Console};
use lms::core::domain::Configuration;
use lms::core::library::{BookStatus, LibraryError, TransitionOutcome};
use lms::core::repository::RepositoryStore;

fn config() -> Configuration {
    Configuration::new("it").with_clear_screen(false)
}

#[test]
fn test_should_restore_saved_catalog_in_new_library() {
    let dir = tempdir().expect("temp dir");
    let path = dir.path().join("library_data.txt");

    let mut library = create_catalog_service(&config(), RepositoryStore::FlatFile);
    library.add_book("Dune", "Herbert", "111").expect("should add");
    assert_eq!(1, library.save(&path).expect("should save"));

    let mut restored = create_catalog_service(&config(), RepositoryStore::FlatFile);
    let report = restored.load(&path).expect("should load");
    assert_eq!(LoadReport::Loaded { count: 1, skipped: vec![] }, report);
    let book = restored.find_book_by_isbn("111").expect("should find");
    assert_eq!("Dune", book.title.as_str());
    assert!(book.is_available());
}

#[test]
fn test_should_reject_duplicate_and_track_borrowing() {
    let mut library = create_catalog_service(&config(), RepositoryStore::FlatFile);
    library.add_book("Emma", "Austen", "222").expect("should add");
    let err = library.add_book("Emma again", "Austen", "222").expect_err("should reject");
    assert!(matches!(err, LibraryError::DuplicateKey { .. }));
    assert_eq!(1, library.len());

    let change = library.borrow_book("222").expect("should borrow");
    assert_eq!(TransitionOutcome::Changed, change.outcome);
    let books = library.list_books();
    assert_eq!(1, books.len());
    assert_eq!(BookStatus::Borrowed, books[0].book_status);

    let stats = library.statistics();
    assert_eq!(stats.total, stats.available + stats.borrowed);
    assert_eq!(1, stats.borrowed);
}

#[test]
fn test_should_keep_empty_catalog_when_file_is_missing() {
    let dir = tempdir().expect("temp dir");
    let mut library = create_catalog_service(&config(), RepositoryStore::FlatFile);
    let report = library.load(&dir.path().join("nothing_here.txt")).expect("should not fail");
    assert_eq!(LoadReport::NotFound, report);
    assert!(library.is_empty());
}

#[test]
fn test_should_run_console_session_against_data_file() {
    let dir = tempdir().expect("temp dir");
    let path = dir.path().join("library_data.txt");
    fs::write(&path, "Dune|Herbert|111|1\n").expect("seed data");

    let state = AppState::new(config().with_data_file(&path), RepositoryStore::FlatFile);
    let mut library = create_catalog_service(&state.config, state.store);
    let script = "1\nEmma\nAusten\n222\n\n3\n222\n\n5\n\n8\n";
    let mut console = Console::new(Cursor::new(script), Vec::new(), false);
    run(&state, &mut library, &mut console).expect("menu should run");

    let output = String::from_utf8(console.into_output()).expect("utf8 output");
    assert!(output.contains("Library data loaded successfully! Loaded 1 books."));
    assert!(output.contains("Book 'Emma' has been borrowed."));
    assert!(output.contains("Total books: 2"));
    assert_eq!("Dune|Herbert|111|1\nEmma|Austen|222|0\n", fs::read_to_string(&path).expect("saved file"));
}
