use std::path::Path;
use tracing::info;
use crate::books::domain::model::{validate_field, BookEntity};
use crate::books::dto::BookDto;
use crate::catalog::domain::{CatalogService, LibraryStatistics, LoadReport, StatusChange};
use crate::core::domain::Configuration;
use crate::core::library::{LibraryError, LibraryResult, TransitionOutcome};
use crate::core::repository::{LoadOutcome, Repository};

// Library is the in-memory catalog. Books keep insertion order, which is also display order.
pub struct Library {
    branch_id: String,
    books: Vec<BookEntity>,
    book_repository: Box<dyn Repository<BookEntity>>,
}

impl Library {
    pub fn new(config: &Configuration, book_repository: Box<dyn Repository<BookEntity>>) -> Self {
        Self {
            branch_id: config.branch_id.to_string(),
            books: vec![],
            book_repository,
        }
    }

    fn search<F>(&self, matches: F) -> Vec<BookDto> where F: Fn(&BookEntity) -> bool {
        self.books.iter().filter(|b| matches(*b)).map(BookDto::from).collect()
    }

    fn change_status<F>(&mut self, isbn: &str, action: &str, transition: F) -> LibraryResult<StatusChange>
        where F: FnOnce(&mut BookEntity) -> TransitionOutcome {
        let book = self.books.iter_mut().find(|b| b.isbn == isbn)
            .ok_or_else(|| LibraryError::not_found(format!("book with isbn {} not found", isbn).as_str()))?;
        let outcome = transition(book);
        if outcome.is_changed() {
            info!(branch = %self.branch_id, isbn, "book {}", action);
        }
        Ok(StatusChange { book: BookDto::from(&*book), outcome })
    }
}

impl CatalogService for Library {
    fn add_book(&mut self, title: &str, author: &str, isbn: &str) -> LibraryResult<BookDto> {
        validate_field("title", title)?;
        validate_field("author", author)?;
        validate_field("isbn", isbn)?;
        if self.books.iter().any(|b| b.isbn == isbn) {
            return Err(LibraryError::duplicate_key(
                format!("a book with isbn {} already exists", isbn).as_str()));
        }
        let book = BookEntity::new(title, author, isbn);
        let dto = BookDto::from(&book);
        self.books.push(book);
        info!(branch = %self.branch_id, isbn, "book added");
        Ok(dto)
    }

    fn find_book_by_isbn(&self, isbn: &str) -> Option<BookDto> {
        self.books.iter().find(|b| b.isbn == isbn).map(BookDto::from)
    }

    fn search_by_title(&self, term: &str) -> Vec<BookDto> {
        self.search(|b| b.title.contains(term))
    }

    fn search_by_author(&self, term: &str) -> Vec<BookDto> {
        self.search(|b| b.author.contains(term))
    }

    fn borrow_book(&mut self, isbn: &str) -> LibraryResult<StatusChange> {
        self.change_status(isbn, "borrowed", BookEntity::borrow)
    }

    fn return_book(&mut self, isbn: &str) -> LibraryResult<StatusChange> {
        self.change_status(isbn, "returned", BookEntity::return_book)
    }

    fn len(&self) -> usize {
        self.books.len()
    }

    fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    fn list_books(&self) -> Vec<BookDto> {
        self.books.iter().map(BookDto::from).collect()
    }

    fn statistics(&self) -> LibraryStatistics {
        let available = self.books.iter().filter(|b| b.is_available()).count();
        LibraryStatistics {
            total: self.books.len(),
            available,
            borrowed: self.books.len() - available,
        }
    }

    fn save(&self, path: &Path) -> LibraryResult<usize> {
        let written = self.book_repository.save(path, &self.books)?;
        info!("saved {} books to {}", written, path.display());
        Ok(written)
    }

    fn load(&mut self, path: &Path) -> LibraryResult<LoadReport> {
        match self.book_repository.load(path)? {
            LoadOutcome::NotFound => {
                info!("no catalog at {}, keeping {} books in memory", path.display(), self.books.len());
                Ok(LoadReport::NotFound)
            }
            LoadOutcome::Loaded { records, skipped } => {
                self.books = records;
                info!("loaded {} books from {} ({} skipped)", self.books.len(), path.display(), skipped.len());
                Ok(LoadReport::Loaded { count: self.books.len(), skipped })
            }
        }
    }
}
