pub mod service;

use std::path::Path;
use serde::{Deserialize, Serialize};
use crate::books::dto::BookDto;
use crate::core::library::{LibraryResult, TransitionOutcome};
use crate::core::repository::SkippedRecord;

pub trait CatalogService {
    fn add_book(&mut self, title: &str, author: &str, isbn: &str) -> LibraryResult<BookDto>;
    fn find_book_by_isbn(&self, isbn: &str) -> Option<BookDto>;
    fn search_by_title(&self, term: &str) -> Vec<BookDto>;
    fn search_by_author(&self, term: &str) -> Vec<BookDto>;
    fn borrow_book(&mut self, isbn: &str) -> LibraryResult<StatusChange>;
    fn return_book(&mut self, isbn: &str) -> LibraryResult<StatusChange>;
    fn len(&self) -> usize;
    fn is_empty(&self) -> bool;
    fn list_books(&self) -> Vec<BookDto>;
    fn statistics(&self) -> LibraryStatistics;
    fn save(&self, path: &Path) -> LibraryResult<usize>;
    fn load(&mut self, path: &Path) -> LibraryResult<LoadReport>;
}

// StatusChange reports the book a borrow/return was applied to and whether it moved.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatusChange {
    pub book: BookDto,
    pub outcome: TransitionOutcome,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LibraryStatistics {
    pub total: usize,
    pub available: usize,
    pub borrowed: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub enum LoadReport {
    NotFound,
    Loaded {
        count: usize,
        skipped: Vec<SkippedRecord>,
    },
}
