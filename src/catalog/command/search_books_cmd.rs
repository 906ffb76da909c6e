use std::fmt;
use std::fmt::{Display, Formatter};
use serde::{Deserialize, Serialize};
use crate::books::dto::BookDto;
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};

#[derive(Debug, PartialEq, Clone, Copy, Serialize, Deserialize)]
pub enum SearchField {
    Title,
    Author,
    Isbn,
}

impl Display for SearchField {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            SearchField::Title => write!(f, "title"),
            SearchField::Author => write!(f, "author"),
            SearchField::Isbn => write!(f, "ISBN"),
        }
    }
}

pub struct SearchBooksCommand<'a> {
    catalog_service: &'a dyn CatalogService,
}

impl<'a> SearchBooksCommand<'a> {
    pub fn new(catalog_service: &'a dyn CatalogService) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct SearchBooksCommandRequest {
    pub field: SearchField,
    pub term: String,
}

impl SearchBooksCommandRequest {
    pub fn new(field: SearchField, term: &str) -> Self {
        Self {
            field,
            term: term.to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct SearchBooksCommandResponse {
    pub books: Vec<BookDto>,
}

impl SearchBooksCommandResponse {
    pub fn new(books: Vec<BookDto>) -> Self {
        Self {
            books,
        }
    }
}

impl Command<SearchBooksCommandRequest, SearchBooksCommandResponse> for SearchBooksCommand<'_> {
    fn execute(&mut self, req: SearchBooksCommandRequest) -> Result<SearchBooksCommandResponse, CommandError> {
        let books = match req.field {
            SearchField::Title => self.catalog_service.search_by_title(req.term.as_str()),
            SearchField::Author => self.catalog_service.search_by_author(req.term.as_str()),
            // isbn is unique, so an exact match yields at most one book
            SearchField::Isbn => self.catalog_service.find_book_by_isbn(req.term.as_str())
                .into_iter().collect(),
        };
        Ok(SearchBooksCommandResponse::new(books))
    }
}

#[cfg(test)]
mod tests {
    use crate::catalog::command::search_books_cmd::{SearchBooksCommand, SearchBooksCommandRequest, SearchField};
    use crate::catalog::domain::CatalogService;
    use crate::catalog::factory;
    use crate::core::command::Command;
    use crate::core::domain::Configuration;
    use crate::core::repository::RepositoryStore;

    #[test]
    fn test_should_run_search_books() {
        let mut library = factory::create_catalog_service(&Configuration::new("test"), RepositoryStore::FlatFile);
        library.add_book("Dune", "Frank Herbert", "111").expect("should add book");
        library.add_book("Children of Dune", "Frank Herbert", "112").expect("should add book");
        library.add_book("Emma", "Jane Austen", "222").expect("should add book");

        let mut cmd = SearchBooksCommand::new(&library);
        let res = cmd.execute(SearchBooksCommandRequest::new(SearchField::Title, "Dune")).expect("should search");
        assert_eq!(2, res.books.len());
        let res = cmd.execute(SearchBooksCommandRequest::new(SearchField::Author, "Austen")).expect("should search");
        assert_eq!("Emma", res.books[0].title.as_str());
        let res = cmd.execute(SearchBooksCommandRequest::new(SearchField::Isbn, "11")).expect("should search");
        assert!(res.books.is_empty());
        let res = cmd.execute(SearchBooksCommandRequest::new(SearchField::Isbn, "112")).expect("should search");
        assert_eq!(1, res.books.len());
    }

    #[test]
    fn test_should_format_search_field() {
        assert_eq!("title", SearchField::Title.to_string());
        assert_eq!("ISBN", SearchField::Isbn.to_string());
    }
}
