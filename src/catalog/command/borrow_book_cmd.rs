use serde::{Deserialize, Serialize};
use crate::catalog::domain::{CatalogService, StatusChange};
use crate::core::command::{Command, CommandError};

pub struct BorrowBookCommand<'a> {
    catalog_service: &'a mut dyn CatalogService,
}

impl<'a> BorrowBookCommand<'a> {
    pub fn new(catalog_service: &'a mut dyn CatalogService) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct BorrowBookCommandRequest {
    pub isbn: String,
}

impl BorrowBookCommandRequest {
    pub fn new(isbn: &str) -> Self {
        Self {
            isbn: isbn.to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct BorrowBookCommandResponse {
    pub change: StatusChange,
}

impl BorrowBookCommandResponse {
    pub fn new(change: StatusChange) -> Self {
        Self {
            change,
        }
    }
}

impl Command<BorrowBookCommandRequest, BorrowBookCommandResponse> for BorrowBookCommand<'_> {
    fn execute(&mut self, req: BorrowBookCommandRequest) -> Result<BorrowBookCommandResponse, CommandError> {
        self.catalog_service.borrow_book(req.isbn.as_str())
            .map_err(CommandError::from).map(BorrowBookCommandResponse::new)
    }
}
