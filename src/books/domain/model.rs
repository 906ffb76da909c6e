use serde::{Deserialize, Serialize};
use crate::core::library::{BookStatus, LibraryError, LibraryResult, TransitionOutcome};

pub const FIELD_DELIMITER: char = '|';

// BookEntity is the stored form of a catalog record, one line per book in the data file:
// title|author|isbn|flag
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookEntity {
    pub title: String,
    pub author: String,
    pub isbn: String,
    pub book_status: BookStatus,
}

impl BookEntity {
    pub fn new(title: &str, author: &str, isbn: &str) -> Self {
        Self {
            title: title.to_string(),
            author: author.to_string(),
            isbn: isbn.to_string(),
            book_status: BookStatus::Available,
        }
    }

    pub fn with_status(mut self, status: BookStatus) -> Self {
        self.book_status = status;
        self
    }

    pub fn is_available(&self) -> bool {
        self.book_status.is_available()
    }

    pub fn borrow(&mut self) -> TransitionOutcome {
        match self.book_status {
            BookStatus::Available => {
                self.book_status = BookStatus::Borrowed;
                TransitionOutcome::Changed
            }
            BookStatus::Borrowed => TransitionOutcome::Unchanged,
        }
    }

    pub fn return_book(&mut self) -> TransitionOutcome {
        match self.book_status {
            BookStatus::Borrowed => {
                self.book_status = BookStatus::Available;
                TransitionOutcome::Changed
            }
            BookStatus::Available => TransitionOutcome::Unchanged,
        }
    }

    // Fields are written verbatim; add() refuses values that would break the line.
    pub fn to_line(&self) -> String {
        format!("{}{d}{}{d}{}{d}{}", self.title, self.author, self.isbn,
                self.book_status.flag(), d = FIELD_DELIMITER)
    }

    // Splits on the first three delimiters; the remainder is the availability flag.
    pub fn parse(line: &str) -> LibraryResult<BookEntity> {
        let mut fields = line.splitn(4, FIELD_DELIMITER);
        match (fields.next(), fields.next(), fields.next(), fields.next()) {
            (Some(title), Some(author), Some(isbn), Some(flag)) => {
                Ok(BookEntity::new(title, author, isbn).with_status(BookStatus::from_flag(flag)))
            }
            _ => {
                let found = line.matches(FIELD_DELIMITER).count();
                Err(LibraryError::serialization(
                    format!("expected 3 '{}' delimiters in record but found {}", FIELD_DELIMITER, found).as_str()))
            }
        }
    }
}

// A field is storable when it cannot split or terminate a record line.
pub fn validate_field(name: &str, value: &str) -> LibraryResult<()> {
    if value.contains(FIELD_DELIMITER) || value.contains('\n') || value.contains('\r') {
        return Err(LibraryError::validation(
            format!("{} must not contain '{}' or line breaks", name, FIELD_DELIMITER).as_str(),
            Some("delimiter".to_string())));
    }
    Ok(())
}
