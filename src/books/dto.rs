use serde::{Deserialize, Serialize};
use crate::books::domain::model::BookEntity;
use crate::core::library::BookStatus;

// BookDto is a data transfer object for Catalog service
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookDto {
    pub title: String,
    pub author: String,
    pub isbn: String,
    pub book_status: BookStatus,
}

impl BookDto {
    pub fn is_available(&self) -> bool {
        self.book_status.is_available()
    }
}

impl From<&BookEntity> for BookDto {
    fn from(other: &BookEntity) -> Self {
        Self {
            title: other.title.to_string(),
            author: other.author.to_string(),
            isbn: other.isbn.to_string(),
            book_status: other.book_status,
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::books::domain::model::BookEntity;
    use crate::books::dto::BookDto;
    use crate::core::library::BookStatus;

    #[test]
    fn test_should_copy_entity_fields() {
        let entity = BookEntity::new("Dune", "Herbert", "111").with_status(BookStatus::Borrowed);
        let dto = BookDto::from(&entity);
        assert_eq!("Dune", dto.title.as_str());
        assert_eq!("Herbert", dto.author.as_str());
        assert_eq!("111", dto.isbn.as_str());
        assert_eq!(BookStatus::Borrowed, dto.book_status);
        assert!(!dto.is_available());
    }
}
