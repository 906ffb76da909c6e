use crate::books::domain::model::BookEntity;
use crate::books::repository::file_book_repository::FileBookRepository;
use crate::core::repository::{Repository, RepositoryStore};

pub fn create_book_repository(store: RepositoryStore) -> Box<dyn Repository<BookEntity>> {
    match store {
        RepositoryStore::FlatFile => Box::new(FileBookRepository::new()),
    }
}
