use crate::books::factory;
use crate::catalog::domain::service::Library;
use crate::core::domain::Configuration;
use crate::core::repository::RepositoryStore;

pub fn create_catalog_service(config: &Configuration, store: RepositoryStore) -> Library {
    Library::new(config, factory::create_book_repository(store))
}
