pub mod file_book_repository;
