pub mod add_book_cmd;
pub mod borrow_book_cmd;
pub mod library_stats_cmd;
pub mod list_books_cmd;
pub mod load_library_cmd;
pub mod return_book_cmd;
pub mod save_library_cmd;
pub mod search_books_cmd;
