use std::io::{BufRead, Write};
use tracing::{error, warn};
use crate::books::dto::BookDto;
use crate::catalog::command::add_book_cmd::{AddBookCommand, AddBookCommandRequest};
use crate::catalog::command::borrow_book_cmd::{BorrowBookCommand, BorrowBookCommandRequest};
use crate::catalog::command::library_stats_cmd::{LibraryStatsCommand, LibraryStatsCommandRequest};
use crate::catalog::command::list_books_cmd::{ListBooksCommand, ListBooksCommandRequest};
use crate::catalog::command::load_library_cmd::{LoadLibraryCommand, LoadLibraryCommandRequest};
use crate::catalog::command::return_book_cmd::{ReturnBookCommand, ReturnBookCommandRequest};
use crate::catalog::command::save_library_cmd::{SaveLibraryCommand, SaveLibraryCommandRequest};
use crate::catalog::command::search_books_cmd::{SearchBooksCommand, SearchBooksCommandRequest, SearchField};
use crate::catalog::domain::{CatalogService, LoadReport, StatusChange};
use crate::core::command::{Command, CommandError};
use crate::core::controller::{AppState, Console, ConsoleError};
use crate::core::library::LibraryResult;

const NO_BOOKS: &str = "No books in the library.";
const INVALID_INPUT: &str = "Invalid input! Please enter a number between 1-8.";
const INVALID_CHOICE: &str = "Invalid choice! Please enter a number between 1-8.";
const SEPARATOR: &str = "------------------------";

#[derive(Debug, PartialEq, Clone, Copy)]
pub enum MenuChoice {
    AddBook,
    SearchBooks,
    BorrowBook,
    ReturnBook,
    DisplayBooks,
    Statistics,
    Save,
    Exit,
}

impl TryFrom<u32> for MenuChoice {
    type Error = u32;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(MenuChoice::AddBook),
            2 => Ok(MenuChoice::SearchBooks),
            3 => Ok(MenuChoice::BorrowBook),
            4 => Ok(MenuChoice::ReturnBook),
            5 => Ok(MenuChoice::DisplayBooks),
            6 => Ok(MenuChoice::Statistics),
            7 => Ok(MenuChoice::Save),
            8 => Ok(MenuChoice::Exit),
            other => Err(other),
        }
    }
}

// Runs the interactive menu until Exit is chosen or the input ends. The catalog is
// loaded from the configured data file first and saved back on the way out, also when
// the terminal fails mid-session.
pub fn run<R: BufRead, W: Write>(state: &AppState, catalog: &mut dyn CatalogService,
                                 console: &mut Console<R, W>) -> LibraryResult<()> {
    load_library(state, catalog, console)?;
    match menu_loop(state, catalog, console) {
        Ok(()) => Ok(()),
        Err(err) => {
            error!("console failed: {}", err);
            let req = SaveLibraryCommandRequest::new(state.config.data_file.as_path());
            if let Err(save_err) = SaveLibraryCommand::new(catalog).execute(req) {
                error!("failed to save {}: {}", state.config.data_file.display(), save_err);
            }
            Err(err)
        }
    }
}

fn menu_loop<R: BufRead, W: Write>(state: &AppState, catalog: &mut dyn CatalogService,
                                   console: &mut Console<R, W>) -> LibraryResult<()> {
    console.say("=== Welcome to Library Management System ===")?;

    loop {
        print_menu(console)?;
        let input = match console.prompt("Enter your choice (1-8): ")? {
            Some(input) => input,
            None => {
                // closed input behaves like Exit
                console.say("")?;
                return exit_library(state, catalog, console);
            }
        };
        let number = match input.trim().parse::<u32>() {
            Ok(number) => number,
            Err(_) => {
                console.say(INVALID_INPUT)?;
                continue;
            }
        };

        console.clear()?;
        match MenuChoice::try_from(number) {
            Ok(MenuChoice::AddBook) => add_book(catalog, console)?,
            Ok(MenuChoice::SearchBooks) => search_books(catalog, console)?,
            Ok(MenuChoice::BorrowBook) => borrow_book(catalog, console)?,
            Ok(MenuChoice::ReturnBook) => return_book(catalog, console)?,
            Ok(MenuChoice::DisplayBooks) => display_books(catalog, console)?,
            Ok(MenuChoice::Statistics) => show_statistics(catalog, console)?,
            Ok(MenuChoice::Save) => save_library(state, catalog, console)?,
            Ok(MenuChoice::Exit) => return exit_library(state, catalog, console),
            Err(_) => console.say(INVALID_CHOICE)?,
        }
        console.pause()?;
        console.clear()?;
    }
}

fn print_menu<R: BufRead, W: Write>(console: &mut Console<R, W>) -> LibraryResult<()> {
    console.say("\n=== Main Menu ===")?;
    console.say("1. Add Book")?;
    console.say("2. Search Books")?;
    console.say("3. Borrow Book")?;
    console.say("4. Return Book")?;
    console.say("5. Display All Books")?;
    console.say("6. Library Statistics")?;
    console.say("7. Save Data")?;
    console.say("8. Exit")
}

fn display_book<R: BufRead, W: Write>(console: &mut Console<R, W>, book: &BookDto) -> LibraryResult<()> {
    console.say(format!("Title: {}", book.title).as_str())?;
    console.say(format!("Author: {}", book.author).as_str())?;
    console.say(format!("ISBN: {}", book.isbn).as_str())?;
    console.say(format!("Status: {}", book.book_status).as_str())?;
    console.say(SEPARATOR)
}

pub fn load_library<R: BufRead, W: Write>(state: &AppState, catalog: &mut dyn CatalogService,
                                          console: &mut Console<R, W>) -> LibraryResult<()> {
    let req = LoadLibraryCommandRequest::new(state.config.data_file.as_path());
    match LoadLibraryCommand::new(catalog).execute(req) {
        Ok(res) => match res.report {
            LoadReport::NotFound => {
                console.say("No existing library data found. Starting with empty library.")
            }
            LoadReport::Loaded { count, skipped } => {
                console.say(format!("Library data loaded successfully! Loaded {} books.", count).as_str())?;
                if !skipped.is_empty() {
                    console.say(format!("Skipped {} malformed record(s):", skipped.len()).as_str())?;
                    for record in skipped {
                        console.say(format!("  {}", record.reason).as_str())?;
                    }
                }
                Ok(())
            }
        },
        Err(err) => {
            error!("failed to load {}: {}", state.config.data_file.display(), err);
            console.say(ConsoleError::from(err).message.as_str())?;
            console.say("Starting with empty library.")
        }
    }
}

pub fn add_book<R: BufRead, W: Write>(catalog: &mut dyn CatalogService,
                                      console: &mut Console<R, W>) -> LibraryResult<()> {
    console.say("\n=== Add New Book ===")?;
    let title = match console.prompt("Enter book title: ")? {
        Some(title) => title,
        None => return Ok(()),
    };
    let author = match console.prompt("Enter author: ")? {
        Some(author) => author,
        None => return Ok(()),
    };
    let isbn = match console.prompt("Enter ISBN: ")? {
        Some(isbn) => isbn,
        None => return Ok(()),
    };

    let req = AddBookCommandRequest::new(title.as_str(), author.as_str(), isbn.as_str());
    match AddBookCommand::new(catalog).execute(req) {
        Ok(_) => console.say("Book added successfully!"),
        Err(err) => console.say(ConsoleError::from(err).message.as_str()),
    }
}

pub fn search_books<R: BufRead, W: Write>(catalog: &dyn CatalogService,
                                          console: &mut Console<R, W>) -> LibraryResult<()> {
    if catalog.is_empty() {
        return console.say(NO_BOOKS);
    }
    console.say("\n=== Search Books ===")?;
    console.say("1. Search by Title")?;
    console.say("2. Search by Author")?;
    console.say("3. Search by ISBN")?;
    let field = match console.prompt("Enter your choice: ")?.as_deref().map(str::trim) {
        Some("1") => SearchField::Title,
        Some("2") => SearchField::Author,
        Some("3") => SearchField::Isbn,
        Some(_) => return console.say("Invalid choice!"),
        None => return Ok(()),
    };
    let term = match console.prompt(format!("Enter {} to search: ", field).as_str())? {
        Some(term) => term,
        None => return Ok(()),
    };

    console.say("\nSearch Results:")?;
    let res = SearchBooksCommand::new(catalog)
        .execute(SearchBooksCommandRequest::new(field, term.as_str()));
    match res {
        Ok(res) if res.books.is_empty() => {
            console.say("No books found matching your search criteria.")
        }
        Ok(res) => {
            for book in res.books.iter() {
                display_book(console, book)?;
            }
            Ok(())
        }
        Err(err) => console.say(ConsoleError::from(err).message.as_str()),
    }
}

fn ask_isbn<R: BufRead, W: Write>(catalog: &dyn CatalogService, console: &mut Console<R, W>,
                                  heading: &str, action: &str) -> LibraryResult<Option<String>> {
    if catalog.is_empty() {
        console.say(NO_BOOKS)?;
        return Ok(None);
    }
    console.say(heading)?;
    console.prompt(format!("Enter ISBN of the book to {}: ", action).as_str())
}

fn report_change<R: BufRead, W: Write>(console: &mut Console<R, W>, isbn: &str,
                                       res: Result<StatusChange, CommandError>,
                                       changed: &str, unchanged: &str) -> LibraryResult<()> {
    match res {
        Ok(change) if change.outcome.is_changed() => {
            console.say(format!("Book '{}' {}.", change.book.title, changed).as_str())
        }
        Ok(change) => {
            console.say(format!("Book '{}' {}.", change.book.title, unchanged).as_str())
        }
        Err(CommandError::NotFound { .. }) => {
            console.say(format!("Book with ISBN '{}' not found.", isbn).as_str())
        }
        Err(err) => console.say(ConsoleError::from(err).message.as_str()),
    }
}

pub fn borrow_book<R: BufRead, W: Write>(catalog: &mut dyn CatalogService,
                                         console: &mut Console<R, W>) -> LibraryResult<()> {
    let isbn = match ask_isbn(catalog, console, "\n=== Borrow Book ===", "borrow")? {
        Some(isbn) => isbn,
        None => return Ok(()),
    };
    let res = BorrowBookCommand::new(catalog)
        .execute(BorrowBookCommandRequest::new(isbn.as_str()))
        .map(|res| res.change);
    report_change(console, isbn.as_str(), res, "has been borrowed", "is already borrowed")
}

pub fn return_book<R: BufRead, W: Write>(catalog: &mut dyn CatalogService,
                                         console: &mut Console<R, W>) -> LibraryResult<()> {
    let isbn = match ask_isbn(catalog, console, "\n=== Return Book ===", "return")? {
        Some(isbn) => isbn,
        None => return Ok(()),
    };
    let res = ReturnBookCommand::new(catalog)
        .execute(ReturnBookCommandRequest::new(isbn.as_str()))
        .map(|res| res.change);
    report_change(console, isbn.as_str(), res, "has been returned", "was not borrowed")
}

pub fn display_books<R: BufRead, W: Write>(catalog: &dyn CatalogService,
                                           console: &mut Console<R, W>) -> LibraryResult<()> {
    let res = match ListBooksCommand::new(catalog).execute(ListBooksCommandRequest::default()) {
        Ok(res) => res,
        Err(err) => return console.say(ConsoleError::from(err).message.as_str()),
    };
    if res.books.is_empty() {
        return console.say(NO_BOOKS);
    }
    console.say("\n=== All Books in Library ===")?;
    for book in res.books.iter() {
        display_book(console, book)?;
    }
    console.say(format!("Total books: {}", res.total).as_str())
}

pub fn show_statistics<R: BufRead, W: Write>(catalog: &dyn CatalogService,
                                             console: &mut Console<R, W>) -> LibraryResult<()> {
    let stats = match LibraryStatsCommand::new(catalog).execute(LibraryStatsCommandRequest::default()) {
        Ok(res) => res.stats,
        Err(err) => return console.say(ConsoleError::from(err).message.as_str()),
    };
    if stats.total == 0 {
        return console.say(NO_BOOKS);
    }
    console.say("\n=== Library Statistics ===")?;
    console.say(format!("Total books: {}", stats.total).as_str())?;
    console.say(format!("Available books: {}", stats.available).as_str())?;
    console.say(format!("Borrowed books: {}", stats.borrowed).as_str())
}

pub fn save_library<R: BufRead, W: Write>(state: &AppState, catalog: &dyn CatalogService,
                                          console: &mut Console<R, W>) -> LibraryResult<()> {
    let req = SaveLibraryCommandRequest::new(state.config.data_file.as_path());
    match SaveLibraryCommand::new(catalog).execute(req) {
        Ok(_) => console.say("Library data saved successfully!"),
        Err(err) => {
            warn!("failed to save {}: {}", state.config.data_file.display(), err);
            console.say(format!("Error: Could not save library data! ({})", err).as_str())
        }
    }
}

fn exit_library<R: BufRead, W: Write>(state: &AppState, catalog: &dyn CatalogService,
                                      console: &mut Console<R, W>) -> LibraryResult<()> {
    save_library(state, catalog, console)?;
    console.say("Thank you for using Library Management System!")
}
