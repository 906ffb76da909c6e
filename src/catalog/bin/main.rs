use std::io;
use lms::catalog::controller::run;
use lms::catalog::factory::create_catalog_service;
use lms::core::controller::{AppState, Console};
use lms::core::domain::Configuration;
use lms::core::library::LibraryError;
use lms::core::repository::RepositoryStore;
use lms::utils::logs::setup_tracing;

// The data file sits in the working directory; there are no flags or environment overrides.
fn main() -> Result<(), LibraryError> {
    let state = AppState::new(Configuration::new("main"), RepositoryStore::FlatFile);
    setup_tracing(&state.config);

    let mut library = create_catalog_service(&state.config, state.store);
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut console = Console::new(stdin.lock(), stdout.lock(), state.config.clear_screen);
    run(&state, &mut library, &mut console)
}
