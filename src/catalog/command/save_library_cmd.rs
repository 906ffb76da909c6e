use std::path::PathBuf;
use serde::{Deserialize, Serialize};
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};

pub struct SaveLibraryCommand<'a> {
    catalog_service: &'a dyn CatalogService,
}

impl<'a> SaveLibraryCommand<'a> {
    pub fn new(catalog_service: &'a dyn CatalogService) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct SaveLibraryCommandRequest {
    pub path: PathBuf,
}

impl SaveLibraryCommandRequest {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct SaveLibraryCommandResponse {
    pub saved: usize,
}

impl Command<SaveLibraryCommandRequest, SaveLibraryCommandResponse> for SaveLibraryCommand<'_> {
    fn execute(&mut self, req: SaveLibraryCommandRequest) -> Result<SaveLibraryCommandResponse, CommandError> {
        self.catalog_service.save(req.path.as_path())
            .map_err(CommandError::from).map(|saved| SaveLibraryCommandResponse { saved })
    }
}

#[cfg(test)]
mod tests {
    use std::fs;
    use tempfile::tempdir;
    use crate::catalog::command::save_library_cmd::{SaveLibraryCommand, SaveLibraryCommandRequest};
    use crate::catalog::domain::CatalogService;
    use crate::catalog::factory;
    use crate::core::command::{Command, CommandError};
    use crate::core::domain::Configuration;
    use crate::core::repository::RepositoryStore;

    #[test]
    fn test_should_run_save_library() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join("library_data.txt");
        let mut library = factory::create_catalog_service(&Configuration::new("test"), RepositoryStore::FlatFile);
        library.add_book("Dune", "Herbert", "111").expect("should add book");
        let res = SaveLibraryCommand::new(&library).execute(SaveLibraryCommandRequest::new(&path)).expect("should save");
        assert_eq!(1, res.saved);
        assert_eq!("Dune|Herbert|111|1\n", fs::read_to_string(&path).expect("read"));
    }

    #[test]
    fn test_should_report_save_error() {
        let dir = tempdir().expect("temp dir");
        let library = factory::create_catalog_service(&Configuration::new("test"), RepositoryStore::FlatFile);
        let res = SaveLibraryCommand::new(&library)
            .execute(SaveLibraryCommandRequest::new(dir.path().join("absent").join("data.txt")));
        assert!(matches!(res, Err(CommandError::Io { .. })));
    }
}
