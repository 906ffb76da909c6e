use std::path::PathBuf;
use serde::Deserialize;
use crate::catalog::domain::{CatalogService, LoadReport};
use crate::core::command::{Command, CommandError};

pub struct LoadLibraryCommand<'a> {
    catalog_service: &'a mut dyn CatalogService,
}

impl<'a> LoadLibraryCommand<'a> {
    pub fn new(catalog_service: &'a mut dyn CatalogService) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct LoadLibraryCommandRequest {
    pub path: PathBuf,
}

impl LoadLibraryCommandRequest {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
        }
    }
}

#[derive(Debug)]
pub struct LoadLibraryCommandResponse {
    pub report: LoadReport,
}

impl Command<LoadLibraryCommandRequest, LoadLibraryCommandResponse> for LoadLibraryCommand<'_> {
    fn execute(&mut self, req: LoadLibraryCommandRequest) -> Result<LoadLibraryCommandResponse, CommandError> {
        self.catalog_service.load(req.path.as_path())
            .map_err(CommandError::from).map(|report| LoadLibraryCommandResponse { report })
    }
}

#[cfg(test)]
mod tests {
    use std::fs;
    use tempfile::tempdir;
    use crate::catalog::command::load_library_cmd::{LoadLibraryCommand, LoadLibraryCommandRequest};
    use crate::catalog::domain::{CatalogService, LoadReport};
    use crate::catalog::factory;
    use crate::core::command::Command;
    use crate::core::domain::Configuration;
    use crate::core::repository::RepositoryStore;

    #[test]
    fn test_should_run_load_library() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join("library_data.txt");
        fs::write(&path, "Dune|Herbert|111|0\n").expect("write");
        let mut library = factory::create_catalog_service(&Configuration::new("test"), RepositoryStore::FlatFile);
        let res = LoadLibraryCommand::new(&mut library).execute(LoadLibraryCommandRequest::new(&path)).expect("should load");
        assert_eq!(LoadReport::Loaded { count: 1, skipped: vec![] }, res.report);
        assert!(!library.find_book_by_isbn("111").expect("should find").is_available());
    }

    #[test]
    fn test_should_load_nothing_from_missing_file() {
        let dir = tempdir().expect("temp dir");
        let mut library = factory::create_catalog_service(&Configuration::new("test"), RepositoryStore::FlatFile);
        let res = LoadLibraryCommand::new(&mut library)
            .execute(LoadLibraryCommandRequest::new(dir.path().join("nothing.txt"))).expect("should not fail");
        assert_eq!(LoadReport::NotFound, res.report);
        assert!(library.is_empty());
    }
}
