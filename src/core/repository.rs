use std::path::Path;
use serde::{Deserialize, Serialize};
use crate::core::library::LibraryResult;

pub trait Repository<Entity> {
    // reads every record stored at path, in stored order
    fn load(&self, path: &Path) -> LibraryResult<LoadOutcome<Entity>>;

    // replaces whatever is stored at path, returns number of records written
    fn save(&self, path: &Path, entities: &[Entity]) -> LibraryResult<usize>;
}

// A stored record that was dropped while loading.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedRecord {
    pub line: usize,
    pub reason: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum LoadOutcome<Entity> {
    // Nothing is stored at the path yet. Not an error: the catalog starts empty.
    NotFound,
    Loaded {
        records: Vec<Entity>,
        skipped: Vec<SkippedRecord>,
    },
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone, Copy)]
pub enum RepositoryStore {
    // pipe-delimited text, one record per line
    FlatFile,
}
