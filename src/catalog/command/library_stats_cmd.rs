use serde::{Deserialize, Serialize};
use crate::catalog::domain::{CatalogService, LibraryStatistics};
use crate::core::command::{Command, CommandError};

pub struct LibraryStatsCommand<'a> {
    catalog_service: &'a dyn CatalogService,
}

impl<'a> LibraryStatsCommand<'a> {
    pub fn new(catalog_service: &'a dyn CatalogService) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct LibraryStatsCommandRequest {}

#[derive(Debug, Serialize)]
pub struct LibraryStatsCommandResponse {
    pub stats: LibraryStatistics,
}

impl Command<LibraryStatsCommandRequest, LibraryStatsCommandResponse> for LibraryStatsCommand<'_> {
    fn execute(&mut self, _req: LibraryStatsCommandRequest) -> Result<LibraryStatsCommandResponse, CommandError> {
        Ok(LibraryStatsCommandResponse { stats: self.catalog_service.statistics() })
    }
}
