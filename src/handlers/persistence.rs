//! Save and load handlers

use crate::TodoServerHandler;
use crate::storage::LoadOutcome;
use crate::validation;
use mcp_attr::Result as McpResult;

impl TodoServerHandler {
    /// Writes the store to the data file.
    pub async fn handle_save(&self) -> McpResult<String> {
        let data = self.lock_data();
        self.storage.save(&data).map_err(validation::to_mcp_error)?;
        Ok(format!(
            "Data saved successfully to '{}'",
            self.storage.file_path().display()
        ))
    }

    /// Replaces the store with the data file's content.
    ///
    /// The store is left untouched when the file is missing or unreadable.
    pub async fn handle_load(&self) -> McpResult<String> {
        let mut data = self.lock_data();
        match self.storage.load().map_err(validation::to_mcp_error)? {
            LoadOutcome::Loaded(loaded) => {
                *data = loaded;
                Ok(format!(
                    "Data loaded successfully from '{}' ({} list(s))",
                    self.storage.file_path().display(),
                    data.list_count()
                ))
            }
            LoadOutcome::NotFound => Ok("No saved data file found".to_string()),
        }
    }
}
