//! List handlers: create, delete, select and show lists

use crate::TodoServerHandler;
use crate::formatting;
use crate::validation;
use log::debug;
use mcp_attr::Result as McpResult;

impl TodoServerHandler {
    /// Creates a list and selects it.
    pub async fn handle_create_list(&self, name: String) -> McpResult<String> {
        let mut data = self.lock_data();
        let index = data.create_list(&name).map_err(validation::to_mcp_error)?;
        let message = format!(
            "List '{}' created at index {} and selected",
            data.lists()[index].name,
            index
        );
        Ok(self.finish_change(&data, message))
    }

    /// Deletes a list (the selected one when `index` is omitted).
    pub async fn handle_delete_list(&self, index: Option<usize>) -> McpResult<String> {
        let mut data = self.lock_data();
        let index = index.or(data.current_selection());
        let removed = data.delete_list(index).map_err(validation::to_mcp_error)?;
        let message = format!(
            "Deleted list '{}' with {} task(s). No list selected.",
            removed.name,
            removed.task_count()
        );
        Ok(self.finish_change(&data, message))
    }

    /// Selects a list; unknown indices clear the selection.
    pub async fn handle_select_list(&self, index: Option<usize>) -> McpResult<String> {
        let mut data = self.lock_data();
        data.select_list(index);
        if index.is_some() && data.current_selection().is_none() {
            debug!("event=select_list status=cleared requested={:?}", index);
        }
        Ok(formatting::current_list_label(data.current_list()))
    }

    /// Shows all lists with task counts.
    pub async fn handle_lists(&self) -> McpResult<String> {
        let data = self.lock_data();
        Ok(formatting::format_lists(&data.list_names_and_counts()))
    }
}
