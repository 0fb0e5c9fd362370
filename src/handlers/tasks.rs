//! Task handlers: add, complete, delete and show tasks

use crate::TodoServerHandler;
use crate::formatting;
use crate::validation;
use mcp_attr::Result as McpResult;

impl TodoServerHandler {
    /// Adds a task to `list` (the selected list when omitted).
    pub async fn handle_add_task(
        &self,
        description: String,
        deadline: String,
        list: Option<usize>,
    ) -> McpResult<String> {
        let mut data = self.lock_data();
        let list = list.or(data.current_selection());
        let position = data
            .add_task(list, &description, &deadline)
            .map_err(validation::to_mcp_error)?;
        let message = format!(
            "Task added at position {}: {}",
            position,
            description.trim()
        );
        Ok(self.finish_change(&data, message))
    }

    /// Marks a task completed.
    pub async fn handle_complete_task(
        &self,
        task: usize,
        list: Option<usize>,
    ) -> McpResult<String> {
        let mut data = self.lock_data();
        let list = list.or(data.current_selection());
        data.complete_task(list, task)
            .map_err(validation::to_mcp_error)?;
        Ok(self.finish_change(&data, "Task marked as complete".to_string()))
    }

    /// Deletes a task.
    pub async fn handle_delete_task(&self, task: usize, list: Option<usize>) -> McpResult<String> {
        let mut data = self.lock_data();
        let list = list.or(data.current_selection());
        let removed = data
            .delete_task(list, task)
            .map_err(validation::to_mcp_error)?;
        let message = format!("Deleted task: {}", removed.description);
        Ok(self.finish_change(&data, message))
    }

    /// Shows the selected list's tasks in display order.
    pub async fn handle_tasks(&self) -> McpResult<String> {
        let mut data = self.lock_data();
        data.resort_current();
        let views = data.tasks_in_current_list();
        Ok(formatting::format_tasks(data.current_list(), &views))
    }
}
