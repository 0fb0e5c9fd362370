//! Folder Todo MCP Server Library
//!
//! This library provides a Model Context Protocol (MCP) server for a
//! single-user task tracker. Tasks live in named lists ("folders"); each task
//! has a description, a `YYYY-MM-DD` deadline and a completion flag.
//!
//! # Architecture
//!
//! The library follows a 3-layer architecture:
//! - **MCP Layer**: `TodoServerHandler` - Handles MCP protocol communication
//! - **Domain Layer**: `todo` module - Lists, tasks, deadline parsing, ordering
//! - **Persistence Layer**: `codec` and `storage` modules - Fixed-layout binary file
//!
//! # Example
//!
//! ```no_run
//! use folder_todo::{HandlerOptions, TodoServerHandler};
//! use anyhow::Result;
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let handler = TodoServerHandler::new("todo_data.dat", HandlerOptions::default())?;
//!     // Use handler with MCP server...
//!     Ok(())
//! }
//! ```

pub mod codec;
pub mod config;
pub mod error;
pub mod formatting;
mod handlers;
pub mod logging;
pub mod storage;
pub mod todo;
mod validation;

use anyhow::Result;
use log::warn;
use mcp_attr::Result as McpResult;
use mcp_attr::server::{McpServer, mcp_server};
use std::path::Path;
use std::sync::{Mutex, MutexGuard, PoisonError};

// Re-export commonly used types
pub use config::Config;
pub use error::{CapacityError, SelectionError, TodoError, TodoResult, ValidationError};
pub use storage::{LoadOutcome, Storage};
pub use todo::{ListSummary, Task, TaskView, TodoData, TodoList};

/// Persistence behaviour of a `TodoServerHandler`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HandlerOptions {
    /// Save after every successful change
    pub autosave: bool,
    /// Save when the handler is dropped
    pub save_on_exit: bool,
}

impl Default for HandlerOptions {
    fn default() -> Self {
        Self {
            autosave: false,
            save_on_exit: true,
        }
    }
}

impl From<&Config> for HandlerOptions {
    fn from(config: &Config) -> Self {
        Self {
            autosave: config.autosave,
            save_on_exit: config.save_on_exit,
        }
    }
}

/// MCP Server handler for folder-based task lists
///
/// Owns the store behind a single mutex. Every change and every save or
/// load runs while holding it, so persistence calls never overlap.
pub struct TodoServerHandler {
    pub(crate) data: Mutex<TodoData>,
    pub(crate) storage: Storage,
    pub(crate) options: HandlerOptions,
}

impl TodoServerHandler {
    /// Create a new handler, loading the data file if it exists
    ///
    /// # Arguments
    /// * `storage_path` - Path to the binary data file
    /// * `options` - Autosave and save-on-exit behaviour
    ///
    /// # Returns
    /// Result containing the handler or an error. A corrupt data file is
    /// logged and replaced by an empty store; other I/O errors are returned.
    pub fn new(storage_path: impl AsRef<Path>, options: HandlerOptions) -> Result<Self> {
        let storage = Storage::new(storage_path);
        let data = Mutex::new(storage.load_or_default()?);
        Ok(Self {
            data,
            storage,
            options,
        })
    }

    /// Create a handler from a loaded configuration
    pub fn from_config(config: &Config) -> Result<Self> {
        Self::new(&config.data_file, HandlerOptions::from(config))
    }

    pub fn storage(&self) -> &Storage {
        &self.storage
    }

    /// Copy of the current store, mainly for inspection
    pub fn snapshot(&self) -> TodoData {
        self.lock_data().clone()
    }

    /// Lock the store, recovering it if a previous holder panicked
    pub(crate) fn lock_data(&self) -> MutexGuard<'_, TodoData> {
        self.data.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Append an autosave warning to a tool response when saving fails
    pub(crate) fn finish_change(&self, data: &TodoData, message: String) -> String {
        if !self.options.autosave {
            return message;
        }
        match self.storage.save(data) {
            Ok(()) => message,
            Err(e) => {
                warn!("event=autosave status=error error={}", e);
                format!("{}\nWarning: autosave failed: {}", message, e)
            }
        }
    }
}

impl Drop for TodoServerHandler {
    fn drop(&mut self) {
        if !self.options.save_on_exit {
            return;
        }
        let data = self.data.get_mut().unwrap_or_else(PoisonError::into_inner);
        if let Err(e) = self.storage.save(data) {
            warn!("event=save_on_exit status=error error={}", e);
        }
    }
}

/// Task tracker that keeps tasks in named lists ("folders").
///
/// Each task has a description, a deadline (YYYY-MM-DD) and a completion flag.
/// Tasks in a list are always shown incomplete-first, then by earliest deadline.
/// An incomplete task whose deadline day has passed is marked [OVERDUE].
///
/// Workflow: create_list → add_task (to the selected list) → tasks to review →
/// complete_task / delete_task using the numbers shown by tasks. Use save to
/// write everything to disk; load replaces unsaved changes with the saved file.
#[mcp_server]
impl McpServer for TodoServerHandler {
    /// **Create list**: Add a new named list and select it. Names need not be unique.
    #[tool]
    async fn create_list(
        &self,
        /// List name (non-empty, at most 99 bytes)
        name: String,
    ) -> McpResult<String> {
        self.handle_create_list(name).await
    }

    /// **Delete list**: Remove a list and all its tasks. Later lists move up by one.
    /// The selection is cleared afterwards.
    #[tool]
    async fn delete_list(
        &self,
        /// List number from `lists`; omit to delete the selected list
        index: Option<usize>,
    ) -> McpResult<String> {
        self.handle_delete_list(index).await
    }

    /// **Select list**: Make a list current. An unknown number clears the selection.
    #[tool]
    async fn select_list(
        &self,
        /// List number from `lists`; omit to clear the selection
        index: Option<usize>,
    ) -> McpResult<String> {
        self.handle_select_list(index).await
    }

    /// **Lists**: Show every list with its task count. The selected list is marked with *.
    #[tool]
    async fn lists(&self) -> McpResult<String> {
        self.handle_lists().await
    }

    /// **Add task**: Add an incomplete task to a list. The list is re-sorted afterwards.
    #[tool]
    async fn add_task(
        &self,
        /// Task description (non-empty, at most 99 bytes)
        description: String,
        /// Deadline YYYY-MM-DD (year 1000-9999, month 1-12, day 1-31)
        deadline: String,
        /// List number; omit to use the selected list
        list: Option<usize>,
    ) -> McpResult<String> {
        self.handle_add_task(description, deadline, list).await
    }

    /// **Complete task**: Mark a task done. Completed tasks move below open ones.
    #[tool]
    async fn complete_task(
        &self,
        /// Task number as shown by `tasks`
        task: usize,
        /// List number; omit to use the selected list
        list: Option<usize>,
    ) -> McpResult<String> {
        self.handle_complete_task(task, list).await
    }

    /// **Delete task**: Remove a task. Later tasks move up by one.
    #[tool]
    async fn delete_task(
        &self,
        /// Task number as shown by `tasks`
        task: usize,
        /// List number; omit to use the selected list
        list: Option<usize>,
    ) -> McpResult<String> {
        self.handle_delete_task(task, list).await
    }

    /// **Tasks**: Show the selected list's tasks in order, with [OVERDUE] markers.
    #[tool]
    async fn tasks(&self) -> McpResult<String> {
        self.handle_tasks().await
    }

    /// **Save**: Write all lists and tasks to the data file.
    #[tool]
    async fn save(&self) -> McpResult<String> {
        self.handle_save().await
    }

    /// **Load**: Replace everything in memory with the data file.
    /// WARNING: unsaved lists and tasks are lost.
    #[tool]
    async fn load(&self) -> McpResult<String> {
        self.handle_load().await
    }
}
