//! Task list domain models and business logic
//!
//! This module contains the core data structures and their implementations.
//! It is split into submodules:
//! - `date`: strict `YYYY-MM-DD` parsing and local-midnight instants
//! - `task`: tasks, lists and the overdue check
//! - `ordering`: the stable display order of tasks
//! - `todo_data`: the store and all of its mutations
//! - `queries`: read-only views for display

mod date;
mod ordering;
mod queries;
mod task;
mod todo_data;

// Re-export all public types
pub use date::{
    DATE_TEXT_LEN, DateError, DateField, DeadlineDate, deadline_instant, instant_to_local_date,
    local_date_today, parse_deadline,
};
pub use ordering::{compare_tasks, sort_tasks};
pub use queries::{ListSummary, TaskView};
pub use task::{Task, TodoList, is_overdue};
pub use todo_data::{
    DEADLINE_WIDTH, DESCRIPTION_WIDTH, MAX_LISTS, MAX_TASKS, NAME_WIDTH, TodoData,
};
