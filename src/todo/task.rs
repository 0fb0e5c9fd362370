use chrono::NaiveDate;

use super::date::{deadline_instant, instant_to_local_date};

/// A single task in a list
///
/// `deadline` is the authoritative text; `deadline_instant` is a cache that
/// the ordering pass recomputes. `None` is the sentinel for a deadline that
/// does not parse.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Task {
    /// What needs to be done
    pub description: String,
    /// Deadline text (format: YYYY-MM-DD)
    pub deadline: String,
    /// Whether the task has been completed
    pub completed: bool,
    /// Unix seconds of local midnight of the deadline
    pub deadline_instant: Option<i64>,
}

impl Task {
    /// Create an incomplete task with its instant computed from `deadline`
    pub fn new(description: impl Into<String>, deadline: impl Into<String>) -> Self {
        let deadline = deadline.into();
        Self {
            description: description.into(),
            deadline_instant: deadline_instant(&deadline),
            deadline,
            completed: false,
        }
    }

    /// Recompute the cached instant from the deadline text
    pub fn refresh_deadline_instant(&mut self) {
        self.deadline_instant = deadline_instant(&self.deadline);
    }

    /// Whether this task is overdue as of `today`
    pub fn is_overdue_on(&self, today: NaiveDate) -> bool {
        is_overdue(self.completed, self.deadline_instant, today)
    }
}

/// Decide whether a deadline has strictly passed
///
/// # Arguments
/// * `completed` - Completed tasks are never overdue
/// * `deadline_instant` - Cached deadline; the sentinel is never overdue
/// * `today` - Current local calendar date
///
/// # Returns
/// True only when `today` is a later calendar day than the deadline's local
/// date. A task due today is not overdue.
pub fn is_overdue(completed: bool, deadline_instant: Option<i64>, today: NaiveDate) -> bool {
    if completed {
        return false;
    }
    match deadline_instant.and_then(instant_to_local_date) {
        Some(due) => today > due,
        None => false,
    }
}

/// A named list ("folder") of tasks
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TodoList {
    pub name: String,
    pub tasks: Vec<Task>,
}

impl TodoList {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            tasks: Vec::new(),
        }
    }

    pub fn task_count(&self) -> usize {
        self.tasks.len()
    }
}
