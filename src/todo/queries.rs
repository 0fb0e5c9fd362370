//! Read-only views of `TodoData` for the presentation layer

use chrono::NaiveDate;

use super::date::local_date_today;
use super::task::TodoList;
use super::todo_data::TodoData;

/// Name and size of one list, in display order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListSummary {
    pub index: usize,
    pub name: String,
    pub task_count: usize,
    pub selected: bool,
}

/// One task of the selected list, ready to render
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskView {
    /// Position in the sorted list; pass it back to complete/delete
    pub index: usize,
    pub description: String,
    pub deadline: String,
    pub completed: bool,
    pub overdue: bool,
}

impl TodoData {
    /// Index of the selected list, if any
    pub fn current_selection(&self) -> Option<usize> {
        self.current
    }

    /// The selected list, if any
    pub fn current_list(&self) -> Option<&TodoList> {
        self.current.and_then(|i| self.lists.get(i))
    }

    /// Names and task counts of all lists
    pub fn list_names_and_counts(&self) -> Vec<ListSummary> {
        self.lists
            .iter()
            .enumerate()
            .map(|(index, list)| ListSummary {
                index,
                name: list.name.clone(),
                task_count: list.task_count(),
                selected: self.current == Some(index),
            })
            .collect()
    }

    /// Sorted tasks of the selected list with overdue flags as of today
    pub fn tasks_in_current_list(&self) -> Vec<TaskView> {
        self.tasks_in_current_list_on(local_date_today())
    }

    /// Sorted tasks of the selected list with overdue flags as of `today`
    ///
    /// Every mutation leaves its list sorted; callers that display the
    /// result may still call [`TodoData::resort_current`] first so instants
    /// are refreshed. Returns an empty vector when no list is selected.
    pub fn tasks_in_current_list_on(&self, today: NaiveDate) -> Vec<TaskView> {
        let Some(list) = self.current_list() else {
            return Vec::new();
        };
        list.tasks
            .iter()
            .enumerate()
            .map(|(index, task)| TaskView {
                index,
                description: task.description.clone(),
                deadline: task.deadline.clone(),
                completed: task.completed,
                overdue: task.is_overdue_on(today),
            })
            .collect()
    }
}
