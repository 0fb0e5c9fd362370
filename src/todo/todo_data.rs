use log::debug;
use std::cmp::Ordering;

use super::date::parse_deadline;
use super::ordering::{compare_tasks, sort_tasks};
use super::task::{Task, TodoList};
use crate::error::{CapacityError, SelectionError, TodoResult, ValidationError};

/// Maximum number of lists in a store
pub const MAX_LISTS: usize = 20;
/// Maximum number of tasks in a single list
pub const MAX_TASKS: usize = 50;
/// On-disk width of a list name, including the terminating zero byte
pub const NAME_WIDTH: usize = 100;
/// On-disk width of a task description, including the terminating zero byte
pub const DESCRIPTION_WIDTH: usize = 100;
/// On-disk width of a deadline, including the terminating zero byte
pub const DEADLINE_WIDTH: usize = 20;

/// All lists and the current selection
///
/// Every mutating method is all-or-nothing: validation happens before the
/// first write, so an `Err` leaves the store untouched.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TodoData {
    /// Lists in creation order, compacted on deletion
    pub(crate) lists: Vec<TodoList>,

    /// Index of the selected list; `None` means nothing is selected
    ///
    /// Always `None` or a valid index into `lists`.
    pub(crate) current: Option<usize>,
}

impl TodoData {
    /// Create a new empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store from already existing lists
    ///
    /// Tasks of every list are re-sorted and an out-of-range selection is
    /// normalized to `None`. Capacities are not checked here; the codec
    /// checks them before calling this.
    pub fn from_lists(lists: Vec<TodoList>, current: Option<usize>) -> Self {
        let mut data = Self {
            lists,
            current: None,
        };
        data.select_list(current);
        data.resort_all();
        data
    }

    /// All lists in display order
    pub fn lists(&self) -> &[TodoList] {
        &self.lists
    }

    pub fn list_count(&self) -> usize {
        self.lists.len()
    }

    /// Create a new list and select it
    ///
    /// # Arguments
    /// * `name` - List name, trimmed like the inputs of [`TodoData::add_task`]
    ///
    /// # Returns
    /// Index of the new list
    pub fn create_list(&mut self, name: &str) -> TodoResult<usize> {
        if self.lists.len() >= MAX_LISTS {
            return Err(CapacityError::Lists { max: MAX_LISTS }.into());
        }
        let name = validate_text(
            name,
            NAME_WIDTH,
            ValidationError::EmptyListName,
            |len, max| ValidationError::ListNameTooLong { len, max },
        )?;

        self.lists.push(TodoList::new(name));
        let index = self.lists.len() - 1;
        self.current = Some(index);

        debug!("event=list_created index={} lists={}", index, self.lists.len());
        Ok(index)
    }

    /// Delete a list, shifting later lists down by one
    ///
    /// The selection is always cleared afterwards, even when a list other
    /// than the selected one was deleted.
    ///
    /// # Returns
    /// The removed list
    pub fn delete_list(&mut self, index: Option<usize>) -> TodoResult<TodoList> {
        let index = self.check_list_index(index)?;
        let removed = self.lists.remove(index);
        self.current = None;

        debug!("event=list_deleted index={} lists={}", index, self.lists.len());
        Ok(removed)
    }

    /// Select a list; invalid indices clear the selection
    pub fn select_list(&mut self, index: Option<usize>) {
        self.current = index.filter(|&i| i < self.lists.len());
    }

    /// Add an incomplete task to a list and re-sort that list
    ///
    /// List names, descriptions and deadlines all follow one input policy:
    /// surrounding whitespace is trimmed, then the rest must be non-empty and
    /// free of zero bytes. The trimmed text is what gets stored.
    ///
    /// # Arguments
    /// * `list_index` - Target list, usually the current selection
    /// * `description` - Task description, at most 99 bytes after trimming
    /// * `deadline` - Deadline in `YYYY-MM-DD` form, validated strictly
    ///
    /// # Returns
    /// Position of the new task after sorting
    pub fn add_task(
        &mut self,
        list_index: Option<usize>,
        description: &str,
        deadline: &str,
    ) -> TodoResult<usize> {
        let list_index = self.check_list_index(list_index)?;
        if self.lists[list_index].tasks.len() >= MAX_TASKS {
            return Err(CapacityError::Tasks { max: MAX_TASKS }.into());
        }
        let description = validate_text(
            description,
            DESCRIPTION_WIDTH,
            ValidationError::EmptyDescription,
            |len, max| ValidationError::DescriptionTooLong { len, max },
        )?;
        let deadline = deadline.trim();
        if deadline.is_empty() {
            return Err(ValidationError::EmptyDeadline.into());
        }
        parse_deadline(deadline)?;

        let task = Task::new(description, deadline);
        let tasks = &mut self.lists[list_index].tasks;
        tasks.push(task.clone());
        sort_tasks(tasks);

        // A stable sort leaves the new task last among the tasks equal to it
        let position = tasks
            .iter()
            .rposition(|t| compare_tasks(t, &task) == Ordering::Equal)
            .unwrap_or(tasks.len() - 1);

        debug!(
            "event=task_added list={} position={} tasks={}",
            list_index,
            position,
            tasks.len()
        );
        Ok(position)
    }

    /// Mark a task completed and re-sort its list
    ///
    /// Completing an already completed task succeeds without changes.
    pub fn complete_task(
        &mut self,
        list_index: Option<usize>,
        task_index: usize,
    ) -> TodoResult<()> {
        let (list_index, task_index) = self.check_task_index(list_index, task_index)?;
        let tasks = &mut self.lists[list_index].tasks;
        tasks[task_index].completed = true;
        sort_tasks(tasks);

        debug!("event=task_completed list={} task={}", list_index, task_index);
        Ok(())
    }

    /// Delete a task, shifting later tasks down by one
    ///
    /// # Returns
    /// The removed task
    pub fn delete_task(
        &mut self,
        list_index: Option<usize>,
        task_index: usize,
    ) -> TodoResult<Task> {
        let (list_index, task_index) = self.check_task_index(list_index, task_index)?;
        let removed = self.lists[list_index].tasks.remove(task_index);

        debug!("event=task_deleted list={} task={}", list_index, task_index);
        Ok(removed)
    }

    /// Recompute instants and re-sort the tasks of every list
    pub fn resort_all(&mut self) {
        for list in self.lists.iter_mut() {
            sort_tasks(&mut list.tasks);
        }
    }

    /// Re-sort the selected list so it can be shown in order
    pub fn resort_current(&mut self) {
        if let Some(list) = self.current.and_then(|i| self.lists.get_mut(i)) {
            sort_tasks(&mut list.tasks);
        }
    }

    fn check_list_index(&self, index: Option<usize>) -> TodoResult<usize> {
        match index {
            None => Err(SelectionError::NoList.into()),
            Some(i) if i >= self.lists.len() => Err(SelectionError::InvalidList {
                index: i,
                count: self.lists.len(),
            }
            .into()),
            Some(i) => Ok(i),
        }
    }

    fn check_task_index(
        &self,
        list_index: Option<usize>,
        task_index: usize,
    ) -> TodoResult<(usize, usize)> {
        let list_index = self.check_list_index(list_index)?;
        let count = self.lists[list_index].tasks.len();
        if task_index >= count {
            return Err(SelectionError::InvalidTask {
                index: task_index,
                count,
            }
            .into());
        }
        Ok((list_index, task_index))
    }
}

/// Trim `text` and check it is non-empty and fits its fixed on-disk width
///
/// Zero bytes are rejected since the stored text ends at the first one.
fn validate_text(
    text: &str,
    width: usize,
    empty: ValidationError,
    too_long: impl FnOnce(usize, usize) -> ValidationError,
) -> Result<String, ValidationError> {
    let text = text.trim();
    if text.is_empty() {
        return Err(empty);
    }
    if text.contains('\0') {
        return Err(ValidationError::ControlCharacter);
    }
    let max = width - 1;
    if text.len() > max {
        return Err(too_long(text.len(), max));
    }
    Ok(text.to_string())
}
