use std::cmp::Ordering;

use super::task::Task;

/// Compare two tasks for display order
///
/// Incomplete tasks come first, then earlier deadlines. The sentinel
/// instant (`None`) is smaller than every real deadline.
pub fn compare_tasks(a: &Task, b: &Task) -> Ordering {
    a.completed
        .cmp(&b.completed)
        .then_with(|| a.deadline_instant.cmp(&b.deadline_instant))
}

/// Refresh every deadline instant and stable-sort the tasks
///
/// Equal tasks keep their prior relative order, so sorting an already
/// sorted slice leaves it unchanged.
pub fn sort_tasks(tasks: &mut [Task]) {
    for task in tasks.iter_mut() {
        task.refresh_deadline_instant();
    }
    tasks.sort_by(compare_tasks);
}
