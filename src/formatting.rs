//! Formatting helper functions for the MCP server
//!
//! This module renders store views as the plain text returned by tools.

use crate::todo::{ListSummary, TaskView, TodoList};

/// Longest list name shown in the current-list label before it is cut
pub const LABEL_NAME_MAX_CHARS: usize = 50;

/// Format one list line: `Work (3 tasks)`
pub fn format_list_line(summary: &ListSummary) -> String {
    format!("{} ({} tasks)", summary.name, summary.task_count)
}

/// Format all lists with their indices, marking the selected one
///
/// # Arguments
/// * `summaries` - Lists in display order
///
/// # Returns
/// Formatted string representation of the lists
pub fn format_lists(summaries: &[ListSummary]) -> String {
    if summaries.is_empty() {
        return "No lists yet".to_string();
    }

    let mut result = format!("Found {} list(s):\n\n", summaries.len());
    for summary in summaries {
        let marker = if summary.selected { "*" } else { " " };
        result.push_str(&format!(
            "{} [{}] {}\n",
            marker,
            summary.index,
            format_list_line(summary)
        ));
    }
    result
}

/// Label for the selected list, or "No list selected"
///
/// Names longer than `LABEL_NAME_MAX_CHARS` are cut and end with `...`.
pub fn current_list_label(list: Option<&TodoList>) -> String {
    let Some(list) = list else {
        return "No list selected".to_string();
    };

    let name = if list.name.chars().count() > LABEL_NAME_MAX_CHARS {
        let cut: String = list.name.chars().take(LABEL_NAME_MAX_CHARS).collect();
        format!("{}...", cut)
    } else {
        list.name.clone()
    };
    format!("Current List: {} ({} tasks)", name, list.task_count())
}

/// Format one task line: `[X] Pay rent (Due: 2025-06-01) [OVERDUE]`
pub fn format_task_line(view: &TaskView) -> String {
    let status = if view.completed { 'X' } else { ' ' };
    let overdue = if view.overdue { " [OVERDUE]" } else { "" };
    format!(
        "[{}] {} (Due: {}){}",
        status, view.description, view.deadline, overdue
    )
}

/// Format the selected list: its label followed by numbered task lines
pub fn format_tasks(list: Option<&TodoList>, views: &[TaskView]) -> String {
    let mut result = current_list_label(list);
    if list.is_none() {
        return result;
    }
    if views.is_empty() {
        result.push_str("\n\nNo tasks");
        return result;
    }

    result.push_str("\n\n");
    for view in views {
        result.push_str(&format!("{}. {}\n", view.index, format_task_line(view)));
    }
    result
}
