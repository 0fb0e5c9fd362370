//! Error types for the task store, the codec and storage
//!
//! Every error is recoverable: the store is left exactly as it was before
//! the failing call and the caller decides how to report it.

use std::path::PathBuf;
use thiserror::Error;

use crate::todo::DateError;

/// Result alias used throughout the core
pub type TodoResult<T> = Result<T, TodoError>;

/// Top-level error returned by store, codec and storage operations
#[derive(Debug, Error)]
pub enum TodoError {
    /// Bad user input: list name, task description or deadline
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// A list or task limit has been reached
    #[error(transparent)]
    Capacity(#[from] CapacityError),

    /// The operation needs a selected list or task and none is valid
    #[error(transparent)]
    Selection(#[from] SelectionError),

    /// Reading or writing the data file failed
    #[error("failed to access '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The data file is structurally invalid
    #[error("data file is corrupt: {0}")]
    CorruptData(String),
}

impl TodoError {
    /// Build an I/O error tagged with the file it concerns
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        TodoError::Io {
            path: path.into(),
            source,
        }
    }

    /// Whether the user can fix this by correcting their input or selection
    pub fn is_user_error(&self) -> bool {
        matches!(
            self,
            TodoError::Validation(_) | TodoError::Capacity(_) | TodoError::Selection(_)
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please enter a list name")]
    EmptyListName,

    #[error("List name is too long ({len} bytes, maximum {max})")]
    ListNameTooLong { len: usize, max: usize },

    #[error("Please enter a task description")]
    EmptyDescription,

    #[error("Task description is too long ({len} bytes, maximum {max})")]
    DescriptionTooLong { len: usize, max: usize },

    #[error("Please enter a deadline")]
    EmptyDeadline,

    #[error("Text must not contain a zero byte")]
    ControlCharacter,

    #[error(transparent)]
    Deadline(#[from] DateError),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CapacityError {
    #[error("Maximum number of lists reached ({max})")]
    Lists { max: usize },

    #[error("Task list is full ({max} tasks)")]
    Tasks { max: usize },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectionError {
    #[error("Please select a list first")]
    NoList,

    #[error("List {index} does not exist ({count} list(s) available)")]
    InvalidList { index: usize, count: usize },

    #[error("Task {index} does not exist ({count} task(s) in list)")]
    InvalidTask { index: usize, count: usize },
}

impl From<DateError> for TodoError {
    fn from(err: DateError) -> Self {
        TodoError::Validation(ValidationError::Deadline(err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_errors_are_classified() {
        assert!(TodoError::from(ValidationError::EmptyListName).is_user_error());
        assert!(TodoError::from(CapacityError::Lists { max: 20 }).is_user_error());
        assert!(TodoError::from(SelectionError::NoList).is_user_error());
        assert!(!TodoError::CorruptData("bad".to_string()).is_user_error());

        let io = TodoError::io(
            "todo_data.dat",
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        );
        assert!(!io.is_user_error());
        assert!(io.to_string().contains("todo_data.dat"));
    }

    #[test]
    fn test_date_error_becomes_validation_error() {
        let err = TodoError::from(DateError::BadFormat);
        assert!(matches!(
            err,
            TodoError::Validation(ValidationError::Deadline(DateError::BadFormat))
        ));
    }
}
