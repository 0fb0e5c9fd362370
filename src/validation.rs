//! Conversion of store errors into MCP tool errors
//!
//! Input, capacity and selection problems become `INVALID_PARAMS` so the
//! client can correct the call; I/O and corrupt data become
//! `INTERNAL_ERROR`. Messages are always public.

use crate::error::{TodoError, ValidationError};
use mcp_attr::ErrorCode;

const DATE_REQUIREMENTS: &str = "Requirements:\n\
    - Format: YYYY-MM-DD\n\
    - Year: 1000-9999 (4 digits)\n\
    - Month: 1-12\n\
    - Day: 1-31\n\
    Example: 2025-12-31";

/// Human-readable message for a store error
///
/// Deadline errors are followed by the accepted date format.
pub fn describe_error(err: &TodoError) -> String {
    match err {
        TodoError::Validation(ValidationError::Deadline(date_err)) => {
            format!("{}\n\n{}", date_err, DATE_REQUIREMENTS)
        }
        other => other.to_string(),
    }
}

/// Convert a store error into an MCP error with a public message
pub fn to_mcp_error(err: TodoError) -> mcp_attr::Error {
    let code = if err.is_user_error() {
        ErrorCode::INVALID_PARAMS
    } else {
        ErrorCode::INTERNAL_ERROR
    };
    mcp_attr::Error::new(code).with_message(describe_error(&err), true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SelectionError;
    use crate::todo::{DateError, DateField};

    #[test]
    fn test_deadline_errors_include_requirements() {
        let err = TodoError::from(DateError::OutOfRange {
            field: DateField::Month,
            value: 13,
        });
        let message = describe_error(&err);
        assert!(message.starts_with("Invalid month 13"));
        assert!(message.contains("Format: YYYY-MM-DD"));
    }

    #[test]
    fn test_other_errors_use_display() {
        let err = TodoError::from(SelectionError::NoList);
        assert_eq!(describe_error(&err), "Please select a list first");
    }
}
