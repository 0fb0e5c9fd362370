//! MCP tool handlers for the task tracker
//!
//! This module contains the implementation of all MCP tool handlers,
//! grouped by what they act on.

pub mod lists;
pub mod persistence;
pub mod tasks;
