//! Common test utilities for integration tests

#![allow(dead_code)]

use chrono::NaiveDate;
use folder_todo::{HandlerOptions, TodoData, TodoServerHandler};
use std::path::PathBuf;
use tempfile::TempDir;

/// Data file path inside a fresh temporary directory
pub fn temp_data_path() -> (PathBuf, TempDir) {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("todo_data.dat");
    (path, dir)
}

/// Create a test handler with temporary storage and no save on exit
pub fn get_test_handler() -> (TodoServerHandler, TempDir) {
    get_test_handler_with(HandlerOptions {
        autosave: false,
        save_on_exit: false,
    })
}

pub fn get_test_handler_with(options: HandlerOptions) -> (TodoServerHandler, TempDir) {
    let (path, dir) = temp_data_path();
    let handler = TodoServerHandler::new(&path, options).unwrap();
    (handler, dir)
}

pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

/// Descriptions of a list's tasks in stored order
pub fn descriptions(data: &TodoData, list: usize) -> Vec<String> {
    data.lists()[list]
        .tasks
        .iter()
        .map(|t| t.description.clone())
        .collect()
}

pub fn list_names(data: &TodoData) -> Vec<String> {
    data.lists().iter().map(|l| l.name.clone()).collect()
}
