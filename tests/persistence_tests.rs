//! Binary persistence through `Storage` and the codec
mod common;

use common::temp_data_path;
use folder_todo::codec::{TASK_RECORD_SIZE, decode, encode};
use folder_todo::todo::{MAX_LISTS, MAX_TASKS, NAME_WIDTH};
use folder_todo::{LoadOutcome, Storage, TodoData, TodoError, ValidationError};
use std::fs;

fn full_store() -> TodoData {
    let mut data = TodoData::new();
    for l in 0..MAX_LISTS {
        let list = Some(data.create_list(&format!("List {} {}", l, "é".repeat(l))).unwrap());
        for t in 0..(l * 7) % (MAX_TASKS + 1) {
            let deadline = format!("{}-{:02}-{:02}", 2020 + t % 7, t % 12 + 1, t % 31 + 1);
            data.add_task(list, &format!("Task {} of {}", t, l), &deadline)
                .unwrap();
        }
        if l % 3 == 0 && data.lists()[l].task_count() > 0 {
            data.complete_task(list, 0).unwrap();
        }
    }
    data.select_list(Some(7));
    data
}

fn load(storage: &Storage) -> TodoData {
    match storage.load().unwrap() {
        LoadOutcome::Loaded(data) => data,
        LoadOutcome::NotFound => panic!("expected saved data"),
    }
}

#[test]
fn test_save_then_load_reproduces_store() {
    let (path, _dir) = temp_data_path();
    let storage = Storage::new(&path);
    let data = full_store();

    storage.save(&data).unwrap();
    let loaded = load(&storage);

    assert_eq!(loaded, data);
    assert_eq!(loaded.current_selection(), Some(7));
    assert_eq!(loaded.list_count(), MAX_LISTS);
}

#[test]
fn test_round_trip_without_selection_and_empty_store() {
    let (path, _dir) = temp_data_path();
    let storage = Storage::new(&path);

    storage.save(&TodoData::new()).unwrap();
    assert_eq!(load(&storage), TodoData::new());

    let mut data = full_store();
    data.select_list(None);
    storage.save(&data).unwrap();
    assert_eq!(load(&storage).current_selection(), None);
}

#[test]
fn test_zero_bytes_are_rejected_before_saving() {
    let mut data = TodoData::new();
    assert!(matches!(
        data.create_list("Work\0Home"),
        Err(TodoError::Validation(ValidationError::ControlCharacter))
    ));
    let list = Some(data.create_list("Work").unwrap());
    assert!(matches!(
        data.add_task(list, "Pay\0rent", "2025-01-01"),
        Err(TodoError::Validation(ValidationError::ControlCharacter))
    ));
    assert_eq!(data.lists()[0].task_count(), 0);
}

#[test]
fn test_accepted_text_survives_round_trip() {
    let mut data = TodoData::new();
    let texts = [
        "plain".to_string(),
        "tab\tinside".to_string(),
        "ünïcødé ✓".to_string(),
        format!("{}x", "é".repeat(49)),
        "n".repeat(NAME_WIDTH - 1),
    ];
    for text in &texts {
        let list = Some(data.create_list(text).unwrap());
        data.add_task(list, text, "2025-01-01").unwrap();
    }

    let back = decode(&encode(&data)).unwrap();
    assert_eq!(back, data);
    for (list, text) in back.lists().iter().zip(&texts) {
        assert_eq!(&list.name, text);
        assert_eq!(&list.tasks[0].description, text);
    }
}

#[test]
fn test_file_size_matches_layout() {
    let (path, _dir) = temp_data_path();
    let storage = Storage::new(&path);
    let mut data = TodoData::new();
    let list = Some(data.create_list("Work").unwrap());
    data.add_task(list, "One", "2025-01-01").unwrap();
    data.add_task(list, "Two", "2025-01-02").unwrap();
    storage.save(&data).unwrap();

    let len = fs::metadata(&path).unwrap().len() as usize;
    assert_eq!(len, 4 + NAME_WIDTH + 4 + 2 * TASK_RECORD_SIZE + 4);
}

#[test]
fn test_missing_file_is_not_an_error() {
    let (path, _dir) = temp_data_path();
    assert!(matches!(
        Storage::new(&path).load().unwrap(),
        LoadOutcome::NotFound
    ));
}

#[test]
fn test_corrupt_files_are_reported() {
    let (path, _dir) = temp_data_path();
    let storage = Storage::new(&path);
    let valid = encode(&full_store());

    let mut oversized_tasks = valid.clone();
    oversized_tasks[4 + NAME_WIDTH..4 + NAME_WIDTH + 4].copy_from_slice(&1000i32.to_le_bytes());

    let cases: Vec<Vec<u8>> = vec![
        vec![1, 2],
        valid[..valid.len() / 2].to_vec(),
        (i32::MAX).to_le_bytes().to_vec(),
        oversized_tasks,
        [valid.as_slice(), &b"extra"[..]].concat(),
    ];
    for bytes in cases {
        fs::write(&path, &bytes).unwrap();
        assert!(
            matches!(storage.load(), Err(TodoError::CorruptData(_))),
            "{} bytes",
            bytes.len()
        );
        assert_eq!(storage.load_or_default().unwrap(), TodoData::new());
    }
}

#[test]
fn test_save_replaces_existing_file_whole() {
    let (path, _dir) = temp_data_path();
    let storage = Storage::new(&path);

    storage.save(&full_store()).unwrap();
    let mut small = TodoData::new();
    small.create_list("Only").unwrap();
    storage.save(&small).unwrap();

    assert_eq!(fs::read(&path).unwrap(), encode(&small));
    assert_eq!(load(&storage), small);
}

#[test]
fn test_failed_save_leaves_destination_untouched() {
    let (path, _dir) = temp_data_path();
    // A non-empty directory cannot be replaced by the renamed file
    fs::create_dir(&path).unwrap();
    fs::write(path.join("keep.txt"), b"keep").unwrap();

    let err = Storage::new(&path).save(&full_store()).unwrap_err();
    assert!(matches!(err, TodoError::Io { .. }));
    assert_eq!(fs::read(path.join("keep.txt")).unwrap(), b"keep");

    let leftovers = fs::read_dir(path.parent().unwrap()).unwrap().count();
    assert_eq!(leftovers, 1);
}

#[test]
fn test_decode_recomputes_deadline_instants() {
    let data = full_store();
    let mut bytes = encode(&data);
    // Zero the instant of the first task record of list 1
    let first_task = 4 + (NAME_WIDTH + 4) + (NAME_WIDTH + 4);
    let instant_at = first_task + TASK_RECORD_SIZE - 8;
    bytes[instant_at..instant_at + 8].copy_from_slice(&0i64.to_le_bytes());

    assert_eq!(decode(&bytes).unwrap(), data);
}
