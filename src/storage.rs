use log::{info, warn};
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

use crate::codec;
use crate::error::{TodoError, TodoResult};
use crate::todo::TodoData;

/// Default data file, relative to the working directory
pub const DEFAULT_DATA_FILE: &str = "todo_data.dat";

/// Result of reading the data file
#[derive(Debug)]
pub enum LoadOutcome {
    /// The file existed and decoded cleanly
    Loaded(TodoData),
    /// There is no data file yet
    NotFound,
}

pub struct Storage {
    file_path: PathBuf,
}

impl Storage {
    pub fn new(file_path: impl AsRef<Path>) -> Self {
        Self {
            file_path: file_path.as_ref().to_path_buf(),
        }
    }

    pub fn file_path(&self) -> &Path {
        &self.file_path
    }

    /// Read and decode the data file
    ///
    /// A missing file is `LoadOutcome::NotFound`, not an error.
    pub fn load(&self) -> TodoResult<LoadOutcome> {
        let bytes = match fs::read(&self.file_path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                info!(
                    "event=load status=not_found path={}",
                    self.file_path.display()
                );
                return Ok(LoadOutcome::NotFound);
            }
            Err(e) => return Err(TodoError::io(&self.file_path, e)),
        };

        let data = codec::decode(&bytes).inspect_err(|e| {
            warn!(
                "event=load status=corrupt path={} error={}",
                self.file_path.display(),
                e
            );
        })?;
        info!(
            "event=load status=ok path={} lists={}",
            self.file_path.display(),
            data.list_count()
        );
        Ok(LoadOutcome::Loaded(data))
    }

    /// Load the data file, starting fresh when it is missing or corrupt
    ///
    /// I/O errors other than a missing file are still returned.
    pub fn load_or_default(&self) -> TodoResult<TodoData> {
        match self.load() {
            Ok(LoadOutcome::Loaded(data)) => Ok(data),
            Ok(LoadOutcome::NotFound) => Ok(TodoData::new()),
            Err(TodoError::CorruptData(reason)) => {
                warn!(
                    "event=load status=start_fresh path={} reason={}",
                    self.file_path.display(),
                    reason
                );
                Ok(TodoData::new())
            }
            Err(e) => Err(e),
        }
    }

    /// Encode and write the store
    ///
    /// The bytes go to a temporary file next to the destination which is
    /// then renamed over it, so a failed save leaves any existing file intact.
    pub fn save(&self, data: &TodoData) -> TodoResult<()> {
        let bytes = codec::encode(data);
        let dir = match self.file_path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };

        let mut temp = NamedTempFile::new_in(dir).map_err(|e| TodoError::io(dir, e))?;
        temp.write_all(&bytes)
            .and_then(|()| temp.as_file().sync_all())
            .map_err(|e| TodoError::io(temp.path(), e))?;
        temp.persist(&self.file_path)
            .map_err(|e| TodoError::io(&self.file_path, e.error))?;

        info!(
            "event=save status=ok path={} bytes={} lists={}",
            self.file_path.display(),
            bytes.len(),
            data.list_count()
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_load_missing_file_is_not_found() {
        let dir = TempDir::new().unwrap();
        let storage = Storage::new(dir.path().join("missing.dat"));
        assert!(matches!(storage.load().unwrap(), LoadOutcome::NotFound));
        assert_eq!(storage.load_or_default().unwrap(), TodoData::new());
    }

    #[test]
    fn test_save_then_load() {
        let dir = TempDir::new().unwrap();
        let storage = Storage::new(dir.path().join(DEFAULT_DATA_FILE));

        let mut data = TodoData::new();
        data.create_list("Groceries").unwrap();
        data.add_task(Some(0), "Milk", "2025-04-01").unwrap();
        storage.save(&data).unwrap();

        match storage.load().unwrap() {
            LoadOutcome::Loaded(loaded) => assert_eq!(loaded, data),
            LoadOutcome::NotFound => panic!("saved file not found"),
        }
    }

    #[test]
    fn test_corrupt_file_starts_fresh() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("corrupt.dat");
        fs::write(&path, [0xde, 0xad, 0xbe, 0xef, 0x01]).unwrap();

        let storage = Storage::new(&path);
        assert!(matches!(storage.load(), Err(TodoError::CorruptData(_))));
        assert_eq!(storage.load_or_default().unwrap(), TodoData::new());
    }

    #[test]
    fn test_failed_save_reports_io_error() {
        let dir = TempDir::new().unwrap();
        let storage = Storage::new(dir.path().join("no-such-dir").join("todo.dat"));
        assert!(matches!(
            storage.save(&TodoData::new()),
            Err(TodoError::Io { .. })
        ));
    }
}
