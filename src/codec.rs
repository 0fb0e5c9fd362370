//! Fixed-layout binary encoding of the whole store
//!
//! All integers are little-endian. The task record keeps the padding a C
//! compiler puts before a 64-bit field, so files stay byte-compatible with
//! the 64-bit layout:
//!
//! ```text
//! [list_count: i32]
//! for each list:
//!     name: [u8; 100]
//!     task_count: i32
//!     for each task:
//!         description: [u8; 100]
//!         deadline: [u8; 20]
//!         completed: i32
//!         padding: [u8; 4]
//!         deadline_instant: i64      (0 = no valid deadline)
//! [current_list_index: i32]          (-1 = no selection)
//! ```
//!
//! Text fields are zero-padded and cut to leave room for a terminating zero
//! byte. Decoding checks every count against the store capacities and every
//! read against the input length.

use crate::error::{TodoError, TodoResult};
use crate::todo::{
    DEADLINE_WIDTH, DESCRIPTION_WIDTH, MAX_LISTS, MAX_TASKS, NAME_WIDTH, Task, TodoData, TodoList,
};

const INT_SIZE: usize = 4;
const INSTANT_SIZE: usize = 8;
const PADDING_SIZE: usize = 4;

/// Size in bytes of one encoded task
pub const TASK_RECORD_SIZE: usize =
    DESCRIPTION_WIDTH + DEADLINE_WIDTH + INT_SIZE + PADDING_SIZE + INSTANT_SIZE;

const NO_SELECTION: i32 = -1;
const NO_INSTANT: i64 = 0;

/// Serialize the store
pub fn encode(data: &TodoData) -> Vec<u8> {
    let task_total: usize = data.lists.iter().map(|l| l.tasks.len()).sum();
    let mut out = Vec::with_capacity(
        INT_SIZE * 2 + data.lists.len() * (NAME_WIDTH + INT_SIZE) + task_total * TASK_RECORD_SIZE,
    );

    put_count(&mut out, data.lists.len());
    for list in &data.lists {
        put_text(&mut out, &list.name, NAME_WIDTH);
        put_count(&mut out, list.tasks.len());
        for task in &list.tasks {
            put_task(&mut out, task);
        }
    }

    let current = data
        .current
        .and_then(|i| i32::try_from(i).ok())
        .unwrap_or(NO_SELECTION);
    out.extend_from_slice(&current.to_le_bytes());
    out
}

/// Deserialize a store, rejecting anything structurally invalid
///
/// # Errors
/// `TodoError::CorruptData` when a count is negative or above capacity, the
/// input ends early, or bytes are left over after the selection index.
pub fn decode(bytes: &[u8]) -> TodoResult<TodoData> {
    let mut reader = Reader::new(bytes);

    let list_count = reader.count("list count", MAX_LISTS)?;
    let mut lists = Vec::with_capacity(list_count);
    for list_index in 0..list_count {
        let name = reader.text(NAME_WIDTH)?;
        let task_count = reader.count(&format!("task count of list {}", list_index), MAX_TASKS)?;
        let mut tasks = Vec::with_capacity(task_count);
        for _ in 0..task_count {
            tasks.push(reader.task()?);
        }
        lists.push(TodoList { name, tasks });
    }

    let current = reader.i32()?;
    if !reader.is_empty() {
        return Err(TodoError::CorruptData(format!(
            "{} unexpected trailing byte(s)",
            reader.remaining()
        )));
    }

    // A negative or stale selection is treated like an invalid `select_list`
    let current = usize::try_from(current).ok();
    Ok(TodoData::from_lists(lists, current))
}

fn put_count(out: &mut Vec<u8>, count: usize) {
    // Counts are bounded by MAX_LISTS / MAX_TASKS
    let count = i32::try_from(count).unwrap_or(i32::MAX);
    out.extend_from_slice(&count.to_le_bytes());
}

fn put_text(out: &mut Vec<u8>, text: &str, width: usize) {
    let mut end = text.len().min(width - 1);
    while !text.is_char_boundary(end) {
        end -= 1;
    }
    out.extend_from_slice(&text.as_bytes()[..end]);
    out.resize(out.len() + (width - end), 0);
}

fn put_task(out: &mut Vec<u8>, task: &Task) {
    put_text(out, &task.description, DESCRIPTION_WIDTH);
    put_text(out, &task.deadline, DEADLINE_WIDTH);
    out.extend_from_slice(&i32::from(task.completed).to_le_bytes());
    out.extend_from_slice(&[0; PADDING_SIZE]);
    let instant = task.deadline_instant.unwrap_or(NO_INSTANT);
    out.extend_from_slice(&instant.to_le_bytes());
}

/// Bounds-checked cursor over the encoded bytes
struct Reader<'a> {
    bytes: &'a [u8],
    pos: usize,
}

impl<'a> Reader<'a> {
    fn new(bytes: &'a [u8]) -> Self {
        Self { bytes, pos: 0 }
    }

    fn remaining(&self) -> usize {
        self.bytes.len() - self.pos
    }

    fn is_empty(&self) -> bool {
        self.remaining() == 0
    }

    fn take(&mut self, len: usize) -> TodoResult<&'a [u8]> {
        if self.remaining() < len {
            return Err(TodoError::CorruptData(format!(
                "unexpected end of data at byte {} (needed {}, {} left)",
                self.pos,
                len,
                self.remaining()
            )));
        }
        let bytes: &'a [u8] = self.bytes;
        let slice = &bytes[self.pos..self.pos + len];
        self.pos += len;
        Ok(slice)
    }

    fn array<const N: usize>(&mut self) -> TodoResult<[u8; N]> {
        let mut buf = [0; N];
        buf.copy_from_slice(self.take(N)?);
        Ok(buf)
    }

    fn i32(&mut self) -> TodoResult<i32> {
        Ok(i32::from_le_bytes(self.array()?))
    }

    fn i64(&mut self) -> TodoResult<i64> {
        Ok(i64::from_le_bytes(self.array()?))
    }

    fn count(&mut self, what: &str, max: usize) -> TodoResult<usize> {
        let raw = self.i32()?;
        match usize::try_from(raw) {
            Ok(count) if count <= max => Ok(count),
            _ => Err(TodoError::CorruptData(format!(
                "{} {} is outside 0..={}",
                what, raw, max
            ))),
        }
    }

    fn text(&mut self, width: usize) -> TodoResult<String> {
        let field = self.take(width)?;
        let end = field.iter().position(|&b| b == 0).unwrap_or(field.len());
        Ok(String::from_utf8_lossy(&field[..end]).into_owned())
    }

    fn task(&mut self) -> TodoResult<Task> {
        let description = self.text(DESCRIPTION_WIDTH)?;
        let deadline = self.text(DEADLINE_WIDTH)?;
        let completed = self.i32()? != 0;
        self.take(PADDING_SIZE)?;
        let instant = self.i64()?;
        Ok(Task {
            description,
            deadline,
            completed,
            deadline_instant: (instant != NO_INSTANT).then_some(instant),
        })
    }
}
