use crate::error::{Result, SnipError};
use crate::model::{FileRecord, FileUpdate};
use crate::store::FileStore;

/// Apply a partial update. Absent fields are untouched; a rename recomputes
/// the derived language and extension. `id` and `created_at` are outside the
/// [`FileUpdate`] allow-list and cannot change here.
pub fn run<S: FileStore>(store: &mut S, id: &str, update: FileUpdate) -> Result<FileRecord> {
    let mut file = store.get_file(id)?;

    if let Some(name) = update.name {
        let name = name.trim().to_string();
        if name.is_empty() {
            return Err(SnipError::InvalidInput("Name cannot be empty".into()));
        }
        file.rename(name);
    }
    if let Some(content) = update.content {
        file.content = content;
    }

    store.save_file(&file)?;
    Ok(file)
}
