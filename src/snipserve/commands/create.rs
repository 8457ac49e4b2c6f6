use crate::error::{Result, SnipError};
use crate::model::FileRecord;
use crate::store::FileStore;

pub fn run<S: FileStore>(store: &mut S, name: String, content: String) -> Result<FileRecord> {
    let name = name.trim().to_string();
    if name.is_empty() {
        return Err(SnipError::InvalidInput(
            "Name and content are required".into(),
        ));
    }

    let file = FileRecord::new(name, content);
    store.save_file(&file)?;
    Ok(file)
}
