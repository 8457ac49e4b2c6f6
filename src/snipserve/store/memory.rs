use super::FileStore;
use crate::error::{Result, SnipError};
use crate::model::FileRecord;
use crate::seed;

/// In-memory storage. Does NOT persist data.
///
/// A plain Vec keeps insertion order; the collection is small enough that
/// linear scans are the whole indexing story.
#[derive(Default)]
pub struct MemoryStore {
    files: Vec<FileRecord>,
}

impl MemoryStore {
    /// An empty store, mainly for tests.
    pub fn new() -> Self {
        Self::default()
    }

    /// A store pre-loaded with the default sample files. Built once at
    /// process start and handed to the server; there is no lazy seeding.
    pub fn seeded() -> Self {
        Self {
            files: seed::default_files(),
        }
    }
}

impl FileStore for MemoryStore {
    fn save_file(&mut self, file: &FileRecord) -> Result<()> {
        match self.files.iter_mut().find(|f| f.id == file.id) {
            Some(existing) => *existing = file.clone(),
            None => self.files.push(file.clone()),
        }
        Ok(())
    }

    fn get_file(&self, id: &str) -> Result<FileRecord> {
        self.files
            .iter()
            .find(|f| f.id == id)
            .cloned()
            .ok_or_else(|| SnipError::FileNotFound(id.to_string()))
    }

    fn list_files(&self) -> Result<Vec<FileRecord>> {
        Ok(self.files.clone())
    }

    fn delete_file(&mut self, id: &str) -> Result<FileRecord> {
        let index = self
            .files
            .iter()
            .position(|f| f.id == id)
            .ok_or_else(|| SnipError::FileNotFound(id.to_string()))?;
        Ok(self.files.remove(index))
    }
}
