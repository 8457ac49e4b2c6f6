//! # Storage Layer
//!
//! Storage is abstracted behind the [`FileStore`] trait so the command layer
//! can be exercised against any backend. In practice there is exactly one:
//! [`memory::MemoryStore`]. Snipserve is volatile by design, so there is no
//! file or database backend to swap in. The trait stays because it keeps the
//! command layer free of storage details and keeps tests trivial to set up.
//!
//! The collection's only ordering guarantee is insertion order, which the
//! backend must preserve across updates (an updated record keeps its slot).

use crate::error::Result;
use crate::model::FileRecord;

pub mod memory;

/// Abstract interface for snippet file storage.
pub trait FileStore {
    /// Save a file: append if the id is new, replace in place otherwise.
    fn save_file(&mut self, file: &FileRecord) -> Result<()>;

    /// Get a file by id.
    fn get_file(&self, id: &str) -> Result<FileRecord>;

    /// List all files in insertion order.
    fn list_files(&self) -> Result<Vec<FileRecord>>;

    /// Remove a file by id, returning the removed record.
    fn delete_file(&mut self, id: &str) -> Result<FileRecord>;
}
