//! # API Facade
//!
//! A thin facade over the command layer, and the single entry point for all
//! snipserve operations regardless of the front end. It dispatches to command
//! functions and returns structured types; it performs no I/O of its own and
//! knows nothing about HTTP.
//!
//! `SnipApi<S: FileStore>` is generic over the storage backend, which is what
//! lets the HTTP layer and the tests share the exact same code path.

use std::time::Duration;

use crate::commands;
use crate::commands::stats::StatsReport;
use crate::error::Result;
use crate::model::{FileRecord, FileUpdate};
use crate::store::FileStore;

pub struct SnipApi<S: FileStore> {
    store: S,
}

impl<S: FileStore> SnipApi<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn list_files(&self) -> Result<Vec<FileRecord>> {
        commands::list::run(&self.store)
    }

    pub fn get_file(&self, id: &str) -> Result<FileRecord> {
        commands::get::run(&self.store, id)
    }

    pub fn create_file(&mut self, name: String, content: String) -> Result<FileRecord> {
        commands::create::run(&mut self.store, name, content)
    }

    pub fn update_file(&mut self, id: &str, update: FileUpdate) -> Result<FileRecord> {
        commands::update::run(&mut self.store, id, update)
    }

    pub fn delete_file(&mut self, id: &str) -> Result<FileRecord> {
        commands::delete::run(&mut self.store, id)
    }

    pub fn stats(&self, uptime: Duration) -> Result<StatsReport> {
        commands::stats::run(&self.store, uptime)
    }
}
