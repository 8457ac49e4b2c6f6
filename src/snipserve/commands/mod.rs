//! Business logic for each operation, one module per command.
//!
//! Every command is a free `run` function generic over [`crate::store::FileStore`],
//! so the whole layer is testable against `MemoryStore` with no server running.

pub mod create;
pub mod delete;
pub mod get;
pub mod list;
pub mod stats;
pub mod update;
