//! # Snipserve Architecture
//!
//! Snipserve is a small code snippet server: an in-memory collection of named
//! text files behind a JSON API, plus a browser page that edits them. The
//! collection is volatile by design. A restart brings back the three sample
//! files and nothing else.
//!
//! ## The Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  HTTP Layer (server/, wired by main.rs)                     │
//! │  - axum router, request extraction, JSON envelopes          │
//! │  - The ONLY place that knows about status codes             │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! │  - Generic over the storage backend                         │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Pure business logic                                      │
//! │  - Operates on Rust types, returns Rust types               │
//! │  - No I/O assumptions whatsoever                            │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - Abstract FileStore trait                                 │
//! │  - MemoryStore (the only backend; there is no persistence)  │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `api.rs` inward (API, commands, storage), code takes regular Rust
//! arguments and returns regular Rust types. Nothing below the HTTP layer
//! knows about status codes, envelopes, or the network. This is what lets the
//! command layer be tested against `MemoryStore` with no server running, and
//! the router be tested in-process without binding a socket.
//!
//! ## Derived Metadata
//!
//! A file's `language` and `extension` are never stored independently of its
//! `name`. [`language::detect`] is the single place that derives them, and it
//! runs wherever a name is set or changed (create and rename). See
//! `language.rs` for the extension table.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`commands`]: Business logic for each operation
//! - [`store`]: Storage abstraction and the in-memory backend
//! - [`model`]: Core data types (`FileRecord`, `FileUpdate`)
//! - [`language`]: Extension to language-label derivation
//! - [`seed`]: The three default sample files
//! - [`config`]: Port and environment resolution
//! - [`error`]: Error types
//! - [`server`]: axum router, handlers, and response envelopes

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod language;
pub mod model;
pub mod seed;
pub mod server;
pub mod store;
