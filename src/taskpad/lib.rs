//! # Taskpad Architecture
//!
//! Taskpad is a UI-agnostic task-tracking library with an interactive CLI
//! client on top. The binary owns the terminal; everything from the API
//! facade inward takes Rust values and returns Rust values.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  REPL shell (main.rs)                                       │
//! │  - Reads input lines, renders results, the ONLY place that  │
//! │    knows about stdout/stderr/exit codes                     │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Session facade (api.rs)                                    │
//! │  - Owns the TaskList and the store                          │
//! │  - One classify → validate → mutate → persist cycle per     │
//! │    input line, returning structured Result types            │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Parser (parser.rs) + Command layer (commands/*.rs)         │
//! │  - Classification, field extraction, typed validation       │
//! │  - Pure mutations of the TaskList, mirrored to the store    │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage layer (store/)                                     │
//! │  - TaskStore trait                                          │
//! │  - FileStore (production), InMemoryStore (testing)          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key invariants
//!
//! - During a session the in-memory [`tasks::TaskList`] is the single
//!   source of truth; the store is a mirror, rewritten after every
//!   mutation and read only once, at startup.
//! - Tasks are addressed by 1-based position, recomputed from the current
//!   order on every query. There are no stable IDs.
//! - Validation failures never mutate anything; a failed mirror write
//!   never rolls a mutation back.
//!
//! ## Module Overview
//!
//! - [`api`]: the session facade — entry point for all operations
//! - [`parser`]: instruction classification and field validation
//! - [`commands`]: business logic for each instruction
//! - [`tasks`]: the ordered task collection
//! - [`store`]: storage abstraction, file backend, record codec
//! - [`model`]: core data types (`Task`, `TaskKind`, `DueDate`)
//! - [`error`]: error types

pub mod api;
pub mod commands;
pub mod error;
pub mod model;
pub mod parser;
pub mod store;
pub mod tasks;
