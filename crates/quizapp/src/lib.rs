//! # Quizapp Architecture
//!
//! Quizapp is a **UI-agnostic quiz library**: a store of question/answer pairs, the
//! rules for addressing them by id, and a randomized play engine. The `quiz` binary
//! is one client of it.
//!
//! ## The Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  UI Client (the `quiz` CLI)                                 │
//! │  - Parses commands, renders results, implements Prompter    │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands, owns the store                │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - list, show, add, delete, edit, test, play                │
//! │  - Asks questions only through the Prompter trait           │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - QuizRepository trait, QuizStore over a StorageBackend    │
//! │  - FileStore (production), InMemoryStore (testing)          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `api.rs` inward, code never writes to stdout/stderr, never exits the
//! process, and never reads a terminal directly. User input arrives through
//! [`prompt::Prompter`], which the client implements.
//!
//! ## Errors
//!
//! Every operation returns [`error::Result`]. Validation and lookup errors are for
//! the user to read; persistence errors are fatal ([`error::QuizError::is_fatal`]).
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`commands`]: The session engine, one module per command
//! - [`store`]: Quiz sequence, persistence, repository trait
//! - [`model`]: `Quiz` and answer matching
//! - [`validate`]: Raw id → integer id
//! - [`prompt`]: The interactive question protocol
//! - [`config`]: Configuration loading
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod model;
pub mod prompt;
pub mod store;
#[cfg(any(test, feature = "test_utils"))]
pub mod test_utils;
pub mod validate;
