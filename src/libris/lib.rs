//! # Libris Architecture
//!
//! Libris is an interactive manager for an in-memory collection of book
//! records loaded from delimited book files. The user types one command
//! per line (ADD, LIST, GROUP, SEARCH, REMOVE) and each command
//! validates its own argument, then executes against the shared dataset.
//!
//! ## The Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, args.rs, wired by main.rs)                │
//! │  - Reads lines, prints results, handles terminal I/O        │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Closed Command enum with typed, validated payloads       │
//! │  - Pure business logic, returns Result<CmdResult>           │
//! │  - No I/O assumptions whatsoever                            │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - Abstract DataStore trait owning the live dataset         │
//! │  - FileStore (production), InMemoryStore (testing)          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Principle: Parse, Then Execute
//!
//! A [`commands::Command`] can only be obtained through
//! [`commands::Command::parse`], which validates the raw argument string.
//! Execution therefore never sees a malformed argument, and because it
//! borrows the store there is no absent-dataset state either.
//!
//! ## Testing Strategy
//!
//! 1. **Commands** (`commands/*.rs`): thorough unit tests of the command
//!    logic against `InMemoryStore`. This is where the lion's share of
//!    testing lives.
//! 2. **Storage** (`store/`): parsing and backend tests, `tempfile` for
//!    the file-backed store.
//! 3. **Binary** (`tests/`): end-to-end scripts piped through stdin with
//!    `assert_cmd`.
//!
//! ## Module Overview
//!
//! - [`commands`]: the command contract and one module per command
//! - [`store`]: storage abstraction, file and in-memory backends
//! - [`model`]: the immutable [`model::BookEntry`] record
//! - [`config`]: user configuration
//! - [`error`]: error types
//! - `cli`: printing and the interactive loop for the binary

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod model;
pub mod store;
