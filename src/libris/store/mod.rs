//! # Storage Layer
//!
//! This module defines the storage abstraction for libris. The [`DataStore`]
//! trait owns the live, ordered collection of book entries and knows how to
//! grow it from delimited book files.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: production backend, reads book files from disk
//! - [`memory::InMemoryStore`]: test backend, serves registered fixture
//!   documents without touching the filesystem
//!
//! ## Ownership
//!
//! The store is the only owner of the dataset. Commands borrow it: shared
//! for reads (`LIST`, `GROUP`, `SEARCH`) and exclusive for deletions
//! (`REMOVE`). Loading appends, it never replaces: successive `ADD`s
//! accumulate records in file order.
//!
//! ## Atomicity
//!
//! `load_data` parses a whole document before touching the collection. A
//! malformed row fails the load and appends nothing.

use crate::error::Result;
use crate::model::BookEntry;
use std::path::Path;

pub mod csv;
pub mod fs;
pub mod memory;

/// Abstract interface for book storage.
pub trait DataStore {
    /// Load book records from a delimited file, appending them to the
    /// collection. Returns the number of records loaded.
    fn load_data(&mut self, path: &Path) -> Result<usize>;

    /// The live, ordered collection of book entries.
    fn books(&self) -> &[BookEntry];

    /// Mutable access to the collection, for commands that delete entries.
    fn books_mut(&mut self) -> &mut Vec<BookEntry>;
}
