use super::{csv, DataStore};
use crate::error::{LibrisError, Result};
use crate::model::BookEntry;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// In-memory store for tests: `load_data` serves documents registered as
/// fixtures instead of reading the filesystem.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    books: Vec<BookEntry>,
    fixtures: HashMap<PathBuf, String>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store pre-populated with the given entries.
    pub fn with_books(books: Vec<BookEntry>) -> Self {
        Self {
            books,
            fixtures: HashMap::new(),
        }
    }

    /// Registers a document that `load_data` will serve for `path`.
    pub fn add_fixture(&mut self, path: impl Into<PathBuf>, document: impl Into<String>) {
        self.fixtures.insert(path.into(), document.into());
    }
}

impl DataStore for InMemoryStore {
    fn load_data(&mut self, path: &Path) -> Result<usize> {
        let content = self
            .fixtures
            .get(path)
            .ok_or_else(|| {
                LibrisError::Store(format!("no fixture registered for {}", path.display()))
            })?
            .clone();
        let loaded = csv::parse_document(&content)?;
        let count = loaded.len();
        self.books.extend(loaded);
        Ok(count)
    }

    fn books(&self) -> &[BookEntry] {
        &self.books
    }

    fn books_mut(&mut self) -> &mut Vec<BookEntry> {
        &mut self.books
    }
}
