use super::{csv, DataStore};
use crate::error::Result;
use crate::model::BookEntry;
use std::fs;
use std::path::Path;

/// Production store: loads book files from disk into memory.
#[derive(Debug, Default)]
pub struct FileStore {
    books: Vec<BookEntry>,
}

impl FileStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl DataStore for FileStore {
    fn load_data(&mut self, path: &Path) -> Result<usize> {
        let content = fs::read_to_string(path)?;
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

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const DOC: &str = "title,authors,rating,isbn,pages\n\
                       Animal Farm,George Orwell,4.5,ISBN1,112\n\
                       1984,George Orwell,4.7,ISBN2,328\n";

    #[test]
    fn loads_from_disk() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("books.csv");
        fs::write(&path, DOC).unwrap();

        let mut store = FileStore::new();
        let count = store.load_data(&path).unwrap();
        assert_eq!(count, 2);
        assert_eq!(store.books().len(), 2);
        assert_eq!(store.books()[0].title(), "Animal Farm");
    }

    #[test]
    fn successive_loads_append() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("books.csv");
        fs::write(&path, DOC).unwrap();

        let mut store = FileStore::new();
        store.load_data(&path).unwrap();
        store.load_data(&path).unwrap();
        assert_eq!(store.books().len(), 4);
    }

    #[test]
    fn missing_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        let mut store = FileStore::new();
        assert!(store.load_data(&dir.path().join("missing.csv")).is_err());
        assert!(store.books().is_empty());
    }

    #[test]
    fn malformed_row_appends_nothing() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("books.csv");
        fs::write(
            &path,
            "title,authors,rating,isbn,pages\n\
             Animal Farm,George Orwell,4.5,ISBN1,112\n\
             broken row\n",
        )
        .unwrap();

        let mut store = FileStore::new();
        assert!(store.load_data(&path).is_err());
        assert!(store.books().is_empty());
    }
}
