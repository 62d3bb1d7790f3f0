use crate::error::{LibrisError, Result};
use std::fmt;

/// Inclusive rating bounds for a book entry.
pub const RATING_MIN: f32 = 0.0;
pub const RATING_MAX: f32 = 5.0;

/// Immutable record for a single book.
///
/// Fields are validated once at construction and never change afterwards.
/// Equality is structural and author order is significant.
#[derive(Debug, Clone, PartialEq)]
pub struct BookEntry {
    title: String,
    authors: Vec<String>,
    rating: f32,
    isbn: String,
    pages: u32,
}

impl BookEntry {
    pub fn new(
        title: String,
        authors: Vec<String>,
        rating: f32,
        isbn: String,
        pages: u32,
    ) -> Result<Self> {
        if title.trim().is_empty() {
            return Err(LibrisError::InvalidBook("title must not be blank".into()));
        }
        if authors.is_empty() {
            return Err(LibrisError::InvalidBook(
                "at least one author is required".into(),
            ));
        }
        if authors.iter().any(|a| a.trim().is_empty()) {
            return Err(LibrisError::InvalidBook(
                "author names must not be blank".into(),
            ));
        }
        if !(RATING_MIN..=RATING_MAX).contains(&rating) {
            return Err(LibrisError::InvalidBook(format!(
                "rating {} out of range [{}, {}]",
                rating, RATING_MIN, RATING_MAX
            )));
        }

        Ok(Self {
            title,
            authors,
            rating,
            isbn,
            pages,
        })
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn authors(&self) -> &[String] {
        &self.authors
    }

    pub fn rating(&self) -> f32 {
        self.rating
    }

    pub fn isbn(&self) -> &str {
        &self.isbn
    }

    pub fn pages(&self) -> u32 {
        self.pages
    }
}

/// The long display form used by `LIST long` and search results.
impl fmt::Display for BookEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.title)?;
        writeln!(f, "by {}", self.authors.join(", "))?;
        writeln!(f, "Rating: {:.2}", self.rating)?;
        writeln!(f, "ISBN: {}", self.isbn)?;
        write!(f, "{} pages", self.pages)
    }
}
