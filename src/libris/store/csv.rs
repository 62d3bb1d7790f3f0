//! Row parsing for delimited book files.
//!
//! One record per line, five comma-separated fields:
//! `title,authors,rating,isbn,pages`. Multiple authors are separated by
//! `-` within the authors field. The first line is a column header and is
//! skipped.

use crate::error::{LibrisError, Result};
use crate::model::BookEntry;

const FIELD_SEPARATOR: char = ',';
const AUTHOR_SEPARATOR: char = '-';
const FIELD_COUNT: usize = 5;

/// Parses a whole book document. Blank lines are ignored; any malformed
/// row fails the parse with its 1-based line number.
pub fn parse_document(content: &str) -> Result<Vec<BookEntry>> {
    let mut books = Vec::new();

    // enumerate before skip so reported line numbers match the file
    for (index, line) in content.lines().enumerate().skip(1) {
        if line.trim().is_empty() {
            continue;
        }
        let book = parse_row(line).map_err(|e| LibrisError::MalformedRow {
            line: index + 1,
            reason: row_reason(e),
        })?;
        books.push(book);
    }

    Ok(books)
}

fn parse_row(line: &str) -> Result<BookEntry> {
    let fields: Vec<&str> = line.split(FIELD_SEPARATOR).collect();
    if fields.len() != FIELD_COUNT {
        return Err(LibrisError::Store(format!(
            "expected {} fields, found {}",
            FIELD_COUNT,
            fields.len()
        )));
    }

    let authors = fields[1]
        .split(AUTHOR_SEPARATOR)
        .map(str::to_string)
        .collect();
    let rating: f32 = fields[2]
        .parse()
        .map_err(|_| LibrisError::Store(format!("invalid rating: {:?}", fields[2])))?;
    let pages: u32 = fields[4]
        .parse()
        .map_err(|_| LibrisError::Store(format!("invalid page count: {:?}", fields[4])))?;

    BookEntry::new(
        fields[0].to_string(),
        authors,
        rating,
        fields[3].to_string(),
        pages,
    )
}

fn row_reason(err: LibrisError) -> String {
    match err {
        LibrisError::Store(reason) | LibrisError::InvalidBook(reason) => reason,
        other => other.to_string(),
    }
}
