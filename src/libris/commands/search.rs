use super::{push_record, CmdResult, NO_BOOK_ENTRIES, PLEASE_IMPORT};
use crate::error::{LibrisError, Result};
use crate::store::DataStore;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchArgs {
    /// The argument exactly as received, echoed in the no-hits message.
    pub raw: String,
    /// The trimmed single-word search term.
    pub term: String,
}

pub fn validate(raw: &str) -> bool {
    parse(raw).is_ok()
}

/// The argument must trim to exactly one whitespace-free word.
pub fn parse(raw: &str) -> Result<SearchArgs> {
    let term = raw.trim();
    if term.is_empty() {
        return Err(LibrisError::InvalidArgument(
            "SEARCH requires a search term".into(),
        ));
    }
    if term.chars().any(char::is_whitespace) {
        return Err(LibrisError::InvalidArgument(format!(
            "SEARCH accepts a single word, got: {}",
            raw
        )));
    }
    Ok(SearchArgs {
        raw: raw.to_string(),
        term: term.to_string(),
    })
}

/// A title matches when one of its whitespace-delimited tokens equals the
/// term ignoring ASCII case. Substring containment is not a match.
pub fn run<S: DataStore>(store: &S, args: &SearchArgs) -> Result<CmdResult> {
    let books = store.books();
    let mut result = CmdResult::default();

    if books.is_empty() {
        result.push_line(format!("{}{}", NO_BOOK_ENTRIES, PLEASE_IMPORT));
    }

    let hits: Vec<_> = books
        .iter()
        .filter(|book| title_matches(book.title(), &args.term))
        .collect();

    if hits.is_empty() {
        result.push_line(format!("No hits found for search term: {}", args.raw));
    } else {
        for book in hits {
            push_record(&mut result, book);
        }
    }

    Ok(result)
}

fn title_matches(title: &str, term: &str) -> bool {
    title
        .split_whitespace()
        .any(|token| token.eq_ignore_ascii_case(term))
}
