use super::{push_record, CmdResult, NO_BOOK_ENTRIES, PLEASE_IMPORT};
use crate::error::{LibrisError, Result};
use crate::store::DataStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListMode {
    Short,
    Long,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListArgs {
    pub mode: ListMode,
}

pub fn validate(raw: &str) -> bool {
    parse(raw).is_ok()
}

/// Accepts a blank argument, the literal `short`, or the literal `long`.
/// The literals are compared untrimmed: `"short "` is invalid.
pub fn parse(raw: &str) -> Result<ListArgs> {
    let mode = if raw == "short" {
        ListMode::Short
    } else if raw == "long" {
        ListMode::Long
    } else if raw.trim().is_empty() {
        ListMode::Short
    } else {
        return Err(LibrisError::InvalidArgument(format!(
            "LIST accepts no argument, \"short\" or \"long\", got: {}",
            raw
        )));
    };
    Ok(ListArgs { mode })
}

pub fn run<S: DataStore>(store: &S, args: &ListArgs) -> Result<CmdResult> {
    let books = store.books();
    let mut result = CmdResult::default();

    if books.is_empty() {
        result.push_line(format!("{}{}", NO_BOOK_ENTRIES, PLEASE_IMPORT));
        return Ok(result);
    }

    result.push_line(format!("{} books in library:", books.len()));
    match args.mode {
        ListMode::Short => {
            for book in books {
                result.push_line(book.title());
            }
        }
        ListMode::Long => {
            for book in books {
                push_record(&mut result, book);
            }
        }
    }

    Ok(result)
}
