use super::{CmdResult, Field, NO_BOOK_ENTRIES, PLEASE_IMPORT};
use crate::error::{LibrisError, Result};
use crate::model::BookEntry;
use crate::store::DataStore;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoveArgs {
    pub field: Field,
    /// Everything after the `TITLE `/`AUTHOR ` prefix, verbatim.
    pub target: String,
}

pub fn validate(raw: &str) -> bool {
    parse(raw).is_ok()
}

/// The argument must start with the literal `TITLE ` or `AUTHOR ` prefix
/// and carry a non-blank remainder. The remainder is the match target,
/// preserved exactly (no trimming).
pub fn parse(raw: &str) -> Result<RemoveArgs> {
    let (field, target) = match split_field(raw) {
        Some(split) => split,
        None => {
            return Err(LibrisError::InvalidArgument(
                "REMOVE requires TITLE or AUTHOR followed by a value".into(),
            ))
        }
    };
    if target.trim().is_empty() {
        return Err(LibrisError::InvalidArgument(format!(
            "REMOVE {} requires a value",
            field
        )));
    }
    Ok(RemoveArgs {
        field,
        target: target.to_string(),
    })
}

fn split_field(raw: &str) -> Option<(Field, &str)> {
    for field in [Field::Title, Field::Author] {
        if let Some(rest) = raw
            .strip_prefix(field.keyword())
            .and_then(|r| r.strip_prefix(' '))
        {
            return Some((field, rest));
        }
    }
    None
}

pub fn run<S: DataStore>(store: &mut S, args: &RemoveArgs) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    if store.books().is_empty() {
        result.push_line(format!("{}{}", NO_BOOK_ENTRIES, PLEASE_IMPORT));
    }

    match args.field {
        Field::Title => remove_title(store.books_mut(), &args.target, &mut result),
        Field::Author => remove_author(store.books_mut(), &args.target, &mut result),
    }

    Ok(result)
}

/// Deletes the first record whose title equals the target exactly
/// (case-sensitive), then stops.
fn remove_title(books: &mut Vec<BookEntry>, target: &str, result: &mut CmdResult) {
    match books.iter().position(|book| book.title() == target) {
        Some(index) => {
            books.remove(index);
            result.push_line(format!("{}: removed successfully.", target));
        }
        None => result.push_line(format!("{}: not found.", target)),
    }
}

/// Deletes every record whose author list contains the target exactly
/// (case-sensitive). The count is records removed, so a record listing
/// the same author twice still counts once.
fn remove_author(books: &mut Vec<BookEntry>, target: &str, result: &mut CmdResult) {
    let before = books.len();
    books.retain(|book| !book.authors().iter().any(|a| a.as_str() == target));
    let removed = before - books.len();
    result.push_line(format!("{} books removed for author: {}", removed, target));
}
