use super::{CmdMessage, CmdResult};
use crate::error::{LibrisError, Result};
use crate::store::DataStore;
use std::path::PathBuf;

const BOOK_FILE_SUFFIX: &str = ".csv";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddArgs {
    pub path: PathBuf,
}

pub fn validate(raw: &str) -> bool {
    parse(raw).is_ok()
}

/// The argument is a path: trimmed, non-blank, ending in `.csv`
/// (case-sensitive).
pub fn parse(raw: &str) -> Result<AddArgs> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(LibrisError::InvalidArgument(
            "ADD requires a path to a book file".into(),
        ));
    }
    if !trimmed.ends_with(BOOK_FILE_SUFFIX) {
        return Err(LibrisError::InvalidArgument(format!(
            "ADD only accepts {} files, got: {}",
            BOOK_FILE_SUFFIX, trimmed
        )));
    }
    Ok(AddArgs {
        path: PathBuf::from(trimmed),
    })
}

/// Loads the file into the store. Failures are reported to the error
/// sink as a single message and never propagate.
pub fn run<S: DataStore>(store: &mut S, args: &AddArgs) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    if let Err(e) = store.load_data(&args.path) {
        result.add_message(CmdMessage::error(format!(
            "Failed to load book data from {}: {}",
            args.path.display(),
            e
        )));
    }
    Ok(result)
}
