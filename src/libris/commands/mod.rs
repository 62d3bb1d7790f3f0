//! Command layer: one module per command, pure business logic.
//!
//! Each module exposes `parse` (argument validation producing a typed
//! payload) and `run` (execution against a [`DataStore`]). Commands never
//! print; they return a [`CmdResult`] whose `lines` are the literal
//! stdout output and whose `messages` are routed by level in the CLI
//! layer.
//!
//! [`Command`] ties the modules together as a closed enum: the keyword is
//! resolved once in [`Command::parse`], after which dispatch is an
//! exhaustive match over typed payloads.

use crate::error::{LibrisError, Result};
use crate::model::BookEntry;
use crate::store::DataStore;
use std::fmt;

pub mod add;
pub mod group;
pub mod list;
pub mod remove;
pub mod search;

pub(crate) const NO_BOOK_ENTRIES: &str = "The library has no book entries.";
pub(crate) const PLEASE_IMPORT: &str = " Please import a library.";

/// The record field a GROUP or REMOVE command operates on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Title,
    Author,
}

impl Field {
    pub fn keyword(&self) -> &'static str {
        match self {
            Field::Title => "TITLE",
            Field::Author => "AUTHOR",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

/// What a command produced: output lines for stdout, in order, plus
/// leveled messages for the error sink.
#[derive(Debug, Default)]
pub struct CmdResult {
    pub lines: Vec<String>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn push_line(&mut self, line: impl Into<String>) {
        self.lines.push(line.into());
    }

    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }
}

/// Pushes a record's long display form followed by a separating blank line.
pub(crate) fn push_record(result: &mut CmdResult, book: &BookEntry) {
    for line in book.to_string().lines() {
        result.push_line(line);
    }
    result.push_line("");
}

/// A fully validated command, one variant per keyword, each owning its
/// typed argument payload. Values are single-use: the loop builds a fresh
/// one per input line.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Add(add::AddArgs),
    List(list::ListArgs),
    Group(group::GroupArgs),
    Search(search::SearchArgs),
    Remove(remove::RemoveArgs),
}

impl Command {
    /// Resolves the keyword and validates the raw argument string (the
    /// portion of the line after the keyword). Construction fails on an
    /// unknown keyword or a structurally invalid argument, so an existing
    /// `Command` is always safe to execute.
    pub fn parse(keyword: &str, raw: &str) -> Result<Self> {
        match keyword {
            "ADD" => Ok(Command::Add(add::parse(raw)?)),
            "LIST" => Ok(Command::List(list::parse(raw)?)),
            "GROUP" => Ok(Command::Group(group::parse(raw)?)),
            "SEARCH" => Ok(Command::Search(search::parse(raw)?)),
            "REMOVE" => Ok(Command::Remove(remove::parse(raw)?)),
            other => Err(LibrisError::UnknownCommand(other.to_string())),
        }
    }

    pub fn execute<S: DataStore>(&self, store: &mut S) -> Result<CmdResult> {
        match self {
            Command::Add(args) => add::run(store, args),
            Command::List(args) => list::run(store, args),
            Command::Group(args) => group::run(store, args),
            Command::Search(args) => search::run(store, args),
            Command::Remove(args) => remove::run(store, args),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::InMemoryStore;

    #[test]
    fn resolves_known_keywords() {
        assert!(matches!(
            Command::parse("LIST", "").unwrap(),
            Command::List(_)
        ));
        assert!(matches!(
            Command::parse("GROUP", "TITLE").unwrap(),
            Command::Group(_)
        ));
        assert!(matches!(
            Command::parse("SEARCH", "Orwell").unwrap(),
            Command::Search(_)
        ));
        assert!(matches!(
            Command::parse("REMOVE", "TITLE Animal Farm").unwrap(),
            Command::Remove(_)
        ));
        assert!(matches!(
            Command::parse("ADD", "books.csv").unwrap(),
            Command::Add(_)
        ));
    }

    #[test]
    fn keyword_resolution_is_case_sensitive() {
        assert!(matches!(
            Command::parse("list", ""),
            Err(LibrisError::UnknownCommand(_))
        ));
    }

    #[test]
    fn invalid_argument_rejects_construction() {
        assert!(matches!(
            Command::parse("GROUP", "ISBN"),
            Err(LibrisError::InvalidArgument(_))
        ));
    }

    #[test]
    fn parsed_command_executes() {
        let mut store = InMemoryStore::new();
        let command = Command::parse("LIST", "").unwrap();
        let result = command.execute(&mut store).unwrap();
        assert_eq!(
            result.lines,
            ["The library has no book entries. Please import a library."]
        );
    }
}
