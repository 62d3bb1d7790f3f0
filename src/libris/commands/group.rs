use super::{CmdResult, Field, NO_BOOK_ENTRIES};
use crate::error::{LibrisError, Result};
use crate::model::BookEntry;
use crate::store::DataStore;
use std::collections::BTreeSet;

const ALPHABET_LEN: usize = 26;
const OVERFLOW_HEADER: &str = "[0-9]";
const HEADER_PREFIX: &str = "## ";
const GROUP_INDENT: &str = "    ";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupArgs {
    pub field: Field,
}

pub fn validate(raw: &str) -> bool {
    parse(raw).is_ok()
}

/// The trimmed argument must be exactly `TITLE` or `AUTHOR`.
pub fn parse(raw: &str) -> Result<GroupArgs> {
    let field = match raw.trim() {
        "TITLE" => Field::Title,
        "AUTHOR" => Field::Author,
        other => {
            return Err(LibrisError::InvalidArgument(format!(
                "GROUP accepts TITLE or AUTHOR, got: {}",
                other
            )))
        }
    };
    Ok(GroupArgs { field })
}

pub fn run<S: DataStore>(store: &S, args: &GroupArgs) -> Result<CmdResult> {
    let books = store.books();
    let mut result = CmdResult::default();

    if books.is_empty() {
        result.push_line(NO_BOOK_ENTRIES);
        return Ok(result);
    }

    result.push_line(format!("Grouped data by {}", args.field));
    match args.field {
        Field::Title => group_by_title(books, &mut result),
        Field::Author => group_by_author(books, &mut result),
    }

    Ok(result)
}

/// 27 buckets: `A`..`Z` by uppercased leading character, everything else
/// (digits, punctuation, non-ASCII) in the trailing overflow bucket.
/// Buckets keep dataset insertion order and are emitted ascending.
fn group_by_title(books: &[BookEntry], result: &mut CmdResult) {
    let mut buckets: Vec<Vec<&str>> = vec![Vec::new(); ALPHABET_LEN + 1];
    for book in books {
        buckets[bucket_index(book.title())].push(book.title());
    }

    for (index, bucket) in buckets.iter().enumerate() {
        if bucket.is_empty() {
            continue;
        }
        if index < ALPHABET_LEN {
            let letter = (b'A' + index as u8) as char;
            result.push_line(format!("{}{}", HEADER_PREFIX, letter));
        } else {
            result.push_line(format!("{}{}", HEADER_PREFIX, OVERFLOW_HEADER));
        }
        for title in bucket {
            result.push_line(format!("{}{}", GROUP_INDENT, title));
        }
    }
}

fn bucket_index(title: &str) -> usize {
    match title.chars().next().map(|c| c.to_ascii_uppercase()) {
        Some(c) if c.is_ascii_uppercase() => (c as usize) - ('A' as usize),
        _ => ALPHABET_LEN,
    }
}

/// Distinct authors sorted ordinally ascending; under each, the titles of
/// every record listing that exact author string, in dataset order. A
/// record with several matching authors appears once per section.
fn group_by_author(books: &[BookEntry], result: &mut CmdResult) {
    let mut authors: BTreeSet<&str> = BTreeSet::new();
    for book in books {
        for author in book.authors() {
            authors.insert(author.as_str());
        }
    }

    for author in authors {
        result.push_line(format!("{}{}", HEADER_PREFIX, author));
        for book in books {
            if book.authors().iter().any(|a| a.as_str() == author) {
                result.push_line(format!("{}{}", GROUP_INDENT, book.title()));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::BookEntry;
    use crate::store::memory::InMemoryStore;

    fn book(title: &str, authors: &[&str]) -> BookEntry {
        BookEntry::new(
            title.to_string(),
            authors.iter().map(|a| a.to_string()).collect(),
            4.0,
            "ISBN1".to_string(),
            100,
        )
        .unwrap()
    }

    #[test]
    fn accepts_title_and_author_trimmed() {
        assert_eq!(parse("TITLE").unwrap().field, Field::Title);
        assert_eq!(parse("  AUTHOR ").unwrap().field, Field::Author);
    }

    #[test]
    fn rejects_other_arguments() {
        assert!(!validate(""));
        assert!(!validate("title"));
        assert!(!validate("ISBN"));
        assert!(!validate("TITLE AUTHOR"));
    }

    #[test]
    fn empty_library_prints_only_the_warning() {
        let store = InMemoryStore::new();
        let result = run(&store, &parse("TITLE").unwrap()).unwrap();
        assert_eq!(result.lines, ["The library has no book entries."]);
    }

    #[test]
    fn title_buckets_ascend_with_overflow_last() {
        let store = InMemoryStore::with_books(vec![
            book("1984", &["George Orwell"]),
            book("Brave New World", &["Aldous Huxley"]),
            book("animal Farm", &["George Orwell"]),
        ]);
        let result = run(&store, &parse("TITLE").unwrap()).unwrap();
        assert_eq!(
            result.lines,
            [
                "Grouped data by TITLE",
                "## A",
                "    animal Farm",
                "## B",
                "    Brave New World",
                "## [0-9]",
                "    1984",
            ]
        );
    }

    #[test]
    fn title_bucket_keeps_insertion_order() {
        let store = InMemoryStore::with_books(vec![
            book("Animal Farm", &["George Orwell"]),
            book("A Clockwork Orange", &["Anthony Burgess"]),
        ]);
        let result = run(&store, &parse("TITLE").unwrap()).unwrap();
        assert_eq!(
            result.lines,
            [
                "Grouped data by TITLE",
                "## A",
                "    Animal Farm",
                "    A Clockwork Orange",
            ]
        );
    }

    #[test]
    fn non_letter_leading_characters_overflow() {
        assert_eq!(bucket_index("1984"), ALPHABET_LEN);
        assert_eq!(bucket_index("#hashtag"), ALPHABET_LEN);
        assert_eq!(bucket_index("Émile"), ALPHABET_LEN);
        assert_eq!(bucket_index("animal Farm"), 0);
        assert_eq!(bucket_index("Zen"), 25);
    }

    #[test]
    fn author_headers_sort_ordinally() {
        let store = InMemoryStore::with_books(vec![
            book("Thud!", &["Terry Pratchett"]),
            book("Good Omens", &["Terry Pratchett", "Neil Gaiman"]),
        ]);
        let result = run(&store, &parse("AUTHOR").unwrap()).unwrap();
        assert_eq!(
            result.lines,
            [
                "Grouped data by AUTHOR",
                "## Neil Gaiman",
                "    Good Omens",
                "## Terry Pratchett",
                "    Thud!",
                "    Good Omens",
            ]
        );
    }

    #[test]
    fn author_sections_use_exact_case_sensitive_names() {
        let store = InMemoryStore::with_books(vec![
            book("A", &["george orwell"]),
            book("B", &["George Orwell"]),
        ]);
        let result = run(&store, &parse("AUTHOR").unwrap()).unwrap();
        // Uppercase sorts before lowercase ordinally, sections never merge
        assert_eq!(
            result.lines,
            [
                "Grouped data by AUTHOR",
                "## George Orwell",
                "    B",
                "## george orwell",
                "    A",
            ]
        );
    }

    #[test]
    fn multi_author_record_appears_in_each_section() {
        let store = InMemoryStore::with_books(vec![book(
            "Good Omens",
            &["Terry Pratchett", "Neil Gaiman"],
        )]);
        let result = run(&store, &parse("AUTHOR").unwrap()).unwrap();
        let title_lines = result
            .lines
            .iter()
            .filter(|l| l.contains("Good Omens"))
            .count();
        assert_eq!(title_lines, 2);
    }
}
