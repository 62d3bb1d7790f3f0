use super::print;
use crate::commands::Command;
use crate::error::Result;
use crate::store::DataStore;
use colored::Colorize;
use std::io::{self, BufRead, Write};

const PROMPT: &str = "library> ";

const HELP: &str = "\
Commands (one per line):
  ADD <path ending in .csv>      load a book file into the library
  LIST [short|long]              list titles, or full records with long
  GROUP TITLE|AUTHOR             group titles by leading letter or author
  SEARCH <single word>           find titles containing the word
  REMOVE TITLE <title>           remove the first exact title match
  REMOVE AUTHOR <author>         remove every book by the exact author
  HELP                           show this summary
  EXIT                           leave";

/// The interactive loop: reads one command per line, builds and executes
/// it, prints the result. Rejected lines are reported to stderr and the
/// loop continues. Ends on `EXIT` or end of input.
pub fn run<S: DataStore>(store: &mut S, input: impl BufRead) -> Result<()> {
    let mut lines = input.lines();
    loop {
        prompt()?;
        let Some(line) = lines.next() else { break };
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        // Keyword and argument are separated by a single space; the
        // argument is everything after it, unmodified.
        let (keyword, raw) = match line.split_once(' ') {
            Some((keyword, raw)) => (keyword, raw),
            None => (line.as_str(), ""),
        };

        match keyword {
            "EXIT" => return Ok(()),
            "HELP" => println!("{}", HELP),
            _ => match Command::parse(keyword, raw).and_then(|cmd| cmd.execute(store)) {
                Ok(result) => print::print_result(&result),
                Err(e) => eprintln!("{}", e.to_string().red()),
            },
        }
    }
    Ok(())
}

// The prompt lives on stderr so stdout stays a clean output sink.
fn prompt() -> Result<()> {
    let mut stderr = io::stderr();
    write!(stderr, "{}", PROMPT)?;
    stderr.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::InMemoryStore;
    use std::io::Cursor;

    #[test]
    fn runs_a_script_against_the_store() {
        let mut store = InMemoryStore::new();
        store.add_fixture(
            "books.csv",
            "title,authors,rating,isbn,pages\nAnimal Farm,George Orwell,4.5,ISBN1,112\n",
        );

        let script = "ADD books.csv\nREMOVE TITLE Animal Farm\nEXIT\n";
        run(&mut store, Cursor::new(script)).unwrap();
        assert!(store.books().is_empty());
    }

    #[test]
    fn bad_lines_do_not_stop_the_loop() {
        let mut store = InMemoryStore::new();
        store.add_fixture(
            "books.csv",
            "title,authors,rating,isbn,pages\nAnimal Farm,George Orwell,4.5,ISBN1,112\n",
        );

        let script = "NOPE\nGROUP ISBN\n\nADD books.csv\n";
        run(&mut store, Cursor::new(script)).unwrap();
        assert_eq!(store.books().len(), 1);
    }

    #[test]
    fn exit_stops_before_later_lines() {
        let mut store = InMemoryStore::new();
        store.add_fixture(
            "books.csv",
            "title,authors,rating,isbn,pages\nAnimal Farm,George Orwell,4.5,ISBN1,112\n",
        );

        let script = "EXIT\nADD books.csv\n";
        run(&mut store, Cursor::new(script)).unwrap();
        assert!(store.books().is_empty());
    }
}
