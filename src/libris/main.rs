use clap::Parser;
use colored::Colorize;
use directories::ProjectDirs;
use libris::cli::{print, repl};
use libris::commands::add;
use libris::config::LibrisConfig;
use libris::error::Result;
use libris::store::fs::FileStore;
use std::io;
use std::path::PathBuf;

mod args;
use args::Cli;

fn main() {
    if let Err(e) = run() {
        eprintln!("{}", format!("Error: {}", e).red());
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let mut store = FileStore::new();

    // Startup files go through the same validate-then-load path as the
    // interactive ADD command; failures are reported, never fatal.
    for path in startup_files(&cli) {
        match add::parse(&path.to_string_lossy()) {
            Ok(parsed) => {
                let result = add::run(&mut store, &parsed)?;
                print::print_messages(&result.messages);
            }
            Err(e) => eprintln!("{}", e.to_string().red()),
        }
    }

    let stdin = io::stdin();
    repl::run(&mut store, stdin.lock())
}

fn startup_files(cli: &Cli) -> Vec<PathBuf> {
    if !cli.files.is_empty() {
        return cli.files.clone();
    }
    if cli.no_config {
        return Vec::new();
    }
    load_config().default_library.into_iter().collect()
}

fn load_config() -> LibrisConfig {
    let Some(dirs) = ProjectDirs::from("com", "libris", "libris") else {
        return LibrisConfig::default();
    };
    LibrisConfig::load(dirs.config_dir()).unwrap_or_default()
}
