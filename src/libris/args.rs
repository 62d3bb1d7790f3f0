use clap::Parser;
use once_cell::sync::Lazy;
use std::path::PathBuf;

static VERSION: Lazy<String> = Lazy::new(|| {
    let hash = env!("GIT_HASH");
    if hash.is_empty() {
        env!("CARGO_PKG_VERSION").to_string()
    } else {
        format!(
            "{} ({} {})",
            env!("CARGO_PKG_VERSION"),
            hash,
            env!("GIT_COMMIT_DATE")
        )
    }
});

#[derive(Parser, Debug)]
#[command(name = "libris")]
#[command(about = "Interactive command-line manager for book library files", long_about = None)]
#[command(version = VERSION.as_str())]
pub struct Cli {
    /// Book files to load before the first prompt, as if by ADD
    pub files: Vec<PathBuf>,

    /// Skip reading the user configuration file
    #[arg(long)]
    pub no_config: bool,
}
