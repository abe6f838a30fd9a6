use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Document opened when no file is given
pub const DEFAULT_DOCUMENT: &str = "README.md";

#[derive(Parser, Debug)]
#[command(name = "cptui")]
#[command(about = "Copy code blocks from a markdown file to the clipboard", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Markdown file to open in the TUI
    pub file: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List the copyable blocks in a document
    Show {
        file: Option<PathBuf>,

        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
    /// Copy one block to the clipboard without opening the TUI
    Copy {
        /// Block number as printed by `show` (starting at 1)
        index: usize,

        #[arg(short, long)]
        file: Option<PathBuf>,
    },
}

pub fn document_path(file: Option<PathBuf>) -> PathBuf {
    file.unwrap_or_else(|| PathBuf::from(DEFAULT_DOCUMENT))
}
