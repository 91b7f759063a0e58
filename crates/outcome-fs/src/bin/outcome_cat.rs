//! Print a file to stdout.
//!
//! A file that cannot be opened or read aborts the process with the
//! `--message` diagnostic and the failure's accumulated context:
//!
//! ```text
//! $ outcome-cat conf.ini --message "Failed to load conf.ini"
//! Failed to load conf.ini
//! called into_success on a failure outcome
//! Context: No such file or directory (os error 2)
//!     Failed to open file.
//! ```
use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{debug, Level};

use outcome_fs::{as_bytes, as_string, open, OpenMode};

#[derive(Debug, Parser)]
#[command(name = "outcome-cat", version, about)]
struct Args {
    /// File to print.
    path: PathBuf,

    /// Open in binary mode and copy raw bytes instead of UTF-8 text.
    #[arg(long)]
    binary: bool,

    /// Log open/read steps to stderr.
    #[arg(short, long)]
    verbose: bool,

    /// Diagnostic printed before aborting when the file cannot be opened.
    #[arg(long, default_value = "Failed to load file.")]
    message: String,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let level = if args.verbose { Level::DEBUG } else { Level::WARN };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .init();

    let mode = if args.binary {
        OpenMode::IN | OpenMode::BINARY
    } else {
        OpenMode::IN
    };
    let mut file = open(&args.path, mode).into_success_with(&args.message);

    let mut stdout = io::stdout().lock();
    if args.binary {
        let bytes = as_bytes(&mut file)
            .into_anyhow()
            .with_context(|| format!("reading {}", args.path.display()))?;
        debug!(len = bytes.len(), "copying bytes");
        stdout.write_all(&bytes)?;
    } else {
        let contents = as_string(&mut file).into_success_with("Failed to read file.");
        stdout.write_all(contents.as_bytes())?;
    }
    stdout.flush().context("flushing stdout")?;
    Ok(())
}
