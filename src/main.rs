#![forbid(unsafe_code)]

//! BLFS Command Extractor
//!
//! This program downloads Beyond Linux From Scratch instruction pages for the given
//! book chapters and prints the shell commands embedded in them. For each package
//! page linked from a chapter index it prints the page title followed by every
//! `pre.userinput` block, in document order.

use clap::{CommandFactory, Parser};
use clap_verbosity_flag::{InfoLevel, Verbosity};
use std::{
    io::{self, Write},
    process::ExitCode,
    time::Duration,
};

// Import modules
mod commands;
mod errors;
mod fetcher;
mod html;

use crate::commands::chapter::run_chapters;
use crate::errors::AppError;
use crate::fetcher::{BASE_URL, DEFAULT_TIMEOUT_SECS, FetchSettings, PageFetcher};

/// Exit status when no chapter is given
const USAGE_EXIT_CODE: u8 = 1;

#[derive(Parser, Debug)]
#[command(name = "blfs-commands")]
#[command(about = "Print the shell commands of BLFS book chapters")]
struct Cli {
    /// Chapter identifiers, e.g. `general` or `postlfs`
    #[arg(value_name = "CHAPTER")]
    chapters: Vec<String>,

    /// Root URL of the BLFS book
    #[arg(long, value_name = "URL", default_value = BASE_URL)]
    base_url: String,

    /// Per-request timeout
    #[arg(long, value_name = "SECONDS", default_value_t = DEFAULT_TIMEOUT_SECS)]
    timeout: u64,

    #[command(flatten)]
    verbose: Verbosity<InfoLevel>,
}

impl Cli {
    fn fetch_settings(&self) -> FetchSettings {
        FetchSettings {
            base_url: self.base_url.clone(),
            timeout: Duration::from_secs(self.timeout),
        }
    }
}

/// Render the one-line usage message
fn usage() -> String {
    Cli::command().render_usage().to_string()
}

/// Run the chapters named on the command line
///
/// Writes the usage message to `out` and returns the usage exit code when no
/// chapter is given, without building the runtime or the HTTP client.
fn run<W: Write>(cli: &Cli, out: &mut W) -> Result<u8, AppError> {
    if cli.chapters.is_empty() {
        writeln!(out, "{}", usage())?;
        return Ok(USAGE_EXIT_CODE);
    }

    let rt = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    rt.block_on(async {
        let fetcher = PageFetcher::new(cli.fetch_settings())?;
        run_chapters(&fetcher, &cli.chapters, out).await?;
        Ok::<_, AppError>(())
    })?;

    Ok(0)
}

/// Main function
///
/// Parses command-line arguments, initializes the logger and processes each
/// chapter in order. Logs go to stderr so stdout only carries the commands.
fn main() -> Result<ExitCode, AppError> {
    let cli = Cli::parse();

    // Initialize logger
    env_logger::Builder::new()
        .filter_level(cli.verbose.log_level_filter())
        .parse_default_env()
        .init();

    let mut stdout = io::stdout().lock();
    run(&cli, &mut stdout).map(ExitCode::from)
}
