use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "notice-guard")]
#[command(author, version, about = "Check for fixed copyright and license headers.")]
#[command(long_about = "Checks that every given file carries the project copyright notice and \
    SPDX license identifier inside a comment. Empty files are skipped.\n\n\
    Exit codes:\n  \
    0 - All files passed\n  \
    1 - One or more files are missing a notice or could not be checked")]
pub struct Cli {
    /// Trace detection and extraction on stderr (-v, -vv for more)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Files to check.
    pub files: Vec<PathBuf>,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
