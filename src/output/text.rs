use std::fmt::Write;

use crate::checker::CheckResult;
use crate::notice::{COPYRIGHT_TEXT, LICENSE_TEXT};

pub const BANNER: &str = "Checking copyright headers...";
pub const FAILURE_SUMMARY: &str =
    ">> error: One or more files are missing a valid copyright or license header";

/// Renders the human-readable diagnostics printed on stdout.
///
/// Passing and skipped files produce no output.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextFormatter;

impl TextFormatter {
    #[must_use]
    pub fn format_banner(&self) -> String {
        format!("{BANNER}\n")
    }

    #[must_use]
    pub fn format_result(&self, result: &CheckResult) -> String {
        let mut output = String::new();
        let path = result.path().display();

        match result {
            CheckResult::Passed { .. } | CheckResult::Skipped { .. } => {}
            CheckResult::MimeError { message, .. } => {
                let _ = writeln!(output, "# Error reading MIME type of {path}: {message}");
            }
            CheckResult::ParseError { message, .. } => {
                let _ = writeln!(output, "# Failed to parse comments in {path}: {message}");
            }
            CheckResult::MissingCopyright { .. }
            | CheckResult::MissingLicense { .. }
            | CheckResult::MissingBoth { .. } => {
                let _ = writeln!(output, "# Copyright check error(s) in: {path}");
                if result.missing_copyright() {
                    let _ = writeln!(
                        output,
                        "\t# Missing or invalid copyright. Expected: {COPYRIGHT_TEXT}"
                    );
                }
                if result.missing_license() {
                    let _ = writeln!(
                        output,
                        "\t# Missing or invalid license. Expected: {LICENSE_TEXT}"
                    );
                }
            }
        }

        output
    }

    /// Closing line for a run; empty when every file passed.
    #[must_use]
    pub fn format_summary(&self, exit_code: i32) -> String {
        if exit_code == crate::EXIT_SUCCESS {
            String::new()
        } else {
            format!("{FAILURE_SUMMARY}\n")
        }
    }
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;
