use std::io::{self, Write};
use std::path::PathBuf;

use crate::checker::HeaderChecker;
use crate::extractor::CommentExtractor;
use crate::media::MediaTypeDetector;
use crate::output::TextFormatter;
use crate::{EXIT_RUNTIME_ERROR, EXIT_SUCCESS, Result};

/// Check `files` with the default checker, reporting on stdout.
///
/// Returns the process exit code.
#[must_use]
pub fn run_check(files: &[PathBuf], verbose: u8) -> i32 {
    let checker = <HeaderChecker>::default().with_verbose(verbose);
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match run_check_with(&checker, files, &mut out) {
        Ok(exit_code) => exit_code,
        Err(e) => {
            eprintln!("Error: {e}");
            EXIT_RUNTIME_ERROR
        }
    }
}

/// Check each file in order, writing its diagnostics before moving on.
///
/// A failing file never stops the run; the returned code is the bitwise OR
/// of every file's exit code.
///
/// # Errors
/// Returns an error only if writing to `out` fails.
pub fn run_check_with<D, E, W>(
    checker: &HeaderChecker<D, E>,
    files: &[PathBuf],
    out: &mut W,
) -> Result<i32>
where
    D: MediaTypeDetector,
    E: CommentExtractor,
    W: Write,
{
    let formatter = TextFormatter;
    out.write_all(formatter.format_banner().as_bytes())?;

    let mut exit_code = EXIT_SUCCESS;
    for path in files {
        let result = checker.check(path);
        out.write_all(formatter.format_result(&result).as_bytes())?;
        exit_code |= result.exit_code();
    }

    out.write_all(formatter.format_summary(exit_code).as_bytes())?;
    out.flush()?;

    Ok(exit_code)
}

#[cfg(test)]
#[path = "check_tests.rs"]
mod tests;
