use std::path::{Path, PathBuf};

use crate::notice::NoticeStatus;
use crate::{EXIT_NOTICE_MISSING, EXIT_SUCCESS};

/// Outcome of checking one file for the required notices.
///
/// `MimeError` and `ParseError` carry the rendered error message; the file's
/// comments were never inspected in those cases.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckResult {
    Passed { path: PathBuf },
    /// Zero-byte file, exempt from the check.
    Skipped { path: PathBuf },
    MissingCopyright { path: PathBuf },
    MissingLicense { path: PathBuf },
    MissingBoth { path: PathBuf },
    MimeError { path: PathBuf, message: String },
    ParseError { path: PathBuf, message: String },
}

impl CheckResult {
    /// Map a notice scan onto a result.
    #[must_use]
    pub fn from_status(path: PathBuf, status: NoticeStatus) -> Self {
        match (status.copyright_found, status.license_found) {
            (true, true) => Self::Passed { path },
            (false, true) => Self::MissingCopyright { path },
            (true, false) => Self::MissingLicense { path },
            (false, false) => Self::MissingBoth { path },
        }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        match self {
            Self::Passed { path }
            | Self::Skipped { path }
            | Self::MissingCopyright { path }
            | Self::MissingLicense { path }
            | Self::MissingBoth { path }
            | Self::MimeError { path, .. }
            | Self::ParseError { path, .. } => path,
        }
    }

    #[must_use]
    pub const fn is_failed(&self) -> bool {
        !matches!(self, Self::Passed { .. } | Self::Skipped { .. })
    }

    #[must_use]
    pub const fn missing_copyright(&self) -> bool {
        matches!(
            self,
            Self::MissingCopyright { .. } | Self::MissingBoth { .. }
        )
    }

    #[must_use]
    pub const fn missing_license(&self) -> bool {
        matches!(self, Self::MissingLicense { .. } | Self::MissingBoth { .. })
    }

    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        if self.is_failed() {
            EXIT_NOTICE_MISSING
        } else {
            EXIT_SUCCESS
        }
    }
}

#[cfg(test)]
#[path = "result_tests.rs"]
mod tests;
