use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum NoticeGuardError {
    #[error("Failed to read file: {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("File is not valid UTF-8: {path}")]
    InvalidEncoding { path: PathBuf },

    #[error("Unsupported MIME type {0}")]
    UnsupportedMediaType(String),

    #[error("Unterminated comment starting on line {line}")]
    UnterminatedComment { line: usize },

    #[error("Unterminated string starting on line {line}")]
    UnterminatedString { line: usize },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl NoticeGuardError {
    /// Wrap an I/O error together with the path that produced it.
    #[must_use]
    pub fn file_read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::FileRead {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, NoticeGuardError>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
