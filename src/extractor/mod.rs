mod comment;

pub use comment::{Comment, join_comments};

use std::fs;
use std::path::Path;

use crate::error::{NoticeGuardError, Result};
use crate::grammar::{CommentGrammar, GrammarRegistry};

/// Extracts the comments of a file, given its media type.
pub trait CommentExtractor {
    /// # Errors
    /// Returns an error if the file cannot be read or decoded, the media type
    /// has no grammar, or the grammar rejects the content.
    fn extract(&self, path: &Path, media_type: &str) -> Result<Vec<Comment>>;

    /// Name of the grammar used for `media_type`, for diagnostics.
    fn grammar_name(&self, _media_type: &str) -> Option<&'static str> {
        None
    }
}

/// Reads a file as UTF-8 and runs the grammar registered for its media type.
pub struct GrammarExtractor {
    registry: GrammarRegistry,
}

impl Default for GrammarExtractor {
    fn default() -> Self {
        Self::new(GrammarRegistry::default())
    }
}

impl GrammarExtractor {
    #[must_use]
    pub const fn new(registry: GrammarRegistry) -> Self {
        Self { registry }
    }
}

impl CommentExtractor for GrammarExtractor {
    fn extract(&self, path: &Path, media_type: &str) -> Result<Vec<Comment>> {
        let grammar = self
            .registry
            .get_by_media_type(media_type)
            .ok_or_else(|| NoticeGuardError::UnsupportedMediaType(media_type.to_string()))?;

        let bytes = fs::read(path).map_err(|e| NoticeGuardError::file_read(path, e))?;
        let source = String::from_utf8(bytes).map_err(|_| NoticeGuardError::InvalidEncoding {
            path: path.to_path_buf(),
        })?;

        grammar.extract(&source)
    }

    fn grammar_name(&self, media_type: &str) -> Option<&'static str> {
        self.registry
            .get_by_media_type(media_type)
            .map(CommentGrammar::name)
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
