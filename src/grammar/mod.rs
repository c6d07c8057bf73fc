//! Comment grammars, one per family of media types.
//!
//! A grammar turns decoded source text into the ordered list of comments it
//! contains. Grammars never look at the file name; the caller chooses one by
//! media type through [`GrammarRegistry`].

mod c_style;
mod hash;
mod markup;
mod python;
mod registry;

pub use c_style::CStyleGrammar;
pub use hash::HashGrammar;
pub use markup::MarkupGrammar;
pub use python::PythonGrammar;
pub use registry::GrammarRegistry;

use crate::error::Result;
use crate::extractor::Comment;

/// Extracts comments from source text.
pub trait CommentGrammar: Send + Sync {
    /// Short human-readable name, e.g. `"C-style"`.
    fn name(&self) -> &'static str;

    /// Return every comment in `source`, in file order.
    ///
    /// # Errors
    /// Returns an error when the source is malformed in a way the grammar
    /// cannot recover from, such as an unterminated block comment.
    fn extract(&self, source: &str) -> Result<Vec<Comment>>;
}

/// Maps byte offsets to 1-based line numbers.
pub(crate) struct LineIndex {
    line_starts: Vec<usize>,
}

impl LineIndex {
    pub(crate) fn new(source: &str) -> Self {
        let line_starts = std::iter::once(0)
            .chain(source.match_indices('\n').map(|(i, _)| i + 1))
            .collect();
        Self { line_starts }
    }

    pub(crate) fn line_of(&self, offset: usize) -> usize {
        match self.line_starts.binary_search(&offset) {
            Ok(idx) => idx + 1,
            Err(idx) => idx,
        }
    }
}

/// Byte index of the newline ending the line that contains `from`, or the
/// end of input.
pub(crate) fn line_end(bytes: &[u8], from: usize) -> usize {
    bytes[from..]
        .iter()
        .position(|&b| b == b'\n')
        .map_or(bytes.len(), |p| from + p)
}

pub(crate) fn is_line_start(bytes: &[u8], at: usize) -> bool {
    at == 0 || bytes[at - 1] == b'\n'
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
