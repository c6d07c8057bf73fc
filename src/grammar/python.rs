use crate::error::{NoticeGuardError, Result};
use crate::extractor::Comment;

use super::{CommentGrammar, LineIndex, line_end};

/// Python `#` comments.
///
/// String literals, including triple-quoted strings that span lines, are
/// skipped, so docstrings never count as comments.
#[derive(Debug, Clone, Copy, Default)]
pub struct PythonGrammar;

impl PythonGrammar {
    /// Skip the string literal opening at `at`.
    ///
    /// Returns the index just past the closing quote. Single-quoted strings
    /// end at a newline even when unclosed; triple-quoted strings must close.
    fn skip_string(bytes: &[u8], at: usize) -> Option<usize> {
        let quote = bytes[at];
        let triple = bytes.len() >= at + 3 && bytes[at + 1] == quote && bytes[at + 2] == quote;
        let mut i = if triple { at + 3 } else { at + 1 };

        while i < bytes.len() {
            match bytes[i] {
                b'\\' => i += 2,
                b'\n' if !triple => return Some(i),
                b if b == quote => {
                    if !triple {
                        return Some(i + 1);
                    }
                    if bytes.len() >= i + 3 && bytes[i + 1] == quote && bytes[i + 2] == quote {
                        return Some(i + 3);
                    }
                    i += 1;
                }
                _ => i += 1,
            }
        }

        if triple { None } else { Some(bytes.len()) }
    }
}

impl CommentGrammar for PythonGrammar {
    fn name(&self) -> &'static str {
        "Python"
    }

    fn extract(&self, source: &str) -> Result<Vec<Comment>> {
        let bytes = source.as_bytes();
        let lines = LineIndex::new(source);
        let mut comments = Vec::new();
        let mut i = 0;

        while i < bytes.len() {
            match bytes[i] {
                b'#' => {
                    let end = line_end(bytes, i);
                    comments.push(Comment::single_line(&source[i + 1..end], lines.line_of(i)));
                    i = end;
                }
                b'\'' | b'"' => {
                    let line = lines.line_of(i);
                    i = Self::skip_string(bytes, i)
                        .ok_or(NoticeGuardError::UnterminatedString { line })?;
                }
                _ => i += 1,
            }
        }

        Ok(comments)
    }
}

#[cfg(test)]
#[path = "python_tests.rs"]
mod tests;
