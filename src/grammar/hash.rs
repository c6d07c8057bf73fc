use crate::error::{NoticeGuardError, Result};
use crate::extractor::Comment;

use super::{CommentGrammar, LineIndex, is_line_start, line_end};

/// `#` line comments, as used by shell scripts and Ruby.
///
/// Quoted strings are skipped. Shell only treats `#` as a comment when it
/// starts a word, so `$#` and `${#var}` stay code. Ruby additionally has
/// `=begin`/`=end` blocks anchored at column zero.
#[derive(Debug, Clone, Copy)]
pub struct HashGrammar {
    name: &'static str,
    word_start_only: bool,
    single_quote_escapes: bool,
    block: Option<(&'static str, &'static str)>,
}

impl HashGrammar {
    #[must_use]
    pub const fn shell() -> Self {
        Self {
            name: "Shell",
            word_start_only: true,
            single_quote_escapes: false,
            block: None,
        }
    }

    #[must_use]
    pub const fn ruby() -> Self {
        Self {
            name: "Ruby",
            word_start_only: false,
            single_quote_escapes: true,
            block: Some(("=begin", "=end")),
        }
    }

    fn starts_comment(&self, bytes: &[u8], at: usize) -> bool {
        if !self.word_start_only || at == 0 {
            return true;
        }
        matches!(
            bytes[at - 1],
            b' ' | b'\t' | b'\n' | b'\r' | b';' | b'&' | b'|' | b'(' | b')'
        )
    }

    /// Skip a quoted string starting at `at`, returning the index just past
    /// the closing quote. An unclosed string ends at the newline.
    fn skip_quoted(&self, bytes: &[u8], at: usize) -> usize {
        let quote = bytes[at];
        let escapes = quote == b'"' || self.single_quote_escapes;
        let mut i = at + 1;
        while i < bytes.len() {
            match bytes[i] {
                b'\\' if escapes => i += 2,
                b'\n' => return i,
                b if b == quote => return i + 1,
                _ => i += 1,
            }
        }
        bytes.len()
    }

    /// Read a block comment starting at `at`, returning the comment text and
    /// the index just past the closing marker's line.
    fn read_block<'s>(
        source: &'s str,
        at: usize,
        (start, end): (&str, &str),
        line: usize,
    ) -> Result<(&'s str, usize)> {
        let bytes = source.as_bytes();
        let body_start = at + start.len();
        let mut cursor = line_end(bytes, at);

        while cursor < bytes.len() {
            let next_line = cursor + 1;
            if source[next_line..].starts_with(end) {
                let text = &source[body_start..cursor];
                return Ok((text, line_end(bytes, next_line)));
            }
            cursor = line_end(bytes, next_line);
        }

        Err(NoticeGuardError::UnterminatedComment { line })
    }
}

impl CommentGrammar for HashGrammar {
    fn name(&self) -> &'static str {
        self.name
    }

    fn extract(&self, source: &str) -> Result<Vec<Comment>> {
        let bytes = source.as_bytes();
        let lines = LineIndex::new(source);
        let mut comments = Vec::new();
        let mut i = 0;

        while i < bytes.len() {
            if let Some(block) = self.block
                && is_line_start(bytes, i)
                && source[i..].starts_with(block.0)
            {
                let line = lines.line_of(i);
                let (text, next) = Self::read_block(source, i, block, line)?;
                comments.push(Comment::multi_line(text, line));
                i = next;
                continue;
            }

            match bytes[i] {
                b'\\' => i += 2,
                b'\'' | b'"' => i = self.skip_quoted(bytes, i),
                b'#' if self.starts_comment(bytes, i) => {
                    let end = line_end(bytes, i);
                    comments.push(Comment::single_line(&source[i + 1..end], lines.line_of(i)));
                    i = end;
                }
                _ => i += 1,
            }
        }

        Ok(comments)
    }
}

#[cfg(test)]
#[path = "hash_tests.rs"]
mod tests;
