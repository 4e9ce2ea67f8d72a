//! Best-effort removal of host-language comments before extraction.
//!
//! Embedded documents live inside string literals, so a `//` inside a
//! template string (think of a URL) must survive stripping. Strict mode
//! therefore tracks string context, and fails when that context cannot be
//! established; [`strip_comments_best_effort`] then retries with string
//! tracking disabled, and finally gives up and returns the input
//! untouched. The extractor downstream only requires "text with comments
//! best-effort removed", so every stage of the chain is acceptable input.

use memchr::memchr;
use memchr::memmem;
use std::borrow::Cow;

/// How aggressively [`strip_comments`] interprets the source.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum StripMode {
    /// Track `'`, `"`, and backtick string literals (with `\` escapes;
    /// only backtick strings may span lines) and strip comments outside
    /// them. Fails on unterminated strings and block comments.
    Strict,

    /// Ignore string context entirely and strip anything that looks like
    /// a comment. Fails only on an unterminated block comment.
    Lenient,
}

/// A failure to strip comments under a given [`StripMode`].
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum CommentStripError {
    /// A `/*` at `offset` with no matching `*/` before end of input.
    #[error("unterminated block comment at byte {offset}")]
    UnterminatedBlockComment { offset: usize },

    /// A string literal opened at `offset` never closes. Quoted strings
    /// must close before the next newline; template strings before end
    /// of input.
    #[error("unterminated string literal at byte {offset}")]
    UnterminatedString { offset: usize },
}

/// Strips `// ...` and `/* ... */` comments from `source`.
///
/// Line comments are removed up to (not including) the newline; block
/// comments are replaced by a single space so adjacent words never fuse.
pub fn strip_comments(source: &str, mode: StripMode) -> Result<String, CommentStripError> {
    let bytes = source.as_bytes();
    let mut output = String::with_capacity(source.len());
    let mut pos = 0;
    // Everything before this offset has already been copied to `output`.
    let mut copied = 0;

    while pos < bytes.len() {
        match bytes[pos] {
            b'/' if bytes.get(pos + 1) == Some(&b'/') => {
                output.push_str(&source[copied..pos]);
                pos = match memchr(b'\n', &bytes[pos..]) {
                    Some(newline) => pos + newline,
                    None => bytes.len(),
                };
                copied = pos;
            }
            b'/' if bytes.get(pos + 1) == Some(&b'*') => {
                output.push_str(&source[copied..pos]);
                let close = memmem::find(&bytes[pos + 2..], b"*/")
                    .ok_or(CommentStripError::UnterminatedBlockComment { offset: pos })?;
                output.push(' ');
                pos += 2 + close + 2;
                copied = pos;
            }
            quote @ (b'\'' | b'"' | b'`') if mode == StripMode::Strict => {
                pos = string_end(bytes, pos, quote)?;
            }
            _ => pos += 1,
        }
    }
    output.push_str(&source[copied..]);

    Ok(output)
}

/// Strips comments with the strict strategy, falling back to lenient and
/// finally to the untouched input. Never fails.
pub fn strip_comments_best_effort(source: &str) -> Cow<'_, str> {
    match strip_comments(source, StripMode::Strict) {
        Ok(stripped) => Cow::Owned(stripped),
        Err(err) => {
            tracing::debug!(error = %err, "strict comment stripping failed; retrying lenient");
            match strip_comments(source, StripMode::Lenient) {
                Ok(stripped) => Cow::Owned(stripped),
                Err(err) => {
                    tracing::debug!(error = %err, "lenient comment stripping failed; keeping text as-is");
                    Cow::Borrowed(source)
                }
            }
        }
    }
}

/// Scans past a string literal whose opening `quote` sits at `start`,
/// honoring `\` escapes. Returns the offset just past the closing quote.
fn string_end(bytes: &[u8], start: usize, quote: u8) -> Result<usize, CommentStripError> {
    let mut pos = start + 1;
    while pos < bytes.len() {
        match bytes[pos] {
            b'\\' => pos += 2,
            b'\n' if quote != b'`' => {
                return Err(CommentStripError::UnterminatedString { offset: start });
            }
            byte if byte == quote => return Ok(pos + 1),
            _ => pos += 1,
        }
    }
    Err(CommentStripError::UnterminatedString { offset: start })
}
