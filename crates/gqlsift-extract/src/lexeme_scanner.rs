//! Leftmost-lexeme search over raw source text.

use crate::Marker;

/// A single lexeme occurrence found by [`next_lexeme`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct LexemeMatch {
    /// Which lexeme matched.
    pub marker: Marker,

    /// Byte offset of the first byte of the match.
    pub start: usize,

    /// Byte offset one past the last byte of the match.
    pub end: usize,
}

/// Finds the leftmost occurrence of any marker lexeme in `text`, or `None`
/// if no lexeme occurs.
///
/// Keyword lexemes only match on word boundaries: neither `subquery` nor
/// `queryable` contains a `query` lexeme. Braces match anywhere. Pure
/// function of its input.
pub fn next_lexeme(text: &str) -> Option<LexemeMatch> {
    let bytes = text.as_bytes();
    let mut pos = 0;

    while pos < bytes.len() {
        match bytes[pos] {
            b'{' => {
                return Some(LexemeMatch {
                    marker: Marker::CurlyBraceOpen,
                    start: pos,
                    end: pos + 1,
                });
            }
            b'}' => {
                return Some(LexemeMatch {
                    marker: Marker::CurlyBraceClose,
                    start: pos,
                    end: pos + 1,
                });
            }
            // First bytes of the keyword lexemes.
            b'f' | b'm' | b'n' | b'q' => {
                if let Some(found) = keyword_at(bytes, pos) {
                    return Some(found);
                }
                pos += 1;
            }
            _ => pos += 1,
        }
    }

    None
}

/// Checks whether a keyword lexeme starts at `pos` with word boundaries
/// on both sides.
fn keyword_at(bytes: &[u8], pos: usize) -> Option<LexemeMatch> {
    if pos > 0 && is_word_byte(bytes[pos - 1]) {
        return None;
    }

    for marker in Marker::KEYWORDS {
        let keyword = marker.as_str().as_bytes();
        let end = pos + keyword.len();
        if bytes.len() >= end
            && &bytes[pos..end] == keyword
            && (end == bytes.len() || !is_word_byte(bytes[end]))
        {
            return Some(LexemeMatch {
                marker,
                start: pos,
                end,
            });
        }
    }

    None
}

/// Word characters for boundary purposes: ASCII alphanumerics and `_`.
fn is_word_byte(byte: u8) -> bool {
    byte.is_ascii_alphanumeric() || byte == b'_'
}
