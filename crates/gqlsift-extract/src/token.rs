use crate::Marker;
use serde::Deserialize;
use serde::Serialize;

/// One element of the token stream produced by [`chunker::chunk`].
///
/// Tokens are emitted in source order and are immutable once created; a
/// token stream is owned by a single extraction call and never shared
/// across calls.
///
/// [`chunker::chunk`]: crate::chunker::chunk
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub enum Token {
    /// A significant keyword or brace.
    Marker(Marker),

    /// Host text between markers: trimmed, with internal runs of
    /// whitespace collapsed to a single space. Never empty.
    Prose(String),
}

impl Token {
    /// The text of this token (whitespace-normalized for prose).
    pub fn text(&self) -> &str {
        match self {
            Token::Marker(marker) => marker.as_str(),
            Token::Prose(text) => text.as_str(),
        }
    }

    /// The prose text, or `None` for markers.
    pub fn prose(&self) -> Option<&str> {
        match self {
            Token::Prose(text) => Some(text.as_str()),
            Token::Marker(_) => None,
        }
    }

    /// Whether this token is the given marker.
    pub fn is_marker(&self, marker: Marker) -> bool {
        matches!(self, Token::Marker(m) if *m == marker)
    }
}
