use serde::Deserialize;
use serde::Serialize;

/// A syntactically significant lexeme: one of the four construct keywords,
/// or a curly brace.
///
/// This is the closed set the scanner looks for; all other source text is
/// carried through as [`Token::Prose`](crate::Token::Prose).
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub enum Marker {
    CurlyBraceClose,
    CurlyBraceOpen,
    Fragment,
    Mutation,
    Namespace,
    Query,
}

impl Marker {
    /// The keyword markers. Braces are matched separately since they need
    /// no word-boundary check.
    pub(crate) const KEYWORDS: [Marker; 4] = [
        Marker::Fragment,
        Marker::Mutation,
        Marker::Namespace,
        Marker::Query,
    ];

    /// The exact source text this marker matches.
    pub fn as_str(&self) -> &'static str {
        match self {
            Marker::CurlyBraceClose => "}",
            Marker::CurlyBraceOpen => "{",
            Marker::Fragment => "fragment",
            Marker::Mutation => "mutation",
            Marker::Namespace => "namespace",
            Marker::Query => "query",
        }
    }

    /// Whether this marker introduces a document construct (as opposed to
    /// a namespace declaration or a bare brace).
    pub fn is_document_keyword(&self) -> bool {
        matches!(self, Marker::Fragment | Marker::Mutation | Marker::Query)
    }
}

impl std::fmt::Display for Marker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
