use crate::Marker;
use serde::Deserialize;
use serde::Serialize;

/// The construct keyword a [`DocumentRef`](crate::DocumentRef) was
/// extracted from.
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub enum DocumentKind {
    Fragment,
    Mutation,
    Query,
}

impl DocumentKind {
    /// The keyword that introduces this kind of document.
    pub fn as_str(&self) -> &'static str {
        match self {
            DocumentKind::Fragment => "fragment",
            DocumentKind::Mutation => "mutation",
            DocumentKind::Query => "query",
        }
    }

    /// Maps a document-keyword marker to its kind. Returns `None` for
    /// `namespace` and brace markers.
    pub fn from_marker(marker: Marker) -> Option<Self> {
        match marker {
            Marker::Fragment => Some(DocumentKind::Fragment),
            Marker::Mutation => Some(DocumentKind::Mutation),
            Marker::Query => Some(DocumentKind::Query),
            Marker::Namespace | Marker::CurlyBraceOpen | Marker::CurlyBraceClose => None,
        }
    }
}

impl std::fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
