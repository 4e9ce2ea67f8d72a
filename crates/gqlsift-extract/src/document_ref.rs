use crate::DocumentKind;
use serde::Deserialize;
use serde::Serialize;

/// One document recovered by
/// [`DocumentExtractor::extract_documents`](crate::DocumentExtractor::extract_documents).
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct DocumentRef {
    /// Every enclosing namespace name joined by `.` in declaration order
    /// with no trailing separator, or the empty string for top-level
    /// documents.
    pub namespace: String,

    /// Which construct keyword introduced this document.
    pub kind: DocumentKind,

    /// The construct's full text, keyword through matching closing brace,
    /// with token texts joined by single spaces.
    pub document: String,
}
