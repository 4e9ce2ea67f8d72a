/// A structural failure while extracting documents.
///
/// Every variant is fatal for the extraction call that raised it: the
/// extractor never returns partial results, since a mismatched brace can
/// place every following document under the wrong namespace.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum ExtractError {
    /// A block opened under `construct` reached end of input while
    /// `depth` braces were still unclosed.
    #[error("braces mismatch: `{construct}` block has {depth} unclosed `{{`")]
    BraceMismatch { construct: String, depth: usize },

    /// A `namespace` keyword was not followed by a usable name token.
    #[error("`namespace` keyword is not followed by a name")]
    MalformedNamespace,

    /// A construct keyword or namespace name was never followed by a
    /// `{ ... }` block.
    #[error("`{construct}` declaration has no `{{ ... }}` block")]
    MissingBlock { construct: String },
}
