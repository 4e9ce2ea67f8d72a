use gqlsift_extract::ExtractError;
use std::path::PathBuf;

/// Failures while loading and parsing embedded documents.
#[derive(Debug, thiserror::Error)]
pub enum LoaderError {
    /// Structural extraction failure (brace mismatch, malformed
    /// namespace); fatal for the file being loaded.
    #[error(transparent)]
    Extract(#[from] ExtractError),

    /// The file's bytes are not valid UTF-8.
    #[error("failed to decode `{path}` as UTF-8: {source}")]
    FileDecode {
        path: PathBuf,
        #[source]
        source: std::string::FromUtf8Error,
    },

    /// The path does not exist or is not a regular file.
    #[error("document file `{path}` does not exist")]
    FileNotFound { path: PathBuf },

    /// Reading the file failed.
    #[error("failed to read `{path}`: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The merged document text for a namespace is not a valid GraphQL
    /// executable document. `namespace` is empty for top-level documents
    /// and for whole-file `.graphql` sources.
    #[error("failed to parse documents in namespace `{namespace}`: {source}")]
    Parse {
        namespace: String,
        #[source]
        source: graphql_parser::query::ParseError,
    },
}
