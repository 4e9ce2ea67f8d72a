//! Loads GraphQL documents embedded in host-language source files.
//!
//! This crate is the file-facing side of document extraction: it reads
//! and decodes source files, strips host-language comments with a staged
//! best-effort chain (strict, then lenient, then not at all), runs the
//! [`gqlsift_extract`] extractor, merges all document bodies sharing a
//! namespace path into one blob, and parses each blob as an executable
//! GraphQL document tagged with its namespace.
//!
//! Plain `.graphql`/`.gql` files skip extraction entirely and parse whole
//! as a single top-level document.

pub mod comment_stripper;

mod document_loader;
mod file_reader;
mod loader_error;

pub use document_loader::NamespacedDocument;
pub use document_loader::load_file;
pub use document_loader::load_files;
pub use document_loader::load_source;
pub use file_reader::read_content;
pub use loader_error::LoaderError;
