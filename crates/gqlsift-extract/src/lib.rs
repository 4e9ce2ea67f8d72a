//! Extraction of GraphQL documents embedded as string literals in
//! host-language source files.
//!
//! Host projects often declare their operations inline, grouped under a
//! `namespace NAME { ... }` convention:
//!
//! ```text
//! const ops = gql`
//!   namespace Accounts {
//!     query CurrentUser { me { id name } }
//!     fragment UserFields { id name email }
//!   }
//! `;
//! ```
//!
//! This crate recovers those documents without a grammar for the host
//! language: a [lexeme scanner](lexeme_scanner) and [tokenizer](chunker)
//! reduce the source to markers and prose, a [brace balancer](brace_balancer)
//! delimits each construct, and [`DocumentExtractor`] walks the token
//! stream once to produce either a flat list of namespace-qualified
//! [`DocumentRef`]s or a [`NamespaceNode`] tree.
//!
//! Everything here is pure and synchronous: the extractor consumes
//! already-read (and ideally comment-stripped) text and performs no I/O.

pub mod brace_balancer;
pub mod chunker;
pub mod lexeme_scanner;

mod document_extractor;
mod document_kind;
mod document_ref;
mod extract_error;
mod marker;
mod namespace_node;
mod token;

pub use document_extractor::DocumentExtractor;
pub use document_kind::DocumentKind;
pub use document_ref::DocumentRef;
pub use extract_error::ExtractError;
pub use marker::Marker;
pub use namespace_node::NamespaceNode;
pub use token::Token;

#[cfg(test)]
mod tests;
