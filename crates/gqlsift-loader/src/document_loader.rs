//! Extracts, merges, and parses embedded documents from files.

use crate::LoaderError;
use crate::comment_stripper;
use crate::file_reader;
use gqlsift_extract::DocumentExtractor;
use graphql_parser::query::Document;
use indexmap::IndexMap;
use std::path::Path;

/// A parsed GraphQL document together with the dotted namespace path its
/// source constructs were declared under (empty for top-level content).
#[derive(Clone, Debug, PartialEq)]
pub struct NamespacedDocument {
    pub namespace: String,
    pub document: Document<'static, String>,
}

/// Extracts every embedded document in `source` and parses them grouped
/// by namespace.
///
/// All document bodies sharing a namespace path merge into one text blob
/// (in first-declaration order) that is parsed as a single executable
/// document, so fragments and the operations spreading them can live in
/// separate constructs within a namespace. The result preserves the
/// order in which namespaces first appear in the source.
pub fn load_source(source: &str) -> Result<Vec<NamespacedDocument>, LoaderError> {
    let preprocessed = comment_stripper::strip_comments_best_effort(source);
    let refs = DocumentExtractor::new(&preprocessed).extract_documents()?;

    let mut merged: IndexMap<String, String> = IndexMap::new();
    for document_ref in refs {
        let blob = merged.entry(document_ref.namespace).or_default();
        if !blob.is_empty() {
            blob.push(' ');
        }
        blob.push_str(&document_ref.document);
    }

    merged
        .into_iter()
        .map(|(namespace, blob)| {
            tracing::debug!(namespace = %namespace, "parsing merged namespace documents");
            let document = parse_document(&blob, &namespace)?;
            Ok(NamespacedDocument {
                namespace,
                document,
            })
        })
        .collect()
}

/// Loads every embedded document from one file.
///
/// `.graphql`/`.gql` files are parsed whole as a single top-level
/// document; any other extension goes through comment stripping and
/// embedded extraction.
pub fn load_file(file_path: impl AsRef<Path>) -> Result<Vec<NamespacedDocument>, LoaderError> {
    let file_path = file_path.as_ref();
    let content = file_reader::read_content(file_path)?;

    let is_graphql_file = matches!(
        file_path.extension().and_then(|ext| ext.to_str()),
        Some("graphql" | "gql")
    );
    if is_graphql_file {
        let document = parse_document(&content, "")?;
        return Ok(vec![NamespacedDocument {
            namespace: String::new(),
            document,
        }]);
    }

    load_source(&content)
}

/// Loads documents from several files, concatenating results in order.
/// The first failing file aborts the whole load.
pub fn load_files(
    file_paths: impl IntoIterator<Item = impl AsRef<Path>>,
) -> Result<Vec<NamespacedDocument>, LoaderError> {
    let mut documents = Vec::new();
    for file_path in file_paths {
        documents.extend(load_file(file_path)?);
    }
    Ok(documents)
}

/// Parses `text` as an executable document, tagging failures with the
/// namespace they belong to.
fn parse_document(text: &str, namespace: &str) -> Result<Document<'static, String>, LoaderError> {
    Ok(graphql_parser::query::parse_query::<String>(text)
        .map_err(|source| LoaderError::Parse {
            namespace: namespace.to_string(),
            source,
        })?
        .into_static())
}
