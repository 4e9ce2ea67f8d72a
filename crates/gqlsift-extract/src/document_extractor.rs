//! The shared traversal behind flat and tree extraction.

use crate::DocumentKind;
use crate::DocumentRef;
use crate::ExtractError;
use crate::Marker;
use crate::NamespaceNode;
use crate::Token;
use crate::brace_balancer;
use crate::chunker;

/// Extracts embedded documents from one preprocessed source buffer.
///
/// Construction tokenizes the text once;
/// [`extract_documents`](Self::extract_documents) and
/// [`extract_tree`](Self::extract_tree) then walk the same token stream.
/// The extractor holds no other state, so repeated extraction calls over
/// the same text yield identical results.
#[derive(Clone, Debug)]
pub struct DocumentExtractor {
    tokens: Vec<Token>,
}

impl DocumentExtractor {
    /// Tokenizes `source`. Comment stripping is the caller's concern; the
    /// extractor only assumes "text with comments best-effort removed".
    pub fn new(source: &str) -> Self {
        Self {
            tokens: chunker::chunk(source),
        }
    }

    /// The token stream this extractor walks.
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// Extracts every document as a flat list of namespace-qualified
    /// records, depth-first and pre-order by declaration site: documents
    /// of a nested namespace appear at the position the namespace
    /// declaration occupies relative to its sibling constructs.
    pub fn extract_documents(&self) -> Result<Vec<DocumentRef>, ExtractError> {
        let mut documents = Vec::new();
        collect_documents(&self.tokens, "", &mut documents)?;
        Ok(documents)
    }

    /// Extracts the namespace tree. The returned root is a synthetic node
    /// with an empty path holding all top-level documents.
    pub fn extract_tree(&self) -> Result<NamespaceNode, ExtractError> {
        let mut root = NamespaceNode::new("");
        collect_tree(&self.tokens, &mut root)?;
        Ok(root)
    }
}

/// Walks `tokens`, appending one [`DocumentRef`] per document construct
/// and recursing into each namespace block with the path extended.
fn collect_documents(
    tokens: &[Token],
    namespace: &str,
    documents: &mut Vec<DocumentRef>,
) -> Result<(), ExtractError> {
    let mut index = 0;
    while index < tokens.len() {
        match &tokens[index] {
            Token::Marker(Marker::Namespace) => {
                let (name, block) = namespace_block(tokens, index)?;
                let path = join_path(namespace, name);
                collect_documents(block, &path, documents)?;
                index += 1 + block.len();
            }
            Token::Marker(marker) => {
                if let Some(kind) = DocumentKind::from_marker(*marker) {
                    let block = brace_balancer::balance_braces(&tokens[index..], marker.as_str())?;
                    documents.push(DocumentRef {
                        namespace: namespace.to_string(),
                        kind,
                        document: join_tokens(block),
                    });
                    index += block.len();
                } else {
                    index += 1;
                }
            }
            Token::Prose(_) => index += 1,
        }
    }
    Ok(())
}

/// Same traversal as [`collect_documents`], but attaches a child node per
/// namespace and appends untyped document bodies to the current node.
fn collect_tree(tokens: &[Token], node: &mut NamespaceNode) -> Result<(), ExtractError> {
    let mut index = 0;
    while index < tokens.len() {
        match &tokens[index] {
            Token::Marker(Marker::Namespace) => {
                let (name, block) = namespace_block(tokens, index)?;
                let mut child = NamespaceNode::new(join_path(&node.namespace, name));
                collect_tree(block, &mut child)?;
                node.children.push(child);
                index += 1 + block.len();
            }
            Token::Marker(marker) => {
                if marker.is_document_keyword() {
                    let block = brace_balancer::balance_braces(&tokens[index..], marker.as_str())?;
                    node.documents.push(join_tokens(block));
                    index += block.len();
                } else {
                    index += 1;
                }
            }
            Token::Prose(_) => index += 1,
        }
    }
    Ok(())
}

/// Reads the local name and balanced block of a namespace declaration
/// whose `namespace` keyword sits at `keyword_index`.
///
/// The returned block starts at the name token and runs through the
/// matching closing brace, so the traversal resumes at
/// `keyword_index + 1 + block.len()`.
fn namespace_block(
    tokens: &[Token],
    keyword_index: usize,
) -> Result<(&str, &[Token]), ExtractError> {
    let name = match tokens.get(keyword_index + 1) {
        Some(Token::Prose(name)) => name.as_str(),
        _ => return Err(ExtractError::MalformedNamespace),
    };
    let block = brace_balancer::balance_braces(&tokens[keyword_index + 1..], name)?;
    Ok((name, block))
}

/// Extends a dotted namespace path with a local name.
fn join_path(parent: &str, local: &str) -> String {
    if parent.is_empty() {
        local.to_string()
    } else {
        format!("{parent}.{local}")
    }
}

/// Joins token texts with single spaces.
fn join_tokens(tokens: &[Token]) -> String {
    let mut joined = String::new();
    for token in tokens {
        if !joined.is_empty() {
            joined.push(' ');
        }
        joined.push_str(token.text());
    }
    joined
}
