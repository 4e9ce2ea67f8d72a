use serde::Deserialize;
use serde::Serialize;

/// A node in the namespace tree produced by
/// [`DocumentExtractor::extract_tree`](crate::DocumentExtractor::extract_tree).
///
/// The root is a synthetic node with an empty `namespace` holding all
/// top-level (non-namespaced) documents. The tree is built top-down in
/// one pass and never mutated after the extraction call returns.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct NamespaceNode {
    /// Full dotted path of this node (empty at the root).
    pub namespace: String,

    /// Bodies of documents declared directly inside this namespace, in
    /// declaration order.
    pub documents: Vec<String>,

    /// Child namespaces in declaration order. Invariant: each child's
    /// `namespace` equals this node's path extended by `.` and the
    /// child's local name (the local name alone at the root).
    pub children: Vec<NamespaceNode>,
}

impl NamespaceNode {
    /// Creates an empty node with the given full path.
    pub fn new(namespace: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            documents: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Flattens the tree depth-first, yielding `(namespace, document)`
    /// pairs: each node's own documents in declaration order, then its
    /// children's. The relative order of documents living in different
    /// namespaces is not preserved with respect to the source.
    pub fn flatten(&self) -> Vec<(String, String)> {
        let mut pairs = Vec::new();
        self.flatten_into(&mut pairs);
        pairs
    }

    fn flatten_into(&self, pairs: &mut Vec<(String, String)>) {
        for document in &self.documents {
            pairs.push((self.namespace.clone(), document.clone()));
        }
        for child in &self.children {
            child.flatten_into(pairs);
        }
    }
}
