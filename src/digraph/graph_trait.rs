//! The graph interface the traversal helpers are written against.

use thiserror::Error;

/// Errors that can occur during graph operations
#[derive(Debug, Error)]
pub enum GraphError {
    #[error("Node index out of bounds: {node} (node count: {count})")]
    NodeOutOfBounds { node: usize, count: usize },

    #[error("Unknown label id: {0}")]
    UnknownLabel(usize),
}

/// Read access to a labeled dependency graph.
///
/// Edges are `(node, label_id)` pairs; `get_label` resolves the id. Nodes
/// outside the graph yield `None` rather than an empty iterator.
pub trait GraphAccess {
    fn node_count(&self) -> usize;

    /// `(head, label_id)` pairs of edges ending at `node`
    fn incoming(&self, node: usize) -> Option<impl Iterator<Item = (usize, usize)>>;

    /// `(dependent, label_id)` pairs of edges leaving `node`
    fn outgoing(&self, node: usize) -> Option<impl Iterator<Item = (usize, usize)>>;

    fn get_label(&self, label_id: usize) -> Option<&str>;
}
