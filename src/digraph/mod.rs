pub mod graph;
pub mod graph_trait;
pub mod traversal;

pub use graph::{DirectedGraph, Vocabulary, LabelMatcher, EdgePairIterator};
pub use graph_trait::{GraphAccess, GraphError};
pub use traversal::{children, children_labeled, head_of, subtree};
