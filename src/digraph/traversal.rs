//! Tree-shaped traversals over dependency graphs.
//!
//! Dependency parses are trees, but the helpers here only assume a graph and
//! keep a visited set, so a malformed parse with a cycle still terminates.

use std::collections::HashSet;
use crate::digraph::graph::LabelMatcher;
use crate::digraph::graph_trait::{GraphAccess, GraphError};

/// Direct dependents of `node`, ascending by node index
pub fn children<G: GraphAccess>(graph: &G, node: usize) -> Vec<usize> {
    let mut result: Vec<usize> = match graph.outgoing(node) {
        Some(edges) => edges.map(|(target, _)| target).collect(),
        None => Vec::new(),
    };
    result.sort_unstable();
    result.dedup();
    result
}

/// Direct dependents of `node` attached with a label accepted by `matcher`,
/// ascending by node index
pub fn children_labeled<G: GraphAccess>(graph: &G, node: usize, matcher: &LabelMatcher) -> Vec<usize> {
    let mut result: Vec<usize> = match graph.outgoing(node) {
        Some(edges) => edges
            .filter(|&(_, label_id)| {
                graph
                    .get_label(label_id)
                    .map(|label| matcher.matches_label(label))
                    .unwrap_or(false)
            })
            .map(|(target, _)| target)
            .collect(),
        None => Vec::new(),
    };
    result.sort_unstable();
    result.dedup();
    result
}

/// The head of `node` and the label of the attaching edge
pub fn head_of<G: GraphAccess>(graph: &G, node: usize) -> Result<Option<(usize, &str)>, GraphError> {
    let mut edges = match graph.incoming(node) {
        Some(edges) => edges,
        None => return Err(GraphError::NodeOutOfBounds { node, count: graph.node_count() }),
    };
    match edges.next() {
        Some((source, label_id)) => {
            let label = graph.get_label(label_id).ok_or(GraphError::UnknownLabel(label_id))?;
            Ok(Some((source, label)))
        }
        None => Ok(None),
    }
}

/// `node` and all of its descendants, ascending by node index
pub fn subtree<G: GraphAccess>(graph: &G, node: usize) -> Vec<usize> {
    if node >= graph.node_count() {
        return Vec::new();
    }

    let mut visited = HashSet::new();
    let mut stack = vec![node];
    while let Some(current) = stack.pop() {
        if !visited.insert(current) {
            continue;
        }
        if let Some(edges) = graph.outgoing(current) {
            for (target, _) in edges {
                if !visited.contains(&target) {
                    stack.push(target);
                }
            }
        }
    }

    let mut result: Vec<usize> = visited.into_iter().collect();
    result.sort_unstable();
    result
}
