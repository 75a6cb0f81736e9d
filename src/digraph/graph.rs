use std::collections::HashMap;
use std::sync::Arc;
use anyhow::{Result, anyhow};
use crate::digraph::graph_trait::GraphError;

/// Vocabulary for dependency labels
#[derive(Debug, Clone)]
pub struct Vocabulary {
    id_to_term: Vec<String>,
    term_to_id: HashMap<String, usize>,
}

impl Vocabulary {
    pub fn new() -> Self {
        Self {
            id_to_term: Vec::new(),
            term_to_id: HashMap::new(),
        }
    }

    /// Get or create ID for a term
    pub fn get_or_create_id(&mut self, term: &str) -> usize {
        if let Some(&id) = self.term_to_id.get(term) {
            id
        } else {
            let id = self.id_to_term.len();
            self.id_to_term.push(term.to_string());
            self.term_to_id.insert(term.to_string(), id);
            id
        }
    }

    /// Get term for an ID
    pub fn get_term(&self, id: usize) -> Option<&str> {
        self.id_to_term.get(id).map(|s| s.as_str())
    }
}

impl Default for Vocabulary {
    fn default() -> Self {
        Self::new()
    }
}

/// Matcher for dependency labels.
///
/// Parsers disagree on label spelling (`nsubjpass` vs `nsubj:pass`), so the
/// rule tables in the engine are expressed as matchers rather than raw strings.
#[derive(Debug, Clone)]
pub enum LabelMatcher {
    Exact(String),
    AnyOf(Vec<String>),
    Regex { pattern: String, regex: Arc<regex::Regex> },
}

impl LabelMatcher {
    /// Create an exact label matcher
    pub fn exact(label: impl Into<String>) -> Self {
        Self::Exact(label.into())
    }

    /// Create a matcher accepting any of the given labels
    pub fn any_of(labels: &[&str]) -> Self {
        Self::AnyOf(labels.iter().map(|l| l.to_string()).collect())
    }

    /// Create a regex label matcher (pre-compiles the regex)
    pub fn regex(pattern: impl Into<String>) -> Result<Self> {
        let pattern = pattern.into();
        let regex = regex::Regex::new(&pattern)
            .map_err(|e| anyhow!("Invalid label pattern '{}': {}", pattern, e))?;
        Ok(Self::Regex { pattern, regex: Arc::new(regex) })
    }

    /// Check if a label string matches this matcher
    pub fn matches_label(&self, label: &str) -> bool {
        match self {
            LabelMatcher::Exact(string) => label == string,
            LabelMatcher::AnyOf(labels) => labels.iter().any(|l| l == label),
            LabelMatcher::Regex { regex, .. } => regex.is_match(label),
        }
    }
}

/// Directed graph over the tokens of one parsed document.
///
/// Edges run from head to dependent. Incoming and outgoing adjacency are kept
/// as flattened `(node, label_id)` pairs, in insertion order.
#[derive(Debug, Clone)]
pub struct DirectedGraph {
    /// Incoming edges for each node as flattened (source_node, label_id) pairs
    incoming: Vec<Vec<usize>>,
    /// Outgoing edges for each node as flattened (target_node, label_id) pairs
    outgoing: Vec<Vec<usize>>,
    vocabulary: Vocabulary,
}

impl DirectedGraph {
    pub fn new() -> Self {
        Self {
            incoming: Vec::new(),
            outgoing: Vec::new(),
            vocabulary: Vocabulary::new(),
        }
    }

    /// Create a graph with `node_count` nodes and no edges
    pub fn with_nodes(node_count: usize) -> Self {
        let mut graph = Self::new();
        if node_count > 0 {
            graph.add_node(node_count - 1);
        }
        graph
    }

    /// Add a node to the graph
    pub fn add_node(&mut self, node_id: usize) {
        while self.incoming.len() <= node_id {
            self.incoming.push(Vec::new());
        }
        while self.outgoing.len() <= node_id {
            self.outgoing.push(Vec::new());
        }
    }

    /// Add an edge to the graph, growing the node set as needed
    pub fn add_edge(&mut self, from: usize, to: usize, label: &str) {
        self.add_node(from);
        self.add_node(to);

        let label_id = self.vocabulary.get_or_create_id(label);

        self.outgoing[from].push(to);
        self.outgoing[from].push(label_id);

        self.incoming[to].push(from);
        self.incoming[to].push(label_id);
    }

    /// Add an edge between two existing nodes
    pub fn add_bounded_edge(&mut self, from: usize, to: usize, label: &str) -> Result<(), GraphError> {
        let count = self.node_count();
        for node in [from, to] {
            if node >= count {
                return Err(GraphError::NodeOutOfBounds { node, count });
            }
        }
        self.add_edge(from, to, label);
        Ok(())
    }

    pub fn node_count(&self) -> usize {
        self.incoming.len().max(self.outgoing.len())
    }
}

impl Default for DirectedGraph {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// GraphAccess trait implementation for DirectedGraph
// ============================================================================

use crate::digraph::graph_trait::GraphAccess;

/// Iterator over edges stored as flattened (node, label_id) pairs.
pub struct EdgePairIterator<'a> {
    edges: &'a [usize],
    pos: usize,
}

impl<'a> EdgePairIterator<'a> {
    fn new(edges: &'a [usize]) -> Self {
        Self { edges, pos: 0 }
    }
}

impl<'a> Iterator for EdgePairIterator<'a> {
    type Item = (usize, usize);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.pos + 1 < self.edges.len() {
            let target = self.edges[self.pos];
            let label_id = self.edges[self.pos + 1];
            self.pos += 2;
            Some((target, label_id))
        } else {
            None
        }
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (self.edges.len() - self.pos) / 2;
        (remaining, Some(remaining))
    }
}

impl<'a> ExactSizeIterator for EdgePairIterator<'a> {}

impl GraphAccess for DirectedGraph {
    #[inline]
    fn node_count(&self) -> usize {
        DirectedGraph::node_count(self)
    }

    #[inline]
    fn incoming(&self, node: usize) -> Option<impl Iterator<Item = (usize, usize)>> {
        self.incoming.get(node).map(|edges| EdgePairIterator::new(edges))
    }

    #[inline]
    fn outgoing(&self, node: usize) -> Option<impl Iterator<Item = (usize, usize)>> {
        self.outgoing.get(node).map(|edges| EdgePairIterator::new(edges))
    }

    #[inline]
    fn get_label(&self, label_id: usize) -> Option<&str> {
        self.vocabulary.get_term(label_id)
    }
}
