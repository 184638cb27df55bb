//! Adjacency structure for file dependencies.
//!
//! Stores, for each [`FileId`], the ordered list of files it depends on.
//! Duplicate edges and self-loops are kept as declared. A petgraph view is
//! available for whole-graph checks.

use petgraph::algo::is_cyclic_directed;
use petgraph::graph::{DiGraph, NodeIndex};

use crate::registry::FileId;

/// A directed graph of file dependencies.
///
/// Edges point from the dependent file to its dependency. Every file in
/// `0..node_count()` has an entry; a file without declared dependencies has
/// an empty list.
///
/// # Example
///
/// ```rust
/// use include_order::graph::DependencyGraph;
/// use include_order::registry::FileId;
///
/// let a = FileId::from_index(0);
/// let b = FileId::from_index(1);
///
/// let mut graph = DependencyGraph::with_nodes(2);
/// graph.add_edge(b, a); // b depends on a
///
/// assert_eq!(graph.dependencies(b), &[a]);
/// assert!(graph.dependencies(a).is_empty());
/// assert_eq!(graph.edge_count(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DependencyGraph {
    /// Direct dependencies, indexed by file id
    adjacency: Vec<Vec<FileId>>,
    /// Total number of edges, duplicates included
    edge_count: usize,
}

impl DependencyGraph {
    /// Creates a new empty dependency graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a graph with an empty dependency list for each of `nodes` files.
    pub fn with_nodes(nodes: usize) -> Self {
        Self {
            adjacency: vec![Vec::new(); nodes],
            edge_count: 0,
        }
    }

    /// Appends `from -> to` to the dependency list of `from`.
    ///
    /// The graph grows to cover both endpoints if needed. Duplicate edges and
    /// self-loops are recorded as given.
    pub fn add_edge(&mut self, from: FileId, to: FileId) {
        let needed = from.index().max(to.index()) + 1;
        if self.adjacency.len() < needed {
            self.adjacency.resize_with(needed, Vec::new);
        }

        self.adjacency[from.index()].push(to);
        self.edge_count += 1;
    }

    /// Returns the direct dependencies of a file in declaration order.
    ///
    /// Files the graph has no entry for have no dependencies.
    pub fn dependencies(&self, id: FileId) -> &[FileId] {
        self.adjacency
            .get(id.index())
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Iterates over every edge as `(dependent, dependency)`.
    pub fn edges(&self) -> impl Iterator<Item = (FileId, FileId)> + '_ {
        self.adjacency.iter().enumerate().flat_map(|(idx, deps)| {
            let from = FileId::from_index(idx);
            deps.iter().map(move |&to| (from, to))
        })
    }

    /// Returns the number of files the graph covers.
    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Returns the number of edges, duplicates included.
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Checks if the graph covers no files.
    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    /// Converts the graph into a petgraph `DiGraph`.
    ///
    /// Node index `i` carries `FileId` `i`, so ids map directly onto
    /// `NodeIndex::new(id.index())`.
    pub fn to_petgraph(&self) -> DiGraph<FileId, ()> {
        let mut graph = DiGraph::with_capacity(self.node_count(), self.edge_count);
        for idx in 0..self.node_count() {
            graph.add_node(FileId::from_index(idx));
        }
        for (from, to) in self.edges() {
            graph.add_edge(
                NodeIndex::new(from.index()),
                NodeIndex::new(to.index()),
                (),
            );
        }
        graph
    }

    /// Checks if the graph contains a cycle anywhere.
    ///
    /// Unlike [`validate_order`](crate::graph::validate_order) this looks at
    /// the whole graph, not only at what candidates can reach.
    ///
    /// # Example
    ///
    /// ```rust
    /// use include_order::graph::DependencyGraph;
    /// use include_order::registry::FileId;
    ///
    /// let a = FileId::from_index(0);
    /// let b = FileId::from_index(1);
    ///
    /// let mut graph = DependencyGraph::with_nodes(2);
    /// graph.add_edge(a, b);
    /// assert!(!graph.has_cycles());
    ///
    /// graph.add_edge(b, a);
    /// assert!(graph.has_cycles());
    /// ```
    pub fn has_cycles(&self) -> bool {
        is_cyclic_directed(&self.to_petgraph())
    }
}
