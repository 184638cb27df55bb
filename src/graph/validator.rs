//! Order feasibility check over a [`DependencyGraph`].
//!
//! An ordering of files can respect every declared dependency exactly when
//! no cycle is reachable from the files it names. The check is a depth-first
//! walk from each candidate that marks files `OnStack` while their
//! dependencies are being explored and `Visited` once they are done. Meeting
//! an `OnStack` file again means the path has looped back on itself.
//!
//! The walk keeps its own stack of frames rather than recursing, so very
//! long include chains cannot overflow the thread stack.

use super::DependencyGraph;
use crate::registry::{FileId, FileRegistry};

/// Errors that abort validation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// A candidate filename is not a known file.
    #[error("Unknown file in candidate ordering: {0}")]
    UnknownName(String),
}

/// Traversal state of a single file.
///
/// Moves `Unvisited -> OnStack -> Visited` and never back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum VisitState {
    Unvisited,
    OnStack,
    Visited,
}

/// A file whose dependencies are being explored, and the position of the
/// next dependency to look at.
#[derive(Debug, Clone, Copy)]
struct Frame {
    node: FileId,
    next: usize,
}

/// Depth-first cycle search sharing its visit state across roots.
struct CycleSearch<'g> {
    graph: &'g DependencyGraph,
    state: Vec<VisitState>,
    stack: Vec<Frame>,
}

impl<'g> CycleSearch<'g> {
    fn new(graph: &'g DependencyGraph, nodes: usize) -> Self {
        Self {
            graph,
            state: vec![VisitState::Unvisited; nodes.max(graph.node_count())],
            stack: Vec::new(),
        }
    }

    fn enter(&mut self, node: FileId) {
        self.state[node.index()] = VisitState::OnStack;
        self.stack.push(Frame { node, next: 0 });
    }

    /// Explores everything reachable from `root` that has not been explored
    /// yet. Returns `true` as soon as a cycle closes.
    fn finds_cycle_from(&mut self, root: FileId) -> bool {
        if self.state[root.index()] == VisitState::Visited {
            return false;
        }

        let graph = self.graph;
        self.enter(root);

        while let Some(frame) = self.stack.last_mut() {
            let node = frame.node;
            match graph.dependencies(node).get(frame.next) {
                Some(&dependency) => {
                    frame.next += 1;
                    match self.state[dependency.index()] {
                        VisitState::OnStack => return true,
                        VisitState::Unvisited => self.enter(dependency),
                        VisitState::Visited => {}
                    }
                }
                None => {
                    self.stack.pop();
                    self.state[node.index()] = VisitState::Visited;
                }
            }
        }

        false
    }
}

/// Checks whether `candidates` can be ordered so every file comes after the
/// files it depends on.
///
/// Every candidate name is resolved before traversal starts. The walk then
/// covers the full transitive dependency set of each candidate, so a cycle
/// among files that are not themselves listed still makes the ordering
/// infeasible. Files already explored from an earlier candidate are not
/// explored again.
///
/// Returns `Ok(true)` when no cycle is reachable, `Ok(false)` when one is.
/// An empty candidate list is always feasible.
///
/// # Errors
///
/// [`ValidationError::UnknownName`] if a candidate is not registered.
///
/// # Example
///
/// ```rust
/// use include_order::graph::{build_graph, validate_order};
/// use include_order::registry::FileRegistry;
/// use include_order::source::MemorySource;
///
/// let source = MemorySource::new()
///     .with_file("A.h", "B.h")
///     .with_file("B.h", "A.h");
/// let registry = FileRegistry::from_names(["A.h", "B.h"]).unwrap();
/// let graph = build_graph(&registry, &source).unwrap();
///
/// assert!(!validate_order(&graph, &registry, &["A.h"]).unwrap());
/// assert!(validate_order(&graph, &registry, &[] as &[&str]).unwrap());
/// ```
pub fn validate_order<S>(
    graph: &DependencyGraph,
    registry: &FileRegistry,
    candidates: &[S],
) -> Result<bool, ValidationError>
where
    S: AsRef<str>,
{
    let roots = candidates
        .iter()
        .map(|name| {
            let name = name.as_ref();
            registry
                .id_of(name)
                .map_err(|_| ValidationError::UnknownName(name.to_string()))
        })
        .collect::<Result<Vec<_>, _>>()?;

    let mut search = CycleSearch::new(graph, registry.len());
    for root in roots {
        if search.finds_cycle_from(root) {
            tracing::warn!(
                root = registry.name_of(root).unwrap_or("?"),
                "dependency cycle reachable from candidate"
            );
            return Ok(false);
        }
    }

    Ok(true)
}
