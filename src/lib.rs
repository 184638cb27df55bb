//! include-order - validates header include orderings against declared dependencies
//!
//! Each known file lists, as whitespace-separated tokens, the files it
//! depends on. A candidate ordering is achievable when no dependency cycle
//! is reachable from the files it names.
//!
//! The pipeline is: [`registry::FileRegistry`] from the known-file listing,
//! then [`graph::build_graph`], then [`graph::validate_order`].
//! [`check_order`] runs all three with fresh state on every call.
//!
//! # Example
//!
//! ```rust
//! use include_order::check_order;
//! use include_order::source::MemorySource;
//!
//! let source = MemorySource::new()
//!     .with_file("A.h", "")
//!     .with_file("B.h", "A.h")
//!     .with_file("C.h", "B.h");
//!
//! let verdict = check_order(&source, &["C.h"]).unwrap();
//! assert!(verdict.correct);
//! ```

pub mod graph;
pub mod registry;
pub mod report;
pub mod source;

use std::io;

use graph::{BuildError, DependencyGraph, ValidationError};
use registry::{FileRegistry, RegistryError};
use report::Verdict;
use source::FileSource;

/// Errors that abort a run.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The known files could not be listed.
    #[error("Failed to list known files")]
    Listing(#[source] io::Error),

    /// The known-file listing is inconsistent.
    #[error(transparent)]
    Registry(#[from] RegistryError),

    /// A dependency declaration could not be turned into an edge.
    #[error(transparent)]
    Build(#[from] BuildError),

    /// The candidate ordering could not be validated.
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

/// Result type alias for library operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Registers every known file of `source` and builds its dependency graph.
pub fn load_graph<S>(source: &S) -> Result<(FileRegistry, DependencyGraph)>
where
    S: FileSource + ?Sized,
{
    let known = source.list_known_files().map_err(Error::Listing)?;
    let registry = FileRegistry::from_names(known)?;
    let graph = graph::build_graph(&registry, source)?;
    Ok((registry, graph))
}

/// Checks a candidate ordering against the files of `source`.
///
/// A new registry and graph are built for each call; nothing carries over
/// between runs.
///
/// # Errors
///
/// Any listing, registration, build or validation failure aborts the check.
/// A cycle is not an error: it yields a verdict with `correct == false`.
pub fn check_order<S, C>(source: &S, candidates: &[C]) -> Result<Verdict>
where
    S: FileSource + ?Sized,
    C: AsRef<str>,
{
    let (registry, graph) = load_graph(source)?;
    let correct = graph::validate_order(&graph, &registry, candidates)?;

    let verdict = Verdict {
        correct,
        known_files: registry.len(),
        dependency_edges: graph.edge_count(),
        candidates: candidates.len(),
    };
    tracing::info!(
        correct,
        known_files = verdict.known_files,
        candidates = verdict.candidates,
        "checked candidate ordering"
    );
    Ok(verdict)
}
