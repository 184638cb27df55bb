//! Graph module for file dependency relationships.
//!
//! This module provides the [`DependencyGraph`] adjacency structure, the
//! [`build_graph`] step that fills it from per-file declarations, and
//! [`validate_order`] which decides whether a candidate ordering is
//! achievable.
//!
//! # Example
//!
//! ```rust
//! use include_order::graph::{build_graph, validate_order};
//! use include_order::registry::FileRegistry;
//! use include_order::source::MemorySource;
//!
//! let source = MemorySource::new()
//!     .with_file("A.h", "")
//!     .with_file("B.h", "A.h")
//!     .with_file("C.h", "B.h");
//! let registry = FileRegistry::from_names(["A.h", "B.h", "C.h"]).unwrap();
//! let graph = build_graph(&registry, &source).unwrap();
//!
//! assert_eq!(graph.node_count(), 3);
//! assert_eq!(graph.edge_count(), 2);
//! assert!(validate_order(&graph, &registry, &["A.h", "B.h", "C.h"]).unwrap());
//! ```

mod builder;
mod dependency_graph;
mod validator;

pub use builder::{build_graph, dependency_tokens, BuildError};
pub use dependency_graph::DependencyGraph;
pub use validator::{validate_order, ValidationError};
