//! Turns per-file dependency declarations into a [`DependencyGraph`].

use std::io;

use super::DependencyGraph;
use crate::registry::FileRegistry;
use crate::source::ContentReader;

/// Errors that abort graph construction.
#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    /// A known file's content could not be obtained.
    #[error("Could not open file: {file}")]
    UnreadableFile {
        file: String,
        #[source]
        source: io::Error,
    },

    /// A dependency token names a file outside the known set.
    #[error("{file} depends on unknown file {token}")]
    UnknownDependency { file: String, token: String },
}

/// Splits a file's content into dependency tokens.
///
/// Any run of whitespace, newlines included, separates tokens.
pub fn dependency_tokens(content: &str) -> impl Iterator<Item = &str> {
    content.split_whitespace()
}

/// Builds the dependency graph for every file in `registry`.
///
/// Files are read in id order. Each whitespace-separated token becomes an
/// edge from the file to the named file, in the order the tokens appear.
/// A token equal to the file's own name yields a self-loop.
///
/// # Errors
///
/// - [`BuildError::UnreadableFile`] if `reader` cannot supply a file
/// - [`BuildError::UnknownDependency`] if a token is not a registered name
///
/// # Example
///
/// ```rust
/// use include_order::graph::build_graph;
/// use include_order::registry::FileRegistry;
/// use include_order::source::MemorySource;
///
/// let source = MemorySource::new()
///     .with_file("a.h", "")
///     .with_file("b.h", "a.h");
/// let registry = FileRegistry::from_names(["a.h", "b.h"]).unwrap();
///
/// let graph = build_graph(&registry, &source).unwrap();
/// let b = registry.id_of("b.h").unwrap();
/// let a = registry.id_of("a.h").unwrap();
/// assert_eq!(graph.dependencies(b), &[a]);
/// ```
pub fn build_graph<R>(registry: &FileRegistry, reader: &R) -> Result<DependencyGraph, BuildError>
where
    R: ContentReader + ?Sized,
{
    let mut graph = DependencyGraph::with_nodes(registry.len());

    for (owner, name) in registry.iter() {
        let content = reader
            .read_content(name)
            .map_err(|source| BuildError::UnreadableFile {
                file: name.to_string(),
                source,
            })?;

        for token in dependency_tokens(&content) {
            let dependency = registry
                .id_of(token)
                .map_err(|_| BuildError::UnknownDependency {
                    file: name.to_string(),
                    token: token.to_string(),
                })?;
            graph.add_edge(owner, dependency);
        }
    }

    tracing::debug!(
        files = graph.node_count(),
        edges = graph.edge_count(),
        "built dependency graph"
    );
    Ok(graph)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::MemorySource;

    fn registry_for(source: &MemorySource) -> FileRegistry {
        use crate::source::FileSource;
        FileRegistry::from_names(source.list_known_files().unwrap()).unwrap()
    }

    #[test]
    fn test_dependency_tokens_split_on_any_whitespace() {
        let tokens: Vec<_> = dependency_tokens("  a.h\tb.h\n\nc.h  \r\n").collect();
        assert_eq!(tokens, vec!["a.h", "b.h", "c.h"]);
    }

    #[test]
    fn test_build_chain() {
        let source = MemorySource::new()
            .with_file("A.h", "")
            .with_file("B.h", "A.h")
            .with_file("C.h", "B.h");
        let registry = registry_for(&source);

        let graph = build_graph(&registry, &source).unwrap();
        let a = registry.id_of("A.h").unwrap();
        let b = registry.id_of("B.h").unwrap();
        let c = registry.id_of("C.h").unwrap();

        assert_eq!(graph.node_count(), 3);
        assert_eq!(graph.edge_count(), 2);
        assert!(graph.dependencies(a).is_empty());
        assert_eq!(graph.dependencies(b), &[a]);
        assert_eq!(graph.dependencies(c), &[b]);
    }

    #[test]
    fn test_build_multiline_keeps_token_order() {
        let source = MemorySource::new()
            .with_file("a.h", "")
            .with_file("b.h", "")
            .with_file("c.h", "")
            .with_file("main.h", "c.h a.h\nb.h\n");
        let registry = registry_for(&source);

        let graph = build_graph(&registry, &source).unwrap();
        let ids: Vec<_> = ["c.h", "a.h", "b.h"]
            .iter()
            .map(|n| registry.id_of(n).unwrap())
            .collect();
        assert_eq!(graph.dependencies(registry.id_of("main.h").unwrap()), ids.as_slice());
    }

    #[test]
    fn test_build_self_loop() {
        let source = MemorySource::new().with_file("A.h", "A.h");
        let registry = registry_for(&source);

        let graph = build_graph(&registry, &source).unwrap();
        let a = registry.id_of("A.h").unwrap();
        assert_eq!(graph.dependencies(a), &[a]);
    }

    #[test]
    fn test_build_duplicate_tokens() {
        let source = MemorySource::new()
            .with_file("a.h", "")
            .with_file("b.h", "a.h a.h");
        let registry = registry_for(&source);

        let graph = build_graph(&registry, &source).unwrap();
        assert_eq!(graph.edge_count(), 2);
    }

    #[test]
    fn test_build_unknown_dependency() {
        let source = MemorySource::new()
            .with_file("A.h", "")
            .with_file("B.h", "A.h E.h");
        let registry = registry_for(&source);

        let err = build_graph(&registry, &source).unwrap_err();
        match err {
            BuildError::UnknownDependency { ref file, ref token } => {
                assert_eq!(file, "B.h");
                assert_eq!(token, "E.h");
            }
            ref other => panic!("unexpected error: {other:?}"),
        }
        assert_eq!(err.to_string(), "B.h depends on unknown file E.h");
    }

    #[test]
    fn test_build_unreadable_file() {
        let source = MemorySource::new()
            .with_file("a.h", "")
            .with_unreadable("b.h");
        let registry = registry_for(&source);

        let err = build_graph(&registry, &source).unwrap_err();
        assert!(matches!(err, BuildError::UnreadableFile { ref file, .. } if file == "b.h"));
        assert_eq!(err.to_string(), "Could not open file: b.h");
    }

    #[test]
    fn test_build_empty_registry() {
        let source = MemorySource::new();
        let graph = build_graph(&FileRegistry::new(), &source).unwrap();
        assert!(graph.is_empty());
    }
}
