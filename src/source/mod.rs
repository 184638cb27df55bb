//! Collaborators that hand the core its inputs.
//!
//! The core never touches the filesystem itself. It asks a [`FileSource`]
//! which files are known and what each one declares, and receives the
//! candidate ordering as a plain list of names.
//!
//! - [`DirectorySource`] lists files with a given extension in a directory
//! - [`MemorySource`] serves files from memory
//! - [`read_candidate_ordering`] and [`read_scoped_request`] read orderings
//!   from line-based input

pub mod candidates;
pub mod directory;
pub mod memory;

use std::io;

pub use candidates::{read_candidate_ordering, read_scoped_request, ScopedRequest};
pub use directory::{DirectorySource, DEFAULT_EXTENSION};
pub use memory::MemorySource;

/// Supplies the raw content of a known file.
pub trait ContentReader {
    /// Returns the full text of `name`.
    fn read_content(&self, name: &str) -> io::Result<String>;
}

/// Enumerates known files and reads their content.
pub trait FileSource: ContentReader {
    /// Returns the known files in a stable, deterministic order.
    fn list_known_files(&self) -> io::Result<Vec<String>>;
}
