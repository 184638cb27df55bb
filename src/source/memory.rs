//! Known files held in memory.

use std::collections::HashMap;
use std::io;

use super::{ContentReader, FileSource};

/// An in-memory [`FileSource`].
///
/// Files are listed in insertion order. A file added with
/// [`with_unreadable`](Self::with_unreadable) is listed but cannot be read.
///
/// # Example
///
/// ```rust
/// use include_order::source::{ContentReader, FileSource, MemorySource};
///
/// let source = MemorySource::new()
///     .with_file("a.h", "")
///     .with_file("b.h", "a.h");
///
/// assert_eq!(source.list_known_files().unwrap(), vec!["a.h", "b.h"]);
/// assert_eq!(source.read_content("b.h").unwrap(), "a.h");
/// ```
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    files: Vec<(String, Option<String>)>,
    /// Name -> position of its first entry in `files`
    index: HashMap<String, usize>,
}

impl MemorySource {
    /// Creates an empty source.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a readable file.
    pub fn with_file(mut self, name: impl Into<String>, content: impl Into<String>) -> Self {
        self.add_file(name, content);
        self
    }

    /// Adds a file that is listed but fails to read.
    pub fn with_unreadable(mut self, name: impl Into<String>) -> Self {
        self.push(name.into(), None);
        self
    }

    /// Adds a readable file in place.
    pub fn add_file(&mut self, name: impl Into<String>, content: impl Into<String>) {
        self.push(name.into(), Some(content.into()));
    }

    fn push(&mut self, name: String, content: Option<String>) {
        self.index.entry(name.clone()).or_insert(self.files.len());
        self.files.push((name, content));
    }
}

impl ContentReader for MemorySource {
    fn read_content(&self, name: &str) -> io::Result<String> {
        match self.index.get(name).map(|&pos| &self.files[pos].1) {
            Some(Some(content)) => Ok(content.clone()),
            Some(None) => Err(io::Error::new(
                io::ErrorKind::PermissionDenied,
                format!("{name} is not readable"),
            )),
            None => Err(io::Error::new(
                io::ErrorKind::NotFound,
                format!("{name} does not exist"),
            )),
        }
    }
}

impl FileSource for MemorySource {
    fn list_known_files(&self) -> io::Result<Vec<String>> {
        Ok(self.files.iter().map(|(name, _)| name.clone()).collect())
    }
}
