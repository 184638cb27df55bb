//! Bidirectional name <-> id table for known files.

use std::collections::HashMap;
use std::fmt;

/// Opaque handle for a registered file.
///
/// Ids are dense integers in `[0, len)` assigned in registration order.
/// Callers should not attach meaning to a particular value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FileId(usize);

impl FileId {
    /// Wraps a raw index. Lookups with an id the registry never issued fail
    /// with [`RegistryError::InvalidId`].
    pub fn from_index(index: usize) -> Self {
        Self(index)
    }

    /// Returns the raw index of this id.
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for FileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Errors raised by registry lookups and registration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
    /// The same file name was registered twice.
    #[error("File registered twice: {0}")]
    DuplicateName(String),

    /// A name was looked up that was never registered.
    #[error("Unknown file: {0}")]
    UnknownName(String),

    /// An id outside the assigned range was looked up.
    #[error("Invalid file id {id} (registry holds {len} files)")]
    InvalidId { id: usize, len: usize },
}

/// Assigns each known file a stable [`FileId`].
///
/// Built once per run from the known-file listing and then only read.
#[derive(Debug, Clone, Default)]
pub struct FileRegistry {
    /// Name -> id for O(1) lookup
    ids: HashMap<String, FileId>,
    /// Id (as index) -> name
    names: Vec<String>,
}

impl FileRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a registry from names in discovery order.
    ///
    /// # Example
    ///
    /// ```rust
    /// use include_order::registry::FileRegistry;
    ///
    /// let registry = FileRegistry::from_names(["a.h", "b.h"]).unwrap();
    /// assert_eq!(registry.len(), 2);
    /// assert!(FileRegistry::from_names(["a.h", "a.h"]).is_err());
    /// ```
    pub fn from_names<I, S>(names: I) -> Result<Self, RegistryError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let names = names.into_iter();
        let mut registry = Self::with_capacity(names.size_hint().0);
        for name in names {
            registry.register(name)?;
        }
        Ok(registry)
    }

    /// Creates an empty registry with room for `capacity` files.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            ids: HashMap::with_capacity(capacity),
            names: Vec::with_capacity(capacity),
        }
    }

    /// Registers a file and returns the next unused id.
    ///
    /// # Errors
    ///
    /// [`RegistryError::DuplicateName`] if `name` is already registered.
    pub fn register(&mut self, name: impl Into<String>) -> Result<FileId, RegistryError> {
        let name = name.into();
        if self.ids.contains_key(&name) {
            return Err(RegistryError::DuplicateName(name));
        }

        let id = FileId(self.names.len());
        tracing::trace!(file = %name, %id, "registered file");
        self.ids.insert(name.clone(), id);
        self.names.push(name);
        Ok(id)
    }

    /// Looks up the id of a registered file.
    ///
    /// # Errors
    ///
    /// [`RegistryError::UnknownName`] if `name` was never registered.
    pub fn id_of(&self, name: &str) -> Result<FileId, RegistryError> {
        self.ids
            .get(name)
            .copied()
            .ok_or_else(|| RegistryError::UnknownName(name.to_string()))
    }

    /// Looks up the name behind an id.
    ///
    /// # Errors
    ///
    /// [`RegistryError::InvalidId`] if `id` is out of range.
    pub fn name_of(&self, id: FileId) -> Result<&str, RegistryError> {
        self.names
            .get(id.0)
            .map(String::as_str)
            .ok_or(RegistryError::InvalidId {
                id: id.0,
                len: self.names.len(),
            })
    }

    /// Checks if a file is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.ids.contains_key(name)
    }

    /// Returns the number of registered files.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Checks if the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Iterates over `(id, name)` pairs in id order.
    pub fn iter(&self) -> impl Iterator<Item = (FileId, &str)> + '_ {
        self.names
            .iter()
            .enumerate()
            .map(|(idx, name)| (FileId(idx), name.as_str()))
    }
}
