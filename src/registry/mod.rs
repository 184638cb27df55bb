//! Identifier registry for known files.
//!
//! Every known file gets a stable [`FileId`] in discovery order. The
//! [`FileRegistry`] maps names to ids and back, and refuses to silently
//! default on lookups of names or ids it never handed out.
//!
//! # Example
//!
//! ```rust
//! use include_order::registry::FileRegistry;
//!
//! let mut registry = FileRegistry::new();
//! let a = registry.register("a.h").unwrap();
//! let b = registry.register("b.h").unwrap();
//!
//! assert_eq!(registry.id_of("b.h").unwrap(), b);
//! assert_eq!(registry.name_of(a).unwrap(), "a.h");
//! assert!(registry.id_of("c.h").is_err());
//! ```

mod file_registry;

pub use file_registry::{FileId, FileRegistry, RegistryError};
