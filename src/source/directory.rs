//! Known files from a directory on disk.

use std::ffi::OsStr;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use super::{ContentReader, FileSource};

/// Extension used when none is configured.
pub const DEFAULT_EXTENSION: &str = "h";

/// Lists the regular files directly inside `root` that carry `extension`.
///
/// Subdirectories are not descended into. Names are returned sorted so ids
/// come out the same on every run.
#[derive(Debug, Clone)]
pub struct DirectorySource {
    root: PathBuf,
    extension: String,
}

impl DirectorySource {
    /// Creates a source over `root` using [`DEFAULT_EXTENSION`].
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self::with_extension(root, DEFAULT_EXTENSION)
    }

    /// Creates a source over `root` for files ending in `extension`.
    ///
    /// A leading dot is accepted, so `"h"` and `".h"` are equivalent.
    pub fn with_extension(root: impl Into<PathBuf>, extension: &str) -> Self {
        Self {
            root: root.into(),
            extension: extension.trim_start_matches('.').to_string(),
        }
    }

    /// Returns the scanned directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Returns the extension filter, without the leading dot.
    pub fn extension(&self) -> &str {
        &self.extension
    }
}

impl ContentReader for DirectorySource {
    fn read_content(&self, name: &str) -> io::Result<String> {
        let bytes = fs::read(self.root.join(name))?;
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }
}

impl FileSource for DirectorySource {
    fn list_known_files(&self) -> io::Result<Vec<String>> {
        let mut names = Vec::new();

        let walker = WalkDir::new(&self.root)
            .min_depth(1)
            .max_depth(1)
            .follow_links(true)
            .sort_by_file_name();

        for entry in walker {
            let entry = match entry {
                Ok(entry) => entry,
                Err(err) if is_dangling_link(&err) => {
                    tracing::warn!(error = %err, "skipping dangling symlink");
                    continue;
                }
                Err(err) => return Err(io::Error::from(err)),
            };
            if !entry.file_type().is_file() {
                continue;
            }
            if entry.path().extension() != Some(OsStr::new(&self.extension)) {
                continue;
            }

            match entry.file_name().to_str() {
                Some(name) => names.push(name.to_string()),
                None => tracing::warn!(
                    path = %entry.path().display(),
                    "skipping file with non UTF-8 name"
                ),
            }
        }

        tracing::debug!(
            root = %self.root.display(),
            extension = %self.extension,
            count = names.len(),
            "listed known files"
        );
        Ok(names)
    }
}

/// Checks if a walk error comes from an entry inside the root that is a
/// symlink with no reachable target.
fn is_dangling_link(err: &walkdir::Error) -> bool {
    err.depth() > 0
        && err
            .path()
            .and_then(|path| fs::symlink_metadata(path).ok())
            .is_some_and(|meta| meta.file_type().is_symlink())
}
