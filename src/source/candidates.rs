//! Line-based readers for candidate orderings.

use std::io::{self, BufRead};

/// A scope line followed by the ordering to check within that scope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScopedRequest {
    /// The directory the ordering refers to
    pub scope: String,
    /// Filenames in the proposed order
    pub candidates: Vec<String>,
}

/// Reads one filename per line.
///
/// Trailing whitespace (including `\r`) is dropped and blank lines are
/// skipped.
///
/// # Example
///
/// ```rust
/// use include_order::source::read_candidate_ordering;
///
/// let input = "a.h\r\n\nb.h\n";
/// let names = read_candidate_ordering(input.as_bytes()).unwrap();
/// assert_eq!(names, vec!["a.h", "b.h"]);
/// ```
pub fn read_candidate_ordering<R: BufRead>(reader: R) -> io::Result<Vec<String>> {
    let mut names = Vec::new();
    for line in reader.lines() {
        let line = line?;
        let name = line.trim_end();
        if !name.is_empty() {
            names.push(name.to_string());
        }
    }
    Ok(names)
}

/// Reads a scope line and then the candidate ordering.
///
/// # Errors
///
/// Fails with [`io::ErrorKind::UnexpectedEof`] when the input has no scope
/// line, and with [`io::ErrorKind::InvalidData`] when the scope line is blank.
pub fn read_scoped_request<R: BufRead>(mut reader: R) -> io::Result<ScopedRequest> {
    let mut first = String::new();
    if reader.read_line(&mut first)? == 0 {
        return Err(io::Error::new(
            io::ErrorKind::UnexpectedEof,
            "input is empty, expected a directory on the first line",
        ));
    }

    let scope = first.trim_end().to_string();
    if scope.is_empty() {
        return Err(io::Error::new(
            io::ErrorKind::InvalidData,
            "first line must name a directory",
        ));
    }

    let candidates = read_candidate_ordering(reader)?;
    Ok(ScopedRequest { scope, candidates })
}
