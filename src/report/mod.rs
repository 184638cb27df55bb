//! Rendering of check results.
//!
//! This module turns a [`Verdict`] or [`GraphStats`] into text or JSON.

pub mod json;
pub mod text;

use crate::graph::DependencyGraph;
use serde::Serialize;
use std::io::{self, Write};

/// Message printed for an achievable ordering.
pub const CORRECT_MESSAGE: &str = "The order of filenames is correct.";

/// Message printed for an ordering blocked by a dependency cycle.
pub const INCORRECT_MESSAGE: &str = "The order of filenames is not correct.";

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Plain text - one human readable line per fact
    #[default]
    Text,
    /// JSON format - machine-readable
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "txt" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!(
                "Unknown output format: '{}'. Valid formats: text, json",
                s
            )),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

/// Outcome of checking one candidate ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Verdict {
    /// Whether the ordering is achievable
    pub correct: bool,
    /// Number of known files in scope
    pub known_files: usize,
    /// Number of declared dependency edges, duplicates included
    pub dependency_edges: usize,
    /// Number of names in the candidate ordering
    pub candidates: usize,
}

impl Verdict {
    /// Returns the one-line verdict message.
    pub fn message(&self) -> &'static str {
        if self.correct {
            CORRECT_MESSAGE
        } else {
            INCORRECT_MESSAGE
        }
    }
}

/// Whole-graph summary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GraphStats {
    /// Number of known files
    pub known_files: usize,
    /// Number of declared dependency edges, duplicates included
    pub dependency_edges: usize,
    /// Whether the graph has no cycle anywhere
    pub acyclic: bool,
}

impl GraphStats {
    /// Summarizes a built graph.
    pub fn of(graph: &DependencyGraph) -> Self {
        Self {
            known_files: graph.node_count(),
            dependency_edges: graph.edge_count(),
            acyclic: !graph.has_cycles(),
        }
    }
}

/// Data container for report operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ReportData {
    /// Result of `check`
    Verdict(Verdict),
    /// Result of `stats`
    Stats(GraphStats),
}

impl From<Verdict> for ReportData {
    fn from(verdict: Verdict) -> Self {
        ReportData::Verdict(verdict)
    }
}

impl From<GraphStats> for ReportData {
    fn from(stats: GraphStats) -> Self {
        ReportData::Stats(stats)
    }
}

/// Trait for reporters.
pub trait Reporter {
    /// Write the data to the given writer.
    fn report<W: Write>(&self, data: &ReportData, writer: &mut W) -> io::Result<()>;
}

/// Write data in the specified format.
pub fn report<W: Write>(
    format: OutputFormat,
    data: &ReportData,
    writer: &mut W,
) -> io::Result<()> {
    match format {
        OutputFormat::Text => text::TextReporter.report(data, writer),
        OutputFormat::Json => json::JsonReporter.report(data, writer),
    }
}

/// Write data to a string.
pub fn report_to_string(format: OutputFormat, data: &ReportData) -> io::Result<String> {
    let mut buffer = Vec::new();
    report(format, data, &mut buffer)?;
    String::from_utf8(buffer).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
}
