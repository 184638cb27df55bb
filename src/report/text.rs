//! Plain text output.

use super::{ReportData, Reporter};
use std::io::{self, Write};

/// Text reporter implementation.
pub struct TextReporter;

impl Reporter for TextReporter {
    fn report<W: Write>(&self, data: &ReportData, writer: &mut W) -> io::Result<()> {
        match data {
            ReportData::Verdict(verdict) => writeln!(writer, "{}", verdict.message()),
            ReportData::Stats(stats) => {
                writeln!(writer, "Known files: {}", stats.known_files)?;
                writeln!(writer, "Dependency edges: {}", stats.dependency_edges)?;
                let cycles = if stats.acyclic { "none" } else { "present" };
                writeln!(writer, "Cycles: {}", cycles)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::{report_to_string, GraphStats, OutputFormat, Verdict};

    #[test]
    fn test_text_verdict_is_single_line() {
        let data = ReportData::from(Verdict {
            correct: false,
            known_files: 2,
            dependency_edges: 2,
            candidates: 1,
        });
        let output = report_to_string(OutputFormat::Text, &data).unwrap();
        assert_eq!(output, "The order of filenames is not correct.\n");
    }

    #[test]
    fn test_text_stats() {
        let data = ReportData::from(GraphStats {
            known_files: 3,
            dependency_edges: 2,
            acyclic: true,
        });
        let output = report_to_string(OutputFormat::Text, &data).unwrap();
        assert_eq!(output, "Known files: 3\nDependency edges: 2\nCycles: none\n");
    }
}
