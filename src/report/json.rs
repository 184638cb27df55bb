//! JSON output implementation.

use super::{ReportData, Reporter};
use serde::Serialize;
use std::io::{self, Write};

/// JSON reporter implementation.
pub struct JsonReporter;

/// Serializable verdict with its message attached.
#[derive(Serialize)]
struct JsonVerdict<'a> {
    correct: bool,
    message: &'a str,
    known_files: usize,
    dependency_edges: usize,
    candidates: usize,
}

impl Reporter for JsonReporter {
    fn report<W: Write>(&self, data: &ReportData, writer: &mut W) -> io::Result<()> {
        let json = match data {
            ReportData::Verdict(verdict) => serde_json::to_string_pretty(&JsonVerdict {
                correct: verdict.correct,
                message: verdict.message(),
                known_files: verdict.known_files,
                dependency_edges: verdict.dependency_edges,
                candidates: verdict.candidates,
            }),
            ReportData::Stats(_) => serde_json::to_string_pretty(data),
        }
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;

        writeln!(writer, "{}", json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::{report_to_string, GraphStats, OutputFormat, Verdict};
    use serde_json::Value;

    #[test]
    fn test_json_verdict() {
        let data = ReportData::from(Verdict {
            correct: true,
            known_files: 3,
            dependency_edges: 2,
            candidates: 3,
        });
        let output = report_to_string(OutputFormat::Json, &data).unwrap();
        let parsed: Value = serde_json::from_str(&output).unwrap();

        assert_eq!(parsed["correct"], true);
        assert_eq!(parsed["message"], "The order of filenames is correct.");
        assert_eq!(parsed["known_files"], 3);
        assert_eq!(parsed["dependency_edges"], 2);
        assert_eq!(parsed["candidates"], 3);
    }

    #[test]
    fn test_json_stats() {
        let data = ReportData::from(GraphStats {
            known_files: 1,
            dependency_edges: 1,
            acyclic: false,
        });
        let output = report_to_string(OutputFormat::Json, &data).unwrap();
        let parsed: Value = serde_json::from_str(&output).unwrap();

        assert_eq!(parsed["known_files"], 1);
        assert_eq!(parsed["acyclic"], false);
        assert!(parsed.get("correct").is_none());
    }
}
