//! Structured parse reporting.

use serde::{Deserialize, Serialize};
use worksheet_core::{Worksheet, WorksheetSummary};

use crate::parser::diagnostics::ParseDiagnostics;

/// Per-run parse report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParseReport {
    /// RFC 3339 timestamp of when the report was produced.
    pub generated_at: String,
    pub header_found: bool,
    pub summary: WorksheetSummary,
    pub total_lines: usize,
    pub noise_lines: usize,
    pub relevant_lines: usize,
    pub recognized_lines: usize,
    pub coverage: f64,
    pub malformed_header_count: usize,
    pub malformed_headers: Vec<String>,
    pub unmatched_item_count: usize,
    pub unmatched_lines: Vec<String>,
    pub orphan_items: usize,
    pub warnings: Vec<String>,
}

impl ParseReport {
    /// Builds a report for `worksheet` from the diagnostics of the parse
    /// that produced it.
    pub fn new(worksheet: &Worksheet, diagnostics: &ParseDiagnostics) -> Self {
        Self {
            generated_at: chrono::Utc::now().to_rfc3339(),
            header_found: !worksheet.header.is_empty(),
            summary: worksheet.summary,
            total_lines: diagnostics.total_lines,
            noise_lines: diagnostics.noise_lines,
            relevant_lines: diagnostics.relevant_lines(),
            recognized_lines: diagnostics.recognized_lines(),
            coverage: diagnostics.coverage(),
            malformed_header_count: diagnostics.malformed_header_count,
            malformed_headers: diagnostics.malformed_headers.clone(),
            unmatched_item_count: diagnostics.unmatched_item_count,
            unmatched_lines: diagnostics.unmatched_lines.clone(),
            orphan_items: diagnostics.orphan_items,
            warnings: diagnostics.warnings(),
        }
    }
}

/// Parsed worksheet together with its report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParseRun {
    pub worksheet: Worksheet,
    pub report: ParseReport,
}
