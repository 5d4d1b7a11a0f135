//! Diagnostics for one parse run.
//!
//! Counts are advisory; nothing here feeds back into the parsed structure.

use serde::{Deserialize, Serialize};

/// Line-level bookkeeping collected while walking the report.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ParseDiagnostics {
    pub total_lines: usize,
    pub noise_lines: usize,
    pub department_headers: usize,
    pub items: usize,
    pub department_count: usize,
    pub total_cases: u64,
    pub malformed_header_count: usize,
    /// Sample of malformed header lines, capped by configuration.
    pub malformed_headers: Vec<String>,
    pub unmatched_item_count: usize,
    /// Sample of item-like lines that failed the item grammar.
    pub unmatched_lines: Vec<String>,
    /// Item rows seen before any department header.
    pub orphan_items: usize,
}

impl ParseDiagnostics {
    /// Lines that were not filtered as noise.
    pub fn relevant_lines(&self) -> usize {
        self.total_lines.saturating_sub(self.noise_lines)
    }

    /// Department headers plus attached items.
    pub fn recognized_lines(&self) -> usize {
        self.department_headers + self.items
    }

    pub fn coverage(&self) -> f64 {
        let relevant = self.relevant_lines();
        if relevant == 0 {
            return 0.0;
        }
        self.recognized_lines() as f64 / relevant as f64
    }

    pub fn warnings(&self) -> Vec<String> {
        let mut warnings = Vec::new();

        if self.malformed_header_count > 0 {
            warnings.push(format!(
                "Skipped {} malformed department header lines",
                self.malformed_header_count
            ));
        }

        if self.unmatched_item_count > 0 {
            warnings.push(format!(
                "Skipped {} item-like lines that did not match the item row layout",
                self.unmatched_item_count
            ));
        }

        if self.orphan_items > 0 {
            warnings.push(format!(
                "Dropped {} item lines that appeared before any department header",
                self.orphan_items
            ));
        }

        warnings
    }

    pub(super) fn record_sample(samples: &mut Vec<String>, line: &str, cap: usize) {
        if samples.len() < cap {
            samples.push(line.to_string());
        }
    }
}
