//! Pluggable observers for parse events.
//!
//! An observer sees every structural event as it happens. Observers are
//! write-only sinks: they cannot change what the parser produces.

use tracing::{debug, info};
use worksheet_core::Item;

use super::diagnostics::ParseDiagnostics;
use super::grammar::DepartmentHeader;

/// Receives parse events. Every callback defaults to doing nothing.
///
/// `line` is the 1-based line number in the raw report.
pub trait ParseObserver: Send {
    fn on_department_header(&mut self, _line: usize, _header: &DepartmentHeader) {}
    fn on_malformed_header(&mut self, _line: usize, _text: &str) {}
    fn on_item(&mut self, _line: usize, _item: &Item) {}
    fn on_unmatched_item(&mut self, _line: usize, _text: &str) {}
    fn on_orphan_item(&mut self, _line: usize, _text: &str) {}
    fn on_finished(&mut self, _diagnostics: &ParseDiagnostics) {}
}

/// Drops every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl ParseObserver for NoopObserver {}

/// Forwards events to `tracing`. This is the default observer.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingObserver;

impl ParseObserver for TracingObserver {
    fn on_department_header(&mut self, line: usize, header: &DepartmentHeader) {
        debug!(
            line,
            dept = %header.dept_number,
            sub_dept = %header.sub_dept_number,
            "Department header"
        );
    }

    fn on_malformed_header(&mut self, line: usize, text: &str) {
        debug!(line, text, "Malformed department header");
    }

    fn on_item(&mut self, line: usize, item: &Item) {
        debug!(line, sku = %item.sku, quantity = item.quantity, "Parsed item");
    }

    fn on_unmatched_item(&mut self, line: usize, text: &str) {
        debug!(line, text, "Unmatched item line");
    }

    fn on_orphan_item(&mut self, line: usize, text: &str) {
        debug!(line, text, "Item line outside any department");
    }

    fn on_finished(&mut self, diagnostics: &ParseDiagnostics) {
        info!(
            lines = diagnostics.total_lines,
            departments = diagnostics.department_count,
            items = diagnostics.items,
            total_cases = diagnostics.total_cases,
            "Worksheet parsed"
        );
    }
}
