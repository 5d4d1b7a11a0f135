//! Parsing of plain-text store order worksheets.
//!
//! A worksheet report is a whitespace-aligned text dump: a header block with
//! store, order, DC and date lines, then department/sub-department header rows
//! followed by item rows, interleaved with page banners and column titles.
//! This crate turns that text into the typed hierarchy from
//! [`worksheet_core`].
//!
//! # Main entry points
//!
//! - [`parse_worksheet_data`]: departments only, sorted.
//! - [`parse_worksheet_header`]: the header record only.
//! - [`parse_worksheet`]: both, bundled into a [`Worksheet`] with totals.
//! - [`parse_worksheet_with_report`]: same, plus a [`ParseReport`] with line
//!   coverage and warnings, honoring a [`ParserConfig`].
//!
//! None of these fail. Lines that do not fit the report grammar are skipped
//! and show up in diagnostics instead.
//!
//! # Example
//!
//! ```
//! use worksheet_parser::parse_worksheet;
//!
//! let text = "\
//! Store Number: 4521 SPRINGFIELD  Order Number: 778899
//! DC#: 12 CENTRAL DC
//! Date: 05/01/2024  Time: 14:30
//! Dept: 010 GROCERY Sub-Dept: 020 CANNED GOODS
//! 123456 CANNED BEANS U M 12 4
//! ";
//!
//! let worksheet = parse_worksheet(text);
//! assert_eq!(worksheet.header.store_number, "4521");
//! assert_eq!(worksheet.departments[0].dept_name, "GROCERY");
//! assert_eq!(worksheet.summary.total_cases, 12);
//! ```

pub mod config;
pub mod error;
pub mod output;
pub mod parser;
pub mod report;

use worksheet_core::{Department, HeaderInfo, Worksheet};

pub use config::ParserConfig;
pub use error::{Result, WorksheetError};
pub use output::{OutputFormat, format_header, format_report, format_run, format_worksheet};
pub use parser::WorksheetParser;
pub use parser::diagnostics::ParseDiagnostics;
pub use parser::header::extract_header;
pub use parser::observer::{NoopObserver, ParseObserver, TracingObserver};
pub use report::{ParseReport, ParseRun};

/// Parses the department hierarchy of a worksheet report.
///
/// Departments come back sorted by number, sub-departments sorted inside
/// each, items in the order they appear in the text.
///
/// # Examples
///
/// ```
/// use worksheet_parser::parse_worksheet_data;
///
/// let text = "\
/// Dept: 040 DAIRY Sub-Dept: 010 MILK
/// 222222 WHOLE MILK 6 2
/// Dept: 010 GROCERY Sub-Dept: 020 CANNED GOODS
/// 123456 CANNED BEANS U M 12 4
/// ";
///
/// let departments = parse_worksheet_data(text);
/// let numbers: Vec<&str> = departments.iter().map(|d| d.dept_number.as_str()).collect();
/// assert_eq!(numbers, ["010", "040"]);
/// ```
pub fn parse_worksheet_data(text: &str) -> Vec<Department> {
    WorksheetParser::new(text).parse()
}

/// Extracts the header record of a worksheet report.
///
/// Fields that never appear stay empty strings.
///
/// # Examples
///
/// ```
/// use worksheet_parser::parse_worksheet_header;
///
/// let header = parse_worksheet_header("DC#: 12 CENTRAL DC\n");
/// assert_eq!(header.dc_number, "12");
/// assert_eq!(header.dc_name, "CENTRAL DC");
/// assert!(header.store_number.is_empty());
/// ```
pub fn parse_worksheet_header(text: &str) -> HeaderInfo {
    extract_header(text)
}

/// Parses departments and header together.
///
/// The two passes are independent and run concurrently.
pub fn parse_worksheet(text: &str) -> Worksheet {
    let (departments, header) =
        rayon::join(|| parse_worksheet_data(text), || extract_header(text));
    Worksheet::new(header, departments)
}

/// Parses a worksheet with `config` applied and builds a [`ParseReport`]
/// from the parse diagnostics.
///
/// # Examples
///
/// ```
/// use worksheet_parser::{ParserConfig, parse_worksheet_with_report};
///
/// let text = "\
/// Dept: 010 GROCERY Sub-Dept: 020 CANNED GOODS
/// 123456 CANNED BEANS U M 12 4
/// 654321 TRUNCATED LINE
/// ";
///
/// let run = parse_worksheet_with_report(text, &ParserConfig::default());
/// assert_eq!(run.worksheet.summary.item_count, 1);
/// assert_eq!(run.report.unmatched_item_count, 1);
/// assert!(!run.report.warnings.is_empty());
/// ```
pub fn parse_worksheet_with_report(text: &str, config: &ParserConfig) -> ParseRun {
    let mut parser = WorksheetParser::new(text).with_config(config);
    let (departments, header) = rayon::join(|| parser.parse(), || extract_header(text));

    let worksheet = Worksheet::new(header, departments);
    let report = ParseReport::new(&worksheet, parser.diagnostics());
    ParseRun { worksheet, report }
}
