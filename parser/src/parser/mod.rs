//! Worksheet report parser.
//!
//! A worksheet is a plain-text, whitespace-aligned report: a header block,
//! then department/sub-department header rows, each followed by item rows,
//! with page banners, separators and column titles scattered throughout.
//!
//! # Architecture
//!
//! Parsing is a single pass over the lines:
//!
//! 1. [`noise`] drops structurally irrelevant lines.
//! 2. [`grammar`] decomposes the remaining lines into typed fields.
//! 3. [`hierarchy`] keeps the current department/sub-department and attaches
//!    items to it, merging repeated section headers.
//! 4. [`aggregate`] sorts the result once the pass is done.
//!
//! The header record is extracted by [`header`] in an independent pass over
//! the same text; the two passes share no state.
//!
//! The primary entry point is [`WorksheetParser::new`] followed by
//! [`WorksheetParser::parse`], but most consumers should use the higher-level
//! [`parse_worksheet`](crate::parse_worksheet) function instead.

pub mod aggregate;
pub mod diagnostics;
pub mod grammar;
pub mod header;
pub mod hierarchy;
pub mod noise;
pub mod observer;

use worksheet_core::{Department, HeaderInfo};

use crate::config::{DEFAULT_MAX_UNMATCHED_SAMPLES, ParserConfig};
use diagnostics::ParseDiagnostics;
use grammar::{DEPARTMENT_MARKER, looks_like_item_row, match_department_header, match_item_row};
use hierarchy::HierarchyBuilder;
use noise::NoiseFilter;
use observer::{ParseObserver, TracingObserver};

/// Parser for one worksheet report.
pub struct WorksheetParser {
    raw_text: String,
    noise: NoiseFilter,
    max_samples: usize,
    observer: Box<dyn ParseObserver>,
    diagnostics: ParseDiagnostics,
}

impl WorksheetParser {
    /// Creates a parser with the default configuration and a
    /// [`TracingObserver`].
    pub fn new(text: &str) -> Self {
        Self {
            raw_text: text.to_string(),
            noise: NoiseFilter::default(),
            max_samples: DEFAULT_MAX_UNMATCHED_SAMPLES,
            observer: Box::new(TracingObserver),
            diagnostics: ParseDiagnostics::default(),
        }
    }

    /// Applies extra noise markers and diagnostic limits from `config`.
    pub fn with_config(mut self, config: &ParserConfig) -> Self {
        self.noise = NoiseFilter::new(config.noise.extra_markers.clone());
        self.max_samples = config.diagnostics.max_unmatched_samples;
        self
    }

    /// Replaces the event observer.
    pub fn with_observer(mut self, observer: impl ParseObserver + 'static) -> Self {
        self.observer = Box::new(observer);
        self
    }

    /// Walks the report and returns its departments, sorted by number with
    /// sub-departments sorted inside each.
    ///
    /// Never fails: malformed lines are skipped and recorded in
    /// [`diagnostics`](Self::diagnostics). Calling `parse` again starts over.
    pub fn parse(&mut self) -> Vec<Department> {
        self.diagnostics = ParseDiagnostics::default();
        let mut builder = HierarchyBuilder::new();

        for (index, raw_line) in self.raw_text.lines().enumerate() {
            let line_no = index + 1;
            self.diagnostics.total_lines += 1;

            let line = raw_line.trim();
            if self.noise.is_noise(line) {
                self.diagnostics.noise_lines += 1;
                continue;
            }

            if line.starts_with(DEPARTMENT_MARKER) {
                match match_department_header(line) {
                    Some(header) => {
                        builder.enter_section(&header);
                        self.diagnostics.department_headers += 1;
                        self.observer.on_department_header(line_no, &header);
                    }
                    None => {
                        self.diagnostics.malformed_header_count += 1;
                        ParseDiagnostics::record_sample(
                            &mut self.diagnostics.malformed_headers,
                            line,
                            self.max_samples,
                        );
                        self.observer.on_malformed_header(line_no, line);
                    }
                }
                continue;
            }

            match match_item_row(line) {
                Some(item) => match builder.push_item(item) {
                    Ok(item) => {
                        self.diagnostics.items += 1;
                        self.observer.on_item(line_no, item);
                    }
                    Err(_) => {
                        self.diagnostics.orphan_items += 1;
                        self.observer.on_orphan_item(line_no, line);
                    }
                },
                None if builder.in_section() && looks_like_item_row(line) => {
                    self.diagnostics.unmatched_item_count += 1;
                    ParseDiagnostics::record_sample(
                        &mut self.diagnostics.unmatched_lines,
                        line,
                        self.max_samples,
                    );
                    self.observer.on_unmatched_item(line_no, line);
                }
                None => {}
            }
        }

        self.diagnostics.total_cases = builder.total_cases();
        self.diagnostics.department_count = builder.department_count();

        let mut departments = builder.finish();
        aggregate::sort_departments(&mut departments);

        self.observer.on_finished(&self.diagnostics);
        departments
    }

    /// Extracts the header record from the same text.
    pub fn parse_header(&self) -> HeaderInfo {
        header::extract_header(&self.raw_text)
    }

    /// Diagnostics of the most recent [`parse`](Self::parse) call.
    pub fn diagnostics(&self) -> &ParseDiagnostics {
        &self.diagnostics
    }

    /// Human-readable warnings for the most recent parse.
    pub fn warnings(&self) -> Vec<String> {
        self.diagnostics.warnings()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use worksheet_core::IconCode;

    use super::*;
    use crate::parser::grammar::DepartmentHeader;

    const SCENARIO_A: &str = "\
Dept: 010 GROCERY Sub-Dept: 020 CANNED GOODS
123456 CANNED BEANS U M 12 4
";

    #[test]
    fn test_parse_single_section() {
        let mut parser = WorksheetParser::new(SCENARIO_A);
        let departments = parser.parse();

        assert_eq!(departments.len(), 1);
        let dept = &departments[0];
        assert_eq!(dept.dept_number, "010");
        assert_eq!(dept.dept_name, "GROCERY");
        assert!(!dept.is_expanded);
        assert_eq!(dept.sub_departments.len(), 1);

        let sub = &dept.sub_departments[0];
        assert_eq!(sub.sub_dept_number, "020");
        assert_eq!(sub.sub_dept_name, "CANNED GOODS");
        assert_eq!(sub.items.len(), 1);

        let item = &sub.items[0];
        assert_eq!(item.sku.as_str(), "123456");
        assert_eq!(item.description, "CANNED BEANS");
        assert_eq!(item.icons, vec![IconCode::U, IconCode::M]);
        assert_eq!(item.quantity, 12);
        assert_eq!(item.carton_qty, 4);

        assert_eq!(parser.diagnostics().total_cases, 12);
        assert!(parser.warnings().is_empty());
    }

    #[test]
    fn test_items_before_any_header_are_dropped() {
        let text = "123456 EARLY ITEM 1 1\nDept: 010 GROCERY Sub-Dept: 020 CANNED\n654321 LATE ITEM 2 2\n";
        let mut parser = WorksheetParser::new(text);
        let departments = parser.parse();

        let items = &departments[0].sub_departments[0].items;
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].description, "LATE ITEM");
        assert_eq!(parser.diagnostics().orphan_items, 1);
    }

    #[test]
    fn test_unmatched_item_line_keeps_context() {
        let text = "\
Dept: 010 GROCERY Sub-Dept: 020 CANNED
123456 BROKEN ROW WITHOUT QUANTITIES
234567 GOOD ROW 3 6
";
        let mut parser = WorksheetParser::new(text);
        let departments = parser.parse();

        let items = &departments[0].sub_departments[0].items;
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].sku.as_str(), "234567");

        let diagnostics = parser.diagnostics();
        assert_eq!(diagnostics.unmatched_item_count, 1);
        assert_eq!(
            diagnostics.unmatched_lines,
            vec!["123456 BROKEN ROW WITHOUT QUANTITIES"]
        );
    }

    #[test]
    fn test_malformed_header_does_not_change_context() {
        let text = "\
Dept: 010 GROCERY Sub-Dept: 020 CANNED
111111 FIRST 1 1
Dept: 0X0 BROKEN Sub-Dept: 030 NOPE
222222 SECOND 2 2
";
        let mut parser = WorksheetParser::new(text);
        let departments = parser.parse();

        assert_eq!(departments.len(), 1);
        assert_eq!(departments[0].sub_departments.len(), 1);
        assert_eq!(departments[0].sub_departments[0].items.len(), 2);
        assert_eq!(parser.diagnostics().malformed_header_count, 1);
    }

    #[test]
    fn test_extra_noise_markers_from_config() {
        let mut config = ParserConfig::default();
        config.noise.extra_markers.push("IGNORE ME".to_string());
        let text = "\
Dept: 010 GROCERY Sub-Dept: 020 CANNED
123456 IGNORE ME 1 1
654321 KEEP ME 1 1
";
        let departments = WorksheetParser::new(text).with_config(&config).parse();
        let items = &departments[0].sub_departments[0].items;
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].description, "KEEP ME");
    }

    #[test]
    fn test_sample_cap_keeps_exact_count() {
        let mut config = ParserConfig::default();
        config.diagnostics.max_unmatched_samples = 1;
        let text = "\
Dept: 010 GROCERY Sub-Dept: 020 CANNED
111111 BAD
222222 BAD
333333 BAD
";
        let mut parser = WorksheetParser::new(text).with_config(&config);
        parser.parse();
        assert_eq!(parser.diagnostics().unmatched_item_count, 3);
        assert_eq!(parser.diagnostics().unmatched_lines.len(), 1);
    }

    #[test]
    fn test_parse_header_ignores_department_pass() {
        let text = "\
Store Number: 4521 SPRINGFIELD Order Number: 778899
Dept: 010 GROCERY Sub-Dept: 020 CANNED GOODS
123456 CANNED BEANS U M 12 4
";
        let parser = WorksheetParser::new(text);
        let header = parser.parse_header();
        assert_eq!(header.store_number, "4521");
        assert_eq!(header.order_number, "778899");
        assert!(header.dc_number.is_empty());
        assert_eq!(parser.diagnostics().total_lines, 0);
    }

    #[test]
    fn test_parse_twice_is_identical() {
        let mut parser = WorksheetParser::new(SCENARIO_A);
        let first = parser.parse();
        let first_diagnostics = parser.diagnostics().clone();
        let second = parser.parse();
        assert_eq!(first, second);
        assert_eq!(&first_diagnostics, parser.diagnostics());
    }

    #[derive(Clone, Default)]
    struct Recorder {
        events: Arc<Mutex<Vec<String>>>,
    }

    impl ParseObserver for Recorder {
        fn on_department_header(&mut self, line: usize, header: &DepartmentHeader) {
            self.events
                .lock()
                .unwrap()
                .push(format!("{line}:dept:{}", header.dept_number));
        }

        fn on_item(&mut self, line: usize, item: &worksheet_core::Item) {
            self.events
                .lock()
                .unwrap()
                .push(format!("{line}:item:{}", item.sku));
        }

        fn on_unmatched_item(&mut self, line: usize, _text: &str) {
            self.events.lock().unwrap().push(format!("{line}:unmatched"));
        }

        fn on_finished(&mut self, diagnostics: &ParseDiagnostics) {
            self.events
                .lock()
                .unwrap()
                .push(format!("done:{}", diagnostics.items));
        }
    }

    #[test]
    fn test_observer_receives_events_without_changing_output() {
        let text = "\
Page: 1
Dept: 010 GROCERY Sub-Dept: 020 CANNED
123456 CANNED BEANS U M 12 4
999999 ???
";
        let recorder = Recorder::default();
        let events = Arc::clone(&recorder.events);

        let observed = WorksheetParser::new(text).with_observer(recorder).parse();
        let plain = WorksheetParser::new(text)
            .with_observer(observer::NoopObserver)
            .parse();
        assert_eq!(observed, plain);

        let events = events.lock().unwrap().clone();
        assert_eq!(
            events,
            vec!["2:dept:010", "3:item:123456", "4:unmatched", "done:1"]
        );
    }
}
