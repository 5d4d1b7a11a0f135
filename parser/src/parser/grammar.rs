//! Line-shape matchers.
//!
//! Each matcher takes one line and returns the typed fields of its shape, or
//! `None` when the line does not have that shape. Matchers are pure; the
//! hierarchy walker decides which of them to try and when.

use std::sync::LazyLock;

use regex::Regex;
use worksheet_core::{IconCode, Item, Sku};

/// Prefix that introduces a department/sub-department header row.
pub const DEPARTMENT_MARKER: &str = "Dept:";
/// Marker of the store/order header line.
pub const STORE_MARKER: &str = "Store Number:";
/// Marker of the distribution-center header line.
pub const DC_MARKER: &str = "DC#:";
/// Marker of the date/time header line.
pub const DATE_MARKER: &str = "Date:";

static PATTERNS: LazyLock<LinePatterns> = LazyLock::new(LinePatterns::new);

struct LinePatterns {
    department_header: Regex,
    item_row: Regex,
    item_like: Regex,
    store_line: Regex,
    dc_line: Regex,
    date_line: Regex,
}

impl LinePatterns {
    fn new() -> Self {
        // All regexes here are compile-time constants. An expect() failure indicates
        // a programmer error in the pattern, not a runtime condition.
        Self {
            // Dept: 010 GROCERY Sub-Dept: 020 CANNED GOODS
            department_header: Regex::new(
                r"(?s)Dept:\s*([0-9]{3})\s+(.*?)Sub-Dept:\s*([0-9]{3})\s+(.*)",
            )
            .expect("static regex must compile"),
            // SKU, description, icons, quantity, carton quantity, then an
            // optional size code run, underline run or quote mark.
            item_row: Regex::new(
                r#"^([0-9]{3,6})\s+(.+?)(?:\s+([UMTPRO](?:\s+[UMTPRO])*)?)?\s+([0-9]{1,3})\s+([0-9]{1,4})(?:\s+(?:SZ|DO|[A-Z]{2}(?:\s+[A-Z]{2})*)?)?\s*(?:_{2,}|")?$"#,
            )
            .expect("static regex must compile"),
            item_like: Regex::new(r"^[0-9]{6}").expect("static regex must compile"),
            store_line: Regex::new(
                r"Store Number:\s*([0-9]+)\s+(.*?)Order Number:\s*([0-9]+)",
            )
            .expect("static regex must compile"),
            dc_line: Regex::new(r"DC#:\s*([0-9]+)\s+(.*)").expect("static regex must compile"),
            date_line: Regex::new(r"Date:\s*([0-9/]+)\s+.*Time:\s*([0-9:]+)")
                .expect("static regex must compile"),
        }
    }
}

/// Fields of a department/sub-department header row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DepartmentHeader {
    pub dept_number: String,
    pub dept_name: String,
    pub sub_dept_number: String,
    pub sub_dept_name: String,
}

/// Fields of the store/order header line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreLine {
    pub store_number: String,
    pub location: String,
    pub order_number: String,
}

/// Fields of the distribution-center header line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DcLine {
    pub dc_number: String,
    /// Kept exactly as printed, trailing whitespace included.
    pub dc_name: String,
}

/// Fields of the date/time header line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateLine {
    pub date: String,
    pub time: String,
}

/// Matches `Dept: NNN <name> Sub-Dept: NNN <name>`. Names are trimmed and
/// may be empty.
pub fn match_department_header(line: &str) -> Option<DepartmentHeader> {
    let caps = PATTERNS.department_header.captures(line)?;
    Some(DepartmentHeader {
        dept_number: caps[1].to_string(),
        dept_name: caps[2].trim().to_string(),
        sub_dept_number: caps[3].to_string(),
        sub_dept_name: caps[4].trim().to_string(),
    })
}

/// Matches a full item row and builds the [`Item`].
///
/// The icon group and the trailing two-letter code group can both capture
/// uppercase letters; only tokens that are a single icon letter are kept.
pub fn match_item_row(line: &str) -> Option<Item> {
    let caps = PATTERNS.item_row.captures(line)?;

    let sku = Sku::from_digits(&caps[1])?;
    let icons = caps
        .get(3)
        .map_or("", |m| m.as_str())
        .split_whitespace()
        .filter_map(|token| token.parse::<IconCode>().ok())
        .collect();
    let quantity = caps[4].parse().ok()?;
    let carton_qty = caps[5].parse().ok()?;

    Some(Item::new(sku, caps[2].trim(), quantity, icons, carton_qty))
}

/// Returns `true` if the line starts with a six-digit number, i.e. was most
/// likely meant to be an item row.
pub fn looks_like_item_row(line: &str) -> bool {
    PATTERNS.item_like.is_match(line)
}

pub fn match_store_line(line: &str) -> Option<StoreLine> {
    let caps = PATTERNS.store_line.captures(line)?;
    Some(StoreLine {
        store_number: caps[1].to_string(),
        location: caps[2].trim().to_string(),
        order_number: caps[3].to_string(),
    })
}

pub fn match_dc_line(line: &str) -> Option<DcLine> {
    let caps = PATTERNS.dc_line.captures(line)?;
    Some(DcLine {
        dc_number: caps[1].to_string(),
        dc_name: caps[2].to_string(),
    })
}

pub fn match_date_line(line: &str) -> Option<DateLine> {
    let caps = PATTERNS.date_line.captures(line)?;
    Some(DateLine {
        date: caps[1].to_string(),
        time: caps[2].to_string(),
    })
}
