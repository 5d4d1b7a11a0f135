//! Worksheet type definitions.
//!
//! These types model the department → sub-department → item hierarchy of a
//! store order worksheet. Field names serialize in camelCase so that the JSON
//! form matches what the results screen consumes.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Fixed width of a normalized SKU.
pub const SKU_WIDTH: usize = 6;

/// Fixed width of department and sub-department numbers.
pub const DEPT_NUMBER_WIDTH: usize = 3;

/// Stock-keeping unit identifier, normalized to six ASCII digits.
///
/// Worksheets print short SKUs without leading zeros; [`Sku::from_digits`]
/// pads them back to the fixed width.
///
/// # Examples
///
/// ```
/// use worksheet_core::Sku;
///
/// assert_eq!(Sku::from_digits("123").unwrap().as_str(), "000123");
/// assert_eq!(Sku::from_digits("123456").unwrap().as_str(), "123456");
/// assert!(Sku::from_digits("1234567").is_none());
/// assert!(Sku::from_digits("12a").is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct Sku(String);

impl Sku {
    /// Builds a SKU from a token of 1 to 6 ASCII digits, left-padding with zeros.
    pub fn from_digits(token: &str) -> Option<Self> {
        if token.is_empty()
            || token.len() > SKU_WIDTH
            || !token.bytes().all(|b| b.is_ascii_digit())
        {
            return None;
        }
        Some(Self(format!("{token:0>SKU_WIDTH$}")))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Sku {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for Sku {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Sku::from_digits(&raw)
            .ok_or_else(|| serde::de::Error::custom(format!("invalid SKU: {raw:?}")))
    }
}

/// Single-letter item annotation.
///
/// The alphabet is fixed; the meaning of each letter belongs to the store
/// systems that print the worksheet and is opaque here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IconCode {
    U,
    M,
    T,
    P,
    R,
    O,
}

impl IconCode {
    /// Every icon code in canonical order.
    pub const ALL: [IconCode; 6] = [
        IconCode::U,
        IconCode::M,
        IconCode::T,
        IconCode::P,
        IconCode::R,
        IconCode::O,
    ];

    pub fn from_char(ch: char) -> Option<Self> {
        match ch {
            'U' => Some(Self::U),
            'M' => Some(Self::M),
            'T' => Some(Self::T),
            'P' => Some(Self::P),
            'R' => Some(Self::R),
            'O' => Some(Self::O),
            _ => None,
        }
    }

    pub fn as_char(self) -> char {
        match self {
            Self::U => 'U',
            Self::M => 'M',
            Self::T => 'T',
            Self::P => 'P',
            Self::R => 'R',
            Self::O => 'O',
        }
    }
}

impl fmt::Display for IconCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

impl FromStr for IconCode {
    type Err = String;

    /// Parses a token made of exactly one icon letter.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(ch), None) => {
                IconCode::from_char(ch).ok_or_else(|| format!("unknown icon code: {s}"))
            }
            _ => Err(format!("icon code must be a single letter: {s:?}")),
        }
    }
}

/// One parsed line item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub sku: Sku,
    pub description: String,
    /// Ordered quantity (cases).
    pub quantity: u32,
    pub icons: Vec<IconCode>,
    pub carton_qty: u32,
}

impl Item {
    pub fn new(
        sku: Sku,
        description: impl Into<String>,
        quantity: u32,
        icons: Vec<IconCode>,
        carton_qty: u32,
    ) -> Self {
        Self {
            sku,
            description: description.into(),
            quantity,
            icons,
            carton_qty,
        }
    }

    /// Icons joined with single spaces, as printed on the worksheet.
    pub fn icon_string(&self) -> String {
        self.icons
            .iter()
            .map(|icon| icon.as_char().to_string())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Second-level classification, unique by number within its department.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubDepartment {
    pub sub_dept_number: String,
    pub sub_dept_name: String,
    /// Items in the order their lines appeared.
    pub items: Vec<Item>,
}

impl SubDepartment {
    pub fn new(number: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            sub_dept_number: number.into(),
            sub_dept_name: name.into(),
            items: Vec::new(),
        }
    }

    /// Sum of item quantities.
    pub fn total_quantity(&self) -> u64 {
        self.items.iter().map(|item| u64::from(item.quantity)).sum()
    }
}

/// Top-level classification, unique by number across one parse.
///
/// # Examples
///
/// ```
/// use worksheet_core::{Department, SubDepartment};
///
/// let mut dept = Department::new("010", "GROCERY");
/// dept.sub_departments.push(SubDepartment::new("020", "CANNED GOODS"));
///
/// assert!(dept.find_sub_department("020").is_some());
/// assert!(!dept.is_expanded);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Department {
    pub dept_number: String,
    pub dept_name: String,
    pub sub_departments: Vec<SubDepartment>,
    /// Presentation-only flag; always `false` when produced by a parse.
    #[serde(default)]
    pub is_expanded: bool,
}

impl Department {
    pub fn new(number: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            dept_number: number.into(),
            dept_name: name.into(),
            sub_departments: Vec::new(),
            is_expanded: false,
        }
    }

    /// Finds a sub-department by its number.
    pub fn find_sub_department(&self, number: &str) -> Option<&SubDepartment> {
        self.sub_departments
            .iter()
            .find(|sub| sub.sub_dept_number == number)
    }

    /// Number of items across all sub-departments.
    pub fn item_count(&self) -> usize {
        self.sub_departments.iter().map(|sub| sub.items.len()).sum()
    }

    /// Sum of item quantities across all sub-departments.
    pub fn total_quantity(&self) -> u64 {
        self.sub_departments
            .iter()
            .map(SubDepartment::total_quantity)
            .sum()
    }
}

/// Report header fields.
///
/// Every field is independent and defaults to an empty string when its line
/// is missing or malformed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HeaderInfo {
    pub store_number: String,
    pub location: String,
    pub order_number: String,
    pub dc_number: String,
    pub dc_name: String,
    pub date: String,
    pub time: String,
}

impl HeaderInfo {
    /// Returns `true` when no header field was found.
    pub fn is_empty(&self) -> bool {
        self.store_number.is_empty()
            && self.location.is_empty()
            && self.order_number.is_empty()
            && self.dc_number.is_empty()
            && self.dc_name.is_empty()
            && self.date.is_empty()
            && self.time.is_empty()
    }
}
