use serde::{Deserialize, Serialize};

use crate::{Department, HeaderInfo};

/// Aggregate totals over a parsed department list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorksheetSummary {
    pub department_count: usize,
    pub sub_department_count: usize,
    pub item_count: usize,
    /// Sum of item quantities.
    pub total_cases: u64,
}

impl WorksheetSummary {
    /// Computes totals for the given departments.
    ///
    /// # Examples
    ///
    /// ```
    /// use worksheet_core::{Department, SubDepartment, WorksheetSummary};
    ///
    /// let mut dept = Department::new("010", "GROCERY");
    /// dept.sub_departments.push(SubDepartment::new("020", "CANNED GOODS"));
    ///
    /// let summary = WorksheetSummary::from_departments(&[dept]);
    /// assert_eq!(summary.department_count, 1);
    /// assert_eq!(summary.sub_department_count, 1);
    /// assert_eq!(summary.item_count, 0);
    /// ```
    pub fn from_departments(departments: &[Department]) -> Self {
        Self {
            department_count: departments.len(),
            sub_department_count: departments
                .iter()
                .map(|dept| dept.sub_departments.len())
                .sum(),
            item_count: departments.iter().map(Department::item_count).sum(),
            total_cases: departments.iter().map(Department::total_quantity).sum(),
        }
    }
}

/// One fully parsed worksheet: header record, sorted departments and totals.
///
/// A worksheet is rebuilt from scratch on every parse and never mutated
/// afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Worksheet {
    pub header: HeaderInfo,
    pub departments: Vec<Department>,
    pub summary: WorksheetSummary,
}

impl Worksheet {
    /// Bundles a header with departments, computing the summary.
    pub fn new(header: HeaderInfo, departments: Vec<Department>) -> Self {
        let summary = WorksheetSummary::from_departments(&departments);
        Self {
            header,
            departments,
            summary,
        }
    }

    /// Finds a department by its number.
    pub fn find_department(&self, number: &str) -> Option<&Department> {
        self.departments
            .iter()
            .find(|dept| dept.dept_number == number)
    }

    /// Returns `true` when neither header fields nor departments were found.
    pub fn is_empty(&self) -> bool {
        self.header.is_empty() && self.departments.is_empty()
    }
}
