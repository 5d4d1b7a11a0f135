//! Structural validation of parsed departments.
//!
//! A department list produced by a parse always satisfies these invariants;
//! validation is for lists that come from elsewhere, e.g. JSON exported by an
//! earlier run and edited by hand.
//!
//! # Examples
//!
//! ```
//! use worksheet_core::*;
//!
//! let departments = vec![
//!     Department::new("010", "GROCERY"),
//!     Department::new("020", "DAIRY"),
//! ];
//! assert!(validate_departments(&departments).is_empty());
//!
//! // Out of order → error
//! let reversed: Vec<_> = departments.into_iter().rev().collect();
//! assert!(validate_departments(&reversed)
//!     .iter()
//!     .any(|e| matches!(e, ValidationError::DepartmentsOutOfOrder { .. })));
//! ```

use std::collections::HashSet;

use thiserror::Error;

use crate::{DEPT_NUMBER_WIDTH, Department, SKU_WIDTH, SubDepartment, Worksheet, WorksheetSummary};

/// Worksheet validation errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Department number is not three ASCII digits.
    #[error("invalid department number: {0:?}")]
    InvalidDepartmentNumber(String),
    /// Sub-department number is not three ASCII digits.
    #[error("invalid sub-department number in department {dept}: {number:?}")]
    InvalidSubDepartmentNumber { dept: String, number: String },
    /// Two departments share a number.
    #[error("duplicate department: {0}")]
    DuplicateDepartment(String),
    /// Two sub-departments in the same department share a number.
    #[error("duplicate sub-department {number} in department {dept}")]
    DuplicateSubDepartment { dept: String, number: String },
    /// Departments are not sorted by number.
    #[error("department {current} listed after {previous}")]
    DepartmentsOutOfOrder { previous: String, current: String },
    /// Sub-departments are not sorted by number.
    #[error("sub-department {current} listed after {previous} in department {dept}")]
    SubDepartmentsOutOfOrder {
        dept: String,
        previous: String,
        current: String,
    },
    /// SKU is not six ASCII digits.
    #[error("invalid SKU {sku:?} in {dept}/{sub_dept}")]
    InvalidSku {
        dept: String,
        sub_dept: String,
        sku: String,
    },
    /// Stored summary does not match the departments.
    #[error("summary does not match departments")]
    SummaryMismatch,
}

/// Validates a full worksheet, including its summary totals.
pub fn validate_worksheet(worksheet: &Worksheet) -> Vec<ValidationError> {
    let mut errors = validate_departments(&worksheet.departments);
    if WorksheetSummary::from_departments(&worksheet.departments) != worksheet.summary {
        errors.push(ValidationError::SummaryMismatch);
    }
    errors
}

/// Validates number formats, uniqueness and ordering of departments,
/// sub-departments and SKUs.
pub fn validate_departments(departments: &[Department]) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    let mut seen: HashSet<&str> = HashSet::new();
    let mut previous: Option<&str> = None;

    for dept in departments {
        let number = dept.dept_number.as_str();
        if !is_fixed_width_number(number) {
            errors.push(ValidationError::InvalidDepartmentNumber(number.to_string()));
        }
        if !seen.insert(number) {
            errors.push(ValidationError::DuplicateDepartment(number.to_string()));
        }
        if let Some(prev) = previous.filter(|prev| *prev > number) {
            errors.push(ValidationError::DepartmentsOutOfOrder {
                previous: prev.to_string(),
                current: number.to_string(),
            });
        }
        previous = Some(number);

        errors.extend(validate_sub_departments(number, &dept.sub_departments));
    }

    errors
}

fn validate_sub_departments(dept: &str, subs: &[SubDepartment]) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    let mut seen: HashSet<&str> = HashSet::new();
    let mut previous: Option<&str> = None;

    for sub in subs {
        let number = sub.sub_dept_number.as_str();
        if !is_fixed_width_number(number) {
            errors.push(ValidationError::InvalidSubDepartmentNumber {
                dept: dept.to_string(),
                number: number.to_string(),
            });
        }
        if !seen.insert(number) {
            errors.push(ValidationError::DuplicateSubDepartment {
                dept: dept.to_string(),
                number: number.to_string(),
            });
        }
        if let Some(prev) = previous.filter(|prev| *prev > number) {
            errors.push(ValidationError::SubDepartmentsOutOfOrder {
                dept: dept.to_string(),
                previous: prev.to_string(),
                current: number.to_string(),
            });
        }
        previous = Some(number);

        for item in &sub.items {
            let sku = item.sku.as_str();
            if sku.len() != SKU_WIDTH || !sku.bytes().all(|b| b.is_ascii_digit()) {
                errors.push(ValidationError::InvalidSku {
                    dept: dept.to_string(),
                    sub_dept: number.to_string(),
                    sku: sku.to_string(),
                });
            }
        }
    }

    errors
}

fn is_fixed_width_number(value: &str) -> bool {
    value.len() == DEPT_NUMBER_WIDTH && value.bytes().all(|b| b.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{HeaderInfo, Item, Sku};

    #[test]
    fn test_validate_rejects_duplicate_departments() {
        let departments = vec![
            Department::new("010", "GROCERY"),
            Department::new("010", "GROCERY AGAIN"),
        ];
        let errors = validate_departments(&departments);
        assert_eq!(
            errors,
            vec![ValidationError::DuplicateDepartment("010".to_string())]
        );
    }

    #[test]
    fn test_validate_rejects_unsorted_sub_departments() {
        let mut dept = Department::new("010", "GROCERY");
        dept.sub_departments.push(SubDepartment::new("030", "B"));
        dept.sub_departments.push(SubDepartment::new("020", "A"));

        let errors = validate_departments(&[dept]);
        assert_eq!(
            errors,
            vec![ValidationError::SubDepartmentsOutOfOrder {
                dept: "010".to_string(),
                previous: "030".to_string(),
                current: "020".to_string(),
            }]
        );
    }

    #[test]
    fn test_validate_rejects_bad_numbers() {
        let mut dept = Department::new("10", "GROCERY");
        dept.sub_departments.push(SubDepartment::new("2a0", "A"));

        let errors = validate_departments(&[dept]);
        assert!(errors.contains(&ValidationError::InvalidDepartmentNumber("10".to_string())));
        assert!(errors.iter().any(|e| matches!(
            e,
            ValidationError::InvalidSubDepartmentNumber { number, .. } if number == "2a0"
        )));
    }

    #[test]
    fn test_validate_worksheet_detects_summary_mismatch() {
        let mut dept = Department::new("010", "GROCERY");
        let mut sub = SubDepartment::new("020", "CANNED GOODS");
        sub.items.push(Item::new(
            Sku::from_digits("123456").unwrap(),
            "CANNED BEANS",
            12,
            Vec::new(),
            4,
        ));
        dept.sub_departments.push(sub);

        let mut worksheet = Worksheet::new(HeaderInfo::default(), vec![dept]);
        assert!(validate_worksheet(&worksheet).is_empty());

        worksheet.summary.total_cases = 99;
        assert_eq!(
            validate_worksheet(&worksheet),
            vec![ValidationError::SummaryMismatch]
        );
    }
}
