//! Core worksheet types and structural validation.
//!
//! This crate defines the data model produced by parsing a store order
//! worksheet report:
//!
//! - [`Department`]: top-level classification with its sub-departments.
//! - [`SubDepartment`]: second-level classification owning the line items.
//! - [`Item`]: one parsed line item with a normalized [`Sku`] and its
//!   [`IconCode`] annotations.
//! - [`HeaderInfo`]: store, order, distribution-center and date/time fields.
//! - [`Worksheet`]: a bundle of header, departments and
//!   [`WorksheetSummary`] totals.
//!
//! Validation ([`validate_departments`], [`validate_worksheet`]) checks the
//! structural invariants every parse guarantees: normalized SKUs, unique and
//! sorted department numbers, unique and sorted sub-department numbers.
//!
//! # Example
//!
//! ```
//! use worksheet_core::*;
//!
//! let mut dept = Department::new("010", "GROCERY");
//! let mut sub = SubDepartment::new("020", "CANNED GOODS");
//! sub.items.push(Item::new(
//!     Sku::from_digits("123456").unwrap(),
//!     "CANNED BEANS",
//!     12,
//!     vec![IconCode::U, IconCode::M],
//!     4,
//! ));
//! dept.sub_departments.push(sub);
//!
//! assert_eq!(dept.total_quantity(), 12);
//! assert!(validate_departments(&[dept]).is_empty());
//! ```

mod types;
mod validate;
mod worksheet;

pub use types::*;
pub use validate::{ValidationError, validate_departments, validate_worksheet};
pub use worksheet::{Worksheet, WorksheetSummary};
