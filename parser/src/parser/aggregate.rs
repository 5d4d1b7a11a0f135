//! Post-pass ordering.

use worksheet_core::Department;

/// Sorts departments by number and each department's sub-departments by
/// number. Items keep their encounter order.
///
/// Numbers are fixed-width digit strings, so plain string ordering is
/// numeric ordering.
pub fn sort_departments(departments: &mut [Department]) {
    departments.sort_by(|a, b| a.dept_number.cmp(&b.dept_number));
    for dept in departments.iter_mut() {
        dept.sub_departments
            .sort_by(|a, b| a.sub_dept_number.cmp(&b.sub_dept_number));
    }
}
