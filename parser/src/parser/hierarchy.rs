//! Department → sub-department → item assembly.
//!
//! Departments live in an arena addressed by index; the builder tracks the
//! current section as a pair of indices instead of references. A department
//! number is inserted on first sight and reused afterwards, and the same rule
//! applies to sub-department numbers inside a department, so repeated section
//! headers merge into the existing nodes.

use std::collections::HashMap;

use worksheet_core::{Department, Item, SubDepartment};

use super::grammar::DepartmentHeader;

/// Position of the active section inside the arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionCursor {
    pub department: usize,
    pub sub_department: usize,
}

/// Stateful walker output: departments in first-seen order.
#[derive(Debug, Default)]
pub struct HierarchyBuilder {
    departments: Vec<Department>,
    by_number: HashMap<String, usize>,
    cursor: Option<SectionCursor>,
    total_cases: u64,
}

impl HierarchyBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` once a department/sub-department header has been seen.
    pub fn in_section(&self) -> bool {
        self.cursor.is_some()
    }

    pub fn cursor(&self) -> Option<SectionCursor> {
        self.cursor
    }

    /// Resolves or creates the department and sub-department named by
    /// `header` and makes them current.
    ///
    /// The first-seen department and sub-department names win; later headers
    /// with the same numbers only switch context.
    pub fn enter_section(&mut self, header: &DepartmentHeader) -> SectionCursor {
        let department = match self.by_number.get(&header.dept_number) {
            Some(&index) => index,
            None => {
                let index = self.departments.len();
                self.departments
                    .push(Department::new(&header.dept_number, &header.dept_name));
                self.by_number.insert(header.dept_number.clone(), index);
                index
            }
        };

        let subs = &mut self.departments[department].sub_departments;
        let sub_department = match subs
            .iter()
            .position(|sub| sub.sub_dept_number == header.sub_dept_number)
        {
            Some(index) => index,
            None => {
                subs.push(SubDepartment::new(
                    &header.sub_dept_number,
                    &header.sub_dept_name,
                ));
                subs.len() - 1
            }
        };

        let cursor = SectionCursor {
            department,
            sub_department,
        };
        self.cursor = Some(cursor);
        cursor
    }

    /// Appends `item` to the current sub-department and returns it as stored.
    ///
    /// Returns the item back when there is no current section; the caller
    /// decides whether to report it.
    pub fn push_item(&mut self, item: Item) -> Result<&Item, Item> {
        let Some(cursor) = self.cursor else {
            return Err(item);
        };
        self.total_cases += u64::from(item.quantity);
        let items = &mut self.departments[cursor.department].sub_departments
            [cursor.sub_department]
            .items;
        items.push(item);
        Ok(&items[items.len() - 1])
    }

    /// Running sum of quantities of attached items.
    pub fn total_cases(&self) -> u64 {
        self.total_cases
    }

    pub fn department_count(&self) -> usize {
        self.departments.len()
    }

    /// Consumes the builder, returning departments in first-seen order.
    pub fn finish(self) -> Vec<Department> {
        self.departments
    }
}
