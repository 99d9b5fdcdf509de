//! Report Engine
//!
//! Aggregate statistics over a sequence of employee records.

use std::fmt;

use crate::record::{format_salary, Employee};

/// Width the department column is padded to in the rendered report
const DEPARTMENT_WIDTH: usize = 15;

/// Computed aggregate view of a record sequence
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    /// Number of records summarized (always at least 1)
    pub count: usize,

    pub average_salary: f64,
    pub max_salary: f64,
    pub min_salary: f64,

    /// Head count per department, in first-seen order
    pub department_counts: DepartmentCounts,
}

/// Summarize `records`
///
/// Returns `None` for an empty slice: there is nothing to report.
pub fn summarize(records: &[Employee]) -> Option<Report> {
    let first = records.first()?;

    let mut total = 0.0;
    let mut max_salary = first.salary;
    let mut min_salary = first.salary;
    let mut department_counts = DepartmentCounts::default();

    for employee in records {
        total += employee.salary;
        max_salary = nan_aware(max_salary, employee.salary, f64::max);
        min_salary = nan_aware(min_salary, employee.salary, f64::min);
        department_counts.record(&employee.department);
    }

    Some(Report {
        count: records.len(),
        average_salary: total / records.len() as f64,
        max_salary,
        min_salary,
        department_counts,
    })
}

/// Apply `pick` unless either side is NaN, in which case the result is NaN
fn nan_aware(current: f64, next: f64, pick: fn(f64, f64) -> f64) -> f64 {
    if current.is_nan() || next.is_nan() {
        f64::NAN
    } else {
        pick(current, next)
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Total Employees: {}", self.count)?;
        writeln!(f, "Average Salary: {:.2}", self.average_salary)?;
        writeln!(f, "Highest Salary: {}", format_salary(self.max_salary))?;
        writeln!(f, "Lowest Salary: {}", format_salary(self.min_salary))?;

        writeln!(f)?;
        writeln!(f, "Department-wise Count:")?;
        for (department, count) in self.department_counts.iter() {
            writeln!(f, "{:<width$} {}", department, count, width = DEPARTMENT_WIDTH)?;
        }
        Ok(())
    }
}

// =============================================================================
// Department Counts
// =============================================================================

/// Department → count mapping that iterates in insertion order
///
/// Department lists are short, so lookups are a linear scan.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DepartmentCounts {
    entries: Vec<(String, usize)>,
}

impl DepartmentCounts {
    /// Count one more employee in `department`
    fn record(&mut self, department: &str) {
        match self.entries.iter_mut().find(|(name, _)| name == department) {
            Some((_, count)) => *count += 1,
            None => self.entries.push((department.to_string(), 1)),
        }
    }

    /// Count for `department`, if any employee belongs to it
    pub fn get(&self, department: &str) -> Option<usize> {
        self.entries
            .iter()
            .find(|(name, _)| name == department)
            .map(|(_, count)| *count)
    }

    /// Iterate `(department, count)` pairs in first-seen order
    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.entries.iter().map(|(name, count)| (name.as_str(), *count))
    }
}
