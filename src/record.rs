//! Employee record definition
//!
//! Defines the single entity the store persists, along with its
//! line-level encoding.
//!
//! ## Line Format
//! ```text
//! ┌──────┬────────┬──────────────┬───────┬──────────┐
//! │  ID  │  Name  │  Department  │  Age  │  Salary  │
//! └──────┴────────┴──────────────┴───────┴──────────┘
//!   i64    text       text         i64      f64
//! ```
//! Fields are joined by a bare comma. There is no quoting, so a comma
//! inside a text field shifts every following field on that line.

use crate::error::{EmprecError, Result};

/// Field separator used on disk
pub const DELIMITER: char = ',';

/// Number of fields in every data line
pub const FIELD_COUNT: usize = 5;

/// Column names, in persisted order
pub const COLUMNS: [&str; FIELD_COUNT] = ["ID", "Name", "Department", "Age", "Salary"];

/// One employee's fixed five-field tuple
#[derive(Debug, Clone, PartialEq)]
pub struct Employee {
    pub id: i64,
    pub name: String,
    pub department: String,
    pub age: i64,
    pub salary: f64,
}

impl Employee {
    /// Create a record from already-typed values
    pub fn new(
        id: i64,
        name: impl Into<String>,
        department: impl Into<String>,
        age: i64,
        salary: f64,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            department: department.into(),
            age,
            salary,
        }
    }

    /// Build a record from raw user text
    ///
    /// Numeric fields ignore surrounding whitespace; name and department
    /// are kept verbatim. Values are not range-checked.
    pub fn from_fields(
        id: &str,
        name: &str,
        department: &str,
        age: &str,
        salary: &str,
    ) -> Result<Self> {
        let id = parse_int(id).ok_or_else(|| invalid_input("ID", id))?;
        let age = parse_int(age).ok_or_else(|| invalid_input("Age", age))?;
        let salary = parse_float(salary).ok_or_else(|| invalid_input("Salary", salary))?;
        Ok(Self::new(id, name, department, age, salary))
    }

    /// Parse one persisted data line (already trimmed, non-blank)
    ///
    /// `line_no` is 1-based and only used for error reporting.
    pub fn parse_line(line: &str, line_no: usize) -> Result<Self> {
        let fields: Vec<&str> = line.split(DELIMITER).collect();
        if fields.len() != FIELD_COUNT {
            return Err(EmprecError::MalformedLine {
                line: line_no,
                fields: fields.len(),
            });
        }

        let parse_error = |field: &'static str, value: &str| EmprecError::Parse {
            line: line_no,
            field,
            value: value.to_string(),
        };

        let id = parse_int(fields[0]).ok_or_else(|| parse_error("ID", fields[0]))?;
        let age = parse_int(fields[3]).ok_or_else(|| parse_error("Age", fields[3]))?;
        let salary = parse_float(fields[4]).ok_or_else(|| parse_error("Salary", fields[4]))?;

        Ok(Self::new(id, fields[1], fields[2], age, salary))
    }

    /// Encode as a persisted data line, without the trailing newline
    pub fn to_line(&self) -> String {
        format!(
            "{}{d}{}{d}{}{d}{}{d}{}",
            self.id,
            self.name,
            self.department,
            self.age,
            format_salary(self.salary),
            d = DELIMITER,
        )
    }

    /// True if a text field contains a character the line format cannot hold
    pub fn has_unencodable_text(&self) -> bool {
        [&self.name, &self.department]
            .iter()
            .any(|field| field.contains(DELIMITER) || field.contains('\n'))
    }
}

/// Format a salary in shortest round-trip form, keeping `.0` on whole numbers
///
/// 75000.0 → "75000.0", 1234.5 → "1234.5"
pub fn format_salary(salary: f64) -> String {
    format!("{:?}", salary)
}

/// Parse an integer field, ignoring surrounding whitespace
pub(crate) fn parse_int(text: &str) -> Option<i64> {
    text.trim().parse().ok()
}

/// Parse a floating point field, ignoring surrounding whitespace
pub(crate) fn parse_float(text: &str) -> Option<f64> {
    text.trim().parse().ok()
}

fn invalid_input(field: &str, value: &str) -> EmprecError {
    EmprecError::InvalidInput(format!("{} must be a number, got {:?}", field, value))
}
