//! One-shot actions
//!
//! The non-interactive counterparts of the menu's add, list and analyze
//! choices. Output goes to any writer; failures come back as errors so
//! the binary can turn them into a non-zero exit status.

use std::io::Write;

use tracing::debug;

use crate::error::{EmprecError, Result};
use crate::record::Employee;
use crate::report::summarize;
use crate::storage::{Backend, RecordStore};
use crate::table::Table;

/// A single action run against a store
///
/// Numeric fields of [`Action::Add`] stay as raw text and are parsed the
/// same way menu input is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Add {
        id: String,
        name: String,
        department: String,
        age: String,
        salary: String,
    },
    List,
    Analyze,
}

/// Run `action` against `store`, writing its result to `out`
pub fn execute<B: Backend, W: Write>(
    store: &RecordStore<B>,
    action: Action,
    mut out: W,
) -> Result<()> {
    match action {
        Action::Add {
            id,
            name,
            department,
            age,
            salary,
        } => {
            let employee = Employee::from_fields(&id, &name, &department, &age, &salary)?;
            if employee.has_unencodable_text() {
                return Err(EmprecError::InvalidInput(
                    "name and department cannot contain commas".to_string(),
                ));
            }
            store.ensure_storage()?;
            store.append(&employee)?;
            debug!(id = employee.id, "Added employee from command line");
            writeln!(out, "Employee {} added successfully!", employee.name)?;
        }
        Action::List => {
            let employees = store.load_all()?;
            if employees.is_empty() {
                writeln!(out, "No employee found in the system.")?;
            } else {
                write!(out, "{}", Table::from_employees(&employees))?;
            }
        }
        Action::Analyze => match summarize(&store.load_all()?) {
            Some(report) => write!(out, "{}", report)?,
            None => writeln!(out, "No employees found for analysis.")?,
        },
    }
    Ok(())
}
