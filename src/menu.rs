//! Interactive menu
//!
//! Numbered text menu driving the record store and the report engine.
//! Input and output are generic so a session can run against in-memory
//! buffers as well as a terminal.
//!
//! ## Actions
//! - 1: add an employee (prompts for each field)
//! - 2: list every employee as a grid table
//! - 3: print the salary/department report
//! - 4: exit
//!
//! End of input, an interrupted read, or Ctrl+C (through the binary's
//! signal handler) ends the session the same way exit does, with a
//! different farewell line.

use std::io::{self, BufRead, ErrorKind, Write};

use tracing::{debug, error};

use crate::error::{EmprecError, Result};
use crate::record::{parse_float, parse_int, Employee};
use crate::report::summarize;
use crate::storage::{Backend, RecordStore};
use crate::table::Table;

/// Farewell printed when the session is interrupted rather than exited
pub const TERMINATE_MESSAGE: &str = "Terminating execution of the program.";

const INVALID_TYPES: &str = "Invalid input! Please enter correct data types.";
const INVALID_TEXT: &str = "Invalid input! Name and department cannot contain commas.";

/// Whether the menu loop keeps going after an action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

/// One interactive run over a record store
pub struct Session<'s, B: Backend, R: BufRead, W: Write> {
    store: &'s RecordStore<B>,
    input: R,
    output: W,
}

impl<'s, B: Backend, R: BufRead, W: Write> Session<'s, B, R, W> {
    pub fn new(store: &'s RecordStore<B>, input: R, output: W) -> Self {
        Self {
            store,
            input,
            output,
        }
    }

    /// Run the menu loop until exit, end of input, or interrupt
    ///
    /// Store failures are printed and the loop continues; only failures
    /// to write to the output end the session with an error.
    pub fn run(&mut self) -> Result<()> {
        loop {
            self.show_menu()?;

            let Some(choice) = self.prompt("\nEnter your choice (1-4): ")? else {
                return self.terminate();
            };

            // Exact match: padded input such as " 4 " is an invalid choice
            let flow = match choice.as_str() {
                "1" => self.add_employee()?,
                "2" => self.view_employees()?,
                "3" => self.analyze_data()?,
                "4" => {
                    writeln!(self.output, "Exiting the system. Goodbye!")?;
                    Flow::Exit
                }
                other => {
                    debug!(choice = other, "Rejected menu choice");
                    writeln!(
                        self.output,
                        "Invalid choice! Please enter a number between 1-4."
                    )?;
                    Flow::Continue
                }
            };

            if flow == Flow::Exit {
                return Ok(());
            }
        }
    }

    /// Prompt for each field and append the new employee
    ///
    /// The first field that fails to parse abandons the add; nothing is
    /// written in that case.
    pub fn add_employee(&mut self) -> Result<Flow> {
        writeln!(self.output, "\n---- Add New Employee ----")?;

        let Some(id) = self.prompt("Enter Employee ID: ")? else {
            return self.interrupted();
        };
        let Some(id) = parse_int(&id) else {
            return self.reject(INVALID_TYPES);
        };

        let Some(name) = self.prompt("Enter Employee Name: ")? else {
            return self.interrupted();
        };
        let Some(department) = self.prompt("Enter Department: ")? else {
            return self.interrupted();
        };

        let Some(age) = self.prompt("Enter Age: ")? else {
            return self.interrupted();
        };
        let Some(age) = parse_int(&age) else {
            return self.reject(INVALID_TYPES);
        };

        let Some(salary) = self.prompt("Enter Salary: ")? else {
            return self.interrupted();
        };
        let Some(salary) = parse_float(&salary) else {
            return self.reject(INVALID_TYPES);
        };

        let employee = Employee::new(id, name, department, age, salary);
        if employee.has_unencodable_text() {
            return self.reject(INVALID_TEXT);
        }

        match self.store.append(&employee) {
            Ok(_) => writeln!(
                self.output,
                "\nEmployee {} added successfully!",
                employee.name
            )?,
            Err(e) => self.report_error(e)?,
        }
        Ok(Flow::Continue)
    }

    /// Print every employee as a grid table
    pub fn view_employees(&mut self) -> Result<Flow> {
        let employees = match self.store.load_all() {
            Ok(employees) => employees,
            Err(e) => {
                self.report_error(e)?;
                return Ok(Flow::Continue);
            }
        };

        if employees.is_empty() {
            writeln!(self.output, "\nNo employee found in the system.")?;
            return Ok(Flow::Continue);
        }

        writeln!(self.output, "\n---- All Employees ----")?;
        write!(self.output, "{}", Table::from_employees(&employees))?;
        Ok(Flow::Continue)
    }

    /// Print salary statistics and per-department counts
    pub fn analyze_data(&mut self) -> Result<Flow> {
        let employees = match self.store.load_all() {
            Ok(employees) => employees,
            Err(e) => {
                self.report_error(e)?;
                return Ok(Flow::Continue);
            }
        };

        let Some(report) = summarize(&employees) else {
            writeln!(self.output, "No employees found for analysis.")?;
            return Ok(Flow::Continue);
        };

        writeln!(self.output, "\n---- Data Analysis ----")?;
        write!(self.output, "{}", report)?;
        Ok(Flow::Continue)
    }

    // =========================================================================
    // Private Helpers
    // =========================================================================

    fn show_menu(&mut self) -> Result<()> {
        writeln!(self.output, "\n==== Employee Management System ====")?;
        writeln!(self.output, "1. Add Employee")?;
        writeln!(self.output, "2. View All Employees")?;
        writeln!(self.output, "3. Analyze Data")?;
        writeln!(self.output, "4. Exit")?;
        Ok(())
    }

    /// Print `message` and read one line without its line terminator
    ///
    /// `None` means end of input or an interrupted read.
    fn prompt(&mut self, message: &str) -> Result<Option<String>> {
        write!(self.output, "{}", message)?;
        self.output.flush()?;

        let mut line = String::new();
        match self.input.read_line(&mut line) {
            Ok(0) => Ok(None),
            Ok(_) => {
                let trimmed = line.trim_end_matches(|c: char| c == '\n' || c == '\r').len();
                line.truncate(trimmed);
                Ok(Some(line))
            }
            Err(e) if e.kind() == ErrorKind::Interrupted => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn reject(&mut self, message: &str) -> Result<Flow> {
        writeln!(self.output, "{}", message)?;
        Ok(Flow::Continue)
    }

    fn report_error(&mut self, e: EmprecError) -> Result<()> {
        error!(error = %e, "Store operation failed");
        writeln!(self.output, "Error: {}", e)?;
        Ok(())
    }

    fn interrupted(&mut self) -> Result<Flow> {
        self.terminate()?;
        Ok(Flow::Exit)
    }

    fn terminate(&mut self) -> Result<()> {
        write_interrupt_notice(&mut self.output)?;
        Ok(())
    }
}

/// Write the interrupt farewell; also used by the Ctrl+C handler
pub fn write_interrupt_notice<W: Write + ?Sized>(output: &mut W) -> io::Result<()> {
    writeln!(output, "\n{}", TERMINATE_MESSAGE)?;
    output.flush()
}
