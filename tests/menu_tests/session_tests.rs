//! Tests for the interactive menu session
//!
//! These tests verify:
//! - Dispatching the four menu actions
//! - Abandoning an add on malformed input without writing
//! - Graceful exit on end of input
//! - Store errors are reported without ending the session

use std::io::Cursor;

use emprec::menu::{Flow, Session};
use emprec::storage::{MemoryBackend, RecordStore};
use emprec::Employee;

// =============================================================================
// Helper Functions
// =============================================================================

const HEADER_ONLY: &str = "ID,Name,Department,Age,Salary\n";

fn seeded_store() -> RecordStore<MemoryBackend> {
    RecordStore::new(MemoryBackend::with_contents(format!(
        "{}1,Alice,Engineering,30,75000.0\n2,Bob,Sales,45,60000.0\n",
        HEADER_ONLY
    )))
}

fn empty_store() -> RecordStore<MemoryBackend> {
    RecordStore::new(MemoryBackend::with_contents(HEADER_ONLY))
}

/// Run a full session over `input`, returning everything it printed
fn run_session(store: &RecordStore<MemoryBackend>, input: &str) -> String {
    let mut output = Vec::new();
    Session::new(store, Cursor::new(input.as_bytes()), &mut output)
        .run()
        .unwrap();
    String::from_utf8(output).unwrap()
}

// =============================================================================
// Menu Loop Tests
// =============================================================================

#[test]
fn test_exit_choice() {
    let output = run_session(&empty_store(), "4\n");

    assert!(output.contains("==== Employee Management System ===="));
    assert!(output.contains("1. Add Employee"));
    assert!(output.contains("4. Exit"));
    assert!(output.ends_with("Exiting the system. Goodbye!\n"));
}

#[test]
fn test_invalid_choice_redisplays_menu() {
    let output = run_session(&empty_store(), "9\n4\n");

    assert!(output.contains("Invalid choice! Please enter a number between 1-4."));
    assert_eq!(output.matches("==== Employee Management System ====").count(), 2);
}

#[test]
fn test_end_of_input_terminates() {
    let output = run_session(&empty_store(), "");
    assert!(output.ends_with("\nTerminating execution of the program.\n"));
}

#[test]
fn test_padded_choice_is_invalid() {
    let output = run_session(&empty_store(), " 4 \n4\n");

    assert!(output.contains("Invalid choice! Please enter a number between 1-4."));
    assert!(output.ends_with("Exiting the system. Goodbye!\n"));
}

#[test]
fn test_crlf_choice_is_accepted() {
    let output = run_session(&empty_store(), "4\r\n");
    assert!(output.ends_with("Exiting the system. Goodbye!\n"));
}

// =============================================================================
// Add Employee Tests
// =============================================================================

#[test]
fn test_add_employee() {
    let store = empty_store();
    let output = run_session(&store, "1\n7\nCarol\nResearch\n28\n81000.5\n4\n");

    assert!(output.contains("---- Add New Employee ----"));
    assert!(output.contains("Employee Carol added successfully!"));
    assert_eq!(
        store.load_all().unwrap(),
        vec![Employee::new(7, "Carol", "Research", 28, 81000.5)]
    );
}

#[test]
fn test_add_rejects_text_id_immediately() {
    let store = seeded_store();
    let before = store.backend().contents();

    // "4" is consumed as the next menu choice, not as a name
    let output = run_session(&store, "1\nseven\n4\n");

    assert!(output.contains("Invalid input! Please enter correct data types."));
    assert!(!output.contains("Enter Employee Name: "));
    assert!(output.ends_with("Exiting the system. Goodbye!\n"));
    assert_eq!(store.backend().contents(), before);
}

#[test]
fn test_add_rejects_text_salary() {
    let store = seeded_store();
    let before = store.backend().contents();

    let output = run_session(&store, "1\n3\nCarol\nResearch\n28\nplenty\n4\n");

    assert!(output.contains("Invalid input! Please enter correct data types."));
    assert_eq!(store.backend().contents(), before);
}

#[test]
fn test_add_rejects_embedded_comma() {
    let store = seeded_store();
    let before = store.backend().contents();

    let output = run_session(&store, "1\n3\nSmith, Carol\nResearch\n28\n100\n4\n");

    assert!(output.contains("Invalid input! Name and department cannot contain commas."));
    assert_eq!(store.backend().contents(), before);
}

#[test]
fn test_add_interrupted_mid_prompt() {
    let store = seeded_store();
    let before = store.backend().contents();

    let output = run_session(&store, "1\n3\nCarol\n");

    assert!(output.ends_with("\nTerminating execution of the program.\n"));
    assert_eq!(store.backend().contents(), before);
}

#[test]
fn test_add_employee_flow_continues() {
    let store = empty_store();
    let mut output = Vec::new();
    let mut session = Session::new(
        &store,
        Cursor::new("1\nAnn\nOps\n40\n10\n".as_bytes()),
        &mut output,
    );

    assert_eq!(session.add_employee().unwrap(), Flow::Continue);
    assert_eq!(store.load_all().unwrap()[0].name, "Ann");
}

// =============================================================================
// View / Analyze Tests
// =============================================================================

#[test]
fn test_view_empty_store() {
    let output = run_session(&empty_store(), "2\n4\n");
    assert!(output.contains("No employee found in the system."));
}

#[test]
fn test_view_prints_table() {
    let output = run_session(&seeded_store(), "2\n4\n");

    assert!(output.contains("---- All Employees ----"));
    assert!(output.contains("| ID | Name  | Department  | Age | Salary |"));
    assert!(output.contains("|  1 | Alice | Engineering |  30 |  75000 |"));
    assert!(output.contains("|  2 | Bob   | Sales       |  45 |  60000 |"));
}

#[test]
fn test_analyze_empty_store() {
    let output = run_session(&empty_store(), "3\n4\n");
    assert!(output.contains("No employees found for analysis."));
}

#[test]
fn test_analyze_prints_report() {
    let output = run_session(&seeded_store(), "3\n4\n");

    assert!(output.contains("---- Data Analysis ----"));
    assert!(output.contains("Total Employees: 2"));
    assert!(output.contains("Average Salary: 67500.00"));
    assert!(output.contains("Highest Salary: 75000.0"));
    assert!(output.contains("Lowest Salary: 60000.0"));
    assert!(output.contains("Engineering     1"));
    assert!(output.contains("Sales           1"));
}

#[test]
fn test_missing_store_is_created_on_view() {
    let store = RecordStore::new(MemoryBackend::new());
    let output = run_session(&store, "2\n4\n");

    assert!(output.contains("No employee found in the system."));
    assert_eq!(store.backend().contents().unwrap(), HEADER_ONLY);
}

#[test]
fn test_corrupt_store_reports_error_and_continues() {
    let store = RecordStore::new(MemoryBackend::with_contents(format!(
        "{}1,Alice,Engineering,thirty,75000.0\n",
        HEADER_ONLY
    )));
    let output = run_session(&store, "3\n4\n");

    assert!(output.contains("Error: Line 2: invalid Age value \"thirty\""));
    assert!(output.ends_with("Exiting the system. Goodbye!\n"));
}
