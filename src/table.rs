//! Grid table rendering
//!
//! Turns a header row and uniform data rows into a boxed text table:
//!
//! ```text
//! +------+-------+
//! |   ID | Name  |
//! +======+=======+
//! |    1 | Alice |
//! +------+-------+
//! ```
//! Numeric columns are right-aligned, text columns left-aligned.

use std::fmt;

use crate::record::{Employee, COLUMNS};

/// Horizontal alignment of a cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Left,
    Right,
}

/// A single rendered cell
#[derive(Debug, Clone, PartialEq)]
pub struct Cell {
    text: String,
    align: Align,
}

impl Cell {
    /// Left-aligned text cell
    pub fn text(value: impl Into<String>) -> Self {
        Self {
            text: value.into(),
            align: Align::Left,
        }
    }

    /// Right-aligned numeric cell
    pub fn number(value: impl fmt::Display) -> Self {
        Self {
            text: value.to_string(),
            align: Align::Right,
        }
    }

    fn width(&self) -> usize {
        self.text.chars().count()
    }
}

/// A table of uniform rows under a fixed header
#[derive(Debug, Clone, Default)]
pub struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<Cell>>,
}

impl Table {
    pub fn new<S: Into<String>>(headers: impl IntoIterator<Item = S>) -> Self {
        Self {
            headers: headers.into_iter().map(Into::into).collect(),
            rows: Vec::new(),
        }
    }

    /// Table of employees under the persisted column names
    pub fn from_employees(employees: &[Employee]) -> Self {
        let mut table = Self::new(COLUMNS);
        for e in employees {
            table.push_row(vec![
                Cell::number(e.id),
                Cell::text(e.name.as_str()),
                Cell::text(e.department.as_str()),
                Cell::number(e.age),
                Cell::number(e.salary),
            ]);
        }
        table
    }

    /// Add a row; missing trailing cells render empty, extra cells are dropped
    pub fn push_row(&mut self, mut row: Vec<Cell>) {
        row.resize_with(self.headers.len(), || Cell::text(""));
        self.rows.push(row);
    }

    /// Alignment of a column: taken from its first row, left if empty
    fn column_align(&self, column: usize) -> Align {
        self.rows
            .first()
            .map(|row| row[column].align)
            .unwrap_or(Align::Left)
    }

    fn column_widths(&self) -> Vec<usize> {
        let mut widths: Vec<usize> = self.headers.iter().map(|h| h.chars().count()).collect();
        for row in &self.rows {
            for (i, cell) in row.iter().enumerate() {
                widths[i] = widths[i].max(cell.width());
            }
        }
        widths
    }
}

fn write_rule(f: &mut fmt::Formatter<'_>, widths: &[usize], fill: &str) -> fmt::Result {
    for w in widths {
        write!(f, "+{}", fill.repeat(w + 2))?;
    }
    writeln!(f, "+")
}

fn write_cells<'a>(
    f: &mut fmt::Formatter<'_>,
    widths: &[usize],
    cells: impl Iterator<Item = (&'a str, Align)>,
) -> fmt::Result {
    for ((text, align), width) in cells.zip(widths) {
        match align {
            Align::Left => write!(f, "| {:<width$} ", text, width = width)?,
            Align::Right => write!(f, "| {:>width$} ", text, width = width)?,
        }
    }
    writeln!(f, "|")
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let widths = self.column_widths();

        write_rule(f, &widths, "-")?;
        write_cells(
            f,
            &widths,
            self.headers
                .iter()
                .enumerate()
                .map(|(i, h)| (h.as_str(), self.column_align(i))),
        )?;
        write_rule(f, &widths, "=")?;

        for row in &self.rows {
            write_cells(f, &widths, row.iter().map(|c| (c.text.as_str(), c.align)))?;
            write_rule(f, &widths, "-")?;
        }
        Ok(())
    }
}
