//! Record Store
//!
//! Owns the delimited-text representation of every employee record.
//!
//! ## Responsibilities
//! - Create the backing resource with its header on first use
//! - Re-parse the whole resource on every load
//! - Append one line per new record, never rewriting existing content

use std::io::BufRead;
use std::path::Path;

use tracing::{debug, info, warn};

use crate::config::Config;
use crate::error::Result;
use crate::record::Employee;

use super::{Backend, FileBackend, HEADER};

/// Reads and appends employee records over a [`Backend`]
///
/// ## Concurrency:
/// - None. Every call goes straight to the backend without locking;
///   one process and one user at a time is assumed.
pub struct RecordStore<B: Backend> {
    backend: B,
}

impl RecordStore<FileBackend> {
    /// Open a file-backed store at the configured path
    ///
    /// Does not touch the file; call [`RecordStore::ensure_storage`] to create it.
    pub fn open(config: &Config) -> Result<Self> {
        config.validate()?;
        Ok(Self::open_path(&config.data_file))
    }

    /// Open a file-backed store at `path` (convenience method)
    pub fn open_path(path: impl AsRef<Path>) -> Self {
        Self::new(FileBackend::new(path.as_ref()))
    }
}

impl<B: Backend> RecordStore<B> {
    /// Wrap an existing backend
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    /// Create the backing resource with its header if it does not exist
    ///
    /// Returns whether the resource was created. An existing resource is
    /// left untouched.
    pub fn ensure_storage(&self) -> Result<bool> {
        let created = self.backend.create_new(&format!("{}\n", HEADER))?;
        if created {
            info!("Created new employee store");
        }
        Ok(created)
    }

    /// Load every record, in file order
    ///
    /// Steps:
    /// 1. Create the resource if it is missing (yields no records)
    /// 2. Read and skip the header line
    /// 3. Parse each non-blank line that follows
    ///
    /// A malformed line fails the whole call.
    pub fn load_all(&self) -> Result<Vec<Employee>> {
        if !self.backend.exists()? {
            self.ensure_storage()?;
        }

        let Some(reader) = self.backend.reader()? else {
            return Ok(Vec::new());
        };

        let mut employees = Vec::new();
        let mut lines = reader.lines();

        // Header is read but its columns are not checked
        if let Some(header) = lines.next() {
            let header = header?;
            if header.trim() != HEADER {
                warn!(header = %header.trim(), "Unexpected header line, reading columns positionally");
            }
        }

        for (index, line) in lines.enumerate() {
            let line = line?;
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            // +2: 1-based, and the header occupies line 1
            employees.push(Employee::parse_line(line, index + 2)?);
        }

        debug!(count = employees.len(), "Loaded employee records");
        Ok(employees)
    }

    /// Append one record as a new line
    ///
    /// `None` is ignored and returns `Ok(false)`. The record's text fields
    /// are written as-is, so embedded commas are not escaped.
    pub fn append<'a>(&self, employee: impl Into<Option<&'a Employee>>) -> Result<bool> {
        let Some(employee) = employee.into() else {
            return Ok(false);
        };

        self.backend.append(&format!("{}\n", employee.to_line()))?;
        debug!(id = employee.id, "Appended employee record");
        Ok(true)
    }

    /// Get the underlying backend
    pub fn backend(&self) -> &B {
        &self.backend
    }
}
