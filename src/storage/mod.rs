//! Storage Module
//!
//! Persistent storage layer using a flat comma-delimited text file.
//!
//! ## Responsibilities
//! - Create the backing resource with a fixed header
//! - Load every record by re-parsing the resource
//! - Append new records one line at a time
//!
//! ## File Format
//! ```text
//! ┌──────────────────────────────────────┐
//! │ ID,Name,Department,Age,Salary        │  header, written once
//! ├──────────────────────────────────────┤
//! │ 1,Alice,Engineering,30,75000.0       │
//! │ 2,Bob,Sales,45,60000.0               │  one record per line
//! │ ...                                  │
//! └──────────────────────────────────────┘
//! ```
//! Blank lines are skipped on read. A crash mid-append can leave a partial
//! final line; it is reported as a parse error on the next load.

mod backend;
mod record_store;

pub use backend::{Backend, FileBackend, MemoryBackend};
pub use record_store::RecordStore;

/// Header line written when the resource is created
pub const HEADER: &str = "ID,Name,Department,Age,Salary";
