//! # emprec
//!
//! A single-user employee record keeper with:
//! - A flat comma-delimited file as the only storage
//! - Append-only writes, full re-parse on every read
//! - Grid table listing and salary/department reports
//! - A numbered text menu as the user interface
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │              Menu Session / One-shot Commands                │
//! └──────────────┬──────────────────────────────┬───────────────┘
//!                │                              │
//!                ▼                              ▼
//!   ┌────────────────────────┐      ┌────────────────────────┐
//!   │      Record Store      │      │     Report Engine      │
//!   │ ensure / load / append │─────▶│       summarize        │
//!   └───────────┬────────────┘      └────────────────────────┘
//!               │
//!               ▼
//!   ┌────────────────────────┐
//!   │        Backend         │
//!   │    (file / memory)     │
//!   └────────────────────────┘
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod record;
pub mod storage;
pub mod report;
pub mod table;
pub mod menu;
pub mod commands;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{EmprecError, Result};
pub use config::Config;
pub use record::Employee;
pub use report::{summarize, Report};
pub use storage::RecordStore;

// =============================================================================
// Version Info
// =============================================================================

/// Current version of emprec
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
