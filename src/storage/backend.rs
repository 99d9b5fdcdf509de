//! Storage backends
//!
//! The record store only needs four primitives from whatever holds the
//! text: existence check, exclusive create, sequential read and append.

use std::fs::{self, File, OpenOptions};
use std::io::{BufRead, BufReader, Cursor, ErrorKind, Write};
use std::path::{Path, PathBuf};

use parking_lot::Mutex;

use crate::error::Result;

/// A place the delimited text lives
pub trait Backend {
    /// Whether the resource currently exists
    fn exists(&self) -> Result<bool>;

    /// Create the resource holding `contents`, only if it is absent
    ///
    /// Returns `Ok(false)` without touching anything when it already exists.
    fn create_new(&self, contents: &str) -> Result<bool>;

    /// Open the resource for sequential reading, `None` if it is absent
    fn reader(&self) -> Result<Option<Box<dyn BufRead + '_>>>;

    /// Append `text` to the end of the resource, creating it if absent
    fn append(&self, text: &str) -> Result<()>;
}

// =============================================================================
// File Backend
// =============================================================================

/// Backend over a single file on disk
#[derive(Debug, Clone)]
pub struct FileBackend {
    path: PathBuf,
}

impl FileBackend {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Get the file path
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Backend for FileBackend {
    fn exists(&self) -> Result<bool> {
        Ok(self.path.try_exists()?)
    }

    fn create_new(&self, contents: &str) -> Result<bool> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        // create_new fails on an existing file, so existing content is never truncated
        let mut file = match OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&self.path)
        {
            Ok(file) => file,
            Err(e) if e.kind() == ErrorKind::AlreadyExists => return Ok(false),
            Err(e) => return Err(e.into()),
        };

        file.write_all(contents.as_bytes())?;
        file.flush()?;
        Ok(true)
    }

    fn reader(&self) -> Result<Option<Box<dyn BufRead + '_>>> {
        match File::open(&self.path) {
            Ok(file) => Ok(Some(Box::new(BufReader::new(file)))),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn append(&self, text: &str) -> Result<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;

        file.write_all(text.as_bytes())?;
        file.flush()?;
        Ok(())
    }
}

// =============================================================================
// Memory Backend
// =============================================================================

/// Backend holding the text in memory, for tests and benchmarks
///
/// `None` models an absent resource.
#[derive(Debug, Default)]
pub struct MemoryBackend {
    contents: Mutex<Option<String>>,
}

impl MemoryBackend {
    /// Create a backend with no resource yet
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a backend whose resource already holds `contents`
    pub fn with_contents(contents: impl Into<String>) -> Self {
        Self {
            contents: Mutex::new(Some(contents.into())),
        }
    }

    /// Snapshot of the current contents
    pub fn contents(&self) -> Option<String> {
        self.contents.lock().clone()
    }
}

impl Backend for MemoryBackend {
    fn exists(&self) -> Result<bool> {
        Ok(self.contents.lock().is_some())
    }

    fn create_new(&self, contents: &str) -> Result<bool> {
        let mut guard = self.contents.lock();
        if guard.is_some() {
            return Ok(false);
        }
        *guard = Some(contents.to_string());
        Ok(true)
    }

    fn reader(&self) -> Result<Option<Box<dyn BufRead + '_>>> {
        match self.contents.lock().clone() {
            Some(text) => Ok(Some(Box::new(Cursor::new(text.into_bytes())))),
            None => Ok(None),
        }
    }

    fn append(&self, text: &str) -> Result<()> {
        self.contents
            .lock()
            .get_or_insert_with(String::new)
            .push_str(text);
        Ok(())
    }
}
