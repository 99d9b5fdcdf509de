//! Configuration for emprec
//!
//! Centralized configuration with sensible defaults.

use std::path::PathBuf;

use crate::error::{EmprecError, Result};

/// Default name of the backing file, relative to the working directory
pub const DEFAULT_DATA_FILE: &str = "employees.csv";

/// Main configuration for an emprec instance
#[derive(Debug, Clone)]
pub struct Config {
    // -------------------------------------------------------------------------
    // Storage Configuration
    // -------------------------------------------------------------------------
    /// Path of the comma-delimited file holding every record
    pub data_file: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_file: PathBuf::from(DEFAULT_DATA_FILE),
        }
    }
}

impl Config {
    /// Create a new config builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Check the config for values that can never work
    pub fn validate(&self) -> Result<()> {
        if self.data_file.as_os_str().is_empty() {
            return Err(EmprecError::Config("data file path is empty".to_string()));
        }
        if self.data_file.is_dir() {
            return Err(EmprecError::Config(format!(
                "data file path {} is a directory",
                self.data_file.display()
            )));
        }
        Ok(())
    }
}

/// Builder for Config
#[derive(Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the backing file path
    pub fn data_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.data_file = path.into();
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}
