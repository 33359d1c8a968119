//! Configuration loading and management for the attendance engine.
//!
//! This module provides functionality to load engine configuration from YAML
//! files: duration thresholds, the no-records inclusion switch, and report
//! column labels.
//!
//! # Example
//!
//! ```no_run
//! use attendance_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/default").unwrap();
//! println!("Loaded: {}", config.config().settings().name);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{
    ColumnSpec, ColumnsConfig, DetailColumns, EngineConfig, EngineSettings, MonthlyColumns,
};
