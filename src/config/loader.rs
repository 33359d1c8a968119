//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading engine
//! configuration from YAML files.

use std::fs;
use std::path::Path;

use tracing::info;

use crate::calculation::{DurationThresholds, MonthlyReportOptions};
use crate::error::{EngineError, EngineResult};

use super::types::{ColumnsConfig, EngineConfig, EngineSettings};

/// Loads and provides access to engine configuration.
///
/// # Directory Structure
///
/// ```text
/// config/default/
/// ├── engine.yaml   # Name, version, duration thresholds, inclusion switch
/// └── columns.yaml  # Column labels and widths
/// ```
///
/// # Example
///
/// ```no_run
/// use attendance_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/default").unwrap();
/// println!("Half day from {}s", loader.thresholds().half_day_from_seconds);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConfigLoader {
    config: EngineConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - Any required file is missing
    /// - Any file contains invalid YAML
    /// - The duration thresholds are out of order
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let engine_path = path.join("engine.yaml");
        let settings = Self::load_yaml::<EngineSettings>(&engine_path)?;
        Self::validate_thresholds(&settings.duration_thresholds, &engine_path)?;

        let columns_path = path.join("columns.yaml");
        let columns = Self::load_yaml::<ColumnsConfig>(&columns_path)?;

        info!(
            path = %path.display(),
            name = %settings.name,
            version = %settings.version,
            "Loaded attendance engine configuration"
        );

        Ok(Self {
            config: EngineConfig::new(settings, columns),
        })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    fn validate_thresholds(thresholds: &DurationThresholds, path: &Path) -> EngineResult<()> {
        if thresholds.half_day_from_seconds < 0
            || thresholds.half_day_from_seconds > thresholds.present_above_seconds
        {
            return Err(EngineError::ConfigParseError {
                path: path.display().to_string(),
                message: format!(
                    "duration thresholds out of order: half_day_from_seconds={} present_above_seconds={}",
                    thresholds.half_day_from_seconds, thresholds.present_above_seconds
                ),
            });
        }
        Ok(())
    }

    /// Returns the underlying engine configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Returns the configured duration thresholds.
    pub fn thresholds(&self) -> &DurationThresholds {
        &self.config.settings().duration_thresholds
    }

    /// Returns the column configuration.
    pub fn columns(&self) -> &ColumnsConfig {
        self.config.columns()
    }

    /// Builds report options from the configured defaults.
    ///
    /// # Example
    ///
    /// ```
    /// use attendance_engine::config::ConfigLoader;
    ///
    /// let options = ConfigLoader::default().report_options();
    /// assert!(options.include_employees_with_no_records);
    /// assert!(options.employee.is_none());
    /// ```
    pub fn report_options(&self) -> MonthlyReportOptions {
        let settings = self.config.settings();
        MonthlyReportOptions {
            include_employees_with_no_records: settings.include_employees_with_no_records,
            employee: None,
            thresholds: settings.duration_thresholds,
        }
    }
}
