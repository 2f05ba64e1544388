//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading wage settings
//! and holiday calendars from YAML files.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{EngineError, EngineResult};
use crate::models::HolidayRecord;

use super::types::{HolidayCalendar, WageSettings};

/// Loads and provides access to engine configuration.
///
/// # Directory Structure
///
/// ```text
/// config/
/// ├── settings.yaml   # Default hourly wage and break mode
/// └── holidays/       # Optional static holiday calendars
///     └── 2025.yaml
/// ```
///
/// # Example
///
/// ```no_run
/// use shift_wage::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config")?;
/// println!("Hourly wage: {}", loader.settings().hourly_wage);
/// # Ok::<(), shift_wage::error::EngineError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    settings: WageSettings,
    holidays: Vec<HolidayRecord>,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// `settings.yaml` is required. The `holidays/` directory is optional;
    /// every `.yaml` file in it is read, in file name order.
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let settings = Self::load_yaml::<WageSettings>(&path.join("settings.yaml"))?;
        settings.validate()?;

        let holidays = Self::load_holidays(&path.join("holidays"))?;

        debug!(
            path = %path.display(),
            hourly_wage = settings.hourly_wage,
            holidays = holidays.len(),
            "Configuration loaded"
        );

        Ok(Self { settings, holidays })
    }

    /// Builds a loader from values already in memory.
    pub fn from_parts(settings: WageSettings, holidays: Vec<HolidayRecord>) -> Self {
        Self { settings, holidays }
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

    /// Loads all calendar files from the holidays directory, if present.
    fn load_holidays(holidays_dir: &Path) -> EngineResult<Vec<HolidayRecord>> {
        if !holidays_dir.exists() {
            return Ok(Vec::new());
        }

        let holidays_dir_str = holidays_dir.display().to_string();
        let entries = fs::read_dir(holidays_dir).map_err(|_| EngineError::ConfigNotFound {
            path: holidays_dir_str.clone(),
        })?;

        let mut paths = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|_| EngineError::ConfigNotFound {
                path: holidays_dir_str.clone(),
            })?;

            let path = entry.path();
            if path.extension().is_some_and(|ext| ext == "yaml") {
                paths.push(path);
            }
        }
        paths.sort();

        let mut holidays = Vec::new();
        for path in paths {
            let calendar = Self::load_yaml::<HolidayCalendar>(&path)?;
            holidays.extend(calendar.holidays);
        }

        Ok(holidays)
    }

    /// Returns the wage settings.
    pub fn settings(&self) -> &WageSettings {
        &self.settings
    }

    /// Returns every configured holiday record.
    pub fn holidays(&self) -> &[HolidayRecord] {
        &self.holidays
    }
}
