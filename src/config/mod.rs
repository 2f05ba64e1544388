//! Configuration loading and management for the shift wage engine.
//!
//! This module loads wage settings and optional static holiday calendars
//! from YAML files.
//!
//! # Example
//!
//! ```no_run
//! use shift_wage::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config").unwrap();
//! println!("Default wage: {}", config.settings().hourly_wage);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{DEFAULT_HOURLY_WAGE, HolidayCalendar, WageSettings};
