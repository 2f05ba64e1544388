//! Error types for the shift wage engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for every condition the engine refuses to compute through.

use thiserror::Error;
use uuid::Uuid;

/// The main error type for the shift wage engine.
///
/// Validation failures are reported here instead of producing a negative
/// or otherwise nonsensical wage.
///
/// # Example
///
/// ```
/// use shift_wage::error::EngineError;
///
/// let error = EngineError::InvalidShift {
///     message: "break of 90 minutes exceeds shift of 60 minutes".to_string(),
/// };
/// assert_eq!(
///     error.to_string(),
///     "Invalid shift: break of 90 minutes exceeds shift of 60 minutes"
/// );
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A shift interval was not chronological or its break did not fit.
    #[error("Invalid shift: {message}")]
    InvalidShift {
        /// A description of what made the shift invalid.
        message: String,
    },

    /// A wage amount was out of range.
    #[error("Invalid wage field '{field}': {message}")]
    InvalidWage {
        /// The field that was invalid.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },

    /// A clock time could not be parsed.
    #[error("Invalid time '{value}': {message}")]
    InvalidTime {
        /// The rejected input.
        value: String,
        /// A description of the parse failure.
        message: String,
    },

    /// The holiday data provider failed or returned an unreadable payload.
    #[error("Holiday provider error: {message}")]
    HolidayProvider {
        /// A description of the provider failure.
        message: String,
    },

    /// No work record with this id exists for the requesting user.
    #[error("Work record not found: {id}")]
    RecordNotFound {
        /// The id that was looked up.
        id: Uuid,
    },

    /// The work record store could not complete an operation.
    #[error("Storage error: {message}")]
    Storage {
        /// A description of the storage failure.
        message: String,
    },

    /// A general calculation error occurred.
    #[error("Calculation error: {message}")]
    CalculationError {
        /// A description of the calculation error.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
