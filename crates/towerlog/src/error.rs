//! Error types for towerlog.
//!
//! Core errors are validation and precondition rejections reported back to
//! the caller synchronously; I/O failures during a persistence write are
//! fatal rather than recoverable.

use std::path::PathBuf;
use thiserror::Error;

/// The main error type for towerlog operations.
#[derive(Error, Debug)]
pub enum Error {
    // === Format Errors ===
    /// An airport code failed structural validation.
    #[error("invalid airport code '{code}': expected three uppercase letters")]
    InvalidAirportCode {
        /// The rejected code.
        code: String,
    },

    /// A flight number failed structural validation.
    #[error("invalid flight number '{number}': expected two uppercase letters, a dash, and 1-3 digits")]
    InvalidFlightNumber {
        /// The rejected number.
        number: String,
    },

    // === Lookup Errors ===
    /// No airport with the given code is tracked.
    #[error("airport '{code}' not found")]
    AirportNotFound {
        /// The code that missed.
        code: String,
    },

    /// No flight with the given number is tracked.
    #[error("flight '{number}' not found")]
    FlightNotFound {
        /// The number that missed.
        number: String,
    },

    // === Conflict Errors ===
    /// An airport with the given code already exists.
    #[error("airport '{code}' already exists")]
    AirportExists {
        /// The duplicate code.
        code: String,
    },

    /// A flight with the given number already exists.
    #[error("flight '{number}' already exists")]
    FlightExists {
        /// The duplicate number.
        number: String,
    },

    /// The airport's runway is already assigned.
    #[error("runway at '{code}' is already occupied")]
    RunwayOccupied {
        /// The airport whose runway is taken.
        code: String,
    },

    /// The pilot request queue is at capacity.
    #[error("request queue is full ({capacity} pending)")]
    QueueFull {
        /// The configured queue capacity.
        capacity: usize,
    },

    /// Seeding was requested but the tower already holds records.
    #[error("refusing to seed: tower already holds records")]
    NotEmpty,

    // === Persistence Errors ===
    /// A record line in a persistence file could not be parsed.
    #[error("malformed record in {file} at line {line}: {message}")]
    ParseRecord {
        /// File the bad line came from.
        file: PathBuf,
        /// 1-based line number.
        line: usize,
        /// What was wrong with it.
        message: String,
    },

    /// Failed to create a required directory.
    #[error("failed to create directory {path}: {source}")]
    DirectoryCreate {
        /// Path that couldn't be created.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: std::io::Error,
    },

    // === Configuration Errors ===
    /// Failed to load configuration.
    #[error("failed to load configuration: {0}")]
    ConfigLoad(Box<figment::Error>),

    /// Configuration validation failed.
    #[error("invalid configuration: {message}")]
    ConfigValidation {
        /// Description of the validation failure.
        message: String,
    },

    // === I/O Errors ===
    /// File system operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    // === Serialization Errors ===
    /// JSON serialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A specialized Result type for towerlog operations.
pub type Result<T> = std::result::Result<T, Error>;

impl From<figment::Error> for Error {
    fn from(err: figment::Error) -> Self {
        Self::ConfigLoad(Box::new(err))
    }
}

impl Error {
    /// Create an invalid-airport-code error.
    #[must_use]
    pub fn invalid_airport_code(code: impl Into<String>) -> Self {
        Self::InvalidAirportCode { code: code.into() }
    }

    /// Create an invalid-flight-number error.
    #[must_use]
    pub fn invalid_flight_number(number: impl Into<String>) -> Self {
        Self::InvalidFlightNumber {
            number: number.into(),
        }
    }

    /// Create an airport-not-found error.
    #[must_use]
    pub fn airport_not_found(code: impl Into<String>) -> Self {
        Self::AirportNotFound { code: code.into() }
    }

    /// Create a flight-not-found error.
    #[must_use]
    pub fn flight_not_found(number: impl Into<String>) -> Self {
        Self::FlightNotFound {
            number: number.into(),
        }
    }

    /// Check if this error is a lookup miss.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::AirportNotFound { .. } | Self::FlightNotFound { .. }
        )
    }

    /// Check if this error is a duplicate, occupied-runway, or queue-full
    /// conflict.
    #[must_use]
    pub fn is_conflict(&self) -> bool {
        matches!(
            self,
            Self::AirportExists { .. }
                | Self::FlightExists { .. }
                | Self::RunwayOccupied { .. }
                | Self::QueueFull { .. }
                | Self::NotEmpty
        )
    }

    /// Check if this error is a malformed-identifier rejection.
    #[must_use]
    pub fn is_invalid_format(&self) -> bool {
        matches!(
            self,
            Self::InvalidAirportCode { .. } | Self::InvalidFlightNumber { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::invalid_airport_code("kh1");
        assert!(err.to_string().contains("kh1"));

        let err = Error::airport_not_found("ISB");
        assert_eq!(err.to_string(), "airport 'ISB' not found");

        let err = Error::QueueFull { capacity: 50 };
        assert!(err.to_string().contains("50"));
    }

    #[test]
    fn test_is_not_found() {
        assert!(Error::airport_not_found("ISB").is_not_found());
        assert!(Error::flight_not_found("PK-301").is_not_found());
        assert!(!Error::QueueFull { capacity: 50 }.is_not_found());
    }

    #[test]
    fn test_is_conflict() {
        assert!(Error::AirportExists {
            code: "KHI".to_string()
        }
        .is_conflict());
        assert!(Error::RunwayOccupied {
            code: "KHI".to_string()
        }
        .is_conflict());
        assert!(Error::QueueFull { capacity: 50 }.is_conflict());
        assert!(!Error::airport_not_found("KHI").is_conflict());
    }

    #[test]
    fn test_is_invalid_format() {
        assert!(Error::invalid_airport_code("KHIA").is_invalid_format());
        assert!(Error::invalid_flight_number("PK301").is_invalid_format());
        assert!(!Error::flight_not_found("PK-301").is_invalid_format());
    }

    #[test]
    fn test_parse_record_display() {
        let err = Error::ParseRecord {
            file: PathBuf::from("/data/flights.txt"),
            line: 3,
            message: "expected 6 fields, got 4".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("flights.txt"));
        assert!(msg.contains("line 3"));
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        assert!(err.to_string().contains("file not found"));
    }

    #[test]
    fn test_config_validation_display() {
        let err = Error::ConfigValidation {
            message: "max_pending must be at least 1".to_string(),
        };
        assert!(err.to_string().contains("max_pending"));
    }
}
