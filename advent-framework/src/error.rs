//! Error types for the framework

use crate::source::InputKind;
use std::path::PathBuf;
use thiserror::Error;

/// Error type for turning input text into a solver's input structure
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// Required data is missing from input
    #[error("Missing data: {0}")]
    MissingData(String),
    /// A line could not be converted
    #[error("Invalid line {line}: {message}")]
    InvalidLine { line: usize, message: String },
}

/// Error type for loading a day's input from an input source
#[derive(Debug, Error)]
pub enum InputError {
    /// The input file does not exist
    #[error("Input not found: {}", .path.display())]
    NotFound { path: PathBuf },
    /// The input exists but could not be read
    #[error("Failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// The input was read but could not be parsed
    #[error("Failed to parse {kind} input for day {day:02}: {source}")]
    Parse {
        day: u8,
        kind: InputKind,
        #[source]
        source: ParseError,
    },
}

/// Error type for computing a specific part
#[derive(Debug, Error)]
pub enum SolveError {
    /// The requested part number is out of range
    #[error("Part {0} is out of range")]
    PartOutOfRange(u8),
    /// An error occurred while solving the part
    #[error("Solve failed: {0}")]
    SolveFailed(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Error type at the dispatcher boundary
#[derive(Debug, Error)]
pub enum SolverError {
    /// No solver registered for the given day
    #[error("No solver registered for day {0:02}")]
    NotFound(u8),
    /// Day is outside the supported range
    #[error("Day {0} is out of range (1-31)")]
    InvalidDay(u8),
    /// The solver could not load its inputs
    #[error("{0}")]
    Input(#[from] InputError),
}

impl SolverError {
    /// Whether this error comes from resolving the day rather than running it
    pub fn is_resolution(&self) -> bool {
        matches!(self, SolverError::NotFound(_) | SolverError::InvalidDay(_))
    }
}

/// Error type for registration failures
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistrationError {
    /// Attempted to register a solver for a day that already has one
    #[error("Duplicate solver registration for day {0:02}")]
    DuplicateDay(u8),
    /// Attempted to register a solver outside the supported day range
    #[error("Cannot register solver for day {0}: out of range (1-31)")]
    InvalidDay(u8),
}
