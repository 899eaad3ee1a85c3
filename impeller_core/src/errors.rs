//! # Error Types
//!
//! Structured error types for impeller_core. Only configuration problems and
//! file operations fail; degenerate operating points (zero speed, zero flow)
//! are returned as data inside [`DesignResult`](crate::calculations::DesignResult).
//!
//! ## Example
//!
//! ```rust
//! use impeller_core::errors::{CalcError, CalcResult};
//! use impeller_core::materials;
//!
//! fn density_of(key: &str) -> CalcResult<f64> {
//!     Ok(materials::lookup(key)?.density_kg_m3)
//! }
//!
//! assert_eq!(density_of("Steel").unwrap(), 7850.0);
//! assert_eq!(density_of("Unobtainium").unwrap_err().error_code(), "MATERIAL_NOT_FOUND");
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for impeller_core operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Structured error type for sizing and history operations.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum CalcError {
    /// An input value could not be interpreted (unknown blade type, etc.)
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// Material key not present in the catalog. Fatal: evaluation does not proceed.
    #[error("Material not found: {material_name}")]
    MaterialNotFound { material_name: String },

    /// File I/O error
    #[error("File error: {operation} on '{path}' - {reason}")]
    FileError {
        operation: String,
        path: String,
        reason: String,
    },

    /// File is locked by another user/process
    #[error("File locked: '{path}' is locked by {locked_by} since {locked_at}")]
    FileLocked {
        path: String,
        locked_by: String,
        locked_at: String,
    },

    /// JSON serialization/deserialization error
    #[error("Serialization error: {reason}")]
    SerializationError { reason: String },

    /// Schema version mismatch
    #[error("Version mismatch: file version {file_version}, expected {expected_version}")]
    VersionMismatch {
        file_version: String,
        expected_version: String,
    },
}

impl CalcError {
    /// Create an InvalidInput error
    pub fn invalid_input(field: impl Into<String>, value: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create a MaterialNotFound error
    pub fn material_not_found(material_name: impl Into<String>) -> Self {
        CalcError::MaterialNotFound {
            material_name: material_name.into(),
        }
    }

    /// Create a FileError
    pub fn file_error(operation: impl Into<String>, path: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::FileError {
            operation: operation.into(),
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Create a FileLocked error
    pub fn file_locked(path: impl Into<String>, locked_by: impl Into<String>, locked_at: impl Into<String>) -> Self {
        CalcError::FileLocked {
            path: path.into(),
            locked_by: locked_by.into(),
            locked_at: locked_at.into(),
        }
    }

    /// Create a SerializationError
    pub fn serialization(reason: impl Into<String>) -> Self {
        CalcError::SerializationError {
            reason: reason.into(),
        }
    }

    /// Configuration errors must be fixed by the caller before re-evaluating.
    pub fn is_configuration_error(&self) -> bool {
        matches!(self, CalcError::MaterialNotFound { .. })
    }

    /// Check if this is a recoverable error (e.g., can retry)
    pub fn is_recoverable(&self) -> bool {
        matches!(self, CalcError::FileLocked { .. })
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            CalcError::InvalidInput { .. } => "INVALID_INPUT",
            CalcError::MaterialNotFound { .. } => "MATERIAL_NOT_FOUND",
            CalcError::FileError { .. } => "FILE_ERROR",
            CalcError::FileLocked { .. } => "FILE_LOCKED",
            CalcError::SerializationError { .. } => "SERIALIZATION_ERROR",
            CalcError::VersionMismatch { .. } => "VERSION_MISMATCH",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_serialization() {
        let error = CalcError::material_not_found("Brass");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"type\":\"MaterialNotFound\""));
        let roundtrip: CalcError = serde_json::from_str(&json).unwrap();
        assert_eq!(error, roundtrip);
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(CalcError::invalid_input("blade_type", "Curly", "unknown").error_code(), "INVALID_INPUT");
        assert_eq!(CalcError::material_not_found("Brass").error_code(), "MATERIAL_NOT_FOUND");
        assert_eq!(CalcError::serialization("bad json").error_code(), "SERIALIZATION_ERROR");
    }

    #[test]
    fn test_error_classification() {
        assert!(CalcError::material_not_found("Brass").is_configuration_error());
        assert!(!CalcError::material_not_found("Brass").is_recoverable());
        assert!(CalcError::file_locked("history.json", "someone", "now").is_recoverable());
    }

    #[test]
    fn test_error_display() {
        let error = CalcError::material_not_found("Brass");
        assert_eq!(error.to_string(), "Material not found: Brass");
    }
}
