//! This module defines all error types used throughout the application.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

use crate::state_machine::{Platform, TransitionKind, View};

/// Main error type for the application
#[derive(Error, Debug)]
pub enum Error {
    /// IO errors (file not found, permission denied, etc.)
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// State accessed before a controller was installed in the provider
    #[error("Application state is not initialized: install a controller before reading state")]
    NotInitialized,

    /// Transition invoked from a view it is not reachable from (strict mode only)
    #[error("Transition '{action}' is not reachable from view '{view}'")]
    InvalidTransition { action: TransitionKind, view: View },

    /// Resumed state whose view belongs to a different platform track
    #[error("View '{view}' does not belong to platform '{platform}'")]
    InconsistentState { view: View, platform: Platform },

    /// Provider lock poisoned by a panicking writer
    #[error("Application state lock is poisoned")]
    StateLock,

    /// Session script step failed
    #[error("Session script failed at step {step}: {message}")]
    Script { step: usize, message: String },

    /// Session script parsing errors
    #[error("Session script parsing error in {file:?}: {message}")]
    ScriptParse { file: PathBuf, message: String },

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Unrecognized enum value (CLI arguments, script fields)
    #[error("Invalid value: {0}")]
    InvalidValue(String),

    /// Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Generic error with custom message
    #[error("{0}")]
    Custom(String),

    /// Wrapped anyhow errors
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create a custom error with a message
    pub fn custom(msg: impl Into<String>) -> Self {
        Self::Custom(msg.into())
    }

    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create an invalid value error
    pub fn invalid_value(msg: impl Into<String>) -> Self {
        Self::InvalidValue(msg.into())
    }

    /// Create a script step error
    pub fn script(step: usize, msg: impl Into<String>) -> Self {
        Self::Script {
            step,
            message: msg.into(),
        }
    }

    /// Check if error is a rejected transition
    pub fn is_invalid_transition(&self) -> bool {
        matches!(self, Error::InvalidTransition { .. })
    }

    /// Check if error is an access before initialization
    pub fn is_not_initialized(&self) -> bool {
        matches!(self, Error::NotInitialized)
    }
}

// Implement From traits for common external error types

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::ScriptParse {
            file: PathBuf::from("unknown"),
            message: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Serialization(format!("JSON error: {}", err))
    }
}

// Helper macros for creating errors

/// Create a custom error with formatting
#[macro_export]
macro_rules! custom_error {
    ($($arg:tt)*) => {
        $crate::error::Error::Custom(format!($($arg)*))
    };
}

/// Bail with a custom error message
#[macro_export]
macro_rules! bail {
    ($($arg:tt)*) => {
        return Err($crate::custom_error!($($arg)*))
    };
}

/// Ensure a condition is true or return error
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $($arg:tt)*) => {
        if !($cond) {
            $crate::bail!($($arg)*);
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation() {
        let err = Error::custom("test error");
        assert_eq!(err.to_string(), "test error");

        let err = Error::config("journal_limit must be positive");
        assert_eq!(
            err.to_string(),
            "Configuration error: journal_limit must be positive"
        );
    }

    #[test]
    fn test_invalid_transition_message() {
        let err = Error::InvalidTransition {
            action: TransitionKind::CompleteWizard,
            view: View::Dashboard,
        };
        assert!(err.is_invalid_transition());
        assert_eq!(
            err.to_string(),
            "Transition 'complete-wizard' is not reachable from view 'dashboard'"
        );
    }

    #[test]
    fn test_inconsistent_state_message() {
        let err = Error::InconsistentState {
            view: View::Login,
            platform: Platform::Buyer,
        };
        assert_eq!(
            err.to_string(),
            "View 'login' does not belong to platform 'buyer'"
        );
    }

    #[test]
    fn test_not_initialized() {
        assert!(Error::NotInitialized.is_not_initialized());
        assert!(!Error::custom("other").is_not_initialized());
    }

    fn checked(limit: usize) -> Result<usize> {
        ensure!(limit > 0, "limit must be positive, got {}", limit);
        Ok(limit)
    }

    #[test]
    fn test_ensure_macro() {
        assert_eq!(checked(3).unwrap(), 3);
        let err = checked(0).unwrap_err();
        assert_eq!(err.to_string(), "limit must be positive, got 0");
    }
}
