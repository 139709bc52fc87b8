//! Error types for peerfeedback.
//!
//! Every failure in this crate is recoverable: board operations validate their
//! input before touching any state, so an error never leaves a roster or a
//! feedback store half-mutated.

use thiserror::Error;

/// The main error type for peerfeedback operations.
#[derive(Error, Debug)]
pub enum Error {
    // === Board Errors ===
    /// A required input was empty or blank after trimming.
    #[error("{field} must not be empty")]
    Validation {
        /// Name of the input that failed validation.
        field: &'static str,
    },

    /// A peer with the same name (ignoring case) is already on the roster.
    #[error("'{name}' is already in the roster")]
    Duplicate {
        /// The rejected name, trimmed.
        name: String,
    },

    /// No roster entry matches the given name (ignoring case).
    #[error("peer '{name}' not found in the roster")]
    NotFound {
        /// The name that was looked up, trimmed.
        name: String,
    },

    // === Session Errors ===
    /// The session did not recognise a command keyword.
    #[error("unknown command '{command}' (type 'help' for a list of commands)")]
    UnknownCommand {
        /// The keyword as typed.
        command: String,
    },

    /// A session command was given without its required argument.
    #[error("'{command}' expects {argument}")]
    MissingArgument {
        /// The command keyword.
        command: &'static str,
        /// Description of the missing argument.
        argument: &'static str,
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
    /// Reading input or writing output failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    // === Serialization Errors ===
    /// JSON serialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A specialized Result type for peerfeedback operations.
pub type Result<T> = std::result::Result<T, Error>;

impl From<figment::Error> for Error {
    fn from(err: figment::Error) -> Self {
        Self::ConfigLoad(Box::new(err))
    }
}

impl Error {
    /// Create a validation error for the named input.
    #[must_use]
    pub fn validation(field: &'static str) -> Self {
        Self::Validation { field }
    }

    /// Create a duplicate-name error.
    #[must_use]
    pub fn duplicate(name: impl Into<String>) -> Self {
        Self::Duplicate { name: name.into() }
    }

    /// Create a not-found error.
    #[must_use]
    pub fn not_found(name: impl Into<String>) -> Self {
        Self::NotFound { name: name.into() }
    }

    /// Check if this error is an input validation failure.
    #[must_use]
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation { .. })
    }

    /// Check if this error is a case-insensitive name collision.
    #[must_use]
    pub fn is_duplicate(&self) -> bool {
        matches!(self, Self::Duplicate { .. })
    }

    /// Check if this error reports a peer missing from the roster.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if the user can simply re-enter corrected input.
    ///
    /// True for everything a board or session command can return; false for
    /// configuration and I/O failures.
    #[must_use]
    pub fn is_user_error(&self) -> bool {
        matches!(
            self,
            Self::Validation { .. }
                | Self::Duplicate { .. }
                | Self::NotFound { .. }
                | Self::UnknownCommand { .. }
                | Self::MissingArgument { .. }
        )
    }
}
