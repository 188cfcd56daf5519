//! Error types for aggregate target operations.
//!
//! Every error here is fatal to the current installation step. Messages name the
//! aggregate label so the caller can surface a diagnostic without extra context.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for aggregate target operations
pub type Result<T> = std::result::Result<T, AggregateError>;

/// Main error type for all aggregate target operations
#[derive(Error, Debug)]
pub enum AggregateError {
    /// Invalid target definitions or ambiguous integration context
    #[error("Configuration error: {0}")]
    Configuration(#[from] ConfigurationError),

    /// Consumer project binding errors
    #[error("Integration error: {0}")]
    Integration(#[from] IntegrationError),

    /// Path derivation errors
    #[error("Path error: {0}")]
    Path(#[from] PathError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// TOML parsing errors
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigurationError {
    /// Abstract definitions only group children and never produce artifacts
    #[error("Can't initialize an aggregate target with the abstract target definition '{label}'")]
    AbstractDefinition {
        /// Label of the abstract definition
        label: String,
    },

    /// The bound native targets do not share exactly one product type
    #[error("Expected a single kind of user target for '{label}'. Found: {}", format_found(.found))]
    AmbiguousProductTypes {
        /// Label of the aggregate target
        label: String,
        /// Distinct product types found among the native targets
        found: Vec<String>,
    },

    /// Platform could not be constructed
    #[error("Invalid platform '{platform}': {reason}")]
    InvalidPlatform {
        /// The platform text that was rejected
        platform: String,
        /// Reason why it was rejected
        reason: String,
    },

    /// Integration configuration rejected
    #[error("Invalid integration config: {reason}")]
    InvalidConfig {
        /// Reason for rejection
        reason: String,
    },
}

fn format_found(found: &[String]) -> String {
    if found.is_empty() {
        "no product types".to_string()
    } else {
        found.join(", ")
    }
}

/// Consumer project binding errors
#[derive(Error, Debug)]
pub enum IntegrationError {
    /// A bound identifier is not present in the consumer project
    #[error("Unable to find the target with the `{identifier}` UUID for the `{label}` integration library")]
    TargetNotFound {
        /// The missing native target identifier
        identifier: String,
        /// Label of the aggregate target
        label: String,
    },
}

/// Path derivation errors
#[derive(Error, Debug)]
pub enum PathError {
    /// A relative path was requested before a client root was bound
    #[error("No client root directory is set for '{label}'; bind the user project first")]
    ClientRootUnset {
        /// Label of the aggregate target
        label: String,
    },

    /// The path and base cannot be related lexically (one absolute, one relative)
    #[error("Cannot express {} relative to {}", .path.display(), .base.display())]
    Unrelatable {
        /// Path being relativized
        path: PathBuf,
        /// Base directory
        base: PathBuf,
    },
}

impl AggregateError {
    /// Get actionable recovery suggestions for this error
    pub fn recovery_suggestions(&self) -> Vec<String> {
        match self {
            AggregateError::Configuration(ConfigurationError::AbstractDefinition { label }) => vec![
                format!("Declare a concrete target inside the abstract target '{}'", label),
                "Only non-abstract targets produce integration libraries".to_string(),
            ],
            AggregateError::Configuration(ConfigurationError::AmbiguousProductTypes { label, found }) => vec![
                format!("Integrate '{}' with native targets of a single product type", label),
                format!("Split the user targets by product type ({})", format_found(found)),
            ],
            AggregateError::Integration(IntegrationError::TargetNotFound { identifier, .. }) => vec![
                format!("Check that the native target `{}` still exists in the user project", identifier),
                "Re-run the analysis phase to refresh target identifiers".to_string(),
            ],
            AggregateError::Path(PathError::ClientRootUnset { .. }) => vec![
                "Bind the user project before generating relative paths".to_string(),
            ],
            _ => vec!["Check the error message above for specific details".to_string()],
        }
    }

    /// Check if this error is recoverable
    ///
    /// Aggregate errors are invariant violations; only IO failures while loading
    /// configuration may succeed on a retry.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, AggregateError::Io(_))
    }
}
