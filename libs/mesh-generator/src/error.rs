//! # Generator Errors
//!
//! Error types for mesh generator model operations.

use thiserror::Error;

use crate::host::HostError;

/// Errors that can occur while editing scaffold settings.
#[derive(Debug, Error)]
pub enum GeneratorError {
    /// No scaffold type with this name is registered
    #[error("Unknown scaffold type: {name}")]
    UnknownScaffoldType { name: String },

    /// Scaffold type not allowed for the parent option being edited
    #[error("Scaffold type {name} is not valid for option {option}")]
    InvalidScaffoldForParent { name: String, option: String },

    /// Option exists but does not hold a scaffold package
    #[error("Option is not a scaffold package: {option}")]
    NotAScaffoldPackage { option: String },

    /// Option is not present in the scaffold settings
    #[error("Unknown option: {option}")]
    UnknownOption { option: String },

    /// Value cannot be converted to the option's type
    #[error("Invalid value for option {option}: {value}")]
    InvalidOptionValue { option: String, value: String },

    /// Parameter set is not offered for the scaffold being edited
    #[error("Unknown parameter set: {name}")]
    UnknownParameterSet { name: String },

    /// Label is not one of the node derivative labels
    #[error("Unknown node derivative label: {label}")]
    UnknownDerivativeLabel { label: String },

    /// Operation needs a nested scaffold package but the root is edited
    #[error("Not editing a nested scaffold package")]
    EditingRoot,

    /// Operation needs the root scaffold package but a nested one is edited
    #[error("Nested scaffold package still being edited")]
    EditingNested,

    /// Registry has no scaffold types
    #[error("Scaffold registry is empty")]
    EmptyRegistry,

    /// Settings could not be migrated
    #[error("Invalid settings: {message}")]
    InvalidSettings { message: String },

    /// Settings JSON could not be read or written
    #[error("Settings serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Host engine failed
    #[error("Host error: {0}")]
    Host(#[from] HostError),
}

impl GeneratorError {
    /// Creates an unknown scaffold type error.
    pub fn unknown_scaffold_type(name: impl Into<String>) -> Self {
        Self::UnknownScaffoldType { name: name.into() }
    }

    /// Creates an unknown option error.
    pub fn unknown_option(option: impl Into<String>) -> Self {
        Self::UnknownOption {
            option: option.into(),
        }
    }

    /// Creates an invalid settings error.
    pub fn invalid_settings(message: impl Into<String>) -> Self {
        Self::InvalidSettings {
            message: message.into(),
        }
    }
}
