//! Error types for service loading and schema lookups.

use std::path::PathBuf;
use thiserror::Error;

/// Hard lookup failures.
///
/// Unknown types are not errors: the `find_*` functions return `None` for
/// them. These variants mean the caller and the schema disagree.
#[derive(Debug, Error)]
pub enum ResolveError {
    #[error("no resource of type '{resource_type}'")]
    ResourceNotFound { resource_type: String },

    #[error("resource '{resource_type}' has no operation {method} {path}")]
    OperationNotFound {
        resource_type: String,
        method: String,
        path: String,
    },

    #[error("enum '{name}' has no values")]
    EmptyEnum { name: String },
}

impl ResolveError {
    /// Returns the exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        2
    }
}

/// Errors while loading a service definition.
#[derive(Debug, Error)]
pub enum LoadError {
    // IO errors (exit code 3)
    #[error("file not found: {path}")]
    FileNotFound { path: PathBuf },

    #[error("cannot read {path}: {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // Parse errors (exit code 2)
    #[error("invalid service JSON: {source}")]
    InvalidJson {
        #[source]
        source: serde_json::Error,
    },
}

impl LoadError {
    /// Returns the exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            LoadError::FileNotFound { .. } | LoadError::ReadError { .. } => 3,
            LoadError::InvalidJson { .. } => 2,
        }
    }
}
