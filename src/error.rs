//! Error types and handling for antibody
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.
//!
//! Single-item operations propagate the first error to their caller. Batch
//! operations (bundling a stream, updating the whole store) keep going and
//! report every failure through the aggregate variants, which carry the
//! offending bundle names.

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for antibody operations
#[derive(Error, Diagnostic, Debug)]
pub enum AntibodyError {
    #[error("Invalid bundle name: {name}")]
    #[diagnostic(
        code(antibody::bundle::invalid_name),
        help("Bundle names are owner/repo, or a full git URL (https://, ssh://, git@host:, file://)")
    )]
    InvalidBundleName { name: String },

    #[error("Failed to fetch bundle '{bundle}': {reason}")]
    #[diagnostic(
        code(antibody::bundle::fetch_failed),
        help("Check that the repository exists and you have access to it")
    )]
    FetchFailed { bundle: String, reason: String },

    #[error("Failed to update bundle '{bundle}': {reason}")]
    #[diagnostic(
        code(antibody::bundle::update_failed),
        help("A broken checkout can be removed from the bundle home and downloaded again")
    )]
    UpdateFailed { bundle: String, reason: String },

    #[error("Failed to bundle: {names}")]
    #[diagnostic(code(antibody::bundle::batch_failed))]
    BundleBatchFailed { names: String },

    #[error("{count} bundle(s) failed to update: {names}")]
    #[diagnostic(
        code(antibody::update::batch_failed),
        help("Failed checkouts were left on disk; inspect or remove them and update again")
    )]
    BulkUpdateFailed { count: usize, names: String },

    #[error("IO error: {message}")]
    #[diagnostic(code(antibody::fs::io_error))]
    IoError { message: String },

    #[error("Git operation failed: {message}")]
    #[diagnostic(code(antibody::git::operation_failed))]
    GitOperationFailed { message: String },
}

impl From<std::io::Error> for AntibodyError {
    fn from(err: std::io::Error) -> Self {
        AntibodyError::IoError {
            message: err.to_string(),
        }
    }
}

impl From<git2::Error> for AntibodyError {
    fn from(err: git2::Error) -> Self {
        AntibodyError::GitOperationFailed {
            message: err.to_string(),
        }
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, AntibodyError>;
