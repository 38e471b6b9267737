//! Application layer errors.
//!
//! These errors represent failures in pipeline orchestration, not business
//! logic. Business logic errors are `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur during the scaffold pipeline.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// A path already exists at the computed staging namespace.
    ///
    /// Fatal and raised before anything is created, so no cleanup is owed.
    /// Distinct from the destination-exists case, which is merely prompted.
    #[error("Staging path already exists: {path}")]
    StagingCollision { path: PathBuf },

    /// The template tree, or a required entry inside it, is absent.
    #[error("Template asset missing: {path}")]
    MissingTemplateAsset { path: PathBuf },

    /// Filesystem operation failed.
    #[error("Filesystem error at {path}: {reason}")]
    FilesystemError { path: PathBuf, reason: String },

    /// The confirmation prompt could not be read.
    #[error("Confirmation prompt failed: {reason}")]
    PromptFailed { reason: String },
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::StagingCollision { path } => vec![
                format!("A stale staging directory exists: {}", path.display()),
                "Remove it and run skel again".into(),
            ],
            Self::MissingTemplateAsset { path } => vec![
                format!("Expected template entry not found: {}", path.display()),
                "The template directory is malformed or incomplete".into(),
                "Set SKEL_TEMPLATES_DIR to a valid template, or unset it to use the builtin one"
                    .into(),
            ],
            Self::FilesystemError { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
                "Check available disk space".into(),
            ],
            Self::PromptFailed { .. } => vec![
                "Could not read the confirmation answer".into(),
                "Use --yes to skip the prompt in non-interactive environments".into(),
            ],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::StagingCollision { .. } => ErrorCategory::Collision,
            Self::MissingTemplateAsset { .. } => ErrorCategory::NotFound,
            Self::FilesystemError { .. } | Self::PromptFailed { .. } => ErrorCategory::Internal,
        }
    }
}
