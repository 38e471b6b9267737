use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (for retry logic at higher layers)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ========================================================================
    // Validation Errors (400-level equivalent)
    // ========================================================================
    #[error("Invalid project name '{name}': {reason}")]
    InvalidProjectName { name: String, reason: String },

    /// An in-place scaffold was requested but no package name could be
    /// derived from the working directory.
    #[error("Cannot derive a package name from '{directory}'")]
    UnnameablePackage { directory: String },
}

impl DomainError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidProjectName { name, reason } => vec![
                format!("Project name '{}' is invalid: {}", name, reason),
                "Use letters, digits, and underscores".into(),
                "Start with a letter or underscore".into(),
                "Examples: myapp, my_app, app2".into(),
            ],
            Self::UnnameablePackage { directory } => vec![
                format!("The directory '{}' does not yield a usable package name", directory),
                "Pass a project name explicitly: skel new <NAME>".into(),
            ],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidProjectName { .. } | Self::UnnameablePackage { .. } => {
                ErrorCategory::Validation
            }
        }
    }
}

/// Domain-level error categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Internal,
}
