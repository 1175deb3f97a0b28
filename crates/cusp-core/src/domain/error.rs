// ============================================================================
// domain/error.rs - WORKSPACE MODEL ERRORS
// ============================================================================

use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (the service keeps a copy while rolling back)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ========================================================================
    // Validation Errors
    // ========================================================================
    #[error("Invalid name '{name}': {reason}")]
    InvalidName { name: String, reason: String },

    #[error("Invalid file name '{name}': {reason}")]
    InvalidFileName { name: String, reason: String },

    #[error("Invalid C++ dialect '{0}'")]
    InvalidDialect(String),

    #[error("Unknown project kind '{0}'")]
    UnknownKind(String),

    #[error("Unknown toolset '{0}'")]
    UnknownToolset(String),

    #[error("Required field missing: {field}")]
    MissingRequiredField { field: &'static str },

    // ========================================================================
    // Invariant Violations
    // ========================================================================
    #[error("Solution can have only one entry point: '{existing}' is already a consoleapp")]
    MultipleEntryPoints { existing: String },

    #[error("Project '{name}' already exists in this workspace")]
    DuplicateProject { name: String },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidName { .. } => vec![
                "Use letters, digits, '-', '_' or '.' (not as the first character)".into(),
                "Examples: Game, engine_core, net-utils".into(),
            ],
            Self::InvalidFileName { .. } => vec![
                "File names are created directly under include/ or src/".into(),
                "Do not use path separators or '..'".into(),
            ],
            Self::InvalidDialect(_) => vec![
                "Dialects look like: C++11, C++14, C++17, C++20, gnu++17".into(),
            ],
            Self::UnknownKind(_) => vec![
                "Supported kinds:".into(),
                "  • consoleapp   - executable with a main() entry point".into(),
                "  • windowedapp  - GUI executable".into(),
                "  • staticlib    - static library".into(),
                "  • sharedlib    - shared/dynamic library".into(),
            ],
            Self::UnknownToolset(_) => vec![
                "Supported toolsets: gcc, clang, msc".into(),
            ],
            Self::MultipleEntryPoints { existing } => vec![
                format!("'{existing}' already provides the workspace entry point"),
                "Add the new project as a library: --kind staticlib".into(),
            ],
            Self::DuplicateProject { name } => vec![
                format!("A project named '{name}' is already listed in cusp.json"),
                "Choose a different project name".into(),
            ],
            Self::MissingRequiredField { field } => {
                vec![format!("Provide a value for '{field}'")]
            }
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::MultipleEntryPoints { .. } | Self::DuplicateProject { .. } => {
                ErrorCategory::Conflict
            }
            _ => ErrorCategory::Validation,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Conflict,
}
