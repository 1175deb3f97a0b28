use std::path::{Component, Path};

use super::DomainError;

/// Validate a project or workspace name.
///
/// Names double as directory names and as keys in `cusp.json`, so they must
/// be a single, non-hidden path component.
pub fn validate_name(name: &str) -> Result<(), DomainError> {
    let invalid = |reason: &str| DomainError::InvalidName {
        name: name.to_string(),
        reason: reason.to_string(),
    };

    if name.is_empty() {
        return Err(invalid("name cannot be empty"));
    }
    if name.starts_with('.') {
        return Err(invalid("name cannot start with '.'"));
    }
    if name.contains('/') || name.contains('\\') {
        return Err(invalid("name cannot contain path separators"));
    }
    if let Some(c) = name
        .chars()
        .find(|c| !(c.is_alphanumeric() || matches!(c, '-' | '_' | '.')))
    {
        return Err(invalid(&format!("character '{c}' is not allowed")));
    }

    Ok(())
}

/// Validate a file name placed directly under `include/` or `src/`.
pub fn validate_file_name(name: &str) -> Result<(), DomainError> {
    let invalid = |reason: &str| DomainError::InvalidFileName {
        name: name.to_string(),
        reason: reason.to_string(),
    };

    if name.trim().is_empty() {
        return Err(invalid("file name cannot be empty"));
    }
    if name.contains('/') || name.contains('\\') {
        return Err(invalid("file name cannot contain path separators"));
    }

    let mut components = Path::new(name).components();
    match (components.next(), components.next()) {
        (Some(Component::Normal(_)), None) => Ok(()),
        _ => Err(invalid("must be a single relative file name")),
    }
}
