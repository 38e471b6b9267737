use crate::domain::error::DomainError;

/// Centralized domain validation.
///
/// All validation logic lives here, not scattered across value objects.
pub struct DomainValidator;

impl DomainValidator {
    /// Validate a package name before it becomes a directory name and a
    /// Python package identifier.
    pub fn validate_package_name(name: &str) -> Result<(), DomainError> {
        let invalid = |reason: &str| DomainError::InvalidProjectName {
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
        // The name becomes `src/<name>/` and an importable package, so it
        // must be a valid identifier.
        if name.chars().next().is_some_and(|c| c.is_ascii_digit()) {
            return Err(invalid("name cannot start with a digit"));
        }
        if !name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
            return Err(invalid(
                "name may only contain letters, digits, and underscores",
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_name_is_invalid() {
        assert!(matches!(
            DomainValidator::validate_package_name(""),
            Err(DomainError::InvalidProjectName { .. })
        ));
    }

    #[test]
    fn dotfile_name_is_invalid() {
        assert!(DomainValidator::validate_package_name(".hidden").is_err());
    }

    #[test]
    fn path_separator_in_name_is_invalid() {
        assert!(DomainValidator::validate_package_name("a/b").is_err());
        assert!(DomainValidator::validate_package_name("a\\b").is_err());
    }

    #[test]
    fn leading_digit_is_invalid() {
        assert!(DomainValidator::validate_package_name("1app").is_err());
    }

    #[test]
    fn hyphen_is_invalid() {
        // hyphens are fine in directory names but not in import names
        assert!(DomainValidator::validate_package_name("my-app").is_err());
    }

    #[test]
    fn valid_names_pass() {
        for name in &["myapp", "my_app", "app2", "MyApp", "_private"] {
            assert!(
                DomainValidator::validate_package_name(name).is_ok(),
                "failed for: {name}"
            );
        }
    }
}
