//! # Validation Module
//!
//! Credential checks for the session operations.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Auth modal (frontend)                                        │
//! │  └── Field presence, immediate feedback                                │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: DomainStore::login / signup                                  │
//! │  └── THIS MODULE: every credential field must be non-empty             │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Command boundary                                             │
//! │  └── Any ValidationError collapses to `false`                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! There is no password policy. A mock backend has no identity boundary to
//! protect, so presence is the whole rule.

use crate::error::ValidationError;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Fails with `Required` if `value` is empty.
///
/// Whitespace counts as content: `" "` passes, as it does in the web client.
pub fn require(field: &str, value: &str) -> ValidationResult<()> {
    if value.is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }
    Ok(())
}

/// Validates login credentials.
///
/// ## Example
/// ```rust
/// use bookswap_core::validation::validate_login;
///
/// assert!(validate_login("a@b.com", "secret").is_ok());
/// assert!(validate_login("", "secret").is_err());
/// ```
pub fn validate_login(email: &str, password: &str) -> ValidationResult<()> {
    require("email", email)?;
    require("password", password)
}

/// Validates signup fields. The name is required as well.
pub fn validate_signup(name: &str, email: &str, password: &str) -> ValidationResult<()> {
    require("name", name)?;
    validate_login(email, password)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_accepts_any_non_empty_pair() {
        assert!(validate_login("a@b.com", "secret").is_ok());
        assert!(validate_login("not-an-email", "x").is_ok());
        assert!(validate_login(" ", " ").is_ok());
    }

    #[test]
    fn test_login_reports_first_missing_field() {
        assert_eq!(
            validate_login("", ""),
            Err(ValidationError::Required {
                field: "email".to_string()
            })
        );
        assert_eq!(
            validate_login("a@b.com", ""),
            Err(ValidationError::Required {
                field: "password".to_string()
            })
        );
    }

    #[test]
    fn test_signup_requires_name() {
        assert!(validate_signup("Sam", "sam@b.com", "pw").is_ok());
        assert_eq!(
            validate_signup("", "sam@b.com", "pw"),
            Err(ValidationError::Required {
                field: "name".to_string()
            })
        );
        assert!(validate_signup("Sam", "", "pw").is_err());
        assert!(validate_signup("Sam", "sam@b.com", "").is_err());
    }
}
