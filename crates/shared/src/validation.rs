//! Common validation utilities.

use validator::ValidationError;

/// Maximum accepted length for merchant/terminal identifiers.
const MAX_IDENTIFIER_LENGTH: usize = 64;

/// Validates that an identifier is non-blank and within length limits.
pub fn validate_identifier(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut err = ValidationError::new("identifier_blank");
        err.message = Some("Identifier must not be blank".into());
        return Err(err);
    }
    if value.len() > MAX_IDENTIFIER_LENGTH {
        let mut err = ValidationError::new("identifier_length");
        err.message = Some("Identifier exceeds maximum length".into());
        return Err(err);
    }
    Ok(())
}

/// Returns true if the optional identifier is present and non-blank.
pub fn has_identifier(value: Option<&str>) -> bool {
    value.map(|v| !v.trim().is_empty()).unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_identifier_ok() {
        assert!(validate_identifier("M1").is_ok());
        assert!(validate_identifier("TERM-0042").is_ok());
    }

    #[test]
    fn test_validate_identifier_blank() {
        assert!(validate_identifier("").is_err());
        assert!(validate_identifier("   ").is_err());
    }

    #[test]
    fn test_validate_identifier_too_long() {
        let long = "x".repeat(65);
        assert!(validate_identifier(&long).is_err());
    }

    #[test]
    fn test_has_identifier() {
        assert!(has_identifier(Some("T1")));
        assert!(!has_identifier(Some("")));
        assert!(!has_identifier(Some("  ")));
        assert!(!has_identifier(None));
    }
}
