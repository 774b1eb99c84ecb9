//! Input validation helpers
//!
//! Centralized text length constants and validation functions used by the
//! menu and payment handlers.

use shared::AppError;

// ── Text length limits ──────────────────────────────────────────────

/// Entity names: category, dish
pub const MAX_NAME_LEN: usize = 200;

/// Descriptions
pub const MAX_NOTE_LEN: usize = 500;

/// Short identifiers: gateway ids, currency, status, method, phone
pub const MAX_SHORT_TEXT_LEN: usize = 100;

/// Email addresses (RFC 5321)
pub const MAX_EMAIL_LEN: usize = 254;

/// URLs / image paths
pub const MAX_URL_LEN: usize = 2048;

// ── Validation helpers ──────────────────────────────────────────────

/// Validate that a required string is non-empty and within the length limit.
pub fn validate_required_text(value: &str, field: &str, max_len: usize) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::validation(format!("{field} must not be empty")));
    }
    if value.len() > max_len {
        return Err(AppError::validation(format!(
            "{field} is too long ({} chars, max {max_len})",
            value.len()
        )));
    }
    Ok(())
}

/// Validate that an optional string, if present, is within the length limit.
pub fn validate_optional_text(
    value: &Option<String>,
    field: &str,
    max_len: usize,
) -> Result<(), AppError> {
    if let Some(v) = value
        && v.len() > max_len
    {
        return Err(AppError::validation(format!(
            "{field} is too long ({} chars, max {max_len})",
            v.len()
        )));
    }
    Ok(())
}

/// Validate a monetary amount: finite and not negative.
pub fn validate_amount(value: f64, field: &str) -> Result<(), AppError> {
    if !value.is_finite() {
        return Err(AppError::validation(format!("{field} must be a finite number")));
    }
    if value < 0.0 {
        return Err(AppError::validation(format!("{field} must not be negative")));
    }
    Ok(())
}

/// Returns the trimmed value when present and non-empty.
pub fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::ErrorCode;

    #[test]
    fn test_required_text() {
        assert!(validate_required_text("Starters", "name", MAX_NAME_LEN).is_ok());
        let err = validate_required_text("   ", "name", MAX_NAME_LEN).unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationFailed);
        assert_eq!(err.message, "name must not be empty");

        let long = "x".repeat(MAX_NAME_LEN + 1);
        assert!(validate_required_text(&long, "name", MAX_NAME_LEN).is_err());
    }

    #[test]
    fn test_optional_text() {
        assert!(validate_optional_text(&None, "description", MAX_NOTE_LEN).is_ok());
        let long = Some("x".repeat(MAX_NOTE_LEN + 1));
        assert!(validate_optional_text(&long, "description", MAX_NOTE_LEN).is_err());
    }

    #[test]
    fn test_amount() {
        assert!(validate_amount(0.0, "price").is_ok());
        assert!(validate_amount(249.5, "price").is_ok());
        assert!(validate_amount(-0.01, "price").is_err());
        assert!(validate_amount(f64::NAN, "price").is_err());
        assert!(validate_amount(f64::INFINITY, "price").is_err());
    }

    #[test]
    fn test_non_empty() {
        assert_eq!(non_empty(&Some(" pay_1 ".into())), Some("pay_1"));
        assert_eq!(non_empty(&Some("  ".into())), None);
        assert_eq!(non_empty(&None), None);
    }
}
