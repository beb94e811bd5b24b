//! Input validation helpers
//!
//! Centralized text length limits for admin forms and order notes.

use rust_decimal::Decimal;
use shared::error::ErrorCode;

use crate::utils::AppError;

// ── Text length limits ──────────────────────────────────────────────

/// Entity names: dish, category, section, account
pub const MAX_NAME_LEN: usize = 200;

/// Per-person order notes ("sin cebolla", "bien cocido", ...)
pub const MAX_NOTE_LEN: usize = 500;

/// Email addresses (RFC 5321)
pub const MAX_EMAIL_LEN: usize = 254;

/// Passwords (before hashing)
pub const MAX_PASSWORD_LEN: usize = 128;

/// Minimum password length accepted at registration
pub const MIN_PASSWORD_LEN: usize = 6;

// ── Validation helpers ──────────────────────────────────────────────

/// Validate that a required string is non-empty and within the length limit.
pub fn validate_required_text(value: &str, field: &str, max_len: usize) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::validation(format!("{field} must not be empty")));
    }
    if value.chars().count() > max_len {
        return Err(AppError::validation(format!(
            "{field} is too long ({} chars, max {max_len})",
            value.chars().count()
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
    if let Some(v) = value {
        if v.chars().count() > max_len {
            return Err(AppError::validation(format!(
                "{field} is too long ({} chars, max {max_len})",
                v.chars().count()
            )));
        }
    }
    Ok(())
}

/// Parse a price typed into the admin form
///
/// Accepts plain decimal text ("12.50", " 8 "); rejects negatives.
pub fn parse_price(raw: &str) -> Result<Decimal, AppError> {
    let price: Decimal = raw.trim().parse().map_err(|_| {
        AppError::with_message(ErrorCode::InvalidPrice, format!("Invalid price: {raw}"))
    })?;
    if price.is_sign_negative() && !price.is_zero() {
        return Err(AppError::with_message(
            ErrorCode::InvalidPrice,
            "Price must not be negative",
        ));
    }
    Ok(price)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_text() {
        assert!(validate_required_text("Postres", "name", MAX_NAME_LEN).is_ok());
        assert!(validate_required_text("   ", "name", MAX_NAME_LEN).is_err());
        assert!(validate_required_text(&"x".repeat(201), "name", MAX_NAME_LEN).is_err());
        // multi-byte characters count once
        assert!(validate_required_text(&"ñ".repeat(200), "name", MAX_NAME_LEN).is_ok());
    }

    #[test]
    fn test_optional_text() {
        assert!(validate_optional_text(&None, "section", MAX_NAME_LEN).is_ok());
        assert!(validate_optional_text(&Some("x".repeat(501)), "note", MAX_NOTE_LEN).is_err());
    }

    #[test]
    fn test_parse_price() {
        assert_eq!(parse_price("12.50").unwrap().to_string(), "12.50");
        assert_eq!(parse_price(" 8 ").unwrap(), Decimal::from(8));
        assert_eq!(parse_price("0").unwrap(), Decimal::ZERO);

        let err = parse_price("doce").unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidPrice);
        assert!(parse_price("-1").is_err());
    }
}
