//! Unified error codes for the Comanda workspace
//!
//! Error codes are organized by category:
//! - 0xxx: General errors
//! - 1xxx: Authentication errors
//! - 4xxx: Order errors
//! - 6xxx: Catalog errors
//! - 7xxx: Table errors
//! - 9xxx: System errors

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unified error code enum
///
/// All error codes are represented as u16 values so the HTTP clients
/// (waiter tablets, kitchen displays) can switch on them directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 0xxx: General ====================
    /// Operation completed successfully
    Success = 0,
    /// Validation failed
    ValidationFailed = 2,
    /// Resource not found
    NotFound = 3,
    /// Invalid format
    InvalidFormat = 6,
    /// Required field missing
    RequiredField = 7,

    // ==================== 1xxx: Auth ====================
    /// Invalid credentials (email/password)
    InvalidCredentials = 1002,
    /// Role tag is not one of the known roles
    InvalidRole = 1003,
    /// Email already registered
    EmailAlreadyInUse = 1004,
    /// Password too short
    PasswordTooShort = 1005,
    /// Email address malformed
    InvalidEmail = 1006,

    // ==================== 4xxx: Order ====================
    /// Order has no persons
    OrderEmpty = 4002,

    // ==================== 6xxx: Catalog ====================
    /// Menu item not found
    MenuItemNotFound = 6001,
    /// Price is not a valid amount
    InvalidPrice = 6002,
    /// Category not found
    CategoryNotFound = 6101,
    /// Section not found
    SectionNotFound = 6201,

    // ==================== 7xxx: Table ====================
    /// Table not found
    TableNotFound = 7001,

    // ==================== 9xxx: System ====================
    /// Internal server error
    InternalError = 9001,
    /// Write to the document feed failed
    FeedWriteFailed = 9002,
}

impl ErrorCode {
    /// Get the numeric code value
    #[inline]
    pub const fn code(&self) -> u16 {
        *self as u16
    }

    /// Check if this is a success code
    #[inline]
    pub const fn is_success(&self) -> bool {
        matches!(self, ErrorCode::Success)
    }

    /// Get the developer-facing English message for this error code
    pub const fn message(&self) -> &'static str {
        match self {
            // General
            ErrorCode::Success => "Operation completed successfully",
            ErrorCode::ValidationFailed => "Validation failed",
            ErrorCode::NotFound => "Resource not found",
            ErrorCode::InvalidFormat => "Invalid format",
            ErrorCode::RequiredField => "Required field is missing",

            // Auth
            ErrorCode::InvalidCredentials => "Invalid email or password",
            ErrorCode::InvalidRole => "Invalid user role",
            ErrorCode::EmailAlreadyInUse => "Email is already in use",
            ErrorCode::PasswordTooShort => "Password should be at least 6 characters",
            ErrorCode::InvalidEmail => "Invalid email address",

            // Order
            ErrorCode::OrderEmpty => "You must add at least one person",

            // Catalog
            ErrorCode::MenuItemNotFound => "Menu item not found",
            ErrorCode::InvalidPrice => "Invalid price",
            ErrorCode::CategoryNotFound => "Category not found",
            ErrorCode::SectionNotFound => "Section not found",

            // Table
            ErrorCode::TableNotFound => "Table not found",

            // System
            ErrorCode::InternalError => "Internal server error",
            ErrorCode::FeedWriteFailed => "Feed write failed",
        }
    }
}

impl From<ErrorCode> for u16 {
    #[inline]
    fn from(code: ErrorCode) -> Self {
        code.code()
    }
}

/// Error when converting from an invalid u16 to ErrorCode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidErrorCode(pub u16);

impl fmt::Display for InvalidErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid error code: {}", self.0)
    }
}

impl std::error::Error for InvalidErrorCode {}

impl TryFrom<u16> for ErrorCode {
    type Error = InvalidErrorCode;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            // General
            0 => Ok(ErrorCode::Success),
            2 => Ok(ErrorCode::ValidationFailed),
            3 => Ok(ErrorCode::NotFound),
            6 => Ok(ErrorCode::InvalidFormat),
            7 => Ok(ErrorCode::RequiredField),

            // Auth
            1002 => Ok(ErrorCode::InvalidCredentials),
            1003 => Ok(ErrorCode::InvalidRole),
            1004 => Ok(ErrorCode::EmailAlreadyInUse),
            1005 => Ok(ErrorCode::PasswordTooShort),
            1006 => Ok(ErrorCode::InvalidEmail),

            // Order
            4002 => Ok(ErrorCode::OrderEmpty),

            // Catalog
            6001 => Ok(ErrorCode::MenuItemNotFound),
            6002 => Ok(ErrorCode::InvalidPrice),
            6101 => Ok(ErrorCode::CategoryNotFound),
            6201 => Ok(ErrorCode::SectionNotFound),

            // Table
            7001 => Ok(ErrorCode::TableNotFound),

            // System
            9001 => Ok(ErrorCode::InternalError),
            9002 => Ok(ErrorCode::FeedWriteFailed),

            _ => Err(InvalidErrorCode(value)),
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}
