//! HTTP status code mapping for error codes

use super::codes::ErrorCode;
use http::StatusCode;

impl ErrorCode {
    /// Get the appropriate HTTP status code for this error code
    pub fn http_status(&self) -> StatusCode {
        match self {
            Self::Success => StatusCode::OK,

            // 404 Not Found
            Self::NotFound
            | Self::MenuItemNotFound
            | Self::CategoryNotFound
            | Self::SectionNotFound
            | Self::TableNotFound => StatusCode::NOT_FOUND,

            // 409 Conflict
            Self::EmailAlreadyInUse => StatusCode::CONFLICT,

            // 401 Unauthorized
            Self::InvalidCredentials => StatusCode::UNAUTHORIZED,

            // 422 Unprocessable (business rule)
            Self::OrderEmpty => StatusCode::UNPROCESSABLE_ENTITY,

            // 500 Internal Server Error
            Self::InternalError | Self::FeedWriteFailed => StatusCode::INTERNAL_SERVER_ERROR,

            // 400 Bad Request (default for validation errors)
            _ => StatusCode::BAD_REQUEST,
        }
    }
}
