//! Error types and HTTP error response handling.
//!
//! This module defines all application errors and how they are converted
//! into HTTP responses with appropriate status codes and JSON bodies.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

/// Application-wide error type.
///
/// This enum represents all possible errors that can occur in the
/// application. Each variant maps to a specific HTTP status code and error
/// message.
///
/// # Error Categories
///
/// - **Database Errors**: Any sqlx::Error from database operations
/// - **Authentication Errors**: Invalid or missing admin keys
/// - **Resource Errors**: Requested resources not found
/// - **Validation Errors**: Invalid request data
///
/// The slug codec itself never fails: any input string, including the empty
/// string, produces a (possibly empty) slug. A path whose recomputed slugs
/// match no published business surfaces as [`AppError::BusinessNotFound`].
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Database operation failed (e.g., connection error, query error).
    ///
    /// This wraps any sqlx::Error using the `#[from]` attribute, which
    /// automatically implements `From<sqlx::Error> for AppError`.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Admin key is missing, invalid, or revoked.
    ///
    /// Returns HTTP 401 Unauthorized.
    #[error("Invalid admin key")]
    InvalidAdminKey,

    /// No published business matches the requested path segments.
    ///
    /// Returns HTTP 404 Not Found. This also covers the silent-failure mode
    /// of the compound location segment: an ambiguous decomposition picks
    /// the wrong city/state split and a legitimate business lands here.
    #[error("Business not found")]
    BusinessNotFound,

    /// Referenced category does not exist.
    ///
    /// Returns HTTP 404 Not Found.
    #[error("Category not found")]
    CategoryNotFound,

    /// Referenced discount code does not exist.
    ///
    /// Returns HTTP 404 Not Found.
    #[error("Discount code not found")]
    DiscountCodeNotFound,

    /// Referenced admin key does not exist.
    ///
    /// Returns HTTP 404 Not Found.
    #[error("Admin key not found")]
    AdminKeyNotFound,

    /// Request body or parameters are invalid.
    ///
    /// Returns HTTP 400 Bad Request.
    /// The String contains details about what was invalid.
    #[error("Invalid request")]
    InvalidRequest(String),
}

/// Convert AppError into an HTTP response.
///
/// This implementation allows Axum handlers to return `Result<T, AppError>`
/// and have errors automatically converted to proper HTTP responses.
///
/// # Response Format
///
/// All errors return JSON in this format:
/// ```json
/// {
///   "error": {
///     "code": "error_type",
///     "message": "Human-readable error message"
///   }
/// }
/// ```
///
/// # Status Code Mapping
///
/// - `InvalidAdminKey` → 401 Unauthorized
/// - `BusinessNotFound` / `CategoryNotFound` / `DiscountCodeNotFound` /
///   `AdminKeyNotFound` → 404 Not Found
/// - `InvalidRequest` → 400 Bad Request
/// - `Database` → 500 Internal Server Error (hides details from client)
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Map each error variant to (HTTP status, error code, message)
        let (status, code, message) = match self {
            AppError::InvalidAdminKey => (
                StatusCode::UNAUTHORIZED,
                "invalid_admin_key",
                self.to_string(),
            ),
            AppError::BusinessNotFound => (
                StatusCode::NOT_FOUND,
                "business_not_found",
                self.to_string(),
            ),
            AppError::CategoryNotFound => (
                StatusCode::NOT_FOUND,
                "category_not_found",
                self.to_string(),
            ),
            AppError::DiscountCodeNotFound => (
                StatusCode::NOT_FOUND,
                "discount_code_not_found",
                self.to_string(),
            ),
            AppError::AdminKeyNotFound => (
                StatusCode::NOT_FOUND,
                "admin_key_not_found",
                self.to_string(),
            ),
            AppError::InvalidRequest(ref msg) => {
                (StatusCode::BAD_REQUEST, "invalid_request", msg.clone())
            }
            AppError::Database(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "internal_error",
                "An internal error occurred".to_string(),
            ),
        };

        // Build JSON response body
        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        // Return the response with status code and JSON body
        (status, body).into_response()
    }
}
