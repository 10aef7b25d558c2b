//! Discount code data models and API request/response types.
//!
//! Discount codes knock an integer percentage off the listing price during
//! the paid submission flow. Prices are integer cents throughout, so the
//! discount math never touches floating point.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Represents a discount code record from the database.
///
/// # Database Table
///
/// Maps to the `discount_codes` table. Codes are stored upper-cased and
/// matched exactly; submissions may supply them in any case.
#[derive(Debug, Clone, sqlx::FromRow, Serialize)]
pub struct DiscountCode {
    /// Unique identifier for this code
    pub id: Uuid,

    /// The code itself, upper-cased at creation, e.g. "LAUNCH20"
    pub code: String,

    /// Optional note shown in admin tooling
    pub description: Option<String>,

    /// Integer percentage off the listing price (1-100)
    pub percent_off: i32,

    /// Whether the code is currently usable
    ///
    /// Deactivated codes stay in the table for bookkeeping but no longer
    /// apply during submission.
    pub active: bool,

    /// Optional expiry; a past expiry makes the code inapplicable
    pub expires_at: Option<DateTime<Utc>>,

    /// Timestamp when the code was created
    pub created_at: DateTime<Utc>,
}

impl DiscountCode {
    /// Whether this code applies at the given instant.
    ///
    /// A code applies when it is active and either has no expiry or the
    /// expiry lies in the future.
    pub fn is_applicable(&self, now: DateTime<Utc>) -> bool {
        self.active && self.expires_at.is_none_or(|expiry| expiry > now)
    }
}

/// Request body for admin discount code creation.
///
/// ```json
/// {
///   "code": "launch20",
///   "description": "Launch promotion",
///   "percent_off": 20,
///   "expires_at": "2026-12-31T00:00:00Z"
/// }
/// ```
#[derive(Debug, Deserialize)]
pub struct CreateDiscountCodeRequest {
    pub code: String,
    pub description: Option<String>,
    pub percent_off: i32,
    pub expires_at: Option<DateTime<Utc>>,
}

/// Request body for toggling a discount code.
///
/// ```json
/// { "active": false }
/// ```
#[derive(Debug, Deserialize)]
pub struct UpdateDiscountCodeRequest {
    pub active: bool,
}
