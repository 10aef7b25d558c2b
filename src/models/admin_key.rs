//! Admin key model for back-office authentication.
//!
//! Admin keys gate the moderation, category, discount-code, and settings
//! endpoints. They are stored in the database as SHA-256 hashes; the
//! plaintext key is shown exactly once, at creation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Represents an admin key record from the database.
///
/// # Database Table
///
/// Maps to the `admin_keys` table with columns:
/// - `id`: Unique identifier (UUID)
/// - `key_hash`: SHA-256 hash of the actual key
/// - `label`: Who or what this key was issued to
/// - `created_at`: When the key was created
/// - `is_active`: Whether the key is currently valid
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct AdminKey {
    /// Unique identifier for this admin key
    pub id: Uuid,

    /// SHA-256 hash of the actual key (64 hex characters)
    ///
    /// When a request comes in with "Bearer abc123", we:
    /// 1. Hash "abc123" with SHA-256
    /// 2. Look up this hash in the database
    /// 3. If found and active, authenticate the request
    pub key_hash: String,

    /// Human-readable label for the key holder, e.g. "ops@example.com"
    pub label: String,

    /// Timestamp when this key was created
    pub created_at: DateTime<Utc>,

    /// Whether this key is currently active
    ///
    /// Revoked keys are rejected during authentication. This provides a way
    /// to cut off access without deleting the record.
    pub is_active: bool,
}

/// Request body for minting a new admin key.
///
/// ```json
/// { "label": "ops@example.com" }
/// ```
#[derive(Debug, Deserialize)]
pub struct CreateAdminKeyRequest {
    pub label: String,
}

/// Response for a freshly minted admin key.
///
/// `key` is the plaintext secret - this is the only time it is ever
/// returned; only its hash is stored.
#[derive(Debug, Serialize)]
pub struct AdminKeyResponse {
    pub id: Uuid,
    pub label: String,
    pub key: String,
    pub created_at: DateTime<Utc>,
}
