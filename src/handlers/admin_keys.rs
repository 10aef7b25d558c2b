//! Admin key management HTTP handlers.
//!
//! This module implements:
//! - POST /api/v1/admin/keys - Mint a new admin key
//! - DELETE /api/v1/admin/keys/{id} - Revoke a key
//!
//! The first key has to be provisioned out-of-band (a row inserted with a
//! hash produced the same way); after that, existing admins mint and
//! revoke keys through these endpoints.

use crate::{
    db::DbPool,
    error::AppError,
    middleware::auth::{AuthContext, hash_key},
    models::admin_key::{AdminKey, AdminKeyResponse, CreateAdminKeyRequest},
};
use axum::{
    Extension, Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use uuid::Uuid;

/// Generate cryptographically secure key material.
///
/// # Output
///
/// 64 hex characters (32 random bytes)
fn generate_key() -> String {
    let bytes: [u8; 32] = rand::random();
    hex::encode(bytes)
}

/// Mint a new admin key.
///
/// # Endpoint
///
/// `POST /api/v1/admin/keys`
///
/// # Request Body
///
/// ```json
/// { "label": "ops@example.com" }
/// ```
///
/// # Response (201 Created)
///
/// ```json
/// {
///   "id": "550e8400-e29b-41d4-a716-446655440000",
///   "label": "ops@example.com",
///   "key": "a1b2c3d4e5f6...",
///   "created_at": "2026-01-15T10:30:00Z"
/// }
/// ```
///
/// # Security
///
/// The plaintext `key` is returned only here, once; the database stores
/// its SHA-256 hash.
pub async fn create_admin_key(
    State(pool): State<DbPool>,
    Extension(auth): Extension<AuthContext>,
    Json(request): Json<CreateAdminKeyRequest>,
) -> Result<impl IntoResponse, AppError> {
    if request.label.trim().is_empty() {
        return Err(AppError::InvalidRequest("label is required".to_string()));
    }

    let key = generate_key();
    let key_hash = hash_key(&key);

    let record = sqlx::query_as::<_, AdminKey>(
        r#"
        INSERT INTO admin_keys (key_hash, label)
        VALUES ($1, $2)
        RETURNING *
        "#,
    )
    .bind(&key_hash)
    .bind(request.label.trim())
    .fetch_one(&pool)
    .await?;

    tracing::info!(label = %record.label, minted_by = %auth.label, "admin key minted");

    Ok((
        StatusCode::CREATED,
        Json(AdminKeyResponse {
            id: record.id,
            label: record.label,
            key,
            created_at: record.created_at,
        }),
    ))
}

/// Revoke an admin key.
///
/// # Endpoint
///
/// `DELETE /api/v1/admin/keys/{id}`
///
/// The row is kept with `is_active = false` so the revocation itself is
/// auditable; the key stops authenticating immediately.
///
/// # Response
///
/// - **Success (204 No Content)**
/// - **Error (404)**: no key with that id
pub async fn revoke_admin_key(
    State(pool): State<DbPool>,
    Extension(auth): Extension<AuthContext>,
    Path(key_id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let revoked = sqlx::query("UPDATE admin_keys SET is_active = false WHERE id = $1")
        .bind(key_id)
        .execute(&pool)
        .await?
        .rows_affected();

    if revoked == 0 {
        return Err(AppError::AdminKeyNotFound);
    }

    tracing::info!(key_id = %key_id, revoked_by = %auth.label, "admin key revoked");

    Ok(StatusCode::NO_CONTENT)
}
