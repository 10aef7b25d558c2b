//! Admin key authentication middleware.
//!
//! This middleware intercepts every back-office request to:
//! 1. Extract the admin key from the Authorization header
//! 2. Hash it and verify it exists in the database
//! 3. Inject authentication context into the request
//! 4. Reject unauthorized requests with HTTP 401

use crate::{db::DbPool, error::AppError, models::admin_key::AdminKey};
use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use sha2::{Digest, Sha256};
use uuid::Uuid;

/// Authentication context attached to authenticated admin requests.
///
/// This struct is inserted into the request's extension map and can be
/// extracted by route handlers to know which key performed an action.
#[derive(Debug, Clone)]
pub struct AuthContext {
    /// ID of the authenticated admin key
    pub admin_key_id: Uuid,

    /// Label of the key holder making the request
    pub label: String,
}

/// Hash an admin key the way it is stored in the database.
///
/// SHA-256 over the raw key bytes, hex-encoded (64 characters).
pub fn hash_key(key: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(key.as_bytes());
    hex::encode(hasher.finalize())
}

/// Admin key authentication middleware function.
///
/// # Flow
///
/// 1. Extract `Authorization: Bearer <key>` header from request
/// 2. Hash the `<key>` using SHA-256
/// 3. Query database for matching hash where `is_active = true`
/// 4. If found: inject `AuthContext` into request, call next handler
/// 5. If not found: return 401 Unauthorized error
///
/// # Headers
///
/// Expected header format:
/// ```
/// Authorization: Bearer abc123xyz
/// ```
///
/// # Returns
///
/// - `Ok(Response)` if authenticated successfully (calls next handler)
/// - `Err(AppError::InvalidAdminKey)` if authentication fails (returns 401)
pub async fn auth_middleware(
    State(pool): State<DbPool>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    // Step 1: Extract Authorization header
    let auth_header = request
        .headers()
        .get("Authorization")
        .and_then(|h| h.to_str().ok())
        .ok_or(AppError::InvalidAdminKey)?;

    // Step 2: Extract Bearer token
    // Expected format: "Bearer <admin_key>"
    let admin_key = auth_header
        .strip_prefix("Bearer ")
        .ok_or(AppError::InvalidAdminKey)?;

    // Step 3: Hash the key and look it up
    let key_hash = hash_key(admin_key);

    let key_record = sqlx::query_as::<_, AdminKey>(
        "SELECT id, key_hash, label, created_at, is_active
         FROM admin_keys
         WHERE key_hash = $1 AND is_active = true",
    )
    .bind(&key_hash)
    .fetch_optional(&pool)
    .await?
    .ok_or(AppError::InvalidAdminKey)?;

    // Step 4: Create authentication context
    let auth_context = AuthContext {
        admin_key_id: key_record.id,
        label: key_record.label,
    };

    // Step 5: Inject context into request extensions
    // Route handlers can now extract this using Extension<AuthContext>
    request.extensions_mut().insert(auth_context);

    // Step 6: Call the next middleware/handler
    Ok(next.run(request).await)
}
