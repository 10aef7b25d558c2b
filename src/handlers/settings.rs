//! Site settings HTTP handlers.
//!
//! This module implements:
//! - GET /api/v1/settings - Public settings snapshot (hero copy, price...)
//! - PUT /api/v1/admin/settings - Upsert the full snapshot (admin)

use crate::{
    db::DbPool,
    error::AppError,
    models::settings::{SiteSettings, UpdateSettingsRequest},
};
use axum::{Json, extract::State};

/// Current settings snapshot for the rendering front end.
///
/// # Endpoint
///
/// `GET /api/v1/settings`
///
/// # Response (200 OK)
///
/// ```json
/// {
///   "site_name": "Business Directory",
///   "site_url": "http://localhost:3000",
///   "contact_email": "contact@example.com",
///   "contact_phone": "",
///   "listing_price_cents": 9900,
///   "site_logo": "",
///   "hero_title": "Find Top-Ranked Businesses",
///   "hero_subtitle": "Discover quality businesses in your area"
/// }
/// ```
///
/// Loaded fresh per request; defaults fill any key without a stored row.
pub async fn get_settings(State(pool): State<DbPool>) -> Result<Json<SiteSettings>, AppError> {
    Ok(Json(SiteSettings::load(&pool).await?))
}

/// Update every site setting.
///
/// # Endpoint
///
/// `PUT /api/v1/admin/settings`
///
/// The full snapshot is written back: each known key is upserted in turn.
///
/// # Response (200 OK)
///
/// The freshly loaded snapshot after the write.
pub async fn update_settings(
    State(pool): State<DbPool>,
    Json(request): Json<UpdateSettingsRequest>,
) -> Result<Json<SiteSettings>, AppError> {
    for (key, value) in request.as_pairs() {
        sqlx::query(
            r#"
            INSERT INTO settings (key, value, description, updated_at)
            VALUES ($1, $2, $3, NOW())
            ON CONFLICT (key)
            DO UPDATE SET value = EXCLUDED.value, updated_at = NOW()
            "#,
        )
        .bind(key)
        .bind(&value)
        .bind(format!("{} setting", key.replace('_', " ")))
        .execute(&pool)
        .await?;
    }

    Ok(Json(SiteSettings::load(&pool).await?))
}
