//! Sitemap HTTP handler.
//!
//! `GET /sitemap.xml` - the canonical forward enumeration of every public
//! URL, served as XML with a one-hour cache lifetime.

use crate::{
    db::DbPool,
    error::AppError,
    models::category::Category,
    models::settings::SiteSettings,
    services::{listing_service, sitemap_service},
};
use axum::{
    extract::State,
    http::header::{CACHE_CONTROL, CONTENT_TYPE},
    response::IntoResponse,
};
use chrono::Utc;

/// Serve the sitemap document.
///
/// # Endpoint
///
/// `GET /sitemap.xml`
///
/// # Response (200 OK)
///
/// `Content-Type: application/xml`, `Cache-Control: public, max-age=3600`.
/// One `<url>` entry per: home page, static page, category, published
/// business, and distinct city-state combination. Business URLs are
/// composed by the same slug codec the resolver uses, so every advertised
/// path resolves - until a field edit changes it.
pub async fn sitemap(State(pool): State<DbPool>) -> Result<impl IntoResponse, AppError> {
    let settings = SiteSettings::load(&pool).await?;

    let businesses = listing_service::load_published(&pool).await?;

    let categories =
        sqlx::query_as::<_, Category>("SELECT * FROM categories ORDER BY name ASC")
            .fetch_all(&pool)
            .await?;

    let document = sitemap_service::render_sitemap(
        &settings.site_url,
        Utc::now().date_naive(),
        &businesses,
        &categories,
    );

    Ok((
        [
            (CONTENT_TYPE, "application/xml"),
            (CACHE_CONTROL, "public, max-age=3600"),
        ],
        document,
    ))
}
