//! Admin listing-management HTTP handlers.
//!
//! This module implements the moderation back office:
//! - GET /api/v1/admin/businesses - Dashboard: every listing + status counts
//! - POST /api/v1/admin/businesses - Create a complimentary listing
//! - PUT /api/v1/admin/businesses/{id} - Full edit
//! - POST /api/v1/admin/businesses/{id}/status - Lifecycle transition
//! - DELETE /api/v1/admin/businesses/{id} - Remove a listing

use crate::{
    db::DbPool,
    error::AppError,
    models::business::{
        AdminBusinessSummary, Business, CreateListingRequest, DashboardStats, STATUS_EXPIRED,
        STATUS_PENDING, STATUS_PUBLISHED, STATUS_REJECTED, UpdateListingRequest,
        UpdateStatusRequest, is_valid_status,
    },
    services::listing_service,
};
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use chrono::Utc;
use serde::Serialize;
use uuid::Uuid;

/// Dashboard payload: every listing regardless of status, plus counts.
#[derive(Debug, Serialize)]
pub struct DashboardResponse {
    pub stats: DashboardStats,
    pub businesses: Vec<AdminBusinessSummary>,
}

/// Admin dashboard: all listings, newest first, with status counts.
///
/// # Endpoint
///
/// `GET /api/v1/admin/businesses`
///
/// # Response (200 OK)
///
/// ```json
/// {
///   "stats": { "total": 4, "pending": 1, "published": 2, "expired": 1, "rejected": 0 },
///   "businesses": [ ... ]
/// }
/// ```
pub async fn dashboard(State(pool): State<DbPool>) -> Result<Json<DashboardResponse>, AppError> {
    let listings = listing_service::load_all(&pool).await?;

    let count = |status: &str| listings.iter().filter(|b| b.status == status).count();
    let stats = DashboardStats {
        total: listings.len(),
        pending: count(STATUS_PENDING),
        published: count(STATUS_PUBLISHED),
        expired: count(STATUS_EXPIRED),
        rejected: count(STATUS_REJECTED),
    };

    Ok(Json(DashboardResponse {
        stats,
        businesses: listings.into_iter().map(Into::into).collect(),
    }))
}

/// Create a complimentary listing.
///
/// # Endpoint
///
/// `POST /api/v1/admin/businesses`
///
/// Complimentary listings skip the paid flow: they are published
/// immediately with a one-year paid period.
///
/// # Response
///
/// - **Success (201 Created)**: the created listing
/// - **Error (400)**: missing required field
/// - **Error (404)**: unknown category id
pub async fn create_listing(
    State(pool): State<DbPool>,
    Json(request): Json<CreateListingRequest>,
) -> Result<impl IntoResponse, AppError> {
    for (field, value) in [
        ("name", &request.name),
        ("description", &request.description),
        ("city", &request.city),
        ("state", &request.state),
    ] {
        if value.trim().is_empty() {
            return Err(AppError::InvalidRequest(format!("{field} is required")));
        }
    }

    sqlx::query_scalar::<_, Uuid>("SELECT id FROM categories WHERE id = $1")
        .bind(request.category_id)
        .fetch_optional(&pool)
        .await?
        .ok_or(AppError::CategoryNotFound)?;

    let stored_slug = listing_service::stored_slug(&request.name, Utc::now());

    let business = sqlx::query_as::<_, Business>(
        r#"
        INSERT INTO businesses (
            name, slug, description, address, city, state, zip_code,
            phone, email, website, link_text, opening_hours, price_range,
            category_id, thumbnail, status, paid_until
        )
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15,
                'published', NOW() + INTERVAL '365 days')
        RETURNING *
        "#,
    )
    .bind(&request.name)
    .bind(&stored_slug)
    .bind(&request.description)
    .bind(&request.address)
    .bind(&request.city)
    .bind(&request.state)
    .bind(&request.zip_code)
    .bind(&request.phone)
    .bind(&request.email)
    .bind(&request.website)
    .bind(&request.link_text)
    .bind(&request.opening_hours)
    .bind(&request.price_range)
    .bind(request.category_id)
    .bind(&request.thumbnail)
    .fetch_one(&pool)
    .await?;

    Ok((StatusCode::CREATED, Json(business)))
}

/// Full edit of a listing.
///
/// # Endpoint
///
/// `PUT /api/v1/admin/businesses/{id}`
///
/// Every field is written back. A name change regenerates the stored slug
/// with a fresh timestamp suffix. Note that editing name, city, state, or
/// category also moves the listing's canonical path: the old public URL
/// resolves as 404 from the next request on.
///
/// # Response
///
/// - **Success (200 OK)**: the updated listing
/// - **Error (400)**: missing required field or unknown status value
/// - **Error (404)**: no listing with that id, or unknown category id
pub async fn update_listing(
    State(pool): State<DbPool>,
    Path(business_id): Path<Uuid>,
    Json(request): Json<UpdateListingRequest>,
) -> Result<Json<Business>, AppError> {
    for (field, value) in [
        ("name", &request.name),
        ("description", &request.description),
        ("city", &request.city),
        ("state", &request.state),
    ] {
        if value.trim().is_empty() {
            return Err(AppError::InvalidRequest(format!("{field} is required")));
        }
    }

    if !is_valid_status(&request.status) {
        return Err(AppError::InvalidRequest(format!(
            "Unknown status: {}",
            request.status
        )));
    }

    let existing = sqlx::query_as::<_, Business>("SELECT * FROM businesses WHERE id = $1")
        .bind(business_id)
        .fetch_optional(&pool)
        .await?
        .ok_or(AppError::BusinessNotFound)?;

    sqlx::query_scalar::<_, Uuid>("SELECT id FROM categories WHERE id = $1")
        .bind(request.category_id)
        .fetch_optional(&pool)
        .await?
        .ok_or(AppError::CategoryNotFound)?;

    // Regenerate the stored slug only when the name changed.
    let stored_slug = if request.name != existing.name {
        listing_service::stored_slug(&request.name, Utc::now())
    } else {
        existing.slug
    };

    let business = sqlx::query_as::<_, Business>(
        r#"
        UPDATE businesses
        SET name = $1, slug = $2, description = $3, address = $4, city = $5,
            state = $6, zip_code = $7, phone = $8, email = $9, website = $10,
            link_text = $11, opening_hours = $12, price_range = $13,
            category_id = $14, thumbnail = $15, status = $16, updated_at = NOW()
        WHERE id = $17
        RETURNING *
        "#,
    )
    .bind(&request.name)
    .bind(&stored_slug)
    .bind(&request.description)
    .bind(&request.address)
    .bind(&request.city)
    .bind(&request.state)
    .bind(&request.zip_code)
    .bind(&request.phone)
    .bind(&request.email)
    .bind(&request.website)
    .bind(&request.link_text)
    .bind(&request.opening_hours)
    .bind(&request.price_range)
    .bind(request.category_id)
    .bind(&request.thumbnail)
    .bind(&request.status)
    .bind(business_id)
    .fetch_one(&pool)
    .await?;

    Ok(Json(business))
}

/// Moderation status transition.
///
/// # Endpoint
///
/// `POST /api/v1/admin/businesses/{id}/status`
///
/// # Request Body
///
/// ```json
/// { "status": "published" }
/// ```
///
/// Publishing starts (or restarts) the one-year paid period. Any status
/// other than `published` removes the listing from public resolution and
/// the sitemap on the next request.
///
/// # Response
///
/// - **Success (200 OK)**: the updated listing
/// - **Error (400)**: unknown status value
/// - **Error (404)**: no listing with that id
pub async fn update_status(
    State(pool): State<DbPool>,
    Path(business_id): Path<Uuid>,
    Json(request): Json<UpdateStatusRequest>,
) -> Result<Json<Business>, AppError> {
    if !is_valid_status(&request.status) {
        return Err(AppError::InvalidRequest(format!(
            "Unknown status: {}",
            request.status
        )));
    }

    let business = if request.status == STATUS_PUBLISHED {
        sqlx::query_as::<_, Business>(
            r#"
            UPDATE businesses
            SET status = $1, paid_until = NOW() + INTERVAL '365 days', updated_at = NOW()
            WHERE id = $2
            RETURNING *
            "#,
        )
    } else {
        sqlx::query_as::<_, Business>(
            r#"
            UPDATE businesses
            SET status = $1, updated_at = NOW()
            WHERE id = $2
            RETURNING *
            "#,
        )
    }
    .bind(&request.status)
    .bind(business_id)
    .fetch_optional(&pool)
    .await?
    .ok_or(AppError::BusinessNotFound)?;

    tracing::info!(business_id = %business.id, status = %business.status, "listing status updated");

    Ok(Json(business))
}

/// Delete a listing outright.
///
/// # Endpoint
///
/// `DELETE /api/v1/admin/businesses/{id}`
///
/// # Response
///
/// - **Success (204 No Content)**
/// - **Error (404)**: no listing with that id
pub async fn delete_listing(
    State(pool): State<DbPool>,
    Path(business_id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let deleted = sqlx::query("DELETE FROM businesses WHERE id = $1")
        .bind(business_id)
        .execute(&pool)
        .await?
        .rows_affected();

    if deleted == 0 {
        return Err(AppError::BusinessNotFound);
    }

    Ok(StatusCode::NO_CONTENT)
}
