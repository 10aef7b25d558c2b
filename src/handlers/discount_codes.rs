//! Admin discount-code HTTP handlers.
//!
//! This module implements:
//! - GET /api/v1/admin/discount-codes - List every code
//! - POST /api/v1/admin/discount-codes - Create a code
//! - PATCH /api/v1/admin/discount-codes/{id} - Toggle a code
//! - DELETE /api/v1/admin/discount-codes/{id} - Remove a code

use crate::{
    db::DbPool,
    error::AppError,
    models::discount_code::{
        CreateDiscountCodeRequest, DiscountCode, UpdateDiscountCodeRequest,
    },
};
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use uuid::Uuid;

/// List every discount code, newest first.
///
/// # Endpoint
///
/// `GET /api/v1/admin/discount-codes`
pub async fn list_discount_codes(
    State(pool): State<DbPool>,
) -> Result<Json<Vec<DiscountCode>>, AppError> {
    let codes =
        sqlx::query_as::<_, DiscountCode>("SELECT * FROM discount_codes ORDER BY created_at DESC")
            .fetch_all(&pool)
            .await?;

    Ok(Json(codes))
}

/// Create a discount code.
///
/// # Endpoint
///
/// `POST /api/v1/admin/discount-codes`
///
/// # Request Body
///
/// ```json
/// { "code": "launch20", "description": "Launch promotion", "percent_off": 20 }
/// ```
///
/// The code is stored upper-cased; submissions match it case-insensitively
/// by upper-casing their input.
///
/// # Response
///
/// - **Success (201 Created)**: the created code
/// - **Error (400)**: empty code or percentage outside 1-100
pub async fn create_discount_code(
    State(pool): State<DbPool>,
    Json(request): Json<CreateDiscountCodeRequest>,
) -> Result<impl IntoResponse, AppError> {
    if request.code.trim().is_empty() {
        return Err(AppError::InvalidRequest("code is required".to_string()));
    }

    if !(1..=100).contains(&request.percent_off) {
        return Err(AppError::InvalidRequest(
            "percent_off must be between 1 and 100".to_string(),
        ));
    }

    let code = sqlx::query_as::<_, DiscountCode>(
        r#"
        INSERT INTO discount_codes (code, description, percent_off, expires_at)
        VALUES ($1, $2, $3, $4)
        RETURNING *
        "#,
    )
    .bind(request.code.trim().to_uppercase())
    .bind(&request.description)
    .bind(request.percent_off)
    .bind(request.expires_at)
    .fetch_one(&pool)
    .await?;

    Ok((StatusCode::CREATED, Json(code)))
}

/// Activate or deactivate a discount code.
///
/// # Endpoint
///
/// `PATCH /api/v1/admin/discount-codes/{id}`
///
/// # Request Body
///
/// ```json
/// { "active": false }
/// ```
pub async fn update_discount_code(
    State(pool): State<DbPool>,
    Path(code_id): Path<Uuid>,
    Json(request): Json<UpdateDiscountCodeRequest>,
) -> Result<Json<DiscountCode>, AppError> {
    let code = sqlx::query_as::<_, DiscountCode>(
        "UPDATE discount_codes SET active = $1 WHERE id = $2 RETURNING *",
    )
    .bind(request.active)
    .bind(code_id)
    .fetch_optional(&pool)
    .await?
    .ok_or(AppError::DiscountCodeNotFound)?;

    Ok(Json(code))
}

/// Delete a discount code.
///
/// # Endpoint
///
/// `DELETE /api/v1/admin/discount-codes/{id}`
///
/// # Response
///
/// - **Success (204 No Content)**
/// - **Error (404)**: no code with that id
pub async fn delete_discount_code(
    State(pool): State<DbPool>,
    Path(code_id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let deleted = sqlx::query("DELETE FROM discount_codes WHERE id = $1")
        .bind(code_id)
        .execute(&pool)
        .await?
        .rows_affected();

    if deleted == 0 {
        return Err(AppError::DiscountCodeNotFound);
    }

    Ok(StatusCode::NO_CONTENT)
}
