//! Category HTTP handlers.
//!
//! This module implements:
//! - GET /api/v1/categories - Public category list (feeds the search form)
//! - POST /api/v1/admin/categories - Create category (admin)
//! - DELETE /api/v1/admin/categories/{id} - Delete category (admin)

use crate::{
    db::DbPool,
    error::AppError,
    models::category::{Category, CreateCategoryRequest},
    slug,
};
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use uuid::Uuid;

/// List every category, name ascending.
///
/// # Endpoint
///
/// `GET /api/v1/categories`
pub async fn list_categories(State(pool): State<DbPool>) -> Result<Json<Vec<Category>>, AppError> {
    let categories = sqlx::query_as::<_, Category>("SELECT * FROM categories ORDER BY name ASC")
        .fetch_all(&pool)
        .await?;

    Ok(Json(categories))
}

/// Create a new category.
///
/// # Endpoint
///
/// `POST /api/v1/admin/categories`
///
/// # Request Body
///
/// ```json
/// { "name": "Restaurants", "description": "Places to eat" }
/// ```
///
/// The canonical slug is derived from the name exactly once, here, and
/// stored; it is assumed stable for the lifetime of the category.
///
/// # Response
///
/// - **Success (201 Created)**: the created category, slug included
/// - **Error (400)**: empty name, or a name whose slug is empty
pub async fn create_category(
    State(pool): State<DbPool>,
    Json(request): Json<CreateCategoryRequest>,
) -> Result<impl IntoResponse, AppError> {
    let category_slug = slug::slugify(&request.name);
    if category_slug.is_empty() {
        return Err(AppError::InvalidRequest(
            "Category name must contain at least one letter or digit".to_string(),
        ));
    }

    let category = sqlx::query_as::<_, Category>(
        r#"
        INSERT INTO categories (name, slug, description)
        VALUES ($1, $2, $3)
        RETURNING *
        "#,
    )
    .bind(&request.name)
    .bind(&category_slug)
    .bind(&request.description)
    .fetch_one(&pool)
    .await?;

    Ok((StatusCode::CREATED, Json(category)))
}

/// Delete a category.
///
/// # Endpoint
///
/// `DELETE /api/v1/admin/categories/{id}`
///
/// # Response
///
/// - **Success (204 No Content)**
/// - **Error (404)**: no category with that id
/// - **Error (500)**: listings still reference the category (foreign key)
pub async fn delete_category(
    State(pool): State<DbPool>,
    Path(category_id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let deleted = sqlx::query("DELETE FROM categories WHERE id = $1")
        .bind(category_id)
        .execute(&pool)
        .await?
        .rows_affected();

    if deleted == 0 {
        return Err(AppError::CategoryNotFound);
    }

    Ok(StatusCode::NO_CONTENT)
}
