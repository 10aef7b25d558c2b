//! Category data models and API request/response types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Represents a category record from the database.
///
/// # Database Table
///
/// Maps to the `categories` table. Unlike business route slugs, the
/// category `slug` IS stored: it is computed once at creation with the slug
/// codec and assumed stable thereafter (query-parameter category URLs and
/// the sitemap rely on it not changing).
#[derive(Debug, Clone, sqlx::FromRow, Serialize)]
pub struct Category {
    /// Unique identifier for this category
    pub id: Uuid,

    /// Display name, e.g. "Restaurants"
    pub name: String,

    /// Stored canonical slug, e.g. "restaurants"
    pub slug: String,

    /// Optional description shown in admin tooling
    pub description: Option<String>,

    /// Timestamp when the category was created
    pub created_at: DateTime<Utc>,

    /// Timestamp of the last edit
    pub updated_at: DateTime<Utc>,
}

/// Request body for admin category creation.
///
/// ```json
/// { "name": "Restaurants", "description": "Places to eat" }
/// ```
///
/// The slug is derived from the name server-side; clients never supply it.
#[derive(Debug, Deserialize)]
pub struct CreateCategoryRequest {
    pub name: String,
    pub description: Option<String>,
}
