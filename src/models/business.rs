//! Business data models and API request/response types.
//!
//! This module defines:
//! - `Business`: Database entity representing a directory listing
//! - `BusinessWithCategory`: Listing joined with its category row
//! - Request types for public submission and admin listing management
//! - Response types returned to the rendering front end

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::slug;

/// Lifecycle status: awaiting moderation. Not publicly resolvable.
pub const STATUS_PENDING: &str = "pending";
/// Lifecycle status: live in the directory. The only resolvable status.
pub const STATUS_PUBLISHED: &str = "published";
/// Lifecycle status: listing period lapsed. Not publicly resolvable.
pub const STATUS_EXPIRED: &str = "expired";
/// Lifecycle status: declined by a moderator. Not publicly resolvable.
pub const STATUS_REJECTED: &str = "rejected";

/// Whether a string names one of the four lifecycle statuses.
pub fn is_valid_status(status: &str) -> bool {
    matches!(
        status,
        STATUS_PENDING | STATUS_PUBLISHED | STATUS_EXPIRED | STATUS_REJECTED
    )
}

/// Represents a business record from the database.
///
/// # Database Table
///
/// Maps to the `businesses` table.
///
/// # Stored slug vs. route slugs
///
/// The `slug` column is assigned once at creation (`slugify(name)` plus a
/// millisecond-timestamp suffix to reduce collisions) and regenerated only
/// when an admin edit changes the name. The public route does NOT use it:
/// resolution recomputes fresh, suffix-free slugs from the row's current
/// name/city/state/category fields on every request.
#[derive(Debug, Clone, sqlx::FromRow, Serialize)]
pub struct Business {
    /// Unique identifier for this listing
    pub id: Uuid,

    /// Display name, e.g. "Tony's Pizza Palace"
    pub name: String,

    /// Stored identifier with timestamp suffix (admin bookkeeping only)
    pub slug: String,

    /// Free-text description shown on the detail page
    pub description: String,

    /// Street address
    pub address: Option<String>,

    /// City, feeds the compound location segment of the canonical path
    pub city: String,

    /// State, feeds the compound location segment of the canonical path
    pub state: String,

    /// Postal code
    pub zip_code: Option<String>,

    /// Contact phone number
    pub phone: Option<String>,

    /// Contact email address
    pub email: Option<String>,

    /// Business website URL
    pub website: Option<String>,

    /// Label to render for the website link
    pub link_text: Option<String>,

    /// Free-text opening hours, e.g. "Mon-Fri 9am-5pm"
    pub opening_hours: Option<String>,

    /// Price-range indicator, e.g. "$$"
    pub price_range: Option<String>,

    /// Foreign key to the category this listing belongs to
    pub category_id: Uuid,

    /// Path/URL reference to the uploaded thumbnail (storage is external)
    pub thumbnail: Option<String>,

    /// Lifecycle status: pending, published, expired, or rejected
    ///
    /// Only "published" rows are ever returned by the resolver or emitted
    /// into the sitemap.
    pub status: String,

    /// End of the paid listing period
    ///
    /// Set to one year out whenever the listing is published.
    pub paid_until: Option<DateTime<Utc>>,

    /// Timestamp when the listing was created
    pub created_at: DateTime<Utc>,

    /// Timestamp of the last edit or status transition
    pub updated_at: DateTime<Utc>,
}

/// A business joined with the category fields the slug routes need.
///
/// The resolver and the sitemap both recompute `slugify(category_name)`
/// per candidate, so every candidate load joins the category row.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct BusinessWithCategory {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub address: Option<String>,
    pub city: String,
    pub state: String,
    pub zip_code: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub website: Option<String>,
    pub link_text: Option<String>,
    pub opening_hours: Option<String>,
    pub price_range: Option<String>,
    pub thumbnail: Option<String>,
    pub status: String,
    pub paid_until: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    /// Category display name (joined from `categories.name`)
    pub category_name: String,
    /// Stored category slug (joined from `categories.slug`)
    pub category_slug: String,
}

impl BusinessWithCategory {
    /// Canonical relative path for this listing, recomputed from the
    /// current field values via the slug codec.
    pub fn canonical_path(&self) -> String {
        slug::business_path(&self.name, &self.city, &self.state, &self.category_name)
    }
}

/// Request body for the public paid-submission flow.
///
/// # JSON Example
///
/// ```json
/// {
///   "name": "Tony's Pizza Palace",
///   "description": "Family pizzeria since 1982",
///   "city": "Las Vegas",
///   "state": "Nevada",
///   "category_id": "550e8400-e29b-41d4-a716-446655440000",
///   "phone": "+1 702 555 0199",
///   "discount_code": "LAUNCH20"
/// }
/// ```
///
/// # Validation
///
/// - `name`, `description`, `city`, `state`, `category_id`: required
/// - `website`: when present, must parse as an HTTP(S) URL
/// - `discount_code`: matched case-insensitively against stored codes
#[derive(Debug, Deserialize)]
pub struct SubmitBusinessRequest {
    pub name: String,
    pub description: String,
    pub city: String,
    pub state: String,
    pub category_id: Uuid,
    pub address: Option<String>,
    pub zip_code: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub website: Option<String>,
    pub link_text: Option<String>,
    pub opening_hours: Option<String>,
    pub price_range: Option<String>,
    pub thumbnail: Option<String>,
    /// Optional discount code applied to the listing price
    pub discount_code: Option<String>,
}

/// Response body for a successful submission.
///
/// Payment itself is executed by an external provider; this response only
/// carries the locally computed amount and, when configured, the redirect
/// URL for the hosted checkout.
#[derive(Debug, Serialize)]
pub struct SubmissionResponse {
    /// Id of the newly created (pending) listing
    pub business_id: Uuid,

    /// Amount due in cents after any discount
    pub amount_due_cents: i64,

    /// Hosted-checkout redirect, present when a merchant id is configured
    pub payment_url: Option<String>,
}

/// Request body for admin listing creation.
///
/// Complimentary listings skip the submission flow entirely: they are
/// published immediately with a one-year paid period.
#[derive(Debug, Deserialize)]
pub struct CreateListingRequest {
    pub name: String,
    pub description: String,
    pub city: String,
    pub state: String,
    pub category_id: Uuid,
    pub address: Option<String>,
    pub zip_code: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub website: Option<String>,
    pub link_text: Option<String>,
    pub opening_hours: Option<String>,
    pub price_range: Option<String>,
    pub thumbnail: Option<String>,
}

/// Request body for a full admin edit of a listing.
///
/// Every field is written back; a name change regenerates the stored slug.
/// Changing name, city, state, or category also changes the canonical path
/// at which the listing resolves - previously shared links go dark.
#[derive(Debug, Deserialize)]
pub struct UpdateListingRequest {
    pub name: String,
    pub description: String,
    pub city: String,
    pub state: String,
    pub category_id: Uuid,
    pub status: String,
    pub address: Option<String>,
    pub zip_code: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub website: Option<String>,
    pub link_text: Option<String>,
    pub opening_hours: Option<String>,
    pub price_range: Option<String>,
    pub thumbnail: Option<String>,
}

/// Request body for a moderation status transition.
///
/// ```json
/// { "status": "published" }
/// ```
#[derive(Debug, Deserialize)]
pub struct UpdateStatusRequest {
    pub status: String,
}

/// Listing card returned by the public browse/search endpoint.
///
/// `path` is the canonical slug path, recomputed by the same codec the
/// resolver uses, so a card link always agrees with what resolves.
#[derive(Debug, Serialize)]
pub struct BusinessSummary {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub city: String,
    pub state: String,
    pub phone: Option<String>,
    pub website: Option<String>,
    pub link_text: Option<String>,
    pub price_range: Option<String>,
    pub thumbnail: Option<String>,
    pub category_name: String,
    pub category_slug: String,
    pub path: String,
    pub created_at: DateTime<Utc>,
}

impl From<BusinessWithCategory> for BusinessSummary {
    fn from(b: BusinessWithCategory) -> Self {
        let path = b.canonical_path();
        Self {
            id: b.id,
            name: b.name,
            description: b.description,
            city: b.city,
            state: b.state,
            phone: b.phone,
            website: b.website,
            link_text: b.link_text,
            price_range: b.price_range,
            thumbnail: b.thumbnail,
            category_name: b.category_name,
            category_slug: b.category_slug,
            path,
            created_at: b.created_at,
        }
    }
}

/// Listing row as shown in the admin dashboard, every status included.
#[derive(Debug, Serialize)]
pub struct AdminBusinessSummary {
    pub id: Uuid,
    pub name: String,
    pub city: String,
    pub state: String,
    pub category_name: String,
    pub status: String,
    pub paid_until: Option<DateTime<Utc>>,
    pub thumbnail: Option<String>,
    pub path: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<BusinessWithCategory> for AdminBusinessSummary {
    fn from(b: BusinessWithCategory) -> Self {
        let path = b.canonical_path();
        Self {
            id: b.id,
            name: b.name,
            city: b.city,
            state: b.state,
            category_name: b.category_name,
            status: b.status,
            paid_until: b.paid_until,
            thumbnail: b.thumbnail,
            path,
            created_at: b.created_at,
            updated_at: b.updated_at,
        }
    }
}

/// Dashboard counts by lifecycle status.
#[derive(Debug, Serialize)]
pub struct DashboardStats {
    pub total: usize,
    pub pending: usize,
    pub published: usize,
    pub expired: usize,
    pub rejected: usize,
}

/// Page metadata for the detail view (title tag, meta description, Open
/// Graph fields), passed verbatim to the rendering collaborator.
#[derive(Debug, Serialize)]
pub struct PageMetadata {
    pub title: String,
    pub description: String,
    pub og_title: String,
    pub og_description: String,
    pub og_images: Vec<String>,
}

/// Full detail payload for `GET /{city}-{state}/{category}/{business}`.
#[derive(Debug, Serialize)]
pub struct BusinessDetailResponse {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub address: Option<String>,
    pub city: String,
    pub state: String,
    pub zip_code: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub website: Option<String>,
    pub link_text: Option<String>,
    pub opening_hours: Option<String>,
    pub price_range: Option<String>,
    pub thumbnail: Option<String>,
    pub category_name: String,
    pub category_slug: String,
    pub path: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    /// Title/description/Open Graph fields for the page head
    pub metadata: PageMetadata,
    /// schema.org LocalBusiness JSON-LD object, null fields dropped
    pub structured_data: serde_json::Value,
}
