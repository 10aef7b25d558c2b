//! Public directory HTTP handlers.
//!
//! This module implements the public-facing read endpoints:
//! - GET /api/v1/businesses - Browse/search published listings
//! - GET /{city}-{state}/{category}/{business} - Slug-path detail lookup

use crate::{
    db::DbPool,
    error::AppError,
    models::business::{
        BusinessDetailResponse, BusinessSummary, BusinessWithCategory, PageMetadata,
    },
    services::listing_service,
};
use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde::Deserialize;
use serde_json::json;

/// Query parameters for the browse/search endpoint.
#[derive(Debug, Deserialize)]
pub struct BrowseQuery {
    /// Stored category slug, exact match
    pub category: Option<String>,

    /// City substring, case-insensitive
    pub city: Option<String>,

    /// State substring, case-insensitive
    pub state: Option<String>,
}

/// Browse or search published listings.
///
/// # Endpoint
///
/// `GET /api/v1/businesses?category=restaurants&city=vegas`
///
/// # Response (200 OK)
///
/// An array of listing cards, newest first, at most 50. Each card carries
/// its canonical `path`, recomputed by the same slug codec the resolver
/// uses, so card links always agree with what resolves.
pub async fn list_businesses(
    State(pool): State<DbPool>,
    Query(query): Query<BrowseQuery>,
) -> Result<Json<Vec<BusinessSummary>>, AppError> {
    let listings =
        listing_service::search_published(&pool, query.category, query.city, query.state).await?;

    Ok(Json(listings.into_iter().map(Into::into).collect()))
}

/// Resolve a canonical slug path to its listing detail.
///
/// # Endpoint
///
/// `GET /{city}-{state}/{category}/{business}`
///
/// e.g. `GET /las-vegas-nevada/restaurants/tonys-pizza-palace`
///
/// # Response
///
/// - **Success (200 OK)**: the listing with its category, page metadata,
///   and schema.org LocalBusiness structured data
/// - **Error (404)**: no published listing's recomputed slugs match the
///   requested segments
///
/// # Resolution
///
/// The compound first segment is decomposed at its last hyphen into city
/// and state slugs, then every published listing is scanned and its four
/// slugs recomputed from current field values. See
/// [`listing_service::resolve`] for the ambiguity this inherits.
pub async fn get_business(
    State(pool): State<DbPool>,
    Path((location, category, business)): Path<(String, String, String)>,
) -> Result<Json<BusinessDetailResponse>, AppError> {
    let matched = listing_service::resolve(&pool, &location, &category, &business).await?;

    Ok(Json(detail_response(matched)))
}

/// Assemble the full detail payload for a resolved listing.
fn detail_response(b: BusinessWithCategory) -> BusinessDetailResponse {
    let metadata = page_metadata(&b);
    let structured_data = structured_data(&b);
    let path = b.canonical_path();

    BusinessDetailResponse {
        id: b.id,
        name: b.name,
        description: b.description,
        address: b.address,
        city: b.city,
        state: b.state,
        zip_code: b.zip_code,
        phone: b.phone,
        email: b.email,
        website: b.website,
        link_text: b.link_text,
        opening_hours: b.opening_hours,
        price_range: b.price_range,
        thumbnail: b.thumbnail,
        category_name: b.category_name,
        category_slug: b.category_slug,
        path,
        created_at: b.created_at,
        updated_at: b.updated_at,
        metadata,
        structured_data,
    }
}

/// Title/description/Open Graph fields for the page head.
///
/// Entity fields pass through verbatim; the only formatting is the
/// `"{name} - {city}, {state}"` title.
fn page_metadata(b: &BusinessWithCategory) -> PageMetadata {
    let title = format!("{} - {}, {}", b.name, b.city, b.state);

    PageMetadata {
        title: title.clone(),
        description: b.description.clone(),
        og_title: title,
        og_description: b.description.clone(),
        og_images: b.thumbnail.clone().into_iter().collect(),
    }
}

/// Build the schema.org LocalBusiness JSON-LD object.
///
/// Top-level null members are dropped; the nested PostalAddress keeps its
/// shape even when individual address fields are absent.
fn structured_data(b: &BusinessWithCategory) -> serde_json::Value {
    let mut data = json!({
        "@context": "https://schema.org",
        "@type": "LocalBusiness",
        "name": b.name,
        "description": b.description,
        "url": b.website,
        "telephone": b.phone,
        "email": b.email,
        "address": {
            "@type": "PostalAddress",
            "streetAddress": b.address,
            "addressLocality": b.city,
            "addressRegion": b.state,
            "postalCode": b.zip_code,
            "addressCountry": "US"
        },
        "openingHours": b.opening_hours,
        "priceRange": b.price_range,
        "image": b.thumbnail,
        "category": b.category_name
    });

    if let serde_json::Value::Object(ref mut map) = data {
        map.retain(|_, value| !value.is_null());
    }

    data
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::business::STATUS_PUBLISHED;
    use crate::slug;
    use chrono::Utc;
    use uuid::Uuid;

    fn listing() -> BusinessWithCategory {
        BusinessWithCategory {
            id: Uuid::new_v4(),
            name: "Tony's Pizza Palace".to_string(),
            description: "Family pizzeria since 1982".to_string(),
            address: Some("123 Fremont St".to_string()),
            city: "Las Vegas".to_string(),
            state: "Nevada".to_string(),
            zip_code: None,
            phone: Some("+1 702 555 0199".to_string()),
            email: None,
            website: None,
            link_text: None,
            opening_hours: None,
            price_range: Some("$$".to_string()),
            thumbnail: None,
            status: STATUS_PUBLISHED.to_string(),
            paid_until: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
            category_name: "Restaurants".to_string(),
            category_slug: slug::slugify("Restaurants"),
        }
    }

    #[test]
    fn metadata_title_joins_name_and_location() {
        let meta = page_metadata(&listing());
        assert_eq!(meta.title, "Tony's Pizza Palace - Las Vegas, Nevada");
        assert_eq!(meta.og_title, meta.title);
        assert!(meta.og_images.is_empty());
    }

    #[test]
    fn structured_data_drops_null_top_level_fields() {
        let data = structured_data(&listing());

        assert_eq!(data["@type"], "LocalBusiness");
        assert_eq!(data["telephone"], "+1 702 555 0199");
        // website/email were None and must be absent, not null.
        assert!(data.get("url").is_none());
        assert!(data.get("email").is_none());
        // The nested address keeps its shape.
        assert_eq!(data["address"]["addressLocality"], "Las Vegas");
    }

    #[test]
    fn detail_payload_carries_canonical_path() {
        let response = detail_response(listing());
        assert_eq!(
            response.path,
            "las-vegas-nevada/restaurants/tonys-pizza-palace"
        );
    }
}
