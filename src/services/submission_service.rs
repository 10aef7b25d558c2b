//! Submission service - the paid listing submission flow.
//!
//! This service handles:
//! - Request validation (required fields, website URL format)
//! - Creating the pending listing with its stored, timestamp-suffixed slug
//! - Pricing: listing price snapshot minus an applicable discount code
//! - Composing the hosted-checkout redirect URL
//!
//! Payment *execution* is an external provider's concern. Everything local
//! is integer-cents arithmetic; no floating point ever touches money.

use chrono::Utc;
use uuid::Uuid;

use crate::db::DbPool;
use crate::error::AppError;
use crate::models::business::{Business, SubmissionResponse, SubmitBusinessRequest};
use crate::models::discount_code::DiscountCode;
use crate::models::settings::SiteSettings;
use crate::services::listing_service;

/// Apply an integer percentage discount to a price in cents.
///
/// Fractional cents truncate toward zero. `percent_off` is expected in
/// 0..=100 (enforced by the discount-code table's CHECK constraint).
pub fn discounted_price_cents(price_cents: i64, percent_off: i32) -> i64 {
    price_cents - price_cents * i64::from(percent_off) / 100
}

/// Compose the hosted-checkout redirect URL for a submission.
///
/// Classic PayPal "buy now" link: merchant id, item name, decimal amount,
/// and the business id in the `custom` field so the payment can be tied
/// back to the listing.
pub fn checkout_url(merchant: &str, amount_cents: i64, business_id: Uuid) -> String {
    let mut url = url::Url::parse("https://www.paypal.com/cgi-bin/webscr")
        .expect("static base URL is valid");

    url.query_pairs_mut()
        .append_pair("cmd", "_xclick")
        .append_pair("business", merchant)
        .append_pair("item_name", "Business Directory Listing")
        .append_pair(
            "amount",
            &format!("{}.{:02}", amount_cents / 100, amount_cents % 100),
        )
        .append_pair("currency_code", "USD")
        .append_pair("custom", &business_id.to_string());

    url.to_string()
}

/// Validate a submitted website URL.
///
/// # Rules
///
/// - Must be a valid URL
/// - Must use HTTP or HTTPS
/// - Maximum 2048 characters
fn validate_website_url(website: &str) -> Result<(), AppError> {
    if website.len() > 2048 {
        return Err(AppError::InvalidRequest(
            "Website URL exceeds 2048 characters".to_string(),
        ));
    }

    let parsed = url::Url::parse(website)
        .map_err(|_| AppError::InvalidRequest("Invalid website URL".to_string()))?;

    match parsed.scheme() {
        "http" | "https" => Ok(()),
        _ => Err(AppError::InvalidRequest(
            "Website URL must use HTTP or HTTPS".to_string(),
        )),
    }
}

/// Submit a new listing through the paid flow.
///
/// # Process
///
/// 1. Validate required fields and the optional website URL
/// 2. Verify the referenced category exists
/// 3. Insert the listing as `pending` with a timestamp-suffixed stored slug
/// 4. Price it from the current settings snapshot, applying a discount
///    code when one is supplied, active, and unexpired (an inapplicable
///    code is silently ignored, not an error)
/// 5. Compose the checkout redirect when a merchant id is configured
///
/// # Errors
///
/// - `InvalidRequest`: missing required field or malformed website URL
/// - `CategoryNotFound`: unknown category id
/// - `Database`: database error occurred
pub async fn submit_listing(
    pool: &DbPool,
    merchant: Option<&str>,
    request: SubmitBusinessRequest,
) -> Result<SubmissionResponse, AppError> {
    // Validate required text fields
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

    if let Some(ref website) = request.website {
        validate_website_url(website)?;
    }

    // Verify the category exists up front so a bad id is a 404, not a
    // foreign-key violation surfacing as a 500.
    sqlx::query_scalar::<_, Uuid>("SELECT id FROM categories WHERE id = $1")
        .bind(request.category_id)
        .fetch_optional(pool)
        .await?
        .ok_or(AppError::CategoryNotFound)?;

    let now = Utc::now();
    let stored_slug = listing_service::stored_slug(&request.name, now);

    // New submissions always start pending; moderation publishes them.
    let business = sqlx::query_as::<_, Business>(
        r#"
        INSERT INTO businesses (
            name, slug, description, address, city, state, zip_code,
            phone, email, website, link_text, opening_hours, price_range,
            category_id, thumbnail, status
        )
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, 'pending')
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
    .fetch_one(pool)
    .await?;

    // Price from the current settings snapshot
    let settings = SiteSettings::load(pool).await?;
    let mut amount_due_cents = settings.listing_price_cents;

    // Apply discount code if provided
    if let Some(ref code) = request.discount_code {
        let discount = sqlx::query_as::<_, DiscountCode>(
            "SELECT * FROM discount_codes WHERE code = $1",
        )
        .bind(code.to_uppercase())
        .fetch_optional(pool)
        .await?;

        if let Some(discount) = discount {
            if discount.is_applicable(now) {
                amount_due_cents = discounted_price_cents(amount_due_cents, discount.percent_off);
            }
        }
    }

    let payment_url = merchant.map(|merchant| checkout_url(merchant, amount_due_cents, business.id));

    tracing::info!(
        business_id = %business.id,
        amount_due_cents,
        "listing submitted for review"
    );

    Ok(SubmissionResponse {
        business_id: business.id,
        amount_due_cents,
        payment_url,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};

    fn code(percent_off: i32, active: bool, expires_in_days: Option<i64>) -> DiscountCode {
        DiscountCode {
            id: Uuid::new_v4(),
            code: "LAUNCH20".to_string(),
            description: None,
            percent_off,
            active,
            expires_at: expires_in_days.map(|days| Utc::now() + Duration::days(days)),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn percentage_comes_off_in_integer_cents() {
        assert_eq!(discounted_price_cents(9900, 20), 7920);
        assert_eq!(discounted_price_cents(9900, 100), 0);
        assert_eq!(discounted_price_cents(9900, 0), 9900);
        // Fractional cents truncate.
        assert_eq!(discounted_price_cents(999, 33), 670);
    }

    #[test]
    fn active_unexpired_code_applies() {
        let now = Utc::now();
        assert!(code(20, true, None).is_applicable(now));
        assert!(code(20, true, Some(30)).is_applicable(now));
    }

    #[test]
    fn inactive_or_expired_code_does_not_apply() {
        let now = Utc::now();
        assert!(!code(20, false, None).is_applicable(now));
        assert!(!code(20, true, Some(-1)).is_applicable(now));
    }

    #[test]
    fn checkout_url_carries_amount_and_listing_id() {
        let id = Uuid::new_v4();
        let url = checkout_url("merchant@example.com", 7920, id);

        assert!(url.starts_with("https://www.paypal.com/cgi-bin/webscr?"));
        assert!(url.contains("business=merchant%40example.com"));
        assert!(url.contains("amount=79.20"));
        assert!(url.contains(&format!("custom={id}")));
    }

    #[test]
    fn checkout_amount_pads_cents() {
        let url = checkout_url("merchant@example.com", 10005, Uuid::new_v4());
        assert!(url.contains("amount=100.05"));
    }
}
