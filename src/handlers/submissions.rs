//! Paid submission HTTP handler.
//!
//! `POST /api/v1/submissions` - the public entry point for new listings.

use crate::{
    error::AppError,
    models::business::{SubmissionResponse, SubmitBusinessRequest},
    services::submission_service,
    state::AppState,
};
use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};

/// Submit a new business listing.
///
/// # Endpoint
///
/// `POST /api/v1/submissions`
///
/// # Request Body
///
/// ```json
/// {
///   "name": "Tony's Pizza Palace",
///   "description": "Family pizzeria since 1982",
///   "city": "Las Vegas",
///   "state": "Nevada",
///   "category_id": "550e8400-e29b-41d4-a716-446655440000",
///   "discount_code": "LAUNCH20"
/// }
/// ```
///
/// # Response (201 Created)
///
/// ```json
/// {
///   "business_id": "660e8400-e29b-41d4-a716-446655440001",
///   "amount_due_cents": 7920,
///   "payment_url": "https://www.paypal.com/cgi-bin/webscr?cmd=_xclick&..."
/// }
/// ```
///
/// The listing is created in `pending` status; it becomes publicly
/// resolvable only after moderation publishes it. `payment_url` is null
/// when no merchant id is configured.
///
/// # Errors
///
/// - **400**: missing required field or malformed website URL
/// - **404**: unknown category id
/// - **500**: database error
pub async fn submit_business(
    State(state): State<AppState>,
    Json(request): Json<SubmitBusinessRequest>,
) -> Result<impl IntoResponse, AppError> {
    let response: SubmissionResponse = submission_service::submit_listing(
        &state.pool,
        state.config.paypal_business.as_deref(),
        request,
    )
    .await?;

    Ok((StatusCode::CREATED, Json(response)))
}
