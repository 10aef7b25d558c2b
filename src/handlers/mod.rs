//! HTTP request handlers (route handlers).
//!
//! Each handler is an async function that:
//! 1. Receives HTTP request data (JSON body, URL params, etc.)
//! 2. Performs business logic (database queries, validation)
//! 3. Returns HTTP response (JSON, status code)

/// Admin key management endpoints
pub mod admin_keys;
/// Public browse/search and slug-path detail endpoints
pub mod businesses;
/// Category endpoints (public list, admin management)
pub mod categories;
/// Admin discount-code endpoints
pub mod discount_codes;
/// Health check endpoint
pub mod health;
/// Admin listing management endpoints
pub mod moderation;
/// Site settings endpoints
pub mod settings;
/// Sitemap endpoint
pub mod sitemap;
/// Public submission endpoint
pub mod submissions;
