//! Business logic services.
//!
//! Services contain core business logic separated from HTTP handlers.
//! They handle candidate loading, slug resolution, sitemap rendering, and
//! the submission flow.

pub mod listing_service;
pub mod sitemap_service;
pub mod submission_service;
