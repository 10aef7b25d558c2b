//! Data models representing database entities.
//!
//! This module contains all data structures that map to database tables.

/// Admin key authentication model
pub mod admin_key;
/// Directory listing model
pub mod business;
/// Business category model
pub mod category;
/// Discount code model
pub mod discount_code;
/// Site settings snapshot model
pub mod settings;
