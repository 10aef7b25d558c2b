//! Site settings: key/value rows loaded into a per-request snapshot.
//!
//! Settings an admin can change at runtime (site name, hero copy, listing
//! price, contact info) live as rows in the `settings` table. Handlers load
//! them once per request into a [`SiteSettings`] snapshot and pass that
//! around explicitly - there is no global mutable settings singleton.
//! Missing rows fall back to in-code defaults.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The default annual listing price: $99.00 in cents.
pub const DEFAULT_LISTING_PRICE_CENTS: i64 = 9900;

/// A single key/value row from the `settings` table.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct SettingRow {
    /// Setting key, e.g. "site_name"
    pub key: String,

    /// Setting value, always stored as text
    pub value: String,
}

/// Per-request snapshot of every site setting, with defaults applied.
///
/// # JSON Example
///
/// ```json
/// {
///   "site_name": "Business Directory",
///   "site_url": "https://directory.example.com",
///   "contact_email": "contact@example.com",
///   "contact_phone": "",
///   "listing_price_cents": 9900,
///   "site_logo": "",
///   "hero_title": "Find Top-Ranked Businesses",
///   "hero_subtitle": "Discover quality businesses in your area"
/// }
/// ```
#[derive(Debug, Clone, Serialize)]
pub struct SiteSettings {
    pub site_name: String,
    pub site_url: String,
    pub contact_email: String,
    pub contact_phone: String,
    pub listing_price_cents: i64,
    pub site_logo: String,
    pub hero_title: String,
    pub hero_subtitle: String,
}

impl SiteSettings {
    /// Build a snapshot from raw settings rows, applying defaults for any
    /// key that has no row or (for the price) fails to parse.
    pub fn from_rows(rows: &[SettingRow]) -> Self {
        let get = |key: &str| -> Option<&str> {
            rows.iter()
                .find(|row| row.key == key)
                .map(|row| row.value.as_str())
        };

        Self {
            site_name: get("site_name").unwrap_or("Business Directory").to_string(),
            site_url: get("site_url").unwrap_or("http://localhost:3000").to_string(),
            contact_email: get("contact_email")
                .unwrap_or("contact@example.com")
                .to_string(),
            contact_phone: get("contact_phone").unwrap_or("").to_string(),
            listing_price_cents: get("listing_price_cents")
                .and_then(|value| value.parse().ok())
                .unwrap_or(DEFAULT_LISTING_PRICE_CENTS),
            site_logo: get("site_logo").unwrap_or("").to_string(),
            hero_title: get("hero_title")
                .unwrap_or("Find Top-Ranked Businesses")
                .to_string(),
            hero_subtitle: get("hero_subtitle")
                .unwrap_or("Discover quality businesses in your area")
                .to_string(),
        }
    }

    /// Load the current snapshot from the database.
    pub async fn load(pool: &crate::db::DbPool) -> Result<Self, sqlx::Error> {
        let rows = sqlx::query_as::<_, SettingRow>("SELECT key, value FROM settings")
            .fetch_all(pool)
            .await?;

        Ok(Self::from_rows(&rows))
    }
}

/// Request body for the admin settings update.
///
/// The full snapshot is written back; every known key is upserted.
#[derive(Debug, Deserialize)]
pub struct UpdateSettingsRequest {
    pub site_name: String,
    pub site_url: String,
    pub contact_email: String,
    pub contact_phone: String,
    pub listing_price_cents: i64,
    pub site_logo: String,
    pub hero_title: String,
    pub hero_subtitle: String,
}

impl UpdateSettingsRequest {
    /// Flatten the request into (key, value) pairs for the upsert loop.
    pub fn as_pairs(&self) -> Vec<(&'static str, String)> {
        vec![
            ("site_name", self.site_name.clone()),
            ("site_url", self.site_url.clone()),
            ("contact_email", self.contact_email.clone()),
            ("contact_phone", self.contact_phone.clone()),
            (
                "listing_price_cents",
                self.listing_price_cents.to_string(),
            ),
            ("site_logo", self.site_logo.clone()),
            ("hero_title", self.hero_title.clone()),
            ("hero_subtitle", self.hero_subtitle.clone()),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(key: &str, value: &str) -> SettingRow {
        SettingRow {
            key: key.to_string(),
            value: value.to_string(),
        }
    }

    #[test]
    fn defaults_apply_when_rows_missing() {
        let settings = SiteSettings::from_rows(&[]);
        assert_eq!(settings.site_name, "Business Directory");
        assert_eq!(settings.listing_price_cents, DEFAULT_LISTING_PRICE_CENTS);
        assert_eq!(settings.hero_title, "Find Top-Ranked Businesses");
    }

    #[test]
    fn rows_override_defaults() {
        let settings = SiteSettings::from_rows(&[
            row("site_name", "Vegas Eats"),
            row("listing_price_cents", "12900"),
        ]);
        assert_eq!(settings.site_name, "Vegas Eats");
        assert_eq!(settings.listing_price_cents, 12900);
        // Untouched keys keep their defaults.
        assert_eq!(settings.contact_email, "contact@example.com");
    }

    #[test]
    fn unparseable_price_falls_back_to_default() {
        let settings = SiteSettings::from_rows(&[row("listing_price_cents", "99.00")]);
        assert_eq!(settings.listing_price_cents, DEFAULT_LISTING_PRICE_CENTS);
    }
}
