//! Sitemap service - canonical forward enumeration of every public URL.
//!
//! The sitemap is the forward direction of the routing scheme: for every
//! published business it composes the same canonical slug path the resolver
//! accepts, using the same codec, so the two can never disagree about what
//! a valid URL looks like - provided no field changes between sitemap
//! generation and resolution (see the stored-nothing invariant on
//! [`crate::models::business::BusinessWithCategory::canonical_path`]).

use std::collections::BTreeSet;
use std::fmt::Write;

use chrono::NaiveDate;

use crate::models::business::BusinessWithCategory;
use crate::models::category::Category;
use crate::slug;

/// Escape the five reserved XML characters in interpolated text.
///
/// `&` is replaced first so already-escaped entities are not double-broken.
pub fn escape_xml(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Format a timestamp as a calendar date for `<lastmod>`.
///
/// Sitemap dates carry no time-of-day component.
fn format_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Append one `<url>` entry to the document.
fn push_url(doc: &mut String, loc: &str, lastmod: &str, changefreq: &str, priority: &str) {
    // Writing to a String cannot fail.
    let _ = write!(
        doc,
        "\n  <url>\n    <loc>{}</loc>\n    <lastmod>{}</lastmod>\n    <changefreq>{}</changefreq>\n    <priority>{}</priority>\n  </url>",
        escape_xml(loc),
        lastmod,
        changefreq,
        priority
    );
}

/// Render the complete sitemap document.
///
/// # Entries
///
/// - Home, `/submit`, `/privacy`, `/terms` (static set)
/// - One per category, as a query-parameter URL on its stored slug
/// - One per published business, at its canonical slug path
/// - One per distinct city-state compound, re-decomposed at the last
///   hyphen into `?city=..&state=..` - the same ambiguous round-trip the
///   resolver performs, kept deliberately
///
/// `today` stamps entries that have no row-level timestamp of their own.
pub fn render_sitemap(
    base_url: &str,
    today: NaiveDate,
    businesses: &[BusinessWithCategory],
    categories: &[Category],
) -> String {
    let mut doc = String::from(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">",
    );
    let today_str = format_date(today);

    push_url(&mut doc, base_url, &today_str, "daily", "1.0");
    for page in ["submit", "privacy", "terms"] {
        let (changefreq, priority) = if page == "submit" {
            ("monthly", "0.8")
        } else {
            ("yearly", "0.3")
        };
        push_url(
            &mut doc,
            &format!("{base_url}/{page}"),
            &today_str,
            changefreq,
            priority,
        );
    }

    // Category pages use the stored slug assigned at creation.
    for category in categories {
        push_url(
            &mut doc,
            &format!("{base_url}/?category={}", category.slug),
            &format_date(category.updated_at.date_naive()),
            "weekly",
            "0.7",
        );
    }

    // Individual business pages at their canonical slug paths.
    for business in businesses {
        push_url(
            &mut doc,
            &format!("{base_url}/{}", business.canonical_path()),
            &format_date(business.updated_at.date_naive()),
            "monthly",
            "0.9",
        );
    }

    // Location index: each distinct city-state compound, re-derived from
    // the businesses themselves and deduplicated as a set.
    let locations: BTreeSet<String> = businesses
        .iter()
        .map(|business| slug::compose_location(&business.city, &business.state))
        .collect();

    for location in &locations {
        let (city, state) = slug::decompose_location(location);
        push_url(
            &mut doc,
            &format!("{base_url}/?city={city}&state={state}"),
            &today_str,
            "weekly",
            "0.6",
        );
    }

    doc.push_str("\n</urlset>");
    doc
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::business::STATUS_PUBLISHED;
    use chrono::Utc;
    use uuid::Uuid;

    fn business(name: &str, city: &str, state: &str, category: &str) -> BusinessWithCategory {
        BusinessWithCategory {
            id: Uuid::new_v4(),
            name: name.to_string(),
            description: "test listing".to_string(),
            address: None,
            city: city.to_string(),
            state: state.to_string(),
            zip_code: None,
            phone: None,
            email: None,
            website: None,
            link_text: None,
            opening_hours: None,
            price_range: None,
            thumbnail: None,
            status: STATUS_PUBLISHED.to_string(),
            paid_until: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
            category_name: category.to_string(),
            category_slug: slug::slugify(category),
        }
    }

    fn category(name: &str) -> Category {
        Category {
            id: Uuid::new_v4(),
            name: name.to_string(),
            slug: slug::slugify(name),
            description: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn sample_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 1, 15).expect("valid date")
    }

    #[test]
    fn escapes_reserved_characters() {
        assert_eq!(
            escape_xml(r#"Bell & Sons <"Est. 1950's">"#),
            "Bell &amp; Sons &lt;&quot;Est. 1950&#39;s&quot;&gt;"
        );
    }

    #[test]
    fn one_entry_per_business_category_and_location() {
        let businesses = vec![
            business("Tony's Pizza Palace", "Las Vegas", "Nevada", "Restaurants"),
            business("Blue Note Diner", "Las Vegas", "Nevada", "Restaurants"),
            business("Mountain Brew", "Reno", "Nevada", "Coffee"),
        ];
        let categories = vec![category("Restaurants"), category("Coffee")];

        let doc = render_sitemap("https://example.com", sample_date(), &businesses, &categories);

        // 4 static + 2 categories + 3 businesses + 2 distinct locations
        assert_eq!(doc.matches("<url>").count(), 11);
        assert_eq!(doc.matches("</url>").count(), 11);
        assert!(doc.contains("<loc>https://example.com/las-vegas-nevada/restaurants/tonys-pizza-palace</loc>"));
        assert!(doc.contains("<loc>https://example.com/?category=coffee</loc>"));
        // Two businesses share las-vegas-nevada; the location set dedups it.
        assert_eq!(doc.matches("?city=las-vegas&amp;state=nevada").count(), 1);
        assert!(doc.contains("?city=reno&amp;state=nevada"));
    }

    #[test]
    fn interpolated_text_is_escaped() {
        let businesses = vec![business("Bell & Sons", "Las Vegas", "Nevada", "Plumbers")];
        let doc = render_sitemap("https://example.com", sample_date(), &businesses, &[]);

        // The ampersand was stripped by slugification in the path, but the
        // query-parameter joiner in location URLs must be escaped.
        assert!(doc.contains("bell-sons"));
        assert!(doc.contains("&amp;state="));
        assert!(!doc.contains("&state="));
    }

    #[test]
    fn lastmod_is_a_calendar_date() {
        let doc = render_sitemap("https://example.com", sample_date(), &[], &[]);
        assert!(doc.contains("<lastmod>2026-01-15</lastmod>"));
        assert!(!doc.contains("<lastmod>2026-01-15T"));
    }

    #[test]
    fn document_structure() {
        let doc = render_sitemap("https://example.com", sample_date(), &[], &[]);
        assert!(doc.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>"));
        assert!(doc.contains("<urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">"));
        assert!(doc.ends_with("</urlset>"));
        // Home plus the three static pages are always present.
        assert_eq!(doc.matches("<url>").count(), 4);
    }
}
