//! Display helpers for list rows and the detail view.

use chrono::DateTime;

/// `75.0, "CZK"` → `"75.00 CZK"`.
pub fn format_total(total: f64, currency: &str) -> String {
    format!("{:.2} {}", total, currency)
}

/// Renders a server timestamp as `dd.mm.yyyy HH:MM` (UTC).
///
/// `created_at` is opaque to the client, so anything that is not RFC 3339
/// (including the empty string of a draft) is returned as-is.
pub fn format_created_at(raw: &str) -> String {
    match DateTime::parse_from_rfc3339(raw) {
        Ok(timestamp) => timestamp
            .with_timezone(&chrono::Utc)
            .format("%d.%m.%Y %H:%M")
            .to_string(),
        Err(_) => raw.to_string(),
    }
}
