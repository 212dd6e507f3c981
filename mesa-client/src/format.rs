//! Presentation formatting
//!
//! Display-only helpers for amounts and dates. Business decisions always use
//! the raw numeric and ISO values; these functions exist purely for the UI.

use chrono::{DateTime, NaiveDate, Utc};
use shared::money;

/// Format a monetary amount with two decimal places, e.g. "130.00"
pub fn currency(amount: f64) -> String {
    format!("{:.2}", money::round_currency(amount))
}

/// Format a date for display, e.g. "08/01/2024"
pub fn date(value: NaiveDate) -> String {
    value.format("%d/%m/%Y").to_string()
}

/// Format an instant for display, e.g. "08/01/2024 17:45"
pub fn datetime(value: DateTime<Utc>) -> String {
    value.format("%d/%m/%Y %H:%M").to_string()
}
