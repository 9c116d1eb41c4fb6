//! Explicit locale handling for user-facing date display.
//!
//! The original client set a process-wide locale once at startup and let the
//! date library's global default leak into every formatting call. Here the
//! locale is a plain value passed to each call, so two callers can format
//! for different locales concurrently and tests need no global setup.
//!
//! Wire-format dates (the `YYYY-MM-DD` strings in export request bodies) are
//! locale-independent and do not go through this module.

use chrono::NaiveDate;

/// Display locale for date formatting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Locale {
    /// Russian: `DD.MM.YYYY`.
    Ru,
    /// English: `YYYY-MM-DD`.
    En,
}

/// Format a date for display in the given locale.
pub fn format_display_date(locale: Locale, date: NaiveDate) -> String {
    match locale {
        Locale::Ru => date.format("%d.%m.%Y").to_string(),
        Locale::En => date.format("%Y-%m-%d").to_string(),
    }
}
