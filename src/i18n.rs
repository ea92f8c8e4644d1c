//! Localized chrome strings for rendered pages.
//!
//! Uses a simple `t(key, locale)` function for static strings and
//! `format_*`-style helpers for strings with interpolation.
//! Supported locales: English (fallback), Russian, Kazakh.

mod format;
mod labels;


pub use format::*;

use falah_core::Locale;

/// Return a localized static string for `key` in the given `locale`.
/// Unknown keys yield `"???"`.
pub fn t(key: &str, locale: Locale) -> &'static str {
    labels::lookup(key, locale).unwrap_or("???")
}
