//! Format helpers for strings with interpolation.

use super::t;
use falah_core::Locale;

/// "Invested in 2021" line under a project title.
pub fn invested_in(locale: Locale, year: u16) -> String {
    format!("{} {year}", t("invested_in", locale))
}

/// Back link label with its leading arrow.
pub fn back_link(locale: Locale, key: &str) -> String {
    format!("\u{2190} {}", t(key, locale))
}
