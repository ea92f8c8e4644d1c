//! Site locales and strings available in each of them.

use crate::de::null_as_default;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the three languages the site is published in.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    /// English (default).
    #[default]
    En,
    /// Russian.
    Ru,
    /// Kazakh.
    Kz,
}

impl Locale {
    /// Every supported locale, in display order.
    pub const ALL: [Locale; 3] = [Locale::En, Locale::Ru, Locale::Kz];

    /// Short wire code (`en`, `ru`, `kz`).
    pub fn code(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Ru => "ru",
            Self::Kz => "kz",
        }
    }

    /// Parse a wire code, case-insensitively. Unknown codes yield `None`.
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_ascii_lowercase().as_str() {
            "en" => Some(Self::En),
            "ru" => Some(Self::Ru),
            "kz" => Some(Self::Kz),
            _ => None,
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Locale {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_code(s).ok_or_else(|| format!("unsupported locale '{s}' (expected en, ru or kz)"))
    }
}

/// A value carried in all three locales.
///
/// Missing or `null` keys deserialize as empty strings. An empty variant
/// counts as "not translated" for fallback purposes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocalizedString {
    #[serde(default, deserialize_with = "null_as_default")]
    pub en: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub ru: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub kz: String,
}

impl LocalizedString {
    pub fn new(en: impl Into<String>, ru: impl Into<String>, kz: impl Into<String>) -> Self {
        Self {
            en: en.into(),
            ru: ru.into(),
            kz: kz.into(),
        }
    }

    /// The raw variant for `locale`, possibly empty.
    pub fn get(&self, locale: Locale) -> &str {
        match locale {
            Locale::En => &self.en,
            Locale::Ru => &self.ru,
            Locale::Kz => &self.kz,
        }
    }

    /// The variant for `locale`, or `None` when it is empty.
    pub fn non_empty(&self, locale: Locale) -> Option<&str> {
        let value = self.get(locale);
        (!value.is_empty()).then_some(value)
    }

    pub fn set(&mut self, locale: Locale, value: impl Into<String>) {
        let slot = match locale {
            Locale::En => &mut self.en,
            Locale::Ru => &mut self.ru,
            Locale::Kz => &mut self.kz,
        };
        *slot = value.into();
    }
}
