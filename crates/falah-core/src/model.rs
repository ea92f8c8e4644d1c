//! Content records as served by the data accessors and translation endpoint.
//!
//! Field names follow the JSON the admin backend emits (camelCase). Any field
//! may be missing or `null`; only that field is left blank.

use crate::de::{aligned_nulls_as_default, null_as_default, skip_nulls};
use crate::locale::{Locale, LocalizedString};
use serde::{Deserialize, Serialize};

/// A colored label shown under a project title.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Badge {
    #[serde(default, deserialize_with = "null_as_default")]
    pub label: String,
    /// CSS color, e.g. `#1e1a61`. Empty when unset.
    #[serde(default, deserialize_with = "null_as_default")]
    pub color: String,
}

/// One titled block of project body text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub text: String,
}

/// Base (untranslated) portfolio project data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectRecord {
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default, deserialize_with = "skip_nulls")]
    pub badges: Vec<Badge>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub investment_year: Option<u16>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_image: Option<String>,
    #[serde(default, deserialize_with = "skip_nulls")]
    pub content_sections: Vec<Section>,
}

/// Per-locale replacement section lists.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocalizedSections {
    #[serde(default, deserialize_with = "skip_nulls")]
    pub en: Vec<Section>,
    #[serde(default, deserialize_with = "skip_nulls")]
    pub ru: Vec<Section>,
    #[serde(default, deserialize_with = "skip_nulls")]
    pub kz: Vec<Section>,
}

impl LocalizedSections {
    pub fn get(&self, locale: Locale) -> &[Section] {
        match locale {
            Locale::En => &self.en,
            Locale::Ru => &self.ru,
            Locale::Kz => &self.kz,
        }
    }
}

/// Admin-supplied translations layered over a [`ProjectRecord`].
///
/// `badges` is index-aligned with `ProjectRecord::badges`; it may be shorter.
/// A `null` badge entry is kept as an empty string so later entries stay
/// aligned.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectOverlay {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<LocalizedString>,
    #[serde(
        default,
        deserialize_with = "aligned_nulls_as_default",
        skip_serializing_if = "Option::is_none"
    )]
    pub badges: Option<Vec<LocalizedString>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sections: Option<LocalizedSections>,
}

impl ProjectOverlay {
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.badges.is_none() && self.sections.is_none()
    }
}

/// A team member as stored by the admin-editable dynamic store.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamMemberRecord {
    #[serde(default, deserialize_with = "null_as_default")]
    pub slug: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: LocalizedString,
    #[serde(default, deserialize_with = "null_as_default")]
    pub role: LocalizedString,
    #[serde(default, deserialize_with = "null_as_default")]
    pub bio_left: LocalizedString,
    #[serde(default, deserialize_with = "null_as_default")]
    pub bio_right: LocalizedString,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photo: Option<String>,
}
