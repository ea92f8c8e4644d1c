//! Static per-slug team translations.
//!
//! Ships with Russian and Kazakh names and roles for the compiled members.
//! Admin edits replace whole entries at runtime and announce the change with
//! `i18n-updated` so mounted team pages pick it up without a locale switch.

use falah_core::events::SiteContext;
use falah_core::locale::LocalizedString;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::RwLock;
use tracing::info;

/// Translations for one team member.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamI18nEntry {
    #[serde(default)]
    pub name: LocalizedString,
    #[serde(default)]
    pub role: LocalizedString,
    #[serde(default)]
    pub bio_left: LocalizedString,
    #[serde(default)]
    pub bio_right: LocalizedString,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photo: Option<String>,
}

/// Slug-keyed translation table shared by every team page.
#[derive(Debug, Default)]
pub struct TeamI18nTable {
    entries: RwLock<HashMap<String, TeamI18nEntry>>,
}

impl TeamI18nTable {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Table pre-filled with the shipped translations.
    pub fn builtin() -> Self {
        let entries = builtin_entries()
            .into_iter()
            .map(|(slug, entry)| (slug.to_string(), entry))
            .collect();
        Self {
            entries: RwLock::new(entries),
        }
    }

    pub fn get(&self, slug: &str) -> Option<TeamI18nEntry> {
        self.entries
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .get(slug)
            .cloned()
    }

    /// Replace the entry for `slug` and broadcast `i18n-updated`.
    pub fn update(&self, slug: &str, entry: TeamI18nEntry, ctx: &SiteContext) {
        self.entries
            .write()
            .unwrap_or_else(|e| e.into_inner())
            .insert(slug.to_string(), entry);
        info!("team i18n: updated entry for {slug}");
        ctx.notify_i18n_updated();
    }

    /// Drop the entry for `slug`. Broadcasts only when something was removed.
    pub fn remove(&self, slug: &str, ctx: &SiteContext) -> bool {
        let removed = self
            .entries
            .write()
            .unwrap_or_else(|e| e.into_inner())
            .remove(slug)
            .is_some();
        if removed {
            info!("team i18n: removed entry for {slug}");
            ctx.notify_i18n_updated();
        }
        removed
    }

    /// Slugs with an entry, sorted.
    pub fn slugs(&self) -> Vec<String> {
        let mut slugs: Vec<String> = self
            .entries
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .keys()
            .cloned()
            .collect();
        slugs.sort();
        slugs
    }
}

fn entry(name: (&str, &str), role: (&str, &str)) -> TeamI18nEntry {
    TeamI18nEntry {
        name: LocalizedString::new("", name.0, name.1),
        role: LocalizedString::new("", role.0, role.1),
        ..Default::default()
    }
}

// English is left empty: the compiled members carry it.
fn builtin_entries() -> Vec<(&'static str, TeamI18nEntry)> {
    vec![
        (
            "nurlan-kussainov",
            entry(
                ("Нурлан Кусаинов", "Нұрлан Құсайынов"),
                ("Управляющий партнёр", "Басқарушы серіктес"),
            ),
        ),
        (
            "diyar-medeubekov",
            entry(
                ("Дияр Медеубеков", "Дияр Медеубеков"),
                ("Директор по инвестициям", "Инвестициялық директор"),
            ),
        ),
        (
            "altay-mamanbayev",
            entry(
                ("Алтай Маманбаев", "Алтай Маманбаев"),
                ("Операционный директор", "Операциялық директор"),
            ),
        ),
        (
            "azhar-babayeva",
            entry(
                ("Ажар Бабаева", "Ажар Бабаева"),
                ("Менеджер по отчётности", "Есептілік жөніндегі менеджер"),
            ),
        ),
    ]
}
