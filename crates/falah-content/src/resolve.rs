//! Localization fallback for displayed fields.
//!
//! Every field resolves in the same order: admin overlay (or dynamic record),
//! then the static per-slug table, then the untranslated default. An empty
//! string at any level counts as missing.

use crate::team::{find_static_member, PLACEHOLDER_PHOTO};
use crate::team_i18n::TeamI18nTable;
use falah_core::locale::{Locale, LocalizedString};
use falah_core::model::{ProjectOverlay, ProjectRecord, Section, TeamMemberRecord};
use std::sync::Arc;

/// First non-empty variant for `locale` among the layers, else `default`.
pub fn resolve_text(
    overlay: Option<&LocalizedString>,
    table: Option<&LocalizedString>,
    default: &str,
    locale: Locale,
) -> String {
    overlay
        .and_then(|s| s.non_empty(locale))
        .or_else(|| table.and_then(|s| s.non_empty(locale)))
        .unwrap_or(default)
        .to_string()
}

/// Split a display name on its first space into two headline lines.
pub fn split_display_name(name: &str) -> (&str, &str) {
    name.split_once(' ').unwrap_or((name, ""))
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedBadge {
    pub label: String,
    pub color: String,
}

/// A project with every displayed field resolved for one locale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedProject {
    pub id: String,
    pub title: String,
    pub badges: Vec<ResolvedBadge>,
    pub investment_year: Option<u16>,
    pub hero_image: Option<String>,
    pub sections: Vec<Section>,
}

/// Resolve a project against its overlay.
///
/// Badge labels resolve per index; positions past the end of the overlay's
/// list keep the base label. A non-empty overlay section list for `locale`
/// replaces the base sections wholesale.
pub fn resolve_project(
    record: &ProjectRecord,
    overlay: &ProjectOverlay,
    locale: Locale,
) -> ResolvedProject {
    let title = resolve_text(overlay.title.as_ref(), None, &record.title, locale);

    let overlay_badges = overlay.badges.as_deref().unwrap_or_default();
    let badges = record
        .badges
        .iter()
        .enumerate()
        .map(|(i, badge)| ResolvedBadge {
            label: resolve_text(overlay_badges.get(i), None, &badge.label, locale),
            color: badge.color.clone(),
        })
        .collect();

    let sections = match overlay.sections.as_ref().map(|s| s.get(locale)) {
        Some(localized) if !localized.is_empty() => localized.to_vec(),
        _ => record.content_sections.clone(),
    };

    ResolvedProject {
        id: record.id.clone(),
        title,
        badges,
        investment_year: record.investment_year,
        hero_image: record.content_image.clone().filter(|s| !s.is_empty()),
        sections,
    }
}

/// A team member with every displayed field resolved for one locale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedMember {
    pub slug: String,
    pub name: String,
    pub role: String,
    pub bio_left: String,
    pub bio_right: String,
    pub photo: String,
}

/// Single resolution point for team data.
///
/// Precedence per field: dynamic record, static i18n table, compiled member.
/// A member exists when either a compiled member or a dynamic record matches
/// the slug.
#[derive(Clone)]
pub struct TeamDirectory {
    i18n: Arc<TeamI18nTable>,
}

impl TeamDirectory {
    pub fn new(i18n: Arc<TeamI18nTable>) -> Self {
        Self { i18n }
    }

    pub fn resolve(
        &self,
        slug: &str,
        dynamic: Option<&TeamMemberRecord>,
        locale: Locale,
    ) -> Option<ResolvedMember> {
        let compiled = find_static_member(slug);
        if compiled.is_none() && dynamic.is_none() {
            return None;
        }
        let entry = self.i18n.get(slug);

        // Last resort when the slug has no compiled member: the dynamic
        // record's English text.
        let fallback = |compiled_value: Option<String>, dynamic_en: Option<&LocalizedString>| {
            compiled_value
                .or_else(|| dynamic_en.map(|s| s.get(Locale::En).to_string()))
                .unwrap_or_default()
        };

        let name = resolve_text(
            dynamic.map(|d| &d.name),
            entry.as_ref().map(|e| &e.name),
            &fallback(compiled.map(|m| m.full_name()), dynamic.map(|d| &d.name)),
            locale,
        );
        let role = resolve_text(
            dynamic.map(|d| &d.role),
            entry.as_ref().map(|e| &e.role),
            &fallback(compiled.map(|m| m.role.to_string()), dynamic.map(|d| &d.role)),
            locale,
        );
        let bio_left = resolve_text(
            dynamic.map(|d| &d.bio_left),
            entry.as_ref().map(|e| &e.bio_left),
            &fallback(
                compiled.map(|m| m.bio_left.to_string()),
                dynamic.map(|d| &d.bio_left),
            ),
            locale,
        );
        let bio_right = resolve_text(
            dynamic.map(|d| &d.bio_right),
            entry.as_ref().map(|e| &e.bio_right),
            &fallback(
                compiled.map(|m| m.bio_right.to_string()),
                dynamic.map(|d| &d.bio_right),
            ),
            locale,
        );

        let photo = dynamic
            .and_then(|d| d.photo.clone())
            .filter(|p| !p.is_empty())
            .or_else(|| entry.as_ref().and_then(|e| e.photo.clone()))
            .filter(|p| !p.is_empty())
            .or_else(|| compiled.map(|m| m.photo.to_string()))
            .filter(|p| !p.is_empty())
            .unwrap_or_else(|| PLACEHOLDER_PHOTO.to_string());

        Some(ResolvedMember {
            slug: slug.to_string(),
            name,
            role,
            bio_left,
            bio_right,
            photo,
        })
    }
}
