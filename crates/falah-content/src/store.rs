//! In-process content store.
//!
//! Serves projects, translation overlays and dynamic team records from
//! memory. Can be seeded from a JSON content file and edited at runtime;
//! team edits broadcast `team-data-updated` when the store is attached to a
//! [`SiteContext`].

use async_trait::async_trait;
use falah_core::{
    error::{FalahError, FetchError},
    events::SiteContext,
    model::{ProjectOverlay, ProjectRecord, TeamMemberRecord},
    shellexpand,
    traits::{ProjectSource, TeamSource, TranslationSource},
};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;
use std::sync::{Arc, RwLock};
use tracing::{debug, info};

/// On-disk layout of a content file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ContentFile {
    #[serde(default)]
    pub projects: Vec<ProjectRecord>,
    /// Overlays keyed by project id.
    #[serde(default)]
    pub translations: HashMap<String, ProjectOverlay>,
    #[serde(default)]
    pub team: Vec<TeamMemberRecord>,
}

#[derive(Default)]
struct Inner {
    projects: HashMap<String, ProjectRecord>,
    translations: HashMap<String, ProjectOverlay>,
    team: HashMap<String, TeamMemberRecord>,
}

/// Memory-backed implementation of every content source trait.
#[derive(Default)]
pub struct ContentStore {
    inner: RwLock<Inner>,
    events: Option<Arc<SiteContext>>,
}

impl ContentStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store from already-parsed content.
    pub fn from_content(content: ContentFile) -> Result<Self, FalahError> {
        let mut inner = Inner::default();
        for project in content.projects {
            if project.id.is_empty() {
                return Err(FalahError::Content("project with empty id".into()));
            }
            inner.projects.insert(project.id.clone(), project);
        }
        inner.translations = content.translations;
        for member in content.team {
            if member.slug.is_empty() {
                return Err(FalahError::Content("team record with empty slug".into()));
            }
            inner.team.insert(member.slug.clone(), member);
        }
        Ok(Self {
            inner: RwLock::new(inner),
            events: None,
        })
    }

    /// Load a JSON content file.
    pub fn from_file(path: &str) -> Result<Self, FalahError> {
        let expanded = shellexpand(path);
        let path = Path::new(&expanded);
        let raw = std::fs::read_to_string(path)?;
        let content: ContentFile = serde_json::from_str(&raw)?;
        let store = Self::from_content(content)?;
        let (projects, overlays, team) = store.counts();
        info!(
            "Content loaded from {} ({projects} projects, {overlays} overlays, {team} team records)",
            path.display()
        );
        Ok(store)
    }

    /// Announce team edits on `ctx`.
    pub fn with_events(mut self, ctx: Arc<SiteContext>) -> Self {
        self.events = Some(ctx);
        self
    }

    /// `(projects, overlays, team records)`.
    pub fn counts(&self) -> (usize, usize, usize) {
        let inner = self.read();
        (
            inner.projects.len(),
            inner.translations.len(),
            inner.team.len(),
        )
    }

    pub fn upsert_project(&self, project: ProjectRecord) {
        self.write().projects.insert(project.id.clone(), project);
    }

    pub fn put_translations(&self, project_id: &str, overlay: ProjectOverlay) {
        self.write()
            .translations
            .insert(project_id.to_string(), overlay);
    }

    /// Store a dynamic team record and broadcast `team-data-updated`.
    pub fn upsert_team_member(&self, record: TeamMemberRecord) -> Result<(), FalahError> {
        if record.slug.is_empty() {
            return Err(FalahError::Content("team record with empty slug".into()));
        }
        let slug = record.slug.clone();
        self.write().team.insert(slug.clone(), record);
        info!("content store: team record {slug} saved");
        self.announce_team_change();
        Ok(())
    }

    /// Delete a dynamic team record. Returns whether one existed.
    pub fn remove_team_member(&self, slug: &str) -> bool {
        let removed = self.write().team.remove(slug).is_some();
        if removed {
            info!("content store: team record {slug} removed");
            self.announce_team_change();
        }
        removed
    }

    fn announce_team_change(&self) {
        if let Some(ref ctx) = self.events {
            ctx.notify_team_data_updated();
        }
    }

    fn read(&self) -> std::sync::RwLockReadGuard<'_, Inner> {
        self.inner.read().unwrap_or_else(|e| e.into_inner())
    }

    fn write(&self) -> std::sync::RwLockWriteGuard<'_, Inner> {
        self.inner.write().unwrap_or_else(|e| e.into_inner())
    }
}

#[async_trait]
impl ProjectSource for ContentStore {
    fn name(&self) -> &str {
        "content-store"
    }

    async fn project_with_details(&self, id: &str) -> Result<Option<ProjectRecord>, FalahError> {
        Ok(self.read().projects.get(id).cloned())
    }
}

#[async_trait]
impl TranslationSource for ContentStore {
    fn name(&self) -> &str {
        "content-store"
    }

    async fn project_translations(&self, project_id: &str) -> Result<ProjectOverlay, FetchError> {
        match self.read().translations.get(project_id) {
            Some(overlay) => Ok(overlay.clone()),
            None => {
                debug!("content store: no overlay for {project_id}");
                Err(FetchError::NotFound)
            }
        }
    }
}

#[async_trait]
impl TeamSource for ContentStore {
    fn name(&self) -> &str {
        "content-store"
    }

    async fn team_member(&self, slug: &str) -> Result<Option<TeamMemberRecord>, FalahError> {
        Ok(self.read().team.get(slug).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use falah_core::events::SiteEvent;
    use falah_core::locale::{Locale, LocalizedString};
    use std::io::Write;

    fn project(id: &str) -> ProjectRecord {
        ProjectRecord {
            id: id.to_string(),
            title: "Acme Deal".to_string(),
            badges: Vec::new(),
            investment_year: Some(2021),
            content_image: None,
            content_sections: Vec::new(),
        }
    }

    #[tokio::test]
    async fn test_project_lookup() {
        let store = ContentStore::new();
        store.upsert_project(project("acme-deal"));
        let found = store.project_with_details("acme-deal").await.unwrap();
        assert_eq!(found.unwrap().title, "Acme Deal");
        assert!(store.project_with_details("other").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_missing_overlay_is_not_found() {
        let store = ContentStore::new();
        let err = store.project_translations("acme-deal").await.unwrap_err();
        assert_eq!(err, FetchError::NotFound);

        let overlay = ProjectOverlay {
            title: Some(LocalizedString::new("", "Сделка", "")),
            ..Default::default()
        };
        store.put_translations("acme-deal", overlay.clone());
        assert_eq!(store.project_translations("acme-deal").await.unwrap(), overlay);
    }

    #[tokio::test]
    async fn test_team_edits_broadcast_when_attached() {
        let ctx = Arc::new(SiteContext::default());
        let mut sub = ctx.subscribe();
        let store = ContentStore::new().with_events(ctx.clone());

        let record = TeamMemberRecord {
            slug: "nurlan-kussainov".into(),
            role: LocalizedString::new("Founding Partner", "", ""),
            ..Default::default()
        };
        store.upsert_team_member(record).unwrap();
        assert_eq!(sub.try_recv(), Some(SiteEvent::TeamDataUpdated));

        let fetched = store.team_member("nurlan-kussainov").await.unwrap().unwrap();
        assert_eq!(fetched.role.get(Locale::En), "Founding Partner");

        assert!(store.remove_team_member("nurlan-kussainov"));
        assert_eq!(sub.try_recv(), Some(SiteEvent::TeamDataUpdated));
        assert!(!store.remove_team_member("nurlan-kussainov"));
        assert_eq!(sub.try_recv(), None);
    }

    #[test]
    fn test_team_record_without_slug_rejected() {
        let store = ContentStore::new();
        let err = store
            .upsert_team_member(TeamMemberRecord::default())
            .unwrap_err();
        assert!(matches!(err, FalahError::Content(_)));
    }

    #[tokio::test]
    async fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{
                "projects": [{{"id": "acme-deal", "title": "Acme Deal", "investmentYear": 2021}}],
                "translations": {{"acme-deal": {{"title": {{"ru": "Сделка"}}}}}},
                "team": [{{"slug": "azhar-babayeva", "role": {{"kz": "Менеджер"}}}}]
            }}"#
        )
        .unwrap();
        let store = ContentStore::from_file(file.path().to_str().unwrap()).unwrap();
        assert_eq!(store.counts(), (1, 1, 1));
        let overlay = store.project_translations("acme-deal").await.unwrap();
        assert_eq!(overlay.title.unwrap().get(Locale::Ru), "Сделка");
    }

    #[test]
    fn test_from_file_rejects_bad_json() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{{ not json").unwrap();
        let err = ContentStore::from_file(file.path().to_str().unwrap()).err().unwrap();
        assert!(matches!(err, FalahError::Serialization(_)));
    }

    #[test]
    fn test_from_content_rejects_empty_project_id() {
        let content = ContentFile {
            projects: vec![project("")],
            ..Default::default()
        };
        assert!(ContentStore::from_content(content).is_err());
    }
}
