//! Fake content sources for page tests.

use async_trait::async_trait;
use falah_core::{
    error::{FalahError, FetchError},
    model::{ProjectOverlay, ProjectRecord, TeamMemberRecord},
    traits::{ProjectSource, TeamSource, TranslationSource},
};
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Project source that counts calls and serves a fixed map.
#[derive(Default)]
pub struct CountingProjectSource {
    projects: HashMap<String, ProjectRecord>,
    calls: AtomicUsize,
}

impl CountingProjectSource {
    pub fn with(projects: Vec<ProjectRecord>) -> Self {
        Self {
            projects: projects.into_iter().map(|p| (p.id.clone(), p)).collect(),
            calls: AtomicUsize::new(0),
        }
    }

    /// Serve each record under the given route id rather than its own id.
    pub fn routed(routes: Vec<(&str, ProjectRecord)>) -> Self {
        Self {
            projects: routes
                .into_iter()
                .map(|(route, p)| (route.to_string(), p))
                .collect(),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ProjectSource for CountingProjectSource {
    fn name(&self) -> &str {
        "counting"
    }

    async fn project_with_details(&self, id: &str) -> Result<Option<ProjectRecord>, FalahError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.projects.get(id).cloned())
    }
}

/// Project source whose every call fails.
pub struct FailingProjectSource;

#[async_trait]
impl ProjectSource for FailingProjectSource {
    fn name(&self) -> &str {
        "failing"
    }

    async fn project_with_details(&self, _id: &str) -> Result<Option<ProjectRecord>, FalahError> {
        Err(FalahError::Fetch(FetchError::Transport("connection refused".into())))
    }
}

/// Translation endpoint answering with a fixed result and recording ids asked for.
pub struct FixedTranslations {
    result: Result<ProjectOverlay, FetchError>,
    requested: std::sync::Mutex<Vec<String>>,
}

impl FixedTranslations {
    pub fn ok(overlay: ProjectOverlay) -> Self {
        Self {
            result: Ok(overlay),
            requested: std::sync::Mutex::new(Vec::new()),
        }
    }

    pub fn failing(err: FetchError) -> Self {
        Self {
            result: Err(err),
            requested: std::sync::Mutex::new(Vec::new()),
        }
    }

    pub fn requested(&self) -> Vec<String> {
        self.requested.lock().unwrap().clone()
    }
}

#[async_trait]
impl TranslationSource for FixedTranslations {
    fn name(&self) -> &str {
        "fixed"
    }

    async fn project_translations(&self, project_id: &str) -> Result<ProjectOverlay, FetchError> {
        self.requested.lock().unwrap().push(project_id.to_string());
        self.result.clone()
    }
}

/// Team source with no dynamic records that counts calls.
pub struct CountingTeamSource {
    calls: AtomicUsize,
}

impl CountingTeamSource {
    pub fn empty() -> Self {
        Self {
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl TeamSource for CountingTeamSource {
    fn name(&self) -> &str {
        "counting"
    }

    async fn team_member(&self, _slug: &str) -> Result<Option<TeamMemberRecord>, FalahError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(None)
    }
}

/// Team source whose every call fails.
pub struct FailingTeamSource;

#[async_trait]
impl TeamSource for FailingTeamSource {
    fn name(&self) -> &str {
        "failing"
    }

    async fn team_member(&self, _slug: &str) -> Result<Option<TeamMemberRecord>, FalahError> {
        Err(FalahError::Fetch(FetchError::Status(503)))
    }
}
