use crate::{
    error::{FalahError, FetchError},
    model::{ProjectOverlay, ProjectRecord, TeamMemberRecord},
};
use async_trait::async_trait;

/// Data accessor for portfolio projects.
///
/// `Ok(None)` means the project does not exist. Callers treat `Err` the same
/// way, but implementations should still report what went wrong.
#[async_trait]
pub trait ProjectSource: Send + Sync {
    /// Human-readable source name, used in logs.
    fn name(&self) -> &str;

    /// Fetch a project with its badges and content sections.
    async fn project_with_details(&self, id: &str) -> Result<Option<ProjectRecord>, FalahError>;
}

/// Translation endpoint for project overlays.
#[async_trait]
pub trait TranslationSource: Send + Sync {
    fn name(&self) -> &str;

    /// Fetch the overlay for a project id. The caller decides whether an
    /// error matters; pages fall back to the empty overlay.
    async fn project_translations(&self, project_id: &str) -> Result<ProjectOverlay, FetchError>;
}

/// Admin-editable team member store.
#[async_trait]
pub trait TeamSource: Send + Sync {
    fn name(&self) -> &str;

    /// Fetch the dynamic record for a slug, if one has been stored.
    async fn team_member(&self, slug: &str) -> Result<Option<TeamMemberRecord>, FalahError>;
}
