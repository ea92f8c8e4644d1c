//! HTTP client for the admin backend.
//!
//! Endpoints:
//! - `GET {base}/api/projects/{id}`: project with details, `404`/`null` = missing
//! - `GET {base}/api/admin/translations/project?id={id}`: project overlay
//! - `GET {base}/api/team/{slug}`: dynamic team record, `404`/`null` = missing

use async_trait::async_trait;
use falah_core::{
    error::{FalahError, FetchError},
    model::{ProjectOverlay, ProjectRecord, TeamMemberRecord},
    traits::{ProjectSource, TeamSource, TranslationSource},
};
use reqwest::{StatusCode, Url};
use serde::de::DeserializeOwned;
use tracing::debug;

/// Admin backend client backed by `reqwest`.
pub struct ApiClient {
    client: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Append percent-encoded path segments to the base URL.
    fn endpoint(&self, segments: &[&str]) -> Result<Url, FetchError> {
        let mut url = Url::parse(&self.base_url)
            .map_err(|e| FetchError::Transport(format!("invalid base url {}: {e}", self.base_url)))?;
        url.path_segments_mut()
            .map_err(|_| FetchError::Transport(format!("base url {} cannot take a path", self.base_url)))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    /// GET a JSON body where `404` and `null` both mean "absent".
    async fn get_optional<T: DeserializeOwned>(&self, url: Url) -> Result<Option<T>, FetchError> {
        debug!("api: GET {url}");
        let resp = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| FetchError::Transport(e.to_string()))?;

        let status = resp.status();
        if status == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }

        resp.json::<Option<T>>()
            .await
            .map_err(|e| FetchError::Decode(e.to_string()))
    }
}

#[async_trait]
impl ProjectSource for ApiClient {
    fn name(&self) -> &str {
        "api"
    }

    async fn project_with_details(&self, id: &str) -> Result<Option<ProjectRecord>, FalahError> {
        let url = self.endpoint(&["api", "projects", id])?;
        Ok(self.get_optional(url).await?)
    }
}

#[async_trait]
impl TranslationSource for ApiClient {
    fn name(&self) -> &str {
        "api"
    }

    async fn project_translations(&self, project_id: &str) -> Result<ProjectOverlay, FetchError> {
        let mut url = self.endpoint(&["api", "admin", "translations", "project"])?;
        url.query_pairs_mut().append_pair("id", project_id);
        debug!("api: GET {url}");

        let resp = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| FetchError::Transport(e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }

        resp.json::<ProjectOverlay>()
            .await
            .map_err(|e| FetchError::Decode(e.to_string()))
    }
}

#[async_trait]
impl TeamSource for ApiClient {
    fn name(&self) -> &str {
        "api"
    }

    async fn team_member(&self, slug: &str) -> Result<Option<TeamMemberRecord>, FalahError> {
        let url = self.endpoint(&["api", "team", slug])?;
        let record: Option<TeamMemberRecord> = self.get_optional(url).await?;
        Ok(record.map(|mut r| {
            if r.slug.is_empty() {
                r.slug = slug.to_string();
            }
            r
        }))
    }
}
