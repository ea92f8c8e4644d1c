//! # falah-content
//!
//! Content sources (in-memory store, admin API client), the compiled team,
//! static team translations, and the localization fallback chain.

pub mod api;
pub mod resolve;
pub mod store;
pub mod team;
pub mod team_i18n;

pub use api::ApiClient;
pub use resolve::{resolve_project, ResolvedMember, ResolvedProject, TeamDirectory};
pub use store::{ContentFile, ContentStore};
pub use team_i18n::{TeamI18nEntry, TeamI18nTable};
