//! Team member bio page (`/team/<slug>`).

use super::{view, PageState};
use falah_content::{ResolvedMember, TeamDirectory};
use falah_core::{
    events::{SiteContext, SiteEvent, Subscription},
    guard::{RequestGuard, RequestTicket},
    model::TeamMemberRecord,
    traits::TeamSource,
    Locale,
};
use std::sync::Arc;
use tracing::{debug, error};

/// A mounted team member page.
///
/// Renders from compiled data straight away; the dynamic record is layered on
/// top once fetched and re-fetched on every `team-data-updated`.
pub struct TeamPage {
    ctx: Arc<SiteContext>,
    source: Arc<dyn TeamSource>,
    directory: TeamDirectory,
    slug: String,
    locale: Locale,
    dynamic: Option<TeamMemberRecord>,
    guard: RequestGuard,
    subscription: Subscription,
}

impl TeamPage {
    pub fn new(
        ctx: Arc<SiteContext>,
        source: Arc<dyn TeamSource>,
        directory: TeamDirectory,
        slug: &str,
    ) -> Self {
        let subscription = ctx.subscribe();
        let locale = ctx.current_locale();
        Self {
            ctx,
            source,
            directory,
            slug: slug.to_string(),
            locale,
            dynamic: None,
            guard: RequestGuard::new(),
            subscription,
        }
    }

    /// Create the page and fetch the dynamic record once.
    pub async fn mount(
        ctx: Arc<SiteContext>,
        source: Arc<dyn TeamSource>,
        directory: TeamDirectory,
        slug: &str,
    ) -> Self {
        let mut page = Self::new(ctx, source, directory, slug);
        page.refresh().await;
        page
    }

    /// Re-fetch the dynamic record for the current slug.
    pub async fn refresh(&mut self) {
        let ticket = self.guard.begin();
        match self.source.team_member(&self.slug).await {
            Ok(record) => {
                self.apply_record(ticket, record);
            }
            // Keep whatever was shown before.
            Err(e) => error!(
                "team: loading {} from {} failed: {e}",
                self.slug,
                self.source.name()
            ),
        }
    }

    /// Apply a fetched record unless a newer fetch has started since `ticket`.
    pub fn apply_record(&mut self, ticket: RequestTicket, record: Option<TeamMemberRecord>) -> bool {
        if !self.guard.is_current(ticket) {
            debug!(
                "team: discarding stale record #{} for {}",
                ticket.generation(),
                self.slug
            );
            return false;
        }
        self.dynamic = record;
        true
    }

    pub fn begin_refresh(&self) -> RequestTicket {
        self.guard.begin()
    }

    /// React to a site event.
    pub async fn handle_event(&mut self, event: &SiteEvent) {
        match event {
            SiteEvent::LanguageChanged { lang } => {
                self.locale = lang.unwrap_or_else(|| self.ctx.current_locale());
            }
            // Table edits are read at render time; only the locale needs syncing.
            SiteEvent::I18nUpdated => {
                self.locale = self.ctx.current_locale();
            }
            SiteEvent::TeamDataUpdated => self.refresh().await,
        }
    }

    /// Handle every event already buffered. Returns how many were handled.
    pub async fn process_pending(&mut self) -> usize {
        let mut handled = 0;
        while let Some(event) = self.subscription.try_recv() {
            self.handle_event(&event).await;
            handled += 1;
        }
        handled
    }

    pub fn slug(&self) -> &str {
        &self.slug
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    /// Displayed fields for the current locale.
    pub fn resolved(&self) -> PageState<ResolvedMember> {
        match self
            .directory
            .resolve(&self.slug, self.dynamic.as_ref(), self.locale)
        {
            Some(member) => PageState::Found(member),
            None => PageState::NotFound,
        }
    }

    pub fn render(&self) -> String {
        view::render_team(&self.resolved(), self.locale)
    }
}
