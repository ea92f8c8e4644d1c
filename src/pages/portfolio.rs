//! Portfolio detail page (`/portfolio/<id>`).

use super::{view, PageState};
use falah_content::{resolve_project, ResolvedProject};
use falah_core::{
    events::{SiteContext, SiteEvent, Subscription},
    guard::{RequestGuard, RequestTicket},
    model::{ProjectOverlay, ProjectRecord},
    traits::{ProjectSource, TranslationSource},
    Locale,
};
use std::sync::Arc;
use tracing::{debug, error, info, warn};

/// Whether `id` uses the retired `p<digits>` scheme.
pub fn is_legacy_project_id(id: &str) -> bool {
    id.strip_prefix('p')
        .is_some_and(|digits| !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()))
}

/// Data accessors a portfolio page reads from.
#[derive(Clone)]
pub struct PortfolioSources {
    pub projects: Arc<dyn ProjectSource>,
    pub translations: Arc<dyn TranslationSource>,
}

/// A project record together with whatever overlay could be fetched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedProject {
    pub record: ProjectRecord,
    pub overlay: ProjectOverlay,
}

/// Fetch a project and then its translation overlay.
///
/// Legacy ids are rejected before any fetch. A failed or missing primary
/// record is `NotFound`; a failed overlay fetch leaves the overlay empty.
pub async fn load_project(sources: &PortfolioSources, id: &str) -> PageState<LoadedProject> {
    if is_legacy_project_id(id) {
        info!("portfolio: blocked legacy project id {id}");
        return PageState::NotFound;
    }

    let record = match sources.projects.project_with_details(id).await {
        Ok(Some(record)) => record,
        Ok(None) => {
            debug!("portfolio: project {id} not found");
            return PageState::NotFound;
        }
        Err(e) => {
            error!("portfolio: loading project {id} from {} failed: {e}", sources.projects.name());
            return PageState::NotFound;
        }
    };

    // Overlays are keyed by the record's own id, not the route parameter.
    let overlay = match sources.translations.project_translations(&record.id).await {
        Ok(overlay) => {
            debug!("portfolio: loaded translations for {}", record.id);
            overlay
        }
        Err(e) => {
            warn!("portfolio: translations for {} unavailable: {e}", record.id);
            ProjectOverlay::default()
        }
    };

    PageState::Found(LoadedProject { record, overlay })
}

/// A mounted portfolio page.
pub struct PortfolioPage {
    ctx: Arc<SiteContext>,
    sources: PortfolioSources,
    route_id: String,
    locale: Locale,
    state: PageState<LoadedProject>,
    guard: RequestGuard,
    subscription: Subscription,
}

impl PortfolioPage {
    /// Create the page in the `Loading` state without fetching anything.
    pub fn new(ctx: Arc<SiteContext>, sources: PortfolioSources, id: &str) -> Self {
        let subscription = ctx.subscribe();
        let locale = ctx.current_locale();
        Self {
            ctx,
            sources,
            route_id: id.to_string(),
            locale,
            state: PageState::Loading,
            guard: RequestGuard::new(),
            subscription,
        }
    }

    /// Create the page and run its initial load.
    pub async fn mount(ctx: Arc<SiteContext>, sources: PortfolioSources, id: &str) -> Self {
        let mut page = Self::new(ctx, sources, id);
        page.load().await;
        page
    }

    /// Load the current route id and apply the result.
    pub async fn load(&mut self) {
        let ticket = self.begin_load();
        let outcome = load_project(&self.sources, &self.route_id).await;
        self.apply_load(ticket, outcome);
    }

    /// Switch to another project id. Equivalent to a remount.
    pub async fn navigate(&mut self, id: &str) {
        self.route_id = id.to_string();
        self.state = PageState::Loading;
        self.load().await;
    }

    /// Reserve a ticket for a load run outside the page (see [`load_project`]).
    pub fn begin_load(&self) -> RequestTicket {
        self.guard.begin()
    }

    /// Apply a load outcome unless a newer load has started since `ticket`.
    pub fn apply_load(&mut self, ticket: RequestTicket, outcome: PageState<LoadedProject>) -> bool {
        if !self.guard.is_current(ticket) {
            debug!(
                "portfolio: discarding stale load #{} for {}",
                ticket.generation(),
                self.route_id
            );
            return false;
        }
        self.state = outcome;
        true
    }

    /// React to a site event. Returns whether anything displayed changed.
    pub fn handle_event(&mut self, event: &SiteEvent) -> bool {
        match event {
            SiteEvent::LanguageChanged { lang } => {
                let next = lang.unwrap_or_else(|| self.ctx.current_locale());
                let changed = next != self.locale;
                self.locale = next;
                changed
            }
            SiteEvent::I18nUpdated | SiteEvent::TeamDataUpdated => false,
        }
    }

    /// Handle every event already buffered. Returns how many were handled.
    pub fn process_pending(&mut self) -> usize {
        let mut handled = 0;
        while let Some(event) = self.subscription.try_recv() {
            self.handle_event(&event);
            handled += 1;
        }
        handled
    }

    pub fn route_id(&self) -> &str {
        &self.route_id
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    pub fn state(&self) -> &PageState<LoadedProject> {
        &self.state
    }

    /// Displayed fields for the current locale.
    pub fn resolved(&self) -> PageState<ResolvedProject> {
        self.state
            .map(|loaded| resolve_project(&loaded.record, &loaded.overlay, self.locale))
    }

    pub fn render(&self) -> String {
        view::render_portfolio(&self.resolved(), self.locale)
    }
}

#[cfg(test)]
mod tests;
