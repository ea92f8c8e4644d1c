//! Page controllers: load content, follow site events, render HTML.
//!
//! Each page subscribes to the shared [`SiteContext`](falah_core::events::SiteContext)
//! when it is created and deregisters when dropped.

mod portfolio;
mod team;
mod view;

#[cfg(test)]
mod testing;

pub use portfolio::{PortfolioPage, PortfolioSources};
pub use team::TeamPage;

/// Lifecycle of a page's primary content.
///
/// `Loading` only occurs before the first load completes; later refreshes go
/// straight from one `Found` to the next.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageState<T> {
    Loading,
    NotFound,
    Found(T),
}

impl<T> PageState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn found(&self) -> Option<&T> {
        match self {
            Self::Found(value) => Some(value),
            _ => None,
        }
    }

    pub fn map<U>(&self, f: impl FnOnce(&T) -> U) -> PageState<U> {
        match self {
            Self::Loading => PageState::Loading,
            Self::NotFound => PageState::NotFound,
            Self::Found(value) => PageState::Found(f(value)),
        }
    }
}
