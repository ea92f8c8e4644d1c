//! Site-wide locale state and change broadcasts.
//!
//! A [`SiteContext`] is shared (via `Arc`) by every mounted page. Pages call
//! [`SiteContext::subscribe`] on mount and keep the returned
//! [`Subscription`] for as long as they live; dropping it deregisters the
//! listener.

use crate::locale::Locale;
use std::sync::RwLock;
use tokio::sync::broadcast::{self, error::RecvError, error::TryRecvError};
use tracing::{debug, warn};

/// Buffered events per listener before it starts lagging.
const EVENT_CAPACITY: usize = 64;

/// A broadcast every mounted page receives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SiteEvent {
    /// The active locale changed. `None` means "re-read the context".
    LanguageChanged { lang: Option<Locale> },
    /// Translation content was edited without a locale change.
    I18nUpdated,
    /// Dynamic team records were edited.
    TeamDataUpdated,
}

/// Shared site state: the current locale plus the event bus.
pub struct SiteContext {
    locale: RwLock<Locale>,
    tx: broadcast::Sender<SiteEvent>,
}

impl SiteContext {
    pub fn new(initial: Locale) -> Self {
        let (tx, _) = broadcast::channel(EVENT_CAPACITY);
        Self {
            locale: RwLock::new(initial),
            tx,
        }
    }

    /// Current locale, read synchronously.
    pub fn current_locale(&self) -> Locale {
        *self.locale.read().unwrap_or_else(|e| e.into_inner())
    }

    /// Switch locale and announce it with the new value attached.
    pub fn set_locale(&self, locale: Locale) {
        *self.locale.write().unwrap_or_else(|e| e.into_inner()) = locale;
        self.broadcast(SiteEvent::LanguageChanged { lang: Some(locale) });
    }

    /// Announce a locale change, optionally without a payload.
    pub fn notify_language_changed(&self, lang: Option<Locale>) {
        self.broadcast(SiteEvent::LanguageChanged { lang });
    }

    pub fn notify_i18n_updated(&self) {
        self.broadcast(SiteEvent::I18nUpdated);
    }

    pub fn notify_team_data_updated(&self) {
        self.broadcast(SiteEvent::TeamDataUpdated);
    }

    /// Register a listener. Drop the subscription to deregister.
    pub fn subscribe(&self) -> Subscription {
        Subscription {
            rx: self.tx.subscribe(),
        }
    }

    /// Number of live subscriptions.
    pub fn listener_count(&self) -> usize {
        self.tx.receiver_count()
    }

    fn broadcast(&self, event: SiteEvent) {
        match self.tx.send(event.clone()) {
            Ok(n) => debug!("site event {event:?} delivered to {n} listener(s)"),
            Err(_) => debug!("site event {event:?} dropped: no listeners"),
        }
    }
}

impl Default for SiteContext {
    fn default() -> Self {
        Self::new(Locale::default())
    }
}

/// A registered listener on a [`SiteContext`].
pub struct Subscription {
    rx: broadcast::Receiver<SiteEvent>,
}

impl Subscription {
    /// Wait for the next event. Returns `None` once the context is gone.
    ///
    /// A lagging listener skips the overwritten events and resumes with the
    /// oldest one still buffered.
    pub async fn recv(&mut self) -> Option<SiteEvent> {
        loop {
            match self.rx.recv().await {
                Ok(event) => return Some(event),
                Err(RecvError::Lagged(skipped)) => {
                    warn!("site listener lagged, skipped {skipped} event(s)");
                }
                Err(RecvError::Closed) => return None,
            }
        }
    }

    /// Take the next buffered event without waiting.
    pub fn try_recv(&mut self) -> Option<SiteEvent> {
        loop {
            match self.rx.try_recv() {
                Ok(event) => return Some(event),
                Err(TryRecvError::Lagged(skipped)) => {
                    warn!("site listener lagged, skipped {skipped} event(s)");
                }
                Err(TryRecvError::Empty) | Err(TryRecvError::Closed) => return None,
            }
        }
    }
}
