//! # falah-core
//!
//! Core types, traits, configuration, site events, and error handling for
//! the Falah site engine.

pub mod config;
mod de;
pub mod error;
pub mod events;
pub mod guard;
pub mod locale;
pub mod model;
pub mod slug;
pub mod traits;

pub use config::shellexpand;
pub use locale::{Locale, LocalizedString};
