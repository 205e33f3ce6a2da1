//! Locale-aware navigation: the per-mount resolver and the language switch.
//!
//! Neither piece implements routing. Both talk to a [`Router`] that reports
//! the current path and locale and performs replace navigations.

mod persist;
mod switcher;

pub use persist::{LocalePersist, MountOutcome};
pub use switcher::{LanguageSwitcher, SwitchOutcome};

use crate::error::{Error, Result};
use crate::locale::{Locale, locale_of};

/// The routing surface the resolver and the switcher depend on.
pub trait Router {
    /// Current path, including query and fragment.
    fn pathname(&self) -> &str;

    /// Locale the page is rendered in.
    fn locale(&self) -> Locale;

    /// Navigate to `path`, replacing the current history entry.
    fn replace(&mut self, path: &str);
}

/// A router that keeps the current location in memory and records every
/// navigation it performs.
#[derive(Debug, Clone)]
pub struct SimulatedRouter {
    path: String,
    locale: Locale,
    history: Vec<String>,
}

impl SimulatedRouter {
    /// Open a page. The path must carry a locale segment.
    pub fn open(path: impl Into<String>) -> Result<Self> {
        let path = path.into();
        let locale = locale_of(&path).ok_or_else(|| Error::invalid_path(path.clone()))?;
        Ok(Self { path, locale, history: Vec::new() })
    }

    /// Open a page whose runtime locale is given independently of the path.
    pub fn with_locale(path: impl Into<String>, locale: Locale) -> Self {
        Self { path: path.into(), locale, history: Vec::new() }
    }

    /// Paths navigated to, oldest first. Same-path replaces are not recorded.
    pub fn history(&self) -> &[String] {
        &self.history
    }

    /// The most recent navigation target, if any.
    pub fn last_navigation(&self) -> Option<&str> {
        self.history.last().map(String::as_str)
    }
}

impl Router for SimulatedRouter {
    fn pathname(&self) -> &str {
        &self.path
    }

    fn locale(&self) -> Locale {
        self.locale
    }

    fn replace(&mut self, path: &str) {
        if path == self.path {
            tracing::debug!(path, "Navigation target is the current path, skipping");
            return;
        }

        tracing::debug!(from = %self.path, to = path, "Replace navigation");
        if let Some(locale) = locale_of(path) {
            self.locale = locale;
        }
        self.path = path.to_string();
        self.history.push(self.path.clone());
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_open_requires_locale_segment() {
        assert!(SimulatedRouter::open("/en/about").is_ok());
        assert!(matches!(SimulatedRouter::open("/about"), Err(Error::InvalidPath(_))));
    }

    #[test]
    fn test_replace_updates_location() {
        let mut router = SimulatedRouter::open("/en/about").unwrap();
        router.replace("/de/about");
        assert_eq!(router.pathname(), "/de/about");
        assert_eq!(router.locale(), Locale::De);
        assert_eq!(router.history(), ["/de/about"]);
    }

    #[test]
    fn test_replace_to_same_path_is_noop() {
        let mut router = SimulatedRouter::open("/de").unwrap();
        router.replace("/de");
        assert!(router.history().is_empty());
        assert_eq!(router.last_navigation(), None);
    }
}
