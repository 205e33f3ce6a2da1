//! The header language switch.

use serde::Serialize;

use super::Router;
use crate::locale::{Locale, rewrite_locale};
use crate::storage::{KeyValueStore, SiteStorage};

/// Result of a language switch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SwitchOutcome {
    /// Locale before the switch.
    pub from: Locale,
    /// Locale switched to.
    pub to: Locale,
    /// Path navigated to. Equal to the starting path when it had no locale
    /// segment, in which case no navigation happened.
    pub path: String,
}

/// Flips the page between English and German.
#[derive(Debug, Default, Clone, Copy)]
pub struct LanguageSwitcher;

impl LanguageSwitcher {
    /// Button label for a page rendered in `current`.
    pub const fn label(current: Locale) -> &'static str {
        current.switch_label()
    }

    /// Handle a click.
    ///
    /// Marks the redirect in session storage, saves the target locale, then
    /// replaces the current location with the same page in the other locale.
    /// The marker tells the next mount not to undo the switch.
    pub fn toggle<R, D, S>(&self, router: &mut R, storage: &mut SiteStorage<D, S>) -> SwitchOutcome
    where
        R: Router,
        D: KeyValueStore,
        S: KeyValueStore,
    {
        let from = router.locale();
        let to = from.complement();
        let current = router.pathname().to_string();
        let path = rewrite_locale(&current, to).unwrap_or(current);

        storage.set_redirect_marker();
        storage.persist_locale(to);

        tracing::debug!(%from, %to, %path, "Switching language");
        router.replace(&path);

        SwitchOutcome { from, to, path }
    }
}
