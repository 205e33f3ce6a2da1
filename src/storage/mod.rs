//! Browser-style key-value storage.
//!
//! The site keeps two scalar values: the preferred locale in durable storage
//! (survives sessions, like `localStorage`) and the one-shot redirect marker
//! in session storage (lives for one tab, like `sessionStorage`). Both sit
//! behind [`KeyValueStore`] so tests can use [`MemoryStore`] and the binary
//! can use [`FileStore`].
//!
//! [`SiteStorage`] bundles the two lifetimes and turns every storage failure
//! into a logged no-op: a page must never break because storage is disabled.

mod file;
mod memory;

pub use file::FileStore;
pub use memory::{MemoryStore, UnavailableStore};
#[cfg(test)]
pub(crate) use memory::RecordingStore;

use serde::Serialize;

use crate::error::Result;
use crate::locale::{LOCALE_STORAGE_KEY, Locale, REDIRECT_FLAG, REDIRECT_FLAG_VALUE};

/// A string-keyed, string-valued store.
pub trait KeyValueStore {
    /// Read a value. `Ok(None)` means the key is absent.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Write a value, replacing any previous one.
    fn set(&mut self, key: &str, value: &str) -> Result<()>;

    /// Remove a key. Removing an absent key succeeds.
    fn delete(&mut self, key: &str) -> Result<()>;
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for Box<T> {
    fn get(&self, key: &str) -> Result<Option<String>> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        (**self).set(key, value)
    }

    fn delete(&mut self, key: &str) -> Result<()> {
        (**self).delete(key)
    }
}

/// Per-tab navigation state, derived from the redirect marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TabState {
    /// No switch in flight.
    Idle,
    /// The switcher navigated and the next mount has not run yet.
    SwitchRequested,
}

/// The two storage slots used by the site, with soft-failure semantics.
#[derive(Debug, Default)]
pub struct SiteStorage<D, S> {
    durable: D,
    session: S,
}

impl<D: KeyValueStore, S: KeyValueStore> SiteStorage<D, S> {
    /// Bundle a durable and a session store.
    pub const fn new(durable: D, session: S) -> Self {
        Self { durable, session }
    }

    /// Raw persisted preference, or `None` when absent or unreadable.
    ///
    /// The value is returned unparsed so callers can tell a malformed entry
    /// from a missing one.
    pub fn stored_preference(&self) -> Option<String> {
        match self.durable.get(LOCALE_STORAGE_KEY) {
            Ok(value) => value,
            Err(e) => {
                tracing::warn!(error = %e, "Durable storage unavailable, ignoring saved locale");
                None
            },
        }
    }

    /// Persisted preference if it is a supported locale.
    pub fn preferred_locale(&self) -> Option<Locale> {
        self.stored_preference().as_deref().and_then(Locale::parse)
    }

    /// Save `locale` as the preference. Returns whether the write succeeded.
    pub fn persist_locale(&mut self, locale: Locale) -> bool {
        match self.durable.set(LOCALE_STORAGE_KEY, locale.as_str()) {
            Ok(()) => true,
            Err(e) => {
                tracing::warn!(error = %e, %locale, "Could not persist locale preference");
                false
            },
        }
    }

    /// Whether a switch is in flight on this tab.
    pub fn redirect_pending(&self) -> bool {
        match self.session.get(REDIRECT_FLAG) {
            Ok(value) => value.is_some_and(|v| !v.is_empty()),
            Err(e) => {
                tracing::warn!(error = %e, "Session storage unavailable, assuming no redirect");
                false
            },
        }
    }

    /// Current tab state.
    pub fn tab_state(&self) -> TabState {
        if self.redirect_pending() { TabState::SwitchRequested } else { TabState::Idle }
    }

    /// Set the redirect marker. Returns whether the write succeeded.
    pub fn set_redirect_marker(&mut self) -> bool {
        match self.session.set(REDIRECT_FLAG, REDIRECT_FLAG_VALUE) {
            Ok(()) => true,
            Err(e) => {
                tracing::warn!(error = %e, "Could not set redirect marker");
                false
            },
        }
    }

    /// Read-then-delete the redirect marker.
    ///
    /// Returns `true` exactly when a marker was present. A later call on the
    /// same tab returns `false` unless the marker was set again in between.
    pub fn take_redirect_marker(&mut self) -> bool {
        if !self.redirect_pending() {
            return false;
        }
        if let Err(e) = self.session.delete(REDIRECT_FLAG) {
            tracing::warn!(error = %e, "Could not clear redirect marker");
        }
        true
    }

    /// Remove the stored preference.
    pub fn forget_preference(&mut self) -> Result<()> {
        self.durable.delete(LOCALE_STORAGE_KEY)
    }

    /// Remove the redirect marker without consuming it through a mount.
    pub fn clear_session(&mut self) -> Result<()> {
        self.session.delete(REDIRECT_FLAG)
    }
}
