//! Locale reconciliation on page mount.

use serde::Serialize;

use super::Router;
use crate::locale::{Locale, rewrite_locale};
use crate::storage::{KeyValueStore, SiteStorage};

/// What a mount did.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum MountOutcome {
    /// This instance already ran; nothing happened.
    AlreadyChecked,
    /// A switch was in flight: the marker was consumed and the URL locale
    /// confirmed as the preference.
    SwitchConfirmed {
        /// Locale confirmed.
        locale: Locale,
    },
    /// The saved preference differed from the URL; navigated there.
    Redirected {
        /// Locale of the page that was mounted.
        from: Locale,
        /// Saved preference navigated to.
        to: Locale,
        /// Navigation target.
        path: String,
    },
    /// First visit: the URL locale became the preference.
    PreferenceSaved {
        /// Locale saved.
        locale: Locale,
    },
    /// The preference should have become the URL locale, but durable
    /// storage rejected the write.
    NotSaved {
        /// Locale that could not be saved.
        locale: Locale,
    },
    /// The URL already matched, or nothing could be done.
    Unchanged {
        /// Locale of the page.
        locale: Locale,
    },
}

impl MountOutcome {
    /// Navigation target, if this mount navigated.
    pub fn navigated_to(&self) -> Option<&str> {
        match self {
            Self::Redirected { path, .. } => Some(path),
            _ => None,
        }
    }
}

/// Reconciles the page locale with the saved preference once per mount.
///
/// One instance corresponds to one mounted page. Calling
/// [`on_mount`](Self::on_mount) again on the same instance does nothing; a
/// new page load needs a new instance.
#[derive(Debug, Default)]
pub struct LocalePersist {
    checked: bool,
}

impl LocalePersist {
    /// A fresh, not yet mounted instance.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether this instance has already run.
    pub const fn has_checked(&self) -> bool {
        self.checked
    }

    /// Run the mount-time reconciliation.
    ///
    /// Issues at most one navigation and at most one durable write. Storage
    /// failures are logged and treated as missing values.
    pub fn on_mount<R, D, S>(&mut self, router: &mut R, storage: &mut SiteStorage<D, S>) -> MountOutcome
    where
        R: Router,
        D: KeyValueStore,
        S: KeyValueStore,
    {
        if self.checked {
            return MountOutcome::AlreadyChecked;
        }
        self.checked = true;

        let locale = router.locale();

        if storage.take_redirect_marker() {
            tracing::debug!(%locale, "Redirect marker consumed, trusting URL locale");
            if !storage.persist_locale(locale) {
                return MountOutcome::NotSaved { locale };
            }
            return MountOutcome::SwitchConfirmed { locale };
        }

        let saved = storage.stored_preference();

        if let Some(preferred) = saved.as_deref().and_then(Locale::parse)
            && preferred != locale
        {
            let pathname = router.pathname().to_string();
            match rewrite_locale(&pathname, preferred) {
                Some(path) if path != pathname => {
                    tracing::debug!(from = %locale, to = %preferred, %path, "Redirecting to saved locale");
                    router.replace(&path);
                    return MountOutcome::Redirected { from: locale, to: preferred, path };
                },
                _ => {
                    tracing::debug!(%pathname, "Path has no locale segment, not redirecting");
                },
            }
        }

        match saved {
            None if storage.persist_locale(locale) => MountOutcome::PreferenceSaved { locale },
            None => MountOutcome::NotSaved { locale },
            Some(value) => {
                if Locale::parse(&value).is_none() {
                    tracing::debug!(value, "Ignoring malformed saved locale");
                }
                MountOutcome::Unchanged { locale }
            },
        }
    }
}
