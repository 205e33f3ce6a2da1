//! Unsent contact requests kept for a manual retry.

use std::io;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::ContactForm;
use crate::error::Result;
use crate::locale::Locale;

/// A form that could not be delivered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactDraft {
    /// Form contents as entered.
    pub form: ContactForm,
    /// Locale of the page the form was submitted from.
    pub locale: Locale,
    /// When the failed attempt happened.
    pub saved_at: DateTime<Utc>,
}

impl ContactDraft {
    /// Draft for `form`, stamped now.
    pub fn new(form: ContactForm, locale: Locale) -> Self {
        Self { form, locale, saved_at: Utc::now() }
    }
}

/// Keeps at most one draft on disk.
#[derive(Debug, Clone)]
pub struct DraftStore {
    path: PathBuf,
}

impl DraftStore {
    /// Store backed by `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Backing file location.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Save `draft`, replacing any earlier one.
    pub fn save(&self, draft: &ContactDraft) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&self.path, serde_json::to_string_pretty(draft)?)?;
        Ok(())
    }

    /// Load the saved draft, if any.
    pub fn load(&self) -> Result<Option<ContactDraft>> {
        match std::fs::read_to_string(&self.path) {
            Ok(contents) => Ok(Some(serde_json::from_str(&contents)?)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Delete the saved draft.
    pub fn clear(&self) -> Result<()> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}
