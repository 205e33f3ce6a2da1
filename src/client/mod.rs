//! Execution context for commands.
//!
//! Bundles the loaded configuration, output settings and the state
//! directory, and hands out the file-backed browser storage and the email
//! relay client commands work with.

use std::path::PathBuf;

use crate::config::Config;
use crate::contact::{DraftStore, EmailJsClient};
use crate::error::{Error, Result};
use crate::locale::Locale;
use crate::output::Output;
use crate::storage::{FileStore, SiteStorage};

/// Storage as seen by one browser tab.
pub type TabStorage = SiteStorage<FileStore, FileStore>;

/// Context for command execution.
pub struct Context {
    /// Loaded configuration.
    pub config: Config,

    /// Output configuration.
    pub output: Output,

    /// Directory holding simulated browser storage.
    pub state_dir: PathBuf,

    /// Locale for status messages.
    pub locale: Locale,
}

impl Context {
    /// Create a new context from CLI options.
    pub fn new(
        state_dir: Option<PathBuf>,
        output_format: &str,
        color: &str,
        quiet: bool,
    ) -> Result<Self> {
        let mut config = Config::load()?;
        if state_dir.is_some() {
            config.state_dir = state_dir;
        }

        Self::from_config(config, Output::from_cli(output_format, color, quiet)?)
    }

    /// Create a context from an already loaded configuration.
    pub fn from_config(config: Config, output: Output) -> Result<Self> {
        let state_dir = config.effective_state_dir()?;
        let locale = config.display_locale();

        tracing::debug!(state_dir = %state_dir.display(), %locale, "Context ready");

        Ok(Self { config, output, state_dir, locale })
    }

    /// Durable storage shared by every tab.
    pub fn local_storage(&self) -> FileStore {
        FileStore::new(self.state_dir.join("local-storage.json"))
    }

    /// Session storage of one tab.
    pub fn session_storage(&self, tab: &str) -> Result<FileStore> {
        validate_tab(tab)?;
        Ok(FileStore::new(self.sessions_dir().join(format!("{tab}.json"))))
    }

    /// Directory holding per-tab session files.
    pub fn sessions_dir(&self) -> PathBuf {
        self.state_dir.join("sessions")
    }

    /// Both storage lifetimes for one tab.
    pub fn tab_storage(&self, tab: &str) -> Result<TabStorage> {
        Ok(SiteStorage::new(self.local_storage(), self.session_storage(tab)?))
    }

    /// Where a failed contact request is kept.
    pub fn drafts(&self) -> DraftStore {
        DraftStore::new(self.state_dir.join("contact-draft.json"))
    }

    /// Email relay client built from the configuration.
    pub fn relay(&self) -> Result<EmailJsClient> {
        EmailJsClient::new(self.config.emailjs.clone())
    }
}

/// Tab names become file names, so keep them to a safe alphabet.
fn validate_tab(tab: &str) -> Result<()> {
    let valid = !tab.is_empty()
        && tab.len() <= 64
        && tab.chars().all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
    if valid {
        Ok(())
    } else {
        Err(Error::invalid_arg(format!(
            "Invalid tab name '{tab}'. Use letters, digits, '-' and '_'."
        )))
    }
}
