//! Configuration for the RaniClean site tools.
//!
//! The configuration follows XDG Base Directory Specification and supports:
//! - User config: `~/.config/raniclean/site.yaml`
//! - Project config: `.raniclean.yaml` in current directory
//! - Environment variables: `RANICLEAN_*`
//! - Command-line flags (highest precedence)

mod emailjs;

use std::path::{Path, PathBuf};

pub use emailjs::{DEFAULT_ENDPOINT, EmailJsConfig};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::locale::Locale;

/// Main configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Locale for command-line messages. Detected from the environment when
    /// unset.
    #[serde(default)]
    pub locale: Option<Locale>,

    /// Directory holding the simulated browser storage and contact drafts.
    #[serde(default)]
    pub state_dir: Option<PathBuf>,

    /// Email relay settings.
    #[serde(default)]
    pub emailjs: EmailJsConfig,
}

impl Config {
    /// Load configuration from all sources with proper precedence.
    ///
    /// Resolution order (highest to lowest):
    /// 1. CLI flags (handled separately)
    /// 2. Environment variables
    /// 3. Project config (`.raniclean.yaml`)
    /// 4. User config (`~/.config/raniclean/site.yaml`)
    /// 5. Defaults
    pub fn load() -> Result<Self> {
        let mut config = Self::default();

        if let Some(path) = Self::user_config_path()
            && path.exists()
        {
            config.merge(Self::load_from_file(&path)?);
        }

        let project_path = PathBuf::from(".raniclean.yaml");
        if project_path.exists() {
            config.merge(Self::load_from_file(&project_path)?);
        }

        config.apply_overrides(|name| std::env::var(name).ok().filter(|v| !v.is_empty()));

        Ok(config)
    }

    /// Load configuration from a YAML file.
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| {
            Error::config(format!("Failed to read config file {}: {}", path.display(), e))
        })?;

        serde_yaml::from_str(&contents).map_err(|e| {
            Error::config(format!("Failed to parse config file {}: {}", path.display(), e))
        })
    }

    /// Merge another config into this one (other takes precedence).
    fn merge(&mut self, other: Self) {
        if other.locale.is_some() {
            self.locale = other.locale;
        }

        if other.state_dir.is_some() {
            self.state_dir = other.state_dir;
        }

        let defaults = EmailJsConfig::default();
        let theirs = other.emailjs;

        if theirs.endpoint != defaults.endpoint {
            self.emailjs.endpoint = theirs.endpoint;
        }
        if theirs.service_id != defaults.service_id {
            self.emailjs.service_id = theirs.service_id;
        }
        if theirs.template_id != defaults.template_id {
            self.emailjs.template_id = theirs.template_id;
        }
        if theirs.public_key != defaults.public_key {
            self.emailjs.public_key = theirs.public_key;
        }
        if theirs.timeout_secs != defaults.timeout_secs {
            self.emailjs.timeout_secs = theirs.timeout_secs;
        }
    }

    /// Apply `RANICLEAN_*` overrides read through `lookup`.
    fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(locale) = lookup("RANICLEAN_LOCALE") {
            match crate::i18n::resolve_locale(&locale) {
                Some(locale) => self.locale = Some(locale),
                None => tracing::warn!(locale, "Ignoring unsupported RANICLEAN_LOCALE"),
            }
        }

        if let Some(dir) = lookup("RANICLEAN_STATE_DIR") {
            self.state_dir = Some(PathBuf::from(dir));
        }

        if let Some(endpoint) = lookup("RANICLEAN_EMAILJS_ENDPOINT") {
            self.emailjs.endpoint = endpoint;
        }
        if let Some(service_id) = lookup("RANICLEAN_EMAILJS_SERVICE_ID") {
            self.emailjs.service_id = service_id;
        }
        if let Some(template_id) = lookup("RANICLEAN_EMAILJS_TEMPLATE_ID") {
            self.emailjs.template_id = template_id;
        }
        if let Some(public_key) = lookup("RANICLEAN_EMAILJS_PUBLIC_KEY") {
            self.emailjs.public_key = public_key;
        }
    }

    /// Locale for command-line messages.
    pub fn display_locale(&self) -> Locale {
        self.locale.unwrap_or_else(crate::i18n::detect_locale)
    }

    /// Directory for simulated browser storage and drafts.
    pub fn effective_state_dir(&self) -> Result<PathBuf> {
        self.state_dir
            .clone()
            .or_else(Self::state_dir)
            .ok_or_else(|| Error::config("Cannot determine state directory. Use --state-dir."))
    }

    /// Get the path to the user config file.
    #[must_use]
    pub fn user_config_path() -> Option<PathBuf> {
        Self::config_dir().map(|p| p.join("site.yaml"))
    }

    /// Get the path to the user config directory.
    ///
    /// Cross-platform behavior:
    /// - If `XDG_CONFIG_HOME` is set, uses `$XDG_CONFIG_HOME/raniclean`
    /// - Linux/macOS: Falls back to `~/.config/raniclean` (XDG default)
    /// - Windows: Falls back to `%APPDATA%\raniclean`
    #[must_use]
    pub fn config_dir() -> Option<PathBuf> {
        if let Ok(xdg_config) = std::env::var("XDG_CONFIG_HOME")
            && !xdg_config.is_empty()
        {
            return Some(PathBuf::from(xdg_config).join("raniclean"));
        }

        #[cfg(windows)]
        {
            dirs::config_dir().map(|p| p.join("raniclean"))
        }

        #[cfg(not(windows))]
        {
            dirs::home_dir().map(|p| p.join(".config").join("raniclean"))
        }
    }

    /// Get the path to the default state directory.
    ///
    /// Cross-platform behavior:
    /// - If `XDG_STATE_HOME` is set, uses `$XDG_STATE_HOME/raniclean`
    /// - Linux/macOS: Falls back to `~/.local/state/raniclean` (XDG default)
    /// - Windows: Falls back to `%LOCALAPPDATA%\raniclean`
    #[must_use]
    pub fn state_dir() -> Option<PathBuf> {
        if let Ok(xdg_state) = std::env::var("XDG_STATE_HOME")
            && !xdg_state.is_empty()
        {
            return Some(PathBuf::from(xdg_state).join("raniclean"));
        }

        #[cfg(windows)]
        {
            dirs::data_local_dir().map(|p| p.join("raniclean"))
        }

        #[cfg(not(windows))]
        {
            dirs::home_dir().map(|p| p.join(".local").join("state").join("raniclean"))
        }
    }
}
