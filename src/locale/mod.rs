//! Supported site locales and the storage keys shared by the resolver and
//! the language switcher.

mod path;

pub use path::{locale_of, rewrite_locale, split_locale};

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use unic_langid::{LanguageIdentifier, langid};

use crate::error::{Error, Result};

/// Durable storage key holding the visitor's preferred locale.
pub const LOCALE_STORAGE_KEY: &str = "raniclean-locale";

/// Session storage key set by the language switcher right before it
/// navigates. Consumed by the next page mount.
pub const REDIRECT_FLAG: &str = "raniclean-redirecting";

/// Value stored under [`REDIRECT_FLAG`] while a switch is in flight.
pub const REDIRECT_FLAG_VALUE: &str = "true";

/// A site locale. The site ships exactly two.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    /// English, served under `/en`.
    #[default]
    En,
    /// German, served under `/de`.
    De,
}

impl Locale {
    /// Every supported locale, in display order.
    pub const ALL: [Self; 2] = [Self::En, Self::De];

    /// Parse a locale code. Only the exact strings `"en"` and `"de"` match.
    pub fn parse(code: &str) -> Option<Self> {
        match code {
            "en" => Some(Self::En),
            "de" => Some(Self::De),
            _ => None,
        }
    }

    /// The lowercase code used in URLs and storage.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::De => "de",
        }
    }

    /// The other locale.
    pub const fn complement(self) -> Self {
        match self {
            Self::En => Self::De,
            Self::De => Self::En,
        }
    }

    /// Label shown on the language switch button: the code of the locale
    /// the button leads to.
    pub const fn switch_label(self) -> &'static str {
        match self.complement() {
            Self::En => "EN",
            Self::De => "DE",
        }
    }

    /// Language identifier used to pick the Fluent bundle.
    pub fn langid(self) -> LanguageIdentifier {
        match self {
            Self::En => langid!("en-US"),
            Self::De => langid!("de-DE"),
        }
    }

    /// Best-effort match of an environment locale such as `de_DE.UTF-8`.
    pub fn from_env_locale(raw: &str) -> Option<Self> {
        let language = raw.split(['_', '-', '.']).next()?.to_ascii_lowercase();
        Self::parse(&language)
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Locale {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s).ok_or_else(|| Error::invalid_arg(format!("Unknown locale '{s}'. Use: en, de")))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_is_exact() {
        assert_eq!(Locale::parse("en"), Some(Locale::En));
        assert_eq!(Locale::parse("de"), Some(Locale::De));
        assert_eq!(Locale::parse("EN"), None);
        assert_eq!(Locale::parse("de-DE"), None);
        assert_eq!(Locale::parse(" en"), None);
        assert_eq!(Locale::parse(""), None);
    }

    #[test]
    fn test_complement() {
        for locale in Locale::ALL {
            assert_ne!(locale.complement(), locale);
            assert_eq!(locale.complement().complement(), locale);
        }
    }

    #[test]
    fn test_switch_label_names_target() {
        assert_eq!(Locale::En.switch_label(), "DE");
        assert_eq!(Locale::De.switch_label(), "EN");
    }

    #[test]
    fn test_from_env_locale() {
        assert_eq!(Locale::from_env_locale("de_DE.UTF-8"), Some(Locale::De));
        assert_eq!(Locale::from_env_locale("en-GB"), Some(Locale::En));
        assert_eq!(Locale::from_env_locale("fr_FR"), None);
        assert_eq!(Locale::from_env_locale("C"), None);
    }

    #[test]
    fn test_from_str_error() {
        assert!("fr".parse::<Locale>().is_err());
        assert_eq!("de".parse::<Locale>().unwrap(), Locale::De);
    }

    #[test]
    fn test_serde_lowercase() {
        assert_eq!(serde_json::to_string(&Locale::De).unwrap(), "\"de\"");
        let parsed: Locale = serde_json::from_str("\"en\"").unwrap();
        assert_eq!(parsed, Locale::En);
    }
}
