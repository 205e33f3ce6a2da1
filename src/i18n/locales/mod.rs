//! Locale detection for command-line output.

use crate::locale::Locale;

/// Detect the preferred display locale from environment variables.
///
/// Checks in order:
/// 1. `RANICLEAN_LOCALE` - explicit override
/// 2. `LC_ALL` - POSIX locale override
/// 3. `LANG` - default POSIX locale
///
/// Unsupported or unset values fall through; the final default is English.
pub fn detect_locale() -> Locale {
    ["RANICLEAN_LOCALE", "LC_ALL", "LANG"]
        .into_iter()
        .filter_map(|var| std::env::var(var).ok())
        .filter(|value| !value.is_empty() && value != "C" && value != "POSIX")
        .find_map(|value| resolve_locale(&value))
        .unwrap_or_default()
}

/// Normalize a locale string to BCP 47 format.
///
/// Examples:
/// - "de_DE.UTF-8" -> "de-DE"
/// - "en" -> "en"
pub fn normalize_locale(locale: &str) -> String {
    let locale = locale.split('.').next().unwrap_or(locale);
    locale.replace('_', "-")
}

/// Resolve an environment locale to a site locale by its language subtag.
pub fn resolve_locale(locale: &str) -> Option<Locale> {
    Locale::from_env_locale(&normalize_locale(locale))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_locale() {
        assert_eq!(normalize_locale("en_US.UTF-8"), "en-US");
        assert_eq!(normalize_locale("de_DE"), "de-DE");
        assert_eq!(normalize_locale("de"), "de");
    }

    #[test]
    fn test_resolve_locale() {
        assert_eq!(resolve_locale("de_AT.UTF-8"), Some(Locale::De));
        assert_eq!(resolve_locale("en-GB"), Some(Locale::En));
        assert_eq!(resolve_locale("fr_FR.UTF-8"), None);
    }
}
