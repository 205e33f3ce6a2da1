//! FluentBundle creation and management.

use fluent_bundle::concurrent::FluentBundle;
use fluent_bundle::{FluentArgs, FluentResource, FluentValue};

use crate::locale::Locale;

/// Embedded locale files.
const EN_FTL: &str = include_str!("locales/en.ftl");
const DE_FTL: &str = include_str!("locales/de.ftl");

/// Translation catalogs for every site locale.
///
/// Uses the concurrent FluentBundle variant so one instance can be shared
/// process-wide.
pub struct I18n {
    en: FluentBundle<FluentResource>,
    de: FluentBundle<FluentResource>,
}

fn build_bundle(locale: Locale, ftl: &str) -> FluentBundle<FluentResource> {
    let resource = FluentResource::try_new(ftl.to_string()).expect("Failed to parse FTL resource");

    let mut bundle = FluentBundle::new_concurrent(vec![locale.langid()]);
    // Terminal output has no use for bidi isolation marks around arguments
    bundle.set_use_isolating(false);
    bundle.add_resource(resource).expect("Failed to add FTL resource to bundle");
    bundle
}

impl I18n {
    /// Load the embedded catalogs.
    pub fn new() -> Self {
        Self { en: build_bundle(Locale::En, EN_FTL), de: build_bundle(Locale::De, DE_FTL) }
    }

    const fn bundle(&self, locale: Locale) -> &FluentBundle<FluentResource> {
        match locale {
            Locale::En => &self.en,
            Locale::De => &self.de,
        }
    }

    /// Whether `key` exists in the catalog for `locale`.
    pub fn has_message(&self, locale: Locale, key: &str) -> bool {
        self.bundle(locale).has_message(key)
    }

    /// Translate a message by key.
    ///
    /// If the key is not found, returns the key itself as a fallback.
    pub fn translate(&self, locale: Locale, key: &str, args: Option<&[(&str, &str)]>) -> String {
        let bundle = self.bundle(locale);

        let Some(msg) = bundle.get_message(key) else {
            tracing::warn!(key, %locale, "Missing translation key");
            return key.to_string();
        };

        let Some(pattern) = msg.value() else {
            return key.to_string();
        };

        let mut errors = vec![];

        let result = if let Some(args) = args {
            let mut fluent_args = FluentArgs::new();
            for (k, v) in args {
                fluent_args.set(*k, FluentValue::from(*v));
            }
            bundle.format_pattern(pattern, Some(&fluent_args), &mut errors)
        } else {
            bundle.format_pattern(pattern, None, &mut errors)
        };

        if !errors.is_empty() {
            tracing::warn!(key, errors = ?errors, "Translation errors");
        }

        result.into_owned()
    }
}

impl Default for I18n {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for I18n {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("I18n").field("locales", &Locale::ALL).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_both_catalogs_load() {
        let i18n = I18n::new();
        assert_eq!(i18n.translate(Locale::En, "nav-services", None), "Services");
        assert_eq!(i18n.translate(Locale::De, "nav-services", None), "Leistungen");
    }

    #[test]
    fn test_missing_key_fallback() {
        let i18n = I18n::new();
        assert_eq!(i18n.translate(Locale::De, "nonexistent-key", None), "nonexistent-key");
    }

    #[test]
    fn test_arguments_are_not_isolated() {
        let i18n = I18n::new();
        let msg = i18n.translate(Locale::En, "msg-redirected", Some(&[("locale", "de"), ("path", "/de")]));
        assert_eq!(msg, "Saved language is de. Redirecting to /de");
    }

    #[test]
    fn test_catalogs_have_same_keys() {
        let i18n = I18n::new();
        let keys = |ftl: &str| -> Vec<String> {
            ftl.lines()
                .filter(|line| !line.starts_with('#') && line.contains(" = "))
                .filter_map(|line| line.split(" = ").next().map(str::to_string))
                .collect()
        };
        for key in keys(EN_FTL) {
            assert!(i18n.has_message(Locale::De, &key), "German catalog lacks '{key}'");
        }
        for key in keys(DE_FTL) {
            assert!(i18n.has_message(Locale::En, &key), "English catalog lacks '{key}'");
        }
    }
}
