//! Internationalization (i18n) support.
//!
//! Uses Project Fluent for localization, embedding the English and German
//! `.ftl` catalogs in the binary. Visitor-facing strings (validation
//! messages, relay errors, navigation labels) are looked up in the locale of
//! the page; command-line status lines use the detected display locale.
//!
//! # Usage
//!
//! ```rust
//! use raniclean_site::locale::Locale;
//! use raniclean_site::t;
//!
//! let label = t!(Locale::De, "nav-contact");
//! assert_eq!(label, "Kontakt");
//!
//! let msg = t!(Locale::En, "msg-switching", "from" => "en", "to" => "de", "path" => "/de");
//! assert_eq!(msg, "Switching from en to de: /de");
//! ```

mod bundle;
mod locales;

pub use bundle::I18n;
pub use locales::{detect_locale, normalize_locale, resolve_locale};

use std::sync::OnceLock;

use crate::locale::Locale;

/// Global i18n instance, built on first use.
static I18N: OnceLock<I18n> = OnceLock::new();

/// Get the global i18n instance.
pub fn get() -> &'static I18n {
    I18N.get_or_init(I18n::new)
}

/// Get a translation by key.
///
/// Prefer using the `t!()` macro for ergonomic access.
pub fn translate(locale: Locale, key: &str) -> String {
    get().translate(locale, key, None)
}

/// Get a translation with arguments.
///
/// Prefer using the `t!()` macro for ergonomic access.
pub fn translate_with_args(locale: Locale, key: &str, args: &[(&str, &str)]) -> String {
    get().translate(locale, key, Some(args))
}

/// Translation macro for convenient access to localized strings.
///
/// # Examples
///
/// ```rust,ignore
/// let msg = t!(locale, "form-success");
/// let msg = t!(locale, "msg-redirected", "locale" => "de", "path" => "/de/about");
/// ```
#[macro_export]
macro_rules! t {
    ($locale:expr, $key:expr) => {
        $crate::i18n::translate($locale, $key)
    };
    ($locale:expr, $key:expr, $($k:expr => $v:expr),+ $(,)?) => {{
        let args: &[(&str, &str)] = &[$(($k, $v)),+];
        $crate::i18n::translate_with_args($locale, $key, args)
    }};
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_global_instance_is_shared() {
        assert!(std::ptr::eq(get(), get()));
    }

    #[test]
    fn test_macro_forms() {
        assert_eq!(t!(Locale::En, "form-error-title"), "Error");
        assert_eq!(t!(Locale::De, "form-error-title"), "Fehler");
        assert_eq!(
            t!(Locale::De, "msg-unchanged", "locale" => "de"),
            "Seite wird bereits in der bevorzugten Sprache angezeigt (de)."
        );
    }
}
