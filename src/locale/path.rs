//! Locale segment handling for site paths.
//!
//! Every page path starts with a locale segment (`/en`, `/de`). Only that
//! first segment is ever inspected or rewritten; the remainder of the path,
//! the query and the fragment are carried over byte for byte.

use super::Locale;

/// Split a path into its leading locale and the remainder after the locale
/// segment.
///
/// Returns `None` if the path does not begin with `/en` or `/de` followed by
/// `/`, `?`, `#` or the end of the string.
///
/// ```
/// use raniclean_site::locale::{split_locale, Locale};
///
/// assert_eq!(split_locale("/de/about?x=1"), Some((Locale::De, "/about?x=1")));
/// assert_eq!(split_locale("/english"), None);
/// ```
pub fn split_locale(path: &str) -> Option<(Locale, &str)> {
    let after_slash = path.strip_prefix('/')?;
    let segment_end = after_slash.find(['/', '?', '#']).unwrap_or(after_slash.len());
    let (segment, rest) = after_slash.split_at(segment_end);
    Locale::parse(segment).map(|locale| (locale, rest))
}

/// The locale encoded in a path's first segment, if any.
pub fn locale_of(path: &str) -> Option<Locale> {
    split_locale(path).map(|(locale, _)| locale)
}

/// Replace the locale segment of `path` with `target`.
///
/// Returns `None` when the path carries no locale segment. Occurrences of the
/// locale code further down the path are left alone.
pub fn rewrite_locale(path: &str, target: Locale) -> Option<String> {
    let (_, rest) = split_locale(path)?;
    Some(format!("/{}{}", target.as_str(), rest))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_locale() {
        assert_eq!(split_locale("/en"), Some((Locale::En, "")));
        assert_eq!(split_locale("/en/"), Some((Locale::En, "/")));
        assert_eq!(split_locale("/de/services"), Some((Locale::De, "/services")));
        assert_eq!(split_locale("/en#contact-form"), Some((Locale::En, "#contact-form")));
        assert_eq!(split_locale("/en?ref=ad"), Some((Locale::En, "?ref=ad")));
    }

    #[test]
    fn test_split_rejects_non_locale_paths() {
        assert_eq!(split_locale(""), None);
        assert_eq!(split_locale("/"), None);
        assert_eq!(split_locale("en/about"), None);
        assert_eq!(split_locale("/fr/about"), None);
        assert_eq!(split_locale("/enx/about"), None);
        assert_eq!(split_locale("/services/en"), None);
    }

    #[test]
    fn test_rewrite_only_touches_first_segment() {
        assert_eq!(
            rewrite_locale("/en/services-en-special", Locale::De).as_deref(),
            Some("/de/services-en-special")
        );
        assert_eq!(rewrite_locale("/de/about/de", Locale::En).as_deref(), Some("/en/about/de"));
    }

    #[test]
    fn test_rewrite_preserves_query_and_fragment() {
        assert_eq!(
            rewrite_locale("/en/contact?service=deep#contact-form", Locale::De).as_deref(),
            Some("/de/contact?service=deep#contact-form")
        );
    }

    #[test]
    fn test_rewrite_to_same_locale_is_identity() {
        assert_eq!(rewrite_locale("/de/imprint", Locale::De).as_deref(), Some("/de/imprint"));
    }

    #[test]
    fn test_rewrite_without_locale_segment() {
        assert_eq!(rewrite_locale("/about", Locale::De), None);
    }

    #[test]
    fn test_round_trip_restores_path() {
        let original = "/en/services/office?x=1#top";
        let german = rewrite_locale(original, Locale::De).unwrap_or_default();
        let back = rewrite_locale(&german, Locale::En).unwrap_or_default();
        assert_eq!(back, original);
    }
}
