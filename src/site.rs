//! The site's pages and their localized routes.

use serde::Serialize;

use crate::locale::{Locale, split_locale};

/// A page of the marketing site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Page {
    /// Landing page.
    Home,
    /// Service catalogue.
    Services,
    /// Company background.
    About,
    /// Contact form.
    Contact,
    /// Legal imprint (linked from the footer only).
    Imprint,
}

impl Page {
    /// Every page, in navigation order.
    pub const ALL: [Self; 5] = [Self::Home, Self::Services, Self::About, Self::Contact, Self::Imprint];

    /// Route below the locale segment.
    pub const fn route(self) -> &'static str {
        match self {
            Self::Home => "/",
            Self::Services => "/services",
            Self::About => "/about",
            Self::Contact => "/contact",
            Self::Imprint => "/imprint",
        }
    }

    /// Translation key of the navigation label.
    pub const fn label_key(self) -> &'static str {
        match self {
            Self::Home => "nav-home",
            Self::Services => "nav-services",
            Self::About => "nav-about",
            Self::Contact => "nav-contact",
            Self::Imprint => "nav-imprint",
        }
    }

    /// Whether the page appears in the header navigation.
    pub const fn in_header(self) -> bool {
        !matches!(self, Self::Imprint)
    }

    /// Localized navigation label.
    pub fn label(self, locale: Locale) -> String {
        crate::i18n::translate(locale, self.label_key())
    }

    /// Full path of the page in `locale`.
    pub fn href(self, locale: Locale) -> String {
        match self {
            Self::Home => format!("/{locale}"),
            _ => format!("/{locale}{}", self.route()),
        }
    }

    /// Header call-to-action: its label and the page it opens.
    pub fn book_now(locale: Locale) -> (String, String) {
        (crate::i18n::translate(locale, "nav-book-now"), Self::Contact.href(locale))
    }

    /// Identify the page a path points at.
    ///
    /// Query and fragment are ignored, as is a trailing slash.
    pub fn from_path(path: &str) -> Option<(Locale, Self)> {
        let (locale, rest) = split_locale(path)?;
        let route = rest.split(['?', '#']).next().unwrap_or_default();
        let route = route.strip_suffix('/').unwrap_or(route);
        let page = match route {
            "" => Self::Home,
            _ => Self::ALL.into_iter().find(|page| page.route() == route)?,
        };
        Some((locale, page))
    }
}
