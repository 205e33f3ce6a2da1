//! Contact form: validation, relay submission and draft retention.
//!
//! A submission is validated first; every failing field is reported with a
//! message in the page's locale. Valid submissions are turned into the
//! template parameters expected by the email relay and handed to an
//! [`EmailRelay`]. When the relay fails the visitor sees a generic localized
//! error and the form is kept as a [`ContactDraft`] for a manual retry.

mod draft;
mod emailjs;
mod validation;

pub use draft::{ContactDraft, DraftStore};
pub use emailjs::{EmailJsClient, EmailRelay, SendRequest, TemplateParams};
pub use validation::{Field, FieldError, is_valid_email};

use bon::Builder;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::locale::Locale;
use crate::t;

/// Minimum length of the visitor's name, in UTF-16 code units.
pub const NAME_MIN_CHARS: usize = 2;

/// Minimum length of the message, in UTF-16 code units.
pub const MESSAGE_MIN_CHARS: usize = 10;

/// Services offered in the form's select box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ServiceKind {
    /// Private homes.
    Home,
    /// Offices and commercial space.
    Office,
    /// One-off deep cleaning.
    Deep,
}

impl ServiceKind {
    /// All options, in select-box order.
    pub const ALL: [Self; 3] = [Self::Home, Self::Office, Self::Deep];

    /// Value submitted by the select box.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::Office => "office",
            Self::Deep => "deep",
        }
    }

    /// Parse a submitted value.
    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.as_str() == value)
    }

    /// Localized option label.
    pub fn label(self, locale: Locale) -> String {
        let key = match self {
            Self::Home => "form-service-home",
            Self::Office => "form-service-office",
            Self::Deep => "form-service-deep",
        };
        t!(locale, key)
    }
}

/// A contact form submission as entered by the visitor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Builder)]
#[builder(on(String, into))]
pub struct ContactForm {
    /// Visitor's name.
    pub name: String,
    /// Reply address.
    pub email: String,
    /// Optional phone number.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    /// Selected service value (`home`, `office`, `deep`).
    pub service: String,
    /// Free-text message.
    pub message: String,
}

impl ContactForm {
    /// Check every field. An empty result means the form is valid.
    pub fn validate(&self) -> Vec<FieldError> {
        validation::validate(self)
    }

    /// Validate and return the messages localized for `locale`.
    pub fn check(&self, locale: Locale) -> Result<()> {
        let errors = self.validate();
        if errors.is_empty() {
            Ok(())
        } else {
            Err(Error::Validation(errors.iter().map(|e| e.message(locale)).collect()))
        }
    }

    /// Relay template parameters for this submission.
    ///
    /// `phone_fallback` replaces a missing or blank phone number.
    pub fn template_params(&self, phone_fallback: &str) -> TemplateParams {
        let phone = self
            .phone
            .as_deref()
            .filter(|phone| !phone.is_empty())
            .unwrap_or(phone_fallback)
            .to_string();

        TemplateParams {
            from_name: self.name.clone(),
            from_email: self.email.clone(),
            phone,
            service_type: self.service.clone(),
            message: self.message.clone(),
        }
    }
}

/// Validate `form` and send it through `relay`.
///
/// Validation failures come back as [`Error::Validation`] with one localized
/// line per failing field. Relay failures are logged and replaced by the
/// generic localized [`Error::Relay`] message.
pub async fn submit<R: EmailRelay>(relay: &R, form: &ContactForm, locale: Locale) -> Result<TemplateParams> {
    form.check(locale)?;

    let params = form.template_params(&t!(locale, "form-phone-not-provided"));

    if let Err(e) = relay.send(&params).await {
        tracing::error!(error = %e, "Email relay failed");
        return Err(Error::relay(t!(locale, "form-error")));
    }

    tracing::info!(service = %params.service_type, "Contact request sent");
    Ok(params)
}
