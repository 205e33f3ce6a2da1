//! Field validation rules.

use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use super::{ContactForm, MESSAGE_MIN_CHARS, NAME_MIN_CHARS, ServiceKind};
use crate::locale::Locale;

/// Local part and domain of an address. Leading dots and consecutive dots
/// are rejected separately because `regex` has no lookaround.
static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^[a-z0-9_'+\-.]*[a-z0-9_+\-]@([a-z0-9][a-z0-9\-]*\.)+[a-z]{2,}$")
        .expect("email pattern is valid")
});

/// A form field that can fail validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    /// Visitor's name.
    Name,
    /// Reply address.
    Email,
    /// Service selection.
    Service,
    /// Message body.
    Message,
}

/// One failed rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FieldError {
    /// Offending field.
    pub field: Field,
    /// Translation key of the message.
    pub key: &'static str,
}

impl FieldError {
    const fn new(field: Field, key: &'static str) -> Self {
        Self { field, key }
    }

    /// Message text in `locale`.
    pub fn message(&self, locale: Locale) -> String {
        crate::i18n::translate(locale, self.key)
    }
}

/// Syntactic email check.
pub fn is_valid_email(email: &str) -> bool {
    !email.starts_with('.') && !email.contains("..") && EMAIL_RE.is_match(email)
}

/// Length as a browser form counts it: UTF-16 code units.
fn text_len(text: &str) -> usize {
    text.encode_utf16().count()
}

pub(super) fn validate(form: &ContactForm) -> Vec<FieldError> {
    let mut errors = Vec::new();

    if text_len(&form.name) < NAME_MIN_CHARS {
        errors.push(FieldError::new(Field::Name, "validation-name-min"));
    }
    if !is_valid_email(&form.email) {
        errors.push(FieldError::new(Field::Email, "validation-email-invalid"));
    }
    if ServiceKind::parse(&form.service).is_none() {
        errors.push(FieldError::new(Field::Service, "validation-service-required"));
    }
    if text_len(&form.message) < MESSAGE_MIN_CHARS {
        errors.push(FieldError::new(Field::Message, "validation-message-min"));
    }

    errors
}
