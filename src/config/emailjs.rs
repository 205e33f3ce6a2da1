//! EmailJS relay settings.
//!
//! The public key, service ID and template ID are not secrets: the browser
//! widget ships them in the page bundle.

use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::{Error, Result};

/// Default REST endpoint.
pub const DEFAULT_ENDPOINT: &str = "https://api.emailjs.com/api/v1.0/email/send";

/// Settings for the EmailJS relay.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmailJsConfig {
    /// REST endpoint receiving send requests.
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// EmailJS service ID.
    #[serde(default = "default_service_id")]
    pub service_id: String,

    /// EmailJS template ID.
    #[serde(default = "default_template_id")]
    pub template_id: String,

    /// EmailJS public key (sent as `user_id`).
    #[serde(default = "default_public_key")]
    pub public_key: String,

    /// Request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

fn default_service_id() -> String {
    "service_yf7pdez".to_string()
}

fn default_template_id() -> String {
    "template_5pqvlwc".to_string()
}

fn default_public_key() -> String {
    "kbwlY4Oxr7UscFPR3".to_string()
}

const fn default_timeout_secs() -> u64 {
    10
}

impl Default for EmailJsConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            service_id: default_service_id(),
            template_id: default_template_id(),
            public_key: default_public_key(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl EmailJsConfig {
    /// Check the settings are usable.
    pub fn validate(&self) -> Result<()> {
        let url = Url::parse(&self.endpoint)
            .map_err(|e| Error::config(format!("Invalid EmailJS endpoint '{}': {}", self.endpoint, e)))?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(Error::config(format!("EmailJS endpoint must be http(s), got '{}'", url.scheme())));
        }

        for (name, value) in [
            ("service_id", &self.service_id),
            ("template_id", &self.template_id),
            ("public_key", &self.public_key),
        ] {
            if value.trim().is_empty() {
                return Err(Error::config(format!("EmailJS {name} is empty")));
            }
        }

        if self.timeout_secs == 0 {
            return Err(Error::config("EmailJS timeout_secs must be positive"));
        }

        Ok(())
    }
}
