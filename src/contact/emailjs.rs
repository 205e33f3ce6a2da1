//! EmailJS relay client.
//!
//! The site has no mail server of its own. Submissions go to the EmailJS
//! REST endpoint, which renders the configured template and delivers it.

use std::future::Future;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::config::EmailJsConfig;
use crate::error::{Error, Result};

/// Something that can deliver a contact request.
pub trait EmailRelay {
    /// Deliver one request. Any error means the request was not accepted.
    fn send(&self, params: &TemplateParams) -> impl Future<Output = Result<()>> + Send;
}

/// Variables the email template is rendered with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateParams {
    /// Visitor's name.
    pub from_name: String,
    /// Visitor's reply address.
    pub from_email: String,
    /// Phone number, or the localized "not provided" text.
    pub phone: String,
    /// Selected service value.
    pub service_type: String,
    /// Message body.
    pub message: String,
}

/// Body of `POST /api/v1.0/email/send`.
#[derive(Debug, Serialize)]
pub struct SendRequest<'a> {
    /// EmailJS service ID.
    pub service_id: &'a str,
    /// EmailJS template ID.
    pub template_id: &'a str,
    /// EmailJS public key.
    pub user_id: &'a str,
    /// Template variables.
    pub template_params: &'a TemplateParams,
}

/// HTTP client for the EmailJS REST API.
#[derive(Debug, Clone)]
pub struct EmailJsClient {
    http: reqwest::Client,
    config: EmailJsConfig,
}

impl EmailJsClient {
    /// Create a client. Fails if the configuration is incomplete.
    pub fn new(config: EmailJsConfig) -> Result<Self> {
        config.validate()?;

        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(concat!("raniclean-site/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self { http, config })
    }

    /// Configuration in use.
    pub const fn config(&self) -> &EmailJsConfig {
        &self.config
    }

    /// Request body for `params`.
    pub fn request_body<'a>(&'a self, params: &'a TemplateParams) -> SendRequest<'a> {
        SendRequest {
            service_id: &self.config.service_id,
            template_id: &self.config.template_id,
            user_id: &self.config.public_key,
            template_params: params,
        }
    }
}

impl EmailRelay for EmailJsClient {
    async fn send(&self, params: &TemplateParams) -> Result<()> {
        let body = self.request_body(params);

        tracing::debug!(
            endpoint = %self.config.endpoint,
            service_id = body.service_id,
            template_id = body.template_id,
            "Sending contact request to EmailJS"
        );

        let response = self.http.post(&self.config.endpoint).json(&body).send().await?;
        let status = response.status();

        if status.is_success() {
            return Ok(());
        }

        let text = response.text().await.unwrap_or_default();
        Err(Error::relay(format!("EmailJS returned {status}: {}", text.trim())))
    }
}
