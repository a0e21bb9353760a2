//! Slack incoming-webhook notifier -- posts `{"text": ...}` to the configured URL.

use reqwest::Client;
use serde_json::json;
use url::Url;

use crate::error::NotifyError;
use crate::integrations::traits::Notifier;
use crate::storage::HttpConfig;

pub struct SlackWebhook {
    client: Client,
}

impl SlackWebhook {
    /// Build a notifier with the configured timeout and user agent.
    pub fn new(http: &HttpConfig) -> Result<Self, NotifyError> {
        let client = Client::builder()
            .timeout(http.timeout())
            .user_agent(http.user_agent.as_str())
            .build()?;
        Ok(Self { client })
    }

    /// Check that `endpoint` is an absolute http(s) URL.
    pub fn validate_endpoint(endpoint: &str) -> Result<Url, NotifyError> {
        let url = Url::parse(endpoint)
            .map_err(|_| NotifyError::InvalidEndpoint(endpoint.to_string()))?;
        match url.scheme() {
            "http" | "https" if url.has_host() => Ok(url),
            _ => Err(NotifyError::InvalidEndpoint(endpoint.to_string())),
        }
    }
}

impl Notifier for SlackWebhook {
    async fn send(&self, endpoint: &str, text: &str) -> Result<(), NotifyError> {
        let url = Self::validate_endpoint(endpoint)?;
        let body = json!({ "text": text });

        let resp = self.client.post(url).json(&body).send().await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(NotifyError::Rejected {
                status: status.as_u16(),
                body,
            });
        }
        Ok(())
    }
}
