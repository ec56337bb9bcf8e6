//! Configuration module
//!
//! Service settings shared by every command, sourced from flags or the
//! environment by clap and validated before first use.

use std::time::Duration;

use dossier_client::{Credential, DossierClient, PollPolicy};

/// CLI configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Service endpoint, e.g. "https://my-resource.openai.azure.com"
    pub endpoint: String,
    /// Model deployment used for answer generation
    pub deployment: String,
    /// API version pinned on every request
    pub api_version: String,
    /// Shared key, if key auth is used
    pub api_key: Option<String>,
    /// Bearer token, if token auth is used
    pub bearer_token: Option<String>,
    /// Reuse an already-uploaded file instead of uploading again
    pub file_id: Option<String>,
    /// Delay between ingest status checks
    pub poll_interval: Duration,
    /// Overall bound on the ingest wait; `None` polls until terminal
    pub poll_timeout: Option<Duration>,
}

impl Config {
    /// Credential to present to the service
    ///
    /// A bearer token wins over a shared key when both are set.
    pub fn credential(&self) -> Credential {
        if let Some(token) = &self.bearer_token {
            Credential::Bearer(token.clone())
        } else {
            Credential::ApiKey(self.api_key.clone().unwrap_or_default())
        }
    }

    /// Service client configured from these settings
    pub fn client(&self) -> DossierClient {
        DossierClient::new(
            self.endpoint.clone(),
            self.api_version.clone(),
            self.credential(),
        )
    }

    /// Poll policy for ingest waits
    pub fn poll_policy(&self) -> PollPolicy {
        PollPolicy {
            interval: self.poll_interval,
            timeout: self.poll_timeout,
        }
    }

    /// Validates the configuration
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.endpoint.is_empty() {
            anyhow::bail!("endpoint cannot be empty");
        }

        if !self.endpoint.starts_with("http://") && !self.endpoint.starts_with("https://") {
            anyhow::bail!("endpoint must start with http:// or https://");
        }

        if self.deployment.is_empty() {
            anyhow::bail!("deployment cannot be empty");
        }

        if self.api_version.is_empty() {
            anyhow::bail!("api version cannot be empty");
        }

        if self.api_key.is_none() && self.bearer_token.is_none() {
            anyhow::bail!("either an api key or a bearer token must be provided");
        }

        if self.poll_interval.is_zero() {
            anyhow::bail!("poll interval must be greater than 0");
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_config() -> Config {
        Config {
            endpoint: "https://svc.example.com".to_string(),
            deployment: "gpt-4.1".to_string(),
            api_version: "2025-04-01-preview".to_string(),
            api_key: Some("secret".to_string()),
            bearer_token: None,
            file_id: None,
            poll_interval: Duration::from_secs(5),
            poll_timeout: Some(Duration::from_secs(600)),
        }
    }

    #[test]
    fn test_valid_config_passes() {
        assert!(valid_config().validate().is_ok());
    }

    #[test]
    fn test_config_validation() {
        let mut config = valid_config();

        config.endpoint = "not-a-url".to_string();
        assert!(config.validate().is_err());

        config.endpoint = "https://svc.example.com".to_string();
        assert!(config.validate().is_ok());

        config.deployment = String::new();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_some_credential_is_required() {
        let mut config = valid_config();
        config.api_key = None;
        assert!(config.validate().is_err());

        config.bearer_token = Some("token".to_string());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_bearer_token_wins_over_api_key() {
        let mut config = valid_config();
        config.bearer_token = Some("token".to_string());

        assert!(matches!(config.credential(), Credential::Bearer(_)));
    }
}
