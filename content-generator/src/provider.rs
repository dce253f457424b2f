use dailyconcept_core::{AppConfig, CoreError, GenerationRequest, ProviderError};
use reqwest::Client;
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, info, warn};

/// Something that turns a generation request into an (unvalidated) payload.
pub trait ContentProvider {
    async fn generate(&self, request: &GenerationRequest) -> Result<Value, CoreError>;
}

/// Posts requests to `{base_url}/generate`.
pub struct HttpContentProvider {
    client: Client,
    endpoint: String,
    timeout: Duration,
}

impl HttpContentProvider {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, CoreError> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            endpoint: format!("{}/generate", base_url.trim_end_matches('/')),
            timeout,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn map_transport_error(&self, error: reqwest::Error) -> ProviderError {
        if error.is_timeout() {
            ProviderError::Timeout {
                seconds: self.timeout.as_secs(),
            }
        } else {
            ProviderError::Network {
                reason: error.to_string(),
            }
        }
    }
}

impl ContentProvider for HttpContentProvider {
    async fn generate(&self, request: &GenerationRequest) -> Result<Value, CoreError> {
        debug!("Requesting content for '{}' from {}", request.topic, self.endpoint);

        let response = self
            .client
            .post(&self.endpoint)
            .json(request)
            .send()
            .await
            .map_err(|e| self.map_transport_error(e))?;

        let status = response.status();
        if !status.is_success() {
            warn!("Provider answered {} for '{}'", status, request.topic);
            return Err(ProviderError::Status {
                status_code: status.as_u16(),
            }
            .into());
        }

        let body = response
            .json::<Value>()
            .await
            .map_err(|e| ProviderError::InvalidResponse {
                details: e.to_string(),
            })?;
        Ok(body)
    }
}

/// Stands in when no provider URL is configured; every call fails.
#[derive(Debug, Default, Clone, Copy)]
pub struct UnconfiguredProvider;

impl ContentProvider for UnconfiguredProvider {
    async fn generate(&self, _request: &GenerationRequest) -> Result<Value, CoreError> {
        Err(ProviderError::NotConfigured.into())
    }
}

/// HTTP when a base URL is configured, otherwise [`UnconfiguredProvider`].
pub enum ConfiguredProvider {
    Http(HttpContentProvider),
    Unconfigured(UnconfiguredProvider),
}

impl ConfiguredProvider {
    pub fn from_config(config: &AppConfig) -> Result<Self, CoreError> {
        match config.api_base_url.as_deref() {
            Some(base_url) => {
                let provider = HttpContentProvider::new(base_url, config.request_timeout())?;
                info!("Using content provider at {}", provider.endpoint());
                Ok(ConfiguredProvider::Http(provider))
            }
            None => {
                info!("No content provider configured");
                Ok(ConfiguredProvider::Unconfigured(UnconfiguredProvider))
            }
        }
    }
}

impl ContentProvider for ConfiguredProvider {
    async fn generate(&self, request: &GenerationRequest) -> Result<Value, CoreError> {
        match self {
            ConfiguredProvider::Http(provider) => provider.generate(request).await,
            ConfiguredProvider::Unconfigured(provider) => provider.generate(request).await,
        }
    }
}
