use crate::offline::offline_generate;
use crate::policy::{FailureAction, GenerationMode};
use crate::provider::ContentProvider;
use crate::validator::{validate_content, validate_response};
use dailyconcept_core::{
    AppConfig, CoreError, ErrorExt, GeneratedContent, GenerationRequest, ProviderError,
};
use std::time::Duration;
use tokio::time::{sleep, timeout};
use tracing::{info, warn};

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Simulated latency of the offline path, sampled uniformly per call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MockDelay {
    pub min_ms: u64,
    pub max_ms: u64,
}

impl MockDelay {
    pub const NONE: MockDelay = MockDelay {
        min_ms: 0,
        max_ms: 0,
    };

    pub fn sample(&self) -> Duration {
        if self.max_ms <= self.min_ms {
            return Duration::from_millis(self.min_ms);
        }
        Duration::from_millis(fastrand::u64(self.min_ms..=self.max_ms))
    }
}

impl Default for MockDelay {
    fn default() -> Self {
        Self {
            min_ms: 1000,
            max_ms: 2000,
        }
    }
}

/// Produces content that satisfies the content contract.
///
/// Calls hold no shared mutable state; dropping the returned future cancels
/// the in-flight request or delay and nothing partial is kept.
pub struct ContentGenerationService<P> {
    provider: P,
    mode: GenerationMode,
    timeout: Duration,
    mock_delay: MockDelay,
}

impl<P: ContentProvider> ContentGenerationService<P> {
    pub fn new(provider: P, mode: GenerationMode) -> Self {
        Self {
            provider,
            mode,
            timeout: DEFAULT_TIMEOUT,
            mock_delay: MockDelay::default(),
        }
    }

    pub fn from_config(provider: P, config: &AppConfig) -> Self {
        Self::new(provider, GenerationMode::from_config(config))
            .with_timeout(config.request_timeout())
            .with_mock_delay(MockDelay {
                min_ms: config.mock_delay_min_ms,
                max_ms: config.mock_delay_max_ms,
            })
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_mock_delay(mut self, mock_delay: MockDelay) -> Self {
        self.mock_delay = mock_delay;
        self
    }

    pub fn mode(&self) -> GenerationMode {
        self.mode
    }

    pub async fn generate(
        &self,
        request: &GenerationRequest,
    ) -> Result<GeneratedContent, CoreError> {
        if request.topic.trim().is_empty() {
            return Err(CoreError::InvalidInput {
                message: "Topic must not be empty".to_string(),
            });
        }
        if !self.mode.uses_provider() {
            return self.generate_offline(request).await;
        }

        match self.request_from_provider(request).await {
            Ok(content) => {
                info!("Generated content for '{}' via provider", request.topic);
                Ok(content)
            }
            Err(error) => {
                error.log_error();
                match self.mode.on_provider_failure() {
                    FailureAction::Fallback => {
                        warn!(
                            "Provider failed for '{}', falling back to offline content",
                            request.topic
                        );
                        self.generate_offline(request).await
                    }
                    FailureAction::Fail => Err(CoreError::GenerationFailed),
                }
            }
        }
    }

    /// Provider call bounded by the timeout, then validated. Both a hung call
    /// and a payload that breaks the contract count as failures.
    async fn request_from_provider(
        &self,
        request: &GenerationRequest,
    ) -> Result<GeneratedContent, CoreError> {
        let payload = timeout(self.timeout, self.provider.generate(request))
            .await
            .map_err(|_| ProviderError::Timeout {
                seconds: self.timeout.as_secs(),
            })??;
        let content = validate_response(&payload)?;
        Ok(content)
    }

    /// Offline content goes through the same contract check as provider
    /// payloads.
    async fn generate_offline(
        &self,
        request: &GenerationRequest,
    ) -> Result<GeneratedContent, CoreError> {
        let delay = self.mock_delay.sample();
        if !delay.is_zero() {
            sleep(delay).await;
        }
        let content = offline_generate(&request.topic, request.depth);
        validate_content(&content)?;
        Ok(content)
    }
}
